use crate::config::ValueType;
use crate::data::NumberValue;

/// A raw scraped observation before it is coerced onto a data point.
///
/// Remote systems report values in whichever width their own data model
/// uses; the metric configuration decides the value type the data point
/// actually carries. Only the integer/double pair of coercions exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue {
    /// An integer-typed observation.
    Integer(i64),
    /// A float-typed observation.
    Float(f64),
}

impl RawValue {
    /// Coerce the observation onto the declared value type.
    ///
    /// Float observations coerced to [ValueType::Int] truncate toward zero;
    /// integer observations coerced to [ValueType::Double] convert exactly.
    pub fn coerce(self, target: ValueType) -> NumberValue {
        match (self, target) {
            (RawValue::Integer(value), ValueType::Int) => NumberValue::I64(value),
            (RawValue::Integer(value), ValueType::Double) => NumberValue::F64(value as f64),
            (RawValue::Float(value), ValueType::Int) => NumberValue::I64(value as i64),
            (RawValue::Float(value), ValueType::Double) => NumberValue::F64(value),
        }
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RawValue::Integer(10), NumberValue::I64(10))]
    #[case(RawValue::Float(10.0), NumberValue::I64(10))]
    #[case(RawValue::Float(10.7), NumberValue::I64(10))]
    #[case(RawValue::Float(-10.7), NumberValue::I64(-10))]
    fn coercion_to_int_truncates_toward_zero(
        #[case] raw: RawValue,
        #[case] expected: NumberValue,
    ) {
        assert_eq!(raw.coerce(ValueType::Int), expected);
    }

    #[rstest]
    #[case(RawValue::Integer(10), NumberValue::F64(10.0))]
    #[case(RawValue::Float(10.5), NumberValue::F64(10.5))]
    fn coercion_to_double_is_exact(#[case] raw: RawValue, #[case] expected: NumberValue) {
        assert_eq!(raw.coerce(ValueType::Double), expected);
    }
}
