use std::result;

use thiserror::Error;

/// A specialized `Result` type for assembly operations.
pub type AssemblyResult<T> = result::Result<T, AssemblyError>;

/// Errors returned while assembling a metrics payload.
///
/// Both kinds are non-fatal to the assembler; the usual caller policy is to
/// skip the observation, log, and continue with the rest of the scrape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssemblyError {
    /// No resource has been created under the key a metric should attach to.
    /// Carries the name of the metric that could not be created.
    #[error("cannot create metric '{0}' as no resource exists for it to be attached")]
    ResourceNotFound(String),
    /// No metric has been created under the referenced resource key and
    /// metric name. Carries the name of the metric.
    #[error("cannot retrieve datapoints from metric '{0}' as it does not currently exist")]
    MetricNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_metric() {
        assert_eq!(
            AssemblyError::ResourceNotFound("m1".to_owned()).to_string(),
            "cannot create metric 'm1' as no resource exists for it to be attached"
        );
        assert_eq!(
            AssemblyError::MetricNotFound("m1".to_owned()).to_string(),
            "cannot retrieve datapoints from metric 'm1' as it does not currently exist"
        );
    }
}
