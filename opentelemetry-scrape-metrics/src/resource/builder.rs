use opentelemetry::{KeyValue, StringValue};

use super::Resource;

/// Controls whether a single resource attribute is emitted.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct AttributeConfig {
    /// Whether the attribute is added to emitted resources.
    pub enabled: bool,
}

impl Default for AttributeConfig {
    fn default() -> Self {
        AttributeConfig { enabled: true }
    }
}

/// Configures which device identity attributes a [ResourceBuilder] emits.
///
/// Every attribute is enabled by default.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct DeviceAttributesConfig {
    /// Configuration for the `device.id` attribute.
    #[cfg_attr(feature = "serde", serde(rename = "device.id"))]
    pub device_id: AttributeConfig,
    /// Configuration for the `device.name` attribute.
    #[cfg_attr(feature = "serde", serde(rename = "device.name"))]
    pub device_name: AttributeConfig,
    /// Configuration for the `device.type` attribute.
    #[cfg_attr(feature = "serde", serde(rename = "device.type"))]
    pub device_type: AttributeConfig,
    /// Configuration for the `device.endpoint` attribute.
    #[cfg_attr(feature = "serde", serde(rename = "device.endpoint"))]
    pub device_endpoint: AttributeConfig,
}

/// Assembles a [Resource] from the device identity attributes enabled in its
/// configuration.
///
/// Setters record an attribute only when its configuration enables it.
/// [ResourceBuilder::emit] hands off the accumulated attributes and resets
/// the builder, so one builder can produce the resource for each scraped
/// device in turn.
#[derive(Debug)]
pub struct ResourceBuilder {
    config: DeviceAttributesConfig,
    attrs: Vec<KeyValue>,
}

impl ResourceBuilder {
    /// Create a builder emitting the attributes enabled in `config`.
    pub fn new(config: DeviceAttributesConfig) -> Self {
        ResourceBuilder {
            config,
            attrs: Vec::new(),
        }
    }

    /// Sets the `device.id` attribute.
    pub fn set_device_id(&mut self, value: impl Into<StringValue>) {
        if self.config.device_id.enabled {
            self.attrs.push(KeyValue::new("device.id", value.into()));
        }
    }

    /// Sets the `device.name` attribute.
    pub fn set_device_name(&mut self, value: impl Into<StringValue>) {
        if self.config.device_name.enabled {
            self.attrs.push(KeyValue::new("device.name", value.into()));
        }
    }

    /// Sets the `device.type` attribute.
    pub fn set_device_type(&mut self, value: impl Into<StringValue>) {
        if self.config.device_type.enabled {
            self.attrs.push(KeyValue::new("device.type", value.into()));
        }
    }

    /// Sets the `device.endpoint` attribute.
    pub fn set_device_endpoint(&mut self, value: impl Into<StringValue>) {
        if self.config.device_endpoint.enabled {
            self.attrs.push(KeyValue::new("device.endpoint", value.into()));
        }
    }

    /// Returns the accumulated [Resource] and resets the builder.
    ///
    /// A second call without intervening setters returns an empty resource.
    pub fn emit(&mut self) -> Resource {
        Resource::new(std::mem::take(&mut self.attrs))
    }
}
