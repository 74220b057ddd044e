//! Environment property models

use serde::{Deserialize, Serialize};

/// Property value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Secure,
    Text,
    Integration,
    SingleSelect,
    Appconfig,
}

impl PropertyType {
    /// Wire name used in query filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Secure => "secure",
            PropertyType::Text => "text",
            PropertyType::Integration => "integration",
            PropertyType::SingleSelect => "single_select",
            PropertyType::Appconfig => "appconfig",
        }
    }
}

/// Pipeline or trigger environment property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Property name
    pub name: String,

    /// Property value (redacted for secure properties)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Property type
    #[serde(rename = "type")]
    pub property_type: PropertyType,

    /// Options for `single_select` properties
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Dot notation path for `integration` properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Whether the property is locked against overrides
    #[serde(default)]
    pub locked: bool,

    /// API URL for the property
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Property {
    /// A property carrying only a name, value and type, as sent when
    /// overriding trigger properties on a new run.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        property_type: PropertyType,
    ) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            property_type,
            options: Vec::new(),
            path: None,
            locked: false,
            href: None,
        }
    }
}

/// Response of the property list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertiesCollection {
    #[serde(default)]
    pub properties: Vec<Property>,
}
