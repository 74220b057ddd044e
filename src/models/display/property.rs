//! Environment property display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Property, PropertyType};
use crate::output::formatters::truncate_string;

/// Longest value shown in the table before truncation
const MAX_VALUE_WIDTH: usize = 48;

/// Property display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PropertyDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    pub property_type: String,

    /// Value, masked for secure properties
    #[tabled(rename = "VALUE")]
    pub value: String,

    #[tabled(rename = "LOCKED")]
    pub locked: bool,
}

impl From<Property> for PropertyDisplay {
    fn from(property: Property) -> Self {
        let value = match property.property_type {
            PropertyType::Secure => "********".to_string(),
            _ => property
                .value
                .as_deref()
                .map(|v| truncate_string(v, MAX_VALUE_WIDTH))
                .unwrap_or_default(),
        };

        Self {
            name: property.name,
            property_type: property.property_type.as_str().to_string(),
            value,
            locked: property.locked,
        }
    }
}
