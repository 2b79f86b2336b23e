use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownFieldError;

/// The four property attributes submitted for estimation.
///
/// Every field is always populated. Values that failed to parse are carried
/// as `NaN` and serialize as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub size: f64,
    pub bedrooms: f64,
    pub age: f64,
    pub location: f64,
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            size: 2000.0,
            bedrooms: 3.0,
            age: 10.0,
            location: 5.0,
        }
    }
}

impl FeatureVector {
    pub fn get(&self, field: FeatureField) -> f64 {
        match field {
            FeatureField::Size => self.size,
            FeatureField::Bedrooms => self.bedrooms,
            FeatureField::Age => self.age,
            FeatureField::Location => self.location,
        }
    }

    pub fn set(&mut self, field: FeatureField, value: f64) {
        let slot = match field {
            FeatureField::Size => &mut self.size,
            FeatureField::Bedrooms => &mut self.bedrooms,
            FeatureField::Age => &mut self.age,
            FeatureField::Location => &mut self.location,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureField {
    Size,
    Bedrooms,
    Age,
    Location,
}

impl FeatureField {
    pub const ALL: [FeatureField; 4] = [
        FeatureField::Size,
        FeatureField::Bedrooms,
        FeatureField::Age,
        FeatureField::Location,
    ];

    /// Wire name, identical to the JSON key in the request body.
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureField::Size => "size",
            FeatureField::Bedrooms => "bedrooms",
            FeatureField::Age => "age",
            FeatureField::Location => "location",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeatureField::Size => "Size (sqft)",
            FeatureField::Bedrooms => "Bedrooms",
            FeatureField::Age => "House Age (Years)",
            FeatureField::Location => "Location Rating (1-10)",
        }
    }

    /// Bounds shown by the input control. Nothing enforces them.
    pub fn advisory_range(self) -> Option<(f64, f64)> {
        match self {
            FeatureField::Location => Some((1.0, 10.0)),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "size" => Ok(FeatureField::Size),
            "bedrooms" => Ok(FeatureField::Bedrooms),
            "age" => Ok(FeatureField::Age),
            "location" => Ok(FeatureField::Location),
            other => Err(UnknownFieldError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_exact_wire_field_names() {
        let body = serde_json::to_value(FeatureVector::default()).expect("serialize");
        assert_eq!(
            body,
            serde_json::json!({
                "size": 2000.0,
                "bedrooms": 3.0,
                "age": 10.0,
                "location": 5.0
            })
        );
    }

    #[test]
    fn nan_fields_serialize_as_null() {
        let vector = FeatureVector {
            size: f64::NAN,
            ..FeatureVector::default()
        };
        let body = serde_json::to_value(vector).expect("serialize");
        assert!(body["size"].is_null());
        assert_eq!(body["bedrooms"], 3.0);
    }

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in FeatureField::ALL {
            assert_eq!(field.as_str().parse::<FeatureField>(), Ok(field));
        }
        assert_eq!(
            "garage".parse::<FeatureField>(),
            Err(UnknownFieldError("garage".to_string()))
        );
    }
}
