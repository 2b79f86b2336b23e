//! Form state: the feature vector the user is editing.

use shared::domain::{FeatureField, FeatureVector};

use crate::error::FormError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    vector: FeatureVector,
}

impl FormState {
    pub fn new(vector: FeatureVector) -> Self {
        Self { vector }
    }

    pub fn vector(&self) -> &FeatureVector {
        &self.vector
    }

    /// Commits raw text typed into the input named `field_name`.
    ///
    /// Unparseable text is stored as `NaN` and submitted as-is. Only an
    /// unknown field name is rejected.
    pub fn set_field(&mut self, field_name: &str, raw_value: &str) -> Result<(), FormError> {
        let field = field_name.parse::<FeatureField>()?;
        self.set(field, raw_value);
        Ok(())
    }

    pub fn set(&mut self, field: FeatureField, raw_value: &str) {
        let value = parse_numeric_input(raw_value);
        if value.is_nan() {
            tracing::debug!(field = field.as_str(), raw_value, "non-numeric form input");
        }
        self.vector.set(field, value);
    }

    /// Text the bound input control shows for the committed value.
    pub fn display_text(&self, field: FeatureField) -> String {
        format_field_value(self.vector.get(field))
    }
}

pub fn parse_numeric_input(raw_value: &str) -> f64 {
    raw_value.trim().parse::<f64>().unwrap_or(f64::NAN)
}

pub fn format_field_value(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}
