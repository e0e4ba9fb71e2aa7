//! Form schema domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Input widget kind for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Select,
    Number,
    Money,
    Textarea,
}

impl FieldType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Number | FieldType::Money)
    }
}

/// Default value of a field; numeric for number/money, text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

/// One field of a dynamic form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    pub default: FieldValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl FieldDescriptor {
    fn base(key: &str, label: &str, field_type: FieldType, default: FieldValue) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            field_type,
            required: false,
            default,
            options: None,
            min: None,
            max: None,
            step: None,
        }
    }

    pub fn text(key: &str, label: &str, default: &str) -> Self {
        Self::base(key, label, FieldType::Text, FieldValue::Text(default.to_string()))
    }

    pub fn textarea(key: &str, label: &str, default: &str) -> Self {
        Self::base(
            key,
            label,
            FieldType::Textarea,
            FieldValue::Text(default.to_string()),
        )
    }

    pub fn select(key: &str, label: &str, options: &[&str], default: &str) -> Self {
        let mut field = Self::base(
            key,
            label,
            FieldType::Select,
            FieldValue::Text(default.to_string()),
        );
        field.options = Some(options.iter().map(|o| o.to_string()).collect());
        field
    }

    pub fn number(key: &str, label: &str, default: f64) -> Self {
        Self::base(key, label, FieldType::Number, FieldValue::Number(default))
    }

    pub fn money(key: &str, label: &str, default: f64) -> Self {
        Self::base(key, label, FieldType::Money, FieldValue::Number(default))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn bounds(mut self, min: Option<f64>, max: Option<f64>, step: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self.step = step;
        self
    }

    /// Check the descriptor invariants: select fields carry options, and a
    /// numeric default sits inside whichever bounds are present.
    pub fn validate(&self) -> Result<()> {
        let invalid =
            |msg: String| -> Result<()> { Err(ValidationError::InvalidInput(msg).into()) };

        if self.field_type == FieldType::Select
            && self.options.as_ref().map_or(true, |o| o.is_empty())
        {
            return invalid(format!("select field '{}' has no options", self.key));
        }
        if self.options.is_some() && self.field_type != FieldType::Select {
            return invalid(format!("field '{}' has options but is not a select", self.key));
        }
        if self.field_type.is_numeric() {
            let FieldValue::Number(value) = self.default else {
                return invalid(format!("numeric field '{}' has a text default", self.key));
            };
            if self.min.is_some_and(|min| value < min) || self.max.is_some_and(|max| value > max)
            {
                return invalid(format!("default of '{}' is out of bounds", self.key));
            }
        }
        Ok(())
    }
}

/// A titled, ordered list of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub title: String,
    pub fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.key.as_str()).collect()
    }
}
