use std::collections::BTreeMap;

use super::ModelError;

/// A single fixed argument for a model function.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Integer(i64),
    Text(String),
    Flag(bool),
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Flag(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

/// Open-ended named arguments fixed when a model is bound.
///
/// Parameters are not checked at bind time. A model that needs a missing or
/// mistyped parameter fails with a configuration error the first time it
/// runs.
///
/// ```
/// use pnm_models::catalog::ModelParams;
///
/// let params = ModelParams::new()
///     .with("pore_prop", "pore.diameter")
///     .with("mode", "max");
///
/// assert_eq!(params.text("mode").unwrap(), "max");
/// assert!(params.number("value").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelParams {
    values: BTreeMap<String, ParamValue>,
}

impl ModelParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns these parameters with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.values.insert(name.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn required(&self, name: &str) -> Result<&ParamValue, ModelError> {
        self.get(name).ok_or_else(|| ModelError::MissingParameter {
            name: name.to_owned(),
        })
    }

    /// Returns a numeric parameter. Integers are widened to `f64`.
    ///
    /// # Errors
    ///
    /// Fails if the parameter is absent or not numeric.
    pub fn number(&self, name: &str) -> Result<f64, ModelError> {
        match self.required(name)? {
            ParamValue::Number(value) => Ok(*value),
            #[allow(clippy::cast_precision_loss)]
            ParamValue::Integer(value) => Ok(*value as f64),
            other => Err(mistyped(name, "a number", other)),
        }
    }

    /// Returns a numeric parameter, or `default` if it is absent.
    ///
    /// # Errors
    ///
    /// Fails if the parameter is present but not numeric.
    pub fn number_or(&self, name: &str, default: f64) -> Result<f64, ModelError> {
        if self.get(name).is_some() {
            self.number(name)
        } else {
            Ok(default)
        }
    }

    /// Returns an integer parameter, or `default` if it is absent.
    ///
    /// # Errors
    ///
    /// Fails if the parameter is present but not an integer.
    pub fn integer_or(&self, name: &str, default: i64) -> Result<i64, ModelError> {
        match self.get(name) {
            None => Ok(default),
            Some(ParamValue::Integer(value)) => Ok(*value),
            Some(other) => Err(mistyped(name, "an integer", other)),
        }
    }

    /// Returns a text parameter.
    ///
    /// # Errors
    ///
    /// Fails if the parameter is absent or not text.
    pub fn text(&self, name: &str) -> Result<&str, ModelError> {
        match self.required(name)? {
            ParamValue::Text(value) => Ok(value),
            other => Err(mistyped(name, "text", other)),
        }
    }

    /// Returns a text parameter, or `default` if it is absent.
    ///
    /// # Errors
    ///
    /// Fails if the parameter is present but not text.
    pub fn text_or<'a>(&'a self, name: &str, default: &'a str) -> Result<&'a str, ModelError> {
        if self.get(name).is_some() {
            self.text(name)
        } else {
            Ok(default)
        }
    }
}

fn mistyped(name: &str, expected: &str, found: &ParamValue) -> ModelError {
    ModelError::InvalidParameter {
        name: name.to_owned(),
        reason: format!("expected {expected}, found {found:?}"),
    }
}
