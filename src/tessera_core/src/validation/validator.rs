use std::fmt::Display;

use serde_json::{Map, Value};

use super::{ValidationError, ValidationErrors};

/// Reads typed fields out of a raw JSON object, recording every violation.
///
/// Readers return `None` when a field is missing or invalid; the error is
/// kept and reported by [`RequestValidator::finish`]. A JSON `null` counts as
/// absent.
pub struct RequestValidator<'a> {
    payload: Option<&'a Map<String, Value>>,
    errors: ValidationErrors,
}

impl<'a> RequestValidator<'a> {
    pub fn new(payload: &'a Value) -> Self {
        let mut errors = ValidationErrors::default();
        let payload = payload.as_object();
        if payload.is_none() {
            errors.push(ValidationError::new("body", "must be a JSON object"));
        }
        Self { payload, errors }
    }

    fn value(&self, field: &str) -> Option<&'a Value> {
        self.payload?.get(field).filter(|value| !value.is_null())
    }

    fn missing(&mut self, field: &str) {
        // Without an object there is nothing to report per field.
        if self.payload.is_some() {
            self.reject(field, "is required");
        }
    }

    pub fn reject(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError::new(field, message));
    }

    /// Adds an error against `field` unless `condition` holds.
    pub fn ensure(&mut self, condition: bool, field: &str, message: &str) {
        if !condition {
            self.reject(field, message);
        }
    }

    pub fn required_string(&mut self, field: &str) -> Option<&'a str> {
        match self.value(field) {
            None => {
                self.missing(field);
                None
            }
            Some(value) => self.as_string(field, value),
        }
    }

    pub fn optional_string(&mut self, field: &str) -> Option<&'a str> {
        let value = self.value(field)?;
        self.as_string(field, value)
    }

    pub fn required_bool(&mut self, field: &str) -> Option<bool> {
        match self.value(field) {
            None => {
                self.missing(field);
                None
            }
            Some(Value::Bool(flag)) => Some(*flag),
            Some(_) => {
                self.reject(field, "must be a boolean");
                None
            }
        }
    }

    /// Reads a required string and converts it with `parser`.
    pub fn parse<T, E>(
        &mut self,
        field: &str,
        parser: impl FnOnce(&'a str) -> Result<T, E>,
    ) -> Option<T>
    where
        E: Display,
    {
        let raw = self.required_string(field)?;
        self.check(field, raw, parser)
    }

    /// Like [`parse`](Self::parse) but an absent field is not an error.
    pub fn parse_optional<T, E>(
        &mut self,
        field: &str,
        parser: impl FnOnce(&'a str) -> Result<T, E>,
    ) -> Option<T>
    where
        E: Display,
    {
        let raw = self.optional_string(field)?;
        self.check(field, raw, parser)
    }

    /// Reads an optional array of strings; absent means empty.
    ///
    /// Element errors are reported as `field[index]`.
    pub fn optional_list<T, E>(
        &mut self,
        field: &str,
        mut parser: impl FnMut(&'a str) -> Result<T, E>,
    ) -> Option<Vec<T>>
    where
        E: Display,
    {
        let items = match self.value(field) {
            None => return Some(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(_) => {
                self.reject(field, "must be an array of strings");
                return None;
            }
        };

        let mut parsed = Vec::with_capacity(items.len());
        let mut valid = true;
        for (index, item) in items.iter().enumerate() {
            let element = format!("{field}[{index}]");
            match item {
                Value::String(raw) => match parser(raw.as_str()) {
                    Ok(value) => parsed.push(value),
                    Err(error) => {
                        self.reject(element, error.to_string());
                        valid = false;
                    }
                },
                _ => {
                    self.reject(element, "must be a string");
                    valid = false;
                }
            }
        }

        valid.then_some(parsed)
    }

    /// Returns every collected error, or the value produced by `build`.
    ///
    /// `build` runs only when no field failed, so it may rely on every
    /// required reader having returned `Some`.
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationErrors> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        build().ok_or_else(|| ValidationError::new("body", "is incomplete").into())
    }

    fn as_string(&mut self, field: &str, value: &'a Value) -> Option<&'a str> {
        match value {
            Value::String(raw) => Some(raw.as_str()),
            _ => {
                self.reject(field, "must be a string");
                None
            }
        }
    }

    /// Converts an already extracted string, recording the parser's error.
    pub fn check<T, E>(
        &mut self,
        field: &str,
        raw: &'a str,
        parser: impl FnOnce(&'a str) -> Result<T, E>,
    ) -> Option<T>
    where
        E: Display,
    {
        match parser(raw) {
            Ok(value) => Some(value),
            Err(error) => {
                self.reject(field, error.to_string());
                None
            }
        }
    }
}
