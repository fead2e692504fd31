use serde::Serialize;
use serde_json::{Map, Value};

/// One problem found while decoding a request, addressed by field name.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Types that can be decoded out of an untyped JSON document, reporting every
/// violation instead of stopping at the first one.
pub trait Validate: Sized {
    fn validate(value: Value) -> Result<Self, Vec<FieldViolation>>;
}

/// Reads typed fields out of a JSON object, collecting violations as it goes.
pub struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> FieldReader<'a> {
    pub fn new(value: &'a Value) -> Result<Self, Vec<FieldViolation>> {
        match value {
            Value::Object(fields) => Ok(Self {
                fields,
                violations: Vec::new(),
            }),
            _ => Err(vec![FieldViolation::new("body", "expected a JSON object")]),
        }
    }

    pub fn string(&mut self, field: &str) -> Option<String> {
        match self.fields.get(field) {
            Some(Value::String(value)) => Some(value.clone()),
            Some(_) => {
                self.violations.push(FieldViolation::new(field, "expected a string"));
                None
            }
            None => {
                self.violations.push(FieldViolation::new(field, "field required"));
                None
            }
        }
    }

    pub fn string_list(&mut self, field: &str) -> Option<Vec<String>> {
        let items = match self.fields.get(field) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                self.violations.push(FieldViolation::new(field, "expected an array of strings"));
                return None;
            }
            None => {
                self.violations.push(FieldViolation::new(field, "field required"));
                return None;
            }
        };

        let mut strings = Vec::with_capacity(items.len());
        let mut valid = true;
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(value) => strings.push(value.clone()),
                _ => {
                    valid = false;
                    self.violations.push(FieldViolation::new(
                        format!("{}[{}]", field, index),
                        "expected a string",
                    ));
                }
            }
        }

        valid.then_some(strings)
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_documents() {
        let value = json!(["not", "an", "object"]);

        let violations = FieldReader::new(&value).err().unwrap();

        assert_eq!(violations, vec![FieldViolation::new("body", "expected a JSON object")]);
    }

    #[test]
    fn reports_each_bad_list_element() {
        let value = json!({ "attendees": ["ann", 3, "bo", null] });
        let mut reader = FieldReader::new(&value).unwrap();

        assert_eq!(reader.string_list("attendees"), None);
        assert_eq!(
            reader.into_violations(),
            vec![
                FieldViolation::new("attendees[1]", "expected a string"),
                FieldViolation::new("attendees[3]", "expected a string"),
            ]
        );
    }

    #[test]
    fn accepts_empty_lists() {
        let value = json!({ "attendees": [] });
        let mut reader = FieldReader::new(&value).unwrap();

        assert_eq!(reader.string_list("attendees"), Some(vec![]));
        assert!(reader.into_violations().is_empty());
    }

    #[test]
    fn does_not_coerce_numbers_into_strings() {
        let value = json!({ "topic": 42 });
        let mut reader = FieldReader::new(&value).unwrap();

        assert_eq!(reader.string("topic"), None);
        assert_eq!(reader.string("date"), None);
        assert_eq!(
            reader.into_violations(),
            vec![
                FieldViolation::new("topic", "expected a string"),
                FieldViolation::new("date", "field required"),
            ]
        );
    }
}
