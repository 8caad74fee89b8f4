//! Partial-update document interpreter.
//!
//! A patch body is an ordered sequence of operations (`add`, `replace`,
//! `remove`, `test`) against the named fields of an update document. The
//! interpreter is explicit about the two reachable paths instead of walking
//! structures reflectively; anything else is an unknown path. One bad
//! operation rejects the whole sequence; callers apply to a scratch document
//! and only persist after the full sequence and re-validation succeed.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::api::point_of_interest::models::PointOfInterestForUpdate;
use crate::errors::ApiError;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Replace { path: String, value: Value },
    Remove { path: String },
    Test { path: String, value: Value },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("unknown patch path: {0}")]
    UnknownPath(String),
    #[error("invalid value for {path}: expected {expected}")]
    InvalidValue {
        path: &'static str,
        expected: &'static str,
    },
    #[error("cannot remove required field {0}")]
    RemoveRequired(&'static str),
    #[error("test operation failed at {0}")]
    TestFailed(&'static str),
}

impl From<PatchError> for ApiError {
    fn from(err: PatchError) -> Self {
        ApiError::Patch(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Description,
}

fn parse_path(path: &str) -> Result<Field, PatchError> {
    if path.eq_ignore_ascii_case("/name") {
        Ok(Field::Name)
    } else if path.eq_ignore_ascii_case("/description") {
        Ok(Field::Description)
    } else {
        Err(PatchError::UnknownPath(path.to_string()))
    }
}

/// Applies the operations in order, stopping at the first failure. The
/// document is left partially modified on error; callers must discard it.
pub fn apply_patch(
    document: &mut PointOfInterestForUpdate,
    operations: &[PatchOperation],
) -> Result<(), PatchError> {
    for operation in operations {
        match operation {
            PatchOperation::Add { path, value } | PatchOperation::Replace { path, value } => {
                set_field(document, parse_path(path)?, value)?;
            }
            PatchOperation::Remove { path } => {
                remove_field(document, parse_path(path)?)?;
            }
            PatchOperation::Test { path, value } => {
                test_field(document, parse_path(path)?, value)?;
            }
        }
    }
    Ok(())
}

fn set_field(
    document: &mut PointOfInterestForUpdate,
    field: Field,
    value: &Value,
) -> Result<(), PatchError> {
    match field {
        Field::Name => match value {
            Value::String(s) => {
                document.name = s.clone();
                Ok(())
            }
            _ => Err(PatchError::InvalidValue {
                path: "/name",
                expected: "string",
            }),
        },
        Field::Description => match value {
            Value::String(s) => {
                document.description = Some(s.clone());
                Ok(())
            }
            Value::Null => {
                document.description = None;
                Ok(())
            }
            _ => Err(PatchError::InvalidValue {
                path: "/description",
                expected: "string or null",
            }),
        },
    }
}

fn remove_field(document: &mut PointOfInterestForUpdate, field: Field) -> Result<(), PatchError> {
    match field {
        Field::Name => Err(PatchError::RemoveRequired("/name")),
        Field::Description => {
            document.description = None;
            Ok(())
        }
    }
}

fn test_field(
    document: &PointOfInterestForUpdate,
    field: Field,
    value: &Value,
) -> Result<(), PatchError> {
    let matches = match field {
        Field::Name => value.as_str() == Some(document.name.as_str()),
        Field::Description => match (value, &document.description) {
            (Value::Null, None) => true,
            (Value::String(expected), Some(current)) => expected == current,
            _ => false,
        },
    };
    if matches {
        Ok(())
    } else {
        Err(PatchError::TestFailed(match field {
            Field::Name => "/name",
            Field::Description => "/description",
        }))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn document() -> PointOfInterestForUpdate {
        PointOfInterestForUpdate {
            name: "Eiffel Tower".to_string(),
            description: Some("Wrought iron lattice tower.".to_string()),
        }
    }

    fn ops(value: Value) -> Vec<PatchOperation> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn replace_sets_the_named_field() {
        let mut doc = document();
        let operations = ops(json!([{ "op": "replace", "path": "/name", "value": "Tour Eiffel" }]));
        apply_patch(&mut doc, &operations).unwrap();
        assert_eq!(doc.name, "Tour Eiffel");
    }

    #[test]
    fn add_on_description_behaves_like_replace() {
        let mut doc = document();
        let operations = ops(json!([{ "op": "add", "path": "/description", "value": "Updated." }]));
        apply_patch(&mut doc, &operations).unwrap();
        assert_eq!(doc.description.as_deref(), Some("Updated."));
    }

    #[test]
    fn null_clears_the_description() {
        let mut doc = document();
        let operations = ops(json!([{ "op": "replace", "path": "/description", "value": null }]));
        apply_patch(&mut doc, &operations).unwrap();
        assert_eq!(doc.description, None);
    }

    #[test]
    fn remove_clears_description_but_not_name() {
        let mut doc = document();
        let operations = ops(json!([{ "op": "remove", "path": "/description" }]));
        apply_patch(&mut doc, &operations).unwrap();
        assert_eq!(doc.description, None);

        let operations = ops(json!([{ "op": "remove", "path": "/name" }]));
        assert_eq!(
            apply_patch(&mut doc, &operations),
            Err(PatchError::RemoveRequired("/name"))
        );
    }

    #[test]
    fn operations_apply_in_order() {
        let mut doc = document();
        let operations = ops(json!([
            { "op": "replace", "path": "/name", "value": "First" },
            { "op": "replace", "path": "/name", "value": "Second" }
        ]));
        apply_patch(&mut doc, &operations).unwrap();
        assert_eq!(doc.name, "Second");
    }

    #[test]
    fn unknown_path_rejects_the_sequence() {
        let mut doc = document();
        let operations = ops(json!([{ "op": "replace", "path": "/id", "value": 7 }]));
        assert_eq!(
            apply_patch(&mut doc, &operations),
            Err(PatchError::UnknownPath("/id".to_string()))
        );
    }

    #[test]
    fn non_string_name_value_is_rejected() {
        let mut doc = document();
        let operations = ops(json!([{ "op": "replace", "path": "/name", "value": 42 }]));
        assert!(matches!(
            apply_patch(&mut doc, &operations),
            Err(PatchError::InvalidValue { path: "/name", .. })
        ));
    }

    #[test]
    fn failed_test_rejects_the_sequence() {
        let mut doc = document();
        let operations = ops(json!([
            { "op": "test", "path": "/name", "value": "Not the tower" },
            { "op": "replace", "path": "/name", "value": "Never applied" }
        ]));
        assert_eq!(
            apply_patch(&mut doc, &operations),
            Err(PatchError::TestFailed("/name"))
        );
    }

    #[test]
    fn passing_test_allows_later_operations() {
        let mut doc = document();
        let operations = ops(json!([
            { "op": "test", "path": "/name", "value": "Eiffel Tower" },
            { "op": "replace", "path": "/description", "value": "Confirmed." }
        ]));
        apply_patch(&mut doc, &operations).unwrap();
        assert_eq!(doc.description.as_deref(), Some("Confirmed."));
    }
}
