//! JSON Patch (RFC 6902) documents applied to update DTOs.
//!
//! A document is applied to the DTO's JSON form and the result is read back
//! into the DTO. Operations run in order on a working copy; the first
//! failure aborts and leaves the target untouched.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add {
        #[schema(example = "/name")]
        path: String,
        #[schema(value_type = Object)]
        value: Value,
    },
    Remove {
        path: String,
    },
    Replace {
        path: String,
        #[schema(value_type = Object)]
        value: Value,
    },
    Move {
        from: String,
        path: String,
    },
    Copy {
        from: String,
        path: String,
    },
    Test {
        path: String,
        #[schema(value_type = Object)]
        value: Value,
    },
}

/// Ordered list of operations, the body of every PATCH endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PatchDocument(pub Vec<PatchOperation>);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("operation {index} ({op}) failed: {reason}")]
    Operation {
        index: usize,
        op: &'static str,
        reason: String,
    },

    #[error("'{0}' is not a member of the target")]
    UnknownMember(String),

    #[error("patched document does not fit the target: {0}")]
    Shape(String),
}

impl PatchOperation {
    pub fn name(&self) -> &'static str {
        match self {
            PatchOperation::Add { .. } => "add",
            PatchOperation::Remove { .. } => "remove",
            PatchOperation::Replace { .. } => "replace",
            PatchOperation::Move { .. } => "move",
            PatchOperation::Copy { .. } => "copy",
            PatchOperation::Test { .. } => "test",
        }
    }

    fn apply(&self, doc: &mut Value) -> Result<(), String> {
        match self {
            PatchOperation::Add { path, value } => add(doc, path, value.clone()),
            PatchOperation::Remove { path } => remove(doc, path).map(drop),
            PatchOperation::Replace { path, value } => {
                let slot = pointer_mut(doc, path)?;
                *slot = value.clone();
                Ok(())
            }
            PatchOperation::Move { from, path } => {
                if path.starts_with(&format!("{from}/")) {
                    return Err(format!("cannot move '{from}' into its own child '{path}'"));
                }
                let value = remove(doc, from)?;
                add(doc, path, value)
            }
            PatchOperation::Copy { from, path } => {
                let value = pointer(doc, from)?.clone();
                add(doc, path, value)
            }
            PatchOperation::Test { path, value } => {
                if json_equal(pointer(doc, path)?, value) {
                    Ok(())
                } else {
                    Err(format!("value at '{path}' does not match"))
                }
            }
        }
    }
}

impl PatchDocument {
    pub fn new(operations: Vec<PatchOperation>) -> Self {
        Self(operations)
    }

    pub fn operations(&self) -> &[PatchOperation] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply every operation to `target`, or none of them.
    pub fn apply(&self, target: &mut Value) -> Result<(), PatchError> {
        let mut working = target.clone();
        for (index, operation) in self.0.iter().enumerate() {
            operation
                .apply(&mut working)
                .map_err(|reason| PatchError::Operation {
                    index,
                    op: operation.name(),
                    reason,
                })?;
        }
        *target = working;
        Ok(())
    }

    /// Patch a copy of `target` through its JSON form.
    ///
    /// Members the target does not serialize are rejected rather than
    /// silently dropped on the way back.
    pub fn apply_to<T>(&self, target: &T) -> Result<T, PatchError>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut value =
            serde_json::to_value(target).map_err(|e| PatchError::Shape(e.to_string()))?;
        let known: Vec<String> = match &value {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        };

        self.apply(&mut value)?;

        if let Value::Object(map) = &value {
            if let Some(extra) = map.keys().find(|key| !known.contains(key)) {
                return Err(PatchError::UnknownMember(extra.clone()));
            }
        }

        serde_json::from_value(value).map_err(|e| PatchError::Shape(e.to_string()))
    }
}

/// Structural equality where numbers compare by value, so `200` matches `200.0`.
fn json_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => match (a.as_i64(), b.as_i64()) {
            (Some(a), Some(b)) => a == b,
            _ => match (a.as_u64(), b.as_u64()) {
                (Some(a), Some(b)) => a == b,
                _ => a.as_f64() == b.as_f64(),
            },
        },
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| json_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| json_equal(a, b)))
        }
        _ => left == right,
    }
}

fn split_pointer(path: &str) -> Result<Vec<String>, String> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = path.strip_prefix('/') else {
        return Err(format!("invalid JSON pointer '{path}'"));
    };
    Ok(rest
        .split('/')
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .collect())
}

fn array_index(token: &str, len: usize, allow_end: bool) -> Result<usize, String> {
    if allow_end && token == "-" {
        return Ok(len);
    }
    let index: usize = token
        .parse()
        .map_err(|_| format!("'{token}' is not an array index"))?;
    if index < len || (allow_end && index == len) {
        Ok(index)
    } else {
        Err(format!("index {index} is out of bounds"))
    }
}

fn pointer<'a>(doc: &'a Value, path: &str) -> Result<&'a Value, String> {
    let mut current = doc;
    for token in split_pointer(path)? {
        current = match current {
            Value::Object(map) => map.get(&token),
            Value::Array(items) => items.get(array_index(&token, items.len(), false)?),
            _ => None,
        }
        .ok_or_else(|| format!("path '{path}' does not exist"))?;
    }
    Ok(current)
}

fn pointer_mut<'a>(doc: &'a mut Value, path: &str) -> Result<&'a mut Value, String> {
    let mut current = doc;
    for token in split_pointer(path)? {
        current = match current {
            Value::Object(map) => map.get_mut(&token),
            Value::Array(items) => {
                let index = array_index(&token, items.len(), false)?;
                items.get_mut(index)
            }
            _ => None,
        }
        .ok_or_else(|| format!("path '{path}' does not exist"))?;
    }
    Ok(current)
}

/// Parent container and final token of `path`; `None` for the root.
fn parent<'a>(doc: &'a mut Value, path: &str) -> Result<Option<(&'a mut Value, String)>, String> {
    let mut tokens = split_pointer(path)?;
    let Some(last) = tokens.pop() else {
        return Ok(None);
    };
    let parent_path: String = tokens
        .iter()
        .map(|token| format!("/{}", token.replace('~', "~0").replace('/', "~1")))
        .collect();
    let container = pointer_mut(doc, &parent_path)?;
    Ok(Some((container, last)))
}

fn add(doc: &mut Value, path: &str, value: Value) -> Result<(), String> {
    match parent(doc, path)? {
        None => {
            *doc = value;
            Ok(())
        }
        Some((Value::Object(map), key)) => {
            map.insert(key, value);
            Ok(())
        }
        Some((Value::Array(items), token)) => {
            let index = array_index(&token, items.len(), true)?;
            items.insert(index, value);
            Ok(())
        }
        Some(_) => Err(format!("parent of '{path}' is not a container")),
    }
}

fn remove(doc: &mut Value, path: &str) -> Result<Value, String> {
    match parent(doc, path)? {
        None => Err("cannot remove the document root".to_string()),
        Some((Value::Object(map), key)) => map
            .remove(&key)
            .ok_or_else(|| format!("path '{path}' does not exist")),
        Some((Value::Array(items), token)) => {
            let index = array_index(&token, items.len(), false)?;
            Ok(items.remove(index))
        }
        Some(_) => Err(format!("path '{path}' does not exist")),
    }
}
