use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DomainError;

/// Post entity - a journal entry as persisted and returned to clients.
///
/// `id` and `created_at` are assigned by the repository on insert and never
/// accepted from a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub image_url: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Assemble a stored post from a draft and the store-assigned identity.
    pub fn from_draft(id: i32, created_at: DateTime<Utc>, draft: PostDraft) -> Self {
        Self {
            id,
            title: draft.title,
            excerpt: draft.excerpt,
            category: draft.category,
            image_url: draft.image_url,
            content: draft.content,
            created_at,
        }
    }
}

/// The client-supplied fields of a post.
///
/// Built from request bodies only through [`PostDraft::from_json`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub image_url: String,
    pub content: String,
}

impl PostDraft {
    /// Validate an arbitrary JSON body against the draft shape.
    ///
    /// Fields are checked in declaration order and only the first failure is
    /// reported. Unknown keys (including `id` and `createdAt`) are ignored.
    pub fn from_json(body: &Value) -> Result<Self, DomainError> {
        let Some(fields) = body.as_object() else {
            return Err(DomainError::Validation(
                "Request body must be a JSON object".to_string(),
            ));
        };

        Ok(Self {
            title: non_empty(fields, "title")?,
            excerpt: required(fields, "excerpt")?,
            category: required(fields, "category")?,
            image_url: optional(fields, "imageUrl")?,
            content: non_empty(fields, "content")?,
        })
    }
}

fn optional(fields: &Map<String, Value>, name: &str) -> Result<String, DomainError> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DomainError::Validation(format!("{name} must be a string"))),
    }
}

fn required(fields: &Map<String, Value>, name: &str) -> Result<String, DomainError> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(DomainError::Validation(format!("{name} is required"))),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DomainError::Validation(format!("{name} must be a string"))),
    }
}

fn non_empty(fields: &Map<String, Value>, name: &str) -> Result<String, DomainError> {
    let value = required(fields, name)?;
    if value.is_empty() {
        return Err(DomainError::Validation(format!(
            "{name} must contain at least 1 character"
        )));
    }
    Ok(value)
}
