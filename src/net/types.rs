//! Wire types shared with the code-generator backend.
//!
//! Field names follow the backend's camelCase JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Structured error body returned by the backend's exception handler.
///
/// Only `message` is read. `details` and `timestamp` vary in shape (the
/// timestamp may be epoch millis or an ISO string), so they stay untyped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub timestamp: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Parse an error payload. Any JSON object yields a body; a `message`
    /// that is not a string is dropped rather than failing the parse.
    pub fn parse(text: &str) -> Option<Self> {
        let serde_json::Value::Object(mut obj) = serde_json::from_str(text).ok()? else {
            return None;
        };
        let message = match obj.remove("message") {
            Some(serde_json::Value::String(m)) => Some(m),
            _ => None,
        };
        Some(Self {
            message,
            details: obj.remove("details"),
            timestamp: obj.remove("timestamp"),
        })
    }
}

/// Column and table properties for one database table.
pub type TableMetadata = serde_json::Map<String, serde_json::Value>;

/// Which slice of code to generate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    Backend,
    Frontend,
    #[default]
    Fullstack,
}

impl GenerationKind {
    pub const ALL: [Self; 3] = [Self::Backend, Self::Frontend, Self::Fullstack];

    /// Path segment used by the generate and delete endpoints.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Fullstack => "fullstack",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Backend => "后端代码",
            Self::Frontend => "前端代码",
            Self::Fullstack => "全栈代码",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == value)
    }

    /// The frontend generator has no package setting.
    pub fn uses_base_package(self) -> bool {
        !matches!(self, Self::Frontend)
    }
}

/// Body for the single-table generate endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    pub output_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_package: Option<String>,
    pub overwrite: bool,
}

/// Body for `POST /api/codegen/generate/batch/{schema}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGenerateOptions {
    pub table_names: Vec<String>,
    pub output_path: String,
    pub base_package: String,
    pub overwrite: bool,
}

/// Body for `DELETE /api/codegen/delete/{schema}/{table}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOptions {
    pub delete_type: GenerationKind,
    pub output_path: String,
}

/// A row of the managed `user` table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub passwd: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    /// ISO local date-time, e.g. `2024-05-01T08:30:00`.
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// One page of a paginated listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based page index.
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size: 0,
        }
    }
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }
}

/// Query for `GET /api/user`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserQuery {
    pub page: u32,
    pub size: u32,
    pub search: Option<String>,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self { page: 0, size: 10, search: None }
    }
}
