//! # Domain Models
//!
//! These structs represent the record kinds tracked by the console.
//! We use UUID v7 for time-ordered, globally unique identification; the
//! wire shape follows the legacy API (camelCase fields, `type` for the
//! category kind, `_id` accepted as an alias of `id` in update bodies).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partitions categories so link-categories and pc-categories never mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Link,
    Pc,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Link => "link",
            CategoryKind::Pc => "pc",
        }
    }
}

impl std::str::FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "link" => Ok(CategoryKind::Link),
            "pc" => Ok(CategoryKind::Pc),
            other => Err(format!("unknown category kind: {other}")),
        }
    }
}

/// A grouping for Links or PCs, depending on its kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a Category; id and timestamp are store-assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}

/// Partial update for a Category. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<CategoryKind>,
}

/// An organizational unit referenced by PCs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewDepartment {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DepartmentPatch {
    pub name: Option<String>,
}

/// A bookmarked URL. `category` must reference a Category of kind `link`
/// at creation time; the store does not enforce this itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub category: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLink {
    pub name: String,
    pub url: String,
    pub description: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub category: Uuid,
}

/// A Link as returned by the primary listing: the category reference is
/// resolved to the full object, or `null` if the Category no longer exists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLink {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
}

impl ResolvedLink {
    pub fn new(link: Link, category: Option<Category>) -> Self {
        Self {
            id: link.id,
            name: link.name,
            url: link.url,
            description: link.description,
            thumbnail: link.thumbnail,
            category,
            created_at: link.created_at,
        }
    }
}

/// An inventoried PC asset, assigned to a Department.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pc {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub name: String,
    pub department: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPc {
    pub name: String,
    pub department: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PcPatch {
    pub name: Option<String>,
    pub department: Option<Uuid>,
}

/// A PC as returned by the primary listing, with its department resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPc {
    pub id: Uuid,
    pub name: String,
    pub department: Option<Department>,
    pub created_at: DateTime<Utc>,
}

impl ResolvedPc {
    pub fn new(pc: Pc, department: Option<Department>) -> Self {
        Self {
            id: pc.id,
            name: pc.name,
            department,
            created_at: pc.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::InProgress => "in-progress",
            TodoStatus::Completed => "completed",
        }
    }
}

impl std::str::FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TodoStatus::Pending),
            "in-progress" => Ok(TodoStatus::InProgress),
            "completed" => Ok(TodoStatus::Completed),
            other => Err(format!("unknown todo status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TodoPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoPriority::Low => "low",
            TodoPriority::Medium => "medium",
            TodoPriority::High => "high",
        }
    }
}

impl std::str::FromStr for TodoPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(TodoPriority::Low),
            "medium" => Ok(TodoPriority::Medium),
            "high" => Ok(TodoPriority::High),
            other => Err(format!("unknown todo priority: {other}")),
        }
    }
}

/// A tracked task. Self-contained; no foreign references.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TodoStatus,
    #[serde(default)]
    pub priority: TodoPriority,
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
    pub due_date: Option<DateTime<Utc>>,
}
