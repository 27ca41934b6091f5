//! # Storage Provider (Port)
//!
//! Any backend must implement this trait to be used by the binary. The
//! two shipped implementations (SQLite, flat JSON files) must produce
//! observably equivalent results for identical operation sequences.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{
    Category, CategoryKind, CategoryPatch, Department, DepartmentPatch, Link, NewCategory,
    NewDepartment, NewLink, NewPc, NewTodo, Pc, PcPatch, ResolvedLink, ResolvedPc, Todo, TodoPatch,
};

/// CRUD contract over the five entity kinds.
///
/// Conventions shared by all implementations:
/// - ids and `created_at` are assigned by the store at creation and are
///   immutable afterwards;
/// - listings of Links and PCs resolve their reference field to the full
///   object (`None` for a dangling reference);
/// - deletes are idempotent: deleting an absent id is a no-op;
/// - deleting a Category or Department cascades to its dependents,
///   children first, then the parent. The two steps are not atomic; a
///   failure in between leaves a still-listed parent with its children
///   already gone, never a dangling child.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    // Link operations
    async fn list_links(&self) -> Result<Vec<ResolvedLink>>;
    async fn create_link(&self, new: NewLink) -> Result<Link>;
    async fn delete_link(&self, id: Uuid) -> Result<()>;

    // PC operations
    async fn list_pcs(&self) -> Result<Vec<ResolvedPc>>;
    async fn create_pc(&self, new: NewPc) -> Result<Pc>;
    async fn update_pc(&self, id: Uuid, patch: PcPatch) -> Result<Pc>;
    async fn delete_pc(&self, id: Uuid) -> Result<()>;

    // Todo operations
    async fn list_todos(&self) -> Result<Vec<Todo>>;
    async fn create_todo(&self, new: NewTodo) -> Result<Todo>;
    async fn update_todo(&self, id: Uuid, patch: TodoPatch) -> Result<Todo>;
    async fn delete_todo(&self, id: Uuid) -> Result<()>;

    // Category operations
    async fn list_categories(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>>;
    async fn create_category(&self, new: NewCategory) -> Result<Category>;
    async fn update_category(&self, id: Uuid, patch: CategoryPatch) -> Result<Category>;
    /// Cascade-deletes every Link referencing the Category, then the
    /// Category itself.
    async fn delete_category(&self, id: Uuid) -> Result<()>;

    // Department operations
    async fn list_departments(&self) -> Result<Vec<Department>>;
    async fn create_department(&self, new: NewDepartment) -> Result<Department>;
    async fn update_department(&self, id: Uuid, patch: DepartmentPatch) -> Result<Department>;
    /// Cascade-deletes every PC referencing the Department, then the
    /// Department itself.
    async fn delete_department(&self, id: Uuid) -> Result<()>;
}
