//! # od-store-sqlite
//!
//! SQLite implementation of `StorageProvider`. This module maps between
//! the relational tables and the `od-core` domain models; UUIDs are
//! stored as TEXT and timestamps through sqlx's chrono support.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use od_core::error::{AppError, Result};
use od_core::models::{
    Category, CategoryKind, CategoryPatch, Department, DepartmentPatch, Link, NewCategory,
    NewDepartment, NewLink, NewPc, NewTodo, Pc, PcPatch, ResolvedLink, ResolvedPc, Todo, TodoPatch,
    TodoPriority, TodoStatus,
};
use od_core::traits::StorageProvider;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use uuid::Uuid;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS categories (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        kind TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS departments (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS links (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        url TEXT NOT NULL,
        description TEXT NOT NULL,
        thumbnail TEXT,
        category_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS pcs (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        department_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS todos (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        status TEXT NOT NULL,
        priority TEXT NOT NULL,
        due_date TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
];

pub struct SqliteStore {
    pool: SqlitePool,
}

fn db_err(err: sqlx::Error) -> AppError {
    AppError::Storage(err.to_string())
}

// Helpers for TEXT column conversion. A value that no longer parses
// means the database holds something this code never wrote, so it
// surfaces as a storage error rather than a silent default.
fn text_to_uuid(text: &str) -> Result<Uuid> {
    Uuid::parse_str(text)
        .map_err(|err| AppError::Storage(format!("corrupt uuid {text:?}: {err}")))
}

fn category_from_row(row: &SqliteRow) -> Result<Category> {
    Ok(Category {
        id: text_to_uuid(&row.get::<String, _>("id"))?,
        name: row.get("name"),
        kind: CategoryKind::from_str(&row.get::<String, _>("kind")).map_err(AppError::Storage)?,
        created_at: row.get("created_at"),
    })
}

fn department_from_row(row: &SqliteRow) -> Result<Department> {
    Ok(Department {
        id: text_to_uuid(&row.get::<String, _>("id"))?,
        name: row.get("name"),
        created_at: row.get("created_at"),
    })
}

fn todo_from_row(row: &SqliteRow) -> Result<Todo> {
    Ok(Todo {
        id: text_to_uuid(&row.get::<String, _>("id"))?,
        title: row.get("title"),
        description: row.get("description"),
        status: TodoStatus::from_str(&row.get::<String, _>("status")).map_err(AppError::Storage)?,
        priority: TodoPriority::from_str(&row.get::<String, _>("priority"))
            .map_err(AppError::Storage)?,
        due_date: row.get("due_date"),
        created_at: row.get("created_at"),
    })
}

impl SqliteStore {
    /// Opens (creating if missing) the database at `url` and ensures the
    /// schema exists.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(db_err)?
            .create_if_missing(true);
        // A single connection keeps writes serialized and lets
        // `sqlite::memory:` databases survive across calls.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(db_err)?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        for ddl in SCHEMA {
            sqlx::query(ddl).execute(&self.pool).await.map_err(db_err)?;
        }
        Ok(())
    }

    async fn fetch_category(&self, id: Uuid) -> Result<Option<Category>> {
        let row = sqlx::query("SELECT * FROM categories WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;
        row.as_ref().map(category_from_row).transpose()
    }

    async fn fetch_department(&self, id: Uuid) -> Result<Option<Department>> {
        let row = sqlx::query("SELECT * FROM departments WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;
        row.as_ref().map(department_from_row).transpose()
    }
}

#[async_trait]
impl StorageProvider for SqliteStore {
    /// Retrieves all links, newest first, with the category reference
    /// resolved via a join.
    async fn list_links(&self) -> Result<Vec<ResolvedLink>> {
        let rows = sqlx::query(
            "SELECT l.id, l.name, l.url, l.description, l.thumbnail, l.created_at,
                    c.id AS category_id, c.name AS category_name,
                    c.kind AS category_kind, c.created_at AS category_created_at
             FROM links l
             LEFT JOIN categories c ON c.id = l.category_id
             ORDER BY l.created_at DESC, l.id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter()
            .map(|row| -> Result<ResolvedLink> {
                let category = row
                    .get::<Option<String>, _>("category_id")
                    .map(|category_id| -> Result<Category> {
                        Ok(Category {
                            id: text_to_uuid(&category_id)?,
                            name: row.get("category_name"),
                            kind: CategoryKind::from_str(&row.get::<String, _>("category_kind"))
                                .map_err(AppError::Storage)?,
                            created_at: row.get("category_created_at"),
                        })
                    })
                    .transpose()?;
                Ok(ResolvedLink {
                    id: text_to_uuid(&row.get::<String, _>("id"))?,
                    name: row.get("name"),
                    url: row.get("url"),
                    description: row.get("description"),
                    thumbnail: row.get("thumbnail"),
                    category,
                    created_at: row.get("created_at"),
                })
            })
            .collect()
    }

    async fn create_link(&self, new: NewLink) -> Result<Link> {
        let link = Link {
            id: Uuid::now_v7(),
            name: new.name,
            url: new.url,
            description: new.description,
            thumbnail: new.thumbnail,
            category: new.category,
            created_at: Utc::now(),
        };
        sqlx::query(
            "INSERT INTO links (id, name, url, description, thumbnail, category_id, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(link.id.to_string())
        .bind(&link.name)
        .bind(&link.url)
        .bind(&link.description)
        .bind(&link.thumbnail)
        .bind(link.category.to_string())
        .bind(link.created_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(link)
    }

    async fn delete_link(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM links WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn list_pcs(&self) -> Result<Vec<ResolvedPc>> {
        let rows = sqlx::query(
            "SELECT p.id, p.name, p.created_at,
                    d.id AS department_id, d.name AS department_name,
                    d.created_at AS department_created_at
             FROM pcs p
             LEFT JOIN departments d ON d.id = p.department_id
             ORDER BY p.created_at DESC, p.id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter()
            .map(|row| -> Result<ResolvedPc> {
                let department = row
                    .get::<Option<String>, _>("department_id")
                    .map(|department_id| -> Result<Department> {
                        Ok(Department {
                            id: text_to_uuid(&department_id)?,
                            name: row.get("department_name"),
                            created_at: row.get("department_created_at"),
                        })
                    })
                    .transpose()?;
                Ok(ResolvedPc {
                    id: text_to_uuid(&row.get::<String, _>("id"))?,
                    name: row.get("name"),
                    department,
                    created_at: row.get("created_at"),
                })
            })
            .collect()
    }

    async fn create_pc(&self, new: NewPc) -> Result<Pc> {
        let pc = Pc {
            id: Uuid::now_v7(),
            name: new.name,
            department: new.department,
            created_at: Utc::now(),
        };
        sqlx::query("INSERT INTO pcs (id, name, department_id, created_at) VALUES (?, ?, ?, ?)")
            .bind(pc.id.to_string())
            .bind(&pc.name)
            .bind(pc.department.to_string())
            .bind(pc.created_at)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(pc)
    }

    async fn update_pc(&self, id: Uuid, patch: PcPatch) -> Result<Pc> {
        let row = sqlx::query("SELECT * FROM pcs WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .ok_or_else(|| AppError::NotFound("PC", id.to_string()))?;

        let department = match patch.department {
            Some(department) => department,
            None => text_to_uuid(&row.get::<String, _>("department_id"))?,
        };
        let pc = Pc {
            id,
            name: patch.name.unwrap_or_else(|| row.get("name")),
            department,
            created_at: row.get::<DateTime<Utc>, _>("created_at"),
        };
        sqlx::query("UPDATE pcs SET name = ?, department_id = ? WHERE id = ?")
            .bind(&pc.name)
            .bind(pc.department.to_string())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(pc)
    }

    async fn delete_pc(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM pcs WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let rows = sqlx::query("SELECT * FROM todos ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;
        rows.iter().map(todo_from_row).collect()
    }

    async fn create_todo(&self, new: NewTodo) -> Result<Todo> {
        let todo = Todo {
            id: Uuid::now_v7(),
            title: new.title,
            description: new.description,
            status: new.status,
            priority: new.priority,
            due_date: new.due_date,
            created_at: Utc::now(),
        };
        sqlx::query(
            "INSERT INTO todos (id, title, description, status, priority, due_date, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(todo.id.to_string())
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.status.as_str())
        .bind(todo.priority.as_str())
        .bind(todo.due_date)
        .bind(todo.created_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(todo)
    }

    async fn update_todo(&self, id: Uuid, patch: TodoPatch) -> Result<Todo> {
        let row = sqlx::query("SELECT * FROM todos WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .ok_or_else(|| AppError::NotFound("Todo", id.to_string()))?;

        let current = todo_from_row(&row)?;
        let todo = Todo {
            id,
            title: patch.title.unwrap_or(current.title),
            description: patch.description.unwrap_or(current.description),
            status: patch.status.unwrap_or(current.status),
            priority: patch.priority.unwrap_or(current.priority),
            due_date: patch.due_date.unwrap_or(current.due_date),
            created_at: current.created_at,
        };
        sqlx::query(
            "UPDATE todos SET title = ?, description = ?, status = ?, priority = ?, due_date = ?
             WHERE id = ?",
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.status.as_str())
        .bind(todo.priority.as_str())
        .bind(todo.due_date)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(todo)
    }

    async fn delete_todo(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn list_categories(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>> {
        let rows = match kind {
            Some(kind) => {
                sqlx::query("SELECT * FROM categories WHERE kind = ? ORDER BY name ASC")
                    .bind(kind.as_str())
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query("SELECT * FROM categories ORDER BY name ASC")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(db_err)?;
        rows.iter().map(category_from_row).collect()
    }

    async fn create_category(&self, new: NewCategory) -> Result<Category> {
        let category = Category {
            id: Uuid::now_v7(),
            name: new.name,
            kind: new.kind,
            created_at: Utc::now(),
        };
        sqlx::query("INSERT INTO categories (id, name, kind, created_at) VALUES (?, ?, ?, ?)")
            .bind(category.id.to_string())
            .bind(&category.name)
            .bind(category.kind.as_str())
            .bind(category.created_at)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(category)
    }

    async fn update_category(&self, id: Uuid, patch: CategoryPatch) -> Result<Category> {
        let current = self
            .fetch_category(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category", id.to_string()))?;

        let category = Category {
            id,
            name: patch.name.unwrap_or(current.name),
            kind: patch.kind.unwrap_or(current.kind),
            created_at: current.created_at,
        };
        sqlx::query("UPDATE categories SET name = ?, kind = ? WHERE id = ?")
            .bind(&category.name)
            .bind(category.kind.as_str())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(category)
    }

    /// Two-step cascade, children first: if the second delete fails the
    /// category remains listed with no dependents, never the reverse.
    async fn delete_category(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM links WHERE category_id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        let rows = sqlx::query("SELECT * FROM departments ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;
        rows.iter().map(department_from_row).collect()
    }

    async fn create_department(&self, new: NewDepartment) -> Result<Department> {
        let department = Department {
            id: Uuid::now_v7(),
            name: new.name,
            created_at: Utc::now(),
        };
        sqlx::query("INSERT INTO departments (id, name, created_at) VALUES (?, ?, ?)")
            .bind(department.id.to_string())
            .bind(&department.name)
            .bind(department.created_at)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(department)
    }

    async fn update_department(&self, id: Uuid, patch: DepartmentPatch) -> Result<Department> {
        let current = self
            .fetch_department(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department", id.to_string()))?;

        let department = Department {
            id,
            name: patch.name.unwrap_or(current.name),
            created_at: current.created_at,
        };
        sqlx::query("UPDATE departments SET name = ? WHERE id = ?")
            .bind(&department.name)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(department)
    }

    /// Two-step cascade, children first (see `delete_category`).
    async fn delete_department(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM pcs WHERE department_id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        sqlx::query("DELETE FROM departments WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use od_core::models::{TodoPriority, TodoStatus};

    async fn memory_store() -> SqliteStore {
        SqliteStore::connect("sqlite::memory:").await.unwrap()
    }

    fn new_category(name: &str, kind: CategoryKind) -> NewCategory {
        NewCategory {
            name: name.to_string(),
            kind,
        }
    }

    fn new_todo(title: &str) -> NewTodo {
        NewTodo {
            title: title.to_string(),
            description: "desc".to_string(),
            status: TodoStatus::Pending,
            priority: TodoPriority::Medium,
            due_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_link_resolves_category() {
        let store = memory_store().await;
        let category = store
            .create_category(new_category("Dev", CategoryKind::Link))
            .await
            .unwrap();

        let link = store
            .create_link(NewLink {
                name: "Repo".to_string(),
                url: "https://x.test".to_string(),
                description: "d".to_string(),
                thumbnail: None,
                category: category.id,
            })
            .await
            .unwrap();
        assert!(!link.id.is_nil());

        let links = store.list_links().await.unwrap();
        assert_eq!(links.len(), 1);
        let resolved = links[0].category.as_ref().expect("category resolved");
        assert_eq!(resolved.id, category.id);
        assert_eq!(resolved.name, "Dev");
    }

    #[tokio::test]
    async fn test_delete_category_cascades_links() {
        let store = memory_store().await;
        let dev = store
            .create_category(new_category("Dev", CategoryKind::Link))
            .await
            .unwrap();
        let other = store
            .create_category(new_category("Other", CategoryKind::Link))
            .await
            .unwrap();

        for (name, category) in [("a", dev.id), ("b", dev.id), ("c", other.id)] {
            store
                .create_link(NewLink {
                    name: name.to_string(),
                    url: "https://x.test".to_string(),
                    description: String::new(),
                    thumbnail: None,
                    category,
                })
                .await
                .unwrap();
        }

        store.delete_category(dev.id).await.unwrap();

        let categories = store.list_categories(None).await.unwrap();
        assert!(categories.iter().all(|c| c.id != dev.id));
        let links = store.list_links().await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name, "c");
    }

    #[tokio::test]
    async fn test_delete_department_cascades_pcs() {
        let store = memory_store().await;
        let hr = store
            .create_department(NewDepartment {
                name: "HR".to_string(),
            })
            .await
            .unwrap();
        let it = store
            .create_department(NewDepartment {
                name: "IT".to_string(),
            })
            .await
            .unwrap();
        store
            .create_pc(NewPc {
                name: "HR-001".to_string(),
                department: hr.id,
            })
            .await
            .unwrap();
        store
            .create_pc(NewPc {
                name: "IT-001".to_string(),
                department: it.id,
            })
            .await
            .unwrap();

        store.delete_department(hr.id).await.unwrap();

        let departments = store.list_departments().await.unwrap();
        assert_eq!(departments.len(), 1);
        let pcs = store.list_pcs().await.unwrap();
        assert_eq!(pcs.len(), 1);
        assert_eq!(pcs[0].name, "IT-001");
    }

    #[tokio::test]
    async fn test_category_kind_filter_and_name_order() {
        let store = memory_store().await;
        store
            .create_category(new_category("Zeta", CategoryKind::Link))
            .await
            .unwrap();
        store
            .create_category(new_category("Alpha", CategoryKind::Link))
            .await
            .unwrap();
        store
            .create_category(new_category("Office", CategoryKind::Pc))
            .await
            .unwrap();

        let links = store
            .list_categories(Some(CategoryKind::Link))
            .await
            .unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].name, "Alpha");
        assert!(links.iter().all(|c| c.kind == CategoryKind::Link));

        let all = store.list_categories(None).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_partial_todo_update_keeps_other_fields() {
        let store = memory_store().await;
        let todo = store.create_todo(new_todo("Write report")).await.unwrap();

        let updated = store
            .update_todo(
                todo.id,
                TodoPatch {
                    status: Some(TodoStatus::Completed),
                    ..TodoPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, TodoStatus::Completed);
        assert_eq!(updated.title, "Write report");
        assert_eq!(updated.priority, TodoPriority::Medium);
        assert_eq!(updated.created_at, todo.created_at);
    }

    #[tokio::test]
    async fn test_update_absent_todo_is_not_found() {
        let store = memory_store().await;
        let err = store
            .update_todo(Uuid::now_v7(), TodoPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound("Todo", _)));
    }

    #[tokio::test]
    async fn test_delete_absent_is_noop() {
        let store = memory_store().await;
        store
            .create_category(new_category("Dev", CategoryKind::Link))
            .await
            .unwrap();

        store.delete_category(Uuid::now_v7()).await.unwrap();
        store.delete_todo(Uuid::now_v7()).await.unwrap();

        assert_eq!(store.list_categories(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_stored_values_surface_storage_errors() {
        let store = memory_store().await;
        sqlx::query("INSERT INTO categories (id, name, kind, created_at) VALUES (?, ?, ?, ?)")
            .bind("not-a-uuid")
            .bind("Broken")
            .bind("link")
            .bind(Utc::now())
            .execute(&store.pool)
            .await
            .unwrap();
        let err = store.list_categories(None).await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));

        let store = memory_store().await;
        sqlx::query(
            "INSERT INTO todos (id, title, description, status, priority, due_date, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::now_v7().to_string())
        .bind("t")
        .bind("d")
        .bind("done")
        .bind("medium")
        .bind(Utc::now())
        .bind(Utc::now())
        .execute(&store.pool)
        .await
        .unwrap();
        let err = store.list_todos().await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_seed_provider_fills_empty_collections_once() {
        let store = memory_store().await;
        od_core::seed::seed_provider(&store).await.unwrap();

        assert_eq!(store.list_categories(None).await.unwrap().len(), 3);
        assert_eq!(store.list_links().await.unwrap().len(), 3);
        assert_eq!(store.list_departments().await.unwrap().len(), 3);
        assert_eq!(store.list_pcs().await.unwrap().len(), 3);
        assert_eq!(store.list_todos().await.unwrap().len(), 3);

        // Re-running never duplicates records
        od_core::seed::seed_provider(&store).await.unwrap();
        assert_eq!(store.list_links().await.unwrap().len(), 3);
        assert_eq!(store.list_todos().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_todos_newest_first_with_unique_ids() {
        let store = memory_store().await;
        let first = store.create_todo(new_todo("first")).await.unwrap();
        let second = store.create_todo(new_todo("second")).await.unwrap();
        let third = store.create_todo(new_todo("third")).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_ne!(second.id, third.id);

        let todos = store.list_todos().await.unwrap();
        let titles: Vec<_> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }
}
