//! # od-store-json
//!
//! Flat-file implementation of `StorageProvider`: one JSON array per
//! entity kind under a data directory. Every mutation reads the whole
//! file, rewrites the array, and writes it back; an internal mutex
//! serializes all file access so concurrent requests can neither lose
//! updates nor observe a half-written file.
//!
//! A missing data file is bootstrapped from a sibling `initial/`
//! directory holding seed files shaped `{"<kind>": [...]}`; if that is
//! also absent the collection starts empty.

use async_trait::async_trait;
use chrono::Utc;
use od_core::error::{AppError, Result};
use od_core::models::{
    Category, CategoryKind, CategoryPatch, Department, DepartmentPatch, Link, NewCategory,
    NewDepartment, NewLink, NewPc, NewTodo, Pc, PcPatch, ResolvedLink, ResolvedPc, Todo, TodoPatch,
};
use od_core::traits::StorageProvider;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

const LINKS: &str = "links";
const PCS: &str = "pcs";
const TODOS: &str = "todos";
const CATEGORIES: &str = "categories";
const DEPARTMENTS: &str = "departments";

pub struct JsonStore {
    data_dir: PathBuf,
    // Serializes all file access: writes truncate in place, so a read
    // overlapping a write could otherwise see a half-written file.
    file_lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            file_lock: Mutex::new(()),
        }
    }

    fn collection_path(&self, kind: &str) -> PathBuf {
        self.data_dir.join(format!("{kind}.json"))
    }

    async fn read_collection<T: DeserializeOwned>(&self, kind: &str) -> Result<Vec<T>> {
        match fs::read(self.collection_path(kind)).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => self.read_initial(kind).await,
            Err(err) => Err(err.into()),
        }
    }

    /// Seed files are objects keyed by the entity-kind name, e.g.
    /// `{"links": [...]}`.
    async fn read_initial<T: DeserializeOwned>(&self, kind: &str) -> Result<Vec<T>> {
        let path = self.data_dir.join("initial").join(format!("{kind}.json"));
        match fs::read(&path).await {
            Ok(bytes) => {
                let value: serde_json::Value = serde_json::from_slice(&bytes)?;
                match value.get(kind) {
                    Some(items) => Ok(serde_json::from_value(items.clone())?),
                    None => Ok(Vec::new()),
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_collection<T: Serialize>(&self, kind: &str, items: &[T]) -> Result<()> {
        fs::create_dir_all(&self.data_dir).await?;
        let bytes = serde_json::to_vec_pretty(items)?;
        fs::write(self.collection_path(kind), bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl StorageProvider for JsonStore {
    async fn list_links(&self) -> Result<Vec<ResolvedLink>> {
        let _guard = self.file_lock.lock().await;
        let mut links: Vec<Link> = self.read_collection(LINKS).await?;
        let categories: Vec<Category> = self.read_collection(CATEGORIES).await?;
        let by_id: HashMap<Uuid, Category> =
            categories.into_iter().map(|c| (c.id, c)).collect();

        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(links
            .into_iter()
            .map(|link| {
                let category = by_id.get(&link.category).cloned();
                ResolvedLink::new(link, category)
            })
            .collect())
    }

    async fn create_link(&self, new: NewLink) -> Result<Link> {
        let _guard = self.file_lock.lock().await;
        let mut links: Vec<Link> = self.read_collection(LINKS).await?;
        let link = Link {
            id: Uuid::now_v7(),
            name: new.name,
            url: new.url,
            description: new.description,
            thumbnail: new.thumbnail,
            category: new.category,
            created_at: Utc::now(),
        };
        links.push(link.clone());
        self.write_collection(LINKS, &links).await?;
        Ok(link)
    }

    async fn delete_link(&self, id: Uuid) -> Result<()> {
        let _guard = self.file_lock.lock().await;
        let mut links: Vec<Link> = self.read_collection(LINKS).await?;
        links.retain(|l| l.id != id);
        self.write_collection(LINKS, &links).await
    }

    async fn list_pcs(&self) -> Result<Vec<ResolvedPc>> {
        let _guard = self.file_lock.lock().await;
        let mut pcs: Vec<Pc> = self.read_collection(PCS).await?;
        let departments: Vec<Department> = self.read_collection(DEPARTMENTS).await?;
        let by_id: HashMap<Uuid, Department> =
            departments.into_iter().map(|d| (d.id, d)).collect();

        pcs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(pcs
            .into_iter()
            .map(|pc| {
                let department = by_id.get(&pc.department).cloned();
                ResolvedPc::new(pc, department)
            })
            .collect())
    }

    async fn create_pc(&self, new: NewPc) -> Result<Pc> {
        let _guard = self.file_lock.lock().await;
        let mut pcs: Vec<Pc> = self.read_collection(PCS).await?;
        let pc = Pc {
            id: Uuid::now_v7(),
            name: new.name,
            department: new.department,
            created_at: Utc::now(),
        };
        pcs.push(pc.clone());
        self.write_collection(PCS, &pcs).await?;
        Ok(pc)
    }

    async fn update_pc(&self, id: Uuid, patch: PcPatch) -> Result<Pc> {
        let _guard = self.file_lock.lock().await;
        let mut pcs: Vec<Pc> = self.read_collection(PCS).await?;
        let pc = pcs
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("PC", id.to_string()))?;

        if let Some(name) = patch.name {
            pc.name = name;
        }
        if let Some(department) = patch.department {
            pc.department = department;
        }
        let updated = pc.clone();
        self.write_collection(PCS, &pcs).await?;
        Ok(updated)
    }

    async fn delete_pc(&self, id: Uuid) -> Result<()> {
        let _guard = self.file_lock.lock().await;
        let mut pcs: Vec<Pc> = self.read_collection(PCS).await?;
        pcs.retain(|p| p.id != id);
        self.write_collection(PCS, &pcs).await
    }

    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let _guard = self.file_lock.lock().await;
        let mut todos: Vec<Todo> = self.read_collection(TODOS).await?;
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(todos)
    }

    async fn create_todo(&self, new: NewTodo) -> Result<Todo> {
        let _guard = self.file_lock.lock().await;
        let mut todos: Vec<Todo> = self.read_collection(TODOS).await?;
        let todo = Todo {
            id: Uuid::now_v7(),
            title: new.title,
            description: new.description,
            status: new.status,
            priority: new.priority,
            due_date: new.due_date,
            created_at: Utc::now(),
        };
        todos.push(todo.clone());
        self.write_collection(TODOS, &todos).await?;
        Ok(todo)
    }

    async fn update_todo(&self, id: Uuid, patch: TodoPatch) -> Result<Todo> {
        let _guard = self.file_lock.lock().await;
        let mut todos: Vec<Todo> = self.read_collection(TODOS).await?;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound("Todo", id.to_string()))?;

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(description) = patch.description {
            todo.description = description;
        }
        if let Some(status) = patch.status {
            todo.status = status;
        }
        if let Some(priority) = patch.priority {
            todo.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            todo.due_date = due_date;
        }
        let updated = todo.clone();
        self.write_collection(TODOS, &todos).await?;
        Ok(updated)
    }

    async fn delete_todo(&self, id: Uuid) -> Result<()> {
        let _guard = self.file_lock.lock().await;
        let mut todos: Vec<Todo> = self.read_collection(TODOS).await?;
        todos.retain(|t| t.id != id);
        self.write_collection(TODOS, &todos).await
    }

    async fn list_categories(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>> {
        let _guard = self.file_lock.lock().await;
        let mut categories: Vec<Category> = self.read_collection(CATEGORIES).await?;
        if let Some(kind) = kind {
            categories.retain(|c| c.kind == kind);
        }
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn create_category(&self, new: NewCategory) -> Result<Category> {
        let _guard = self.file_lock.lock().await;
        let mut categories: Vec<Category> = self.read_collection(CATEGORIES).await?;
        let category = Category {
            id: Uuid::now_v7(),
            name: new.name,
            kind: new.kind,
            created_at: Utc::now(),
        };
        categories.push(category.clone());
        self.write_collection(CATEGORIES, &categories).await?;
        Ok(category)
    }

    async fn update_category(&self, id: Uuid, patch: CategoryPatch) -> Result<Category> {
        let _guard = self.file_lock.lock().await;
        let mut categories: Vec<Category> = self.read_collection(CATEGORIES).await?;
        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound("Category", id.to_string()))?;

        if let Some(name) = patch.name {
            category.name = name;
        }
        if let Some(kind) = patch.kind {
            category.kind = kind;
        }
        let updated = category.clone();
        self.write_collection(CATEGORIES, &categories).await?;
        Ok(updated)
    }

    /// Two-step cascade, children first: a failure between the writes
    /// leaves a still-listed category with its links already gone.
    async fn delete_category(&self, id: Uuid) -> Result<()> {
        let _guard = self.file_lock.lock().await;
        let mut links: Vec<Link> = self.read_collection(LINKS).await?;
        links.retain(|l| l.category != id);
        self.write_collection(LINKS, &links).await?;

        let mut categories: Vec<Category> = self.read_collection(CATEGORIES).await?;
        categories.retain(|c| c.id != id);
        self.write_collection(CATEGORIES, &categories).await
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        let _guard = self.file_lock.lock().await;
        let mut departments: Vec<Department> = self.read_collection(DEPARTMENTS).await?;
        departments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(departments)
    }

    async fn create_department(&self, new: NewDepartment) -> Result<Department> {
        let _guard = self.file_lock.lock().await;
        let mut departments: Vec<Department> = self.read_collection(DEPARTMENTS).await?;
        let department = Department {
            id: Uuid::now_v7(),
            name: new.name,
            created_at: Utc::now(),
        };
        departments.push(department.clone());
        self.write_collection(DEPARTMENTS, &departments).await?;
        Ok(department)
    }

    async fn update_department(&self, id: Uuid, patch: DepartmentPatch) -> Result<Department> {
        let _guard = self.file_lock.lock().await;
        let mut departments: Vec<Department> = self.read_collection(DEPARTMENTS).await?;
        let department = departments
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::NotFound("Department", id.to_string()))?;

        if let Some(name) = patch.name {
            department.name = name;
        }
        let updated = department.clone();
        self.write_collection(DEPARTMENTS, &departments).await?;
        Ok(updated)
    }

    /// Two-step cascade, children first (see `delete_category`).
    async fn delete_department(&self, id: Uuid) -> Result<()> {
        let _guard = self.file_lock.lock().await;
        let mut pcs: Vec<Pc> = self.read_collection(PCS).await?;
        pcs.retain(|p| p.department != id);
        self.write_collection(PCS, &pcs).await?;

        let mut departments: Vec<Department> = self.read_collection(DEPARTMENTS).await?;
        departments.retain(|d| d.id != id);
        self.write_collection(DEPARTMENTS, &departments).await
    }
}
