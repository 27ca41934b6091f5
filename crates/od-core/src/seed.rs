//! Bundled starter dataset, applied once at process initialization.
//!
//! Each collection is only populated when it is empty, so restarting the
//! process never duplicates or overwrites records.

use chrono::{TimeZone, Utc};

use crate::error::Result;
use crate::models::{CategoryKind, NewCategory, NewDepartment, NewLink, NewPc, NewTodo, TodoPriority, TodoStatus};
use crate::traits::StorageProvider;

/// Populates every empty collection of `store` with the starter dataset.
///
/// Links and PCs reference the categories and departments created in the
/// same pass, so they are only seeded when their parent collection was
/// also empty.
pub async fn seed_provider(store: &dyn StorageProvider) -> Result<()> {
    if store.list_categories(None).await?.is_empty() {
        let development = store
            .create_category(NewCategory {
                name: "Development".to_string(),
                kind: CategoryKind::Link,
            })
            .await?;
        let design = store
            .create_category(NewCategory {
                name: "Design".to_string(),
                kind: CategoryKind::Link,
            })
            .await?;
        let productivity = store
            .create_category(NewCategory {
                name: "Productivity".to_string(),
                kind: CategoryKind::Link,
            })
            .await?;

        if store.list_links().await?.is_empty() {
            store
                .create_link(NewLink {
                    name: "GitHub".to_string(),
                    url: "https://github.com".to_string(),
                    description: "Where the world builds software".to_string(),
                    thumbnail: Some(
                        "https://images.unsplash.com/photo-1618401471353-b98afee0b2eb".to_string(),
                    ),
                    category: development.id,
                })
                .await?;
            store
                .create_link(NewLink {
                    name: "Figma".to_string(),
                    url: "https://figma.com".to_string(),
                    description: "The collaborative interface design tool".to_string(),
                    thumbnail: Some(
                        "https://images.unsplash.com/photo-1618788372246-79faff0c3742".to_string(),
                    ),
                    category: design.id,
                })
                .await?;
            store
                .create_link(NewLink {
                    name: "Notion".to_string(),
                    url: "https://notion.so".to_string(),
                    description: "All-in-one workspace".to_string(),
                    thumbnail: Some(
                        "https://images.unsplash.com/photo-1622675363311-3e1904dc1885".to_string(),
                    ),
                    category: productivity.id,
                })
                .await?;
        }
    }

    if store.list_departments().await?.is_empty() {
        let development = store
            .create_department(NewDepartment {
                name: "Development".to_string(),
            })
            .await?;
        let design = store
            .create_department(NewDepartment {
                name: "Design".to_string(),
            })
            .await?;
        let human_resources = store
            .create_department(NewDepartment {
                name: "Human Resources".to_string(),
            })
            .await?;

        if store.list_pcs().await?.is_empty() {
            store
                .create_pc(NewPc {
                    name: "DEV-001".to_string(),
                    department: development.id,
                })
                .await?;
            store
                .create_pc(NewPc {
                    name: "DES-001".to_string(),
                    department: design.id,
                })
                .await?;
            store
                .create_pc(NewPc {
                    name: "HR-001".to_string(),
                    department: human_resources.id,
                })
                .await?;
        }
    }

    if store.list_todos().await?.is_empty() {
        store
            .create_todo(NewTodo {
                title: "Review Project Proposal".to_string(),
                description: "Review and provide feedback on the new project proposal".to_string(),
                status: TodoStatus::Pending,
                priority: TodoPriority::High,
                due_date: Utc.with_ymd_and_hms(2024, 3, 30, 0, 0, 0).unwrap(),
            })
            .await?;
        store
            .create_todo(NewTodo {
                title: "Update Documentation".to_string(),
                description: "Update the API documentation with new endpoints".to_string(),
                status: TodoStatus::InProgress,
                priority: TodoPriority::Medium,
                due_date: Utc.with_ymd_and_hms(2024, 3, 25, 0, 0, 0).unwrap(),
            })
            .await?;
        store
            .create_todo(NewTodo {
                title: "Weekly Team Meeting".to_string(),
                description: "Prepare agenda for weekly team meeting".to_string(),
                status: TodoStatus::Completed,
                priority: TodoPriority::Low,
                due_date: Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap(),
            })
            .await?;
    }

    Ok(())
}
