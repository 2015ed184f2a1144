use color_eyre::Result;
use libsql::params;

use super::helpers::{query_all, query_optional};
use super::models::Category;
use super::Db;

impl Db {
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        query_all(
            &self.conn()?,
            "SELECT id, type FROM categories ORDER BY id",
            (),
        )
        .await
    }

    pub async fn get_category(&self, category_id: i64) -> Result<Option<Category>> {
        query_optional(
            &self.conn()?,
            "SELECT id, type FROM categories WHERE id = ?1",
            params![category_id],
        )
        .await
    }

    pub async fn insert_category(&self, kind: &str) -> Result<Category> {
        let conn = self.conn()?;
        conn.execute("INSERT INTO categories (type) VALUES (?1)", params![kind])
            .await?;
        let id = conn.last_insert_rowid();

        tracing::info!("new category created with id: {id}");
        Ok(Category {
            id,
            kind: kind.to_owned(),
        })
    }
}
