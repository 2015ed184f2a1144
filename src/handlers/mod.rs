pub mod categories;
pub mod questions;
pub mod quizzes;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::db::models::Category;
use crate::rejections::AppError;

/// Router fallback so unmatched paths get the JSON error body too.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Categories keyed by id, as the listing endpoints expose them.
pub(crate) fn category_map(categories: &[Category]) -> Map<String, Value> {
    categories
        .iter()
        .map(|c| (c.id.to_string(), Value::String(c.kind.clone())))
        .collect()
}

#[derive(Deserialize)]
pub(crate) struct PageQuery {
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

impl PageQuery {
    /// Page numbers are 1-based; anything below that is treated as page 1.
    pub fn page(&self) -> usize {
        self.page.max(1)
    }
}
