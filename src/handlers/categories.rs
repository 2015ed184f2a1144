use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use super::{category_map, PageQuery};
use crate::names;
use crate::pagination::paginate;
use crate::rejections::{AppError, ResultExt};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}/questions", get(questions_by_category))
}

async fn list_categories(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let categories = state
        .db
        .list_categories()
        .await
        .reject("could not list categories")?;

    if categories.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "categories": category_map(&categories),
    })))
}

async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Value>, AppError> {
    let category = state
        .db
        .get_category(category_id)
        .await
        .reject("could not get category")?
        .ok_or(AppError::NotFound)?;

    let questions = state
        .db
        .list_questions_by_category(category_id)
        .await
        .reject("could not list questions by category")?;

    Ok(Json(json!({
        "success": true,
        "questions": paginate(page.page(), names::QUESTIONS_PER_PAGE, &questions),
        "total_questions": questions.len(),
        "current_category": category.kind,
    })))
}
