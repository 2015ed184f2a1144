use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{category_map, PageQuery};
use crate::names;
use crate::pagination::paginate;
use crate::rejections::{AppError, ResultExt};
use crate::AppState;

#[derive(Deserialize)]
struct CreateQuestionBody {
    question: Option<String>,
    answer: Option<String>,
    category: Option<i64>,
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    search_term: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{question_id}", delete(delete_question))
}

async fn list_questions(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Value>, AppError> {
    let questions = state
        .db
        .list_questions()
        .await
        .reject("could not list questions")?;

    let current = paginate(page.page(), names::QUESTIONS_PER_PAGE, &questions);
    if current.is_empty() {
        return Err(AppError::NotFound);
    }

    let categories = state
        .db
        .list_categories()
        .await
        .reject("could not list categories")?;

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": questions.len(),
        "categories": category_map(&categories),
    })))
}

async fn create_question(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Json(body): Json<CreateQuestionBody>,
) -> Result<Json<Value>, AppError> {
    let question = body
        .question
        .ok_or(AppError::InvalidInput("missing question text"))?;
    let answer = body
        .answer
        .ok_or(AppError::InvalidInput("missing answer text"))?;
    let category = body
        .category
        .ok_or(AppError::InvalidInput("missing category"))?;
    let difficulty = body
        .difficulty
        .ok_or(AppError::InvalidInput("missing difficulty"))?;

    if question.trim().is_empty() || answer.trim().is_empty() {
        return Err(AppError::Unprocessable(
            "question and answer text must not be empty",
        ));
    }
    if !(names::MIN_DIFFICULTY..=names::MAX_DIFFICULTY).contains(&difficulty) {
        return Err(AppError::Unprocessable("difficulty out of range"));
    }
    if state
        .db
        .get_category(category)
        .await
        .reject("could not get category")?
        .is_none()
    {
        return Err(AppError::Unprocessable("unknown category"));
    }

    let created = state
        .db
        .insert_question(&question, &answer, category, difficulty)
        .await
        .reject("could not insert question")?;

    let questions = state
        .db
        .list_questions()
        .await
        .reject("could not list questions")?;

    Ok(Json(json!({
        "success": true,
        "created": created.id,
        "questions": paginate(page.page(), names::QUESTIONS_PER_PAGE, &questions),
        "total_questions": questions.len(),
    })))
}

async fn search_questions(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Json(body): Json<SearchBody>,
) -> Result<Json<Value>, AppError> {
    let term = body
        .search_term
        .ok_or(AppError::InvalidInput("missing search term"))?;
    if term.trim().is_empty() {
        return Err(AppError::Unprocessable("search term must not be empty"));
    }

    let matches = state
        .db
        .search_questions(&term)
        .await
        .reject("could not search questions")?;

    if matches.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": paginate(page.page(), names::QUESTIONS_PER_PAGE, &matches),
        "total_questions": matches.len(),
    })))
}

async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let deleted = state
        .db
        .delete_question(question_id)
        .await
        .reject("could not delete question")?;

    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "deleted": question_id,
    })))
}
