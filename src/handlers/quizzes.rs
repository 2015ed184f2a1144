use std::collections::HashSet;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::quiz::{next_question, CategoryFilter, NextQuestion};
use crate::rejections::{AppError, ResultExt};
use crate::AppState;

#[derive(Deserialize)]
struct QuizBody {
    quiz_category: QuizCategory,
    #[serde(default)]
    previous_questions: Vec<i64>,
}

#[derive(Deserialize)]
struct QuizCategory {
    id: i64,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/quizzes", post(play))
}

/// Serve one random question the session hasn't seen yet, or signal that
/// the filtered pool is exhausted ("quiz complete").
async fn play(
    State(state): State<AppState>,
    Json(body): Json<QuizBody>,
) -> Result<Json<Value>, AppError> {
    let filter = CategoryFilter::from_id(body.quiz_category.id);

    let pool = match filter {
        CategoryFilter::All => state
            .db
            .list_questions()
            .await
            .reject("could not list questions")?,
        CategoryFilter::Category(category_id) => {
            if state
                .db
                .get_category(category_id)
                .await
                .reject("could not get category")?
                .is_none()
            {
                return Err(AppError::InvalidInput("unknown quiz category"));
            }
            state
                .db
                .list_questions_by_category(category_id)
                .await
                .reject("could not list questions by category")?
        }
    };

    let seen: HashSet<i64> = body.previous_questions.iter().copied().collect();

    match next_question(filter, &seen, &pool, &mut rand::thread_rng()) {
        NextQuestion::Question(question) => Ok(Json(json!({
            "success": true,
            "question": question,
        }))),
        NextQuestion::Exhausted => Ok(Json(json!({
            "success": true,
            "message": "quiz complete",
        }))),
    }
}
