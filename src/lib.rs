pub mod db;
pub mod handlers;
pub mod names;
pub mod pagination;
pub mod quiz;
pub mod rejections;

use axum::Router;

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::categories::routes())
        .merge(handlers::questions::routes())
        .merge(handlers::quizzes::routes())
        .fallback(handlers::not_found)
        .with_state(state)
}
