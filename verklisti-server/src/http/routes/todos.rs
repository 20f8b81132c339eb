//! Todo page and form handlers
//!
//! One GET for the page, four POSTs for mutations. Every mutating route
//! answers with a redirect back to `/` no matter what happened; bad input
//! and database failures alike are a silent no-op from the client's side.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::db::{checked, TodoRepo};
use crate::http::server::AppState;
use crate::models::{parse_todo_id, TodoTitle};
use crate::render::render_page;

/// Add form body. Missing fields default to empty and fail validation
/// instead of failing extraction.
#[derive(Deserialize)]
pub struct AddForm {
    #[serde(default)]
    pub title: String,
}

/// Body for the toggle/delete forms carrying a hidden id field.
#[derive(Deserialize)]
pub struct IdForm {
    #[serde(default)]
    pub id: String,
}

/// GET / - render the full page. A failed fetch renders the empty list.
async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let todos = checked(TodoRepo::new(&state.pool).list_all().await).unwrap_or_default();
    Html(render_page(&todos))
}

/// POST /add - insert a task if the title validates, then redirect.
async fn add(State(state): State<Arc<AppState>>, Form(form): Form<AddForm>) -> Redirect {
    match TodoTitle::new(&form.title) {
        Ok(title) => {
            let _ = checked(TodoRepo::new(&state.pool).create(&title).await);
        }
        Err(err) => tracing::debug!("rejected add: {err}"),
    }
    Redirect::to("/")
}

/// POST /toggle - flip the finished flag of one task, then redirect.
///
/// Read-then-write with no transaction: concurrent toggles of the same id
/// are last-write-wins.
async fn toggle(State(state): State<Arc<AppState>>, Form(form): Form<IdForm>) -> Redirect {
    let id = match parse_todo_id(&form.id) {
        Ok(id) => id,
        Err(err) => {
            tracing::debug!("rejected toggle: {err}");
            return Redirect::to("/");
        }
    };

    let repo = TodoRepo::new(&state.pool);
    let Some(todos) = checked(repo.list_all().await) else {
        return Redirect::to("/");
    };
    let Some(current) = todos.into_iter().find(|t| t.id == id) else {
        return Redirect::to("/");
    };

    let _ = checked(repo.update(current.id, &current.title, !current.finished).await);
    Redirect::to("/")
}

/// POST /delete - remove one task by id, then redirect.
async fn delete(State(state): State<Arc<AppState>>, Form(form): Form<IdForm>) -> Redirect {
    match parse_todo_id(&form.id) {
        Ok(id) => {
            let _ = checked(TodoRepo::new(&state.pool).delete(id).await);
        }
        Err(err) => tracing::debug!("rejected delete: {err}"),
    }
    Redirect::to("/")
}

/// POST /delete-finished - remove every finished task, then redirect.
async fn delete_finished(State(state): State<Arc<AppState>>) -> Redirect {
    if let Some(count) = checked(TodoRepo::new(&state.pool).delete_finished().await) {
        tracing::info!("removed {count} finished todos");
    }
    Redirect::to("/")
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/add", post(add))
        .route("/toggle", post(toggle))
        .route("/delete", post(delete))
        .route("/delete-finished", post(delete_finished))
}
