//! Todo handlers. Every route requires authentication and is scoped to
//! the authenticated user by the repository layer.

use axum::Json;
use axum::extract::{Path, Query, State};

use todohub_core::error::AppError;
use todohub_entity::todo::{CreateTodo, TodoFilter, UpdateTodo};

use crate::dto::request::{CreateTodoRequest, TodoListQuery, UpdateTodoRequest, normalize_description};
use crate::dto::response::{MessageResponse, TodoResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /todos?q=<query>&completed=<true|false>
pub async fn list_todos(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<TodoListQuery>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let filter = TodoFilter {
        query: query.query_filter(),
        completed: query.completed_filter(),
    };

    let todos = state.todo_repo.find_all(auth.user.id, &filter).await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// GET /todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = state
        .todo_repo
        .find_by_id(id, auth.user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Not found"))?;

    Ok(Json(TodoResponse::from(todo)))
}

/// POST /todos
pub async fn create_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let description = normalize_description(&req.description)?;

    let todo = state
        .todo_repo
        .create(&CreateTodo {
            description,
            completed: req.completed,
            user_id: auth.user.id,
        })
        .await?;

    Ok(Json(TodoResponse::from(todo)))
}

/// PUT /todos/{id}
pub async fn update_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let description = req
        .description
        .as_deref()
        .map(normalize_description)
        .transpose()?;

    let update = UpdateTodo {
        description,
        completed: req.completed,
    };

    let todo = state
        .todo_repo
        .update(id, auth.user.id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Not found"))?;

    Ok(Json(TodoResponse::from(todo)))
}

/// DELETE /todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = state.todo_repo.delete(id, auth.user.id).await?;

    if deleted == 0 {
        return Err(AppError::not_found(format!("No item with id {id} found.")).into());
    }

    Ok(Json(MessageResponse {
        message: format!("{deleted} items deleted."),
    }))
}
