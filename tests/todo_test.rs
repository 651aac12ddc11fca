//! Integration tests for the todo CRUD flow.

mod helpers;

use axum::http::StatusCode;

use helpers::TestApp;

async fn authed_app(email: &str) -> Option<(TestApp, String)> {
    let app = TestApp::spawn().await?;
    app.register(email, "password123").await;
    let token = app.login(email, "password123").await;
    Some((app, token))
}

#[tokio::test]
async fn test_create_todo() {
    let Some((app, token)) = authed_app("todo1@example.com").await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/todos",
            Some(serde_json::json!({ "description": "Buy milk" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body.get("description").unwrap().as_str().unwrap(),
        "Buy milk"
    );
    assert_eq!(
        response.body.get("completed").unwrap().as_bool().unwrap(),
        false
    );
    assert!(response.body.get("userId").is_some());
    assert!(response.body.get("createdAt").is_some());
}

#[tokio::test]
async fn test_create_todo_trims_description() {
    let Some((app, token)) = authed_app("todo2@example.com").await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/todos",
            Some(serde_json::json!({ "description": "  padded  " })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("description").unwrap().as_str().unwrap(),
        "padded"
    );
}

#[tokio::test]
async fn test_create_todo_rejects_blank_description() {
    let Some((app, token)) = authed_app("todo3@example.com").await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/todos",
            Some(serde_json::json!({ "description": "   " })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_todo_rejects_overlong_description() {
    let Some((app, token)) = authed_app("todo4@example.com").await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/todos",
            Some(serde_json::json!({ "description": "x".repeat(251) })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_todos() {
    let Some((app, token)) = authed_app("todo5@example.com").await else {
        return;
    };

    for desc in ["First", "Second", "Third"] {
        app.request(
            "POST",
            "/todos",
            Some(serde_json::json!({ "description": desc })),
            Some(&token),
        )
        .await;
    }

    let response = app.request("GET", "/todos", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_todos_completed_filter() {
    let Some((app, token)) = authed_app("todo6@example.com").await else {
        return;
    };

    app.request(
        "POST",
        "/todos",
        Some(serde_json::json!({ "description": "Open item" })),
        Some(&token),
    )
    .await;
    app.request(
        "POST",
        "/todos",
        Some(serde_json::json!({ "description": "Done item", "completed": true })),
        Some(&token),
    )
    .await;

    let response = app
        .request("GET", "/todos?completed=true", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].get("description").unwrap().as_str().unwrap(),
        "Done item"
    );

    // Unrecognized filter values are ignored.
    let response = app
        .request("GET", "/todos?completed=banana", None, Some(&token))
        .await;
    assert_eq!(response.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_todos_search_filter() {
    let Some((app, token)) = authed_app("todo7@example.com").await else {
        return;
    };

    app.request(
        "POST",
        "/todos",
        Some(serde_json::json!({ "description": "Buy groceries" })),
        Some(&token),
    )
    .await;
    app.request(
        "POST",
        "/todos",
        Some(serde_json::json!({ "description": "Walk the dog" })),
        Some(&token),
    )
    .await;

    let response = app
        .request("GET", "/todos?q=GROCER", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].get("description").unwrap().as_str().unwrap(),
        "Buy groceries"
    );
}

#[tokio::test]
async fn test_get_todo_by_id() {
    let Some((app, token)) = authed_app("todo8@example.com").await else {
        return;
    };

    let created = app
        .request(
            "POST",
            "/todos",
            Some(serde_json::json!({ "description": "Fetch me" })),
            Some(&token),
        )
        .await;
    let id = created.body.get("id").unwrap().as_i64().unwrap();

    let response = app
        .request("GET", &format!("/todos/{id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("id").unwrap().as_i64().unwrap(), id);
}

#[tokio::test]
async fn test_get_missing_todo_returns_404() {
    let Some((app, token)) = authed_app("todo9@example.com").await else {
        return;
    };

    let response = app
        .request("GET", "/todos/999999", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_todo() {
    let Some((app, token)) = authed_app("todo10@example.com").await else {
        return;
    };

    let created = app
        .request(
            "POST",
            "/todos",
            Some(serde_json::json!({ "description": "Original" })),
            Some(&token),
        )
        .await;
    let id = created.body.get("id").unwrap().as_i64().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/todos/{id}"),
            Some(serde_json::json!({ "completed": true })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("completed").unwrap().as_bool().unwrap(),
        true
    );
    // Omitted fields keep their stored values.
    assert_eq!(
        response.body.get("description").unwrap().as_str().unwrap(),
        "Original"
    );
}

#[tokio::test]
async fn test_delete_todo() {
    let Some((app, token)) = authed_app("todo11@example.com").await else {
        return;
    };

    let created = app
        .request(
            "POST",
            "/todos",
            Some(serde_json::json!({ "description": "Delete me" })),
            Some(&token),
        )
        .await;
    let id = created.body.get("id").unwrap().as_i64().unwrap();

    let response = app
        .request("DELETE", &format!("/todos/{id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("message").unwrap().as_str().unwrap(),
        "1 items deleted."
    );

    let response = app
        .request("GET", &format!("/todos/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_todo_returns_404() {
    let Some((app, token)) = authed_app("todo12@example.com").await else {
        return;
    };

    let response = app
        .request("DELETE", "/todos/424242", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "No item with id 424242 found."
    );
}

#[tokio::test]
async fn test_todos_are_scoped_per_user() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    app.register("owner@example.com", "password123").await;
    app.register("other@example.com", "password123").await;
    let owner_token = app.login("owner@example.com", "password123").await;
    let other_token = app.login("other@example.com", "password123").await;

    let created = app
        .request(
            "POST",
            "/todos",
            Some(serde_json::json!({ "description": "Private" })),
            Some(&owner_token),
        )
        .await;
    let id = created.body.get("id").unwrap().as_i64().unwrap();

    // The other user cannot see, update, or delete it.
    let response = app
        .request("GET", &format!("/todos/{id}"), None, Some(&other_token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "PUT",
            &format!("/todos/{id}"),
            Some(serde_json::json!({ "completed": true })),
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/todos/{id}"), None, Some(&other_token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/todos", None, Some(&other_token)).await;
    assert_eq!(response.body.as_array().unwrap().len(), 0);

    // Still visible to its owner.
    let response = app
        .request("GET", &format!("/todos/{id}"), None, Some(&owner_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
