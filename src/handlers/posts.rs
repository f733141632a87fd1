/// Post handlers - HTTP endpoints for post operations
use crate::db::post_repo;
use crate::error::{AppError, Result};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;

/// Create request body.
///
/// Fields are `Option` so the handler can distinguish a missing key from an
/// empty value: only missing keys are rejected. Empty strings are accepted,
/// matching the service's presence-only validation contract.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Create a new post
///
/// `POST /posts` -> 201 `{id, message}`
pub async fn create_post(
    pool: web::Data<SqlitePool>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let (title, content, author) = match (&req.title, &req.content, &req.author) {
        (Some(title), Some(content), Some(author)) => (title, content, author),
        _ => return Err(AppError::Validation("Missing required fields".to_string())),
    };

    let id = post_repo::insert_post(&pool, title, content, author).await?;

    tracing::info!(post_id = id, "post created");

    Ok(HttpResponse::Created().json(serde_json::json!({
        "id": id,
        "message": "Post created successfully",
    })))
}

/// List all posts
///
/// `GET /posts` -> 200 JSON array, possibly empty
pub async fn list_posts(pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    let posts = post_repo::list_posts(&pool).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post by id
///
/// `GET /posts/{id}` -> 200 post object | 404
pub async fn get_post(
    pool: web::Data<SqlitePool>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    match post_repo::find_post_by_id(&pool, *post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// Delete a post by id
///
/// `DELETE /posts/{id}` -> 200 `{message}` | 404
pub async fn delete_post(
    pool: web::Data<SqlitePool>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let deleted = post_repo::delete_post(&pool, *post_id).await?;

    if deleted {
        tracing::info!(post_id = *post_id, "post deleted");
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Post deleted successfully",
        })))
    } else {
        Err(AppError::NotFound("Post not found".to_string()))
    }
}
