use crate::models::Post;
use sqlx::SqlitePool;

/// Insert a new post and return its assigned id.
///
/// Field presence is validated by the caller; this function persists whatever
/// it is given. The id comes from SQLite's autoincrement rowid, so concurrent
/// inserts never collide.
pub async fn insert_post(
    pool: &SqlitePool,
    title: &str,
    content: &str,
    author: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO posts (title, content, author)
        VALUES (?1, ?2, ?3)
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(author)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Fetch every post, ordered by ascending id.
///
/// Returns an empty vec (not an error) when the table is empty.
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author
        FROM posts
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Find a post by id. `None` when no row matches.
pub async fn find_post_by_id(pool: &SqlitePool, post_id: i64) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author
        FROM posts
        WHERE id = ?1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Delete a post by id. Returns whether a row was actually removed.
pub async fn delete_post(pool: &SqlitePool, post_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM posts
        WHERE id = ?1
        "#,
    )
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
