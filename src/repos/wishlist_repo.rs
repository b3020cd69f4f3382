/*
 * Responsibility
 * - wishlist (userId, productId) 関連テーブルの CRUD
 * - (userId, productId) の一意性はテーブル制約前提 (ON CONFLICT DO NOTHING)
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct WishlistRow {
    #[sqlx(rename = "userId")]
    pub user_id: i64,

    #[sqlx(rename = "productId")]
    pub product_id: i64,
}

pub async fn create(db: &PgPool, user_id: i64, product_id: i64) -> Result<WishlistRow, RepoError> {
    let row = sqlx::query_as::<_, WishlistRow>(
        r#"
        INSERT INTO wishlist ("userId", "productId")
        VALUES ($1, $2)
        ON CONFLICT ("userId", "productId") DO UPDATE
            SET "productId" = EXCLUDED."productId"
        RETURNING "userId", "productId"
        "#,
    )
    .bind(user_id)
    .bind(product_id)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn add(db: &PgPool, user_id: i64, product_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        INSERT INTO wishlist ("userId", "productId")
        VALUES ($1, $2)
        ON CONFLICT ("userId", "productId") DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(product_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn list_by_user(db: &PgPool, user_id: i64) -> Result<Vec<WishlistRow>, RepoError> {
    let rows = sqlx::query_as::<_, WishlistRow>(
        r#"
        SELECT "userId", "productId"
        FROM wishlist
        WHERE "userId" = $1
        ORDER BY "productId"
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn remove_one(db: &PgPool, user_id: i64, product_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM wishlist
        WHERE "userId" = $1 AND "productId" = $2
        "#,
    )
    .bind(user_id)
    .bind(product_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn clear_by_user(db: &PgPool, user_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM wishlist
        WHERE "userId" = $1
        "#,
    )
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
