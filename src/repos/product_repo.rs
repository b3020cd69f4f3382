/*
 * Responsibility
 * - products テーブル向け SQLx 操作
 * - wishlist の前提条件チェック (存在確認) だけを提供
 */
use sqlx::PgPool;

use crate::repos::error::RepoError;

pub async fn exists(db: &PgPool, product_id: i64) -> Result<bool, RepoError> {
    let found: Option<(i64,)> = sqlx::query_as(
        r#"
        SELECT "productId"
        FROM products
        WHERE "productId" = $1
        "#,
    )
    .bind(product_id)
    .fetch_optional(db)
    .await?;

    Ok(found.is_some())
}
