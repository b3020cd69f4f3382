/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /wishlist を nest/merge
 * - Login 解決 middleware は app.rs 側で v1 全体に適用される
 */
use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    wishlist::{add_wishlist, clear_wishlist, create_wishlist, list_wishlist, remove_wishlist},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route(
            "/wishlist",
            get(list_wishlist)
                .post(create_wishlist)
                .delete(clear_wishlist),
        )
        .route(
            "/wishlist/{product_id}",
            put(add_wishlist).delete(remove_wishlist),
        )
}
