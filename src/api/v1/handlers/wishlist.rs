/*
 * Responsibility
 * - /wishlist 系 handler
 * - LoginUser extractor で認証済みユーザーを受け、service に委譲
 * - WishlistError → AppError の変換で HTTP status を決める
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::wishlist::{AddResultResponse, AddWishlistRequest, WishlistResponse},
        extractors::LoginUser,
    },
    error::AppError,
    state::AppState,
};

pub async fn list_wishlist(
    State(state): State<AppState>,
    LoginUser(login): LoginUser,
) -> Result<Json<WishlistResponse>, AppError> {
    let product_ids = state.wishlist.list(login.id).await?;

    Ok(Json(WishlistResponse { product_ids }))
}

pub async fn create_wishlist(
    State(state): State<AppState>,
    LoginUser(login): LoginUser,
    Json(req): Json<AddWishlistRequest>,
) -> Result<(StatusCode, Json<WishlistResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_PRODUCT_ID", msg))?;

    let product_ids = state.wishlist.create(login.id, req.product_id).await?;

    Ok((StatusCode::CREATED, Json(WishlistResponse { product_ids })))
}

pub async fn add_wishlist(
    State(state): State<AppState>,
    LoginUser(login): LoginUser,
    Path(product_id): Path<i64>,
) -> Result<Json<AddResultResponse>, AppError> {
    let success = state.wishlist.add(login.id, product_id).await?;

    Ok(Json(AddResultResponse { success }))
}

pub async fn remove_wishlist(
    State(state): State<AppState>,
    LoginUser(login): LoginUser,
    Path(product_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let removed = state.wishlist.remove_one(login.id, product_id).await?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        // The association did not exist (distinct from a storage failure,
        // which surfaces as 500 via WishlistError::Store).
        Err(AppError::not_found("wishlist entry"))
    }
}

pub async fn clear_wishlist(
    State(state): State<AppState>,
    LoginUser(login): LoginUser,
) -> Result<StatusCode, AppError> {
    // Clearing an already-empty wishlist is still a successful clear.
    state.wishlist.clear(login.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
