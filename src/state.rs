/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - token: Bearer トークン検証器 (共有 secret は起動時に注入)
 *   - wishlist: Wishlist のオーケストレーション service
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::TokenValidator;
use crate::services::wishlist::WishlistService;

#[derive(Clone)]
pub struct AppState {
    pub token: Arc<TokenValidator>,
    pub wishlist: WishlistService,
}

impl AppState {
    pub fn new(token: Arc<TokenValidator>, wishlist: WishlistService) -> Self {
        Self { token, wishlist }
    }
}
