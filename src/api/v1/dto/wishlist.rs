/*
 * Responsibility
 * - Wishlist の request/response DTO
 * - validation (形式チェック) 用の validate() を持たせても良い
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddWishlistRequest {
    pub product_id: i64,
}

impl AddWishlistRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.product_id <= 0 {
            return Err("product_id must be positive");
        }
        Ok(())
    }
}

/// Product ids associated with the user after the operation.
#[derive(Debug, Serialize, Deserialize)]
pub struct WishlistResponse {
    pub product_ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddResultResponse {
    pub success: bool,
}
