use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use crate::state::AppState;

use super::Login;

/// Handler で、認証済み Login を受け取るための extractor
/// middleware が Login を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（匿名、またはトークン不正）
pub struct LoginUser(pub Login);

impl FromRequestParts<AppState> for LoginUser
where
    AppState: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Login>()
            .cloned()
            .map(LoginUser)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
