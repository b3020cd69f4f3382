/*
 * Responsibility
 * - Bearer トークンの検証 (ヘッダ抽出 → 検証 → Login 解決)
 * - 成功時に、認証済み主体 (Login) を request extensions に載せる
 * - 匿名は拒否しない: Login を必須にするかは handler/extractor 側で決める
 */
use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::Login;
use crate::services::auth::TokenValidator;
use crate::state::AppState;

/// `/api/v1/*` にログイン解決を掛けるための middleware を適用する。
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, login_middleware))
}

async fn login_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    // Resolution failure is the anonymous case, never a rejection here.
    if let Some(login) = resolve_login(req.headers(), &state.token) {
        // middleware → extractor への受け渡し
        req.extensions_mut().insert(login);
    }

    next.run(req).await
}

/// Resolve the authenticated user from the request headers.
///
/// `None` covers both "no/invalid Authorization header" and "invalid
/// token"; callers cannot and need not distinguish the two.
pub fn resolve_login(headers: &HeaderMap, validator: &TokenValidator) -> Option<Login> {
    let auth = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = auth.strip_prefix("Bearer ")?;

    match validator.validate(token) {
        Ok(claims) => Some(Login::from_claims(claims)),
        Err(err) => {
            tracing::debug!(error = ?err, "bearer token rejected");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use jsonwebtoken::{Algorithm, EncodingKey, Header};
    use serde_json::json;

    use super::*;

    const SECRET: &[u8] = b"resolver-test-secret";

    fn validator() -> TokenValidator {
        TokenValidator::new(SECRET, 0)
    }

    fn signed_token(id: i64, email: &str, secret: &[u8]) -> String {
        let exp = chrono::Utc::now().timestamp() + 3600;
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &json!({"id": id, "email": email, "exp": exp}),
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn resolves_login_from_valid_bearer_token() {
        let token = signed_token(42, "user@example.com", SECRET);
        let headers = headers_with_authorization(&format!("Bearer {token}"));

        let login = resolve_login(&headers, &validator()).expect("login");
        assert_eq!(login.id, 42);
        assert_eq!(login.email, "user@example.com");
        assert_eq!(login.password, None);
    }

    #[test]
    fn missing_header_is_anonymous() {
        assert!(resolve_login(&HeaderMap::new(), &validator()).is_none());
    }

    #[test]
    fn non_bearer_prefix_is_anonymous() {
        let token = signed_token(1, "user@example.com", SECRET);

        for value in [
            format!("Basic {token}"),
            format!("bearer {token}"), // prefix match is literal
            token.clone(),
        ] {
            let headers = headers_with_authorization(&value);
            assert!(resolve_login(&headers, &validator()).is_none());
        }
    }

    #[test]
    fn invalid_signature_is_anonymous_not_a_fault() {
        let forged = signed_token(1, "user@example.com", b"another-secret");

        for value in [format!("Bearer {forged}"), "Bearer abc.def.ghi".to_string()] {
            let headers = headers_with_authorization(&value);
            assert!(resolve_login(&headers, &validator()).is_none());
        }
    }
}
