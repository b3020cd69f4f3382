/*
 * Responsibility
 * - Handler から見える「認証済みユーザー」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - JWT の検証ロジックは middleware/services 側の責務
 * - ここは「型（契約）」として固定化する
 */

use crate::services::auth::LoginClaims;

/// 認証済みリクエストの解決結果
///
/// - 1 リクエストのライフタイムに閉じる。永続化しない。
/// - `password` はトークン由来の Login では常に `None`（認証後は使わない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login {
    pub id: i64,
    pub email: String,
    pub password: Option<String>,
}

impl Login {
    pub fn from_claims(claims: LoginClaims) -> Self {
        Self {
            id: claims.id,
            email: claims.email,
            password: None,
        }
    }
}
