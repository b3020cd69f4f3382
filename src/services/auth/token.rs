use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::{error::Error as StdError, fmt};

// Errors returned by login-token verification + strict claim validation.
#[derive(Debug)]
pub enum TokenError {
    Jwt(jsonwebtoken::errors::Error),
    EmptyClaim(&'static str),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::EmptyClaim(name) => write!(f, "empty '{}' claim", name),
        }
    }
}

impl StdError for TokenError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Login token (JWT) claims.
///
/// Typed on purpose: a token whose `id` / `email` is missing or has the
/// wrong JSON type fails at decode as `TokenError::Jwt`, instead of
/// surfacing later as a per-claim cast fault.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginClaims {
    pub id: i64,
    pub email: String,

    // `exp` is validated when present; tokens without it do not expire.
    #[serde(default)]
    pub exp: Option<u64>,
}

/// HS256 login-token verifier.
///
/// - The shared secret is injected at construction (no process-wide
///   singleton) and is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("TokenValidator")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenValidator {
    pub fn new(secret: &[u8], leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret);

        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` stays optional: still checked when the claim is present.
        validation.required_spec_claims.clear();
        validation.validate_aud = false;
        validation.leeway = leeway_seconds;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify signature + expiry and decode the claims.
    ///
    /// `jsonwebtoken::Validation` already checks:
    /// - signature (a malformed token and a bad signature both end up here)
    /// - `exp` when the claim is present
    ///
    /// This method additionally rejects an empty `email` claim.
    pub fn validate(&self, token: &str) -> Result<LoginClaims, TokenError> {
        let data =
            jsonwebtoken::decode::<LoginClaims>(token, &self.decoding_key, &self.validation)?;

        let claims = data.claims;
        if claims.email.trim().is_empty() {
            return Err(TokenError::EmptyClaim("email"));
        }

        Ok(claims)
    }
}
