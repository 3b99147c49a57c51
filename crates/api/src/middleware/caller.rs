//! Caller resolution for Axum handlers.
//!
//! Unlike a hard authentication extractor, this never rejects: anything that
//! is not a valid Bearer token resolves to [`Caller::anonymous`], and the
//! administrator gate turns that into a 401 inside the service.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use warden_core::auth::Caller;

use crate::auth::jwt::{validate_token, JwtConfig};
use crate::state::AppState;

/// The caller behind the current request.
///
/// ```ignore
/// async fn handler(
///     ResolvedCaller(caller): ResolvedCaller,
///     State(state): State<AppState>,
/// ) -> AppResult<Envelope<Vec<Role>>> {
///     state.roles.list(&caller).await
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ResolvedCaller(pub Caller);

impl FromRequestParts<AppState> for ResolvedCaller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(ResolvedCaller(resolve_caller(
            &parts.headers,
            &state.config.jwt,
        )))
    }
}

/// Resolve a [`Caller`] from the `Authorization` header.
pub fn resolve_caller(headers: &HeaderMap, jwt: &JwtConfig) -> Caller {
    let Some(auth_header) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) else {
        return Caller::anonymous();
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        tracing::debug!("Authorization header is not a Bearer token");
        return Caller::anonymous();
    };

    match validate_token(token, jwt) {
        Ok(claims) => Caller::with_role(claims.sub, claims.role),
        Err(e) => {
            tracing::debug!(error = %e, "Invalid or expired token");
            Caller::anonymous()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;
    use crate::auth::jwt::generate_access_token;

    fn jwt() -> JwtConfig {
        JwtConfig {
            secret: "caller-test-secret".to_string(),
            access_token_expiry_mins: 15,
        }
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn missing_header_is_anonymous() {
        assert!(resolve_caller(&HeaderMap::new(), &jwt()).is_anonymous());
    }

    #[test]
    fn non_bearer_scheme_is_anonymous() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert!(resolve_caller(&headers, &jwt()).is_anonymous());
    }

    #[test]
    fn garbage_token_is_anonymous() {
        let headers = headers_with("Bearer not-a-jwt");
        assert!(resolve_caller(&headers, &jwt()).is_anonymous());
    }

    #[test]
    fn valid_token_resolves_identity() {
        let token = generate_access_token(9, "admin", &jwt()).unwrap();
        let headers = headers_with(&format!("Bearer {token}"));

        let caller = resolve_caller(&headers, &jwt());
        assert_eq!(caller, Caller::with_role(9, "admin"));
    }
}
