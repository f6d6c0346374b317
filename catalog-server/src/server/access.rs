//! Access Policy
//!
//! CORS origin allow-list and the admin shared-secret check, plus the
//! middleware that stamps the policy header set onto every response the
//! router produces, success or failure.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, header},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use shared::{AppError, AppResult};

use crate::server::ServerState;

/// Header the admin UI presents its credential in.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Admin-Password";

/// Per-process access policy, derived from configuration at startup.
///
/// Mutation authorization is a single shared-secret equality check: any
/// holder of the secret has full write power. The secret is supplied
/// out-of-band to the trusted admin UI; this is not a multi-tenant boundary.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    allowed_origins: Vec<String>,
    admin_password: String,
}

impl AccessPolicy {
    pub fn new(allowed_origins: Vec<String>, admin_password: String) -> Self {
        Self {
            allowed_origins,
            admin_password,
        }
    }

    /// Echo for allow-listed origins; `None` omits the header, and the
    /// browser then blocks cross-origin reads of the response.
    pub fn allowed_origin<'a>(&self, origin: Option<&'a str>) -> Option<&'a str> {
        origin.filter(|o| self.allowed_origins.iter().any(|allowed| allowed == o))
    }

    /// Shared-secret equality for mutating operations. An unset secret never
    /// authorizes.
    pub fn is_admin(&self, credential: Option<&str>) -> bool {
        !self.admin_password.is_empty() && credential == Some(self.admin_password.as_str())
    }
}

/// Reject a mutating request unless it carries the admin secret.
pub fn require_admin(policy: &AccessPolicy, headers: &HeaderMap) -> AppResult<()> {
    let credential = headers
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|v| v.to_str().ok());

    if policy.is_admin(credential) {
        Ok(())
    } else {
        warn!(target: "security", event = "admin_auth_failed", "Mutation rejected");
        Err(AppError::InvalidCredentials)
    }
}

/// Attach the policy header set to every response before it is written.
///
/// Applied as the outermost layer so no branch, including error responses,
/// can exit without it.
pub async fn apply_access_headers(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );

    // Preflight carries no credential and no payload, so it is answered
    // permissively; everything else echoes only allow-listed origins.
    let allow_origin = if method == Method::OPTIONS {
        Some(origin.as_deref().unwrap_or("*"))
    } else {
        state.policy().allowed_origin(origin.as_deref())
    };

    if let Some(origin) = allow_origin
        && let Ok(value) = HeaderValue::from_str(origin)
    {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }

    response
}
