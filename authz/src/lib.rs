//! Bearer token request authorizer for the Fyora API gateway.
//!
//! This crate decides whether an inbound gateway request may invoke the API.
//! It looks at the request's `Authorization` header, compares the bearer
//! token with one configured reference token and produces an IAM style
//! policy decision for the gateway.
//!
//! # Authorization Flow
//!
//! 1. **Event arrives** from the gateway (or the HTTP/CLI hosts)
//! 2. **Headers** are extracted into an [`AuthorizationRequest`]
//! 3. **Authorizer** checks the `Bearer ` prefix and the token
//! 4. **Decision** is made: Allow (with principal and roles) or Deny (with a reason)
//! 5. **Response** is rendered in the gateway wire format ([`AuthorizerResponse`])
//!
//! # Security Note
//!
//! Token validation is a plain byte comparison against the reference token.
//! Signatures, expiry and issuer are not checked. Deploy behind a real token
//! verifier before trusting it with anything but integration traffic.
//!
//! [`AuthorizationRequest`]: types::AuthorizationRequest
//! [`AuthorizerResponse`]: types::AuthorizerResponse

pub mod config;
pub mod error;
pub mod types;

use config::AuthorizerConfig;
use error::Result;
use serde_json::Value;
use tracing::{debug, info, warn};
use types::{AuthorizationRequest, PolicyDecision};

/// Header carrying the bearer token. Matched case-sensitively.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Required scheme prefix, including the trailing space.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Prefix of every denial message.
pub const UNAUTHORIZED_PREFIX: &str = "Unauthorized: ";

pub const MISSING_HEADER_MESSAGE: &str = "Unauthorized: Missing or invalid Authorization header";
pub const INVALID_TOKEN_MESSAGE: &str = "Unauthorized: Invalid token";

/// Stateless decision function over a fixed [`AuthorizerConfig`].
///
/// Every method returns a decision; nothing here fails or panics on input, so
/// callers always have a well formed response to hand back to the gateway.
///
/// # Example
///
/// ```rust
/// use authz::{Authorizer, config::AuthorizerConfig, types::AuthorizationRequest};
///
/// let config = AuthorizerConfig::new("s3cret", "svc@fyora.com", vec!["ROLE_SERVICE".into()]);
/// let authorizer = Authorizer::new(config).unwrap();
///
/// let request = AuthorizationRequest::new().with_header("Authorization", "Bearer s3cret");
/// let decision = authorizer.authorize(&request);
/// assert!(decision.is_allowed());
/// assert_eq!(decision.principal_id(), "svc@fyora.com");
/// ```
#[derive(Debug, Clone)]
pub struct Authorizer {
    config: AuthorizerConfig,
}

impl Authorizer {
    /// Creates an authorizer, rejecting configurations that fail validation.
    pub fn new(config: AuthorizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AuthorizerConfig {
        &self.config
    }

    /// Decides a single request.
    pub fn authorize(&self, request: &AuthorizationRequest) -> PolicyDecision {
        let header = request.header(AUTHORIZATION_HEADER).unwrap_or_default();
        debug!(
            "AUTHORIZER: Authorization header present={} length={}",
            request.header(AUTHORIZATION_HEADER).is_some(),
            header.len()
        );

        let Some(token) = header.strip_prefix(BEARER_PREFIX) else {
            warn!("AUTHORIZER: Access DENIED, missing or non-bearer Authorization header");
            return PolicyDecision::deny(MISSING_HEADER_MESSAGE);
        };

        if token.as_bytes() != self.config.reference_token.as_bytes() {
            warn!("AUTHORIZER: Access DENIED, bearer token does not match");
            return PolicyDecision::deny(INVALID_TOKEN_MESSAGE);
        }

        info!(
            "AUTHORIZER: Access ALLOWED for principal {}",
            self.config.principal_id
        );
        PolicyDecision::allow(&self.config.principal_id, &self.config.roles)
            .unwrap_or_else(|e| PolicyDecision::fault(e))
    }

    /// Decides a raw gateway event. Malformed events become a Deny.
    pub fn authorize_event(&self, event: &Value) -> PolicyDecision {
        match AuthorizationRequest::from_event(event) {
            Ok(request) => self.authorize(&request),
            Err(e) => {
                warn!("AUTHORIZER: Access DENIED, {}", e);
                PolicyDecision::fault(e)
            }
        }
    }
}

impl Default for Authorizer {
    fn default() -> Self {
        Self {
            config: AuthorizerConfig::default(),
        }
    }
}
