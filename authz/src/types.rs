//! Request, decision and wire types for the request authorizer.
//!
//! The wire types ([`AuthorizerResponse`], [`PolicyDocument`], [`Statement`])
//! follow the API gateway authorizer contract exactly. Field names and order
//! are part of that contract, so do not rename them.

use crate::error::{AuthzError, Result};
use crate::UNAUTHORIZED_PREFIX;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::Display;

/// IAM policy language version emitted in every policy document.
pub const POLICY_VERSION: &str = "2012-10-17";

/// The single action every statement grants or denies.
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

/// Resource covered by every decision.
pub const ANY_RESOURCE: &str = "*";

/// Inbound request as seen by the authorizer: just its headers.
///
/// Header names are kept exactly as presented; lookups are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl AuthorizationRequest {
    /// Creates a request with no headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, replacing any previous value under the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Returns the value of the header with exactly this name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Builds a request from a raw gateway event.
    ///
    /// Only `headers` is read. Only a missing `headers` key means no headers;
    /// `null` or anything else that is not an object of strings is rejected.
    pub fn from_event(event: &Value) -> Result<Self> {
        let event = event.as_object().ok_or_else(|| {
            AuthzError::MalformedRequest(format!(
                "event must be a JSON object, got {}",
                json_type_name(event)
            ))
        })?;

        let headers = match event.get("headers") {
            None => return Ok(Self::new()),
            Some(Value::Object(headers)) => headers,
            Some(other) => {
                return Err(AuthzError::MalformedRequest(format!(
                    "headers must be an object, got {}",
                    json_type_name(other)
                )))
            }
        };

        let mut request = Self::new();
        for (name, value) in headers {
            let value = value.as_str().ok_or_else(|| {
                AuthzError::MalformedRequest(format!(
                    "header '{}' must be a string, got {}",
                    name,
                    json_type_name(value)
                ))
            })?;
            request.headers.insert(name.clone(), value.to_string());
        }

        Ok(request)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Statement effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Effect {
    Allow,
    Deny,
}

/// Outcome of a single authorization.
///
/// Allow always carries a non-empty principal, Deny always carries a reason. A
/// decision cannot be both, and only the constructors below can build one.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyDecision {
    outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Allow {
        principal_id: String,
        context: Map<String, Value>,
    },
    Deny {
        error_message: String,
    },
}

impl PolicyDecision {
    /// Allow decision for `principal_id` carrying `user` and `roles` context.
    ///
    /// Fails with [`AuthzError::InvalidConfig`] when `principal_id` is empty.
    pub fn allow<I, S>(principal_id: impl Into<String>, roles: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let principal_id = principal_id.into();
        if principal_id.is_empty() {
            return Err(AuthzError::InvalidConfig(
                "principal_id must not be empty".to_string(),
            ));
        }

        let roles: Vec<Value> = roles
            .into_iter()
            .map(|role| Value::String(role.into()))
            .collect();

        let mut context = Map::new();
        context.insert("user".to_string(), Value::String(principal_id.clone()));
        context.insert("roles".to_string(), Value::Array(roles));

        Ok(Self {
            outcome: Outcome::Allow {
                principal_id,
                context,
            },
        })
    }

    pub fn deny(error_message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Deny {
                error_message: error_message.into(),
            },
        }
    }

    /// Deny decision for an unexpected failure, carrying its description.
    pub fn fault(error: impl Display) -> Self {
        Self::deny(format!("{}{}", UNAUTHORIZED_PREFIX, error))
    }

    pub fn effect(&self) -> Effect {
        match self.outcome {
            Outcome::Allow { .. } => Effect::Allow,
            Outcome::Deny { .. } => Effect::Deny,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.effect() == Effect::Allow
    }

    /// Principal of an Allow decision, empty for Deny.
    pub fn principal_id(&self) -> &str {
        match &self.outcome {
            Outcome::Allow { principal_id, .. } => principal_id,
            Outcome::Deny { .. } => "",
        }
    }

    pub fn resource(&self) -> &'static str {
        ANY_RESOURCE
    }

    pub fn context(&self) -> Option<&Map<String, Value>> {
        match &self.outcome {
            Outcome::Allow { context, .. } => Some(context),
            Outcome::Deny { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Allow { .. } => None,
            Outcome::Deny { error_message } => Some(error_message),
        }
    }
}

/// One statement of a policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub action: String,
    pub effect: Effect,
    pub resource: String,
}

/// IAM policy document returned to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

impl PolicyDocument {
    /// Single-statement document invoking any resource with `effect`.
    pub fn invoke(effect: Effect) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: vec![Statement {
                action: INVOKE_ACTION.to_string(),
                effect,
                resource: ANY_RESOURCE.to_string(),
            }],
        }
    }
}

/// Authorizer response in the gateway's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerResponse {
    pub principal_id: String,
    pub policy_document: PolicyDocument,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub context: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<&PolicyDecision> for AuthorizerResponse {
    fn from(decision: &PolicyDecision) -> Self {
        Self {
            principal_id: decision.principal_id().to_string(),
            policy_document: PolicyDocument::invoke(decision.effect()),
            context: decision.context().cloned().unwrap_or_default(),
            error_message: decision.error_message().map(str::to_string),
        }
    }
}

impl From<PolicyDecision> for AuthorizerResponse {
    fn from(decision: PolicyDecision) -> Self {
        Self::from(&decision)
    }
}
