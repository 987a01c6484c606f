use anyhow::{Context, Result};
use authz::{
    error::AuthzError,
    types::{AuthorizerResponse, PolicyDecision},
    Authorizer,
};
use serde_json::Value;
use std::io::Read;

/// Event source meaning "read from stdin"
pub const STDIN_SOURCE: &str = "-";

/// Authorize one gateway event and print the policy response to stdout
///
/// Returns the decision so the caller can pick an exit code.
pub fn execute(authorizer: &Authorizer, source: &str, compact: bool) -> Result<PolicyDecision> {
    let raw = read_event(source)?;
    let decision = decide(authorizer, &raw);

    let response = AuthorizerResponse::from(&decision);
    let output = if compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    println!("{}", output);

    Ok(decision)
}

/// Decide a raw event body; text that is not JSON is denied
pub fn decide(authorizer: &Authorizer, raw: &str) -> PolicyDecision {
    match serde_json::from_str::<Value>(raw) {
        Ok(event) => authorizer.authorize_event(&event),
        Err(e) => PolicyDecision::fault(AuthzError::MalformedRequest(e.to_string())),
    }
}

fn read_event(source: &str) -> Result<String> {
    if source == STDIN_SOURCE {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read event from stdin")?;
        Ok(raw)
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read event file {:?}", source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authz::{config::SAMPLE_REFERENCE_TOKEN, INVALID_TOKEN_MESSAGE};

    #[test]
    fn test_decide_valid_event() {
        let authorizer = Authorizer::default();
        let raw = format!(
            r#"{{"headers":{{"Authorization":"Bearer {}"}}}}"#,
            SAMPLE_REFERENCE_TOKEN
        );
        assert!(decide(&authorizer, &raw).is_allowed());
    }

    #[test]
    fn test_decide_wrong_token() {
        let authorizer = Authorizer::default();
        let decision = decide(&authorizer, r#"{"headers":{"Authorization":"Bearer wrong"}}"#);
        assert_eq!(decision.error_message(), Some(INVALID_TOKEN_MESSAGE));
    }

    #[test]
    fn test_decide_not_json() {
        let authorizer = Authorizer::default();
        let decision = decide(&authorizer, "{ headers");
        assert!(!decision.is_allowed());
        assert!(decision
            .error_message()
            .unwrap()
            .starts_with("Unauthorized: Malformed request: "));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_event("/nonexistent/event.json").is_err());
    }
}
