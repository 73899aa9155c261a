use crate::auth::TokenService;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::ids::new_call_id;
use crate::models::CallCredentials;

const USERNAME_REQUIRED: &str = "Username required";
const USERNAME_AND_CALL_ID_REQUIRED: &str = "Username and Call ID required";

/// Issues call credentials. Keeps no record of calls; any call id is accepted on join.
#[derive(Clone)]
pub struct CallService {
    tokens: TokenService,
    api_key: String,
}

impl CallService {
    pub fn new(config: &Config) -> Self {
        Self {
            tokens: TokenService::new(config),
            api_key: config.api_key.clone(),
        }
    }

    /// Token service used for signing, exposed so callers can verify issued tokens
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Start a new call for `username`
    pub fn create_call(&self, username: Option<&str>) -> Result<CallCredentials> {
        let username =
            present(username).ok_or_else(|| AppError::BadRequest(USERNAME_REQUIRED.to_string()))?;

        self.issue(new_call_id(), username)
    }

    /// Issue credentials for an existing call id, echoed back unchanged
    pub fn join_call(
        &self,
        username: Option<&str>,
        call_id: Option<&str>,
    ) -> Result<CallCredentials> {
        let (username, call_id) = present(username).zip(present(call_id)).ok_or_else(|| {
            AppError::BadRequest(USERNAME_AND_CALL_ID_REQUIRED.to_string())
        })?;

        self.issue(call_id.to_string(), username)
    }

    fn issue(&self, call_id: String, username: &str) -> Result<CallCredentials> {
        let token = self.tokens.generate_token(username)?;

        Ok(CallCredentials {
            call_id,
            token,
            api_key: self.api_key.clone(),
            user_id: username.to_string(),
        })
    }
}

/// Only absent or empty input counts as missing; anything else is kept verbatim.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::config::LogFormat;

    fn service() -> CallService {
        CallService::new(&Config {
            server_host: "localhost".to_string(),
            server_port: 5000,
            api_key: "test-api-key".to_string(),
            api_secret: "test-secret-key".to_string(),
            token_expiry_seconds: Some(3600),
            log_format: LogFormat::Pretty,
        })
    }

    #[test]
    fn test_create_call() {
        let calls = service();

        let created = calls.create_call(Some("alice")).expect("Should create call");

        assert_eq!(created.call_id.len(), 36);
        assert_eq!(created.api_key, "test-api-key");
        assert_eq!(created.user_id, "alice");
        assert_eq!(
            calls.tokens().verify_token(&created.token).unwrap().user_id,
            "alice"
        );
    }

    #[test]
    fn test_create_call_requires_username() {
        let calls = service();

        for username in [None, Some("")] {
            match calls.create_call(username) {
                Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Username required"),
                other => panic!("expected validation error, got {:?}", other.map(|c| c.call_id)),
            }
        }
    }

    #[test]
    fn test_whitespace_values_are_accepted_verbatim() {
        let calls = service();

        let created = calls.create_call(Some("   ")).expect("Should create call");
        assert_eq!(created.user_id, "   ");
        assert_eq!(
            calls.tokens().verify_token(&created.token).unwrap().user_id,
            "   "
        );

        let joined = calls
            .join_call(Some("bob"), Some(" "))
            .expect("Should join call");
        assert_eq!(joined.call_id, " ");
    }

    #[test]
    fn test_create_call_ids_are_distinct() {
        let calls = service();

        let ids: HashSet<String> = (0..10_000)
            .map(|_| calls.create_call(Some("alice")).unwrap().call_id)
            .collect();

        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_join_call_echoes_call_id() {
        let calls = service();

        let joined = calls
            .join_call(Some("bob"), Some("not-a-real-call"))
            .expect("Should join call");

        assert_eq!(joined.call_id, "not-a-real-call");
        assert_eq!(joined.user_id, "bob");
        assert_eq!(joined.api_key, "test-api-key");
    }

    #[test]
    fn test_join_call_is_repeatable() {
        let calls = service();

        let first = calls.join_call(Some("bob"), Some("room-1")).unwrap();
        let second = calls.join_call(Some("bob"), Some("room-1")).unwrap();

        for joined in [&first, &second] {
            assert_eq!(joined.call_id, "room-1");
            assert_eq!(
                calls.tokens().verify_token(&joined.token).unwrap().user_id,
                "bob"
            );
        }
    }

    #[test]
    fn test_join_call_requires_both_fields() {
        let calls = service();

        let cases = [
            (None, Some("room-1")),
            (Some(""), Some("room-1")),
            (Some("bob"), None),
            (Some("bob"), Some("")),
            (None, None),
        ];

        for (username, call_id) in cases {
            match calls.join_call(username, call_id) {
                Err(AppError::BadRequest(msg)) => {
                    assert_eq!(msg, "Username and Call ID required")
                }
                other => panic!("expected validation error, got {:?}", other.map(|c| c.call_id)),
            }
        }
    }
}
