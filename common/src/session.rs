use serde::Deserialize;

/// Per-user state established by the one-time sign-in exchange.
///
/// Stored in goose's per-user session data. Absence of a `Session` means the
/// user never obtained a token, and every token-gated transaction stays a
/// no-op for that user's remaining lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: Option<String>,
}

impl Session {
    /// The `Authorization` header value for authenticated requests.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Body returned by `POST /signin`.
///
/// Fields the load test does not consume (`message`, `redirect`) are ignored.
#[derive(Debug, Deserialize)]
pub struct SigninResponse {
    session: Option<SigninSession>,
    #[serde(rename = "userID")]
    user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SigninSession {
    access_token: Option<String>,
}

impl SigninResponse {
    /// Extracts a usable [`Session`], or `None` when the access token is
    /// missing from the response.
    pub fn into_session(self) -> Option<Session> {
        let token = self.session.and_then(|session| session.access_token)?;
        Some(Session {
            token,
            user_id: self.user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn well_formed_response_yields_session() {
        let body = r#"{
            "message": "Signin successful",
            "redirect": "../views/landingpage.html",
            "session": { "access_token": "abc", "token_type": "bearer" },
            "userID": "u1"
        }"#;
        let response: SigninResponse = serde_json::from_str(body).unwrap();
        let session = response.into_session().unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user_id, Some("u1".to_string()));
        assert_eq!(session.bearer(), "Bearer abc");
    }

    #[test]
    fn missing_session_object_yields_none() {
        let body = r#"{ "message": "Signin successful", "userID": "u1" }"#;
        let response: SigninResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_session().is_none());
    }

    #[test]
    fn missing_access_token_yields_none() {
        let body = r#"{ "session": { "token_type": "bearer" }, "userID": "u1" }"#;
        let response: SigninResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_session().is_none());
    }

    #[test]
    fn user_id_is_optional() {
        let body = r#"{ "session": { "access_token": "abc" } }"#;
        let response: SigninResponse = serde_json::from_str(body).unwrap();
        let session = response.into_session().unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user_id, None);
    }
}
