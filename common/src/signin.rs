use crate::config::Credentials;
use crate::session::SigninResponse;
use goose::prelude::*;
use serde_json::json;

const SIGNIN_PATH: &str = "/signin";
const SIGNIN_NAME: &str = "/signin [login]";

/// Signs in once per virtual user and stores the session for the
/// token-gated transactions.
///
/// Registered as an on-start transaction. A non-200 status, an unparsable
/// body or a missing access token is reported as a failure for this request
/// and leaves the user without session data, so authenticated transactions
/// never fire for it. There is no retry later in the run.
pub async fn sign_in(user: &mut GooseUser) -> TransactionResult {
    let credentials = Credentials::from_env();
    let body = json!({
        "email": credentials.email,
        "password": credentials.password,
    });

    let request_builder = user
        .get_request_builder(&GooseMethod::Post, SIGNIN_PATH)?
        .json(&body);
    let signin_request = GooseRequest::builder()
        .method(GooseMethod::Post)
        .path(SIGNIN_PATH)
        .name(SIGNIN_NAME)
        .set_request_builder(request_builder)
        .build();

    let mut goose = user.request(signin_request).await?;

    match goose.response {
        Ok(response) if response.status() == 200 => {
            let headers = response.headers().clone();
            match response.json::<SigninResponse>().await {
                Ok(parsed) => match parsed.into_session() {
                    Some(session) => {
                        log::debug!("signed in as {:?}", session.user_id);
                        user.set_session_data(session);
                        Ok(())
                    }
                    None => user.set_failure(
                        "missing token in signin response",
                        &mut goose.request,
                        Some(&headers),
                        None,
                    ),
                },
                Err(_) => user.set_failure(
                    "unparsable signin response",
                    &mut goose.request,
                    Some(&headers),
                    None,
                ),
            }
        }
        Ok(response) => {
            let message = format!("signin failed with status {}", response.status());
            let headers = response.headers().clone();
            user.set_failure(&message, &mut goose.request, Some(&headers), None)
        }
        Err(_) => user.set_failure("no response to signin", &mut goose.request, None, None),
    }
}
