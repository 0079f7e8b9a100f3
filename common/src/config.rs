use std::env;

const DEFAULT_EMAIL: &str = "loadtest@example.com";
const DEFAULT_PASSWORD: &str = "LoadTest123!";

/// Fixed test-account identity used by every signing-in virtual user.
///
/// One seeded account, many concurrent logins. The account must exist in the
/// target deployment before the test starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Reads the test account from `UNIMARKET_TEST_EMAIL` and
    /// `UNIMARKET_TEST_PASSWORD`, falling back to the seeded defaults.
    pub fn from_env() -> Self {
        Self {
            email: env::var("UNIMARKET_TEST_EMAIL").unwrap_or_else(|_| DEFAULT_EMAIL.to_string()),
            password: env::var("UNIMARKET_TEST_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_PASSWORD.to_string()),
        }
    }
}
