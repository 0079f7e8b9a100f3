mod account;
mod browse;
mod config;
mod profiles;
mod session;
mod signin;

pub mod prelude {
    /// Transactions, session handling and profile builders for the UniMarket
    /// load test.
    ///
    /// Scenario binaries should only need to depend on this crate; the goose
    /// prelude is re-exported below.
    pub use crate::account::*;
    pub use crate::browse::*;
    pub use crate::config::Credentials;
    pub use crate::profiles::{anonymous_browser, authenticated_user};
    pub use crate::session::{Session, SigninResponse};
    pub use crate::signin::sign_in;

    /// Re-export of the `goose` prelude.
    ///
    /// This is for convenience so that scenarios can depend on a single crate
    /// for the runner.
    pub use goose::prelude::*;
}
