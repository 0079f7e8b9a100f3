use goose::config::GooseConfiguration;
use gumdrop::Options;
use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;
use unimarket_common::prelude::*;

/// A short single-user attack with the controller disabled, pointed at the
/// mock server.
fn attack_configuration(server: &MockServer) -> GooseConfiguration {
    let base_url = server.base_url();
    let args = vec![
        "--host",
        &base_url,
        "--users",
        "1",
        "--run-time",
        "2",
        "--no-telnet",
        "--no-websocket",
    ];
    GooseConfiguration::parse_args_default(&args).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_sign_in_gates_authenticated_requests_for_the_whole_run() {
    let server = MockServer::start();
    let signin = server.mock(|when, then| {
        when.method(POST).path("/signin");
        then.status(401)
            .json_body(json!({ "error": "Invalid login credentials" }));
    });
    let gated_paths = [
        "/api/profile",
        "/api/cart/count",
        "/api/cart",
        "/api/my-listings",
        "/api/purchases",
    ];
    let gated: Vec<_> = gated_paths
        .iter()
        .map(|path| {
            server.mock(|when, then| {
                when.path(*path);
                then.status(200);
            })
        })
        .collect();

    GooseAttack::initialize_with_config(attack_configuration(&server))
        .unwrap()
        .register_scenario(authenticated_user().unwrap())
        .execute()
        .await
        .unwrap();

    // One login attempt per virtual user, and not a single authenticated
    // request for the rest of the run.
    signin.assert_hits(1);
    for mock in &gated {
        assert_eq!(mock.hits(), 0);
    }
}
