use gumdrop::Options;
use httpmock::MockServer;

use goose::config::GooseConfiguration;
use goose::goose::Scenario;
use goose::metrics::GooseMetrics;
use goose::GooseAttack;

/// Not all helpers are used by all test files, so we enable allow(dead_code)
/// to avoid compiler warnings during testing.

/// The following options are configured by default, if not set to a custom
/// value:
///  --no-telnet
///  --no-websocket
///  --host <mock-server>
///  --users 1
///  --hatch-rate 1
///  --run-time 1
#[allow(dead_code)]
pub fn build_configuration(server: &MockServer, custom: Vec<&str>) -> GooseConfiguration {
    // Always disable the controllers: nothing here drives a running attack,
    // and the fixed controller ports would collide between tests.
    let mut configuration: Vec<&str> = vec!["--no-telnet", "--no-websocket"];
    // Declare server_url here no matter what, so its lifetime is sufficient
    // when needed.
    let server_url = server.base_url();

    // Merge in all custom options first.
    configuration.extend_from_slice(&custom);

    // Default to using the mock server if not otherwise configured.
    if !configuration.contains(&"--host") {
        configuration.extend_from_slice(&["--host", &server_url]);
    }

    // Default to testing with 1 user if not otherwise configured.
    if !configuration.contains(&"--users") {
        configuration.extend_from_slice(&["--users", "1"]);
    }

    // Default to hatching 1 user per second if not otherwise configured.
    if !configuration.contains(&"--hatch-rate") {
        configuration.extend_from_slice(&["--hatch-rate", "1"]);
    }

    // Default to running for 1 second if not otherwise configured.
    if !configuration.contains(&"--run-time") {
        configuration.extend_from_slice(&["--run-time", "1"]);
    }

    // Parse the combined options to generate a GooseConfiguration.
    GooseConfiguration::parse_args_default(&configuration)
        .expect("failed to parse options and generate a configuration")
}

/// Create a GooseAttack from the configuration and scenarios.
#[allow(dead_code)]
pub fn build_load_test(configuration: GooseConfiguration, scenarios: Vec<Scenario>) -> GooseAttack {
    let mut goose_attack = GooseAttack::initialize_with_config(configuration)
        .expect("failed to initialize GooseAttack");

    for scenario in scenarios {
        goose_attack = goose_attack.register_scenario(scenario);
    }

    goose_attack
}

/// Run the actual load test, returning the GooseMetrics.
#[allow(dead_code)]
pub async fn run_load_test(goose_attack: GooseAttack) -> GooseMetrics {
    goose_attack
        .execute()
        .await
        .expect("failed to run GooseAttack")
}
