//! Per-endpoint metric events in the naming scheme of the established
//! monitoring pipeline: one counter per response status and one latency
//! histogram per endpoint, with the volatile flight-identifier path segment
//! replaced by a stable token so all flights aggregate under one name.

/// Token substituted for the flight identifier in seat paths.
pub const FLIGHT_ID_TOKEN: &str = "$flightID";

/// Receives the metric events emitted after each scenario response.
pub trait MetricsSink {
    /// Count `value` occurrences of `name`.
    fn counter(&self, name: &str, value: u64);

    /// Record a latency observation for `name`, in milliseconds.
    fn histogram(&self, name: &str, value: u64);
}

/// Default sink: hands the events to the `log` facade, which the load-test
/// engine routes to its configured log output.
pub struct LogSink;

impl MetricsSink for LogSink {
    fn counter(&self, name: &str, value: u64) {
        info!("counter {} +{}", name, value);
    }

    fn histogram(&self, name: &str, value: u64) {
        info!("histogram {} {}", name, value);
    }
}

/// Strip the query string and replace the flight identifier in seat paths
/// with [`FLIGHT_ID_TOKEN`], so metrics aggregate per endpoint rather than
/// per flight: `/flights/42/seats` and `/flights/d9cbee/seats` both
/// normalize to `/flights/$flightID/seats`. All other paths pass through
/// unchanged.
pub fn normalize_path(path: &str) -> String {
    let base = match path.find('?') {
        Some(index) => &path[..index],
        None => path,
    };
    if base.ends_with("/seats") {
        let mut segments: Vec<&str> = base.split('/').collect();
        if segments.len() > 2 {
            segments[2] = FLIGHT_ID_TOKEN;
        }
        return segments.join("/");
    }
    base.to_string()
}

/// Synthesize the base metric name for one scenario response.
fn metric_name(scenario: &str, method: &str, path: &str) -> String {
    format!("scenario.{}.{}.{}", scenario, method, normalize_path(path))
}

/// Emit the counter and histogram events for one completed response.
pub fn record_response(
    sink: &dyn MetricsSink,
    scenario: &str,
    method: &str,
    path: &str,
    status_code: u16,
    response_time: u64,
) {
    let name = metric_name(scenario, method, path);
    sink.counter(&format!("{}.response.{}", name, status_code), 1);
    sink.histogram(&format!("{}.total", name), response_time);
}
