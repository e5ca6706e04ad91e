use biometrics::{Collector, Counter};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("autoqa.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("autoqa.client.request_errors");

pub(crate) static REPLY_SCREENSHOTS: Counter = Counter::new("autoqa.extract.screenshots");

pub(crate) static SESSION_QUERIES: Counter = Counter::new("autoqa.session.queries");
pub(crate) static SESSION_REJECTED_REENTRANT: Counter =
    Counter::new("autoqa.session.rejected_reentrant");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);

    collector.register_counter(&REPLY_SCREENSHOTS);

    collector.register_counter(&SESSION_QUERIES);
    collector.register_counter(&SESSION_REJECTED_REENTRANT);
}
