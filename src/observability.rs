use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("parley.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("parley.client.request_errors");
pub(crate) static CLIENT_AUTH_REJECTIONS: Counter =
    Counter::new("parley.client.auth_rejections");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("parley.client.request_duration_seconds");
pub(crate) static CLIENT_PROMPT_MESSAGES: Moments =
    Moments::new("parley.client.prompt_messages");

pub(crate) static SESSION_TURNS: Counter = Counter::new("parley.session.turns");
pub(crate) static SESSION_TURN_FAILURES: Counter = Counter::new("parley.session.turn_failures");
pub(crate) static SESSION_TURNS_CANCELLED: Counter =
    Counter::new("parley.session.turns_cancelled");
pub(crate) static SESSION_CLEARS: Counter = Counter::new("parley.session.clears");
pub(crate) static SESSION_RESETS: Counter = Counter::new("parley.session.resets");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_counter(&CLIENT_AUTH_REJECTIONS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);
    collector.register_moments(&CLIENT_PROMPT_MESSAGES);

    collector.register_counter(&SESSION_TURNS);
    collector.register_counter(&SESSION_TURN_FAILURES);
    collector.register_counter(&SESSION_TURNS_CANCELLED);
    collector.register_counter(&SESSION_CLEARS);
    collector.register_counter(&SESSION_RESETS);
}
