#![allow(clippy::unwrap_used)]

use rust_apm_client::{
    error::LoggerError,
    logger::{self, config::Log},
};

#[test]
fn subscriber_can_only_be_installed_once() {
    let mut config = Log::default();
    config.console.enabled = true;

    let guard = logger::setup(&config, "apm-client-test", ["quick_xml"]);
    assert!(guard.is_ok());

    let second = logger::setup(&config, "apm-client-test", ["quick_xml"]);
    assert!(matches!(second, Err(LoggerError::SubscriberInit(_))));
}
