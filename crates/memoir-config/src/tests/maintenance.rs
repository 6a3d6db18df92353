use crate::{Config, MAINTENANCE_PORT_OFFSET};

use googletest::assert_that;
use googletest::prelude::eq;

// =========================================================================
// Maintenance Config Derivation Tests
// =========================================================================

#[test]
fn given_default_port_when_for_maintenance_then_port_shifted_down_by_offset() {
    // Given
    let config = Config::default();

    // When
    let derived = config.for_maintenance();

    // Then
    assert_that!(
        derived.server.port,
        eq(crate::DEFAULT_PORT - MAINTENANCE_PORT_OFFSET)
    );
}

#[test]
fn given_for_maintenance_when_called_then_original_untouched() {
    // Given
    let config = Config::default();

    // When
    let _derived = config.for_maintenance();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

#[test]
fn given_port_below_offset_when_for_maintenance_then_saturates_to_zero() {
    // Given
    let mut config = Config::default();
    config.server.port = 3;

    // When
    let derived = config.for_maintenance();

    // Then
    assert_that!(derived.server.port, eq(0));
}

#[test]
fn given_port_zero_when_for_maintenance_then_stays_zero() {
    // Given
    let mut config = Config::default();
    config.server.port = 0;

    // When
    let derived = config.for_maintenance();

    // Then
    assert_that!(derived.server.port, eq(0));
}

#[test]
fn given_for_maintenance_when_called_then_rest_of_config_identical() {
    // Given
    let mut config = Config::default();
    config.server.host = String::from("0.0.0.0");
    config.database.path = String::from("data/memoir.db");
    config.auth.secret = Some(String::from("0123456789abcdef"));

    // When
    let derived = config.for_maintenance();

    // Then
    assert_that!(derived.server.host.as_str(), eq("0.0.0.0"));
    assert_that!(derived.database.path.as_str(), eq("data/memoir.db"));
    assert_that!(
        derived.auth.secret.as_deref(),
        eq(Some("0123456789abcdef"))
    );
}
