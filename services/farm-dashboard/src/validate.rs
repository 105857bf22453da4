//! Input checks applied before a checker mutation is sent

use crate::api::NewChecker;

/// Operator input rejected before any request is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("port number must be a valid integer")]
    InvalidPort,

    #[error("timestamp delta must be a valid integer")]
    InvalidDelta,

    #[error("service name must not be nothing")]
    EmptyService,
}

/// True for finite integer values in `1..=65535`
pub fn is_port_valid(port: f64) -> bool {
    port.is_finite() && port.fract() == 0.0 && port > 0.0 && port <= f64::from(u16::MAX)
}

/// Smallest delta rejected for exceeding `i64`; `i64::MAX` is not exact in `f64`
const DELTA_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// True for finite values that fit an `i64`; zero and negative deltas are accepted
pub fn is_delta_valid(delta: f64) -> bool {
    delta.is_finite() && delta >= -DELTA_LIMIT && delta < DELTA_LIMIT
}

pub fn is_service_valid(service: &str) -> bool {
    !service.trim().is_empty()
}

/// Parse the leading integer of an operator-typed field.
///
/// Leading whitespace and a single sign are accepted, parsing stops at the
/// first non-digit, and input without any leading digit yields `NaN`.
pub fn parse_int(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return f64::NAN;
    }

    let value = rest[..digits_len].parse::<f64>().unwrap_or(f64::NAN);
    if negative {
        -value
    } else {
        value
    }
}

/// Check port, delta and service in that order and build the request body
pub fn validate_new_checker(
    service: &str,
    port: f64,
    delta: f64,
) -> Result<NewChecker, ValidationError> {
    if !is_port_valid(port) {
        return Err(ValidationError::InvalidPort);
    }
    if !is_delta_valid(delta) {
        return Err(ValidationError::InvalidDelta);
    }
    if !is_service_valid(service) {
        return Err(ValidationError::EmptyService);
    }

    Ok(NewChecker {
        service: service.to_string(),
        port: port as u16,
        delta: delta as i64,
    })
}
