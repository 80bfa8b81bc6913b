//! Turns raw endpoint responses into typed results or classified failures.

use serde_json::Value;
use std::fmt::Display;

use super::endpoint::{CookEndpoint, Endpoint, NutritionEndpoint};
use crate::model::{DebugInfo, ErrorInfo, FailureKind, Mode, ModeResult};

pub const NON_JSON_MESSAGE: &str = "Server returned non-JSON response.";
pub const UNEXPECTED_SHAPE_MESSAGE: &str = "Server returned an unexpected response.";
pub const GENERIC_MESSAGE: &str = "Something went wrong.";
pub const CONNECT_MESSAGE: &str = "Failed to connect to server.";

/// Parse a response from endpoint `E`.
///
/// `request_url` is the recipe URL that was submitted; it is recorded in the
/// debug details of any failure.
pub fn parse<E: Endpoint>(
    status: u16,
    body: &str,
    request_url: &str,
    http_ok: bool,
) -> Result<E::Output, ErrorInfo> {
    let debug = || DebugInfo {
        status: Some(status),
        url: request_url.to_string(),
        body: body.to_string(),
    };

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => {
            return Err(ErrorInfo {
                user_message: NON_JSON_MESSAGE.to_string(),
                blocked: false,
                kind: FailureKind::MalformedResponse,
                debug: Some(debug()),
            })
        }
    };

    if !http_ok {
        // `error` and `blocked` are read independently; a mistyped one
        // does not discard the other
        let blocked = value
            .get("blocked")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let user_message = value
            .get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(GENERIC_MESSAGE)
            .to_string();
        return Err(ErrorInfo {
            user_message,
            blocked,
            kind: if blocked {
                FailureKind::Blocked
            } else {
                FailureKind::Http
            },
            debug: Some(debug()),
        });
    }

    serde_json::from_value(value).map_err(|_| ErrorInfo {
        user_message: UNEXPECTED_SHAPE_MESSAGE.to_string(),
        blocked: false,
        kind: FailureKind::MalformedResponse,
        debug: Some(debug()),
    })
}

/// Parse a response for `mode`, wrapping the payload as a [`ModeResult`].
pub fn parse_mode(
    mode: Mode,
    status: u16,
    body: &str,
    request_url: &str,
    http_ok: bool,
) -> Result<ModeResult, ErrorInfo> {
    match mode {
        Mode::Cook => parse::<CookEndpoint>(status, body, request_url, http_ok).map(Into::into),
        Mode::Nutrition => {
            parse::<NutritionEndpoint>(status, body, request_url, http_ok).map(Into::into)
        }
    }
}

/// Failure for a request that never produced a response
pub fn transport_failure(request_url: &str, err: impl Display) -> ErrorInfo {
    ErrorInfo {
        user_message: CONNECT_MESSAGE.to_string(),
        blocked: false,
        kind: FailureKind::Transport,
        debug: Some(DebugInfo {
            status: None,
            url: request_url.to_string(),
            body: err.to_string(),
        }),
    }
}
