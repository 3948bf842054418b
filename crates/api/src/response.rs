//! Shared response envelope types for API handlers.
//!
//! Every operation result is wrapped in the same `{ ok, where, ... }` shape.
//! The `where` tag names the internal stage that produced the result, so
//! callers and tests can tell failure origins apart without parsing message
//! text. Use [`Envelope::ok`] instead of ad-hoc `serde_json::json!` payloads
//! to get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Stage tag for successful results.
pub const STAGE_OK: &str = "ok";

/// Standard `{ ok, where, ...payload }` response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub ok: bool,
    #[serde(rename = "where")]
    pub stage: &'static str,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a success payload under the `"ok"` stage.
    pub fn ok(payload: T) -> Self {
        Self {
            ok: true,
            stage: STAGE_OK,
            payload,
        }
    }
}
