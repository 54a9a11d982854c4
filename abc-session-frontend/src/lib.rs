//! Session data structures that are needed by a hosting frontend (a web page
//! or app embedding the QR widget), without pulling in the HTTP and crypto
//! dependencies of the main crate.
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// A notification emitted while a credential session is in progress.
///
/// This is the typed replacement for the string-dispatched message bus the
/// browser widget historically used: a closed set of variants that a hosting
/// page can match on exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionUpdate {
    /// The session was created; `content` is the QR payload the token holder
    /// should scan (an object with at least the `u` and `v` fields).
    TokenData { content: Json },
    /// A token holder picked up the session pointer and connected.
    ClientConnected,
    /// The session reached a terminal state.
    Done,
    /// A message that was relayed but not understood. Kept so that frontends
    /// can log protocol drift instead of dropping it silently.
    Unknown { message: String },
}
