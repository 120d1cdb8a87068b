//! Response envelope normalization
//!
//! Backend list endpoints answer with either a bare JSON sequence or an
//! envelope object carrying the payload under a `data` field. Both shapes
//! normalize to one: a bare sequence is returned unchanged, then the `data`
//! field is read, then anything else becomes the empty sequence. Shape
//! mismatch is never an error.

use serde::Deserialize;

/// List response body in any of the shapes the backend produces.
///
/// Variant order is the precedence rule: bare sequence first, `data`
/// envelope second, everything else collapses to empty.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// Bare sequence at the top level
    Items(Vec<T>),
    /// Sequence wrapped in a `data` envelope
    Enveloped { data: Vec<T> },
    /// Any other shape, normalized to the empty sequence
    Other(serde_json::Value),
}

impl<T> ListPayload<T> {
    /// Normalize the payload into a plain sequence
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListPayload::Items(items) => items,
            ListPayload::Enveloped { data } => data,
            ListPayload::Other(_) => Vec::new(),
        }
    }
}

/// Single-object response body, bare or wrapped in a `data` envelope.
///
/// Unlike lists there is no empty fallback; an unrecognizable shape is a
/// decode error at the call site.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    /// Bare object at the top level
    Bare(T),
    /// Object wrapped in a `data` envelope
    Wrapped { data: T },
}

impl<T> Envelope<T> {
    /// Unwrap the payload
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Bare(inner) => inner,
            Envelope::Wrapped { data } => data,
        }
    }
}
