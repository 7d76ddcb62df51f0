use std::time::Duration;
use thiserror::Error;

/// Rejected render configuration input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid hex color {0:?}")]
    InvalidColor(String),
    #[error("particle count must be at least 1")]
    EmptyPointCloud,
    #[error("unknown archetype {0:?}")]
    UnknownArchetype(String),
}

/// Problems with the hand detector or with a single detection.
///
/// None of these are fatal: the tracker degrades to the fallback signal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectionError {
    #[error("landmark set too short: expected at least {expected} points, found {found}")]
    Malformed { expected: usize, found: usize },
    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("flat landmark buffer length {0} is not a multiple of 3")]
    Ragged(usize),
    #[error("detector unavailable: {0}")]
    Unavailable(String),
    #[error("detector did not initialise within {0:?}")]
    TimedOut(Duration),
}

/// Ornament image could not be resolved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssetError {
    #[error("image {0:?} not found")]
    Missing(String),
    #[error("image {path:?} unreadable: {reason}")]
    Unreadable { path: String, reason: String },
}
