//! Timestamped payloads: stamped with the signing time for freshness checks.
//!
//! The timestamp is part of the signed canonical form, so changing it after
//! signing invalidates the signature. Expiry policy is left to the verifier.

use serde::{Deserialize, Serialize};

use crate::message::{Fields, Payload, SignedMessage};
use crate::shared::Clock;

/// A payload plus the unix time (seconds) at which it was signed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timestamped<T> {
    #[serde(flatten)]
    pub inner: T,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl<T> Timestamped<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            timestamp: None,
        }
    }
}

impl<T: Payload> Payload for Timestamped<T> {
    fn before_sign(&mut self, clock: &dyn Clock) {
        self.timestamp = Some(clock.now_unix());
        self.inner.before_sign(clock);
    }
}

/// A signed message whose payload is stamped at signing time.
pub type TimestampedMessage<T = Fields> = SignedMessage<Timestamped<T>>;

impl<T> SignedMessage<Timestamped<T>> {
    /// Wrap an unsigned, unstamped payload.
    pub fn timestamped(inner: T) -> Self {
        SignedMessage::new(Timestamped::new(inner))
    }

    /// Signing time, `None` until the message is signed.
    pub fn timestamp(&self) -> Option<i64> {
        self.payload.timestamp
    }

    /// Whether the message was signed within `max_age_secs` of `clock`'s now.
    ///
    /// Unstamped messages and messages from the future beyond the same window are
    /// never fresh.
    pub fn is_fresh(&self, clock: &dyn Clock, max_age_secs: i64) -> bool {
        match self.payload.timestamp {
            Some(ts) => clock.now_unix().abs_diff(ts) <= max_age_secs.max(0) as u64,
            None => false,
        }
    }
}
