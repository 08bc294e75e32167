//! # Temporal Types — UTC-Only Timestamps and the Clock Seam
//!
//! Defines `Timestamp`, a UTC-only timestamp truncated to seconds
//! precision, and the `Clock` trait through which ledger components
//! observe time.
//!
//! ## Security Invariant
//!
//! Ledger components never call the wall clock directly. Time enters a
//! component exactly once, through its configured `Clock`, and is
//! monotonically non-decreasing across operations. This keeps expiry
//! windows (the 30-day subscription period) deterministic and testable
//! independent of wall-clock quirks.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Timelike, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::from_epoch_secs()`] — from Unix epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating
    /// sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Create a timestamp from a Unix epoch timestamp (seconds).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] if the value is
    /// outside chrono's representable range.
    pub fn from_epoch_secs(secs: i64) -> Result<Self, ValidationError> {
        let dt = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| ValidationError::InvalidTimestamp(format!("epoch {secs}")))?;
        Ok(Self(dt))
    }

    /// The Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// This timestamp shifted forward by `secs` seconds.
    ///
    /// Saturates at the current value if the shift would leave the
    /// representable range.
    pub fn add_secs(&self, secs: i64) -> Timestamp {
        self.0
            .checked_add_signed(TimeDelta::seconds(secs))
            .map(Self)
            .unwrap_or(*self)
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO-8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

// ─── Clock ───────────────────────────────────────────────────────────

/// The time source of a ledger component.
///
/// Implementations must be monotonically non-decreasing: two successive
/// `now()` calls never go backwards.
pub trait Clock: Send + Sync {
    /// The current time.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time source for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A manually advanced time source for tests and scripted simulations.
///
/// Cloning shares the underlying instant, so a test can keep a handle and
/// advance time after moving a clone into a ledger. The lock is
/// `parking_lot`, so a panicking holder cannot poison it.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<Timestamp>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: Timestamp) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    /// Advance the clock by `secs` seconds.
    pub fn advance_secs(&self, secs: i64) {
        let mut guard = self.current.lock();
        *guard = guard.add_secs(secs);
    }

    /// Jump the clock to `instant`.
    pub fn set(&self, instant: Timestamp) {
        *self.current.lock() = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current.lock()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        Timestamp::from_utc(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
    }

    #[test]
    fn now_has_no_subseconds() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_datetime().nanosecond(), 0);
    }

    #[test]
    fn from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 45).unwrap();
        let with_nanos = dt.with_nanosecond(123_456_789).unwrap();
        let ts = Timestamp::from_utc(with_nanos);
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:30:45Z");
    }

    #[test]
    fn epoch_roundtrip() {
        let ts = at(2026, 1, 15, 12, 0, 0);
        let ts2 = Timestamp::from_epoch_secs(ts.epoch_secs()).unwrap();
        assert_eq!(ts, ts2);
    }

    #[test]
    fn from_epoch_rejects_out_of_range() {
        assert!(Timestamp::from_epoch_secs(i64::MAX).is_err());
    }

    #[test]
    fn add_secs_advances() {
        let ts = at(2026, 1, 15, 12, 0, 0);
        assert_eq!(ts.add_secs(61).to_iso8601(), "2026-01-15T12:01:01Z");
    }

    #[test]
    fn ordering() {
        assert!(at(2026, 1, 15, 12, 0, 0) < at(2026, 1, 15, 12, 0, 1));
    }

    #[test]
    fn display_matches_iso8601() {
        let ts = at(2026, 6, 30, 23, 59, 59);
        assert_eq!(format!("{ts}"), "2026-06-30T23:59:59Z");
    }

    #[test]
    fn serde_roundtrip() {
        let ts = at(2026, 1, 15, 12, 0, 0);
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }

    // -- Clocks --

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(a <= b);
    }

    #[test]
    fn manual_clock_advances_shared_state() {
        let clock = ManualClock::new(at(2026, 1, 1, 0, 0, 0));
        let handle = clock.clone();
        handle.advance_secs(90);
        assert_eq!(clock.now().to_iso8601(), "2026-01-01T00:01:30Z");
    }

    #[test]
    fn manual_clock_set_jumps() {
        let clock = ManualClock::new(at(2026, 1, 1, 0, 0, 0));
        clock.set(at(2027, 1, 1, 0, 0, 0));
        assert_eq!(clock.now().to_iso8601(), "2027-01-01T00:00:00Z");
    }
}
