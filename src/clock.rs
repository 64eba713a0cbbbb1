//! Time source for request signing

use chrono::{DateTime, FixedOffset, Local};

/// Supplies the timestamp signed into `X-Client-Time`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local UTC offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self(now)
    }

    /// Parse an RFC 3339 timestamp such as `2024-01-01T00:00:00+00:00`.
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(rfc3339).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::parse("2024-01-01T00:00:00+09:00").unwrap();
        assert_eq!(clock.now().to_rfc3339(), "2024-01-01T00:00:00+09:00");
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_system_clock_uses_local_offset() {
        let now = SystemClock.now();
        assert_eq!(now.offset(), Local::now().fixed_offset().offset());
    }
}
