use std::{
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

/// A source of millisecond timestamps for the generator.
///
/// The generator never reads the system time directly, so tests can feed it
/// any sequence of readings.
///
/// ```
/// use snowflake::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> i64 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedTime.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the clock's epoch.
    fn current_millis(&self) -> i64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

/// Wall-clock time source, measured from the Unix epoch unless a custom epoch
/// is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    epoch: Duration,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::with_epoch(Duration::ZERO)
    }
}

impl SystemClock {
    /// Measures time from `epoch`, given as the offset from 1970-01-01 UTC.
    ///
    /// IDs from clocks with different epochs are not comparable with each
    /// other.
    pub const fn with_epoch(epoch: Duration) -> Self {
        Self { epoch }
    }

    pub const fn epoch(&self) -> Duration {
        self.epoch
    }
}

impl TimeSource for SystemClock {
    fn current_millis(&self) -> i64 {
        // A wall clock before the epoch reads as 0.
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .and_then(|now| now.checked_sub(self.epoch))
            .unwrap_or(Duration::ZERO);
        i64::try_from(since_epoch.as_millis()).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_epoch_by_default() {
        let expected = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_millis() as i64;
        let millis = SystemClock::default().current_millis();
        assert!((millis - expected).abs() < 1000);
    }

    #[test]
    fn test_custom_epoch() {
        let epoch = Duration::from_millis(1_704_067_200_000); // 2024-01-01 00:00:00.000 UTC
        let unix = SystemClock::default().current_millis();
        let custom = SystemClock::with_epoch(epoch).current_millis();
        let offset = unix - custom;
        assert!((offset - 1_704_067_200_000).abs() < 1000);
    }

    #[test]
    fn test_future_epoch_reads_zero() {
        let clock = SystemClock::with_epoch(Duration::from_secs(u64::MAX / 2));
        assert_eq!(clock.current_millis(), 0);
    }

    #[test]
    fn test_shared_clock() {
        let clock = Arc::new(SystemClock::default());
        assert!(clock.current_millis() > 0);
        let boxed: Box<dyn TimeSource> = Box::new(SystemClock::default());
        assert!(boxed.current_millis() > 0);
    }
}
