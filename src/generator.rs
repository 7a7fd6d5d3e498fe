use {
    crate::{IdParts, SnowflakeError, SystemClock, TimeSource, MAX_SEQUENCE, MAX_WORKER_ID},
    parking_lot::Mutex,
    std::{cmp::Ordering, hint::spin_loop},
};

// No ID issued yet.
const NO_TIMESTAMP: i64 = -1;

#[derive(Debug)]
struct State {
    last_timestamp: i64, // The most recent generation time
    sequence: i64,       // IDs already issued within `last_timestamp`
}

/// A thread-safe Snowflake ID generator.
///
/// The last timestamp and sequence are kept behind a single mutex, so one
/// instance can be shared across threads (e.g. in an [`Arc`]) and every call
/// to [`generate`](Self::generate) still observes and updates them as a unit.
///
/// [`Arc`]: std::sync::Arc
#[derive(Debug)]
pub struct Snowflake<T = SystemClock> {
    worker_id: i64,
    state: Mutex<State>,
    clock: T,
}

impl Snowflake {
    /// Creates a generator reading the system clock from the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`SnowflakeError::InvalidWorkerId`] unless `worker_id` is in
    /// `[0, 1023]`.
    pub fn new(worker_id: i64) -> Result<Self, SnowflakeError> {
        Self::with_clock(worker_id, SystemClock::default())
    }
}

impl<T: TimeSource> Snowflake<T> {
    /// Creates a generator that takes its timestamps from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`SnowflakeError::InvalidWorkerId`] unless `worker_id` is in
    /// `[0, 1023]`.
    pub fn with_clock(worker_id: i64, clock: T) -> Result<Self, SnowflakeError> {
        if !(0 ..= MAX_WORKER_ID).contains(&worker_id) {
            return Err(SnowflakeError::InvalidWorkerId(worker_id));
        }

        Ok(Self {
            worker_id,
            state: Mutex::new(State {
                last_timestamp: NO_TIMESTAMP,
                sequence: 0,
            }),
            clock,
        })
    }

    pub fn worker_id(&self) -> i64 {
        self.worker_id
    }

    pub fn clock(&self) -> &T {
        &self.clock
    }

    /// Generates the next ID.
    ///
    /// When all 4096 sequence values of the current millisecond are used up,
    /// this spins, holding the lock, until the clock reaches the next
    /// millisecond.
    ///
    /// # Errors
    ///
    /// Returns [`SnowflakeError::ClockMovedBackwards`] if the clock reads
    /// earlier than the last issued timestamp. No state is changed.
    pub fn generate(&self) -> Result<i64, SnowflakeError> {
        self.generate_parts().map(|parts| parts.compose())
    }

    /// Like [`generate`](Self::generate), but returns the fields of the new ID.
    ///
    /// # Errors
    ///
    /// See [`generate`](Self::generate).
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self), fields(worker_id = self.worker_id)))]
    pub fn generate_parts(&self) -> Result<IdParts, SnowflakeError> {
        let mut state = self.state.lock();
        let mut now = self.clock.current_millis();

        match now.cmp(&state.last_timestamp) {
            Ordering::Less => {
                #[cfg(feature = "tracing")]
                tracing::warn!(last = state.last_timestamp, now, "clock moved backwards");
                return Err(SnowflakeError::ClockMovedBackwards {
                    last: state.last_timestamp,
                    now,
                });
            }
            Ordering::Equal => {
                state.sequence = (state.sequence + 1) & MAX_SEQUENCE;
                if state.sequence == 0 {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(timestamp = now, "sequence exhausted, waiting for next millisecond");
                    while now <= state.last_timestamp {
                        spin_loop();
                        now = self.clock.current_millis();
                    }
                }
            }
            Ordering::Greater => {
                state.sequence = 0;
            }
        }

        state.last_timestamp = now;
        Ok(IdParts {
            timestamp: now,
            worker_id: self.worker_id,
            sequence: state.sequence,
        })
    }
}
