use crate::{MAX_SEQUENCE, MAX_WORKER_ID, TIMESTAMP_SHIFT, WORKER_ID_SHIFT};

/// The three fields packed into a Snowflake ID.
///
/// ```
/// use snowflake::IdParts;
///
/// let parts = IdParts { timestamp: 1_700_000_000_000, worker_id: 5, sequence: 2 };
/// let id = parts.compose();
/// assert_eq!(IdParts::decompose(id), parts);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdParts {
    /// Milliseconds since the epoch of the clock that produced the ID.
    pub timestamp: i64,
    pub worker_id: i64,
    pub sequence: i64,
}

impl IdParts {
    /// Packs the fields as `timestamp | worker id | sequence`, most significant
    /// first. Worker ID and sequence are masked to their field widths.
    pub const fn compose(&self) -> i64 {
        (self.timestamp << TIMESTAMP_SHIFT)
            | ((self.worker_id & MAX_WORKER_ID) << WORKER_ID_SHIFT)
            | (self.sequence & MAX_SEQUENCE)
    }

    pub const fn decompose(id: i64) -> Self {
        Self {
            // Logical shift: the 42-bit timestamp owns the sign bit.
            timestamp: ((id as u64) >> TIMESTAMP_SHIFT) as i64,
            worker_id: (id >> WORKER_ID_SHIFT) & MAX_WORKER_ID,
            sequence: id & MAX_SEQUENCE,
        }
    }
}

impl From<i64> for IdParts {
    fn from(id: i64) -> Self {
        Self::decompose(id)
    }
}

impl From<IdParts> for i64 {
    fn from(parts: IdParts) -> Self {
        parts.compose()
    }
}
