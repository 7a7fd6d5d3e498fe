#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SnowflakeError {
    /// The worker ID does not fit in the 10-bit worker field.
    #[error("invalid worker id(={0}), expected worker id ∈ [0,1023]")]
    InvalidWorkerId(i64),
    /// The clock reads earlier than the last timestamp an ID was issued for.
    /// Generator state is untouched, so a later call succeeds once the clock
    /// catches up.
    #[error("clock moved backwards: last timestamp {last}, current {now}")]
    ClockMovedBackwards { last: i64, now: i64 },
}
