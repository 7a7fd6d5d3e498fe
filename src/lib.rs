//! Snowflake is a unique ID generator that generates IDs based on the current
//! time, a worker ID, and a sequence value.
//!
//! A single [`Snowflake`] instance hands out strictly increasing IDs for as
//! long as its clock does not move backwards. Instances with different worker
//! IDs never collide with each other, without any coordination between them;
//! keeping worker IDs unique across a deployment is up to the caller.
//!
//! - **Temporal Ordering**: IDs are ordered by the timestamp portion, so IDs
//!   generated at different times are in chronological order.
//! - **Same Timestamp**: Within one millisecond the sequence number increases
//!   by one per ID. After 4096 IDs the generator waits for the next
//!   millisecond.
//! - **Clock Skew**: If the clock reads earlier than the last issued
//!   timestamp, generation fails with
//!   [`ClockMovedBackwards`](SnowflakeError::ClockMovedBackwards) instead of
//!   issuing an ID that could collide.
//!
//! Snowflake ID structure, most significant bit first:
//! - **Timestamp**: 42 bits, milliseconds since the clock's epoch (the Unix
//!   epoch for [`SystemClock::default`]).
//! - **Worker ID**: 10 bits, identifying the worker that generated the ID.
//! - **Sequence**: 12 bits, providing uniqueness within the same millisecond.
//! - **Total**: 64 bits, returned as an `i64`.
//!
//! # Examples
//!
//! ```
//! use snowflake::{IdParts, Snowflake};
//!
//! // Create a new snowflake generator with a worker ID
//! let snowflake = Snowflake::new(1).unwrap();
//!
//! // Generate a snowflake ID
//! let id = snowflake.generate().unwrap();
//! assert_eq!(IdParts::decompose(id).worker_id, 1);
//! ```
//!
//! # Errors
//!
//! - [`InvalidWorkerId`](SnowflakeError::InvalidWorkerId): the worker ID given
//!   at construction is outside `[0, 1023]`.
//! - [`ClockMovedBackwards`](SnowflakeError::ClockMovedBackwards): the clock
//!   reads earlier than the last issued timestamp.
//!
//! # Safety
//!
//! [`Snowflake::generate`] takes `&self`; the generator state is guarded by an
//! internal mutex, so one instance can be shared between threads.

mod clock;
mod error;
mod generator;
mod id;

pub use {
    clock::{SystemClock, TimeSource},
    error::SnowflakeError,
    generator::Snowflake,
    id::IdParts,
};

pub const TIMESTAMP_BITS: u32 = 42;
pub const WORKER_ID_BITS: u32 = 10;
pub const SEQUENCE_BITS: u32 = 12;

pub const WORKER_ID_SHIFT: u32 = SEQUENCE_BITS;
pub const TIMESTAMP_SHIFT: u32 = WORKER_ID_BITS + SEQUENCE_BITS;

pub const MAX_WORKER_ID: i64 = (1 << WORKER_ID_BITS) - 1;
pub const MAX_SEQUENCE: i64 = (1 << SEQUENCE_BITS) - 1;
