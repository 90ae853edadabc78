use std::time::Duration;

/// Signed nanosecond count; frame timestamps and inter-arrival periods use this domain.
pub type Nanos = i64;

pub const NANOS_PER_MILLI: Nanos = 1_000_000;

/// How long layer information is kept before it is dropped, and how long a
/// layer stays relevant without new frames.
///
/// Long enough to cover sparse updates such as a blinking cursor or a static
/// video frame.
pub const OBSOLETE_TIME_EPSILON: Duration = Duration::from_millis(1200);
pub const OBSOLETE_TIME_EPSILON_NS: Nanos = 1200 * NANOS_PER_MILLI;

/// A layer whose buffers arrive further apart than this is low activity,
/// which lets the scheduler vote for a lower refresh rate.
pub const LOW_ACTIVITY_EPSILON: Duration = Duration::from_millis(250);
pub const LOW_ACTIVITY_EPSILON_NS: Nanos = 250 * NANOS_PER_MILLI;

pub fn millis_to_nanos(ms: i64) -> Nanos {
    ms.saturating_mul(NANOS_PER_MILLI)
}
