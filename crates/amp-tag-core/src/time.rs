//! Time-Tags: identifiers derived from wall-clock time.
//!
//! Layout of a Time-Tag:
//!
//! | component | monotonic            | non-monotonic |
//! |-----------|----------------------|---------------|
//! | 0         | Unix microseconds    | Unix microseconds |
//! | 1         | per-process counter  | random        |
//! | 2         | generator instance   | random        |
//! | 3         | 0                    | random        |
//!
//! Component 0 alone is a signed 64-bit microsecond timestamp, which is what
//! record fields such as `created_at` store. Times before the epoch saturate
//! to 0.
//!
//! Monotonic Tags from one [`TimeTagGenerator`] are strictly increasing. When
//! the clock stalls or moves backward, component 0 stays at the last issued
//! value and the counter advances, so component 0 never decreases. The
//! process shares one generator ([`default_generator`]); a separate generator
//! is only for tests that need a fixed instance component.
//!
//! Component 0 is capped at [`MAX_MICROS`] (`i64::MAX`). A generator pinned
//! at that ceiling with an exhausted counter repeats its last Tag.

use rand::Rng;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::tag::Tag;

/// Largest value component 0 ever takes.
pub const MAX_MICROS: u64 = i64::MAX as u64;

/// Microseconds since the Unix epoch, saturated to `0..=MAX_MICROS`.
pub fn unix_micros(t: SystemTime) -> u64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_micros().min(MAX_MICROS as u128) as u64,
        Err(_) => 0,
    }
}

struct ClockState {
    /// Component 0 of the last issued monotonic Tag.
    last_micros: u64,
    /// Component 1 of the last issued monotonic Tag.
    counter: u64,
}

/// Issues Time-Tags. Monotonic issuance serializes on one mutex.
pub struct TimeTagGenerator {
    instance: u64,
    state: Mutex<ClockState>,
}

impl TimeTagGenerator {
    /// Create a generator with a random instance component.
    pub fn new() -> Self {
        Self::with_instance(rand::thread_rng().gen())
    }

    /// Create a generator with a fixed instance component.
    pub fn with_instance(instance: u64) -> Self {
        Self {
            instance,
            state: Mutex::new(ClockState {
                last_micros: 0,
                counter: 0,
            }),
        }
    }

    /// The instance component written into monotonic Tags.
    pub fn instance(&self) -> u64 {
        self.instance
    }

    /// Derive a Tag from `t`.
    pub fn from_time(&self, t: SystemTime, monotonic: bool) -> Tag {
        let micros = unix_micros(t);
        if monotonic {
            self.next_monotonic(micros)
        } else {
            let mut rng = rand::thread_rng();
            Tag::new(micros, rng.gen(), rng.gen(), rng.gen())
        }
    }

    /// Derive a Tag from the current time.
    pub fn now(&self, monotonic: bool) -> Tag {
        self.from_time(SystemTime::now(), monotonic)
    }

    fn next_monotonic(&self, micros: u64) -> Tag {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if micros > state.last_micros {
            state.last_micros = micros;
            state.counter = 0;
        } else if state.counter == u64::MAX {
            // At MAX_MICROS the Tag saturates and repeats: component 0 never
            // leaves the i64 range.
            if state.last_micros < MAX_MICROS {
                state.last_micros += 1;
                state.counter = 0;
            }
        } else {
            state.counter += 1;
        }

        Tag::new(state.last_micros, state.counter, self.instance, 0)
    }
}

impl Default for TimeTagGenerator {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_GENERATOR: OnceLock<Arc<TimeTagGenerator>> = OnceLock::new();

fn default_slot() -> &'static Arc<TimeTagGenerator> {
    DEFAULT_GENERATOR.get_or_init(|| Arc::new(TimeTagGenerator::new()))
}

/// The process-wide generator behind [`from_time`].
///
/// Every monotonic Tag issued through it shares one counter, so Tags stay
/// strictly increasing across all of its users in the process.
pub fn default_generator() -> &'static TimeTagGenerator {
    default_slot()
}

/// A shared handle to the process-wide generator, for owners such as a
/// catalog.
pub fn shared_generator() -> Arc<TimeTagGenerator> {
    Arc::clone(default_slot())
}

/// Derive a Tag from `t` using the process-wide generator.
pub fn from_time(t: SystemTime, monotonic: bool) -> Tag {
    default_generator().from_time(t, monotonic)
}

/// The signed 64-bit timestamp stored in record time fields.
pub fn timestamp_field(t: SystemTime) -> i64 {
    from_time(t, false)[0] as i64
}

impl Tag {
    /// Component 0 read as a microsecond timestamp.
    pub fn time_micros(&self) -> i64 {
        self.0[0].min(i64::MAX as u64) as i64
    }

    /// Component 0 read back as a point in time.
    pub fn to_system_time(&self) -> Option<SystemTime> {
        UNIX_EPOCH.checked_add(Duration::from_micros(self.time_micros() as u64))
    }
}
