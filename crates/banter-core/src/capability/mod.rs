//! Injected capabilities: randomness and time.
//!
//! The original design reached for a process-wide RNG and the system clock
//! from inside the handlers. Here both come in as traits so dispatch and the
//! uptime/time replies can be tested with a seeded source and a fixed clock.

pub mod clock;
pub mod random;

pub use clock::{Clock, FixedClock, SystemClock};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
