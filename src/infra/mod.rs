//! Infrastructure layer - In-process state and time
//!
//! - Token registry: the authoritative in-memory session store
//! - Clock: injectable time source so expiry can be tested deterministically

pub mod clock;
pub mod registry;

pub use clock::{Clock, ManualClock, SystemClock};
pub use registry::{Lookup, TokenRegistry};
