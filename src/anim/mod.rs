mod object;
mod phase;
mod sequencer;

pub use object::{Axis, GasketObject, TransMode};
pub use phase::{Phase, BOUNCE_LIMIT, DELTA_FACTOR};
pub use sequencer::{registry, Sequencer, TickOutcome};
