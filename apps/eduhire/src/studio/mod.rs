// Resume studio: the "AI" generate and the save actions. Neither does real
// asynchronous work; each waits a fixed delay for UI feedback, then runs a
// synchronous step against the current profile snapshot.

pub mod latency;
pub mod workflow;

pub use latency::SimulatedLatency;
pub use workflow::{ResumeStudio, SaveOutcome};
