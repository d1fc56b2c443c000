//! Queue module: scheduling states, placement records, and the queue manager.

mod record;
mod scheduling;
mod state;

pub use record::TaskRecord;
pub use scheduling::SchedulingQueue;
pub use state::SchedulingState;
