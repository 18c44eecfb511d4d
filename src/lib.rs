//! implements a time-ordered job priority queue: jobs pop in order of
//! their scheduled time, with less slack winning among jobs due at the
//! same moment.

pub mod heap;
pub mod types;
