use std::time::{Duration, Instant};

/// A unit of deferred work, ordered by when it is due.
///
/// The queue never looks inside `payload` and never invokes it: `P` is
/// whatever the caller wants carried alongside the schedule, such as a
/// command line. Ordering depends only on `scheduled_at` and
/// `tolerance`; see [`Job::sort_key`].
#[derive(Debug)]
pub struct Job<P> {
    /// Caller-assigned identifier. Not required to be unique.
    pub id: u64,
    /// Descriptive label; plays no part in ordering.
    pub name: String,
    /// When the job becomes due.
    pub scheduled_at: Instant,
    /// Acceptable scheduling slack, used only to break ties between
    /// jobs due at the same instant: less slack pops first.
    pub tolerance: Duration,
    /// Opaque payload the queue carries but never interprets.
    pub payload: P,
    /// Position in the owning queue's storage. Owned exclusively by
    /// the queue: updated on every swap, `None` whenever the job is
    /// not in a queue.
    pub(crate) index: Option<usize>,
}

impl<P> Job<P> {
    /// Creates a job that is not yet in any queue.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        scheduled_at: Instant,
        tolerance: Duration,
        payload: P,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            scheduled_at,
            tolerance,
            payload,
            index: None,
        }
    }

    /// Returns this job's current position in the queue holding it, or
    /// `None` if it is not queued. Valid for exactly as long as the
    /// queue is not mutated.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The key the queue orders by: scheduled time first, tolerance as
    /// the tie-break, both ascending. Sorting jobs by this key
    /// directly yields the order the queue pops them in, except that
    /// jobs with exactly equal keys pop in no particular order.
    pub fn sort_key(&self) -> (Instant, Duration) {
        (self.scheduled_at, self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_orders_by_time_then_tolerance() {
        let t0 = Instant::now();
        let minute = Duration::from_secs(60);

        let early = Job::new(1, "early", t0, 5 * minute, ());
        let late_tight = Job::new(2, "late-tight", t0 + minute, minute, ());
        let late_loose =
            Job::new(3, "late-loose", t0 + minute, 2 * minute, ());

        // An earlier job wins regardless of tolerance.
        assert!(early.sort_key() < late_tight.sort_key());
        // At the same instant, less slack wins.
        assert!(late_tight.sort_key() < late_loose.sort_key());

        // Fully equal keys are equivalent, not ordered.
        let twin = Job::new(4, "twin", t0, 5 * minute, ());
        assert!(!(early.sort_key() < twin.sort_key()));
        assert!(!(twin.sort_key() < early.sort_key()));
    }

    #[test]
    fn test_new_job_is_unqueued() {
        let job = Job::new(7, "idle", Instant::now(), Duration::ZERO, ());
        assert_eq!(job.index(), None);
    }
}
