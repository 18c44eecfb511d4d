//! implements the job priority queue: a growable array of jobs kept in
//! binary min-heap order by scheduled time, with slack as the
//! tie-break.

use std::slice;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::heap::{self, HeapStorage};
use crate::types::job::Job;

/// A time-ordered priority queue of jobs.
///
/// `pop` always yields the job with the earliest `scheduled_at`,
/// breaking ties in favour of the smaller `tolerance`. Every queued
/// job carries its current storage position (see [`Job::index`]),
/// maintained across every internal swap, which is what makes `remove`
/// and `reschedule` O(log n) rather than a scan.
///
/// The queue performs no synchronisation and is meant to be owned by a
/// single thread or task; wrap it in a mutex to share it.
#[derive(Debug)]
pub struct JobQueue<P> {
    jobs: Vec<Job<P>>,
    pushes: u64,
    pops: u64,
    removes: u64,
}

// The heap algorithms drive the queue exclusively through this impl:
// the ordering relation lives in `less`, and the index back-references
// are kept accurate here and nowhere else.
impl<P> HeapStorage for JobQueue<P> {
    type Item = Job<P>;

    fn len(&self) -> usize {
        self.jobs.len()
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.jobs[a].sort_key() < self.jobs[b].sort_key()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.jobs.swap(a, b);
        self.jobs[a].index = Some(a);
        self.jobs[b].index = Some(b);
    }

    fn push_back(&mut self, mut item: Job<P>) {
        item.index = Some(self.jobs.len());
        self.jobs.push(item);
    }

    fn pop_back(&mut self) -> Option<Job<P>> {
        let mut job = self.jobs.pop()?;
        job.index = None;
        Some(job)
    }
}

impl<P> JobQueue<P> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            pushes: 0,
            pops: 0,
            removes: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` jobs before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            jobs: Vec::with_capacity(capacity),
            pushes: 0,
            pops: 0,
            removes: 0,
        }
    }

    /// Returns the number of jobs currently queued. O(1).
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Reports whether the queue holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Inserts a job. O(log n). Always succeeds: bounding queue
    /// growth is the caller's concern.
    pub fn push(&mut self, job: Job<P>) {
        heap::push(self, job);
        self.pushes += 1;
    }

    /// Removes and returns the next job due (earliest `scheduled_at`,
    /// smallest `tolerance` among equals), or `None` if the queue is
    /// empty. O(log n). The returned job's `index()` is `None`.
    pub fn pop(&mut self) -> Option<Job<P>> {
        let job = heap::pop(self)?;
        self.pops += 1;
        Some(job)
    }

    /// Returns the next job due without removing it. O(1).
    pub fn peek(&self) -> Option<&Job<P>> {
        self.jobs.first()
    }

    /// Returns the job at storage position `index` (the position
    /// reported by [`Job::index`]), if any.
    pub fn get(&self, index: usize) -> Option<&Job<P>> {
        self.jobs.get(index)
    }

    /// Removes and returns the job at storage position `index`, or
    /// `None` when out of range. O(log n). This is the operation the
    /// index back-reference exists for. The returned job's `index()`
    /// is `None`.
    pub fn remove(&mut self, index: usize) -> Option<Job<P>> {
        let job = heap::remove(self, index)?;
        self.removes += 1;
        Some(job)
    }

    /// Removes and returns the first job whose id equals `id`. Ids are
    /// not required to be unique; duplicates beyond the first match in
    /// storage order stay queued. O(n) to find, O(log n) to remove.
    pub fn remove_by_id(&mut self, id: u64) -> Option<Job<P>> {
        let index = self.jobs.iter().position(|job| job.id == id)?;
        self.remove(index)
    }

    /// Rewrites the ordering keys of the job at `index` and restores
    /// heap order. Returns `false` when out of range. O(log n).
    ///
    /// This is the only supported way to change the schedule of a live
    /// job: rewriting keys without reordering would silently corrupt
    /// the queue.
    pub fn reschedule(
        &mut self,
        index: usize,
        scheduled_at: Instant,
        tolerance: Duration,
    ) -> bool {
        match self.jobs.get_mut(index) {
            Some(job) => {
                job.scheduled_at = scheduled_at;
                job.tolerance = tolerance;
                heap::fix(self, index);
                true
            },
            None => false,
        }
    }

    /// Iterates the queued jobs in storage (heap) order, which is not
    /// the pop order. Useful for locating a job's position by id or
    /// name.
    pub fn iter(&self) -> slice::Iter<'_, Job<P>> {
        self.jobs.iter()
    }

    /// Takes a snapshot of the queue's counters.
    pub fn stats(&self) -> QueueStats {
        QueueStats {
            current_jobs: self.jobs.len(),
            total_pushes: self.pushes,
            total_pops: self.pops,
            total_removes: self.removes,
        }
    }
}

impl<P> Default for JobQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a queue from existing jobs with a single bottom-up heapify,
/// O(n) rather than the O(n log n) of pushing each job in turn.
impl<P> From<Vec<Job<P>>> for JobQueue<P> {
    fn from(mut jobs: Vec<Job<P>>) -> Self {
        for (i, job) in jobs.iter_mut().enumerate() {
            job.index = Some(i);
        }
        let pushes = jobs.len() as u64;
        let mut queue = Self {
            jobs,
            pushes,
            pops: 0,
            removes: 0,
        };
        heap::init(&mut queue);
        queue
    }
}

impl<P> FromIterator<Job<P>> for JobQueue<P> {
    fn from_iter<I: IntoIterator<Item = Job<P>>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

/// Point-in-time counters for a queue.
#[derive(Debug, Serialize)]
pub struct QueueStats {
    /// number of jobs currently queued
    #[serde(rename = "current-jobs")]
    pub current_jobs: usize,
    /// cumulative jobs pushed, bulk construction included
    #[serde(rename = "total-pushes")]
    pub total_pushes: u64,
    /// cumulative jobs popped in priority order
    #[serde(rename = "total-pops")]
    pub total_pops: u64,
    /// cumulative jobs removed from arbitrary positions
    #[serde(rename = "total-removes")]
    pub total_removes: u64,
}
