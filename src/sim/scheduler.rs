//! Deferred tasks on the simulation thread
//!
//! Tasks are plain payloads with a due time. Nothing runs on its own: the
//! owner polls with the current frame time and acts on whatever came due, so
//! deferred work is always interleaved with ticks on the same thread.

/// Handle for cancelling a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Scheduled<T> {
    id: TaskId,
    due: f64,
    payload: T,
}

/// Cancelable one-shot tasks keyed by due time
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    tasks: Vec<Scheduled<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `payload` to come due at `due`
    pub fn schedule(&mut self, due: f64, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Scheduled { id, due, payload });
        id
    }

    /// Cancel a pending task; false if it already fired or was cancelled
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Remove and return every task due at or before `now`, earliest first
    pub fn poll(&mut self, now: f64) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|t| t.due <= now);
        self.tasks = pending;
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.id.0.cmp(&b.id.0)));
        due.into_iter().map(|t| t.payload).collect()
    }
}
