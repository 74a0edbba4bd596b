/// Opaque handle identifying one scheduled task.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TaskHandle(u64);

struct Entry<T> {
    handle: TaskHandle,
    remaining_ms: f32,
    task: T,
}

/// Deferred-task list driven by the frame loop's elapsed time. Tasks fire
/// once their delay has been consumed by `advance` calls; there is no wall
/// clock involved.
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
    next_handle: u64,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 0,
        }
    }

    pub fn schedule(&mut self, delay_ms: u32, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            remaining_ms: delay_ms as f32,
            task,
        });
        handle
    }

    /// Removes a pending task. Returns false if it already fired or was
    /// cancelled before.
    #[allow(dead_code)]
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    /// Consumes `dt_ms` of time and returns every task whose delay has fully
    /// elapsed, in schedule order.
    pub fn advance(&mut self, dt_ms: f32) -> Vec<T> {
        let mut due = Vec::new();
        let mut pending = Vec::new();
        for mut entry in std::mem::take(&mut self.entries) {
            entry.remaining_ms -= dt_ms;
            if entry.remaining_ms <= 0.0 {
                due.push(entry.task);
            } else {
                pending.push(entry);
            }
        }
        self.entries = pending;
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_fire_only_after_their_delay_elapsed() {
        let mut sched: Scheduler<&str> = Scheduler::new();
        sched.schedule(100, "a");
        assert!(sched.advance(50.0).is_empty());
        assert!(sched.advance(49.0).is_empty());
        assert_eq!(sched.advance(1.0), vec!["a"]);
        assert!(sched.entries.is_empty());
    }

    #[test]
    fn due_tasks_come_back_in_schedule_order() {
        let mut sched: Scheduler<u8> = Scheduler::new();
        sched.schedule(10, 1);
        sched.schedule(10, 2);
        sched.schedule(10, 3);
        assert_eq!(sched.advance(10.0), vec![1, 2, 3]);
    }

    #[test]
    fn cancel_removes_a_pending_task() {
        let mut sched: Scheduler<&str> = Scheduler::new();
        let keep = sched.schedule(10, "keep");
        let drop = sched.schedule(10, "drop");
        assert!(sched.cancel(drop));
        assert!(!sched.cancel(drop));
        assert_eq!(sched.advance(10.0), vec!["keep"]);
        assert!(!sched.cancel(keep));
    }

    #[test]
    fn handles_are_unique_across_schedules() {
        let mut sched: Scheduler<()> = Scheduler::new();
        let a = sched.schedule(1, ());
        let b = sched.schedule(1, ());
        assert_ne!(a, b);
    }

    #[test]
    fn remaining_delay_carries_across_partial_advances() {
        let mut sched: Scheduler<&str> = Scheduler::new();
        sched.schedule(900, "pulse-done");
        for _ in 0..8 {
            assert!(sched.advance(100.0).is_empty());
        }
        assert_eq!(sched.advance(100.0), vec!["pulse-done"]);
    }
}
