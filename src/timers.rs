//! Scheduled tasks with an explicit lifecycle.
//!
//! The controller owns a [`Scheduler`] and drives it with the current time
//! from the event loop. Tasks never run on their own thread: `due` reports
//! what fired and the caller applies the effect, so timer updates are
//! serialised with user input.

use std::time::{Duration, Instant};

/// Named tasks the controller schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Leave the splash screen.
    SplashAdvance,
    /// Add a heart.
    HeartRegen,
}

#[derive(Debug, Clone, Copy)]
struct Task {
    kind: TimerKind,
    deadline: Instant,
    period: Option<Duration>,
}

/// A set of one-shot and recurring tasks keyed by [`TimerKind`].
///
/// Scheduling a kind that is already pending replaces it.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<Task>,
}

/// Shortest recurring period accepted; anything lower is raised to it.
const MIN_PERIOD: Duration = Duration::from_millis(1);

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `kind` once, `delay` after `now`.
    ///
    /// A deadline past the range of `Instant` can never be reached, so the
    /// task is not scheduled at all.
    pub fn schedule_once(&mut self, kind: TimerKind, delay: Duration, now: Instant) {
        self.cancel(kind);
        if let Some(deadline) = now.checked_add(delay) {
            self.tasks.push(Task {
                kind,
                deadline,
                period: None,
            });
        }
    }

    /// Run `kind` every `period`, first at `now + period`.
    pub fn schedule_every(&mut self, kind: TimerKind, period: Duration, now: Instant) {
        let period = period.max(MIN_PERIOD);
        self.cancel(kind);
        if let Some(deadline) = now.checked_add(period) {
            self.tasks.push(Task {
                kind,
                deadline,
                period: Some(period),
            });
        }
    }

    /// Cancel a pending task. Returns whether one was pending.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.kind != kind);
        self.tasks.len() < before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_scheduled(&self, kind: TimerKind) -> bool {
        self.tasks.iter().any(|t| t.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Collect every task due at `now`, in deadline order.
    ///
    /// One-shot tasks are removed. A recurring task reports how many whole
    /// periods elapsed and is rescheduled after the last of them.
    pub fn due(&mut self, now: Instant) -> Vec<(TimerKind, u32)> {
        let mut fired: Vec<(Instant, TimerKind, u32)> = Vec::new();

        self.tasks.retain_mut(|task| {
            if task.deadline > now {
                return true;
            }
            let first = task.deadline;
            match task.period {
                None => {
                    fired.push((first, task.kind, 1));
                    false
                }
                Some(period) => {
                    let overdue = now.duration_since(task.deadline);
                    let extra = overdue.as_nanos() / period.as_nanos();
                    let count = u32::try_from(extra + 1).unwrap_or(u32::MAX);
                    let next = period
                        .checked_mul(count)
                        .and_then(|ahead| task.deadline.checked_add(ahead));
                    fired.push((first, task.kind, count));
                    match next {
                        Some(deadline) => {
                            task.deadline = deadline;
                            true
                        }
                        None => false,
                    }
                }
            }
        });

        fired.sort_by_key(|(at, _, _)| *at);
        fired.into_iter().map(|(_, kind, n)| (kind, n)).collect()
    }
}
