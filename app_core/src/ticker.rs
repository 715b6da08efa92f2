//! Cooperative periodic timer.
//!
//! A [`Ticker`] does nothing on its own: the main loop calls [`Ticker::poll`]
//! every iteration and any task whose interval has elapsed runs inline, on
//! the caller's thread, before `poll` returns. Callbacks receive the context
//! passed to `poll`, so they can mutate loop-owned state without locks.

use std::time::{Duration, Instant};

use heapless::Vec;
use log::trace;
use thiserror::Error;

/// Task capacity used when none is given.
pub const DEFAULT_TASKS: usize = 16;

/// Timer callback. Returning `false` unschedules the task.
pub type TickFn<C> = fn(&mut C) -> bool;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TickerError {
    #[error("ticker task table is full")]
    Full,
    #[error("ticker interval must be non-zero")]
    ZeroInterval,
}

/// Handle to a scheduled task, used for [`Ticker::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u16);

struct Task<C> {
    id: TaskId,
    interval: Duration,
    last_fire: Instant,
    callback: TickFn<C>,
}

pub struct Ticker<C, const N: usize = DEFAULT_TASKS> {
    tasks: Vec<Task<C>, N>,
    next_id: u16,
}

impl<C, const N: usize> Default for Ticker<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, const N: usize> Ticker<C, N> {
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Run `callback` every `interval`, starting now.
    pub fn every(&mut self, interval: Duration, callback: TickFn<C>) -> Result<TaskId, TickerError> {
        self.every_at(interval, Instant::now(), callback)
    }

    /// Run `callback` every `interval`, counting the first period from `now`.
    pub fn every_at(
        &mut self,
        interval: Duration,
        now: Instant,
        callback: TickFn<C>,
    ) -> Result<TaskId, TickerError> {
        if interval.is_zero() {
            return Err(TickerError::ZeroInterval);
        }

        let id = TaskId(self.next_id);
        self.tasks
            .push(Task {
                id,
                interval,
                last_fire: now,
                callback,
            })
            .map_err(|_| TickerError::Full)?;
        self.next_id = self.next_id.wrapping_add(1);

        trace!("ticker: scheduled task {:?} every {:?}", id, interval);
        Ok(id)
    }

    /// Remove a task. Returns `false` if it was not scheduled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn poll(&mut self, ctx: &mut C) -> usize {
        self.poll_at(Instant::now(), ctx)
    }

    /// Fire every task that is due at `now`. Returns how many callbacks ran.
    ///
    /// A task fires at most once per call and its next period is measured
    /// from `now`, so a late poll delays the schedule instead of queueing
    /// extra fires.
    pub fn poll_at(&mut self, now: Instant, ctx: &mut C) -> usize {
        let mut fired = 0;
        let mut index = 0;

        while index < self.tasks.len() {
            let task = &mut self.tasks[index];
            if now.saturating_duration_since(task.last_fire) < task.interval {
                index += 1;
                continue;
            }

            task.last_fire = now;
            let callback = task.callback;
            fired += 1;

            if callback(ctx) {
                index += 1;
            } else {
                let id = self.tasks.remove(index).id;
                trace!("ticker: task {:?} finished", id);
            }
        }

        fired
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
