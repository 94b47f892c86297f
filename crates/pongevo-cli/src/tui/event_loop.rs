use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Fixed-rate tick clock interleaved with terminal input.
///
/// [`EventLoop::next`] returns every input event that arrives before the next tick deadline,
/// then a [`TuiEvent::Tick`] once the deadline has passed.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Duration,
    next_tick: Instant,
}

impl EventLoop {
    pub(super) fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            next_tick: Instant::now() + tick_interval,
        }
    }

    /// Blocks until an input event arrives or the tick deadline is reached.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if now >= self.next_tick {
                self.next_tick = next_deadline(self.next_tick, self.tick_interval, now);
                return Ok(TuiEvent::Tick);
            }

            if event::poll(self.next_tick.saturating_duration_since(now))? {
                return Ok(event::read()?.into());
            }
        }
    }
}

/// Deadline following `deadline`. A loop that fell behind by more than one interval skips the
/// missed ticks instead of replaying them in a burst.
fn next_deadline(deadline: Instant, interval: Duration, now: Instant) -> Instant {
    let next = deadline + interval;
    if next <= now { now + interval } else { next }
}
