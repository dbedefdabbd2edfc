use std::time::{Duration, Instant};

use crate::difficulty::{Difficulty, HUNGER_INTERVAL};
use crate::game::Phase;

/// A periodic timer that is polled with explicit instants instead of owning
/// a thread. Starting and stopping are both idempotent.
#[derive(Clone, Copy, Debug, Default)]
pub struct Repeater {
    interval: Duration,
    next: Option<Instant>,
}

impl Repeater {
    /// Arms the repeater; the first fire is one `interval` after `now`.
    pub fn start(&mut self, now: Instant, interval: Duration) {
        self.interval = interval;
        self.next = Some(now + interval);
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fires at most once per call. A late poll rebases the next deadline on
    /// `now` rather than firing a burst to catch up.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next {
            Some(due) if now >= due => {
                self.next = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ticks {
    pub ghosts: bool,
    pub hunger: bool,
}

impl Ticks {
    pub fn any(self) -> bool {
        self.ghosts || self.hunger
    }
}

/// The ghost timer and the hardcore hunger timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clock {
    ghosts: Repeater,
    hunger: Repeater,
}

impl Clock {
    /// Restart both timers for the current difficulty and phase. The ghost
    /// timer runs while playing; the hunger timer only in hardcore.
    pub fn rearm(&mut self, now: Instant, difficulty: Difficulty, phase: Phase) {
        if phase != Phase::Playing {
            self.stop();
            return;
        }
        self.ghosts.start(now, difficulty.tick_interval());
        if difficulty.depletes_hunger() {
            self.hunger.start(now, HUNGER_INTERVAL);
        } else {
            self.hunger.stop();
        }
    }

    pub fn stop(&mut self) {
        self.ghosts.stop();
        self.hunger.stop();
    }

    pub fn poll(&mut self, now: Instant) -> Ticks {
        Ticks {
            ghosts: self.ghosts.fire(now),
            hunger: self.hunger.fire(now),
        }
    }

    pub fn ghost_timer(&self) -> &Repeater {
        &self.ghosts
    }

    pub fn hunger_timer(&self) -> &Repeater {
        &self.hunger
    }
}
