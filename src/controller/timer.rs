// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cancellable scheduled tasks.
//!
//! The controller never holds a real timer. When it wants something to happen
//! later it arms a [`DebouncedTrigger`], which mints a fresh [`TimerToken`],
//! and passes the token to the host's [`Scheduler`]. When the delay elapses
//! the host hands the token back through `SearchController::on_timer`.
//!
//! Re-arming bumps the trigger's generation, so any token minted earlier is
//! dead on arrival: firing it is a no-op. That is the whole cancellation
//! story. The host never has to call `clearTimeout`, and there is at most
//! one live task per trigger.

use std::time::Duration;

/// Which deferred action a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Run the debounced search.
    Search,
    /// Hide the dropdown after the grace delay.
    Hide,
}

/// Handle for one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub generation: u64,
}

/// Host-provided timer service.
pub trait Scheduler {
    /// Arrange for `token` to be handed back to the controller after `delay`.
    fn schedule(&mut self, delay: Duration, token: TimerToken);
}

/// A single-slot cancellable task.
///
/// **Invariant**: at most one token is live. `fire` accepts only the token
/// from the most recent `arm`, and only once.
#[derive(Debug, Clone)]
pub struct DebouncedTrigger {
    kind: TimerKind,
    generation: u64,
    armed: bool,
}

impl DebouncedTrigger {
    pub fn new(kind: TimerKind) -> Self {
        Self {
            kind,
            generation: 0,
            armed: false,
        }
    }

    /// Supersede any outstanding task and mint the token for a new one.
    pub fn arm(&mut self) -> TimerToken {
        self.generation += 1;
        self.armed = true;
        TimerToken {
            kind: self.kind,
            generation: self.generation,
        }
    }

    /// Cancel the outstanding task, if any.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn is_pending(&self) -> bool {
        self.armed
    }

    /// Consume a fired token. True if it is the live one.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        let live = self.armed && token.kind == self.kind && token.generation == self.generation;
        if live {
            self.armed = false;
        }
        live
    }
}
