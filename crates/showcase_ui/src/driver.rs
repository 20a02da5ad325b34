//! # Sequence Driver
//!
//! Binds a [`Sequencer`] to a [`Clock`] and runs its scheduling loop.
//!
//! ## Design
//!
//! The driver never owns timers. It reads the clock, fires whatever is due,
//! and can sleep until the next deadline. The sequencer is either owned or
//! borrowed; dropping the driver disposes the run, so a borrowed sequencer
//! comes back with nothing pending.

use crate::sequencer::{Sequencer, SequencerEvent};
use showcase_shared::Clock;
use std::borrow::BorrowMut;
use std::time::Duration;

/// Runs one sequencer against a clock.
///
/// `S` is `Sequencer` or `&mut Sequencer`.
pub struct SequenceDriver<S: BorrowMut<Sequencer>, C: Clock> {
    /// The machine being driven.
    sequencer: S,
    /// Time source.
    clock: C,
    /// Number of steps fired so far.
    fired: u64,
}

impl<S: BorrowMut<Sequencer>, C: Clock> SequenceDriver<S, C> {
    /// Creates a driver.
    #[must_use]
    pub fn new(sequencer: S, clock: C) -> Self {
        Self {
            sequencer,
            clock,
            fired: 0,
        }
    }

    /// Returns the sequencer.
    #[must_use]
    pub fn sequencer(&self) -> &Sequencer {
        self.sequencer.borrow()
    }

    /// Returns mutable access to the sequencer.
    pub fn sequencer_mut(&mut self) -> &mut Sequencer {
        self.sequencer.borrow_mut()
    }

    /// Returns the clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Total steps fired by this driver.
    #[must_use]
    pub const fn fired(&self) -> u64 {
        self.fired
    }

    /// Click: triggers the sequencer at the current time.
    pub fn trigger(&mut self) {
        let now = self.clock.now_ms();
        self.sequencer_mut().trigger(now);
    }

    /// Fires everything due now. Returns how many steps fired.
    pub fn pump(&mut self) -> usize {
        let now = self.clock.now_ms();
        let fired = self.sequencer_mut().advance_to(now);
        self.fired += fired as u64;
        fired
    }

    /// Time until the next step is due, `None` if nothing is pending.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        let due = self.sequencer().next_deadline()?;
        Some(Duration::from_millis(
            due.saturating_sub(self.clock.now_ms()),
        ))
    }

    /// Blocks the calling thread until the next step is due.
    ///
    /// Returns immediately if nothing is pending. Only meaningful with a
    /// clock that advances on its own.
    pub fn wait_for_next_deadline(&self) {
        if let Some(remaining) = self.time_until_next() {
            if !remaining.is_zero() {
                std::thread::sleep(remaining);
            }
        }
    }

    /// Pumps and sleeps until the run is over, reporting every event.
    pub fn run_to_completion(&mut self, mut on_event: impl FnMut(&SequencerEvent)) {
        loop {
            self.pump();
            for event in self.sequencer_mut().drain_events() {
                on_event(&event);
            }
            if !self.sequencer().is_running() {
                break;
            }
            self.wait_for_next_deadline();
        }
    }
}

impl<S: BorrowMut<Sequencer>, C: Clock> Drop for SequenceDriver<S, C> {
    fn drop(&mut self) {
        self.sequencer_mut().cancel();
    }
}
