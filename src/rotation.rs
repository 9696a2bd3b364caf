// SPDX-License-Identifier: MPL-2.0
//! Timed, non-repeating term rotation.
//!
//! The scheduler walks a random permutation of all term indices so every term
//! is shown once before any term repeats. When the permutation runs out a new
//! one is drawn. Nothing prevents the first term of a new cycle from being
//! the last term of the previous one.
//!
//! The scheduler never touches a clock itself. Every operation returns an
//! [`Effect`] telling the event loop which term to show and which timer to
//! cancel or arm. Each armed timer carries a [`TimerToken`]; only the token
//! currently pending may trigger the next advance, so at most one rotation
//! timer is ever live.
//!
//! ```
//! use term_marquee::rotation::{Effect, Mode, RotationScheduler};
//!
//! let mut rotation = RotationScheduler::seeded(3, 10, 7);
//! let Effect::Show { index, next, .. } = rotation.advance() else {
//!     panic!("a non-empty rotation always shows a term");
//! };
//! assert_eq!(rotation.last_shown(), Some(index));
//! assert_eq!(rotation.pending_timer(), Some(next.token));
//! assert_eq!(rotation.mode(), Mode::Running);
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Shortest interval between two terms.
pub const MIN_INTERVAL_SECS: u32 = 1;

/// Identifies one armed rotation timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Lifecycle of the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Nothing shown yet. An empty term set never leaves this state.
    Idle,
    Running,
    Paused,
}

/// One pass over a random permutation of all term indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleCycle {
    permutation: Vec<usize>,
    position: usize,
}

impl ShuffleCycle {
    /// Draws a uniformly random permutation of `0..len`.
    pub fn shuffled<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut permutation: Vec<usize> = (0..len).collect();
        permutation.shuffle(rng);
        Self {
            permutation,
            position: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.permutation.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.permutation.is_empty()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.permutation.len()
    }

    #[must_use]
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    fn take_next(&mut self) -> Option<usize> {
        let index = self.permutation.get(self.position).copied()?;
        self.position += 1;
        Some(index)
    }
}

/// A timer the event loop must arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    pub token: TimerToken,
    pub delay: Duration,
}

/// What the event loop has to do after a scheduler operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Display the term at `index`, abort `cancelled` if any, then arm `next`.
    Show {
        index: usize,
        cancelled: Option<TimerToken>,
        next: ScheduledTick,
    },
    /// Abort the given timer.
    Cancel(TimerToken),
}

/// Owns the shuffle cycle and the advance/pause/resume state machine.
#[derive(Debug)]
pub struct RotationScheduler<R = StdRng> {
    term_count: usize,
    cycle: Option<ShuffleCycle>,
    last_shown: Option<usize>,
    mode: Mode,
    interval_secs: u32,
    pending: Option<TimerToken>,
    next_token: u64,
    rng: R,
}

impl RotationScheduler<StdRng> {
    /// Creates a scheduler seeded from the operating system.
    #[must_use]
    pub fn new(term_count: usize, interval_secs: u32) -> Self {
        Self::with_rng(term_count, interval_secs, StdRng::from_os_rng())
    }

    /// Creates a scheduler whose shuffle order is reproducible.
    #[must_use]
    pub fn seeded(term_count: usize, interval_secs: u32, seed: u64) -> Self {
        Self::with_rng(term_count, interval_secs, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RotationScheduler<R> {
    pub fn with_rng(term_count: usize, interval_secs: u32, rng: R) -> Self {
        Self {
            term_count,
            cycle: None,
            last_shown: None,
            mode: Mode::Idle,
            interval_secs: interval_secs.max(MIN_INTERVAL_SECS),
            pending: None,
            next_token: 0,
            rng,
        }
    }

    /// Shows the next term of the cycle and re-arms the timer.
    ///
    /// Does nothing while paused or when there are no terms.
    pub fn advance(&mut self) -> Effect {
        if self.mode == Mode::Paused || self.term_count == 0 {
            return Effect::None;
        }

        let needs_reshuffle = self
            .cycle
            .as_ref()
            .is_none_or(|cycle| cycle.is_exhausted() || cycle.len() != self.term_count);
        if needs_reshuffle {
            self.cycle = Some(ShuffleCycle::shuffled(self.term_count, &mut self.rng));
        }

        let Some(index) = self.cycle.as_mut().and_then(ShuffleCycle::take_next) else {
            return Effect::None;
        };

        self.mode = Mode::Running;
        self.last_shown = Some(index);

        let cancelled = self.pending.take();
        let next = self.arm();
        Effect::Show {
            index,
            cancelled,
            next,
        }
    }

    /// Stops the rotation without touching the cycle position.
    pub fn pause(&mut self) -> Effect {
        if self.term_count == 0 {
            return Effect::None;
        }
        self.mode = Mode::Paused;
        match self.pending.take() {
            Some(token) => Effect::Cancel(token),
            None => Effect::None,
        }
    }

    /// Restarts the rotation by showing the next term immediately.
    pub fn resume(&mut self) -> Effect {
        if self.term_count == 0 {
            return Effect::None;
        }
        self.mode = Mode::Running;
        self.advance()
    }

    /// Pauses when running, resumes otherwise.
    pub fn toggle(&mut self) -> Effect {
        if self.mode == Mode::Paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// Stores a new interval. A running rotation advances right away so the
    /// new cadence applies immediately.
    pub fn set_interval(&mut self, secs: u32) -> Effect {
        self.interval_secs = secs.max(MIN_INTERVAL_SECS);
        if self.mode == Mode::Running {
            self.advance()
        } else {
            Effect::None
        }
    }

    /// Handles a fired timer. Tokens other than the pending one are stale and
    /// ignored.
    pub fn on_timer(&mut self, token: TimerToken) -> Effect {
        if self.pending != Some(token) {
            tracing::debug!(?token, "ignoring stale rotation timer");
            return Effect::None;
        }
        self.pending = None;
        self.advance()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Index of the term currently on display.
    #[must_use]
    pub fn last_shown(&self) -> Option<usize> {
        self.last_shown
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.interval_secs))
    }

    #[must_use]
    pub fn interval_secs(&self) -> u32 {
        self.interval_secs
    }

    #[must_use]
    pub fn cycle(&self) -> Option<&ShuffleCycle> {
        self.cycle.as_ref()
    }

    fn arm(&mut self) -> ScheduledTick {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(token);
        ScheduledTick {
            token,
            delay: self.interval(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn shown_index(effect: Effect) -> usize {
        match effect {
            Effect::Show { index, .. } => index,
            other => panic!("expected Show, got {:?}", other),
        }
    }

    #[test]
    fn one_cycle_shows_every_term_once() {
        let mut rotation = RotationScheduler::seeded(8, 10, 42);
        let shown: Vec<usize> = (0..8).map(|_| shown_index(rotation.advance())).collect();

        let unique: HashSet<usize> = shown.iter().copied().collect();
        assert_eq!(unique.len(), 8);
        assert!(shown.iter().all(|&index| index < 8));
        assert!(rotation.cycle().is_some_and(ShuffleCycle::is_exhausted));
    }

    #[test]
    fn exhausted_cycle_is_reshuffled() {
        let mut rotation = RotationScheduler::seeded(5, 10, 1);
        for _ in 0..5 {
            rotation.advance();
        }
        let first_cycle = rotation.cycle().cloned().expect("cycle exists");

        rotation.advance();
        let second_cycle = rotation.cycle().expect("cycle exists");
        assert_eq!(second_cycle.position(), 1);
        assert_eq!(second_cycle.len(), first_cycle.len());

        let mut sorted = second_cycle.permutation().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let mut a = RotationScheduler::seeded(10, 10, 99);
        let mut b = RotationScheduler::seeded(10, 10, 99);
        for _ in 0..25 {
            assert_eq!(shown_index(a.advance()), shown_index(b.advance()));
        }
    }

    #[test]
    fn empty_term_set_stays_idle() {
        let mut rotation = RotationScheduler::seeded(0, 10, 3);
        assert_eq!(rotation.advance(), Effect::None);
        assert_eq!(rotation.pause(), Effect::None);
        assert_eq!(rotation.resume(), Effect::None);
        assert_eq!(rotation.toggle(), Effect::None);
        assert_eq!(rotation.mode(), Mode::Idle);
        assert_eq!(rotation.pending_timer(), None);
        assert_eq!(rotation.last_shown(), None);
    }

    #[test]
    fn single_term_repeats_forever() {
        let mut rotation = RotationScheduler::seeded(1, 10, 3);
        for _ in 0..4 {
            assert_eq!(shown_index(rotation.advance()), 0);
        }
    }

    #[test]
    fn advance_arms_timer_with_interval() {
        let mut rotation = RotationScheduler::seeded(3, 15, 3);
        match rotation.advance() {
            Effect::Show {
                cancelled, next, ..
            } => {
                assert_eq!(cancelled, None);
                assert_eq!(next.delay, Duration::from_secs(15));
                assert_eq!(rotation.pending_timer(), Some(next.token));
            }
            other => panic!("expected Show, got {:?}", other),
        }
    }

    #[test]
    fn advance_cancels_previous_timer() {
        let mut rotation = RotationScheduler::seeded(3, 10, 3);
        let Effect::Show { next: first, .. } = rotation.advance() else {
            panic!("expected Show");
        };
        let Effect::Show {
            cancelled, next, ..
        } = rotation.advance()
        else {
            panic!("expected Show");
        };
        assert_eq!(cancelled, Some(first.token));
        assert_ne!(next.token, first.token);
    }

    #[test]
    fn pause_cancels_pending_and_keeps_position() {
        let mut rotation = RotationScheduler::seeded(4, 10, 3);
        rotation.advance();
        let token = rotation.pending_timer().expect("timer armed");
        let position = rotation.cycle().map(ShuffleCycle::position);

        assert_eq!(rotation.pause(), Effect::Cancel(token));
        assert_eq!(rotation.mode(), Mode::Paused);
        assert_eq!(rotation.pending_timer(), None);
        assert_eq!(rotation.cycle().map(ShuffleCycle::position), position);
    }

    #[test]
    fn pause_is_idempotent() {
        let mut rotation = RotationScheduler::seeded(4, 10, 3);
        rotation.advance();
        rotation.pause();

        assert_eq!(rotation.pause(), Effect::None);
        assert_eq!(rotation.mode(), Mode::Paused);
        assert_eq!(rotation.pending_timer(), None);
    }

    #[test]
    fn advance_while_paused_is_noop() {
        let mut rotation = RotationScheduler::seeded(4, 10, 3);
        rotation.advance();
        rotation.pause();
        let shown = rotation.last_shown();

        assert_eq!(rotation.advance(), Effect::None);
        assert_eq!(rotation.last_shown(), shown);
    }

    #[test]
    fn resume_shows_next_term_immediately() {
        let mut rotation = RotationScheduler::seeded(4, 10, 3);
        rotation.advance();
        rotation.pause();

        let effect = rotation.resume();
        assert!(matches!(effect, Effect::Show { cancelled: None, .. }));
        assert_eq!(rotation.mode(), Mode::Running);
        assert_eq!(rotation.cycle().map(ShuffleCycle::position), Some(2));
    }

    #[test]
    fn set_interval_while_running_advances_with_new_delay() {
        let mut rotation = RotationScheduler::seeded(4, 10, 3);
        rotation.advance();

        match rotation.set_interval(30) {
            Effect::Show {
                cancelled, next, ..
            } => {
                assert!(cancelled.is_some());
                assert_eq!(next.delay, Duration::from_secs(30));
            }
            other => panic!("expected Show, got {:?}", other),
        }
    }

    #[test]
    fn set_interval_while_paused_only_stores() {
        let mut rotation = RotationScheduler::seeded(4, 10, 3);
        rotation.advance();
        rotation.pause();

        assert_eq!(rotation.set_interval(20), Effect::None);
        assert_eq!(rotation.interval_secs(), 20);
        assert_eq!(rotation.pending_timer(), None);
    }

    #[test]
    fn zero_interval_is_raised_to_minimum() {
        let mut rotation = RotationScheduler::seeded(2, 0, 3);
        assert_eq!(rotation.interval_secs(), MIN_INTERVAL_SECS);
        rotation.set_interval(0);
        assert_eq!(rotation.interval(), Duration::from_secs(1));
    }

    #[test]
    fn stale_timer_is_ignored() {
        let mut rotation = RotationScheduler::seeded(4, 10, 3);
        let Effect::Show { next: stale, .. } = rotation.advance() else {
            panic!("expected Show");
        };
        rotation.advance();
        let shown = rotation.last_shown();

        assert_eq!(rotation.on_timer(stale.token), Effect::None);
        assert_eq!(rotation.last_shown(), shown);
    }

    #[test]
    fn pending_timer_advances() {
        let mut rotation = RotationScheduler::seeded(4, 10, 3);
        rotation.advance();
        let token = rotation.pending_timer().expect("timer armed");

        let effect = rotation.on_timer(token);
        assert!(matches!(effect, Effect::Show { cancelled: None, .. }));
        assert_ne!(rotation.pending_timer(), Some(token));
    }

    #[test]
    fn at_most_one_timer_is_pending() {
        let mut rotation = RotationScheduler::seeded(6, 10, 11);
        let mut live: HashSet<TimerToken> = HashSet::new();

        let apply = |effect: Effect, live: &mut HashSet<TimerToken>| match effect {
            Effect::None => {}
            Effect::Cancel(token) => {
                assert!(live.remove(&token));
            }
            Effect::Show {
                cancelled, next, ..
            } => {
                if let Some(token) = cancelled {
                    assert!(live.remove(&token));
                }
                live.insert(next.token);
            }
        };

        apply(rotation.advance(), &mut live);
        apply(rotation.set_interval(5), &mut live);
        apply(rotation.pause(), &mut live);
        apply(rotation.pause(), &mut live);
        apply(rotation.set_interval(20), &mut live);
        apply(rotation.resume(), &mut live);
        apply(rotation.advance(), &mut live);
        apply(rotation.toggle(), &mut live);
        apply(rotation.toggle(), &mut live);
        if let Some(token) = rotation.pending_timer() {
            live.remove(&token);
            apply(rotation.on_timer(token), &mut live);
        }

        assert!(live.len() <= 1);
        assert_eq!(live.iter().next().copied(), rotation.pending_timer());
    }

    #[test]
    fn changed_term_count_forces_reshuffle() {
        let mut rotation = RotationScheduler::seeded(3, 10, 5);
        rotation.advance();
        rotation.term_count = 6;

        rotation.advance();
        let cycle = rotation.cycle().expect("cycle exists");
        assert_eq!(cycle.len(), 6);
        assert_eq!(cycle.position(), 1);
    }
}
