//! Virtual time clock for deterministic testing.
//!
//! `VirtualClock` stands in for browser timers in native tests. Time only
//! advances when explicitly requested, so a three second reset delay is
//! checked instantly and in a fixed order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Entry for a pending timer.
#[derive(Debug, Clone)]
struct TimerEntry<E> {
    /// When the timer should fire (virtual time in ms)
    fire_at_ms: u64,
    /// Scheduling order; breaks ties between timers due at the same instant
    sequence: u64,
    event: E,
    /// Re-scheduling interval for repeating timers
    repeat_every_ms: Option<u64>,
}

impl<E> PartialEq for TimerEntry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at_ms == other.fire_at_ms && self.sequence == other.sequence
    }
}

impl<E> Eq for TimerEntry<E> {}

impl<E> PartialOrd for TimerEntry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for TimerEntry<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: earliest fire time first, then earliest scheduled
        other
            .fire_at_ms
            .cmp(&self.fire_at_ms)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Virtual time clock carrying an event payload per timer.
pub struct VirtualClock<E> {
    current_time_ms: u64,
    next_sequence: u64,
    pending_timers: BinaryHeap<TimerEntry<E>>,
}

impl<E: Clone> VirtualClock<E> {
    /// Create a new clock starting at time 0.
    pub fn new() -> Self {
        Self {
            current_time_ms: 0,
            next_sequence: 0,
            pending_timers: BinaryHeap::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.current_time_ms
    }

    /// Fire `event` once, `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u64, event: E) {
        self.push(self.current_time_ms + delay_ms, event, None);
    }

    /// Fire `event` every `interval_ms`, first after one interval.
    pub fn schedule_repeating(&mut self, interval_ms: u64, event: E) {
        let interval_ms = interval_ms.max(1);
        self.push(self.current_time_ms + interval_ms, event, Some(interval_ms));
    }

    fn push(&mut self, fire_at_ms: u64, event: E, repeat_every_ms: Option<u64>) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.pending_timers.push(TimerEntry {
            fire_at_ms,
            sequence,
            event,
            repeat_every_ms,
        });
    }

    /// Advance virtual time by `ms` and return every event that fired, in order.
    ///
    /// Repeating timers are re-scheduled immediately so they can fire
    /// several times within one call.
    pub fn advance_by(&mut self, ms: u64) -> Vec<E> {
        let mut fired = Vec::new();
        self.advance_with(ms, |_, event| fired.push(event));
        fired
    }

    /// Advance virtual time by `ms`, handing each event to `handle` at its
    /// own fire time.
    ///
    /// The handler may schedule further timers; delays are measured from the
    /// firing timer's deadline, and follow-ups due before the target time
    /// fire within the same call.
    pub fn advance_with(&mut self, ms: u64, mut handle: impl FnMut(&mut Self, E)) {
        let target_time = self.current_time_ms + ms;
        while let Some(event) = self.pop_due(target_time) {
            handle(self, event);
        }
        self.current_time_ms = target_time;
    }

    fn pop_due(&mut self, target_time: u64) -> Option<E> {
        if self.pending_timers.peek()?.fire_at_ms > target_time {
            return None;
        }
        let entry = self.pending_timers.pop()?;
        self.current_time_ms = entry.fire_at_ms;
        if let Some(interval_ms) = entry.repeat_every_ms {
            self.push(entry.fire_at_ms + interval_ms, entry.event.clone(), Some(interval_ms));
        }
        Some(entry.event)
    }

    pub fn has_pending_timers(&self) -> bool {
        !self.pending_timers.is_empty()
    }

    /// Time until the next timer fires, if any.
    pub fn time_to_next_timer(&self) -> Option<u64> {
        self.pending_timers
            .peek()
            .map(|entry| entry.fire_at_ms.saturating_sub(self.current_time_ms))
    }

    /// Drop all pending timers, as unmounting a component does.
    pub fn cancel_all(&mut self) {
        self.pending_timers.clear();
    }
}

impl<E: Clone> Default for VirtualClock<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero() {
        let clock = VirtualClock::<()>::new();
        assert_eq!(clock.now_ms(), 0);
    }

    #[test]
    fn one_shot_fires_once_at_deadline() {
        let mut clock = VirtualClock::new();
        clock.schedule_once(1000, "done");

        assert!(clock.advance_by(999).is_empty());
        assert_eq!(clock.advance_by(1), vec!["done"]);
        assert!(clock.advance_by(5000).is_empty());
        assert!(!clock.has_pending_timers());
    }

    #[test]
    fn repeating_timer_fires_multiple_times_in_single_advance() {
        let mut clock = VirtualClock::new();
        clock.schedule_repeating(100, 'b');

        // Fires at 100, 200, 300
        assert_eq!(clock.advance_by(350).len(), 3);
        assert_eq!(clock.time_to_next_timer(), Some(50));
    }

    #[test]
    fn simultaneous_timers_fire_in_scheduling_order() {
        let mut clock = VirtualClock::new();
        clock.schedule_once(10, 1);
        clock.schedule_once(10, 2);
        clock.schedule_once(5, 0);
        assert_eq!(clock.advance_by(10), vec![0, 1, 2]);
    }

    #[test]
    fn follow_up_is_measured_from_the_firing_deadline() {
        let mut clock = VirtualClock::new();
        clock.schedule_once(2000, "first");
        let mut log = Vec::new();
        clock.advance_with(10_000, |clock, event| {
            log.push((clock.now_ms(), event));
            if event == "first" {
                clock.schedule_once(3000, "second");
            }
        });
        assert_eq!(log, vec![(2000, "first"), (5000, "second")]);
        assert_eq!(clock.now_ms(), 10_000);
    }

    #[test]
    fn cancel_all_drops_pending_timers() {
        let mut clock = VirtualClock::new();
        clock.schedule_repeating(500, ());
        clock.cancel_all();
        assert!(clock.advance_by(10_000).is_empty());
        assert_eq!(clock.time_to_next_timer(), None);
    }
}
