//! Single-producer/single-consumer latest-value cell.
//!
//! The perception collaborator publishes one value per frame from its own
//! thread; the consumer polls at its own cadence and only cares about the
//! most recent value and whether anything new arrived since it last looked.
//! [`LatestCell`] packages that lock-plus-dirty-flag pair behind an explicit
//! API: older values are overwritten, never queued.

use std::sync::Mutex;

// ---------------------------------------------------------------------------
// LatestCell
// ---------------------------------------------------------------------------

/// Thread-safe holder of the most recently published value.
///
/// `publish` overwrites the slot and marks it fresh; [`take_fresh`] hands the
/// value out only when something new arrived since the previous take;
/// [`peek`] clones the latest value regardless of freshness.
///
/// [`take_fresh`]: LatestCell::take_fresh
/// [`peek`]: LatestCell::peek
#[derive(Debug)]
pub struct LatestCell<T> {
    slot: Mutex<Slot<T>>,
}

#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    fresh: bool,
}

impl<T: Clone> LatestCell<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot {
                value: None,
                fresh: false,
            }),
        }
    }

    /// Overwrite the slot with `value` and mark it fresh.
    pub fn publish(&self, value: T) {
        let mut slot = self.slot.lock().unwrap();
        slot.value = Some(value);
        slot.fresh = true;
    }

    /// Take the latest value if one arrived since the last `take_fresh`,
    /// clearing the freshness flag.  The value itself stays available to
    /// [`peek`](LatestCell::peek).
    pub fn take_fresh(&self) -> Option<T> {
        let mut slot = self.slot.lock().unwrap();
        if !slot.fresh {
            return None;
        }
        slot.fresh = false;
        slot.value.clone()
    }

    /// Clone the latest value regardless of freshness.  `None` until the
    /// first `publish`.
    pub fn peek(&self) -> Option<T> {
        self.slot.lock().unwrap().value.clone()
    }

    /// Whether a value arrived since the last `take_fresh`.
    pub fn is_fresh(&self) -> bool {
        self.slot.lock().unwrap().fresh
    }
}

impl<T: Clone> Default for LatestCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_stale() {
        let cell: LatestCell<u32> = LatestCell::new();
        assert!(!cell.is_fresh());
        assert_eq!(cell.take_fresh(), None);
        assert_eq!(cell.peek(), None);
    }

    #[test]
    fn take_fresh_consumes_the_flag_but_not_the_value() {
        let cell = LatestCell::new();
        cell.publish(7);

        assert!(cell.is_fresh());
        assert_eq!(cell.take_fresh(), Some(7));
        // flag cleared, value retained
        assert!(!cell.is_fresh());
        assert_eq!(cell.take_fresh(), None);
        assert_eq!(cell.peek(), Some(7));
    }

    #[test]
    fn newer_publish_overwrites_older() {
        let cell = LatestCell::new();
        cell.publish(1);
        cell.publish(2);
        cell.publish(3);

        // intermediate values are gone — only the latest is observable
        assert_eq!(cell.take_fresh(), Some(3));
    }

    #[test]
    fn publish_after_take_makes_fresh_again() {
        let cell = LatestCell::new();
        cell.publish("a");
        assert_eq!(cell.take_fresh(), Some("a"));

        cell.publish("b");
        assert!(cell.is_fresh());
        assert_eq!(cell.take_fresh(), Some("b"));
    }

    #[test]
    fn shared_across_threads() {
        use std::sync::Arc;

        let cell = Arc::new(LatestCell::new());
        let producer = Arc::clone(&cell);

        let handle = std::thread::spawn(move || {
            for i in 0..100 {
                producer.publish(i);
            }
        });
        handle.join().expect("producer thread");

        assert_eq!(cell.take_fresh(), Some(99));
    }
}
