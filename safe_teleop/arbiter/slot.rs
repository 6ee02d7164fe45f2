//! Last-value-wins storage for asynchronously arriving messages

use parking_lot::Mutex;

/// Single-value slot with atomic replace semantics
///
/// One producer replaces the value as a whole unit, one consumer snapshots
/// it; there is no read-modify-write, so the consumer can never observe a
/// torn message. Values arriving faster than they are read are silently
/// superseded. `None` means no value has ever arrived, which is distinct
/// from any stored value.
#[derive(Debug)]
pub struct LatestSlot<T: Copy> {
    value: Mutex<Option<T>>,
}

impl<T: Copy> LatestSlot<T> {
    /// Create an empty slot
    pub fn new() -> Self {
        Self {
            value: Mutex::new(None),
        }
    }

    /// Store a value, superseding any unread one
    pub fn replace(&self, value: T) {
        *self.value.lock() = Some(value);
    }

    /// Copy out the most recent value, if any has arrived
    pub fn snapshot(&self) -> Option<T> {
        *self.value.lock()
    }
}

impl<T: Copy> Default for LatestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_empty_slot_is_absent() {
        let slot: LatestSlot<f32> = LatestSlot::new();
        assert_eq!(slot.snapshot(), None);
    }

    #[test]
    fn test_replace_and_snapshot() {
        let slot = LatestSlot::new();
        slot.replace(3);
        assert_eq!(slot.snapshot(), Some(3));
        // Snapshot does not consume the value
        assert_eq!(slot.snapshot(), Some(3));
    }

    #[test]
    fn test_newer_value_supersedes_older() {
        let slot = LatestSlot::new();
        slot.replace(1);
        slot.replace(2);
        slot.replace(3);
        assert_eq!(slot.snapshot(), Some(3));
    }

    #[test]
    fn test_zero_is_distinct_from_absent() {
        let slot = LatestSlot::new();
        slot.replace(0.0f32);
        assert_eq!(slot.snapshot(), Some(0.0));
    }

    #[test]
    fn test_cross_thread_replace() {
        let slot = Arc::new(LatestSlot::new());
        let writer = {
            let slot = Arc::clone(&slot);
            std::thread::spawn(move || {
                for i in 0..100 {
                    slot.replace(i);
                }
            })
        };
        writer.join().unwrap();
        assert_eq!(slot.snapshot(), Some(99));
    }
}
