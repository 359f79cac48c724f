//! The fixed-capacity slot array used to move records in and out of a
//! [`BinaryTree`](crate::BinaryTree).
//!
//! A slot either owns a record (`Some`) or is vacant (`None`). The vacant
//! marker is a real variant, not a sentinel record value, so "no data" can
//! never collide with a record that happens to equal some sentinel.
//!
//! [`BinaryTree::from_sorted_array`](crate::BinaryTree::from_sorted_array)
//! expects the occupied slots to form a contiguous, ascending prefix; the
//! first vacant slot onward is treated as unused.

/// Number of slots in a transfer array.
pub const SLOT_COUNT: usize = 100;

/// A fixed-capacity array of record slots.
pub type SlotArray<R> = [Option<R>; SLOT_COUNT];

/// Returns a slot array with every slot vacant.
///
/// # Examples
///
/// ```
/// let slots = bintree::slots::vacant::<i32>();
/// assert!(slots.iter().all(Option::is_none));
/// ```
pub fn vacant<R>() -> SlotArray<R> {
    std::array::from_fn(|_| None)
}

/// Returns the length of the contiguous occupied prefix of `slots`.
///
/// Occupied slots after the first vacant one are outside the active range
/// and are not counted.
///
/// # Examples
///
/// ```
/// use bintree::slots;
///
/// let mut slots = slots::vacant();
/// slots[0] = Some("ant");
/// slots[1] = Some("bird");
/// slots[3] = Some("dog"); // after a gap, not part of the prefix
/// assert_eq!(slots::occupied_len(&slots), 2);
/// ```
pub fn occupied_len<R>(slots: &SlotArray<R>) -> usize {
    slots.iter().take_while(|slot| slot.is_some()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacant_is_all_vacant() {
        let slots = vacant::<String>();
        assert_eq!(slots.len(), SLOT_COUNT);
        assert!(slots.iter().all(Option::is_none));
    }

    #[test]
    fn occupied_len_stops_at_first_vacancy() {
        let mut slots = vacant();
        assert_eq!(occupied_len(&slots), 0);

        for (i, slot) in slots.iter_mut().take(5).enumerate() {
            *slot = Some(i);
        }
        assert_eq!(occupied_len(&slots), 5);

        slots[2] = None;
        assert_eq!(occupied_len(&slots), 2);
    }
}
