use std::cmp::Ordering;

use fixedbitset::FixedBitSet;

use crate::ecs::{MAX_COMPONENTS, component::Id};

/// A fixed-width set of component type bits, one per entity slot and one per
/// registered system.
///
/// Bit `t` is set iff the entity currently holds a component of type `t`.
/// Systems declare their interest as a mask of the same width; an entity
/// belongs to a system's membership while it holds at least one of the
/// system's interest bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    bits: FixedBitSet,
}

impl Default for Mask {
    fn default() -> Self {
        Self::new()
    }
}

impl Mask {
    /// An all-zero mask of [`MAX_COMPONENTS`] bits.
    pub fn new() -> Self {
        Self {
            bits: FixedBitSet::with_capacity(MAX_COMPONENTS),
        }
    }

    /// Build a mask from component ids, e.g. when declaring a system's
    /// interest.
    pub fn of<I: IntoIterator<Item = Id>>(ids: I) -> Self {
        let mut mask = Self::new();
        for id in ids {
            mask.set(id, true);
        }
        mask
    }

    /// Set or clear the bit for a component id.
    #[inline]
    pub fn set(&mut self, id: Id, enabled: bool) {
        self.bits.set(id.index(), enabled);
    }

    /// Whether the bit for a component id is set.
    #[inline]
    pub fn contains(&self, id: Id) -> bool {
        self.bits.contains(id.index())
    }

    /// Reset every bit.
    #[inline]
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Whether no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// The bits set in both masks.
    pub fn intersection(&self, other: &Mask) -> Mask {
        let mut bits = self.bits.clone();
        bits.intersect_with(&other.bits);
        Mask { bits }
    }

    /// Whether any bit is set in both masks.
    #[inline]
    pub fn intersects(&self, other: &Mask) -> bool {
        !self.bits.is_disjoint(&other.bits)
    }

    /// Iterate the set bits as component ids, lowest first.
    pub fn ones(&self) -> impl Iterator<Item = Id> + '_ {
        self.bits.ones().map(Id::from)
    }

    /// Compare two masks read as unsigned integers.
    ///
    /// Only meaningful when the masks differ by exactly one bit: the greater
    /// value is then the one holding the changed bit. This is not a general
    /// ordering and must not be applied to multi-bit diffs.
    pub(crate) fn value_cmp(&self, other: &Mask) -> Ordering {
        // Highest differing bit decides, as in an unsigned integer compare.
        for index in (0..MAX_COMPONENTS).rev() {
            match (self.bits.contains(index), other.bits.contains(index)) {
                (true, false) => return Ordering::Greater,
                (false, true) => return Ordering::Less,
                _ => {}
            }
        }
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_contains() {
        // Given
        let mut mask = Mask::new();

        // When
        mask.set(Id::new(0), true);
        mask.set(Id::new(5), true);
        mask.set(Id::new(5), false);

        // Then
        assert!(mask.contains(Id::new(0)));
        assert!(!mask.contains(Id::new(5)));
        assert!(!mask.is_empty());
    }

    #[test]
    fn clear_empties_the_mask() {
        // Given
        let mut mask = Mask::of([Id::new(1), Id::new(2)]);

        // When
        mask.clear();

        // Then
        assert!(mask.is_empty());
    }

    #[test]
    fn intersection_keeps_common_bits() {
        // Given
        let a = Mask::of([Id::new(0), Id::new(1), Id::new(4)]);
        let b = Mask::of([Id::new(1), Id::new(4), Id::new(7)]);

        // When
        let common = a.intersection(&b);

        // Then
        assert_eq!(common, Mask::of([Id::new(1), Id::new(4)]));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&Mask::of([Id::new(9)])));
    }

    #[test]
    fn ones_iterates_lowest_first() {
        // Given
        let mask = Mask::of([Id::new(3), Id::new(0), Id::new(8)]);

        // When
        let ids: Vec<Id> = mask.ones().collect();

        // Then
        assert_eq!(ids, vec![Id::new(0), Id::new(3), Id::new(8)]);
    }

    #[test]
    fn value_cmp_orders_single_bit_deltas() {
        // Given - b is a plus one extra bit
        let a = Mask::of([Id::new(2)]);
        let b = Mask::of([Id::new(2), Id::new(6)]);

        // Then
        assert_eq!(b.value_cmp(&a), Ordering::Greater);
        assert_eq!(a.value_cmp(&b), Ordering::Less);
        assert_eq!(a.value_cmp(&a.clone()), Ordering::Equal);
    }
}
