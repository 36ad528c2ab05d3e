//! The persisted item descriptor a slice tree is stored on.

use crate::slicing::SliceTree;
use bitflags::bitflags;

bitflags! {
    /// Processing tags carried by an item. Opaque to the slicing core.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct ItemTags: u8 {
        /// The item was cut at least once.
        const CHOPPED = 1 << 0;
        /// The item was cracked open.
        const CRACKED = 1 << 1;
        /// The item was fried.
        const FRIED = 1 << 2;
        /// The item was boiled.
        const BOILED = 1 << 3;
        /// The item was baked.
        const BAKED = 1 << 4;
        /// The item was mixed with others.
        const MIXED = 1 << 5;
    }
}

#[cfg(feature = "serde-serialize")]
impl serde::Serialize for ItemTags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

#[cfg(feature = "serde-serialize")]
impl<'de> serde::Deserialize<'de> for ItemTags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = <u8 as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// The persisted description of an item, owning its cut history.
///
/// The descriptor is the only thing that travels when an item changes
/// containers: the transient fragments never do. The tree is written by
/// the executor's root assignment on the first cut of a fresh item and
/// read back by the reconstructor when the item is placed again; it is
/// referenced, never duplicated, by such moves.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct ItemDescriptor {
    /// Complete cut history of the item.
    pub slice_tree: SliceTree,
    /// Quality rating. Opaque to the slicing core.
    pub quality: f32,
    /// Processing tags. Opaque to the slicing core.
    pub tags: ItemTags,
}

impl ItemDescriptor {
    /// Creates the descriptor of a pristine, never-cut item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the item still is in one piece.
    pub fn is_whole(&self) -> bool {
        self.slice_tree.is_empty()
    }
}
