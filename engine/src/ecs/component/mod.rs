//! Component types, ids, and masks.
//!
//! Every component type is registered exactly once at startup, before any
//! entity exists, and receives a stable small [`Id`]. That id doubles as the
//! type's bit position in every entity's component [`Mask`], which is how
//! the interest tracker decides which systems care about a mutation.

mod mask;
mod registry;

pub use mask::Mask;
pub use registry::Registry;

/// A component type identifier in `[0, MAX_COMPONENTS)`, assigned
/// sequentially at registration and stable for the process lifetime.
///
/// Doubles as the type's bit position in a [`Mask`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u32);

impl Id {
    /// Construct a component Id from a raw u32 value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the index of this id if it were to live in indexable storage (e.g. Vec)
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Id {
    #[inline]
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<usize> for Id {
    #[inline]
    fn from(value: usize) -> Self {
        Self::new(value as u32)
    }
}

/// A trait representing a component payload in the ECS.
///
/// The core imposes no behavior on payloads; this only sets the required
/// bounds for a type to live in per-type storage.
pub trait Component: 'static + Sized + Send + Sync {}
