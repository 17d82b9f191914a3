//! Shape-normalized operations over the containers a member may hold.
//!
//! The render loops in [`crate::render`] are written once against
//! [`SequenceAdapter`] and [`MapAdapter`]; each supported container type
//! supplies the handful of operations those loops need.

mod map;
mod sequence;

pub use map::MapAdapter;
pub use sequence::{Resizable, SequenceAdapter};

bitflags::bitflags! {
    /// Classification of a container type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ContainerFlags: u8 {
        /// The type is a supported container.
        const EXISTS    = 1 << 0;
        /// Elements can be added and removed.
        const MUTABLE   = 1 << 1;
        /// Entries are addressed by key rather than by position.
        const KEY_VALUE = 1 << 2;
    }
}

impl ContainerFlags {
    pub const FIXED_SEQUENCE: Self = Self::EXISTS;
    pub const RESIZABLE_SEQUENCE: Self = Self::EXISTS.union(Self::MUTABLE);
    pub const MAP: Self = Self::RESIZABLE_SEQUENCE.union(Self::KEY_VALUE);
}
