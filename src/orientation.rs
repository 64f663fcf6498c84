//! Screen orientation and the long-side / short-side indirection.
//!
//! Sizing intents are declared against the *long* and *short* side of the
//! screen. Which concrete axis that means depends on the orientation:
//!
//! ```text
//!     Portrait (w ≤ h)          Landscape (w > h)
//!     ┌──────┐ ▲                ┌────────────┐ ▲
//!     │      │ │ long           │            │ │ short
//!     │      │ │ (height)       │            │ │ (height)
//!     │      │ │                └────────────┘ ▼
//!     └──────┘ ▼                ◄─── long ───►
//!     ◄short ►                      (width)
//!     (width)
//! ```
//!
//! The size attribute and the edge pair of an axis always flip together.

use crate::constraint::{Attribute, Size};

/// Orientation of a rectangle, derived from its aspect.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Height is at least the width. Ties resolve here.
    #[default]
    Portrait,
    /// Width is strictly greater than height.
    Landscape,
}

impl Orientation {
    /// Classify a size: landscape when wider than tall, portrait otherwise.
    pub fn from_size(size: Size) -> Self {
        if size.width > size.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    pub fn is_landscape(self) -> bool {
        self == Self::Landscape
    }

    /// The other orientation.
    pub fn opposite(self) -> Self {
        match self {
            Self::Portrait => Self::Landscape,
            Self::Landscape => Self::Portrait,
        }
    }

    /// Size attribute of the long side: height in portrait, width in landscape.
    pub fn long_axis(self) -> Attribute {
        match self {
            Self::Portrait => Attribute::Height,
            Self::Landscape => Attribute::Width,
        }
    }

    /// Size attribute of the short side.
    pub fn short_axis(self) -> Attribute {
        self.opposite().long_axis()
    }

    /// Leading and trailing edges of the long side: `(top, bottom)` in
    /// portrait, `(left, right)` in landscape.
    pub fn long_edges(self) -> (Attribute, Attribute) {
        match self {
            Self::Portrait => (Attribute::Top, Attribute::Bottom),
            Self::Landscape => (Attribute::Left, Attribute::Right),
        }
    }

    /// Leading and trailing edges of the short side.
    pub fn short_edges(self) -> (Attribute, Attribute) {
        self.opposite().long_edges()
    }
}

/// Classify a size. Same as [`Orientation::from_size`].
pub fn classify(size: Size) -> Orientation {
    Orientation::from_size(size)
}
