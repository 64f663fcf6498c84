//! Sizing strategies: declared intent + orientation → concrete constraints.
//!
//! Each strategy is a pure function of `(parent, child, declaration,
//! orientation)`. The composed policies take each axis from exactly one
//! source strategy, so no axis ever receives both a size constraint and a
//! full edge pair from the same policy.
//!
//! | Policy            | Long axis        | Short axis       | Centering |
//! |-------------------|------------------|------------------|-----------|
//! | `Ratio`           | ratio            | ratio            | yes       |
//! | `Padding`         | edge pair        | edge pair        | no        |
//! | `Constant`        | literal size     | none             | no        |
//! | `RatioPadding`    | ratio            | edge pair        | yes       |
//! | `RatioConstant`   | literal size     | ratio            | yes       |
//! | `PaddingConstant` | literal size     | edge pair        | yes       |
//!
//! # Example
//!
//! ```
//! use dialoglayout::{Attribute, Orientation, SizingPolicy, ViewId};
//!
//! let policy = SizingPolicy::Ratio { long_side_ratio: 0.5, short_side_ratio: 0.3 };
//! let constraints = policy.constraints(ViewId(1), ViewId(2), Orientation::Landscape);
//!
//! let width = constraints.iter().find(|c| c.attribute == Attribute::Width).unwrap();
//! assert_eq!(width.multiplier, 0.5);
//! ```

use alloc::vec::Vec;

use crate::constraint::{Attribute, Constraint, ViewId, identifier};
use crate::orientation::Orientation;

/// Which sizing strategy a dialog composes, with its numeric parameters.
///
/// Only the parameters the strategy reads exist on each variant, so a view
/// cannot declare a composite strategy while missing one of its halves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SizingPolicy {
    /// Both sides proportional to the parent, centered.
    Ratio {
        long_side_ratio: f32,
        short_side_ratio: f32,
    },
    /// Inset from all four parent edges.
    Padding {
        long_side_padding: f32,
        short_side_padding: f32,
    },
    /// Literal long-side size only.
    Constant { long_side_constant: f32 },
    /// Long side proportional, short side inset, centered.
    RatioPadding {
        long_side_ratio: f32,
        short_side_padding: f32,
    },
    /// Long side literal, short side proportional, centered.
    RatioConstant {
        long_side_constant: f32,
        short_side_ratio: f32,
    },
    /// Long side literal, short side inset, centered.
    PaddingConstant {
        long_side_constant: f32,
        short_side_padding: f32,
    },
}

impl SizingPolicy {
    /// Short lowercase name, matching the `policy` configuration key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ratio { .. } => "ratio",
            Self::Padding { .. } => "padding",
            Self::Constant { .. } => "constant",
            Self::RatioPadding { .. } => "ratio-padding",
            Self::RatioConstant { .. } => "ratio-constant",
            Self::PaddingConstant { .. } => "padding-constant",
        }
    }

    /// Whether the policy pins the child to the parent's center.
    pub fn is_centered(&self) -> bool {
        !matches!(self, Self::Padding { .. } | Self::Constant { .. })
    }

    /// Derive the constraint set for `child` inside `parent` at `orientation`.
    pub fn constraints(&self, parent: ViewId, child: ViewId, orientation: Orientation) -> Vec<Constraint> {
        let mut out = Vec::with_capacity(6);
        match *self {
            Self::Ratio {
                long_side_ratio,
                short_side_ratio,
            } => {
                out.push(long_side_ratio_constraint(parent, child, orientation, long_side_ratio));
                out.push(short_side_ratio_constraint(parent, child, orientation, short_side_ratio));
            }
            Self::Padding {
                long_side_padding,
                short_side_padding,
            } => {
                out.extend(long_side_padding_constraints(parent, child, orientation, long_side_padding));
                out.extend(short_side_padding_constraints(parent, child, orientation, short_side_padding));
            }
            Self::Constant { long_side_constant } => {
                out.push(long_side_constant_constraint(child, orientation, long_side_constant));
            }
            Self::RatioPadding {
                long_side_ratio,
                short_side_padding,
            } => {
                out.push(long_side_ratio_constraint(parent, child, orientation, long_side_ratio));
                out.extend(short_side_padding_constraints(parent, child, orientation, short_side_padding));
            }
            Self::RatioConstant {
                long_side_constant,
                short_side_ratio,
            } => {
                out.push(long_side_constant_constraint(child, orientation, long_side_constant));
                out.push(short_side_ratio_constraint(parent, child, orientation, short_side_ratio));
            }
            Self::PaddingConstant {
                long_side_constant,
                short_side_padding,
            } => {
                out.push(long_side_constant_constraint(child, orientation, long_side_constant));
                out.extend(short_side_padding_constraints(parent, child, orientation, short_side_padding));
            }
        }
        if self.is_centered() {
            out.extend(center_constraints(parent, child));
        }
        out
    }
}

/// Ratios that are not strictly positive fall back to 1 (full size).
///
/// NaN also falls back to 1.
pub fn normalize_ratio(ratio: f32) -> f32 {
    if ratio > 0.0 { ratio } else { 1.0 }
}

/// `child.long = parent.long × ratio`.
pub fn long_side_ratio_constraint(
    parent: ViewId,
    child: ViewId,
    orientation: Orientation,
    ratio: f32,
) -> Constraint {
    let attribute = orientation.long_axis();
    Constraint::new(child, attribute, parent, attribute)
        .multiplier(normalize_ratio(ratio))
        .identifier(identifier::LONG_SIDE_RATIO)
}

/// `child.short = parent.short × ratio`.
pub fn short_side_ratio_constraint(
    parent: ViewId,
    child: ViewId,
    orientation: Orientation,
    ratio: f32,
) -> Constraint {
    let attribute = orientation.short_axis();
    Constraint::new(child, attribute, parent, attribute)
        .multiplier(normalize_ratio(ratio))
        .identifier(identifier::SHORT_SIDE_RATIO)
}

/// Edge pair on the long side, each inset by `padding`.
///
/// The leading edge is child-subject (`child.top = parent.top + p`), the
/// trailing edge parent-subject (`parent.bottom = child.bottom + p`), so both
/// constants equal the padding.
pub fn long_side_padding_constraints(
    parent: ViewId,
    child: ViewId,
    orientation: Orientation,
    padding: f32,
) -> [Constraint; 2] {
    let (first, second) = orientation.long_edges();
    edge_pair(
        parent,
        child,
        (first, second),
        padding,
        (identifier::LONG_SIDE_PADDING_FIRST, identifier::LONG_SIDE_PADDING_SECOND),
    )
}

/// Edge pair on the short side, each inset by `padding`.
pub fn short_side_padding_constraints(
    parent: ViewId,
    child: ViewId,
    orientation: Orientation,
    padding: f32,
) -> [Constraint; 2] {
    let (first, second) = orientation.short_edges();
    edge_pair(
        parent,
        child,
        (first, second),
        padding,
        (identifier::SHORT_SIDE_PADDING_FIRST, identifier::SHORT_SIDE_PADDING_SECOND),
    )
}

fn edge_pair(
    parent: ViewId,
    child: ViewId,
    (first, second): (Attribute, Attribute),
    padding: f32,
    (first_id, second_id): (&'static str, &'static str),
) -> [Constraint; 2] {
    [
        Constraint::new(child, first, parent, first)
            .constant(padding)
            .identifier(first_id),
        Constraint::new(parent, second, child, second)
            .constant(padding)
            .identifier(second_id),
    ]
}

/// `child.long = constant`, with no counterpart view.
pub fn long_side_constant_constraint(child: ViewId, orientation: Orientation, constant: f32) -> Constraint {
    Constraint::literal(child, orientation.long_axis(), constant)
        .identifier(identifier::LONG_SIDE_CONSTANT)
}

/// `child.centerX = parent.centerX` and `child.centerY = parent.centerY`.
pub fn center_constraints(parent: ViewId, child: ViewId) -> [Constraint; 2] {
    [
        Constraint::new(child, Attribute::CenterX, parent, Attribute::CenterX)
            .identifier(identifier::CENTER_X),
        Constraint::new(child, Attribute::CenterY, parent, Attribute::CenterY)
            .identifier(identifier::CENTER_Y),
    ]
}
