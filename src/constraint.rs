//! Layout constraint primitive and the geometry it speaks about.
//!
//! A [`Constraint`] is one linear equality between two view attributes, or
//! between a view attribute and a literal value:
//!
//! ```text
//! item.attribute = multiplier × to_item.to_attribute + constant
//! ```
//!
//! Every constraint carries a role identifier. Identifiers are not unique per
//! instance; they name the *role* a constraint plays (e.g. "long-side ratio")
//! so that an orientation change can find and replace constraints by role.
//!
//! # Example
//!
//! ```
//! use dialoglayout::{Attribute, Constraint, ViewId};
//!
//! let parent = ViewId(1);
//! let child = ViewId(2);
//! let c = Constraint::new(child, Attribute::Width, parent, Attribute::Width)
//!     .multiplier(0.5)
//!     .identifier("halfWidth");
//!
//! assert!(!c.is_direct());
//! assert_eq!(c.multiplier, 0.5);
//! assert_eq!(c.constant, 0.0);
//! ```

/// Stable role identifiers attached to every constraint this crate derives.
///
/// The same role always carries the same identifier regardless of
/// orientation.
pub mod identifier {
    /// Child long-axis size as a ratio of the parent's.
    pub const LONG_SIDE_RATIO: &str = "longSideRatioAttribute";
    /// Child short-axis size as a ratio of the parent's.
    pub const SHORT_SIDE_RATIO: &str = "shortSideRatioFirstAttribute";
    /// Leading edge on the long axis (top in portrait, left in landscape).
    pub const LONG_SIDE_PADDING_FIRST: &str = "longSidePaddingFirstAttribute";
    /// Trailing edge on the long axis (bottom in portrait, right in landscape).
    pub const LONG_SIDE_PADDING_SECOND: &str = "longSidePaddingSecondAttribute";
    /// Leading edge on the short axis (left in portrait, top in landscape).
    pub const SHORT_SIDE_PADDING_FIRST: &str = "shortSidePaddingFirstAttribute";
    /// Trailing edge on the short axis (right in portrait, bottom in landscape).
    pub const SHORT_SIDE_PADDING_SECOND: &str = "shortSidePaddingSecondAttribute";
    /// Literal long-axis size, owned by the child.
    pub const LONG_SIDE_CONSTANT: &str = "longSideConstantAttribute";
    /// Horizontal centering against the parent.
    pub const CENTER_X: &str = "dialogCenterX";
    /// Vertical centering against the parent.
    pub const CENTER_Y: &str = "dialogCenterY";

    pub const BACKGROUND_TOP: &str = "dialogBackgroundTop";
    pub const BACKGROUND_BOTTOM: &str = "dialogBackgroundBottom";
    pub const BACKGROUND_LEFT: &str = "dialogBackgroundLeft";
    pub const BACKGROUND_RIGHT: &str = "dialogBackgroundRight";
}

/// Opaque handle to a view owned by the host toolkit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(pub u32);

/// Width × height in points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in points.
    pub width: f32,
    /// Height in points.
    pub height: f32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The same size with width and height exchanged, i.e. the screen rotated.
    pub const fn reversed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Axis-aligned rectangle in points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Value of a layout attribute measured on this rect.
    ///
    /// [`Attribute::NotAnAttribute`] measures as 0.
    pub fn value(&self, attribute: Attribute) -> f32 {
        match attribute {
            Attribute::Width => self.width,
            Attribute::Height => self.height,
            Attribute::Left => self.x,
            Attribute::Right => self.x + self.width,
            Attribute::Top => self.y,
            Attribute::Bottom => self.y + self.height,
            Attribute::CenterX => self.x + self.width / 2.0,
            Attribute::CenterY => self.y + self.height / 2.0,
            Attribute::NotAnAttribute => 0.0,
        }
    }
}

/// Geometric axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis: width, left, right, centerX.
    Horizontal,
    /// Y axis: height, top, bottom, centerY.
    Vertical,
}

/// Layout attribute of a view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Width,
    Height,
    Top,
    Bottom,
    Left,
    Right,
    CenterX,
    CenterY,
    /// Placeholder for the counterpart side of a literal constraint.
    NotAnAttribute,
}

impl Attribute {
    /// Axis this attribute measures along, `None` for [`NotAnAttribute`](Self::NotAnAttribute).
    pub fn axis(self) -> Option<Axis> {
        match self {
            Self::Width | Self::Left | Self::Right | Self::CenterX => Some(Axis::Horizontal),
            Self::Height | Self::Top | Self::Bottom | Self::CenterY => Some(Axis::Vertical),
            Self::NotAnAttribute => None,
        }
    }

    /// Whether this is a dimension rather than a position.
    pub fn is_size(self) -> bool {
        matches!(self, Self::Width | Self::Height)
    }

    /// Whether this is one of the four edges.
    pub fn is_edge(self) -> bool {
        matches!(self, Self::Top | Self::Bottom | Self::Left | Self::Right)
    }
}

/// Relation between the two sides of a constraint. Only equality is derived.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Relation {
    #[default]
    Equal,
}

/// One geometric relation tagged with a role identifier.
///
/// Equality and hashing compare the float fields bitwise, so two constraints
/// are equal exactly when they would install identically.
#[derive(Copy, Clone, Debug)]
pub struct Constraint {
    /// Subject view.
    pub item: ViewId,
    /// Subject attribute.
    pub attribute: Attribute,
    /// How the subject compares to the right-hand side.
    pub relation: Relation,
    /// Counterpart view, `None` for a literal value.
    pub to_item: Option<ViewId>,
    /// Counterpart attribute, [`Attribute::NotAnAttribute`] for a literal value.
    pub to_attribute: Attribute,
    /// Scale applied to the counterpart attribute.
    pub multiplier: f32,
    /// Offset added after scaling, or the literal value.
    pub constant: f32,
    /// Role identifier, shared by every constraint playing the same role.
    pub identifier: &'static str,
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
            && self.attribute == other.attribute
            && self.relation == other.relation
            && self.to_item == other.to_item
            && self.to_attribute == other.to_attribute
            && self.multiplier.to_bits() == other.multiplier.to_bits()
            && self.constant.to_bits() == other.constant.to_bits()
            && self.identifier == other.identifier
    }
}

impl Eq for Constraint {}

impl core::hash::Hash for Constraint {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.item.hash(state);
        self.attribute.hash(state);
        self.relation.hash(state);
        self.to_item.hash(state);
        self.to_attribute.hash(state);
        self.multiplier.to_bits().hash(state);
        self.constant.to_bits().hash(state);
        self.identifier.hash(state);
    }
}

impl Constraint {
    /// Relate `item.attribute` to `to_item.to_attribute` with multiplier 1,
    /// constant 0 and an empty identifier.
    pub fn new(item: ViewId, attribute: Attribute, to_item: ViewId, to_attribute: Attribute) -> Self {
        Self {
            item,
            attribute,
            relation: Relation::Equal,
            to_item: Some(to_item),
            to_attribute,
            multiplier: 1.0,
            constant: 0.0,
            identifier: "",
        }
    }

    /// Fix `item.attribute` to a literal value, with no counterpart view.
    pub fn literal(item: ViewId, attribute: Attribute, constant: f32) -> Self {
        Self {
            item,
            attribute,
            relation: Relation::Equal,
            to_item: None,
            to_attribute: Attribute::NotAnAttribute,
            multiplier: 1.0,
            constant,
            identifier: "",
        }
    }

    /// Set the multiplier.
    pub fn multiplier(mut self, multiplier: f32) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Set the constant.
    pub fn constant(mut self, constant: f32) -> Self {
        self.constant = constant;
        self
    }

    /// Set the role identifier.
    pub fn identifier(mut self, identifier: &'static str) -> Self {
        self.identifier = identifier;
        self
    }

    /// A constraint with no counterpart view. It is owned by its subject
    /// rather than by the parent.
    pub fn is_direct(&self) -> bool {
        self.to_item.is_none()
    }

    /// Whether `view` appears on either side.
    pub fn involves(&self, view: ViewId) -> bool {
        self.item == view || self.to_item == Some(view)
    }
}
