//! Frame resolution: installed constraints → concrete child rect.
//!
//! Each axis is solved independently. The child's facts on an axis are its
//! size, leading edge, trailing edge and center; any two determine the
//! axis, and every further fact must agree with the result.
//!
//! ```text
//!   parent  ┌───────────────────────────────┐
//!           │   min        center       max │
//!           │    ├───────────┼───────────┤  │
//!           │    ◄────────  size ────────►  │
//!           └───────────────────────────────┘
//! ```

use alloc::vec::Vec;
use num_traits::Float;

use crate::constraint::{Attribute, Axis, Constraint, Rect, ViewId};

/// Tolerance when checking redundant facts against each other, in points.
pub const TOLERANCE: f32 = 1e-3;

/// Frame resolution error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Fewer than two independent facts on an axis.
    Underconstrained { axis: Axis },
    /// Two facts on an axis disagree.
    Conflicting { axis: Axis },
    /// The resolved size on an axis is negative.
    NegativeSize { axis: Axis },
    /// A parent-subject constraint has multiplier 0 and cannot be inverted.
    DegenerateMultiplier,
    /// The view has no parent to resolve against.
    Detached,
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Underconstrained { axis } => write!(f, "{axis:?} axis is underconstrained"),
            Self::Conflicting { axis } => write!(f, "conflicting constraints on {axis:?} axis"),
            Self::NegativeSize { axis } => write!(f, "negative size on {axis:?} axis"),
            Self::DegenerateMultiplier => f.write_str("cannot invert a constraint with multiplier 0"),
            Self::Detached => f.write_str("view has no parent"),
        }
    }
}

impl core::error::Error for LayoutError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Fact {
    Size,
    Min,
    Max,
    Center,
}

impl Fact {
    fn of(attribute: Attribute) -> Option<Self> {
        match attribute {
            Attribute::Width | Attribute::Height => Some(Self::Size),
            Attribute::Left | Attribute::Top => Some(Self::Min),
            Attribute::Right | Attribute::Bottom => Some(Self::Max),
            Attribute::CenterX | Attribute::CenterY => Some(Self::Center),
            Attribute::NotAnAttribute => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Facts gathered on one axis, first value per kind.
#[derive(Default)]
struct AxisFacts {
    values: [Option<f32>; 4],
}

impl AxisFacts {
    fn record(&mut self, fact: Fact, value: f32, axis: Axis) -> Result<(), LayoutError> {
        match self.values[fact.index()] {
            Some(existing) if Float::abs(existing - value) > TOLERANCE => {
                Err(LayoutError::Conflicting { axis })
            }
            Some(_) => Ok(()),
            None => {
                self.values[fact.index()] = Some(value);
                Ok(())
            }
        }
    }

    /// Solve for `(origin, length)`.
    fn solve(&self, axis: Axis) -> Result<(f32, f32), LayoutError> {
        let [size, min, max, center] = self.values;
        let (origin, length) = match (size, min, max, center) {
            (Some(s), Some(lo), _, _) => (lo, s),
            (Some(s), None, Some(hi), _) => (hi - s, s),
            (Some(s), None, None, Some(c)) => (c - s / 2.0, s),
            (None, Some(lo), Some(hi), _) => (lo, hi - lo),
            (None, Some(lo), None, Some(c)) => (lo, 2.0 * (c - lo)),
            (None, None, Some(hi), Some(c)) => {
                let len = 2.0 * (hi - c);
                (hi - len, len)
            }
            _ => return Err(LayoutError::Underconstrained { axis }),
        };
        if length < -TOLERANCE {
            return Err(LayoutError::NegativeSize { axis });
        }
        let agrees = |expected: Option<f32>, actual: f32| {
            expected.is_none_or(|e| Float::abs(e - actual) <= TOLERANCE)
        };
        if agrees(size, length)
            && agrees(min, origin)
            && agrees(max, origin + length)
            && agrees(center, origin + length / 2.0)
        {
            Ok((origin, length))
        } else {
            Err(LayoutError::Conflicting { axis })
        }
    }
}

/// Resolve the frame of `child`, in `parent_bounds`' coordinate space.
///
/// Constraints that do not relate `child` to `parent` (or to a literal) are
/// ignored, so the parent's full constraint list can be passed as is.
pub fn resolve_frame(
    parent: ViewId,
    parent_bounds: Rect,
    child: ViewId,
    constraints: &[Constraint],
) -> Result<Rect, LayoutError> {
    let mut horizontal = AxisFacts::default();
    let mut vertical = AxisFacts::default();

    for c in constraints {
        let Some((attribute, value)) = child_fact(c, parent, parent_bounds, child)? else {
            continue;
        };
        let (Some(axis), Some(fact)) = (attribute.axis(), Fact::of(attribute)) else {
            continue;
        };
        match axis {
            Axis::Horizontal => horizontal.record(fact, value, axis)?,
            Axis::Vertical => vertical.record(fact, value, axis)?,
        }
    }

    let (x, width) = horizontal.solve(Axis::Horizontal)?;
    let (y, height) = vertical.solve(Axis::Vertical)?;
    Ok(Rect::new(x, y, width, height))
}

/// The child attribute a constraint pins, and its value.
fn child_fact(
    c: &Constraint,
    parent: ViewId,
    parent_bounds: Rect,
    child: ViewId,
) -> Result<Option<(Attribute, f32)>, LayoutError> {
    Ok(match c.to_item {
        None if c.item == child => Some((c.attribute, c.constant)),
        Some(to) if c.item == child && to == parent => Some((
            c.attribute,
            c.multiplier * parent_bounds.value(c.to_attribute) + c.constant,
        )),
        Some(to) if c.item == parent && to == child => {
            if c.multiplier == 0.0 {
                return Err(LayoutError::DegenerateMultiplier);
            }
            Some((
                c.to_attribute,
                (parent_bounds.value(c.attribute) - c.constant) / c.multiplier,
            ))
        }
        _ => None,
    })
}

/// Resolve frames for several children sharing one parent.
pub fn resolve_frames(
    parent: ViewId,
    parent_bounds: Rect,
    children: &[ViewId],
    constraints: &[Constraint],
) -> Vec<Result<Rect, LayoutError>> {
    children
        .iter()
        .map(|&child| resolve_frame(parent, parent_bounds, child, constraints))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation;
    use crate::strategy::SizingPolicy;

    const PARENT: ViewId = ViewId(1);
    const CHILD: ViewId = ViewId(2);

    fn frame(policy: SizingPolicy, bounds: Rect) -> Result<Rect, LayoutError> {
        let o = Orientation::from_size(bounds.size());
        let cs = policy.constraints(PARENT, CHILD, o);
        resolve_frame(PARENT, bounds, CHILD, &cs)
    }

    #[test]
    fn padding_portrait() {
        let r = frame(
            SizingPolicy::Padding {
                long_side_padding: 20.0,
                short_side_padding: 10.0,
            },
            Rect::new(0.0, 0.0, 400.0, 700.0),
        )
        .unwrap();
        assert_eq!(r, Rect::new(10.0, 20.0, 380.0, 660.0));
    }

    #[test]
    fn padding_landscape() {
        let r = frame(
            SizingPolicy::Padding {
                long_side_padding: 20.0,
                short_side_padding: 10.0,
            },
            Rect::new(0.0, 0.0, 700.0, 400.0),
        )
        .unwrap();
        assert_eq!(r, Rect::new(20.0, 10.0, 660.0, 380.0));
    }

    #[test]
    fn ratio_is_centered() {
        let r = frame(
            SizingPolicy::Ratio {
                long_side_ratio: 0.5,
                short_side_ratio: 0.5,
            },
            Rect::new(0.0, 0.0, 400.0, 700.0),
        )
        .unwrap();
        assert_eq!(r, Rect::new(100.0, 175.0, 200.0, 350.0));
    }

    #[test]
    fn padding_constant_redundant_center_agrees() {
        // Horizontal axis has left, right and centerX; all consistent.
        let r = frame(
            SizingPolicy::PaddingConstant {
                long_side_constant: 300.0,
                short_side_padding: 40.0,
            },
            Rect::new(0.0, 0.0, 400.0, 700.0),
        )
        .unwrap();
        assert_eq!(r, Rect::new(40.0, 200.0, 320.0, 300.0));
    }

    #[test]
    fn ratio_constant_landscape() {
        let r = frame(
            SizingPolicy::RatioConstant {
                long_side_constant: 500.0,
                short_side_ratio: 0.5,
            },
            Rect::new(0.0, 0.0, 700.0, 400.0),
        )
        .unwrap();
        assert_eq!(r, Rect::new(100.0, 100.0, 500.0, 200.0));
    }

    #[test]
    fn lone_constant_is_underconstrained() {
        let err = frame(
            SizingPolicy::Constant {
                long_side_constant: 300.0,
            },
            Rect::new(0.0, 0.0, 400.0, 700.0),
        )
        .unwrap_err();
        assert_eq!(err, LayoutError::Underconstrained { axis: Axis::Horizontal });
    }

    #[test]
    fn oversized_padding_is_negative() {
        let err = frame(
            SizingPolicy::Padding {
                long_side_padding: 10.0,
                short_side_padding: 300.0,
            },
            Rect::new(0.0, 0.0, 400.0, 700.0),
        )
        .unwrap_err();
        assert_eq!(err, LayoutError::NegativeSize { axis: Axis::Horizontal });
    }

    #[test]
    fn conflicting_duplicates_detected() {
        let cs = [
            Constraint::literal(CHILD, Attribute::Width, 100.0),
            Constraint::literal(CHILD, Attribute::Width, 120.0),
        ];
        let err = resolve_frame(PARENT, Rect::new(0.0, 0.0, 400.0, 700.0), CHILD, &cs).unwrap_err();
        assert_eq!(err, LayoutError::Conflicting { axis: Axis::Horizontal });
    }

    #[test]
    fn over_determined_inconsistent_axis() {
        let cs = [
            Constraint::literal(CHILD, Attribute::Width, 100.0),
            Constraint::new(CHILD, Attribute::Left, PARENT, Attribute::Left),
            Constraint::new(PARENT, Attribute::Right, CHILD, Attribute::Right),
            Constraint::literal(CHILD, Attribute::Height, 10.0),
            Constraint::new(CHILD, Attribute::Top, PARENT, Attribute::Top),
        ];
        let err = resolve_frame(PARENT, Rect::new(0.0, 0.0, 400.0, 700.0), CHILD, &cs).unwrap_err();
        assert_eq!(err, LayoutError::Conflicting { axis: Axis::Horizontal });
    }

    #[test]
    fn zero_multiplier_on_reverse_edge() {
        let cs = [Constraint::new(PARENT, Attribute::Right, CHILD, Attribute::Right).multiplier(0.0)];
        let err = resolve_frame(PARENT, Rect::new(0.0, 0.0, 400.0, 700.0), CHILD, &cs).unwrap_err();
        assert_eq!(err, LayoutError::DegenerateMultiplier);
    }

    #[test]
    fn unrelated_constraints_are_ignored() {
        let other = ViewId(7);
        let mut cs = SizingPolicy::Ratio {
            long_side_ratio: 0.5,
            short_side_ratio: 0.5,
        }
        .constraints(PARENT, CHILD, Orientation::Portrait);
        cs.push(Constraint::literal(other, Attribute::Width, 1.0));
        cs.push(Constraint::new(CHILD, Attribute::Width, other, Attribute::Width));
        let r = resolve_frame(PARENT, Rect::new(0.0, 0.0, 400.0, 700.0), CHILD, &cs).unwrap();
        assert_eq!(r.width, 200.0);
    }

    #[test]
    fn resolve_several_children() {
        let a = ViewId(10);
        let b = ViewId(11);
        let mut cs = SizingPolicy::Padding {
            long_side_padding: 0.0,
            short_side_padding: 0.0,
        }
        .constraints(PARENT, a, Orientation::Portrait);
        cs.extend(
            SizingPolicy::Constant {
                long_side_constant: 5.0,
            }
            .constraints(PARENT, b, Orientation::Portrait),
        );
        let frames = resolve_frames(PARENT, Rect::new(0.0, 0.0, 100.0, 200.0), &[a, b], &cs);
        assert_eq!(frames[0], Ok(Rect::new(0.0, 0.0, 100.0, 200.0)));
        assert!(frames[1].is_err());
    }

    #[test]
    fn display_messages() {
        use alloc::string::ToString;
        assert_eq!(
            LayoutError::Underconstrained { axis: Axis::Vertical }.to_string(),
            "Vertical axis is underconstrained"
        );
        assert_eq!(LayoutError::Detached.to_string(), "view has no parent");
    }
}
