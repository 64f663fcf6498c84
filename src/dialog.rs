//! The dialog contract: what a view must provide to be presented as an
//! overlay dialog.
//!
//! [`Dialog`] is a capability, not a base type. [`DialogView`] is the
//! ready-made implementation that composes one [`SizingPolicy`]; custom view
//! types can implement [`Dialog`] directly.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;

use crate::constraint::{Constraint, ViewId};
use crate::orientation::Orientation;
use crate::strategy::SizingPolicy;

/// Something that knows the current screen orientation.
///
/// Queried synchronously on every derivation, so it must not block.
pub trait OrientationSource {
    fn current_orientation(&self) -> Orientation;
}

/// Sizing declaration of one dialog view: its policy and whether it follows
/// orientation changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sizing {
    pub policy: SizingPolicy,
    /// Re-derive constraints when the orientation changes. Default `true`.
    pub react_to_orientation_change: bool,
}

impl Sizing {
    pub fn new(policy: SizingPolicy) -> Self {
        Self {
            policy,
            react_to_orientation_change: true,
        }
    }

    /// Set whether to follow orientation changes.
    pub fn react_to_orientation_change(mut self, react: bool) -> Self {
        self.react_to_orientation_change = react;
        self
    }
}

impl From<SizingPolicy> for Sizing {
    fn from(policy: SizingPolicy) -> Self {
        Self::new(policy)
    }
}

/// Capability set of a presentable dialog view.
pub trait Dialog {
    /// The host view this dialog lays out.
    fn view(&self) -> ViewId;

    /// Orientation source, if it is still alive. Implementations hold it
    /// non-owningly.
    fn orientation_source(&self) -> Option<Rc<dyn OrientationSource>>;

    /// Current orientation, portrait when the source is gone.
    fn orientation(&self) -> Orientation {
        self.orientation_source()
            .map_or(Orientation::Portrait, |source| source.current_orientation())
    }

    fn react_to_orientation_change(&self) -> bool {
        true
    }

    /// Constraints placing `child` inside `parent` for the current orientation.
    fn dialog_constraints(&self, parent: ViewId, child: ViewId) -> Vec<Constraint>;
}

/// A dialog view that sizes itself with one [`SizingPolicy`].
#[derive(Clone)]
pub struct DialogView {
    view: ViewId,
    sizing: Sizing,
    detector: Weak<dyn OrientationSource>,
}

impl DialogView {
    /// Create a dialog for `view`, observing `detector` without keeping it alive.
    pub fn new(view: ViewId, sizing: impl Into<Sizing>, detector: &Rc<dyn OrientationSource>) -> Self {
        Self {
            view,
            sizing: sizing.into(),
            detector: Rc::downgrade(detector),
        }
    }

    /// Create a dialog with no orientation source. It always derives for portrait.
    pub fn without_source(view: ViewId, sizing: impl Into<Sizing>) -> Self {
        Self {
            view,
            sizing: sizing.into(),
            detector: Weak::<NoSource>::new(),
        }
    }

    pub fn sizing(&self) -> &Sizing {
        &self.sizing
    }
}

impl core::fmt::Debug for DialogView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DialogView")
            .field("view", &self.view)
            .field("sizing", &self.sizing)
            .field("has_detector", &(self.detector.strong_count() > 0))
            .finish()
    }
}

impl Dialog for DialogView {
    fn view(&self) -> ViewId {
        self.view
    }

    fn orientation_source(&self) -> Option<Rc<dyn OrientationSource>> {
        self.detector.upgrade()
    }

    fn react_to_orientation_change(&self) -> bool {
        self.sizing.react_to_orientation_change
    }

    fn dialog_constraints(&self, parent: ViewId, child: ViewId) -> Vec<Constraint> {
        self.sizing
            .policy
            .constraints(parent, child, self.orientation())
    }
}

/// Uninhabited type backing an empty `Weak<dyn OrientationSource>`.
enum NoSource {}

impl OrientationSource for NoSource {
    fn current_orientation(&self) -> Orientation {
        match *self {}
    }
}
