//! Host toolkit collaborator contract and an in-memory implementation.
//!
//! [`ViewHost`] is the small slice of a UI toolkit the dialog engine needs:
//! a view hierarchy, per-owner constraint lists, and a batch primitive that
//! removes and adds constraints in one step. [`ViewTree`] implements it
//! without any platform, for hosts that lay out with [`crate::solve`] and
//! for tests.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::constraint::{Constraint, Rect, Size, ViewId};
use crate::solve::{self, LayoutError};

/// Where a new subview goes in its parent's z-order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Above every existing sibling.
    #[default]
    Front,
    /// Below every existing sibling.
    Back,
}

/// The host toolkit's view hierarchy and constraint storage.
pub trait ViewHost {
    /// Allocate a new, parentless view.
    fn create_view(&mut self) -> ViewId;

    fn parent(&self, view: ViewId) -> Option<ViewId>;

    /// Make `child` a subview of `parent`, moving it if it already has one.
    fn add_subview(&mut self, parent: ViewId, child: ViewId, placement: Placement);

    /// Constraints currently owned by `owner`.
    fn constraints(&self, owner: ViewId) -> &[Constraint];

    /// Remove `remove` from and add `add` to `owner`'s constraints as one batch.
    fn apply_constraints(&mut self, owner: ViewId, add: &[Constraint], remove: &[Constraint]);
}

#[derive(Clone, Debug, Default)]
struct Node {
    parent: Option<ViewId>,
    children: Vec<ViewId>,
    constraints: Vec<Constraint>,
    bounds: Rect,
}

/// Platform-free [`ViewHost`].
///
/// ```
/// use dialoglayout::{Placement, Rect, SizingPolicy, ViewHost, ViewTree};
///
/// let mut tree = ViewTree::new();
/// let root = tree.create_view();
/// let child = tree.create_view();
/// tree.set_bounds(root, Rect::new(0.0, 0.0, 400.0, 700.0));
/// tree.add_subview(root, child, Placement::Front);
///
/// let cs = SizingPolicy::Padding { long_side_padding: 20.0, short_side_padding: 10.0 }
///     .constraints(root, child, dialoglayout::Orientation::Portrait);
/// tree.apply_constraints(root, &cs, &[]);
///
/// assert_eq!(tree.resolve_frame(child), Ok(Rect::new(10.0, 20.0, 380.0, 660.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ViewTree {
    views: BTreeMap<ViewId, Node>,
    next_id: u32,
    batches: usize,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, view: ViewId) -> bool {
        self.views.contains_key(&view)
    }

    /// Set a view's bounds, the space its subviews resolve against.
    pub fn set_bounds(&mut self, view: ViewId, bounds: Rect) {
        if let Some(node) = self.views.get_mut(&view) {
            node.bounds = bounds;
        } else {
            log::warn!("set_bounds on unknown view {view:?}");
        }
    }

    /// Resize a view keeping its origin.
    pub fn set_size(&mut self, view: ViewId, size: Size) {
        let origin = self.bounds(view).unwrap_or_default();
        self.set_bounds(view, Rect::new(origin.x, origin.y, size.width, size.height));
    }

    pub fn bounds(&self, view: ViewId) -> Option<Rect> {
        self.views.get(&view).map(|n| n.bounds)
    }

    /// Subviews back to front.
    pub fn children(&self, view: ViewId) -> &[ViewId] {
        self.views
            .get(&view)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    /// Detach `view` from its parent.
    ///
    /// Every constraint in the former ancestors that references `view` is
    /// dropped with it. Constraints the view owns itself stay.
    pub fn remove_from_parent(&mut self, view: ViewId) {
        let Some(parent) = self.parent(view) else {
            return;
        };
        if let Some(node) = self.views.get_mut(&parent) {
            node.children.retain(|&c| c != view);
        }
        if let Some(node) = self.views.get_mut(&view) {
            node.parent = None;
        }
        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            let Some(node) = self.views.get_mut(&id) else {
                break;
            };
            node.constraints.retain(|c| !c.involves(view));
            ancestor = node.parent;
        }
    }

    /// Number of [`apply_constraints`](ViewHost::apply_constraints) batches so far.
    pub fn batch_count(&self) -> usize {
        self.batches
    }

    /// Resolve `view`'s frame from its own and its parent's constraints.
    pub fn resolve_frame(&self, view: ViewId) -> Result<Rect, LayoutError> {
        let parent = self.parent(view).ok_or(LayoutError::Detached)?;
        let bounds = self.bounds(parent).unwrap_or_default();
        let mut all = Vec::with_capacity(
            self.constraints(parent).len() + self.constraints(view).len(),
        );
        all.extend_from_slice(self.constraints(parent));
        all.extend_from_slice(self.constraints(view));
        solve::resolve_frame(parent, Rect::from_size(bounds.size()), view, &all)
    }
}

impl ViewHost for ViewTree {
    fn create_view(&mut self) -> ViewId {
        self.next_id += 1;
        let id = ViewId(self.next_id);
        self.views.insert(id, Node::default());
        id
    }

    fn parent(&self, view: ViewId) -> Option<ViewId> {
        self.views.get(&view).and_then(|n| n.parent)
    }

    fn add_subview(&mut self, parent: ViewId, child: ViewId, placement: Placement) {
        if parent == child || !self.contains(parent) || !self.contains(child) {
            log::warn!("add_subview({parent:?}, {child:?}) ignored");
            return;
        }
        self.remove_from_parent(child);
        if let Some(node) = self.views.get_mut(&parent) {
            match placement {
                Placement::Front => node.children.push(child),
                Placement::Back => node.children.insert(0, child),
            }
        }
        if let Some(node) = self.views.get_mut(&child) {
            node.parent = Some(parent);
        }
    }

    fn constraints(&self, owner: ViewId) -> &[Constraint] {
        self.views
            .get(&owner)
            .map(|n| n.constraints.as_slice())
            .unwrap_or_default()
    }

    fn apply_constraints(&mut self, owner: ViewId, add: &[Constraint], remove: &[Constraint]) {
        let Some(node) = self.views.get_mut(&owner) else {
            log::warn!("apply_constraints on unknown view {owner:?}");
            return;
        };
        self.batches += 1;
        for old in remove {
            if let Some(pos) = node.constraints.iter().position(|c| c == old) {
                node.constraints.remove(pos);
            }
        }
        node.constraints.extend_from_slice(add);
        log::trace!(
            "batch on {owner:?}: -{} +{} = {}",
            remove.len(),
            add.len(),
            node.constraints.len()
        );
    }
}
