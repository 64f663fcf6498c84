//! Orientation-change reconciliation.
//!
//! A [`Reconciler`] tracks one dialog view through two states:
//!
//! ```text
//!              attach(parent)
//!   Detached ─────────────────► Attached ──┐ orientation_changed
//!      ▲                           │  ▲    │ (re-derive, swap by identifier)
//!      └─── view left parent ──────┘  └────┘
//! ```
//!
//! On every orientation change the dialog's constraints are re-derived and
//! matched against the installed ones by role identifier. Matches are removed
//! and the new set added in one batch per owner: the parent owns constraints
//! with a counterpart view, the dialog view owns literal ones.

use alloc::vec::Vec;

use crate::constraint::{Constraint, ViewId};
use crate::dialog::Dialog;
use crate::host::{Placement, ViewHost};
use crate::orientation::Orientation;

/// Attachment state of one dialog view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Attachment {
    /// No installed constraints. Initial state.
    #[default]
    Detached,
    /// Child of `parent`, with an installed constraint set.
    Attached { parent: ViewId },
}

/// Why a reconciliation pass did nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The dialog opted out of orientation changes.
    Disabled,
    /// The view is not (or no longer) attached.
    Detached,
}

/// Outcome of an attach or reconciliation pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Reconciliation {
    /// Constraints were swapped: `removed` old ones out, `added` new ones in.
    Applied { removed: usize, added: usize },
    Skipped(SkipReason),
}

/// Keeps one dialog view's installed constraint set in step with orientation.
#[derive(Clone, Debug, Default)]
pub struct Reconciler {
    state: Attachment,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Attachment {
        self.state
    }

    /// Parent the view was attached to, if any.
    pub fn parent(&self) -> Option<ViewId> {
        match self.state {
            Attachment::Attached { parent } => Some(parent),
            Attachment::Detached => None,
        }
    }

    /// Whether the view is still a child of the parent it was attached to.
    ///
    /// Falls back to [`Attachment::Detached`] once the host has removed it.
    pub fn is_live<H, D>(&mut self, host: &H, dialog: &D) -> bool
    where
        H: ViewHost + ?Sized,
        D: Dialog + ?Sized,
    {
        let Attachment::Attached { parent } = self.state else {
            return false;
        };
        if host.parent(dialog.view()) == Some(parent) {
            true
        } else {
            log::debug!("{:?} left {parent:?}, now detached", dialog.view());
            self.state = Attachment::Detached;
            false
        }
    }

    /// Add the dialog view to `parent` and install its constraints for the
    /// current orientation.
    ///
    /// Any installed constraint sharing a role with the new set is replaced,
    /// so attaching twice does not duplicate and a literal size left on the
    /// view from an earlier attachment does not conflict.
    ///
    /// If the host refuses the subview (unknown view, or a view attached to
    /// itself) nothing is installed and the state stays
    /// [`Attachment::Detached`].
    pub fn attach<H, D>(&mut self, host: &mut H, dialog: &D, parent: ViewId) -> Reconciliation
    where
        H: ViewHost + ?Sized,
        D: Dialog + ?Sized,
    {
        let view = dialog.view();
        if host.parent(view) != Some(parent) {
            host.add_subview(parent, view, Placement::Front);
        }
        if host.parent(view) != Some(parent) {
            log::warn!("host did not add {view:?} to {parent:?}, nothing installed");
            self.state = Attachment::Detached;
            return Reconciliation::Skipped(SkipReason::Detached);
        }
        self.state = Attachment::Attached { parent };
        self.swap(host, dialog, parent)
    }

    /// Handle an orientation change notification.
    ///
    /// No-op when the dialog opted out or the view has left its parent.
    pub fn orientation_changed<H, D>(
        &mut self,
        host: &mut H,
        dialog: &D,
        orientation: Orientation,
    ) -> Reconciliation
    where
        H: ViewHost + ?Sized,
        D: Dialog + ?Sized,
    {
        if !self.is_live(&*host, dialog) {
            return Reconciliation::Skipped(SkipReason::Detached);
        }
        if !dialog.react_to_orientation_change() {
            log::trace!("{:?} ignores change to {orientation:?}", dialog.view());
            return Reconciliation::Skipped(SkipReason::Disabled);
        }
        let Attachment::Attached { parent } = self.state else {
            return Reconciliation::Skipped(SkipReason::Detached);
        };
        if dialog.orientation() != orientation {
            log::debug!(
                "{:?} notified of {orientation:?} but its source reports {:?}",
                dialog.view(),
                dialog.orientation()
            );
        }
        self.swap(host, dialog, parent)
    }

    fn swap<H, D>(&mut self, host: &mut H, dialog: &D, parent: ViewId) -> Reconciliation
    where
        H: ViewHost + ?Sized,
        D: Dialog + ?Sized,
    {
        let view = dialog.view();
        let fresh = dialog.dialog_constraints(parent, view);
        let roles: Vec<&'static str> = fresh.iter().map(|c| c.identifier).collect();

        let stale_in_parent = stale(host.constraints(parent), view, &roles);
        let stale_in_view = stale(host.constraints(view), view, &roles);
        let removed = stale_in_parent.len() + stale_in_view.len();

        let (direct, related) = split_by_owner(fresh);
        host.apply_constraints(parent, &related, &stale_in_parent);
        host.apply_constraints(view, &direct, &stale_in_view);

        log::debug!(
            "reconciled {view:?} in {parent:?} for {:?}: -{removed} +{}",
            dialog.orientation(),
            related.len() + direct.len()
        );
        Reconciliation::Applied {
            removed,
            added: related.len() + direct.len(),
        }
    }
}

/// Installed constraints of `view` whose role is about to be replaced.
fn stale(installed: &[Constraint], view: ViewId, roles: &[&'static str]) -> Vec<Constraint> {
    installed
        .iter()
        .filter(|c| c.involves(view) && roles.contains(&c.identifier))
        .copied()
        .collect()
}

/// Split into `(direct, related)`: the view owns direct constraints, the
/// parent owns the rest.
fn split_by_owner(constraints: Vec<Constraint>) -> (Vec<Constraint>, Vec<Constraint>) {
    constraints.into_iter().partition(Constraint::is_direct)
}
