//! Orientation-aware sizing for modal dialog views.
//!
//! A dialog view declares how it wants to be sized relative to its parent
//! (proportional, inset, literal, or a mix across the long and short sides of
//! the screen). This crate turns that declaration plus the current screen
//! orientation into a set of identified layout constraints, and swaps the
//! set in place whenever the orientation flips.
//!
//! Platform-free, `no_std` + `alloc` compatible.
//!
//! # Modules
//!
//! - [`constraint`]: Constraint primitive, geometry, role identifiers
//! - [`orientation`]: Portrait/landscape classification, long/short axis mapping
//! - [`strategy`]: Sizing policies and the constraint builders behind them
//! - [`dialog`]: The dialog contract and a ready-made implementation
//! - [`host`]: Host toolkit contract and an in-memory view tree
//! - [`reconcile`]: Re-deriving constraints on orientation changes
//! - [`present`]: Screen-level coordinator, presentation style, dismiss backdrop
//! - [`solve`]: Resolving an installed constraint set to a concrete frame
//! - `query` (feature `query`): Query-string sizing declarations
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use dialoglayout::{
//!     DialogView, Orientation, OrientationSource, Rect, Reconciler, SizingPolicy, ViewHost,
//!     ViewTree,
//! };
//!
//! struct Fixed(Orientation);
//! impl OrientationSource for Fixed {
//!     fn current_orientation(&self) -> Orientation {
//!         self.0
//!     }
//! }
//!
//! let mut tree = ViewTree::new();
//! let root = tree.create_view();
//! tree.set_bounds(root, Rect::new(0.0, 0.0, 400.0, 700.0));
//!
//! let source: Rc<dyn OrientationSource> = Rc::new(Fixed(Orientation::Portrait));
//! let policy = SizingPolicy::Ratio { long_side_ratio: 0.5, short_side_ratio: 0.5 };
//! let dialog = DialogView::new(tree.create_view(), policy, &source);
//!
//! let mut reconciler = Reconciler::new();
//! reconciler.attach(&mut tree, &dialog, root);
//! assert_eq!(
//!     tree.resolve_frame(dialoglayout::Dialog::view(&dialog)),
//!     Ok(Rect::new(100.0, 175.0, 200.0, 350.0))
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod constraint;
pub mod dialog;
pub mod host;
pub mod orientation;
pub mod present;
pub mod reconcile;
pub mod solve;
pub mod strategy;

#[cfg(feature = "query")]
pub mod query;

// Re-exports
pub use constraint::{Attribute, Axis, Constraint, Rect, Relation, Size, ViewId, identifier};
pub use dialog::{Dialog, DialogView, OrientationSource, Sizing};
pub use host::{Placement, ViewHost, ViewTree};
pub use orientation::{Orientation, classify};
pub use present::{
    Backdrop, DialogCoordinator, HostScreen, ModalPresentation, ModalTransition, PresentError,
    PresentationStyle, Presenter, Screen, ScreenOrientation, present_dialog,
};
pub use reconcile::{Attachment, Reconciler, Reconciliation, SkipReason};
pub use solve::{LayoutError, resolve_frame, resolve_frames};
pub use strategy::SizingPolicy;
