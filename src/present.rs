//! Presenting dialogs over a host screen.
//!
//! [`DialogCoordinator`] owns the screen-level dialog state: the current
//! [`ScreenOrientation`], the dialogs attached to the screen's root view in
//! attach order, and the optional full-screen dismiss backdrop. The host
//! forwards size transitions and presses to it.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::constraint::{Attribute, Constraint, Size, ViewId, identifier};
use crate::dialog::{Dialog, OrientationSource};
use crate::host::{Placement, ViewHost};
use crate::orientation::Orientation;
use crate::reconcile::{Reconciler, Reconciliation, SkipReason};

/// Tag of the dismiss backdrop view.
pub const DISMISS_BACKGROUND_TAG: &str = "dialogBackgroundButton";
/// Opacity of the dismiss backdrop.
pub const DISMISS_BACKGROUND_ALPHA: f32 = 0.6;
/// Gray level of the dismiss backdrop (dark gray).
pub const DISMISS_BACKGROUND_WHITE: f32 = 1.0 / 3.0;

/// How a screen covers the one presenting it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModalPresentation {
    /// Replaces the presenting screen, which is removed once covered.
    #[default]
    FullScreen,
    /// Covers the presenting screen, which stays visible underneath.
    OverFullScreen,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModalTransition {
    #[default]
    CoverVertical,
    CrossDissolve,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PresentationStyle {
    pub presentation: ModalPresentation,
    pub transition: ModalTransition,
}

impl PresentationStyle {
    /// Transparent overlay that fades in: the presenting screen remains
    /// visible around the dialog.
    pub const DIALOG: Self = Self {
        presentation: ModalPresentation::OverFullScreen,
        transition: ModalTransition::CrossDissolve,
    };
}

/// A presentable screen of the host toolkit.
pub trait HostScreen {
    /// View every dialog on this screen is attached to.
    fn root_view(&self) -> ViewId;

    fn presentation_style(&self) -> PresentationStyle;

    fn set_presentation_style(&mut self, style: PresentationStyle);

    /// Ask the host to take the screen down.
    fn dismiss(&mut self, animated: bool);
}

/// Something that can present a screen, usually the screen currently on top.
pub trait Presenter {
    fn present(&mut self, screen: Rc<RefCell<dyn HostScreen>>, animated: bool);
}

/// Present `screen` as a dialog.
///
/// Forces [`PresentationStyle::DIALOG`] before handing the screen over, so
/// whatever style it carried is overridden.
pub fn present_dialog<P>(presenter: &mut P, screen: &Rc<RefCell<dyn HostScreen>>, animated: bool)
where
    P: Presenter + ?Sized,
{
    screen
        .borrow_mut()
        .set_presentation_style(PresentationStyle::DIALOG);
    presenter.present(Rc::clone(screen), animated);
}

/// In-memory [`HostScreen`] recording what was asked of it.
#[derive(Clone, Debug)]
pub struct Screen {
    root: ViewId,
    style: PresentationStyle,
    dismissals: Vec<bool>,
}

impl Screen {
    pub fn new(root: ViewId) -> Self {
        Self {
            root,
            style: PresentationStyle::default(),
            dismissals: Vec::new(),
        }
    }

    /// The `animated` flag of every dismiss request so far.
    pub fn dismissals(&self) -> &[bool] {
        &self.dismissals
    }
}

impl HostScreen for Screen {
    fn root_view(&self) -> ViewId {
        self.root
    }

    fn presentation_style(&self) -> PresentationStyle {
        self.style
    }

    fn set_presentation_style(&mut self, style: PresentationStyle) {
        self.style = style;
    }

    fn dismiss(&mut self, animated: bool) {
        self.dismissals.push(animated);
    }
}

/// Screen orientation, reclassified from the screen size on every transition.
#[derive(Debug, Default)]
pub struct ScreenOrientation(Cell<Orientation>);

impl ScreenOrientation {
    pub fn new(orientation: Orientation) -> Self {
        Self(Cell::new(orientation))
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(Orientation::from_size(size))
    }

    pub fn get(&self) -> Orientation {
        self.0.get()
    }

    /// Reclassify for `size`. Returns whether the orientation changed.
    pub fn set_size(&self, size: Size) -> bool {
        let next = Orientation::from_size(size);
        self.0.replace(next) != next
    }
}

impl OrientationSource for ScreenOrientation {
    fn current_orientation(&self) -> Orientation {
        self.get()
    }
}

/// The full-screen control behind every dialog that dismisses on press.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Backdrop {
    pub view: ViewId,
    pub tag: &'static str,
    /// Gray level, 0 black to 1 white.
    pub white: f32,
    pub alpha: f32,
}

/// Error from [`DialogCoordinator`] operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PresentError {
    /// The view is already attached through this coordinator.
    AlreadyAttached(ViewId),
    /// The host refused to add the view to the root.
    NotAdded(ViewId),
    /// The screen has been dropped.
    ScreenGone,
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyAttached(view) => write!(f, "{view:?} is already attached"),
            Self::NotAdded(view) => write!(f, "host did not add {view:?} to the root"),
            Self::ScreenGone => write!(f, "screen has been dropped"),
        }
    }
}

impl core::error::Error for PresentError {}

struct Entry {
    dialog: Rc<dyn Dialog>,
    reconciler: Reconciler,
}

/// Screen-level dialog coordinator.
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
/// use dialoglayout::{
///     DialogCoordinator, DialogView, HostScreen, Rect, Screen, Size, SizingPolicy, ViewHost,
///     ViewTree,
/// };
///
/// let mut tree = ViewTree::new();
/// let root = tree.create_view();
/// tree.set_bounds(root, Rect::new(0.0, 0.0, 400.0, 700.0));
/// let screen: Rc<RefCell<dyn HostScreen>> = Rc::new(RefCell::new(Screen::new(root)));
/// let mut coordinator = DialogCoordinator::new(&screen, Size::new(400.0, 700.0));
///
/// let view = tree.create_view();
/// let policy = SizingPolicy::Padding { long_side_padding: 20.0, short_side_padding: 10.0 };
/// let dialog = Rc::new(DialogView::new(view, policy, &coordinator.orientation_source()));
/// coordinator.attach(&mut tree, dialog).unwrap();
/// assert_eq!(tree.resolve_frame(view), Ok(Rect::new(10.0, 20.0, 380.0, 660.0)));
///
/// tree.set_size(root, Size::new(700.0, 400.0));
/// coordinator.view_will_transition(&mut tree, Size::new(700.0, 400.0));
/// assert_eq!(tree.resolve_frame(view), Ok(Rect::new(20.0, 10.0, 660.0, 380.0)));
/// ```
pub struct DialogCoordinator {
    screen: Weak<RefCell<dyn HostScreen>>,
    orientation: Rc<ScreenOrientation>,
    dialogs: Vec<Entry>,
    backdrop: Option<Backdrop>,
}

impl DialogCoordinator {
    /// Coordinate dialogs on `screen`, currently `size` large. The screen is
    /// not kept alive.
    pub fn new(screen: &Rc<RefCell<dyn HostScreen>>, size: Size) -> Self {
        Self {
            screen: Rc::downgrade(screen),
            orientation: Rc::new(ScreenOrientation::from_size(size)),
            dialogs: Vec::new(),
            backdrop: None,
        }
    }

    /// Orientation source to build this screen's dialogs with.
    pub fn orientation_source(&self) -> Rc<dyn OrientationSource> {
        self.orientation.clone()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation.get()
    }

    /// Root view of the screen, `None` once it is gone.
    pub fn root_view(&self) -> Option<ViewId> {
        self.screen.upgrade().map(|s| s.borrow().root_view())
    }

    /// Number of dialogs in the registry, including any not yet pruned.
    pub fn dialog_count(&self) -> usize {
        self.dialogs.len()
    }

    /// Add `dialog` to the root view and keep it in step with orientation.
    pub fn attach<H>(&mut self, host: &mut H, dialog: Rc<dyn Dialog>) -> Result<Reconciliation, PresentError>
    where
        H: ViewHost + ?Sized,
    {
        let root = self.root_view().ok_or(PresentError::ScreenGone)?;
        self.prune(&*host);
        let view = dialog.view();
        if self.dialogs.iter().any(|e| e.dialog.view() == view) {
            return Err(PresentError::AlreadyAttached(view));
        }
        let mut reconciler = Reconciler::new();
        let outcome = reconciler.attach(host, &*dialog, root);
        if outcome == Reconciliation::Skipped(SkipReason::Detached) {
            return Err(PresentError::NotAdded(view));
        }
        self.dialogs.push(Entry { dialog, reconciler });
        Ok(outcome)
    }

    /// Put the dismiss backdrop behind every subview of the root, pinned to
    /// its edges.
    ///
    /// Returns the installed backdrop if there already is one.
    pub fn install_dismiss_affordance<H>(&mut self, host: &mut H) -> Result<Backdrop, PresentError>
    where
        H: ViewHost + ?Sized,
    {
        let root = self.root_view().ok_or(PresentError::ScreenGone)?;
        if let Some(backdrop) = self.backdrop
            && host.parent(backdrop.view) == Some(root)
        {
            return Ok(backdrop);
        }

        let view = host.create_view();
        host.add_subview(root, view, Placement::Back);
        host.apply_constraints(root, &fit_constraints(root, view), &[]);
        let backdrop = Backdrop {
            view,
            tag: DISMISS_BACKGROUND_TAG,
            white: DISMISS_BACKGROUND_WHITE,
            alpha: DISMISS_BACKGROUND_ALPHA,
        };
        log::debug!("installed dismiss backdrop {view:?} in {root:?}");
        self.backdrop = Some(backdrop);
        Ok(backdrop)
    }

    pub fn dismiss_affordance(&self) -> Option<&Backdrop> {
        self.backdrop.as_ref()
    }

    /// Route a press on `view`. Only the backdrop is handled: it dismisses
    /// the screen, animated. Returns `false` once the screen is gone.
    pub fn handle_press(&mut self, view: ViewId) -> bool {
        if self.backdrop.is_some_and(|b| b.view == view) && self.screen.strong_count() > 0 {
            self.dismiss(true);
            true
        } else {
            false
        }
    }

    /// Ask the screen to dismiss itself. No-op once it is gone.
    pub fn dismiss(&mut self, animated: bool) {
        match self.screen.upgrade() {
            Some(screen) => screen.borrow_mut().dismiss(animated),
            None => log::warn!("dismiss requested after the screen was dropped"),
        }
    }

    /// The screen is about to become `size` large.
    ///
    /// Reclassifies the orientation and, when it changed, notifies every
    /// attached dialog in attach order. Dialogs whose view left the root are
    /// dropped first. Returns each notified view with its outcome.
    pub fn view_will_transition<H>(&mut self, host: &mut H, size: Size) -> Vec<(ViewId, Reconciliation)>
    where
        H: ViewHost + ?Sized,
    {
        if self.screen.strong_count() == 0 {
            log::debug!("transition to {size:?} after the screen was dropped");
            return Vec::new();
        }
        self.prune(&*host);
        if !self.orientation.set_size(size) {
            return Vec::new();
        }
        let orientation = self.orientation.get();
        log::debug!(
            "orientation now {orientation:?}, notifying {} dialogs",
            self.dialogs.len()
        );
        self.dialogs
            .iter_mut()
            .map(|e| {
                let outcome = e.reconciler.orientation_changed(&mut *host, &*e.dialog, orientation);
                (e.dialog.view(), outcome)
            })
            .collect()
    }

    fn prune<H>(&mut self, host: &H)
    where
        H: ViewHost + ?Sized,
    {
        let before = self.dialogs.len();
        self.dialogs
            .retain_mut(|e| e.reconciler.is_live(host, &*e.dialog));
        if self.dialogs.len() != before {
            log::trace!("pruned {} detached dialogs", before - self.dialogs.len());
        }
    }
}

impl fmt::Debug for DialogCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogCoordinator")
            .field("orientation", &self.orientation.get())
            .field("dialogs", &self.dialogs.len())
            .field("backdrop", &self.backdrop)
            .field("screen_alive", &(self.screen.strong_count() > 0))
            .finish()
    }
}

/// Pin all four edges of `child` to `parent`.
fn fit_constraints(parent: ViewId, child: ViewId) -> [Constraint; 4] {
    [
        (Attribute::Top, identifier::BACKGROUND_TOP),
        (Attribute::Bottom, identifier::BACKGROUND_BOTTOM),
        (Attribute::Left, identifier::BACKGROUND_LEFT),
        (Attribute::Right, identifier::BACKGROUND_RIGHT),
    ]
    .map(|(edge, id)| Constraint::new(child, edge, parent, edge).identifier(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Rect;
    use crate::dialog::{DialogView, Sizing};
    use crate::host::ViewTree;
    use crate::strategy::SizingPolicy;

    struct Fixture {
        tree: ViewTree,
        root: ViewId,
        screen: Rc<RefCell<Screen>>,
        coordinator: DialogCoordinator,
    }

    fn fixture(size: Size) -> Fixture {
        let mut tree = ViewTree::new();
        let root = tree.create_view();
        tree.set_size(root, size);
        let screen = Rc::new(RefCell::new(Screen::new(root)));
        let dyn_screen: Rc<RefCell<dyn HostScreen>> = screen.clone();
        let coordinator = DialogCoordinator::new(&dyn_screen, size);
        Fixture {
            tree,
            root,
            screen,
            coordinator,
        }
    }

    const PORTRAIT: Size = Size {
        width: 400.0,
        height: 700.0,
    };
    const LANDSCAPE: Size = Size {
        width: 700.0,
        height: 400.0,
    };

    const PADDING: SizingPolicy = SizingPolicy::Padding {
        long_side_padding: 20.0,
        short_side_padding: 10.0,
    };

    impl Fixture {
        fn dialog(&mut self, sizing: impl Into<Sizing>) -> Rc<DialogView> {
            let view = self.tree.create_view();
            Rc::new(DialogView::new(view, sizing, &self.coordinator.orientation_source()))
        }

        fn rotate_to(&mut self, size: Size) -> Vec<(ViewId, Reconciliation)> {
            self.tree.set_size(self.root, size);
            self.coordinator.view_will_transition(&mut self.tree, size)
        }
    }

    #[test]
    fn dialog_style_overrides_existing() {
        struct Recorder(Vec<bool>);
        impl Presenter for Recorder {
            fn present(&mut self, screen: Rc<RefCell<dyn HostScreen>>, animated: bool) {
                assert_eq!(screen.borrow().presentation_style(), PresentationStyle::DIALOG);
                self.0.push(animated);
            }
        }

        let screen: Rc<RefCell<dyn HostScreen>> = Rc::new(RefCell::new(Screen::new(ViewId(1))));
        screen.borrow_mut().set_presentation_style(PresentationStyle {
            presentation: ModalPresentation::FullScreen,
            transition: ModalTransition::CoverVertical,
        });
        let mut presenter = Recorder(Vec::new());
        present_dialog(&mut presenter, &screen, true);
        assert_eq!(presenter.0, [true]);
        assert_eq!(
            screen.borrow().presentation_style(),
            PresentationStyle {
                presentation: ModalPresentation::OverFullScreen,
                transition: ModalTransition::CrossDissolve,
            }
        );
    }

    #[test]
    fn screen_orientation_reports_changes() {
        let o = ScreenOrientation::from_size(PORTRAIT);
        assert_eq!(o.get(), Orientation::Portrait);
        assert!(!o.set_size(Size::new(300.0, 500.0)));
        assert!(o.set_size(LANDSCAPE));
        assert_eq!(o.current_orientation(), Orientation::Landscape);
    }

    #[test]
    fn backdrop_sits_behind_and_fills_root() {
        let mut fx = fixture(PORTRAIT);
        let dialog = fx.dialog(PADDING);
        fx.coordinator.attach(&mut fx.tree, dialog.clone()).unwrap();
        let backdrop = fx.coordinator.install_dismiss_affordance(&mut fx.tree).unwrap();

        assert_eq!(backdrop.tag, "dialogBackgroundButton");
        assert_eq!(backdrop.alpha, 0.6);
        assert_eq!(fx.tree.children(fx.root), &[backdrop.view, dialog.view()]);
        assert_eq!(
            fx.tree.resolve_frame(backdrop.view),
            Ok(Rect::new(0.0, 0.0, 400.0, 700.0))
        );
        let ids: Vec<_> = fx
            .tree
            .constraints(fx.root)
            .iter()
            .filter(|c| c.involves(backdrop.view))
            .map(|c| c.identifier)
            .collect();
        assert_eq!(
            ids,
            [
                "dialogBackgroundTop",
                "dialogBackgroundBottom",
                "dialogBackgroundLeft",
                "dialogBackgroundRight"
            ]
        );
    }

    #[test]
    fn backdrop_installs_once() {
        let mut fx = fixture(PORTRAIT);
        let a = fx.coordinator.install_dismiss_affordance(&mut fx.tree).unwrap();
        let b = fx.coordinator.install_dismiss_affordance(&mut fx.tree).unwrap();
        assert_eq!(a, b);
        assert_eq!(fx.tree.children(fx.root).len(), 1);
        assert_eq!(fx.tree.constraints(fx.root).len(), 4);
    }

    #[test]
    fn backdrop_press_dismisses_animated() {
        let mut fx = fixture(PORTRAIT);
        let dialog = fx.dialog(PADDING);
        fx.coordinator.attach(&mut fx.tree, dialog.clone()).unwrap();
        let backdrop = fx.coordinator.install_dismiss_affordance(&mut fx.tree).unwrap();

        assert!(!fx.coordinator.handle_press(dialog.view()));
        assert!(fx.screen.borrow().dismissals().is_empty());
        assert!(fx.coordinator.handle_press(backdrop.view));
        assert_eq!(fx.screen.borrow().dismissals(), &[true]);
    }

    #[test]
    fn press_without_backdrop_is_ignored() {
        let mut fx = fixture(PORTRAIT);
        assert!(!fx.coordinator.handle_press(fx.root));
        assert!(fx.screen.borrow().dismissals().is_empty());
    }

    #[test]
    fn transition_notifies_in_attach_order() {
        let mut fx = fixture(PORTRAIT);
        let a = fx.dialog(PADDING);
        let b = fx.dialog(Sizing::new(PADDING).react_to_orientation_change(false));
        let c = fx.dialog(SizingPolicy::Constant {
            long_side_constant: 100.0,
        });
        for d in [&a, &b, &c] {
            fx.coordinator.attach(&mut fx.tree, d.clone()).unwrap();
        }

        let outcomes = fx.rotate_to(LANDSCAPE);
        assert_eq!(fx.coordinator.orientation(), Orientation::Landscape);
        assert_eq!(
            outcomes,
            [
                (a.view(), Reconciliation::Applied { removed: 4, added: 4 }),
                (b.view(), Reconciliation::Skipped(SkipReason::Disabled)),
                (c.view(), Reconciliation::Applied { removed: 1, added: 1 }),
            ]
        );
        assert_eq!(fx.tree.resolve_frame(a.view()), Ok(Rect::new(20.0, 10.0, 660.0, 380.0)));
    }

    #[test]
    fn same_orientation_transition_does_nothing() {
        let mut fx = fixture(PORTRAIT);
        let a = fx.dialog(PADDING);
        fx.coordinator.attach(&mut fx.tree, a).unwrap();
        let batches = fx.tree.batch_count();
        assert!(fx.rotate_to(Size::new(390.0, 844.0)).is_empty());
        assert_eq!(fx.tree.batch_count(), batches);
    }

    #[test]
    fn removed_dialogs_are_pruned() {
        let mut fx = fixture(PORTRAIT);
        let a = fx.dialog(PADDING);
        let b = fx.dialog(PADDING);
        fx.coordinator.attach(&mut fx.tree, a.clone()).unwrap();
        fx.coordinator.attach(&mut fx.tree, b.clone()).unwrap();
        fx.tree.remove_from_parent(a.view());

        let outcomes = fx.rotate_to(LANDSCAPE);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].0, b.view());
        assert_eq!(fx.coordinator.dialog_count(), 1);
    }

    #[test]
    fn unknown_view_is_not_registered() {
        let mut fx = fixture(PORTRAIT);
        let ghost: Rc<dyn Dialog> = Rc::new(DialogView::new(
            ViewId(999),
            PADDING,
            &fx.coordinator.orientation_source(),
        ));
        assert_eq!(
            fx.coordinator.attach(&mut fx.tree, ghost),
            Err(PresentError::NotAdded(ViewId(999)))
        );
        assert_eq!(fx.coordinator.dialog_count(), 0);
        assert!(fx.tree.constraints(fx.root).is_empty());

        fx.rotate_to(LANDSCAPE);
        assert!(fx.tree.constraints(fx.root).is_empty());
    }

    #[test]
    fn root_cannot_be_its_own_dialog() {
        let mut fx = fixture(PORTRAIT);
        let on_root: Rc<dyn Dialog> = Rc::new(DialogView::new(
            fx.root,
            PADDING,
            &fx.coordinator.orientation_source(),
        ));
        assert_eq!(
            fx.coordinator.attach(&mut fx.tree, on_root),
            Err(PresentError::NotAdded(fx.root))
        );
        assert_eq!(fx.coordinator.dialog_count(), 0);
        assert!(fx.tree.constraints(fx.root).is_empty());
    }

    #[test]
    fn attaching_twice_is_rejected() {
        let mut fx = fixture(PORTRAIT);
        let a = fx.dialog(PADDING);
        fx.coordinator.attach(&mut fx.tree, a.clone()).unwrap();
        assert_eq!(
            fx.coordinator.attach(&mut fx.tree, a.clone()),
            Err(PresentError::AlreadyAttached(a.view()))
        );
        assert_eq!(fx.tree.constraints(fx.root).len(), 4);
    }

    #[test]
    fn reattach_after_removal_is_allowed() {
        let mut fx = fixture(PORTRAIT);
        let a = fx.dialog(PADDING);
        fx.coordinator.attach(&mut fx.tree, a.clone()).unwrap();
        fx.tree.remove_from_parent(a.view());
        assert!(fx.coordinator.attach(&mut fx.tree, a.clone()).is_ok());
        assert_eq!(fx.coordinator.dialog_count(), 1);
    }

    #[test]
    fn dropped_screen_turns_everything_into_noops() {
        let mut fx = fixture(PORTRAIT);
        let a = fx.dialog(PADDING);
        fx.coordinator.attach(&mut fx.tree, a.clone()).unwrap();
        let backdrop = fx.coordinator.install_dismiss_affordance(&mut fx.tree).unwrap();
        drop(fx.screen);

        assert_eq!(fx.coordinator.root_view(), None);
        assert!(!fx.coordinator.handle_press(backdrop.view));
        fx.coordinator.dismiss(false);
        let batches = fx.tree.batch_count();
        fx.tree.set_size(fx.root, LANDSCAPE);
        assert!(fx.coordinator.view_will_transition(&mut fx.tree, LANDSCAPE).is_empty());
        assert_eq!(fx.tree.batch_count(), batches);
        let late = fx_dialog(&mut fx.tree, &fx.coordinator);
        assert_eq!(
            fx.coordinator.attach(&mut fx.tree, late),
            Err(PresentError::ScreenGone)
        );
        assert_eq!(
            fx.coordinator.install_dismiss_affordance(&mut fx.tree),
            Err(PresentError::ScreenGone)
        );
    }

    fn fx_dialog(tree: &mut ViewTree, coordinator: &DialogCoordinator) -> Rc<dyn Dialog> {
        let view = tree.create_view();
        Rc::new(DialogView::new(view, PADDING, &coordinator.orientation_source()))
    }

    #[test]
    fn coordinator_does_not_own_the_screen() {
        let fx = fixture(PORTRAIT);
        assert_eq!(Rc::strong_count(&fx.screen), 1);
    }

    #[test]
    fn dialogs_do_not_own_the_orientation() {
        let mut fx = fixture(PORTRAIT);
        let a = fx.dialog(PADDING);
        assert_eq!(Rc::strong_count(&fx.coordinator.orientation), 1);
        assert!(a.orientation_source().is_some());
    }
}
