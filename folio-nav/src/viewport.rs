use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;

/// Width in logical pixels separating the mobile and desktop regimes.
///
/// Widths strictly below the breakpoint are mobile.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Layout regime derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Mobile,
    Desktop,
}

impl SizeClass {
    /// Classify a viewport width against [`MOBILE_BREAKPOINT`].
    pub fn from_width(width: f32) -> Self {
        if width < MOBILE_BREAKPOINT {
            SizeClass::Mobile
        } else {
            SizeClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == SizeClass::Mobile
    }
}

/// Callback invoked with the new size class after a breakpoint crossing.
pub type Listener = Box<dyn FnMut(SizeClass)>;

/// Handle identifying a registered [`Listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "viewport-listener-{}", self.0)
    }
}

/// Source of size-class change notifications.
pub trait ViewportObserver {
    /// Current size class.
    fn size_class(&self) -> SizeClass;

    /// Register a listener called on every size-class flip.
    fn subscribe(&self, listener: Listener) -> ListenerId;

    /// Deregister a listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: ListenerId);
}

/// Viewport driven by the host window width.
///
/// Listeners may subscribe or unsubscribe from inside a notification.
/// Every flip caused during a notification is queued and delivered in its
/// own round after the current one, so listeners see each flip in order.
pub struct WindowViewport {
    width: Cell<f32>,
    size_class: Cell<SizeClass>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    removed: RefCell<Vec<ListenerId>>,
    pending: RefCell<VecDeque<SizeClass>>,
    dispatching: Cell<bool>,
}

impl WindowViewport {
    /// Create a viewport for the given initial width.
    pub fn new(width: f32) -> Self {
        Self {
            width: Cell::new(width),
            size_class: Cell::new(SizeClass::from_width(width)),
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
            removed: RefCell::new(Vec::new()),
            pending: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
        }
    }

    /// Last observed width.
    pub fn width(&self) -> f32 {
        self.width.get()
    }

    /// Number of registered listeners outside of a notification round.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Record a new width and notify listeners if the size class flipped.
    ///
    /// Returns `true` when the size class changed.
    pub fn set_width(&self, width: f32) -> bool {
        self.width.set(width);

        let next = SizeClass::from_width(width);
        let previous = self.size_class.replace(next);
        if previous == next {
            return false;
        }

        log::debug!(
            "viewport size class {previous:?} -> {next:?} at {width}"
        );
        self.pending.borrow_mut().push_back(next);

        if !self.dispatching.get() {
            self.dispatch();
        }
        true
    }

    fn dispatch(&self) {
        let _dispatch = DispatchGuard::enter(self);

        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(size_class) = next else {
                break;
            };
            self.notify(size_class);
        }
    }

    fn notify(&self, size_class: SizeClass) {
        let mut round = Round {
            viewport: self,
            active: std::mem::take(&mut *self.listeners.borrow_mut()),
        };

        for (id, listener) in round.active.iter_mut() {
            if self.removed.borrow().contains(id) {
                continue;
            }
            listener(size_class);
        }
    }
}

/// Marks a dispatch in progress and clears it on every exit path.
struct DispatchGuard<'a> {
    viewport: &'a WindowViewport,
}

impl<'a> DispatchGuard<'a> {
    fn enter(viewport: &'a WindowViewport) -> Self {
        viewport.dispatching.set(true);
        Self { viewport }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        // Left over only when a listener panicked mid-dispatch.
        self.viewport.pending.borrow_mut().clear();
        self.viewport.dispatching.set(false);
    }
}

/// Listeners taken out of the registry for one notification round.
///
/// Dropping the round puts them back, minus the ones unsubscribed during
/// the round, ahead of listeners subscribed during it.
struct Round<'a> {
    viewport: &'a WindowViewport,
    active: Vec<(ListenerId, Listener)>,
}

impl Drop for Round<'_> {
    fn drop(&mut self) {
        let removed =
            std::mem::take(&mut *self.viewport.removed.borrow_mut());
        let mut active = std::mem::take(&mut self.active);
        active.retain(|(id, _)| !removed.contains(id));

        let mut listeners = self.viewport.listeners.borrow_mut();
        let added = std::mem::replace(&mut *listeners, active);
        listeners.extend(added);
    }
}

impl ViewportObserver for WindowViewport {
    fn size_class(&self) -> SizeClass {
        self.size_class.get()
    }

    fn subscribe(&self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);

        if listeners.len() == before && self.dispatching.get() {
            self.removed.borrow_mut().push(id);
        }
    }
}

impl fmt::Debug for WindowViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowViewport")
            .field("width", &self.width.get())
            .field("size_class", &self.size_class.get())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}
