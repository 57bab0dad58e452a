//! Drag tracking for the hue thumb.
//!
//! A drag is a scoped session: pointer-down opens a [`Scope`] and subscribes to the pointer
//! bus; the subscription's unsubscribe is the scope's disposer. Pointer-up, cancel, leave,
//! an explicit [`DragTracker::end`], or dropping the tracker all dispose the scope, so no
//! listener outlives its drag.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tinct_core::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

pub struct DragTracker {
    state: Rc<Cell<DragState>>,
    session: Rc<RefCell<Option<Scope>>>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self {
            state: Rc::new(Cell::new(DragState::Idle)),
            session: Rc::new(RefCell::new(None)),
        }
    }

    pub fn state(&self) -> DragState {
        self.state.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.get() == DragState::Dragging
    }

    /// Idle -> Dragging. Every subsequent move on `bus` calls `on_move` with the pointer
    /// position until an event ends the interaction. A session already in progress is
    /// ended first.
    pub fn begin(&self, bus: &Signal<PointerEvent>, on_move: impl Fn(Vec2) + 'static) {
        self.end();

        let scope = Scope::new();
        // Weak: the bus must not keep the session alive.
        let session = Rc::downgrade(&self.session);
        let listener = listen(bus, move |ev: &PointerEvent| {
            if ev.ends_interaction() {
                log::trace!("drag end via {:?}", ev.event);
                if let Some(session) = session.upgrade() {
                    end_session(&session);
                }
            } else if ev.event == PointerEventKind::Move {
                log::trace!("drag move to {:?}", ev.position);
                on_move(ev.position);
            }
        });
        scope.add_dispose(listener);

        let state = self.state.clone();
        scope.add_disposer(move || state.set(DragState::Idle));

        self.state.set(DragState::Dragging);
        *self.session.borrow_mut() = Some(scope);
        log::debug!("drag session started");
    }

    /// Dragging -> Idle. No-op when idle.
    pub fn end(&self) {
        end_session(&self.session);
    }
}

fn end_session(session: &RefCell<Option<Scope>>) {
    // Take first so disposers never run under the borrow.
    let scope = session.borrow_mut().take();
    if let Some(scope) = scope {
        scope.dispose();
        log::debug!("drag session ended");
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}
