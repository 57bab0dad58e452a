use std::cell::RefCell;
use std::rc::Rc;

use crate::signal::{Signal, SubId};

#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        // Release the borrow before running so `f` may touch clones of this handle.
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }

    pub fn is_done(&self) -> bool {
        self.0.borrow().is_none()
    }
}

/// Subscribes `f` to `sig` and returns the matching unsubscribe.
pub fn listen<T: Clone + 'static>(sig: &Signal<T>, f: impl Fn(&T) + 'static) -> Dispose {
    let id: SubId = sig.subscribe(f);
    let sig = sig.clone();
    Dispose::new(move || {
        sig.unsubscribe(id);
    })
}
