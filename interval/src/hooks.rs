use super::traits::*;

use std::sync::*;

/// Cell shared between a hook list entry and the handle that releases it.
/// `None` once the hook has been released.
type HookCell = Arc<Mutex<Option<Arc<dyn TimeObserver>>>>;

///
/// Wraps a function so it can be registered as a time observer
///
struct TimeObserverFn<TFn> {
    callback: Mutex<TFn>
}

impl<TFn> TimeObserver for TimeObserverFn<TFn>
where TFn: Send+FnMut(f64) -> () {
    fn time_set(&self, new_time: f64) {
        let mut on_time_set = self.callback.lock().unwrap();

        (&mut *on_time_set)(new_time)
    }
}

///
/// Creates a time observer from a function
///
pub fn observe_time<TFn>(callback: TFn) -> Arc<dyn TimeObserver>
where TFn: 'static+Send+FnMut(f64) -> () {
    Arc::new(TimeObserverFn { callback: Mutex::new(callback) })
}

///
/// An entry in an interval's hook list
///
#[derive(Clone)]
pub (crate) struct RegisteredHook {
    observer: HookCell
}

impl RegisteredHook {
    ///
    /// Registers an observer, returning the hook list entry and the handle
    /// that will unregister it
    ///
    pub (crate) fn new(observer: Arc<dyn TimeObserver>) -> (RegisteredHook, HookHandle) {
        let cell    = Arc::new(Mutex::new(Some(observer)));
        let hook    = RegisteredHook { observer: Arc::clone(&cell) };
        let handle  = HookHandle { observer: cell, keep_alive: false };

        (hook, handle)
    }

    /// True while this hook has not been released
    pub (crate) fn is_registered(&self) -> bool {
        self.observer.lock().unwrap().is_some()
    }

    ///
    /// Invokes this hook if it is still registered
    ///
    /// The cell lock is dropped before the callback runs, so the hook is free
    /// to call back into the interval (including releasing itself).
    ///
    pub (crate) fn dispatch(&self, new_time: f64) {
        let observer = self.observer.lock().unwrap().clone();

        if let Some(observer) = observer {
            observer.time_set(new_time);
        }
    }
}

///
/// Handle returned when a hook is registered with an interval
///
/// The hook stays registered until `done()` is called or the handle is
/// dropped without `keep_alive()` having been called.
///
pub (crate) struct HookHandle {
    observer:   HookCell,
    keep_alive: bool
}

impl Releasable for HookHandle {
    fn keep_alive(&mut self) {
        self.keep_alive = true;
    }

    fn done(&mut self) {
        self.observer.lock().unwrap().take();
    }
}

impl Drop for HookHandle {
    fn drop(&mut self) {
        if !self.keep_alive {
            self.done();
        }
    }
}
