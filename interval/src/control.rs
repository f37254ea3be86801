use super::diag::*;
use super::hooks::*;
use super::traits::*;

use std::sync::*;
use std::sync::atomic::{AtomicBool, Ordering};

///
/// Decorates an interval with a time-set notification hook list
///
/// The underlying interval is owned by an external runtime scheduler; this
/// object proxies mutations through to it and notifies the registered
/// observers after every direct time-set operation. Cloning an
/// `IntervalControl` produces another handle onto the same interval and the
/// same hook list.
///
#[derive(Clone)]
pub struct IntervalControl {
    /// The interval being controlled
    interval: Arc<Mutex<dyn Interval>>,

    /// Hooks to invoke after the interval's time is set, in registration order
    hooks: Arc<Mutex<Vec<RegisteredHook>>>,

    /// Set when the external runtime should post time events while it advances
    /// this interval itself
    wants_time_callback: Arc<AtomicBool>,

    /// Category used for deprecation warnings
    diag: Diagnostics
}

impl IntervalControl {
    ///
    /// Creates time controls for an interval, using the default 'interval'
    /// diagnostic category
    ///
    pub fn new<TInterval: 'static+Interval>(interval: TInterval) -> IntervalControl {
        Self::with_diagnostics(interval, Diagnostics::new("interval"))
    }

    ///
    /// Creates time controls for an interval with a caller-supplied
    /// diagnostic category
    ///
    pub fn with_diagnostics<TInterval: 'static+Interval>(interval: TInterval, diag: Diagnostics) -> IntervalControl {
        IntervalControl {
            interval:               Arc::new(Mutex::new(interval)),
            hooks:                  Arc::new(Mutex::new(vec![])),
            wants_time_callback:    Arc::new(AtomicBool::new(false)),
            diag:                   diag
        }
    }

    ///
    /// Sets the interval's current time, then notifies the registered hooks
    ///
    /// The new time is passed straight to the underlying primitive: no
    /// clamping or range validation happens here.
    ///
    pub fn set_time(&self, time: f64) {
        {
            self.interval.lock().unwrap().raw_set_time(time);
        }

        self.post_time_event();
    }

    ///
    /// Notifies the registered hooks of the interval's current time
    ///
    /// `set_time` calls this after every direct time-set. The external
    /// runtime should also call it after advancing the interval itself,
    /// whenever `wants_time_callback()` is set (this is how a playing
    /// interval keeps a scrubber in sync).
    ///
    pub fn post_time_event(&self) {
        let new_time = {
            self.interval.lock().unwrap().time()
        };

        // Dispatch to a snapshot of the hook list, with the list lock
        // released: hooks registered during the pass only see later events,
        // and hooks released during the pass are skipped if they have not
        // run yet
        let hooks: Vec<RegisteredHook> = {
            self.hooks.lock().unwrap().iter().cloned().collect()
        };

        for hook in hooks {
            hook.dispatch(new_time);
        }
    }

    ///
    /// Registers a hook to be invoked after every time-set operation, in
    /// registration order
    ///
    /// The returned handle unregisters the hook when `done()` is called on it
    /// or when it is dropped (call `keep_alive()` to opt out of
    /// release-on-drop). No duplicate detection is performed.
    ///
    pub fn when_time_set(&self, observer: Arc<dyn TimeObserver>) -> Box<dyn Releasable> {
        let (hook, handle) = RegisteredHook::new(observer);

        let mut hooks = self.hooks.lock().unwrap();
        hooks.retain(|existing| existing.is_registered());
        hooks.push(hook);

        Box::new(handle)
    }

    /// The number of currently registered hooks
    pub fn hook_count(&self) -> usize {
        self.hooks.lock().unwrap().iter()
            .filter(|hook| hook.is_registered())
            .count()
    }

    ///
    /// Sets whether the external runtime should call `post_time_event` as it
    /// advances this interval
    ///
    pub fn set_wants_time_callback(&self, wants_callback: bool) {
        self.wants_time_callback.store(wants_callback, Ordering::Relaxed);
    }

    /// True if the external runtime should post time events for this interval
    pub fn wants_time_callback(&self) -> bool {
        self.wants_time_callback.load(Ordering::Relaxed)
    }

    ///
    /// Begins playback from `start_time`, running until `end_time` at the
    /// given playback rate (`PLAY_TO_END` plays through to the end)
    ///
    pub fn start(&self, start_time: f64, end_time: f64, playback_rate: f64) {
        self.interval.lock().unwrap().start(start_time, end_time, playback_rate);
    }

    /// Stops playback and moves the interval to its final state
    pub fn finish(&self) {
        self.interval.lock().unwrap().finish();
    }

    /// Halts time advancement without changing the current time
    pub fn pause(&self) {
        self.interval.lock().unwrap().pause();
    }

    /// Resumes time advancement at the given playback rate
    pub fn resume(&self, playback_rate: f64) {
        self.interval.lock().unwrap().resume(playback_rate);
    }

    /// The current time offset into the interval's timeline
    pub fn time(&self) -> f64 {
        self.interval.lock().unwrap().time()
    }

    /// The total length of the interval
    pub fn duration(&self) -> f64 {
        self.interval.lock().unwrap().duration()
    }

    /// The name of the interval
    pub fn name(&self) -> String {
        self.interval.lock().unwrap().name()
    }

    ///
    /// Begins playback for `duration` seconds starting at `start_offset`
    /// (`None` or a zero duration plays through to the end)
    ///
    #[deprecated(note = "use start() instead")]
    pub fn play(&self, start_offset: f64, duration: Option<f64>, playback_rate: f64) {
        self.diag.warning("using deprecated play() interface");

        match duration {
            Some(length) if length != 0.0   => self.start(start_offset, start_offset + length, playback_rate),
            _                               => self.start(start_offset, PLAY_TO_END, playback_rate)
        }
    }

    /// Stops playback
    #[deprecated(note = "use finish() instead")]
    pub fn stop(&self) {
        self.diag.warning("using deprecated stop() interface");

        self.finish();
    }

    /// Moves the interval to its final time
    #[deprecated(note = "use finish() instead")]
    pub fn set_final_time(&self) {
        self.diag.warning("using deprecated set_final_time() interface");

        self.finish();
    }
}
