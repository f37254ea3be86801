//!
//! # Interval time control
//!
//! An *interval* is a time-parameterised animation or action unit with a
//! current time, a duration and a playback rate, owned and advanced by an
//! external runtime scheduler. This library decorates such an interval with
//! a notification hook list: every direct time-set operation (and every time
//! event posted by the runtime) invokes the registered observers in
//! registration order with the new time.
//!
//! A hook is registered with `when_time_set`, which returns a handle that
//! unregisters the hook when `done()` is called on it or when it is dropped
//! (call `keep_alive()` to opt out of release-on-drop).
//!
//! The deprecated `play`/`stop`/`set_final_time` entry points are kept for
//! older call sites: they emit a warning through the interval's diagnostic
//! channel and forward to the modern transport primitives.
//!

mod traits;
mod hooks;
mod control;
mod diag;

pub use self::traits::*;
pub use self::hooks::*;
pub use self::control::*;
pub use self::diag::*;
