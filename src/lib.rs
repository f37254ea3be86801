//!
//! # Reel interval controls
//!
//! Binds a scrubbing control panel onto an animation interval: a slider for
//! previewing any frame on the interval's timeline plus transport buttons for
//! jumping to either end, resuming playback and pausing. The panel is
//! described with `reel_ui` controls, so any widget toolkit that can render
//! that description and feed actions back can host it.
//!

pub mod panel;

pub use self::panel::*;
