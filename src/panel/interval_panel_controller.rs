use reel_interval::*;
use reel_ui::*;

use std::sync::*;

///
/// Control panel for scrubbing an interval
///
/// Provides a slider covering the interval's timeline and the four transport
/// buttons: jump-to-start, play, stop and jump-to-end. Moving the slider
/// previews a frame without resuming playback (the interval is paused after
/// every scrub); the play button resumes from wherever the slider currently
/// is.
///
/// While the panel is attached, a hook keeps the slider tracking time changes
/// made elsewhere (including runtime-driven advancement while playing),
/// without re-firing the slider's own action. Dismissing the panel releases
/// that hook; dropping an undismissed panel does the same, so a torn-down
/// panel never leaves a dangling observer behind.
///
pub struct IntervalPanelController {
    /// The interval this panel controls
    interval: IntervalControl,

    /// Upper end of the scrub slider's range: the interval's duration rounded
    /// down to two decimal places, so the slider cannot overshoot the real
    /// duration
    slider_max: f64,

    /// The time currently shown on the scrub slider
    slider_time: Arc<Mutex<f64>>,

    /// Handle that releases the slider update hook
    update_hook: Mutex<Option<Box<dyn Releasable>>>
}

impl IntervalPanelController {
    ///
    /// Creates a control panel attached to an interval
    ///
    pub fn new(interval: &IntervalControl) -> IntervalPanelController {
        let slider_time     = Arc::new(Mutex::new(interval.time()));
        let slider_max      = (interval.duration() * 100.0).floor() / 100.0;

        // Keep the slider in step with time changes made outside the panel
        let update_time     = Arc::clone(&slider_time);
        let update_hook     = interval.when_time_set(observe_time(move |new_time| {
            *update_time.lock().unwrap() = new_time;
        }));

        // Ask the runtime to post time events while it plays this interval,
        // so the slider follows playback too
        interval.set_wants_time_callback(true);

        IntervalPanelController {
            interval:       interval.clone(),
            slider_max:     slider_max,
            slider_time:    slider_time,
            update_hook:    Mutex::new(Some(update_hook))
        }
    }

    ///
    /// Detaches this panel from its interval
    ///
    /// Called when the host destroys the panel's window; releases the slider
    /// update hook. Dismissing an already-dismissed panel is a no-op.
    ///
    pub fn dismiss(&self) {
        if let Some(mut hook) = self.update_hook.lock().unwrap().take() {
            hook.done();
        }
    }
}

impl Controller for IntervalPanelController {
    fn ui(&self) -> Control {
        let current_time = { *self.slider_time.lock().unwrap() };

        Control::container()
            .with(vec![
                Control::slider()
                    .with(self.interval.name())
                    .with(ControlAttribute::Value(PropertyValue::Float(current_time)))
                    .with(ControlAttribute::Range(PropertyValue::Float(0.0), PropertyValue::Float(self.slider_max)))
                    .with((ActionTrigger::EditValue, "ScrubTime"))
                    .with((ActionTrigger::SetValue, "ScrubTime")),

                Control::container()
                    .with(vec![
                        Control::button().with(("<<",   (ActionTrigger::Click, "JumpToStart"))),
                        Control::button().with(("Play", (ActionTrigger::Click, "Play"))),
                        Control::button().with(("Stop", (ActionTrigger::Click, "Stop"))),
                        Control::button().with((">>",   (ActionTrigger::Click, "JumpToEnd")))
                    ])
            ])
    }

    fn action(&self, action_id: &str, action_parameter: &ActionParameter) {
        match (action_id, action_parameter) {
            ("ScrubTime", ActionParameter::Value(new_value)) => {
                // Preview the frame at the slider position, halting playback
                if let Some(new_time) = new_value.to_f64() {
                    self.interval.set_time(new_time);
                    self.interval.pause();
                }
            },

            ("JumpToStart", _) => {
                self.interval.set_time(0.0);
                self.interval.pause();
            },

            ("JumpToEnd", _) => {
                let duration = self.interval.duration();

                self.interval.set_time(duration);
                self.interval.pause();
            },

            ("Play", _) => {
                // Resume from wherever the slider is, at normal rate
                let resume_time = { *self.slider_time.lock().unwrap() };

                self.interval.set_time(resume_time);
                self.interval.resume(1.0);
            },

            ("Stop", _) => {
                self.interval.pause();
            },

            _ => { }
        }
    }
}
