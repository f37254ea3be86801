use super::control::*;

use std::sync::*;

///
/// Controllers represent a portion of the UI and provide a hub for receiving
/// events related to it
///
/// The description returned by `ui()` is rebuilt on each query, so a host
/// should re-request it after delivering actions (or after the model it
/// reflects changes some other way). Subcontrollers are addressed by string
/// IDs, which is also how actions name the event that occurred.
///
pub trait Controller : Send+Sync {
    /// Retrieves a Control representing the current UI for this controller
    fn ui(&self) -> Control;

    /// Delivers an action that occurred in this controller's portion of the UI
    fn action(&self, _action_id: &str, _action_parameter: &ActionParameter) {
    }

    /// Attempts to retrieve a sub-controller of this controller
    fn get_subcontroller(&self, _id: &str) -> Option<Arc<dyn Controller>> {
        None
    }
}
