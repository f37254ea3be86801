use super::super::property::*;

///
/// Description of what should trigger an action
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum ActionTrigger {
    /// User clicked this item (pressed down and released while over the same item)
    Click,

    /// The value of an item is being edited and has a new intermediate value
    /// (for a slider: the user is still dragging)
    EditValue,

    /// The value of an item has been edited and should be updated
    /// (for a slider: the user let go)
    SetValue,
}

///
/// Data that can be sent alongside an action
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum ActionParameter {
    /// Action has no extra data
    None,

    /// The new value for an item
    Value(PropertyValue),
}
