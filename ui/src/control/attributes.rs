use super::control::*;
use super::actions::*;

use super::super::property::*;

///
/// Attribute attached to a control
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum ControlAttribute {
    /// The text for this control
    Text(PropertyValue),

    /// The value of this control (when it is not being edited)
    Value(PropertyValue),

    /// The range of values that this control can be set to
    Range(PropertyValue, PropertyValue),

    /// The unique ID for this control
    Id(String),

    /// Subcomponents of this control
    SubComponents(Vec<Control>),

    /// Specifies the controller that manages the subcomponents of this control
    Controller(String),

    /// When the specified action occurs for this item, send the event
    /// denoted by the string to the controller
    Action(ActionTrigger, String),
}

impl ControlAttribute {
    ///
    /// The text represented by this attribute
    ///
    pub fn text<'a>(&'a self) -> Option<&'a PropertyValue> {
        match self {
            ControlAttribute::Text(text)    => Some(text),
            _                               => None
        }
    }

    ///
    /// The value represented by this attribute
    ///
    pub fn value<'a>(&'a self) -> Option<&'a PropertyValue> {
        match self {
            ControlAttribute::Value(value)  => Some(value),
            _                               => None
        }
    }

    ///
    /// The value range represented by this attribute
    ///
    pub fn range<'a>(&'a self) -> Option<(&'a PropertyValue, &'a PropertyValue)> {
        match self {
            ControlAttribute::Range(min, max)   => Some((min, max)),
            _                                   => None
        }
    }

    ///
    /// The ID represented by this attribute
    ///
    pub fn id<'a>(&'a self) -> Option<&'a str> {
        match self {
            ControlAttribute::Id(id)    => Some(&*id),
            _                           => None
        }
    }

    ///
    /// The subcomponents represented by this attribute
    ///
    pub fn subcomponents<'a>(&'a self) -> Option<&'a Vec<Control>> {
        match self {
            ControlAttribute::SubComponents(components) => Some(components),
            _                                           => None
        }
    }

    ///
    /// The controller name represented by this attribute
    ///
    pub fn controller<'a>(&'a self) -> Option<&'a str> {
        match self {
            ControlAttribute::Controller(name)  => Some(&*name),
            _                                   => None
        }
    }

    ///
    /// The action wiring represented by this attribute
    ///
    pub fn action<'a>(&'a self) -> Option<(&'a ActionTrigger, &'a str)> {
        match self {
            ControlAttribute::Action(trigger, action_id)    => Some((trigger, &*action_id)),
            _                                               => None
        }
    }
}
