use super::types::*;
use super::actions::*;
use super::modifier::*;
use super::attributes::*;

use super::super::property::*;

use super::types::ControlType::*;

///
/// Represents a control
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Control {
    /// Attributes for this control
    attributes: Vec<ControlAttribute>,

    /// Type of this control
    control_type: ControlType
}

impl Control {
    /// Creates a new control of a particular type
    pub fn new(control_type: ControlType) -> Control {
        Control { attributes: vec![], control_type: control_type }
    }

    /// Create a new empty control
    pub fn empty() -> Control {
        Self::new(Empty)
    }

    /// Creates a new container control
    pub fn container() -> Control {
        Self::new(Container)
    }

    /// Creates a new button control
    pub fn button() -> Control {
        Self::new(Button)
    }

    /// Creates a new label control
    pub fn label() -> Control {
        Self::new(Label)
    }

    /// Creates a new slider control
    pub fn slider() -> Control {
        Self::new(Slider)
    }

    /// Adds an attribute to this control
    pub fn add_attribute(&mut self, attribute: ControlAttribute) {
        self.attributes.push(attribute);
    }

    /// Creates a control with some attributes added to it
    pub fn with<T: ControlModifier>(mut self, modifier: T) -> Control {
        modifier.modify(&mut self);

        self
    }

    ///
    /// Creates a control with an added controller
    ///
    pub fn with_controller(self, controller: &str) -> Control {
        self.with(ControlAttribute::Controller(String::from(controller)))
    }

    /// Returns an iterator over the attributes for this control
    pub fn attributes<'a>(&'a self) -> impl Iterator<Item=&'a ControlAttribute> {
        self.attributes.iter()
    }

    /// The type of this control
    pub fn control_type(&self) -> ControlType {
        self.control_type
    }

    ///
    /// If this control has a text attribute, finds it
    ///
    pub fn text<'a>(&'a self) -> Option<&'a PropertyValue> {
        self.attributes.iter()
            .filter_map(|attr| attr.text())
            .next()
    }

    ///
    /// If this control has a value attribute, finds it
    ///
    pub fn value<'a>(&'a self) -> Option<&'a PropertyValue> {
        self.attributes.iter()
            .filter_map(|attr| attr.value())
            .next()
    }

    ///
    /// If this control has a range attribute, finds it
    ///
    pub fn range<'a>(&'a self) -> Option<(&'a PropertyValue, &'a PropertyValue)> {
        self.attributes.iter()
            .filter_map(|attr| attr.range())
            .next()
    }

    ///
    /// If this control has subcomponents, finds them
    ///
    pub fn subcomponents<'a>(&'a self) -> Option<&'a Vec<Control>> {
        self.attributes.iter()
            .filter_map(|attr| attr.subcomponents())
            .next()
    }

    ///
    /// If this control has a controller attribute, finds it
    ///
    pub fn controller<'a>(&'a self) -> Option<&'a str> {
        self.attributes.iter()
            .filter_map(|attr| attr.controller())
            .next()
    }

    ///
    /// Returns an iterator over the actions wired to this control
    ///
    pub fn actions<'a>(&'a self) -> impl Iterator<Item=(&'a ActionTrigger, &'a str)> {
        self.attributes.iter()
            .filter_map(|attr| attr.action())
    }
}
