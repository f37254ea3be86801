use super::control::*;
use super::actions::*;
use super::attributes::*;

use super::super::property::*;

///
/// Represents an object that can be used to modify a control
///
pub trait ControlModifier {
    /// Applies this modifier to a control
    fn modify(self, control: &mut Control);
}

impl ControlModifier for ControlAttribute {
    fn modify(self, control: &mut Control) {
        control.add_attribute(self);
    }
}

impl<'a> ControlModifier for &'a str {
    fn modify(self, control: &mut Control) {
        control.add_attribute(ControlAttribute::Text(PropertyValue::from(self)));
    }
}

impl ControlModifier for String {
    fn modify(self, control: &mut Control) {
        control.add_attribute(ControlAttribute::Text(PropertyValue::from(self)));
    }
}

impl ControlModifier for Vec<Control> {
    fn modify(self, control: &mut Control) {
        control.add_attribute(ControlAttribute::SubComponents(self));
    }
}

impl<'a> ControlModifier for (ActionTrigger, &'a str) {
    fn modify(self, control: &mut Control) {
        control.add_attribute(ControlAttribute::Action(self.0, String::from(self.1)));
    }
}

impl<A: ControlModifier, B: ControlModifier> ControlModifier for (A, B) {
    fn modify(self, control: &mut Control) {
        self.0.modify(control);
        self.1.modify(control);
    }
}

impl<A: ControlModifier, B: ControlModifier, C: ControlModifier> ControlModifier for (A, B, C) {
    fn modify(self, control: &mut Control) {
        self.0.modify(control);
        self.1.modify(control);
        self.2.modify(control);
    }
}

impl<A: ControlModifier, B: ControlModifier, C: ControlModifier, D: ControlModifier> ControlModifier for (A, B, C, D) {
    fn modify(self, control: &mut Control) {
        self.0.modify(control);
        self.1.modify(control);
        self.2.modify(control);
        self.3.modify(control);
    }
}
