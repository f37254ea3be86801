use super::control::*;

use std::collections::HashMap;

/// Builds a new control of the registered widget type
pub type WidgetFactory = fn() -> Control;

lazy_static! {
    /// The standard widget table: one entry per control type, keyed by the
    /// name hosts and serialized UI descriptions refer to it by. Fixed at
    /// load time; there is no runtime registration.
    static ref STANDARD_WIDGETS: HashMap<&'static str, WidgetFactory> = {
        let mut widgets: HashMap<&'static str, WidgetFactory> = HashMap::new();

        widgets.insert("Empty",     Control::empty as WidgetFactory);
        widgets.insert("Container", Control::container as WidgetFactory);
        widgets.insert("Button",    Control::button as WidgetFactory);
        widgets.insert("Label",     Control::label as WidgetFactory);
        widgets.insert("Slider",    Control::slider as WidgetFactory);

        widgets
    };
}

///
/// Looks up the factory for a widget by name
///
pub fn widget_factory(name: &str) -> Option<WidgetFactory> {
    STANDARD_WIDGETS.get(name).copied()
}

///
/// The names of every widget in the standard table, in sorted order
///
pub fn widget_names() -> Vec<&'static str> {
    let mut names: Vec<_> = STANDARD_WIDGETS.keys().copied().collect();
    names.sort();

    names
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_standard_widget_resolves_to_its_control_type() {
        let expected = vec![
            ("Empty",       ControlType::Empty),
            ("Container",   ControlType::Container),
            ("Button",      ControlType::Button),
            ("Label",       ControlType::Label),
            ("Slider",      ControlType::Slider),
        ];

        for (name, control_type) in expected {
            let factory = widget_factory(name).expect(name);
            assert!(factory().control_type() == control_type);
        }
    }

    #[test]
    fn unknown_widgets_are_not_in_the_table() {
        assert!(widget_factory("Rotor").is_none());
        assert!(widget_factory("").is_none());
    }

    #[test]
    fn widget_names_are_sorted() {
        assert_eq!(widget_names(), vec!["Button", "Container", "Empty", "Label", "Slider"]);
    }
}
