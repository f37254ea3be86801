mod types;
mod actions;
mod control;
mod modifier;
mod attributes;

pub use self::types::*;
pub use self::actions::*;
pub use self::control::*;
pub use self::modifier::*;
pub use self::attributes::*;

#[cfg(test)]
mod test {
    use super::*;
    use super::super::property::*;

    #[test]
    fn can_create_button() {
        let button = Control::button();

        assert!(button.control_type() == ControlType::Button);
    }

    #[test]
    fn can_create_label_with_text() {
        let label = Control::label().with("Hello");

        assert!(label.control_type() == ControlType::Label);
        assert!(label.attributes().any(|attr| attr == &ControlAttribute::Text(PropertyValue::from("Hello"))));
    }

    #[test]
    fn can_create_slider_with_value_and_range() {
        let slider = Control::slider()
            .with(ControlAttribute::Value(PropertyValue::Float(1.5)))
            .with(ControlAttribute::Range(PropertyValue::Float(0.0), PropertyValue::Float(3.0)));

        assert!(slider.control_type() == ControlType::Slider);
        assert!(slider.value() == Some(&PropertyValue::Float(1.5)));
        assert!(slider.range() == Some((&PropertyValue::Float(0.0), &PropertyValue::Float(3.0))));
    }

    #[test]
    fn can_create_container_with_components() {
        let container = Control::container()
            .with(vec![Control::label().with("Hello")]);

        assert!(container.control_type() == ControlType::Container);
        assert!(container.attributes().any(|attr| attr == &ControlAttribute::SubComponents(vec![Control::label().with("Hello")])));
    }

    #[test]
    fn can_wire_an_action_to_a_control() {
        let button = Control::button().with((ActionTrigger::Click, "JumpToStart"));

        assert!(button.actions().any(|(trigger, action_id)| trigger == &ActionTrigger::Click && action_id == "JumpToStart"));
    }

    #[test]
    fn modifiers_can_be_combined_in_tuples() {
        let button = Control::button().with(("Play", (ActionTrigger::Click, "Play")));

        assert!(button.attributes().any(|attr| attr == &ControlAttribute::Text(PropertyValue::from("Play"))));
        assert!(button.actions().any(|(_, action_id)| action_id == "Play"));
    }

    #[test]
    fn controls_serialize_for_host_transport() {
        let label       = Control::label().with("Hi");
        let serialized  = serde_json::to_string(&label).unwrap();
        let restored    = serde_json::from_str::<Control>(&serialized).unwrap();

        assert!(restored == label);
    }
}
