mod interval_panel_controller;

pub use self::interval_panel_controller::*;
