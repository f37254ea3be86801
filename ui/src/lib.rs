#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;

pub mod control;
pub mod controller;
pub mod property;
pub mod registry;

pub use self::control::*;
pub use self::controller::*;
pub use self::property::*;
pub use self::registry::*;
