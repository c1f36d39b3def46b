pub use self::prediction_input::*;

pub mod widgets;

mod prediction_input;
