pub mod console;
pub mod quiz_controller;

pub use quiz_controller::{Notice, QuizController, ScreenView};
