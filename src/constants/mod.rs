pub mod chapters;
pub mod defaults;

pub use chapters::default_chapters;
