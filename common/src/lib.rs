pub mod settings;
pub mod theme;

pub use settings::*;
pub use theme::*;
