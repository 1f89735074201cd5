pub mod settings;
pub mod task;

pub use settings::{hidden_hours_size, ColorRule, Settings};
pub use task::Task;
