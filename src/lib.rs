//! Reactive day planner timeline.
//!
//! Task visuals (offset, height, color, relation to now) are derived nodes
//! in a small push-based graph fed by two independent sources: the
//! [`settings_store::SettingsStore`] and the [`clock::Clock`].

pub mod app;
pub mod clock;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod reactive;
pub mod settings_store;
pub mod ui;
pub mod visuals;

pub use error::{SettingsError, SettingsResult};
pub use model::{Settings, Task};
pub use visuals::{derive_task_visual, DerivedVisual, RelationToNow, TaskVisuals, VisualSources};
