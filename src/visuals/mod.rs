//! Derivation of on-screen task visuals from schedule data, settings and
//! the clock.

pub mod color;
pub mod engine;
pub mod relation;

pub use color::{task_colors, TaskColors};
pub use engine::{
    derive_relation_to_now, derive_task_visual, DerivedVisual, TaskVisuals, VisualSources,
};
pub use relation::{get_relation_to_now, RelationToNow};
