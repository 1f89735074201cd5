//! Per-task reactive visuals.
//!
//! Each output is its own [`Derived`] node with only the upstream source it
//! actually reads: layout and color follow the settings, the temporal
//! relation follows the clock. A clock tick therefore never re-runs layout,
//! and a settings change never re-classifies a task.

use std::rc::Rc;

use chrono::NaiveDateTime;
use log::trace;

use crate::model::{hidden_hours_size, Settings, Task};
use crate::reactive::{Derived, Readable};

use super::color::{task_colors, TaskColors};
use super::relation::{get_relation_to_now, RelationToNow};

/// Upstream channels a task's visuals are derived from.
#[derive(Clone, Copy)]
pub struct VisualSources<'a> {
    pub settings: &'a dyn Readable<Settings>,
    pub current_time: &'a dyn Readable<NaiveDateTime>,
}

/// Live visuals of one task. Every field updates in place.
#[derive(Debug, Clone)]
pub struct TaskVisuals {
    pub offset: Derived<f32>,
    pub height: Derived<f32>,
    pub relation_to_now: Derived<RelationToNow>,
    pub colors: Derived<TaskColors>,
}

/// Plain-value snapshot of [`TaskVisuals`] at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedVisual {
    pub offset: f32,
    pub height: f32,
    pub relation_to_now: RelationToNow,
    pub colors: TaskColors,
}

impl TaskVisuals {
    pub fn snapshot(&self) -> DerivedVisual {
        DerivedVisual {
            offset: self.offset.get(),
            height: self.height.get(),
            relation_to_now: self.relation_to_now.get(),
            colors: self.colors.get(),
        }
    }
}

/// Vertical position of a task at the given settings.
pub fn task_offset(task: &Task, settings: &Settings) -> f32 {
    task.start_minutes as f32 * settings.zoom_level - hidden_hours_size(settings)
}

/// Vertical extent of a task at the given settings.
pub fn task_height(task: &Task, settings: &Settings) -> f32 {
    task.duration_minutes as f32 * settings.zoom_level
}

/// Temporal relation of `task` that follows the clock only.
pub fn derive_relation_to_now(
    task: &Task,
    current_time: &dyn Readable<NaiveDateTime>,
) -> Derived<RelationToNow> {
    let (id, start, end) = (task.id, task.start_time, task.end_time());
    Derived::new(current_time, move |now: &NaiveDateTime| {
        let relation = get_relation_to_now(*now, start, end);
        trace!("event=derive field=relation task={id} value={}", relation.label());
        relation
    })
}

/// Wire a task into the settings and clock sources.
///
/// The task is captured by value; settings snapshots are assumed to have
/// been validated by their store.
pub fn derive_task_visual(task: &Task, sources: VisualSources<'_>) -> TaskVisuals {
    let task = Rc::new(task.clone());

    let offset = {
        let task = Rc::clone(&task);
        Derived::new(sources.settings, move |settings: &Settings| {
            let offset = task_offset(&task, settings);
            trace!("event=derive field=offset task={} value={offset}", task.id);
            offset
        })
    };

    let height = {
        let task = Rc::clone(&task);
        Derived::new(sources.settings, move |settings: &Settings| {
            task_height(&task, settings)
        })
    };

    let colors = {
        let task = Rc::clone(&task);
        Derived::new(sources.settings, move |settings: &Settings| {
            task_colors(&task, settings)
        })
    };

    let relation_to_now = derive_relation_to_now(&task, sources.current_time);

    TaskVisuals {
        offset,
        height,
        relation_to_now,
        colors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::Store;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 11)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn morning_block_scenario() {
        let settings = Store::new(Settings {
            zoom_level: 2.0,
            ..Settings::default()
        });
        let clock = Store::new(at(8, 59));
        let task = Task::new("Deep work", at(9, 0), 60);
        let visuals = derive_task_visual(
            &task,
            VisualSources {
                settings: &settings,
                current_time: &clock,
            },
        );

        assert_eq!(visuals.offset.get(), 1080.0);
        assert_eq!(visuals.height.get(), 120.0);
        assert_eq!(visuals.relation_to_now.get(), RelationToNow::Future);

        clock.set(at(9, 30));
        assert_eq!(visuals.relation_to_now.get(), RelationToNow::Present);

        clock.set(at(10, 0));
        assert_eq!(visuals.relation_to_now.get(), RelationToNow::Past);
    }

    #[test]
    fn hidden_hours_shift_offset_only() {
        let settings = Store::new(Settings::default());
        let clock = Store::new(at(0, 0));
        let task = Task::new("Lunch", at(12, 0), 45);
        let visuals = derive_task_visual(
            &task,
            VisualSources {
                settings: &settings,
                current_time: &clock,
            },
        );

        settings.update(|s| Settings {
            start_hour: 7,
            ..s.clone()
        });

        assert_eq!(visuals.offset.get(), 720.0 * 2.0 - 7.0 * 60.0 * 2.0);
        assert_eq!(visuals.height.get(), 90.0);
    }
}
