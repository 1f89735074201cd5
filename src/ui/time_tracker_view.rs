use chrono::NaiveDateTime;
use egui::{ProgressBar, RichText, Ui};
use log::debug;

use crate::model::Task;
use crate::reactive::{Derived, Readable};
use crate::ui::theme;
use crate::ui::view::{ComponentContext, PanelView};
use crate::visuals::{derive_relation_to_now, RelationToNow};

pub const VIEW_TYPE_TIME_TRACKER: &str = "time-tracker";

/// How far a running task has progressed, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedProgress {
    pub elapsed_minutes: i64,
    pub remaining_minutes: i64,
}

impl TrackedProgress {
    pub fn fraction(&self) -> f32 {
        let total = self.elapsed_minutes + self.remaining_minutes;
        if total <= 0 {
            return 1.0;
        }
        self.elapsed_minutes as f32 / total as f32
    }
}

/// Progress of `task` at `now`; `None` unless the task is running.
pub fn tracked_progress(task: &Task, now: NaiveDateTime) -> Option<TrackedProgress> {
    let end = task.end_time();
    if now < task.start_time || now >= end {
        return None;
    }
    Some(TrackedProgress {
        elapsed_minutes: (now - task.start_time).num_minutes(),
        remaining_minutes: (end - now).num_minutes(),
    })
}

struct TrackerRow {
    task: Task,
    relation: Derived<RelationToNow>,
    progress: Derived<Option<TrackedProgress>>,
}

/// Lists the running tasks and the next one up. Follows the clock only.
#[derive(Default)]
pub struct TimeTrackerView {
    rows: Option<Vec<TrackerRow>>,
}

impl TimeTrackerView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Running tasks with their progress.
    pub fn active(&self) -> Vec<(&Task, TrackedProgress)> {
        self.rows
            .iter()
            .flatten()
            .filter_map(|row| row.progress.get().map(|progress| (&row.task, progress)))
            .collect()
    }

    /// Earliest task that has not started yet.
    pub fn up_next(&self) -> Option<&Task> {
        self.rows
            .iter()
            .flatten()
            .filter(|row| row.relation.get() == RelationToNow::Future)
            .map(|row| &row.task)
            .min_by_key(|task| task.start_time)
    }
}

impl PanelView for TimeTrackerView {
    fn view_type(&self) -> &'static str {
        VIEW_TYPE_TIME_TRACKER
    }

    fn display_text(&self) -> &str {
        "Time Tracker"
    }

    fn icon(&self) -> String {
        "timer".into()
    }

    fn on_mount(&mut self, context: &ComponentContext) {
        let current_time = context.clock.current_time();
        let rows = context
            .tasks
            .iter()
            .map(|task| {
                let tracked = task.clone();
                TrackerRow {
                    task: task.clone(),
                    relation: derive_relation_to_now(task, current_time),
                    progress: Derived::new(current_time, move |now: &NaiveDateTime| {
                        tracked_progress(&tracked, *now)
                    }),
                }
            })
            .collect::<Vec<_>>();

        debug!(
            "event=view_mount view={} tasks={}",
            VIEW_TYPE_TIME_TRACKER,
            rows.len()
        );
        self.rows = Some(rows);
    }

    fn on_unmount(&mut self) {
        if self.rows.take().is_some() {
            debug!("event=view_unmount view={}", VIEW_TYPE_TIME_TRACKER);
        }
    }

    fn is_mounted(&self) -> bool {
        self.rows.is_some()
    }

    fn show(&mut self, ui: &mut Ui) {
        if !self.is_mounted() {
            return;
        }

        let active = self.active();
        if active.is_empty() {
            ui.label(RichText::new("Nothing running right now").color(theme::TEXT_DIM));
        }
        for (task, progress) in active {
            ui.label(RichText::new(&task.text).font(theme::font_block()));
            ui.add(ProgressBar::new(progress.fraction()).text(format!(
                "{} min elapsed, {} min left",
                progress.elapsed_minutes, progress.remaining_minutes
            )));
            ui.add_space(6.0);
        }

        if let Some(task) = self.up_next() {
            ui.separator();
            ui.label(
                RichText::new(format!(
                    "Up next: {} at {}",
                    task.text,
                    task.start_time.format("%H:%M")
                ))
                .color(theme::TEXT_SECONDARY),
            );
        }
    }
}
