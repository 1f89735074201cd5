use chrono::{NaiveDateTime, Timelike};
use egui::{Align2, Painter, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};
use log::debug;

use crate::model::task::MINUTES_PER_DAY;
use crate::model::{hidden_hours_size, Settings, Task};
use crate::reactive::{Derived, Readable};
use crate::settings_store::SettingsStore;
use crate::ui::theme;
use crate::ui::view::{ComponentContext, PanelView};
use crate::visuals::{derive_task_visual, TaskVisuals};

pub const VIEW_TYPE_TIMELINE: &str = "timeline";

struct TimelineRow {
    task: Task,
    visuals: TaskVisuals,
}

struct MountedTimeline {
    rows: Vec<TimelineRow>,
    now_offset: Derived<f32>,
    day_height: Derived<f32>,
}

/// Vertical day timeline: one block per task plus a "now" line.
pub struct TimelineView {
    settings: SettingsStore,
    mounted: Option<MountedTimeline>,
}

impl TimelineView {
    pub fn new(settings: SettingsStore) -> Self {
        Self {
            settings,
            mounted: None,
        }
    }

    /// Live visuals of every task, in task order. Empty while unmounted.
    pub fn visuals(&self) -> impl Iterator<Item = (&Task, &TaskVisuals)> {
        self.mounted
            .iter()
            .flat_map(|mounted| mounted.rows.iter().map(|row| (&row.task, &row.visuals)))
    }

    pub fn now_offset(&self) -> Option<f32> {
        self.mounted.as_ref().map(|mounted| mounted.now_offset.get())
    }
}

fn minutes_since_midnight(now: &NaiveDateTime) -> f32 {
    now.time().num_seconds_from_midnight() as f32 / 60.0
}

impl PanelView for TimelineView {
    fn view_type(&self) -> &'static str {
        VIEW_TYPE_TIMELINE
    }

    fn display_text(&self) -> &str {
        "Day Planner Timeline"
    }

    fn icon(&self) -> String {
        self.settings.channel().with(|settings| settings.timeline_icon.clone())
    }

    fn on_mount(&mut self, context: &ComponentContext) {
        let sources = context.sources();
        let rows = context
            .tasks
            .iter()
            .map(|task| TimelineRow {
                task: task.clone(),
                visuals: derive_task_visual(task, sources),
            })
            .collect::<Vec<_>>();

        let now_offset = Derived::combine(
            sources.settings,
            sources.current_time,
            |settings: &Settings, now: &NaiveDateTime| {
                minutes_since_midnight(now) * settings.zoom_level - hidden_hours_size(settings)
            },
        );
        let day_height = Derived::new(sources.settings, |settings: &Settings| {
            MINUTES_PER_DAY as f32 * settings.zoom_level - hidden_hours_size(settings)
        });

        debug!(
            "event=view_mount view={} tasks={}",
            VIEW_TYPE_TIMELINE,
            rows.len()
        );
        self.mounted = Some(MountedTimeline {
            rows,
            now_offset,
            day_height,
        });
    }

    fn on_unmount(&mut self) {
        if self.mounted.take().is_some() {
            debug!("event=view_unmount view={}", VIEW_TYPE_TIMELINE);
        }
    }

    fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    fn show(&mut self, ui: &mut Ui) {
        let Some(mounted) = &self.mounted else {
            return;
        };
        let (start_hour, zoom) = self
            .settings
            .channel()
            .with(|settings| (settings.start_hour, settings.zoom_level));
        let day_height = mounted.day_height.get();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let width = ui.available_width();
                let (response, painter) =
                    ui.allocate_painter(Vec2::new(width, day_height), Sense::hover());
                let origin = response.rect.min;

                painter.rect_filled(response.rect, 0.0, theme::BG_DARK);
                draw_hour_grid(&painter, origin, width, start_hour, zoom);

                for row in &mounted.rows {
                    draw_task_block(&painter, origin, width, row);
                }

                draw_now_line(&painter, origin, width, mounted.now_offset.get());
            });
    }
}

fn draw_hour_grid(painter: &Painter, origin: Pos2, width: f32, start_hour: u32, zoom: f32) {
    for hour in start_hour..24 {
        let y = origin.y + (hour - start_hour) as f32 * 60.0 * zoom;
        painter.line_segment(
            [Pos2::new(origin.x, y), Pos2::new(origin.x + width, y)],
            Stroke::new(0.5, theme::GRID_LINE),
        );
        painter.text(
            Pos2::new(origin.x + 4.0, y + 2.0),
            Align2::LEFT_TOP,
            format!("{hour:02}:00"),
            theme::font_small(),
            theme::TEXT_DIM,
        );
    }
}

fn draw_task_block(painter: &Painter, origin: Pos2, width: f32, row: &TimelineRow) {
    let visual = row.visuals.snapshot();
    let inset = theme::BLOCK_INSET;
    let rect = Rect::from_min_size(
        Pos2::new(origin.x + theme::GUTTER_WIDTH + inset, origin.y + visual.offset),
        Vec2::new(
            (width - theme::GUTTER_WIDTH - inset * 2.0).max(0.0),
            visual.height.max(theme::MARKER_HEIGHT),
        ),
    );
    let rounding = Rounding::same(theme::BLOCK_ROUNDING);

    painter.rect_filled(
        rect,
        rounding,
        theme::block_fill(visual.colors.background, visual.relation_to_now),
    );
    painter.rect_stroke(rect, rounding, theme::block_stroke(visual.relation_to_now));

    // Text only fits on blocks taller than one line
    if rect.height() >= 14.0 {
        painter.with_clip_rect(rect).text(
            rect.min + Vec2::new(6.0, 2.0),
            Align2::LEFT_TOP,
            &row.task.text,
            theme::font_block(),
            visual.colors.text,
        );
    }
}

fn draw_now_line(painter: &Painter, origin: Pos2, width: f32, offset: f32) {
    let y = origin.y + offset;
    painter.line_segment(
        [Pos2::new(origin.x, y), Pos2::new(origin.x + width, y)],
        Stroke::new(1.5, theme::NOW_LINE),
    );
    painter.circle_filled(Pos2::new(origin.x + theme::GUTTER_WIDTH, y), 3.5, theme::NOW_LINE);
}
