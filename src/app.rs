use std::rc::Rc;

use chrono::{Duration, NaiveDate};
use log::{info, warn};

use crate::clock::Clock;
use crate::model::{Settings, Task};
use crate::settings_store::SettingsStore;
use crate::ui;
use crate::ui::{ComponentContext, PanelView, TimeTrackerView, TimelineView};

const CLOCK_CADENCE_SECS: i64 = 1;

/// Main application state: the shared context plus the panel views.
pub struct DayPlannerApp {
    context: ComponentContext,
    views: Vec<Box<dyn PanelView>>,
    active_view: usize,
    pub status_message: String,
}

impl DayPlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: SettingsStore) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let now = chrono::Local::now().naive_local();
        let context = ComponentContext {
            settings,
            clock: Clock::new(now, Duration::seconds(CLOCK_CADENCE_SECS)),
            tasks: Rc::new(Self::sample_day(now.date())),
        };
        Self::with_context(context)
    }

    /// Build the app around an existing context and mount the first panel.
    pub fn with_context(context: ComponentContext) -> Self {
        let views: Vec<Box<dyn PanelView>> = vec![
            Box::new(TimelineView::new(context.settings.clone())),
            Box::new(TimeTrackerView::new()),
        ];
        let mut app = Self {
            context,
            views,
            active_view: 0,
            status_message: "Ready".to_string(),
        };
        app.views[0].on_mount(&app.context);
        app
    }

    /// Generate a sample day for demonstration.
    pub fn sample_day(day: NaiveDate) -> Vec<Task> {
        vec![
            Task::on_day("Morning run", day, 7 * 60, 45).with_category("health"),
            Task::on_day("Standup", day, 9 * 60 + 30, 15).with_category("work"),
            Task::on_day("Deep work", day, 10 * 60, 120).with_category("work"),
            Task::on_day("Lunch", day, 12 * 60 + 30, 60),
            Task::on_day("Call the dentist", day, 14 * 60, 0),
            Task::on_day("Review pull requests", day, 15 * 60, 90).with_category("work"),
            Task::on_day("Release window", day, 23 * 60, 120).with_category("work"),
        ]
    }

    pub fn context(&self) -> &ComponentContext {
        &self.context
    }

    pub fn views(&self) -> &[Box<dyn PanelView>] {
        &self.views
    }

    pub fn active_view(&self) -> usize {
        self.active_view
    }

    /// Close the current panel and open another one.
    pub fn open_view(&mut self, index: usize) {
        if index >= self.views.len() || index == self.active_view {
            return;
        }
        self.views[self.active_view].on_unmount();
        self.active_view = index;
        self.views[index].on_mount(&self.context);
        self.status_message = self.views[index].display_text().to_string();
    }

    pub fn zoom_in(&mut self) {
        self.apply_settings("Zoom in", Settings::zoom_in);
    }

    pub fn zoom_out(&mut self) {
        self.apply_settings("Zoom out", Settings::zoom_out);
    }

    pub fn toggle_colorful_timeline(&mut self) {
        self.apply_settings("Colorful timeline", |settings| {
            settings.colorful_timeline = !settings.colorful_timeline;
        });
    }

    fn apply_settings(&mut self, action: &str, edit: impl FnOnce(&mut Settings)) {
        match self.context.settings.update(edit) {
            Ok(()) => {
                info!("event=settings_changed action={action}");
                self.status_message = action.to_string();
            }
            Err(e) => {
                warn!("event=settings_changed action={action} status=error error={e}");
                self.status_message = format!("{action} failed: {e}");
            }
        }
    }
}

impl eframe::App for DayPlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        let now = chrono::Local::now().naive_local();
        self.context.clock.poll(now);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&self.status_message)
                        .size(10.5)
                        .color(ui::theme::TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("Tasks: {}", self.context.tasks.len()))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                    );
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.views[self.active_view].show(ui);
        });

        let wait = self
            .context
            .clock
            .until_next_tick(now)
            .to_std()
            .unwrap_or(std::time::Duration::from_secs(1));
        ctx.request_repaint_after(wait);
    }
}

impl Drop for DayPlannerApp {
    fn drop(&mut self) {
        for view in &mut self.views {
            view.on_unmount();
        }
    }
}
