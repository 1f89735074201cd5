use egui::{menu, RichText, Ui};

use crate::app::DayPlannerApp;
use crate::ui::theme;
use crate::ui::view::icon_glyph;

/// Render the top toolbar: panel switcher plus view settings.
pub fn show_toolbar(app: &mut DayPlannerApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        let mut open = None;
        for (index, view) in app.views().iter().enumerate() {
            let label = format!("{} {}", icon_glyph(&view.icon()), view.display_text());
            if ui
                .selectable_label(index == app.active_view(), label)
                .clicked()
            {
                open = Some(index);
            }
        }
        if let Some(index) = open {
            app.open_view(index);
        }

        ui.separator();

        ui.menu_button("  View  ", |ui| {
            if ui.button("  Zoom In").clicked() {
                app.zoom_in();
                ui.close_menu();
            }
            if ui.button("  Zoom Out").clicked() {
                app.zoom_out();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Toggle Colorful Timeline").clicked() {
                app.toggle_colorful_timeline();
                ui.close_menu();
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let now = app.context().clock.now();
            ui.label(
                RichText::new(now.format("%a %d %b  %H:%M").to_string())
                    .size(11.0)
                    .color(theme::TEXT_SECONDARY),
            );
        });
    });
}
