//! Host panel contract.
//!
//! A panel view is constructed once, mounted when its panel opens and
//! unmounted when it closes. Mounting wires the view to the shared reactive
//! sources; unmounting drops every derived node and with it every
//! subscription.

use std::rc::Rc;

use egui::Ui;

use crate::clock::Clock;
use crate::model::Task;
use crate::settings_store::SettingsStore;
use crate::visuals::VisualSources;

/// Shared state handed to every mounted view.
#[derive(Debug, Clone)]
pub struct ComponentContext {
    pub settings: SettingsStore,
    pub clock: Clock,
    pub tasks: Rc<Vec<Task>>,
}

impl ComponentContext {
    pub fn sources(&self) -> VisualSources<'_> {
        VisualSources {
            settings: self.settings.channel(),
            current_time: self.clock.current_time(),
        }
    }
}

/// Capability a panel host needs from a view.
pub trait PanelView {
    fn view_type(&self) -> &'static str;

    fn display_text(&self) -> &str;

    /// Phosphor icon name.
    fn icon(&self) -> String;

    fn on_mount(&mut self, context: &ComponentContext);

    fn on_unmount(&mut self);

    fn is_mounted(&self) -> bool;

    /// Paint the current derived values. Does nothing while unmounted.
    fn show(&mut self, ui: &mut Ui);
}

/// Map a phosphor icon name to its glyph, with a generic fallback.
pub fn icon_glyph(name: &str) -> &'static str {
    use egui_phosphor::regular as icons;
    match name {
        "calendar-check" => icons::CALENDAR_CHECK,
        "calendar" => icons::CALENDAR,
        "calendar-blank" => icons::CALENDAR_BLANK,
        "clock" => icons::CLOCK,
        "timer" => icons::TIMER,
        "list-checks" => icons::LIST_CHECKS,
        _ => icons::SQUARES_FOUR,
    }
}
