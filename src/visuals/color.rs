//! Task color derivation.
//!
//! Category rules win over the time-of-day gradient, which wins over the
//! plain default color. The text color is picked for contrast against the
//! resulting background.

use egui::Color32;

use crate::model::task::MINUTES_PER_DAY;
use crate::model::{Settings, Task};

/// Colors used to paint one task block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskColors {
    pub background: Color32,
    pub text: Color32,
}

/// Pure function of the task's category/start and the color settings.
pub fn task_colors(task: &Task, settings: &Settings) -> TaskColors {
    let background = background_color(task, settings);
    TaskColors {
        background,
        text: contrast_text(background),
    }
}

fn background_color(task: &Task, settings: &Settings) -> Color32 {
    if let Some(rule) = task
        .category
        .as_deref()
        .and_then(|category| settings.rule_for(category))
    {
        return rule.color;
    }

    if settings.colorful_timeline {
        let t = task.start_minutes as f32 / MINUTES_PER_DAY as f32;
        return lerp_color(settings.timeline_start_color, settings.timeline_end_color, t);
    }

    settings.default_task_color
}

/// Linear interpolation in sRGB space; `t` is clamped to `[0, 1]`.
pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    let [r0, g0, b0, a0] = from.to_array();
    let [r1, g1, b1, a1] = to.to_array();
    Color32::from_rgba_premultiplied(
        channel(r0, r1),
        channel(g0, g1),
        channel(b0, b1),
        channel(a0, a1),
    )
}

/// Black on light backgrounds, white on dark ones.
pub fn contrast_text(background: Color32) -> Color32 {
    let [r, g, b, _] = background.to_array();
    let luminance = (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) / 255.0;
    if luminance > 0.5 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorRule;
    use chrono::NaiveDate;

    fn task_at(start_minutes: i32) -> Task {
        let day = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        Task::on_day("Focus", day, start_minutes, 30)
    }

    #[test]
    fn plain_settings_use_default_color() {
        let settings = Settings::default();
        let colors = task_colors(&task_at(600), &settings);
        assert_eq!(colors.background, settings.default_task_color);
    }

    #[test]
    fn matching_rule_beats_gradient() {
        let settings = Settings {
            colorful_timeline: true,
            color_rules: vec![ColorRule::parse("Gym", "#FFFFFF").unwrap()],
            ..Settings::default()
        };
        let colors = task_colors(&task_at(600).with_category("gym"), &settings);

        assert_eq!(colors.background, Color32::WHITE);
        assert_eq!(colors.text, Color32::BLACK);
    }

    #[test]
    fn gradient_follows_time_of_day_and_clamps() {
        let settings = Settings {
            colorful_timeline: true,
            timeline_start_color: Color32::from_rgb(0, 0, 0),
            timeline_end_color: Color32::from_rgb(200, 100, 0),
            ..Settings::default()
        };

        assert_eq!(
            task_colors(&task_at(720), &settings).background,
            Color32::from_rgb(100, 50, 0)
        );
        assert_eq!(
            task_colors(&task_at(-30), &settings).background,
            Color32::from_rgb(0, 0, 0)
        );
        assert_eq!(
            task_colors(&task_at(2000), &settings).background,
            Color32::from_rgb(200, 100, 0)
        );
    }

    #[test]
    fn same_inputs_same_output() {
        let settings = Settings::default();
        let task = task_at(100);
        assert_eq!(task_colors(&task, &settings), task_colors(&task, &settings));
    }
}
