//! User-facing planner settings.
//!
//! Settings are serialised as JSON with `#RRGGBB` / `#RRGGBBAA` colour
//! strings. The struct carries `#[serde(default)]` so a partial file is valid:
//! missing keys fall back to the defaults below.

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 8.0;
const ZOOM_STEP: f32 = 1.2;

// ─── Hex-colour serde helper ────────────────────────────────────────────────

pub mod hex_color {
    use egui::Color32;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s).map_err(serde::de::Error::custom)
    }

    pub fn to_hex(color: Color32) -> String {
        let [r, g, b, a] = color.to_array();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    pub fn parse_hex_color(s: &str) -> Result<Color32, String> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color '{}': expected only hex digits", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| e.to_string())
        };
        match s.len() {
            6 => Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color32::from_rgba_unmultiplied(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid hex color '{}': expected 6 or 8 hex digits", s)),
        }
    }
}

/// Colors every task of one category with a fixed color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRule {
    pub category: String,
    #[serde(with = "hex_color")]
    pub color: Color32,
}

impl ColorRule {
    /// Build a rule from a user-entered hex string.
    pub fn parse(category: impl Into<String>, hex: &str) -> SettingsResult<Self> {
        let category = category.into();
        let color = hex_color::parse_hex_color(hex).map_err(|reason| SettingsError::InvalidColor {
            field: format!("color_rules[{category}]"),
            value: hex.to_string(),
            reason,
        })?;
        Ok(Self { category, color })
    }

    pub fn matches(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

/// Persisted planner settings (lives in the OS config directory).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pixels per minute.
    pub zoom_level: f32,
    /// Hours before this one are collapsed out of the timeline.
    pub start_hour: u32,
    pub timeline_icon: String,
    /// Shade tasks along a gradient by time of day.
    pub colorful_timeline: bool,
    #[serde(with = "hex_color")]
    pub timeline_start_color: Color32,
    #[serde(with = "hex_color")]
    pub timeline_end_color: Color32,
    #[serde(with = "hex_color")]
    pub default_task_color: Color32,
    pub color_rules: Vec<ColorRule>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            zoom_level: 2.0,
            start_hour: 0,
            timeline_icon: "calendar-check".into(),
            colorful_timeline: false,
            timeline_start_color: Color32::from_rgb(0x00, 0x6B, 0x7E),
            timeline_end_color: Color32::from_rgb(0xBC, 0x50, 0x90),
            default_task_color: Color32::from_rgb(70, 130, 180), // Steel blue
            color_rules: Vec::new(),
            log_level: default_log_level().into(),
        }
    }
}

impl Settings {
    /// Reject snapshots the derivation engine must never see.
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.zoom_level.is_finite() || self.zoom_level <= 0.0 {
            return Err(SettingsError::InvalidZoom(self.zoom_level));
        }
        if self.start_hour > 23 {
            return Err(SettingsError::InvalidStartHour(self.start_hour));
        }
        if let Some(index) = self
            .color_rules
            .iter()
            .position(|rule| rule.category.trim().is_empty())
        {
            return Err(SettingsError::EmptyRuleCategory(index));
        }
        normalize_level(&self.log_level)?;
        Ok(())
    }

    /// Pixel span of the collapsed hours at the current zoom.
    pub fn hidden_hours_size(&self) -> f32 {
        self.start_hour as f32 * 60.0 * self.zoom_level
    }

    /// Increase pixels per minute.
    pub fn zoom_in(&mut self) {
        self.zoom_level = (self.zoom_level * ZOOM_STEP).min(MAX_ZOOM);
    }

    /// Decrease pixels per minute.
    pub fn zoom_out(&mut self) {
        self.zoom_level = (self.zoom_level / ZOOM_STEP).max(MIN_ZOOM);
    }

    /// First rule matching `category`, if any.
    pub fn rule_for(&self, category: &str) -> Option<&ColorRule> {
        self.color_rules.iter().find(|rule| rule.matches(category))
    }
}

/// Pixel offset removed from every task so collapsed hours take no space.
pub fn hidden_hours_size(settings: &Settings) -> f32 {
    settings.hidden_hours_size()
}

/// `debug` in debug builds, `info` in release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

pub fn normalize_level(level: &str) -> SettingsResult<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(SettingsError::InvalidLogLevel(other.to_string())),
    }
}
