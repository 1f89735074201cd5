use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// A single scheduled item on the day timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    /// Optional category used by color rules.
    #[serde(default)]
    pub category: Option<String>,
    /// Minutes since midnight of the planner day. Negative or past 1440 for
    /// tasks that spill over from or into a neighbouring day.
    pub start_minutes: i32,
    pub duration_minutes: u32,
    pub start_time: NaiveDateTime,
}

impl Task {
    /// Create a task starting at an absolute instant.
    pub fn new(text: impl Into<String>, start_time: NaiveDateTime, duration_minutes: u32) -> Self {
        let start_minutes = (start_time.time().num_seconds_from_midnight() / 60) as i32;
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            category: None,
            start_minutes,
            duration_minutes,
            start_time,
        }
    }

    /// Create a task positioned relative to midnight of `day`.
    pub fn on_day(
        text: impl Into<String>,
        day: NaiveDate,
        start_minutes: i32,
        duration_minutes: u32,
    ) -> Self {
        let start_time = day.and_time(NaiveTime::MIN) + Duration::minutes(i64::from(start_minutes));
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            category: None,
            start_minutes,
            duration_minutes,
            start_time,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Exclusive end of the task's interval.
    pub fn end_time(&self) -> NaiveDateTime {
        self.start_time + Duration::minutes(i64::from(self.duration_minutes))
    }

    pub fn is_marker(&self) -> bool {
        self.duration_minutes == 0
    }
}
