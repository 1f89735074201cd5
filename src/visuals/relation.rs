use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Where a task's interval lies relative to the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationToNow {
    Past,
    Present,
    Future,
}

impl RelationToNow {
    pub fn label(self) -> &'static str {
        match self {
            RelationToNow::Past => "past",
            RelationToNow::Present => "present",
            RelationToNow::Future => "future",
        }
    }
}

/// Classify `now` against the half-open interval `[start, end)`.
///
/// The end instant is already past, so a zero-length interval is past at its
/// own start.
pub fn get_relation_to_now(
    now: NaiveDateTime,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> RelationToNow {
    if now >= end {
        RelationToNow::Past
    } else if now >= start {
        RelationToNow::Present
    } else {
        RelationToNow::Future
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 11)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn interval_is_half_open() {
        let (start, end) = (at(9, 0), at(10, 0));

        assert_eq!(get_relation_to_now(at(8, 59), start, end), RelationToNow::Future);
        assert_eq!(get_relation_to_now(start, start, end), RelationToNow::Present);
        assert_eq!(get_relation_to_now(at(9, 59), start, end), RelationToNow::Present);
        assert_eq!(get_relation_to_now(end, start, end), RelationToNow::Past);
    }

    #[test]
    fn empty_interval_is_never_present() {
        let start = at(12, 0);

        assert_eq!(get_relation_to_now(at(11, 59), start, start), RelationToNow::Future);
        assert_eq!(get_relation_to_now(start, start, start), RelationToNow::Past);
    }

    #[test]
    fn serializes_as_lowercase_label() {
        let json = serde_json::to_string(&RelationToNow::Present).unwrap();
        assert_eq!(json, "\"present\"");
        assert_eq!(RelationToNow::Future.label(), "future");
    }
}
