pub mod theme;
pub mod time_tracker_view;
pub mod timeline_view;
pub mod toolbar;
pub mod view;

pub use time_tracker_view::TimeTrackerView;
pub use timeline_view::TimelineView;
pub use view::{ComponentContext, PanelView};
