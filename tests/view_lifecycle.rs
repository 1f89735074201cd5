use std::rc::Rc;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use day_planner::app::DayPlannerApp;
use day_planner::clock::Clock;
use day_planner::reactive::Readable;
use day_planner::settings_store::SettingsStore;
use day_planner::ui::{ComponentContext, PanelView, TimeTrackerView, TimelineView};
use day_planner::{RelationToNow, Settings, Task};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
}

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    day().and_hms_opt(hour, minute, 0).unwrap()
}

fn context(now: NaiveDateTime) -> ComponentContext {
    ComponentContext {
        settings: SettingsStore::in_memory(Settings::default()).unwrap(),
        clock: Clock::new(now, Duration::seconds(1)),
        tasks: Rc::new(vec![
            Task::on_day("Standup", day(), 9 * 60, 15),
            Task::on_day("Deep work", day(), 10 * 60, 120),
        ]),
    }
}

#[test]
fn timeline_mount_wires_and_unmount_releases_subscriptions() {
    let ctx = context(at(9, 5));
    let mut view = TimelineView::new(ctx.settings.clone());
    assert!(!view.is_mounted());
    assert_eq!(ctx.settings.channel().subscriber_count(), 0);

    view.on_mount(&ctx);

    // offset, height, colors per task plus day height and now line
    assert_eq!(ctx.settings.channel().subscriber_count(), 2 * 3 + 2);
    // relation per task plus now line
    assert_eq!(ctx.clock.current_time().subscriber_count(), 2 + 1);
    let relations: Vec<_> = view
        .visuals()
        .map(|(_, visuals)| visuals.snapshot().relation_to_now)
        .collect();
    assert_eq!(relations, vec![RelationToNow::Present, RelationToNow::Future]);

    view.on_unmount();

    assert!(!view.is_mounted());
    assert_eq!(ctx.settings.channel().subscriber_count(), 0);
    assert_eq!(ctx.clock.current_time().subscriber_count(), 0);
    assert_eq!(view.visuals().count(), 0);
}

#[test]
fn mounted_timeline_updates_in_place() {
    let ctx = context(at(9, 5));
    let mut view = TimelineView::new(ctx.settings.clone());
    view.on_mount(&ctx);
    let standup = view.visuals().next().map(|(_, v)| v.clone()).unwrap();

    ctx.clock.tick(at(9, 15));
    ctx.settings.update(|s| s.zoom_level = 1.0).unwrap();

    assert_eq!(standup.relation_to_now.get(), RelationToNow::Past);
    assert_eq!(standup.offset.get(), 540.0);
    assert_eq!(view.now_offset(), Some(555.0));
}

#[test]
fn timeline_icon_follows_settings() {
    let ctx = context(at(9, 0));
    let view = TimelineView::new(ctx.settings.clone());
    assert_eq!(view.icon(), "calendar-check");

    ctx.settings
        .update(|s| s.timeline_icon = "calendar".into())
        .unwrap();

    assert_eq!(view.icon(), "calendar");
    assert_eq!(view.view_type(), "timeline");
    assert_eq!(view.display_text(), "Day Planner Timeline");
}

#[test]
fn time_tracker_follows_clock() {
    let ctx = context(at(9, 5));
    let mut view = TimeTrackerView::new();
    view.on_mount(&ctx);

    let active = view.active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].0.text, "Standup");
    assert_eq!(active[0].1.elapsed_minutes, 5);
    assert_eq!(view.up_next().map(|t| t.text.as_str()), Some("Deep work"));

    ctx.clock.tick(at(10, 30));

    let active = view.active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].0.text, "Deep work");
    assert_eq!(active[0].1.remaining_minutes, 90);
    assert!(view.up_next().is_none());

    view.on_unmount();
    assert_eq!(ctx.clock.current_time().subscriber_count(), 0);
    assert!(view.active().is_empty());
}

#[test]
fn switching_panels_unmounts_the_previous_view() {
    let ctx = context(at(9, 5));
    let settings = ctx.settings.clone();
    let clock = ctx.clock.clone();
    let mut app = DayPlannerApp::with_context(ctx);
    assert_eq!(app.active_view(), 0);
    assert!(app.views()[0].is_mounted());
    assert!(settings.channel().subscriber_count() > 0);

    app.open_view(1);

    assert_eq!(app.active_view(), 1);
    assert!(!app.views()[0].is_mounted());
    assert!(app.views()[1].is_mounted());
    assert_eq!(settings.channel().subscriber_count(), 0);
    // relation and progress per task
    assert_eq!(clock.current_time().subscriber_count(), 2 * 2);

    app.open_view(7);
    assert_eq!(app.active_view(), 1);

    drop(app);
    assert_eq!(clock.current_time().subscriber_count(), 0);
}

#[test]
fn rejected_zoom_keeps_previous_snapshot() {
    let ctx = context(at(9, 5));
    let mut app = DayPlannerApp::with_context(ctx);

    app.zoom_in();
    let zoom = app.context().settings.get().zoom_level;
    assert!(zoom > 2.0);
    assert_eq!(app.status_message, "Zoom in");

    let err = app
        .context()
        .settings
        .update(|s| s.zoom_level = -1.0)
        .unwrap_err();
    assert!(err.to_string().contains("zoom"));
    assert_eq!(app.context().settings.get().zoom_level, zoom);
}
