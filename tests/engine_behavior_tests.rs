use approx::assert_relative_eq;
use livechart::core::{
    PlotInsets, Sample, StatsPayload, Viewport, ViewportState, compute_window, project_visible,
};
use livechart::interaction::locate_nearest;
use livechart::render::NullRenderer;
use livechart::{ChartEngine, ChartEngineConfig};

fn payload(json: &str) -> StatsPayload {
    serde_json::from_str(json).expect("payload parses")
}

fn engine_with(json: &str) -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(824, 400));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.apply_stats(&payload(json));
    engine
}

#[test]
fn hover_scenario_resolves_nearest_sample() {
    // Full span visible, live anchor: three samples spread over the window.
    let series = vec![
        Sample::new(0, 10.0),
        Sample::new(1000, 20.0),
        Sample::new(2000, 15.0),
    ];
    let windowed = compute_window(&series, ViewportState::default());
    assert_relative_eq!(windowed.window.start, 0.0);
    assert_relative_eq!(windowed.window.end, 2000.0);

    let points = project_visible(&windowed.visible, Viewport::new(824, 400), PlotInsets::default());
    // t=1000 sits mid-window: x = 12 + 0.5 * 800.
    let nearest = locate_nearest(&points, 412.0).expect("nearest");
    assert_eq!(nearest.sample.t, 1000);
    assert_relative_eq!(nearest.sample.v, 20.0);
}

#[test]
fn engine_rejects_invalid_viewport() {
    let config = ChartEngineConfig::new(Viewport::new(0, 400));
    assert!(ChartEngine::new(NullRenderer::default(), config).is_err());

    let mut engine = engine_with(r#"{"data": [[1000, 1.0]]}"#);
    assert!(engine.set_viewport(Viewport::new(800, 0)).is_err());
    assert_eq!(engine.viewport(), Viewport::new(824, 400));
}

#[test]
fn apply_stats_replaces_series_wholesale() {
    let mut engine = engine_with(r#"{"data": [[1000, 1.0], [2000, 2.0]]}"#);
    assert_eq!(engine.series().len(), 2);

    engine.apply_stats(&payload(r#"{"data": [[5000, 5.0]]}"#));
    assert_eq!(engine.series().len(), 1);
    assert_eq!(engine.series()[0].t, 5000);
}

#[test]
fn pointer_move_sets_hover_with_clamped_tooltip() {
    let mut engine = engine_with(r#"{"data": [[1000, 10.0], [2000, 20.0], [3000, 15.0]]}"#);

    engine.pointer_move(412.0, 100.0);
    let hover = engine.hover().expect("hover after move");
    assert_eq!(hover.point.sample.t, 2000);

    let frame = engine.frame();
    let overlay = frame.hover.expect("hover overlay in frame");
    assert_eq!(overlay.value_text, "20.00");

    engine.pointer_leave();
    assert!(engine.hover().is_none());
}

#[test]
fn unit_metadata_appears_in_tooltip_text() {
    let mut engine = engine_with(r#"{"data": [[1000, 21.5]]}"#);
    engine.set_metadata("unit", "°C");
    engine.set_metadata("label", "water temperature");

    engine.pointer_move(12.0, 100.0);
    let frame = engine.frame();
    assert_eq!(frame.hover.expect("overlay").value_text, "21.50 °C");
    assert_eq!(engine.metadata().get("label").map(String::as_str), Some("water temperature"));
}

#[test]
fn drag_pans_and_exits_live_mode() {
    let mut engine = engine_with(
        r#"{"data": [[0, 0.0], [1000, 1.0], [2000, 2.0], [3000, 3.0], [4000, 4.0]]}"#,
    );
    // t=0 is rejected by normalization, so the series spans 1000..4000.
    assert_eq!(engine.series().len(), 4);
    engine.zoom_in();
    assert!(engine.is_live());

    engine.pointer_down(400.0);
    assert!(engine.is_dragging());
    engine.pointer_move(500.0, 100.0);
    assert!(!engine.is_live());
    assert!(engine.hover().is_none());

    engine.pointer_up();
    assert!(!engine.is_dragging());
    // Pan sticks after the gesture ends.
    assert!(!engine.is_live());
}

#[test]
fn drag_deltas_compose_across_gestures() {
    let data = r#"{"data": [[1000, 1.0], [2000, 2.0], [3000, 3.0], [4000, 4.0], [5000, 5.0]]}"#;

    let mut split = engine_with(data);
    split.zoom_in();
    split.pointer_down(600.0);
    split.pointer_move(630.0, 0.0);
    split.pointer_up();
    split.pointer_down(300.0);
    split.pointer_move(350.0, 0.0);
    split.pointer_up();

    let mut single = engine_with(data);
    single.zoom_in();
    single.pointer_down(600.0);
    single.pointer_move(680.0, 0.0);
    single.pointer_up();

    assert_relative_eq!(
        split.window().end,
        single.window().end,
        epsilon = 1e-9
    );
}

#[test]
fn follow_live_and_reset_restore_auto_follow() {
    let mut engine = engine_with(r#"{"data": [[1000, 1.0], [2000, 2.0], [3000, 3.0]]}"#);
    engine.zoom_in();
    engine.pointer_down(400.0);
    engine.pointer_move(500.0, 0.0);
    engine.pointer_up();
    assert!(!engine.is_live());

    engine.follow_live();
    assert!(engine.is_live());
    // Zoom survives follow_live.
    assert!(engine.zoom() > 1.0);

    engine.zoom_reset();
    assert_relative_eq!(engine.zoom(), 1.0);
    assert!(engine.is_live());
}

#[test]
fn live_window_tracks_new_samples() {
    let mut engine = engine_with(r#"{"data": [[1000, 1.0], [2000, 2.0]]}"#);
    assert_relative_eq!(engine.window().end, 2000.0);

    engine.apply_stats(&payload(r#"{"data": [[1000, 1.0], [2000, 2.0], [3000, 3.0]]}"#));
    assert_relative_eq!(engine.window().end, 3000.0);
}

#[test]
fn empty_series_is_a_quiet_no_op_state() {
    let config = ChartEngineConfig::new(Viewport::new(800, 400));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    engine.pointer_down(100.0);
    assert!(!engine.is_dragging());
    engine.pointer_move(100.0, 100.0);
    assert!(engine.hover().is_none());

    engine.render().expect("empty render succeeds");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_point_count, 0);
    assert_eq!(renderer.empty_frames, 1);
}

#[test]
fn render_reports_projected_points_and_hover() {
    let mut engine = engine_with(r#"{"data": [[1000, 1.0], [2000, 2.0], [3000, 3.0]]}"#);
    engine.pointer_move(412.0, 0.0);
    engine.render().expect("render succeeds");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_point_count, 3);
    assert!(renderer.last_had_hover);
}

#[test]
fn table_rows_are_newest_first() {
    let engine = engine_with(r#"{"data": [[2000, 2.0], [1000, 1.0], [3000, 3.0]]}"#);
    let rows = engine.table_rows();
    let times: Vec<i64> = rows.iter().map(|row| row.t).collect();
    assert_eq!(times, vec![3000, 2000, 1000]);
}

#[test]
fn poll_tick_does_not_disturb_drag_in_progress() {
    let mut engine = engine_with(r#"{"data": [[1000, 1.0], [2000, 2.0], [3000, 3.0]]}"#);
    engine.pointer_down(400.0);
    engine.apply_stats(&payload(r#"{"data": [[1000, 1.0], [2000, 2.0], [4000, 4.0]]}"#));

    assert!(engine.is_dragging());
    engine.pointer_move(420.0, 0.0);
    assert!(!engine.is_live());
}
