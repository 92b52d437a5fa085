use approx::assert_relative_eq;
use livechart::core::{PlotInsets, Sample, Viewport, project_visible};

fn sample(t: i64, v: f64) -> Sample {
    Sample::new(t, v)
}

#[test]
fn window_edges_map_to_plot_insets() {
    let visible = vec![sample(1000, 5.0), sample(1500, 7.0), sample(2000, 6.0)];
    let viewport = Viewport::new(800, 400);
    let insets = PlotInsets::default();

    let points = project_visible(&visible, viewport, insets);
    assert_eq!(points.len(), 3);
    assert_relative_eq!(points[0].x, insets.x);
    assert_relative_eq!(points[2].x, 800.0 - insets.x);
}

#[test]
fn value_axis_scales_over_visible_extremes() {
    let visible = vec![sample(0, 0.0), sample(1000, 10.0)];
    let viewport = Viewport::new(800, 400);
    let insets = PlotInsets::new(12.0, 16.0);

    let points = project_visible(&visible, viewport, insets);
    // Minimum value sits on the bottom padding line, maximum on the top.
    assert_relative_eq!(points[0].y, 400.0 - 16.0);
    assert_relative_eq!(points[1].y, 16.0);
}

#[test]
fn midpoint_maps_to_horizontal_center() {
    let visible = vec![sample(0, 1.0), sample(1000, 2.0), sample(2000, 3.0)];
    let viewport = Viewport::new(824, 400);
    let insets = PlotInsets::default();

    let points = project_visible(&visible, viewport, insets);
    assert_relative_eq!(points[1].x, 12.0 + 0.5 * (824.0 - 24.0));
}

#[test]
fn flat_series_renders_at_mid_height() {
    let visible = vec![sample(0, 42.0), sample(1000, 42.0), sample(2000, 42.0)];
    let viewport = Viewport::new(800, 400);

    let points = project_visible(&visible, viewport, PlotInsets::default());
    for point in &points {
        assert_relative_eq!(point.y, 200.0);
    }
}

#[test]
fn single_point_lands_on_left_inset() {
    let visible = vec![sample(1000, 5.0)];
    let viewport = Viewport::new(800, 400);

    let points = project_visible(&visible, viewport, PlotInsets::default());
    assert_eq!(points.len(), 1);
    assert_relative_eq!(points[0].x, 12.0);
    // Single value is also a flat range.
    assert_relative_eq!(points[0].y, 200.0);
}

#[test]
fn empty_visible_set_projects_nothing() {
    let points = project_visible(&[], Viewport::new(800, 400), PlotInsets::default());
    assert!(points.is_empty());
}

#[test]
fn projected_points_carry_their_sample() {
    let visible = vec![sample(1000, 5.0), sample(2000, 6.0)];
    let points = project_visible(&visible, Viewport::new(800, 400), PlotInsets::default());

    assert_eq!(points[0].sample, visible[0]);
    assert_eq!(points[1].sample, visible[1]);
}

#[test]
fn projection_stays_finite_for_tiny_viewports() {
    let visible = vec![sample(1, -1.0), sample(2, 1.0)];
    let points = project_visible(&visible, Viewport::new(1, 1), PlotInsets::default());

    for point in &points {
        assert!(point.x.is_finite());
        assert!(point.y.is_finite());
    }
}
