use oscillo_rs::lod::{GridLod, GridStyle};

#[test]
fn double_up_then_double_down_round_trips_below_starting_spacing() {
    let mut grid = GridLod::new(968).expect("valid grid");
    grid.double_down();
    assert_eq!(grid.spacing(), 24);

    grid.double_up();
    grid.double_down();
    assert_eq!(grid.spacing(), 24);
}

#[test]
fn clamp_above_starting_spacing_is_lossy_by_design() {
    let mut grid = GridLod::new(968).expect("valid grid");
    grid.double_up();
    assert_eq!(grid.spacing(), 96);

    // Round trip does not restore 96: the clamp pulls back to home density.
    grid.double_down();
    assert_eq!(grid.spacing(), 48);
    grid.double_up();
    assert_eq!(grid.spacing(), 96);
}

#[test]
fn repeated_double_down_never_drops_spacing_below_one() {
    let mut grid = GridLod::new(40).expect("valid grid");
    for _ in 0..10 {
        grid.double_down();
        assert!(grid.spacing() >= 1);
    }
    assert_eq!(grid.spacing(), 1);
    assert!(grid.minimum_reached());
}

#[test]
fn rebuild_replaces_rather_than_accumulates_geometry() {
    let mut grid = GridLod::new(968).expect("valid grid");
    let dense = grid.build(GridStyle::default());

    grid.double_up();
    let coarse = grid.build(GridStyle::default());

    // Doubling spacing halves the line count; each batch stands alone.
    assert_eq!(dense.lines.len(), 40);
    assert_eq!(coarse.lines.len(), 20);
}

#[test]
fn grid_lines_span_zero_to_length_on_the_perpendicular_axis() {
    let grid = GridLod::new(100).expect("valid grid");
    let geometry = grid.build(GridStyle::default());

    for line in &geometry.lines {
        let horizontal = line.start.y == line.end.y;
        if horizontal {
            assert_eq!(line.start.x, 0.0);
            assert_eq!(line.end.x, 100.0);
            assert!(line.start.y > 0.0 && line.start.y < 100.0);
        } else {
            assert_eq!(line.start.y, 0.0);
            assert_eq!(line.end.y, 100.0);
            assert!(line.start.x > 0.0 && line.start.x < 100.0);
        }
    }
}

#[test]
fn zero_length_grid_is_rejected() {
    assert!(GridLod::new(0).is_err());
}
