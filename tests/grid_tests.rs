//! Grid conversion and command parsing tests

use theme_park::game::{parse_moves, parse_placement, Command, Grid, GridPos, RideKind};

fn standard_grid() -> Grid {
    Grid::new(40.0, 800.0, 600.0)
}

#[test]
fn test_grid_dimensions() {
    let grid = standard_grid();
    assert_eq!(grid.cols(), 20);
    assert_eq!(grid.rows(), 15);
}

#[test]
fn test_pixel_to_cell_floor_division() {
    let grid = standard_grid();
    assert_eq!(grid.cell_at_pixel(0.0, 0.0), GridPos::new(0, 0));
    assert_eq!(grid.cell_at_pixel(39.9, 39.9), GridPos::new(0, 0));
    assert_eq!(grid.cell_at_pixel(40.0, 40.0), GridPos::new(1, 1));
    assert_eq!(grid.cell_at_pixel(85.0, 130.0), GridPos::new(2, 3));
}

#[test]
fn test_cell_to_pixel_origin() {
    let grid = standard_grid();
    assert_eq!(grid.cell_origin(GridPos::new(0, 0)), (0.0, 0.0));
    assert_eq!(grid.cell_origin(GridPos::new(3, 2)), (120.0, 80.0));
    assert_eq!(grid.cell_center(GridPos::new(3, 2)), (140.0, 100.0));
}

#[test]
fn test_conversions_round_trip() {
    let grid = standard_grid();
    for x in 0..grid.cols() {
        for y in 0..grid.rows() {
            let cell = GridPos::new(x, y);
            let (px, py) = grid.cell_origin(cell);
            assert_eq!(grid.cell_at_pixel(px, py), cell);
            let (cx, cy) = grid.cell_center(cell);
            assert_eq!(grid.cell_at_pixel(cx, cy), cell);
        }
    }
}

#[test]
fn test_bounds_checks() {
    let grid = standard_grid();
    assert!(grid.contains(GridPos::new(0, 0)));
    assert!(grid.contains(GridPos::new(19, 14)));
    assert!(!grid.contains(GridPos::new(20, 14)));
    assert!(!grid.contains(GridPos::new(19, 15)));
    assert!(!grid.contains(GridPos::new(-1, 0)));
    assert!(!grid.contains(GridPos::new(0, -1)));
}

#[test]
fn test_parse_moves() {
    let commands = parse_moves("RRDU").expect("valid script");
    assert_eq!(
        commands,
        vec![
            Command::Move { dx: 1, dy: 0 },
            Command::Move { dx: 1, dy: 0 },
            Command::Move { dx: 0, dy: 1 },
            Command::Move { dx: 0, dy: -1 },
        ]
    );
}

#[test]
fn test_parse_moves_case_and_whitespace() {
    let commands = parse_moves("r l\n u d").expect("valid script");
    assert_eq!(commands.len(), 4);
    assert_eq!(commands[0], Command::Move { dx: 1, dy: 0 });
    assert_eq!(commands[1], Command::Move { dx: -1, dy: 0 });
}

#[test]
fn test_parse_moves_rejects_unknown_characters() {
    assert!(parse_moves("RRX").is_err());
}

#[test]
fn test_parse_placement() {
    let (kind, cell) = parse_placement("carousel:3,3").expect("valid spec");
    assert_eq!(kind, RideKind::Carousel);
    assert_eq!(cell, GridPos::new(3, 3));

    let (kind, cell) = parse_placement("ferris-wheel:0,10").expect("valid spec");
    assert_eq!(kind, RideKind::FerrisWheel);
    assert_eq!(cell, GridPos::new(0, 10));
}

#[test]
fn test_parse_placement_rejects_bad_input() {
    assert!(parse_placement("carousel").is_err());
    assert!(parse_placement("teacups:1,1").is_err());
    assert!(parse_placement("carousel:1").is_err());
    assert!(parse_placement("carousel:a,b").is_err());
}

#[test]
fn test_ride_kind_names_and_parsing() {
    for kind in RideKind::ALL {
        let spelled = kind.display_name().to_lowercase().replace(' ', "-");
        assert_eq!(RideKind::parse(&spelled), Some(kind));
    }
    assert_eq!(RideKind::parse("Carousel"), Some(RideKind::Carousel));
    assert_eq!(RideKind::parse("log-flume"), None);
}
