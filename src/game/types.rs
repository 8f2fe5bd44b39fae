//! Core types for the theme park game
//!
//! These are standalone types that don't depend on Bevy.

/// Side length of one grid cell in pixels
pub const CELL_SIZE: f32 = 40.0;

/// Pixel dimensions of the play surface
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

/// Rendered size of the player sprite in pixels
pub const PLAYER_SIZE: f32 = 30.0;

/// Score awarded for collecting an item
pub const ITEM_REWARD: u32 = 10;

/// A unique identifier for placed rides
/// This is a simple wrapper around a usize for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RideId(pub usize);

/// An RGB color triple, resolved to engine colors by the UI layer
pub type Rgb = (f32, f32, f32);

pub const COLOR_PLAYER: Rgb = (0.0, 0.0, 1.0);
pub const COLOR_ITEM: Rgb = (1.0, 0.84, 0.0);
pub const COLOR_OBSTACLE: Rgb = (0.65, 0.16, 0.16);
pub const COLOR_VISITOR: Rgb = (0.0, 0.5, 0.0);

/// The kind of a placeable ride attraction
///
/// Each kind has a fixed visual; drawing dispatches on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RideKind {
    FerrisWheel,
    Carousel,
    RollerCoaster,
}

impl RideKind {
    /// All ride kinds, in toolbar order
    pub const ALL: [RideKind; 3] = [
        RideKind::FerrisWheel,
        RideKind::Carousel,
        RideKind::RollerCoaster,
    ];

    /// Human-readable name used in notifications and the toolbar
    pub fn display_name(self) -> &'static str {
        match self {
            RideKind::FerrisWheel => "Ferris Wheel",
            RideKind::Carousel => "Carousel",
            RideKind::RollerCoaster => "Roller Coaster",
        }
    }

    /// Parse a kind from a CLI/identifier spelling
    pub fn parse(s: &str) -> Option<RideKind> {
        match s.to_ascii_lowercase().as_str() {
            "ferris-wheel" | "ferris_wheel" | "ferriswheel" => Some(RideKind::FerrisWheel),
            "carousel" => Some(RideKind::Carousel),
            "roller-coaster" | "roller_coaster" | "rollercoaster" => Some(RideKind::RollerCoaster),
            _ => None,
        }
    }
}

/// An integer cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one cardinal step away
    pub fn offset(&self, dx: i32, dy: i32) -> GridPos {
        GridPos::new(self.x + dx, self.y + dy)
    }
}
