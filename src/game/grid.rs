//! Grid model: pixel space vs. cell space
//!
//! The play surface is a uniform square tiling. All conversion here is
//! plain coordinate arithmetic with no side effects.

use super::types::GridPos;

/// The fixed-size grid the game is played on
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    /// Side length of one cell in pixels
    pub cell_size: f32,
    /// Surface width in pixels
    pub width: f32,
    /// Surface height in pixels
    pub height: f32,
}

impl Grid {
    pub fn new(cell_size: f32, width: f32, height: f32) -> Self {
        Self {
            cell_size,
            width,
            height,
        }
    }

    /// Number of whole cells across the surface
    pub fn cols(&self) -> i32 {
        (self.width / self.cell_size) as i32
    }

    /// Number of whole cells down the surface
    pub fn rows(&self) -> i32 {
        (self.height / self.cell_size) as i32
    }

    /// Whether a cell lies within the playable area
    pub fn contains(&self, cell: GridPos) -> bool {
        cell.x >= 0 && cell.x < self.cols() && cell.y >= 0 && cell.y < self.rows()
    }

    /// The cell under a pixel coordinate (floor division)
    pub fn cell_at_pixel(&self, px: f32, py: f32) -> GridPos {
        GridPos::new(
            (px / self.cell_size).floor() as i32,
            (py / self.cell_size).floor() as i32,
        )
    }

    /// Pixel origin (top-left corner) of a cell
    pub fn cell_origin(&self, cell: GridPos) -> (f32, f32) {
        (
            cell.x as f32 * self.cell_size,
            cell.y as f32 * self.cell_size,
        )
    }

    /// Pixel center of a cell
    pub fn cell_center(&self, cell: GridPos) -> (f32, f32) {
        let (ox, oy) = self.cell_origin(cell);
        (ox + self.cell_size / 2.0, oy + self.cell_size / 2.0)
    }
}
