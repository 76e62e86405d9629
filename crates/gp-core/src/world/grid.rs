//! World grid and collision
//!
//! The grid is produced once per map and never changes afterwards; doors
//! and furniture layered on top through [`InteractiveObject`] decide the rest
//! of the collision picture.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{InteractiveObject, TileType};
use crate::SimConfig;

/// Static tile matrix for the active map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldGrid {
    width: usize,
    height: usize,
    tiles: Vec<TileType>,
}

impl WorldGrid {
    /// Grid of the given size filled with one tile
    pub fn filled(width: usize, height: usize, tile: TileType) -> Self {
        Self {
            width,
            height,
            tiles: vec![tile; width * height],
        }
    }

    /// Build from row-major raw tile codes (one inner vec per row)
    ///
    /// Short rows are padded with the default tile; unknown codes decode to it.
    pub fn from_codes(rows: &[Vec<u8>]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut grid = Self::filled(width, height, TileType::default());
        for (y, row) in rows.iter().enumerate() {
            for (x, code) in row.iter().enumerate() {
                grid.set(x, y, TileType::from_repr(*code).unwrap_or_default());
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a tile coordinate is inside the grid
    pub fn in_bounds(&self, tx: i32, ty: i32) -> bool {
        tx >= 0 && ty >= 0 && (tx as usize) < self.width && (ty as usize) < self.height
    }

    /// Tile at a tile coordinate, `None` outside the grid
    pub fn get(&self, tx: i32, ty: i32) -> Option<TileType> {
        if self.in_bounds(tx, ty) {
            Some(self.tiles[ty as usize * self.width + tx as usize])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: usize, y: usize, tile: TileType) {
        if x < self.width && y < self.height {
            self.tiles[y * self.width + x] = tile;
        }
    }

    /// Fill an inclusive-exclusive rectangle
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, tile: TileType) {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                self.set(x, y, tile);
            }
        }
    }

    /// Centre of the map in tile units
    pub fn center_tile(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Centre of the map in pixels
    pub fn center_px(&self, tile_size: f32) -> Vec2 {
        self.center_tile() * tile_size
    }

    /// Tile coordinate containing a pixel position
    pub fn tile_of(pos: Vec2, tile_size: f32) -> (i32, i32) {
        (
            (pos.x / tile_size).floor() as i32,
            (pos.y / tile_size).floor() as i32,
        )
    }

    /// Row-major codes, for handing the grid to a renderer
    pub fn codes(&self) -> Vec<Vec<u8>> {
        self.tiles
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(TileType::code).collect())
            .collect()
    }
}

/// Check whether an entity box with its top-left corner at `pos` overlaps a
/// solid tile
///
/// Samples the four corners of the box inset by the collision buffer. Any
/// corner that lands out of bounds, on blocking terrain, or on a solid
/// interactive object blocks the whole box.
pub fn is_blocked(
    pos: Vec2,
    grid: &WorldGrid,
    objects: &[InteractiveObject],
    config: &SimConfig,
) -> bool {
    let size = config.tile_size;
    let buf = config.collision_buffer;
    let corners = [
        Vec2::new(pos.x + buf, pos.y + buf),
        Vec2::new(pos.x + size - buf, pos.y + buf),
        Vec2::new(pos.x + buf, pos.y + size - buf),
        Vec2::new(pos.x + size - buf, pos.y + size - buf),
    ];

    corners.iter().any(|corner| {
        let (tx, ty) = WorldGrid::tile_of(*corner, size);
        match grid.get(tx, ty) {
            None => true,
            Some(tile) if tile.is_blocking() => true,
            Some(_) => objects
                .iter()
                .any(|obj| obj.tile == (tx, ty) && obj.is_solid()),
        }
    })
}

/// Apply a movement delta one axis at a time
///
/// X is tried first from the current position, then Y from wherever X left
/// the entity, so a wall on one axis doesn't cancel the other.
pub fn slide(
    pos: Vec2,
    delta: Vec2,
    grid: &WorldGrid,
    objects: &[InteractiveObject],
    config: &SimConfig,
) -> Vec2 {
    let mut out = pos;
    if delta.x != 0.0 {
        let try_x = Vec2::new(out.x + delta.x, out.y);
        if !is_blocked(try_x, grid, objects, config) {
            out = try_x;
        }
    }
    if delta.y != 0.0 {
        let try_y = Vec2::new(out.x, out.y + delta.y);
        if !is_blocked(try_y, grid, objects, config) {
            out = try_y;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ObjectId;
    use crate::world::ObjectKind;

    fn open_grid() -> WorldGrid {
        WorldGrid::filled(10, 10, TileType::Grass)
    }

    #[test]
    fn test_open_ground_is_clear() {
        let cfg = SimConfig::default();
        assert!(!is_blocked(Vec2::new(64.0, 64.0), &open_grid(), &[], &cfg));
    }

    #[test]
    fn test_out_of_bounds_blocks() {
        let cfg = SimConfig::default();
        let grid = open_grid();
        assert!(is_blocked(Vec2::new(-20.0, 64.0), &grid, &[], &cfg));
        assert!(is_blocked(Vec2::new(64.0, 300.0), &grid, &[], &cfg));
    }

    #[test]
    fn test_buffer_allows_edge_overlap() {
        let cfg = SimConfig::default();
        let mut grid = open_grid();
        grid.set(3, 2, TileType::Wall);
        // Box spans x 70..102; the wall starts at 96 but the inset corner is at 92
        assert!(!is_blocked(Vec2::new(70.0, 64.0), &grid, &[], &cfg));
        // Inset corner at 96 lands on the wall
        assert!(is_blocked(Vec2::new(74.0, 64.0), &grid, &[], &cfg));
    }

    #[test]
    fn test_closed_door_blocks_open_door_does_not() {
        let cfg = SimConfig::default();
        let grid = open_grid();
        let mut door = InteractiveObject::new(ObjectId(1), (2, 2), ObjectKind::Door, None);
        assert!(is_blocked(Vec2::new(64.0, 64.0), &grid, &[door.clone()], &cfg));
        door.open = true;
        assert!(!is_blocked(Vec2::new(64.0, 64.0), &grid, &[door], &cfg));
    }

    #[test]
    fn test_furniture_always_blocks() {
        let cfg = SimConfig::default();
        let grid = open_grid();
        for kind in [ObjectKind::Bed, ObjectKind::Chest, ObjectKind::Stall] {
            let obj = InteractiveObject::new(ObjectId(1), (2, 2), kind, None);
            assert!(is_blocked(Vec2::new(64.0, 64.0), &grid, &[obj], &cfg));
        }
        let fountain = InteractiveObject::new(ObjectId(2), (2, 2), ObjectKind::Fountain, None);
        assert!(!is_blocked(Vec2::new(64.0, 64.0), &grid, &[fountain], &cfg));
    }

    #[test]
    fn test_slide_along_wall() {
        let cfg = SimConfig::default();
        let mut grid = open_grid();
        // Wall column to the right of the entity
        for y in 0..10 {
            grid.set(4, y, TileType::Wall);
        }
        let start = Vec2::new(105.0, 96.0);
        let end = slide(start, Vec2::new(3.0, 3.0), &grid, &[], &cfg);
        assert_eq!(end.x, start.x);
        assert_eq!(end.y, start.y + 3.0);
    }

    #[test]
    fn test_fill_rect_clips_to_grid() {
        let mut grid = open_grid();
        grid.fill_rect(8, 1, 20, 3, TileType::Wall);
        assert_eq!(grid.get(8, 1), Some(TileType::Wall));
        assert_eq!(grid.get(9, 2), Some(TileType::Wall));
        assert_eq!(grid.get(9, 3), Some(TileType::Grass));
        assert_eq!(grid.get(7, 1), Some(TileType::Grass));
    }

    #[test]
    fn test_from_codes_pads_and_decodes() {
        let grid = WorldGrid::from_codes(&[vec![0, 6, 3], vec![99]]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(1, 0), Some(TileType::Wall));
        assert_eq!(grid.get(0, 1), Some(TileType::Grass));
        assert_eq!(grid.get(2, 1), Some(TileType::Grass));
        assert_eq!(grid.codes()[0], vec![0, 6, 3]);
    }
}
