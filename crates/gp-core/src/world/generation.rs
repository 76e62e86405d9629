//! Reference map generators
//!
//! The core only needs a [`MapLayout`] per map id; anything implementing
//! [`MapSource`] can supply one. [`StandardMaps`] builds the two stock maps.

use serde::{Deserialize, Serialize};

use super::{House, InteractiveObject, MapId, ObjectKind, TileType, WorldGrid};
use crate::consts::{HOUSE_PRICE, MAP_SIZE};
use crate::ids::IdGenerator;
use crate::rng::GameRng;

/// Static content of one map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayout {
    pub grid: WorldGrid,
    pub objects: Vec<InteractiveObject>,
    pub houses: Vec<House>,
}

impl MapLayout {
    /// Layout with terrain only
    pub fn bare(grid: WorldGrid) -> Self {
        Self {
            grid,
            objects: Vec::new(),
            houses: Vec::new(),
        }
    }
}

/// Supplies the static layout for a map id at load time
pub trait MapSource {
    fn generate(&mut self, map: MapId, ids: &mut IdGenerator, rng: &mut GameRng) -> MapLayout;
}

/// Hands out one fixed layout regardless of map id
#[derive(Debug, Clone)]
pub struct StaticMap(pub MapLayout);

impl MapSource for StaticMap {
    fn generate(&mut self, _map: MapId, _ids: &mut IdGenerator, _rng: &mut GameRng) -> MapLayout {
        self.0.clone()
    }
}

/// Generator for the stock maps
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMaps;

impl MapSource for StandardMaps {
    fn generate(&mut self, map: MapId, ids: &mut IdGenerator, rng: &mut GameRng) -> MapLayout {
        let layout = match map {
            MapId::Lorens => lorens(ids),
            MapId::Caverns => caverns(rng),
        };
        tracing::debug!(
            map = %map,
            objects = layout.objects.len(),
            houses = layout.houses.len(),
            "generated map"
        );
        layout
    }
}

const CITY_WALL_RADIUS: f32 = 42.0;
const CITY_PAVED_RADIUS: f32 = 40.0;

fn dist(x: usize, y: usize, cx: f32, cy: f32) -> f32 {
    ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt()
}

fn liquid_border(grid: &mut WorldGrid, liquid: TileType) {
    let (w, h) = (grid.width(), grid.height());
    for x in 0..w {
        grid.set(x, 0, liquid);
        grid.set(x, h - 1, liquid);
    }
    for y in 0..h {
        grid.set(0, y, liquid);
        grid.set(w - 1, y, liquid);
    }
}

/// Walled city in a grass wilderness
fn lorens(ids: &mut IdGenerator) -> MapLayout {
    let def = MapId::Lorens.definition();
    let mut grid = WorldGrid::filled(MAP_SIZE, MAP_SIZE, def.base_tile);
    let mut objects = Vec::new();
    let mut houses = Vec::new();
    let c = (MAP_SIZE / 2) as i32;
    let (cx, cy) = (c as f32, c as f32);

    // Paved city
    for y in 0..MAP_SIZE {
        for x in 0..MAP_SIZE {
            if dist(x, y, cx, cy) < CITY_PAVED_RADIUS {
                grid.set(x, y, def.secondary_tile);
            }
        }
    }

    objects.push(InteractiveObject::new(
        ids.object(),
        (c, c),
        ObjectKind::Fountain,
        None,
    ));

    // Wall ring with four gates
    for y in 0..MAP_SIZE {
        for x in 0..MAP_SIZE {
            let d = dist(x, y, cx, cy);
            if (d - CITY_WALL_RADIUS).abs() < 1.5 {
                let (dx, dy) = ((x as f32 - cx).abs(), (y as f32 - cy).abs());
                let gate = (dx < 4.0 && dy > 35.0) || (dy < 4.0 && dx > 35.0);
                if !gate {
                    grid.set(x, y, TileType::Wall);
                }
            }
        }
    }

    // Market north of the fountain
    for (dx, dy) in [(-6, -10), (0, -10), (6, -10), (-6, -14), (0, -14), (6, -14)] {
        objects.push(InteractiveObject::new(
            ids.object(),
            (c + dx, c + dy),
            ObjectKind::Stall,
            None,
        ));
    }

    // Twelve houses: west, east and south quarters
    let plots = [
        (-35, -15), (-35, -5), (-35, 5), (-35, 15),
        (25, -15), (25, -5), (25, 5), (25, 15),
        (-15, 25), (-5, 25), (5, 25), (15, 25),
    ];
    let (w, h) = (8usize, 6usize);
    for (ox, oy) in plots {
        let (x, y) = (c + ox, c + oy);
        let house_id = ids.house();
        let door = (x + 4, y + h as i32 - 1);
        houses.push(House::new(house_id, HOUSE_PRICE, door));

        let (ux, uy) = (x as usize, y as usize);
        grid.fill_rect(ux, uy, ux + w, uy + h, TileType::Wall);
        grid.fill_rect(ux + 1, uy + 1, ux + w - 1, uy + h - 1, TileType::FloorWood);
        grid.set(door.0 as usize, door.1 as usize, TileType::FloorWood);
        objects.push(InteractiveObject::new(
            ids.object(),
            door,
            ObjectKind::Door,
            Some(house_id),
        ));
        objects.push(InteractiveObject::new(ids.object(), (x + 1, y + 1), ObjectKind::Bed, None));
        objects.push(InteractiveObject::new(
            ids.object(),
            (x + w as i32 - 2, y + 1),
            ObjectKind::Chest,
            None,
        ));
    }

    // Lakes and forest outside the walls
    for y in 0..MAP_SIZE {
        for x in 0..MAP_SIZE {
            if dist(x, y, cx, cy) > CITY_WALL_RADIUS + 5.0 {
                let (fx, fy) = (x as f32, y as f32);
                let lake = (fx / 6.0).sin() * (fy / 6.0).cos();
                let forest = (fx / 4.0).sin() * (fy / 4.0).cos();
                if lake > 0.75 {
                    grid.set(x, y, def.liquid_tile);
                } else if forest > 0.6 {
                    grid.set(x, y, def.obstacle_tile);
                }
            }
        }
    }

    liquid_border(&mut grid, def.liquid_tile);
    MapLayout {
        grid,
        objects,
        houses,
    }
}

/// Noise field of floor, wall and lava
fn caverns(rng: &mut GameRng) -> MapLayout {
    let def = MapId::Caverns.definition();
    let mut grid = WorldGrid::filled(MAP_SIZE, MAP_SIZE, def.base_tile);
    let c = MAP_SIZE as f32 / 2.0;

    for y in 0..MAP_SIZE {
        for x in 0..MAP_SIZE {
            let noise = (x as f32 / 6.0).sin() * (y as f32 / 6.0).cos() + rng.unit() * 0.3;
            let tile = if noise > 0.7 {
                def.obstacle_tile
            } else if noise < -0.7 {
                def.liquid_tile
            } else {
                def.base_tile
            };
            grid.set(x, y, tile);
        }
    }

    // Keep the arrival point walkable
    for y in 0..MAP_SIZE {
        for x in 0..MAP_SIZE {
            if dist(x, y, c, c) < 6.0 {
                grid.set(x, y, def.base_tile);
            }
        }
    }

    liquid_border(&mut grid, def.liquid_tile);
    MapLayout::bare(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lorens_layout() {
        let mut ids = IdGenerator::new();
        let mut rng = GameRng::new(1);
        let layout = StandardMaps.generate(MapId::Lorens, &mut ids, &mut rng);
        assert_eq!(layout.houses.len(), 12);
        // fountain + 6 stalls + 12 * (door, bed, chest)
        assert_eq!(layout.objects.len(), 1 + 6 + 36);
        for house in &layout.houses {
            assert!(!house.is_owned());
            assert_eq!(house.price, HOUSE_PRICE);
            let door = layout
                .objects
                .iter()
                .find(|o| o.house == Some(house.id))
                .unwrap();
            assert_eq!(door.tile, house.door);
            assert_eq!(door.kind, ObjectKind::Door);
            assert!(!door.open);
        }
        let c = (MAP_SIZE / 2) as i32;
        assert_eq!(layout.grid.get(c, c), Some(TileType::Stone));
        assert_eq!(layout.grid.get(0, 0), Some(TileType::Water));
    }

    #[test]
    fn test_lorens_start_tile_is_walkable() {
        let mut ids = IdGenerator::new();
        let mut rng = GameRng::new(1);
        let layout = StandardMaps.generate(MapId::Lorens, &mut ids, &mut rng);
        let s = (MAP_SIZE / 2 + 3) as i32;
        assert!(!layout.grid.get(s, s).unwrap().is_blocking());
    }

    #[test]
    fn test_caverns_deterministic_per_seed() {
        let mut ids = IdGenerator::new();
        let a = StandardMaps.generate(MapId::Caverns, &mut ids, &mut GameRng::new(9));
        let b = StandardMaps.generate(MapId::Caverns, &mut ids, &mut GameRng::new(9));
        assert_eq!(a.grid, b.grid);
        assert!(a.houses.is_empty());
        let c = (MAP_SIZE / 2) as i32;
        assert_eq!(a.grid.get(c + 3, c + 3), Some(TileType::FloorDark));
    }
}
