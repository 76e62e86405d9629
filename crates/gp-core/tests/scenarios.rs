//! End-to-end tick scenarios
//!
//! Each test builds a small hand-made map, drives `update` with scripted
//! input and checks the observable outcome.

use glam::Vec2;
use gp_core::entity::{Behavior, ClassType, EquipSlot, Monster, MonsterKind};
use gp_core::projectile::{Projectile, ProjectileKind};
use gp_core::world::{MapId, MapLayout, StaticMap, TileType, WorldGrid};
use gp_core::{
    ActionResult, EntityId, GameRng, GameState, HeldKeys, InputSnapshot, MouseState, ProjectileId,
    Rejection, SimConfig, Simulation, inventory, update,
};

// ============================================================================
// Helpers
// ============================================================================

fn world(grid: WorldGrid, class: ClassType) -> GameState {
    let cfg = SimConfig::default();
    let mut maps = StaticMap(MapLayout::bare(grid));
    GameState::new("Hero", class, MapId::Lorens, &mut maps, &cfg, GameRng::new(1), 0)
}

/// 200x200 dirt field; dirt is never spawnable so the population stays put
fn field(class: ClassType) -> GameState {
    let mut state = world(WorldGrid::filled(200, 200, TileType::Dirt), class);
    state.player.body.pos = Vec2::splat(150.0 * 32.0);
    state
}

fn add_monster(state: &mut GameState, kind: MonsterKind, pos: Vec2) -> usize {
    let m = Monster::spawn(kind, pos, 1.0, 1.5, &mut state.ids, &mut state.rng);
    state.monsters.push(m);
    state.monsters.len() - 1
}

fn press(keys: HeldKeys) -> InputSnapshot {
    InputSnapshot::holding(keys)
}

// ============================================================================
// Combat
// ============================================================================

#[test]
fn test_new_warrior_melee_deals_21() {
    let sim = Simulation::new("Hero", ClassType::Warrior, SimConfig::default(), 5);
    assert_eq!(sim.state().player.stats().hp, 160);
    assert_eq!(sim.state().player.stats().gold, 50);

    let cfg = SimConfig::default();
    let mut state = field(ClassType::Warrior);
    let pos = state.player.body.pos;
    let idx = add_monster(&mut state, MonsterKind::Wolf, pos + Vec2::new(40.0, 0.0));
    state.monsters[idx].body.stats.def = 2;

    let report = update(&mut state, &cfg, 16.0, &press(HeldKeys::ATTACK), 1000);
    assert_eq!(report.damage_dealt, 21);
    assert_eq!(state.monsters[idx].body.stats.hp, 70 - 21);
    assert_eq!(state.monsters[idx].body.hit_at, Some(1000));
}

#[test]
fn test_elf_arrow_flies_to_cursor_and_hits() {
    let cfg = SimConfig::default();
    let mut state = field(ClassType::Elf);
    let pos = state.player.body.pos;
    let idx = add_monster(&mut state, MonsterKind::Goblin, pos + Vec2::new(200.0, 0.0));

    // Screen centre is the player; aim 200px to the right of the player's centre
    let input = InputSnapshot {
        mouse: MouseState {
            pos: Vec2::new(640.0 + 16.0 + 200.0, 360.0 + 16.0),
            clicked: true,
        },
        ..InputSnapshot::default()
    };
    let first = update(&mut state, &cfg, 16.0, &input, 1000);
    assert_eq!(first.projectiles_fired, 1);

    let idle = InputSnapshot::default();
    let mut dealt = 0;
    for tick in 1..=40u64 {
        dealt += update(&mut state, &cfg, 16.0, &idle, 1000 + tick * 16).damage_dealt;
    }
    // Elf atk 20 against goblin def 4
    assert_eq!(dealt, 18);
    assert!(state.projectiles.is_empty());
    assert_eq!(state.monsters[idx].body.stats.hp, 45 - 18);
}

#[test]
fn test_kill_to_level_two() {
    let cfg = SimConfig::default();
    let mut state = field(ClassType::Warrior);
    state.player.stats_mut().exp = 65;
    state.player.stats_mut().hp = 90;
    let pos = state.player.body.pos;
    add_monster(&mut state, MonsterKind::Rat, pos + Vec2::new(20.0, 0.0));

    let report = update(&mut state, &cfg, 16.0, &press(HeldKeys::ATTACK), 500);
    assert_eq!(report.level_ups, 1);
    let s = state.player.stats();
    assert_eq!(s.level, 2);
    assert_eq!(s.exp, 0);
    assert_eq!(s.attribute_points, 5);
    assert_eq!(s.hp, s.max_hp);
    assert_eq!(s.max_hp, 180);
    assert!(state.level_up_visible(&cfg));
    assert!(state.messages.contains("LEVEL UP! Level 2!"));
}

#[test]
fn test_monster_kills_player() {
    let cfg = SimConfig::default();
    let mut state = field(ClassType::Mage);
    state.player.stats_mut().hp = 1;
    let pos = state.player.body.pos;
    add_monster(&mut state, MonsterKind::Orc, pos + Vec2::new(16.0, 0.0));

    let report = update(&mut state, &cfg, 16.0, &InputSnapshot::default(), 2000);
    assert!(report.player_died);
    assert!(state.player.body.is_dead());

    // Nothing the player does registers any more
    let before = state.player.body.pos;
    update(&mut state, &cfg, 16.0, &press(HeldKeys::LEFT | HeldKeys::ATTACK), 2016);
    assert_eq!(state.player.body.pos, before);
    assert!(state.projectiles.is_empty());
}

// ============================================================================
// Movement and AI
// ============================================================================

#[test]
fn test_diagonal_slides_along_wall() {
    let cfg = SimConfig::default();
    let mut grid = WorldGrid::filled(20, 20, TileType::Dirt);
    for y in 0..20 {
        grid.set(6, y, TileType::Wall);
    }
    let mut state = world(grid, ClassType::Warrior);
    // Right inset corner at x=191, one pixel shy of the wall column
    let start = Vec2::new(169.0, 160.0);
    state.player.body.pos = start;

    update(&mut state, &cfg, 16.0, &press(HeldKeys::RIGHT | HeldKeys::DOWN), 16);
    let pos = state.player.body.pos;
    assert_eq!(pos.x, start.x);
    assert!(pos.y > start.y);
}

#[test]
fn test_safe_zone_repulsion_over_tick() {
    let cfg = SimConfig::default();
    let mut state = field(ClassType::Warrior);
    let center = state.grid.center_px(cfg.tile_size);
    let start = center + Vec2::new(100.0, -300.0);
    let idx = add_monster(&mut state, MonsterKind::Goblin, start);
    state.player.body.pos = start;

    update(&mut state, &cfg, 16.0, &InputSnapshot::default(), 16);
    let m = &state.monsters[idx];
    assert!(m.body.pos.distance(center) > start.distance(center));
    assert_eq!(m.behavior, Behavior::Wander);
}

#[test]
fn test_corpse_removed_after_linger() {
    let cfg = SimConfig::default();
    let mut state = field(ClassType::Warrior);
    let pos = state.player.body.pos;
    add_monster(&mut state, MonsterKind::Rat, pos + Vec2::new(20.0, 0.0));
    update(&mut state, &cfg, 16.0, &press(HeldKeys::ATTACK), 1000);
    assert_eq!(state.monsters.len(), 1);
    assert!(state.monsters[0].body.is_dead());

    let idle = InputSnapshot::default();
    update(&mut state, &cfg, 16.0, &idle, 1600);
    assert_eq!(state.monsters.len(), 1);
    update(&mut state, &cfg, 16.0, &idle, 1700);
    assert!(state.monsters.is_empty());
}

// ============================================================================
// Projectiles
// ============================================================================

#[test]
fn test_projectile_lifetime() {
    let cfg = SimConfig::default();
    let mut state = field(ClassType::Elf);
    state.projectiles.push(Projectile {
        id: ProjectileId(9000),
        kind: ProjectileKind::Arrow,
        pos: Vec2::new(10.0, 10.0),
        vel: Vec2::ZERO,
        damage: 1,
        owner: EntityId::PLAYER,
        life: 1200.0,
    });

    let idle = InputSnapshot::default();
    for tick in 1..=11u64 {
        update(&mut state, &cfg, 100.0, &idle, tick * 100);
        assert_eq!(state.projectiles.len(), 1, "gone early at tick {tick}");
    }
    update(&mut state, &cfg, 100.0, &idle, 1200);
    assert!(state.projectiles.is_empty());
}

// ============================================================================
// Shops and inventory
// ============================================================================

#[test]
fn test_shop_purchase_flow() {
    let cfg = SimConfig::default();
    let mut state = field(ClassType::Warrior);
    let hans = state.npcs[0].pos;
    state.player.body.pos = hans + Vec2::new(20.0, 0.0);

    let interact = InputSnapshot {
        interact: true,
        ..InputSnapshot::default()
    };
    let report = update(&mut state, &cfg, 16.0, &interact, 100);
    assert!(report.frozen);
    assert_eq!(state.active_shop, Some(state.npcs[0].id));

    let stock: Vec<_> = state.npcs[0].stock.clone().unwrap_or_default();
    let claymore = stock.iter().find(|i| i.name == "Obsidian Claymore").unwrap();
    let inventory_before = state.player.body.inventory.clone();
    let res = inventory::buy_item(&mut state, claymore.id);
    assert!(matches!(res, ActionResult::Rejected(Rejection::InsufficientGold { .. })));
    assert_eq!(state.player.stats().gold, 50);
    assert_eq!(state.player.body.inventory, inventory_before);
    assert_eq!(
        state.messages.last().map(|m| m.text.as_str()),
        Some("Not enough Gold!")
    );

    state.player.stats_mut().gold = 150;
    let sword = stock.iter().find(|i| i.name == "Steel Sword").unwrap();
    assert!(inventory::buy_item(&mut state, sword.id).is_success());
    assert_eq!(state.player.stats().gold, 50);

    // Frozen until closed
    let report = update(&mut state, &cfg, 16.0, &press(HeldKeys::UP), 200);
    assert!(report.frozen);
    assert!(gp_core::close_shop(&mut state).is_success());
    let report = update(&mut state, &cfg, 16.0, &press(HeldKeys::UP), 216);
    assert!(!report.frozen);
}

#[test]
fn test_bought_sword_round_trip() {
    let cfg = SimConfig::default();
    let mut state = field(ClassType::Warrior);
    state.active_shop = Some(state.npcs[0].id);
    state.player.stats_mut().gold = 1000;
    let axe = state.npcs[0].stock.as_ref().unwrap()[5].id;
    inventory::buy_item(&mut state, axe);
    let owned = state.player.body.inventory.last().unwrap().id;
    let before = state.player.stats().clone();

    assert!(inventory::equip_item(&mut state, &cfg, owned).is_success());
    assert_eq!(state.player.stats().atk, before.atk + 35);
    assert!(inventory::unequip_item(&mut state, &cfg, EquipSlot::Weapon).is_success());
    assert_eq!(state.player.stats(), &before);
    assert!(state.player.body.find_item(owned).is_some());
}

#[test]
fn test_backpack_capacity() {
    let cfg = SimConfig::default();
    let mut state = field(ClassType::Elf);
    assert_eq!(state.hud(&cfg).inventory_capacity, 12);
    let pack = state.player.body.inventory[0].id;
    inventory::equip_item(&mut state, &cfg, pack);
    assert_eq!(state.hud(&cfg).inventory_capacity, 28);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_seed_same_game() {
    let script = [
        press(HeldKeys::UP),
        press(HeldKeys::UP | HeldKeys::LEFT),
        press(HeldKeys::ATTACK),
        InputSnapshot::default(),
    ];
    let run = || {
        let mut sim = Simulation::new("Hero", ClassType::Elf, SimConfig::default(), 77);
        for tick in 1..=400u64 {
            let input = script[(tick as usize / 50) % script.len()];
            sim.tick(16.0, &input, tick * 16);
        }
        sim.into_state()
    };
    let (a, b) = (run(), run());
    assert!(!a.monsters.is_empty());
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
