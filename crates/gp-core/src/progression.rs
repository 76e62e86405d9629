//! Experience, levels and attribute points

use crate::config::SimConfig;
use crate::entity::Attribute;
use crate::error::{ActionResult, Rejection};
use crate::gameloop::GameState;
use crate::message::MessageKind;

/// Experience needed to leave `level`: `floor(50 * level * 1.4)`
pub const fn exp_to_next(level: i32) -> i32 {
    50 * level * 14 / 10
}

/// Apply at most one level-up if the player has enough experience
///
/// Excess experience carries over; a second threshold crossed by the same
/// gain waits for the next check. A dead player keeps the experience but
/// doesn't level.
pub fn check_level_up(state: &mut GameState, config: &SimConfig) -> bool {
    let needed = exp_to_next(state.player.stats().level);
    if state.player.body.is_dead() || state.player.stats().exp < needed {
        return false;
    }

    let stats = state.player.stats_mut();
    stats.level += 1;
    stats.exp -= needed;
    stats.attribute_points += config.level_up_attribute_points;
    let level = stats.level;

    state.player.recompute_stats(config.level_up_max_hp);
    let stats = state.player.stats_mut();
    stats.hp = stats.max_hp;

    state.level_up_at = Some(state.clock);
    tracing::info!(level, "level up");
    state.log(format!("LEVEL UP! Level {level}!"), MessageKind::Level);
    true
}

/// Spend one attribute point
///
/// Any max hp or max mana the point adds is also granted to current hp or
/// mana.
pub fn allocate_attribute(
    state: &mut GameState,
    config: &SimConfig,
    attr: Attribute,
) -> ActionResult {
    if state.player.body.is_dead() {
        return Rejection::PlayerDead.into();
    }
    if state.player.stats().attribute_points <= 0 {
        return Rejection::NoAttributePoints.into();
    }

    let (old_hp, old_mana) = (state.player.stats().max_hp, state.player.stats().max_mana);
    let stats = state.player.stats_mut();
    stats.attribute_points -= 1;
    stats.attributes.increment(attr);
    state.player.recompute_stats(config.level_up_max_hp);

    let stats = state.player.stats_mut();
    stats.heal(stats.max_hp - old_hp);
    stats.restore_mana(stats.max_mana - old_mana);
    tracing::debug!(attribute = %attr, "attribute allocated");
    ActionResult::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ClassType;
    use crate::test_support::arena;

    #[test]
    fn test_thresholds() {
        assert_eq!(exp_to_next(1), 70);
        assert_eq!(exp_to_next(2), 140);
        assert_eq!(exp_to_next(7), 490);
    }

    #[test]
    fn test_exactly_one_level() {
        let cfg = SimConfig::default();
        let mut state = arena(ClassType::Warrior);
        state.clock = 4321;
        state.player.stats_mut().hp = 10;
        state.player.stats_mut().exp = 70;

        assert!(check_level_up(&mut state, &cfg));
        let s = state.player.stats();
        assert_eq!(s.level, 2);
        assert_eq!(s.exp, 0);
        assert_eq!(s.attribute_points, 5);
        assert_eq!(s.max_hp, 180);
        assert_eq!(s.hp, 180);
        assert_eq!(state.level_up_at, Some(4321));
        assert!(state.messages.contains("LEVEL UP! Level 2!"));
        assert!(!check_level_up(&mut state, &cfg));
    }

    #[test]
    fn test_one_level_per_check() {
        let cfg = SimConfig::default();
        let mut state = arena(ClassType::Elf);
        state.player.stats_mut().exp = 70 + 140 + 5;
        assert!(check_level_up(&mut state, &cfg));
        assert_eq!(state.player.stats().level, 2);
        assert_eq!(state.player.stats().exp, 145);
        assert!(check_level_up(&mut state, &cfg));
        assert_eq!(state.player.stats().level, 3);
        assert_eq!(state.player.stats().exp, 5);
    }

    #[test]
    fn test_corpse_does_not_level() {
        let cfg = SimConfig::default();
        let mut state = arena(ClassType::Elf);
        state.player.stats_mut().hp = 0;
        state.player.body.died_at = Some(10);
        state.player.stats_mut().exp = 500;
        assert!(!check_level_up(&mut state, &cfg));
        assert_eq!(state.player.stats().level, 1);
        assert_eq!(state.player.stats().hp, 0);
        assert_eq!(state.player.stats().exp, 500);
    }

    #[test]
    fn test_allocate_without_points() {
        let cfg = SimConfig::default();
        let mut state = arena(ClassType::Warrior);
        let before = state.player.stats().clone();
        let res = allocate_attribute(&mut state, &cfg, Attribute::Strength);
        assert_eq!(res, ActionResult::Rejected(Rejection::NoAttributePoints));
        assert_eq!(state.player.stats(), &before);
        assert!(!state.messages.iter().any(|m| m.text.contains("attribute")));
    }

    #[test]
    fn test_allocate_bonuses() {
        let cfg = SimConfig::default();
        let mut state = arena(ClassType::Warrior);
        state.player.stats_mut().attribute_points = 3;

        assert!(allocate_attribute(&mut state, &cfg, Attribute::Strength).is_success());
        assert_eq!(state.player.stats().atk, 24);

        assert!(allocate_attribute(&mut state, &cfg, Attribute::Health).is_success());
        assert_eq!(state.player.stats().max_hp, 180);
        assert_eq!(state.player.stats().hp, 180);

        assert!(allocate_attribute(&mut state, &cfg, Attribute::Agility).is_success());
        let s = state.player.stats();
        assert_eq!(s.def, 13);
        assert!((s.speed - 3.55).abs() < 1e-5);
        assert_eq!(s.attribute_points, 0);
    }

    #[test]
    fn test_magic_raises_mana() {
        let cfg = SimConfig::default();
        let mut state = arena(ClassType::Mage);
        state.player.stats_mut().attribute_points = 1;
        state.player.stats_mut().mana = 100;
        allocate_attribute(&mut state, &cfg, Attribute::Magic);
        assert_eq!(state.player.stats().max_mana, 160);
        assert_eq!(state.player.stats().mana, 110);
    }
}
