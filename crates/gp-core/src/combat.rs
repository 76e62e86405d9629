//! Damage resolution, player attacks and damage callouts

use glam::Vec2;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::config::SimConfig;
use crate::entity::AttackStyle;
use crate::gameloop::{GameState, TickReport};
use crate::ids::{EntityId, TextId};
use crate::message::MessageKind;
use crate::progression;
use crate::projectile::{Projectile, ProjectileKind};

/// Damage after defense: `raw - floor(def / 2)`, never below 1
pub fn damage_against(raw_attack: i32, defense: i32) -> i32 {
    raw_attack.saturating_sub(defense.div_euclid(2)).max(1)
}

/// Who is being hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Player,
    /// Index into `GameState::monsters`
    Monster(usize),
}

/// Callout colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum TextTone {
    /// Damage the player took
    Hurt,
    /// Damage the player dealt
    Dealt,
}

impl TextTone {
    pub const fn color(&self) -> &'static str {
        match self {
            TextTone::Hurt => "#ff4d6d",
            TextTone::Dealt => "#f8f9fa",
        }
    }
}

/// Rising number shown where a hit landed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingText {
    pub id: TextId,
    pub text: String,
    pub pos: Vec2,
    pub tone: TextTone,
    /// Remaining display time in ms
    pub life: f32,
}

/// Drift callouts upward and drop the expired ones
pub fn advance_floating_texts(texts: &mut Vec<FloatingText>, config: &SimConfig, dt: f32) {
    let rise = config.floating_text_rise * SimConfig::frame_ratio(dt);
    texts.retain_mut(|ft| {
        ft.pos.y -= rise;
        ft.life -= dt;
        ft.life > 0.0
    });
}

/// Hit `target` for `raw_attack` and resolve a kill
///
/// Returns the damage dealt, or 0 if the target is missing or already dead.
pub fn apply_damage(
    state: &mut GameState,
    target: Target,
    raw_attack: i32,
    config: &SimConfig,
    report: &mut TickReport,
) -> i32 {
    let now = state.clock;
    let body = match target {
        Target::Player => &mut state.player.body,
        Target::Monster(idx) => match state.monsters.get_mut(idx) {
            Some(m) => &mut m.body,
            None => return 0,
        },
    };
    if body.is_dead() {
        return 0;
    }

    let damage = damage_against(raw_attack, body.stats.def);
    body.stats.lose_hp(damage);
    body.hit_at = Some(now);
    let anchor = body.pos + Vec2::new(config.tile_size / 2.0, 0.0);
    let killed = !body.stats.is_alive();
    if killed {
        body.died_at = Some(now);
    }

    let tone = match target {
        Target::Player => TextTone::Hurt,
        Target::Monster(_) => TextTone::Dealt,
    };
    let text = FloatingText {
        id: state.ids.text(),
        text: damage.to_string(),
        pos: anchor,
        tone,
        life: config.floating_text_life,
    };
    state.floating_texts.push(text);

    match target {
        Target::Player => {
            report.damage_taken += damage;
            if killed {
                report.player_died = true;
                tracing::info!(at = now, "player died");
                state.log("You have fallen!", MessageKind::Combat);
            }
        }
        Target::Monster(idx) => {
            report.damage_dealt += damage;
            if killed {
                reward_kill(state, idx, config, report);
            }
        }
    }
    damage
}

fn reward_kill(state: &mut GameState, idx: usize, config: &SimConfig, report: &mut TickReport) {
    let Some(monster) = state.monsters.get(idx) else {
        return;
    };
    let (kind, name, exp, gold) = (
        monster.kind,
        monster.body.name.clone(),
        monster.exp_reward,
        monster.gold_reward,
    );

    let stats = state.player.stats_mut();
    stats.exp += exp;
    stats.gold += gold;
    report.kills.push(kind);
    tracing::info!(monster = %kind, exp, gold, "monster killed");
    state.log(
        format!("Defeated {name}! +{exp} EXP, +{gold} Gold."),
        MessageKind::Loot,
    );

    if progression::check_level_up(state, config) {
        report.level_ups += 1;
    }
}

/// Resolve the attack input for the player's class
///
/// The cooldown is stamped whenever the attack goes off, even when a mage is
/// out of mana and nothing is cast. `aim` is in world pixels.
pub fn player_attack(
    state: &mut GameState,
    config: &SimConfig,
    aim: Vec2,
    report: &mut TickReport,
) {
    let now = state.clock;
    let player = &mut state.player;
    if player.body.is_dead() || !player.body.attack_ready(now, config.attack_cooldown_player) {
        return;
    }
    player.body.last_attack = Some(now);

    let origin = player.body.center(config.tile_size);
    let atk = player.stats().atk;
    let kind = match player.class.attack_style() {
        AttackStyle::Melee => {
            let reach = config.melee_reach;
            let pos = player.body.pos;
            let in_reach: Vec<usize> = state
                .monsters
                .iter()
                .enumerate()
                .filter(|(_, m)| m.is_alive() && m.body.pos.distance(pos) < reach)
                .map(|(idx, _)| idx)
                .collect();
            for idx in in_reach {
                apply_damage(state, Target::Monster(idx), atk, config, report);
            }
            return;
        }
        AttackStyle::Spell => {
            if !player.stats_mut().spend_mana(config.spell_mana_cost) {
                return;
            }
            ProjectileKind::Magic
        }
        AttackStyle::Arrow => ProjectileKind::Arrow,
    };

    let projectile = Projectile::aimed(
        state.ids.projectile(),
        kind,
        origin,
        aim,
        config.projectile_speed,
        atk,
        EntityId::PLAYER,
        config.projectile_life,
    );
    tracing::debug!(kind = %kind, "projectile fired");
    state.projectiles.push(projectile);
    report.projectiles_fired += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{ClassType, MonsterKind};
    use crate::test_support::{arena, place_monster};
    use proptest::prelude::*;

    #[test]
    fn test_damage_formula() {
        assert_eq!(damage_against(22, 2), 21);
        assert_eq!(damage_against(10, 7), 7);
        assert_eq!(damage_against(5, 100), 1);
        assert_eq!(damage_against(0, 0), 1);
        // floor, not truncation, for negative defense
        assert_eq!(damage_against(10, -3), 12);
    }

    proptest! {
        #[test]
        fn test_damage_floor(raw in 0..=i32::MAX, def in any::<i32>()) {
            prop_assert!(damage_against(raw, def) >= 1);
        }
    }

    #[test]
    fn test_warrior_melee_hits_monster_in_reach() {
        let cfg = SimConfig::default();
        let mut state = arena(ClassType::Warrior);
        let pos = state.player.body.pos;
        let near = place_monster(&mut state, MonsterKind::Rat, pos + Vec2::new(32.0, 0.0));
        let far = place_monster(&mut state, MonsterKind::Rat, pos + Vec2::new(200.0, 0.0));
        state.clock = 1000;

        let mut report = TickReport::default();
        player_attack(&mut state, &cfg, Vec2::ZERO, &mut report);

        // Rat: hp 20, def 2; warrior atk 22 deals 21
        assert!(state.monsters[near].body.is_dead());
        assert_eq!(state.monsters[far].body.stats.hp, 20);
        assert_eq!(report.damage_dealt, 21);
        assert_eq!(report.kills, vec![MonsterKind::Rat]);
        assert_eq!(state.player.body.last_attack, Some(1000));
        assert_eq!(state.floating_texts.len(), 1);
        assert_eq!(state.floating_texts[0].text, "21");
        assert_eq!(state.floating_texts[0].tone, TextTone::Dealt);
    }

    #[test]
    fn test_kill_grants_rewards_and_logs() {
        let cfg = SimConfig::default();
        let mut state = arena(ClassType::Warrior);
        let idx = place_monster(&mut state, MonsterKind::Rat, Vec2::new(500.0, 500.0));
        state.monsters[idx].gold_reward = 3;
        let gold = state.player.stats().gold;

        let mut report = TickReport::default();
        apply_damage(&mut state, Target::Monster(idx), 100, &cfg, &mut report);
        assert_eq!(state.player.stats().exp, 5);
        assert_eq!(state.player.stats().gold, gold + 3);
        assert!(state.messages.contains("Defeated Rat! +5 EXP, +3 Gold."));

        // A corpse can't be killed twice
        assert_eq!(apply_damage(&mut state, Target::Monster(idx), 100, &cfg, &mut report), 0);
        assert_eq!(state.player.stats().exp, 5);
    }

    #[test]
    fn test_player_death_is_stamped() {
        let cfg = SimConfig::default();
        let mut state = arena(ClassType::Mage);
        state.clock = 777;
        let mut report = TickReport::default();
        let dealt = apply_damage(&mut state, Target::Player, 10_000, &cfg, &mut report);
        assert!(dealt > 0);
        assert_eq!(state.player.stats().hp, 0);
        assert_eq!(state.player.body.died_at, Some(777));
        assert!(report.player_died);
        assert_eq!(state.floating_texts[0].tone, TextTone::Hurt);
        let last = state.messages.last().unwrap();
        assert_eq!(last.text, "You have fallen!");
        assert_eq!(last.kind, MessageKind::Combat);
    }

    #[test]
    fn test_mage_needs_mana_but_spends_cooldown() {
        let cfg = SimConfig::default();
        let mut state = arena(ClassType::Mage);
        state.player.stats_mut().mana = 4;
        state.clock = 5000;
        let mut report = TickReport::default();
        player_attack(&mut state, &cfg, Vec2::new(9999.0, 0.0), &mut report);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.player.body.last_attack, Some(5000));

        state.player.stats_mut().mana = 5;
        state.clock = 5401;
        player_attack(&mut state, &cfg, Vec2::new(9999.0, 0.0), &mut report);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].kind, ProjectileKind::Magic);
        assert_eq!(state.player.stats().mana, 0);
    }

    #[test]
    fn test_attack_respects_cooldown() {
        let cfg = SimConfig::default();
        let mut state = arena(ClassType::Elf);
        let mut report = TickReport::default();
        state.clock = 1000;
        player_attack(&mut state, &cfg, Vec2::ZERO, &mut report);
        state.clock = 1400;
        player_attack(&mut state, &cfg, Vec2::ZERO, &mut report);
        assert_eq!(state.projectiles.len(), 1);
        state.clock = 1401;
        player_attack(&mut state, &cfg, Vec2::ZERO, &mut report);
        assert_eq!(state.projectiles.len(), 2);
        assert_eq!(report.projectiles_fired, 2);
    }

    #[test]
    fn test_floating_text_expires() {
        let cfg = SimConfig::default();
        let mut texts = vec![FloatingText {
            id: TextId(1),
            text: "3".into(),
            pos: Vec2::new(0.0, 100.0),
            tone: TextTone::Dealt,
            life: 1000.0,
        }];
        advance_floating_texts(&mut texts, &cfg, 16.0);
        assert_eq!(texts[0].pos.y, 99.5);
        advance_floating_texts(&mut texts, &cfg, 984.0);
        assert!(texts.is_empty());
    }
}
