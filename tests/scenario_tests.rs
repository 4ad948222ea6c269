//! Scripted game scenarios.
//!
//! Each test deals a prepared deck (front of the list is dealt first) so
//! the room contents are known exactly.

use dungeon_deck::cards::{Card, Deck, Suit};
use dungeon_deck::combat::{BareHandedReason, Engagement, Outcome};
use dungeon_deck::core::{GameError, RulesConfig, ScriptedRng};
use dungeon_deck::history::EventKind;
use dungeon_deck::rules::{GameEngine, GameResult, Phase};

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn engine_with(cards: &[Card]) -> GameEngine<ScriptedRng> {
    let mut engine = GameEngine::with_rng(RulesConfig::default(), ScriptedRng::identity());
    engine.start_game_with_deck(Deck::from_cards(cards.iter().copied()));
    engine
}

/// Fighting without a weapon costs health and pays the damage as score.
#[test]
fn test_bare_handed_fight() {
    let mut engine = engine_with(&[
        card(Suit::Spades, 7),
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 5),
        card(Suit::Hearts, 6),
    ]);

    let res = engine.play(0).unwrap();

    assert_eq!(
        res.outcome,
        Some(Outcome::Fight(Engagement::BareHanded(BareHandedReason::Unarmed)))
    );
    assert_eq!(engine.health(), 13);
    assert_eq!(engine.score(), 7);
    assert_eq!(engine.dungeon().len(), 3);
    assert!(!engine.dungeon().contains(&card(Suit::Spades, 7)));
    assert_eq!(res.refilled, 0);

    let latest = engine.history().latest().unwrap();
    assert_eq!(latest.kind, EventKind::BareHanded);
    assert_eq!(latest.message, "Fought bare-handed against monster: 7♠");
}

/// A weapon kill limits the weapon to weaker monsters from then on.
#[test]
fn test_weapon_kill_then_fatigue() {
    let mut engine = engine_with(&[
        card(Suit::Diamonds, 10),
        card(Suit::Clubs, 8),
        card(Suit::Spades, 9),
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
    ]);

    let equip = engine.play(0).unwrap();
    assert_eq!(equip.kind, EventKind::Equip);
    assert_eq!(engine.score(), 10);
    assert_eq!(engine.weapon(), Some(&card(Suit::Diamonds, 10)));
    assert_eq!(engine.last_kill_damage(), 0);

    let kill = engine.play(0).unwrap();
    assert_eq!(kill.kind, EventKind::Kill);
    assert_eq!(kill.health_delta, 0);
    assert_eq!(engine.score(), 90);
    assert_eq!(engine.last_kill_damage(), 8);
    assert_eq!(engine.kill_limit(), Some(8));
    assert_eq!(engine.health(), 20);

    let tired = engine.play(0).unwrap();
    assert_eq!(
        tired.outcome,
        Some(Outcome::Fight(Engagement::BareHanded(BareHandedReason::WeaponFatigued)))
    );
    assert_eq!(tired.kind, EventKind::BareHanded);
    assert_eq!(engine.score(), 99);
    assert_eq!(engine.health(), 11);
    // Fatigue does not change the recorded kill.
    assert_eq!(engine.last_kill_damage(), 8);

    // One card left in the room, so two more were drawn.
    assert_eq!(tired.refilled, 2);
    assert_eq!(
        engine.dungeon(),
        &[card(Suit::Hearts, 2), card(Suit::Hearts, 3), card(Suit::Hearts, 4)]
    );
    assert_eq!(engine.deck_size(), 0);
}

/// A weapon weaker than the monster does not help.
#[test]
fn test_weapon_too_weak() {
    let mut engine = engine_with(&[
        card(Suit::Diamonds, 4),
        card(Suit::Clubs, 6),
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
    ]);

    engine.play(0).unwrap();
    let res = engine.play(0).unwrap();

    assert_eq!(
        res.outcome,
        Some(Outcome::Fight(Engagement::BareHanded(BareHandedReason::WeaponTooWeak)))
    );
    assert_eq!(engine.health(), 14);
    assert_eq!(engine.last_kill_damage(), 0);
    assert_eq!(
        engine.history().latest().unwrap().message,
        "Weapon too weak against monster: 6♣"
    );
}

/// Using every card with health left wins the game.
#[test]
fn test_win_by_using_every_card() {
    let mut engine = engine_with(&[
        card(Suit::Diamonds, 5),
        card(Suit::Clubs, 3),
        card(Suit::Hearts, 2),
    ]);

    engine.play(0).unwrap();
    engine.play(0).unwrap();
    let last = engine.play(0).unwrap();

    assert_eq!(last.result, Some(GameResult::Won));
    assert!(engine.is_over());
    assert!(engine.is_won());
    assert_eq!(engine.phase(), Phase::Finished(GameResult::Won));
    assert_eq!(engine.score(), 10 + 30 + 5);

    let kinds: Vec<_> = engine.history().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::Milestone,
            EventKind::Heal,
            EventKind::Kill,
            EventKind::Equip,
            EventKind::Milestone,
        ]
    );
    assert_eq!(
        engine.history().latest().unwrap().message,
        "Game won! All 3 cards used!"
    );
}

/// Health at or below zero loses, whatever is left in the deck.
#[test]
fn test_loss_when_health_depleted() {
    let mut engine = engine_with(&[
        card(Suit::Spades, 14),
        card(Suit::Clubs, 13),
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 5),
    ]);

    assert_eq!(engine.play(0).unwrap().result, None);
    assert_eq!(engine.health(), 6);

    let fatal = engine.play(0).unwrap();
    assert_eq!(fatal.result, Some(GameResult::Lost));
    assert_eq!(engine.health(), -7);
    assert!(engine.is_over());
    assert!(!engine.is_won());
    assert_eq!(engine.deck_size(), 2);
    assert_eq!(
        engine.notice().map(|n| n.text.as_str()),
        Some("Game Over! You ran out of health!")
    );
}

/// When the last card also kills the player, the win still counts.
#[test]
fn test_win_takes_precedence_over_loss() {
    let mut engine = engine_with(&[card(Suit::Spades, 14), card(Suit::Spades, 13)]);

    engine.play(0).unwrap();
    let last = engine.play(0).unwrap();

    assert!(engine.health() <= 0);
    assert_eq!(last.result, Some(GameResult::Won));
    assert!(engine.is_won());
}

/// Healing at full health consumes the card and still scores.
#[test]
fn test_wasted_heal() {
    let mut engine = engine_with(&[
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 2),
        card(Suit::Clubs, 3),
        card(Suit::Clubs, 4),
        card(Suit::Clubs, 5),
    ]);

    assert!(engine.preview(0).unwrap().is_wasted_heal());
    let res = engine.play(0).unwrap();

    assert_eq!(res.outcome, Some(Outcome::Heal { applied: 0 }));
    assert_eq!(engine.health(), 20);
    assert_eq!(engine.score(), 5);
    assert_eq!(engine.dungeon().len(), 3);
    assert_eq!(
        engine.notice().map(|n| n.text.as_str()),
        Some("Used healing card but already at full health!")
    );
}

/// Healing never goes above the cap.
#[test]
fn test_heal_clamps() {
    let mut engine = engine_with(&[
        card(Suit::Clubs, 5),
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 2),
        card(Suit::Clubs, 3),
        card(Suit::Clubs, 4),
    ]);

    engine.play(0).unwrap();
    assert_eq!(engine.health(), 15);

    let res = engine.play(0).unwrap();
    assert_eq!(res.health_delta, 5);
    assert_eq!(engine.health(), 20);
    assert_eq!(engine.notice().map(|n| n.text.as_str()), Some("Healed for 5 HP!"));
}

/// Equipping over a weapon discards the old one and resets fatigue.
#[test]
fn test_equip_replaces_weapon() {
    let mut engine = engine_with(&[
        card(Suit::Diamonds, 6),
        card(Suit::Clubs, 4),
        card(Suit::Diamonds, 9),
        card(Suit::Spades, 8),
        card(Suit::Hearts, 2),
    ]);

    engine.play(0).unwrap();
    engine.play(0).unwrap();
    assert_eq!(engine.last_kill_damage(), 4);

    let res = engine.play(0).unwrap();
    assert_eq!(
        res.outcome,
        Some(Outcome::Equip { replaced: Some(card(Suit::Diamonds, 6)) })
    );
    assert_eq!(engine.weapon(), Some(&card(Suit::Diamonds, 9)));
    assert_eq!(engine.last_kill_damage(), 0);
    assert_eq!(engine.score(), 10 + 40 + 10);

    // The fresh weapon kills the 8 that the tired one could not.
    let kill = engine.play(0).unwrap();
    assert_eq!(kill.kind, EventKind::Kill);
}

/// Discarding clears the weapon without touching the room or score.
#[test]
fn test_discard_weapon() {
    let mut engine = engine_with(&[
        card(Suit::Diamonds, 6),
        card(Suit::Clubs, 4),
        card(Suit::Clubs, 9),
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
    ]);

    engine.play(0).unwrap();
    engine.play(0).unwrap();
    let before_room = engine.dungeon().to_vec();
    let before_score = engine.score();

    let res = engine.discard_weapon().unwrap();
    assert_eq!(res.card, card(Suit::Diamonds, 6));
    assert_eq!(res.kind, EventKind::Discard);
    assert!(engine.weapon().is_none());
    assert_eq!(engine.last_kill_damage(), 0);
    assert_eq!(engine.dungeon(), before_room.as_slice());
    assert_eq!(engine.score(), before_score);
    assert_eq!(
        engine.history().latest().unwrap().message,
        "Discarded weapon: 6♦"
    );
}

/// Discarding with no weapon is reported and changes nothing.
#[test]
fn test_discard_without_weapon() {
    let mut engine = engine_with(&[
        card(Suit::Clubs, 4),
        card(Suit::Clubs, 9),
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
    ]);
    let history_len = engine.history().len();

    assert_eq!(engine.discard_weapon(), Err(GameError::NoWeapon));
    assert_eq!(engine.history().len(), history_len);
    assert_eq!(engine.dungeon().len(), 4);

    let notice = engine.notice().unwrap();
    assert_eq!(notice.text, "No weapon equipped!");
    assert_eq!(notice.tone, dungeon_deck::core::NoticeTone::Error);
}
