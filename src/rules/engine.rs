//! The game engine: owns all state and runs the action protocol.
//!
//! Every card action goes through the same steps:
//!
//! 1. Validate (game in progress, index present, card matches).
//! 2. Resolve the card with `CombatResolver`.
//! 3. Remove the card, apply weapon/health/score changes.
//! 4. Refill the dungeon if it has run low.
//! 5. Check for a win (deck and dungeon empty), then a loss (health <= 0).
//! 6. Record the action in the history, then any milestone.
//!
//! A rejected action returns `Err` and changes nothing. Once the game is won
//! or lost all actions are rejected until `start_game` or `restart_game`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::resolution::Resolution;
use crate::audio::{AmbientAudio, Silence};
use crate::cards::{Card, Deck};
use crate::combat::{BareHandedReason, CombatResolver, Engagement, Outcome, WeaponSlot};
use crate::core::{
    Action, GameError, GameRng, Notice, NoticeBoard, NoticeTicket, NoticeTone, RandomSource,
    RulesConfig,
};
use crate::history::{EventKind, EventLog, GameEvent};
use crate::zones::Dungeon;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Every card was used with health above zero.
    Won,
    /// Health dropped to zero or below.
    Lost,
}

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed or restarted; nothing dealt.
    Ready,
    /// Dealt and accepting actions.
    Playing,
    /// Won or lost; frozen until the next start or restart.
    Finished(GameResult),
}

/// Legal actions at one moment. A room of four plus discard fits inline.
pub type LegalActions = SmallVec<[Action; 5]>;

/// Single-session game engine.
///
/// ## Example
///
/// ```
/// use dungeon_deck::core::RulesConfig;
/// use dungeon_deck::rules::GameEngine;
///
/// let mut engine = GameEngine::new(RulesConfig::default().with_seed(42));
/// engine.start_game();
/// assert_eq!(engine.dungeon().len(), 4);
/// assert_eq!(engine.deck_size(), 48);
///
/// let resolution = engine.play(0).unwrap();
/// assert_eq!(engine.cards_played(), 1);
/// assert_eq!(engine.score(), resolution.score_delta);
/// ```
pub struct GameEngine<R: RandomSource = GameRng> {
    config: RulesConfig,
    rng: R,
    audio: Box<dyn AmbientAudio>,
    deck: Deck,
    dungeon: Dungeon,
    weapon: WeaponSlot,
    health: i64,
    score: i64,
    phase: Phase,
    total_cards: usize,
    history: EventLog,
    notices: NoticeBoard,
}

impl GameEngine<GameRng> {
    /// Create an engine shuffling with `GameRng`, seeded from
    /// `config.seed` or from entropy.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl Default for GameEngine<GameRng> {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine with an explicit random source.
    ///
    /// The deck starts full and unshuffled; nothing is dealt until
    /// `start_game`. `config` is normalized first, so values that skipped
    /// the builders are clamped the same way.
    #[must_use]
    pub fn with_rng(config: RulesConfig, rng: R) -> Self {
        let config = config.normalized();
        let deck = Deck::standard();
        Self {
            dungeon: Dungeon::new(config.dungeon_capacity, config.refill_threshold),
            history: EventLog::new(config.history_capacity),
            notices: NoticeBoard::new(config.notice_duration()),
            health: config.starting_health,
            score: 0,
            phase: Phase::Ready,
            total_cards: deck.len(),
            weapon: WeaponSlot::new(),
            audio: Box::new(Silence),
            deck,
            rng,
            config,
        }
    }

    /// Attach the ambient audio collaborator.
    #[must_use]
    pub fn with_audio(mut self, audio: impl AmbientAudio + 'static) -> Self {
        self.audio = Box::new(audio);
        self
    }

    // === Lifecycle ===

    /// Reset everything, shuffle a fresh deck and deal the first room.
    ///
    /// Starts ambient audio. Returns the ticket of the welcome notice.
    pub fn start_game(&mut self) -> NoticeTicket {
        let mut deck = Deck::standard();
        deck.shuffle(&mut self.rng);
        self.start_game_with_deck(deck)
    }

    /// Like `start_game`, but deal `deck` exactly as ordered.
    ///
    /// For prepared scenarios and variants; the deck may hold any cards.
    pub fn start_game_with_deck(&mut self, deck: Deck) -> NoticeTicket {
        self.reset(deck);
        self.phase = Phase::Playing;
        self.dungeon.deal(&mut self.deck);

        self.audio.play();

        self.history
            .record(GameEvent::new(EventKind::Milestone, "Game started!"));
        self.notices.post(
            "Game started! Defeat monsters with weapons and heal when needed!",
            NoticeTone::Info,
        )
    }

    /// Return to the pre-game state without dealing.
    ///
    /// The deck is rebuilt in canonical order; shuffling waits for the next
    /// `start_game`. Audio is left alone.
    pub fn restart_game(&mut self) {
        self.reset(Deck::standard());
        self.phase = Phase::Ready;
    }

    fn reset(&mut self, deck: Deck) {
        self.total_cards = deck.len();
        self.deck = deck;
        self.dungeon.clear();
        self.weapon = WeaponSlot::new();
        self.health = self.config.starting_health;
        self.score = 0;
        self.history.clear();
        self.notices.reset();
    }

    // === Actions ===

    /// Use `card`, which the caller believes sits at `index` in the dungeon.
    ///
    /// Heals, equips or fights depending on the card's suit. Rejected if the
    /// slot is empty or holds a different card.
    pub fn use_card(&mut self, card: &Card, index: usize) -> Result<Resolution, GameError> {
        self.ensure_playing()?;
        let found = self.card_at(index)?;
        if found != *card {
            return Err(GameError::CardMismatch {
                index,
                expected: *card,
                found,
            });
        }
        Ok(self.resolve_at(index, found))
    }

    /// Use whatever card sits at `index`.
    pub fn play(&mut self, index: usize) -> Result<Resolution, GameError> {
        self.ensure_playing()?;
        let card = self.card_at(index)?;
        Ok(self.resolve_at(index, card))
    }

    /// Discard the equipped weapon.
    ///
    /// Does not refill the dungeon or end the game. Without a weapon this
    /// posts an error notice and returns `NoWeapon`.
    pub fn discard_weapon(&mut self) -> Result<Resolution, GameError> {
        self.ensure_playing()?;
        let Some(weapon) = self.weapon.discard() else {
            self.notices.post("No weapon equipped!", NoticeTone::Error);
            return Err(GameError::NoWeapon);
        };

        let notice = self
            .notices
            .post(format!("Discarded {weapon}!"), NoticeTone::Info);
        self.history.record(GameEvent::new(
            EventKind::Discard,
            format!("Discarded weapon: {weapon}"),
        ));

        Ok(Resolution {
            card: weapon,
            kind: EventKind::Discard,
            outcome: None,
            health_delta: 0,
            score_delta: 0,
            refilled: 0,
            result: None,
            notice,
        })
    }

    /// Apply an `Action`.
    pub fn apply(&mut self, action: Action) -> Result<Resolution, GameError> {
        match action {
            Action::UseCard { index } => self.play(index),
            Action::DiscardWeapon => self.discard_weapon(),
        }
    }

    /// Every action that would currently be accepted.
    #[must_use]
    pub fn legal_actions(&self) -> LegalActions {
        let mut actions = LegalActions::new();
        if self.phase != Phase::Playing {
            return actions;
        }
        actions.extend((0..self.dungeon.len()).map(|index| Action::UseCard { index }));
        if self.weapon.is_armed() {
            actions.push(Action::DiscardWeapon);
        }
        actions
    }

    /// What using the card at `index` would do, without doing it.
    #[must_use]
    pub fn preview(&self, index: usize) -> Option<Outcome> {
        let card = self.dungeon.get(index)?;
        Some(CombatResolver::resolve(
            &self.config,
            &self.weapon,
            self.health,
            card,
        ))
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Ready => Err(GameError::NotStarted),
            Phase::Finished(_) => Err(GameError::GameOver),
            Phase::Playing => Ok(()),
        }
    }

    fn card_at(&self, index: usize) -> Result<Card, GameError> {
        self.dungeon
            .get(index)
            .copied()
            .ok_or(GameError::InvalidIndex {
                index,
                len: self.dungeon.len(),
            })
    }

    /// Run the full protocol for the (already validated) card at `index`.
    fn resolve_at(&mut self, index: usize, card: Card) -> Resolution {
        let outcome = CombatResolver::resolve(&self.config, &self.weapon, self.health, &card);
        let health_delta = CombatResolver::health_delta(&outcome, &card);
        let score_delta = CombatResolver::score_delta(&self.config, &outcome, &card);

        self.dungeon.remove(index);
        match outcome {
            Outcome::Equip { .. } => {
                self.weapon.equip(card);
            }
            Outcome::Fight(Engagement::WeaponKill) => self.weapon.record_kill(card.damage()),
            Outcome::Heal { .. } | Outcome::Fight(Engagement::BareHanded(_)) => {}
        }
        self.health += health_delta;
        self.score += score_delta;

        let (text, tone) = Self::outcome_notice(&outcome, &card);
        let mut notice = self.notices.post(text, tone);

        let refilled = self.dungeon.refill(&mut self.deck);
        if refilled > 0 {
            notice = self.notices.post(
                format!("Dungeon refilled with {refilled} new cards!"),
                NoticeTone::Info,
            );
        }

        let result = self.evaluate_end();
        if let Some(result) = result {
            self.phase = Phase::Finished(result);
            notice = match result {
                GameResult::Won => self.notices.post(
                    format!(
                        "Congratulations! You used all {} cards and won the game!",
                        self.total_cards
                    ),
                    NoticeTone::Success,
                ),
                GameResult::Lost => self
                    .notices
                    .post("Game Over! You ran out of health!", NoticeTone::Error),
            };
        }

        let kind = Self::event_kind(&outcome);
        self.history
            .record(GameEvent::new(kind, Self::event_message(&outcome, &card)));
        if let Some(result) = result {
            let message = match result {
                GameResult::Won => format!("Game won! All {} cards used!", self.total_cards),
                GameResult::Lost => "Game over! Health depleted!".to_string(),
            };
            self.history
                .record(GameEvent::new(EventKind::Milestone, message));
        }

        Resolution {
            card,
            kind,
            outcome: Some(outcome),
            health_delta,
            score_delta,
            refilled,
            result,
            notice,
        }
    }

    /// Win takes precedence over loss.
    fn evaluate_end(&self) -> Option<GameResult> {
        if self.deck.is_empty() && self.dungeon.is_empty() {
            Some(GameResult::Won)
        } else if self.health <= 0 {
            Some(GameResult::Lost)
        } else {
            None
        }
    }

    fn event_kind(outcome: &Outcome) -> EventKind {
        match outcome {
            Outcome::Heal { .. } => EventKind::Heal,
            Outcome::Equip { .. } => EventKind::Equip,
            Outcome::Fight(Engagement::WeaponKill) => EventKind::Kill,
            Outcome::Fight(Engagement::BareHanded(_)) => EventKind::BareHanded,
        }
    }

    fn event_message(outcome: &Outcome, card: &Card) -> String {
        match outcome {
            Outcome::Heal { .. } => format!("Used healing card: {card}"),
            Outcome::Equip { .. } => format!("Equipped weapon: {card}"),
            Outcome::Fight(Engagement::WeaponKill) => format!("Defeated monster: {card}"),
            Outcome::Fight(Engagement::BareHanded(reason)) => match reason {
                BareHandedReason::Unarmed => {
                    format!("Fought bare-handed against monster: {card}")
                }
                BareHandedReason::WeaponTooWeak => {
                    format!("Weapon too weak against monster: {card}")
                }
                BareHandedReason::WeaponFatigued => {
                    format!("Weapon restriction against monster: {card}")
                }
            },
        }
    }

    fn outcome_notice(outcome: &Outcome, card: &Card) -> (String, NoticeTone) {
        match outcome {
            Outcome::Heal { applied: 0 } => (
                "Used healing card but already at full health!".to_string(),
                NoticeTone::Info,
            ),
            Outcome::Heal { applied } => (format!("Healed for {applied} HP!"), NoticeTone::Success),
            Outcome::Equip { replaced: Some(old) } => (
                format!("Discarded {old} and equipped {card}!"),
                NoticeTone::Info,
            ),
            Outcome::Equip { replaced: None } => (format!("Equipped {card}!"), NoticeTone::Success),
            Outcome::Fight(Engagement::WeaponKill) => (
                format!("Defeated {card} ({} DMG)!", card.damage()),
                NoticeTone::Success,
            ),
            Outcome::Fight(Engagement::BareHanded(reason)) => {
                let prefix = match reason {
                    BareHandedReason::Unarmed => "",
                    BareHandedReason::WeaponTooWeak => "Weapon too weak! ",
                    BareHandedReason::WeaponFatigued => "Weapon restriction! ",
                };
                (
                    format!(
                        "{prefix}Fought {card} bare-handed! Took {} damage!",
                        card.damage()
                    ),
                    NoticeTone::Error,
                )
            }
        }
    }

    // === Notices ===

    /// The notice currently showing, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    /// Clear the notice if `ticket` is still current. Stale tickets are
    /// ignored.
    pub fn clear_notice(&mut self, ticket: NoticeTicket) -> bool {
        self.notices.clear(ticket)
    }

    /// Clear the notice if it has expired by `now`.
    pub fn expire_notice(&mut self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.notices.expire(now)
    }

    // === Observable state ===

    /// Rules in effect.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// The random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Cards left to draw.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Number of cards left to draw.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Cards in the current room, oldest first.
    #[must_use]
    pub fn dungeon(&self) -> &[Card] {
        self.dungeon.cards()
    }

    /// The equipped weapon.
    #[must_use]
    pub fn weapon(&self) -> Option<&Card> {
        self.weapon.weapon()
    }

    /// Damage of the weapon's last kill (0 if none or unarmed).
    #[must_use]
    pub fn last_kill_damage(&self) -> i64 {
        self.weapon.last_kill()
    }

    /// Strongest monster the weapon may still kill.
    #[must_use]
    pub fn kill_limit(&self) -> Option<i64> {
        self.weapon.kill_limit()
    }

    /// Player health. May be zero or negative once the game is lost.
    #[must_use]
    pub fn health(&self) -> i64 {
        self.health
    }

    /// Score so far.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a game has been dealt since the last restart.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != Phase::Ready
    }

    /// Whether the game is won or lost.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Whether the game is won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Finished(GameResult::Won)
    }

    /// The final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Cards used so far (the deck's size at deal minus deck and room).
    #[must_use]
    pub fn cards_played(&self) -> usize {
        self.total_cards - self.deck.len() - self.dungeon.len()
    }

    /// Number of cards the current game was dealt from.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Recent events, newest first.
    #[must_use]
    pub fn history(&self) -> &EventLog {
        &self.history
    }
}
