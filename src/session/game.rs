//! The game session state machine.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use super::events::{EventBatch, Hits, SessionEvent};
use super::view::SessionView;
use crate::cards::{generate_card, Card};
use crate::core::{BingoConfig, ConfigError, GameRng, PlayerId, PlayerMap, MAX_PLAYERS};
use crate::draw::DrawPool;
use crate::rules::{apply_draw, first_winning_line, LineKind, MarkedSet};

/// Where a session is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Between discarding the old deal and dealing the new one.
    Setup,
    /// Accepting draws.
    Active,
    /// A player has won; only reset leaves this phase.
    Won,
}

/// Why a draw did nothing.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DrawRejection {
    #[error("All numbers have been drawn")]
    Exhausted,

    #[error("Game is over: {winner} has won")]
    GameOver { winner: PlayerId },
}

/// Result of asking for a draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A number was drawn; events describe what it changed.
    Drawn { number: u8, events: EventBatch },
    /// Nothing changed.
    Rejected(DrawRejection),
}

impl DrawOutcome {
    /// The drawn number, if any.
    #[must_use]
    pub fn number(&self) -> Option<u8> {
        match self {
            DrawOutcome::Drawn { number, .. } => Some(*number),
            DrawOutcome::Rejected(_) => None,
        }
    }

    /// Player who won on this draw, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            DrawOutcome::Drawn { events, .. } => events.iter().find_map(|e| match e {
                SessionEvent::PlayerWon { player, .. } => Some(*player),
                _ => None,
            }),
            DrawOutcome::Rejected(_) => None,
        }
    }
}

/// One game of bingo for a fixed set of seats.
///
/// Players are checked for a win in seat order after every draw; if two
/// complete a line on the same draw, the lower seat wins.
#[derive(Clone, Debug)]
pub struct GameSession {
    rng: GameRng,
    phase: Phase,
    cards: PlayerMap<Card>,
    marked: PlayerMap<MarkedSet>,
    pool: DrawPool,
    history: Vector<u8>,
    winner: Option<(PlayerId, LineKind)>,
}

impl GameSession {
    /// Deal a new session.
    pub fn new(config: &BingoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(seed = rng.seed(), players = config.player_count, "new session");

        let cards = PlayerMap::new(config.player_count, |_| generate_card(&mut rng));
        let pool = DrawPool::new(&mut rng);
        Ok(Self::start(rng, cards, pool))
    }

    /// Start from fixed cards and draw order.
    ///
    /// Later resets deal at random from an entropy-seeded RNG.
    pub fn from_deal(cards: Vec<Card>, pool: DrawPool) -> Result<Self, ConfigError> {
        if !(1..=MAX_PLAYERS).contains(&cards.len()) {
            return Err(ConfigError::PlayerCount(cards.len()));
        }
        Ok(Self::start(GameRng::from_entropy(), PlayerMap::from_vec(cards), pool))
    }

    fn start(rng: GameRng, cards: PlayerMap<Card>, pool: DrawPool) -> Self {
        let player_count = cards.player_count();
        Self {
            rng,
            phase: Phase::Active,
            cards,
            marked: PlayerMap::with_value(player_count, MarkedSet::new()),
            pool,
            history: Vector::new(),
            winner: None,
        }
    }

    /// Draw the next number and apply it to every card.
    ///
    /// A no-op once the game is won or the pool is empty.
    #[instrument(skip(self), fields(drawn = self.history.len()))]
    pub fn draw(&mut self) -> DrawOutcome {
        if let Some((winner, _)) = self.winner {
            warn!(%winner, "draw after game over ignored");
            return DrawOutcome::Rejected(DrawRejection::GameOver { winner });
        }
        let Ok(number) = self.pool.draw() else {
            warn!("draw from exhausted pool ignored");
            return DrawOutcome::Rejected(DrawRejection::Exhausted);
        };
        self.history.push_back(number);

        let mut hits = Hits::new();
        for (player, marked) in self.marked.iter_mut() {
            if let Some(index) = apply_draw(&self.cards[player], marked, number) {
                hits.push((player, index));
            }
        }
        debug!(number, ?hits, remaining = self.pool.remaining(), "drew number");

        let mut events = EventBatch::new();
        events.push(SessionEvent::NumberDrawn { number, hits });

        // Seat order decides ties.
        let won = self
            .marked
            .iter()
            .find_map(|(player, marked)| first_winning_line(marked).map(|line| (player, line.kind)));
        if let Some((player, line)) = won {
            info!(%player, %line, draws = self.history.len(), "bingo");
            self.winner = Some((player, line));
            self.phase = Phase::Won;
            events.push(SessionEvent::PlayerWon { player, line });
        }

        DrawOutcome::Drawn { number, events }
    }

    /// Discard everything and deal again with the same seat count.
    ///
    /// Each reset deals from a fresh fork of the session RNG, so the n-th
    /// deal of a seed is the same however many draws preceded it.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn reset(&mut self) {
        self.phase = Phase::Setup;
        debug!(phase = ?self.phase, discarded_draws = self.history.len(), "discarding deal");

        let player_count = self.cards.player_count();
        let mut deal = self.rng.fork();
        self.cards = PlayerMap::new(player_count, |_| generate_card(&mut deal));
        self.pool = DrawPool::new(&mut deal);
        self.marked = PlayerMap::with_value(player_count, MarkedSet::new());
        self.history = Vector::new();
        self.winner = None;
        self.phase = Phase::Active;
        info!(players = player_count, deal_seed = deal.seed(), "session reset");
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            cards: self.cards.clone(),
            marked: self.marked.clone(),
            history: self.history.clone(),
            winner: self.winner(),
            winning_line: self.winner.map(|(_, line)| line),
            remaining: self.pool.remaining(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner.map(|(player, _)| player)
    }

    /// Drawn numbers, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<u8> {
        &self.history
    }

    #[must_use]
    pub fn card(&self, player: PlayerId) -> &Card {
        &self.cards[player]
    }

    #[must_use]
    pub fn marked(&self, player: PlayerId) -> &MarkedSet {
        &self.marked[player]
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.cards.player_count()
    }

    /// Numbers left in the pool.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.remaining()
    }

    /// Seed of the RNG used for dealing, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CELL_COUNT, FREE, FREE_INDEX, GRID_SIZE};

    /// Column `c`, row `r` holds `15c + r + 1 + offset`.
    fn card_with_offset(offset: usize) -> Card {
        let mut cells: [u8; CELL_COUNT] =
            std::array::from_fn(|i| ((i % GRID_SIZE) * 15 + i / GRID_SIZE + 1 + offset) as u8);
        cells[FREE_INDEX] = FREE;
        Card::from_cells(cells).unwrap()
    }

    fn seeded(seed: u64) -> GameSession {
        GameSession::new(&BingoConfig::default().with_seed(seed)).unwrap()
    }

    #[test]
    fn test_new_session_is_active() {
        let session = seeded(42);
        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.player_count(), 2);
        assert_eq!(session.remaining(), 75);
        assert!(session.history().is_empty());
        assert_eq!(session.winner(), None);
        for player in PlayerId::all(2) {
            assert_eq!(*session.marked(player), MarkedSet::new());
        }
    }

    #[test]
    fn test_invalid_config() {
        let config = BingoConfig::default().with_player_count(0);
        assert_eq!(GameSession::new(&config).unwrap_err(), ConfigError::PlayerCount(0));
        assert!(GameSession::from_deal(vec![], DrawPool::from_order(vec![]).unwrap()).is_err());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = seeded(7);
        let mut b = seeded(7);
        assert_eq!(a.view(), b.view());

        for _ in 0..10 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_draw_marks_and_records() {
        let pool = DrawPool::from_order(vec![16, 2]).unwrap();
        let mut session = GameSession::from_deal(vec![card_with_offset(0)], pool).unwrap();

        let outcome = session.draw();
        assert_eq!(outcome.number(), Some(16));
        assert!(session.marked(PlayerId::new(0)).contains(1));
        assert_eq!(session.history().iter().copied().collect::<Vec<_>>(), vec![16]);

        let DrawOutcome::Drawn { events, .. } = outcome else {
            panic!("expected a draw");
        };
        assert_eq!(
            events[0],
            SessionEvent::NumberDrawn { number: 16, hits: [(PlayerId::new(0), 1)].into_iter().collect() }
        );
    }

    #[test]
    fn test_exhausted_pool_is_noop() {
        let pool = DrawPool::from_order(vec![1]).unwrap();
        let mut session = GameSession::from_deal(vec![card_with_offset(0)], pool).unwrap();
        session.draw();

        let before = session.view();
        assert_eq!(session.draw(), DrawOutcome::Rejected(DrawRejection::Exhausted));
        assert_eq!(session.view(), before);
        assert_eq!(session.phase(), Phase::Active);
    }

    #[test]
    fn test_win_ends_game() {
        // Row 0 of the ordered card, then more numbers that must never be drawn
        let pool = DrawPool::from_order(vec![1, 16, 31, 46, 61, 2, 3]).unwrap();
        let mut session = GameSession::from_deal(vec![card_with_offset(0)], pool).unwrap();

        for _ in 0..4 {
            assert_eq!(session.draw().winner(), None);
        }
        let outcome = session.draw();
        assert_eq!(outcome.winner(), Some(PlayerId::new(0)));
        assert_eq!(session.phase(), Phase::Won);
        assert_eq!(session.view().winning_line, Some(LineKind::Row(0)));

        let before = session.view();
        assert_eq!(
            session.draw(),
            DrawOutcome::Rejected(DrawRejection::GameOver { winner: PlayerId::new(0) })
        );
        assert_eq!(session.view(), before);
        assert_eq!(session.remaining(), 2);
    }

    #[test]
    fn test_tie_goes_to_lower_seat() {
        let card = card_with_offset(0);
        let pool = DrawPool::from_order(vec![1, 16, 31, 46, 61]).unwrap();
        let mut session = GameSession::from_deal(vec![card, card], pool).unwrap();

        let mut outcome = session.draw();
        while session.phase() == Phase::Active {
            outcome = session.draw();
        }
        assert_eq!(outcome.winner(), Some(PlayerId::new(0)));
        assert_eq!(session.winner(), Some(PlayerId::new(0)));
        assert_eq!(session.marked(PlayerId::new(1)), session.marked(PlayerId::new(0)));
    }

    #[test]
    fn test_reset_redeals() {
        let mut session = seeded(3);
        let first_card = *session.card(PlayerId::new(0));
        for _ in 0..30 {
            session.draw();
        }

        session.reset();
        let view = session.view();
        assert_eq!(view.phase, Phase::Active);
        assert!(view.history.is_empty());
        assert_eq!(view.winner, None);
        assert_eq!(view.remaining, 75);
        assert_ne!(*session.card(PlayerId::new(0)), first_card);
        for (_, card) in view.cards.iter() {
            assert_eq!(card.cell(FREE_INDEX), FREE);
        }
        for (_, marked) in view.marked.iter() {
            assert_eq!(*marked, MarkedSet::new());
        }
        assert_eq!(session.seed(), 3);
    }

    #[test]
    fn test_reset_deals_from_forked_stream() {
        let mut session = seeded(21);
        for _ in 0..12 {
            session.draw();
        }
        session.reset();

        let mut root = GameRng::new(21);
        let mut deal = root.fork();
        let expected: Vec<Card> = (0..2).map(|_| generate_card(&mut deal)).collect();
        assert_eq!(*session.card(PlayerId::new(0)), expected[0]);
        assert_eq!(*session.card(PlayerId::new(1)), expected[1]);

        // The second reset uses the next fork, not a replay of the first
        let first_reset = *session.card(PlayerId::new(0));
        session.reset();
        assert_ne!(*session.card(PlayerId::new(0)), first_reset);
    }

    #[test]
    fn test_reset_after_win_returns_to_active() {
        let pool = DrawPool::from_order(vec![1, 16, 31, 46, 61]).unwrap();
        let mut session = GameSession::from_deal(vec![card_with_offset(0)], pool).unwrap();
        while session.phase() == Phase::Active {
            session.draw();
        }
        assert_eq!(session.phase(), Phase::Won);

        session.reset();
        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.winner(), None);
        assert_eq!(session.view().winning_line, None);
        assert_eq!(session.remaining(), 75);
        assert_eq!(*session.marked(PlayerId::new(0)), MarkedSet::new());
        assert!(matches!(session.draw(), DrawOutcome::Drawn { .. }));
    }

    #[test]
    fn test_reset_is_deterministic() {
        let mut a = seeded(11);
        let mut b = seeded(11);
        a.draw();
        a.reset();
        b.reset();
        assert_eq!(a.view(), b.view());
    }
}
