use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::decision::{DecisionSource, Seat, TurnView};
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::RankCategory;
use crate::logger::PlayerOutcome;
use crate::player::Player;
use crate::round::{collect_entry_fee, eligible_count, run_betting_cycle, RoundState};
use crate::showdown::{determine_winner, Contestant};
use crate::view::{NullSink, Phase, PlayerView, SnapshotSink, TableSnapshot};

/// Cards in a complete hand.
pub const HAND_SIZE: usize = 5;
/// Upper bound on cards exchanged in the replacement phase.
pub const MAX_DISCARDS: usize = 4;
/// Seats the deck can sustain: 5 dealt plus up to 4 replacement cards per
/// player must stay under 52.
pub const MAX_SEATS: usize = 5;

/// Table-level settings that hold for a whole game.
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub starting_money: u32,
    /// Round `n` charges every seated player `n` times this fee
    pub entry_fee_step: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_money: crate::player::STARTING_MONEY,
            entry_fee_step: 50,
        }
    }
}

/// Outcome of a single round.
#[derive(Debug, Clone)]
pub struct RoundSummary {
    pub round: u32,
    pub entry_fee: u32,
    pub pool: u32,
    pub winner: String,
    pub category: Option<RankCategory>,
    /// Every player's position after the award, including those about to
    /// leave the table
    pub outcomes: Vec<PlayerOutcome>,
    pub eliminated: Vec<String>,
}

/// Outcome of a finished game.
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub winner: String,
    pub rounds: u32,
}

/// Owns the table across rounds: the roster with each seat's decision
/// source, the deck, the round-scoped state and the snapshot sink.
///
/// Drives the phase sequence per round: fresh deck, entry fee, dealing
/// passes, betting, one-time replacement, final betting, showdown, pool
/// award, removal of bankrupt players.
pub struct Game<'a> {
    seats: Vec<Seat<'a>>,
    deck: Deck,
    round: RoundState,
    config: TableConfig,
    round_no: u32,
    rng: ChaCha20Rng,
    sink: Box<dyn SnapshotSink + 'a>,
}

impl<'a> Game<'a> {
    pub fn new(seed: u64, config: TableConfig) -> Self {
        Self {
            seats: Vec::new(),
            deck: Deck::new_with_seed(seed),
            round: RoundState::new(),
            config,
            round_no: 0,
            rng: ChaCha20Rng::seed_from_u64(seed.wrapping_add(0x9E37_79B9)),
            sink: Box::new(NullSink),
        }
    }

    pub fn set_sink(&mut self, sink: Box<dyn SnapshotSink + 'a>) {
        self.sink = sink;
    }

    /// Seats a player, sampling their fixed temperament once.
    pub fn add_seat(&mut self, name: &str, source: Box<dyn DecisionSource + 'a>) {
        debug_assert!(self.seats.len() < MAX_SEATS);
        let aggressiveness = 0.5 + 0.2 * (self.rng.random::<f64>() - 0.5);
        let player = Player::new(name, self.config.starting_money, aggressiveness);
        self.seats.push(Seat::new(player, source));
    }

    /// Randomizes the order of players at the table.
    pub fn shuffle_seating(&mut self) {
        self.seats.shuffle(&mut self.rng);
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.seats.iter().map(|s| &s.player)
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn round_number(&self) -> u32 {
        self.round_no
    }

    pub fn seated(&self) -> usize {
        self.seats.len()
    }

    /// Plays one complete round and returns its outcome. Players left
    /// without money afterwards are removed from the table.
    pub fn play_round(&mut self) -> Result<RoundSummary, EngineError> {
        if self.seats.len() < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }
        self.round_no += 1;
        self.round.reset();
        for seat in &mut self.seats {
            seat.player.enter_round();
        }
        self.deck.shuffle();

        let entry_fee = self.round_no * self.config.entry_fee_step;
        collect_entry_fee(&mut self.seats, &mut self.round, entry_fee);

        self.deal_phase()?;
        self.emit(Phase::Deal);

        run_betting_cycle(&mut self.seats, &mut self.round, self.sink.as_mut())?;
        self.emit(Phase::Betting);

        if !self.round.is_over() && !self.round.used_replacement() {
            self.replacement_phase()?;
            self.emit(Phase::Replacement);
            if !self.round.is_over() {
                run_betting_cycle(&mut self.seats, &mut self.round, self.sink.as_mut())?;
                self.emit(Phase::Betting);
            }
        }

        self.round.finish();
        self.showdown(entry_fee)
    }

    /// Plays rounds until a single player remains solvent.
    pub fn play(&mut self) -> Result<GameSummary, EngineError> {
        if self.seats.len() < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }
        while self.seats.len() > 1 {
            self.play_round()?;
        }
        let winner = self
            .seats
            .first()
            .ok_or(EngineError::NoEligiblePlayers)?
            .player
            .name()
            .to_string();
        Ok(GameSummary {
            winner,
            rounds: self.round_no,
        })
    }

    /// Five dealing passes, one card to every eligible player per pass.
    fn deal_phase(&mut self) -> Result<(), EngineError> {
        for _ in 0..HAND_SIZE {
            for seat in &mut self.seats {
                if seat.player.is_eligible() {
                    let card = self.deck.draw()?;
                    seat.player.draw_card(card);
                }
            }
            self.round.advance_turn();
        }
        for seat in &mut self.seats {
            if seat.player.is_eligible() {
                seat.player.refresh_rank();
            }
        }
        Ok(())
    }

    /// One-time card exchange: every eligible player chooses up to four
    /// discards and receives equal replacements.
    fn replacement_phase(&mut self) -> Result<(), EngineError> {
        let current_bid = self.round.current_bid();
        let pool = self.round.pool();
        let opponents = eligible_count(&self.seats).saturating_sub(1);
        for i in 0..self.seats.len() {
            let seat = &mut self.seats[i];
            if !seat.player.is_eligible() {
                continue;
            }
            let view = TurnView {
                current_bid,
                pool,
                money: seat.player.money(),
                bet: seat.player.bet(),
                hand: seat.player.hand(),
                rank: seat.player.rank(),
                aggressiveness: seat.player.aggressiveness(),
                did_raise: seat.player.did_raise(),
                opponents,
            };
            let picks = seat.source.choose_discards(&view);
            let picks = sanitize_discards(&picks, seat.player.hand().len());
            seat.player.discard(&picks);
            for _ in 0..picks.len() {
                let card = self.deck.draw()?;
                seat.player.draw_card(card);
            }
            seat.player.refresh_rank();
        }
        self.round.mark_replacement_used();
        Ok(())
    }

    fn showdown(&mut self, entry_fee: u32) -> Result<RoundSummary, EngineError> {
        for seat in &mut self.seats {
            if seat.player.is_eligible() {
                seat.player.reveal();
            }
        }
        let contestants: Vec<Contestant<'_>> = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.player.is_eligible())
            .filter_map(|(i, s)| {
                s.player.rank().map(|rank| Contestant {
                    seat: i,
                    hand: s.player.hand(),
                    rank,
                })
            })
            .collect();
        let winner_idx = determine_winner(&contestants)?;

        let pool = self.round.take_pool();
        let category = self.seats[winner_idx].player.rank().map(|r| r.category);
        self.seats[winner_idx].player.award(pool);
        let winner = self.seats[winner_idx].player.name().to_string();
        self.emit(Phase::Showdown);

        let outcomes: Vec<PlayerOutcome> = self
            .seats
            .iter()
            .map(|s| PlayerOutcome {
                name: s.player.name().to_string(),
                money: s.player.money(),
                bet: s.player.bet(),
                folded: !s.player.is_eligible(),
                category: s.player.rank().map(|r| r.category),
            })
            .collect();
        let eliminated: Vec<String> = self
            .seats
            .iter()
            .filter(|s| s.player.money() == 0)
            .map(|s| s.player.name().to_string())
            .collect();
        self.seats.retain(|s| s.player.money() > 0);

        Ok(RoundSummary {
            round: self.round_no,
            entry_fee,
            pool,
            winner,
            category,
            outcomes,
            eliminated,
        })
    }

    fn emit(&mut self, phase: Phase) {
        let snapshot = TableSnapshot {
            phase,
            round: self.round_no,
            pool: self.round.pool(),
            current_bid: self.round.current_bid(),
            players: self.seats.iter().map(|s| PlayerView::of(&s.player)).collect(),
        };
        self.sink.on_update(&snapshot);
    }
}

fn sanitize_discards(picks: &[usize], hand_len: usize) -> Vec<usize> {
    let mut v: Vec<usize> = picks.iter().copied().filter(|&i| i < hand_len).collect();
    v.sort_unstable();
    v.dedup();
    v.truncate(MAX_DISCARDS);
    v
}
