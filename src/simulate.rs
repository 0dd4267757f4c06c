use std::fmt;

use clap::ValueEnum;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::deck::Deck;
use crate::error::GameError;
use crate::game::{FinishReason, Game, GameStats};
use crate::player::HAND_SIZE;
use crate::strategies::{CarefulStrategy, RandomStrategy};
use crate::strategy::{GameView, Strategy};

// guards against strategies that stall without touching the deck
const MAX_TURNS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    Random,
    Careful,
}

impl StrategyKind {
    fn create(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new()),
            StrategyKind::Careful => Box::new(CarefulStrategy::new()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub games: usize,
    pub players: usize,
    pub seed: u64,
    pub strategy: StrategyKind,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            games: 1000,
            players: 2,
            seed: 0,
            strategy: StrategyKind::Careful,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub stats: GameStats,
    pub reason: Option<FinishReason>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationReport {
    pub games: usize,
    pub average_turns: f64,
    pub average_played: f64,
    pub average_risky: f64,
    pub perfect_games: usize,
    pub lost_games: usize,
}

impl SimulationReport {
    fn from_results(results: &[GameResult]) -> Self {
        let games = results.len();
        if games == 0 {
            return SimulationReport::default();
        }
        let average = |f: fn(&GameResult) -> usize| results.iter().map(f).sum::<usize>() as f64 / games as f64;
        SimulationReport {
            games,
            average_turns: average(|r| r.stats.turn),
            average_played: average(|r| r.stats.played_cards),
            average_risky: average(|r| r.stats.risky_moves),
            perfect_games: results.iter().filter(|r| r.reason == Some(FinishReason::TableFull)).count(),
            lost_games: results
                .iter()
                .filter(|r| {
                    matches!(
                        r.reason,
                        Some(FinishReason::IllegalPlay | FinishReason::FalseHint | FinishReason::IncompleteHint)
                    )
                })
                .count(),
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games:                 {}", self.games)?;
        writeln!(f, "  -> Average Turns:     {:.4}", self.average_turns)?;
        writeln!(f, "  -> Average Played:    {:.4}", self.average_played)?;
        writeln!(f, "  -> Average Risky:     {:.4}", self.average_risky)?;
        writeln!(f, "  -> Perfect Games (25): {}", self.perfect_games)?;
        write!(f, "  -> Lost Games:        {}", self.lost_games)
    }
}

/// Plays `config.games` games in parallel, each on a freshly shuffled
/// standard deck. Game `i` is seeded with `config.seed + i`.
pub fn run(config: &SimulationConfig) -> Result<SimulationReport, GameError> {
    let available = Deck::new_full_deck().count_of_cards();
    let needed = HAND_SIZE * config.players + 1;
    if needed > available {
        return Err(GameError::NotEnoughCards { needed, available });
    }

    info!("simulating {} games of {} players with {:?}", config.games, config.players, config.strategy);

    let results = (0..config.games)
        .into_par_iter()
        .map(|index| play_one(config, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SimulationReport::from_results(&results))
}

pub fn play_one(config: &SimulationConfig, index: usize) -> Result<GameResult, GameError> {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index as u64));
    let mut deck = Deck::new_full_deck();
    deck.shuffle(&mut rng);

    let mut game = Game::new();
    game.start_new_game(config.players)?;
    for card in deck.cards() {
        game.add_card_to_deck(*card)?;
    }
    game.deal_cards_to_players()?;

    let mut strategies: Vec<Box<dyn Strategy>> = (0..config.players).map(|_| config.strategy.create()).collect();

    while !game.is_finished() && game.number_of_last_move() < MAX_TURNS {
        let mv = {
            let view = GameView::new(&game).ok_or(GameError::NotStarted)?;
            strategies[game.current_player_number()].decide_move(&view, &mut rng)
        };
        game.apply_move(&mv)?;
    }

    Ok(GameResult {
        stats: game.stats(),
        reason: game.finish_reason(),
    })
}
