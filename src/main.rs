use std::io;

use clap::{Parser, Subcommand};
use env_logger::Env;

use hanabi_referee::session::Session;
use hanabi_referee::simulate::{self, SimulationConfig, StrategyKind};

#[derive(Parser)]
#[command(name = "hanabi-referee")]
#[command(about = "Referee and simulator for a cooperative color/rank card game")]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and print a summary for every finished game
    Play {
        /// Number of players seated in each game
        #[arg(short, long, default_value = "2")]
        players: usize,
    },
    /// Play many shuffled games with an automated strategy
    Simulate {
        /// Number of games to simulate
        #[arg(short, long, default_value = "1000")]
        games: usize,

        /// Number of players seated in each game
        #[arg(short, long, default_value = "2")]
        players: usize,

        /// Seed of the first game; game i uses seed + i
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Strategy used by every seat
        #[arg(long, default_value = "careful")]
        strategy: StrategyKind,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match args.command.unwrap_or(Commands::Play { players: 2 }) {
        Commands::Play { players } => {
            env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
            let stdin = io::stdin();
            Session::new(players).run(stdin.lock(), io::stdout().lock())?;
        }
        Commands::Simulate {
            games,
            players,
            seed,
            strategy,
        } => {
            env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
            let config = SimulationConfig {
                games,
                players,
                seed,
                strategy,
            };
            let report = simulate::run(&config)?;
            println!("Strategy: {:?}", strategy);
            println!("{}", report);
            println!("---------------------------------------");
        }
    }
    Ok(())
}
