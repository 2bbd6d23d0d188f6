//! Bootleg Wordle - CLI
//!
//! Loads the word lists, draws a secret word and runs one game in the terminal.

use anyhow::{Context, Result};
use bootleg_wordle::{
    game::{DEFAULT_STOP_TOKEN, GameConfig, GameSession, LineInput},
    output::TerminalRenderer,
    wordlists::{WordPool, loader::load_from_file},
};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bootleg_wordle",
    about = "Guess the secret word; correct letters stay put, misplaced letters must be reused",
    version,
    author
)]
struct Cli {
    /// Length of word to guess
    #[arg(long, default_value_t = 5)]
    length: usize,

    /// Maximum number of guesses
    #[arg(long = "max_guesses", default_value_t = 6)]
    max_guesses: usize,

    /// List of secret words for games
    #[arg(long, default_value = "./words.txt")]
    words: PathBuf,

    /// List of valid English words for guesses
    #[arg(long, default_value = "./dictionary.txt")]
    dictionary: PathBuf,

    /// Input that ends the game early
    #[arg(long, default_value = DEFAULT_STOP_TOKEN)]
    stop: String,

    /// Seed for choosing the secret word (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let words = load_from_file(&cli.words)
        .with_context(|| format!("Failed to read {}", cli.words.display()))?;
    let dictionary = load_from_file(&cli.dictionary)
        .with_context(|| format!("Failed to read {}", cli.dictionary.display()))?;

    let pool = WordPool::new(words, dictionary, cli.length, cli.max_guesses)
        .context("Cannot start a game with these settings")?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let config = GameConfig {
        stop_token: cli.stop,
    };
    let mut game = GameSession::new(&pool, config, &mut rng);

    let mut input = LineInput::stdin();
    let mut renderer = TerminalRenderer::stdout();
    game.play(&mut input, &mut renderer)
        .context("Failed to write game output")?;

    Ok(())
}
