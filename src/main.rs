#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use hangman::{init_logging, run_round, Difficulty, GameEngine, RoundOptions, WordList};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, value_enum, default_value_t = Difficulty::Normal)]
    difficulty: Difficulty,
    #[arg(long, help = "Load words from a file, one per line")]
    words: Option<std::path::PathBuf>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Reveal some letters when the round starts")]
    head_start: bool,
    #[arg(long, help = "Match accented letters literally instead of folding them")]
    no_accent_fold: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let words = match &cli.words {
        Some(path) => WordList::from_file(path)?,
        None => WordList::default(),
    };

    let engine = GameEngine::with_options(RoundOptions {
        reveal_head_start: cli.head_start,
        fold_accents: !cli.no_accent_fold,
    });
    let mut round = engine
        .start(cli.difficulty, &words, &mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;

    let status = run_round(&mut round)?;
    log::info!("round finished: {:?}", status);
    Ok(())
}
