use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, BufReader};

use word_search::{
    generate, init_logging,
    ui::{parse_command, Command, HELP},
    GameConfig, GameController, GameSetup, Grid, IntervalScheduler, Placement, TerminalRenderer,
    TickOutcome, WordEntry, WordListInput,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone)]
struct Source {
    #[arg(long, help = "JSON game configuration file")]
    config: Option<PathBuf>,
    #[arg(long, conflicts_with = "config", help = "Comma-separated word list (e.g., \"cat,dog\")")]
    words: Option<String>,
    #[arg(long, help = "Fix RNG seed for reproducible puzzles (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a puzzle and print it.
    Generate {
        #[command(flatten)]
        source: Source,
        #[arg(long, help = "Print the grid and placements as JSON")]
        json: bool,
    },
    /// Play a puzzle in the terminal.
    Play {
        #[command(flatten)]
        source: Source,
    },
}

#[derive(serde::Serialize)]
struct GenerateOutput<'a> {
    size: usize,
    grid: &'a Grid,
    entries: &'a [WordEntry],
    placements: &'a [Placement],
}

fn load_setup(source: &Source) -> anyhow::Result<GameSetup> {
    let config = match (&source.config, &source.words) {
        (Some(path), _) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<GameConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        (None, Some(words)) => GameConfig {
            word_list: WordListInput::Csv(words.clone()),
            ..GameConfig::default()
        },
        (None, None) => anyhow::bail!("either --config or --words is required"),
    };
    Ok(config.into_setup()?)
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { source, json } => {
            let setup = load_setup(&source)?;
            let mut rng = make_rng(source.seed);
            let puzzle = generate(&setup.entries, &setup.behaviour, &mut rng)?;
            if json {
                let out = GenerateOutput {
                    size: puzzle.size(),
                    grid: &puzzle.grid,
                    entries: &setup.entries,
                    placements: &puzzle.placements,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", puzzle.grid);
                println!();
                for p in &puzzle.placements {
                    println!(
                        "{:<16} {:<15} ({}, {}) -> ({}, {})",
                        p.word,
                        p.orientation.name(),
                        p.start.0,
                        p.start.1,
                        p.end.0,
                        p.end.1
                    );
                }
            }
        }
        Commands::Play { source } => {
            let setup = load_setup(&source)?;
            if let Some(s) = source.seed {
                println!("Using fixed seed: {} (puzzle will be reproducible)", s);
            }
            play(setup, make_rng(source.seed)).await?;
        }
    }
    Ok(())
}

type TerminalGame = GameController<TerminalRenderer, IntervalScheduler>;

fn print_board(game: &mut TerminalGame) {
    for notice in game.renderer_mut().take_notices() {
        println!("  >> {}", notice);
    }
    print!("{}", game.renderer().render());
}

async fn play(setup: GameSetup, rng: SmallRng) -> anyhow::Result<()> {
    let (scheduler, mut ticks) = IntervalScheduler::new();
    let renderer = TerminalRenderer::new(&setup);
    let mut game = GameController::new(setup, rng, renderer, scheduler)?;

    println!("\n  {}\n", game.task_description());
    println!("{}\n", HELP);
    print_board(&mut game);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let size = game.session().grid().size();
                let command = match parse_command(&line, size) {
                    Ok(command) => command,
                    Err(e) => {
                        println!("  {}", e);
                        continue;
                    }
                };
                match command {
                    Command::Drag(from, to) => {
                        if game.session().is_locked() {
                            println!("  The game is over - type `retry` to play again.");
                            continue;
                        }
                        game.pointer_down(from);
                        game.pointer_move(Some(to));
                        if game.pointer_up().is_none() {
                            println!("  No word there.");
                        }
                    }
                    Command::Check => println!("  {}", game.check()),
                    Command::Reveal => {
                        if !game.reveal() {
                            println!("  The solution cannot be shown now.");
                            continue;
                        }
                    }
                    Command::Retry => {
                        if !game.can_retry() {
                            println!("  Retry is disabled for this puzzle.");
                            continue;
                        }
                        if let Err(e) = game.restart() {
                            println!("  {}", e);
                            continue;
                        }
                    }
                    Command::Show => {}
                    Command::Help => {
                        println!("{}", HELP);
                        continue;
                    }
                    Command::Quit => break,
                }
                print_board(&mut game);
            }
            Some(generation) = ticks.recv() => {
                if !game.scheduler().is_current(generation) {
                    continue;
                }
                if game.tick() == TickOutcome::Expired {
                    print_board(&mut game);
                }
            }
        }
    }
    Ok(())
}
