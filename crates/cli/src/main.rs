//! Terminal front end: a human plays the engine in long algebraic notation.

mod game;

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chess_core::{Color, Engine, GameStatus, Position, legal_moves, move_to_lan};
use minimax_engine::{MATE_SCORE, MATE_THRESHOLD, MinimaxEngine};
use random_engine::RandomEngine;

use crate::game::Game;

/// Without repetition or fifty-move draws two deterministic engines can
/// shuffle forever, so auto games stop after this many plies.
const MAX_AUTO_PLIES: u32 = 200;

const HELP: &str = "\
Commands:
  e2e4       play a move in long algebraic notation; append a piece letter
             to promote (e7e8q), or leave it off to promote to a queen
  moves      list the legal moves in this position
  board      print the board again
  help, ?    show this message
  quit, exit leave the game";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlayerColor {
    White,
    Black,
}

impl From<PlayerColor> for Color {
    fn from(c: PlayerColor) -> Color {
        match c {
            PlayerColor::White => Color::White,
            PlayerColor::Black => Color::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    /// Alpha-beta minimax with material evaluation
    Minimax,
    /// Uniformly random legal mover
    Random,
}

/// Play chess against a minimax engine from the terminal.
#[derive(Debug, Parser)]
#[command(name = "chess_cli", version, about)]
struct Args {
    /// Search depth in plies; the default answers quickly on ordinary hardware
    #[arg(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..))]
    depth: u8,

    /// Side played by the human
    #[arg(long, value_enum, default_value = "white")]
    color: PlayerColor,

    /// Engine opponent
    #[arg(long, value_enum, default_value = "minimax")]
    engine: EngineKind,

    /// Start from this FEN instead of the initial position
    #[arg(long)]
    fen: Option<String>,

    /// Let the engine play both sides to the end of the game
    #[arg(long)]
    auto: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let position = match &args.fen {
        Some(fen) => Position::from_fen(fen).context("invalid --fen position")?,
        None => Position::startpos(),
    };

    let mut engine: Box<dyn Engine> = match args.engine {
        EngineKind::Minimax => Box::new(MinimaxEngine::new()),
        EngineKind::Random => Box::new(RandomEngine::new()),
    };
    engine.new_game();

    let game = Game::new(position);
    if args.auto {
        run_auto(game, engine.as_mut(), args.depth)
    } else {
        run_interactive(game, engine.as_mut(), args.depth, args.color.into())
    }
}

fn run_interactive(
    mut game: Game,
    engine: &mut dyn Engine,
    depth: u8,
    human: Color,
) -> anyhow::Result<()> {
    println!("chess_cli — {} (depth {depth})", engine.name());
    println!("Type moves like 'e2e4'. 'help' for commands, 'quit' to exit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", game.position);
        let to_move = game.position.side_to_move;

        match game.status() {
            GameStatus::Checkmate => {
                println!("\nCheckmate — {} wins.", color_name(to_move.other()));
                return Ok(());
            }
            GameStatus::Stalemate => {
                println!("\nStalemate — draw.");
                return Ok(());
            }
            GameStatus::Ongoing => {}
        }

        if game.position.in_check(to_move) {
            println!("{} is in check.", color_name(to_move));
        }
        println!("Side to move: {}", color_name(to_move));

        if to_move == human {
            print!("Your move> ");
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(l) => l.context("failed to read input")?,
                None => return Ok(()), // stdin closed
            };
            match line.trim() {
                "" | "board" => continue,
                "quit" | "exit" => {
                    println!("Goodbye!");
                    return Ok(());
                }
                "help" | "?" => {
                    println!("{HELP}");
                    continue;
                }
                "moves" => {
                    let list: Vec<String> = legal_moves(&game.position)
                        .into_iter()
                        .map(move_to_lan)
                        .collect();
                    println!("{}", list.join(" "));
                    continue;
                }
                input => match game.try_apply(input) {
                    Ok(mv) => debug!(mv = %move_to_lan(mv), "human move applied"),
                    Err(e) => {
                        println!("{e}. Try again.");
                        continue;
                    }
                },
            }
        } else {
            println!("Engine ({}) is thinking...", color_name(to_move));
            let started = Instant::now();
            let result = game.engine_reply(engine, depth);
            debug!(
                nodes = result.nodes,
                elapsed = ?started.elapsed(),
                "search complete"
            );
            // status() above guarantees a move exists here
            if let Some(mv) = result.best_move {
                println!(
                    "Engine plays {} ({})",
                    move_to_lan(mv),
                    describe_score(result.score)
                );
            }
        }
    }
}

fn run_auto(mut game: Game, engine: &mut dyn Engine, depth: u8) -> anyhow::Result<()> {
    println!("chess_cli — {} plays itself (depth {depth})", engine.name());

    for ply in 0..MAX_AUTO_PLIES {
        match game.status() {
            GameStatus::Checkmate => {
                let loser = game.position.side_to_move;
                println!("\n\n{}", game.position);
                println!("\nCheckmate — {} wins.", color_name(loser.other()));
                return Ok(());
            }
            GameStatus::Stalemate => {
                println!("\n\n{}", game.position);
                println!("\nStalemate — draw.");
                return Ok(());
            }
            GameStatus::Ongoing => {}
        }

        let mover = game.position.side_to_move;
        let started = Instant::now();
        let result = game.engine_reply(engine, depth);
        debug!(
            ply,
            nodes = result.nodes,
            elapsed = ?started.elapsed(),
            "auto move"
        );
        if let Some(mv) = result.best_move {
            if mover == Color::White {
                print!("{}. {}", ply / 2 + 1, move_to_lan(mv));
            } else {
                println!("  {}", move_to_lan(mv));
            }
            io::stdout().flush()?;
        }
    }

    println!("\n\n{}", game.position);
    println!("\nGame stopped after {MAX_AUTO_PLIES} plies with no result.");
    Ok(())
}

/// Scores are from the mover's perspective; forced mates show the distance
/// in plies instead of a centipawn figure.
fn describe_score(score: i32) -> String {
    if score >= MATE_THRESHOLD {
        format!("mate in {}", MATE_SCORE - score)
    } else if score <= -MATE_THRESHOLD {
        format!("mated in {}", MATE_SCORE + score)
    } else {
        format!("score {:+.2}", f64::from(score) / 100.0)
    }
}

fn color_name(c: Color) -> &'static str {
    match c {
        Color::White => "white",
        Color::Black => "black",
    }
}
