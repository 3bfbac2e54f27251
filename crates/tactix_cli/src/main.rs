//! Tactix - optimal tic-tac-toe in the terminal.
//!
//! `play` pits a human (X) against the engine (O); `watch` lets the
//! engine play itself. Both report thinking time when the game ends.

#![warn(missing_docs)]

mod cli;
mod stopwatch;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use stopwatch::Stopwatch;
use tactix::{Board, Game, GameStatus, Player, best_move};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play(),
        Command::Watch => watch(),
    }
}

/// Interactive game: human as X against the engine as O.
fn play() -> Result<()> {
    let mut game = Game::new();
    let mut human = Stopwatch::new("You");
    let mut computer = Stopwatch::new("The computer");
    let stdin = io::stdin();

    println!("{}", render(game.board()));
    while game.status() == GameStatus::InProgress {
        let caption = match game.to_move() {
            Player::X => {
                human.start();
                let tile = read_move(&mut stdin.lock(), &game)?;
                game.make_move(tile).context("human move rejected")?;
                human.pause();
                "After you:"
            }
            Player::O => {
                computer.start();
                let tile = best_move(game.board())
                    .context("no move available in a position that is not over")?;
                game.make_move(tile).context("engine move rejected")?;
                computer.pause();
                "After the computer:"
            }
        };
        println!("{caption}\n\n{}", render(game.board()));
    }

    info!(status = %game.status(), moves = game.history().len(), "game over");
    println!("{}.", game.status());
    human.report();
    computer.report();
    Ok(())
}

/// Engine self-play from the empty board. Always ends in a draw.
fn watch() -> Result<()> {
    let mut game = Game::new();
    let mut stopwatch = Stopwatch::new("The game");
    stopwatch.start();

    println!("{}", render(game.board()));
    while game.status() == GameStatus::InProgress {
        let tile = best_move(game.board())
            .context("no move available in a position that is not over")?;
        game.make_move(tile).context("engine move rejected")?;
        println!("{}", render(game.board()));
    }
    stopwatch.pause();

    println!("{}.", game.status());
    stopwatch.report();
    Ok(())
}

/// Prompts until the human names a free tile as 1-based `row col`.
fn read_move(input: &mut impl BufRead, game: &Game) -> Result<usize> {
    loop {
        print!("Move: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game ended");
        }
        match parse_move(&line) {
            Some(tile) if game.board().is_free(tile) => return Ok(tile),
            Some(tile) => {
                debug!(tile, "tile already occupied");
                println!("That tile is taken.");
            }
            None => {
                debug!(input = line.trim(), "unparseable move");
                println!("Enter a move as `row col`, each 1-3.");
            }
        }
    }
}

/// Parses 1-based `row col` into a tile index.
fn parse_move(line: &str) -> Option<usize> {
    let mut fields = line.split_whitespace();
    let row: usize = fields.next()?.parse().ok()?;
    let col: usize = fields.next()?.parse().ok()?;
    if fields.next().is_some() || !(1..=3).contains(&row) || !(1..=3).contains(&col) {
        return None;
    }
    Some(3 * (row - 1) + (col - 1))
}

/// Renders the position as three indented rows.
fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..3 {
        out.push(' ');
        for col in 0..3 {
            out.push(board.get(3 * row + col).symbol());
        }
        out.push('\n');
    }
    out
}
