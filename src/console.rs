#![cfg(feature = "std")]

//! Thin console driver: reads a letter, submits it, renders the view.
//! All game rules live in [`Round`]; this module only does I/O.

use std::io::{self, Write};
use std::string::String;

use anyhow::bail;

use crate::common::{GameStatus, GuessResult};
use crate::round::Round;
use crate::view::RoundView;

/// Gallows positions, drawn in order as wrong guesses accumulate.
const GALLOWS: [&str; 7] = [
    "
  +---+
  |   |
      |
      |
      |
=========",
    "
  +---+
  |   |
  O   |
      |
      |
=========",
    "
  +---+
  |   |
  O   |
  |   |
      |
=========",
    "
  +---+
  |   |
  O   |
 /|   |
      |
=========",
    "
  +---+
  |   |
  O   |
 /|\\  |
      |
=========",
    "
  +---+
  |   |
  O   |
 /|\\  |
 /    |
=========",
    "
  +---+
  |   |
  O   |
 /|\\  |
 / \\  |
=========",
];

fn gallows_stage(round: &Round) -> &'static str {
    let last = GALLOWS.len() - 1;
    let stage = round.wrong() as usize * last / round.max_wrong() as usize;
    GALLOWS[stage.min(last)]
}

fn spaced(word: &str) -> String {
    let mut out = String::new();
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

fn render(round: &Round) {
    let view = RoundView::from(round);
    println!("{}", gallows_stage(round));
    println!("\nWord: {}", spaced(&view.masked_word));
    if !view.used_letters.is_empty() {
        let used: String = spaced(&view.used_letters.iter().collect::<String>());
        println!("Used: {}", used);
    }
    println!("Lives: {}/{}", view.lives_remaining, round.max_wrong());
}

/// Run one round to completion over stdin/stdout and report the outcome.
pub fn run_round(round: &mut Round) -> anyhow::Result<GameStatus> {
    while !round.is_finished() {
        render(round);
        print!("Guess a letter: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            bail!("input closed before the round finished");
        }
        let raw = match crate::letters::parse_guess(&line) {
            Ok(c) => c,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        match round.guess(raw) {
            Ok(GuessResult::Hit) => println!("'{}' is in the word.", raw),
            Ok(GuessResult::Miss) => println!("'{}' is not in the word.", raw),
            Ok(GuessResult::Repeat) => println!("You already tried '{}'.", raw),
            Ok(GuessResult::GameOver) => {}
            Err(e) => println!("{}", e),
        }
    }
    render(round);
    if let Some(message) = round.message() {
        println!("\n{}", message);
    }
    Ok(round.status())
}
