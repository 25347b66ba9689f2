//! Console Draughts
//!
//! A two-phase command-line game. In the settings phase the user arranges
//! the board, picks a side, the search depth and the engine; `start` then
//! enters the game phase, which alternates the user's typed moves with the
//! engine's replies until one side has no legal move left.

mod session;

use std::io::{self, BufRead};

use session::{GameSession, SettingsOutcome, TurnOutcome};

fn main() {
    println!("Welcome to Draughts!");
    println!("Enter game settings:");

    let mut session = GameSession::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return,
        };
        match session.settings_command(&line) {
            Ok(SettingsOutcome::Handled) => {}
            Ok(SettingsOutcome::Start) => break,
            Ok(SettingsOutcome::Quit) => return,
            Err(msg) => println!("{msg}"),
        }
    }

    // White always moves first, whichever side the user picked.
    loop {
        let outcome = if session.is_user_turn() {
            print!("{}", session.board());
            println!("{} player - enter your move:", session.user());
            let line = match lines.next() {
                Some(Ok(line)) => line,
                _ => return,
            };
            match session.user_move(&line) {
                Ok(outcome) => outcome,
                Err(msg) => {
                    println!("{msg}");
                    continue;
                }
            }
        } else {
            session.computer_move()
        };

        match outcome {
            TurnOutcome::Played => {}
            TurnOutcome::Quit => return,
            TurnOutcome::Winner(color) => {
                print!("{}", session.board());
                println!("{color} player wins!");
                return;
            }
        }
    }
}
