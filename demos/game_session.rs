//! Game Session
//!
//! This example demonstrates layering legality rules on top of the
//! executor: the machine accepts any target state, so the session rules
//! ("no leaving GameOver") live in guards supplied by the caller.
//!
//! Run with: cargo run --example game_session

use pivot::core::{Guard, State};
use pivot::machine::StateMachine;
use pivot::state_enum;

state_enum! {
    enum GameState {
        Playing,
        Paused,
        GameOver,
    }
    final: [GameOver]
}

/// Session rule: a finished game never resumes.
fn not_finished() -> Guard<GameState> {
    Guard::new(|s: &GameState| !s.is_final())
}

fn main() {
    println!("=== Game Session Example ===\n");

    let mut session = StateMachine::new(GameState::Playing);
    println!("Session starts {:?}", session.current_state());

    // Pause menu opened; no hooks needed.
    session.transition(GameState::Paused).unwrap();
    println!("Paused: {:?}", session.current_state());

    // Back to the game.
    session
        .transition_to(GameState::Playing)
        .guard(not_finished())
        .commit()
        .unwrap();
    println!("Resumed: {:?}", session.current_state());

    // Player dies.
    session.transition(GameState::GameOver).unwrap();
    println!("Game over. Final state: {}", session.is_final());

    // A stray resume request hits the guard and is rejected.
    match session
        .transition_to(GameState::Playing)
        .guard(not_finished())
        .commit()
    {
        Ok(()) => println!("Resumed?!"),
        Err(err) => println!("Rejected as expected: {err}"),
    }
    println!("Still {:?}", session.current_state());

    println!("\n=== Example Complete ===");
}
