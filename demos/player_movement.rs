//! Player Movement
//!
//! This example demonstrates driving a character's movement states from
//! external events, with exit/entry hooks doing the side-effect work
//! (starting and stopping animations).
//!
//! Key concepts:
//! - One machine, one current state
//! - Hooks bound to the state being left and the state being entered
//! - Same-state requests are no-ops, so a held input is harmless
//!
//! Run with: cargo run --example player_movement

use pivot::core::{Hook, State};
use pivot::machine::StateMachine;
use pivot::state_enum;

state_enum! {
    enum PlayerState {
        Idle,
        Walking,
        Running,
    }
}

fn main() {
    println!("=== Player Movement Example ===\n");

    let mut player = StateMachine::new(PlayerState::Idle);
    println!("Spawned at {:?}", player.current_state());

    // Movement input arrives.
    player
        .transition_to(PlayerState::Walking)
        .on_exit(Hook::from_fn(|| println!("  [anim] stop idle loop")))
        .on_enter(Hook::from_fn(|| println!("  [anim] start walk cycle")))
        .commit()
        .unwrap();
    println!("Now {:?}", player.current_state());

    // The same input held across several frames: each repeated request
    // is a no-op, so the walk cycle is not restarted.
    for _ in 0..3 {
        player
            .transition_to(PlayerState::Walking)
            .on_enter(Hook::from_fn(|| println!("  [anim] (would restart walk)")))
            .commit()
            .unwrap();
    }
    println!("Still {:?} after held input", player.current_state());

    // Sprint key pressed.
    player
        .transition_to(PlayerState::Running)
        .on_exit(Hook::from_fn(|| println!("  [anim] stop walk cycle")))
        .on_enter(Hook::from_fn(|| println!("  [anim] start run cycle")))
        .commit()
        .unwrap();
    println!("Now {:?}", player.current_state());

    let visited: Vec<&str> = player.history().path().iter().map(|s| s.name()).collect();
    println!("\nPath so far: {}", visited.join(" -> "));

    println!("\n=== Example Complete ===");
}
