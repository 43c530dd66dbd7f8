//! Integration tests for a human-versus-computer session.

use noughts::{
    AI_MARK, BoardState, DelayedMove, EngineConfig, GameResult, InvalidMove, Mark, SinglePlayerGame,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Human always takes the lowest empty cell; the computer replies after a delay.
#[tokio::test]
async fn test_session_with_delayed_replies() {
    init_tracing();
    let config = EngineConfig::default().with_ai_delay_ms(1);
    let mut game = SinglePlayerGame::new();

    loop {
        let index = game.board().empty_cells().next().expect("game still running");
        let result = game.human_move(index).expect("lowest empty cell is legal");
        if result.is_terminal() {
            break;
        }

        let pending = game.plan_computer_move().expect("computer has the move");
        let landed = pending.land_after(config.ai_delay()).await;
        assert_eq!(landed, pending);
        let result = game
            .commit(landed)
            .expect("computer move is legal")
            .expect("plan is current");
        if result.is_terminal() {
            break;
        }
    }

    assert_ne!(game.result(), GameResult::Win(SinglePlayerGame::HUMAN));
    assert_eq!(
        game.history().len(),
        9 - game.board().empty_cells().count()
    );
    assert!(!game.computer_to_move());
}

#[tokio::test]
async fn test_reset_during_delay_discards_move() {
    init_tracing();
    let mut game = SinglePlayerGame::new();
    game.human_move(4).unwrap();

    let pending = game.plan_computer_move().unwrap();
    let task = tokio::spawn(pending.land_after(Duration::from_millis(2)));
    game.reset();
    let landed = task.await.unwrap();

    assert_eq!(game.commit(landed), Ok(None));
    assert_eq!(*game.board(), BoardState::new());
}

#[test]
fn test_moves_after_game_over_rejected() {
    let mut game = SinglePlayerGame::new();
    // Human always takes the highest empty cell.
    let mut result = GameResult::InProgress;
    while !result.is_terminal() {
        let index = game.board().empty_cells().last().unwrap();
        result = game.human_move(index).unwrap();
        if !result.is_terminal() {
            result = game.play_computer_move().unwrap().unwrap();
        }
    }
    let before = *game.board();
    let empty = game.board().empty_cells().next();
    if let Some(index) = empty {
        assert!(matches!(
            game.human_move(index),
            Err(InvalidMove::GameOver(_))
        ));
    }
    assert_eq!(*game.board(), before);
    assert_eq!(game.play_computer_move(), Ok(None));
}

#[test]
fn test_delayed_move_for_either_side() {
    let board: BoardState = "XOX/.O./X..".parse().unwrap();
    let pending = DelayedMove::compute(&board, AI_MARK);
    assert_eq!(*pending.index(), 7);
    assert_eq!(*pending.mark(), Mark::O);
    let after = pending.apply().unwrap();
    assert_eq!(noughts::evaluate(&after), GameResult::Win(Mark::O));
}
