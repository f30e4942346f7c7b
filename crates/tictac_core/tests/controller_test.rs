//! Tests for the session controller.

use tictac_core::{
    Cell, Difficulty, GameController, Input, Opponents, Optimal, Outcome, Position,
    ScoreBoard, Side, Strategy, TurnState,
};

/// Plays one round with `x` choosing the human's moves and no think delay.
fn play_round(game: &mut GameController, x: &mut dyn Strategy) -> Outcome {
    while *game.state() == TurnState::AwaitingHuman {
        let pos = x.choose_move(game.board(), Side::X).unwrap();
        if let Some(turn) = game.select_cell(pos) {
            game.play_computer_turn(turn).unwrap();
        }
    }
    assert_eq!(*game.state(), TurnState::RoundOver);
    game.outcome()
}

#[test]
fn test_scripted_game_ends_in_full_draw() {
    let mut game = GameController::with_seed(Difficulty::Easy, 3);

    let turn = game.select_cell(Position::TopLeft).unwrap();
    let reply = game.play_computer_turn(turn).unwrap().unwrap();
    assert_eq!(reply.position, Position::Center);

    let turn = game.select_cell(Position::BottomRight).unwrap();
    let reply = game.play_computer_turn(turn).unwrap().unwrap();
    assert_eq!(reply.position, Position::TopCenter);

    // X keeps playing best moves from here.
    let outcome = play_round(&mut game, &mut Optimal);

    assert_eq!(outcome, Outcome::Draw);
    assert!(game.board().is_full());
    assert_eq!(game.history().len(), 9);
    assert_eq!(game.message(), "Draw!");
    assert_eq!(*game.scores().draws(), 1);
}

#[test]
fn test_click_on_filled_cell_is_ignored() {
    let mut game = GameController::with_seed(Difficulty::Easy, 3);
    let turn = game.select_cell(Position::Center).unwrap();
    game.play_computer_turn(turn).unwrap();

    let board = *game.board();
    let state = *game.state();
    assert_eq!(state, TurnState::AwaitingHuman);

    let occupied = Position::ALL
        .into_iter()
        .find(|&pos| board.get(pos) == Cell::Occupied(Side::O))
        .unwrap();
    assert!(game.select_cell(occupied).is_none());
    assert!(game.select_cell(Position::Center).is_none());
    assert_eq!(*game.board(), board);
    assert_eq!(*game.state(), state);
}

#[test]
fn test_human_win_counts_once() {
    // Perfect X against a random O wins quickly.
    let mut game = GameController::with_seed(Difficulty::Hard, 17);
    let mut x = Optimal;
    let mut x_won = false;

    for _ in 0..50 {
        let before: ScoreBoard = *game.scores();
        let outcome = play_round(&mut game, &mut x);
        let after = *game.scores();

        match outcome {
            Outcome::Win(Side::X) => {
                assert_eq!(*after.x_wins(), before.x_wins() + 1);
                assert_eq!(after.o_wins(), before.o_wins());
                assert_eq!(after.draws(), before.draws());
                assert_eq!(game.message(), "X wins!");
                x_won = true;
                break;
            }
            Outcome::Win(Side::O) => panic!("random O beat perfect X"),
            _ => assert_eq!(after.rounds(), before.rounds() + 1),
        }
        game.restart();
    }

    assert!(x_won, "X never won");
}

#[test]
fn test_round_over_ignores_clicks_until_restart() {
    let mut game = GameController::with_seed(Difficulty::Hard, 5);
    play_round(&mut game, &mut Optimal);

    let board = *game.board();
    for pos in Position::ALL {
        assert!(game.select_cell(pos).is_none());
    }
    assert_eq!(*game.board(), board);
    assert_eq!(*game.state(), TurnState::RoundOver);

    game.restart();
    assert_eq!(*game.state(), TurnState::AwaitingHuman);
    assert!(game.board().empty_positions().len() == 9);
    assert!(game.message().is_empty());
    assert!(game.history().is_empty());
}

#[test]
fn test_restart_keeps_score_and_new_game_clears_it() {
    let mut game = GameController::with_seed(Difficulty::Easy, 5);
    play_round(&mut game, &mut Optimal);
    let scores = *game.scores();
    assert_eq!(scores.rounds(), 1);

    game.handle(Input::Restart);
    assert_eq!(*game.scores(), scores);

    play_round(&mut game, &mut Optimal);
    assert_eq!(game.scores().rounds(), 2);

    game.handle(Input::NewGame);
    assert_eq!(*game.scores(), ScoreBoard::new());
    assert_eq!(*game.state(), TurnState::AwaitingHuman);
    assert_eq!(game.board().empty_positions().len(), 9);
}

#[test]
fn test_difficulty_change_applies_to_next_computer_move() {
    // Find a seed where the random pick differs from minimax's reply.
    let after_x: tictac_core::Board = "X________".parse().unwrap();
    let (seed, expected) = (0..64)
        .find_map(|seed| {
            let pick = Opponents::seeded(seed)
                .for_difficulty(Difficulty::Hard)
                .choose_move(&after_x, Side::O)
                .unwrap();
            (pick != Position::Center).then_some((seed, pick))
        })
        .unwrap();

    let mut game = GameController::with_seed(Difficulty::Easy, seed);
    let turn = game.handle(Input::SelectCell(Position::TopLeft)).unwrap();
    // Changed while the computer is "thinking".
    assert!(game.handle(Input::ChangeDifficulty(Difficulty::Hard)).is_none());
    assert_eq!(*game.difficulty(), Difficulty::Hard);

    let reply = game.play_computer_turn(turn).unwrap().unwrap();
    assert_eq!(reply.position, expected);
}

#[test]
fn test_difficulty_change_accepted_when_round_over() {
    let mut game = GameController::with_seed(Difficulty::Easy, 5);
    play_round(&mut game, &mut Optimal);
    game.set_difficulty(Difficulty::Medium);
    assert_eq!(*game.difficulty(), Difficulty::Medium);
    assert_eq!(*game.state(), TurnState::RoundOver);
}

#[test]
fn test_view_serializes() {
    let mut game = GameController::with_seed(Difficulty::Medium, 5);
    let _turn = game.select_cell(Position::Center);
    let json = serde_json::to_value(game.view()).unwrap();
    assert_eq!(json["difficulty"], "medium");
    assert_eq!(json["state"], "AwaitingComputer");
    assert_eq!(json["cells"][4], "X");
    assert_eq!(json["scores"]["x_wins"], 0);
}
