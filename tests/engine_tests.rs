use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    fleet_cell_total, Game, GameError, GameState, Orientation, Outcome, Placement, ShotEvent,
    BOARD_SIZE,
};

fn default_fleet() -> Vec<Placement> {
    vec![
        Placement {
            row: 0,
            col: 0,
            length: 5,
            orientation: Orientation::Horizontal,
        },
        Placement {
            row: 2,
            col: 0,
            length: 3,
            orientation: Orientation::Horizontal,
        },
        Placement {
            row: 4,
            col: 0,
            length: 2,
            orientation: Orientation::Horizontal,
        },
    ]
}

fn placed_game(seed: u64) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(&mut rng).unwrap();
    game.submit_fleet(&default_fleet()).unwrap();
    game
}

#[test]
fn test_new_game_starts_placing_with_random_cpu_board() {
    let mut rng = SmallRng::seed_from_u64(1);
    let game = Game::new(&mut rng).unwrap();
    assert_eq!(game.state(), GameState::Placing);
    assert_eq!(game.ships_to_place(), &[5, 3, 2]);
    assert_eq!(game.player_board().ship_cells(), 0);
    assert_eq!(game.cpu_board().ship_cells(), fleet_cell_total());
    assert_eq!(game.total_ship_cells(), fleet_cell_total());
    assert!(game.pending_targets().is_empty());
    assert_eq!(game.player_hits(), 0);
    assert_eq!(game.cpu_hits(), 0);
}

#[test]
fn test_game_ids_are_unique() {
    let mut rng = SmallRng::seed_from_u64(2);
    let a = Game::new(&mut rng).unwrap();
    let b = Game::new(&mut rng).unwrap();
    assert_ne!(a.id(), b.id());
    assert_eq!(a.id().as_str().len(), 32);
}

#[test]
fn test_submit_fleet_with_gaps_succeeds() {
    let game = placed_game(3);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert!(game.ships_to_place().is_empty());
    assert_eq!(game.player_board().ship_cells(), fleet_cell_total());
}

#[test]
fn test_submit_fleet_adjacent_rows_rejected_without_mutation() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut game = Game::new(&mut rng).unwrap();
    let adjacent = vec![
        Placement {
            row: 0,
            col: 0,
            length: 5,
            orientation: Orientation::Horizontal,
        },
        Placement {
            row: 1,
            col: 0,
            length: 3,
            orientation: Orientation::Horizontal,
        },
        Placement {
            row: 2,
            col: 0,
            length: 2,
            orientation: Orientation::Horizontal,
        },
    ];
    let err = game.submit_fleet(&adjacent).unwrap_err();
    assert!(matches!(err, GameError::InvalidPlacement { .. }));
    assert_eq!(game.state(), GameState::Placing);
    assert_eq!(game.player_board().ship_cells(), 0);
    assert_eq!(game.ships_to_place(), &[5, 3, 2]);

    // the client may retry with a corrected layout
    game.submit_fleet(&default_fleet()).unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn test_fire_before_placement_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = Game::new(&mut rng).unwrap();
    let err = game.fire_shot(&mut rng, 0, 0).unwrap_err();
    assert_eq!(
        err,
        GameError::WrongState {
            expected: GameState::PlayerTurn,
            actual: GameState::Placing,
        }
    );
    assert_eq!(game.state(), GameState::Placing);
}

#[test]
fn test_submit_after_placement_is_rejected() {
    let mut game = placed_game(6);
    let err = game.submit_fleet(&default_fleet()).unwrap_err();
    assert_eq!(
        err,
        GameError::WrongState {
            expected: GameState::Placing,
            actual: GameState::PlayerTurn,
        }
    );
}

#[test]
fn test_fire_out_of_bounds_is_rejected() {
    let mut game = placed_game(7);
    let mut rng = SmallRng::seed_from_u64(7);
    let err = game.fire_shot(&mut rng, BOARD_SIZE, 0).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidCoordinates {
            row: BOARD_SIZE,
            col: 0
        }
    );
    assert_eq!(game.player_shots().resolved_cells(), 0);
}

#[test]
fn test_repeat_shot_is_rejected_without_mutation() {
    let mut game = placed_game(8);
    let mut rng = SmallRng::seed_from_u64(8);

    let report = game.fire_shot(&mut rng, 5, 5).unwrap();
    assert!(matches!(report.player_event, ShotEvent::Hit | ShotEvent::Miss));
    assert!(game.player_shots().is_resolved(5, 5));

    let before = game.clone();
    let err = game.fire_shot(&mut rng, 5, 5).unwrap_err();
    assert_eq!(err, GameError::CellAlreadyShot { row: 5, col: 5 });
    assert_eq!(game, before);
}

#[test]
fn test_cpu_replies_within_the_same_call() {
    let mut game = placed_game(9);
    let mut rng = SmallRng::seed_from_u64(9);
    let report = game.fire_shot(&mut rng, 0, 9).unwrap();
    let cpu = report.cpu_shot.expect("computer must reply when game continues");
    assert!(game.cpu_shots().is_resolved(cpu.row, cpu.col));
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(report.state, GameState::PlayerTurn);
}

#[test]
fn test_player_win_skips_cpu_reply() {
    let mut game = placed_game(10);
    let mut rng = SmallRng::seed_from_u64(10);

    let targets: Vec<(usize, usize)> = (0..BOARD_SIZE)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
        .filter(|&(r, c)| game.cpu_board().is_occupied(r, c))
        .collect();
    assert_eq!(targets.len(), fleet_cell_total());

    let mut last = None;
    for &(r, c) in &targets {
        let report = game.fire_shot(&mut rng, r, c).unwrap();
        assert_eq!(report.player_event, ShotEvent::Hit);
        last = Some(report);
    }
    let last = last.unwrap();

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(last.state, GameState::GameOver);
    assert_eq!(last.outcome, Some(Outcome::PlayerWins));
    assert!(last.cpu_shot.is_none(), "winning shot gets no reply");
    assert_eq!(game.player_hits(), fleet_cell_total());
    // one computer reply per non-final shot
    assert_eq!(game.cpu_shots().resolved_cells(), targets.len() - 1);
    assert!(last.status_message().contains("You win"));
}

#[test]
fn test_win_triggers_exactly_on_the_final_hit() {
    let mut game = placed_game(11);
    let mut rng = SmallRng::seed_from_u64(11);

    let targets: Vec<(usize, usize)> = (0..BOARD_SIZE)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
        .filter(|&(r, c)| game.cpu_board().is_occupied(r, c))
        .collect();

    for &(r, c) in &targets[..targets.len() - 1] {
        game.fire_shot(&mut rng, r, c).unwrap();
        assert_eq!(game.state(), GameState::PlayerTurn, "game must not end early");
    }
    let (r, c) = targets[targets.len() - 1];
    let report = game.fire_shot(&mut rng, r, c).unwrap();
    assert_eq!(report.outcome, Some(Outcome::PlayerWins));

    // GAME_OVER is terminal
    let err = game.fire_shot(&mut rng, 9, 9).unwrap_err();
    assert_eq!(
        err,
        GameError::WrongState {
            expected: GameState::PlayerTurn,
            actual: GameState::GameOver,
        }
    );
}

#[test]
fn test_status_message_reports_both_shots() {
    let mut game = placed_game(12);
    let mut rng = SmallRng::seed_from_u64(12);
    let report = game.fire_shot(&mut rng, 9, 9).unwrap();
    if report.outcome.is_none() {
        let msg = report.status_message();
        assert!(msg.starts_with("You fired:"));
        assert!(msg.contains("Computer fired:"));
        assert!(msg.ends_with("Your turn."));
    }
}
