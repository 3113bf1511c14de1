//! End-to-end session tests through the public API

use hexfall_core::core::{matcher, HexGrid};
use hexfall_core::{
    CellContent, Color, Coord, CoreError, Direction, Event, Session, SessionConfig, Spin,
};

fn quiet_grid() -> HexGrid {
    let mut grid = HexGrid::new(9, 8);
    let colors = [Color::Red, Color::Yellow, Color::Blue];
    for row in 0..9 {
        for col in 0..8 {
            let idx = ((row + 2 * col) % 3) as usize;
            grid.set(Coord::new(row, col), CellContent::Tile(colors[idx]));
        }
    }
    grid
}

fn restricted_config() -> SessionConfig {
    SessionConfig {
        palette: vec![Color::Red, Color::Yellow, Color::Blue],
        seed: 9,
        ..SessionConfig::default()
    }
}

/// One clockwise step of the RightBottom triad at (4, 2) moves the green
/// from (5, 2) onto the pivot and completes the triangle with (3, 2) and
/// (3, 3). The other planted colors are unique on the board.
fn match_in_one_step() -> HexGrid {
    let mut grid = quiet_grid();
    grid.set(Coord::new(4, 2), CellContent::Tile(Color::Purple));
    grid.set(Coord::new(5, 2), CellContent::Tile(Color::Green));
    grid.set(Coord::new(4, 3), CellContent::Tile(Color::Orange));
    grid.set(Coord::new(3, 2), CellContent::Tile(Color::Green));
    grid.set(Coord::new(3, 3), CellContent::Tile(Color::Green));
    grid
}

fn rb_first() -> [Direction; 6] {
    [
        Direction::RightBottom,
        Direction::RightTop,
        Direction::RightSide,
        Direction::LeftTop,
        Direction::LeftSide,
        Direction::LeftBottom,
    ]
}

fn exploded_total(events: &[Event]) -> usize {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Exploded { cells } => Some(cells.len()),
            _ => None,
        })
        .sum()
}

#[test]
fn fresh_session_starts_full_quiescent_and_scoreless() {
    let session = Session::new(SessionConfig::default()).unwrap();
    let snap = session.snapshot();
    assert_eq!(snap.height, 9);
    assert_eq!(snap.width, 8);
    assert!(snap.cells.iter().all(|c| !c.is_empty()));
    assert_eq!(snap.score, 0);
    assert_eq!(snap.moves, 0);
    assert!(!snap.game_over);
}

#[test]
fn configured_dimensions_are_respected() {
    let session = Session::new(SessionConfig {
        height: 5,
        width: 4,
        ..SessionConfig::default()
    })
    .unwrap();
    let snap = session.snapshot();
    assert_eq!(snap.height, 5);
    assert_eq!(snap.width, 4);
    assert_eq!(snap.cells.len(), 20);
}

#[test]
fn out_of_range_config_is_rejected() {
    for config in [
        SessionConfig {
            height: 10,
            ..SessionConfig::default()
        },
        SessionConfig {
            width: 3,
            ..SessionConfig::default()
        },
        SessionConfig {
            palette: vec![Color::Green],
            ..SessionConfig::default()
        },
    ] {
        assert!(matches!(
            Session::new(config),
            Err(CoreError::InvalidConfig(_))
        ));
    }
}

#[test]
fn failed_rotation_is_a_full_cycle_no_op() {
    let mut session = Session::with_grid(restricted_config(), quiet_grid()).unwrap();
    let before = session.snapshot();
    let triad = session
        .candidate_triad(Coord::new(4, 2), rb_first())
        .unwrap();

    for spin in [Spin::Clockwise, Spin::CounterClockwise] {
        let events = session.commit_rotation(&triad, spin).unwrap();
        assert_eq!(events.len(), 9);
        assert!(events.iter().all(|e| matches!(e, Event::Moved { .. })));
        assert_eq!(session.snapshot(), before);
    }
    assert_eq!(session.moves(), 0);
}

#[test]
fn successful_rotation_stops_early_and_resolves() {
    let mut session = Session::with_grid(restricted_config(), match_in_one_step()).unwrap();
    let triad = session
        .candidate_triad(Coord::new(4, 2), rb_first())
        .unwrap();
    let events = session.commit_rotation(&triad, Spin::Clockwise).unwrap();

    // stopped after one step: exactly three Moved events before the cascade
    assert!(matches!(events[0], Event::Moved { .. }));
    assert!(matches!(events[2], Event::Moved { .. }));
    assert!(!matches!(events[3], Event::Moved { .. }));

    assert_eq!(session.moves(), 1);
    let snap = session.snapshot();
    assert!(snap.cells.iter().all(|c| !c.is_empty()));
    assert_eq!(snap.score, 5 * exploded_total(&events) as u32);
    assert!(snap.score >= 15);
}

#[test]
fn event_log_orders_score_before_explosion() {
    let mut session = Session::with_grid(restricted_config(), match_in_one_step()).unwrap();
    let triad = session
        .candidate_triad(Coord::new(4, 2), rb_first())
        .unwrap();
    let events = session.commit_rotation(&triad, Spin::Clockwise).unwrap();

    let score_pos = events
        .iter()
        .position(|e| matches!(e, Event::ScoreChanged { .. }))
        .unwrap();
    let exploded_pos = events
        .iter()
        .position(|e| matches!(e, Event::Exploded { .. }))
        .unwrap();
    let spawn_pos = events
        .iter()
        .position(|e| matches!(e, Event::Spawned { .. }))
        .unwrap();
    assert!(score_pos < exploded_pos);
    assert!(exploded_pos < spawn_pos);

    assert_eq!(
        events[score_pos],
        Event::ScoreChanged { score: 15 },
        "first wave clears exactly the planted triangle"
    );
}

#[test]
fn spawned_cells_land_on_previously_cleared_columns() {
    let mut session = Session::with_grid(restricted_config(), match_in_one_step()).unwrap();
    let triad = session
        .candidate_triad(Coord::new(4, 2), rb_first())
        .unwrap();
    let events = session.commit_rotation(&triad, Spin::Clockwise).unwrap();

    let spawned: Vec<Coord> = events
        .iter()
        .filter_map(|e| match e {
            Event::Spawned { cell, .. } => Some(*cell),
            _ => None,
        })
        .collect();
    assert_eq!(spawned.len(), exploded_total(&events));
    // refills enter at the top of their column
    for wave_cell in &spawned {
        assert!(wave_cell.row >= 0 && wave_cell.row < 9);
    }
}

#[test]
fn stale_triad_after_cascade_is_rejected() {
    let mut session = Session::with_grid(restricted_config(), match_in_one_step()).unwrap();
    let triad = session
        .candidate_triad(Coord::new(4, 2), rb_first())
        .unwrap();
    session.commit_rotation(&triad, Spin::Clockwise).unwrap();

    // same pivot and direction still form a triangle, so the old handle
    // stays usable; a forged one with foreign cells does not
    let mut forged = triad;
    forged.cells[2] = Coord::new(0, 0);
    assert_eq!(
        session.commit_rotation(&forged, Spin::Clockwise),
        Err(CoreError::InvalidTriad)
    );
}

#[test]
fn countdown_ticks_on_each_successful_move() {
    let mut grid = match_in_one_step();
    grid.set(
        Coord::new(8, 7),
        CellContent::Countdown {
            color: Color::Purple,
            remaining: 2,
        },
    );
    let mut session = Session::with_grid(restricted_config(), grid).unwrap();

    // first successful move: 2 -> 1
    let triad = session
        .candidate_triad(Coord::new(4, 2), rb_first())
        .unwrap();
    let events = session.commit_rotation(&triad, Spin::Clockwise).unwrap();
    assert!(events.contains(&Event::CountdownTicked {
        cell: Coord::new(8, 7),
        remaining: 1
    }));
    assert!(!session.is_game_over());
}

#[test]
fn game_over_rejects_further_moves() {
    let mut grid = match_in_one_step();
    grid.set(
        Coord::new(8, 7),
        CellContent::Countdown {
            color: Color::Purple,
            remaining: 1,
        },
    );
    let mut session = Session::with_grid(restricted_config(), grid).unwrap();
    let triad = session
        .candidate_triad(Coord::new(4, 2), rb_first())
        .unwrap();
    let events = session.commit_rotation(&triad, Spin::Clockwise).unwrap();

    assert_eq!(events.last(), Some(&Event::GameOver));
    assert!(session.snapshot().game_over);
    assert_eq!(
        session.commit_rotation(&triad, Spin::Clockwise),
        Err(CoreError::GameOver)
    );
}

#[test]
fn play_again_starts_a_fresh_round() {
    let mut grid = match_in_one_step();
    grid.set(
        Coord::new(8, 7),
        CellContent::Countdown {
            color: Color::Purple,
            remaining: 1,
        },
    );
    let mut session = Session::with_grid(restricted_config(), grid).unwrap();
    let triad = session
        .candidate_triad(Coord::new(4, 2), rb_first())
        .unwrap();
    session.commit_rotation(&triad, Spin::Clockwise).unwrap();
    assert!(session.is_game_over());

    session.play_again();
    let snap = session.snapshot();
    assert!(!snap.game_over);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.moves, 0);
    assert!(snap.cells.iter().all(|c| !c.is_empty()));
    assert!(!snap
        .cells
        .iter()
        .any(|c| matches!(c, CellContent::Countdown { .. })));
}

#[test]
fn every_commit_leaves_a_full_quiescent_board() {
    // sweep a deterministic session with many rotations; whatever matches
    // or fails, the board must come back full with no cluster left behind
    let mut session = Session::new(SessionConfig {
        seed: 1234,
        ..SessionConfig::default()
    })
    .unwrap();

    for row in 0..9 {
        for col in 0..8 {
            let Some(triad) = session.candidate_triad(Coord::new(row, col), Direction::ALL)
            else {
                continue;
            };
            let spin = if (row + col) % 2 == 0 {
                Spin::Clockwise
            } else {
                Spin::CounterClockwise
            };
            match session.commit_rotation(&triad, spin) {
                Ok(events) => {
                    let snap = session.snapshot();
                    assert!(snap.cells.iter().all(|c| !c.is_empty()));
                    assert!(!events.is_empty());
                }
                Err(CoreError::GameOver) => return,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
    }

    // total score matches the points awarded per exploded cell
    let snap = session.snapshot();
    assert_eq!(snap.moves, session.moves());
    assert_eq!(snap.score, session.score());
}

#[test]
fn quiescence_holds_after_each_move() {
    let mut session = Session::with_grid(restricted_config(), match_in_one_step()).unwrap();
    let triad = session
        .candidate_triad(Coord::new(4, 2), rb_first())
        .unwrap();
    session.commit_rotation(&triad, Spin::Clockwise).unwrap();

    // rebuild a board from the snapshot and rescan: nothing left to clear
    let snap = session.snapshot();
    let mut grid = HexGrid::new(snap.height, snap.width);
    for row in 0..snap.height as i8 {
        for col in 0..snap.width as i8 {
            let coord = Coord::new(row, col);
            grid.set(coord, snap.content_at(coord).unwrap());
        }
    }
    assert!(matcher::scan(&grid).is_empty());
}
