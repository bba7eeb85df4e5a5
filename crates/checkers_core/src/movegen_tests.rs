use super::*;
use crate::config::Configuration;

fn position(player: &str, rows: [&str; 8]) -> Position {
    let text = format!(
        "{player}\nMINIMAX\n2\n{}\n10,20,30,40,50,60,70,80\n",
        rows.join("\n")
    );
    Configuration::parse(&text).unwrap().initial_position()
}

fn step(from: (u8, u8), to: (u8, u8)) -> Move {
    Move::step(Square::new(from.0, from.1), Square::new(to.0, to.1))
}

const EMPTY: &str = "0,0,0,0,0,0,0,0";

#[test]
fn test_step_then_jump_order() {
    let pos = position(
        "Star",
        [
            "0,S1,0,0,0,0,0,0",
            "0,0,C1,0,0,0,0,0",
            "0,0,0,S1,0,0,0,0",
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
        ],
    );
    let moves = legal_moves(&pos);
    assert_eq!(moves, vec![step((2, 3), (1, 4)), step((2, 3), (0, 1))]);
}

#[test]
fn test_stuck_side_passes() {
    let pos = position(
        "Circle",
        [
            "0,S2,0,0,0,0,0,0",
            "S1,0,0,0,0,0,0,0",
            "0,0,0,0,0,0,0,C1",
            "0,0,0,0,0,0,S1,0",
            "0,0,0,0,0,S1,0,0",
            EMPTY,
            EMPTY,
            EMPTY,
        ],
    );
    assert_eq!(legal_moves(&pos), vec![Move::Pass]);
    assert!(!has_any_move(&pos, Side::Circle));
    assert!(has_any_move(&pos, Side::Star));

    let star_turn = pos.apply(Move::Pass);
    assert_eq!(
        legal_moves(&star_turn),
        vec![
            step((1, 0), (0, 1)),
            step((3, 6), (2, 5)),
            step((4, 5), (3, 4)),
        ]
    );
}

#[test]
fn test_circle_moves_down_and_jumps() {
    let pos = position(
        "Circle",
        [
            "0,S100,0,0,0,0,0,0",
            "0,0,C1,0,0,0,0,0",
            "0,0,0,S1,0,0,0,0",
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
        ],
    );
    assert_eq!(
        legal_moves(&pos),
        vec![step((1, 2), (2, 1)), step((1, 2), (3, 4))]
    );
}

#[test]
fn test_cannot_land_on_enemy_at_goal_row() {
    let pos = position(
        "Star",
        [
            "0,C1,0,0,0,0,0,0",
            "0,0,C1,0,0,0,0,0",
            "0,0,0,S1,0,0,0,0",
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
        ],
    );
    assert_eq!(legal_moves(&pos), vec![step((2, 3), (1, 4))]);
}

#[test]
fn test_step_onto_own_stack_at_goal_row() {
    let pos = position(
        "Star",
        [
            "0,S2,0,0,0,0,0,0",
            "S1,0,C1,0,0,0,0,0",
            "0,0,0,0,0,0,0,C1",
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
        ],
    );
    assert_eq!(legal_moves(&pos), vec![step((1, 0), (0, 1))]);
}

#[test]
fn test_cannot_stack_away_from_goal_row() {
    let pos = position(
        "Star",
        [
            EMPTY,
            EMPTY,
            EMPTY,
            "0,0,S1,0,0,0,0,0",
            "0,S1,0,C1,0,0,0,0",
            EMPTY,
            EMPTY,
            EMPTY,
        ],
    );
    // (4,1) is blocked on the right by its own piece, (3,2) steps freely
    assert_eq!(
        legal_moves(&pos),
        vec![
            step((3, 2), (2, 1)),
            step((3, 2), (2, 3)),
            step((4, 1), (3, 0)),
        ]
    );
}

#[test]
fn test_pieces_on_goal_row_have_no_moves() {
    let star = position(
        "Star",
        ["S1,0,0,0,0,0,0,S1", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "0,0,0,C1,0,0,0,0"],
    );
    assert_eq!(legal_moves(&star), vec![Move::Pass]);

    let circle = star.apply(Move::Pass);
    assert_eq!(legal_moves(&circle), vec![Move::Pass]);
    assert!(circle.is_stalemated());
}

#[test]
fn test_edge_column_only_one_diagonal() {
    let pos = position(
        "Circle",
        [EMPTY, EMPTY, EMPTY, "C1,0,0,0,0,0,0,C1", EMPTY, EMPTY, "S1,0,0,0,0,0,0,0", EMPTY],
    );
    assert_eq!(
        legal_moves(&pos),
        vec![step((3, 0), (4, 1)), step((3, 7), (4, 6))]
    );
}

#[test]
fn test_jump_off_board_is_illegal() {
    // Circle on row 6 would land past row 7, and its goal row holds Star pieces
    let pos = position(
        "Circle",
        [EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "0,0,C1,0,0,0,0,0", "0,S1,0,S1,0,0,0,0"],
    );
    assert_eq!(legal_moves(&pos), vec![Move::Pass]);
}

#[test]
fn test_circle_jump_onto_own_goal_stack() {
    let pos = position(
        "Circle",
        [EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "0,0,C1,0,0,0,0,0", "0,S1,0,S1,0,0,0,0", "C3,0,0,0,0,0,0,0"],
    );
    // Steps blocked by Star pieces; the left jump lands on the Circle stack at row 7
    assert_eq!(
        legal_moves(&pos),
        vec![step((5, 2), (7, 0)), step((5, 2), (7, 4))]
    );
}

#[test]
fn test_fully_blocked_board() {
    let pos = position(
        "Star",
        [
            "0,C1,0,C1,0,C1,0,C1",
            "C1,0,C1,0,C1,0,C1,0",
            "0,S1,0,S1,0,S1,0,S1",
            "S1,0,S1,0,S1,0,S1,0",
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
        ],
    );
    assert_eq!(legal_moves(&pos), vec![Move::Pass]);
    assert!(pos.is_stalemated());
}

#[test]
fn test_legal_moves_into_reuses_buffer() {
    let pos = position(
        "Star",
        ["0,S1,0,0,0,0,0,0", "0,0,C1,0,0,0,0,0", "0,0,0,S1,0,0,0,0", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY],
    );
    let mut buf = vec![Move::Pass; 10];
    legal_moves_into(&pos, &mut buf);
    assert_eq!(buf.len(), 2);
}
