use super::*;

#[test]
fn test_offset_stays_on_board() {
    let sq = Square::new(0, 0);
    assert_eq!(sq.offset(1, 1), Some(Square::new(1, 1)));
    assert_eq!(sq.offset(-1, 1), None);
    assert_eq!(sq.offset(1, -1), None);
    assert_eq!(Square::new(7, 7).offset(1, 0), None);
}

#[test]
fn test_sides_advance_toward_their_goal_row() {
    let star = Square::new(3, 3).offset(Side::Star.forward(), 0).unwrap();
    let circle = Square::new(3, 3).offset(Side::Circle.forward(), 0).unwrap();
    assert_eq!(star.row, 2);
    assert_eq!(circle.row, 4);
    assert_eq!(Side::Star.goal_row(), 0);
    assert_eq!(Side::Circle.goal_row(), 7);
    assert_eq!(Side::Star.other(), Side::Circle);
}

#[test]
fn test_symbol_parsing() {
    assert_eq!(Side::from_symbol('S'), Some(Side::Star));
    assert_eq!(Side::from_symbol('c'), Some(Side::Circle));
    assert_eq!(Side::from_symbol('X'), None);
    assert_eq!(Side::Circle.symbol(), 'C');
}

#[test]
fn test_jump_captures_midpoint() {
    let jump = Move::step(Square::new(2, 3), Square::new(0, 1));
    let step = Move::step(Square::new(2, 3), Square::new(1, 4));
    assert!(jump.is_jump());
    assert_eq!(jump.captured_square(), Some(Square::new(1, 2)));
    assert!(!step.is_jump());
    assert_eq!(step.captured_square(), None);
    assert_eq!(Move::Pass.captured_square(), None);
}
