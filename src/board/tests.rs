use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
}

#[test]
fn test_player_numbering() {
    assert_eq!(Player::One.number(), 1);
    assert_eq!(Player::Two.number(), 2);
    assert_eq!(Player::Two.index(), 1);
}

#[test]
fn test_cell_owner() {
    assert_eq!(Cell::Empty.player(), None);
    assert_eq!(Cell::Stone(Player::Two).player(), Some(Player::Two));
    assert!(Cell::default().is_empty());
}

#[test]
fn test_board_pos_bounds() {
    let board = Board::new(19);
    assert!(board.pos(0, 0).is_some());
    assert!(board.pos(18, 18).is_some());
    assert!(board.pos(-1, 0).is_none());
    assert!(board.pos(0, -1).is_none());
    assert!(board.pos(19, 0).is_none());
    assert!(board.pos(0, 19).is_none());
}

#[test]
fn test_board_step_guards() {
    let board = Board::new(5);
    let corner = Pos::new(0, 0);
    assert_eq!(board.step(corner, Direction::SOUTH_EAST, 4), Some(Pos::new(4, 4)));
    assert_eq!(board.step(corner, Direction::SOUTH_EAST, 5), None);
    assert_eq!(board.step(corner, Direction::SOUTH_WEST, 1), None);
    assert_eq!(board.cell(-1, 2), None);
}

#[test]
fn test_board_center() {
    assert_eq!(Board::new(19).center(), Pos::new(9, 9));
    assert_eq!(Board::new(6).center(), Pos::new(3, 3));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_chebyshev() {
    assert_eq!(Pos::new(9, 9).chebyshev(Pos::new(11, 8)), 2);
    assert_eq!(Pos::new(0, 0).chebyshev(Pos::new(0, 0)), 0);
}

#[test]
fn test_direction_sets() {
    assert_eq!(Direction::ALL.len(), 8);
    for dir in Direction::AXES {
        assert!(Direction::ALL.contains(&dir));
        assert!(Direction::ALL.contains(&dir.reversed()));
    }
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new(9);
    let pos = Pos::new(3, 4);
    board.place_stone(pos, Player::One);
    assert_eq!(board.get(pos), Cell::Stone(Player::One));
    assert_eq!(board.stone_count(), 1);
    board.remove_stone(pos);
    assert!(board.is_board_empty());
}

#[test]
fn test_positions_row_major() {
    let board = Board::new(5);
    let all: Vec<Pos> = board.positions().collect();
    assert_eq!(all.len(), 25);
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_full_board() {
    let mut board = Board::new(5);
    assert!(!board.is_full());
    for pos in board.clone().positions() {
        board.place_stone(pos, Player::Two);
    }
    assert!(board.is_full());
    assert_eq!(board.empty_positions().count(), 0);
}

#[test]
fn test_display_marks() {
    let mut board = Board::new(5);
    board.place_stone(Pos::new(0, 0), Player::One);
    board.place_stone(Pos::new(0, 1), Player::Two);
    let text = board.to_string();
    assert!(text.contains('X'));
    assert!(text.contains('O'));
    assert_eq!(text.lines().count(), 6);
}
