//! Tests for cell-identifier parsing.

use kinarow_engine::{MoveError, Position};

#[test]
fn test_identifier_maps_letter_to_row_and_digit_to_column() {
    let position: Position = "a1".parse().unwrap();
    assert_eq!((position.row(), position.column()), (0, 0));

    let position: Position = "b3".parse().unwrap();
    assert_eq!((position.row(), position.column()), (1, 2));

    let position: Position = "z9".parse().unwrap();
    assert_eq!((position.row(), position.column()), (25, 8));
}

#[test]
fn test_uppercase_letters_accepted() {
    let position: Position = "B3".parse().unwrap();
    assert_eq!((position.row(), position.column()), (1, 2));
}

#[test]
fn test_rejects_anything_but_letter_digit() {
    for bad in ["", "a", "3", "11", "aa", "a10", "3b", " a1", "a1 ", "a-1"] {
        assert_eq!(
            bad.parse::<Position>().unwrap_err(),
            MoveError::MalformedIdentifier(bad.to_string()),
            "expected {bad:?} to be rejected",
        );
    }
}

#[test]
fn test_parse_has_no_bounds_knowledge() {
    // The parser accepts any letter-digit pair; bounds are the engine's
    // concern.
    assert!("z1".parse::<Position>().is_ok());
    assert!("a9".parse::<Position>().is_ok());
}
