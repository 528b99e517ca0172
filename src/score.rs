//! Move scoring.
use crate::board::{letter_value, Board, Orientation, N};

/// Score a single placement.
///
/// `word_cells`/`word_codes` describe the full word left-to-right (or
/// top-to-bottom), in real board coordinates, including both pre-existing
/// and newly-placed letters; `placed` is the subset of `word_cells` that
/// come from the rack. `board` is the state *before* this move is applied,
/// so cross-word runs are read from it directly.
pub fn score_move(
    board: &Board,
    orientation: Orientation,
    word_cells: &[(usize, usize)],
    word_codes: &[u8],
    placed: &[(usize, usize)],
) -> u32 {
    debug_assert_eq!(word_cells.len(), word_codes.len());

    let mut main_total = 0u32;
    let mut word_mult = 1u32;
    for (&(row, col), &code) in word_cells.iter().zip(word_codes.iter()) {
        let mut value = letter_value(code);
        if placed.contains(&(row, col)) {
            let premium = board.premium()[(row, col)];
            value *= premium.letter_multiplier();
            word_mult *= premium.word_multiplier();
        }
        main_total += value;
    }
    main_total *= word_mult;

    let perpendicular = orientation.perpendicular();
    let mut cross_total = 0u32;
    for &(row, col) in placed {
        let idx = word_cells
            .iter()
            .position(|&cell| cell == (row, col))
            .expect("placed cell must be part of the word it was placed in");
        cross_total += cross_word_score(board, perpendicular, row, col, word_codes[idx]);
    }

    let bingo = if placed.len() == 7 { 50 } else { 0 };

    main_total + cross_total + bingo
}

/// Score the perpendicular cross-word formed at `(row, col)` by placing
/// `placed_code` there, or 0 if no cross-word forms (no occupied neighbor in
/// that direction).
fn cross_word_score(board: &Board, perpendicular: Orientation, row: usize, col: usize, placed_code: u8) -> u32 {
    let mut before = Vec::new();
    let mut after = Vec::new();

    match perpendicular {
        Orientation::Vertical => {
            let mut i = row;
            while i > 0 {
                i -= 1;
                match board.cell(i, col).code() {
                    Some(code) => before.push(code),
                    None => break,
                }
            }
            before.reverse();
            let mut i = row + 1;
            while i < N {
                match board.cell(i, col).code() {
                    Some(code) => {
                        after.push(code);
                        i += 1;
                    }
                    None => break,
                }
            }
        }
        Orientation::Horizontal => {
            let mut j = col;
            while j > 0 {
                j -= 1;
                match board.cell(row, j).code() {
                    Some(code) => before.push(code),
                    None => break,
                }
            }
            before.reverse();
            let mut j = col + 1;
            while j < N {
                match board.cell(row, j).code() {
                    Some(code) => {
                        after.push(code);
                        j += 1;
                    }
                    None => break,
                }
            }
        }
    }

    if before.is_empty() && after.is_empty() {
        return 0;
    }

    let mut total: u32 = before.iter().chain(after.iter()).map(|&code| letter_value(code)).sum();
    let premium = board.premium()[(row, col)];
    total += letter_value(placed_code) * premium.letter_multiplier();
    total * premium.word_multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::premium::PremiumGrid;

    #[test]
    fn test_simple_word_no_premiums() {
        let board = Board::with_premium(PremiumGrid::standard());
        // place "AT" at (0,1)-(0,2), both plain squares, no cross words.
        let word_cells = [(0, 1), (0, 2)];
        let word_codes = [0u8, 19u8]; // A, T
        let placed = [(0, 1), (0, 2)];
        let score = score_move(&board, Orientation::Horizontal, &word_cells, &word_codes, &placed);
        assert_eq!(score, letter_value(0) + letter_value(19));
    }

    #[test]
    fn test_center_square_doubles_word() {
        let board = Board::empty();
        let word_cells = [(7, 6), (7, 7), (7, 8)];
        let word_codes = [2u8, 0u8, 19u8]; // C, A, T
        let placed = [(7, 6), (7, 7), (7, 8)];
        let score = score_move(&board, Orientation::Horizontal, &word_cells, &word_codes, &placed);
        let raw: u32 = word_codes.iter().map(|&c| letter_value(c)).sum();
        assert_eq!(score, raw * 2);
    }

    #[test]
    fn test_cross_word_formed_by_placed_letter() {
        let mut rows = vec![" ".repeat(N); N];
        rows[6].replace_range(7..8, "A");
        rows[8].replace_range(7..8, "T");
        let board = Board::with_state_from_strings(&rows).unwrap();
        // placing 'C' at (7,7) horizontally forms the vertical cross-word "ACT"
        let word_cells = [(7, 7)];
        let word_codes = [2u8];
        let placed = [(7, 7)];
        let score = score_move(&board, Orientation::Horizontal, &word_cells, &word_codes, &placed);
        let premium = board.premium()[(7, 7)];
        let main_word = letter_value(2) * premium.letter_multiplier() * premium.word_multiplier();
        let cross_word =
            (letter_value(0) + letter_value(19) + letter_value(2) * premium.letter_multiplier()) * premium.word_multiplier();
        assert_eq!(score, main_word + cross_word);
    }

    #[test]
    fn test_bingo_bonus() {
        let board = Board::empty();
        let word_cells: Vec<(usize, usize)> = (4..11).map(|c| (7, c)).collect();
        let word_codes = vec![0u8; 7];
        let placed = word_cells.clone();
        let score = score_move(&board, Orientation::Horizontal, &word_cells, &word_codes, &placed);
        assert!(score >= 50);
    }
}
