//! Top-level `best_move` orchestration.
use crate::anchor::find_anchors;
use crate::board::{Board, Orientation};
use crate::crosscheck::compute_cross_checks;
use crate::dictionary::Dictionary;
use crate::letters::Rack;
use crate::movegen::{generate_moves, Candidate};
use crate::score::score_move;

/// The best legal placement found for a rack on a board, or the "no move"
/// value (empty word, zero score, no placed cells) if none exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub word: String,
    pub start: (usize, usize),
    pub end: (usize, usize),
    pub orientation: Orientation,
    pub placed: Vec<(usize, usize)>,
    pub score: u32,
}

impl Move {
    fn none() -> Move {
        Move {
            word: String::new(),
            start: (0, 0),
            end: (0, 0),
            orientation: Orientation::Horizontal,
            placed: Vec::new(),
            score: 0,
        }
    }

    fn is_better_than(&self, other: &Move) -> bool {
        self.score > other.score
    }
}

/// Find the highest-scoring legal placement of `rack` on `board`, if any.
///
/// Single-threaded and synchronous per call: the dictionary is the only
/// shared state and is read-only, so independent callers may run
/// concurrently on separate threads without coordination.
pub fn best_move(board: &Board, dict: &Dictionary, rack: &Rack) -> Move {
    let anchors = find_anchors(board);

    let (horizontal, vertical) = search_both_orientations(board, dict, rack, &anchors);

    let mut best = Move::none();
    for candidate in horizontal.into_iter().chain(vertical.into_iter()) {
        if candidate.is_better_than(&best) {
            best = candidate;
        }
    }
    best
}

#[cfg(feature = "rayon")]
fn search_both_orientations(board: &Board, dict: &Dictionary, rack: &Rack, anchors: &[(usize, usize)]) -> (Vec<Move>, Vec<Move>) {
    rayon::join(
        || search_orientation(board, dict, rack, anchors, Orientation::Horizontal),
        || search_orientation(board, dict, rack, anchors, Orientation::Vertical),
    )
}

#[cfg(not(feature = "rayon"))]
fn search_both_orientations(board: &Board, dict: &Dictionary, rack: &Rack, anchors: &[(usize, usize)]) -> (Vec<Move>, Vec<Move>) {
    (
        search_orientation(board, dict, rack, anchors, Orientation::Horizontal),
        search_orientation(board, dict, rack, anchors, Orientation::Vertical),
    )
}

fn search_orientation(
    board: &Board,
    dict: &Dictionary,
    rack: &Rack,
    anchors: &[(usize, usize)],
    orientation: Orientation,
) -> Vec<Move> {
    let cross_checks = compute_cross_checks(board, dict, orientation);
    let candidates = generate_moves(board.state(orientation), &cross_checks, dict, rack, anchors, orientation);
    candidates.iter().map(|c| score_candidate(board, c)).collect()
}

fn score_candidate(board: &Board, candidate: &Candidate) -> Move {
    let orientation = candidate.orientation;
    let word_cells: Vec<(usize, usize)> = (candidate.start_col..=candidate.end_col)
        .map(|col| orientation.to_board_coords(candidate.view_row, col))
        .collect();
    let word_codes: Vec<u8> = candidate.word.bytes().map(|b| b - b'A').collect();
    let placed: Vec<(usize, usize)> = candidate
        .placed
        .iter()
        .map(|&(row, col)| orientation.to_board_coords(row, col))
        .collect();

    let score = score_move(board, orientation, &word_cells, &word_codes, &placed);

    Move {
        word: candidate.word.clone(),
        start: word_cells[0],
        end: *word_cells.last().unwrap(),
        orientation,
        placed,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::rack_from_str;

    fn dict() -> Dictionary {
        // "act" is deliberately excluded: with it present, "CAT" and "ACT"
        // place the same rack letters around the center anchor for the same
        // score, and which one wins the first-found tie-break is an
        // implementation detail of the search order, not worth pinning down
        // in this test.
        Dictionary::from_words(&["cat", "cats", "at", "scat"])
    }

    #[test]
    fn test_no_legal_move_returns_empty() {
        let board = Board::empty();
        let rack = rack_from_str("QXZ").unwrap();
        let m = best_move(&board, &dict(), &rack);
        assert_eq!(m.word, "");
        assert_eq!(m.score, 0);
        assert!(m.placed.is_empty());
    }

    #[test]
    fn test_first_move_touches_center() {
        let board = Board::empty();
        let rack = rack_from_str("CAT").unwrap();
        let m = best_move(&board, &dict(), &rack);
        assert_eq!(m.word, "CAT");
        assert!(m.placed.contains(&(7, 7)));
        assert!(m.score > 0);
    }

    #[test]
    fn test_placed_multiset_is_subset_of_rack() {
        let board = Board::empty();
        let rack = rack_from_str("CAT").unwrap();
        let m = best_move(&board, &dict(), &rack);
        assert!(m.placed.len() <= 3);
    }
}
