//! Anchor-cell identification.
//!
//! An anchor is an empty cell adjacent to an occupied one - the only cells a
//! new word may be anchored through. On an empty board the sole anchor is
//! the center start square.
use crate::board::{Board, N};

/// Find every anchor cell on `board`, in row-major order.
pub fn find_anchors(board: &Board) -> Vec<(usize, usize)> {
    if board.is_empty() {
        return vec![(N / 2, N / 2)];
    }

    let mut anchors = Vec::new();
    for row in 0..N {
        for col in 0..N {
            if board.is_occupied(row, col) {
                continue;
            }
            if has_occupied_neighbor(board, row, col) {
                anchors.push((row, col));
            }
        }
    }
    anchors
}

fn has_occupied_neighbor(board: &Board, row: usize, col: usize) -> bool {
    if row > 0 && board.is_occupied(row - 1, col) {
        return true;
    }
    if row + 1 < N && board.is_occupied(row + 1, col) {
        return true;
    }
    if col > 0 && board.is_occupied(row, col - 1) {
        return true;
    }
    if col + 1 < N && board.is_occupied(row, col + 1) {
        return true;
    }
    false
}
