//! Single-orientation move search: the classic Appel-Jacobson
//! anchor search, `LeftPart` + `ExtendRight`. Vertical moves are produced by
//! running this same code against the transposed board (see
//! [`crate::board::Orientation`]).
use crate::board::{Orientation, State, N};
use crate::crosscheck::{codes_to_word, CrossCheckGrid};
use crate::dictionary::Dictionary;
use crate::letters::{Letter, Rack, RackCounts};

/// A legal placement found by the search, still in one orientation's
/// row-major view coordinates - [`crate::engine`] maps these back to real
/// board coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub orientation: Orientation,
    pub view_row: usize,
    pub start_col: usize,
    pub end_col: usize,
    pub word: String,
    /// Newly-placed cells, in view coordinates.
    pub placed: Vec<(usize, usize)>,
}

/// Run the search for every anchor (given in real board coordinates) and
/// return every legal placement found.
pub fn generate_moves(
    state: &State,
    cross_checks: &CrossCheckGrid,
    dict: &Dictionary,
    rack: &Rack,
    anchors: &[(usize, usize)],
    orientation: Orientation,
) -> Vec<Candidate> {
    let rack_counts = RackCounts::from(rack);
    let mut results = Vec::new();
    for &(row, col) in anchors {
        // `to_board_coords` swaps for Vertical and is the identity for
        // Horizontal, so it is its own inverse: it maps real coordinates
        // into this orientation's view just as readily as the reverse.
        let (view_row, anchor_col) = orientation.to_board_coords(row, col);
        left_part(
            state,
            cross_checks,
            dict,
            rack_counts,
            orientation,
            view_row,
            anchor_col,
            &mut results,
        );
    }
    results
}

fn left_part(
    state: &State,
    cross_checks: &CrossCheckGrid,
    dict: &Dictionary,
    rack_counts: RackCounts,
    orientation: Orientation,
    row: usize,
    anchor_col: usize,
    results: &mut Vec<Candidate>,
) {
    let pre_anchor_occupied = anchor_col > 0 && !state[row][anchor_col - 1].is_empty();
    if pre_anchor_occupied {
        let mut start = anchor_col;
        while start > 0 && !state[row][start - 1].is_empty() {
            start -= 1;
        }
        let prefix: Vec<u8> = (start..anchor_col)
            .map(|c| state[row][c].code().unwrap())
            .collect();
        extend_right(
            state,
            cross_checks,
            dict,
            rack_counts,
            orientation,
            row,
            anchor_col,
            prefix,
            Vec::new(),
            start,
            results,
        );
    } else {
        let next_col = if anchor_col == 0 { None } else { Some(anchor_col - 1) };
        grow_left(
            state,
            cross_checks,
            dict,
            rack_counts,
            orientation,
            row,
            anchor_col,
            next_col,
            Vec::new(),
            Vec::new(),
            results,
        );
    }
}

/// Recursively grow the free left part leftward from the anchor, calling
/// [`extend_right`] with every prefix length from zero up to the point where
/// construction stops (column -1, rack exhaustion, or no rack/cross-check
/// intersection at the next cell).
#[allow(clippy::too_many_arguments)]
fn grow_left(
    state: &State,
    cross_checks: &CrossCheckGrid,
    dict: &Dictionary,
    rack_counts: RackCounts,
    orientation: Orientation,
    anchor_row: usize,
    anchor_col: usize,
    next_col: Option<usize>,
    prefix: Vec<u8>,
    prefix_placed: Vec<(usize, usize)>,
    results: &mut Vec<Candidate>,
) {
    let start_col = anchor_col - prefix.len();
    extend_right(
        state,
        cross_checks,
        dict,
        rack_counts,
        orientation,
        anchor_row,
        anchor_col,
        prefix.clone(),
        prefix_placed.clone(),
        start_col,
        results,
    );

    let col = match next_col {
        Some(c) => c,
        None => return,
    };
    if rack_counts.is_empty() || !state[anchor_row][col].is_empty() {
        return;
    }

    for letter in rack_counts.distinct_letters().collect::<Vec<Letter>>() {
        if !cross_checks[anchor_row][col].contains(letter.code()) {
            continue;
        }
        let mut new_prefix = Vec::with_capacity(prefix.len() + 1);
        new_prefix.push(letter.code());
        new_prefix.extend_from_slice(&prefix);
        let mut new_placed = Vec::with_capacity(prefix_placed.len() + 1);
        new_placed.push((anchor_row, col));
        new_placed.extend_from_slice(&prefix_placed);

        let mut next_counts = rack_counts;
        next_counts.remove(letter);
        let next_next_col = if col == 0 { None } else { Some(col - 1) };

        grow_left(
            state,
            cross_checks,
            dict,
            next_counts,
            orientation,
            anchor_row,
            anchor_col,
            next_next_col,
            new_prefix,
            new_placed,
            results,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn extend_right(
    state: &State,
    cross_checks: &CrossCheckGrid,
    dict: &Dictionary,
    rack_counts: RackCounts,
    orientation: Orientation,
    row: usize,
    j: usize,
    current_word: Vec<u8>,
    placed: Vec<(usize, usize)>,
    start_col: usize,
    results: &mut Vec<Candidate>,
) {
    if j > N - 1 {
        maybe_record(
            dict,
            orientation,
            row,
            start_col,
            N - 1,
            &current_word,
            &placed,
            results,
        );
        return;
    }

    if state[row][j].is_empty() {
        for letter in rack_counts.distinct_letters().collect::<Vec<Letter>>() {
            if !cross_checks[row][j].contains(letter.code()) {
                continue;
            }
            let mut word = current_word.clone();
            word.push(letter.code());
            let mut new_placed = placed.clone();
            new_placed.push((row, j));

            let followed_ok = j + 1 > N - 1 || state[row][j + 1].is_empty();
            if followed_ok {
                maybe_record(dict, orientation, row, start_col, j, &word, &new_placed, results);
            }

            let mut next_counts = rack_counts;
            next_counts.remove(letter);
            extend_right(
                state,
                cross_checks,
                dict,
                next_counts,
                orientation,
                row,
                j + 1,
                word,
                new_placed,
                start_col,
                results,
            );
        }
    } else {
        let mut word = current_word;
        word.push(state[row][j].code().unwrap());

        let followed_ok = j + 1 > N - 1 || state[row][j + 1].is_empty();
        if followed_ok {
            maybe_record(dict, orientation, row, start_col, j, &word, &placed, results);
        }

        extend_right(
            state,
            cross_checks,
            dict,
            rack_counts,
            orientation,
            row,
            j + 1,
            word,
            placed,
            start_col,
            results,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn maybe_record(
    dict: &Dictionary,
    orientation: Orientation,
    row: usize,
    start_col: usize,
    end_col: usize,
    word_codes: &[u8],
    placed: &[(usize, usize)],
    results: &mut Vec<Candidate>,
) {
    if placed.is_empty() {
        return;
    }
    let word = codes_to_word(word_codes);
    if !dict.is_word(&word) {
        return;
    }
    results.push(Candidate {
        orientation,
        view_row: row,
        start_col,
        end_col,
        word: word.to_ascii_uppercase(),
        placed: placed.to_vec(),
    });
}
