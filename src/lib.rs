#![deny(clippy::wrong_pub_self_convention, clippy::used_underscore_binding,
   clippy::map_unwrap_or,
   clippy::int_plus_one, clippy::string_add_assign, clippy::if_not_else,
   clippy::invalid_upcast_comparisons,
   clippy::mutex_integer, clippy::mut_mut, clippy::items_after_statements,
   clippy::print_stdout, clippy::mem_forget, clippy::maybe_infinite_iter)]

//! A move-generation and scoring engine for a 15x15 crossword tile game.
//! <br>
//! Given a board, a rack and a dictionary, this crate finds the
//! highest-scoring legal placement - the classic Appel-Jacobson anchor
//! search over cross-checked cells, the way a Scrabble-style solver works.
//! It can use the `rayon` crate to search both orientations in parallel.
//!
//! # Basic usage
//! ```
//! # use wordgrid_engine::{Board, Dictionary, best_move, rack_from_str};
//! let board = Board::empty();
//! let dict = Dictionary::from_words(&["cat", "cats", "at"]);
//! let rack = rack_from_str("CAT").unwrap();
//! let result = best_move(&board, &dict, &rack);
//! assert_eq!(result.word, "CAT");
//! println!("{} scores {}", result.word, result.score);
//! ```
mod anchor;
mod board;
mod crosscheck;
mod dictionary;
mod engine;
mod error;
mod letters;
mod movegen;
mod premium;
mod score;

pub use crate::anchor::find_anchors;
pub use crate::board::{letter_value, Board, Orientation, LETTER_VALUES, N};
pub use crate::crosscheck::{compute_cross_checks, CrossCheckGrid, CrossSet};
pub use crate::dictionary::Dictionary;
pub use crate::engine::{best_move, Move};
pub use crate::error::Error;
pub use crate::letters::{rack_from_str, Cell, Letter, Rack, RackCounts, BLANK, NUM_LETTERS};
pub use crate::movegen::{generate_moves, Candidate};
pub use crate::premium::{Premium, PremiumGrid};
pub use crate::score::score_move;
