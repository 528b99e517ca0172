use anyhow::Result;
use std::env;
use std::time::Instant;
use wordgrid_engine::{best_move, rack_from_str, Board, Dictionary};

const TEST_STATE: &[&str] = &[
    "               ",
    "               ",
    "               ",
    "               ",
    "               ",
    "               ",
    "               ",
    "       CAT     ",
    "         O     ",
    "         G     ",
    "               ",
    "               ",
    "               ",
    "               ",
    "               ",
];

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let wordfile = args.next();
    let rack_str = args.next().unwrap_or_else(|| String::from("SCORED"));

    let t0 = Instant::now();
    let dict = match wordfile {
        Some(path) => Dictionary::from_file(&path)?,
        None => Dictionary::from_words(&["cat", "cats", "dog", "dogs", "cot", "cots", "scored", "score", "cored", "cote"]),
    };
    log::info!("loaded {} words in {:?}", dict.len(), t0.elapsed());

    let board = Board::with_state_from_strings(TEST_STATE)?;
    let rack = rack_from_str(&rack_str)?;

    let t0 = Instant::now();
    let result = best_move(&board, &dict, &rack);
    let dt = t0.elapsed();

    if result.word.is_empty() {
        println!("no legal move for rack \"{}\"", rack_str);
    } else {
        println!(
            "{} at {:?}-{:?} ({:?}), {} points, placed {:?}",
            result.word, result.start, result.end, result.orientation, result.score, result.placed
        );
    }
    println!("search took {:?}", dt);
    Ok(())
}
