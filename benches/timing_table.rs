//! Per-call timing report for a string-keyed dual heap
//!
//! Loads string records (one per line), inserts them all into a `DualHeap`,
//! then runs a fixed number of trials. Each trial times one call of every
//! public operation and the report lists the per-trial timings in microseconds
//! followed by the per-column averages.
//!
//! ## Running
//!
//! ```bash
//! # Use a word list
//! DEPQ_WORDS_FILE=/usr/share/dict/words cargo bench --bench timing_table
//!
//! # Synthetic words, 50 trials
//! DEPQ_TRIALS=50 cargo bench --bench timing_table
//! ```
//!
//! ## Configuration
//!
//! - `DEPQ_WORDS_FILE`: path of the line-oriented record file. When unset or
//!   unreadable, a deterministic synthetic word list is used instead.
//! - `DEPQ_TRIALS`: number of trials (default 30).

use rust_dual_heap::dual_heap::DualHeap;
use std::env;
use std::fs::File;
use std::hint::black_box;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

const DEFAULT_TRIALS: usize = 30;
const SYNTHETIC_WORDS: usize = 100_000;

const COLUMNS: [&str; 6] = [
    "insert",
    "extractMax",
    "extractMin",
    "peekMax",
    "peekMin",
    "isEmpty",
];

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
}

fn load_words<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

fn synthetic_words(count: usize, seed: u64) -> Vec<String> {
    let mut rng = Lcg::new(seed);
    (0..count)
        .map(|_| {
            let len = 3 + (rng.next() >> 33) % 8;
            (0..len)
                .map(|_| (b'a' + ((rng.next() >> 33) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn words_from_env() -> Vec<String> {
    match env::var("DEPQ_WORDS_FILE") {
        Ok(path) => match load_words(&path) {
            Ok(words) if !words.is_empty() => {
                eprintln!("Loaded {} records from {}", words.len(), path);
                return words;
            }
            Ok(_) => eprintln!("{} holds no records, using synthetic words", path),
            Err(e) => eprintln!("Failed to read {}: {}, using synthetic words", path, e),
        },
        Err(_) => eprintln!("DEPQ_WORDS_FILE not set, using synthetic words"),
    }
    synthetic_words(SYNTHETIC_WORDS, 2014)
}

fn trials_from_env() -> usize {
    match env::var("DEPQ_TRIALS") {
        Ok(raw) => match raw.parse::<usize>() {
            Ok(trials) if trials > 0 => trials,
            _ => {
                eprintln!("Ignoring invalid DEPQ_TRIALS={:?}", raw);
                DEFAULT_TRIALS
            }
        },
        Err(_) => DEFAULT_TRIALS,
    }
}

fn micros_since(start: Instant) -> u128 {
    start.elapsed().as_micros()
}

/// Runs one trial, returning the timing of each column in microseconds
fn run_trial(heap: &mut DualHeap<String>) -> [u128; 6] {
    let mut row = [0u128; 6];

    let start = Instant::now();
    heap.insert("zzzzzz".to_string());
    row[0] = micros_since(start);
    black_box(heap.extract_max().ok());

    let start = Instant::now();
    black_box(heap.extract_max().ok());
    row[1] = micros_since(start);
    heap.insert("zurich".to_string());

    let start = Instant::now();
    black_box(heap.extract_min().ok());
    row[2] = micros_since(start);
    heap.insert("aarhus".to_string());

    let start = Instant::now();
    black_box(heap.peek_max().ok());
    row[3] = micros_since(start);

    let start = Instant::now();
    black_box(heap.peek_min().ok());
    row[4] = micros_since(start);

    let start = Instant::now();
    black_box(heap.is_empty());
    row[5] = micros_since(start);

    row
}

fn print_report(rows: &[[u128; 6]]) {
    print!("{:<8}", "Trial");
    for name in COLUMNS {
        print!(" {:>11}", name);
    }
    println!();

    for (trial, row) in rows.iter().enumerate() {
        print!("{:<8}", trial + 1);
        for micros in row {
            print!(" {:>11}", micros);
        }
        println!();
    }

    print!("{:<8}", "Average");
    for column in 0..COLUMNS.len() {
        let total: u128 = rows.iter().map(|row| row[column]).sum();
        let average = total as f64 / rows.len().max(1) as f64;
        print!(" {:>11.2}", average);
    }
    println!();
}

fn main() {
    let words = words_from_env();
    let trials = trials_from_env();

    let mut heap: DualHeap<String> = DualHeap::with_capacity(words.len());
    heap.extend(words);
    eprintln!("Running {} trials over {} records", trials, heap.len());

    let rows: Vec<[u128; 6]> = (0..trials).map(|_| run_trial(&mut heap)).collect();

    println!("Times in microseconds");
    print_report(&rows);
}
