//! Example: fuzzy-match one sentence inside another.
//!
//! Run with:
//! `cargo run --example match_text -- [--global] [SHORT LONG]`
//!
//! With `--features tracing`, every row is also emitted as a `tracing` debug
//! event; set `RUST_LOG=debug` to see them.

use std::env;

use dp_match::{Aligner, MatchMode, OverrideCost, RowObserver, ScoreRow, UnitCost};

struct Options {
    mode: MatchMode,
    short: String,
    long: String,
}

impl Options {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut mode = MatchMode::Anywhere;
        let mut words = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--global" => mode = MatchMode::Global,
                "--anywhere" => mode = MatchMode::Anywhere,
                flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}")),
                _ => words.push(arg),
            }
        }
        let (short, long) = match words.len() {
            0 => (
                "this is a test".to_string(),
                "asdfj kasd thes es a tistbc".to_string(),
            ),
            2 => (words.remove(0), words.remove(0)),
            n => return Err(format!("expected 0 or 2 sequences, got {n}")),
        };
        Ok(Self { mode, short, long })
    }
}

/// Prints rows to stdout.
struct PrintRows;

impl RowObserver<u32> for PrintRows {
    fn on_seed(&mut self, row: &[u32]) {
        println!("Initial values: {row:?}");
    }

    fn on_row(&mut self, step: usize, row: &[u32]) {
        println!("After step {step} => {row:?}");
    }
}

fn report(label: &str, row: &ScoreRow<u32>) {
    match row.best() {
        Some((end, score)) => println!("{label}: best score {score} ending at {end}"),
        None => println!("{label}: empty row"),
    }
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opts = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("match_text: {err}");
            eprintln!("usage: match_text [--global|--anywhere] [SHORT LONG]");
            std::process::exit(2);
        }
    };
    let s1: Vec<char> = opts.short.chars().collect();
    let s2: Vec<char> = opts.long.chars().collect();

    #[cfg(feature = "tracing")]
    let mut observer = (PrintRows, dp_match::observe::TracingObserver);
    #[cfg(not(feature = "tracing"))]
    let mut observer = PrintRows;

    let plain = Aligner::new(UnitCost).align_observed(&s1, &s2, opts.mode, &mut observer);
    println!("{:?}", plain.as_slice());
    report("unit costs", &plain);

    // 'i' and 'e' are interchangeable in both directions.
    let mut costs = OverrideCost::default();
    costs.register_symmetric('i', 'e', 0);
    let custom = Aligner::new(costs).align(&s1, &s2, opts.mode);
    println!("{:?}", custom.as_slice());
    report("i/e interchangeable", &custom);
}
