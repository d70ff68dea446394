//! rxlite CLI: small end-to-end demos of the push pipeline.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use rxlite_core::prelude::Observer;
use rxlite_io::{from_iter, json_records, lines, ticker};
use rxlite_operators::Pipeline;

#[derive(Parser)]
#[command(name = "rxlite")]
#[command(about = "rxlite: a minimal lazy push-based observable pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map chain over [1, 2, 3]: doubles each value, then adds 10
    Numbers,

    /// Filter a herd of animals down to the dog named lisa
    Animals {
        /// JSONL file of {"name": ..., "species": ...} records
        /// (defaults to a built-in demo herd)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Stream a text file line by line
    Lines {
        /// Path to the file to stream
        path: PathBuf,
    },

    /// Emit 1..=count with a fixed gap between emissions
    Tick {
        #[arg(long, default_value_t = 3)]
        count: u32,

        #[arg(long, default_value_t = 500)]
        interval_ms: u64,
    },
}

#[derive(Debug, Clone, Deserialize)]
struct Animal {
    name: String,
    species: String,
}

fn demo_herd() -> Vec<Animal> {
    let pairs = [
        ("bobby", "dog"),
        ("lisa", "dog"),
        ("lucy", "cat"),
        ("jack", "parrot"),
    ];
    pairs
        .iter()
        .map(|(name, species)| Animal {
            name: (*name).to_string(),
            species: (*species).to_string(),
        })
        .collect()
}

/// Observer printing each value with `label`, errors to stderr, and `Done!`
/// on completion.
fn printing_observer<T: std::fmt::Display + 'static>(label: &'static str) -> Observer<T> {
    Observer::new(
        move |value: T| println!("{label}: {value}"),
        |err| eprintln!("stream error: {err}"),
        || println!("Done!"),
    )
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Numbers => {
            from_iter(vec![1_i64, 2, 3])
                .map(|x| Ok(x * 2))
                .map(|x| Ok(x + 10))
                .subscribe(printing_observer("Received element"));
        }
        Commands::Animals { data } => {
            let herd = match data {
                Some(path) => json_records::<Animal>(path),
                None => from_iter(demo_herd()),
            };
            herd.filter(|a| Ok(a.species == "dog"))
                .filter(|a| Ok(a.name == "lisa"))
                .map(|a| Ok(a.name))
                .subscribe(printing_observer("Received animal"));
        }
        Commands::Lines { path } => {
            lines(path).subscribe(printing_observer("Line"));
        }
        Commands::Tick { count, interval_ms } => {
            let values: Vec<u32> = (1..=count).collect();
            ticker(values, Duration::from_millis(interval_ms))
                .subscribe(printing_observer("Tick"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn demo_herd_filters_down_to_lisa() {
        let names = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&names);

        from_iter(demo_herd())
            .filter(|a| Ok(a.species == "dog"))
            .filter(|a| Ok(a.name == "lisa"))
            .subscribe(Observer::on_next(move |a: Animal| {
                sink.borrow_mut().push(a.name)
            }));

        assert_eq!(names.borrow().as_slice(), ["lisa"]);
    }
}
