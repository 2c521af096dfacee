use std::io::{self, BufRead};

use log::info;
use markov_core::io::{open_file, write_output};
use markov_core::{Chain, ChainConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, controlled by RUST_LOG
    env_logger::init();

    // Read from the file given as first argument, or from stdin
    let input: Box<dyn BufRead> = match std::env::args_os().nth(1) {
        Some(path) => {
            info!("reading {}", path.to_string_lossy());
            Box::new(open_file(path)?)
        }
        None => Box::new(io::stdin().lock()),
    };

    // Prefix of 2 words, at most 200 words of output
    let mut chain = Chain::new(ChainConfig::default());

    // A read failure aborts here with a non-zero exit status
    let tokens = chain.train_reader(input)?;
    info!("learned {} states from {} tokens", chain.len(), tokens);

    let output = chain.generate(&mut rand::rng());
    write_output(io::stdout().lock(), &output)?;

    Ok(())
}
