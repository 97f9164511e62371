#![allow(non_snake_case)]

//! Standalone generator for synthetic catalog files, for tests and demos:
//!
//! ```text
//! make_fakedata --count 25 --seed 42 --out /tmp/catalog.json
//! ```

use std::path::PathBuf;

use clap::Parser;

use cardZoom::building::make_fakedata_lib;

#[derive(Parser, Debug)]
#[command(name = "make_fakedata", version, about = "Generate a synthetic product catalog")]
struct Cli {
    /// Number of products to generate.
    #[arg(long, default_value_t = 25)]
    count: usize,

    /// RNG seed; the same seed always produces the same catalog.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output file path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = make_fakedata_lib::generate_catalog(cli.count, cli.seed);
    make_fakedata_lib::write_catalog(&cli.out, &catalog)?;
    println!("wrote {} products to {}", catalog.len(), cli.out.display());
    Ok(())
}
