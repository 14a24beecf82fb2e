use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use hexcore_rs::{AsmConfig, Assembler};

#[derive(Parser, Debug)]
#[command(author, version, about = "Assemble HexCore source into a raw binary image")]
struct Opts {
    /// Input assembly file (one instruction per line)
    #[arg(short, long)]
    input: PathBuf,
    /// Output binary file (6 bytes per instruction)
    #[arg(short, long)]
    output: PathBuf,
    /// Reject operands that do not fit their encoded field
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let text = fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;

    let asm = Assembler::new(AsmConfig {
        strict_operands: opts.strict,
    });
    let bin = asm.assemble(&text)?;

    fs::write(&opts.output, &bin)
        .with_context(|| format!("writing {}", opts.output.display()))?;
    Ok(())
}
