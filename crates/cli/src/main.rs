use anyhow::Result;
use bytedec_corelib as core;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bytedec",
    version,
    about = "Overflow feasibility check for byte-per-digit decimal encoding"
)]
struct Cli {
    /// Bit-width of the binary values being converted to decimal
    #[arg(default_value_t = 8)]
    bitwidth: u32,

    /// Also print the carried digit sequence and a verdict
    #[arg(short, long)]
    verbose: bool,

    /// Emit the full report as JSON instead of the diagnostic text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let report = core::check_bitwidth(cli.bitwidth)?;

    if cli.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("digits: {:?}", report.accumulated);
    for event in &report.events {
        match event {
            core::OverflowEvent::BeforeCarry { .. } => {
                println!("digit overflows before carry in worst case");
            }
            core::OverflowEvent::DuringCarry { position, .. } => {
                println!("digit overflows during carry at position {position} in worst case");
            }
        }
    }

    if cli.verbose {
        println!("carried: {:?}", report.carried);
        if report.feasible() {
            println!(
                "{}-bit conversion fits single-byte digit slots",
                report.bitwidth
            );
        } else {
            println!(
                "{}-bit conversion overflows single-byte digit slots",
                report.bitwidth
            );
        }
    }
    Ok(())
}
