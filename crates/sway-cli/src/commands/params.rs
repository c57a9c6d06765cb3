//! Auto-pan parameter listing.

#![allow(clippy::print_literal)]

use clap::Args;
use sway_core::ParamDescriptor;
use sway_effects::params;
use sway_effects::period::{BEAT_DIVISION_LABELS, TIME_PERIOD_SECONDS};

#[derive(Args)]
pub struct ParamsArgs {
    /// Also show the beat step each period value selects
    #[arg(long)]
    beats: bool,
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    println!("Auto-Pan Parameters");
    println!("===================");
    println!();
    println!(
        "  {:5}  {:12}  {:16}  {:14}  {:5}  {}",
        "ID", "Name", "Key", "Range", "Step", "Default"
    );
    println!(
        "  {:5}  {:12}  {:16}  {:14}  {:5}  {}",
        "--", "----", "---", "-----", "----", "-------"
    );
    for desc in params::descriptors() {
        println!(
            "  {:5}  {:12}  {:16}  {:14}  {:5}  {}",
            desc.id.0,
            desc.name,
            desc.string_id,
            range(desc),
            desc.step,
            desc.format_value(desc.default)
        );
    }

    println!();
    println!(
        "Time periods last period x {TIME_PERIOD_SECONDS} s; with --beats the period selects a beat multiple."
    );

    if args.beats {
        println!();
        println!("  {:14}  {}", "Period", "Beats");
        let step = params::PERIOD_MAX / 9.0;
        for (i, label) in BEAT_DIVISION_LABELS.iter().enumerate().take(9) {
            let from = (i as f32 * step).max(params::PERIOD_MIN);
            println!("  {:14}  {label}", format!("{from:.2} - {:.2}", (i + 1) as f32 * step));
        }
        println!("  {:14}  {}", format!("{:.2}", params::PERIOD_MAX), BEAT_DIVISION_LABELS[9]);
    }

    Ok(())
}

fn range(desc: &ParamDescriptor) -> String {
    if desc.labels.is_empty() {
        format!("{:.2} - {:.2}", desc.min, desc.max)
    } else {
        desc.labels.join(" | ")
    }
}
