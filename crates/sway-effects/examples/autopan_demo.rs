//! Prints how the pan fraction moves through one cycle for a few shapes.
//!
//! Run with: cargo run -p sway-effects --example autopan_demo

use sway_core::{EnableState, GroupFeatures};
use sway_effects::{AutoPan, PanShape, PanState};

const SAMPLE_RATE: f32 = 48000.0;

fn main() {
    println!("Sway Auto-Pan Demo");
    println!("==================\n");

    // One cycle of 12000 frames (period knob at 0.01), sampled every 1/16
    let period = 0.01 * SAMPLE_RATE * 25.0;
    for smoothing in [0.0, 0.25, 0.5] {
        let shape = PanShape::new(smoothing, 1.0);
        print!("smoothing {:.2}: ", smoothing);
        for step in 0..16 {
            let phase = (step as f32 / 16.0 * period) as u64;
            let target = shape.evaluate(phase, period).target;
            print!("{:.2} ", target);
        }
        println!();
    }

    // Ramping in action: a square pan through the block loop
    println!("\nRamped fraction at maximum smoothing (first 8 blocks of 64 frames):");
    let pan = AutoPan::new(SAMPLE_RATE);
    pan.params().set_period(0.01);
    pan.params().set_smoothing(0.5);
    pan.params().set_width(1.0);

    let mut state = PanState::new();
    let mut block = vec![0.5_f32; 128];
    for i in 0..8 {
        let enable = if i == 0 {
            EnableState::Enabling
        } else {
            EnableState::Enabled
        };
        pan.process_channel_inplace(&mut state, &mut block, enable, GroupFeatures::none());
        println!("  block {}: phase {:5}  frac {:.3}", i, state.phase(), state.frac());
    }
}
