//! Generate the default analysis configuration file
//!
//! Creates a JSON config with both threshold sets and histogram bins

use leaf_colorscan::{AnalysisConfig, ColorRange};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} configs/leaf_scan.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = AnalysisConfig::default();

    match config.to_json_file(output_path) {
        Ok(_) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  Proportions:  yellow {}, green {}",
                     describe(&config.proportions.yellow),
                     describe(&config.proportions.green));
            eprintln!("  Distribution: yellow {}, green {}",
                     describe(&config.distribution.yellow),
                     describe(&config.distribution.green));
            eprintln!("  Histogram bins: {} per channel, {} for V",
                     config.histogram.channel_bins,
                     config.histogram.value_bins);
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}

fn describe(range: &ColorRange) -> String {
    format!(
        "H {}-{} S {}-{} V {}-{}",
        range.lower[0], range.upper[0], range.lower[1], range.upper[1], range.lower[2], range.upper[2]
    )
}
