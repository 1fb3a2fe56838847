//! Command-line interface for leaf_colorscan
//!
//! Prints green/yellow proportions of an image as JSON, optionally with
//! histogram data and a highlight overlay

use leaf_colorscan::{
    histogram::{highlight_matches, ChannelHistograms, ValueDistribution},
    image_loader::load_rgb,
    AnalysisConfig, ColorProportionAnalyzer,
};
use serde_json::json;
use std::{env, path::{Path, PathBuf}, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut histograms = false;
    let mut highlight_path = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("Error: --config requires a file path");
                        process::exit(1);
                    }
                }
            }
            "--histograms" => histograms = true,
            "--highlight" => {
                i += 1;
                match args.get(i) {
                    Some(path) => highlight_path = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("Error: --highlight requires an output image path");
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };
    let image_path = Path::new(&image_path_str);

    let config = match config_path {
        Some(path) => match AnalysisConfig::from_json_file(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error loading config file: {}", e);
                process::exit(1);
            }
        },
        None => AnalysisConfig::default(),
    };

    let analyzer = ColorProportionAnalyzer::from_config(&config);
    let proportions = match analyzer.try_analyze_path(image_path) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    let mut output = json!({
        "image": image_path.display().to_string(),
        "proportions": proportions,
    });

    if histograms || highlight_path.is_some() {
        if let Err(e) = add_visual_data(image_path, &config, histograms, highlight_path.as_deref(), &mut output) {
            eprintln!("Error building histogram data: {}", e);
            process::exit(1);
        }
    }

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }
}

fn add_visual_data(
    image_path: &Path,
    config: &AnalysisConfig,
    histograms: bool,
    highlight_path: Option<&Path>,
    output: &mut serde_json::Value,
) -> Result<(), Box<dyn std::error::Error>> {
    let rgb = load_rgb(image_path)?;

    if histograms {
        let channels = ChannelHistograms::from_rgb(&rgb, config.histogram.channel_bins)?;
        let values = ValueDistribution::from_rgb(&rgb, &config.distribution, config.histogram.value_bins)?;
        output["channels"] = serde_json::to_value(channels)?;
        output["value_distribution"] = serde_json::to_value(values)?;
    }

    if let Some(path) = highlight_path {
        highlight_matches(&rgb, &config.distribution).save(path)?;
        eprintln!("Highlight overlay saved to {}", path.display());
    }

    Ok(())
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image>", program_name);
    eprintln!();
    eprintln!("Report the share of yellow and green pixels among non-black pixels.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <file>       JSON analysis configuration");
    eprintln!("  --histograms          Include RGB and green/yellow V histograms");
    eprintln!("  --highlight <file>    Save a copy with green/yellow pixels painted");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG=debug        Print pixel counts while analyzing");
}
