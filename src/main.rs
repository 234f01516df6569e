mod error;
mod output;
mod parse;
mod pattern;
mod utils;

use clap::Parser;
use output::Output;
use parse::{parse_color, parse_size, Color, Size};
use pattern::{generate_tick_pattern, DEFAULT_RATE};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Generate a header image framed by layered tick marks.
#[derive(Parser, Debug)]
#[command(name = "tick_pattern")]
#[command(version, about)]
struct Cli {
    /// Size of the image, as WIDTHxHEIGHT
    #[arg(default_value = "1280x640", value_parser = parse_size)]
    size: Size,

    /// Output file name; the image is previewed when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Background color
    #[arg(long, default_value = "#000000", value_name = "#000000", value_parser = parse_color)]
    bg: Color,

    /// Foreground color
    #[arg(long, default_value = "#ffffff", value_name = "#ffffff", value_parser = parse_color)]
    fg: Color,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), error::PatternError> {
    let Size { width, height } = cli.size;
    info!("Generating {}x{} tick pattern...", width, height);

    let started = Instant::now();
    let img = generate_tick_pattern(cli.size, cli.bg, cli.fg, DEFAULT_RATE);
    info!("Rendered in {:?}", started.elapsed());

    Output::from(cli.output).write(&img)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use image::Rgb;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["tick_pattern"]).unwrap();
        assert_eq!(
            cli.size,
            Size {
                width: 1280,
                height: 640
            }
        );
        assert_eq!(cli.bg, Rgb([0, 0, 0]));
        assert_eq!(cli.fg, Rgb([255, 255, 255]));
        assert_eq!(cli.output, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_all_arguments() {
        let cli = Cli::try_parse_from([
            "tick_pattern",
            "1200X600",
            "-o",
            "header.png",
            "--bg",
            "#007fff",
            "--fg",
            "#FfFfFf",
            "-vv",
        ])
        .unwrap();
        assert_eq!(
            cli.size,
            Size {
                width: 1200,
                height: 600
            }
        );
        assert_eq!(cli.output, Some(PathBuf::from("header.png")));
        assert_eq!(cli.bg, Rgb([0, 127, 255]));
        assert_eq!(cli.fg, Rgb([255, 255, 255]));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_bad_size() {
        let err = Cli::try_parse_from(["tick_pattern", "0x1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("\"0x1\" is invalid size."));
    }

    #[test]
    fn test_cli_rejects_bad_color() {
        let err = Cli::try_parse_from(["tick_pattern", "--fg", "#00000G"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err
            .to_string()
            .contains("\"#00000G\" is invalid color format."));
    }

    #[test]
    fn test_run_writes_file() {
        let path = std::env::temp_dir().join(format!("tick_pattern-run-{}.png", std::process::id()));
        let cli = Cli::try_parse_from(["tick_pattern", "16x8", "-o", path.to_str().unwrap()]).unwrap();
        run(cli).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (16, 8));
        assert_eq!(*img.get_pixel(0, 0), Rgb([255, 255, 255]));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
