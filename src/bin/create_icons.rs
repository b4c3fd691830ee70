//! Mei-Tra app icon generator
//!
//! Writes icon.png, adaptive-icon.png, splash-icon.png and favicon.png.
//!
//! Usage:
//!   cargo run --bin create_icons                    # Generate into the working directory
//!   cargo run --bin create_icons -- --config FILE   # Generate using a TOML config
//!   cargo run --bin create_icons -- --verbose       # Print each written file
//!   cargo run --bin create_icons -- --check [DIR]   # Verify generated assets
//!   cargo run --bin create_icons -- --help          # Show help

use meitra_assets::{AssetResult, GeneratorConfig, SUCCESS_LINE, run, verify_outputs};
use std::path::PathBuf;

enum Command {
    Generate,
    Check(Option<PathBuf>),
    Help,
}

struct Args {
    command: Command,
    config: Option<PathBuf>,
    verbose: bool,
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("Error: {}\n", msg);
            eprint!("{}", HELP);
            std::process::exit(1);
        }
    };

    if let Err(e) = execute(args) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn execute(args: Args) -> AssetResult<()> {
    if matches!(args.command, Command::Help) {
        print!("{}", HELP);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    config.verbose |= args.verbose;

    match args.command {
        Command::Help => {}
        Command::Generate => {
            run(&config)?;
            println!("{}", SUCCESS_LINE);
        }
        Command::Check(dir) => {
            let dir = dir.unwrap_or(config.output_dir);
            verify_outputs(&dir)?;
            println!("All 4 assets verified.");
        }
    }
    Ok(())
}

fn parse_args(argv: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut argv = argv.peekable();
    let mut args = Args {
        command: Command::Generate,
        config: None,
        verbose: false,
    };

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = argv.next().ok_or("'--config' requires a file path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--verbose" | "-v" => args.verbose = true,
            "--check" => {
                let dir = argv.next_if(|next| !next.starts_with('-'));
                args.command = Command::Check(dir.map(PathBuf::from));
            }
            "--help" | "-h" | "help" => args.command = Command::Help,
            other => return Err(format!("Unknown argument '{}'", other)),
        }
    }
    Ok(args)
}

const HELP: &str = r#"Mei-Tra Icon Generator - Generate mobile app image assets

USAGE:
    create_icons [OPTIONS]

OPTIONS:
    --config, -c <FILE>   Read settings from a TOML file
                          (output_dir, font, font_size, parallel, verbose)
    --verbose, -v         Print each written file
    --check [DIR]         Verify previously generated assets
                          (default: configured output directory)
    --help, -h            Show this help message

OUTPUT:
    icon.png            1024x1024
    adaptive-icon.png   1024x1024
    splash-icon.png     1242x2436
    favicon.png         48x48
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_generates() {
        let args = parse(&[]).unwrap();
        assert!(matches!(args.command, Command::Generate));
        assert!(args.config.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_check_with_and_without_dir() {
        let args = parse(&["--check", "out", "-v"]).unwrap();
        assert!(matches!(args.command, Command::Check(Some(ref d)) if d == &PathBuf::from("out")));
        assert!(args.verbose);

        let args = parse(&["--check", "--config", "assets.toml"]).unwrap();
        assert!(matches!(args.command, Command::Check(None)));
        assert_eq!(args.config, Some(PathBuf::from("assets.toml")));
    }

    #[test]
    fn test_bad_args_rejected() {
        assert!(parse(&["--config"]).is_err());
        assert!(parse(&["--colour"]).is_err());
    }
}
