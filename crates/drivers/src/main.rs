mod config;
mod logging;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use config::{AppConfig, SeedConfig};
use lite_gallery_adapters::{
    present_record_row, BuiltinSeed, ImageCrateDecoder, JsonSeedFile, WalkdirImageSource,
};
use lite_gallery_application::{AppController, ImageSource};

#[derive(Debug, Parser)]
#[command(
    name = "lite-gallery",
    version,
    about = "A two-screen photo gallery",
    long_about = None
)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed the gallery from the images in this folder.
    #[arg(long, value_name = "DIR", conflicts_with = "seed_file")]
    folder: Option<PathBuf>,

    /// Seed the gallery from a JSON list of {id, uri} records.
    #[arg(long, value_name = "PATH")]
    seed_file: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Open the gallery window (default).
    Ui,
    /// Print the records the gallery would start with.
    List,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = resolve_config(&cli).and_then(|config| {
        let command = cli.command.unwrap_or(Command::Ui);
        run_command(command, &config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<AppConfig, CommandError> {
    let mut config = match &cli.config {
        Some(path) => {
            AppConfig::load(path).map_err(|error| CommandError::Usage(error.to_string()))?
        }
        None => AppConfig::default(),
    };

    if let Some(path) = &cli.folder {
        config.seed = SeedConfig::Folder { path: path.clone() };
    }
    if let Some(path) = &cli.seed_file {
        config.seed = SeedConfig::File { path: path.clone() };
    }
    Ok(config)
}

fn build_image_source(seed: &SeedConfig) -> Box<dyn ImageSource> {
    match seed {
        SeedConfig::Builtin => Box::new(BuiltinSeed),
        SeedConfig::File { path } => Box::new(JsonSeedFile::new(path)),
        SeedConfig::Folder { path } => Box::new(WalkdirImageSource::new(path)),
    }
}

fn run_command(command: Command, config: &AppConfig) -> Result<(), CommandError> {
    let source = build_image_source(&config.seed);
    let controller = AppController::bootstrap(source.as_ref())
        .map_err(|error| CommandError::Runtime(format!("failed to load gallery: {error}")))?;

    match command {
        Command::Ui => ui::launch_window(controller, Box::new(ImageCrateDecoder), config)
            .map_err(CommandError::Runtime),
        Command::List => {
            let records = controller.gallery().records();
            if records.is_empty() {
                println!("gallery is empty");
                return Ok(());
            }
            for record in records {
                println!("{}", present_record_row(record));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn no_subcommand_defaults_to_builtin_seed() {
        let cli = parse(&["lite-gallery"]);
        assert!(cli.command.is_none());
        let config = resolve_config(&cli).expect("config should resolve");
        assert_eq!(config.seed, SeedConfig::Builtin);
    }

    #[test]
    fn folder_flag_overrides_seed() {
        let cli = parse(&["lite-gallery", "--folder", "photos", "list"]);
        assert_eq!(cli.command, Some(Command::List));
        let config = resolve_config(&cli).expect("config should resolve");
        assert_eq!(
            config.seed,
            SeedConfig::Folder {
                path: PathBuf::from("photos")
            }
        );
    }

    #[test]
    fn folder_and_seed_file_conflict() {
        let result = Cli::try_parse_from([
            "lite-gallery",
            "--folder",
            "photos",
            "--seed-file",
            "seed.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_config_file_is_usage_error() {
        let cli = parse(&["lite-gallery", "--config", "/nonexistent/gallery.json"]);
        assert!(matches!(resolve_config(&cli), Err(CommandError::Usage(_))));
    }

    #[test]
    fn list_with_missing_folder_is_runtime_error() {
        let config = AppConfig {
            seed: SeedConfig::Folder {
                path: PathBuf::from("/nonexistent/photos"),
            },
            ..AppConfig::default()
        };
        assert!(matches!(
            run_command(Command::List, &config),
            Err(CommandError::Runtime(_))
        ));
    }
}
