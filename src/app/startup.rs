//! Application startup and subcommand dispatch

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::app::cli::args::{Args, Command, SoundsAction};
use crate::app::cli::display;
use crate::config::{load_config, validate_instance, NotificationConfig, ResolvedConfig};
use crate::core::logging::init_logging;
use crate::core::version;
use crate::download::download_sounds;
use crate::glyphs::render_text;
use crate::notify::api::{Host, HttpHost, Toast, ToastVariant};
use crate::sounds::api::{
    all_sounds_to_download, sound_counts, sound_file_list, sounds_to_download, Faction,
};

/// Exit code for usage and IO problems in `validate`
const EXIT_USAGE: u8 = 2;

/// Parse arguments, initialize logging and run the selected subcommand.
/// Returns the process exit code.
pub async fn run() -> u8 {
    let args = Args::parse();
    let use_color = (args.color || std::io::stdout().is_terminal()) && !args.no_color;

    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file.as_deref().and_then(Path::to_str),
        use_color,
    ) {
        eprintln!("Failed to initialise logging: {}", e);
        return EXIT_USAGE;
    }

    log::debug!(
        "warcraft-notify starting (api {}, built {})",
        version::get_api_version(),
        version::build_time()
    );

    let config = match load_resolved_config(args.config_file.as_deref()) {
        Ok(config) => config,
        Err(code) => return code,
    };

    match args.command {
        Command::Sounds { action } => run_sounds(action, use_color),
        Command::Download {
            base_url,
            faction,
            dest,
        } => run_download(&base_url, faction, dest, &config).await,
        Command::Banner { text } => run_banner(&text),
        Command::Validate { schema, example } => run_validate(&schema, &example),
        Command::Toast {
            endpoint,
            title,
            message,
            variant,
        } => run_toast(&endpoint, title, message, variant).await,
    }
}

/// Load and resolve the plugin configuration. Without a `--config-file`
/// the documented defaults apply.
fn load_resolved_config(config_file: Option<&Path>) -> Result<ResolvedConfig, u8> {
    match config_file {
        Some(path) => match load_config(path) {
            Ok(config) => Ok(config.resolve()),
            Err(e) => {
                eprintln!("{}", e);
                Err(EXIT_USAGE)
            }
        },
        None => Ok(NotificationConfig::default().resolve()),
    }
}

fn run_sounds(action: SoundsAction, use_color: bool) -> u8 {
    match action {
        SoundsAction::List { faction, by_unit } => {
            if by_unit {
                let factions: &[Faction] = match faction {
                    Some(f) => match f {
                        Faction::Alliance => &[Faction::Alliance],
                        Faction::Horde => &[Faction::Horde],
                    },
                    None => &[Faction::Alliance, Faction::Horde],
                };
                display::display_units(factions, use_color);
            } else {
                display::display_file_list(&sound_file_list(faction));
            }
        }
        SoundsAction::Counts => display::display_counts(&sound_counts()),
    }
    0
}

async fn run_download(
    base_url: &str,
    faction: Option<Faction>,
    dest: Option<PathBuf>,
    config: &ResolvedConfig,
) -> u8 {
    let files = match faction {
        Some(faction) => sounds_to_download(faction, base_url),
        None => all_sounds_to_download(base_url),
    };
    let dest = dest.unwrap_or_else(|| config.sounds_dir.clone());

    match download_sounds(&files, &dest).await {
        Ok(summary) => {
            println!(
                "{} fetched, {} skipped, {} failed -> {}",
                summary.fetched,
                summary.skipped,
                summary.failed,
                dest.display()
            );
            0
        }
        Err(e) => {
            log::error!("Download failed: {}", e);
            1
        }
    }
}

fn run_banner(words: &[String]) -> u8 {
    for line in render_text(&words.join(" ")) {
        println!("{}", line);
    }
    0
}

/// Validate `example` against `schema`.
///
/// Script-style exit codes: 0 valid, 1 invalid (violations printed),
/// 2 for unreadable or unparsable input.
pub fn run_validate(schema_path: &Path, example_path: &Path) -> u8 {
    let schema = match read_json(schema_path) {
        Ok(value) => value,
        Err(code) => return code,
    };
    let example = match read_json(example_path) {
        Ok(value) => value,
        Err(code) => return code,
    };

    let violations = validate_instance(&schema, &example);
    if violations.is_empty() {
        println!("{} conforms to {}", example_path.display(), schema_path.display());
        0
    } else {
        for violation in &violations {
            println!("{}", violation);
        }
        println!("{} violation(s) found", violations.len());
        1
    }
}

fn read_json(path: &Path) -> Result<serde_json::Value, u8> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Cannot read {}: {}", path.display(), e);
            return Err(EXIT_USAGE);
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            eprintln!("{} is not valid JSON: {}", path.display(), e);
            Err(EXIT_USAGE)
        }
    }
}

async fn run_toast(endpoint: &str, title: String, message: String, variant: ToastVariant) -> u8 {
    let host = HttpHost::new(endpoint);
    let toast = Toast::new(title, message, variant);

    match host.show_toast(&toast).await {
        Ok(()) => {
            println!("Toast delivered to {}", endpoint);
            0
        }
        Err(e) => {
            // Manual test path: report and give up, no retry
            log::error!("Could not reach host at {}: {}", endpoint, e);
            1
        }
    }
}
