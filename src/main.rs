mod app;
mod config;
mod contact;
mod theme;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use app::App;
use config::{Config, ConfigError};
use contact::ContactForm;
use theme::ThemeStore;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[clap(short, long, default_value = "portfolio.toml")]
    config: PathBuf,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play the heading reveal and the typewriter line (default)
    Run,
    /// Show the saved theme, or flip it with --toggle
    Theme {
        #[clap(long, action = clap::ArgAction::SetTrue)]
        toggle: bool,
    },
    /// Check contact form fields
    Contact {
        #[clap(long, default_value = "")]
        name: String,
        #[clap(long, default_value = "")]
        email: String,
        #[clap(long, default_value = "")]
        subject: String,
        #[clap(long, default_value = "")]
        message: String,
    },
}

fn load_config(path: &Path) -> Config {
    match Config::load(path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No {} found, using defaults", path.display());
            Config::default()
        }
        Err(e) => {
            log::error!("Failed to load {}: {}", path.display(), e);
            Config::default()
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args.config);
    let store = ThemeStore::new(&config.theme_file);
    log::debug!("Theme preference file: {}", store.path().display());

    match args.command.unwrap_or(Command::Run) {
        Command::Run => {
            let theme = store.load();
            let mut app = App::new(config, theme, std::io::stdout());
            match app.run() {
                Ok(cycles) => log::info!("Played {} cycle(s)", cycles),
                Err(e) => {
                    log::error!("Terminal output failed: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        Command::Theme { toggle } => {
            let theme = if toggle {
                match store.toggle() {
                    Ok(theme) => theme,
                    Err(e) => {
                        log::error!("Failed to save theme: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                store.load()
            };
            println!("{} ({})", theme, theme.toggle_label());
        }
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let form = ContactForm {
                name,
                email,
                subject,
                message,
            };
            if let Err(errors) = form.validate() {
                for error in errors {
                    eprintln!("{}", error);
                }
                return ExitCode::FAILURE;
            }
            println!("Form is valid");
        }
    }

    ExitCode::SUCCESS
}
