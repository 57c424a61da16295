mod app;
mod clipboard;
mod config;
mod contrast;
mod input;
mod palette;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use palette::{ColorEntry, GeminiClient, PaletteGenerator};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tint", version, about = "Generate color palettes from a theme or mood")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Generate a palette and print it to stdout (headless).
    Generate {
        /// Theme, mood, or idea, e.g. "Calm Beach Sunset".
        theme: String,
        /// Print the palette as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the example themes.
    Examples,
    /// Show or change the Gemini model.
    Model {
        #[command(subcommand)]
        cmd: ModelCommand,
    },
    /// Print the config file path.
    ConfigPath,
}

#[derive(Debug, Subcommand)]
enum ModelCommand {
    /// Print the configured model.
    Show,
    /// Use a different model, e.g. gemini-2.5-pro.
    Set { model: String },
    /// Go back to the default model.
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            init_logging(Some(&cfg.paths.data_dir.join("tint.log")))?;
            let generator = make_client(&cfg)?;
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg, Arc::new(generator), Arc::new(clipboard::SystemClipboard));
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Generate { theme, json } => {
            init_logging(None)?;
            if theme.trim().is_empty() {
                anyhow::bail!(app::state::EMPTY_THEME_MESSAGE);
            }
            let client = make_client(&cfg)?;
            let palette = client.generate(theme.trim()).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&palette)?);
            } else {
                print_palette(&palette);
            }
        }
        Command::Examples => {
            for (i, example) in app::state::EXAMPLE_THEMES.iter().enumerate() {
                println!("{}. {}", i + 1, example);
            }
        }
        Command::Model { cmd } => match cmd {
            ModelCommand::Show => println!("{}", cfg.api.model),
            ModelCommand::Set { model } => {
                let mut cfg = cfg;
                cfg.api.model = model;
                config::save(&cfg, cli.config.as_deref()).context("save config")?;
                println!("Model set to {}.", cfg.api.model);
            }
            ModelCommand::Reset => {
                let mut cfg = cfg;
                cfg.api.model = palette::gemini::DEFAULT_MODEL.to_string();
                config::save(&cfg, cli.config.as_deref()).context("save config")?;
                println!("Model reset to {}.", cfg.api.model);
            }
        },
        Command::ConfigPath => {
            let path = match cli.config {
                Some(p) => p,
                None => config::default_config_path()?,
            };
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// Logs go to `log_file` when given (the TUI owns the terminal), stderr otherwise.
fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create dir {}", parent.display()))?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn make_client(cfg: &config::Config) -> anyhow::Result<GeminiClient> {
    let gemini = cfg.api.gemini_config(|var| std::env::var(var).ok())?;
    let client = GeminiClient::new(gemini)?;
    tracing::debug!(model = client.model(), "Gemini client ready");
    Ok(client)
}

fn print_palette(palette: &[ColorEntry]) {
    let styled = std::io::stdout().is_terminal();
    for (i, c) in palette.iter().enumerate() {
        println!("{}", palette_line(i, c, styled));
    }
}

fn palette_line(index: usize, color: &ColorEntry, styled: bool) -> String {
    let hex = if styled { styled_hex(&color.hex) } else { color.hex.clone() };
    format!("{:02}. {}  {} - {}", index + 1, hex, color.name, color.description)
}

fn styled_hex(hex: &str) -> String {
    use crossterm::style::{Color, Stylize};

    let Some([r, g, b]) = contrast::parse_hex(hex) else {
        return hex.to_string();
    };
    let fg = match contrast::foreground_for(hex) {
        contrast::Foreground::Dark => Color::Black,
        contrast::Foreground::Light => Color::White,
    };
    format!(" {hex} ").with(fg).on(Color::Rgb { r, g, b }).to_string()
}
