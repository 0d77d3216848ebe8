use clap::Parser;
use folio::Theme;
use folio::core::config::{self, CliOverrides};
use folio::core::content::{self, Portfolio};
use folio::core::prefs;
use folio::core::state::{App, SectionId};
use folio::core::typing::TypingEffect;
use folio::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", about = "A personal portfolio, in your terminal")]
struct Args {
    /// Color theme (overrides saved preference)
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Portfolio content file (TOML)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Section to open at: hero, about, expertise, stories, approach, contact
    #[arg(short, long)]
    section: Option<String>,

    /// Log level written to folio.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to folio.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("folio.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = config::load_config().map_err(io::Error::other)?;
    let cli = CliOverrides {
        theme: args.theme,
        content_file: args.content.clone(),
    };
    let resolved = config::resolve(&file_config, &cli);

    let portfolio = match &resolved.content_file {
        Some(path) => content::load_content(path).map_err(io::Error::other)?,
        None => Portfolio::default(),
    };

    // CLI flag → remembered toggle → env/config → dark.
    let theme = args
        .theme
        .or_else(|| prefs::load_prefs().theme)
        .or(resolved.theme)
        .unwrap_or_default();

    let start = match args.section.as_deref() {
        Some(name) => Some(SectionId::from_name(name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unknown section: {name}"),
            )
        })?),
        None => None,
    };

    let phrases = resolved
        .phrases
        .clone()
        .unwrap_or_else(|| portfolio.default_phrases());
    let typing = TypingEffect::new(phrases, resolved.typing).map_err(io::Error::other)?;

    log::info!(
        "Folio starting up: theme={}, content={}",
        theme.label(),
        resolved
            .content_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string())
    );

    let mut app = App::new(portfolio, theme);
    app.counter_duration = resolved.counter_duration;

    tui::run(app, typing, start)
}
