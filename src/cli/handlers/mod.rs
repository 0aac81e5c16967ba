use tracing::{debug, info};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::color_scheme::EnvColorScheme;
use crate::io::config_io;
use crate::io::prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use crate::model::{AppConfig, ThemeMode};
use crate::session::Session;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let (session, config) = build_session(&cli)?;

    match cli.command {
        None => crate::tui::run(session, &config),
        Some(Commands::List(args)) => cmd_list(session, args, json),
        Some(Commands::Stats) => cmd_stats(session, json),
        Some(Commands::Theme(args)) => cmd_theme(session, args, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load config and open the preference store the flags select
pub fn build_session(cli: &Cli) -> Result<(Session, AppConfig), Box<dyn std::error::Error>> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config_io::default_config_path);
    let config = config_io::load_config(&config_path)?;
    debug!(path = %config_path.display(), "config loaded");

    let prefs: Box<dyn PreferenceStore> = if cli.no_persist {
        Box::new(MemoryPreferenceStore::new())
    } else {
        let store = match &cli.prefs {
            Some(path) => FilePreferenceStore::new(path),
            None => FilePreferenceStore::default_location(),
        };
        debug!(path = %store.path().display(), "using preference file");
        Box::new(store)
    };

    let probe = EnvColorScheme::new();
    let session = if config.session.seed_samples {
        Session::seeded(prefs, &probe)
    } else {
        Session::new(Vec::new(), prefs, &probe)
    };
    Ok((session, config))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(
    mut session: Session,
    args: ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    session.set_filter(args.filter);
    let visible = session.visible();
    if json {
        let out = ListJson {
            filter: args.filter,
            tasks: visible,
            counts: session.counts(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", format_list(&visible, args.filter));
    }
    Ok(())
}

fn cmd_stats(session: Session, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let counts = session.counts();
    if json {
        println!("{}", serde_json::to_string_pretty(&StatsJson::from(counts))?);
    } else {
        println!("{}", format_stats(&counts));
    }
    Ok(())
}

fn cmd_theme(
    mut session: Session,
    args: ThemeArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let theme = match args.action.unwrap_or(ThemeAction::Show) {
        ThemeAction::Show => session.theme(),
        ThemeAction::Dark => set_theme(&mut session, ThemeMode::Dark),
        ThemeAction::Light => set_theme(&mut session, ThemeMode::Light),
        ThemeAction::Toggle => {
            let next = session.theme().toggled();
            set_theme(&mut session, next)
        }
    };
    if json {
        let out = ThemeJson {
            theme,
            dark: theme.is_dark(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", theme);
    }
    Ok(())
}

fn set_theme(session: &mut Session, theme: ThemeMode) -> ThemeMode {
    session.set_theme(theme);
    info!(%theme, "theme set");
    theme
}
