use clap::{Parser, ValueEnum};
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use pokehist::app::App;
use pokehist::catalog::POKEMON_MILESTONES;
use pokehist::config::{self, insight_types::InsightProviderType};
use pokehist::insight::{InsightProvider, InsightRequest};
use pokehist::timeline::timeline_events;

/// Interactive Pokémon history timeline
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal timeline of Pokémon franchise milestones with AI-generated insights"
)]
struct Args {
    /// Insight provider to use, overriding the config file
    #[arg(long, value_enum)]
    provider: Option<ProviderArg>,

    /// Disable background prefetching of insight text
    #[arg(long)]
    no_prefetch: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProviderArg {
    Local,
    Gemini,
}

impl From<ProviderArg> for InsightProviderType {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Local => InsightProviderType::Local,
            ProviderArg::Gemini => InsightProviderType::Gemini,
        }
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/pokehist-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/pokehist-debug.log")
            .expect("Failed to open /tmp/pokehist-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== POKEHIST DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let mut config_result = config::load_config();

    let args = Args::parse();
    if let Some(provider) = args.provider {
        config_result.config.insight.provider = provider.into();
    }

    let terminal = init_terminal()?;

    let app = App::new(&config_result.config);
    let result = run(terminal, app, config_result, args.no_prefetch);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== POKEHIST DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: config::ConfigResult,
    no_prefetch: bool,
) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    setup_insight_worker(&mut app, &config_result.config, no_prefetch);

    // Resolve the first milestone and the quick-facts panel immediately
    timeline_events::dispatch_selection(&mut app);
    app.insight.send_request(InsightRequest::QuickStats);

    loop {
        // Poll before render so worker responses land in the same frame
        app.poll_insight_responses();

        if app.notification.clear_if_expired() {
            app.mark_dirty();
        }

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the insight worker thread, channels, and prefetch schedule
fn setup_insight_worker(app: &mut App, config: &config::Config, no_prefetch: bool) {
    let provider = match InsightProvider::from_config(&config.insight) {
        Ok(provider) => provider,
        Err(e) => {
            app.notification
                .show_warning(&format!("{} Falling back to the local archive.", e));
            InsightProvider::Local(pokehist::insight::LocalArchive::new())
        }
    };

    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    let prefetch_tx = response_tx.clone();
    app.insight.set_channels(request_tx, response_rx);

    pokehist::insight::worker::spawn_worker(provider.clone(), request_rx, response_tx);

    if !no_prefetch {
        app.insight
            .start_prefetch(POKEMON_MILESTONES, &config.insight, provider, prefetch_tx);
    }
}
