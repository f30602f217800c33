use clap::{Parser, Subcommand};
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{Write, stdout};
use std::time::Duration;

use toastkit::config::{self, Config};
use toastkit::{App, NotificationCenter, ToastError, ToastKind};

/// Toast notification center
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Toast notification center with timed dismissal and a terminal demo"
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show one toast in a fresh document and print the document markup
    Markup {
        /// Toast kind: success, error, info, warning (anything else renders without an icon)
        kind: String,
        /// Toast title
        title: String,
        /// Optional message shown below the title
        message: Option<String>,
        /// Lifetime in milliseconds, 0 keeps the toast until dismissed
        #[arg(long)]
        duration_ms: Option<u64>,
        /// Run every pending timer before printing
        #[arg(long)]
        settle: bool,
    },
}

fn main() -> Result<()> {
    // Writes to /tmp/toastkit-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    match args.command {
        Some(Command::Markup {
            kind,
            title,
            message,
            duration_ms,
            settle,
        }) => {
            if let Some(warning) = &config_result.warning {
                eprintln!("Warning: {}", warning);
            }
            print_markup(
                &config_result.config,
                &kind,
                &title,
                message.as_deref().unwrap_or(""),
                duration_ms,
                settle,
            )?;
        }
        None => {
            let terminal = init_terminal()?;
            let result = run(terminal, &config_result);
            restore_terminal()?;
            result?;
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("=== TOASTKIT DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/toastkit-debug.log")
    else {
        return;
    };

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

    log::debug!("=== TOASTKIT DEBUG SESSION STARTED ===");
}

/// Shows a single toast and writes the resulting body markup to stdout
fn print_markup(
    config: &Config,
    kind: &str,
    title: &str,
    message: &str,
    duration_ms: Option<u64>,
    settle: bool,
) -> Result<(), ToastError> {
    let mut center = NotificationCenter::new(config.toast.clone());
    let kind = ToastKind::parse(kind);
    let duration = duration_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| kind.default_duration(center.config()));

    center.show(kind, title, message, duration);
    center.frame();

    if settle {
        while let Some(deadline) = center.next_deadline() {
            center.advance_to(deadline);
        }
    }

    let mut out = stdout().lock();
    writeln!(out, "{}", center.markup())?;
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, config_result: &config::ConfigResult) -> Result<()> {
    let mut app = App::new(&config_result.config);

    if let Some(warning) = &config_result.warning {
        app.center.warning("Config not loaded", warning, None);
    }

    loop {
        app.tick();
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
