use outbreak::api::StatsApiClient;
use outbreak::app::{App, AppMessage, Screen};
use outbreak::models::{LocationRef, Scope};
use outbreak::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Set up file-based logging.
///
/// A TUI owns the terminal, so log lines go to a file under the local data
/// directory. The `OUTBREAK_LOG` env var controls the filter (default
/// "info"). Logging is optional: if the file cannot be created the app runs
/// without it.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let Some(log_dir) = dirs::data_local_dir().map(|dir| dir.join("outbreak")) else {
        return;
    };
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(log_file) = std::fs::File::options()
        .create(true)
        .append(true)
        .open(log_dir.join("outbreak.log"))
    else {
        return;
    };

    let filter = EnvFilter::try_from_env("OUTBREAK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .try_init();
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("outbreak {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;
    init_logging();
    setup_panic_hook();

    // Optional positional argument: a country name or ISO code to open with
    // instead of the global aggregate. The API resolves either form.
    let initial_scope = std::env::args()
        .nth(1)
        .filter(|arg| !arg.starts_with('-'))
        .map(|arg| Scope::Country(LocationRef::new(arg.clone(), arg)))
        .unwrap_or(Scope::Global);

    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(StatsApiClient::new());

    // Main event loop. The first fetch spawns tasks, so initialize must run
    // inside the runtime.
    let result = runtime.block_on(async {
        app.initialize(initial_scope);
        run_app(&mut terminal, &mut app).await
    });

    restore_terminal(&mut terminal)?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed (dirty flag)
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        // Poll keyboard events and the message channel; the timeout drives
        // the loading spinner animation.
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(100));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            // Ctrl+C always quits
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                app.quit();
                                return Ok(());
                            }
                            handle_key(app, key.code, key.modifiers);
                        }
                        _ => {}
                    }
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match app.screen {
        Screen::Stats => match code {
            KeyCode::Char('q') => app.quit(),
            KeyCode::Char('r') => {
                if !app.view.is_fetching() {
                    app.refresh();
                }
            }
            KeyCode::Char('g') => app.set_scope(Scope::Global),
            KeyCode::Char('s') | KeyCode::Char('/') => app.navigate_to_search(),
            _ => {}
        },
        Screen::Search => match code {
            KeyCode::Esc => app.cancel_search(),
            KeyCode::Enter => app.confirm_search_selection(),
            KeyCode::Backspace => {
                app.search.backspace();
                app.mark_dirty();
            }
            KeyCode::Up => {
                app.search.move_up();
                app.mark_dirty();
            }
            KeyCode::Down => {
                app.search.move_down();
                app.mark_dirty();
            }
            KeyCode::Char(c)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                app.search.type_char(c);
                app.mark_dirty();
            }
            _ => {}
        },
        Screen::Error => match code {
            KeyCode::Char('q') => app.quit(),
            KeyCode::Char('r') => app.retry(),
            // Back remounts a fresh view; a failed screen never resumes.
            KeyCode::Esc => app.retry(),
            _ => {}
        },
    }
}
