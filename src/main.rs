use folio::app::{App, AppMessage, TICK_RATE_MS};
use folio::config::FolioConfig;
use folio::logging;
use folio::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, EventStream, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    println!("folio {VERSION} - an animated developer portfolio for the terminal");
    println!();
    println!("Usage: folio [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --content <PATH>   Load portfolio content from a JSON file");
    println!("  --skip-boot        Jump straight to the main screen");
    println!("  --reduced-motion   Snap the carousel instead of easing it");
    println!("  --no-mouse         Do not capture mouse events");
    println!("  --version          Print the version and exit");
    println!("  --help             Show this help");
    println!();
    println!("Environment: FOLIO_SKIP_BOOT, FOLIO_REDUCED_MOTION, FOLIO_CONTENT,");
    println!("FOLIO_LOG, FOLIO_NO_MOUSE override the config file the same way.");
}

/// Apply command line flags on top of the loaded configuration.
fn apply_cli_flags(mut config: FolioConfig) -> FolioConfig {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--skip-boot" => config.skip_boot = true,
            "--reduced-motion" => config.reduced_motion = true,
            "--no-mouse" => config.mouse_capture = false,
            "--content" => {
                if let Some(path) = args.next() {
                    config.content_path = Some(path.into());
                }
            }
            _ => {}
        }
    }
    config
}

fn main() -> Result<()> {
    // Handle informational flags before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("folio {VERSION}");
        return Ok(());
    }
    if std::env::args().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return Ok(());
    }

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let config = apply_cli_flags(FolioConfig::load());
    logging::init(config.log_filter.as_deref())?;

    // Create Tokio runtime for the entire application
    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    // Best effort: not every terminal speaks the Kitty keyboard protocol
    let _ = execute!(
        stdout,
        PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
        )
    );

    // Mouse capture drives the hover highlights and card clicks; some
    // terminals report garbage, so it can be configured away.
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if config.mouse_capture {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(config)?;

    // Capture initial terminal dimensions
    let size = terminal.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;

    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    use std::io::Write;
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        // Pop keyboard enhancement flags BEFORE disabling raw mode
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);

        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = execute!(io::stdout(), Show);

        // Some terminals need a non-stack keyboard reset (CSI = 0 u) sent
        // after leaving the alternate screen
        let _ = write!(io::stdout(), "\x1b[=0u");
        let _ = io::stdout().flush();

        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    use std::io::Write;

    let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;

    // Some terminals need a non-stack keyboard reset (CSI = 0 u) sent
    // after leaving the alternate screen
    let _ = write!(terminal.backend_mut(), "\x1b[=0u");
    let _ = io::Write::flush(terminal.backend_mut());

    terminal.show_cursor()?;
    Ok(())
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
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        // Poll input events, the delivery channel and a 16ms animation
        // tick using tokio::select!
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(TICK_RATE_MS));

        tokio::select! {
            // Tick drives the boot sequence, typewriters, scramble,
            // marquee and the carousel easing.
            _ = timeout => {
                app.tick();
            }

            // Handle terminal events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(width, height) => {
                            app.update_terminal_dimensions(width, height);
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.handle_key_event(key);
                        }
                        Event::Mouse(mouse) => {
                            app.handle_mouse_event(mouse);
                        }
                        _ => {}
                    }
                }
            }

            // Delivery results coming back from contact form send tasks
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
