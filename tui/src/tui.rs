//! Terminal lifecycle: raw mode, alternate screen, panic-safe restore, and
//! the input thread that pumps crossterm events into the app channel.

use std::io::Stdout;
use std::io::stdout;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;

use crossterm::event::Event;
use crossterm::execute;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;

pub(crate) struct Tui {
    pub(crate) terminal: Terminal<CrosstermBackend<Stdout>>,
    /// While set, the input thread stops reading the tty so a spawned editor
    /// can own it.
    input_paused: Arc<AtomicBool>,
}

impl Tui {
    pub(crate) fn init() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        set_panic_hook();
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self {
            terminal,
            input_paused: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Spawn the thread that forwards terminal events to the app loop. Key
    /// events are forwarded as-is; resizes become redraw requests.
    pub(crate) fn spawn_input_thread(&self, sender: AppEventSender) {
        let paused = self.input_paused.clone();
        std::thread::spawn(move || {
            loop {
                if paused.load(Ordering::Relaxed) {
                    std::thread::sleep(Duration::from_millis(50));
                    continue;
                }
                match crossterm::event::poll(Duration::from_millis(100)) {
                    Ok(false) => {}
                    Ok(true) => match crossterm::event::read() {
                        Ok(Event::Key(key)) => sender.send(AppEvent::KeyEvent(key)),
                        Ok(Event::Resize(..)) => sender.send(AppEvent::RequestRedraw),
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!("input thread read failed: {err}");
                            break;
                        }
                    },
                    Err(err) => {
                        tracing::error!("input thread poll failed: {err}");
                        break;
                    }
                }
            }
        });
    }

    /// Hand the terminal to `f` (typically an editor subprocess): leave the
    /// alternate screen and raw mode, run it, then take the terminal back.
    pub(crate) fn suspend<T>(&mut self, f: impl FnOnce() -> T) -> anyhow::Result<T> {
        self.input_paused.store(true, Ordering::Relaxed);
        disable_raw_mode()?;
        execute!(stdout(), LeaveAlternateScreen)?;

        let result = f();

        execute!(stdout(), EnterAlternateScreen)?;
        enable_raw_mode()?;
        self.input_paused.store(false, Ordering::Relaxed);
        self.terminal.clear()?;
        Ok(result)
    }

    pub(crate) fn restore(&mut self) {
        restore_terminal();
    }
}

fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        hook(info);
    }));
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(stdout(), LeaveAlternateScreen);
}
