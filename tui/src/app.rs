//! The host session: owns the recent-file tracker and the single panel slot,
//! dispatches commands, and performs the file-open action for the surface.

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Receiver;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use switcher_protocol::SurfaceMessage;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::highlight::Highlighter;
use crate::key_hint;
use crate::panel;
use crate::panel::PanelHost;
use crate::panel::PanelSurface;
use crate::recent_files::RecentFiles;
use crate::snapshot;
use crate::tui::Tui;
use crate::workspace::Workspace;

/// An open picker invocation: the host handle and its embedded surface.
struct Panel {
    host: PanelHost,
    surface: PanelSurface,
}

pub(crate) struct App {
    /// Session-lifetime tracker, fed by focus events as files are opened.
    recent_files: RecentFiles,
    workspace: Arc<dyn Workspace>,
    highlighter: Arc<dyn Highlighter>,
    /// The single panel slot. At most one panel is ever open.
    panel: Option<Panel>,
    last_error: Option<String>,
    app_event_tx: AppEventSender,
    app_event_rx: Receiver<AppEvent>,
}

impl App {
    pub(crate) fn new(
        workspace: Arc<dyn Workspace>,
        highlighter: Arc<dyn Highlighter>,
        app_event_tx: AppEventSender,
        app_event_rx: Receiver<AppEvent>,
        seed_paths: &[PathBuf],
    ) -> Self {
        let mut recent_files = RecentFiles::new();
        for path in seed_paths {
            recent_files.record_focus(path.clone());
        }
        Self {
            recent_files,
            workspace,
            highlighter,
            panel: None,
            last_error: None,
            app_event_tx,
            app_event_rx,
        }
    }

    pub(crate) fn run(&mut self, tui: &mut Tui) -> anyhow::Result<()> {
        // The picker is the whole point of the session; invoke it on entry.
        self.show_picker();
        self.app_event_tx.send(AppEvent::RequestRedraw);

        while let Ok(event) = self.app_event_rx.recv() {
            match event {
                AppEvent::KeyEvent(key) => {
                    self.handle_key(tui, key)?;
                    self.app_event_tx.send(AppEvent::RequestRedraw);
                }
                AppEvent::RequestRedraw => self.draw(tui)?,
                AppEvent::ExitRequest => break,
            }
        }
        Ok(())
    }

    /// The single host-exposed command. Idempotent: any prior panel is
    /// disposed first, then a fresh one is built from a fresh snapshot of
    /// the tracked files. Returns whether a prior panel had to be disposed.
    pub(crate) fn show_picker(&mut self) -> bool {
        let disposed_prior = self.dispose_panel();
        let (host, surface) = panel::create_panel(self.highlighter.clone());
        let files = snapshot::build_snapshots(self.workspace.as_ref(), &self.recent_files);
        tracing::debug!("opening picker with {} snapshot(s)", files.len());
        host.send_files(files);
        self.panel = Some(Panel { host, surface });
        disposed_prior
    }

    /// Drop the current panel, if any. Dropping both halves closes the
    /// channels; anything still in flight is discarded.
    fn dispose_panel(&mut self) -> bool {
        self.panel.take().is_some()
    }

    pub(crate) fn panel_is_open(&self) -> bool {
        self.panel.is_some()
    }

    fn handle_key(&mut self, tui: &mut Tui, key: KeyEvent) -> anyhow::Result<()> {
        match &mut self.panel {
            Some(panel) => {
                panel.surface.pump();
                panel.surface.handle_key(key);
            }
            None => {
                self.handle_idle_key(key);
                return Ok(());
            }
        }
        self.drain_intents(tui)
    }

    fn handle_idle_key(&mut self, key: KeyEvent) {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return;
        }
        match key.code {
            KeyCode::Char('p') => {
                self.show_picker();
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.app_event_tx.send(AppEvent::ExitRequest);
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app_event_tx.send(AppEvent::ExitRequest);
            }
            _ => {}
        }
    }

    /// Act on terminal intents reported by the surface. Both intents end the
    /// panel's life; `OpenFile` additionally hands the file to the editing
    /// surface and records the focus event.
    fn drain_intents(&mut self, tui: &mut Tui) -> anyhow::Result<()> {
        // The surface goes inert after its first terminal intent, so at most
        // one shows up here.
        let mut intents = Vec::new();
        if let Some(panel) = &self.panel {
            while let Some(intent) = panel.host.try_intent() {
                intents.push(intent);
            }
        }
        for intent in intents {
            match intent {
                SurfaceMessage::OpenFile { file_path } => {
                    self.open_file(tui, &file_path)?;
                    self.dispose_panel();
                }
                SurfaceMessage::Close => {
                    self.dispose_panel();
                }
            }
        }
        Ok(())
    }

    /// Open `path` in the editing surface. A stale path (deleted since it
    /// was tracked) surfaces as the editor's own failure; the panel is
    /// disposed regardless, so no recovery is needed here.
    fn open_file(&mut self, tui: &mut Tui, path: &Path) -> anyhow::Result<()> {
        let workspace = self.workspace.clone();
        match tui.suspend(|| workspace.open_document(path))? {
            Ok(()) => {
                self.recent_files.record_focus(path);
                self.last_error = None;
            }
            Err(err) => {
                tracing::error!("failed to open {}: {err}", path.display());
                self.last_error = Some(format!("cannot open {}: {err}", path.display()));
            }
        }
        Ok(())
    }

    fn draw(&mut self, tui: &mut Tui) -> anyhow::Result<()> {
        if let Some(panel) = &mut self.panel {
            panel.surface.pump();
        }
        let panel = &self.panel;
        let last_error = self.last_error.as_deref();
        let tracked = self.recent_files.len();
        tui.terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            match panel {
                Some(panel) => panel.surface.render(area, buf),
                None => render_idle(area, buf, tracked, last_error),
            }
        })?;
        Ok(())
    }
}

fn render_idle(area: Rect, buf: &mut Buffer, tracked: usize, last_error: Option<&str>) {
    let mut lines = vec![
        Line::from(Span::styled("switcher", Style::default().bold())),
        Line::from(""),
        Line::from(Span::styled(
            format!("{tracked} recent file(s) tracked"),
            Style::default().dim(),
        )),
        Line::from(""),
        Line::from(key_hint::hint(&[KeyCode::Char('p')], "open the file carousel")),
        Line::from(key_hint::hint(&[KeyCode::Char('q')], "quit")),
    ];
    if let Some(error) = last_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}
