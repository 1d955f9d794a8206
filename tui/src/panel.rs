//! The carousel panel: one host handle and one embedded surface per picker
//! invocation.
//!
//! The two halves communicate only through typed channels carrying
//! [`HostMessage`] and [`SurfaceMessage`]. The surface's receiver is created
//! inside [`create_panel`], before the host half is handed out, so the
//! attach-before-send rule is satisfied by construction and the initial
//! `SetFiles` push can never be dropped. Disposing a panel is dropping its
//! halves; a send toward a disposed half is silently discarded.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::sync::mpsc::Sender;
use std::sync::mpsc::channel;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use switcher_protocol::FileSnapshot;
use switcher_protocol::HostMessage;
use switcher_protocol::SurfaceMessage;

use crate::carousel::CarouselState;
use crate::highlight::Highlighter;
use crate::key_hint;
use crate::language;

/// Host-side handle to an open panel.
pub struct PanelHost {
    outbox: Sender<HostMessage>,
    intents: Receiver<SurfaceMessage>,
}

impl PanelHost {
    /// Push the full snapshot sequence. Called exactly once per invocation.
    /// If the surface is already gone the push is dropped on the floor.
    pub fn send_files(&self, files: Vec<FileSnapshot>) {
        if self.outbox.send(HostMessage::SetFiles { files }).is_err() {
            tracing::trace!("snapshot push ignored; panel already disposed");
        }
    }

    /// Next terminal intent reported by the surface, if any.
    pub fn try_intent(&self) -> Option<SurfaceMessage> {
        self.intents.try_recv().ok()
    }
}

/// The presentation surface for one invocation: carousel state plus the
/// pre-rendered preview card for each snapshot.
pub struct PanelSurface {
    state: CarouselState,
    cards: Vec<Vec<Line<'static>>>,
    inbox: Receiver<HostMessage>,
    intents: Sender<SurfaceMessage>,
    highlighter: Arc<dyn Highlighter>,
}

/// Create a fresh panel. The surface's inbox exists before the host half is
/// returned, so nothing the host sends can race the handler attachment.
pub fn create_panel(highlighter: Arc<dyn Highlighter>) -> (PanelHost, PanelSurface) {
    let (outbox, inbox) = channel();
    let (intent_tx, intent_rx) = channel();
    let host = PanelHost {
        outbox,
        intents: intent_rx,
    };
    let surface = PanelSurface {
        state: CarouselState::new(),
        cards: Vec::new(),
        inbox,
        intents: intent_tx,
        highlighter,
    };
    (host, surface)
}

impl PanelSurface {
    /// Drain pending host messages, rebuilding the carousel on `SetFiles`.
    pub fn pump(&mut self) {
        while let Ok(message) = self.inbox.try_recv() {
            match message {
                HostMessage::SetFiles { files } => {
                    self.cards = files
                        .iter()
                        .map(|snapshot| {
                            self.highlighter
                                .highlight(&snapshot.content, &language::resolve_language(snapshot))
                        })
                        .collect();
                    self.state.set_files(files);
                }
            }
        }
    }

    /// Route a key event into the carousel; terminal intents go back to the
    /// host. A send failure means the host side is already disposed, which
    /// is fine: the panel is moments from teardown either way.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(intent) = self.state.handle_key(key)
            && self.intents.send(intent).is_err()
        {
            tracing::trace!("intent dropped; host side disposed");
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" File Switcher ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [header_area, preview_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        match self.state.selected() {
            Some(snapshot) => {
                self.render_header(snapshot, header_area, buf);
                self.render_preview(preview_area, buf);
            }
            None => {
                Paragraph::new("No recent files yet")
                    .alignment(Alignment::Center)
                    .dim()
                    .render(preview_area, buf);
            }
        }
        render_footer(footer_area, buf);
    }

    fn render_header(&self, snapshot: &FileSnapshot, area: Rect, buf: &mut Buffer) {
        let count = format!("{} / {}", self.state.selected_index() + 1, self.state.len());
        let count_width = count.width() as u16;
        let [name_area, count_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(count_width)]).areas(area);

        let mut spans = Vec::new();
        if snapshot.is_recent {
            spans.push(Span::styled(
                " Recent ",
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(snapshot.name.clone(), Style::default().bold()));
        Paragraph::new(Line::from(spans)).render(name_area, buf);
        Paragraph::new(Line::from(count).dim())
            .alignment(Alignment::Right)
            .render(count_area, buf);
    }

    fn render_preview(&self, area: Rect, buf: &mut Buffer) {
        let Some(card) = self.cards.get(self.state.selected_index()) else {
            return;
        };
        Paragraph::new(card.clone()).render(area, buf);
    }
}

fn render_footer(area: Rect, buf: &mut Buffer) {
    let mut spans = key_hint::hint(&[KeyCode::Left, KeyCode::Right], "navigate");
    spans.push(Span::styled("  ·  ", Style::default().dim()));
    spans.extend(key_hint::hint(&[KeyCode::Enter], "open"));
    spans.push(Span::styled("  ·  ", Style::default().dim()));
    spans.extend(key_hint::hint(&[KeyCode::Esc], "close"));
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}
