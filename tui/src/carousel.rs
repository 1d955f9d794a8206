//! Surface-side carousel state machine.

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use switcher_protocol::FileSnapshot;
use switcher_protocol::SurfaceMessage;

/// Which way the carousel rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// State of the single-active-card carousel.
///
/// Rebuilt wholesale on every snapshot push; nothing survives panel
/// teardown. `selected_index` stays within `[0, len)` whenever the file list
/// is non-empty, and navigation wraps modulo the file count.
#[derive(Debug, Default)]
pub struct CarouselState {
    files: Vec<FileSnapshot>,
    selected_index: usize,
    /// Set once a terminal intent has been emitted; all further input is
    /// ignored while the surface waits to be disposed.
    inert: bool,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the file list. Selection resets to the first card.
    pub fn set_files(&mut self, files: Vec<FileSnapshot>) {
        self.files = files;
        self.selected_index = 0;
    }

    pub fn files(&self) -> &[FileSnapshot] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&FileSnapshot> {
        self.files.get(self.selected_index)
    }

    /// Rotate the active card. A no-op on an empty carousel.
    pub fn navigate(&mut self, direction: Direction) {
        let len = self.files.len();
        if len == 0 {
            return;
        }
        self.selected_index = match direction {
            Direction::Left => (self.selected_index + len - 1) % len,
            Direction::Right => (self.selected_index + 1) % len,
        };
    }

    /// Translate a key event into a state change and, for Enter/Esc, a
    /// terminal intent. Release events are ignored; press and repeat are
    /// both handled so held arrows keep rotating.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SurfaceMessage> {
        if self.inert || !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return None;
        }
        match key.code {
            KeyCode::Left => {
                self.navigate(Direction::Left);
                None
            }
            KeyCode::Right => {
                self.navigate(Direction::Right);
                None
            }
            KeyCode::Enter => {
                let snapshot = self.selected()?;
                let intent = SurfaceMessage::OpenFile {
                    file_path: snapshot.path.clone(),
                };
                self.inert = true;
                Some(intent)
            }
            KeyCode::Esc => {
                self.inert = true;
                Some(SurfaceMessage::Close)
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.inert = true;
                Some(SurfaceMessage::Close)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn snapshots(n: usize) -> Vec<FileSnapshot> {
        (0..n)
            .map(|i| FileSnapshot {
                path: PathBuf::from(format!("/file-{i}")),
                name: format!("file-{i}"),
                content: String::new(),
                language: None,
                is_recent: true,
            })
            .collect()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn left_from_zero_wraps_to_last() {
        let mut state = CarouselState::new();
        state.set_files(snapshots(3));
        assert_eq!(state.handle_key(press(KeyCode::Left)), None);
        assert_eq!(state.selected_index(), 2);
    }

    #[test]
    fn right_from_last_wraps_to_zero() {
        let mut state = CarouselState::new();
        state.set_files(snapshots(3));
        state.navigate(Direction::Right);
        state.navigate(Direction::Right);
        assert_eq!(state.selected_index(), 2);
        state.navigate(Direction::Right);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn n_steps_in_one_direction_return_to_start() {
        for n in 1..=5 {
            let mut state = CarouselState::new();
            state.set_files(snapshots(n));
            for _ in 0..n {
                state.navigate(Direction::Right);
            }
            assert_eq!(state.selected_index(), 0);
            for _ in 0..n {
                state.navigate(Direction::Left);
            }
            assert_eq!(state.selected_index(), 0);
        }
    }

    #[test]
    fn enter_emits_open_file_for_selected_card() {
        let mut state = CarouselState::new();
        state.set_files(snapshots(3));
        state.navigate(Direction::Right);
        let intent = state.handle_key(press(KeyCode::Enter));
        assert_eq!(
            intent,
            Some(SurfaceMessage::OpenFile {
                file_path: PathBuf::from("/file-1"),
            })
        );
    }

    #[test]
    fn escape_emits_close() {
        let mut state = CarouselState::new();
        state.set_files(snapshots(2));
        assert_eq!(
            state.handle_key(press(KeyCode::Esc)),
            Some(SurfaceMessage::Close)
        );
    }

    #[test]
    fn ctrl_c_is_an_alias_for_close() {
        let mut state = CarouselState::new();
        state.set_files(snapshots(2));
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(state.handle_key(key), Some(SurfaceMessage::Close));
    }

    #[test]
    fn surface_is_inert_after_terminal_intent() {
        let mut state = CarouselState::new();
        state.set_files(snapshots(3));
        assert!(state.handle_key(press(KeyCode::Esc)).is_some());
        assert_eq!(state.handle_key(press(KeyCode::Enter)), None);
        assert_eq!(state.handle_key(press(KeyCode::Right)), None);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn empty_carousel_ignores_navigation_and_activation() {
        let mut state = CarouselState::new();
        state.set_files(Vec::new());
        assert_eq!(state.handle_key(press(KeyCode::Left)), None);
        assert_eq!(state.handle_key(press(KeyCode::Right)), None);
        assert_eq!(state.handle_key(press(KeyCode::Enter)), None);
        assert_eq!(state.selected_index(), 0);
        // Escape still closes an empty panel.
        assert_eq!(
            state.handle_key(press(KeyCode::Esc)),
            Some(SurfaceMessage::Close)
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = CarouselState::new();
        state.set_files(snapshots(2));
        let release = KeyEvent::new_with_kind(
            KeyCode::Right,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(state.handle_key(release), None);
        assert_eq!(state.selected_index(), 0);
    }
}
