use crossterm::event::KeyEvent;

/// Events processed by the [`crate::app::App`] event loop.
#[derive(Debug)]
pub(crate) enum AppEvent {
    /// Key input forwarded from the terminal input thread.
    KeyEvent(KeyEvent),

    /// Request a redraw of the current view.
    RequestRedraw,

    /// Exit the application gracefully.
    ExitRequest,
}
