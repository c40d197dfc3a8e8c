use std::sync::atomic::{AtomicBool, Ordering};

/// Pointer event kinds the document understands.
///
/// A physical mouse interaction arrives as `MouseDown` on press and
/// `Click` on release; hosts with touch input deliver `TouchEnd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseDown,
    Click,
    TouchEnd,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A pointer interaction, targeted at whatever element sits at (x, y).
///
/// `target` is the deepest element at the event position. Hosts that
/// dispatch through a [`crate::Document`] get it filled in by hit testing;
/// synthetic events may preset it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: EventKind,
    pub x: u16,
    pub y: u16,
    /// Pressed button; `None` for touch interactions.
    pub button: Option<MouseButton>,
    pub target: Option<String>,
}

impl PointerEvent {
    pub fn mouse_down(x: u16, y: u16, button: MouseButton) -> Self {
        Self {
            kind: EventKind::MouseDown,
            x,
            y,
            button: Some(button),
            target: None,
        }
    }

    pub fn click(x: u16, y: u16, button: MouseButton) -> Self {
        Self {
            kind: EventKind::Click,
            x,
            y,
            button: Some(button),
            target: None,
        }
    }

    pub fn touch_end(x: u16, y: u16) -> Self {
        Self {
            kind: EventKind::TouchEnd,
            x,
            y,
            button: None,
            target: None,
        }
    }

    /// Preset the target instead of resolving it by hit test.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// Flags a handler may raise while an event is in flight.
///
/// `stop_propagation` keeps the event from reaching document-level
/// listeners; `prevent_default` tells the host to skip whatever default
/// action it would take for the interaction.
#[derive(Debug, Default)]
pub struct EventFlow {
    default_prevented: AtomicBool,
    propagation_stopped: AtomicBool,
}

impl EventFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::SeqCst);
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.store(true, Ordering::SeqCst);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::SeqCst)
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.load(Ordering::SeqCst)
    }
}

/// Simplified key representation for host-level input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

/// A terminal-sourced event: pointer interactions plus the host-level
/// input a demo loop needs (keys to quit, resizes to relayout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermEvent {
    Pointer(PointerEvent),
    Key(Key),
    Resize { width: u16, height: u16 },
}

impl TermEvent {
    /// Convert a raw crossterm event; `None` for events without a
    /// counterpart here (moves, drags, focus changes).
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, MouseEventKind};

        match event {
            CtEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => Some(TermEvent::Pointer(
                    PointerEvent::mouse_down(mouse.column, mouse.row, button.into()),
                )),
                MouseEventKind::Up(button) => Some(TermEvent::Pointer(PointerEvent::click(
                    mouse.column,
                    mouse.row,
                    button.into(),
                ))),
                _ => None,
            },
            CtEvent::Key(key) => Key::from_crossterm(key.code).map(TermEvent::Key),
            CtEvent::Resize(width, height) => Some(TermEvent::Resize { width, height }),
            _ => None,
        }
    }
}

impl Key {
    fn from_crossterm(code: crossterm::event::KeyCode) -> Option<Self> {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Some(Key::Char(c)),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Esc => Some(Key::Escape),
            KeyCode::Tab => Some(Key::Tab),
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            _ => None,
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
