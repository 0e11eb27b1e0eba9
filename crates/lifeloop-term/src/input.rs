//! Keyboard input.
//!
//! The run loop only ever asks two questions: "did a key arrive within
//! this delay?" and "wait for the next key". [`KeySource`] captures
//! exactly that so the loop can be driven from a script in tests.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the run loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// ESC, `q`, or Ctrl-C.
    Quit,
    /// Anything else.
    Other,
}

impl Key {
    /// Classify a crossterm key event.
    pub fn from_event(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Self::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            _ => Self::Other,
        }
    }
}

/// A source of key presses.
pub trait KeySource {
    /// Wait up to `timeout` for a key press.
    ///
    /// Returns `None` when the timeout elapses first. A zero timeout
    /// only drains what is already queued.
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>>;

    /// Block until a key is pressed.
    fn wait_key(&mut self) -> io::Result<Key>;
}

/// Reads key presses from the terminal via crossterm.
///
/// Only [`KeyEventKind::Press`] events count; releases and repeats
/// reported by some terminals are skipped.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(press(event::read()?))
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(key) = press(event::read()?) {
                return Ok(key);
            }
        }
    }
}

fn press(event: Event) -> Option<Key> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Key::from_event(key)),
        _ => None,
    }
}

/// A pre-recorded key sequence.
///
/// `poll_key` yields the next scripted entry (`None` entries stand for
/// a timeout). Once the script runs out, polls time out and
/// `wait_key` returns [`Key::Quit`] so a run always terminates.
#[derive(Clone, Debug, Default)]
pub struct ScriptedKeys {
    script: VecDeque<Option<Key>>,
}

impl ScriptedKeys {
    /// A script of poll results, consumed front to back.
    pub fn new(script: impl IntoIterator<Item = Option<Key>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Entries not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self, _timeout: Duration) -> io::Result<Option<Key>> {
        Ok(self.script.pop_front().flatten())
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        while let Some(entry) = self.script.pop_front() {
            if let Some(key) = entry {
                return Ok(key);
            }
        }
        Ok(Key::Quit)
    }
}
