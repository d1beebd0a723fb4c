//! Keyboard mapping for terminal play.
//!
//! Terminals usually do not emit key release events, so the held-button
//! state (Snake's acceleration) is tracked with a timeout: a key press
//! refreshes the hold, and silence longer than the timeout releases it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::UserAction;

/// Map a key event to a user action. Unbound keys yield `None`.
pub fn map_key_event(event: &KeyEvent) -> Option<UserAction> {
    match event.code {
        KeyCode::Enter => Some(UserAction::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(UserAction::Pause),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(UserAction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(UserAction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(UserAction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(UserAction::Right),
        KeyCode::Char(' ') => Some(UserAction::Action),
        _ => None,
    }
}

/// Whether the event asks to quit the program (mapped to Terminate).
pub fn should_quit(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// Without release events a single tap would read as held forever; repeats
// from a genuinely held key arrive well inside this window.
const DEFAULT_HOLD_TIMEOUT_MS: u32 = 150;

/// Tracks whether the Action button is currently held.
#[derive(Debug, Clone)]
pub struct HoldTracker {
    held: bool,
    last_press: std::time::Instant,
    timeout_ms: u32,
}

impl HoldTracker {
    pub fn new() -> Self {
        Self::with_timeout_ms(DEFAULT_HOLD_TIMEOUT_MS)
    }

    pub fn with_timeout_ms(timeout_ms: u32) -> Self {
        Self {
            held: false,
            last_press: std::time::Instant::now(),
            timeout_ms,
        }
    }

    /// Record an Action press (initial or auto-repeat).
    pub fn press(&mut self) {
        self.held = true;
        self.last_press = std::time::Instant::now();
    }

    /// Current hold state, expiring stale presses.
    pub fn is_held(&mut self) -> bool {
        if self.held && self.last_press.elapsed().as_millis() as u32 > self.timeout_ms {
            self.held = false;
        }
        self.held
    }

    pub fn reset(&mut self) {
        self.held = false;
    }
}

impl Default for HoldTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        assert_eq!(map_key_event(&key(KeyCode::Up)), Some(UserAction::Up));
        assert_eq!(map_key_event(&key(KeyCode::Char('w'))), Some(UserAction::Up));
        assert_eq!(map_key_event(&key(KeyCode::Left)), Some(UserAction::Left));
        assert_eq!(
            map_key_event(&key(KeyCode::Char('d'))),
            Some(UserAction::Right)
        );
        assert_eq!(map_key_event(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn enter_space_and_p_map_to_controls() {
        assert_eq!(map_key_event(&key(KeyCode::Enter)), Some(UserAction::Start));
        assert_eq!(
            map_key_event(&key(KeyCode::Char(' '))),
            Some(UserAction::Action)
        );
        assert_eq!(
            map_key_event(&key(KeyCode::Char('P'))),
            Some(UserAction::Pause)
        );
    }

    #[test]
    fn quit_keys_are_recognized() {
        assert!(should_quit(&key(KeyCode::Char('q'))));
        assert!(should_quit(&key(KeyCode::Esc)));
        assert!(!should_quit(&key(KeyCode::Char('c'))));

        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        assert!(should_quit(&ctrl_c));
    }

    #[test]
    fn hold_expires_after_the_timeout() {
        let mut tracker = HoldTracker::with_timeout_ms(50);
        assert!(!tracker.is_held());

        tracker.press();
        assert!(tracker.is_held());

        // Simulate a stale press by moving it into the past.
        tracker.last_press = std::time::Instant::now() - std::time::Duration::from_millis(51);
        assert!(!tracker.is_held());
    }

    #[test]
    fn reset_releases_immediately() {
        let mut tracker = HoldTracker::with_timeout_ms(10_000);
        tracker.press();
        tracker.reset();
        assert!(!tracker.is_held());
    }
}
