//! Key handling for the terminal driver.
//!
//! Turns raw key events into the handful of commands the driver loop knows.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Driver-level commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Jump (Space, Up, Enter, k).
    Jump,
    /// Start a fresh run (r).
    Restart,
    /// Leave the game (q, Esc, Ctrl-C).
    Quit,
    /// Anything else.
    Other,
}

pub fn map_key(key: KeyEvent) -> GameCommand {
    // Release/repeat events are reported on some platforms
    if key.kind != KeyEventKind::Press {
        return GameCommand::Other;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameCommand::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('k') => {
            GameCommand::Jump
        }
        KeyCode::Char('r') | KeyCode::Char('R') => GameCommand::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameCommand::Quit,
        _ => GameCommand::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_jump_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), GameCommand::Jump);
        assert_eq!(map_key(press(KeyCode::Up)), GameCommand::Jump);
        assert_eq!(map_key(press(KeyCode::Enter)), GameCommand::Jump);
        assert_eq!(map_key(press(KeyCode::Char('k'))), GameCommand::Jump);
    }

    #[test]
    fn test_restart_and_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('r'))), GameCommand::Restart);
        assert_eq!(map_key(press(KeyCode::Char('q'))), GameCommand::Quit);
        assert_eq!(map_key(press(KeyCode::Esc)), GameCommand::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            GameCommand::Quit
        );
    }

    #[test]
    fn test_plain_c_is_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), GameCommand::Other);
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), GameCommand::Other);
    }
}
