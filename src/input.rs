use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::difficulty::Difficulty;
use crate::maze::Dir;
use crate::session::Command;

/// Keys for the store entries, in catalog order.
pub const STORE_KEYS: [char; 3] = ['z', 'x', 'c'];

pub fn command_for(key: KeyEvent) -> Option<Command> {
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {}
        _ => return None,
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    let command = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Command::Move(Dir::Up),
        KeyCode::Down | KeyCode::Char('j') => Command::Move(Dir::Down),
        KeyCode::Left | KeyCode::Char('h') => Command::Move(Dir::Left),
        KeyCode::Right | KeyCode::Char('l') => Command::Move(Dir::Right),
        KeyCode::Char(c @ '1'..='4') => {
            Command::SetDifficulty(Difficulty::ALL[(c as u8 - b'1') as usize])
        }
        KeyCode::Char('n') => Command::NewGame,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char(c) => Command::StoreAction(STORE_KEYS.iter().position(|&k| k == c)?),
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn movement_keys() {
        assert_eq!(command_for(press(KeyCode::Left)), Some(Command::Move(Dir::Left)));
        assert_eq!(command_for(press(KeyCode::Char('j'))), Some(Command::Move(Dir::Down)));
    }

    #[test]
    fn difficulty_keys() {
        assert_eq!(
            command_for(press(KeyCode::Char('1'))),
            Some(Command::SetDifficulty(Difficulty::Easy))
        );
        assert_eq!(
            command_for(press(KeyCode::Char('4'))),
            Some(Command::SetDifficulty(Difficulty::Hardcore))
        );
        assert_eq!(command_for(press(KeyCode::Char('5'))), None);
    }

    #[test]
    fn store_and_session_keys() {
        assert_eq!(command_for(press(KeyCode::Char('x'))), Some(Command::StoreAction(1)));
        assert_eq!(command_for(press(KeyCode::Char('n'))), Some(Command::NewGame));
        assert_eq!(command_for(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command_for(press(KeyCode::Tab)), None);
    }

    #[test]
    fn ctrl_c_quits_instead_of_shopping() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(ctrl_c), Some(Command::Quit));
        assert_eq!(command_for(press(KeyCode::Char('c'))), Some(Command::StoreAction(2)));
    }

    #[test]
    fn chorded_keys_are_ignored() {
        let alt_z = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::ALT);
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(command_for(alt_z), None);
        assert_eq!(command_for(ctrl_n), None);
        let shift_up = KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT);
        assert_eq!(command_for(shift_up), Some(Command::Move(Dir::Up)));
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = press(KeyCode::Up);
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for(key), None);
    }
}
