//! Key strings such as `"ctrl+c"`, `"shift+tab"` or `"j"` and their
//! crossterm equivalents.

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "j", "down", "ctrl+n", "shift+tab")
    pub key: String,

    /// The action this key triggers
    pub action: Action,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
        }
    }

    /// Check if this binding matches the given key event.
    ///
    /// Shift on a printable character is ignored because terminals report
    /// `?` as `Shift+?`.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Ok(parsed) = parse_key(&self.key) else {
            return false;
        };
        if parsed.code != code {
            return false;
        }
        if matches!(code, KeyCode::Char(_)) {
            parsed.modifiers == modifiers.difference(KeyModifiers::SHIFT)
        } else {
            parsed.modifiers == modifiers
        }
    }

    /// Display string, e.g. "Ctrl+C" or "↑"
    pub fn display(&self) -> String {
        match parse_key(&self.key) {
            Ok(parsed) => display_key(parsed),
            Err(_) => self.key.clone(),
        }
    }
}

/// Parse a key string like "ctrl+shift+n".
pub fn parse_key(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    if key == "+" {
        return Ok(ParsedKey {
            code: KeyCode::Char('+'),
            modifiers: KeyModifiers::NONE,
        });
    }
    let (mods, last) = match key.rsplit_once('+') {
        Some((mods, last)) => (mods, last),
        None => ("", key.as_str()),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in mods.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        modifiers |= match part {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" => KeyModifiers::SUPER,
            other => return Err(format!("Unknown modifier: {}", other)),
        };
    }

    let mut code = parse_code(last.trim())?;
    // crossterm reports shift+tab as BackTab with SHIFT held
    if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
        code = KeyCode::BackTab;
    }
    Ok(ParsedKey { code, modifiers })
}

fn parse_code(name: &str) -> Result<KeyCode, String> {
    let code = match name {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..]
                .parse()
                .map_err(|_| format!("Unknown key: {}", name))?;
            if !(1..=12).contains(&n) {
                return Err(format!("Unknown key: {}", name));
            }
            KeyCode::F(n)
        }
        single => {
            let mut chars = single.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("Unknown key: {}", name)),
            }
        }
    };
    Ok(code)
}

fn display_key(parsed: ParsedKey) -> String {
    let mut parts: Vec<String> = Vec::new();
    if parsed.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if parsed.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if parsed.modifiers.contains(KeyModifiers::SUPER) {
        parts.push("Super".to_string());
    }
    let shift = parsed.modifiers.contains(KeyModifiers::SHIFT);
    let key = match parsed.code {
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Char(c) if parts.is_empty() && !shift => c.to_string(),
        KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
        other => format!("{:?}", other),
    };
    if shift && parsed.code != KeyCode::BackTab {
        parts.push("Shift".to_string());
    }
    parts.push(key);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_and_modified_keys() {
        assert_eq!(parse_key("j").unwrap().code, KeyCode::Char('j'));
        let ctrl_c = parse_key("Ctrl+C").unwrap();
        assert_eq!(ctrl_c.code, KeyCode::Char('c'));
        assert_eq!(ctrl_c.modifiers, KeyModifiers::CONTROL);
        assert_eq!(parse_key("shift+tab").unwrap().code, KeyCode::BackTab);
        assert_eq!(parse_key("f5").unwrap().code, KeyCode::F(5));
        assert_eq!(parse_key("+").unwrap().code, KeyCode::Char('+'));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_key("hyper+x").is_err());
        assert!(parse_key("f13").is_err());
        assert!(parse_key("banana").is_err());
    }

    #[test]
    fn test_question_mark_matches_with_shift() {
        let binding = KeyBinding::new("?", Action::Help);
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Char('?'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_display() {
        assert_eq!(KeyBinding::new("ctrl+c", Action::Quit).display(), "Ctrl+C");
        assert_eq!(KeyBinding::new("up", Action::MoveUp).display(), "↑");
        assert_eq!(KeyBinding::new("q", Action::Quit).display(), "q");
        assert_eq!(KeyBinding::new("shift+tab", Action::PrevTab).display(), "Shift+Tab");
    }
}
