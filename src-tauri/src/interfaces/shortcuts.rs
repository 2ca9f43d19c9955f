use std::collections::HashMap;
use std::str::FromStr;

use tauri::AppHandle;
use tauri_plugin_global_shortcut::{Code, GlobalShortcutExt, Modifiers, Shortcut, ShortcutState};
use tracing::debug;

use crate::application::use_cases::surface::{AcceleratorCheck, HotkeyRegistrar, SurfaceHandle};
use crate::domain::error::{AppError, Result};
use crate::domain::surface::{SurfaceEvent, ToggleSource};

#[cfg(target_os = "macos")]
const PRIMARY_MODIFIER: Modifiers = Modifiers::META;
#[cfg(not(target_os = "macos"))]
const PRIMARY_MODIFIER: Modifiers = Modifiers::CONTROL;

/// Parses an accelerator such as `CommandOrControl+,` or `Alt+Shift+T`.
pub(crate) fn parse_shortcut(input: &str) -> Result<Shortcut> {
    let parts: Vec<&str> = input
        .split('+')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();

    // A trailing "+" names the plus key itself.
    let (modifier_parts, key_part) = match parts.split_last() {
        Some((key, rest)) if !input.trim_end().ends_with("++") => (rest, *key),
        Some(_) => (&parts[..], "+"),
        None => return Err(AppError::ShortcutError("Shortcut is empty.".to_string())),
    };

    let mut modifiers = Modifiers::empty();
    for modifier in modifier_parts {
        match modifier.to_ascii_lowercase().as_str() {
            "commandorcontrol" | "cmdorctrl" | "commandorctrl" | "cmdorcontrol" => {
                modifiers |= PRIMARY_MODIFIER
            }
            "ctrl" | "control" => modifiers |= Modifiers::CONTROL,
            "alt" | "option" => modifiers |= Modifiers::ALT,
            "shift" => modifiers |= Modifiers::SHIFT,
            "cmd" | "command" | "meta" | "win" | "super" => modifiers |= Modifiers::META,
            other => {
                return Err(AppError::ShortcutError(format!("Unknown modifier: {other}")))
            }
        }
    }

    let code = parse_code(key_part)?;
    let modifiers = if modifiers.is_empty() { None } else { Some(modifiers) };
    Ok(Shortcut::new(modifiers, code))
}

fn parse_code(key: &str) -> Result<Code> {
    let key = key.trim();
    let unsupported = || AppError::ShortcutError(format!("Unsupported key: {key}"));

    let mut chars = key.chars();
    let normalized = match (chars.next(), chars.next()) {
        (None, _) => return Err(AppError::ShortcutError("Shortcut key is empty.".to_string())),
        (Some(ch), None) if ch.is_ascii_alphabetic() => format!("Key{}", ch.to_ascii_uppercase()),
        (Some(ch), None) if ch.is_ascii_digit() => format!("Digit{ch}"),
        (Some(ch), None) => match ch {
            '-' => "Minus",
            '=' | '+' => "Equal",
            ',' => "Comma",
            '.' => "Period",
            '/' => "Slash",
            ';' => "Semicolon",
            '\'' => "Quote",
            '[' => "BracketLeft",
            ']' => "BracketRight",
            '\\' => "Backslash",
            '`' => "Backquote",
            _ => return Err(unsupported()),
        }
        .to_string(),
        _ => match key.to_ascii_lowercase().as_str() {
            "esc" | "escape" => "Escape".to_string(),
            "space" => "Space".to_string(),
            "enter" | "return" => "Enter".to_string(),
            "tab" => "Tab".to_string(),
            "backspace" => "Backspace".to_string(),
            "delete" => "Delete".to_string(),
            "plus" => "Equal".to_string(),
            "up" => "ArrowUp".to_string(),
            "down" => "ArrowDown".to_string(),
            "left" => "ArrowLeft".to_string(),
            "right" => "ArrowRight".to_string(),
            _ => key.to_string(),
        },
    };

    Code::from_str(&normalized).map_err(|_| unsupported())
}

/// Accepts exactly the accelerators [`parse_shortcut`] understands.
pub struct ShortcutSyntax;

impl AcceleratorCheck for ShortcutSyntax {
    fn check(&self, accelerator: &str) -> Result<()> {
        parse_shortcut(accelerator).map(|_| ())
    }
}

/// Registers accelerators with the OS; every press queues a hotkey toggle.
pub struct TauriHotkeys {
    app: AppHandle,
    surface: SurfaceHandle,
    registered: HashMap<String, Shortcut>,
}

impl TauriHotkeys {
    pub fn new(app: AppHandle, surface: SurfaceHandle) -> Self {
        Self {
            app,
            surface,
            registered: HashMap::new(),
        }
    }
}

impl HotkeyRegistrar for TauriHotkeys {
    fn register(&mut self, accelerator: &str) -> Result<()> {
        let shortcut = parse_shortcut(accelerator)?;
        let surface = self.surface.clone();
        self.app
            .global_shortcut()
            .on_shortcut(shortcut, move |_app, _shortcut, event| {
                if event.state() == ShortcutState::Pressed {
                    surface.send(SurfaceEvent::Toggle(ToggleSource::Hotkey));
                }
            })
            .map_err(|e| {
                AppError::ShortcutError(format!("Failed to register {accelerator}: {e}"))
            })?;

        debug!(shortcut = %accelerator, "Registered with the OS");
        self.registered.insert(accelerator.to_string(), shortcut);
        Ok(())
    }

    fn unregister(&mut self, accelerator: &str) -> Result<()> {
        let Some(shortcut) = self.registered.remove(accelerator) else {
            return Ok(());
        };
        self.app
            .global_shortcut()
            .unregister(shortcut)
            .map_err(|e| AppError::ShortcutError(format!("Failed to release {accelerator}: {e}")))
    }

    fn unregister_all(&mut self) -> Result<()> {
        self.registered.clear();
        self.app
            .global_shortcut()
            .unregister_all()
            .map_err(|e| AppError::ShortcutError(format!("Failed to release hotkeys: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_default_accelerator() {
        let shortcut = parse_shortcut("CommandOrControl+,").unwrap();
        assert_eq!(shortcut, Shortcut::new(Some(PRIMARY_MODIFIER), Code::Comma));
    }

    #[test]
    fn test_parses_modifiers_case_insensitively() {
        let shortcut = parse_shortcut("ctrl+SHIFT+k").unwrap();
        assert_eq!(
            shortcut,
            Shortcut::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::KeyK)
        );
    }

    #[test]
    fn test_parses_named_and_function_keys() {
        assert_eq!(
            parse_shortcut("Alt+Space").unwrap(),
            Shortcut::new(Some(Modifiers::ALT), Code::Space)
        );
        assert_eq!(parse_shortcut("F9").unwrap(), Shortcut::new(None, Code::F9));
        assert_eq!(
            parse_shortcut("CmdOrCtrl+Shift+1").unwrap(),
            Shortcut::new(Some(PRIMARY_MODIFIER | Modifiers::SHIFT), Code::Digit1)
        );
    }

    #[test]
    fn test_trailing_plus_is_the_plus_key() {
        assert_eq!(
            parse_shortcut("Ctrl++").unwrap(),
            Shortcut::new(Some(Modifiers::CONTROL), Code::Equal)
        );
    }

    #[test]
    fn test_syntax_check_matches_parser() {
        assert!(ShortcutSyntax.check("CommandOrControl+,").is_ok());
        assert!(ShortcutSyntax.check("").is_err());
        assert!(ShortcutSyntax.check("Hyper+NotAKey").is_err());
    }

    #[test]
    fn test_rejects_malformed_accelerators() {
        assert!(matches!(parse_shortcut(""), Err(AppError::ShortcutError(_))));
        assert!(matches!(
            parse_shortcut("Hyper+K"),
            Err(AppError::ShortcutError(_))
        ));
        assert!(matches!(
            parse_shortcut("Ctrl+NotAKey"),
            Err(AppError::ShortcutError(_))
        ));
    }
}
