// Input handling for Recap
// Keyboard shortcuts for slide and history navigation

use crate::app::Recap;
use crate::deck::Command;
use eframe::egui::{self, Key, Modifiers};

/// Map one key press to a deck command
pub fn command_for_key(key: Key, modifiers: Modifiers) -> Option<Command> {
    match (key, modifiers) {
        // Alt+Arrow for history (must come before the plain arrows)
        (Key::ArrowLeft, m) if m.alt => Some(Command::Back),
        (Key::ArrowRight, m) if m.alt => Some(Command::Forward),
        (Key::ArrowRight, m) if m.is_none() => Some(Command::Advance),
        (Key::ArrowLeft, m) if m.is_none() => Some(Command::Retreat),
        _ => None,
    }
}

impl Recap {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        // The address bar owns the arrows while it is being edited
        if ctx.wants_keyboard_input() {
            return;
        }

        let commands: Vec<Command> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => command_for_key(*key, *modifiers),
                    _ => None,
                })
                .collect()
        });

        for command in commands {
            if !self.deck.apply(command) {
                log::debug!("{:?} ignored at {}", command, self.deck.location());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_arrows_step_through_slides() {
        assert_eq!(command_for_key(Key::ArrowRight, Modifiers::NONE), Some(Command::Advance));
        assert_eq!(command_for_key(Key::ArrowLeft, Modifiers::NONE), Some(Command::Retreat));
    }

    #[test]
    fn test_alt_arrows_move_through_history() {
        assert_eq!(command_for_key(Key::ArrowLeft, Modifiers::ALT), Some(Command::Back));
        assert_eq!(command_for_key(Key::ArrowRight, Modifiers::ALT), Some(Command::Forward));
    }

    #[test]
    fn test_other_keys_and_modifiers_are_ignored() {
        assert_eq!(command_for_key(Key::ArrowUp, Modifiers::NONE), None);
        assert_eq!(command_for_key(Key::Space, Modifiers::NONE), None);
        assert_eq!(command_for_key(Key::ArrowRight, Modifiers::SHIFT), None);
        assert_eq!(command_for_key(Key::ArrowLeft, Modifiers::COMMAND), None);
    }
}
