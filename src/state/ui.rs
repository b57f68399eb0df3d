// UI state - presentation settings and transient status messages
use crate::style::Theme;
use std::time::Instant;

pub struct UIState {
    pub theme: Theme,
    pub show_key_hint: bool,
    pub address: String,
    pub address_dirty: bool,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
}

impl UIState {
    pub fn new(theme: Theme, show_key_hint: bool) -> Self {
        Self {
            theme,
            show_key_hint,
            address: String::new(),
            address_dirty: false,
            error_message: None,
            info_message: None,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    /// Mirror the active location into the address bar unless the user is editing it
    pub fn sync_address(&mut self, location: &str) {
        if !self.address_dirty && self.address != location {
            self.address = location.to_string();
        }
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_follows_location_until_edited() {
        let mut ui = UIState::new(Theme::Dark, true);
        ui.sync_address("/work");
        assert_eq!(ui.address, "/work");

        ui.address = "/proj".to_string();
        ui.address_dirty = true;
        ui.sync_address("/london");
        assert_eq!(ui.address, "/proj");

        ui.address_dirty = false;
        ui.sync_address("/london");
        assert_eq!(ui.address, "/london");
    }

    #[test]
    fn test_messages_expire() {
        let mut ui = UIState::new(Theme::Dark, true);
        ui.set_error("boom".to_string());
        ui.clear_expired_messages(5);
        assert!(ui.error_message.is_some());
        ui.clear_expired_messages(0);
        assert!(ui.error_message.is_none());
    }
}
