// Location history - the in-window stand-in for a browser's URL and back/forward stack

/// Something that owns the active route and accepts navigation requests
pub trait Router {
    fn location(&self) -> &str;
    fn navigate(&mut self, path: &str);
}

pub struct History {
    entries: Vec<String>,
    index: usize,
    revision: u64,
}

impl History {
    pub fn new(start: &str) -> Self {
        Self {
            entries: vec![start.to_string()],
            index: 0,
            revision: 0,
        }
    }

    /// Bumped on every location change, so observers can tell when to reconcile
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swap the current entry without growing the history (used for redirects)
    pub fn replace(&mut self, path: &str) {
        if self.entries[self.index] != path {
            self.entries[self.index] = path.to_string();
            self.revision += 1;
        }
    }

    pub fn go_back(&mut self) -> Option<&str> {
        if self.index > 0 {
            self.index -= 1;
            self.revision += 1;
            Some(&self.entries[self.index])
        } else {
            None
        }
    }

    pub fn go_forward(&mut self) -> Option<&str> {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            self.revision += 1;
            Some(&self.entries[self.index])
        } else {
            None
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }
}

impl Router for History {
    fn location(&self) -> &str {
        &self.entries[self.index]
    }

    fn navigate(&mut self, path: &str) {
        if self.location() == path {
            return;
        }
        // Remove any forward history when navigating to a new path
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index += 1;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_and_back_forward() {
        let mut history = History::new("/");
        history.navigate("/background");
        history.navigate("/work");
        assert_eq!(history.location(), "/work");

        assert_eq!(history.go_back(), Some("/background"));
        assert_eq!(history.go_back(), Some("/"));
        assert_eq!(history.go_back(), None);
        assert_eq!(history.go_forward(), Some("/background"));
        assert_eq!(history.location(), "/background");
    }

    #[test]
    fn test_navigate_truncates_forward_entries() {
        let mut history = History::new("/");
        history.navigate("/background");
        history.navigate("/work");
        history.go_back();
        history.navigate("/london");
        assert!(!history.can_go_forward());
        assert_eq!(history.go_back(), Some("/background"));
    }

    #[test]
    fn test_same_location_is_not_a_change() {
        let mut history = History::new("/");
        history.navigate("/");
        assert_eq!(history.revision(), 0);
        assert!(!history.can_go_back());

        history.navigate("/work");
        assert_eq!(history.revision(), 1);
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = History::new("/nowhere");
        history.replace("/");
        assert_eq!(history.location(), "/");
        assert_eq!(history.revision(), 1);
        assert!(!history.can_go_back());
    }
}
