use std::collections::VecDeque;

/// Submitted lines, most recent first, with a recall cursor.
///
/// The cursor is `None` while the user is typing a fresh line, otherwise an
/// index into the entries. Moving it is clamped at both ends.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: VecDeque<String>,
    cursor: Option<usize>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted line and stops browsing
    pub fn push(&mut self, line: &str) {
        self.entries.push_front(line.to_string());
        self.cursor = None;
    }

    /// Steps back to an older line; stays on the oldest once reached
    pub fn older(&mut self) -> &str {
        if self.entries.is_empty() {
            return "";
        }
        let last = self.entries.len() - 1;
        let next = self.cursor.map_or(0, |c| (c + 1).min(last));
        self.cursor = Some(next);
        self.current()
    }

    /// Steps toward newer lines, ending on the empty input line
    pub fn newer(&mut self) -> &str {
        self.cursor = match self.cursor {
            None | Some(0) => None,
            Some(c) => Some(c - 1),
        };
        self.current()
    }

    /// The recalled line, empty when not browsing
    #[must_use]
    pub fn current(&self) -> &str {
        self.cursor
            .and_then(|c| self.entries.get(c))
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
