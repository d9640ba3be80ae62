/// A rhythm block re-expressed at one common resolution.
///
/// `slots` holds one phrase per time position; empty strings are rests.
/// Every `resolution` consecutive slots make up one beat-unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub resolution: usize,
    pub slots: Vec<String>,
}

impl Timeline {
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            slots: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Places `phrase` at the next position, followed by `rests` empty slots.
    pub fn push_phrase(&mut self, phrase: String, rests: usize) {
        self.slots.push(phrase);
        self.slots
            .extend(std::iter::repeat_with(String::new).take(rests));
    }

    /// Beat windows of `resolution` slots; the last one may be shorter.
    pub fn windows(&self) -> std::slice::Chunks<'_, String> {
        // chunks() panics on a zero size
        self.slots.chunks(self.resolution.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows() {
        let mut timeline = Timeline::new(4);
        for phrase in ["1", "2", "3", "4", "5", "6"] {
            timeline.push_phrase(phrase.to_string(), 0);
        }
        let windows: Vec<_> = timeline.windows().collect();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].len(), 4);
        assert_eq!(windows[1], ["5".to_string(), "6".to_string()]);
    }

    #[test]
    fn test_push_phrase() {
        let mut timeline = Timeline::new(3);
        timeline.push_phrase("1".to_string(), 2);
        assert_eq!(timeline.slots, vec!["1", "", ""]);
        assert!(!timeline.is_empty());
    }
}
