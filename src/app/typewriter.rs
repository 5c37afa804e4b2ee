pub const START_DELAY_MS: f64 = 1_500.0;
pub const KEYSTROKE_MS: f64 = 70.0;
const CURSOR_BLINK_MS: f64 = 530.0;

/// Types `text` out one character per keystroke, restarting each time it comes back into view.
#[derive(Debug)]
pub struct Typewriter {
    text: &'static str,
    in_view: bool,
    started_ms: Option<f64>,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            in_view: false,
            started_ms: None,
        }
    }

    pub fn update(&mut self, now_ms: f64, in_view: bool) {
        if in_view && !self.in_view {
            self.started_ms = Some(now_ms);
        }
        self.in_view = in_view;
    }

    pub fn typed(&self, now_ms: f64) -> &'static str {
        let Some(started_ms) = self.started_ms else {
            return "";
        };
        let elapsed = now_ms - started_ms - START_DELAY_MS;
        if elapsed < 0.0 {
            return "";
        }

        let count = (elapsed / KEYSTROKE_MS).floor() as usize + 1;
        match self.text.char_indices().nth(count) {
            Some((end, _)) => &self.text[..end],
            None => self.text,
        }
    }

    pub fn is_typing(&self, now_ms: f64) -> bool {
        self.started_ms.is_some() && self.typed(now_ms).len() < self.text.len()
    }

    pub fn cursor_visible(&self, now_ms: f64) -> bool {
        (now_ms / CURSOR_BLINK_MS).floor() as i64 % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_then_types_one_character_per_keystroke() {
        let mut greeting = Typewriter::new("Hello there");
        assert_eq!(greeting.typed(5_000.0), "");

        greeting.update(100.0, true);
        assert_eq!(greeting.typed(100.0 + START_DELAY_MS - 1.0), "");
        assert_eq!(greeting.typed(100.0 + START_DELAY_MS), "H");
        assert_eq!(greeting.typed(100.0 + START_DELAY_MS + KEYSTROKE_MS * 4.0), "Hello");
        assert!(greeting.is_typing(100.0 + START_DELAY_MS));

        let done = 100.0 + START_DELAY_MS + KEYSTROKE_MS * 20.0;
        assert_eq!(greeting.typed(done), "Hello there");
        assert!(!greeting.is_typing(done));
    }

    #[test]
    fn restarts_on_reentry_only() {
        let mut greeting = Typewriter::new("Hi");
        greeting.update(0.0, true);
        greeting.update(1_000.0, true);
        assert_eq!(greeting.typed(START_DELAY_MS + KEYSTROKE_MS), "Hi");

        greeting.update(3_000.0, false);
        greeting.update(4_000.0, true);
        assert_eq!(greeting.typed(4_000.0 + START_DELAY_MS / 2.0), "");
    }

    #[test]
    fn multibyte_text_is_cut_on_character_boundaries() {
        let mut greeting = Typewriter::new("héllo");
        greeting.update(0.0, true);
        assert_eq!(greeting.typed(START_DELAY_MS + KEYSTROKE_MS), "hé");
    }
}
