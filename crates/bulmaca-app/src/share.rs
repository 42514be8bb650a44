use crate::localization::{Strings, fill};

/// Where the daily puzzle is published.
pub const PLAY_URL: &str = "https://bulmaca.dutl.uk";

/// Builds the text shared after solving, e.g.
/// `"I solved ... in 01:23! 🎉\n\nPlay at: https://bulmaca.dutl.uk"`.
#[must_use]
pub fn share_text(strings: &Strings, time: &str) -> String {
    let headline = fill(&strings.share_text, "time", time);
    format!("{headline} 🎉\n\n{}: {PLAY_URL}", strings.play_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_share_text() {
        let text = share_text(&Strings::default(), "02:05");
        assert_eq!(
            text,
            "I solved today's Dutluk Mini Crossword in 02:05! 🎉\n\nPlay at: https://bulmaca.dutl.uk"
        );
    }

    #[test]
    fn turkish_share_text_uses_table() {
        let strings = Strings::for_language("tr");
        let text = share_text(&strings, "00:42");
        assert!(text.contains("00:42"));
        assert!(text.ends_with(&format!("{}: {PLAY_URL}", strings.play_at)));
    }
}
