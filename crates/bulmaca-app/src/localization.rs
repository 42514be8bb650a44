//! User-facing strings.
//!
//! String tables are embedded JSON files, one per language. Keys missing
//! from a table fall back to the built-in English text, and an unknown
//! language uses the English table.

use serde::Deserialize;

const TURKISH: &str = include_str!("../assets/localization/tr.json");
const ENGLISH: &str = include_str!("../assets/localization/en.json");

/// Localized UI strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Strings {
    pub title: String,
    pub by: String,
    pub time: String,
    pub ready_to_play: String,
    pub start_game: String,
    pub success_title: String,
    pub crossword_solved: String,
    pub you_finished_in: String,
    pub success_ok: String,
    pub share: String,
    pub share_text: String,
    pub play_at: String,
    pub share_text_copied: String,
    pub copy_text_to_share: String,
    pub close: String,
    pub error_title: String,
    pub oops_keep_trying: String,
    pub still_mistakes: String,
    pub keep_going: String,
    pub backlog_singular: String,
    pub backlog_plural: String,
    pub load_failed_title: String,
    pub load_failed_message: String,
    pub across_short: String,
    pub down_short: String,
    pub date_format: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            title: "Dutluk Mini Crossword".into(),
            by: "by".into(),
            time: "Time".into(),
            ready_to_play: "Ready to play?".into(),
            start_game: "Start".into(),
            success_title: "Congratulations!".into(),
            crossword_solved: "You solved the crossword!".into(),
            you_finished_in: "You finished in".into(),
            success_ok: "OK".into(),
            share: "Share".into(),
            share_text: "I solved today's Dutluk Mini Crossword in {time}!".into(),
            play_at: "Play at".into(),
            share_text_copied: "Share text copied to clipboard!".into(),
            copy_text_to_share: "Copy this text to share:".into(),
            close: "Close".into(),
            error_title: "Almost there".into(),
            oops_keep_trying: "Oops! Keep trying.".into(),
            still_mistakes: "Don't worry, there are still some mistakes.".into(),
            keep_going: "Keep going".into(),
            backlog_singular: "{count} more puzzle is ready for the coming days".into(),
            backlog_plural: "{count} more puzzles are ready for the coming days".into(),
            load_failed_title: "Could not load the puzzle".into(),
            load_failed_message:
                "Make sure the puzzle file exists and is correctly formatted.".into(),
            across_short: "A".into(),
            down_short: "D".into(),
            date_format: "%B %-d, %Y".into(),
        }
    }
}

impl Strings {
    /// Returns the table for language code `lang`.
    ///
    /// A table that fails to parse is logged and replaced by the built-in
    /// English strings.
    #[must_use]
    pub fn for_language(lang: &str) -> Self {
        let source = match lang.to_ascii_lowercase().as_str() {
            "tr" => TURKISH,
            "en" => ENGLISH,
            other => {
                log::warn!("no string table for `{other}`; using English");
                ENGLISH
            }
        };
        serde_json::from_str(source).unwrap_or_else(|err| {
            log::error!("string table for `{lang}` is invalid: {err}");
            Self::default()
        })
    }

    /// Returns the backlog line for `count` upcoming puzzles, or `None` when
    /// there are none.
    #[must_use]
    pub fn backlog(&self, count: usize) -> Option<String> {
        let template = match count {
            0 => return None,
            1 => &self.backlog_singular,
            _ => &self.backlog_plural,
        };
        Some(fill(template, "count", &count.to_string()))
    }
}

/// Replaces the first `{key}` placeholder in `template` with `value`.
#[must_use]
pub fn fill(template: &str, key: &str, value: &str) -> String {
    template.replacen(&format!("{{{key}}}"), value, 1)
}
