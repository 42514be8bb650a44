//! Command-line configuration.

use std::path::PathBuf;

use bulmaca_game::{CompletionPolicy, DEFAULT_LEGACY_CUTOFF, Locale};
use chrono::{Local, NaiveDate};
use clap::Parser;

/// Daily mini crossword.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory holding `<lang>/<YYYY-MM-DD>.txt` puzzle files.
    #[arg(long, value_name = "DIR", default_value = "puzzles")]
    pub puzzle_dir: PathBuf,

    /// Puzzle language code (`tr` or `en`).
    #[arg(long, value_name = "LANG", default_value = "tr")]
    pub lang: String,

    /// Play this puzzle file instead of looking one up by date.
    #[arg(long, value_name = "FILE")]
    pub puzzle: Option<PathBuf>,

    /// Treat this day as today (`YYYY-MM-DD`).
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Last puzzle date that accepts Latin letters for Turkish ones.
    #[arg(long, value_name = "DATE", default_value_t = DEFAULT_LEGACY_CUTOFF)]
    pub legacy_cutoff: NaiveDate,
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root of the puzzle tree.
    pub puzzle_dir: PathBuf,
    /// Language code used for the puzzle directory and string tables.
    pub lang: String,
    /// Locale derived from `lang`; unknown codes behave like English.
    pub locale: Locale,
    /// Explicit puzzle file, if any.
    pub puzzle_override: Option<PathBuf>,
    /// The day puzzles are looked up from.
    pub today: NaiveDate,
    /// Completion rules for the session.
    pub policy: CompletionPolicy,
}

impl AppConfig {
    /// Resolves command-line arguments, filling in today's local date.
    #[must_use]
    pub fn from_cli(cli: Cli) -> Self {
        let locale = Locale::from_code(&cli.lang).unwrap_or_else(|| {
            log::warn!("unsupported language `{}`; using English rules", cli.lang);
            Locale::English
        });
        Self {
            puzzle_dir: cli.puzzle_dir,
            lang: cli.lang,
            locale,
            puzzle_override: cli.puzzle,
            today: cli.today.unwrap_or_else(|| Local::now().date_naive()),
            policy: CompletionPolicy {
                locale,
                legacy_cutoff: cli.legacy_cutoff,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["bulmaca", "--today", "2026-05-04"]).unwrap();
        let config = AppConfig::from_cli(cli);
        assert_eq!(config.puzzle_dir, PathBuf::from("puzzles"));
        assert_eq!(config.lang, "tr");
        assert_eq!(config.locale, Locale::Turkish);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2026, 5, 4).unwrap());
        assert_eq!(config.policy.legacy_cutoff, DEFAULT_LEGACY_CUTOFF);
        assert_eq!(config.puzzle_override, None);
    }

    #[test]
    fn overrides() {
        let cli = Cli::try_parse_from([
            "bulmaca",
            "--lang",
            "en",
            "--puzzle-dir",
            "/srv/puzzles",
            "--puzzle",
            "mine.txt",
            "--legacy-cutoff",
            "2024-01-31",
        ])
        .unwrap();
        let config = AppConfig::from_cli(cli);
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.policy.locale, Locale::English);
        assert_eq!(config.puzzle_dir, PathBuf::from("/srv/puzzles"));
        assert_eq!(config.puzzle_override, Some(PathBuf::from("mine.txt")));
        assert_eq!(
            config.policy.legacy_cutoff,
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
    }

    #[test]
    fn unknown_language_uses_english_rules() {
        let cli = Cli::try_parse_from(["bulmaca", "--lang", "de"]).unwrap();
        let config = AppConfig::from_cli(cli);
        assert_eq!(config.lang, "de");
        assert_eq!(config.locale, Locale::English);
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(Cli::try_parse_from(["bulmaca", "--today", "tomorrow"]).is_err());
    }
}
