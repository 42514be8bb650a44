//! Letter handling that depends on the puzzle language.

use std::str::FromStr;

/// Puzzle language.
///
/// The locale decides how entered letters are uppercased and which
/// on-screen keyboard layout is offered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display, derive_more::IsVariant,
)]
pub enum Locale {
    /// Turkish (`tr`); dotted and dotless `i` uppercase to `İ` and `I`.
    #[default]
    #[display("tr")]
    Turkish,
    /// English (`en`).
    #[display("en")]
    English,
}

/// A language code with no matching [`Locale`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown language code `{_0}`")]
pub struct UnknownLocale(#[error(not(source))] pub String);

const TURKISH_KEYBOARD: &[&[char]] = &[
    &['Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P', 'Ğ', 'Ü'],
    &['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'Ş', 'İ'],
    &['Z', 'X', 'C', 'V', 'B', 'N', 'M', 'Ö', 'Ç'],
];

const ENGLISH_KEYBOARD: &[&[char]] = &[
    &['Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P'],
    &['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L'],
    &['Z', 'X', 'C', 'V', 'B', 'N', 'M'],
];

impl Locale {
    /// All supported locales.
    pub const ALL: [Self; 2] = [Self::Turkish, Self::English];

    /// Returns the two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Turkish => "tr",
            Self::English => "en",
        }
    }

    /// Looks up a locale by language code, ignoring case.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }

    /// Uppercases a single letter under this locale's rules.
    ///
    /// A letter whose uppercase form is more than one character (such as
    /// `ß`) is returned unchanged, since a cell holds exactly one letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use bulmaca_game::Locale;
    ///
    /// assert_eq!(Locale::Turkish.uppercase('i'), 'İ');
    /// assert_eq!(Locale::Turkish.uppercase('ı'), 'I');
    /// assert_eq!(Locale::English.uppercase('i'), 'I');
    /// assert_eq!(Locale::English.uppercase('ş'), 'Ş');
    /// ```
    #[must_use]
    pub fn uppercase(self, c: char) -> char {
        match (self, c) {
            (Self::Turkish, 'i') => 'İ',
            (Self::Turkish, 'ı') => 'I',
            _ => {
                let mut upper = c.to_uppercase();
                match (upper.next(), upper.next()) {
                    (Some(u), None) => u,
                    _ => c,
                }
            }
        }
    }

    /// Returns the on-screen keyboard rows for this locale.
    #[must_use]
    pub const fn keyboard_layout(self) -> &'static [&'static [char]] {
        match self {
            Self::Turkish => TURKISH_KEYBOARD,
            Self::English => ENGLISH_KEYBOARD,
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLocale(s.to_owned()))
    }
}

/// Returns `true` if `c` is accepted as a letter of input.
///
/// Accepted are ASCII letters and the Latin-1 Supplement, Latin Extended-A/B,
/// and Latin Extended Additional blocks (`U+00C0..=U+024F`,
/// `U+1E00..=U+1EFF`).
#[must_use]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}')
}

/// Maps Turkish-specific letters to their closest Latin letter.
///
/// Used only by the legacy completion check.
#[must_use]
pub fn fold_turkish(c: char) -> char {
    match c {
        'Ş' => 'S',
        'ş' => 's',
        'İ' | 'I' => 'I',
        'ı' => 'i',
        'Ğ' => 'G',
        'ğ' => 'g',
        'Ü' => 'U',
        'ü' => 'u',
        'Ö' => 'O',
        'ö' => 'o',
        'Ç' => 'C',
        'ç' => 'c',
        _ => c,
    }
}
