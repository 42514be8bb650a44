//! Puzzle text format.
//!
//! A puzzle file looks like this:
//!
//! ```text
//! Author: <name>
//! Size: <N>
//! <N lines of N characters, '-' for black cells>
//! H<k>: <across clue>
//! V<k>: <down clue>
//! ```
//!
//! The whole payload may be prefixed with `[ENCRYPTED]\n`, in which case the
//! rest is XOR-ed with [`OBFUSCATION_KEY`] character by character. This only
//! hides answers from casual viewing; it is not encryption.

use crate::{ClueNumber, Grid, MalformedGrid};

/// Marker that introduces an obfuscated payload.
pub const OBFUSCATED_MARKER: &str = "[ENCRYPTED]";

/// XOR key applied to every character of an obfuscated payload.
pub const OBFUSCATION_KEY: u32 = 42;

const FIELD_SEPARATOR: &str = ": ";

/// Errors produced while parsing puzzle text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PuzzleError {
    /// A required header line is absent or has no value.
    #[display("missing `{name}` header")]
    MissingHeader {
        /// Header name, e.g. `Size`.
        #[error(not(source))]
        name: &'static str,
    },
    /// The `Size` header is not a number.
    #[display("invalid grid size `{_0}`")]
    InvalidSize(#[error(not(source))] String),
    /// The grid rows disagree with the declared size.
    #[display("{_0}")]
    #[from]
    MalformedGrid(MalformedGrid),
}

/// Clue texts of one axis, in file order.
///
/// Clues are addressed by position: the clue for number `n` is the `n`-th
/// entry of the list, whatever its literal key says. Files whose keys are
/// contiguous and ordered (`H1`, `H2`, ...) are unaffected; others show a
/// clue that does not match the grid number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueList {
    entries: Vec<(String, String)>,
}

impl ClueList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a clue, or replaces the text of an existing entry with the
    /// same key while keeping its place.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let key = key.into();
        let text = text.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = text;
        } else {
            self.entries.push((key, text));
        }
    }

    /// Returns the clue text at zero-based position `index`.
    #[must_use]
    pub fn nth(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(_, text)| text.as_str())
    }

    /// Returns the clue shown for grid number `number`.
    #[must_use]
    pub fn for_number(&self, number: ClueNumber) -> Option<&str> {
        self.nth(number.list_index())
    }

    /// Returns the number of clues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no clues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, text)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, t)| (k.as_str(), t.as_str()))
    }
}

/// A parsed puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Puzzle author.
    pub author: String,
    /// Cell matrix with expected letters.
    pub grid: Grid,
    /// Across clues (`H` keys).
    pub across_clues: ClueList,
    /// Down clues (`V` keys and any other key).
    pub down_clues: ClueList,
}

impl Puzzle {
    /// Parses plain (already de-obfuscated) puzzle text.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError`] if a header is missing, the size is not a
    /// number, or the grid does not match the declared size.
    ///
    /// # Examples
    ///
    /// ```
    /// use bulmaca_core::{Position, Puzzle};
    ///
    /// let puzzle = Puzzle::parse("Author: Ada\nSize: 2\nAB\nC-\nH1: First\nV1: Down").unwrap();
    /// assert_eq!(puzzle.author, "Ada");
    /// assert_eq!(puzzle.grid.solution(Position::new(1, 0)), Some('C'));
    /// assert_eq!(puzzle.across_clues.nth(0), Some("First"));
    /// ```
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let lines: Vec<&str> = text
            .trim()
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let author = header_value(lines.first().copied(), "Author")?;
        let size_text = header_value(lines.get(1).copied(), "Size")?;
        let size: usize = size_text
            .trim()
            .parse()
            .map_err(|_| PuzzleError::InvalidSize(size_text.to_owned()))?;

        let grid_end = lines.len().min(2 + size);
        let grid = Grid::from_rows(size, &lines[2..grid_end])?;

        let mut across_clues = ClueList::new();
        let mut down_clues = ClueList::new();
        for line in &lines[grid_end..] {
            let mut fields = line.split(FIELD_SEPARATOR);
            let (Some(key), Some(text)) = (fields.next(), fields.next()) else {
                continue;
            };
            if let Some(id) = key.strip_prefix('H') {
                across_clues.insert(id, text);
            } else {
                if !key.starts_with('V') {
                    log::warn!("clue key `{key}` has no H/V prefix; treating it as down");
                }
                down_clues.insert(key.get(1..).unwrap_or_default(), text);
            }
        }

        log::info!(
            "parsed {size}x{size} puzzle by {author} with {} across and {} down clues",
            across_clues.len(),
            down_clues.len()
        );

        Ok(Self {
            author: author.to_owned(),
            grid,
            across_clues,
            down_clues,
        })
    }

    /// Returns the clue list for `axis`.
    #[must_use]
    pub fn clues(&self, axis: crate::Axis) -> &ClueList {
        match axis {
            crate::Axis::Across => &self.across_clues,
            crate::Axis::Down => &self.down_clues,
        }
    }
}

fn header_value<'a>(line: Option<&'a str>, name: &'static str) -> Result<&'a str, PuzzleError> {
    let mut fields = line.unwrap_or_default().split(FIELD_SEPARATOR);
    match (fields.next(), fields.next()) {
        (Some(key), Some(value)) if key == name => Ok(value),
        _ => Err(PuzzleError::MissingHeader { name }),
    }
}

/// Returns the plain puzzle text of a raw payload.
///
/// Surrounding whitespace is trimmed first. A payload starting with
/// [`OBFUSCATED_MARKER`] has the marker line removed and the remainder
/// de-obfuscated; anything else is returned as is.
#[must_use]
pub fn decode_payload(raw: &str) -> String {
    let text = raw.trim();
    match text.strip_prefix(OBFUSCATED_MARKER) {
        Some(rest) => {
            log::debug!("decoding obfuscated puzzle payload");
            xor_chars(rest.strip_prefix('\n').unwrap_or(rest))
        }
        None => text.to_owned(),
    }
}

/// Returns `plain` in marked, obfuscated form.
///
/// # Examples
///
/// ```
/// use bulmaca_core::puzzle::{decode_payload, obfuscate};
///
/// let payload = obfuscate("Author: Ada\nSize: 1\nA");
/// assert!(payload.starts_with("[ENCRYPTED]\n"));
/// assert_eq!(decode_payload(&payload), "Author: Ada\nSize: 1\nA");
/// ```
#[must_use]
pub fn obfuscate(plain: &str) -> String {
    format!("{OBFUSCATED_MARKER}\n{}", xor_chars(plain))
}

fn xor_chars(text: &str) -> String {
    // The key only touches the low six bits, so a scalar value never turns
    // into a surrogate.
    text.chars()
        .map(|c| char::from_u32(u32::from(c) ^ OBFUSCATION_KEY).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Decodes and parses a raw puzzle payload.
///
/// # Errors
///
/// Returns [`PuzzleError`] if the decoded text is not a valid puzzle.
pub fn load_puzzle(raw: &str) -> Result<Puzzle, PuzzleError> {
    Puzzle::parse(&decode_payload(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, Position};

    const SAMPLE: &str = "\
Author: Deniz
Size: 3
AB-
C-D
-EF
H1: Across one
H2: Across two: with colon
V1: Down one
V2: Down two
";

    #[test]
    fn test_parse_sample() {
        let puzzle = Puzzle::parse(SAMPLE).unwrap();
        assert_eq!(puzzle.author, "Deniz");
        assert_eq!(puzzle.grid.size(), 3);
        assert!(puzzle.grid.is_black(Position::new(2, 0)));
        assert_eq!(puzzle.across_clues.len(), 2);
        assert_eq!(puzzle.clues(Axis::Down).nth(1), Some("Down two"));
    }

    #[test]
    fn test_clue_text_stops_at_second_separator() {
        let puzzle = Puzzle::parse(SAMPLE).unwrap();
        assert_eq!(puzzle.across_clues.nth(1), Some("Across two"));
    }

    #[test]
    fn test_clues_are_positional() {
        let text = "Author: A\nSize: 1\nA\nH5: five\nH2: two\n";
        let puzzle = Puzzle::parse(text).unwrap();
        assert_eq!(puzzle.across_clues.for_number(ClueNumber::new(1)), Some("five"));
        assert_eq!(puzzle.across_clues.for_number(ClueNumber::new(2)), Some("two"));
        assert_eq!(puzzle.across_clues.for_number(ClueNumber::new(3)), None);
    }

    #[test]
    fn test_repeated_key_keeps_position() {
        let mut clues = ClueList::new();
        clues.insert("1", "old");
        clues.insert("2", "second");
        clues.insert("1", "new");
        assert_eq!(clues.iter().collect::<Vec<_>>(), vec![("1", "new"), ("2", "second")]);
    }

    #[test]
    fn test_parse_tolerates_crlf_and_skips_noise() {
        let text = "Author: A\r\nSize: 2\r\nAB\r\nCD\r\nnot a clue\r\nV1: Down\r\n";
        let puzzle = Puzzle::parse(text).unwrap();
        assert_eq!(puzzle.down_clues.nth(0), Some("Down"));
        assert!(puzzle.across_clues.is_empty());
    }

    #[test]
    fn test_parse_rejects_size_mismatch() {
        let text = "Author: A\nSize: 3\nAB-\nC-D\n";
        assert!(matches!(
            Puzzle::parse(text),
            Err(PuzzleError::MalformedGrid(MalformedGrid::RowCount {
                expected: 3,
                ..
            }))
        ));

        let text = "Author: A\nSize: 2\nABC\nDE\n";
        assert!(matches!(
            Puzzle::parse(text),
            Err(PuzzleError::MalformedGrid(MalformedGrid::RowLength { row: 0, .. }))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_headers() {
        assert_eq!(
            Puzzle::parse("Size: 2"),
            Err(PuzzleError::MissingHeader { name: "Author" })
        );
        assert_eq!(
            Puzzle::parse("Author: A\nSize: two\nAB\nCD"),
            Err(PuzzleError::InvalidSize("two".to_owned()))
        );
    }

    #[test]
    fn test_parse_checks_header_names() {
        assert_eq!(
            Puzzle::parse("Size: 1\nAuthor: X\nA"),
            Err(PuzzleError::MissingHeader { name: "Author" })
        );
        assert_eq!(
            Puzzle::parse("Author: X\nWidth: 1\nA\nH1: a"),
            Err(PuzzleError::MissingHeader { name: "Size" })
        );
        assert_eq!(
            Puzzle::parse("Author\nSize: 1\nA"),
            Err(PuzzleError::MissingHeader { name: "Author" })
        );
    }

    #[test]
    fn test_obfuscated_payload_loads() {
        let payload = format!("\n  {}  \n", obfuscate(SAMPLE.trim()));
        let puzzle = load_puzzle(&payload).unwrap();
        assert_eq!(puzzle, Puzzle::parse(SAMPLE).unwrap());
    }

    #[test]
    fn test_obfuscation_keeps_turkish_letters() {
        let plain = "Author: Şule\nSize: 1\nĞ";
        assert_eq!(decode_payload(&obfuscate(plain)), plain);
        assert_ne!(xor_chars(plain), plain);
    }
}
