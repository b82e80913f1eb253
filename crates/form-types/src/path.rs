use std::fmt;
use std::str::FromStr;

/// A parsed field path such as `address.country` or `contacts[0].email`.
///
/// Parsing never fails. Dots and brackets both separate segments, quotes
/// inside brackets are stripped (`meta["build.id"]` keeps the dot), and empty
/// segments are dropped. A path with no segments addresses nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(raw: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = raw.chars();

        while let Some(ch) = chars.next() {
            match ch {
                '.' => flush(&mut segments, &mut current),
                '[' => {
                    flush(&mut segments, &mut current);
                    let mut inner = String::new();
                    for c in chars.by_ref() {
                        if c == ']' {
                            break;
                        }
                        inner.push(c);
                    }
                    let key = strip_quotes(inner.trim());
                    if !key.is_empty() {
                        segments.push(key.to_string());
                    }
                }
                ']' => {}
                _ => current.push(ch),
            }
        }
        flush(&mut segments, &mut current);

        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    /// The path exactly as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Largest segment treated as an array index. Bigger numbers are plain keys,
/// so a path can never force a huge array allocation.
pub const MAX_ARRAY_INDEX: usize = 65_535;

/// Parse a segment as an array index. Only canonical non-negative integers up
/// to [`MAX_ARRAY_INDEX`] qualify: `"0"` and `"12"` do, `"01"`, `"-1"` and
/// `"1000000"` do not.
pub fn index_segment(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical {
        segment
            .parse()
            .ok()
            .filter(|index| *index <= MAX_ARRAY_INDEX)
    } else {
        None
    }
}

fn flush(segments: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        segments.push(std::mem::take(current));
    }
}

fn strip_quotes(key: &str) -> &str {
    for quote in ['"', '\''] {
        if key.len() >= 2 && key.starts_with(quote) && key.ends_with(quote) {
            return &key[1..key.len() - 1];
        }
    }
    key
}

impl FromStr for FieldPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for FieldPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn segs(raw: &str) -> Vec<String> {
        FieldPath::parse(raw).segments().to_vec()
    }

    #[test]
    fn dotted_path_splits_on_dots() {
        assert_eq!(segs("address.country"), vec!["address", "country"]);
    }

    #[test]
    fn brackets_and_dots_mix() {
        assert_eq!(segs("contacts[0].email"), vec!["contacts", "0", "email"]);
        assert_eq!(segs("matrix[1][2]"), vec!["matrix", "1", "2"]);
    }

    #[test]
    fn quoted_bracket_keys_keep_inner_dots() {
        assert_eq!(segs(r#"meta["build.id"]"#), vec!["meta", "build.id"]);
        assert_eq!(segs("meta['x']"), vec!["meta", "x"]);
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(segs("a..b."), vec!["a", "b"]);
        assert!(FieldPath::parse("").is_empty());
        assert!(FieldPath::parse("[]").is_empty());
    }

    #[test]
    fn display_keeps_raw_text() {
        assert_eq!(FieldPath::parse("a[0].b").to_string(), "a[0].b");
    }

    #[test]
    fn index_segment_accepts_only_canonical_integers() {
        assert_eq!(index_segment("0"), Some(0));
        assert_eq!(index_segment("17"), Some(17));
        assert_eq!(index_segment("65535"), Some(MAX_ARRAY_INDEX));
        assert_eq!(index_segment("65536"), None);
        assert_eq!(index_segment("1000000000000000"), None);
        assert_eq!(index_segment("99999999999999999999"), None);
        assert_eq!(index_segment("07"), None);
        assert_eq!(index_segment("-1"), None);
        assert_eq!(index_segment("name"), None);
        assert_eq!(index_segment(""), None);
    }
}
