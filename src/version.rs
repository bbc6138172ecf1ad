use crate::build::Build;
use crate::counter::Counter;
use crate::error::{ParseError, ValidationError, VersionError};
use crate::identifier::Identifier;
use crate::prerelease::PreRelease;
use core::cmp::Ordering;
use core::fmt::{self, Display};
use core::str::FromStr;

/// Caller-supplied parser configuration.
///
/// The default accepts the full published grammar. Hosts that pin their
/// pre-release spelling to a fixed set of keywords (`alpha`/`beta`/`rc`
/// style) can restrict the parser with [`ParseOptions::with_keywords`];
/// there is no process-wide registry to mutate.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    keywords: Option<Vec<String>>,
}

impl ParseOptions {
    /// Options accepting the full grammar, with no keyword restriction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts alphanumeric pre-release identifiers to `keywords`.
    ///
    /// Numeric identifiers (counters) are always accepted, and build
    /// segments are never restricted.
    ///
    /// ```
    /// use ordver::prelude::*;
    ///
    /// let options = ParseOptions::with_keywords(["alpha", "beta", "rc"]);
    /// assert!(SemanticVersion::parse_with("1.0.0-rc.1", &options).is_ok());
    /// assert!(SemanticVersion::parse_with("1.0.0-nightly", &options).is_err());
    /// ```
    pub fn with_keywords<I, K>(keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keywords: Some(keywords.into_iter().map(Into::into).collect()),
        }
    }

    fn allows(&self, keyword: &str) -> bool {
        match &self.keywords {
            Some(keywords) => keywords.iter().any(|k| k == keyword),
            None => true,
        }
    }
}

/// A byte cursor over a version string. All scanning advances past ASCII
/// bytes only, so slices taken between cursor positions are always on
/// character boundaries.
struct Cursor<'vs> {
    text: &'vs str,
    pos: usize,
}

impl<'vs> Cursor<'vs> {
    fn new(text: &'vs str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Scans one core field: `0 | [1-9][0-9]*`, within 64 bits.
    fn numeric_field(&mut self) -> Result<Counter, ParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        let run = &self.text[start..self.pos];
        if run.is_empty() {
            return Err(ParseError::ExpectedDigit { position: start });
        }
        if run.len() > 1 && run.starts_with('0') {
            return Err(ParseError::LeadingZero { position: start });
        }
        let value = run
            .parse::<u64>()
            .map_err(|_| ParseError::NumericOverflow { position: start })?;
        Ok(Counter::new(value))
    }

    /// Scans one identifier: a non-empty `[0-9A-Za-z-]+` run.
    fn identifier(&mut self) -> Result<Identifier, ParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric() || b == b'-') {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(ParseError::ExpectedIdentifier { position: start });
        }
        Ok(Identifier::classify(&self.text[start..self.pos]))
    }

    /// Scans a dot-separated identifier sequence, as found after `-` or `+`.
    fn segment(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut identifiers = vec![self.identifier()?];
        while self.eat(b'.') {
            identifiers.push(self.identifier()?);
        }
        Ok(identifiers)
    }

    /// Byte offset of the first unconsumed byte, if any input remains.
    fn remainder(&self) -> Option<usize> {
        (self.pos < self.text.len()).then_some(self.pos)
    }
}

/// A version identifier: the core `major[.minor[.micro]]` triple plus an
/// optional pre-release segment and optional build metadata.
///
/// Values are created by [parsing](SemanticVersion::parse) a string or by
/// [direct construction](SemanticVersion::new), and are immutable from then
/// on; the bump methods return new values. Comparisons follow the published
/// Semantic Versioning precedence rules, so `==` and the relational
/// operators all ignore build metadata; use
/// [`identical`](SemanticVersion::identical) when exact structural identity
/// matters.
///
/// # Examples
///
/// ```
/// use ordver::prelude::*;
///
/// let candidate = SemanticVersion::parse("1.4.0-rc.2+f5c2a91").unwrap();
/// let released = SemanticVersion::parse("1.4.0").unwrap();
/// assert!(candidate < released);
/// assert_eq!("1.4.0-rc.2+f5c2a91", candidate.to_string());
/// ```
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    major: Counter,
    minor: Option<Counter>,
    micro: Option<Counter>,
    prerelease: Option<PreRelease>,
    build: Option<Build>,
}

impl SemanticVersion {
    /// Builds a version from its fields.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MicroWithoutMinor`] if `micro` is present while
    ///   `minor` is not.
    pub fn new(
        major: Counter,
        minor: Option<Counter>,
        micro: Option<Counter>,
        prerelease: Option<PreRelease>,
        build: Option<Build>,
    ) -> Result<Self, ValidationError> {
        if micro.is_some() && minor.is_none() {
            return Err(ValidationError::MicroWithoutMinor);
        }
        Ok(Self {
            major,
            minor,
            micro,
            prerelease,
            build,
        })
    }

    /// A release version with a full core triple and no pre-release or build
    /// segment.
    ///
    /// ```
    /// use ordver::prelude::*;
    ///
    /// assert_eq!("1.2.3", SemanticVersion::core(1, 2, 3).to_string());
    /// ```
    pub fn core(major: u64, minor: u64, micro: u64) -> Self {
        Self {
            major: Counter::new(major),
            minor: Some(Counter::new(minor)),
            micro: Some(Counter::new(micro)),
            prerelease: None,
            build: None,
        }
    }

    /// Parses a version string.
    ///
    /// The grammar is anchored: the whole input must be a version, with no
    /// surrounding whitespace. There is no partial success; either every
    /// byte is consumed and every invariant holds, or an error points at the
    /// first offending byte.
    ///
    /// # Errors
    ///
    /// - [`VersionError::Parse`] when the input does not match the grammar.
    /// - [`VersionError::Validation`] when the input is lexically well-formed
    ///   but structurally inconsistent, like a duplicated pre-release
    ///   identifier.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        Self::parse_with(text, &ParseOptions::new())
    }

    /// [`SemanticVersion::parse`], with explicit [`ParseOptions`].
    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self, VersionError> {
        if text.is_empty() {
            return Err(ParseError::EmptyVersion.into());
        }
        let mut cursor = Cursor::new(text);

        let major = cursor.numeric_field()?;
        let mut minor = None;
        let mut micro = None;
        if cursor.eat(b'.') {
            minor = Some(cursor.numeric_field()?);
            if cursor.eat(b'.') {
                micro = Some(cursor.numeric_field()?);
            }
        }

        let prerelease = if cursor.eat(b'-') {
            let identifiers = cursor.segment()?;
            for identifier in &identifiers {
                if let Identifier::Alphanumeric(keyword) = identifier {
                    if !options.allows(keyword) {
                        return Err(ValidationError::KeywordNotAllowed {
                            keyword: keyword.clone(),
                        }
                        .into());
                    }
                }
            }
            Some(PreRelease::new(identifiers)?)
        } else {
            None
        };

        let build = if cursor.eat(b'+') {
            Some(Build::new(cursor.segment()?)?)
        } else {
            None
        };

        if let Some(position) = cursor.remainder() {
            return Err(ParseError::UnexpectedCharacter { position }.into());
        }

        Ok(Self::new(major, minor, micro, prerelease, build)?)
    }

    /// The major field.
    pub fn major(&self) -> Counter {
        self.major
    }

    /// The minor field, when the version has one.
    pub fn minor(&self) -> Option<Counter> {
        self.minor
    }

    /// The micro field, when the version has one.
    pub fn micro(&self) -> Option<Counter> {
        self.micro
    }

    /// The pre-release segment, when the version has one.
    pub fn prerelease(&self) -> Option<&PreRelease> {
        self.prerelease.as_ref()
    }

    /// The build segment, when the version has one.
    pub fn build(&self) -> Option<&Build> {
        self.build.as_ref()
    }

    /// Total-order precedence between two versions.
    ///
    /// Fields are compared in significance order, short-circuiting at the
    /// first deciding step:
    ///
    /// 1. major, numerically;
    /// 2. minor, with an absent field sorting below every explicit one;
    /// 3. micro, under the same rule;
    /// 4. for equal core triples, a version with a pre-release segment sorts
    ///    below the same core without one; two pre-release segments compare
    ///    per [`PreRelease`]'s ordering.
    ///
    /// Build metadata is never consulted.
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use ordver::prelude::*;
    ///
    /// let left = SemanticVersion::parse("1.0.0+build1").unwrap();
    /// let right = SemanticVersion::parse("1.0.0+build2").unwrap();
    /// assert_eq!(Ordering::Equal, left.precedence(&right));
    /// ```
    pub fn precedence(&self, other: &Self) -> Ordering {
        match self.major.cmp(&other.major) {
            Ordering::Equal => {}
            decided => return decided,
        }
        // Option's ordering already sorts None below Some, which is exactly
        // the absent-sorts-lower rule for minor and micro
        match self.minor.cmp(&other.minor) {
            Ordering::Equal => {}
            decided => return decided,
        }
        match self.micro.cmp(&other.micro) {
            Ordering::Equal => {}
            decided => return decided,
        }
        match (&self.prerelease, &other.prerelease) {
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(ours), Some(theirs)) => ours.cmp(theirs),
        }
    }

    /// Field-for-field identity, build metadata included.
    ///
    /// This is the exact round-trip identity check; `==` is precedence
    /// equality and ignores build metadata.
    pub fn identical(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.micro == other.micro
            && self.prerelease == other.prerelease
            && self.build == other.build
    }

    /// Returns a new version with major advanced by one, any present minor
    /// and micro reset to zero, and the pre-release and build segments
    /// cleared.
    #[must_use]
    pub fn bump_major(&self) -> Self {
        Self {
            major: self.major.count(1),
            minor: self.minor.map(|_| Counter::ZERO),
            micro: self.micro.map(|_| Counter::ZERO),
            prerelease: None,
            build: None,
        }
    }

    /// Returns a new version with minor advanced by one, any present micro
    /// reset to zero, and the pre-release and build segments cleared; `None`
    /// when this version has no minor field. The shape of the core never
    /// changes implicitly.
    #[must_use]
    pub fn bump_minor(&self) -> Option<Self> {
        let minor = self.minor?;
        Some(Self {
            major: self.major,
            minor: Some(minor.count(1)),
            micro: self.micro.map(|_| Counter::ZERO),
            prerelease: None,
            build: None,
        })
    }

    /// Returns a new version with micro advanced by one and the pre-release
    /// and build segments cleared; `None` when this version has no micro
    /// field.
    #[must_use]
    pub fn bump_micro(&self) -> Option<Self> {
        let micro = self.micro?;
        Some(Self {
            major: self.major,
            minor: self.minor,
            micro: Some(micro.count(1)),
            prerelease: None,
            build: None,
        })
    }
}

impl PartialEq for SemanticVersion {
    /// Precedence equality. Build metadata is ignored; see
    /// [`SemanticVersion::identical`].
    fn eq(&self, other: &Self) -> bool {
        self.precedence(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence(other)
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for SemanticVersion {
    /// Renders the canonical form `major[.minor[.micro]][-prerelease][+build]`.
    ///
    /// The rendering re-parses to a value that is field-for-field identical.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{}", minor)?;
        }
        if let Some(micro) = self.micro {
            write!(f, ".{}", micro)?;
        }
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::rstest;

    #[test]
    fn test_parse_render_round_trip() {
        let version_strs = [
            "0",
            "1",
            "1.2",
            "1.2.3",
            "0.0.0",
            "10.20.30",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-0.3.7",
            "1.0.0-x-y-z.44",
            "1.0.0-alpha+001",
            "1.0.0+20130313144700",
            "1.0.0-beta+exp.sha.5114f85",
            "1.2+abc",
            "1-rc.1",
        ];

        for version_str in version_strs {
            let version = SemanticVersion::parse(version_str).unwrap();
            let rendered = version.to_string();
            assert_eq!(version_str, rendered);
            let reparsed = SemanticVersion::parse(&rendered).unwrap();
            assert!(version.identical(&reparsed));
        }
    }

    #[test]
    fn test_parse_err() {
        use ParseError::*;

        let args = [
            ("", EmptyVersion),
            (" 1.0.0", ExpectedDigit { position: 0 }),
            ("v1.2.3", ExpectedDigit { position: 0 }),
            ("1.0.0 ", UnexpectedCharacter { position: 5 }),
            ("01.2.3", LeadingZero { position: 0 }),
            ("1.01.0", LeadingZero { position: 2 }),
            ("1.2.03", LeadingZero { position: 4 }),
            ("1.2.3.4", UnexpectedCharacter { position: 5 }),
            ("1..2", ExpectedDigit { position: 2 }),
            ("1.", ExpectedDigit { position: 2 }),
            ("1.2.3-", ExpectedIdentifier { position: 6 }),
            ("1.2.3-alpha.", ExpectedIdentifier { position: 12 }),
            ("1.2.3-alpha..1", ExpectedIdentifier { position: 12 }),
            ("1.2.3-alpha+", ExpectedIdentifier { position: 12 }),
            ("1.2.3+", ExpectedIdentifier { position: 6 }),
            ("1.2.3-al_pha", UnexpectedCharacter { position: 8 }),
            ("1.2.3-ålpha", ExpectedIdentifier { position: 6 }),
            ("18446744073709551616", NumericOverflow { position: 0 }),
        ];

        for (version_str, expected) in args {
            let actual = SemanticVersion::parse(version_str);
            assert_eq!(
                Err(VersionError::Parse(expected)),
                actual,
                "input `{}`",
                version_str
            );
        }
    }

    #[test]
    fn test_parse_err_position() {
        let err = match SemanticVersion::parse("1.2.x") {
            Err(VersionError::Parse(err)) => err,
            other => panic!("expected a parse error, got {:?}", other),
        };
        assert_eq!(4, err.position());
    }

    #[test]
    fn test_parse_rejects_duplicate_prerelease_identifier() {
        let args = [
            ("1.0.0-alpha.alpha", "alpha"),
            ("1.0.0-beta.1.beta", "beta"),
            ("1.0.0-1.rc.1", "1"),
        ];

        for (version_str, duplicate) in args {
            let actual = SemanticVersion::parse(version_str);
            assert_eq!(
                Err(VersionError::Validation(
                    ValidationError::DuplicateIdentifier {
                        identifier: duplicate.to_string(),
                    }
                )),
                actual,
                "input `{}`",
                version_str
            );
        }
    }

    #[test]
    fn test_build_may_repeat_identifiers() {
        let version = SemanticVersion::parse("1.0.0+sha.sha").unwrap();
        assert_eq!("1.0.0+sha.sha", version.to_string());
    }

    #[test]
    fn test_new_micro_requires_minor() {
        let actual =
            SemanticVersion::new(Counter::new(1), None, Some(Counter::new(0)), None, None);
        assert!(matches!(actual, Err(ValidationError::MicroWithoutMinor)));
    }

    #[test]
    fn test_core_ordering() {
        let ordered = ["1.0.0", "1.0.1", "1.1.0", "2.0.0"];

        for (earlier, later) in ordered.iter().tuple_windows() {
            let earlier = SemanticVersion::parse(earlier).unwrap();
            let later = SemanticVersion::parse(later).unwrap();
            assert!(earlier < later);
        }
    }

    #[test]
    fn test_absent_fields_sort_lower() {
        let ordered = ["1", "1.0", "1.0.0", "1.0.1", "1.1"];

        for (earlier, later) in ordered.iter().tuple_windows() {
            let earlier = SemanticVersion::parse(earlier).unwrap();
            let later = SemanticVersion::parse(later).unwrap();
            assert!(earlier < later, "`{}` should precede `{}`", earlier, later);
        }
    }

    /// The canonical precedence chain from the Semantic Versioning
    /// specification, checked pairwise in both directions. Walking every
    /// pair rather than adjacent ones also exercises transitivity.
    #[test]
    fn test_prerelease_chain() {
        let ordered = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];

        for pair in ordered.iter().combinations(2) {
            let earlier = SemanticVersion::parse(pair[0]).unwrap();
            let later = SemanticVersion::parse(pair[1]).unwrap();
            assert!(earlier < later, "`{}` should precede `{}`", earlier, later);
            assert!(later > earlier);
            assert_ne!(earlier, later);
        }
    }

    #[test]
    fn test_precedence_is_total() {
        let version_strs = ["1", "1.0", "1.0.0-alpha", "1.0.0", "1.0.0+x", "2"];

        for (a_str, b_str) in version_strs.iter().cartesian_product(version_strs.iter()) {
            let a = SemanticVersion::parse(a_str).unwrap();
            let b = SemanticVersion::parse(b_str).unwrap();
            let holding = [a < b, a == b, a > b];
            assert_eq!(1, holding.iter().filter(|h| **h).count());
        }
    }

    #[test]
    fn test_build_metadata_ignored() {
        let left = SemanticVersion::parse("1.0.0+build1").unwrap();
        let right = SemanticVersion::parse("1.0.0+build2").unwrap();
        assert_eq!(Ordering::Equal, left.precedence(&right));
        assert_eq!(left, right);
        assert!(!left.identical(&right));
    }

    #[rstest]
    #[case("1.0.0-1", "1.0.0-one")]
    #[case("1.0.0-99999", "1.0.0-0a")]
    #[case("1.0.0-alpha.9", "1.0.0-alpha.beta")]
    fn test_numeric_sorts_below_alphanumeric(#[case] numeric: &str, #[case] alphanumeric: &str) {
        let numeric = SemanticVersion::parse(numeric).unwrap();
        let alphanumeric = SemanticVersion::parse(alphanumeric).unwrap();
        assert!(numeric < alphanumeric);
    }

    #[test]
    fn test_zero_padded_identifier_is_alphanumeric() {
        let version = SemanticVersion::parse("1.0.0-007").unwrap();
        assert_eq!(
            [Identifier::Alphanumeric("007".to_string())].as_slice(),
            version.prerelease().unwrap().identifiers()
        );
    }

    #[test]
    fn test_keyword_vocabulary() {
        let options = ParseOptions::with_keywords(["alpha", "beta", "rc"]);

        let accepted = ["1.0.0-alpha", "1.0.0-beta.2", "1.0.0-rc.1", "1.0.0-1", "1.0.0"];
        for version_str in accepted {
            assert!(
                SemanticVersion::parse_with(version_str, &options).is_ok(),
                "input `{}`",
                version_str
            );
        }

        let actual = SemanticVersion::parse_with("1.0.0-nightly.1", &options);
        assert_eq!(
            Err(VersionError::Validation(ValidationError::KeywordNotAllowed {
                keyword: "nightly".to_string(),
            })),
            actual
        );

        // build identifiers are never restricted
        assert!(SemanticVersion::parse_with("1.0.0-rc.1+nightly", &options).is_ok());
    }

    #[test]
    fn test_bump_major() {
        let args = [
            ("1.2.3", "2.0.0"),
            ("1.2", "2.0"),
            ("1", "2"),
            ("1.2.3-alpha.1+sha", "2.0.0"),
        ];

        for (version_str, expected) in args {
            let version = SemanticVersion::parse(version_str).unwrap();
            assert_eq!(expected, version.bump_major().to_string());
        }
    }

    #[test]
    fn test_bump_minor() {
        let args = [
            ("1.2.3", Some("1.3.0")),
            ("1.2", Some("1.3")),
            ("1", None),
        ];

        for (version_str, expected) in args {
            let version = SemanticVersion::parse(version_str).unwrap();
            let actual = version.bump_minor().map(|v| v.to_string());
            assert_eq!(expected.map(str::to_string), actual);
        }
    }

    #[test]
    fn test_bump_micro() {
        let args = [
            ("1.2.3", Some("1.2.4")),
            ("1.2.3-rc.1", Some("1.2.4")),
            ("1.2", None),
            ("1", None),
        ];

        for (version_str, expected) in args {
            let version = SemanticVersion::parse(version_str).unwrap();
            let actual = version.bump_micro().map(|v| v.to_string());
            assert_eq!(expected.map(str::to_string), actual);
        }
    }

    #[test]
    fn test_bump_is_greater() {
        for version_str in ["1.2.3", "1.2.3-alpha", "1.2.3+sha"] {
            let version = SemanticVersion::parse(version_str).unwrap();
            assert!(version < version.bump_major());
            assert!(version < version.bump_minor().unwrap());
            assert!(version < version.bump_micro().unwrap());
        }
    }

    #[test]
    fn test_accessors() {
        let version = SemanticVersion::parse("1.2.3-alpha.7+exp.5114f85").unwrap();
        assert_eq!(Counter::new(1), version.major());
        assert_eq!(Some(Counter::new(2)), version.minor());
        assert_eq!(Some(Counter::new(3)), version.micro());
        assert_eq!(Some(Counter::new(7)), version.prerelease().unwrap().counter());
        assert_eq!(2, version.build().unwrap().identifiers().len());

        let bare = SemanticVersion::parse("4").unwrap();
        assert_eq!(Counter::new(4), bare.major());
        assert_eq!(None, bare.minor());
        assert_eq!(None, bare.micro());
        assert!(bare.prerelease().is_none());
        assert!(bare.build().is_none());
    }

    #[test]
    fn test_from_str() {
        let version: SemanticVersion = "1.2.3".parse().unwrap();
        assert!(version.identical(&SemanticVersion::core(1, 2, 3)));

        let err = "1.2.3.4".parse::<SemanticVersion>().unwrap_err();
        assert_eq!(
            VersionError::Parse(ParseError::UnexpectedCharacter { position: 5 }),
            err
        );
    }
}
