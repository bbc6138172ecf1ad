/// Errors for input that does not match the version grammar.
///
/// Parsing stops at the first byte that cannot belong to a valid version
/// string, and every variant records where that happened. Use
/// [`ParseError::position`] when the variant itself doesn't matter.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty. A version string needs at least a major field.
    #[error("version string should not be empty")]
    EmptyVersion,

    /// A core field (major, minor, or micro) was expected.
    #[error("expected a digit at byte {position}")]
    ExpectedDigit {
        /// Byte offset of the offending input byte.
        position: usize,
    },

    /// A core field started with `0` but was longer than one digit.
    #[error("leading zero in numeric field at byte {position}")]
    LeadingZero {
        /// Byte offset of the offending input byte.
        position: usize,
    },

    /// A core field was a well-formed numeric literal too large for 64 bits.
    #[error("numeric field at byte {position} should fit in 64 bits")]
    NumericOverflow {
        /// Byte offset of the offending input byte.
        position: usize,
    },

    /// A pre-release or build identifier was expected, as after a `-` or `+`
    /// that opens a segment or a `.` that continues one.
    #[error("expected an identifier at byte {position}")]
    ExpectedIdentifier {
        /// Byte offset of the offending input byte.
        position: usize,
    },

    /// A byte that can start no remaining part of the grammar.
    #[error("unexpected character at byte {position}")]
    UnexpectedCharacter {
        /// Byte offset of the offending input byte.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset of the first input byte that does not conform to the
    /// grammar.
    pub fn position(&self) -> usize {
        match self {
            ParseError::EmptyVersion => 0,
            ParseError::ExpectedDigit { position }
            | ParseError::LeadingZero { position }
            | ParseError::NumericOverflow { position }
            | ParseError::ExpectedIdentifier { position }
            | ParseError::UnexpectedCharacter { position } => *position,
        }
    }
}

/// Errors for values that are lexically well-formed but violate a structural
/// invariant of the data model.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A micro field should only be present alongside a minor field.
    #[error("micro version should only be present alongside a minor version")]
    MicroWithoutMinor,

    /// A pre-release segment should contain at least one identifier.
    #[error("pre-release segment should contain at least one identifier")]
    EmptyPreRelease,

    /// A build segment should contain at least one identifier.
    #[error("build segment should contain at least one identifier")]
    EmptyBuild,

    /// The same identifier value occurred twice in one pre-release segment.
    #[error("duplicate identifier `{identifier}` in pre-release segment")]
    DuplicateIdentifier {
        /// Rendering of the repeated identifier.
        identifier: String,
    },

    /// An alphanumeric pre-release identifier fell outside the keyword
    /// vocabulary configured through
    /// [`ParseOptions::with_keywords`](crate::ParseOptions::with_keywords).
    #[error("pre-release keyword `{keyword}` is not in the configured vocabulary")]
    KeywordNotAllowed {
        /// The rejected keyword.
        keyword: String,
    },
}

/// Either kind of failure from parsing a version string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The input does not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The input matched the grammar but violates a structural invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
