use core::cmp::Ordering;
use core::fmt::{self, Display};

/// One dot-separated field of a pre-release or build segment.
///
/// The tag is decided once, when the field is parsed, and is never
/// re-interpreted afterwards. It drives the precedence rule between
/// identifiers at the same position of two pre-release segments: numeric
/// identifiers compare by value, alphanumeric identifiers compare by ASCII
/// lexical order, and a numeric identifier is always lower than an
/// alphanumeric one.
///
/// Alphanumeric identifiers are expected to match `[0-9A-Za-z-]+`; the
/// parser only ever produces conforming values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// A bare non-negative integer without a leading zero, like the `2` in
    /// `beta.2`.
    Numeric(u64),

    /// Any other `[0-9A-Za-z-]+` run, like `alpha` or `x86-64`. This
    /// includes all-digit runs that are not valid numeric literals, such as
    /// `007` or runs too large for 64 bits.
    Alphanumeric(String),
}

impl Identifier {
    /// Tags a token that is already known to match `[0-9A-Za-z-]+`.
    pub(crate) fn classify(token: &str) -> Self {
        let numeric = token.bytes().all(|b| b.is_ascii_digit())
            && (token.len() == 1 || !token.starts_with('0'));
        if numeric {
            if let Ok(value) = token.parse::<u64>() {
                return Identifier::Numeric(value);
            }
        }
        Identifier::Alphanumeric(token.to_owned())
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        use Identifier::*;
        match (self, other) {
            (Numeric(ours), Numeric(theirs)) => ours.cmp(theirs),
            (Alphanumeric(ours), Alphanumeric(theirs)) => ours.cmp(theirs),
            // numeric identifiers always have lower precedence than
            // alphanumeric ones
            (Numeric(_), Alphanumeric(_)) => Ordering::Less,
            (Alphanumeric(_), Numeric(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Identifier {
    /// Renders the identifier byte-identical to its textual source.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(value) => write!(f, "{}", value),
            Identifier::Alphanumeric(text) => f.write_str(text),
        }
    }
}
