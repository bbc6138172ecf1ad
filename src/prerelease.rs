use crate::counter::Counter;
use crate::error::ValidationError;
use crate::identifier::Identifier;
use core::cmp::Ordering;
use core::fmt::{self, Display};

/// The `-...` segment of a version: an ordered, non-empty sequence of
/// [`Identifier`]s, dot-separated in external form.
///
/// A version that carries a pre-release segment precedes its associated
/// normal release. When the trailing identifier is numeric it acts as the
/// segment's finishing [`Counter`] (the `3` in `alpha.3`), which is how a
/// release line iterates through `alpha.1`, `alpha.2`, and so on.
///
/// No identifier value may occur twice in the same segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    identifiers: Vec<Identifier>,
}

impl PreRelease {
    /// Builds a pre-release segment from `identifiers`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyPreRelease`] if `identifiers` is empty.
    /// - [`ValidationError::DuplicateIdentifier`] if the same identifier
    ///   value occurs twice.
    pub fn new(identifiers: Vec<Identifier>) -> Result<Self, ValidationError> {
        if identifiers.is_empty() {
            return Err(ValidationError::EmptyPreRelease);
        }
        for (idx, identifier) in identifiers.iter().enumerate() {
            if identifiers[..idx].contains(identifier) {
                return Err(ValidationError::DuplicateIdentifier {
                    identifier: identifier.to_string(),
                });
            }
        }
        Ok(Self { identifiers })
    }

    /// The identifiers of this segment, in external order.
    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// The finishing counter of this segment: the trailing identifier, when
    /// it is numeric.
    pub fn counter(&self) -> Option<Counter> {
        match self.identifiers.last() {
            Some(Identifier::Numeric(value)) => Some(Counter::new(*value)),
            _ => None,
        }
    }

    /// Returns a new segment with the finishing counter advanced by one, or
    /// with a `.1` counter appended when the segment has none. `alpha.3`
    /// becomes `alpha.4`, and `alpha` becomes `alpha.1`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::DuplicateIdentifier`] if the advanced counter
    ///   collides with an identifier already in the segment.
    pub fn count(&self) -> Result<Self, ValidationError> {
        let mut identifiers = self.identifiers.clone();
        match identifiers.last_mut() {
            Some(Identifier::Numeric(value)) => {
                *value = Counter::new(*value).count(1).value();
            }
            _ => identifiers.push(Identifier::Numeric(1)),
        }
        Self::new(identifiers)
    }
}

impl Ord for PreRelease {
    /// Precedence between two pre-release segments: identifiers are compared
    /// pairwise and the first differing position decides. When one sequence
    /// is a strict prefix of the other, the longer sequence is higher.
    fn cmp(&self, other: &Self) -> Ordering {
        for (ours, theirs) in self.identifiers.iter().zip(&other.identifiers) {
            match ours.cmp(theirs) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        self.identifiers.len().cmp(&other.identifiers.len())
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, identifier) in self.identifiers.iter().enumerate() {
            if idx > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", identifier)?;
        }
        Ok(())
    }
}
