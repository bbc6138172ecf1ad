use crate::error::ValidationError;
use crate::identifier::Identifier;
use core::fmt::{self, Display};

/// The `+...` segment of a version: an ordered, non-empty sequence of
/// [`Identifier`]s, dot-separated in external form.
///
/// Build metadata is informational only and never participates in
/// precedence; two versions that differ only here compare as equal. Unlike a
/// pre-release segment, a build segment may repeat an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Build {
    identifiers: Vec<Identifier>,
}

impl Build {
    /// Builds a build segment from `identifiers`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyBuild`] if `identifiers` is empty.
    pub fn new(identifiers: Vec<Identifier>) -> Result<Self, ValidationError> {
        if identifiers.is_empty() {
            return Err(ValidationError::EmptyBuild);
        }
        Ok(Self { identifiers })
    }

    /// The identifiers of this segment, in external order.
    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }
}

impl Display for Build {
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
