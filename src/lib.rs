//! # ordver
//!
//! A library for parsing, ordering, and rendering semantic versions.
//!
//! A version string like `1.4.0-rc.2+f5c2a91` breaks down into a core
//! `major[.minor[.micro]]` triple, an optional pre-release segment, and
//! optional build metadata. [`SemanticVersion::parse`] validates a string
//! against that grammar, comparisons follow the published
//! [Semantic Versioning](https://semver.org/) precedence rules exactly, and
//! `to_string` renders the canonical form back out.
//!
//! ## Examples
//!
//! Parse, compare, and render:
//!
//! ```
//! use ordver::prelude::*;
//!
//! let candidate = SemanticVersion::parse("1.4.0-rc.2+f5c2a91").unwrap();
//! let released = SemanticVersion::parse("1.4.0").unwrap();
//!
//! // a pre-release precedes its associated normal release
//! assert!(candidate < released);
//! // rendering round-trips
//! assert_eq!("1.4.0-rc.2+f5c2a91", candidate.to_string());
//! ```
//!
//! Malformed input is rejected with the byte offset of the first offending
//! character:
//!
//! ```
//! use ordver::prelude::*;
//!
//! let err = SemanticVersion::parse("1.01.0").unwrap_err();
//! assert_eq!(
//!     VersionError::Parse(ParseError::LeadingZero { position: 2 }),
//!     err
//! );
//! ```
//!
//! Values are immutable; producing the next version is an operation that
//! returns a new value:
//!
//! ```
//! use ordver::prelude::*;
//!
//! let version = SemanticVersion::parse("1.4.0-rc.2").unwrap();
//! let segment = version.prerelease().unwrap().count().unwrap();
//! assert_eq!("rc.3", segment.to_string());
//! assert_eq!("2.0.0", version.bump_major().to_string());
//! ```
//!
//! ## Important Terms
//!
//! - **Precedence**: the strict total order used to rank two versions for
//!   "which is newer," as distinct from textual or structural equality.
//! - **Core version**: the `major[.minor[.micro]]` numeric triple.
//! - **Pre-release segment**: the `-...` suffix denoting a version that
//!   precedes its associated normal release.
//! - **Build metadata**: the `+...` suffix, informational only, excluded
//!   from precedence.
//! - **Identifier**: one dot-separated field within a pre-release or build
//!   segment.
//!
//! ## Grammar
//!
//! The whole input must match; no surrounding whitespace is permitted.
//!
//! ```text
//! version      := core ( '-' prerelease )? ( '+' build )?
//! core         := major ( '.' minor ( '.' micro )? )?
//! major/minor/micro := '0' | [1-9][0-9]*
//! prerelease   := segment ( '.' segment )*
//! build        := segment ( '.' segment )*
//! segment      := numericIdent | alnumIdent
//! numericIdent := '0' | [1-9][0-9]*
//! alnumIdent   := [0-9A-Za-z-]+   (anything in the charset that is not a
//!                                  valid numericIdent)
//! ```
//!
//! Numeric core fields reject leading zeros (`01` is invalid) and must fit
//! in 64 bits. A segment field that is a bare integer without a leading zero
//! is a numeric identifier; any other run from the charset is alphanumeric.
//!
//! ## Prelude
//!
//! ordver provides a prelude module for convenience. It contains everything
//! needed to interact with the library.
//!
//! Use it with:
//!
//! ```
//! use ordver::prelude::*;
//! ```
#![warn(missing_docs)]

mod build;
mod counter;
mod error;
mod identifier;
mod prerelease;
mod version;

pub use crate::build::Build;
pub use crate::counter::Counter;
pub use crate::error::{ParseError, ValidationError, VersionError};
pub use crate::identifier::Identifier;
pub use crate::prerelease::PreRelease;
pub use crate::version::{ParseOptions, SemanticVersion};

/// A convenience module appropriate for glob imports (`use ordver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::Build;
    #[doc(no_inline)]
    pub use crate::Counter;
    #[doc(no_inline)]
    pub use crate::Identifier;
    #[doc(no_inline)]
    pub use crate::ParseError;
    #[doc(no_inline)]
    pub use crate::ParseOptions;
    #[doc(no_inline)]
    pub use crate::PreRelease;
    #[doc(no_inline)]
    pub use crate::SemanticVersion;
    #[doc(no_inline)]
    pub use crate::ValidationError;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
