//! gqlc-util - Core Utilities and Foundation Types
//!
//! This crate provides the small set of types shared by every gqlc crate:
//!
//! - [`span`] - half-open scalar ranges ([`Span`]), 1-based line/column
//!   positions ([`LineCol`]), the on-demand position mapper
//!   ([`position_of`]) and [`SourceFile`] for diagnostic rendering
//! - [`diagnostic`] - errors and warnings with codes, notes, help text and
//!   caret-underlined source snippets, collected by a [`Handler`]
//! - [`error`] - `thiserror` error types for fallible lookups
//!
//! All indices in this crate count Unicode scalar values (`char`s), not
//! bytes. A GraphQL document is scanned one scalar at a time, so token ranges
//! and positions are expressed in the same unit.
//!
//! # Example
//!
//! ```
//! use gqlc_util::{position_of, LineCol};
//!
//! let source = "query {\n  name\n}";
//! assert_eq!(position_of(10, source), LineCol::new(2, 3));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{position_of, LineCol, SourceFile, Span};
