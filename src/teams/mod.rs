//! Team naming: aliases between sources, display codes and stat lookup.

pub mod abbreviations;
pub mod aliases;
pub mod resolver;

pub use abbreviations::derive_abbreviation;
pub use aliases::AliasTable;
pub use resolver::resolve;
