//! Relations between KEGG metabolic pathway maps and EC numbers.
//!
//! The KEGG PATHWAY `ec.list` file stores which enzyme classification (EC)
//! numbers appear on which metabolic pathway maps. This crate parses that
//! file and answers lookups in both directions.
//!
//! # File format
//!
//! One record per line: a `path:ec<digits>` token naming the map, then
//! whitespace, then either an EC annotation or descriptive text.
//!
//! ```text
//! $ cat ec.list
//! ...
//! path:ec00010    ec:4.1.1.49
//! path:ec00010    ec:2.7.1.199
//! path:ec00592    ec:1.-.-.-
//! ...
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use eclist::EcList;
//!
//! let mut list = EcList::new("ec.list");
//! let maps = list.maps_to_ecs()?;
//! ```
#![deny(missing_docs)]

pub mod errors;
pub mod list;

#[cfg(test)]
mod tests;

pub use list::{EcIndex, EcList};
