//! Parser and queries for the KEGG PATHWAY ec.list file.
pub(crate) mod index;
pub(crate) mod parser;

use std::fs::File;
use std::path::{Path, PathBuf};

use hashbrown::{HashMap, HashSet};

use crate::errors::Result;
pub use index::EcIndex;
use parser::LineParser;

/// Relations between metabolic pathway map numbers and EC numbers, read
/// from a KEGG PATHWAY `ec.list` file.
///
/// The file is not touched at construction: the first query that needs
/// data parses it once, and every later query reuses the in-memory
/// indexes. The ec.list file covers the PATHWAY database only; do not use
/// this type to relate EC numbers to other KEGG databases (genes, genomes
/// and so on).
pub struct EcList {
    path: PathBuf,
    parser: LineParser,
    index: Option<EcIndex>,
}

impl EcList {
    /// Creates a new instance for an ec.list file.
    ///
    /// The file is opened by the first query, not here.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            parser: LineParser::new(),
            index: None,
        }
    }

    /// Path of the source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reports whether the indexes have been built already.
    #[inline(always)]
    pub const fn is_populated(&self) -> bool {
        self.index.is_some()
    }

    /// Returns the metabolic map number from a record line such as
    /// `path:ec00010   ec:4.1.1.49`.
    ///
    /// # Errors
    ///
    /// Returns an error when the line does not have the record shape.
    pub fn extract_map_number<'a>(&self, line: &'a str) -> Result<&'a str> {
        self.parser.map_number(line)
    }

    /// Returns the map related data from a record line, with leading
    /// whitespace stripped.
    ///
    /// # Errors
    ///
    /// Returns an error when the line does not have the record shape.
    pub fn extract_map_data<'a>(&self, line: &'a str) -> Result<&'a str> {
        self.parser.map_data(line)
    }

    /// Returns the EC number from a record line: the map data with every
    /// `ec:` marker removed and all whitespace stripped.
    ///
    /// # Errors
    ///
    /// Returns an error when the line does not have the record shape.
    pub fn extract_ec_number(&self, line: &str) -> Result<String> {
        self.parser.ec_number(line)
    }

    /// Tests whether map data carries an EC annotation.
    ///
    /// Map names and other descriptive data return false; such lines are
    /// skipped during indexing rather than treated as errors.
    pub fn looks_like_ec_number(&self, data: &str) -> bool {
        self.parser.is_ec_data(data)
    }

    /// Builds the indexes from the source file on the first call and
    /// returns them.
    ///
    /// A build that yields no EC lines still counts as populated, so the
    /// file is parsed at most once. A failed build leaves the instance
    /// unpopulated and the next query retries.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be opened or read, or when a
    /// line does not have the record shape.
    pub fn index(&mut self) -> Result<&EcIndex> {
        if self.index.is_none() {
            let file = File::open(&self.path)?;
            self.index = Some(EcIndex::from_reader(file)?);
        }
        Ok(self.index.as_ref().unwrap())
    }

    /// Map numbers and their related EC numbers, building the indexes on
    /// the first call.
    ///
    /// # Errors
    ///
    /// See [`EcList::index()`].
    pub fn maps_to_ecs(&mut self) -> Result<&HashMap<String, Vec<String>>> {
        Ok(self.index()?.maps_to_ecs())
    }

    /// EC numbers and their related map numbers, building the indexes on
    /// the first call.
    ///
    /// # Errors
    ///
    /// See [`EcList::index()`].
    pub fn ecs_to_maps(&mut self) -> Result<&HashMap<String, Vec<String>>> {
        Ok(self.index()?.ecs_to_maps())
    }

    /// All EC numbers and their related map numbers.
    ///
    /// Same contract and result as [`EcList::ecs_to_maps()`]; both names
    /// are part of the public surface.
    ///
    /// # Errors
    ///
    /// See [`EcList::index()`].
    pub fn all_ecs_and_maps(&mut self) -> Result<&HashMap<String, Vec<String>>> {
        Ok(self.index()?.all_ecs_and_maps())
    }

    /// Deduplicated EC numbers containing a placeholder component.
    ///
    /// # Errors
    ///
    /// See [`EcList::index()`].
    pub fn incomplete_ec_numbers(&mut self) -> Result<HashSet<String>> {
        Ok(self.index()?.incomplete_ec_numbers())
    }

    /// Deduplicated EC numbers with all components fully specified.
    ///
    /// # Errors
    ///
    /// See [`EcList::index()`].
    pub fn complete_ec_numbers(&mut self) -> Result<HashSet<String>> {
        Ok(self.index()?.complete_ec_numbers())
    }

    /// All indexed EC numbers, deduplicated.
    ///
    /// # Errors
    ///
    /// See [`EcList::index()`].
    pub fn all_ec_numbers(&mut self) -> Result<HashSet<String>> {
        Ok(self.index()?.all_ec_numbers())
    }
}
