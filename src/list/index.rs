use std::io::{BufRead, BufReader, Read};

use hashbrown::{HashMap, HashSet};

use crate::errors::Result;
use crate::list::parser::LineParser;

/// Bidirectional index between metabolic pathway map numbers and EC numbers.
///
/// Both views are grouped from the same pass over the source, so they are
/// exact inverses of each other. The index is immutable once built.
pub struct EcIndex {
    maps_to_ecs: HashMap<String, Vec<String>>,
    ecs_to_maps: HashMap<String, Vec<String>>,
}

impl EcIndex {
    /// Builds a new instance from ec.list data.
    ///
    /// Every line must be a `path:ec<digits>` record. Lines whose data is
    /// not an EC annotation (map names, category headings) are skipped.
    /// An EC number repeated under the same map in the source appears
    /// repeatedly in the index.
    ///
    /// # Errors
    ///
    /// Returns an error when a line does not have the record shape or when
    /// the reader fails.
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let parser = LineParser::new();
        let mut pairs = vec![];

        let reader = BufReader::new(rdr);
        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end_matches('\r');

            let map_number = parser.map_number(line)?;
            let map_data = parser.map_data(line)?;

            if parser.is_ec_data(map_data) {
                let ec_number = parser.ec_number(line)?;
                pairs.push((map_number.to_string(), ec_number));
            }
        }

        Ok(Self::from_pairs(pairs))
    }

    /// Groups the normalized (map, ec) pairs into both views.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut maps_to_ecs: HashMap<String, Vec<String>> = HashMap::new();
        let mut ecs_to_maps: HashMap<String, Vec<String>> = HashMap::new();

        for (map_number, ec_number) in pairs {
            maps_to_ecs
                .entry(map_number.clone())
                .or_insert_with(Vec::new)
                .push(ec_number.clone());
            ecs_to_maps
                .entry(ec_number)
                .or_insert_with(Vec::new)
                .push(map_number);
        }

        Self {
            maps_to_ecs,
            ecs_to_maps,
        }
    }

    /// Map numbers and their related EC numbers.
    #[inline(always)]
    pub const fn maps_to_ecs(&self) -> &HashMap<String, Vec<String>> {
        &self.maps_to_ecs
    }

    /// EC numbers and their related map numbers.
    #[inline(always)]
    pub const fn ecs_to_maps(&self) -> &HashMap<String, Vec<String>> {
        &self.ecs_to_maps
    }

    /// All EC numbers and their related map numbers.
    ///
    /// Returns the same structure as [`EcIndex::ecs_to_maps()`]; both names
    /// are part of the public surface.
    #[inline(always)]
    pub const fn all_ecs_and_maps(&self) -> &HashMap<String, Vec<String>> {
        &self.ecs_to_maps
    }

    /// EC numbers related to a map number, or `None` for an unknown map.
    #[inline(always)]
    pub fn ecs_for_map(&self, map_number: &str) -> Option<&[String]> {
        self.maps_to_ecs.get(map_number).map(|ecs| ecs.as_slice())
    }

    /// Map numbers related to an EC number, or `None` for an unknown EC.
    #[inline(always)]
    pub fn maps_for_ec(&self, ec_number: &str) -> Option<&[String]> {
        self.ecs_to_maps.get(ec_number).map(|maps| maps.as_slice())
    }

    /// Deduplicated EC numbers containing a placeholder component.
    pub fn incomplete_ec_numbers(&self) -> HashSet<String> {
        self.ecs_to_maps
            .keys()
            .filter(|ec| ec.contains('-'))
            .cloned()
            .collect()
    }

    /// Deduplicated EC numbers with all components fully specified.
    pub fn complete_ec_numbers(&self) -> HashSet<String> {
        self.ecs_to_maps
            .keys()
            .filter(|ec| !ec.contains('-'))
            .cloned()
            .collect()
    }

    /// All indexed EC numbers, deduplicated.
    pub fn all_ec_numbers(&self) -> HashSet<String> {
        self.ecs_to_maps.keys().cloned().collect()
    }

    /// Number of indexed map numbers.
    #[inline(always)]
    pub fn num_maps(&self) -> usize {
        self.maps_to_ecs.len()
    }

    /// Number of distinct indexed EC numbers.
    #[inline(always)]
    pub fn num_ecs(&self) -> usize {
        self.ecs_to_maps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let data = "path:ec00010\tec:4.1.1.49\npath:ec00020\tec:4.1.1.49\npath:ec00010\tec:2.7.1.199";
        let index = EcIndex::from_reader(data.as_bytes()).unwrap();
        assert_eq!(
            index.ecs_for_map("00010").unwrap(),
            ["4.1.1.49", "2.7.1.199"]
        );
        assert_eq!(index.maps_for_ec("4.1.1.49").unwrap(), ["00010", "00020"]);
        assert_eq!(index.num_maps(), 2);
        assert_eq!(index.num_ecs(), 2);
    }

    #[test]
    fn test_descriptive_lines_skipped() {
        let data = "path:ec00010\tGlycolysis / Gluconeogenesis\npath:ec00010\tec:1.1.1.1";
        let index = EcIndex::from_reader(data.as_bytes()).unwrap();
        assert_eq!(index.ecs_for_map("00010").unwrap(), ["1.1.1.1"]);
    }

    #[test]
    fn test_repeated_pair() {
        let data = "path:ec00010\tec:1.1.1.1\npath:ec00010\tec:1.1.1.1";
        let index = EcIndex::from_reader(data.as_bytes()).unwrap();
        assert_eq!(index.ecs_for_map("00010").unwrap(), ["1.1.1.1", "1.1.1.1"]);
        assert_eq!(index.maps_for_ec("1.1.1.1").unwrap(), ["00010", "00010"]);
    }

    #[test]
    fn test_crlf() {
        let lf = "path:ec00010\tec:1.1.1.1\npath:ec00020\tec:1.2.4.2\n";
        let crlf = "path:ec00010\tec:1.1.1.1\r\npath:ec00020\tec:1.2.4.2\r\n";
        let a = EcIndex::from_reader(lf.as_bytes()).unwrap();
        let b = EcIndex::from_reader(crlf.as_bytes()).unwrap();
        assert_eq!(a.maps_to_ecs(), b.maps_to_ecs());
        assert_eq!(a.ecs_to_maps(), b.ecs_to_maps());
    }

    #[test]
    fn test_no_ec_lines() {
        let data = "path:ec01100\tMetabolic pathways";
        let index = EcIndex::from_reader(data.as_bytes()).unwrap();
        assert!(index.maps_to_ecs().is_empty());
        assert!(index.ecs_to_maps().is_empty());
    }

    #[test]
    fn test_placeholder_sets() {
        let data = "path:ec00592\tec:1.-.-.-\npath:ec00010\tec:1.1.1.1";
        let index = EcIndex::from_reader(data.as_bytes()).unwrap();
        assert_eq!(index.incomplete_ec_numbers().len(), 1);
        assert!(index.incomplete_ec_numbers().contains("1.-.-.-"));
        assert!(index.complete_ec_numbers().contains("1.1.1.1"));
        assert_eq!(index.all_ec_numbers().len(), 2);
    }

    #[test]
    fn test_unknown_keys() {
        let data = "path:ec00010\tec:1.1.1.1";
        let index = EcIndex::from_reader(data.as_bytes()).unwrap();
        assert_eq!(index.ecs_for_map("99999"), None);
        assert_eq!(index.maps_for_ec("9.9.9.9"), None);
    }

    #[test]
    #[should_panic]
    fn test_malformed_record() {
        let data = "path:ec00010\tec:1.1.1.1\nnot a record line";
        EcIndex::from_reader(data.as_bytes()).unwrap();
    }
}
