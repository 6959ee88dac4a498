use regex::Regex;

use crate::errors::{EcListError, Result};

/// Line-level extraction for ec.list records.
///
/// A record line looks like `path:ec00010   ec:4.1.1.49`: the leading token
/// carries the map number, the remainder is either an EC annotation or
/// descriptive text.
pub(crate) struct LineParser {
    record: Regex,
    ec_shape: Regex,
}

impl LineParser {
    pub(crate) fn new() -> Self {
        Self {
            record: Regex::new(r"^path:ec([0-9]+)\s(.*)$").unwrap(),
            ec_shape: Regex::new(r"ec:(?:[0-9]+|-)\.(?:[0-9]+|-)\.(?:[0-9]+|-)\.(?:[0-9]+|-)")
                .unwrap(),
        }
    }

    /// Returns the metabolic map number of a record line.
    pub(crate) fn map_number<'a>(&self, line: &'a str) -> Result<&'a str> {
        let caps = self
            .record
            .captures(line)
            .ok_or_else(|| Self::invalid_record(line))?;
        Ok(caps.get(1).unwrap().as_str())
    }

    /// Returns the map data of a record line, with leading whitespace
    /// stripped.
    pub(crate) fn map_data<'a>(&self, line: &'a str) -> Result<&'a str> {
        let caps = self
            .record
            .captures(line)
            .ok_or_else(|| Self::invalid_record(line))?;
        Ok(caps.get(2).unwrap().as_str().trim_start())
    }

    /// Returns the EC number of a record line: the map data with every
    /// `ec:` marker removed and all whitespace stripped.
    pub(crate) fn ec_number(&self, line: &str) -> Result<String> {
        let data = self.map_data(line)?;
        Ok(data.replace("ec:", "").split_whitespace().collect())
    }

    /// Tests whether map data carries an EC annotation.
    ///
    /// Each of the four dot-separated components must start with digits or
    /// the `-` placeholder; trailing text after the fourth component does
    /// not disqualify the data.
    pub(crate) fn is_ec_data(&self, data: &str) -> bool {
        self.ec_shape.is_match(data)
    }

    fn invalid_record(line: &str) -> EcListError {
        let msg = format!(
            "A record must consist of path:ec<digits>, whitespace, and data, {line}",
        );
        EcListError::invalid_format("ec.list", msg)
    }
}
