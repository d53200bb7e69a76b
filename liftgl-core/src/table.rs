//!
//! This module defines the `AlleleTable`, the in-memory form of the IMGT/HLA allele history.
//!
//! The allele history is the oracle of every liftover: it maps each stable accession
//! (`HLA00053`) to the allele name it carried in each release (`A*24:03:01` in 3.20.0,
//! `A*24:03:01:01` in 3.25.0). It is loaded once and only ever read afterwards.
//!
use std::io::BufRead;
use std::path::Path;

use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
use log::info;

use crate::errors::{LiftoverError, Result};
use crate::utils::get_dynamic_reader;
use crate::version::VersionKey;

/// Cell values the history exports use for "not present in this release".
const ABSENT_CELLS: [&str; 4] = ["", "nan", "NaN", "NA"];

/// One release of the allele history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VersionColumn {
    names: HashMap<String, String>,
    ids_by_name: HashMap<String, Vec<String>>,
}

impl VersionColumn {
    fn insert(&mut self, id: &str, name: &str) {
        self.names.insert(id.to_owned(), name.to_owned());
        self.ids_by_name
            .entry(name.to_owned())
            .or_default()
            .push(id.to_owned());
    }

    ///
    /// Get the allele name an identifier carried in this release.
    ///
    /// # Returns:
    /// - the allele name without the `HLA-` prefix, or None if the identifier was absent
    ///
    pub fn allele_name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    ///
    /// Get every identifier whose allele name in this release equals `name`.
    ///
    /// A well formed release yields zero or one identifier.
    ///
    pub fn find(&self, name: &str) -> &[String] {
        self.ids_by_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of identifiers present in this release.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlleleTable {
    index_name: String,
    identifiers: HashSet<String>,
    versions: Vec<String>,
    columns: HashMap<String, VersionColumn>,
}

impl AlleleTable {
    ///
    /// Load an allele history file. Files ending in `.gz` are decompressed on the fly.
    ///
    /// # Arguments:
    /// - `path`: path to a tab separated allele history file
    ///
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = get_dynamic_reader(path).map_err(|err| LiftoverError::TableLoad {
            path: path.display().to_string(),
            reason: format!("{:#}", err),
        })?;

        let table = AlleleTable::from_reader(reader).map_err(|err| match err {
            LiftoverError::Io(err) => LiftoverError::TableLoad {
                path: path.display().to_string(),
                reason: err.to_string(),
            },
            other => other,
        })?;

        info!(
            "Loaded allele history {} ({} identifiers, {} versions)",
            path.display(),
            table.len(),
            table.versions.len()
        );

        Ok(table)
    }

    ///
    /// Parse an allele history from any buffered reader.
    ///
    /// The first non-comment line is the header: an index column name followed by compact
    /// version keys. Every following line is an identifier and its allele name per version.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = AlleleTable::default();
        let mut header_seen = false;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = idx + 1;
            let line = line.trim_end_matches(['\r', '\n']);

            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();

            if !header_seen {
                table.read_header(&fields, line_number)?;
                header_seen = true;
                continue;
            }

            table.read_row(&fields, line_number)?;
        }

        if !header_seen {
            return Err(LiftoverError::MalformedTable {
                line: 0,
                reason: "no header row found".to_string(),
            });
        }

        Ok(table)
    }

    fn read_header(&mut self, fields: &[&str], line_number: usize) -> Result<()> {
        if fields.len() < 2 {
            return Err(LiftoverError::MalformedTable {
                line: line_number,
                reason: "header has no version columns".to_string(),
            });
        }

        self.index_name = fields[0].to_string();
        for version in &fields[1..] {
            if version.is_empty() {
                return Err(LiftoverError::MalformedTable {
                    line: line_number,
                    reason: "header has an empty version column".to_string(),
                });
            }
            if self.columns.contains_key(*version) {
                return Err(LiftoverError::MalformedTable {
                    line: line_number,
                    reason: format!("version column {} appears twice", version),
                });
            }
            self.versions.push(version.to_string());
            self.columns
                .insert(version.to_string(), VersionColumn::default());
        }

        Ok(())
    }

    fn read_row(&mut self, fields: &[&str], line_number: usize) -> Result<()> {
        let width = self.versions.len() + 1;
        if fields.len() > width {
            return Err(LiftoverError::MalformedTable {
                line: line_number,
                reason: format!("row has {} fields but the header has {}", fields.len(), width),
            });
        }

        let id = fields[0];
        if id.is_empty() {
            return Err(LiftoverError::MalformedTable {
                line: line_number,
                reason: "row has no identifier".to_string(),
            });
        }

        // an identifier on two rows could give it two names in one release
        if !self.identifiers.insert(id.to_string()) {
            return Err(LiftoverError::DuplicateIdentifier { id: id.to_string() });
        }

        // short rows leave the trailing versions absent
        for (version, cell) in self.versions.iter().zip(&fields[1..]) {
            if ABSENT_CELLS.contains(cell) {
                continue;
            }
            if let Some(column) = self.columns.get_mut(version) {
                column.insert(id, cell);
            }
        }

        Ok(())
    }

    /// Name of the header's index column, e.g. `HLA_ID`.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Compact version keys in header order.
    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    pub fn has_version(&self, version: &VersionKey) -> bool {
        self.columns.contains_key(version.key())
    }

    ///
    /// Get the identifier to allele name mapping of a release.
    ///
    /// # Returns:
    /// - the release's column, or None if the table has no such version
    ///
    pub fn column(&self, version: &VersionKey) -> Option<&VersionColumn> {
        self.columns.get(version.key())
    }

    ///
    /// Reverse lookup: every identifier whose allele name in `version` equals `allele_name`.
    ///
    /// `allele_name` is given without the `HLA-` prefix. Unknown versions yield no identifiers.
    ///
    pub fn find(&self, allele_name: &str, version: &VersionKey) -> &[String] {
        self.column(version)
            .map(|column| column.find(allele_name))
            .unwrap_or_default()
    }

    /// Forward lookup: the allele name `id` carried in `version`, without the `HLA-` prefix.
    pub fn allele_name(&self, id: &str, version: &VersionKey) -> Option<&str> {
        self.column(version).and_then(|column| column.allele_name(id))
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

impl TryFrom<&Path> for AlleleTable {
    type Error = LiftoverError;

    fn try_from(value: &Path) -> Result<Self> {
        AlleleTable::from_path(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn history() -> &'static str {
        "HLA_ID\t3250\t3200\n\
         HLA00001\tA*01:01:01:01\tA*01:01:01:01\n\
         HLA00053\tA*24:03:01:01\tA*24:03:01\n\
         HLA10555\t\tA*23:69\n\
         HLA14804\tA*24:03:01:02\n"
    }

    fn v(version: &str) -> VersionKey {
        VersionKey::from_dotted(version).unwrap()
    }

    #[rstest]
    fn test_parse_history(history: &str) {
        let table = AlleleTable::from_reader(Cursor::new(history)).unwrap();

        assert_eq!(table.index_name(), "HLA_ID");
        assert_eq!(table.versions(), &["3250".to_string(), "3200".to_string()]);
        assert_eq!(table.len(), 4);
        assert_eq!(table.column(&v("3.25.0")).unwrap().len(), 3);
        assert_eq!(table.column(&v("3.20.0")).unwrap().len(), 3);
    }

    #[rstest]
    fn test_forward_and_reverse_lookup(history: &str) {
        let table = AlleleTable::from_reader(Cursor::new(history)).unwrap();

        assert_eq!(table.find("A*24:03:01", &v("3.20.0")), &["HLA00053".to_string()]);
        assert_eq!(table.allele_name("HLA00053", &v("3.25.0")), Some("A*24:03:01:01"));
        assert_eq!(table.allele_name("HLA10555", &v("3.25.0")), None);
        assert_eq!(table.allele_name("HLA14804", &v("3.20.0")), None);
        assert!(table.find("A*24:03:01", &v("3.25.0")).is_empty());
    }

    #[rstest]
    fn test_unknown_version(history: &str) {
        let table = AlleleTable::from_reader(Cursor::new(history)).unwrap();

        assert!(!table.has_version(&v("3.1.0")));
        assert!(table.column(&v("3.1.0")).is_none());
        assert!(table.find("A*01:01:01:01", &v("3.1.0")).is_empty());
    }

    #[rstest]
    fn test_comments_blank_lines_and_crlf() {
        let history = "# file: Allelelist_history.txt\r\n\r\nHLA_ID\t3250\r\nHLA00001\tA*01:01:01:01\r\n";
        let table = AlleleTable::from_reader(Cursor::new(history)).unwrap();

        assert_eq!(table.versions(), &["3250".to_string()]);
        assert_eq!(table.allele_name("HLA00001", &v("3.25.0")), Some("A*01:01:01:01"));
    }

    #[rstest]
    fn test_reverse_lookup_reports_every_candidate() {
        let history = "HLA_ID\t3250\nHLA00001\tA*01:01\nHLA00002\tA*01:01\n";
        let table = AlleleTable::from_reader(Cursor::new(history)).unwrap();

        assert_eq!(
            table.find("A*01:01", &v("3.25.0")),
            &["HLA00001".to_string(), "HLA00002".to_string()]
        );
    }

    #[rstest]
    fn test_duplicate_identifier_is_rejected() {
        let history = "HLA_ID\t3250\nHLA00001\tA*01:01\nHLA00001\tA*01:02\n";
        let result = AlleleTable::from_reader(Cursor::new(history));

        assert!(matches!(
            result,
            Err(LiftoverError::DuplicateIdentifier { id }) if id == "HLA00001"
        ));
    }

    #[rstest]
    #[case("")]
    #[case("# only a comment\n")]
    #[case("HLA_ID\n")]
    #[case("HLA_ID\t3250\t3250\n")]
    #[case("HLA_ID\t3250\nHLA00001\tA*01:01\tA*01:02\n")]
    #[case("HLA_ID\t3250\n\tA*01:01\n")]
    fn test_malformed_tables(#[case] history: &str) {
        let result = AlleleTable::from_reader(Cursor::new(history));
        assert!(matches!(result, Err(LiftoverError::MalformedTable { .. })));
    }

    #[rstest]
    fn test_missing_file_is_a_table_load_error() {
        let result = AlleleTable::from_path("no/such/Allelelist_history.txt");
        match result {
            Err(LiftoverError::TableLoad { path, .. }) => {
                assert_eq!(path, "no/such/Allelelist_history.txt")
            }
            other => panic!("expected TableLoad, got {:?}", other),
        }
    }
}
