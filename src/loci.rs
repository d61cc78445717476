use itertools::Itertools;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error, source: {source:?}, path: {path:?}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("{path:?}, line {line}: expected 5 whitespace-separated fields, found {found}")]
    FieldCount {
        path: PathBuf,
        line: usize,
        found: usize,
    },
    #[error("{path:?}, line {line}: cannot parse column {column} as an ancestry index")]
    ParseAncestry {
        path: PathBuf,
        line: usize,
        column: &'static str,
    },
}

/// One line of a loci file. `allele_id` and `genotype` are carried
/// through unparsed; the tally stage only consumes the sample id and
/// the two ancestry indices. Indices are raw here and range-checked by
/// the tally stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocusRecord {
    pub sample_id: String,
    pub allele_id: String,
    pub ancestry_1: u8,
    pub ancestry_2: u8,
    pub genotype: String,
}

impl LocusRecord {
    fn parse(s: &str, path: &Path, line: usize) -> Result<Self> {
        let (sample_id, allele_id, anc1, anc2, genotype) = s
            .split_whitespace()
            .collect_tuple()
            .ok_or_else(|| Error::FieldCount {
                path: path.to_owned(),
                line,
                found: s.split_whitespace().count(),
            })?;
        // a negative index fails here rather than wrapping around
        let ancestry_1: u8 = anc1.parse().map_err(|_| Error::ParseAncestry {
            path: path.to_owned(),
            line,
            column: "ancestry_1",
        })?;
        let ancestry_2: u8 = anc2.parse().map_err(|_| Error::ParseAncestry {
            path: path.to_owned(),
            line,
            column: "ancestry_2",
        })?;
        Ok(Self {
            sample_id: sample_id.to_owned(),
            allele_id: allele_id.to_owned(),
            ancestry_1,
            ancestry_2,
            genotype: genotype.to_owned(),
        })
    }
}

/// Line-by-line reader over one cohort's loci file. The file handle
/// lives as long as the reader and is released when the cohort run
/// drops it.
pub struct LocusReader {
    lines: Lines<BufReader<File>>,
    path: PathBuf,
    line: usize,
}

impl LocusReader {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let p = path.as_ref();
        let f = File::open(p).map(BufReader::new).map_err(|source| Error::Io {
            source,
            path: p.to_owned(),
        })?;
        Ok(Self {
            lines: f.lines(),
            path: p.to_owned(),
            line: 0,
        })
    }
}

impl Iterator for LocusReader {
    type Item = Result<LocusRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(source) => {
                return Some(Err(Error::Io {
                    source,
                    path: self.path.clone(),
                }))
            }
        };
        self.line += 1;
        Some(LocusRecord::parse(&line, &self.path, self.line))
    }
}

#[cfg(test)]
fn parse_one(s: &str) -> Result<LocusRecord> {
    LocusRecord::parse(s, Path::new("test.txt"), 1)
}

#[test]
fn parse_locus_line() {
    let rec = parse_one("S1 rs123 0 1 0/1").unwrap();
    assert_eq!(rec.sample_id, "S1");
    assert_eq!(rec.allele_id, "rs123");
    assert_eq!(rec.ancestry_1, 0);
    assert_eq!(rec.ancestry_2, 1);
    assert_eq!(rec.genotype, "0/1");
}

#[test]
fn parse_tolerates_any_whitespace() {
    let rec = parse_one("S1\trs123   2\t 2  1/1").unwrap();
    assert_eq!(rec.ancestry_1, 2);
    assert_eq!(rec.ancestry_2, 2);
}

#[test]
fn parse_rejects_wrong_field_count() {
    assert!(matches!(
        parse_one("S1 rs123 0 1"),
        Err(Error::FieldCount { found: 4, .. })
    ));
    assert!(matches!(
        parse_one("S1 rs123 0 1 0/1 extra"),
        Err(Error::FieldCount { found: 6, .. })
    ));
    assert!(matches!(
        parse_one(""),
        Err(Error::FieldCount { found: 0, .. })
    ));
}

#[test]
fn parse_rejects_non_integer_index() {
    assert!(matches!(
        parse_one("S1 rs123 x 1 0/1"),
        Err(Error::ParseAncestry {
            column: "ancestry_1",
            ..
        })
    ));
    // Python-style negative indexing must not survive the port
    assert!(matches!(
        parse_one("S1 rs123 0 -1 0/1"),
        Err(Error::ParseAncestry {
            column: "ancestry_2",
            ..
        })
    ));
}

#[test]
fn read_loci_file() {
    let records: Vec<_> = LocusReader::from_path("testdata/AA_individual_ancestry_loci.txt")
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].sample_id, "S1");
}

#[test]
fn missing_loci_file_is_io_error() {
    assert!(matches!(
        LocusReader::from_path("testdata/no_such_file.txt"),
        Err(Error::Io { .. })
    ));
}
