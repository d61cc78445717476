use std::fs::File;
use std::path::{Path, PathBuf};

use crate::ancestry::Ancestry;
use crate::tally::{ProportionTable, TallyTable};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error, source: {source:?}, path: {path:?}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("csv error: {0:?}")]
    Csv(#[from] csv::Error),
}

fn tsv_writer(path: &Path) -> Result<csv::Writer<File>> {
    // File::create truncates an existing output file
    let f = File::create(path).map_err(|source| Error::Io {
        source,
        path: path.to_owned(),
    })?;
    let mut wtr = csv::WriterBuilder::new().delimiter(b'\t').from_writer(f);
    let mut header = vec!["sample_ID"];
    header.extend(Ancestry::ALL.iter().map(|a| a.label()));
    wtr.write_record(&header)?;
    Ok(wtr)
}

fn finish(mut wtr: csv::Writer<File>, path: &Path) -> Result<()> {
    wtr.flush().map_err(|source| Error::Io {
        source,
        path: path.to_owned(),
    })
}

/// Write the tally as a tab-delimited table, one sample per row in
/// table order, counts as plain integers.
pub fn write_counts(table: &TallyTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = tsv_writer(path)?;
    for (sample, counts) in table.iter() {
        wtr.serialize((sample, counts[0], counts[1], counts[2]))?;
    }
    finish(wtr, path)
}

/// Write the proportions with shortest-roundtrip float formatting; no
/// fixed precision is applied.
pub fn write_proportions(table: &ProportionTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = tsv_writer(path)?;
    for (sample, frac) in table.iter() {
        wtr.serialize((sample, frac[0], frac[1], frac[2]))?;
    }
    finish(wtr, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loci::LocusRecord;

    fn two_record_table() -> TallyTable {
        let recs = [("rs123", 0, 1), ("rs456", 1, 1)].map(|(allele, a1, a2)| {
            Ok(LocusRecord {
                sample_id: "S1".to_owned(),
                allele_id: allele.to_owned(),
                ancestry_1: a1,
                ancestry_2: a2,
                genotype: "0/1".to_owned(),
            })
        });
        TallyTable::accumulate(recs.into_iter()).unwrap()
    }

    #[test]
    fn counts_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counts.txt");
        write_counts(&two_record_table(), &path).unwrap();
        let s = std::fs::read_to_string(&path).unwrap();
        assert_eq!(s, "sample_ID\tPEL\tCEU\tYRI\nS1\t1\t3\t0\n");
    }

    #[test]
    fn proportions_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("props.txt");
        let props = two_record_table().proportions().unwrap();
        write_proportions(&props, &path).unwrap();
        let s = std::fs::read_to_string(&path).unwrap();
        assert_eq!(s, "sample_ID\tPEL\tCEU\tYRI\nS1\t0.25\t0.75\t0.0\n");
    }

    #[test]
    fn empty_table_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counts.txt");
        write_counts(&TallyTable::new(), &path).unwrap();
        let s = std::fs::read_to_string(&path).unwrap();
        assert_eq!(s, "sample_ID\tPEL\tCEU\tYRI\n");
    }

    #[test]
    fn existing_output_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counts.txt");
        std::fs::write(&path, "stale content\nstale content\nstale content\n").unwrap();
        write_counts(&two_record_table(), &path).unwrap();
        let s = std::fs::read_to_string(&path).unwrap();
        assert_eq!(s, "sample_ID\tPEL\tCEU\tYRI\nS1\t1\t3\t0\n");
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("counts.txt");
        assert!(matches!(
            write_counts(&TallyTable::new(), &path),
            Err(Error::Io { .. })
        ));
    }
}
