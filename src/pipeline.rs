use std::path::Path;

use crate::cohort::{Cohort, CohortPaths};
use crate::loci::{self, LocusReader};
use crate::output;
use crate::tally::{self, TallyTable};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0:?}")]
    Loci(#[from] loci::Error),
    #[error("{0:?}")]
    Tally(#[from] tally::Error),
    #[error("{0:?}")]
    Output(#[from] output::Error),
}

/// Per-cohort totals for progress reporting.
pub struct CohortSummary {
    pub n_samples: usize,
    pub n_records: u64,
}

/// One cohort, start to finish: read the loci file, tally, normalize,
/// write both tables. The loci file handle is dropped before the
/// outputs are written; the first error aborts the cohort with no
/// partial recovery.
pub fn run_cohort(paths: &CohortPaths) -> Result<CohortSummary> {
    let reader = LocusReader::from_path(&paths.loci)?;
    let table = TallyTable::accumulate(reader)?;
    let proportions = table.proportions()?;
    output::write_counts(&table, &paths.counts)?;
    output::write_proportions(&proportions, &paths.proportions)?;
    Ok(CohortSummary {
        n_samples: table.len(),
        n_records: table.n_records(),
    })
}

/// All cohorts in fixed order, each with its own tables. A failing
/// cohort stops the run; outputs already written for earlier cohorts
/// stay on disk.
pub fn run_all(input_dir: &Path, output_dir: &Path) -> Result<()> {
    for cohort in Cohort::ALL {
        run_cohort(&cohort.paths(input_dir, output_dir))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn output_files(dir: &Path) -> Vec<PathBuf> {
        Cohort::ALL
            .iter()
            .flat_map(|c| {
                let p = c.paths(Path::new("testdata"), dir);
                [p.counts, p.proportions]
            })
            .collect()
    }

    #[test]
    fn full_run_writes_six_tables() {
        let dir = tempfile::tempdir().unwrap();
        run_all(Path::new("testdata"), dir.path()).unwrap();
        for path in output_files(dir.path()) {
            assert!(path.is_file(), "missing {path:?}");
        }
        let counts = std::fs::read_to_string(dir.path().join("AA_ancestry_counts.txt")).unwrap();
        assert_eq!(
            counts,
            "sample_ID\tPEL\tCEU\tYRI\nS1\t1\t3\t0\nS2\t1\t0\t3\nS3\t1\t1\t0\n"
        );
        let props =
            std::fs::read_to_string(dir.path().join("AA_ancestry_proportions.txt")).unwrap();
        assert_eq!(
            props,
            "sample_ID\tPEL\tCEU\tYRI\nS1\t0.25\t0.75\t0.0\nS2\t0.25\t0.0\t0.75\nS3\t0.5\t0.5\t0.0\n"
        );
    }

    #[test]
    fn cohort_summary_totals() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Cohort::AfricanAmerican.paths(Path::new("testdata"), dir.path());
        let summary = run_cohort(&paths).unwrap();
        assert_eq!(summary.n_samples, 3);
        assert_eq!(summary.n_records, 5);
    }

    #[test]
    fn reruns_are_byte_identical() {
        let dir1 = tempfile::tempdir().unwrap();
        let dir2 = tempfile::tempdir().unwrap();
        run_all(Path::new("testdata"), dir1.path()).unwrap();
        run_all(Path::new("testdata"), dir2.path()).unwrap();
        for (a, b) in output_files(dir1.path())
            .into_iter()
            .zip(output_files(dir2.path()))
        {
            assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
        }
    }

    #[test]
    fn empty_cohort_writes_header_only_tables() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CohortPaths {
            loci: PathBuf::from("testdata/empty_loci.txt"),
            counts: dir.path().join("counts.txt"),
            proportions: dir.path().join("props.txt"),
        };
        let summary = run_cohort(&paths).unwrap();
        assert_eq!(summary.n_samples, 0);
        assert_eq!(summary.n_records, 0);
        let header = "sample_ID\tPEL\tCEU\tYRI\n";
        assert_eq!(std::fs::read_to_string(paths.counts).unwrap(), header);
        assert_eq!(std::fs::read_to_string(paths.proportions).unwrap(), header);
    }

    #[test]
    fn out_of_range_index_aborts_cohort_before_output() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CohortPaths {
            loci: PathBuf::from("testdata/bad_index_loci.txt"),
            counts: dir.path().join("counts.txt"),
            proportions: dir.path().join("props.txt"),
        };
        assert!(matches!(
            run_cohort(&paths),
            Err(Error::Tally(tally::Error::AncestryOutOfRange { .. }))
        ));
        assert!(!paths.counts.exists());
        assert!(!paths.proportions.exists());
    }

    #[test]
    fn malformed_line_aborts_cohort() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CohortPaths {
            loci: PathBuf::from("testdata/malformed_loci.txt"),
            counts: dir.path().join("counts.txt"),
            proportions: dir.path().join("props.txt"),
        };
        assert!(matches!(
            run_cohort(&paths),
            Err(Error::Tally(tally::Error::Loci(loci::Error::FieldCount {
                line: 2,
                found: 4,
                ..
            })))
        ));
    }

    #[test]
    fn missing_cohort_file_keeps_earlier_outputs() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        // only the first cohort's input is present
        std::fs::copy(
            "testdata/AA_individual_ancestry_loci.txt",
            input.path().join("AA_individual_ancestry_loci.txt"),
        )
        .unwrap();
        let err = run_all(input.path(), output.path()).unwrap_err();
        assert!(matches!(err, Error::Loci(loci::Error::Io { .. })));
        assert!(output.path().join("AA_ancestry_counts.txt").is_file());
        assert!(output.path().join("AA_ancestry_proportions.txt").is_file());
        assert!(!output.path().join("NHW_ancestry_counts.txt").exists());
    }
}
