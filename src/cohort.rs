use std::path::{Path, PathBuf};

/// Population cohorts, each with its own loci input file and pair of
/// output files. The set is fixed; cohorts are processed independently
/// and in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cohort {
    AfricanAmerican,
    NonHispanicWhite,
    Hispanic,
}

impl Cohort {
    pub const ALL: [Cohort; 3] = [
        Cohort::AfricanAmerican,
        Cohort::NonHispanicWhite,
        Cohort::Hispanic,
    ];

    /// File-name prefix shared by the cohort's input and output files.
    pub fn prefix(&self) -> &'static str {
        match self {
            Cohort::AfricanAmerican => "AA",
            Cohort::NonHispanicWhite => "NHW",
            Cohort::Hispanic => "HISPANIC",
        }
    }

    pub fn loci_file(&self) -> String {
        format!("{}_individual_ancestry_loci.txt", self.prefix())
    }

    pub fn counts_file(&self) -> String {
        format!("{}_ancestry_counts.txt", self.prefix())
    }

    pub fn proportions_file(&self) -> String {
        format!("{}_ancestry_proportions.txt", self.prefix())
    }

    /// Resolve the cohort's fixed filenames against the run directories.
    pub fn paths(&self, input_dir: &Path, output_dir: &Path) -> CohortPaths {
        CohortPaths {
            loci: input_dir.join(self.loci_file()),
            counts: output_dir.join(self.counts_file()),
            proportions: output_dir.join(self.proportions_file()),
        }
    }
}

impl std::fmt::Display for Cohort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

pub struct CohortPaths {
    pub loci: PathBuf,
    pub counts: PathBuf,
    pub proportions: PathBuf,
}

#[test]
fn cohort_file_names() {
    assert_eq!(
        Cohort::AfricanAmerican.loci_file(),
        "AA_individual_ancestry_loci.txt"
    );
    assert_eq!(Cohort::NonHispanicWhite.counts_file(), "NHW_ancestry_counts.txt");
    assert_eq!(
        Cohort::Hispanic.proportions_file(),
        "HISPANIC_ancestry_proportions.txt"
    );
}

#[test]
fn cohort_paths_join_dirs() {
    let p = Cohort::AfricanAmerican.paths(Path::new("in"), Path::new("out"));
    assert_eq!(p.loci, Path::new("in/AA_individual_ancestry_loci.txt"));
    assert_eq!(p.counts, Path::new("out/AA_ancestry_counts.txt"));
    assert_eq!(p.proportions, Path::new("out/AA_ancestry_proportions.txt"));
}
