use std::collections::HashMap;

use crate::ancestry::{Ancestry, NUM_ANCESTRIES};
use crate::loci::{self, LocusRecord};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0:?}")]
    Loci(#[from] loci::Error),
    #[error("record {record}, sample {sample:?}: ancestry index {index} is outside the panel set")]
    AncestryOutOfRange {
        sample: String,
        record: usize,
        index: u8,
    },
    #[error("sample {sample:?} has an all-zero tally")]
    ZeroTotal { sample: String },
}

/// Per-sample allele counts, one slot per reference panel, kept in
/// order of first appearance in the input. Sample ids are stored once
/// in `ids` with an index map for lookup; `rows` is parallel to `ids`.
#[derive(Debug, Default, Clone)]
pub struct TallyTable {
    ids: Vec<String>,
    idx: HashMap<String, u32>,
    rows: Vec<[u64; NUM_ANCESTRIES]>,
}

impl TallyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit get-or-insert: an unseen sample id gets a zeroed row
    /// appended at the end of the iteration order.
    pub fn entry(&mut self, sample_id: &str) -> &mut [u64; NUM_ANCESTRIES] {
        let i = match self.idx.get(sample_id).copied() {
            Some(i) => i as usize,
            None => {
                let i = self.ids.len();
                self.idx.insert(sample_id.to_owned(), i as u32);
                self.ids.push(sample_id.to_owned());
                self.rows.push([0; NUM_ANCESTRIES]);
                i
            }
        };
        &mut self.rows[i]
    }

    /// Add one locus record: both ancestry slots get one increment,
    /// the same slot twice when the indices agree. Repeated
    /// (sample, allele) pairs are counted every time they appear.
    pub fn add_record(&mut self, record: usize, rec: &LocusRecord) -> Result<()> {
        let a1 = Ancestry::from_index(rec.ancestry_1).ok_or_else(|| Error::AncestryOutOfRange {
            sample: rec.sample_id.clone(),
            record,
            index: rec.ancestry_1,
        })?;
        let a2 = Ancestry::from_index(rec.ancestry_2).ok_or_else(|| Error::AncestryOutOfRange {
            sample: rec.sample_id.clone(),
            record,
            index: rec.ancestry_2,
        })?;
        let row = self.entry(&rec.sample_id);
        row[a1.index()] += 1;
        row[a2.index()] += 1;
        Ok(())
    }

    /// Consume one cohort's record stream fully. The first bad record
    /// aborts the cohort; nothing is skipped or retried.
    pub fn accumulate(records: impl Iterator<Item = loci::Result<LocusRecord>>) -> Result<Self> {
        let mut table = Self::new();
        for (i, rec) in records.enumerate() {
            table.add_record(i + 1, &rec?)?;
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, sample_id: &str) -> Option<&[u64; NUM_ANCESTRIES]> {
        self.idx.get(sample_id).map(|i| &self.rows[*i as usize])
    }

    /// Rows in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u64; NUM_ANCESTRIES])> {
        self.ids.iter().map(|s| s.as_str()).zip(self.rows.iter())
    }

    /// Total number of loci records consumed. Every record contributes
    /// exactly two increments.
    pub fn n_records(&self) -> u64 {
        self.rows
            .iter()
            .map(|row| row.iter().sum::<u64>())
            .sum::<u64>()
            / 2
    }

    /// Normalize counts into per-sample fractions, keeping the key set
    /// and iteration order. A zero row cannot come out of `accumulate`;
    /// seeing one here means the table was built inconsistently.
    pub fn proportions(&self) -> Result<ProportionTable> {
        let mut rows = Vec::with_capacity(self.rows.len());
        for (sample, counts) in self.iter() {
            let total: u64 = counts.iter().sum();
            if total == 0 {
                return Err(Error::ZeroTotal {
                    sample: sample.to_owned(),
                });
            }
            let mut frac = [0.0f64; NUM_ANCESTRIES];
            for (f, c) in frac.iter_mut().zip(counts.iter()) {
                *f = *c as f64 / total as f64;
            }
            rows.push(frac);
        }
        Ok(ProportionTable {
            ids: self.ids.clone(),
            rows,
        })
    }
}

/// Per-sample ancestry fractions, same ids and order as the tally the
/// table was derived from. Each row sums to 1.
#[derive(Debug, Clone)]
pub struct ProportionTable {
    ids: Vec<String>,
    rows: Vec<[f64; NUM_ANCESTRIES]>,
}

impl ProportionTable {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, sample_id: &str) -> Option<&[f64; NUM_ANCESTRIES]> {
        let i = self.ids.iter().position(|s| s == sample_id)?;
        Some(&self.rows[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64; NUM_ANCESTRIES])> {
        self.ids.iter().map(|s| s.as_str()).zip(self.rows.iter())
    }
}
