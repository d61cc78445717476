// ancestry table per cohort
// - loci reader (5 columns, whitespace-delimited, no header)
// - tally per sample, one slot per reference panel
// - proportions from tally
// - counts/proportions writers (tab-delimited)

// Arguments
// - optional toml run config
// - input_dir / output_dir resolution

pub mod ancestry;
pub mod args;
pub mod cohort;
pub mod config;
pub mod loci;
pub mod output;
pub mod pipeline;
pub mod tally;
