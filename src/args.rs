use clap::Parser;
use std::path::PathBuf;

use crate::config::{self, RunConfig};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, name = "ancestry-rs", color=clap::ColorChoice::Always, styles=get_styles())]
pub struct Arguments {
    /// Optional: directory holding the cohort loci files
    /// (AA/NHW/HISPANIC_individual_ancestry_loci.txt); defaults to the
    /// working directory. Format for loci files: whitespace-delimited
    /// text, five columns per line, no header: sample id, allele id,
    /// first ancestry index, second ancestry index, genotype. Ancestry
    /// indices name the PEL/CEU/YRI reference panels as 0/1/2. Only the
    /// sample id and the two indices are consumed here.
    #[arg(short = 'i', long, help_heading = "input data")]
    pub input_dir: Option<PathBuf>,

    /// Optional: directory the counts and proportions tables are
    /// written to; defaults to the working directory. Output filenames
    /// are fixed per cohort.
    #[arg(short = 'o', long, help_heading = "output data")]
    pub output_dir: Option<PathBuf>,

    /// Optional: toml run config with `input_dir` / `output_dir` keys.
    /// Command-line directories take precedence over the config file.
    #[arg(short = 'c', long, help_heading = "input data")]
    pub config: Option<PathBuf>,

    /// print per-cohort progress lines to stderr
    #[arg(long, default_value_t = false, help_heading = "output option")]
    pub print_progress: bool,
}

impl Arguments {
    pub fn new_for_test() -> Self {
        Self {
            input_dir: Some(PathBuf::from("testdata")),
            output_dir: None,
            config: None,
            print_progress: false,
        }
    }

    /// Resolve the run directories: command line first, then the config
    /// file, then the working directory.
    pub fn resolve_dirs(&self) -> config::Result<(PathBuf, PathBuf)> {
        let config = match self.config.as_ref() {
            Some(path) => RunConfig::from_toml_file(path)?,
            None => RunConfig::default(),
        };
        let input_dir = self
            .input_dir
            .clone()
            .or(config.input_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let output_dir = self
            .output_dir
            .clone()
            .or(config.output_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok((input_dir, output_dir))
    }
}

pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))),
        )
}
