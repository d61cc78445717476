use ancestry_rs::args::Arguments;
use ancestry_rs::cohort::Cohort;
use ancestry_rs::pipeline;
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Arguments::parse();
    let (input_dir, output_dir) = cli.resolve_dirs()?;

    if cli.print_progress {
        eprintln!("{:#?}", &cli);
    }

    let start = std::time::Instant::now();
    for cohort in Cohort::ALL {
        let summary = pipeline::run_cohort(&cohort.paths(&input_dir, &output_dir))?;
        if cli.print_progress {
            eprintln!(
                "PROGRESS\t{}\t{}\t{}\t{}",
                cohort,
                summary.n_records,
                summary.n_samples,
                start.elapsed().as_secs(),
            );
        }
    }
    Ok(())
}
