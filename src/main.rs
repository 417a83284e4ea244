use config::ReportConfig;
use perf_data::PERF_DATA_OMP_MXM;
use report::RunOutcome;
use std::error::Error;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod perf;
mod perf_data;
mod report;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("perf_report=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    match report::run(&PERF_DATA_OMP_MXM, &ReportConfig::default())? {
        RunOutcome::NoData => println!("{}", report::NO_DATA_MESSAGE),
        RunOutcome::Written { plot, csv } => {
            println!("Plots saved to {}", plot.display());
            tracing::info!("metrics saved to {}", csv.display());
        }
    }

    Ok(())
}
