mod options;

use anyhow::Error as AnyError;
use clap::Parser;
use footprint::{circle_footprint, Feature};
use impact::{Asteroid, ImpactReport};
use log::warn;
use options::{Cli, Command as CliCmd};
use serde::Serialize;

fn main() -> Result<(), AnyError> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        CliCmd::Footprint { center, diameter } => {
            print_json(&circle_footprint(center.0, diameter))?;
        }
        CliCmd::Simulate {
            diameter,
            velocity,
            density,
            deflection,
            center,
        } => {
            let report = ImpactReport::builder()
                .diameter(diameter)
                .velocity(velocity)
                .density(density)
                .deflection(deflection)
                .build()?;
            match center {
                None => print_json(&report)?,
                Some(center) => {
                    let footprint = report.footprint(center.0);
                    print_json(&SitedReport { report, footprint })?;
                }
            }
        }
        CliCmd::Neo { id } => {
            if let Some(id) = id {
                warn!("live NeoWs lookup is not implemented; returning the placeholder record instead of {id}");
            }
            print_json(&Asteroid::placeholder())?;
        }
    }
    Ok(())
}

/// An impact report with the crater footprint at the impact site.
#[derive(Serialize)]
struct SitedReport {
    #[serde(flatten)]
    report: ImpactReport,
    footprint: Feature,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AnyError> {
    let stdout = std::io::stdout().lock();
    serde_json::to_writer(stdout, value)?;
    println!();
    Ok(())
}
