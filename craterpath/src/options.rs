use anyhow::{anyhow, Error as AnyError};
use clap::{Parser, Subcommand};
use geo::geometry::Coord;
use std::str::FromStr;

/// Estimate asteroid impact effects and crater footprints.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print a circular crater footprint as a polygon feature.
    Footprint {
        /// Crater center "lat,lon".
        #[arg(long)]
        center: LatLon,

        /// Crater diameter, in meters.
        #[arg(long)]
        diameter: f64,
    },

    /// Print estimated impact effects.
    Simulate {
        /// Impactor diameter, in meters.
        #[arg(long, default_value_t = 100.0)]
        diameter: f64,

        /// Approach velocity, in km/s.
        #[arg(long, default_value_t = 20.0)]
        velocity: f64,

        /// Impactor bulk density, in kg/m³.
        #[arg(long, default_value_t = 3000.0)]
        density: f64,

        /// Deflection delta-v, in km/s.
        #[arg(long, default_value_t = 0.0)]
        deflection: f64,

        /// Impact site "lat,lon"; when given, the output includes the
        /// crater footprint feature.
        #[arg(long)]
        center: Option<LatLon>,
    },

    /// Print a near-earth-object record.
    Neo {
        /// NeoWs asteroid ID.
        id: Option<String>,
    },
}

#[derive(Clone, Debug, Copy)]
pub struct LatLon(pub Coord<f64>);

impl FromStr for LatLon {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (lat_str, lon_str) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("not a valid lat,lon"))?;
        let lat = f64::from_str(lat_str)?;
        let lon = f64::from_str(lon_str)?;
        Ok(Self(Coord { y: lat, x: lon }))
    }
}
