use crate::error::ImpactError;
use footprint::{circle_footprint, Feature};
use geo::Coord;
use log::debug;
use serde::Serialize;
use std::f64::consts::PI;

/// 1 ton of TNT, in joules.
const JOULES_PER_TON_TNT: f64 = 4.184e9;

/// Leading constant of the transient crater power law for earth.
const CRATER_SCALING_K: f64 = 1.8;

/// Reference energy for the crater power law, in joules.
const CRATER_REFERENCE_ENERGY_J: f64 = 1e9;

/// Effective velocity floor after deflection, in km/s.
const MIN_IMPACT_VELOCITY_KMS: f64 = 0.1;

/// First-order effects of an asteroid impact.
///
/// The impactor is modeled as a uniform sphere; crater size follows a
/// simplified quarter-power law in kinetic energy, and the seismic
/// magnitude is the standard moment-magnitude energy relation. These
/// are order-of-magnitude estimates, not a hydrocode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactReport {
    /// Kinetic energy at impact, in joules.
    pub kinetic_energy_j: f64,

    /// Yield expressed in tons of TNT.
    pub tnt_equivalent_tons: f64,

    /// Estimated transient crater diameter, in meters.
    pub crater_diameter_m: f64,

    /// Estimated seismic moment magnitude.
    pub seismic_magnitude_mw: f64,
}

impl ImpactReport {
    pub fn builder() -> ImpactBuilder {
        ImpactBuilder {
            diameter_m: None,
            velocity_kms: None,
            density_kgm3: None,
            deflection_kms: 0.0,
        }
    }

    /// Approximates the footprint of the estimated crater centered on
    /// the impact site.
    pub fn footprint(&self, center: Coord<f64>) -> Feature {
        circle_footprint(center, self.crater_diameter_m)
    }
}

pub struct ImpactBuilder {
    /// Impactor diameter in meters (required).
    diameter_m: Option<f64>,

    /// Approach velocity in km/s (required).
    velocity_kms: Option<f64>,

    /// Impactor bulk density in kg/m³ (required).
    density_kgm3: Option<f64>,

    /// Deflection delta-v in km/s (defaults to 0).
    deflection_kms: f64,
}

impl ImpactBuilder {
    /// Impactor diameter in meters (required).
    #[must_use]
    pub fn diameter(mut self, meters: f64) -> Self {
        self.diameter_m = Some(meters);
        self
    }

    /// Approach velocity in km/s (required).
    #[must_use]
    pub fn velocity(mut self, kms: f64) -> Self {
        self.velocity_kms = Some(kms);
        self
    }

    /// Impactor bulk density in kg/m³ (required).
    #[must_use]
    pub fn density(mut self, kgm3: f64) -> Self {
        self.density_kgm3 = Some(kgm3);
        self
    }

    /// Deflection delta-v in km/s (defaults to 0).
    ///
    /// Subtracted from the approach velocity, floored at 0.1 km/s so
    /// a large burn never yields a negative or zero impact velocity.
    #[must_use]
    pub fn deflection(mut self, kms: f64) -> Self {
        self.deflection_kms = kms;
        self
    }

    pub fn build(&self) -> Result<ImpactReport, ImpactError> {
        let diameter_m = self.diameter_m.ok_or(ImpactError::Builder("diameter"))?;
        let velocity_kms = self.velocity_kms.ok_or(ImpactError::Builder("velocity"))?;
        let density_kgm3 = self.density_kgm3.ok_or(ImpactError::Builder("density"))?;

        let impact_velocity_kms = (velocity_kms - self.deflection_kms).max(MIN_IMPACT_VELOCITY_KMS);
        let radius_m = diameter_m / 2.0;
        let mass_kg = 4.0 / 3.0 * PI * radius_m.powi(3) * density_kgm3;
        let velocity_ms = impact_velocity_kms * 1000.0;
        let kinetic_energy_j = 0.5 * mass_kg * velocity_ms.powi(2);
        debug!("impactor mass {mass_kg} kg at {impact_velocity_kms} km/s: {kinetic_energy_j} J");

        Ok(ImpactReport {
            kinetic_energy_j,
            tnt_equivalent_tons: kinetic_energy_j / JOULES_PER_TON_TNT,
            crater_diameter_m: CRATER_SCALING_K
                * (kinetic_energy_j / CRATER_REFERENCE_ENERGY_J).powf(0.25),
            seismic_magnitude_mw: 2.0 / 3.0 * kinetic_energy_j.log10() - 3.2,
        })
    }
}
