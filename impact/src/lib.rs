//! # Impact Effects
//!
//! `impact` provides first-order asteroid impact effect estimates:
//! kinetic energy, TNT-equivalent yield, transient crater diameter,
//! and seismic magnitude, with an optional crater footprint polygon
//! via the `footprint` crate.

mod error;
mod neo;
mod simulation;

pub use {
    crate::{
        error::ImpactError,
        neo::{Asteroid, Orbit},
        simulation::{ImpactBuilder, ImpactReport},
    },
    footprint, geo,
};
