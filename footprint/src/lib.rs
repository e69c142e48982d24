//! Crater footprint polygons in geographic coordinates.
//!
//! The accurate footprint of an impact crater comes from terrain data;
//! deriving it requires parsing a digital elevation model, which this
//! crate deliberately does not do. What it does provide is the
//! deterministic circle approximation used while that geometry is
//! unavailable: a closed 37-point ring around a center, with physical
//! radius converted to degrees on the mean-radius sphere.

mod circle;
mod constants;
mod feature;

pub use crate::{
    circle::{circle_footprint, CirclePoints},
    constants::MEAN_EARTH_RADIUS,
    feature::{Feature, Geometry, Properties},
};
pub use geo;
