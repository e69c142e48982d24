use crate::{constants::MEAN_EARTH_RADIUS, feature::Feature};
use geo::{Coord, CoordFloat, Point};
use num_traits::FloatConst;
use std::ops::Range;

/// Number of distinct rim points on the ring.
const RIM_POINTS: usize = 36;

/// Rim points plus the repeated closing point.
const RING_LEN: usize = RIM_POINTS + 1;

/// An iterator over the rim of a circle of physical radius, expressed
/// in lon/lat degrees.
///
/// Yields exactly 37 points: 36 distinct rim points starting due east
/// of `center` and walking counter-clockwise in angle space, plus a
/// copy of the first point to close the ring. North-south offsets use
/// the arc-length approximation `degrees = (meters / R) · (180 / π)`;
/// east-west offsets additionally divide by the cosine of the center
/// latitude (equirectangular approximation, no ellipsoid model).
///
/// The iterator is total over finite inputs. At `|latitude| = 90` the
/// cosine term vanishes and longitudes blow up to physically
/// meaningless values (non-finite when the rounded cosine is exactly
/// zero); a zero diameter collapses every point onto the center; a
/// negative diameter mirrors the ring. None of these are rejected.
#[derive(Debug)]
pub struct CirclePoints<T: CoordFloat = f64> {
    center: Coord<T>,
    radius_m: T,
    cos_lat: T,
    earth_radius: T,
    first: Option<Point<T>>,
    range: Range<usize>,
}

impl<T: CoordFloat> CirclePoints<T> {
    /// Returns a new CirclePoints for a circle of `diameter_m` meters
    /// centered on `center`.
    pub fn new(center: Coord<T>, diameter_m: T) -> Self {
        let two = T::one() + T::one();
        Self {
            center,
            radius_m: diameter_m / two,
            cos_lat: center.y.to_radians().cos(),
            earth_radius: T::from(MEAN_EARTH_RADIUS).unwrap(),
            first: None,
            range: 0..RING_LEN,
        }
    }
}

impl<T> Iterator for CirclePoints<T>
where
    T: CoordFloat + FloatConst,
{
    type Item = Point<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.range.next()?;
        if n == RING_LEN - 1 {
            // The closing point is a copy of the first, not a
            // recomputation, so closure is exact.
            return self.first;
        }
        let angle = T::TAU() * T::from(n)? / T::from(RIM_POINTS)?;
        let dlat = (self.radius_m * angle.cos() / self.earth_radius).to_degrees();
        let dlng =
            (self.radius_m * angle.sin() / (self.earth_radius * self.cos_lat)).to_degrees();
        let point = Point::new(self.center.x + dlng, self.center.y + dlat);
        if n == 0 {
            self.first = Some(point);
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.range.len(), Some(self.range.len()))
    }
}

impl<T> ExactSizeIterator for CirclePoints<T>
where
    T: CoordFloat + FloatConst,
{
    fn len(&self) -> usize {
        self.range.len()
    }
}

/// Approximates a crater footprint as a circular polygon feature.
///
/// This is a stand-in for footprint extraction from a digital
/// elevation model, which is not implemented here. The returned
/// feature echoes `diameter_m` in its `craterDiamM` property.
pub fn circle_footprint(center: Coord<f64>, diameter_m: f64) -> Feature {
    let ring = CirclePoints::new(center, diameter_m)
        .map(|point| [point.x(), point.y()])
        .collect();
    Feature::polygon(ring, diameter_m)
}

#[cfg(test)]
mod tests {
    use super::{circle_footprint, CirclePoints, RING_LEN};
    use approx::assert_relative_eq;
    use geo::{coord, point, Point};

    #[test]
    fn test_ring_is_closed_and_has_fixed_len() {
        let circle = CirclePoints::new(coord!(x: -71.3, y: 44.28), 1200.0);
        assert_eq!(circle.len(), RING_LEN);
        let points = circle.collect::<Vec<_>>();
        assert_eq!(points.len(), 37);
        assert_eq!(points.first(), points.last());
    }

    #[test]
    fn test_equator_first_point() {
        let mut circle = CirclePoints::new(coord!(x: 0.0, y: 0.0), 2000.0);
        // 1 km north-south arc on the mean-radius sphere.
        assert_eq!(
            circle.next(),
            Some(point!(x: 0.0, y: 0.008_993_216_059_187_304))
        );
    }

    #[test]
    fn test_equator_cardinal_points() {
        let points = CirclePoints::new(coord!(x: 0.0, y: 0.0), 2000.0).collect::<Vec<_>>();
        // Due east and due west of center, a quarter and three
        // quarters of the way around the rim.
        assert_relative_eq!(points[9].x(), 0.008_993_216_059_187_304, epsilon = 1e-15);
        assert_relative_eq!(points[9].y(), 0.0, epsilon = 1e-17);
        assert_relative_eq!(points[27].x(), -0.008_993_216_059_187_304, epsilon = 1e-15);
        assert_relative_eq!(points[27].y(), 0.0, epsilon = 1e-17);
        assert_relative_eq!(points[18].y(), -0.008_993_216_059_187_304, epsilon = 1e-15);
        assert_relative_eq!(points[18].x(), 0.0, epsilon = 1e-17);
    }

    #[test]
    fn test_ring_symmetry_about_center() {
        let center = coord!(x: 0.0, y: 0.0);
        let points = CirclePoints::new(center, 2000.0).collect::<Vec<_>>();
        // Point i and point i+18 sit on opposite sides of the center.
        for i in 0..18 {
            assert_relative_eq!(points[i].x(), -points[i + 18].x(), epsilon = 1e-12);
            assert_relative_eq!(points[i].y(), -points[i + 18].y(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_longitude_scaling_away_from_equator() {
        let center = coord!(x: 139.6917, y: 35.689_5);
        let mut circle = CirclePoints::new(center, 1500.0);
        assert_eq!(
            circle.next(),
            Some(point!(x: 139.6917, y: 35.696_244_912_044_39))
        );
        // Due east of center the lon offset is stretched by
        // 1/cos(lat).
        let east = circle.nth(8).unwrap();
        assert_relative_eq!(east.x(), 139.700_004_594_102_78, epsilon = 1e-12);
        assert_relative_eq!(east.y(), 35.689_5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_diameter_collapses_to_center() {
        let center = coord!(x: 12.5, y: -33.25);
        for point in CirclePoints::new(center, 0.0) {
            assert_eq!(point, Point::from(center));
        }
    }

    #[test]
    fn test_scale_monotonicity() {
        let center = coord!(x: 8.25, y: 46.5);
        let max_abs_dlat = |diameter_m: f64| {
            CirclePoints::new(center, diameter_m)
                .map(|point| (point.y() - center.y).abs())
                .fold(0.0, f64::max)
        };
        let mut previous = 0.0;
        for diameter_m in [10.0, 100.0, 1_000.0, 10_000.0] {
            let extent = max_abs_dlat(diameter_m);
            assert!(extent > previous);
            previous = extent;
        }
    }

    #[test]
    fn test_pole_is_degenerate_but_total() {
        // cos(90°.to_radians()) rounds to ~6.1e-17 rather than zero,
        // so pole longitudes are huge rather than infinite. Either
        // way they are garbage, and the ring stays structurally
        // valid.
        let points = CirclePoints::<f64>::new(coord!(x: 0.0, y: 90.0), 1000.0).collect::<Vec<_>>();
        assert_eq!(points.len(), 37);
        assert_eq!(points.first(), points.last());
        assert!(points
            .iter()
            .any(|point| !point.x().is_finite() || point.x().abs() > 1e9));
        // Latitudes are unaffected by the pole singularity.
        assert!(points.iter().all(|point| point.y().is_finite()));
    }

    #[test]
    fn test_footprint_is_deterministic() {
        let center = coord!(x: -105.0, y: 39.75);
        let a = circle_footprint(center, 4_321.0);
        let b = circle_footprint(center, 4_321.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_footprint_echoes_diameter() {
        let feature = circle_footprint(coord!(x: 0.0, y: 0.0), 123.456);
        assert_eq!(feature.properties.crater_diam_m, 123.456);
    }
}
