use crate::simulation::{ImpactBuilder, ImpactReport};
use serde::{Deserialize, Serialize};

/// A near-earth-object record, shaped like a NASA NeoWs entry.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Asteroid {
    pub id: String,
    pub name: String,
    pub estimated_diameter_m: f64,
    pub velocity_kms: f64,
    pub density_kgm3: f64,
    pub close_approach_date: String,
    pub orbit: Orbit,
}

/// Keplerian orbit summary carried on NeoWs records.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Orbit {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
}

impl Asteroid {
    /// Returns a fixed stand-in record for offline use.
    ///
    /// Live NeoWs lookup is a network concern that belongs to the
    /// caller, not this crate.
    pub fn placeholder() -> Self {
        Self {
            id: "2025-AB".to_string(),
            name: "Mock Asteroid".to_string(),
            estimated_diameter_m: 150.0,
            velocity_kms: 22.5,
            density_kgm3: 3200.0,
            close_approach_date: "2025-10-01".to_string(),
            orbit: Orbit {
                semi_major_axis_au: 1.2,
                eccentricity: 0.15,
                inclination_deg: 5.2,
            },
        }
    }

    /// Seeds an impact estimate with this object's parameters.
    pub fn impact(&self) -> ImpactBuilder {
        ImpactReport::builder()
            .diameter(self.estimated_diameter_m)
            .velocity(self.velocity_kms)
            .density(self.density_kgm3)
    }
}

#[cfg(test)]
mod tests {
    use super::Asteroid;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_placeholder_shape() {
        let asteroid = Asteroid::placeholder();
        assert_eq!(
            serde_json::to_value(&asteroid).unwrap(),
            json!({
                "id": "2025-AB",
                "name": "Mock Asteroid",
                "estimated_diameter_m": 150.0,
                "velocity_kms": 22.5,
                "density_kgm3": 3200.0,
                "close_approach_date": "2025-10-01",
                "orbit": {
                    "semi_major_axis_au": 1.2,
                    "eccentricity": 0.15,
                    "inclination_deg": 5.2,
                },
            })
        );
    }

    #[test]
    fn test_placeholder_impact() {
        let report = Asteroid::placeholder().impact().build().unwrap();
        assert_relative_eq!(report.kinetic_energy_j, 1.431_388_152_791_849_2e18);
        assert_relative_eq!(report.crater_diameter_m, 350.115_920_664_317_5, epsilon = 1e-9);
    }
}
