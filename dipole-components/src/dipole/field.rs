use serde::{Deserialize, Serialize};
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, ElectricField, Time},
    time::second,
};

/// A spatially uniform electric field oscillating sinusoidally in time.
///
/// The field points along a fixed axis and depends on time only, so its
/// value at the dipole is `E(t) = E0 · cos(ω·t)` regardless of position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrivingField {
    /// Peak field strength, `E0`.
    pub amplitude: ElectricField,
    /// Angular driving frequency, `ω`.
    pub angular_frequency: AngularVelocity,
}

impl DrivingField {
    /// Evaluates the field at the given time.
    #[must_use]
    pub fn at(&self, time: Time) -> ElectricField {
        let phase = self.angular_frequency.get::<radian_per_second>() * time.get::<second>();
        self.amplitude * phase.cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;
    use uom::si::electric_field::volt_per_meter;

    fn field(amplitude: f64, angular_frequency: f64) -> DrivingField {
        DrivingField {
            amplitude: ElectricField::new::<volt_per_meter>(amplitude),
            angular_frequency: AngularVelocity::new::<radian_per_second>(angular_frequency),
        }
    }

    #[test]
    fn peaks_at_time_zero() {
        let e = field(2.0, 1.0).at(Time::new::<second>(0.0));
        assert_relative_eq!(e.get::<volt_per_meter>(), 2.0);
    }

    #[test]
    fn vanishes_at_quarter_period() {
        let e = field(2.0, 1.0).at(Time::new::<second>(PI / 2.0));
        assert_abs_diff_eq!(e.get::<volt_per_meter>(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn frequency_scales_the_phase() {
        let e = field(1.0, 2.0).at(Time::new::<second>(PI / 2.0));
        assert_relative_eq!(e.get::<volt_per_meter>(), -1.0);
    }
}
