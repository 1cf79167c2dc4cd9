//! Rotational dynamics of an electric dipole in a driven field.
//!
//! The dipole is a rigid pair of opposite charges separated by a fixed
//! distance, free to rotate about its center. A time-varying uniform field
//! exerts the torque `τ = p·E(t)·sin θ`, viscous damping opposes the motion
//! with `−γ·θ̇`, and the angular acceleration follows from `θ̈ = (τ − γ·θ̇)/I`.

mod field;

pub use field::DrivingField;

use dipole_core::{Model, ode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::{
    si::{
        ISQ, Quantity, SI,
        angle::radian,
        angular_acceleration::radian_per_second_squared,
        angular_velocity::radian_per_second,
        electric_dipole_moment::coulomb_meter,
        electric_field::volt_per_meter,
        f64::{
            Angle, AngularAcceleration, AngularVelocity, ElectricDipoleMoment, ElectricField,
            Length, MomentOfInertia, Time,
        },
        length::meter,
        moment_of_inertia::kilogram_square_meter,
        time::second,
    },
    typenum::{N1, P1, P2, Z0},
};

/// Rotational damping: torque per unit angular velocity (N·m·s or kg·m²/s).
pub type RotationalDamping = Quantity<ISQ<P2, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// A model that computes the dipole's rotational state derivatives.
pub struct Dipole;

/// Input to the dipole model.
///
/// Includes the physical parameters, the rotational state, and the time at
/// which the driving field is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Input {
    pub parameters: Parameters,
    pub state: State,
    pub time: Time,
}

/// Physical parameters of the dipole and its driving field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// The external driving field.
    pub field: DrivingField,
    /// Viscous damping coefficient, `γ`.
    ///
    /// Negative values feed energy into the rotation instead of removing
    /// it; the model accepts them.
    pub damping: RotationalDamping,
    /// Dipole moment, `p`.
    pub dipole_moment: ElectricDipoleMoment,
    /// Distance between the two charges, `d`.
    pub charge_separation: Length,
    /// Moment of inertia about the pivot, `I`. Must be positive.
    pub inertia: MomentOfInertia,
}

/// The dipole's rotational state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Orientation angle, `θ`. Not wrapped to any interval.
    pub angle: Angle,
    /// Angular velocity, `θ̇`.
    pub angular_velocity: AngularVelocity,
}

/// Output from the dipole model: the time derivatives of [`State`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Output {
    pub angular_velocity: AngularVelocity,
    pub angular_acceleration: AngularAcceleration,
}

/// Errors returned by the dipole model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("moment of inertia must be positive, got {value} kg·m²")]
    NonPositiveInertia { value: f64 },
}

impl Model for Dipole {
    type Input = Input;
    type Output = Output;
    type Error = Error;

    /// Computes the angular velocity and angular acceleration from the
    /// current state, the parameters, and the field at the current time.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let Input {
            parameters,
            state,
            time,
        } = *input;

        let inertia = parameters.inertia.get::<kilogram_square_meter>();
        if inertia <= 0.0 {
            return Err(Error::NonPositiveInertia { value: inertia });
        }

        // uom keeps angle quantities in their own kind, so the torque
        // balance is formed on raw SI values.
        let field = parameters.field.at(time).get::<volt_per_meter>();
        let torque =
            parameters.dipole_moment.get::<coulomb_meter>() * field * state.angle.get::<radian>().sin();
        let drag = parameters.damping.value * state.angular_velocity.get::<radian_per_second>();

        Ok(Output {
            angular_velocity: state.angular_velocity,
            angular_acceleration: AngularAcceleration::new::<radian_per_second_squared>(
                (torque - drag) / inertia,
            ),
        })
    }
}

impl ode::Integratable<2> for Dipole {
    fn apply_state(initial_conditions: &Input, state: ode::State<2>) -> Input {
        (*initial_conditions)
            .time_si(state.t)
            .angle_si(state.y[0])
            .angular_velocity_si(state.y[1])
    }

    fn extract_state(input: &Input) -> ode::State<2> {
        ode::State {
            t: input.time.get::<second>(),
            y: [
                input.state.angle.get::<radian>(),
                input.state.angular_velocity.get::<radian_per_second>(),
            ],
        }
    }

    fn extract_derivative(output: &Output) -> [f64; 2] {
        [
            output.angular_velocity.get::<radian_per_second>(),
            output
                .angular_acceleration
                .get::<radian_per_second_squared>(),
        ]
    }
}

impl Parameters {
    /// Positions of the positive and negative charges for a given angle.
    ///
    /// The charges sit at `±(d/2)·(cos θ, sin θ)` around the pivot, which
    /// is all a renderer needs to draw the dipole.
    #[must_use]
    pub fn charge_positions(&self, angle: Angle) -> [[Length; 2]; 2] {
        let half = 0.5 * self.charge_separation;
        let x = half * angle.cos();
        let y = half * angle.sin();
        [[x, y], [-x, -y]]
    }
}

impl Input {
    /// Sets the angle from a `uom::Angle`.
    #[must_use]
    pub fn angle(mut self, angle: Angle) -> Self {
        self.state.angle = angle;
        self
    }

    /// Sets the angle in SI units (rad).
    #[must_use]
    pub fn angle_si(self, angle: f64) -> Self {
        self.angle(Angle::new::<radian>(angle))
    }

    /// Sets the angular velocity from a `uom::AngularVelocity`.
    #[must_use]
    pub fn angular_velocity(mut self, angular_velocity: AngularVelocity) -> Self {
        self.state.angular_velocity = angular_velocity;
        self
    }

    /// Sets the angular velocity in SI units (rad/s).
    #[must_use]
    pub fn angular_velocity_si(self, angular_velocity: f64) -> Self {
        self.angular_velocity(AngularVelocity::new::<radian_per_second>(angular_velocity))
    }

    /// Sets the time from a `uom::Time`.
    #[must_use]
    pub fn time(mut self, time: Time) -> Self {
        self.time = time;
        self
    }

    /// Sets the time in SI units (s).
    #[must_use]
    pub fn time_si(self, time: f64) -> Self {
        self.time(Time::new::<second>(time))
    }

    /// Sets the field amplitude from a `uom::ElectricField`.
    #[must_use]
    pub fn field_amplitude(mut self, amplitude: ElectricField) -> Self {
        self.parameters.field.amplitude = amplitude;
        self
    }

    /// Sets the field amplitude in SI units (V/m).
    #[must_use]
    pub fn field_amplitude_si(self, amplitude: f64) -> Self {
        self.field_amplitude(ElectricField::new::<volt_per_meter>(amplitude))
    }

    /// Sets the driving frequency from a `uom::AngularVelocity`.
    #[must_use]
    pub fn field_frequency(mut self, angular_frequency: AngularVelocity) -> Self {
        self.parameters.field.angular_frequency = angular_frequency;
        self
    }

    /// Sets the driving frequency in SI units (rad/s).
    #[must_use]
    pub fn field_frequency_si(self, angular_frequency: f64) -> Self {
        self.field_frequency(AngularVelocity::new::<radian_per_second>(angular_frequency))
    }

    /// Sets the damping coefficient from a `RotationalDamping` quantity.
    #[must_use]
    pub fn damping(mut self, damping: RotationalDamping) -> Self {
        self.parameters.damping = damping;
        self
    }

    /// Sets the damping coefficient in SI units (kg·m²/s).
    #[must_use]
    pub fn damping_si(self, damping: f64) -> Self {
        self.damping(
            MomentOfInertia::new::<kilogram_square_meter>(damping) / Time::new::<second>(1.0),
        )
    }

    /// Sets the dipole moment from a `uom::ElectricDipoleMoment`.
    #[must_use]
    pub fn dipole_moment(mut self, dipole_moment: ElectricDipoleMoment) -> Self {
        self.parameters.dipole_moment = dipole_moment;
        self
    }

    /// Sets the dipole moment in SI units (C·m).
    #[must_use]
    pub fn dipole_moment_si(self, dipole_moment: f64) -> Self {
        self.dipole_moment(ElectricDipoleMoment::new::<coulomb_meter>(dipole_moment))
    }

    /// Sets the charge separation from a `uom::Length`.
    #[must_use]
    pub fn charge_separation(mut self, charge_separation: Length) -> Self {
        self.parameters.charge_separation = charge_separation;
        self
    }

    /// Sets the charge separation in SI units (m).
    #[must_use]
    pub fn charge_separation_si(self, charge_separation: f64) -> Self {
        self.charge_separation(Length::new::<meter>(charge_separation))
    }

    /// Sets the moment of inertia from a `uom::MomentOfInertia`.
    #[must_use]
    pub fn inertia(mut self, inertia: MomentOfInertia) -> Self {
        self.parameters.inertia = inertia;
        self
    }

    /// Sets the moment of inertia in SI units (kg·m²).
    #[must_use]
    pub fn inertia_si(self, inertia: f64) -> Self {
        self.inertia(MomentOfInertia::new::<kilogram_square_meter>(inertia))
    }
}

impl Output {
    /// Creates an `Output` from typed quantities.
    #[must_use]
    pub fn new(angular_velocity: AngularVelocity, angular_acceleration: AngularAcceleration) -> Self {
        Self {
            angular_velocity,
            angular_acceleration,
        }
    }

    /// Creates an `Output` from raw SI values (rad/s and rad/s²).
    #[must_use]
    pub fn from_si(angular_velocity: f64, angular_acceleration: f64) -> Self {
        Self::new(
            AngularVelocity::new::<radian_per_second>(angular_velocity),
            AngularAcceleration::new::<radian_per_second_squared>(angular_acceleration),
        )
    }
}

impl Default for Input {
    /// Creates the reference configuration: a unit-amplitude field at
    /// 1 rad/s, light damping, and the dipole displaced to 0.5 rad at rest.
    fn default() -> Self {
        Self {
            parameters: Parameters {
                field: DrivingField {
                    amplitude: ElectricField::new::<volt_per_meter>(1.0),
                    angular_frequency: AngularVelocity::new::<radian_per_second>(1.0),
                },
                damping: MomentOfInertia::new::<kilogram_square_meter>(0.1)
                    / Time::new::<second>(1.0),
                dipole_moment: ElectricDipoleMoment::new::<coulomb_meter>(0.1),
                charge_separation: Length::new::<meter>(0.1),
                inertia: MomentOfInertia::new::<kilogram_square_meter>(1.0),
            },
            state: State {
                angle: Angle::new::<radian>(0.5),
                angular_velocity: AngularVelocity::new::<radian_per_second>(0.0),
            },
            time: Time::new::<second>(0.0),
        }
    }
}
