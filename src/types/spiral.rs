use crate::types::point::Point;
use std::f64::consts::TAU;

/// A single spiral arm around the origin.
///
/// The radius grows linearly with progress `t` in `[0, 1]` and is perturbed by a
/// sine of the angle shifted by the animation phase.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Spiral {
    radius: f64,
    turns: f64,
    twist: f64,
    noise_amp: f64,

    offset: f64,
    phase: f64,
}

impl Spiral {
    pub(crate) fn new(radius: f64, turns: f64, twist: f64, noise_amp: f64) -> Spiral {
        Spiral {
            radius,
            turns,
            twist,
            noise_amp,
            offset: 0.,
            phase: 0.,
        }
    }

    /// Starting angle of arm `arm` out of `arms` evenly spaced arms.
    pub(crate) fn arm(mut self, arm: usize, arms: usize) -> Spiral {
        self.offset = (arm as f64 * TAU) / arms as f64;
        self
    }

    pub(crate) fn at_phase(mut self, phase: f64) -> Spiral {
        self.phase = phase;
        self
    }

    pub(crate) fn angle(&self, t: f64) -> f64 {
        t * self.turns * TAU + self.offset + self.twist * t * TAU
    }

    pub(crate) fn position(&self, t: f64) -> Point<f64> {
        let theta = self.angle(t);
        let r = self.radius * t * (1. + self.noise_amp * (theta + self.phase).sin());

        Point::from_polar(r, theta)
    }

    /// `total + 1` points from the origin (`t = 0`) to the outer edge (`t = 1`).
    pub(crate) fn samples(&self, total: usize) -> impl Iterator<Item = Point<f64>> + '_ {
        (0..=total).map(move |i| self.position(i as f64 / total as f64))
    }
}
