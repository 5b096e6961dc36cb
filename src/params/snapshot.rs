use crate::params::{ParamKey, ParamValue};
use crate::render::MAX_ARMS;
use crate::types::color::Color;
use tracing::warn;

/// The full visual configuration used to render one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSnapshot {
    pub arms: i32,
    /// Full revolutions per arm.
    pub turns: f64,
    /// Sampling resolution; see [`crate::render::sample_count`].
    pub density: f64,
    /// Maximum extent of the spiral in surface units.
    pub radius: f64,
    pub thickness: f64,
    /// Extra angular skew per unit of progress.
    pub twist: f64,
    /// Relative amplitude of the radial perturbation.
    pub noise_amp: f64,
    pub color1: Color,
    pub color2: Color,
    pub background: Color,
}

impl Default for ParameterSnapshot {
    fn default() -> Self {
        ParameterSnapshot {
            arms: 3,
            turns: 7.,
            density: 0.6,
            radius: 180.,
            thickness: 3.,
            twist: 0.2,
            noise_amp: 0.15,
            color1: Color::from("#7c3aed"),
            color2: Color::from("#06b6d4"),
            background: Color::from("#020617"),
        }
    }
}

impl ParameterSnapshot {
    /// Number of arms actually drawn, at least one.
    pub fn arm_count(&self) -> usize {
        (self.arms.max(1) as usize).min(MAX_ARMS)
    }

    /// Copy with every value the renderer cannot draw pulled back into range.
    pub fn sanitized(&self) -> ParameterSnapshot {
        ParameterSnapshot {
            arms: self.arm_count() as i32,
            radius: self.radius.max(0.),
            thickness: self.thickness.max(0.),
            ..self.clone()
        }
    }

    /// Names of the invariants this snapshot violates.
    pub fn check(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if self.arms < 1 {
            failed.push("arms >= 1");
        }
        if !(self.radius > 0.) {
            failed.push("radius > 0");
        }
        failed
    }

    pub fn value(&self, key: ParamKey) -> ParamValue {
        match key {
            ParamKey::Arms => ParamValue::Integer(self.arms),
            ParamKey::Turns => ParamValue::Number(self.turns),
            ParamKey::Density => ParamValue::Number(self.density),
            ParamKey::Radius => ParamValue::Number(self.radius),
            ParamKey::Thickness => ParamValue::Number(self.thickness),
            ParamKey::Twist => ParamValue::Number(self.twist),
            ParamKey::NoiseAmp => ParamValue::Number(self.noise_amp),
            ParamKey::Color1 => ParamValue::Color(self.color1.clone()),
            ParamKey::Color2 => ParamValue::Color(self.color2.clone()),
            ParamKey::Background => ParamValue::Color(self.background.clone()),
        }
    }

    pub(crate) fn assign(&mut self, key: ParamKey, value: ParamValue) {
        match (key, value) {
            (ParamKey::Arms, ParamValue::Integer(v)) => self.arms = v,
            (ParamKey::Turns, ParamValue::Number(v)) => self.turns = v,
            (ParamKey::Density, ParamValue::Number(v)) => self.density = v,
            (ParamKey::Radius, ParamValue::Number(v)) => self.radius = v,
            (ParamKey::Thickness, ParamValue::Number(v)) => self.thickness = v,
            (ParamKey::Twist, ParamValue::Number(v)) => self.twist = v,
            (ParamKey::NoiseAmp, ParamValue::Number(v)) => self.noise_amp = v,
            (ParamKey::Color1, ParamValue::Color(c)) => self.color1 = c,
            (ParamKey::Color2, ParamValue::Color(c)) => self.color2 = c,
            (ParamKey::Background, ParamValue::Color(c)) => self.background = c,
            (key, value) => warn!(%key, ?value, "value does not fit parameter, ignored"),
        }
    }
}
