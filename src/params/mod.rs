//! Visual parameters of the spiral and the store the controls write into.

mod snapshot;
mod store;

pub use snapshot::ParameterSnapshot;
pub use store::ParameterStore;

use crate::error::{Result, SpiralError};
use crate::types::color::Color;
use std::fmt;
use std::str::FromStr;

/// Identifier of a tunable parameter, matching the ids of the controls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Arms,
    Turns,
    Density,
    Radius,
    Thickness,
    Twist,
    NoiseAmp,
    Color1,
    Color2,
    Background,
}

impl ParamKey {
    pub const ALL: [ParamKey; 10] = [
        ParamKey::Arms,
        ParamKey::Turns,
        ParamKey::Density,
        ParamKey::Radius,
        ParamKey::Thickness,
        ParamKey::Twist,
        ParamKey::NoiseAmp,
        ParamKey::Color1,
        ParamKey::Color2,
        ParamKey::Background,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKey::Arms => "arms",
            ParamKey::Turns => "turns",
            ParamKey::Density => "density",
            ParamKey::Radius => "radius",
            ParamKey::Thickness => "thickness",
            ParamKey::Twist => "twist",
            ParamKey::NoiseAmp => "noiseAmp",
            ParamKey::Color1 => "color1",
            ParamKey::Color2 => "color2",
            ParamKey::Background => "background",
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(
            self,
            ParamKey::Color1 | ParamKey::Color2 | ParamKey::Background
        )
    }

    /// Coerces a raw control value into the type this key stores.
    ///
    /// `arms` and `turns` are rounded to whole numbers, colours are taken verbatim.
    pub fn parse_value(&self, raw: &str) -> Result<ParamValue> {
        if self.is_color() {
            return Ok(ParamValue::Color(Color::from(raw.trim())));
        }

        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| SpiralError::InvalidNumber {
                key: self.as_str(),
                raw: String::from(raw),
            })?;
        if !value.is_finite() {
            return Err(SpiralError::NonFinite { key: self.as_str() });
        }

        Ok(match self {
            ParamKey::Arms => ParamValue::Integer(value.round() as i32),
            ParamKey::Turns => ParamValue::Number(value.round()),
            _ => ParamValue::Number(value),
        })
    }

    /// Text shown next to the control for `value`.
    pub fn format_value(&self, value: &ParamValue) -> String {
        match value {
            ParamValue::Integer(v) => v.to_string(),
            ParamValue::Number(v) => match self {
                ParamKey::Density | ParamKey::Twist | ParamKey::NoiseAmp => format!("{:.2}", v),
                ParamKey::Thickness => format!("{:.1}", v),
                _ => v.to_string(),
            },
            ParamValue::Color(c) => c.to_string(),
        }
    }
}

impl FromStr for ParamKey {
    type Err = SpiralError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "noise_amp" => Ok(ParamKey::NoiseAmp),
            _ => ParamKey::ALL
                .into_iter()
                .find(|k| k.as_str() == s)
                .ok_or_else(|| SpiralError::UnknownParameter(String::from(s))),
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter value after per-key coercion.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Integer(i32),
    Number(f64),
    Color(Color),
}
