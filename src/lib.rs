//! Animated multi-arm spiral renderer.
//!
//! [`render::compute_frame`] turns a [`ParameterSnapshot`] and an animation phase into
//! draw commands; [`driver::AnimationDriver`] advances the phase and paints one frame
//! per tick onto a [`render::Surface`].

pub mod driver;
mod error;
pub mod params;
pub mod render;
mod types;

pub use driver::{AnimationDriver, AnimationDriverBuilder, DriverEvent, Phase, PlayState};
pub use error::{Result, SpiralError};
pub use params::{ParamKey, ParamValue, ParameterSnapshot, ParameterStore};
pub use render::{compute_frame, paint, DrawCommand, Surface, SvgSurface};
pub use types::color::Color;
pub use types::point::Point;
pub use types::rect::{Dimensions, Rect};
