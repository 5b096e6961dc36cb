//! Spiral geometry and the draw commands for one frame.
//!
//! [`compute_frame`] is a pure function of the parameters, the animation phase and the
//! surface size. [`paint`] replays the commands against any [`Surface`].

mod path_data;
mod surface;
mod svg_surface;

pub use surface::{paint, GradientHandle, Surface};
pub use svg_surface::SvgSurface;

use crate::params::ParameterSnapshot;
use crate::types::color::Color;
use crate::types::point::Point;
use crate::types::rect::{Dimensions, Rect};
use crate::types::spiral::Spiral;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, trace};

/// Fewest samples per arm, regardless of density.
pub const MIN_SAMPLES: usize = 60;
/// Upper bound on samples per arm.
pub const MAX_SAMPLES: usize = 1 << 20;
pub const SAMPLES_PER_DENSITY: f64 = 2000.;
/// Upper bound on the number of arms drawn.
pub const MAX_ARMS: usize = 1024;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point<f64>,
    pub end: Point<f64>,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Two-stop gradient from the `min` corner of `bounds` to its `max` corner.
    pub fn diagonal(bounds: Rect<f64>, from: &Color, to: &Color) -> Self {
        LinearGradient {
            start: bounds.min,
            end: bounds.max,
            stops: vec![
                ColorStop {
                    offset: 0.,
                    color: from.clone(),
                },
                ColorStop {
                    offset: 1.,
                    color: to.clone(),
                },
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Surface coordinates, connected by straight segments.
    pub path: Vec<Point<f64>>,
    pub gradient: LinearGradient,
    pub line_width: f64,
    pub line_cap: LineCap,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Paint the whole surface.
    Fill {
        color: Color,
        width: f64,
        height: f64,
    },
    Stroke(Stroke),
}

/// Samples per arm for `density`, excluding the closing point.
pub fn sample_count(density: f64) -> usize {
    let scaled = (density * SAMPLES_PER_DENSITY).floor();
    (scaled as usize).clamp(MIN_SAMPLES, MAX_SAMPLES)
}

/// Builds the draw commands of one frame.
///
/// Returns an empty list when the surface has no area. Otherwise the first command
/// fills the background and each following one strokes one arm. Out-of-range
/// parameters are clamped instead of rejected, so this never fails for finite input.
pub fn compute_frame(
    snapshot: &ParameterSnapshot,
    phase: f64,
    width: f64,
    height: f64,
) -> Vec<DrawCommand> {
    let dimensions = Dimensions::from_wh(width, height);
    if dimensions.is_empty() {
        trace!(width, height, "surface has no area, frame skipped");
        return Vec::new();
    }

    let params = snapshot.sanitized();
    if params.arms != snapshot.arms
        || params.radius != snapshot.radius
        || params.thickness != snapshot.thickness
    {
        debug!(
            arms = snapshot.arms,
            radius = snapshot.radius,
            thickness = snapshot.thickness,
            "parameters clamped for rendering"
        );
    }

    let center = dimensions.center();
    let arms = params.arm_count();
    let total = sample_count(params.density);
    let gradient = LinearGradient::diagonal(
        Rect::centered_square(center, params.radius),
        &params.color1,
        &params.color2,
    );
    let spiral =
        Spiral::new(params.radius, params.turns, params.twist, params.noise_amp).at_phase(phase);

    let strokes = (0..arms)
        .into_par_iter()
        .map(|arm| {
            DrawCommand::Stroke(Stroke {
                path: spiral
                    .arm(arm, arms)
                    .samples(total)
                    .map(|p| p + center)
                    .collect(),
                gradient: gradient.clone(),
                line_width: params.thickness,
                line_cap: LineCap::Round,
            })
        })
        .collect::<Vec<DrawCommand>>();

    trace!(arms, samples = total, phase, "frame computed");

    let mut commands = Vec::with_capacity(strokes.len() + 1);
    commands.push(DrawCommand::Fill {
        color: params.background,
        width,
        height,
    });
    commands.extend(strokes);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn strokes(commands: &[DrawCommand]) -> Vec<&Stroke> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Stroke(s) => Some(s),
                DrawCommand::Fill { .. } => None,
            })
            .collect()
    }

    #[test]
    fn sample_count_follows_density() {
        assert_eq!(sample_count(0.6), 1200);
        assert_eq!(sample_count(0.01), 60);
        assert_eq!(sample_count(0.), 60);
        assert_eq!(sample_count(-3.), 60);
        assert_eq!(sample_count(1e12), MAX_SAMPLES);
    }

    #[test]
    fn background_first_then_one_stroke_per_arm() {
        let snapshot = ParameterSnapshot::default();
        let commands = compute_frame(&snapshot, 0., 800., 600.);

        assert_eq!(commands.len(), 4);
        assert_eq!(
            commands[0],
            DrawCommand::Fill {
                color: Color::from("#020617"),
                width: 800.,
                height: 600.,
            }
        );
        for stroke in strokes(&commands) {
            assert_eq!(stroke.path.len(), 1201);
            assert_eq!(stroke.line_width, 3.);
            assert_eq!(stroke.line_cap, LineCap::Round);
        }
    }

    #[test]
    fn empty_surface_draws_nothing() {
        let snapshot = ParameterSnapshot::default();
        assert!(compute_frame(&snapshot, 0., 0., 600.).is_empty());
        assert!(compute_frame(&snapshot, 0., 800., 0.).is_empty());
    }

    #[test]
    fn paths_start_at_the_surface_center() {
        let snapshot = ParameterSnapshot::default();
        for phase in [0., 0.5, 123.456] {
            let commands = compute_frame(&snapshot, phase, 640., 480.);
            for stroke in strokes(&commands) {
                assert_eq!(stroke.path[0], Point::new(320., 240.));
            }
        }
    }

    #[test]
    fn last_point_sits_on_the_radius_without_noise() {
        let snapshot = ParameterSnapshot {
            radius: 180.,
            turns: 7.,
            arms: 3,
            noise_amp: 0.,
            ..Default::default()
        };
        let commands = compute_frame(&snapshot, 0., 800., 600.);
        let arm0 = strokes(&commands)[0];
        let last = arm0.path.last().unwrap();
        assert!((last.distance(&Point::new(400., 300.)) - 180.).abs() < 1e-9);
    }

    #[test]
    fn arms_start_evenly_spaced() {
        let snapshot = ParameterSnapshot {
            noise_amp: 0.,
            ..Default::default()
        };
        let center = Point::new(400., 300.);
        let commands = compute_frame(&snapshot, 0., 800., 600.);
        let strokes = strokes(&commands);
        let angle0 = strokes[0].path[1].angle_from(&center);

        for (k, stroke) in strokes.iter().enumerate() {
            let diff = (stroke.path[1].angle_from(&center) - angle0).rem_euclid(TAU);
            assert!((diff - k as f64 * TAU / 3.).abs() < 1e-6, "arm {k}: {diff}");
        }
    }

    #[test]
    fn gradient_spans_the_bounding_square() {
        let snapshot = ParameterSnapshot::default();
        let commands = compute_frame(&snapshot, 0., 800., 600.);
        let gradient = &strokes(&commands)[0].gradient;

        assert_eq!(gradient.start, Point::new(220., 120.));
        assert_eq!(gradient.end, Point::new(580., 480.));
        assert_eq!(gradient.stops[0].color, Color::from("#7c3aed"));
        assert_eq!(gradient.stops[1].offset, 1.);
        assert_eq!(gradient.stops[1].color, Color::from("#06b6d4"));
    }

    #[test]
    fn clamps_instead_of_failing() {
        let snapshot = ParameterSnapshot {
            arms: 0,
            density: 0.,
            radius: -10.,
            ..Default::default()
        };
        let commands = compute_frame(&snapshot, 0., 100., 100.);
        let strokes = strokes(&commands);

        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].path.len(), MIN_SAMPLES + 1);
        assert!(strokes[0].path.iter().all(|p| *p == Point::new(50., 50.)));
    }

    #[test]
    fn identical_inputs_give_identical_frames() {
        let snapshot = ParameterSnapshot::default();
        let a = compute_frame(&snapshot, 0.37, 800., 600.);
        let b = compute_frame(&snapshot, 0.37, 800., 600.);
        assert_eq!(a, b);
    }
}
