use crate::render::{DrawCommand, LineCap};
use crate::types::color::Color;
use crate::types::point::Point;

/// Identifies a gradient created on a [`Surface`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GradientHandle(usize);

impl GradientHandle {
    pub fn new(id: usize) -> Self {
        GradientHandle(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }
}

/// A 2D drawing target in device-independent units with the origin at the top left.
pub trait Surface {
    /// Current `(width, height)`, reflecting the most recent resize.
    fn size(&self) -> (f64, f64);

    /// Paints the whole surface with `color`.
    fn fill_rect(&mut self, color: &Color, width: f64, height: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point<f64>);
    fn line_to(&mut self, point: Point<f64>);

    fn create_linear_gradient(&mut self, start: Point<f64>, end: Point<f64>) -> GradientHandle;
    fn add_color_stop(&mut self, gradient: GradientHandle, offset: f64, color: &Color);

    /// Strokes the current path.
    fn stroke(&mut self, gradient: GradientHandle, line_width: f64, cap: LineCap);
}

/// Replays `commands` in order.
pub fn paint<S: Surface + ?Sized>(commands: &[DrawCommand], surface: &mut S) {
    for command in commands {
        match command {
            DrawCommand::Fill {
                color,
                width,
                height,
            } => surface.fill_rect(color, *width, *height),
            DrawCommand::Stroke(stroke) => {
                surface.begin_path();
                let mut points = stroke.path.iter();
                if let Some(first) = points.next() {
                    surface.move_to(*first);
                }
                for point in points {
                    surface.line_to(*point);
                }

                let gradient = &stroke.gradient;
                let handle = surface.create_linear_gradient(gradient.start, gradient.end);
                for stop in &gradient.stops {
                    surface.add_color_stop(handle, stop.offset, &stop.color);
                }
                surface.stroke(handle, stroke.line_width, stroke.line_cap);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterSnapshot;
    use crate::render::compute_frame;

    #[derive(Debug, PartialEq)]
    enum Call {
        Fill(String),
        Begin,
        Move,
        Line,
        Gradient,
        Stop(f64),
        Stroke(usize, f64),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        gradients: usize,
    }

    impl Surface for Recorder {
        fn size(&self) -> (f64, f64) {
            (100., 100.)
        }

        fn fill_rect(&mut self, color: &Color, _width: f64, _height: f64) {
            self.calls.push(Call::Fill(color.to_string()));
        }

        fn begin_path(&mut self) {
            self.calls.push(Call::Begin);
        }

        fn move_to(&mut self, _point: Point<f64>) {
            self.calls.push(Call::Move);
        }

        fn line_to(&mut self, _point: Point<f64>) {
            self.calls.push(Call::Line);
        }

        fn create_linear_gradient(&mut self, _start: Point<f64>, _end: Point<f64>) -> GradientHandle {
            self.calls.push(Call::Gradient);
            self.gradients += 1;
            GradientHandle::new(self.gradients - 1)
        }

        fn add_color_stop(&mut self, _gradient: GradientHandle, offset: f64, _color: &Color) {
            self.calls.push(Call::Stop(offset));
        }

        fn stroke(&mut self, gradient: GradientHandle, line_width: f64, _cap: LineCap) {
            self.calls.push(Call::Stroke(gradient.id(), line_width));
        }
    }

    #[test]
    fn replays_fill_then_arm_paths() {
        let snapshot = ParameterSnapshot {
            arms: 2,
            density: 0.,
            ..Default::default()
        };
        let commands = compute_frame(&snapshot, 0., 100., 100.);
        let mut recorder = Recorder::default();
        paint(&commands, &mut recorder);

        assert_eq!(recorder.calls[0], Call::Fill(String::from("#020617")));

        let per_arm = 1 + 1 + 60 + 1 + 2 + 1;
        assert_eq!(recorder.calls.len(), 1 + 2 * per_arm);

        let arm = &recorder.calls[1..1 + per_arm];
        assert_eq!(arm[0], Call::Begin);
        assert_eq!(arm[1], Call::Move);
        assert!(arm[2..62].iter().all(|c| *c == Call::Line));
        assert_eq!(arm[62], Call::Gradient);
        assert_eq!(arm[63], Call::Stop(0.));
        assert_eq!(arm[64], Call::Stop(1.));
        assert_eq!(arm[65], Call::Stroke(0, 3.));
        assert_eq!(recorder.calls.last(), Some(&Call::Stroke(1, 3.)));
    }

    #[test]
    fn empty_frame_touches_nothing() {
        let mut recorder = Recorder::default();
        paint(&[], &mut recorder);
        assert!(recorder.calls.is_empty());
    }
}
