use crate::render::path_data::{PathCommand, PathData};
use crate::render::{GradientHandle, LineCap, Surface};
use crate::types::color::Color;
use crate::types::point::Point;
use svg::node::element::{Definitions, LinearGradient, Path, Rectangle, Stop};
use svg::Document;
use tracing::{debug, warn};

struct GradientDef {
    start: Point<f64>,
    end: Point<f64>,
    stops: Vec<(f64, Color)>,
}

fn gradient_id(handle: GradientHandle) -> String {
    format!("spiral-gradient-{}", handle.id())
}

/// In-memory surface that keeps the latest frame as an SVG document.
///
/// A full-surface fill covers everything drawn before it, so it also drops the
/// previous frame's paths and gradients.
pub struct SvgSurface {
    width: f64,
    height: f64,

    background: Option<Rectangle>,
    gradients: Vec<GradientDef>,
    strokes: Vec<Path>,
    current: PathData,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        SvgSurface {
            width,
            height,
            background: None,
            gradients: Vec::new(),
            strokes: Vec::new(),
            current: PathData::default(),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        debug!(width, height, "surface resized");
        self.width = width;
        self.height = height;
    }

    pub fn document(&self) -> Document {
        let mut defs = Definitions::new();
        for (id, gradient) in self.gradients.iter().enumerate() {
            let mut element = LinearGradient::new()
                .set("id", gradient_id(GradientHandle::new(id)))
                .set("gradientUnits", "userSpaceOnUse")
                .set("x1", gradient.start.x)
                .set("y1", gradient.start.y)
                .set("x2", gradient.end.x)
                .set("y2", gradient.end.y);
            for (offset, color) in &gradient.stops {
                element = element.add(
                    Stop::new()
                        .set("offset", *offset)
                        .set("stop-color", color.as_str()),
                );
            }
            defs = defs.add(element);
        }

        let mut document = Document::new()
            .set("viewBox", (0, 0, self.width, self.height))
            .set("width", self.width)
            .set("height", self.height)
            .add(defs);

        if let Some(background) = &self.background {
            document = document.add(background.clone());
        }
        for stroke in &self.strokes {
            document = document.add(stroke.clone());
        }

        document
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, color: &Color, width: f64, height: f64) {
        self.gradients.clear();
        self.strokes.clear();
        self.current.clear();
        self.background = Some(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", color.as_str()),
        );
    }

    fn begin_path(&mut self) {
        self.current.clear();
    }

    fn move_to(&mut self, point: Point<f64>) {
        self.current.push(PathCommand::Move(point));
    }

    fn line_to(&mut self, point: Point<f64>) {
        self.current.push(PathCommand::Line(point));
    }

    fn create_linear_gradient(&mut self, start: Point<f64>, end: Point<f64>) -> GradientHandle {
        self.gradients.push(GradientDef {
            start,
            end,
            stops: Vec::new(),
        });
        GradientHandle::new(self.gradients.len() - 1)
    }

    fn add_color_stop(&mut self, gradient: GradientHandle, offset: f64, color: &Color) {
        match self.gradients.get_mut(gradient.id()) {
            Some(def) => def.stops.push((offset, color.clone())),
            None => warn!(id = gradient.id(), "color stop for unknown gradient"),
        }
    }

    fn stroke(&mut self, gradient: GradientHandle, line_width: f64, cap: LineCap) {
        if self.current.is_empty() {
            return;
        }
        if gradient.id() >= self.gradients.len() {
            warn!(id = gradient.id(), "stroke with unknown gradient skipped");
            return;
        }

        let path = Path::new()
            .set("d", self.current.d())
            .set("fill", "none")
            .set("stroke", format!("url(#{})", gradient_id(gradient)))
            .set("stroke-width", line_width)
            .set("stroke-linecap", cap.as_str());
        self.strokes.push(path);
    }
}
