use crate::types::point::Point;
use std::ops::Deref;

macro_rules! format_float {
    ($num:expr) => {
        format!("{:.2}", $num).deref()
    };
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum PathCommand {
    Move(Point<f64>),
    Line(Point<f64>),
}

impl PathCommand {
    fn append_to_string(&self, string: &mut String) {
        let (tag, p) = match self {
            PathCommand::Move(p) => ("M ", p),
            PathCommand::Line(p) => ("L ", p),
        };
        string.push_str(tag);
        string.push_str(format_float!(p.x));
        string.push(' ');
        string.push_str(format_float!(p.y));
    }

    fn length_estimation(&self) -> usize {
        3 + 7 + 7
    }
}

/// An open polyline, serialised as SVG path data.
#[derive(Debug, Clone, Default)]
pub(crate) struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub(crate) fn clear(&mut self) {
        self.commands.clear();
    }

    pub(crate) fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub(crate) fn d(&self) -> String {
        let mut string = String::with_capacity(
            self.commands
                .iter()
                .map(|c| c.length_estimation() + 1)
                .sum(),
        );
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                string.push(' ');
            }
            command.append_to_string(&mut string);
        }
        string
    }
}
