use crate::builder::OutlineBuilder;
use crate::decompose::{decompose, Curves};
use crate::error::ParseError;
use crate::geometry_utilities::types::*;
use crate::point_index::{self, IndexedPoint, PointType};
use crate::svg;
use lyon::path::PathEvent;
use std::fmt;
use std::str::FromStr;

/// One drawing command of an outline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(OutlinePoint),
    LineTo(OutlinePoint),
    QuadTo {
        control: OutlinePoint,
        to: OutlinePoint,
    },
    CubicTo {
        control1: OutlinePoint,
        control2: OutlinePoint,
        to: OutlinePoint,
    },
    ClosePath,
}

impl PathCommand {
    /// Number of points this command contributes to the flattened point sequence.
    pub fn point_count(&self) -> usize {
        match self {
            PathCommand::MoveTo(_) | PathCommand::LineTo(_) => 1,
            PathCommand::QuadTo { .. } => 2,
            PathCommand::CubicTo { .. } => 3,
            PathCommand::ClosePath => 0,
        }
    }

    /// The point the pen ends up at, `None` for `ClosePath`.
    pub fn endpoint(&self) -> Option<OutlinePoint> {
        match *self {
            PathCommand::MoveTo(to)
            | PathCommand::LineTo(to)
            | PathCommand::QuadTo { to, .. }
            | PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::ClosePath => None,
        }
    }

    /// Returns the command with every point passed through `f`.
    pub fn map_points<F: FnMut(OutlinePoint) -> OutlinePoint>(&self, mut f: F) -> PathCommand {
        match *self {
            PathCommand::MoveTo(to) => PathCommand::MoveTo(f(to)),
            PathCommand::LineTo(to) => PathCommand::LineTo(f(to)),
            PathCommand::QuadTo { control, to } => PathCommand::QuadTo {
                control: f(control),
                to: f(to),
            },
            PathCommand::CubicTo { control1, control2, to } => PathCommand::CubicTo {
                control1: f(control1),
                control2: f(control2),
                to: f(to),
            },
            PathCommand::ClosePath => PathCommand::ClosePath,
        }
    }
}

/// An outline stored as its sequence of drawing commands.
///
/// Points are addressed by their position in the flattened point sequence, see
/// [`point_index`](crate::point_index). Any edit that inserts or removes commands
/// invalidates previously obtained indices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
    point_count: usize,
}

impl Path {
    pub fn new() -> Path {
        Path {
            commands: vec![],
            point_count: 0,
        }
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Path {
        let point_count = point_index::point_count(&commands);
        Path { commands, point_count }
    }

    /// Parses SVG path data, see [`svg::parse_path_data`].
    pub fn parse(d: &str) -> Result<Path, ParseError> {
        svg::parse_path_data(d).map(Path::from_commands)
    }

    /// Copies the outline of a lyon path.
    ///
    /// Sub paths that lyon closes get an explicit `ClosePath`. lyon restarts a sub path
    /// when a segment follows a close. That restart at the closed sub path's start is
    /// not turned into a `MoveTo`, so [`build`](Path::build) followed by `from_lyon`
    /// keeps point indices intact.
    pub fn from_lyon(path: &lyon::path::Path) -> Path {
        let mut result = Path::new();
        let mut closed_at = None;
        for event in path.iter() {
            match event {
                PathEvent::Begin { at } => {
                    let resumes_closed =
                        closed_at == Some(at) && result.commands.last() == Some(&PathCommand::ClosePath);
                    if !resumes_closed {
                        result.move_to(at.cast_unit());
                    }
                    closed_at = None;
                }
                PathEvent::Line { to, .. } => {
                    result.line_to(to.cast_unit());
                }
                PathEvent::Quadratic { ctrl, to, .. } => {
                    result.quadratic_bezier_to(ctrl.cast_unit(), to.cast_unit());
                }
                PathEvent::Cubic { ctrl1, ctrl2, to, .. } => {
                    result.cubic_bezier_to(ctrl1.cast_unit(), ctrl2.cast_unit(), to.cast_unit());
                }
                PathEvent::End { close, first, .. } => {
                    if close {
                        result.close();
                        closed_at = Some(first);
                    }
                }
            }
        }
        result
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Total number of points in the flattened point sequence.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.point_count = 0;
    }

    /// Starts a new sub path. Returns the index of the new point.
    pub fn move_to(&mut self, pt: OutlinePoint) -> usize {
        self.push(PathCommand::MoveTo(pt))
    }

    /// Returns the index of the new endpoint.
    pub fn line_to(&mut self, pt: OutlinePoint) -> usize {
        self.push(PathCommand::LineTo(pt))
    }

    /// Returns the index of the new endpoint. The control point sits right before it.
    pub fn quadratic_bezier_to(&mut self, control: OutlinePoint, to: OutlinePoint) -> usize {
        self.push(PathCommand::QuadTo { control, to })
    }

    /// Returns the index of the new endpoint. The control points sit right before it.
    pub fn cubic_bezier_to(&mut self, control1: OutlinePoint, control2: OutlinePoint, to: OutlinePoint) -> usize {
        self.push(PathCommand::CubicTo { control1, control2, to })
    }

    pub fn close(&mut self) {
        self.push(PathCommand::ClosePath);
    }

    fn push(&mut self, command: PathCommand) -> usize {
        self.point_count += command.point_count();
        self.commands.push(command);
        // Only meaningful for commands that add points
        self.point_count.wrapping_sub(1)
    }

    /// Appends the commands of `other`, optionally transformed first.
    pub fn append(&mut self, other: &Path, transform: Option<&OutlineTransform>) {
        for command in other.commands() {
            let command = match transform {
                Some(transform) => command.map_points(|p| transform.transform_point(p)),
                None => *command,
            };
            self.push(command);
        }
    }

    /// Curves of the outline in document order.
    ///
    /// # Panics
    ///
    /// While iterating, if a drawing command comes before the first `MoveTo`.
    pub fn iter_curves(&self) -> Curves<'_> {
        decompose(&self.commands)
    }

    /// Every endpoint and control point, in flattened index order.
    pub fn points(&self) -> Vec<OutlinePoint> {
        point_index::points(&self.commands)
    }

    pub fn iter_points(&self) -> impl Iterator<Item = IndexedPoint> + '_ {
        point_index::iter_points(&self.commands)
    }

    /// Destination points of the move, line and curve commands.
    pub fn endpoints(&self) -> Vec<OutlinePoint> {
        point_index::endpoints(&self.commands)
    }

    pub fn control_points(&self) -> Vec<OutlinePoint> {
        point_index::control_points(&self.commands)
    }

    pub fn point_type(&self, index: usize) -> PointType {
        point_index::point_type(&self.commands, index)
    }

    /// Returns a copy with the point at `index` moved by `offset`, dragging the control
    /// points attached to it when it is an endpoint.
    ///
    /// # Panics
    ///
    /// If `index` is not smaller than [`point_count`](Path::point_count).
    pub fn displacing_point(&self, index: usize, offset: OutlineVector) -> Path {
        Path {
            commands: point_index::displace(&self.commands, index, offset),
            point_count: self.point_count,
        }
    }

    pub fn transformed(&self, transform: &OutlineTransform) -> Path {
        Path {
            commands: self
                .commands
                .iter()
                .map(|command| command.map_points(|p| transform.transform_point(p)))
                .collect(),
            point_count: self.point_count,
        }
    }

    /// Drops moves that are immediately superseded by another move.
    ///
    /// Assembling a path from sub paths tends to leave those behind. Point indices of
    /// the result differ from the input when anything was dropped.
    pub fn sanitized(&self) -> Path {
        let mut result = Path::new();
        let mut iter = self.commands.iter().peekable();
        while let Some(command) = iter.next() {
            if let PathCommand::MoveTo(pt) = command {
                if let Some(PathCommand::MoveTo(_)) = iter.peek() {
                    log::debug!("dropping superfluous move to {:?}", pt);
                    continue;
                }
            }
            result.push(*command);
        }
        result
    }

    /// Builds a lyon path for tessellation.
    pub fn build(&self) -> lyon::path::Path {
        let mut builder = OutlineBuilder::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(to) => builder.move_to(to),
                PathCommand::LineTo(to) => builder.line_to(to),
                PathCommand::QuadTo { control, to } => builder.quadratic_bezier_to(control, to),
                PathCommand::CubicTo { control1, control2, to } => builder.cubic_bezier_to(control1, control2, to),
                PathCommand::ClosePath => builder.close(),
            }
        }
        builder.build()
    }
}

impl From<Vec<PathCommand>> for Path {
    fn from(commands: Vec<PathCommand>) -> Self {
        Path::from_commands(commands)
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

/// Serializes to absolute SVG path data.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        svg::write_path_data(f, &self.commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Curve;
    use euclid::{point2, vec2};

    fn square() -> Path {
        let mut data = Path::new();
        data.move_to(point2(0.0, 0.0));
        data.line_to(point2(10.0, 0.0));
        data.line_to(point2(10.0, 10.0));
        data.line_to(point2(0.0, 10.0));
        data.close();
        data
    }

    #[test]
    fn test_sanity() {
        let mut data = Path::new();
        assert_eq!(data.move_to(point2(1.0, 2.0)), 0);
        assert_eq!(data.points(), vec![point2(1.0, 2.0)]);
        assert_eq!(data.quadratic_bezier_to(point2(3.0, 3.0), point2(4.0, 2.0)), 2);
        assert_eq!(data.cubic_bezier_to(point2(5.0, 1.0), point2(6.0, 1.0), point2(7.0, 2.0)), 5);
        assert_eq!(data.line_to(point2(8.0, 2.0)), 6);
        data.close();
        assert_eq!(data.point_count(), 7);
        assert_eq!(data.len(), 5);
        assert_eq!(Path::from_commands(data.commands().to_vec()), data);
    }

    #[test]
    fn test_curves_of_square() {
        let curves: Vec<Curve> = square().iter_curves().collect();
        assert_eq!(curves.len(), 4);
        assert_eq!(curves[3], Curve::linear(point2(0.0, 10.0), point2(0.0, 0.0)));
    }

    #[test]
    fn test_transformed() {
        let flipped = square().transformed(&OutlineTransform::scale(1.0, -1.0));
        assert_eq!(
            flipped.endpoints(),
            vec![point2(0.0, 0.0), point2(10.0, 0.0), point2(10.0, -10.0), point2(0.0, -10.0)]
        );
        assert_eq!(flipped.point_count(), 4);
    }

    #[test]
    fn test_append() {
        let mut data = square();
        data.append(&square(), Some(&OutlineTransform::translation(20.0, 0.0)));
        assert_eq!(data.point_count(), 8);
        assert_eq!(data.points()[4], point2(20.0, 0.0));
        assert_eq!(data.iter_curves().count(), 8);
    }

    #[test]
    fn test_sanitized() {
        let mut data = Path::new();
        data.move_to(point2(5.0, 5.0));
        data.move_to(point2(6.0, 6.0));
        data.move_to(point2(0.0, 0.0));
        data.line_to(point2(1.0, 0.0));
        data.move_to(point2(3.0, 3.0));
        let sanitized = data.sanitized();
        assert_eq!(
            sanitized.commands(),
            &[
                PathCommand::MoveTo(point2(0.0, 0.0)),
                PathCommand::LineTo(point2(1.0, 0.0)),
                PathCommand::MoveTo(point2(3.0, 3.0)),
            ]
        );
        assert_eq!(sanitized.point_count(), 3);
        assert_eq!(square().sanitized(), square());
    }

    #[test]
    fn test_lyon_round_trip() {
        let mut data = square();
        data.move_to(point2(20.0, 0.0));
        data.quadratic_bezier_to(point2(25.0, 5.0), point2(30.0, 0.0));
        data.cubic_bezier_to(point2(30.0, 5.0), point2(25.0, 10.0), point2(20.0, 10.0));
        let lyon_path = data.build();
        assert_eq!(Path::from_lyon(&lyon_path), data);
    }

    #[test]
    fn test_lyon_round_trip_after_close() {
        let data = Path::parse("M 0,0 L 10,0 Z L 5,5 Q 0,5 0,0").unwrap();
        let round_tripped = Path::from_lyon(&data.build());
        assert_eq!(round_tripped, data);
        assert_eq!(round_tripped.point_count(), 5);

        // A move to somewhere else after a close survives
        let data = Path::parse("M 0,0 L 10,0 Z M 20,0 L 30,0").unwrap();
        assert_eq!(Path::from_lyon(&data.build()), data);
    }

    #[test]
    fn test_displacing_point_keeps_count() {
        let data = square();
        let moved = data.displacing_point(2, vec2(1.0, 1.0));
        assert_eq!(moved.point_count(), data.point_count());
        assert_eq!(moved.points()[2], point2(11.0, 11.0));
        assert_eq!(data.points()[2], point2(10.0, 10.0));
    }

    #[test]
    fn test_display_and_parse() {
        let data = square();
        let text = data.to_string();
        assert_eq!(text, "M 0,0 L 10,0 L 10,10 L 0,10 Z");
        assert_eq!(text.parse::<Path>().unwrap(), data);
    }
}
