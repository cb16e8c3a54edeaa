use crate::curve::Curve;
use crate::geometry_utilities::types::*;
use crate::path::PathCommand;
use std::iter::FusedIterator;

/// Lazily decomposes drawing commands into curves, in document order.
///
/// `MoveTo` emits nothing, `ClosePath` emits the line back to the start of the sub
/// path. Every emitted curve starts where the previous one in its sub path ended.
///
/// # Panics
///
/// The iterator panics when it reaches a drawing command that precedes every `MoveTo`.
/// Well formed command sequences always start with one.
pub fn decompose(commands: &[PathCommand]) -> Curves<'_> {
    Curves {
        commands: commands.iter(),
        first_of_sub_path: None,
        last_point: None,
    }
}

pub struct Curves<'l> {
    commands: std::slice::Iter<'l, PathCommand>,
    first_of_sub_path: Option<OutlinePoint>,
    last_point: Option<OutlinePoint>,
}

impl<'l> Curves<'l> {
    fn current(&self, command: &PathCommand) -> OutlinePoint {
        match self.last_point {
            Some(point) => point,
            None => panic!("{:?} before the first MoveTo", command),
        }
    }
}

impl<'l> Iterator for Curves<'l> {
    type Item = Curve;

    fn next(&mut self) -> Option<Curve> {
        loop {
            let command = self.commands.next()?;
            let curve = match *command {
                PathCommand::MoveTo(to) => {
                    self.first_of_sub_path = Some(to);
                    self.last_point = Some(to);
                    continue;
                }
                PathCommand::LineTo(to) => Curve::linear(self.current(command), to),
                PathCommand::QuadTo { control, to } => Curve::quadratic(self.current(command), to, control),
                PathCommand::CubicTo { control1, control2, to } => {
                    Curve::cubic(self.current(command), to, control1, control2)
                }
                PathCommand::ClosePath => {
                    let start = self.current(command);
                    // first_of_sub_path is always set together with last_point
                    let first = self.first_of_sub_path.unwrap_or(start);
                    Curve::linear(start, first)
                }
            };
            self.last_point = Some(curve.end());
            return Some(curve);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.commands.len()))
    }
}

impl<'l> FusedIterator for Curves<'l> {}
