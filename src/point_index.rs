//! Flat, positional indexing of every endpoint and control point of a path.
//!
//! Points are numbered while scanning the commands left to right. `MoveTo` and `LineTo`
//! contribute their destination, `QuadTo` its control then its end, `CubicTo` both
//! controls then its end. `ClosePath` contributes nothing.
//!
//! Indices are recomputed from the commands on every query. Only edits that keep the
//! command sequence the same length, such as [`displace`], preserve them.

use crate::geometry_utilities::types::*;
use crate::path::PathCommand;
use arrayvec::ArrayVec;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointType {
    /// On-curve point: the destination of a move, line or curve.
    Endpoint,
    ControlPoint,
}

/// A point of the flattened sequence together with where it came from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndexedPoint {
    pub index: usize,
    /// Index of the command in the command sequence.
    pub command: usize,
    pub position: OutlinePoint,
    pub point_type: PointType,
}

pub fn point_count(commands: &[PathCommand]) -> usize {
    commands.iter().map(PathCommand::point_count).sum()
}

pub fn iter_points(commands: &[PathCommand]) -> impl Iterator<Item = IndexedPoint> + '_ {
    commands
        .iter()
        .enumerate()
        .flat_map(|(command_index, command)| {
            let mut points: ArrayVec<(OutlinePoint, PointType), 3> = ArrayVec::new();
            match *command {
                PathCommand::MoveTo(to) | PathCommand::LineTo(to) => points.push((to, PointType::Endpoint)),
                PathCommand::QuadTo { control, to } => {
                    points.push((control, PointType::ControlPoint));
                    points.push((to, PointType::Endpoint));
                }
                PathCommand::CubicTo { control1, control2, to } => {
                    points.push((control1, PointType::ControlPoint));
                    points.push((control2, PointType::ControlPoint));
                    points.push((to, PointType::Endpoint));
                }
                PathCommand::ClosePath => {}
            }
            points
                .into_iter()
                .map(move |(position, point_type)| (command_index, position, point_type))
        })
        .enumerate()
        .map(|(index, (command, position, point_type))| IndexedPoint {
            index,
            command,
            position,
            point_type,
        })
}

pub fn points(commands: &[PathCommand]) -> Vec<OutlinePoint> {
    iter_points(commands).map(|p| p.position).collect()
}

pub fn endpoints(commands: &[PathCommand]) -> Vec<OutlinePoint> {
    commands.iter().filter_map(PathCommand::endpoint).collect()
}

pub fn control_points(commands: &[PathCommand]) -> Vec<OutlinePoint> {
    iter_points(commands)
        .filter(|p| p.point_type == PointType::ControlPoint)
        .map(|p| p.position)
        .collect()
}

/// # Panics
///
/// If `index` is out of range.
pub fn point_type(commands: &[PathCommand], index: usize) -> PointType {
    match iter_points(commands).nth(index) {
        Some(point) => point.point_type,
        None => panic!("No point with index {} in a path of {} points", index, point_count(commands)),
    }
}

/// Moves the point at `index` by `offset` and returns the rewritten commands.
///
/// Moving an endpoint drags the control points incident to it along: the last control
/// of the curve it ends and the first control of the curve that starts there. Moving a
/// control point only moves that control point. The input is left untouched and the
/// result has the same commands in the same order.
///
/// A curve starts at the point flattened right before its own points, also when it
/// follows a `ClosePath`.
///
/// # Panics
///
/// If `index` is not smaller than the number of points in `commands`, or if a drawing
/// command comes before the first `MoveTo`.
pub fn displace(commands: &[PathCommand], index: usize, offset: OutlineVector) -> Vec<PathCommand> {
    let total = point_count(commands);
    assert!(index < total, "No point with index {} in a path of {} points", index, total);

    let shift = |p: OutlinePoint, hit: bool| if hit { p + offset } else { p };

    let mut result = Vec::with_capacity(commands.len());
    let mut count = 0;
    let mut started = false;

    for command in commands {
        if !started && !matches!(command, PathCommand::MoveTo(_)) {
            panic!("{:?} before the first MoveTo", command);
        }
        // The previous flattened point is the start of this curve
        let start_hit = count > 0 && count - 1 == index;
        let displaced = match *command {
            PathCommand::MoveTo(to) => {
                started = true;
                PathCommand::MoveTo(shift(to, count == index))
            }
            PathCommand::LineTo(to) => PathCommand::LineTo(shift(to, count == index)),
            PathCommand::QuadTo { control, to } => {
                let end_hit = count + 1 == index;
                PathCommand::QuadTo {
                    control: shift(control, start_hit || count == index || end_hit),
                    to: shift(to, end_hit),
                }
            }
            PathCommand::CubicTo { control1, control2, to } => {
                let end_hit = count + 2 == index;
                PathCommand::CubicTo {
                    control1: shift(control1, start_hit || count == index),
                    control2: shift(control2, count + 1 == index || end_hit),
                    to: shift(to, end_hit),
                }
            }
            PathCommand::ClosePath => PathCommand::ClosePath,
        };

        count += command.point_count();
        result.push(displaced);
    }

    result
}
