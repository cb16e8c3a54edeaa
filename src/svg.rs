//! Reading and writing the SVG path data mini-language (the `d` attribute of `<path>`),
//! and loading the outline of a whole SVG document.
//!
//! Supported commands are `M L H V Q T C S Z` in absolute and relative form. Arcs are
//! rejected.

use crate::error::{LoadError, ParseError};
use crate::geometry_utilities::reflect_point;
use crate::geometry_utilities::types::*;
use crate::path::{Path, PathCommand};
use euclid::point2;
use std::fmt;

/// Parses path data into drawing commands.
///
/// Commas and whitespace separate tokens. Numbers directly following a command repeat
/// it, except after `M`/`m` where they continue as `L`/`l`. Lowercase commands are
/// relative to the pen position at the start of the command.
///
/// The first error aborts parsing, nothing of the partial path is returned.
pub fn parse_path_data(d: &str) -> Result<Vec<PathCommand>, ParseError> {
    let result = PathDataParser::new(d).parse();
    if let Err(ref error) = result {
        log::debug!("rejected path data: {}", error);
    }
    result
}

/// Which kind of curve the remembered control point belongs to.
#[derive(Copy, Clone, Debug)]
enum LastControl {
    Quadratic(OutlinePoint),
    Cubic(OutlinePoint),
}

struct PathDataParser<'a> {
    src: &'a str,
    offset: usize,
    current: OutlinePoint,
    sub_path_start: OutlinePoint,
    last_command: Option<u8>,
    last_control: Option<LastControl>,
    commands: Vec<PathCommand>,
}

impl<'a> PathDataParser<'a> {
    fn new(src: &'a str) -> Self {
        PathDataParser {
            src,
            offset: 0,
            current: point2(0.0, 0.0),
            sub_path_start: point2(0.0, 0.0),
            last_command: None,
            last_control: None,
            commands: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Vec<PathCommand>, ParseError> {
        loop {
            self.skip_separators();
            let byte = match self.peek() {
                Some(byte) => byte,
                None => break,
            };
            let command_offset = self.offset;

            let command = if is_number_start(byte) {
                // Implicit repetition of the previous command
                match self.last_command {
                    Some(b'M') => b'L',
                    Some(b'm') => b'l',
                    Some(c @ b'Z') | Some(c @ b'z') => {
                        return Err(ParseError::MalformedArguments {
                            command: c as char,
                            offset: command_offset,
                        })
                    }
                    Some(c) => c,
                    None => return Err(ParseError::MissingCommand { offset: command_offset }),
                }
            } else if is_supported_command(byte) {
                self.offset += 1;
                byte
            } else {
                let command = self.src[command_offset..].chars().next().unwrap_or('\u{fffd}');
                return Err(ParseError::UnsupportedCommand {
                    command,
                    offset: command_offset,
                });
            };

            if self.commands.is_empty() && !matches!(command, b'M' | b'm') {
                return Err(ParseError::MissingMoveTo {
                    command: command as char,
                    offset: command_offset,
                });
            }

            self.parse_command(command, command_offset)?;
            self.last_command = Some(command);
        }

        Ok(self.commands)
    }

    fn parse_command(&mut self, command: u8, command_offset: usize) -> Result<(), ParseError> {
        let relative = command.is_ascii_lowercase();
        let origin = self.current;
        // Every coordinate of a relative command is measured from the pen position at
        // the start of that command.
        let base = if relative { origin.to_vector() } else { OutlineVector::zero() };

        let parsed = match command.to_ascii_uppercase() {
            b'M' => {
                let to = self.read_point(command, command_offset)? + base;
                self.sub_path_start = to;
                self.last_control = None;
                PathCommand::MoveTo(to)
            }
            b'L' => {
                let to = self.read_point(command, command_offset)? + base;
                self.last_control = None;
                PathCommand::LineTo(to)
            }
            b'H' => {
                let x = self.read_number(command, command_offset)? + base.x;
                self.last_control = None;
                PathCommand::LineTo(point2(x, origin.y))
            }
            b'V' => {
                let y = self.read_number(command, command_offset)? + base.y;
                self.last_control = None;
                PathCommand::LineTo(point2(origin.x, y))
            }
            b'Q' => {
                let control = self.read_point(command, command_offset)? + base;
                let to = self.read_point(command, command_offset)? + base;
                self.last_control = Some(LastControl::Quadratic(control));
                PathCommand::QuadTo { control, to }
            }
            b'T' => {
                let control = match self.last_control {
                    Some(LastControl::Quadratic(previous)) => reflect_point(previous, origin),
                    _ => origin,
                };
                let to = self.read_point(command, command_offset)? + base;
                self.last_control = Some(LastControl::Quadratic(control));
                PathCommand::QuadTo { control, to }
            }
            b'C' => {
                let control1 = self.read_point(command, command_offset)? + base;
                let control2 = self.read_point(command, command_offset)? + base;
                let to = self.read_point(command, command_offset)? + base;
                self.last_control = Some(LastControl::Cubic(control2));
                PathCommand::CubicTo { control1, control2, to }
            }
            b'S' => {
                let control1 = match self.last_control {
                    Some(LastControl::Cubic(previous)) => reflect_point(previous, origin),
                    _ => origin,
                };
                let control2 = self.read_point(command, command_offset)? + base;
                let to = self.read_point(command, command_offset)? + base;
                self.last_control = Some(LastControl::Cubic(control2));
                PathCommand::CubicTo { control1, control2, to }
            }
            b'Z' => {
                self.last_control = None;
                PathCommand::ClosePath
            }
            _ => unreachable!("command letters are filtered by is_supported_command"),
        };

        log::trace!("{} -> {:?}", command as char, parsed);
        self.current = match parsed {
            PathCommand::ClosePath => self.sub_path_start,
            _ => parsed.endpoint().unwrap_or(self.current),
        };
        self.commands.push(parsed);
        Ok(())
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.offset).copied()
    }

    fn skip_separators(&mut self) {
        while let Some(byte) = self.peek() {
            if byte.is_ascii_whitespace() || byte == b',' {
                self.offset += 1;
            } else {
                break;
            }
        }
    }

    fn read_point(&mut self, command: u8, command_offset: usize) -> Result<OutlinePoint, ParseError> {
        let x = self.read_number(command, command_offset)?;
        let y = self.read_number(command, command_offset)?;
        Ok(point2(x, y))
    }

    /// Reads `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
    fn read_number(&mut self, command: u8, command_offset: usize) -> Result<f32, ParseError> {
        let malformed = ParseError::MalformedArguments {
            command: command as char,
            offset: command_offset,
        };

        self.skip_separators();
        let bytes = self.src.as_bytes();
        let start = self.offset;
        let mut end = start;

        if let Some(b'+') | Some(b'-') = bytes.get(end) {
            end += 1;
        }
        let integer_digits = count_digits(&bytes[end..]);
        end += integer_digits;
        let mut fraction_digits = 0;
        if bytes.get(end) == Some(&b'.') {
            fraction_digits = count_digits(&bytes[end + 1..]);
            end += 1 + fraction_digits;
        }
        if integer_digits + fraction_digits == 0 {
            return Err(malformed);
        }
        if let Some(b'e') | Some(b'E') = bytes.get(end) {
            let mut exponent_end = end + 1;
            if let Some(b'+') | Some(b'-') = bytes.get(exponent_end) {
                exponent_end += 1;
            }
            let exponent_digits = count_digits(&bytes[exponent_end..]);
            if exponent_digits > 0 {
                end = exponent_end + exponent_digits;
            }
        }

        let value: f32 = self.src[start..end].parse().map_err(|_| malformed.clone())?;
        if !value.is_finite() {
            return Err(malformed);
        }
        self.offset = end;
        Ok(value)
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn is_number_start(byte: u8) -> bool {
    byte.is_ascii_digit() || matches!(byte, b'+' | b'-' | b'.')
}

fn is_supported_command(byte: u8) -> bool {
    matches!(
        byte.to_ascii_uppercase(),
        b'M' | b'L' | b'H' | b'V' | b'Q' | b'T' | b'C' | b'S' | b'Z'
    )
}

/// Writes commands as absolute path data, one command letter per segment.
///
/// `"M 0,0 L 10,0 Q 10,10 0,10 Z"`
pub fn write_path_data(w: &mut impl fmt::Write, commands: &[PathCommand]) -> fmt::Result {
    for (i, command) in commands.iter().enumerate() {
        if i > 0 {
            w.write_char(' ')?;
        }
        match *command {
            PathCommand::MoveTo(to) => write!(w, "M {},{}", to.x, to.y)?,
            PathCommand::LineTo(to) => write!(w, "L {},{}", to.x, to.y)?,
            PathCommand::QuadTo { control, to } => write!(w, "Q {},{} {},{}", control.x, control.y, to.x, to.y)?,
            PathCommand::CubicTo { control1, control2, to } => write!(
                w,
                "C {},{} {},{} {},{}",
                control1.x, control1.y, control2.x, control2.y, to.x, to.y
            )?,
            PathCommand::ClosePath => w.write_char('Z')?,
        }
    }
    Ok(())
}

pub fn to_path_data(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    // Writing into a String cannot fail
    let _ = write_path_data(&mut d, commands);
    d
}

/// Loads every `<path>` of an SVG document into one outline.
///
/// The `d` attribute of each `<path>` element is parsed and appended in document order,
/// mirrored vertically so the outline ends up y-up. Other elements and `transform`
/// attributes are ignored.
pub fn load_svg_paths(document: &str) -> Result<Path, LoadError> {
    let document = roxmltree::Document::parse(document)?;
    let flip = OutlineTransform::scale(1.0, -1.0);

    let mut outline = Path::new();
    let path_elements = document
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "path");
    for (element, node) in path_elements.enumerate() {
        let d = node
            .attribute("d")
            .ok_or(LoadError::MissingPathData { element })?;
        let path = Path::parse(d).map_err(|source| LoadError::PathData { element, source })?;
        log::debug!("<path> element {} has {} commands", element, path.len());
        outline.append(&path, Some(&flip));
    }

    Ok(outline)
}
