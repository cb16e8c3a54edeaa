//! Command line configuration of the `outline-inspector` binary.

use crate::geometry_utilities::types::*;
use anyhow::{anyhow, Context};
use clap::{App, Arg, ArgMatches};
use euclid::vec2;
use std::path::PathBuf;

pub const DEFAULT_SAMPLES: usize = 0;

/// Where the outline comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    /// SVG path data given on the command line.
    PathData(String),
    /// An SVG document whose `<path>` elements are loaded.
    SvgFile(PathBuf),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub source: Source,
    /// Point index and offset to displace it by.
    pub displace: Option<(usize, OutlineVector)>,
    /// Mirror the outline vertically before anything else, mapping SVG's y-down
    /// coordinates to a y-up space.
    pub flip_y: bool,
    /// Number of evenly spaced points to evaluate on each curve.
    pub samples: usize,
}

pub fn app() -> App<'static, 'static> {
    App::new("outline-inspector")
        .about("Inspects and edits SVG path data")
        .arg(
            Arg::with_name("PATH_DATA")
                .help("SVG path data, for example \"M 0,0 L 10,0 Z\"")
                .required_unless("svg")
                .conflicts_with("svg")
                .index(1),
        )
        .arg(
            Arg::with_name("svg")
                .long("svg")
                .value_name("FILE")
                .takes_value(true)
                .help("SVG document to load the <path> elements of, mirrored to y-up"),
        )
        .arg(
            Arg::with_name("displace")
                .short("d")
                .long("displace")
                .value_name("INDEX")
                .takes_value(true)
                .requires("offset")
                .help("Index of the point to move"),
        )
        .arg(
            Arg::with_name("offset")
                .short("o")
                .long("offset")
                .value_name("DX,DY")
                .takes_value(true)
                .allow_hyphen_values(true)
                .requires("displace")
                .help("Offset to move the displaced point by"),
        )
        .arg(
            Arg::with_name("flip-y")
                .long("flip-y")
                .help("Mirror the outline vertically before inspecting it"),
        )
        .arg(
            Arg::with_name("samples")
                .short("s")
                .long("samples")
                .value_name("COUNT")
                .takes_value(true)
                .help("Number of points to evaluate on each curve"),
        )
}

/// Parses an offset written as `dx,dy`.
pub fn parse_vector(value: &str) -> anyhow::Result<OutlineVector> {
    let mut parts = value.split(',').map(str::trim);
    let (x, y) = match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => (x, y),
        _ => return Err(anyhow!("expected an offset of the form DX,DY, got {:?}", value)),
    };
    let x: f32 = x.parse().with_context(|| format!("invalid x offset {:?}", x))?;
    let y: f32 = y.parse().with_context(|| format!("invalid y offset {:?}", y))?;
    Ok(vec2(x, y))
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<Config> {
        let source = match (matches.value_of("PATH_DATA"), matches.value_of("svg")) {
            (Some(path_data), None) => Source::PathData(path_data.to_owned()),
            (None, Some(file)) => Source::SvgFile(PathBuf::from(file)),
            (Some(_), Some(_)) => return Err(anyhow!("path data and --svg cannot be combined")),
            (None, None) => return Err(anyhow!("missing path data")),
        };

        let displace = match (matches.value_of("displace"), matches.value_of("offset")) {
            (Some(index), Some(offset)) => {
                let index: usize = index
                    .parse()
                    .with_context(|| format!("invalid point index {:?}", index))?;
                Some((index, parse_vector(offset)?))
            }
            (None, None) => None,
            _ => return Err(anyhow!("--displace and --offset must be given together")),
        };

        let samples = match matches.value_of("samples") {
            Some(samples) => samples
                .parse()
                .with_context(|| format!("invalid sample count {:?}", samples))?,
            None => DEFAULT_SAMPLES,
        };

        Ok(Config {
            source,
            displace,
            flip_y: matches.is_present("flip-y"),
            samples,
        })
    }

    pub fn from_args<I, T>(args: I) -> anyhow::Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;
        Config::from_matches(&matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_args(vec!["outline-inspector", "M 0,0 L 1,1"]).unwrap();
        assert_eq!(
            config,
            Config {
                source: Source::PathData("M 0,0 L 1,1".to_owned()),
                displace: None,
                flip_y: false,
                samples: DEFAULT_SAMPLES,
            }
        );
    }

    #[test]
    fn test_all_options() {
        let config = Config::from_args(vec![
            "outline-inspector",
            "--flip-y",
            "--samples",
            "4",
            "--displace",
            "2",
            "--offset",
            "-1.5,2",
            "M 0,0 L 1,1",
        ])
        .unwrap();
        assert!(config.flip_y);
        assert_eq!(config.samples, 4);
        assert_eq!(config.displace, Some((2, vec2(-1.5, 2.0))));
    }

    #[test]
    fn test_displace_requires_offset() {
        assert!(Config::from_args(vec!["outline-inspector", "--displace", "1", "M 0,0"]).is_err());
    }

    #[test]
    fn test_parse_vector() {
        assert_eq!(parse_vector("3, -4").unwrap(), vec2(3.0, -4.0));
        assert!(parse_vector("3").is_err());
        assert!(parse_vector("1,2,3").is_err());
        assert!(parse_vector("a,2").is_err());
    }

    #[test]
    fn test_missing_path_data() {
        assert!(Config::from_args(vec!["outline-inspector"]).is_err());
    }

    #[test]
    fn test_svg_file() {
        let config = Config::from_args(vec!["outline-inspector", "--svg", "glyph.svg"]).unwrap();
        assert_eq!(config.source, Source::SvgFile(PathBuf::from("glyph.svg")));
        assert!(Config::from_args(vec!["outline-inspector", "--svg", "glyph.svg", "M 0,0"]).is_err());
    }
}
