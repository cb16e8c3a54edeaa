use anyhow::Context;
use log::info;
use outline_inspector::config::{self, Config, Source};
use outline_inspector::geometry_utilities::types::*;
use outline_inspector::svg::load_svg_paths;
use outline_inspector::{Path, PointType};
use std::time::Instant;

fn print_curves(path: &Path, samples: usize) {
    println!("Curves:");
    for (i, curve) in path.iter_curves().enumerate() {
        println!("  {}: {:?}", i, curve);
        for (t, p) in curve.samples(samples) {
            println!("      t={:.3} ({}, {})", t, p.x, p.y);
        }
    }
}

fn print_points(path: &Path) {
    println!("Points:");
    for point in path.iter_points() {
        let kind = match point.point_type {
            PointType::Endpoint => "endpoint",
            PointType::ControlPoint => "control",
        };
        println!(
            "  {:>3} {:<8} ({}, {}) from command {}",
            point.index, kind, point.position.x, point.position.y, point.command
        );
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    let t0 = Instant::now();
    let mut path: Path = match &config.source {
        Source::PathData(path_data) => path_data
            .parse()
            .with_context(|| format!("could not parse path data {:?}", path_data))?,
        Source::SvgFile(file) => {
            let document = std::fs::read_to_string(file)
                .with_context(|| format!("could not read {}", file.display()))?;
            load_svg_paths(&document).with_context(|| format!("could not load {}", file.display()))?
        }
    };
    info!("parsed {} commands in {:?}", path.len(), t0.elapsed());

    if config.flip_y {
        path = path.transformed(&OutlineTransform::scale(1.0, -1.0));
    }

    print_curves(&path, config.samples);
    print_points(&path);

    if let Some((index, offset)) = config.displace {
        if index >= path.point_count() {
            anyhow::bail!("point index {} is out of range for a path with {} points", index, path.point_count());
        }
        let displaced = path.displacing_point(index, offset);
        info!("moved point {} by {:?}", index, offset);
        println!("Displaced:");
        println!("  {}", displaced);
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let matches = config::app().get_matches();
    let config = Config::from_matches(&matches)?;
    run(config)
}
