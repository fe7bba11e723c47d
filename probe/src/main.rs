//! Run both resolvers for a single sphere against the default 2x2x2 box.
//!
//! Usage: probe <x> <y> <z> [radius] [heading_deg]

use anyhow::{bail, Context};
use cuboid_collide::{compare, CollisionConfig, Cuboid, Sphere};
use glam::DVec3;

const USAGE: &str = "usage: probe <x> <y> <z> [radius] [heading_deg]";

#[derive(Debug)]
struct Args {
    center: DVec3,
    radius: f64,
    heading: f64,
}

fn parse_number(value: &str, name: &str) -> anyhow::Result<f64> {
    value
        .parse::<f64>()
        .with_context(|| format!("invalid {name}: {value:?}"))
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    if !(3..=5).contains(&args.len()) {
        bail!("{USAGE}");
    }

    let x = parse_number(&args[0], "x")?;
    let y = parse_number(&args[1], "y")?;
    let z = parse_number(&args[2], "z")?;
    let radius = match args.get(3) {
        Some(value) => parse_number(value, "radius")?,
        None => 0.0,
    };
    let heading = match args.get(4) {
        Some(value) => parse_number(value, "heading")?,
        None => 0.0,
    };

    Ok(Args {
        center: DVec3::new(x, y, z),
        radius,
        heading,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;

    let mut cuboid = Cuboid::cube(2.0)?;
    cuboid.set_yaw_degrees(args.heading);
    let sphere = Sphere::new(args.center, args.radius).context("invalid sphere")?;

    log::info!(
        "sphere at {:?} (r = {}), heading {} deg",
        sphere.center(),
        sphere.radius(),
        cuboid.heading_degrees()
    );

    let comparison = compare(&cuboid, &sphere, &CollisionConfig::default());
    println!("{comparison}");
    if !comparison.agrees(1e-9) {
        log::warn!("legacy and current resolvers disagree");
    }
    Ok(())
}
