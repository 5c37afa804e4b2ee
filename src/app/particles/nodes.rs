use std::f32::consts::TAU;
use std::ops::Range;

use eframe::egui::{Pos2, Vec2, pos2, vec2};
use rand::Rng;

use super::presets::{FieldConfig, Motion, NodeSizing, Placement};

#[derive(Clone, Debug)]
pub struct Node {
    pub position: Pos2,
    pub origin: Pos2,
    pub radius: f32,
    pub alpha: f32,
    pub phase: f32,
    pub speed: f32,
    pub drift: Vec2,
}

pub(super) fn sample_range<R: Rng>(rng: &mut R, range: &Range<f32>) -> f32 {
    if range.start >= range.end {
        range.start
    } else {
        rng.random_range(range.clone())
    }
}

fn create_node<R: Rng>(rng: &mut R, at: Pos2, sizing: &NodeSizing, motion: &Motion) -> Node {
    let roll = rng.random::<f32>();
    let radius = sample_range(rng, sizing.radius_for(roll));

    Node {
        position: at,
        origin: at,
        radius,
        alpha: sample_range(rng, &sizing.alpha),
        phase: rng.random::<f32>() * TAU,
        speed: sample_range(rng, &motion.speed),
        drift: vec2(
            sample_range(rng, &motion.drift_x),
            sample_range(rng, &motion.drift_y),
        ),
    }
}

pub fn spawn_nodes<R: Rng>(rng: &mut R, config: &FieldConfig, size: Vec2) -> Vec<Node> {
    let mut nodes = Vec::new();
    for cluster in &config.clusters {
        let count = cluster.count.resolve(size);
        let sizing = cluster.sizing.as_ref().unwrap_or(&config.node.sizing);
        match &cluster.placement {
            Placement::Region { min, max } => {
                nodes.reserve(count);
                for _ in 0..count {
                    let x = size.x * (min.x + rng.random::<f32>() * (max.x - min.x));
                    let y = size.y * (min.y + rng.random::<f32>() * (max.y - min.y));
                    nodes.push(create_node(rng, pos2(x, y), sizing, &config.motion));
                }
            }
            Placement::Clumps { radius, per_clump } => {
                for _ in 0..count {
                    let center = pos2(rng.random::<f32>() * size.x, rng.random::<f32>() * size.y);
                    let spread = sample_range(rng, radius);
                    let members = if per_clump.start >= per_clump.end {
                        per_clump.start
                    } else {
                        rng.random_range(per_clump.clone())
                    };
                    for _ in 0..members {
                        let angle = rng.random::<f32>() * TAU;
                        let distance = rng.random::<f32>() * spread;
                        let at = center + vec2(angle.cos(), angle.sin()) * distance;
                        nodes.push(create_node(rng, at, sizing, &config.motion));
                    }
                }
            }
        }
    }
    nodes
}

pub fn advance_nodes(nodes: &mut [Node], motion: &Motion, clock: f32, frames: f32, size: Vec2) {
    let margin = motion.wrap_margin;
    for node in nodes {
        let angle = clock * node.speed + node.phase;
        let wobble = vec2(
            angle.sin() * motion.amplitude.x,
            angle.cos() * motion.amplitude.y,
        );
        node.position = node.origin + wobble;

        node.origin += node.drift * frames;

        if node.origin.x < -margin {
            node.origin.x = size.x + margin;
        } else if node.origin.x > size.x + margin {
            node.origin.x = -margin;
        }
        if node.origin.y < -margin {
            node.origin.y = size.y + margin;
        } else if node.origin.y > size.y + margin {
            node.origin.y = -margin;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::app::particles::FieldPreset;

    #[test]
    fn region_nodes_stay_inside_their_region() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = FieldPreset::Constellation.config();
        let size = vec2(1_000.0, 500.0);
        let nodes = spawn_nodes(&mut rng, &config, size);

        // First cluster is the left edge band: x within 15% of the width.
        assert!(nodes[..12].iter().all(|node| node.origin.x <= 150.0));
        assert!(nodes.iter().all(|node| node.position == node.origin));
    }

    #[test]
    fn clump_stars_use_the_clump_sizing() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = FieldPreset::Starfield.config();
        let size = vec2(600.0, 500.0);
        let nodes = spawn_nodes(&mut rng, &config, size);

        let sky = config.clusters[0].count.resolve(size);
        assert_eq!(sky, 200);
        assert!(nodes.len() > sky);
        assert!(nodes[..sky].iter().all(|node| node.alpha >= 0.4));
        assert!(nodes[sky..].iter().all(|node| {
            (0.3..1.1).contains(&node.radius) && (0.3..0.8).contains(&node.alpha)
        }));
    }

    #[test]
    fn origins_wrap_past_margin() {
        let motion = FieldPreset::Constellation.config().motion;
        let size = vec2(200.0, 100.0);
        let mut nodes = vec![Node {
            position: pos2(0.0, 0.0),
            origin: pos2(size.x + motion.wrap_margin + 0.1, -motion.wrap_margin - 0.1),
            radius: 1.0,
            alpha: 1.0,
            phase: 0.0,
            speed: 0.0,
            drift: Vec2::ZERO,
        }];

        advance_nodes(&mut nodes, &motion, 0.0, 1.0, size);
        assert_eq!(nodes[0].origin.x, -motion.wrap_margin);
        assert_eq!(nodes[0].origin.y, size.y + motion.wrap_margin);
    }

    #[test]
    fn position_oscillates_around_origin() {
        let motion = FieldPreset::Network.config().motion;
        let mut nodes = vec![Node {
            position: pos2(50.0, 50.0),
            origin: pos2(50.0, 50.0),
            radius: 1.0,
            alpha: 1.0,
            phase: 0.0,
            speed: 1.0,
            drift: Vec2::ZERO,
        }];

        let clock = std::f32::consts::FRAC_PI_2;
        advance_nodes(&mut nodes, &motion, clock, 1.0, vec2(100.0, 100.0));
        assert!((nodes[0].position.x - (50.0 + motion.amplitude.x)).abs() < 1e-4);
        assert!((nodes[0].position.y - 50.0).abs() < 1e-4);
    }
}
