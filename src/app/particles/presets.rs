use std::ops::Range;

use eframe::egui::{Color32, Vec2, vec2};

#[derive(Clone, Debug)]
pub enum Count {
    Fixed(usize),
    /// One node (or clump) per this many square pixels.
    PerArea(f32),
}

impl Count {
    pub fn resolve(&self, size: Vec2) -> usize {
        match self {
            Count::Fixed(count) => *count,
            Count::PerArea(area) if *area > 0.0 => ((size.x * size.y) / area).floor() as usize,
            Count::PerArea(_) => 0,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Placement {
    Region { min: Vec2, max: Vec2 },
    Clumps {
        radius: Range<f32>,
        per_clump: Range<usize>,
    },
}

#[derive(Clone, Debug)]
pub struct Cluster {
    pub name: &'static str,
    pub count: Count,
    pub placement: Placement,
    /// Replaces the field's node sizing for this cluster only.
    pub sizing: Option<NodeSizing>,
}

impl Cluster {
    fn region(name: &'static str, count: usize, min: [f32; 2], max: [f32; 2]) -> Self {
        Self {
            name,
            count: Count::Fixed(count),
            placement: Placement::Region {
                min: vec2(min[0], min[1]),
                max: vec2(max[0], max[1]),
            },
            sizing: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SizeTier {
    pub above: f32,
    pub radius: Range<f32>,
}

#[derive(Clone, Debug)]
pub struct NodeSizing {
    pub radius: Range<f32>,
    pub alpha: Range<f32>,
    /// Checked in order against one roll in `[0, 1)`; the first tier the roll exceeds wins.
    pub tiers: Vec<SizeTier>,
}

impl NodeSizing {
    fn uniform(radius: Range<f32>, alpha: Range<f32>) -> Self {
        Self {
            radius,
            alpha,
            tiers: Vec::new(),
        }
    }

    pub fn radius_for(&self, roll: f32) -> &Range<f32> {
        self.tiers
            .iter()
            .find(|tier| roll > tier.above)
            .map_or(&self.radius, |tier| &tier.radius)
    }
}

#[derive(Clone, Debug)]
pub struct NodeStyle {
    pub sizing: NodeSizing,
    pub color: Color32,
    pub glow: bool,
}

#[derive(Clone, Debug)]
pub struct Motion {
    pub amplitude: Vec2,
    pub speed: Range<f32>,
    pub drift_x: Range<f32>,
    pub drift_y: Range<f32>,
    pub wrap_margin: f32,
    /// Field clock advance per 60 Hz frame.
    pub clock_step: f32,
}

#[derive(Clone, Debug)]
pub struct LinkStyle {
    pub max_distance: f32,
    pub max_alpha: f32,
    pub color: Color32,
    pub width: f32,
}

#[derive(Clone, Debug)]
pub struct StreakStyle {
    pub spawn_interval_ms: Range<f64>,
    pub max_live: usize,
    pub length: Range<f32>,
    pub speed: Range<f32>,
    pub decay: f32,
    pub width: f32,
    pub head_radius: f32,
}

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub clusters: Vec<Cluster>,
    pub node: NodeStyle,
    pub motion: Motion,
    pub links: Option<LinkStyle>,
    pub streaks: Option<StreakStyle>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldPreset {
    Starfield,
    Network,
    Constellation,
}

impl FieldPreset {
    pub fn label(self) -> &'static str {
        match self {
            FieldPreset::Starfield => "starfield",
            FieldPreset::Network => "network",
            FieldPreset::Constellation => "constellation",
        }
    }

    pub fn config(self) -> FieldConfig {
        match self {
            FieldPreset::Starfield => FieldConfig {
                clusters: vec![
                    Cluster {
                        name: "sky",
                        count: Count::PerArea(1_500.0),
                        placement: Placement::Region {
                            min: Vec2::ZERO,
                            max: vec2(1.0, 1.0),
                        },
                        sizing: None,
                    },
                    Cluster {
                        name: "clumps",
                        count: Count::PerArea(30_000.0),
                        placement: Placement::Clumps {
                            radius: 30.0..80.0,
                            per_clump: 4..12,
                        },
                        sizing: Some(NodeSizing::uniform(0.3..1.1, 0.3..0.8)),
                    },
                ],
                node: NodeStyle {
                    sizing: NodeSizing {
                        radius: 0.3..0.9,
                        alpha: 0.4..1.0,
                        tiers: vec![
                            SizeTier {
                                above: 0.95,
                                radius: 1.5..3.5,
                            },
                            SizeTier {
                                above: 0.8,
                                radius: 0.8..2.0,
                            },
                        ],
                    },
                    color: Color32::WHITE,
                    glow: false,
                },
                motion: Motion {
                    amplitude: Vec2::ZERO,
                    speed: 0.0..0.0,
                    drift_x: -0.25..0.25,
                    drift_y: -1.4..-0.4,
                    wrap_margin: 0.0,
                    clock_step: 0.003,
                },
                links: None,
                streaks: Some(StreakStyle {
                    spawn_interval_ms: 150.0..300.0,
                    max_live: 10,
                    length: 40.0..90.0,
                    speed: 8.0..18.0,
                    decay: 0.012,
                    width: 2.0,
                    head_radius: 1.5,
                }),
            },
            FieldPreset::Network => FieldConfig {
                clusters: vec![
                    Cluster::region("uniform", 50, [0.0, 0.0], [1.0, 1.0]),
                    Cluster::region("top-left", 5, [0.0, 0.0], [0.2, 0.25]),
                    Cluster::region("top-right", 5, [0.8, 0.0], [1.0, 0.25]),
                    Cluster::region("bottom-left", 5, [0.0, 0.75], [0.2, 1.0]),
                    Cluster::region("bottom-right", 5, [0.8, 0.75], [1.0, 1.0]),
                ],
                node: NodeStyle {
                    sizing: NodeSizing::uniform(1.5..2.5, 0.7..0.7),
                    color: Color32::from_rgb(180, 180, 180),
                    glow: false,
                },
                motion: Motion {
                    amplitude: vec2(8.0, 6.0),
                    speed: 0.1..0.3,
                    drift_x: -0.075..0.075,
                    drift_y: -0.075..0.075,
                    wrap_margin: 50.0,
                    clock_step: 0.003,
                },
                links: Some(LinkStyle {
                    max_distance: 150.0,
                    max_alpha: 0.2,
                    color: Color32::from_rgb(100, 100, 100),
                    width: 0.5,
                }),
                streaks: Some(StreakStyle {
                    spawn_interval_ms: 150.0..300.0,
                    max_live: 10,
                    length: 30.0..70.0,
                    speed: 6.0..14.0,
                    decay: 0.015,
                    width: 1.5,
                    head_radius: 1.0,
                }),
            },
            FieldPreset::Constellation => FieldConfig {
                clusters: vec![
                    Cluster::region("left-edge", 12, [0.0, 0.0], [0.15, 1.0]),
                    Cluster::region("right-edge", 12, [0.85, 0.0], [1.0, 1.0]),
                    Cluster::region("bottom-left", 18, [0.0, 0.6], [0.4, 1.0]),
                    Cluster::region("bottom-right", 16, [0.6, 0.6], [1.0, 1.0]),
                    Cluster::region("top-left", 10, [0.0, 0.0], [0.3, 0.3]),
                    Cluster::region("top-right", 10, [0.7, 0.0], [1.0, 0.3]),
                    Cluster::region("center", 20, [0.2, 0.2], [0.8, 0.8]),
                ],
                node: NodeStyle {
                    sizing: NodeSizing::uniform(0.5..2.0, 0.8..0.8),
                    color: Color32::WHITE,
                    glow: true,
                },
                motion: Motion {
                    amplitude: vec2(15.0, 12.0),
                    speed: 0.3..1.1,
                    drift_x: -0.2..0.2,
                    drift_y: -0.2..0.2,
                    wrap_margin: 20.0,
                    clock_step: 0.015,
                },
                links: Some(LinkStyle {
                    max_distance: 150.0,
                    max_alpha: 0.3,
                    color: Color32::WHITE,
                    width: 1.0,
                }),
                streaks: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constellation_totals_ninety_eight_nodes() {
        let config = FieldPreset::Constellation.config();
        let total: usize = config
            .clusters
            .iter()
            .map(|cluster| cluster.count.resolve(vec2(1_280.0, 720.0)))
            .sum();
        assert_eq!(total, 98);
    }

    #[test]
    fn starfield_sizes_fall_into_three_tiers() {
        let sizing = FieldPreset::Starfield.config().node.sizing;
        assert_eq!(sizing.radius_for(0.97), &(1.5..3.5));
        assert_eq!(sizing.radius_for(0.9), &(0.8..2.0));
        assert_eq!(sizing.radius_for(0.8), &(0.3..0.9));
        assert_eq!(sizing.radius_for(0.1), &(0.3..0.9));
    }

    #[test]
    fn starfield_clumps_size_their_own_stars() {
        let config = FieldPreset::Starfield.config();
        let clumps = config
            .clusters
            .iter()
            .find(|cluster| cluster.name == "clumps")
            .and_then(|cluster| cluster.sizing.clone())
            .expect("clump sizing");
        assert_eq!(clumps.radius, 0.3..1.1);
        assert_eq!(clumps.alpha, 0.3..0.8);
        assert!(clumps.tiers.is_empty());
    }

    #[test]
    fn density_counts_scale_with_area() {
        let count = Count::PerArea(1_500.0);
        assert_eq!(count.resolve(vec2(300.0, 50.0)), 10);
        assert_eq!(count.resolve(Vec2::ZERO), 0);
        assert_eq!(Count::PerArea(0.0).resolve(vec2(10.0, 10.0)), 0);
    }

    #[test]
    fn every_link_threshold_is_150px() {
        for preset in [FieldPreset::Network, FieldPreset::Constellation] {
            let links = preset.config().links.expect("linked preset");
            assert_eq!(links.max_distance, 150.0);
        }
        assert!(FieldPreset::Starfield.config().links.is_none());
    }
}
