use eframe::egui::{Color32, Painter, Rect, Stroke, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::util::stable_seed;

use super::render_utils::{circle_visible, edge_visible, fading_line, with_alpha};

mod nodes;
mod presets;
mod streaks;

use nodes::{Node, advance_nodes, spawn_nodes};
pub use presets::FieldPreset;
use presets::{FieldConfig, NodeStyle};
use streaks::StreakSet;

const FRAME_MS: f64 = 1_000.0 / 60.0;
const MAX_FRAMES_PER_STEP: f32 = 3.0;
const GLOW_REACH: f32 = 2.0;

fn node_reach(style: &NodeStyle, radius: f32) -> f32 {
    if style.glow { radius * GLOW_REACH } else { radius }
}

#[derive(Debug, Default)]
pub struct AnimationLoop {
    running: bool,
    last_frame_ms: Option<f64>,
}

impl AnimationLoop {
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.last_frame_ms = None;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last_frame_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Milliseconds since the previous frame, or `None` once stopped.
    pub fn frame(&mut self, now_ms: f64) -> Option<f64> {
        if !self.running {
            return None;
        }
        let elapsed = self
            .last_frame_ms
            .map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_frame_ms = Some(now_ms);
        Some(elapsed)
    }
}

pub struct ParticleField {
    preset: FieldPreset,
    config: FieldConfig,
    rng: StdRng,
    nodes: Vec<Node>,
    streaks: StreakSet,
    clock: f32,
    size: Vec2,
    animation: AnimationLoop,
}

impl ParticleField {
    pub fn new(preset: FieldPreset, seed: u64) -> Self {
        let mut animation = AnimationLoop::default();
        animation.start();
        Self {
            preset,
            config: preset.config(),
            rng: StdRng::seed_from_u64(stable_seed(preset.label(), seed)),
            nodes: Vec::new(),
            streaks: StreakSet::default(),
            clock: 0.0,
            size: Vec2::ZERO,
            animation,
        }
    }

    pub fn preset(&self) -> FieldPreset {
        self.preset
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    pub fn stop(&mut self) {
        self.animation.stop();
    }

    fn reinitialize(&mut self, size: Vec2) {
        self.nodes = spawn_nodes(&mut self.rng, &self.config, size);
        self.streaks.clear();
        self.clock = 0.0;
        self.size = size;
        tracing::debug!(
            preset = self.preset.label(),
            nodes = self.nodes.len(),
            width = size.x,
            height = size.y,
            "particle field reinitialized"
        );
    }

    /// Advances one frame. Returns `true` while the field wants another repaint.
    pub fn step(&mut self, now_ms: f64, size: Vec2) -> bool {
        if !self.animation.is_running() {
            return false;
        }
        if size.x <= 0.0 || size.y <= 0.0 {
            return false;
        }
        if size != self.size {
            self.reinitialize(size);
        }

        let Some(elapsed_ms) = self.animation.frame(now_ms) else {
            return false;
        };
        let frames = ((elapsed_ms / FRAME_MS) as f32).clamp(0.0, MAX_FRAMES_PER_STEP);

        self.clock += self.config.motion.clock_step * frames;
        advance_nodes(&mut self.nodes, &self.config.motion, self.clock, frames, size);
        if let Some(style) = &self.config.streaks {
            self.streaks
                .advance(&mut self.rng, style, now_ms, frames, size);
        }
        true
    }

    pub fn paint(&self, painter: &Painter, rect: Rect) {
        let clip = painter.clip_rect().intersect(rect);
        if clip.width() <= 0.0 || clip.height() <= 0.0 {
            return;
        }
        let origin = rect.min.to_vec2();

        if let Some(links) = &self.config.links {
            for (index, a) in self.nodes.iter().enumerate() {
                for b in &self.nodes[index + 1..] {
                    let distance = a.position.distance(b.position);
                    if distance >= links.max_distance {
                        continue;
                    }
                    let start = a.position + origin;
                    let end = b.position + origin;
                    if !edge_visible(clip, start, end, links.width) {
                        continue;
                    }
                    let alpha = (1.0 - distance / links.max_distance) * links.max_alpha;
                    painter.line_segment(
                        [start, end],
                        Stroke::new(links.width, with_alpha(links.color, alpha)),
                    );
                }
            }
        }

        let style = &self.config.node;
        for node in &self.nodes {
            let at = node.position + origin;
            let reach = node_reach(style, node.radius);
            if !circle_visible(clip, at, reach) {
                continue;
            }
            if style.glow {
                painter.circle_filled(at, reach, with_alpha(style.color, node.alpha * 0.08));
                painter.circle_filled(
                    at,
                    node.radius * 1.4,
                    with_alpha(style.color, node.alpha * 0.2),
                );
            }
            painter.circle_filled(at, node.radius, with_alpha(style.color, node.alpha));
        }

        if let Some(streak_style) = &self.config.streaks {
            for streak in self.streaks.live() {
                let head = streak.position + origin;
                let tail = streak.tail() + origin;
                if !edge_visible(clip, head, tail, streak_style.width) {
                    continue;
                }
                fading_line(
                    painter,
                    head,
                    tail,
                    Color32::WHITE,
                    streak.opacity,
                    streak_style.width,
                );
                painter.circle_filled(
                    head,
                    streak_style.head_radius,
                    with_alpha(Color32::WHITE, streak.opacity),
                );
            }
        }
    }
}
