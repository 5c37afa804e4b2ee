use std::f32::consts::FRAC_PI_4;

use eframe::egui::{Pos2, Vec2, pos2, vec2};
use rand::Rng;

use super::nodes::sample_range;
use super::presets::StreakStyle;

#[derive(Clone, Debug)]
pub struct Streak {
    pub position: Pos2,
    pub angle: f32,
    pub length: f32,
    pub speed: f32,
    pub opacity: f32,
}

impl Streak {
    pub fn direction(&self) -> Vec2 {
        vec2(self.angle.cos(), self.angle.sin())
    }

    pub fn tail(&self) -> Pos2 {
        self.position - self.direction() * self.length
    }

    fn is_spent(&self, size: Vec2) -> bool {
        self.opacity <= 0.0
            || self.position.x > size.x
            || self.position.y > size.y
            || (self.position.x < 0.0 && self.tail().x < 0.0)
    }
}

#[derive(Debug, Default)]
pub struct StreakSet {
    live: Vec<Streak>,
    next_spawn_ms: Option<f64>,
}

impl StreakSet {
    pub fn live(&self) -> &[Streak] {
        &self.live
    }

    pub fn clear(&mut self) {
        self.live.clear();
        self.next_spawn_ms = None;
    }

    fn spawn<R: Rng>(rng: &mut R, style: &StreakStyle, size: Vec2) -> Streak {
        Streak {
            position: pos2(
                rng.random::<f32>() * size.x * 0.8,
                rng.random::<f32>() * size.y * 0.3,
            ),
            angle: FRAC_PI_4 + (rng.random::<f32>() - 0.5) * 0.3,
            length: sample_range(rng, &style.length),
            speed: sample_range(rng, &style.speed),
            opacity: 1.0,
        }
    }

    fn schedule_next<R: Rng>(&mut self, rng: &mut R, style: &StreakStyle, now_ms: f64) {
        let interval = &style.spawn_interval_ms;
        let wait = if interval.start >= interval.end {
            interval.start
        } else {
            rng.random_range(interval.clone())
        };
        self.next_spawn_ms = Some(now_ms + wait);
    }

    pub fn advance<R: Rng>(
        &mut self,
        rng: &mut R,
        style: &StreakStyle,
        now_ms: f64,
        frames: f32,
        size: Vec2,
    ) {
        match self.next_spawn_ms {
            None => self.schedule_next(rng, style, now_ms),
            Some(due) if now_ms >= due => {
                if self.live.len() < style.max_live {
                    self.live.push(Self::spawn(rng, style, size));
                }
                self.schedule_next(rng, style, now_ms);
            }
            Some(_) => {}
        }

        for streak in &mut self.live {
            streak.position += streak.direction() * streak.speed * frames;
            streak.opacity -= style.decay * frames;
        }
        self.live.retain(|streak| !streak.is_spent(size));
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::app::particles::FieldPreset;

    fn style() -> StreakStyle {
        FieldPreset::Network.config().streaks.expect("network has streaks")
    }

    #[test]
    fn never_exceeds_live_cap() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut streaks = StreakSet::default();
        let style = StreakStyle {
            decay: 0.0,
            speed: 0.0..0.0,
            ..style()
        };
        let size = vec2(4_000.0, 4_000.0);

        let mut now = 0.0;
        for _ in 0..400 {
            streaks.advance(&mut rng, &style, now, 1.0, size);
            assert!(streaks.live().len() <= style.max_live);
            now += 100.0;
        }
        assert_eq!(streaks.live().len(), style.max_live);
    }

    #[test]
    fn spawns_on_cadence() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut streaks = StreakSet::default();
        let style = style();
        let size = vec2(1_000.0, 1_000.0);

        streaks.advance(&mut rng, &style, 0.0, 0.0, size);
        streaks.advance(&mut rng, &style, 149.0, 0.0, size);
        assert!(streaks.live().is_empty());

        streaks.advance(&mut rng, &style, 300.0, 0.0, size);
        assert_eq!(streaks.live().len(), 1);
    }

    #[test]
    fn faded_streaks_are_pruned() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut streaks = StreakSet::default();
        let style = StreakStyle {
            spawn_interval_ms: 1.0e9..1.0e9,
            speed: 0.0..0.0,
            ..style()
        };
        let size = vec2(1_000.0, 1_000.0);
        streaks.live.push(Streak {
            position: pos2(10.0, 10.0),
            angle: FRAC_PI_4,
            length: 40.0,
            speed: 0.0,
            opacity: 0.02,
        });

        streaks.advance(&mut rng, &style, 0.0, 1.0, size);
        assert_eq!(streaks.live().len(), 1);
        streaks.advance(&mut rng, &style, 16.0, 1.0, size);
        assert!(streaks.live().is_empty());
    }

    #[test]
    fn streaks_leaving_the_surface_are_pruned() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut streaks = StreakSet::default();
        let style = StreakStyle {
            spawn_interval_ms: 1.0e9..1.0e9,
            ..style()
        };
        streaks.live.push(Streak {
            position: pos2(99.0, 10.0),
            angle: 0.0,
            length: 10.0,
            speed: 5.0,
            opacity: 1.0,
        });
        streaks.advance(&mut rng, &style, 0.0, 1.0, vec2(100.0, 100.0));
        assert!(streaks.live().is_empty());
    }
}
