use eframe::egui::{Rect, Vec2, vec2};

use crate::util::{ease_out_cubic, lerp, transition_progress};

pub const REVEAL_DURATION_MS: f64 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealFrom {
    Below,
    Left,
    Right,
}

impl RevealFrom {
    fn hidden_offset(self) -> Vec2 {
        match self {
            RevealFrom::Below => vec2(0.0, 30.0),
            RevealFrom::Left => vec2(-40.0, 0.0),
            RevealFrom::Right => vec2(40.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPose {
    pub opacity: f32,
    pub offset: Vec2,
}

#[derive(Clone, Copy, Debug)]
struct Transition {
    from: f32,
    to: f32,
    start_ms: f64,
    delay_ms: f64,
}

#[derive(Clone, Debug)]
pub struct Reveal {
    from: RevealFrom,
    threshold: f32,
    delay_ms: f64,
    in_view: bool,
    transition: Transition,
}

impl Reveal {
    pub fn new(from: RevealFrom, threshold: f32) -> Self {
        Self {
            from,
            threshold: threshold.clamp(0.0, 1.0),
            delay_ms: 0.0,
            in_view: false,
            transition: Transition {
                from: 0.0,
                to: 0.0,
                start_ms: 0.0,
                delay_ms: 0.0,
            },
        }
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    fn progress(&self, now_ms: f64) -> f32 {
        let transition = self.transition;
        let t = transition_progress(
            now_ms,
            transition.start_ms + transition.delay_ms,
            REVEAL_DURATION_MS,
        );
        lerp(transition.from, transition.to, ease_out_cubic(t))
    }

    /// Feeds the visible fraction of the block; `returning` shows it at once.
    pub fn update(&mut self, now_ms: f64, visible_fraction: f32, returning: bool) -> RevealPose {
        if returning {
            self.in_view = true;
            self.transition = Transition {
                from: 1.0,
                to: 1.0,
                start_ms: now_ms,
                delay_ms: 0.0,
            };
            return self.pose(now_ms);
        }

        let in_view = visible_fraction >= self.threshold && visible_fraction > 0.0;
        if in_view != self.in_view {
            let current = self.progress(now_ms);
            self.in_view = in_view;
            self.transition = Transition {
                from: current,
                to: if in_view { 1.0 } else { 0.0 },
                start_ms: now_ms,
                delay_ms: if in_view { self.delay_ms } else { 0.0 },
            };
        }

        self.pose(now_ms)
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    pub fn pose(&self, now_ms: f64) -> RevealPose {
        let progress = self.progress(now_ms);
        RevealPose {
            opacity: progress,
            offset: self.from.hidden_offset() * (1.0 - progress),
        }
    }
}

pub fn visible_fraction(block: Rect, viewport: Rect) -> f32 {
    if block.height() <= 0.0 {
        return 0.0;
    }
    let top = block.top().max(viewport.top());
    let bottom = block.bottom().min(viewport.bottom());
    ((bottom - top) / block.height()).clamp(0.0, 1.0)
}
