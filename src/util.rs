use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub fn stable_seed(label: &str, seed: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    label.hash(&mut hasher);
    seed.hash(&mut hasher);
    hasher.finish()
}

/// Progress of a transition in `[0, 1]`; zero-length transitions are complete.
pub fn transition_progress(now_ms: f64, start_ms: f64, duration_ms: f64) -> f32 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    ((now_ms - start_ms) / duration_ms).clamp(0.0, 1.0) as f32
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints() {
        for ease in [ease_out_cubic, ease_in_out_cubic] {
            assert_eq!(ease(0.0), 0.0);
            assert_eq!(ease(1.0), 1.0);
            assert!(ease(0.5) > 0.0 && ease(0.5) < 1.0);
        }
    }

    #[test]
    fn progress_clamps_and_handles_zero_duration() {
        assert_eq!(transition_progress(0.0, 10.0, 100.0), 0.0);
        assert_eq!(transition_progress(60.0, 10.0, 100.0), 0.5);
        assert_eq!(transition_progress(500.0, 10.0, 100.0), 1.0);
        assert_eq!(transition_progress(0.0, 10.0, 0.0), 1.0);
    }

    #[test]
    fn seeds_differ_per_label() {
        assert_ne!(stable_seed("hero", 7), stable_seed("skills", 7));
        assert_eq!(stable_seed("hero", 7), stable_seed("hero", 7));
    }
}
