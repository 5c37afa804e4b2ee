/// Entries due at the same instant come out in insertion order.
#[derive(Debug)]
pub struct Timeline<T> {
    pending: Vec<Scheduled<T>>,
    next_sequence: u64,
}

#[derive(Debug)]
struct Scheduled<T> {
    due_ms: f64,
    sequence: u64,
    item: T,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_sequence: 0,
        }
    }
}

impl<T> Timeline<T> {
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, item: T) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.pending.push(Scheduled {
            due_ms: now_ms + delay_ms.max(0.0),
            sequence,
            item,
        });
    }

    pub fn drain_due(&mut self, now_ms: f64) -> Vec<T> {
        let mut due = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].due_ms <= now_ms {
                due.push(self.pending.swap_remove(index));
            } else {
                index += 1;
            }
        }

        due.sort_by(|a, b| {
            a.due_ms
                .total_cmp(&b.due_ms)
                .then(a.sequence.cmp(&b.sequence))
        });
        due.into_iter().map(|scheduled| scheduled.item).collect()
    }

    pub fn next_due_ms(&self) -> Option<f64> {
        self.pending
            .iter()
            .map(|scheduled| scheduled.due_ms)
            .min_by(f64::total_cmp)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_due_then_insertion_order() {
        let mut timeline = Timeline::default();
        timeline.schedule(0.0, 150.0, "late");
        timeline.schedule(0.0, 50.0, "first");
        timeline.schedule(0.0, 50.0, "second");

        assert!(timeline.drain_due(49.0).is_empty());
        assert_eq!(timeline.drain_due(60.0), vec!["first", "second"]);
        assert_eq!(timeline.next_due_ms(), Some(150.0));
        assert_eq!(timeline.drain_due(1_000.0), vec!["late"]);
        assert!(timeline.is_empty());
    }

    #[test]
    fn negative_delay_is_due_immediately() {
        let mut timeline = Timeline::default();
        timeline.schedule(10.0, -5.0, 1);
        assert_eq!(timeline.drain_due(10.0), vec![1]);
    }
}
