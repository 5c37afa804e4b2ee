use std::collections::HashMap;

use crate::content::GREETING;
use crate::session::SessionStore;

use super::particles::{FieldPreset, ParticleField};
use super::reveal::{Reveal, RevealFrom};
use super::routing::Route;
use super::timeline::Timeline;
use super::typewriter::Typewriter;
use super::viewport::{PageCommand, Viewport};

const HOME_FIELDS: [FieldPreset; 3] = [
    FieldPreset::Starfield,
    FieldPreset::Network,
    FieldPreset::Constellation,
];

pub struct Page {
    route: Route,
    pub(super) viewport: Viewport,
    timeline: Timeline<PageCommand>,
    fields: Vec<ParticleField>,
    reveals: HashMap<&'static str, Reveal>,
    pub(super) filter: String,
    pub(super) private_notice: Option<u32>,
    pub(super) greeting: Typewriter,
}

impl Page {
    pub fn mount(route: Route, seed: u64) -> Self {
        let fields = match route {
            Route::Home => HOME_FIELDS
                .into_iter()
                .map(|preset| ParticleField::new(preset, seed))
                .collect(),
            Route::Projects => Vec::new(),
        };

        Self {
            route,
            viewport: Viewport::default(),
            timeline: Timeline::default(),
            fields,
            reveals: HashMap::new(),
            filter: String::new(),
            private_notice: None,
            greeting: Typewriter::new(GREETING),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn run(&mut self, command: PageCommand, now_ms: f64, session: &mut SessionStore) {
        tracing::trace!(?command, "page command");
        self.viewport.apply(command, now_ms, session);
    }

    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, command: PageCommand) {
        self.timeline.schedule(now_ms, delay_ms, command);
    }

    pub fn advance(&mut self, now_ms: f64, session: &mut SessionStore) {
        for command in self.timeline.drain_due(now_ms) {
            self.run(command, now_ms, session);
        }
        self.viewport.tick(now_ms);
    }

    pub fn next_command_due_ms(&self) -> Option<f64> {
        self.timeline.next_due_ms()
    }

    pub fn field_mut(&mut self, preset: FieldPreset) -> Option<&mut ParticleField> {
        self.fields.iter_mut().find(|field| field.preset() == preset)
    }

    pub fn fields(&self) -> &[ParticleField] {
        &self.fields
    }

    pub fn reveal_mut(
        &mut self,
        id: &'static str,
        from: RevealFrom,
        threshold: f32,
        delay_ms: f64,
    ) -> &mut Reveal {
        self.reveals
            .entry(id)
            .or_insert_with(|| Reveal::new(from, threshold).with_delay(delay_ms))
    }

    pub fn teardown(&mut self) {
        for field in &mut self.fields {
            field.stop();
        }
        self.timeline.clear();
        tracing::debug!(route = self.route.path(), "page torn down");
    }
}
