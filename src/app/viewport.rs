use crate::content::SectionId;
use crate::session::{SessionKey, SessionStore};
use crate::util::{ease_in_out_cubic, lerp, transition_progress};

pub const FADE_IN_MS: f64 = 300.0;
pub const SMOOTH_SCROLL_MS: f64 = 600.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub section: SectionId,
    pub top: f32,
    pub height: f32,
}

impl SectionExtent {
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    pub sections: Vec<SectionExtent>,
    pub document_height: f32,
    pub viewport_height: f32,
}

impl PageLayout {
    pub fn extent(&self, section: SectionId) -> Option<&SectionExtent> {
        self.sections.iter().find(|extent| extent.section == section)
    }

    pub fn max_offset(&self) -> f32 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    pub fn is_measured(&self) -> bool {
        self.document_height > 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScrollTarget {
    Offset(f32),
    Section(SectionId),
    Fragment(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageCommand {
    Hide,
    FadeIn,
    JumpTo(ScrollTarget),
    SmoothTo(ScrollTarget),
    SetSmoothScrolling(bool),
    ClearSession(SessionKey),
}

#[derive(Clone, Copy, Debug)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    start_ms: f64,
}

#[derive(Clone, Copy, Debug)]
enum PageFade {
    Visible,
    Hidden,
    FadingIn { start_ms: f64, from: f32 },
}

#[derive(Debug)]
pub struct Viewport {
    offset: f32,
    layout: PageLayout,
    smooth_scrolling: bool,
    animation: Option<ScrollAnimation>,
    fade: PageFade,
    forced_offset: Option<f32>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: 0.0,
            layout: PageLayout::default(),
            smooth_scrolling: true,
            animation: None,
            fade: PageFade::Visible,
            forced_offset: None,
        }
    }
}

impl Viewport {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn smooth_scrolling(&self) -> bool {
        self.smooth_scrolling
    }

    pub fn observe(&mut self, offset: f32, layout: PageLayout) {
        self.layout = layout;
        if self.animation.is_none() && self.forced_offset.is_none() {
            self.offset = offset;
        }
    }

    /// Offset the scroll area must adopt this frame, if a programmatic scroll is in flight.
    pub fn take_forced_offset(&mut self) -> Option<f32> {
        self.forced_offset.take()
    }

    pub fn resolve(&self, target: &ScrollTarget) -> Option<f32> {
        let raw = match target {
            ScrollTarget::Offset(offset) => *offset,
            ScrollTarget::Section(section) => self.layout.extent(*section)?.top,
            ScrollTarget::Fragment(fragment) => {
                let section = fragment.parse::<SectionId>().ok()?;
                self.layout.extent(section)?.top
            }
        };

        if self.layout.is_measured() {
            Some(raw.clamp(0.0, self.layout.max_offset()))
        } else {
            Some(raw.max(0.0))
        }
    }

    pub fn apply(&mut self, command: PageCommand, now_ms: f64, session: &mut SessionStore) {
        match command {
            PageCommand::Hide => self.fade = PageFade::Hidden,
            PageCommand::FadeIn => {
                let from = self.opacity(now_ms);
                if from < 1.0 {
                    self.fade = PageFade::FadingIn {
                        start_ms: now_ms,
                        from,
                    };
                }
            }
            PageCommand::JumpTo(target) => match self.resolve(&target) {
                Some(offset) => self.jump(offset),
                None => tracing::debug!(?target, "scroll target not found; skipping jump"),
            },
            PageCommand::SmoothTo(target) => match self.resolve(&target) {
                Some(offset) if self.smooth_scrolling => {
                    self.animation = Some(ScrollAnimation {
                        from: self.offset,
                        to: offset,
                        start_ms: now_ms,
                    });
                    self.forced_offset = Some(self.offset);
                }
                Some(offset) => self.jump(offset),
                None => tracing::debug!(?target, "scroll target not found; skipping scroll"),
            },
            PageCommand::SetSmoothScrolling(enabled) => {
                self.smooth_scrolling = enabled;
                if !enabled {
                    if let Some(animation) = self.animation.take() {
                        self.jump(animation.to);
                    }
                }
            }
            PageCommand::ClearSession(key) => session.remove(key),
        }
    }

    fn jump(&mut self, offset: f32) {
        self.animation = None;
        self.offset = offset;
        self.forced_offset = Some(offset);
    }

    pub fn tick(&mut self, now_ms: f64) {
        let Some(animation) = self.animation else {
            return;
        };

        let t = transition_progress(now_ms, animation.start_ms, SMOOTH_SCROLL_MS);
        self.offset = lerp(animation.from, animation.to, ease_in_out_cubic(t));
        self.forced_offset = Some(self.offset);
        if t >= 1.0 {
            self.animation = None;
        }
    }

    pub fn opacity(&self, now_ms: f64) -> f32 {
        match self.fade {
            PageFade::Visible => 1.0,
            PageFade::Hidden => 0.0,
            PageFade::FadingIn { start_ms, from } => {
                let t = transition_progress(now_ms, start_ms, FADE_IN_MS);
                lerp(from, 1.0, t)
            }
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self.fade, PageFade::Hidden)
    }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.animation.is_some() || self.opacity(now_ms) < 1.0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Hero 0..900, then 800 px per section; 800 px viewport.
    pub(crate) fn sample_layout() -> PageLayout {
        let mut sections = Vec::new();
        let mut top = 0.0;
        for (index, section) in SectionId::ALL.into_iter().enumerate() {
            let height = if index == 0 { 900.0 } else { 800.0 };
            sections.push(SectionExtent {
                section,
                top,
                height,
            });
            top += height;
        }
        PageLayout {
            sections,
            document_height: top + 120.0,
            viewport_height: 800.0,
        }
    }

    fn measured_viewport() -> Viewport {
        let mut viewport = Viewport::default();
        viewport.observe(0.0, sample_layout());
        viewport
    }

    #[test]
    fn resolves_sections_and_fragments() {
        let viewport = measured_viewport();
        assert_eq!(
            viewport.resolve(&ScrollTarget::Section(SectionId::Skills)),
            Some(1_700.0)
        );
        assert_eq!(
            viewport.resolve(&ScrollTarget::Fragment("about".to_owned())),
            Some(900.0)
        );
        assert_eq!(
            viewport.resolve(&ScrollTarget::Fragment("missing".to_owned())),
            None
        );
    }

    #[test]
    fn offsets_clamp_to_document() {
        let viewport = measured_viewport();
        let max = viewport.layout().max_offset();
        assert_eq!(
            viewport.resolve(&ScrollTarget::Offset(99_999.0)),
            Some(max)
        );
        assert_eq!(viewport.resolve(&ScrollTarget::Offset(-4.0)), Some(0.0));
    }

    #[test]
    fn missing_jump_target_leaves_offset() {
        let mut viewport = measured_viewport();
        let mut session = SessionStore::default();
        viewport.apply(
            PageCommand::JumpTo(ScrollTarget::Fragment("nope".to_owned())),
            0.0,
            &mut session,
        );
        assert_eq!(viewport.offset(), 0.0);
        assert_eq!(viewport.take_forced_offset(), None);
    }

    #[test]
    fn smooth_scroll_reaches_target() {
        let mut viewport = measured_viewport();
        let mut session = SessionStore::default();
        viewport.apply(
            PageCommand::SmoothTo(ScrollTarget::Section(SectionId::About)),
            0.0,
            &mut session,
        );
        viewport.tick(SMOOTH_SCROLL_MS / 2.0);
        let midway = viewport.offset();
        assert!(midway > 0.0 && midway < 900.0);

        viewport.tick(SMOOTH_SCROLL_MS + 1.0);
        assert_eq!(viewport.offset(), 900.0);
        assert!(!viewport.is_animating(SMOOTH_SCROLL_MS + 1.0));
    }

    #[test]
    fn smooth_scroll_jumps_when_disabled() {
        let mut viewport = measured_viewport();
        let mut session = SessionStore::default();
        viewport.apply(PageCommand::SetSmoothScrolling(false), 0.0, &mut session);
        viewport.apply(
            PageCommand::SmoothTo(ScrollTarget::Section(SectionId::About)),
            0.0,
            &mut session,
        );
        assert_eq!(viewport.offset(), 900.0);
        assert_eq!(viewport.take_forced_offset(), Some(900.0));
    }

    #[test]
    fn fade_in_runs_from_hidden_to_opaque() {
        let mut viewport = measured_viewport();
        let mut session = SessionStore::default();
        viewport.apply(PageCommand::Hide, 0.0, &mut session);
        assert_eq!(viewport.opacity(5.0), 0.0);

        viewport.apply(PageCommand::FadeIn, 10.0, &mut session);
        let halfway = viewport.opacity(10.0 + FADE_IN_MS / 2.0);
        assert!(halfway > 0.4 && halfway < 0.6);
        assert_eq!(viewport.opacity(10.0 + FADE_IN_MS), 1.0);
    }

    #[test]
    fn user_scroll_is_ignored_while_forced() {
        let mut viewport = measured_viewport();
        let mut session = SessionStore::default();
        viewport.apply(
            PageCommand::JumpTo(ScrollTarget::Offset(500.0)),
            0.0,
            &mut session,
        );
        viewport.observe(0.0, sample_layout());
        assert_eq!(viewport.offset(), 500.0);
        assert_eq!(viewport.take_forced_offset(), Some(500.0));
        viewport.observe(480.0, sample_layout());
        assert_eq!(viewport.offset(), 480.0);
    }
}
