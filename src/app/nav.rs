use eframe::egui::Rect;

use crate::content::{SectionId, has_nav_link};

use super::viewport::PageLayout;

pub const LOOK_AHEAD: f32 = 150.0;
pub const BOTTOM_SLACK: f32 = 100.0;
pub const CLICK_SUSPEND_MS: f64 = 800.0;

/// Section under `offset + LOOK_AHEAD`, first match top to bottom.
/// Within `BOTTOM_SLACK` of the document end the last section always wins.
pub fn section_at(offset: f32, layout: &PageLayout) -> Option<SectionId> {
    if layout.sections.is_empty() {
        return None;
    }

    if layout.viewport_height + offset >= layout.document_height - BOTTOM_SLACK {
        return layout.sections.last().map(|extent| extent.section);
    }

    let probe = offset + LOOK_AHEAD;
    layout
        .sections
        .iter()
        .find(|extent| extent.contains(probe))
        .map(|extent| extent.section)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnderlineGeometry {
    pub left: f32,
    pub width: f32,
    pub opacity: f32,
}

impl UnderlineGeometry {
    pub const HIDDEN: Self = Self {
        left: 0.0,
        width: 0.0,
        opacity: 0.0,
    };
}

/// Underline under `active`'s link, relative to the link container.
/// Collapses in place (keeping `previous.left`) when the section has no link.
pub fn underline_for(
    active: SectionId,
    links: &[(SectionId, Rect)],
    container: Rect,
    previous: UnderlineGeometry,
) -> UnderlineGeometry {
    let link = links
        .iter()
        .find(|(section, _)| *section == active)
        .filter(|_| has_nav_link(active));

    match link {
        Some((_, rect)) => UnderlineGeometry {
            left: rect.left() - container.left(),
            width: rect.width(),
            opacity: 1.0,
        },
        None => UnderlineGeometry {
            left: previous.left,
            width: 0.0,
            opacity: 0.0,
        },
    }
}

#[derive(Debug)]
pub struct NavState {
    active: SectionId,
    click_scrolling_until: Option<f64>,
    underline: UnderlineGeometry,
    underline_section: Option<SectionId>,
    underline_viewport_width: f32,
    menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: SectionId::Hero,
            click_scrolling_until: None,
            underline: UnderlineGeometry::HIDDEN,
            underline_section: None,
            underline_viewport_width: 0.0,
            menu_open: false,
        }
    }
}

impl NavState {
    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn underline(&self) -> UnderlineGeometry {
        self.underline
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn reset(&mut self) {
        let underline = self.underline;
        *self = Self::default();
        self.underline = UnderlineGeometry {
            opacity: 0.0,
            width: 0.0,
            ..underline
        };
    }

    pub fn is_click_scrolling(&self, now_ms: f64) -> bool {
        self.click_scrolling_until
            .is_some_and(|until| now_ms < until)
    }

    /// Idle tracking. Returns `true` when the active section changed.
    pub fn on_scroll(&mut self, now_ms: f64, offset: f32, layout: &PageLayout) -> bool {
        if self.is_click_scrolling(now_ms) {
            return false;
        }
        self.click_scrolling_until = None;

        match section_at(offset, layout) {
            Some(section) if section != self.active => {
                tracing::trace!(from = %self.active, to = %section, "active section changed");
                self.active = section;
                true
            }
            _ => false,
        }
    }

    pub fn on_click(&mut self, now_ms: f64, section: SectionId) {
        self.menu_open = false;
        self.active = section;
        self.click_scrolling_until = Some(now_ms + CLICK_SUSPEND_MS);
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn snap_underline(&mut self, links: &[(SectionId, Rect)], container: Rect) {
        self.underline = underline_for(self.active, links, container, self.underline);
        self.underline_section = Some(self.active);
    }

    pub fn refresh_underline(
        &mut self,
        now_ms: f64,
        links: &[(SectionId, Rect)],
        container: Rect,
        viewport_width: f32,
    ) {
        let resized = (viewport_width - self.underline_viewport_width).abs() > 0.5;
        let section_changed = self.underline_section != Some(self.active);
        self.underline_viewport_width = viewport_width;

        if resized || (section_changed && !self.is_click_scrolling(now_ms)) {
            self.snap_underline(links, container);
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::app::viewport::tests::sample_layout;

    fn nav_links() -> (Vec<(SectionId, Rect)>, Rect) {
        let container = Rect::from_min_size(pos2(600.0, 20.0), vec2(400.0, 24.0));
        let links = vec![
            (
                SectionId::About,
                Rect::from_min_size(pos2(600.0, 20.0), vec2(52.0, 24.0)),
            ),
            (
                SectionId::Skills,
                Rect::from_min_size(pos2(684.0, 20.0), vec2(44.0, 24.0)),
            ),
            (
                SectionId::Projects,
                Rect::from_min_size(pos2(760.0, 20.0), vec2(70.0, 24.0)),
            ),
            (
                SectionId::Contact,
                Rect::from_min_size(pos2(862.0, 20.0), vec2(64.0, 24.0)),
            ),
        ];
        (links, container)
    }

    #[test]
    fn look_ahead_selects_next_section_early() {
        let layout = sample_layout();
        assert_eq!(section_at(0.0, &layout), Some(SectionId::Hero));
        assert_eq!(section_at(749.0, &layout), Some(SectionId::Hero));
        assert_eq!(section_at(750.0, &layout), Some(SectionId::About));
    }

    #[test]
    fn bottom_of_document_forces_last_section() {
        let layout = sample_layout();
        let near_bottom = layout.max_offset() - BOTTOM_SLACK + 1.0;
        assert_eq!(section_at(near_bottom, &layout), Some(SectionId::Contact));
    }

    #[test]
    fn empty_layout_has_no_section() {
        assert_eq!(section_at(0.0, &PageLayout::default()), None);
    }

    proptest! {
        #[test]
        fn probe_inside_one_section_selects_it(index in 0usize..5, fraction in 0.01f32..0.99) {
            let layout = sample_layout();
            let extent = layout.sections[index];
            let probe = extent.top + extent.height * fraction;
            let offset = probe - LOOK_AHEAD;
            prop_assume!(offset >= 0.0);

            let expected = if layout.viewport_height + offset >= layout.document_height - BOTTOM_SLACK {
                SectionId::Contact
            } else {
                extent.section
            };
            prop_assert_eq!(section_at(offset, &layout), Some(expected));
        }
    }

    #[test]
    fn underline_matches_link_rect() {
        let (links, container) = nav_links();
        let geometry = underline_for(
            SectionId::Projects,
            &links,
            container,
            UnderlineGeometry::HIDDEN,
        );
        assert_eq!(
            geometry,
            UnderlineGeometry {
                left: 160.0,
                width: 70.0,
                opacity: 1.0,
            }
        );
    }

    #[test]
    fn underline_hides_for_hero_in_place() {
        let (links, container) = nav_links();
        let previous = underline_for(SectionId::Skills, &links, container, UnderlineGeometry::HIDDEN);
        let geometry = underline_for(SectionId::Hero, &links, container, previous);
        assert_eq!(geometry.opacity, 0.0);
        assert_eq!(geometry.width, 0.0);
        assert_eq!(geometry.left, previous.left);
    }

    #[test]
    fn click_suspends_tracking_for_window() {
        let layout = sample_layout();
        let mut nav = NavState::default();
        nav.on_click(1_000.0, SectionId::Contact);
        assert_eq!(nav.active(), SectionId::Contact);

        assert!(!nav.on_scroll(1_500.0, 0.0, &layout));
        assert_eq!(nav.active(), SectionId::Contact);

        assert!(nav.on_scroll(1_000.0 + CLICK_SUSPEND_MS, 0.0, &layout));
        assert_eq!(nav.active(), SectionId::Hero);
    }

    #[test]
    fn click_snaps_underline_before_scroll_settles() {
        let (links, container) = nav_links();
        let mut nav = NavState::default();
        nav.refresh_underline(0.0, &links, container, 1_200.0);
        assert_eq!(nav.underline().opacity, 0.0);

        nav.on_click(10.0, SectionId::Skills);
        nav.snap_underline(&links, container);
        assert_eq!(nav.underline().left, 84.0);
        assert_eq!(nav.underline().width, 44.0);
    }

    #[test]
    fn reactive_refresh_follows_scroll_changes() {
        let (links, container) = nav_links();
        let layout = sample_layout();
        let mut nav = NavState::default();
        nav.refresh_underline(0.0, &links, container, 1_200.0);

        assert!(nav.on_scroll(16.0, 1_800.0, &layout));
        assert_eq!(nav.active(), SectionId::Skills);
        nav.refresh_underline(16.0, &links, container, 1_200.0);
        assert_eq!(nav.underline().width, 44.0);
        assert_eq!(nav.underline().opacity, 1.0);
    }

    #[test]
    fn resize_recomputes_geometry() {
        let (links, container) = nav_links();
        let mut nav = NavState::default();
        nav.on_click(0.0, SectionId::About);
        nav.snap_underline(&links, container);

        let shifted: Vec<_> = links
            .iter()
            .map(|(section, rect)| (*section, rect.translate(vec2(-100.0, 0.0))))
            .collect();
        let container = container.translate(vec2(-200.0, 0.0));
        nav.refresh_underline(100.0, &shifted, container, 900.0);
        assert_eq!(nav.underline().left, 100.0);
    }

    #[test]
    fn reset_returns_to_hero() {
        let mut nav = NavState::default();
        nav.on_click(0.0, SectionId::Contact);
        nav.toggle_menu();
        nav.reset();
        assert_eq!(nav.active(), SectionId::Hero);
        assert!(!nav.menu_open());
        assert!(!nav.is_click_scrolling(1.0));
    }
}
