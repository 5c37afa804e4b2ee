use eframe::egui::Rect;

use crate::content::SectionId;
use crate::session::{SessionKey, SessionStore};

use super::nav::NavState;
use super::page::Page;
use super::routing::{History, HistoryDirection, Location, Route};
use super::viewport::{PageCommand, PageLayout, ScrollTarget};

pub const RELOAD_RESTORE_MS: f64 = 10.0;
pub const DEFERRED_JUMP_MS: f64 = 50.0;
pub const SETTLE_MS: f64 = 150.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Arrival {
    Push,
    Pop,
    Reload,
}

pub struct Shell {
    history: History,
    session: SessionStore,
    nav: NavState,
    page: Page,
    seed: u64,
}

impl Shell {
    pub fn new(start: Location, seed: u64, now_ms: f64) -> Self {
        let page = Page::mount(start.route, seed);
        let mut shell = Self {
            history: History::new(start),
            session: SessionStore::default(),
            nav: NavState::default(),
            page,
            seed,
        };
        shell.arrive(Arrival::Push, now_ms);
        shell
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavState {
        &mut self.nav
    }

    pub fn is_returning_from_catalog(&self) -> bool {
        self.session.contains(SessionKey::ProjectsScrollPos)
    }

    pub fn navigate(&mut self, location: Location, now_ms: f64) {
        tracing::info!(from = %self.history.current(), to = %location, "navigate");
        self.history.navigate(location);
        self.remount(Arrival::Push, now_ms);
    }

    /// Back/forward. A no-op at either end of the history stack.
    pub fn go(&mut self, direction: HistoryDirection, now_ms: f64) {
        let Some(location) = self.history.go(direction) else {
            tracing::debug!(?direction, "history exhausted");
            return;
        };
        tracing::info!(?direction, to = %location, "history pop");
        self.remount(Arrival::Pop, now_ms);
    }

    pub fn reload(&mut self, now_ms: f64) {
        let offset = self.page.viewport().offset();
        self.session.save_reload_point(offset, self.route());
        tracing::info!(location = %self.history.current(), offset, "reload");
        self.remount(Arrival::Reload, now_ms);
    }

    fn remount(&mut self, arrival: Arrival, now_ms: f64) {
        self.page.teardown();
        self.page = Page::mount(self.history.current().route, self.seed);
        self.nav.reset();
        self.arrive(arrival, now_ms);
    }

    fn arrive(&mut self, arrival: Arrival, now_ms: f64) {
        if arrival == Arrival::Pop {
            self.restore_after_pop(now_ms);
            return;
        }

        match self.route() {
            Route::Home => {
                if let Some(section) = self.session.take_pending_section() {
                    tracing::debug!(%section, "scrolling to pending section");
                    self.deferred_jump(ScrollTarget::Section(section), now_ms);
                    return;
                }

                // The fragment jump lands after the reload jump, so it wins when both run.
                self.restore_reload_point(now_ms);
                if let Some(fragment) = self.history.current().fragment.clone() {
                    tracing::debug!(%fragment, "scrolling to fragment");
                    self.deferred_jump(ScrollTarget::Fragment(fragment), now_ms);
                }
            }
            Route::Projects => {
                if !self.restore_reload_point(now_ms) && !self.session.has_reload_point() {
                    self.page.run(
                        PageCommand::JumpTo(ScrollTarget::Offset(0.0)),
                        now_ms,
                        &mut self.session,
                    );
                }
            }
        }
    }

    fn deferred_jump(&mut self, target: ScrollTarget, now_ms: f64) {
        self.page.run(PageCommand::Hide, now_ms, &mut self.session);
        self.page
            .schedule(now_ms, DEFERRED_JUMP_MS, PageCommand::JumpTo(target));
        self.page
            .schedule(now_ms, DEFERRED_JUMP_MS, PageCommand::FadeIn);
    }

    fn restore_reload_point(&mut self, now_ms: f64) -> bool {
        let Some(point) = self.session.reload_point_for(self.route()) else {
            return false;
        };
        tracing::debug!(offset = point.offset, path = %point.path, "restoring reload point");

        self.page.run(PageCommand::Hide, now_ms, &mut self.session);
        for command in [
            PageCommand::JumpTo(ScrollTarget::Offset(point.offset)),
            PageCommand::ClearSession(SessionKey::ScrollPosBeforeReload),
            PageCommand::ClearSession(SessionKey::ReloadPath),
            PageCommand::FadeIn,
        ] {
            self.page.schedule(now_ms, RELOAD_RESTORE_MS, command);
        }
        true
    }

    fn restore_after_pop(&mut self, now_ms: f64) {
        self.page.run(PageCommand::Hide, now_ms, &mut self.session);
        self.page
            .run(PageCommand::SetSmoothScrolling(false), now_ms, &mut self.session);

        if self.route() == Route::Projects && !self.session.has_reload_point() {
            self.page.run(
                PageCommand::JumpTo(ScrollTarget::Offset(0.0)),
                now_ms,
                &mut self.session,
            );
        } else if self.route() == Route::Home {
            if let Some(offset) = self.session.peek_catalog_return() {
                self.page.schedule(
                    now_ms,
                    DEFERRED_JUMP_MS,
                    PageCommand::JumpTo(ScrollTarget::Offset(offset)),
                );
                self.page.schedule(
                    now_ms,
                    DEFERRED_JUMP_MS,
                    PageCommand::ClearSession(SessionKey::ProjectsScrollPos),
                );
            }
        }

        self.page
            .schedule(now_ms, SETTLE_MS, PageCommand::SetSmoothScrolling(true));
        self.page.schedule(now_ms, SETTLE_MS, PageCommand::FadeIn);
    }

    pub fn nav_click(
        &mut self,
        section: SectionId,
        links: &[(SectionId, Rect)],
        container: Rect,
        now_ms: f64,
    ) {
        if self.route() == Route::Home {
            self.nav.on_click(now_ms, section);
            self.nav.snap_underline(links, container);
            self.page.run(
                PageCommand::SmoothTo(ScrollTarget::Section(section)),
                now_ms,
                &mut self.session,
            );
            return;
        }

        self.nav.close_menu();
        self.session.put_pending_section(section);
        self.session.remove(SessionKey::ProjectsScrollPos);
        self.navigate(Location::new(Route::Home), now_ms);
    }

    pub fn open_catalog(&mut self, now_ms: f64) {
        self.session
            .put_catalog_return(self.page.viewport().offset());
        self.navigate(Location::new(Route::Projects), now_ms);
    }

    pub fn leave_catalog(&mut self, now_ms: f64) {
        let offset = self.session.peek_catalog_return();
        self.navigate(Location::new(Route::Home), now_ms);

        if let Some(offset) = offset {
            self.page.schedule(
                now_ms,
                SETTLE_MS,
                PageCommand::JumpTo(ScrollTarget::Offset(offset)),
            );
            self.page.schedule(
                now_ms,
                SETTLE_MS,
                PageCommand::ClearSession(SessionKey::ProjectsScrollPos),
            );
        }
    }

    pub fn advance(&mut self, now_ms: f64) {
        self.page.advance(now_ms, &mut self.session);
    }

    pub fn observe(&mut self, now_ms: f64, offset: f32, layout: PageLayout) {
        let has_sections = !layout.sections.is_empty();
        self.page.viewport.observe(offset, layout);
        if has_sections {
            let offset = self.page.viewport().offset();
            self.nav
                .on_scroll(now_ms, offset, self.page.viewport().layout());
        }
    }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.page.viewport().is_animating(now_ms) || self.nav.is_click_scrolling(now_ms)
    }
}
