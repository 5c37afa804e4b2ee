use eframe::egui::{
    self, Align, Button, Context, Frame, Layout, Margin, Rect, RichText, Sense, Stroke, Ui, pos2,
};

use crate::content::{NAV_LINKS, OWNER_NAME, SectionId};

use super::super::nav::NavState;
use super::super::render_utils::{ACCENT, PAGE_BG, TEXT_GRAY, TEXT_WHITE, with_alpha};
use super::super::PortfolioApp;
use super::MOBILE_BREAKPOINT;

const UNDERLINE_EASE_SECS: f32 = 0.3;

fn link_text(name: &str, active: bool) -> RichText {
    let color = if active { ACCENT } else { TEXT_GRAY };
    RichText::new(name).size(16.0).color(color)
}

fn draw_underline(ui: &Ui, nav: &NavState, container: Rect) {
    let target = nav.underline();
    let ctx = ui.ctx();
    let left = ctx.animate_value_with_time(
        egui::Id::new("nav_underline_left"),
        target.left,
        UNDERLINE_EASE_SECS,
    );
    let width = ctx.animate_value_with_time(
        egui::Id::new("nav_underline_width"),
        target.width,
        UNDERLINE_EASE_SECS,
    );
    let opacity = ctx.animate_value_with_time(
        egui::Id::new("nav_underline_opacity"),
        target.opacity,
        UNDERLINE_EASE_SECS,
    );
    if width <= 0.5 || opacity <= 0.01 {
        return;
    }

    let y = container.bottom() + 2.0;
    let start = pos2(container.left() + left, y);
    let end = pos2(container.left() + left + width, y);
    ui.painter()
        .line_segment([start, end], Stroke::new(2.0, with_alpha(ACCENT, opacity)));
}

impl PortfolioApp {
    pub(in crate::app) fn draw_navbar(&mut self, ctx: &Context, now_ms: f64) {
        let mut clicked = None;
        let mut links: Vec<(SectionId, Rect)> = Vec::with_capacity(NAV_LINKS.len());
        let mut container = Rect::NOTHING;
        let nav = self.shell.nav_mut();

        egui::TopBottomPanel::top("navbar")
            .resizable(false)
            .frame(
                Frame::new()
                    .fill(with_alpha(PAGE_BG, 0.92))
                    .inner_margin(Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| {
                let narrow = ui.available_width() < MOBILE_BREAKPOINT;
                ui.horizontal(|ui| {
                    let logo = ui.add(
                        egui::Label::new(
                            RichText::new(OWNER_NAME)
                                .size(20.0)
                                .strong()
                                .color(TEXT_WHITE),
                        )
                        .sense(Sense::click()),
                    );
                    if logo.clicked() {
                        clicked = Some(SectionId::Hero);
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if narrow {
                            let icon = if nav.menu_open() { "✕" } else { "☰" };
                            if ui.button(RichText::new(icon).size(18.0)).clicked() {
                                nav.toggle_menu();
                            }
                            return;
                        }

                        for link in NAV_LINKS.iter().rev() {
                            let active = nav.active() == link.section;
                            let response =
                                ui.add(Button::new(link_text(link.name, active)).frame(false));
                            if response.clicked() {
                                clicked = Some(link.section);
                            }
                            links.push((link.section, response.rect));
                        }
                    });
                });

                if narrow {
                    if nav.menu_open() {
                        ui.add_space(8.0);
                        for link in NAV_LINKS {
                            let active = nav.active() == link.section;
                            if ui
                                .add(Button::new(link_text(link.name, active)).frame(false))
                                .clicked()
                            {
                                clicked = Some(link.section);
                            }
                        }
                    }
                    return;
                }

                links.reverse();
                container = links
                    .iter()
                    .fold(Rect::NOTHING, |bounds, (_, rect)| bounds.union(*rect));
                nav.refresh_underline(now_ms, &links, container, ui.max_rect().width());
                draw_underline(ui, nav, container);
            });

        if let Some(section) = clicked {
            tracing::debug!(%section, route = self.shell.route().path(), "nav click");
            self.shell.nav_click(section, &links, container, now_ms);
        }
    }
}
