use eframe::egui::{self, Context, RichText, Sense, Ui, UiBuilder};

use super::render_utils::{ACCENT, CARD_BG, PAGE_BG, TEXT_GRAY, TEXT_WHITE};
use super::reveal::{Reveal, visible_fraction};

mod cards;
mod catalog_page;
mod home;
mod navbar;

pub(super) const MOBILE_BREAKPOINT: f32 = 768.0;
const CONTENT_MAX_WIDTH: f32 = 1_120.0;

pub(super) fn install_style(ctx: &Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = PAGE_BG;
    visuals.window_fill = CARD_BG;
    visuals.extreme_bg_color = CARD_BG;
    visuals.hyperlink_color = ACCENT;
    visuals.override_text_color = Some(TEXT_GRAY);
    visuals.selection.bg_fill = ACCENT;
    ctx.set_visuals(visuals);
}

/// Lays `add_contents` out at its resting place, painted at the reveal pose.
/// The visible fraction measured this frame drives the next pose.
pub(super) fn reveal_block<R>(
    ui: &mut Ui,
    reveal: &mut Reveal,
    now_ms: f64,
    returning: bool,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> R {
    let pose = if returning {
        reveal.update(now_ms, 1.0, true)
    } else {
        reveal.pose(now_ms)
    };

    let available = ui.available_rect_before_wrap();
    let mut child = ui.new_child(
        UiBuilder::new()
            .max_rect(available.translate(pose.offset))
            .layout(*ui.layout()),
    );
    child.set_opacity(pose.opacity);
    let inner = add_contents(&mut child);

    let resting = child.min_rect().translate(-pose.offset);
    ui.allocate_rect(resting, Sense::hover());
    reveal.update(now_ms, visible_fraction(resting, ui.clip_rect()), returning);
    inner
}

pub(super) fn centered_column<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let width = ui.available_width().min(CONTENT_MAX_WIDTH);
    let margin = ((ui.available_width() - width) * 0.5).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

pub(super) fn section_heading(ui: &mut Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).size(40.0).strong().color(TEXT_WHITE));
    });
    ui.add_space(24.0);
}

pub(super) fn open_link(ui: &Ui, url: &str) {
    tracing::debug!(url, "opening link");
    ui.ctx().open_url(egui::OpenUrl::new_tab(url));
}
