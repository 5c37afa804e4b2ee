use eframe::egui::{
    self, Align2, Button, Context, CornerRadius, FontId, Frame, Margin, RichText, Sense, Stroke,
    Ui, vec2,
};

use crate::catalog::Project;
use crate::content::PRIVATE_REPO_NOTICE;

use super::super::PortfolioApp;
use super::super::render_utils::{
    ACCENT, ACCENT_HOVER, BORDER, CARD_BG, PAGE_BG, TEXT_MUTED, TEXT_WHITE, blend_color,
    draw_backdrop,
};
use super::open_link;

const IMAGE_HEIGHT: f32 = 150.0;

fn tech_tag(ui: &mut Ui, tag: &str) {
    Frame::new()
        .fill(blend_color(CARD_BG, ACCENT, 0.12))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(tag).size(12.0).color(ACCENT));
        });
}

fn image_placeholder(ui: &mut Ui, project: &Project) {
    let (rect, response) =
        ui.allocate_exact_size(vec2(ui.available_width(), IMAGE_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    draw_backdrop(&painter, rect, blend_color(PAGE_BG, CARD_BG, 0.5), ACCENT, [0.3, 0.25]);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        &project.name,
        FontId::proportional(22.0),
        TEXT_WHITE,
    );
    response.on_hover_text(project.image.as_str());
}

/// One project card. Returns the project id when the private affordance was clicked.
pub(super) fn project_card(ui: &mut Ui, project: &Project) -> Option<u32> {
    let mut open_notice = None;

    Frame::new()
        .fill(CARD_BG)
        .stroke(Stroke::new(1.0, BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            image_placeholder(ui, project);
            ui.add_space(12.0);
            ui.label(
                RichText::new(&project.name)
                    .size(20.0)
                    .strong()
                    .color(TEXT_WHITE),
            );
            ui.add_space(4.0);
            ui.label(project.description.as_str());
            ui.add_space(8.0);

            ui.horizontal_wrapped(|ui| {
                for tag in &project.tech_stack {
                    tech_tag(ui, tag);
                }
            });
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                match project.source_link() {
                    Some(url) => {
                        if ui.button("See Code").clicked() {
                            open_link(ui, url);
                        }
                    }
                    None => {
                        let private = Button::new(RichText::new("Private").color(TEXT_MUTED));
                        if ui.add(private).on_hover_text("Source is not public").clicked() {
                            open_notice = Some(project.id);
                        }
                    }
                }

                let view = Button::new(RichText::new("View Project").color(TEXT_WHITE))
                    .fill(ACCENT_HOVER);
                if ui.add(view).clicked() {
                    open_link(ui, &project.live_url);
                }
            });
        });

    open_notice
}

pub(super) fn project_grid(ui: &mut Ui, projects: &[&Project]) -> Option<u32> {
    const MIN_CARD_WIDTH: f32 = 300.0;
    const GAP: f32 = 20.0;

    let width = ui.available_width();
    let columns = (((width + GAP) / (MIN_CARD_WIDTH + GAP)).floor() as usize).clamp(1, 3);
    let card_width = (width - GAP * (columns as f32 - 1.0)) / columns as f32;
    let mut open_notice = None;

    for row in projects.chunks(columns) {
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = GAP;
            for project in row {
                ui.vertical(|ui| {
                    ui.set_width(card_width);
                    if let Some(id) = project_card(ui, project) {
                        open_notice = Some(id);
                    }
                });
            }
        });
        ui.add_space(GAP);
    }

    open_notice
}

impl PortfolioApp {
    pub(in crate::app) fn draw_private_notice(&mut self, ctx: &Context) {
        let Some(id) = self.shell.page().private_notice else {
            return;
        };
        let name = self
            .catalog
            .projects()
            .iter()
            .find(|project| project.id == id)
            .map_or("This project", |project| project.name.as_str());

        let mut close = false;
        let modal = egui::Modal::new(egui::Id::new("private_notice")).show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.label(
                RichText::new("Private Repository")
                    .size(20.0)
                    .strong()
                    .color(TEXT_WHITE),
            );
            ui.add_space(6.0);
            ui.label(RichText::new(name).color(ACCENT));
            ui.add_space(6.0);
            ui.label(PRIVATE_REPO_NOTICE);
            ui.add_space(12.0);
            if ui.button("Got it").clicked() {
                close = true;
            }
        });

        if close || modal.should_close() {
            self.shell.page_mut().private_notice = None;
        }
    }
}
