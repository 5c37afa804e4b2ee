use eframe::egui::{self, Align, Button, Context, Frame, Layout, RichText, TextEdit};

use crate::catalog::filter_projects;

use super::super::PortfolioApp;
use super::super::render_utils::{ACCENT, PAGE_BG, TEXT_MUTED, TEXT_WHITE};
use super::super::viewport::PageLayout;
use super::cards::project_grid;
use super::centered_column;

impl PortfolioApp {
    pub(in crate::app) fn draw_catalog_page(&mut self, ctx: &Context, now_ms: f64) {
        let catalog = &self.catalog;
        let page = self.shell.page_mut();
        let forced = page.viewport.take_forced_offset();
        let mut go_back = false;
        let mut open_notice = None;

        let output = egui::CentralPanel::default()
            .frame(Frame::new().fill(PAGE_BG))
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical()
                    .id_salt("catalog_scroll")
                    .auto_shrink([false, false]);
                if let Some(offset) = forced {
                    area = area.vertical_scroll_offset(offset);
                }

                area.show(ui, |ui| {
                    ui.add_space(48.0);
                    centered_column(ui, |ui| {
                        ui.horizontal(|ui| {
                            let back = Button::new(RichText::new("← Back").color(ACCENT))
                                .frame(false);
                            if ui.add(back).clicked() {
                                go_back = true;
                            }
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.add(
                                    TextEdit::singleline(&mut page.filter)
                                        .hint_text("Filter by name, description or tech")
                                        .desired_width(280.0),
                                );
                            });
                        });
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("PROJECTS")
                                    .size(40.0)
                                    .strong()
                                    .color(TEXT_WHITE),
                            );
                        });
                        ui.add_space(24.0);

                        let projects = catalog.projects();
                        let matches: Vec<_> = filter_projects(projects, &page.filter)
                            .into_iter()
                            .filter_map(|index| projects.get(index))
                            .collect();
                        if matches.is_empty() {
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new("No projects match this filter.")
                                        .color(TEXT_MUTED),
                                );
                            });
                        } else {
                            open_notice = project_grid(ui, &matches);
                        }
                    });
                    ui.add_space(48.0);
                })
            })
            .inner;

        let layout = PageLayout {
            sections: Vec::new(),
            document_height: output.content_size.y,
            viewport_height: output.inner_rect.height(),
        };
        self.shell.observe(now_ms, output.state.offset.y, layout);

        if let Some(id) = open_notice {
            self.shell.page_mut().private_notice = Some(id);
        }
        if go_back {
            self.shell.leave_catalog(now_ms);
        }
    }
}
