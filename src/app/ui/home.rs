use eframe::egui::{
    self, Align, Button, Context, CornerRadius, Frame, Layout, Margin, Pos2, Rect, RichText,
    Sense, Stroke, Ui, pos2, vec2,
};

use crate::catalog::Catalog;
use crate::content::{
    ABOUT_PARAGRAPHS, CONTACT_CHANNELS, CONTACT_INVITE, FOOTER_CREDIT, HERO_BLURB,
    OWNER_NAME, RESUME_URL, SKILL_CATEGORIES, SectionId, SkillCategory, TAGLINE, WELCOME,
};

use super::super::PortfolioApp;
use super::super::page::Page;
use super::super::particles::FieldPreset;
use super::super::render_utils::{
    ACCENT, BORDER, CARD_BG, PAGE_BG, TEXT_MUTED, TEXT_WHITE, blend_color, with_alpha,
};
use super::super::reveal::RevealFrom;
use super::super::viewport::{PageLayout, SectionExtent};
use super::cards::project_grid;
use super::{MOBILE_BREAKPOINT, centered_column, open_link, reveal_block, section_heading};

const SECTION_PADDING: f32 = 72.0;

enum HomeAction {
    OpenCatalog,
    PrivateNotice(u32),
}

fn backdrop_for(section: SectionId) -> Option<FieldPreset> {
    match section {
        SectionId::Hero => Some(FieldPreset::Starfield),
        SectionId::Skills => Some(FieldPreset::Network),
        SectionId::Contact => Some(FieldPreset::Constellation),
        SectionId::About | SectionId::Projects => None,
    }
}

struct HomeFrame<'a> {
    page: &'a mut Page,
    catalog: &'a Catalog,
    now_ms: f64,
    returning: bool,
    narrow: bool,
    action: Option<HomeAction>,
}

impl HomeFrame<'_> {
    fn reveal<R>(
        &mut self,
        ui: &mut Ui,
        id: &'static str,
        from: RevealFrom,
        delay_ms: f64,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> R {
        let reveal = self.page.reveal_mut(id, from, 0.2, delay_ms);
        reveal_block(ui, reveal, self.now_ms, self.returning, add_contents)
    }

    /// Steps and paints the section's field over the extent measured last frame.
    fn backdrop(
        &mut self,
        ui: &Ui,
        section: SectionId,
        extent: Option<&SectionExtent>,
        origin: Pos2,
    ) {
        let (Some(preset), Some(extent)) = (backdrop_for(section), extent) else {
            return;
        };
        let Some(field) = self.page.field_mut(preset) else {
            return;
        };

        let rect = Rect::from_min_size(
            pos2(ui.max_rect().left(), origin.y + extent.top),
            vec2(ui.max_rect().width(), extent.height),
        );
        field.step(self.now_ms, rect.size());
        field.paint(ui.painter(), rect);
    }

    fn section(&mut self, ui: &mut Ui, section: SectionId, viewport_height: f32) {
        ui.vertical(|ui| {
            if section == SectionId::Hero {
                ui.set_min_height(viewport_height);
            }
            ui.add_space(SECTION_PADDING);
            centered_column(ui, |ui| match section {
                SectionId::Hero => self.hero(ui),
                SectionId::About => self.about(ui),
                SectionId::Skills => self.skills(ui),
                SectionId::Projects => self.projects(ui),
                SectionId::Contact => self.contact(ui),
            });
            ui.add_space(SECTION_PADDING);
        });
    }

    fn hero(&mut self, ui: &mut Ui) {
        ui.add_space(40.0);
        self.reveal(ui, "hero_title", RevealFrom::Below, 0.0, |ui| {
            ui.label(
                RichText::new(OWNER_NAME)
                    .size(64.0)
                    .strong()
                    .color(TEXT_WHITE),
            );
            ui.label(RichText::new(TAGLINE).size(20.0).color(ACCENT));
        });
        ui.add_space(32.0);

        let now_ms = self.now_ms;
        let typed = self.page.greeting.typed(now_ms);
        let cursor = if self.page.greeting.cursor_visible(now_ms) { "|" } else { " " };
        self.reveal(ui, "hero_intro", RevealFrom::Left, 200.0, |ui| {
            ui.set_max_width(520.0);
            ui.label(
                RichText::new(format!("{typed}{cursor}"))
                    .size(28.0)
                    .strong()
                    .color(TEXT_WHITE),
            );
            ui.add_space(8.0);
            ui.label(WELCOME);
            ui.add_space(8.0);
            ui.label(HERO_BLURB);
            ui.add_space(16.0);
            let resume = Button::new(RichText::new("VIEW RESUME").strong().color(TEXT_WHITE))
                .fill(ACCENT)
                .corner_radius(CornerRadius::same(20))
                .min_size(vec2(160.0, 40.0));
            if ui.add(resume).clicked() {
                open_link(ui, RESUME_URL);
            }
        });

        let in_view = self
            .page
            .reveal_mut("hero_intro", RevealFrom::Left, 0.2, 200.0)
            .is_in_view();
        self.page.greeting.update(now_ms, in_view);
    }

    fn about(&mut self, ui: &mut Ui) {
        self.reveal(ui, "about_heading", RevealFrom::Below, 0.0, |ui| {
            section_heading(ui, "ABOUT ME");
        });
        self.reveal(ui, "about_text", RevealFrom::Left, 100.0, |ui| {
            for paragraph in ABOUT_PARAGRAPHS {
                ui.label(RichText::new(*paragraph).size(16.0));
                ui.add_space(12.0);
            }
        });
    }

    fn skills(&mut self, ui: &mut Ui) {
        self.reveal(ui, "skills_heading", RevealFrom::Below, 0.0, |ui| {
            section_heading(ui, "SKILLS");
        });

        let columns = if self.narrow { 1 } else { 2 };
        for (row_index, row) in SKILL_CATEGORIES.chunks(columns).enumerate() {
            let from = if row_index % 2 == 0 {
                RevealFrom::Left
            } else {
                RevealFrom::Right
            };
            let id = row.first().map_or("skills_row", |category| category.name);
            self.reveal(ui, id, from, 100.0 * row_index as f64, |ui| {
                ui.columns(columns, |cells| {
                    for (cell, category) in cells.iter_mut().zip(row) {
                        skill_card(cell, category);
                    }
                });
            });
            ui.add_space(20.0);
        }
    }

    fn projects(&mut self, ui: &mut Ui) {
        self.reveal(ui, "projects_heading", RevealFrom::Below, 0.0, |ui| {
            section_heading(ui, "PROJECTS");
        });

        let catalog = self.catalog;
        let shown = if self.narrow { 2 } else { Catalog::HOME_PREVIEW_LEN };
        let preview: Vec<_> = catalog.home_preview().iter().take(shown).collect();
        let has_more = catalog.len() > preview.len();
        let notice = self.reveal(ui, "projects_preview", RevealFrom::Below, 100.0, |ui| {
            project_grid(ui, &preview)
        });
        if let Some(id) = notice {
            self.action = Some(HomeAction::PrivateNotice(id));
        }

        if has_more {
            ui.vertical_centered(|ui| {
                let more = Button::new(RichText::new("View More Projects").color(ACCENT))
                    .stroke(Stroke::new(1.0, ACCENT))
                    .fill(PAGE_BG)
                    .corner_radius(CornerRadius::same(20));
                if ui.add(more).clicked() {
                    self.action = Some(HomeAction::OpenCatalog);
                }
            });
        }
    }

    fn contact(&mut self, ui: &mut Ui) {
        self.reveal(ui, "contact_heading", RevealFrom::Below, 0.0, |ui| {
            section_heading(ui, "CONTACT");
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(CONTACT_INVITE).color(ACCENT));
            });
        });
        ui.add_space(32.0);

        let columns = if self.narrow { 1 } else { 2 };
        let now_ms = self.now_ms;
        let returning = self.returning;
        let page = &mut *self.page;
        ui.columns(columns, |cells| {
            let (first, rest) = cells.split_at_mut(1);
            reveal_block(
                &mut first[0],
                page.reveal_mut("contact_invite", RevealFrom::Left, 0.2, 0.0),
                now_ms,
                returning,
                |ui| {
                    ui.label(RichText::new("LET'S WORK").size(56.0).strong().color(TEXT_WHITE));
                    ui.label(RichText::new("TOGETHER").size(56.0).strong().color(ACCENT));
                },
            );
            let channels_cell = match rest.first_mut() {
                Some(cell) => cell,
                None => {
                    first[0].add_space(24.0);
                    &mut first[0]
                }
            };
            reveal_block(
                channels_cell,
                page.reveal_mut("contact_channels", RevealFrom::Right, 0.2, 100.0),
                now_ms,
                returning,
                contact_channels,
            );
        });
    }
}

fn skill_card(ui: &mut Ui, category: &SkillCategory) {
    Frame::new()
        .fill(with_alpha(CARD_BG, 0.85))
        .stroke(Stroke::new(1.0, BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(category.name).size(22.0).strong().color(ACCENT));
            ui.add_space(12.0);
            ui.horizontal_wrapped(|ui| {
                for skill in category.skills {
                    Frame::new()
                        .fill(blend_color(CARD_BG, skill.color, 0.12))
                        .stroke(Stroke::new(1.0, blend_color(BORDER, skill.color, 0.4)))
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(Margin::symmetric(10, 6))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                let (dot, _) = ui.allocate_exact_size(vec2(8.0, 8.0), Sense::hover());
                                ui.painter().circle_filled(dot.center(), 4.0, skill.color);
                                ui.label(RichText::new(skill.name).color(TEXT_WHITE));
                            });
                        });
                }
            });
        });
}

fn contact_channels(ui: &mut Ui) {
    for channel in CONTACT_CHANNELS {
        let card = Frame::new()
            .fill(CARD_BG)
            .stroke(Stroke::new(1.0, BORDER))
            .corner_radius(CornerRadius::same(12))
            .inner_margin(Margin::same(18))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(channel.label).strong().color(ACCENT));
                    ui.add_space(12.0);
                    ui.label(channel.value);
                });
            });
        let response = card
            .response
            .interact(Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            open_link(ui, channel.url);
        }
        ui.add_space(12.0);
    }
}

fn footer(ui: &mut Ui) {
    ui.add_space(24.0);
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.label(RichText::new(FOOTER_CREDIT).size(13.0).color(TEXT_MUTED));
    });
    ui.add_space(24.0);
}

impl PortfolioApp {
    pub(in crate::app) fn draw_home(&mut self, ctx: &Context, now_ms: f64) {
        let returning = self.shell.is_returning_from_catalog();
        let page = self.shell.page_mut();
        let forced = page.viewport.take_forced_offset();
        let previous = page.viewport().layout().clone();
        let smooth_scrolling = page.viewport().smooth_scrolling();
        let mut frame = HomeFrame {
            page,
            catalog: &self.catalog,
            now_ms,
            returning,
            narrow: false,
            action: None,
        };

        let output = egui::CentralPanel::default()
            .frame(Frame::new().fill(PAGE_BG))
            .show(ctx, |ui| {
                frame.narrow = ui.available_width() < MOBILE_BREAKPOINT;
                let mut area = egui::ScrollArea::vertical()
                    .id_salt("home_scroll")
                    .auto_shrink([false, false])
                    .animated(smooth_scrolling);
                if let Some(offset) = forced {
                    area = area.vertical_scroll_offset(offset);
                }

                area.show(ui, |ui| {
                    let origin = ui.cursor().min;
                    let viewport_height = ui.clip_rect().height();
                    let mut tops = Vec::with_capacity(SectionId::ALL.len());
                    for section in SectionId::ALL {
                        tops.push(ui.cursor().top() - origin.y);
                        frame.backdrop(ui, section, previous.extent(section), origin);
                        frame.section(ui, section, viewport_height);
                    }
                    let sections_end = ui.cursor().top() - origin.y;
                    footer(ui);
                    section_extents(&tops, sections_end)
                })
            })
            .inner;
        let action = frame.action;

        let layout = PageLayout {
            sections: output.inner,
            document_height: output.content_size.y,
            viewport_height: output.inner_rect.height(),
        };
        self.shell.observe(now_ms, output.state.offset.y, layout);

        match action {
            Some(HomeAction::OpenCatalog) => self.shell.open_catalog(now_ms),
            Some(HomeAction::PrivateNotice(id)) => {
                self.shell.page_mut().private_notice = Some(id);
            }
            None => {}
        }
    }
}

fn section_extents(tops: &[f32], end: f32) -> Vec<SectionExtent> {
    SectionId::ALL
        .into_iter()
        .zip(tops)
        .enumerate()
        .map(|(index, (section, &top))| {
            let bottom = tops.get(index + 1).copied().unwrap_or(end);
            SectionExtent {
                section,
                top,
                height: (bottom - top).max(0.0),
            }
        })
        .collect()
}
