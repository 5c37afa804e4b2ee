use std::time::Duration;

use eframe::egui::{self, Context, Key, Modifiers, PointerButton};

use crate::catalog::Catalog;

mod nav;
mod page;
mod particles;
mod render_utils;
mod reveal;
mod routing;
mod shell;
mod timeline;
mod typewriter;
mod ui;
mod viewport;

use routing::HistoryDirection;
pub use routing::{Location, Route};
use shell::Shell;

#[derive(Clone, Debug)]
pub struct ShellOptions {
    pub start: Location,
    pub seed: u64,
}

pub struct PortfolioApp {
    shell: Shell,
    catalog: Catalog,
}

enum ShellInput {
    Reload,
    History(HistoryDirection),
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: ShellOptions, catalog: Catalog) -> Self {
        ui::install_style(&cc.egui_ctx);
        let now_ms = now_ms(&cc.egui_ctx);
        tracing::info!(start = %options.start, seed = options.seed, "mounting shell");

        Self {
            shell: Shell::new(options.start, options.seed, now_ms),
            catalog,
        }
    }

    fn read_shell_input(ctx: &Context) -> Option<ShellInput> {
        ctx.input_mut(|input| {
            if input.consume_key(Modifiers::NONE, Key::F5)
                || input.consume_key(Modifiers::COMMAND, Key::R)
            {
                return Some(ShellInput::Reload);
            }
            if input.consume_key(Modifiers::ALT, Key::ArrowLeft)
                || input.pointer.button_pressed(PointerButton::Extra1)
            {
                return Some(ShellInput::History(HistoryDirection::Back));
            }
            if input.consume_key(Modifiers::ALT, Key::ArrowRight)
                || input.pointer.button_pressed(PointerButton::Extra2)
            {
                return Some(ShellInput::History(HistoryDirection::Forward));
            }
            None
        })
    }

    fn paint_page_fade(&self, ctx: &Context, now_ms: f64) {
        let opacity = self.shell.page().viewport().opacity(now_ms);
        if opacity >= 1.0 {
            return;
        }

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("page_fade"),
        ));
        painter.rect_filled(
            painter.clip_rect(),
            0.0,
            render_utils::with_alpha(render_utils::PAGE_BG, 1.0 - opacity),
        );
    }
}

fn now_ms(ctx: &Context) -> f64 {
    ctx.input(|input| input.time) * 1_000.0
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now_ms = now_ms(ctx);

        let input = if self.shell.page().viewport().is_hidden() {
            None
        } else {
            Self::read_shell_input(ctx)
        };
        match input {
            Some(ShellInput::Reload) => self.shell.reload(now_ms),
            Some(ShellInput::History(direction)) => self.shell.go(direction, now_ms),
            None => {}
        }

        self.shell.advance(now_ms);

        self.draw_navbar(ctx, now_ms);
        match self.shell.route() {
            Route::Home => self.draw_home(ctx, now_ms),
            Route::Projects => self.draw_catalog_page(ctx, now_ms),
        }
        self.draw_private_notice(ctx);
        self.paint_page_fade(ctx, now_ms);

        let fields_running = self
            .shell
            .page()
            .fields()
            .iter()
            .any(|field| field.is_running());
        let typing = self.shell.page().greeting.is_typing(now_ms);
        if fields_running || typing || self.shell.is_animating(now_ms) {
            ctx.request_repaint();
        } else if let Some(due_ms) = self.shell.page().next_command_due_ms() {
            let wait_secs = ((due_ms - now_ms) / 1_000.0).max(0.0);
            ctx.request_repaint_after(Duration::from_secs_f64(wait_secs));
        }
    }
}
