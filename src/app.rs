use crate::hub::{EguiSurface, HubPage};
use crate::session::SessionState;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use egui_commonmark::CommonMarkCache;

/// Top-level eframe application hosting the knowledge hub page.
pub struct HubApp {
    page: HubPage,
    session: SessionState,
    markdown: CommonMarkCache,
}

impl HubApp {
    /// Build the app and apply the configured theme to `ctx`.
    pub fn new(ctx: &egui::Context, settings: &Settings, session: SessionState) -> Self {
        let visuals = theme::visuals_for_mode(settings.theme, &ctx.style().visuals);
        ctx.set_visuals(visuals);
        tracing::debug!(started_at = %session.started_at(), "session attached");
        Self {
            page: HubPage::new(),
            session,
            markdown: CommonMarkCache::default(),
        }
    }
}

impl eframe::App for HubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let mut surface = EguiSurface::new(ui, &mut self.markdown);
                    self.page.render(&mut surface, &self.session);
                });
        });
    }
}
