use eframe::egui;
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

/// Severity of a [`Surface::banner`] callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Display primitives the hub renders through.
///
/// Panels only talk to this trait, never to egui directly, so tests can swap
/// in a recording implementation and assert on the emitted calls. Container
/// primitives hand the caller a nested surface for their body content.
pub trait Surface {
    /// Page-level title.
    fn heading(&mut self, text: &str);
    /// Section title inside a panel or card.
    fn subheader(&mut self, text: &str);
    fn label(&mut self, text: &str);
    /// Emphasised inline text, used for field labels.
    fn strong(&mut self, text: &str);
    /// De-emphasised small print.
    fn caption(&mut self, text: &str);
    /// CommonMark body text.
    fn markdown(&mut self, text: &str);
    /// Quoted passage, visually set off from surrounding text.
    fn blockquote(&mut self, text: &str);
    /// Coloured callout with a leading icon.
    fn banner(&mut self, kind: BannerKind, icon: &str, text: &str);
    /// Row of selectable tab labels. Returns the index of a newly clicked
    /// tab, or `None` when the selection did not change this pass.
    fn tab_bar(&mut self, labels: &[&str], selected: usize) -> Option<usize>;
    /// Bordered container.
    fn group(&mut self, body: &mut dyn FnMut(&mut dyn Surface));
    /// Bordered container with an accent edge and a large leading icon.
    fn card(&mut self, icon: &str, body: &mut dyn FnMut(&mut dyn Surface));
    /// Two-column split, left column first.
    fn columns(
        &mut self,
        left: &mut dyn FnMut(&mut dyn Surface),
        right: &mut dyn FnMut(&mut dyn Surface),
    );
    /// Collapsible section. `default_open` only seeds the first pass; the
    /// open state sticks with the user afterwards.
    fn collapsible(
        &mut self,
        title: &str,
        default_open: bool,
        body: &mut dyn FnMut(&mut dyn Surface),
    );
    /// Inert button with a hover text explaining why it does nothing.
    fn disabled_button(&mut self, label: &str, reason: &str);
    fn bullet_list(&mut self, items: &[String]);
    /// Navigation link presented as a call to action.
    fn link_button(&mut self, label: &str, url: &str);
    /// Mathematical definition set apart in a highlighted block.
    fn formula(&mut self, formula: &str);
    /// Small vertical gap.
    fn space(&mut self);
}

/// Accent used for card edges, after the classic hyperlink blue.
const CARD_ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 123, 255);

fn banner_palette(kind: BannerKind, dark_mode: bool) -> (egui::Color32, egui::Color32) {
    use eframe::egui::Color32;
    match (kind, dark_mode) {
        (BannerKind::Info, true) => (
            Color32::from_rgb(20, 45, 70),
            Color32::from_rgb(60, 120, 180),
        ),
        (BannerKind::Info, false) => (
            Color32::from_rgb(214, 234, 255),
            Color32::from_rgb(120, 170, 220),
        ),
        (BannerKind::Success, true) => (
            Color32::from_rgb(18, 56, 32),
            Color32::from_rgb(50, 140, 80),
        ),
        (BannerKind::Success, false) => (
            Color32::from_rgb(218, 243, 226),
            Color32::from_rgb(110, 190, 140),
        ),
        (BannerKind::Warning, true) => (
            Color32::from_rgb(70, 56, 16),
            Color32::from_rgb(180, 140, 50),
        ),
        (BannerKind::Warning, false) => (
            Color32::from_rgb(255, 243, 205),
            Color32::from_rgb(220, 180, 90),
        ),
        (BannerKind::Error, true) => (
            Color32::from_rgb(72, 24, 24),
            Color32::from_rgb(190, 70, 70),
        ),
        (BannerKind::Error, false) => (
            Color32::from_rgb(252, 220, 220),
            Color32::from_rgb(220, 110, 110),
        ),
    }
}

/// [`Surface`] backed by a live egui `Ui`.
///
/// Widget ids are derived from a deterministic per-frame counter chained
/// through nested containers, so repeated titles (two expanders with the same
/// label, say) never collide.
pub struct EguiSurface<'a> {
    ui: &'a mut egui::Ui,
    cache: &'a mut CommonMarkCache,
    salt: u64,
    seq: u64,
}

impl<'a> EguiSurface<'a> {
    pub fn new(ui: &'a mut egui::Ui, cache: &'a mut CommonMarkCache) -> Self {
        Self::child(ui, cache, 0)
    }

    fn child(ui: &'a mut egui::Ui, cache: &'a mut CommonMarkCache, salt: u64) -> Self {
        Self {
            ui,
            cache,
            salt,
            seq: 0,
        }
    }

    fn next_salt(&mut self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        (self.salt, self.seq).hash(&mut hasher);
        self.seq += 1;
        hasher.finish()
    }
}

impl Surface for EguiSurface<'_> {
    fn heading(&mut self, text: &str) {
        self.ui.heading(text);
        self.ui.add_space(4.0);
    }

    fn subheader(&mut self, text: &str) {
        self.ui.label(egui::RichText::new(text).size(17.0).strong());
    }

    fn label(&mut self, text: &str) {
        self.ui.label(text);
    }

    fn strong(&mut self, text: &str) {
        self.ui.strong(text);
    }

    fn caption(&mut self, text: &str) {
        self.ui.label(egui::RichText::new(text).small().weak());
    }

    fn markdown(&mut self, text: &str) {
        let salt = self.next_salt();
        CommonMarkViewer::new(format!("hub_md_{salt}")).show(self.ui, self.cache, text);
    }

    fn blockquote(&mut self, text: &str) {
        let quoted = text
            .lines()
            .map(|line| format!("> {line}"))
            .collect::<Vec<_>>()
            .join("\n");
        self.markdown(&quoted);
    }

    fn banner(&mut self, kind: BannerKind, icon: &str, text: &str) {
        let (fill, stroke) = banner_palette(kind, self.ui.visuals().dark_mode);
        egui::Frame::none()
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(self.ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(icon).size(16.0));
                    ui.label(text);
                });
            });
    }

    fn tab_bar(&mut self, labels: &[&str], selected: usize) -> Option<usize> {
        let mut clicked = None;
        self.ui.horizontal_wrapped(|ui| {
            for (idx, label) in labels.iter().enumerate() {
                let active = idx == selected;
                let response = ui.selectable_label(active, egui::RichText::new(*label).size(15.0));
                if response.clicked() && !active {
                    clicked = Some(idx);
                }
            }
        });
        self.ui.separator();
        clicked
    }

    fn group(&mut self, body: &mut dyn FnMut(&mut dyn Surface)) {
        let salt = self.next_salt();
        let cache = &mut *self.cache;
        egui::Frame::group(self.ui.style())
            .inner_margin(egui::Margin::symmetric(12.0, 10.0))
            .show(self.ui, |ui| {
                ui.set_width(ui.available_width());
                let mut child = EguiSurface::child(ui, cache, salt);
                body(&mut child);
            });
    }

    fn card(&mut self, icon: &str, body: &mut dyn FnMut(&mut dyn Surface)) {
        let salt = self.next_salt();
        let cache = &mut *self.cache;
        let icon_text = egui::RichText::new(icon).size(26.0);
        let frame = egui::Frame::group(self.ui.style())
            .inner_margin(egui::Margin {
                left: 16.0,
                right: 12.0,
                top: 10.0,
                bottom: 10.0,
            })
            .show(self.ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_top(|ui| {
                    ui.label(icon_text);
                    ui.add_space(8.0);
                    ui.vertical(|ui| {
                        let mut child = EguiSurface::child(ui, cache, salt);
                        body(&mut child);
                    });
                });
            });
        let rect = frame.response.rect;
        let edge = egui::Rect::from_min_max(
            rect.left_top(),
            egui::pos2(rect.left() + 4.0, rect.bottom()),
        );
        self.ui
            .painter()
            .rect_filled(edge, egui::Rounding::same(2.0), CARD_ACCENT);
    }

    fn columns(
        &mut self,
        left: &mut dyn FnMut(&mut dyn Surface),
        right: &mut dyn FnMut(&mut dyn Surface),
    ) {
        let left_salt = self.next_salt();
        let right_salt = self.next_salt();
        let cache = &mut *self.cache;
        self.ui.columns(2, |columns| {
            {
                let mut child = EguiSurface::child(&mut columns[0], &mut *cache, left_salt);
                left(&mut child);
            }
            {
                let mut child = EguiSurface::child(&mut columns[1], &mut *cache, right_salt);
                right(&mut child);
            }
        });
    }

    fn collapsible(
        &mut self,
        title: &str,
        default_open: bool,
        body: &mut dyn FnMut(&mut dyn Surface),
    ) {
        let salt = self.next_salt();
        let cache = &mut *self.cache;
        egui::CollapsingHeader::new(egui::RichText::new(title).strong())
            .id_source(format!("hub_section_{salt}"))
            .default_open(default_open)
            .show(self.ui, |ui| {
                let mut child = EguiSurface::child(ui, cache, salt);
                body(&mut child);
            });
    }

    fn disabled_button(&mut self, label: &str, reason: &str) {
        self.ui
            .add_enabled(false, egui::Button::new(label))
            .on_disabled_hover_text(reason);
    }

    fn bullet_list(&mut self, items: &[String]) {
        for item in items {
            self.ui.horizontal_wrapped(|ui| {
                ui.label("•");
                ui.label(item);
            });
        }
    }

    fn link_button(&mut self, label: &str, url: &str) {
        self.ui
            .hyperlink_to(egui::RichText::new(label).strong(), url);
    }

    fn formula(&mut self, formula: &str) {
        let fill = self.ui.visuals().code_bg_color;
        egui::Frame::none()
            .fill(fill)
            .rounding(egui::Rounding::same(4.0))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(self.ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(formula).monospace().size(15.0));
                });
            });
    }

    fn space(&mut self) {
        self.ui.add_space(8.0);
    }
}
