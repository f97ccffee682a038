use crate::content::{ContentSource, StaticContent};
use crate::hub::panels::{event_log, glossary as glossary_panel, training_library};
use crate::hub::surface::{BannerKind, Surface};
use crate::session::SessionState;
use anyhow::Context as _;

const PAGE_TITLE: &str = "🎓 Continuous Improvement & Knowledge Hub";

const PAGE_INTRO: &str = r"Welcome to the central nervous system of our learning organization. This hub is the catalyst for our Continuous Improvement (CI) culture.
Here, we **celebrate our successes**, **share our wisdom**, and **empower our teams** with the knowledge to drive process excellence.";

const TAB_HINT: &str = "Select a tab to review the A3 reports from past Kaizen events or to access our curated library of quality and CI training.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubTab {
    EventLog,
    TrainingLibrary,
    Glossary,
}

impl HubTab {
    pub const ALL: [HubTab; 3] = [HubTab::EventLog, HubTab::TrainingLibrary, HubTab::Glossary];

    pub fn label(self) -> &'static str {
        match self {
            HubTab::EventLog => "🏆 Kaizen Event A3 Log",
            HubTab::TrainingLibrary => "📚 Training & Development Library",
            HubTab::Glossary => "📖 Methodologies & Terminology Glossary",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    fn from_index(index: usize) -> HubTab {
        Self::ALL.get(index).copied().unwrap_or(HubTab::EventLog)
    }
}

impl Default for HubTab {
    fn default() -> Self {
        HubTab::EventLog
    }
}

/// The Continuous Improvement & Knowledge Hub page.
///
/// The only state it keeps between passes is the selected tab; records come
/// fresh from the content source every time. Switching tabs is pure display
/// state and neither reads nor writes any record.
pub struct HubPage {
    tab: HubTab,
    source: Box<dyn ContentSource>,
}

impl HubPage {
    pub fn new() -> Self {
        Self::with_source(Box::new(StaticContent))
    }

    /// Page over a custom content backend.
    pub fn with_source(source: Box<dyn ContentSource>) -> Self {
        Self {
            tab: HubTab::default(),
            source,
        }
    }

    pub fn active_tab(&self) -> HubTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: HubTab) {
        self.tab = tab;
    }

    /// Draw the whole page. Failures inside the body are caught here and
    /// reported as a single error banner plus one log entry; the hosting
    /// shell keeps running.
    pub fn render(&mut self, surface: &mut dyn Surface, session: &SessionState) {
        surface.heading(PAGE_TITLE);
        surface.markdown(PAGE_INTRO);

        if let Err(err) = self.render_body(surface, session) {
            surface.banner(
                BannerKind::Error,
                "🛑",
                &format!("An error occurred while rendering the Kaizen & Training Hub: {err:#}"),
            );
            tracing::error!("failed to render kaizen and training hub: {err:?}");
        }
    }

    fn render_body(
        &mut self,
        surface: &mut dyn Surface,
        _session: &SessionState,
    ) -> anyhow::Result<()> {
        let events = self
            .source
            .kaizen_events()
            .context("loading the Kaizen event log")?;
        let materials = self
            .source
            .training_catalog()
            .context("loading the training catalogue")?;
        let glossary = self.source.glossary().context("loading the glossary")?;

        surface.banner(BannerKind::Info, "🧠", TAB_HINT);

        let labels: Vec<&str> = HubTab::ALL.iter().map(|tab| tab.label()).collect();
        if let Some(clicked) = surface.tab_bar(&labels, self.tab.index()) {
            self.tab = HubTab::from_index(clicked);
        }

        match self.tab {
            HubTab::EventLog => event_log::render(surface, &events),
            HubTab::TrainingLibrary => training_library::render(surface, &materials),
            HubTab::Glossary => glossary_panel::render(surface, &glossary),
        }
        Ok(())
    }
}

impl Default for HubPage {
    fn default() -> Self {
        Self::new()
    }
}
