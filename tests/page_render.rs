use kaizen_hub::content::kaizen_events;
use kaizen_hub::hub::{BannerKind, HubPage, HubTab};
use kaizen_hub::session::SessionState;

use mock_surface::{RecordingSurface, SurfaceCall};

#[test]
fn page_renders_header_hint_and_tabs() {
    let mut page = HubPage::new();
    let mut surface = RecordingSurface::new();
    page.render(&mut surface, &SessionState::new());

    assert_eq!(
        surface.calls.first(),
        Some(&SurfaceCall::Heading(
            "🎓 Continuous Improvement & Knowledge Hub".into()
        ))
    );
    assert!(
        matches!(&surface.calls[1], SurfaceCall::Markdown(text) if text.contains("**celebrate our successes**"))
    );

    let hints = surface.banner_texts(BannerKind::Info);
    assert!(hints[0].starts_with("Select a tab"));

    let tab_bars: Vec<&SurfaceCall> = surface
        .calls
        .iter()
        .filter(|c| matches!(c, SurfaceCall::TabBar { .. }))
        .collect();
    assert_eq!(tab_bars.len(), 1);
    assert!(matches!(
        tab_bars[0],
        SurfaceCall::TabBar { labels, selected: 0 }
            if labels.len() == 3
                && labels[0] == "🏆 Kaizen Event A3 Log"
                && labels[1] == "📚 Training & Development Library"
                && labels[2] == "📖 Methodologies & Terminology Glossary"
    ));

    // the event log is the landing tab
    assert_eq!(page.active_tab(), HubTab::EventLog);
    assert_eq!(surface.count(|c| matches!(c, SurfaceCall::GroupStart)), 4);
    assert!(surface.banner_texts(BannerKind::Error).is_empty());
}

#[test]
fn clicking_a_tab_switches_panels_in_the_same_pass() {
    let mut page = HubPage::new();
    let mut surface = RecordingSurface::new();
    surface.next_tab_click = Some(1);
    page.render(&mut surface, &SessionState::new());

    assert_eq!(page.active_tab(), HubTab::TrainingLibrary);
    assert_eq!(surface.count(|c| matches!(c, SurfaceCall::CardStart { .. })), 5);
    assert_eq!(surface.count(|c| matches!(c, SurfaceCall::GroupStart)), 0);

    // the selection sticks on the next pass
    let mut surface = RecordingSurface::new();
    page.render(&mut surface, &SessionState::new());
    assert_eq!(page.active_tab(), HubTab::TrainingLibrary);
    assert_eq!(surface.count(|c| matches!(c, SurfaceCall::CardStart { .. })), 5);
}

#[test]
fn select_tab_drives_the_rendered_panel() {
    let mut page = HubPage::new();
    page.select_tab(HubTab::Glossary);

    let mut surface = RecordingSurface::new();
    page.render(&mut surface, &SessionState::new());

    assert_eq!(surface.collapsibles().len(), 4);
    assert_eq!(surface.count(|c| matches!(c, SurfaceCall::CardStart { .. })), 0);
}

#[test]
fn out_of_range_click_falls_back_to_the_event_log() {
    let mut page = HubPage::new();
    page.select_tab(HubTab::Glossary);

    let mut surface = RecordingSurface::new();
    surface.next_tab_click = Some(9);
    page.render(&mut surface, &SessionState::new());

    assert_eq!(page.active_tab(), HubTab::EventLog);
}

#[test]
fn tab_switching_leaves_the_records_untouched() {
    let before = kaizen_events().to_vec();

    let mut page = HubPage::new();
    for tab in [HubTab::TrainingLibrary, HubTab::Glossary, HubTab::EventLog] {
        page.select_tab(tab);
        let mut surface = RecordingSurface::new();
        page.render(&mut surface, &SessionState::new());
    }

    assert_eq!(kaizen_events(), before.as_slice());
}
