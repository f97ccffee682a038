use kaizen_hub::content::training_catalog;
use kaizen_hub::hub::panels::training_library;
use kaizen_hub::hub::BannerKind;

use mock_surface::{RecordingSurface, SurfaceCall};

#[test]
fn renders_a_card_per_material_in_catalog_order() {
    let mut surface = RecordingSurface::new();
    training_library::render(&mut surface, training_catalog());

    assert_eq!(surface.count(|c| matches!(c, SurfaceCall::CardStart { .. })), 5);
    assert_eq!(surface.card_icons(), ["📝", "📊", "🤝", "🛡️", "🌊"]);

    // first subheader is the panel intro, the rest are card titles
    let titles: Vec<&str> = surface.subheaders()[1..].to_vec();
    let expected: Vec<&str> = training_catalog().iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, expected);
}

#[test]
fn card_meta_line_shows_format_duration_and_audience() {
    let mut surface = RecordingSurface::new();
    training_library::render(&mut surface, training_catalog());

    let captions = surface.captions();
    assert_eq!(
        captions[0],
        "Type: eLearning | Est. Duration: 2.5 hrs | Primary Audience: Engineers, Team Leads, Managers"
    );
    assert!(captions
        .iter()
        .any(|c| c.contains("Type: Workshop Slides") && c.contains("Est. Duration: 8.0 hrs")));
    assert!(captions.iter().any(|c| c.contains("Type: PDF Guide")));
}

#[test]
fn objectives_render_as_one_list_per_card() {
    let mut surface = RecordingSurface::new();
    training_library::render(&mut surface, training_catalog());

    let lists = surface.bullet_lists();
    assert_eq!(lists.len(), 5);
    let lengths: Vec<usize> = lists.iter().map(|items| items.len()).collect();
    assert_eq!(lengths, [4, 4, 4, 4, 4]);
    assert_eq!(
        lists[0][0],
        "Understand the 7 sections of a standard A3 Report."
    );
}

#[test]
fn every_card_offers_reading_and_a_launch_link() {
    let mut surface = RecordingSurface::new();
    training_library::render(&mut surface, training_catalog());

    let reading = surface.count(
        |c| matches!(c, SurfaceCall::Markdown(text) if text.starts_with("**Recommended Reading:**")),
    );
    assert_eq!(reading, 5);

    let links = surface.count(
        |c| matches!(c, SurfaceCall::LinkButton { label, url } if label == "Launch Module" && url == "#"),
    );
    assert_eq!(links, 5);
}

#[test]
fn empty_catalog_shows_warning_and_no_cards() {
    let mut surface = RecordingSurface::new();
    training_library::render(&mut surface, &[]);

    assert_eq!(
        surface.banner_texts(BannerKind::Warning),
        ["No training materials are available in the data model."]
    );
    assert_eq!(surface.count(|c| matches!(c, SurfaceCall::CardStart { .. })), 0);
    assert_eq!(surface.count(|c| matches!(c, SurfaceCall::LinkButton { .. })), 0);
}
