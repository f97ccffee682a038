use hashlink::LinkedHashMap;
use kaizen_hub::content::glossary;
use kaizen_hub::hub::panels::glossary as glossary_panel;
use kaizen_hub::hub::BannerKind;

use mock_surface::{RecordingSurface, SurfaceCall};

#[test]
fn categories_render_in_order_with_only_the_first_open() {
    let mut surface = RecordingSurface::new();
    glossary_panel::render(&mut surface, glossary());

    assert_eq!(
        surface.collapsibles(),
        [
            ("Lean Principles", true),
            ("Six Sigma Concepts", false),
            ("Statistical & Analytical Methods", false),
            ("AI/ML for Operations", false),
        ]
    );
}

#[test]
fn terms_show_as_bold_name_and_quoted_definition() {
    let mut surface = RecordingSurface::new();
    glossary_panel::render(&mut surface, glossary());

    let term_count: usize = glossary().values().map(|terms| terms.len()).sum();
    assert_eq!(
        surface.count(|c| matches!(c, SurfaceCall::Strong(_))),
        term_count
    );
    assert_eq!(
        surface.count(|c| matches!(c, SurfaceCall::Blockquote(_))),
        term_count
    );
}

#[test]
fn formula_blocks_appear_only_for_terms_that_carry_one() {
    let mut surface = RecordingSurface::new();
    glossary_panel::render(&mut surface, glossary());

    let formulas = surface.formulas();
    assert_eq!(formulas.len(), 6);
    assert!(formulas.contains(&"Cp = (USL - LSL) / 6σ"));
    assert!(formulas.contains(&"UCL/LCL = μ ± 3σ"));
}

#[test]
fn formula_follows_its_own_term() {
    let mut surface = RecordingSurface::new();
    glossary_panel::render(&mut surface, glossary());

    let sequence: Vec<&SurfaceCall> = surface
        .calls
        .iter()
        .filter(|c| matches!(c, SurfaceCall::Strong(_) | SurfaceCall::Formula(_)))
        .collect();
    let takt = sequence
        .iter()
        .position(|c| matches!(c, SurfaceCall::Strong(text) if text == "Takt Time"))
        .expect("Takt Time not rendered");
    assert!(
        matches!(sequence[takt + 1], SurfaceCall::Formula(f) if f.starts_with("Takt Time =")),
        "Takt Time is not followed by its formula"
    );
}

#[test]
fn empty_glossary_shows_warning_and_no_sections() {
    let mut surface = RecordingSurface::new();
    glossary_panel::render(&mut surface, &LinkedHashMap::new());

    assert_eq!(
        surface.banner_texts(BannerKind::Warning),
        ["No glossary categories are available in the data model."]
    );
    assert!(surface.collapsibles().is_empty());
}
