use crate::content::KaizenEvent;
use crate::hub::surface::{BannerKind, Surface};

/// Order events for presentation, most recently completed first. Date ties
/// fall back to the A3 id so the order stays stable.
pub fn by_most_recent(events: &[KaizenEvent]) -> Vec<&KaizenEvent> {
    let mut ordered: Vec<&KaizenEvent> = events.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
    ordered
}

pub fn render(surface: &mut dyn Surface, events: &[KaizenEvent]) {
    surface.subheader("Implementing Kaizen: A Chronicle of Realized Improvements");
    surface.markdown("Each event below is a testament to a team's dedication to making our work better. Review these A3 summaries to understand the 'Why' behind the change and to find inspiration for your own area.");

    if events.is_empty() {
        surface.banner(
            BannerKind::Warning,
            "⚠️",
            "No Kaizen events have been logged in the data model.",
        );
        return;
    }

    for event in by_most_recent(events) {
        surface.group(&mut |s| {
            s.columns(
                &mut |col| {
                    col.subheader(&event.title);
                    col.caption(&format!(
                        "A3 ID: {} | Site: {} | Completion Date: {}",
                        event.id,
                        event.site,
                        event.date.format("%Y-%m-%d")
                    ));
                },
                &mut |col| {
                    col.disabled_button(
                        "View Full A3 Report",
                        "Full PDF report not available in this demo.",
                    );
                },
            );

            s.strong("Problem Background:");
            s.blockquote(&event.problem_background);

            s.collapsible("View Detailed Analysis & Countermeasures", false, &mut |inner| {
                inner.markdown(&event.analysis_and_countermeasures);
                inner.caption("Detailed schematics, raw data, and financial models are redacted from this view and available in the full A3 report.");
            });

            s.strong("Quantified Results:");
            s.banner(BannerKind::Success, "💡", &event.quantified_results);

            s.strong("Key Insight / Lesson Learned:");
            s.banner(BannerKind::Info, "🔬", &event.key_insight);
        });
        surface.space();
    }
}
