use crate::content::GlossaryTerm;
use crate::hub::surface::{BannerKind, Surface};
use hashlink::LinkedHashMap;

pub fn render(surface: &mut dyn Surface, glossary: &LinkedHashMap<String, Vec<GlossaryTerm>>) {
    surface.subheader("The Common Language of Continuous Improvement");
    surface.markdown("Use this dictionary to understand the key terms, concepts, and methodologies that form the foundation of our operational excellence program. A shared vocabulary is essential for effective collaboration and problem-solving.");

    if glossary.is_empty() {
        surface.banner(
            BannerKind::Warning,
            "⚠️",
            "No glossary categories are available in the data model.",
        );
        return;
    }

    // The first category doubles as the landing section and starts open.
    for (index, (category, terms)) in glossary.iter().enumerate() {
        surface.collapsible(category, index == 0, &mut |section| {
            for term in terms {
                section.strong(&term.term);
                section.blockquote(&term.definition);
                if let Some(formula) = &term.formula {
                    section.formula(formula);
                }
                section.space();
            }
        });
    }
}
