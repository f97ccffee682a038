use crate::content::TrainingMaterial;
use crate::hub::surface::{BannerKind, Surface};

pub fn render(surface: &mut dyn Surface, materials: &[TrainingMaterial]) {
    surface.subheader("Empowering Excellence Through Education");
    surface.markdown("A commitment to quality begins with a commitment to learning. This curated library provides resources to develop skills at every level of the organization, from foundational principles to advanced statistical methods.");

    if materials.is_empty() {
        surface.banner(
            BannerKind::Warning,
            "⚠️",
            "No training materials are available in the data model.",
        );
        return;
    }

    for material in materials {
        surface.card(&material.icon, &mut |card| {
            card.subheader(&material.title);
            card.caption(&format!(
                "Type: {} | Est. Duration: {:.1} hrs | Primary Audience: {}",
                material.format, material.duration_hours, material.audience
            ));
            card.label(&material.description);
            card.strong("Learning Objectives:");
            card.bullet_list(&material.objectives);
            card.markdown(&format!(
                "**Recommended Reading:** *{}*",
                material.recommended_reading
            ));
            card.link_button("Launch Module", &material.link);
        });
        surface.space();
    }
}
