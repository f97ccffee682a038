pub mod glossary;
pub mod kaizen;
pub mod training;

pub use glossary::{glossary, GlossaryTerm};
pub use kaizen::{kaizen_events, KaizenEvent};
pub use training::{training_catalog, DeliveryFormat, TrainingMaterial};

use anyhow::Result;
use hashlink::LinkedHashMap;

/// Supplies the three record collections the hub renders.
///
/// The built-in [`StaticContent`] source never fails. The trait still returns
/// `Result` so hosts can plug in fallible backends later and the page keeps a
/// single place where load errors surface.
pub trait ContentSource {
    /// Completed Kaizen events, in no particular order.
    fn kaizen_events(&self) -> Result<Vec<KaizenEvent>>;
    /// Training materials in curriculum order.
    fn training_catalog(&self) -> Result<Vec<TrainingMaterial>>;
    /// Glossary categories with their terms, in presentation order.
    fn glossary(&self) -> Result<LinkedHashMap<String, Vec<GlossaryTerm>>>;
}

/// The compiled-in content tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticContent;

impl ContentSource for StaticContent {
    fn kaizen_events(&self) -> Result<Vec<KaizenEvent>> {
        Ok(kaizen::kaizen_events().to_vec())
    }

    fn training_catalog(&self) -> Result<Vec<TrainingMaterial>> {
        Ok(training::training_catalog().to_vec())
    }

    fn glossary(&self) -> Result<LinkedHashMap<String, Vec<GlossaryTerm>>> {
        Ok(glossary::glossary().clone())
    }
}
