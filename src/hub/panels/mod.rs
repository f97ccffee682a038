pub mod event_log;
pub mod glossary;
pub mod training_library;
