pub mod entry;
pub mod lookup;
pub mod source;
pub mod suggest;

pub use entry::{EntrySummary, MeaningSummary, Pronunciation};
pub use lookup::LookupCoordinator;
pub use source::{DatamuseClient, FreeDictionaryClient, SuggestionSource, WordSource};
pub use suggest::SuggestionStream;

#[cfg(test)]
mod tests;
