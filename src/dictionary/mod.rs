// Dictionary module - compiled acronym dictionary, its lookups and persistence

mod builder;
mod index;
mod store;
mod types;

pub use builder::{DictionaryBuilder, SourceRow, DICTIONARY_VERSION};
pub use index::DictionaryIndex;
pub use store::DictionaryStore;
pub use types::{
    CompiledDictionary, ConflictCandidate, ConflictGroup, DictionaryEntry, DictionaryError,
    VariantIndex,
};
