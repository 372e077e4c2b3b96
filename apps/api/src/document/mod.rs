// Résumé document model: entity ids, the immutable document value, its
// mutation operations, and the store that holds the session's snapshot.

pub mod handlers;
pub mod ids;
pub mod models;
pub mod operations;
pub mod store;

pub use ids::EntityId;
pub use models::{
    BulletKind, Document, EducationEntry, EntryKind, ExperienceEntry, ProjectEntry,
};
pub use store::DocumentStore;
