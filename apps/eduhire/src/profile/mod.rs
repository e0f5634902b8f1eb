// Profile repository: reads and whole-section writes of a user's profile
// document, plus pure old-document -> new-document transforms used by the
// editing forms before they persist.

pub mod entries;
pub mod ids;
pub mod repository;

pub use ids::EntryIdGenerator;
pub use repository::{ProfilePatch, ProfileRepository};
