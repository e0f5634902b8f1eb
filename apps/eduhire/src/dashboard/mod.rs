// Dashboard views: the profile completion score and the summary card.

pub mod completeness;
pub mod summary;
