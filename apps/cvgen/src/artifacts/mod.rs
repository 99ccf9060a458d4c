// Artifact filing: dated layout, the organizer, and directory listings.

pub mod layout;
pub mod organizer;
pub mod tree;

pub use organizer::organize;
