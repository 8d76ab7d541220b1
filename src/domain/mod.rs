pub mod idea;
pub mod related;
pub mod slug;
pub mod stats;
pub mod types;
