//! Organization pipeline stages

pub mod cluster;
pub mod naming;
pub mod organize;
pub mod suggest;
pub mod tags;

pub use organize::Organizer;
