pub mod sessions;

pub use sessions::{Initiated, SessionCoordinator};
