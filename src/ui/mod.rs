//! UI state holders

pub mod disclosure;

pub use disclosure::Disclosure;
