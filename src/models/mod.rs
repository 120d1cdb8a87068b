//! Data models
//!
//! Plain data records mirrored from the backend service. This layer does not
//! persist any of them; shapes follow the backend's JSON representations.

pub mod article;
pub mod session;
pub mod supplier;
pub mod tour;

pub use article::ArticleSummary;
pub use session::{Session, SessionUser};
pub use supplier::{Supplier, SupplierStatus};
pub use tour::{TourId, TourSearchResult, TourSummary};
