pub mod access_resolver;
pub mod viewer_service;

pub use access_resolver::{AccessPolicy, AccessResolver};
pub use viewer_service::ViewerService;
