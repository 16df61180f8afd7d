pub mod access_repository;
pub mod pipelines;
pub mod user_repository;

pub use access_repository::{AccessRepository, MongoAccessRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
