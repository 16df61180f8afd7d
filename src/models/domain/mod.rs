pub mod access;
pub mod class_batch;
pub mod enrollment;
pub mod handout;
pub mod identity;
pub mod role;
pub mod user;
pub use access::{AccessDecision, AccessOutcome, ClassReference};
pub use class_batch::{ClassBatch, Course};
pub use enrollment::{Enrollment, EnrollmentStatus};
pub use handout::{Handout, HandoutSection};
pub use identity::SessionIdentity;
pub use role::Role;
pub use user::User;
