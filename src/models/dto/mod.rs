pub mod request;
pub mod response;
pub use request::HandoutQuery;
pub use response::ViewerProfile;
