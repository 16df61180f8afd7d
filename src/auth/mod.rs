pub mod claims;
pub mod jwt;
pub mod session;

pub use claims::SessionClaims;
pub use jwt::SessionTokenService;
pub use session::PresentedSession;
