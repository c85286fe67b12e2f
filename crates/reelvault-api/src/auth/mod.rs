//! Bearer-token authentication.

pub mod jwt;
pub mod middleware;
pub mod models;

pub use jwt::{issue_token, validate_token, Claims};
pub use middleware::{auth_middleware, AuthState};
pub use models::AuthContext;
