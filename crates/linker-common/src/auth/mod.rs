//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, TOKEN_LIFETIME_SECONDS};
pub use password::{hash_password, verify_password};
