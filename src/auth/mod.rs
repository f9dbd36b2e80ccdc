pub mod identity;
pub mod jwt;
pub mod password;

pub use identity::{Identity, Principal};
pub use jwt::{Claims, JwtError, JwtIssuer};
pub use password::{hash_password, verify_password};
