pub mod email;
pub mod error;
pub mod hashing;
pub mod session;
