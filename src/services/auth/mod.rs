pub mod access;
pub mod access_jwt;

pub use access_jwt::AuthService;
