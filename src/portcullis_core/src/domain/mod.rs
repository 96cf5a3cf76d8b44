pub mod email;
pub mod flash;
pub mod password;
pub mod password_digest;
pub mod session;
pub mod user;
