pub mod authorize;
pub mod login;
pub mod logout;
pub mod signup;
