mod authorization;
mod helpers;
mod login;
mod logout;
mod signup;
