pub mod login;
pub mod logout;
pub mod models;
pub mod signup;
pub mod verify_account;
