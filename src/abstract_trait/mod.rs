pub mod account;
pub mod email;
pub mod hashing;
pub mod survey;
pub mod survey_result;
pub mod token;
