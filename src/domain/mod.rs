pub mod account;
pub mod survey;
pub mod survey_result;
