pub mod account_models;
pub mod survey_models;
pub mod survey_result_models;
pub mod unverified_account_models;
