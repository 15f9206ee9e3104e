pub mod add_survey;
pub mod load_survey_result;
pub mod load_surveys;
pub mod models;
pub mod save_survey_result;
