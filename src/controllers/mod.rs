pub mod account_controllers;
pub mod health;
pub mod survey_controllers;
