pub mod account_service;
pub mod survey_result_service;
pub mod survey_service;

pub use self::account_service::{AccountService, AccountServiceDeps};
pub use self::survey_result_service::SurveyResultService;
pub use self::survey_service::SurveyService;
