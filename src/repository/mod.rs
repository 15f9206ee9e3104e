mod account;
mod survey;
mod survey_result;
mod unverified_account;

pub use self::account::AccountRepository;
pub use self::survey::SurveyRepository;
pub use self::survey_result::SurveyResultRepository;
pub use self::unverified_account::UnverifiedAccountRepository;

use crate::errors::RepositoryError;
use mongodb::bson::oid::ObjectId;

pub const ACCOUNTS: &str = "accounts";
pub const UNVERIFIED_ACCOUNTS: &str = "unverifiedAccounts";
pub const SURVEYS: &str = "surveys";
pub const SURVEY_RESULTS: &str = "surveyResults";

fn parse_object_id(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id).map_err(|_| RepositoryError::InvalidId(id.to_string()))
}
