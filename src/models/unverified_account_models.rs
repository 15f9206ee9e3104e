use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime};
use serde::{Deserialize, Serialize};

use crate::domain::account::UnverifiedAccountModel;

/// Pending verification. `created_at` carries the TTL index, so the
/// server drops unconfirmed records on its own.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UnverifiedAccountDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub account_token: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl From<UnverifiedAccountDocument> for UnverifiedAccountModel {
    fn from(doc: UnverifiedAccountDocument) -> Self {
        Self {
            account_token: doc.account_token,
        }
    }
}
