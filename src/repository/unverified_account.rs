use async_trait::async_trait;
use chrono::Utc;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
};

use super::UNVERIFIED_ACCOUNTS;
use crate::{
    abstract_trait::account::UnverifiedAccountRepositoryTrait,
    domain::account::UnverifiedAccountModel, errors::RepositoryError,
    models::unverified_account_models::UnverifiedAccountDocument,
};

#[derive(Clone)]
pub struct UnverifiedAccountRepository {
    collection: Collection<UnverifiedAccountDocument>,
}

impl UnverifiedAccountRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<UnverifiedAccountDocument>(UNVERIFIED_ACCOUNTS),
        }
    }
}

#[async_trait]
impl UnverifiedAccountRepositoryTrait for UnverifiedAccountRepository {
    async fn add(&self, account_token: &str) -> Result<UnverifiedAccountModel, RepositoryError> {
        let record = UnverifiedAccountDocument {
            id: ObjectId::new(),
            account_token: account_token.to_string(),
            created_at: Utc::now(),
        };

        self.collection.insert_one(&record).await?;

        Ok(record.into())
    }

    async fn find_by_account_token(
        &self,
        account_token: &str,
    ) -> Result<Option<UnverifiedAccountModel>, RepositoryError> {
        let record = self
            .collection
            .find_one(doc! { "accountToken": account_token })
            .await?;

        Ok(record.map(Into::into))
    }

    async fn delete_by_account_token(&self, account_token: &str) -> Result<(), RepositoryError> {
        self.collection
            .delete_one(doc! { "accountToken": account_token })
            .await?;
        Ok(())
    }
}
