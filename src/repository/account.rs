use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc, oid::ObjectId},
};
use tracing::info;

use super::{ACCOUNTS, parse_object_id};
use crate::{
    abstract_trait::account::AccountRepositoryTrait,
    domain::account::{AccountModel, AddAccountParams},
    errors::RepositoryError,
    models::account_models::AccountDocument,
};

#[derive(Clone)]
pub struct AccountRepository {
    collection: Collection<AccountDocument>,
}

impl AccountRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<AccountDocument>(ACCOUNTS),
        }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn add(&self, params: &AddAccountParams) -> Result<AccountModel, RepositoryError> {
        let account = AccountDocument {
            id: ObjectId::new(),
            name: params.name.clone(),
            email: params.email.clone(),
            password: params.hashed_password.clone(),
            verified: false,
            role: None,
            access_token: None,
            created_at: params.created_at,
        };

        self.collection
            .insert_one(&account)
            .await
            .map_err(|e| RepositoryError::from_write(e, &params.email))?;

        info!("Account {} stored", account.id.to_hex());

        Ok(account.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AccountModel>, RepositoryError> {
        let account = self.collection.find_one(doc! { "email": email }).await?;
        Ok(account.map(Into::into))
    }

    async fn find_by_token(
        &self,
        account_id: &str,
        token: &str,
    ) -> Result<Option<AccountModel>, RepositoryError> {
        let Ok(obj_id) = parse_object_id(account_id) else {
            return Ok(None);
        };

        let account = self
            .collection
            .find_one(doc! { "_id": obj_id, "accessToken": token })
            .await?;

        Ok(account.map(Into::into))
    }

    async fn update_access_token(
        &self,
        account_id: &str,
        token: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let obj_id = parse_object_id(account_id)?;
        let token = token.map_or(Bson::Null, |t| Bson::String(t.to_string()));

        self.collection
            .update_one(
                doc! { "_id": obj_id },
                doc! { "$set": { "accessToken": token } },
            )
            .await?;

        Ok(())
    }

    async fn mark_verified(&self, account_id: &str) -> Result<bool, RepositoryError> {
        let obj_id = parse_object_id(account_id)?;

        let result = self
            .collection
            .update_one(doc! { "_id": obj_id }, doc! { "$set": { "verified": true } })
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, account_id: &str) -> Result<(), RepositoryError> {
        let obj_id = parse_object_id(account_id)?;

        self.collection.delete_one(doc! { "_id": obj_id }).await?;

        info!("Account {} deleted", account_id);
        Ok(())
    }
}
