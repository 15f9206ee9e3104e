use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, IndexOptions},
    Client, Database, IndexModel,
};
use tracing::info;

use crate::{
    config::Config,
    errors::RepositoryError,
    models::{
        account_models::AccountDocument, survey_result_models::SurveyResultDocument,
        unverified_account_models::UnverifiedAccountDocument,
    },
    repository::{ACCOUNTS, SURVEY_RESULTS, UNVERIFIED_ACCOUNTS},
};

const UNVERIFIED_ACCOUNT_TTL: Duration = Duration::from_secs(600);

pub async fn init_db(config: &Config) -> Result<Database, RepositoryError> {
    let mut client_options = ClientOptions::parse(&config.mongo_uri).await?;

    client_options.app_name = Some("SurveyVoting".to_string());

    let client = Client::with_options(client_options)?;
    let database = client.database(&config.db_name);

    database.run_command(doc! { "ping": 1 }).await?;

    info!("Database connection successful: {}", config.db_name);

    Ok(database)
}

/// Creates the indexes the repositories rely on. Idempotent, run once at
/// start-up.
pub async fn ensure_indexes(db: &Database) -> Result<(), RepositoryError> {
    db.collection::<SurveyResultDocument>(SURVEY_RESULTS)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "surveyId": 1, "accountId": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await?;

    db.collection::<AccountDocument>(ACCOUNTS)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await?;

    db.collection::<UnverifiedAccountDocument>(UNVERIFIED_ACCOUNTS)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "createdAt": 1 })
                .options(
                    IndexOptions::builder()
                        .expire_after(UNVERIFIED_ACCOUNT_TTL)
                        .build(),
                )
                .build(),
        )
        .await?;

    info!("Database indexes ensured");
    Ok(())
}
