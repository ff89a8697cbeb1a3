use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Schema};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::AppError,
    event::{
        ArchiveEventPublisher, EventPublisher, FanoutEventPublisher, LogEventPublisher,
        WebhookEventPublisher,
    },
};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Connects to the database and creates any missing tables and indexes.
///
/// Tables are created from the entity definitions in dependency order, skipping any
/// that already exist.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with the schema in place
/// - `Err(AppError::DbErr)` - Failed to connect or to create the schema
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    create_schema(&db).await?;

    Ok(db)
}

/// Creates the tables and their indexes if they do not exist yet.
///
/// Besides the derived indexes, the flight table gets a partial unique index so
/// that only one active flight can hold a flight number.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), AppError> {
    create_table(db, entity::prelude::Airline).await?;
    create_table(db, entity::prelude::Aircraft).await?;
    create_table(db, entity::prelude::Station).await?;
    create_table(db, entity::prelude::FlightSchedule).await?;
    create_table(db, entity::prelude::Flight).await?;
    db.execute_unprepared(entity::flight::ACTIVE_FLIGHT_NUMBER_INDEX)
        .await?;
    create_table(db, entity::prelude::FlightLeg).await?;
    create_table(db, entity::prelude::EventLog).await?;

    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), AppError> {
    let schema = Schema::new(db.get_database_backend());

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(&table).await?;

    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        db.execute(&index).await?;
    }

    Ok(())
}

/// Builds the event sink from configuration.
///
/// Events are always logged and archived. A webhook sink is added when
/// `EVENT_WEBHOOK_URL` is set.
pub fn build_event_publisher(config: &Config, db: &DatabaseConnection) -> Arc<dyn EventPublisher> {
    let mut publisher = FanoutEventPublisher::new(vec![
        Arc::new(LogEventPublisher),
        Arc::new(ArchiveEventPublisher::new(db.clone())),
    ]);

    if let Some(url) = &config.event_webhook_url {
        info!("Publishing events to webhook {}", url);
        publisher.push(Arc::new(WebhookEventPublisher::new(
            reqwest::Client::new(),
            url.clone(),
        )));
    }

    Arc::new(publisher)
}
