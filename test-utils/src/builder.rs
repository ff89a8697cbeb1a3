use entity::prelude::*;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Flight, FlightLeg};
///
/// let test = TestBuilder::new()
///     .with_table(Flight)
///     .with_table(FlightLeg)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in the order they were added.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements for the added tables, executed after all tables.
    indexes: Vec<IndexCreateStatement>,
    /// Raw SQL for schema objects the entity derive cannot express, executed last.
    statements: Vec<&'static str>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Adds an entity table and its indexes to the test database schema.
    ///
    /// Tables with foreign keys should be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.indexes.extend(schema.create_index_from_entity(entity));
        self
    }

    /// Adds a raw SQL statement executed after every table and index.
    ///
    /// # Arguments
    /// - `sql` - Statement to execute, such as a partial index
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_statement(mut self, sql: &'static str) -> Self {
        self.statements.push(sql);
        self
    }

    /// Adds the flight and flight leg tables, including the partial unique index on
    /// active flight numbers.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_flight_tables(self) -> Self {
        self.with_table(Flight)
            .with_table(FlightLeg)
            .with_statement(entity::flight::ACTIVE_FLIGHT_NUMBER_INDEX)
    }

    /// Adds the airline, aircraft and station tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_reference_tables(self) -> Self {
        self.with_table(Airline)
            .with_table(Aircraft)
            .with_table(Station)
    }

    /// Adds every table: reference data, schedules, flights, legs and the event archive.
    ///
    /// Use this for service tests, where writes also archive events.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_reference_tables()
            .with_table(FlightSchedule)
            .with_flight_tables()
            .with_table(EventLog)
    }

    /// Builds and initializes the test context with the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup
            .with_schema(self.tables, self.indexes, self.statements)
            .await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
