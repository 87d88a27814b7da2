use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables or raw statements, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Student, Diary};
///
/// let test = TestBuilder::new()
///     .with_table(Student)
///     .with_table(Diary)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity models, executed in insertion order.
    tables: Vec<TableCreateStatement>,

    /// Raw SQL statements executed after the entity tables are created.
    ///
    /// Used for tables that have no entity model, such as the per-office school
    /// directory tables.
    statements: Vec<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a raw SQL statement executed once all entity tables exist.
    ///
    /// # Arguments
    /// - `sql` - Statement in SQLite dialect
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_statement(mut self, sql: impl Into<String>) -> Self {
        self.statements.push(sql.into());
        self
    }

    /// Adds a school directory table for `office` holding the given schools.
    ///
    /// The table is named after the lower-cased office code and uses the same Korean
    /// column names as the production directory tables.
    ///
    /// # Arguments
    /// - `office` - Office code, e.g. `"B10"`
    /// - `schools` - `(school name, administrative code)` pairs in insertion order
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_school_directory(mut self, office: &str, schools: &[(&str, &str)]) -> Self {
        let table = office.to_lowercase();
        self.statements.push(format!(
            "CREATE TABLE \"{table}\" (\"학교명\" TEXT NOT NULL, \"행정표준코드\" TEXT NOT NULL)"
        ));
        for (name, code) in schools {
            self.statements.push(format!(
                "INSERT INTO \"{table}\" (\"학교명\", \"행정표준코드\") VALUES ('{name}', '{code}')"
            ));
        }
        self
    }

    /// Adds every table owned by the student record store.
    ///
    /// This convenience method adds, in order:
    /// - Student
    /// - PersonalSchedule
    /// - Diary
    /// - ClassImage
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_record_tables(self) -> Self {
        self.with_table(Student)
            .with_table(PersonalSchedule)
            .with_table(Diary)
            .with_table(ClassImage)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements followed by the raw statements, in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_statements(self.statements).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
