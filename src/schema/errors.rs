use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("invalid database port '{0}'")]
    InvalidPort(String),

    #[error("error connecting to the database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("error creating table {table}: {source}")]
    Statement {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
}
