//! Schema provisioning against PostgreSQL.
//!
//! A single best-effort pass: open one connection, run the fixed DDL list
//! in order, close the connection. Statements execute outside an explicit
//! transaction, so each one commits as it runs; a failure part-way leaves
//! the earlier tables in place and skips the rest.

pub mod ddl;
pub mod errors;

pub use ddl::{TABLES, TableDdl};
pub use errors::ProvisionError;

use crate::config::Config;
use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use tracing::{debug, warn};

/// Open a single connection from the loaded parameters.
///
/// The port string is parsed here; a malformed port is reported without a
/// network attempt. Any failure means "no further action possible" for the
/// caller, never a panic.
pub async fn connect(config: &Config) -> Result<PgConnection, ProvisionError> {
    let port: u16 = config
        .port()
        .parse()
        .map_err(|_| ProvisionError::InvalidPort(config.port().to_string()))?;

    let options = PgConnectOptions::new()
        .host(config.host())
        .port(port)
        .username(config.user())
        .password(config.password())
        .database(config.database());

    PgConnection::connect_with(&options)
        .await
        .map_err(ProvisionError::Connect)
}

/// Execute the given DDL statements in order, stopping at the first
/// failure. Already executed statements stay committed.
pub async fn run_ddl(
    conn: &mut PgConnection,
    tables: &[TableDdl],
) -> Result<(), ProvisionError> {
    for table in tables {
        sqlx::query(table.sql)
            .execute(&mut *conn)
            .await
            .map_err(|source| ProvisionError::Statement {
                table: table.name,
                source,
            })?;
        debug!(table = table.name, "table ensured");
    }
    Ok(())
}

/// Ensure all five application tables exist. Idempotent across runs.
pub async fn create_tables(conn: &mut PgConnection) -> Result<(), ProvisionError> {
    run_ddl(conn, TABLES).await
}

/// One provisioning pass: connect, create the tables, close.
///
/// The connection is closed before returning on success and failure paths
/// alike; a close failure is logged and never masks the DDL result.
pub async fn provision(config: &Config) -> Result<(), ProvisionError> {
    let mut conn = connect(config).await?;
    let result = create_tables(&mut conn).await;
    if let Err(err) = conn.close().await {
        warn!(error = %err, "failed to close database connection");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn connect_rejects_malformed_port() {
        let config = Config::new("test", "test", "test", "localhost", "not-a-port");
        let err = connect(&config)
            .await
            .err()
            .expect("malformed port must not connect");
        assert!(matches!(err, ProvisionError::InvalidPort(port) if port == "not-a-port"));
    }

    #[tokio::test]
    async fn connect_rejects_empty_port() {
        let config = Config::new("", "", "", "", "");
        assert!(matches!(
            connect(&config).await,
            Err(ProvisionError::InvalidPort(_))
        ));
    }
}
