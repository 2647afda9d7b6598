//! Connection provider handing out one database handle per repository call.
//!
//! Every service follows the same acquire → use → release sequence regardless of mode:
//!
//! - **Per-request**: `acquire` opens a fresh single-connection handle from the
//!   descriptor and `release` closes it.
//! - **Pooled**: a pool is opened once at startup, `acquire` borrows a handle from it and
//!   `release` only returns it.
//!
//! Tests use `ConnectionProvider::shared` to hand out an existing in-memory database.

use std::{ops::Deref, time::Duration};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::error::connection::ConnectionError;

/// Where and how to open database connections.
#[derive(Debug, Clone)]
pub struct ConnectionDescriptor {
    /// Database URL in any form SeaORM's sqlx drivers accept (`sqlite:`, `postgres:`, `mysql:`).
    pub url: String,
    pub connect_timeout: Duration,
}

impl ConnectionDescriptor {
    fn connect_options(&self, max_connections: u32) -> ConnectOptions {
        let mut opt = ConnectOptions::new(&self.url);
        opt.max_connections(max_connections)
            .min_connections(0)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.connect_timeout)
            .sqlx_logging(false);
        opt
    }
}

#[derive(Clone)]
pub enum ConnectionProvider {
    /// Opens and closes a dedicated connection for every `acquire`.
    PerRequest(ConnectionDescriptor),
    /// Hands out clones of a long-lived handle (a pool or a test database).
    Shared(DatabaseConnection),
}

impl ConnectionProvider {
    pub fn per_request(descriptor: ConnectionDescriptor) -> Self {
        Self::PerRequest(descriptor)
    }

    /// Opens a pool of `size` connections that all requests draw from.
    ///
    /// The pool connects lazily: connections are established on first use, so an
    /// unreachable database surfaces per request rather than here.
    ///
    /// # Returns
    /// - `Ok(ConnectionProvider::Shared)` - Pool created
    /// - `Err(ConnectionError::Connect)` - The URL or options were rejected by the driver
    pub async fn pooled(
        descriptor: &ConnectionDescriptor,
        size: u32,
    ) -> Result<Self, ConnectionError> {
        let mut opt = descriptor.connect_options(size);
        opt.connect_lazy(true);

        let db = Database::connect(opt)
            .await
            .map_err(ConnectionError::Connect)?;

        Ok(Self::Shared(db))
    }

    /// Wraps an already open database handle.
    pub fn shared(db: DatabaseConnection) -> Self {
        Self::Shared(db)
    }

    /// Obtains a database handle for one repository call.
    ///
    /// The returned `Connection` must be passed to `Connection::release` once the
    /// statement has run, on success and failure alike.
    ///
    /// # Returns
    /// - `Ok(Connection)` - Usable handle
    /// - `Err(ConnectionError::Connect)` - Connection could not be opened
    pub async fn acquire(&self) -> Result<Connection, ConnectionError> {
        match self {
            Self::PerRequest(descriptor) => {
                let db = Database::connect(descriptor.connect_options(1))
                    .await
                    .map_err(ConnectionError::Connect)?;
                tracing::trace!("Opened per-request database connection");

                Ok(Connection { db, owned: true })
            }
            Self::Shared(db) => Ok(Connection {
                db: db.clone(),
                owned: false,
            }),
        }
    }
}

/// A database handle scoped to a single repository call.
pub struct Connection {
    db: DatabaseConnection,
    /// Whether this handle was opened for this call alone and must be closed.
    owned: bool,
}

impl Connection {
    /// Releases the handle, closing it if it was opened per request.
    ///
    /// Close failures are logged and otherwise ignored; the statement's own result has
    /// already been captured by the caller.
    pub async fn release(self) {
        if !self.owned {
            return;
        }

        match self.db.close().await {
            Ok(()) => tracing::trace!("Closed per-request database connection"),
            Err(e) => tracing::warn!("Failed to close database connection: {}", e),
        }
    }
}

impl Deref for Connection {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}
