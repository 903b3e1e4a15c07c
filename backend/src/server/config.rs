//! HTTP server configuration object.

use std::net::SocketAddr;

use crate::outbound::persistence::DbPool;

/// Everything the server needs beyond its handlers.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration listening on `bind_addr` and backed
    /// by `db_pool`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
