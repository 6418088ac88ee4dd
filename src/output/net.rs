use std::net::TcpStream;

use tracing::debug;

use crate::error::Result;

/// Dials the ingestion server. `addr` is anything `TcpStream::connect`
/// resolves, typically `host:port`.
pub fn connect(addr: &str) -> Result<TcpStream> {
    let stream =
        TcpStream::connect(addr).map_err(|e| (format!("failed to connect to {}", addr), e))?;

    stream
        .set_nodelay(true)
        .map_err(|e| ("failed to set TCP_NODELAY", e))?;

    debug!(
        addr,
        peer = ?stream.peer_addr().ok(),
        "connected to ingestion server"
    );

    Ok(stream)
}
