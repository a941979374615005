use crate::config::GLOBAL_CONFIG;
use crate::error::{Result, TestUtilError};
use log::debug;
use std::net::TcpListener;

/// Finds a TCP port that is currently free and returns it as text.
///
/// The listener is released before returning, so another process can still
/// claim the port before the caller binds it.
pub fn free_port() -> Result<String> {
    free_port_number().map(|port| port.to_string())
}

/// Numeric form of [`free_port`].
pub fn free_port_number() -> Result<u16> {
    let host = GLOBAL_CONFIG.get_bind_host();
    probe_port(&host)
}

fn probe_port(host: &str) -> Result<u16> {
    let listener = TcpListener::bind((host, 0))
        .map_err(|e| TestUtilError::Network(format!("Failed to bind {host}:0: {e}")))?;
    let port = listener
        .local_addr()
        .map_err(|e| TestUtilError::Network(format!("Failed to read local address: {e}")))?
        .port();
    drop(listener);

    debug!("Probed free port {port} on {host}");
    Ok(port)
}
