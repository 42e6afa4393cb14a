//! UDP transport to the command station
//!
//! Fire-and-forget: each frame is one datagram sent from an ephemeral
//! local port. Replies are not read.

use super::Transport;
use crate::action::Frame;
use crate::constants::SEND_TIMEOUT_MS;
use crate::error::{Result, Z21Error};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// UDP transport for a single command station
///
/// # Example
///
/// ```ignore
/// let transport = UdpTransport::new("192.168.0.111", 21105);
/// transport.send(&TrackPowerOn.encode()?)?;
/// ```
pub struct UdpTransport {
    host: String,
    port: u16,
}

impl UdpTransport {
    /// Create a transport targeting `host:port`
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn send_async(&self, frame: &Frame) -> Result<usize> {
        let addr = self.resolve().await?;
        let socket = create_udp_socket(&addr)?;
        let map_err = |e| Z21Error::UdpSend { addr, source: e };

        let sent = tokio::time::timeout(
            Duration::from_millis(SEND_TIMEOUT_MS),
            socket.send_to(frame.as_bytes(), addr),
        )
        .await
        .map_err(|_| map_err(std::io::ErrorKind::TimedOut.into()))?
        .map_err(map_err)?;

        debug!("Sent {} bytes to {}: {}", sent, addr, frame);
        Ok(sent)
    }

    async fn resolve(&self) -> Result<SocketAddr> {
        let invalid = |reason: String| Z21Error::ConfigValidation {
            field: "station.host",
            reason,
        };

        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|e| invalid(format!("cannot resolve '{}': {}", self.host, e)))?
            .next()
            .ok_or_else(|| invalid(format!("no address for '{}'", self.host)))
    }
}

impl Transport for UdpTransport {
    fn send(&self, frame: &Frame) -> Result<usize> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_io()
            .enable_time()
            .build()
            .map_err(|e| Z21Error::Runtime { source: e })?;
        rt.block_on(self.send_async(frame))
    }
}

/// Create a non-blocking UDP socket on an ephemeral port matching the target family
fn create_udp_socket(target: &SocketAddr) -> Result<UdpSocket> {
    let map_err = |e| Z21Error::UdpBind { source: e };

    let (domain, local) = match target {
        SocketAddr::V4(_) => (Domain::IPV4, IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
        SocketAddr::V6(_) => (Domain::IPV6, IpAddr::V6(Ipv6Addr::UNSPECIFIED)),
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP)).map_err(map_err)?;
    socket.set_nonblocking(true).map_err(map_err)?;
    socket
        .bind(&SocketAddr::new(local, 0).into())
        .map_err(map_err)?;

    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket).map_err(map_err)
}
