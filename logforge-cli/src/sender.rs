//! Syslog message delivery over UDP and TCP.
//!
//! This is the transport boundary: the only suspend-capable operation in
//! the workspace. Every send runs under a fixed timeout and fails fast;
//! transport failures are reported as [`Error::Transport`], never as a
//! parse or format error.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpStream, UdpSocket};
use tokio::time::timeout;

use logforge_codec::{Error, Result};

/// Per-send timeout.
const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Transport protocol for message delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Udp,
    Tcp,
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "udp" => Ok(Self::Udp),
            "tcp" => Ok(Self::Tcp),
            other => Err(Error::Validation(format!(
                "Protocol must be 'udp' or 'tcp', got '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Udp => write!(f, "udp"),
            Self::Tcp => write!(f, "tcp"),
        }
    }
}

/// Deliver `message` to `host:port` over the given protocol.
pub async fn send(protocol: Protocol, message: &str, host: &str, port: u16) -> Result<()> {
    match protocol {
        Protocol::Udp => send_udp(message, host, port).await,
        Protocol::Tcp => send_tcp(message, host, port).await,
    }
}

/// Fire-and-forget datagram from an ephemeral local socket.
async fn send_udp(message: &str, host: &str, port: u16) -> Result<()> {
    let result = timeout(SEND_TIMEOUT, async {
        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        socket.send_to(message.as_bytes(), (host, port)).await?;
        Ok::<_, std::io::Error>(())
    })
    .await;

    match result {
        Ok(Ok(())) => {
            tracing::info!("UDP message sent to {}:{}", host, port);
            Ok(())
        }
        Ok(Err(e)) => Err(Error::Transport(format!("UDP send failed: {e}"))),
        Err(_) => Err(Error::Transport(format!(
            "UDP send to {host}:{port} timed out"
        ))),
    }
}

/// Connect, write the whole message, and shut the stream down.
async fn send_tcp(message: &str, host: &str, port: u16) -> Result<()> {
    let result = timeout(SEND_TIMEOUT, async {
        let mut stream = TcpStream::connect((host, port)).await?;
        stream.write_all(message.as_bytes()).await?;
        stream.shutdown().await?;
        Ok::<_, std::io::Error>(())
    })
    .await;

    match result {
        Ok(Ok(())) => {
            tracing::info!("TCP message sent to {}:{}", host, port);
            Ok(())
        }
        Ok(Err(e)) => Err(Error::Transport(format!("TCP send failed: {e}"))),
        Err(_) => Err(Error::Transport(format!(
            "TCP connection to {host}:{port} timed out"
        ))),
    }
}
