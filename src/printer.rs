//! ESC/POS receipt printer driver.
//!
//! The print pass only needs a tiny capability surface (start a ticket,
//! write a centered line, cut), so that surface is a trait and the real
//! network driver is one implementation of it. Tests substitute recording
//! stubs instead of a physical device.

use anyhow::{Context, Result};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

/// Text weight of a ticket line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Regular 1x1 text, no bold.
    Normal,
    /// Bold, doubled in both directions.
    Medium,
    /// Bold, six times character size, for the assignee name.
    Large,
}

#[async_trait::async_trait]
pub trait TicketSink: Send {
    /// Reset printer state at the start of a ticket.
    async fn begin_ticket(&mut self) -> Result<()>;
    async fn write_centered(&mut self, text: &str, emphasis: Emphasis) -> Result<()>;
    /// Feed and cut the paper, finishing the current ticket.
    async fn cut(&mut self) -> Result<()>;
}

// ESC @ (initialize) and ESC a 1 (center justification).
const INIT: &[u8] = b"\x1b@";
const ALIGN_CENTER: &[u8] = b"\x1ba\x01";
// Feed clear of the cutter, then GS V 0 (full cut).
const FEED_AND_CUT: &[u8] = b"\n\n\n\n\n\n\x1dV\x00";

/// ESC E n (bold) followed by GS ! n (character size) for an emphasis level.
pub fn style_bytes(emphasis: Emphasis) -> [u8; 6] {
    let (bold, size) = match emphasis {
        Emphasis::Normal => (0x00, 0x00),
        // GS ! packs (width-1) in the high nibble, (height-1) in the low.
        Emphasis::Medium => (0x01, 0x11),
        Emphasis::Large => (0x01, 0x55),
    };
    [0x1b, b'E', bold, 0x1d, b'!', size]
}

/// ESC/POS printer over any async byte sink, `TcpStream` in production.
pub struct EscposPrinter<W> {
    stream: W,
}

impl EscposPrinter<TcpStream> {
    /// Connect to a network printer, e.g. `192.168.188.60:9100`.
    pub async fn connect(addr: &str) -> Result<Self> {
        let stream = TcpStream::connect(addr)
            .await
            .with_context(|| format!("Failed to connect to printer at {addr}"))?;
        Ok(Self::new(stream))
    }
}

impl<W: AsyncWrite + Unpin + Send> EscposPrinter<W> {
    pub fn new(stream: W) -> Self {
        Self { stream }
    }
}

#[async_trait::async_trait]
impl<W: AsyncWrite + Unpin + Send> TicketSink for EscposPrinter<W> {
    async fn begin_ticket(&mut self) -> Result<()> {
        self.stream.write_all(INIT).await?;
        Ok(())
    }

    async fn write_centered(&mut self, text: &str, emphasis: Emphasis) -> Result<()> {
        self.stream.write_all(ALIGN_CENTER).await?;
        self.stream.write_all(&style_bytes(emphasis)).await?;
        self.stream.write_all(text.as_bytes()).await?;
        self.stream.write_all(b"\n").await?;
        Ok(())
    }

    async fn cut(&mut self) -> Result<()> {
        self.stream.write_all(FEED_AND_CUT).await?;
        self.stream.flush().await?;
        Ok(())
    }
}
