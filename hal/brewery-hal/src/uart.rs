//! UART serial communication abstractions
//!
//! Provides the outbound side of the serial link. The controller only
//! ever transmits complete text messages, so the receive half and line
//! configuration live with the board support code.

/// UART transmitter
///
/// Blocking trait for sending data over a UART interface.
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Sink for complete, pre-formatted text messages
///
/// The sink owns the transport semantics. Callers hand over a finished
/// string and do not care how it is framed on the wire.
pub trait TextSink {
    /// Error type for send operations
    type Error;

    /// Transmit a complete message
    fn send_str(&mut self, text: &str) -> Result<(), Self::Error>;
}

// Every UART transmitter can carry text
impl<T: UartTx> TextSink for T {
    type Error = T::Error;

    fn send_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.write_blocking(text.as_bytes())?;
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CaptureTx {
        buf: [u8; 32],
        len: usize,
        flushes: usize,
    }

    impl UartTx for CaptureTx {
        type Error = ();

        fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            let end = self.len + data.len();
            if end > self.buf.len() {
                return Err(());
            }
            self.buf[self.len..end].copy_from_slice(data);
            self.len = end;
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_uart_text_sink_writes_and_flushes() {
        let mut tx = CaptureTx {
            buf: [0; 32],
            len: 0,
            flushes: 0,
        };

        tx.send_str("{\"ok\":1}").unwrap();

        assert_eq!(&tx.buf[..tx.len], b"{\"ok\":1}");
        assert_eq!(tx.flushes, 1);
    }

    #[test]
    fn test_uart_text_sink_propagates_error() {
        let mut tx = CaptureTx {
            buf: [0; 32],
            len: 0,
            flushes: 0,
        };

        let long = "0123456789012345678901234567890123456789";
        assert_eq!(tx.send_str(long), Err(()));
        assert_eq!(tx.flushes, 0);
    }
}
