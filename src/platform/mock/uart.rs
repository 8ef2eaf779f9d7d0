//! Mock UART implementation for testing

use crate::platform::{
    traits::{UartConfig, UartInterface},
    Result,
};
use core::cell::RefCell;
use heapless::Vec;

/// Capture capacity per direction
///
/// Large enough to hold a full debug-mirrored game run; capture saturates
/// silently beyond this rather than failing the exercised code path.
const BUFFER_CAPACITY: usize = 8192;

/// Mock UART implementation
///
/// Provides in-memory buffers for transmit and receive data,
/// allowing unit tests to verify UART operations without hardware.
///
/// # Example
///
/// ```
/// use geobox::platform::mock::MockUart;
/// use geobox::platform::traits::UartInterface;
///
/// let mut uart = MockUart::new(Default::default());
///
/// // Write data
/// uart.write(b"Hello").unwrap();
/// assert_eq!(&uart.tx_buffer()[..], b"Hello");
///
/// // Inject received data for testing
/// uart.inject_rx_data(b"World");
/// let mut buf = [0u8; 5];
/// uart.read(&mut buf).unwrap();
/// assert_eq!(&buf, b"World");
/// ```
#[derive(Debug)]
pub struct MockUart {
    config: UartConfig,
    tx_buffer: RefCell<Vec<u8, BUFFER_CAPACITY>>,
    rx_buffer: RefCell<Vec<u8, BUFFER_CAPACITY>>,
}

impl MockUart {
    /// Create a new mock UART
    pub fn new(config: UartConfig) -> Self {
        Self {
            config,
            tx_buffer: RefCell::new(Vec::new()),
            rx_buffer: RefCell::new(Vec::new()),
        }
    }

    /// Get transmitted data (for test verification)
    pub fn tx_buffer(&self) -> Vec<u8, BUFFER_CAPACITY> {
        self.tx_buffer.borrow().clone()
    }

    /// Check whether the transmitted data contains the given byte sequence
    pub fn tx_contains(&self, needle: &[u8]) -> bool {
        let tx = self.tx_buffer.borrow();
        if needle.is_empty() {
            return true;
        }
        tx.windows(needle.len()).any(|w| w == needle)
    }

    /// Clear transmit buffer
    pub fn clear_tx_buffer(&mut self) {
        self.tx_buffer.borrow_mut().clear();
    }

    /// Inject receive data (for test setup)
    ///
    /// Panics if the injected data exceeds the mock's capture capacity, since
    /// silently dropping test input would make failures hard to diagnose.
    pub fn inject_rx_data(&mut self, data: &[u8]) {
        self.rx_buffer
            .borrow_mut()
            .extend_from_slice(data)
            .expect("mock rx buffer full");
    }

    /// Get current baud rate
    pub fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }
}

impl UartInterface for MockUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let mut tx = self.tx_buffer.borrow_mut();
        let free = BUFFER_CAPACITY - tx.len();
        let captured = data.len().min(free);
        // Saturating capture: report full success like a real TX shift register
        let _ = tx.extend_from_slice(&data[..captured]);
        Ok(data.len())
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let mut rx = self.rx_buffer.borrow_mut();
        let to_read = buffer.len().min(rx.len());

        buffer[..to_read].copy_from_slice(&rx[..to_read]);
        let remaining = rx.len() - to_read;
        rx.copy_within(to_read.., 0);
        rx.truncate(remaining);

        Ok(to_read)
    }

    fn available(&self) -> bool {
        !self.rx_buffer.borrow().is_empty()
    }

    fn flush(&mut self) -> Result<()> {
        // Mock implementation - nothing to flush
        Ok(())
    }
}
