//! GPS receiver acquisition (NMEA protocol)
//!
//! Wraps the receiver's UART byte stream behind [`PositionSource`]: bytes
//! are fed one at a time to an incremental NMEA parser, and the first
//! complete sentence carrying a valid coordinate becomes the fix for this
//! run. Sentence framing and checksum verification belong to the parser;
//! nothing partial ever leaves this module.
//!
//! # Example
//!
//! ```ignore
//! use geobox::devices::gps::GpsSource;
//! use geobox::game::PositionSource;
//! use geobox::platform::mock::{MockTimer, MockUart};
//!
//! let mut uart = MockUart::new(Default::default());
//! uart.inject_rx_data(b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n");
//!
//! let mut gps = GpsSource::new(uart, MockTimer::new());
//! let fix = gps.acquire(1_000).unwrap().expect("fix");
//! assert!((fix.latitude - 48.1173).abs() < 0.001);
//! ```

use crate::game::traits::{Fix, PositionSource};
use crate::platform::{Result, TimerInterface, UartInterface};
use nmea0183::{ParseResult, Parser};

/// How long to sleep when the receiver has nothing buffered
const POLL_INTERVAL_MS: u32 = 25;

/// UART read chunk size
const READ_CHUNK: usize = 64;

/// GPS position source
///
/// Generic over any `UartInterface` and `TimerInterface`, making it
/// platform-independent. The receiver keeps streaming whether or not
/// anyone listens; this driver only ever reads.
pub struct GpsSource<U: UartInterface, T: TimerInterface> {
    uart: U,
    timer: T,
    parser: Parser,
}

impl<U: UartInterface, T: TimerInterface> GpsSource<U, T> {
    /// Create a new GPS source over the given UART
    pub fn new(uart: U, timer: T) -> Self {
        Self {
            uart,
            timer,
            parser: Parser::new(),
        }
    }

    /// Get mutable reference to the UART (for test setup or
    /// vendor-specific initialization commands)
    pub fn uart_mut(&mut self) -> &mut U {
        &mut self.uart
    }

    /// Feed one byte to the sentence decoder
    ///
    /// Returns a fix when the byte completes a coordinate-bearing sentence
    /// (GGA or RMC); anything else — mid-sentence bytes, sentences without
    /// a position, checksum failures — returns `None`.
    fn feed(&mut self, byte: u8) -> Option<Fix> {
        match self.parser.parse_from_byte(byte) {
            Some(Ok(ParseResult::GGA(Some(gga)))) => Some(Fix {
                latitude: gga.latitude.as_f64() as f32,
                longitude: gga.longitude.as_f64() as f32,
                acquired_at_ms: self.timer.now_ms(),
            }),
            Some(Ok(ParseResult::RMC(Some(rmc)))) => Some(Fix {
                latitude: rmc.latitude.as_f64() as f32,
                longitude: rmc.longitude.as_f64() as f32,
                acquired_at_ms: self.timer.now_ms(),
            }),
            _ => None,
        }
    }
}

impl<U: UartInterface, T: TimerInterface> PositionSource for GpsSource<U, T> {
    fn acquire(&mut self, timeout_ms: u32) -> Result<Option<Fix>> {
        let deadline = self.timer.now_ms() + timeout_ms as u64;
        let mut buf = [0u8; READ_CHUNK];

        loop {
            let read = self.uart.read(&mut buf)?;
            for &byte in buf.iter().take(read) {
                if let Some(fix) = self.feed(byte) {
                    return Ok(Some(fix));
                }
            }

            if self.timer.now_ms() >= deadline {
                return Ok(None);
            }
            if read == 0 {
                self.timer.delay_ms(POLL_INTERVAL_MS)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockTimer, MockUart};
    use crate::platform::traits::UartConfig;

    const GGA: &[u8] = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
    const GNGGA: &[u8] = b"$GNGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*59\r\n";
    const RMC: &[u8] = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";

    fn source_with(data: &[u8]) -> GpsSource<MockUart, MockTimer> {
        let mut uart = MockUart::new(UartConfig::default());
        uart.inject_rx_data(data);
        GpsSource::new(uart, MockTimer::new())
    }

    #[test]
    fn test_gps_parse_gpgga() {
        let mut gps = source_with(GGA);
        let fix = gps.acquire(1_000).unwrap().expect("expected fix");
        assert!((fix.latitude - 48.1173).abs() < 0.001);
        assert!((fix.longitude - 11.516_666).abs() < 0.001);
    }

    #[test]
    fn test_gps_parse_gngga() {
        let mut gps = source_with(GNGGA);
        let fix = gps.acquire(1_000).unwrap().expect("expected fix");
        assert!((fix.latitude - 48.1173).abs() < 0.001);
    }

    #[test]
    fn test_gps_parse_gprmc() {
        let mut gps = source_with(RMC);
        let fix = gps.acquire(1_000).unwrap().expect("expected fix");
        assert!((fix.latitude - 48.1173).abs() < 0.001);
        assert!((fix.longitude - 11.516_666).abs() < 0.001);
    }

    #[test]
    fn test_gps_no_data_times_out() {
        let mut gps = source_with(b"");
        let result = gps.acquire(60_000).unwrap();
        assert!(result.is_none());
        // Failure is reported at or after the timeout elapses, never before
        assert!(gps.timer.now_ms() >= 60_000);
    }

    #[test]
    fn test_gps_invalid_data_times_out() {
        let mut gps = source_with(b"INVALID DATA\r\n");
        let result = gps.acquire(1_000).unwrap();
        assert!(result.is_none());
        assert!(gps.timer.now_ms() >= 1_000);
    }

    #[test]
    fn test_gps_zero_timeout_fails_fast() {
        let mut gps = source_with(b"");
        assert!(gps.acquire(0).unwrap().is_none());
    }

    #[test]
    fn test_gps_fix_before_timeout() {
        // A complete sentence already buffered completes without delays
        let mut gps = source_with(GGA);
        let fix = gps.acquire(60_000).unwrap().expect("expected fix");
        assert!(fix.acquired_at_ms < 1_000);
    }

    #[test]
    fn test_gps_garbage_then_valid_sentence() {
        let mut uart = MockUart::new(UartConfig::default());
        uart.inject_rx_data(b"\xFF\xFEnoise$GPXYZ,1*00\r\n");
        uart.inject_rx_data(GGA);
        let mut gps = GpsSource::new(uart, MockTimer::new());

        let fix = gps.acquire(1_000).unwrap().expect("expected fix");
        assert!((fix.latitude - 48.1173).abs() < 0.001);
    }

    #[test]
    fn test_gps_distance_from_fix() {
        let mut gps = source_with(GGA);
        let fix = gps.acquire(1_000).unwrap().expect("expected fix");
        // One degree of latitude north of the fix is ~111 km away
        let distance = fix.distance_to(49.1173, 11.516_666);
        assert!((distance - 111_000.0).abs() < 1_000.0);
        // The fix itself is at distance ~0
        assert!(fix.distance_to(fix.latitude, fix.longitude) < 1.0);
    }
}
