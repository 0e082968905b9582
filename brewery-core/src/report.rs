//! Calibrated readings report
//!
//! Formats both probe results as a single JSON object and hands it to a
//! text sink:
//!
//! ```text
//! {"red":{"value":"65.000000","code":"0"},"blue":{"value":"20.625000","code":"0"}}
//! ```
//!
//! Values are the stored calibration offset added to the raw temperature,
//! printed with six decimal places. Both values and codes are strings on
//! the wire.

use core::fmt::Write;

use brewery_hal::{NvStore, TextSink};
use heapless::String;

use crate::eeprom::Settings;
use crate::logging::log_warn;
use crate::readings::{ReadingsSource, RtdReadings};

/// Report buffer size
pub const REPORT_CAPACITY: usize = 150;

/// A formatted report
pub type Report = String<REPORT_CAPACITY>;

/// Errors from building or sending a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportError<SE, TE> {
    /// Formatted report does not fit in [`REPORT_CAPACITY`]
    Overflow,
    /// Reading the calibration offsets failed
    Store(SE),
    /// The text sink rejected the report
    Sink(TE),
}

/// Format readings with the given calibration offsets applied
pub fn format_report(
    readings: &RtdReadings,
    red_cal: f32,
    blue_cal: f32,
) -> Result<Report, core::fmt::Error> {
    let red = readings.red();
    let blue = readings.blue();

    let mut report = Report::new();
    write!(
        report,
        "{{\"red\":{{\"value\":\"{:.6}\",\"code\":\"{}\"}},\"blue\":{{\"value\":\"{:.6}\",\"code\":\"{}\"}}}}",
        red.calibrated(red_cal),
        red.fault_code,
        blue.calibrated(blue_cal),
        blue.fault_code,
    )?;

    Ok(report)
}

/// Read the latest results, apply stored calibration and transmit
pub fn send_report<S, R, T>(
    settings: &mut Settings<S>,
    source: &mut R,
    sink: &mut T,
) -> Result<(), ReportError<S::Error, T::Error>>
where
    S: NvStore,
    R: ReadingsSource,
    T: TextSink,
{
    let red_cal = settings.red_cal().map_err(ReportError::Store)?;
    let blue_cal = settings.blue_cal().map_err(ReportError::Store)?;

    let readings = source.readings();
    let report = format_report(&readings, red_cal, blue_cal).map_err(|_| {
        log_warn!("Readings report exceeds {} bytes", REPORT_CAPACITY);
        ReportError::Overflow
    })?;

    sink.send_str(&report).map_err(ReportError::Sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::RtdResult;
    use brewery_hal::mock::{MockEeprom, MockError};

    struct FixedSource(RtdReadings);

    impl ReadingsSource for FixedSource {
        fn readings(&mut self) -> RtdReadings {
            self.0
        }
    }

    #[derive(Default)]
    struct CaptureSink {
        last: Report,
        sent: usize,
    }

    impl TextSink for CaptureSink {
        type Error = ();

        fn send_str(&mut self, text: &str) -> Result<(), Self::Error> {
            self.last.clear();
            self.last.push_str(text)?;
            self.sent += 1;
            Ok(())
        }
    }

    struct RejectingSink;

    impl TextSink for RejectingSink {
        type Error = u8;

        fn send_str(&mut self, _text: &str) -> Result<(), Self::Error> {
            Err(7)
        }
    }

    fn sample() -> RtdReadings {
        RtdReadings {
            rtd1: RtdResult::new(4, 20.125),
            rtd2: RtdResult::new(0, 65.25),
        }
    }

    #[test]
    fn test_format_report_layout() {
        let report = format_report(&sample(), -0.25, 0.5).unwrap();
        assert_eq!(
            report.as_str(),
            r#"{"red":{"value":"65.000000","code":"0"},"blue":{"value":"20.625000","code":"4"}}"#
        );
    }

    #[test]
    fn test_format_report_negative_temperature() {
        let readings = RtdReadings {
            rtd1: RtdResult::new(0, -5.5),
            rtd2: RtdResult::new(255, 0.0),
        };

        let report = format_report(&readings, 0.0, 0.0).unwrap();
        assert_eq!(
            report.as_str(),
            r#"{"red":{"value":"0.000000","code":"255"},"blue":{"value":"-5.500000","code":"0"}}"#
        );
    }

    #[test]
    fn test_format_report_overflow() {
        let readings = RtdReadings {
            rtd1: RtdResult::new(0, -f32::MAX),
            rtd2: RtdResult::new(0, -f32::MAX),
        };

        assert!(format_report(&readings, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_send_report_applies_stored_calibration() {
        let (mut settings, _) = Settings::open(MockEeprom::<64>::new()).unwrap();
        settings.set_red_cal(-0.25).unwrap();
        settings.set_blue_cal(0.5).unwrap();

        let mut sink = CaptureSink::default();
        send_report(&mut settings, &mut FixedSource(sample()), &mut sink).unwrap();

        assert_eq!(sink.sent, 1);
        assert_eq!(
            sink.last.as_str(),
            r#"{"red":{"value":"65.000000","code":"0"},"blue":{"value":"20.625000","code":"4"}}"#
        );
    }

    #[test]
    fn test_send_report_after_defaults_is_uncalibrated() {
        let (mut settings, _) = Settings::open(MockEeprom::<64>::new()).unwrap();

        let mut sink = CaptureSink::default();
        send_report(&mut settings, &mut FixedSource(sample()), &mut sink).unwrap();

        assert!(sink.last.contains(r#""value":"65.250000""#));
        assert!(sink.last.contains(r#""value":"20.125000""#));
    }

    #[test]
    fn test_send_report_propagates_sink_error() {
        let (mut settings, _) = Settings::open(MockEeprom::<64>::new()).unwrap();

        let result = send_report(&mut settings, &mut FixedSource(sample()), &mut RejectingSink);
        assert_eq!(result, Err(ReportError::Sink(7)));
    }

    #[test]
    fn test_send_report_propagates_store_error() {
        let mut settings = Settings::new(MockEeprom::<2>::new());
        let mut sink = CaptureSink::default();

        let result = send_report(&mut settings, &mut FixedSource(sample()), &mut sink);
        assert_eq!(result, Err(ReportError::Store(MockError::OutOfRange)));
        assert_eq!(sink.sent, 0);
    }

    #[test]
    fn test_send_report_overflow_is_not_sent() {
        let (mut settings, _) = Settings::open(MockEeprom::<64>::new()).unwrap();
        let huge = RtdReadings {
            rtd1: RtdResult::new(0, -f32::MAX),
            rtd2: RtdResult::new(0, -f32::MAX),
        };
        let mut sink = CaptureSink::default();

        let result = send_report(&mut settings, &mut FixedSource(huge), &mut sink);
        assert_eq!(result, Err(ReportError::Overflow));
        assert_eq!(sink.sent, 0);
    }
}
