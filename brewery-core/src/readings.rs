//! RTD sensor readings
//!
//! The acquisition side (MAX31865 conversion, ADC maths) lives with the
//! board code. This module only defines what it hands over.

/// One RTD conversion result
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RtdResult {
    /// Converter fault register, 0 when healthy
    pub fault_code: u8,
    /// Uncalibrated temperature in °C
    pub temperature: f32,
}

impl RtdResult {
    /// Create a result
    pub const fn new(fault_code: u8, temperature: f32) -> Self {
        Self {
            fault_code,
            temperature,
        }
    }

    /// True if the converter reported no fault
    pub const fn is_ok(&self) -> bool {
        self.fault_code == 0
    }

    /// Temperature with a calibration offset applied
    pub fn calibrated(&self, offset: f32) -> f32 {
        self.temperature + offset
    }
}

/// Latest results from both probes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RtdReadings {
    /// First converter, wired to the blue probe
    pub rtd1: RtdResult,
    /// Second converter, wired to the red probe
    pub rtd2: RtdResult,
}

impl RtdReadings {
    /// Red probe result
    pub const fn red(&self) -> &RtdResult {
        &self.rtd2
    }

    /// Blue probe result
    pub const fn blue(&self) -> &RtdResult {
        &self.rtd1
    }
}

/// Supplier of the latest sensor readings
pub trait ReadingsSource {
    /// Most recent results from both probes
    fn readings(&mut self) -> RtdReadings;
}
