//! Error types for the DP83TC81x PHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`BusError`]: Register transport failures (MDIO/MMD read or write)
//! - [`ConfigError`]: Attach-time and configuration failures
//! - [`DiagnosticError`]: The PHY itself reported a failed cable test
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by every driver operation. Nothing in the driver retries: the first
//! error aborts the enclosing sequence and is handed back verbatim.

// =============================================================================
// Bus Errors
// =============================================================================

/// Register transport errors
///
/// Returned by [`MdioBus`](crate::hal::mdio::MdioBus) implementations when a
/// Clause 22 or Clause 45 access cannot complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// The management bus did not complete the transaction in time
    Timeout,
    /// PHY address, MMD number or register number out of range
    InvalidAddress,
    /// No device answered at the addressed location
    NoDevice,
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BusError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BusError::Timeout => "bus timeout",
            BusError::InvalidAddress => "invalid register address",
            BusError::NoDevice => "no device at address",
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Attach and configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// PHY identifier is not one of the supported DP83TC81x variants
    UnsupportedDevice,
    /// Invalid configuration parameter
    InvalidConfig,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::UnsupportedDevice => "unsupported device",
            ConfigError::InvalidConfig => "invalid configuration",
        }
    }
}

// =============================================================================
// Diagnostic Errors
// =============================================================================

/// Cable diagnostic errors
///
/// These are not transport failures: the bus worked, and the PHY answered
/// that the measurement itself failed. The session is over and a new one
/// must be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiagnosticError {
    /// TDR completed with the fail flag set
    TestFailed,
}

impl core::fmt::Display for DiagnosticError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DiagnosticError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DiagnosticError::TestFailed => "cable test failed",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match phy.cable_test_get_status(&mut mdio, &mut report) {
///     Ok(false) => { /* still running, poll again */ }
///     Ok(true) => { /* result published to the reporter */ }
///     Err(Error::Diagnostic(DiagnosticError::TestFailed)) => { /* restart */ }
///     Err(Error::Bus(e)) => { /* transport fault */ }
///     Err(_) => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Register transport error
    Bus(BusError),
    /// Configuration error
    Config(ConfigError),
    /// Cable diagnostic error
    Diagnostic(DiagnosticError),
}

impl Error {
    /// Whether this error came from the register transport
    pub const fn is_transport(&self) -> bool {
        matches!(self, Error::Bus(_))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus: {}", e.as_str()),
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Diagnostic(e) => write!(f, "diagnostic: {}", e.as_str()),
        }
    }
}

impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Error::Bus(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DiagnosticError> for Error {
    fn from(e: DiagnosticError) -> Self {
        Error::Diagnostic(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for transport operations
pub type BusResult<T> = core::result::Result<T, BusError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    extern crate std;
    use std::format;

    use super::*;

    #[test]
    fn bus_error_as_str_non_empty() {
        let variants = [BusError::Timeout, BusError::InvalidAddress, BusError::NoDevice];

        for variant in variants {
            assert!(!variant.as_str().is_empty(), "BusError::{:?} has empty string", variant);
        }
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::UnsupportedDevice;
        assert_eq!(format!("{}", err), "unsupported device");
    }

    #[test]
    fn diagnostic_error_display() {
        assert_eq!(format!("{}", DiagnosticError::TestFailed), "cable test failed");
    }

    #[test]
    fn error_from_bus_error() {
        let err: Error = BusError::Timeout.into();
        assert_eq!(err, Error::Bus(BusError::Timeout));
        assert!(err.is_transport());
    }

    #[test]
    fn error_from_config_error() {
        let err: Error = ConfigError::UnsupportedDevice.into();

        match err {
            Error::Config(e) => assert_eq!(e, ConfigError::UnsupportedDevice),
            _ => panic!("Expected Error::Config"),
        }
        assert!(!err.is_transport());
    }

    #[test]
    fn error_from_diagnostic_error() {
        let err: Error = DiagnosticError::TestFailed.into();
        assert_eq!(err, Error::Diagnostic(DiagnosticError::TestFailed));
        assert!(!err.is_transport());
    }

    #[test]
    fn error_display_prefixes_domain() {
        let display = format!("{}", Error::Bus(BusError::NoDevice));
        assert!(display.starts_with("bus:"));
        assert!(display.contains("no device"));

        let display = format!("{}", Error::Diagnostic(DiagnosticError::TestFailed));
        assert!(display.starts_with("diagnostic:"));
    }

    #[test]
    fn bus_result_converts_with_question_mark() {
        fn transport() -> BusResult<u16> {
            Err(BusError::Timeout)
        }
        fn op() -> Result<u16> {
            Ok(transport()?)
        }

        assert_eq!(op(), Err(Error::Bus(BusError::Timeout)));
    }
}
