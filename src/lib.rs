//! DP83TC81x PHY Driver
//!
//! A `no_std`, `no_alloc` Rust driver for the Texas Instruments DP83TC812,
//! DP83TC813 and DP83TC814 single-pair 100BASE-T1 automotive Ethernet PHYs.
//!
//! # Architecture
//!
//! The driver is organized into three layers:
//!
//! 1. **PHY Layer** ([`phy`]): chip bring-up, interrupt masks, link status,
//!    signal quality and TDR cable diagnostics
//! 2. **HAL Layer** ([`hal`]): the [`MdioBus`] register transport, with
//!    Clause 45 MMD access over Clause 22 when the host has nothing better
//! 3. **Configuration** ([`config`]): attach-time host interface, interrupt
//!    and master/slave settings
//!
//! The register transport, interrupt dispatch and delay source belong to
//! the host. The driver never stores the bus; every operation borrows it.
//!
//! ## Standard Compliance
//!
//! - **IEEE 802.3 Clause 22**: BMCR/BMSR, PHY identifier, indirect MMD access
//! - **IEEE 802.3 Clause 45**: PMA/PMD BASE-T1 master/slave control
//!
//! # Supported PHY Chips
//!
//! - [`Dp83tc81x`]: TI DP83TC812 / DP83TC813 / DP83TC814
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for public types and trace logging
//!
//! # Example
//!
//! ```ignore
//! use dp83tc81x::{Dp83tc81x, DriverConfig, InterruptMode, PhyDriver, PhyInterface};
//! use dp83tc81x::phy::cable_test::{run_cable_test, CableTestReport};
//!
//! let config = DriverConfig::new()
//!     .with_interface(PhyInterface::RgmiiId)
//!     .with_interrupts(InterruptMode::Enabled);
//!
//! let mut phy = Dp83tc81x::attach(0, config, &mut mdio, &mut delay)?;
//!
//! let status = phy.read_status(&mut mdio)?;
//! let sqi = phy.get_sqi(&mut mdio)?;
//!
//! let mut report = CableTestReport::new();
//! let result = run_cable_test(&mut phy, &mut mdio, &mut delay, &mut report, 10, 50)?;
//! ```

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels, mirrored in Cargo.toml [lints].
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod config;
pub mod error;
pub mod hal;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Duplex, DriverConfig, InterruptMode, LinkConfig, MasterSlaveConfig, PhyInterface, Speed};
pub use error::{BusError, BusResult, ConfigError, DiagnosticError, Error, Result};
pub use hal::MdioBus;

// Re-export PHY types
pub use phy::dp83tc81x::{DP83TC812_PHY_ID, DP83TC813_PHY_ID, DP83TC814_PHY_ID};
pub use phy::{
    CablePair, CableTestCode, CableTestReport, CableTestReporter, CableTestResult, ChipVariant, Dp83tc81x,
    LinkStatus, PhyDriver, Role, Straps,
};

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types.
pub mod constants {
    pub use crate::internal::constants::{
        // Timing
        CHIP_INIT_SETTLE_MS,
        RESET_SETTLE_MS,
        // Limits
        SQI_MAX,
        TDR_LOCATION_SCALE_CM,
        TDR_SETTLE_MS,
    };
}
