//! Centralized Constants
//!
//! Settle times and fixed limits used by the DP83TC81x driver.
//!
//! # Note
//!
//! Register bit definitions live in [`phy_regs`](super::phy_regs).

// =============================================================================
// Timing Constants
// =============================================================================

/// Settle time after a hardware or software reset, in milliseconds
pub const RESET_SETTLE_MS: u32 = 100;

/// Settle time after the tuning tables, before the restarting soft reset
pub const CHIP_INIT_SETTLE_MS: u32 = 10;

/// Settle time after TDR start before the first status poll is meaningful
pub const TDR_SETTLE_MS: u32 = 100;

// =============================================================================
// Limits
// =============================================================================

/// Highest signal quality index the PHY reports
pub const SQI_MAX: u8 = 7;

/// Fault distance units per TDR location step (centimeters per meter)
pub const TDR_LOCATION_SCALE_CM: u32 = 100;
