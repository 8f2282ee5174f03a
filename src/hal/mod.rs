//! Hardware Abstraction Layer
//!
//! This module holds the seam between the driver and the host: the
//! management bus the PHY registers are reached through.
//!
//! # Modules
//!
//! - [`mdio`]: MDIO bus trait with Clause 22 and Clause 45 (MMD) access
//!
//! # Delay Integration
//!
//! All operations that require settle times take an
//! `embedded_hal::delay::DelayNs` directly. Pass any delay implementation
//! from your HAL.

pub mod mdio;

pub use mdio::MdioBus;
