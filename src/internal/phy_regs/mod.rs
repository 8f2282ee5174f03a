//! PHY Register Definitions
//!
//! Register definitions for PHY devices accessed via MDIO.
//!
//! # Module Organization
//!
//! - [`standard`] - IEEE 802.3 Clause 22 registers and the Clause 45
//!   BASE-T1 PMA control register
//! - [`dp83tc81x`] - DP83TC81x vendor-specific registers
//!
//! # Access Method
//!
//! Vendor registers live in MMD 0x1F and are reached through
//! [`MdioBus::read_mmd`](crate::hal::mdio::MdioBus::read_mmd). The three
//! interrupt registers are plain Clause 22 registers.

pub mod dp83tc81x;
pub mod standard;
