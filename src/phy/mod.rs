//! Ethernet PHY Drivers
//!
//! This module provides the generic PHY driver trait, the cable diagnostic
//! engine and the DP83TC81x chip driver.
//!
//! # Architecture
//!
//! The PHY layer talks to hardware only through the [`MdioBus`] trait.
//! This allows:
//!
//! - Use from any host PHY framework or bare-metal MDIO controller
//! - Testing with mock MDIO implementations
//!
//! # Supported PHY Chips
//!
//! - [`Dp83tc81x`]: TI DP83TC812, DP83TC813 and DP83TC814 (100BASE-T1)
//!
//! # Example
//!
//! ```ignore
//! use dp83tc81x::phy::{Dp83tc81x, PhyDriver};
//! use dp83tc81x::phy::cable_test::{run_cable_test, CableTestReport};
//!
//! let mut phy = Dp83tc81x::attach(0, DriverConfig::new(), &mut mdio, &mut delay)?;
//!
//! let mut report = CableTestReport::new();
//! if let Some(result) = run_cable_test(&mut phy, &mut mdio, &mut delay, &mut report, 10, 50)? {
//!     // result.code, result.fault_length_cm
//! }
//! ```
//!
//! [`MdioBus`]: crate::hal::mdio::MdioBus

pub mod dp83tc81x;
pub mod generic;

pub use cable_test::{CablePair, CableTestCode, CableTestReport, CableTestReporter, CableTestResult};
pub use dp83tc81x::{ChipVariant, Dp83tc81x, ResetKind, Straps};
pub use generic::{LinkStatus, PhyDriver, Role};
