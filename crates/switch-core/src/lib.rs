//! # trunkline-switch-core
//!
//! Model of a circuit-switched telephone network: area-code switchboards
//! owning local phone lines, symmetric trunk links between switchboards,
//! call setup by path-existence search over the trunk graph, and the call
//! session state machine (idle → connected → idle).
//!
//! The whole system is synchronous and single-threaded; every operation
//! takes the [`Network`] by reference, mutates it atomically or not at all,
//! and reports failures as [`SwitchError`] values.
//!
//! ## Example
//!
//! ```rust
//! use trunkline_switch_core::prelude::*;
//!
//! let mut net = Network::new();
//! let a = net.add_switchboard("301").unwrap();
//! let b = net.add_switchboard("240").unwrap();
//! net.link_switchboards(&a, &b).unwrap();
//! net.add_line(&a, LineNumber::parse("6457671").unwrap()).unwrap();
//! net.add_line(&b, LineNumber::parse("6534180").unwrap()).unwrap();
//!
//! let src: Endpoint = "301-6457671".parse().unwrap();
//! let dst: Endpoint = "240-6534180".parse().unwrap();
//! start_call(&mut net, &src, &dst).unwrap();
//! assert!(net.line(&src).unwrap().state.is_busy());
//!
//! end_call(&mut net, &src).unwrap();
//! assert!(!net.line(&src).unwrap().state.is_busy());
//! ```

pub mod call;
pub mod error;
pub mod network;
pub mod report;
pub mod routing;
pub mod switchboard;
pub mod types;

pub use call::{end_call, start_call};
pub use error::{SwitchError, SwitchResult};
pub use network::Network;
pub use report::NetworkReport;
pub use routing::route_exists;
pub use switchboard::{Line, LineState, Switchboard};
pub use types::{AreaCode, AreaCodePolicy, Endpoint, LineNumber};

/// Commonly used types and operations
pub mod prelude {
    pub use crate::call::{end_call, start_call};
    pub use crate::error::{SwitchError, SwitchResult};
    pub use crate::network::Network;
    pub use crate::report::NetworkReport;
    pub use crate::routing::route_exists;
    pub use crate::switchboard::{Line, LineState, Switchboard};
    pub use crate::types::{AreaCode, AreaCodePolicy, Endpoint, LineNumber};
}
