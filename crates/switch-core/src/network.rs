//! Switchboard registry and trunk topology
//!
//! [`Network`] is the single explicit state object for the whole system: the
//! command dispatcher owns one and passes it by reference into every
//! operation. Switchboards are kept in an ordered map so that display and
//! persistence walk them in a stable order.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{SwitchError, SwitchResult};
use crate::switchboard::{Line, Switchboard};
use crate::types::{AreaCode, AreaCodePolicy, Endpoint, LineNumber};

/// The full switchboard network: registry, trunk graph, and line state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    policy: AreaCodePolicy,
    boards: BTreeMap<AreaCode, Switchboard>,
}

impl Network {
    /// Create an empty network with the default 3-digit area code policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty network with a custom area code policy
    pub fn with_policy(policy: AreaCodePolicy) -> Self {
        Self {
            policy,
            boards: BTreeMap::new(),
        }
    }

    /// The area code policy this network validates against
    pub fn policy(&self) -> AreaCodePolicy {
        self.policy
    }

    /// Register a new switchboard
    ///
    /// # Errors
    ///
    /// - `InvalidAreaCode` if `code` fails the network's policy
    /// - `SwitchboardExists` if the code is already registered; the existing
    ///   board (with its trunks and lines) is left untouched
    pub fn add_switchboard(&mut self, code: &str) -> SwitchResult<AreaCode> {
        let code = self.policy.parse(code)?;
        if self.boards.contains_key(&code) {
            return Err(SwitchError::SwitchboardExists(code.to_string()));
        }
        debug!(area = %code, "adding switchboard");
        self.boards.insert(code.clone(), Switchboard::new(code.clone()));
        Ok(code)
    }

    /// Create a symmetric trunk link between two switchboards
    ///
    /// Linking an already-linked pair is a no-op (set semantics), and a
    /// board cannot be linked to itself.
    ///
    /// # Errors
    ///
    /// - `SwitchboardNotFound` if either code is unregistered
    /// - `InvalidTrunk` for a self-link
    pub fn link_switchboards(&mut self, a: &AreaCode, b: &AreaCode) -> SwitchResult<()> {
        if a == b {
            return Err(SwitchError::invalid_trunk(format!(
                "switchboard {} cannot trunk to itself",
                a
            )));
        }
        if !self.boards.contains_key(a) {
            return Err(SwitchError::SwitchboardNotFound(a.to_string()));
        }
        if !self.boards.contains_key(b) {
            return Err(SwitchError::SwitchboardNotFound(b.to_string()));
        }
        debug!(from = %a, to = %b, "linking switchboards");
        self.board_mut(a)?.trunks.insert(b.clone());
        self.board_mut(b)?.trunks.insert(a.clone());
        Ok(())
    }

    /// Add a line to a switchboard
    ///
    /// If the number already exists on that board the line is replaced with
    /// a fresh idle one; this is defined behavior, not an error.
    ///
    /// # Errors
    ///
    /// - `SwitchboardNotFound` if `code` is unregistered
    pub fn add_line(&mut self, code: &AreaCode, number: LineNumber) -> SwitchResult<()> {
        let board = self
            .boards
            .get_mut(code)
            .ok_or_else(|| SwitchError::SwitchboardNotFound(code.to_string()))?;
        debug!(area = %code, number = %number, "adding line");
        board.lines.insert(number.clone(), Line::new(number));
        Ok(())
    }

    /// Look up a switchboard
    pub fn board(&self, code: &AreaCode) -> SwitchResult<&Switchboard> {
        self.boards
            .get(code)
            .ok_or_else(|| SwitchError::SwitchboardNotFound(code.to_string()))
    }

    pub(crate) fn board_mut(&mut self, code: &AreaCode) -> SwitchResult<&mut Switchboard> {
        self.boards
            .get_mut(code)
            .ok_or_else(|| SwitchError::SwitchboardNotFound(code.to_string()))
    }

    /// Resolve an endpoint to its line
    pub fn line(&self, at: &Endpoint) -> SwitchResult<&Line> {
        self.board(&at.area)
            .map_err(|_| SwitchError::LineNotFound(at.clone()))?
            .line(&at.number)
            .ok_or_else(|| SwitchError::LineNotFound(at.clone()))
    }

    pub(crate) fn line_mut(&mut self, at: &Endpoint) -> SwitchResult<&mut Line> {
        self.board_mut(&at.area)
            .map_err(|_| SwitchError::LineNotFound(at.clone()))?
            .line_mut(&at.number)
            .ok_or_else(|| SwitchError::LineNotFound(at.clone()))
    }

    /// Iterate switchboards in area-code order
    pub fn boards(&self) -> impl Iterator<Item = &Switchboard> {
        self.boards.values()
    }

    /// Number of registered switchboards
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}
