//! Switchboard and line records

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::{AreaCode, Endpoint, LineNumber};

/// Call state of a single line
///
/// A line is busy exactly when it is `Connected`, so the busy flag and the
/// peer reference cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LineState {
    /// On-hook, available for a call
    Idle,
    /// Off-hook, in a call with `peer`
    Connected { peer: Endpoint },
}

impl LineState {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    /// The far end of the active call, if any
    pub fn peer(&self) -> Option<&Endpoint> {
        match self {
            Self::Idle => None,
            Self::Connected { peer } => Some(peer),
        }
    }
}

/// A single phone line owned by a switchboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub number: LineNumber,
    pub state: LineState,
}

impl Line {
    /// Create a new idle line
    pub fn new(number: LineNumber) -> Self {
        Self {
            number,
            state: LineState::Idle,
        }
    }
}

/// A named switching node: an area code, its trunk links, and its lines
///
/// Trunk links are stored as a set of neighbor area codes; symmetry (if A
/// links B then B links A) is enforced by [`Network::link_switchboards`],
/// not re-validated here.
///
/// [`Network::link_switchboards`]: crate::network::Network::link_switchboards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Switchboard {
    pub code: AreaCode,
    pub trunks: BTreeSet<AreaCode>,
    pub lines: BTreeMap<LineNumber, Line>,
}

impl Switchboard {
    /// Create a switchboard with no trunk links and no lines
    pub fn new(code: AreaCode) -> Self {
        Self {
            code,
            trunks: BTreeSet::new(),
            lines: BTreeMap::new(),
        }
    }

    /// Whether this board has a direct trunk link to `other`
    pub fn has_trunk_to(&self, other: &AreaCode) -> bool {
        self.trunks.contains(other)
    }

    pub fn line(&self, number: &LineNumber) -> Option<&Line> {
        self.lines.get(number)
    }

    pub fn line_mut(&mut self, number: &LineNumber) -> Option<&mut Line> {
        self.lines.get_mut(number)
    }
}
