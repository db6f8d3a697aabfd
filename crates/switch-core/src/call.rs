//! Call session setup and teardown
//!
//! A call session is nothing but the mutual peer references on two lines;
//! it exists from a successful [`start_call`] until [`end_call`] on either
//! endpoint. Both transitions leave the network untouched on failure, so a
//! rejected call is never observable as partial state.

use tracing::{debug, info};

use crate::error::{SwitchError, SwitchResult};
use crate::network::Network;
use crate::routing::route_exists;
use crate::switchboard::LineState;
use crate::types::Endpoint;

/// Connect two lines, if both are idle and a trunk route exists
///
/// Checks run in order: both endpoints must resolve, both lines must be
/// idle, and only then is route discovery attempted (a busy line
/// short-circuits the search). Same-switchboard calls connect without any
/// trunk traversal.
///
/// # Errors
///
/// - `LineNotFound` if either endpoint does not resolve
/// - `LineBusy` if either line is already in a call
/// - `NoRoute` if no chain of trunk links joins the two switchboards
pub fn start_call(network: &mut Network, src: &Endpoint, dst: &Endpoint) -> SwitchResult<()> {
    // Resolve and busy-check both ends before touching anything.
    if network.line(src)?.state.is_busy() {
        return Err(SwitchError::LineBusy(src.clone()));
    }
    if network.line(dst)?.state.is_busy() {
        return Err(SwitchError::LineBusy(dst.clone()));
    }

    if !route_exists(network, &src.area, &dst.area) {
        debug!(src = %src, dst = %dst, "call rejected: no trunk route");
        return Err(SwitchError::NoRoute {
            from: src.area.to_string(),
            to: dst.area.to_string(),
        });
    }

    network.line_mut(src)?.state = LineState::Connected { peer: dst.clone() };
    network.line_mut(dst)?.state = LineState::Connected { peer: src.clone() };
    info!(src = %src, dst = %dst, "call connected");
    Ok(())
}

/// Hang up the call on `at`, clearing both ends
///
/// Returns the far endpoint that was disconnected.
///
/// # Errors
///
/// - `LineNotFound` if the endpoint does not resolve
/// - `NotConnected` if the line is idle
/// - `ConsistencyViolation` if the peer cannot be resolved or does not
///   point back; that means the mutual-peer invariant was already broken
///   and is a core bug, not a recoverable condition
pub fn end_call(network: &mut Network, at: &Endpoint) -> SwitchResult<Endpoint> {
    let peer = match network.line(at)?.state.peer() {
        None => return Err(SwitchError::NotConnected(at.clone())),
        Some(peer) => peer.clone(),
    };

    let peer_line = network.line(&peer).map_err(|_| {
        SwitchError::consistency(format!("line {} is peered with missing line {}", at, peer))
    })?;
    match peer_line.state.peer() {
        Some(back) if back == at => {}
        _ => {
            return Err(SwitchError::consistency(format!(
                "line {} points at {} but {} does not point back",
                at, peer, peer
            )))
        }
    }

    network.line_mut(at)?.state = LineState::Idle;
    network.line_mut(&peer)?.state = LineState::Idle;
    info!(src = %at, dst = %peer, "call terminated");
    Ok(peer)
}
