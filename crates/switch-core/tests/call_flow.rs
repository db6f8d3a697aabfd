//! End-to-end call flow over the switchboard network

use trunkline_switch_core::prelude::*;

/// Every busy line's peer must exist and point back.
fn assert_peer_symmetry(net: &Network) {
    for board in net.boards() {
        for line in board.lines.values() {
            if let Some(peer) = line.state.peer() {
                let here = Endpoint::new(board.code.clone(), line.number.clone());
                let far = net.line(peer).expect("peer line must exist");
                assert_eq!(far.state.peer(), Some(&here), "asymmetric peering at {}", here);
            }
        }
    }
}

#[test]
fn call_lifecycle_across_linked_boards() {
    let mut net = Network::new();
    let a = net.add_switchboard("301").unwrap();
    let b = net.add_switchboard("240").unwrap();
    net.link_switchboards(&a, &b).unwrap();
    net.add_line(&a, LineNumber::parse("6457671").unwrap()).unwrap();
    net.add_line(&b, LineNumber::parse("6534180").unwrap()).unwrap();
    assert_peer_symmetry(&net);

    let src: Endpoint = "301-6457671".parse().unwrap();
    let dst: Endpoint = "240-6534180".parse().unwrap();

    // Call connects: both ends busy and mutually peered.
    start_call(&mut net, &src, &dst).unwrap();
    assert_peer_symmetry(&net);
    assert_eq!(net.line(&src).unwrap().state.peer(), Some(&dst));
    assert_eq!(net.line(&dst).unwrap().state.peer(), Some(&src));

    // Hang up from the caller: both ends return to idle.
    end_call(&mut net, &src).unwrap();
    assert_peer_symmetry(&net);
    assert!(!net.line(&src).unwrap().state.is_busy());
    assert!(!net.line(&dst).unwrap().state.is_busy());
}

#[test]
fn isolated_board_rejects_call_without_state_change() {
    // Same endpoints, but 301 has no trunk link to 240.
    let mut net = Network::new();
    let a = net.add_switchboard("301").unwrap();
    let b = net.add_switchboard("240").unwrap();
    net.add_line(&a, LineNumber::parse("6457671").unwrap()).unwrap();
    net.add_line(&b, LineNumber::parse("6534180").unwrap()).unwrap();

    let src: Endpoint = "301-6457671".parse().unwrap();
    let dst: Endpoint = "240-6534180".parse().unwrap();

    let err = start_call(&mut net, &src, &dst).unwrap_err();
    assert!(matches!(err, SwitchError::NoRoute { .. }));
    assert!(err.is_recoverable());
    assert!(!net.line(&src).unwrap().state.is_busy());
    assert!(!net.line(&dst).unwrap().state.is_busy());
    assert_peer_symmetry(&net);
}

#[test]
fn calls_route_through_intermediate_boards() {
    // 301 - 410 - 240: no direct trunk between the endpoints' boards.
    let mut net = Network::new();
    let a = net.add_switchboard("301").unwrap();
    let mid = net.add_switchboard("410").unwrap();
    let b = net.add_switchboard("240").unwrap();
    net.link_switchboards(&a, &mid).unwrap();
    net.link_switchboards(&mid, &b).unwrap();
    net.add_line(&a, LineNumber::parse("6457671").unwrap()).unwrap();
    net.add_line(&b, LineNumber::parse("6534180").unwrap()).unwrap();

    let src: Endpoint = "301-6457671".parse().unwrap();
    let dst: Endpoint = "240-6534180".parse().unwrap();

    assert!(route_exists(&net, &src.area, &dst.area));
    start_call(&mut net, &src, &dst).unwrap();
    assert_peer_symmetry(&net);

    // The report shows both ends of the session.
    let report = NetworkReport::of(&net).to_string();
    assert!(report.contains("6457671 is connected to 240-6534180"));
    assert!(report.contains("6534180 is connected to 301-6457671"));
}

#[test]
fn reconnecting_after_hangup_succeeds() {
    let mut net = Network::new();
    let a = net.add_switchboard("301").unwrap();
    let b = net.add_switchboard("240").unwrap();
    net.link_switchboards(&a, &b).unwrap();
    net.add_line(&a, LineNumber::parse("6457671").unwrap()).unwrap();
    net.add_line(&b, LineNumber::parse("6534180").unwrap()).unwrap();

    let src: Endpoint = "301-6457671".parse().unwrap();
    let dst: Endpoint = "240-6534180".parse().unwrap();

    for _ in 0..3 {
        start_call(&mut net, &src, &dst).unwrap();
        assert_peer_symmetry(&net);
        end_call(&mut net, &dst).unwrap();
        assert_peer_symmetry(&net);
    }
}
