//! Read-only network inspection
//!
//! [`NetworkReport`] is a structured snapshot of the whole network: every
//! switchboard with its trunk neighbors and the status of each line. It is
//! the surface acceptance tests read state through, and serializes for
//! machine consumers.

use std::fmt;

use serde::Serialize;

use crate::network::Network;
use crate::switchboard::LineState;
use crate::types::Endpoint;

/// Status of one line as reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum LineStatus {
    Idle,
    Connected { peer: Endpoint },
}

/// One line in a switchboard report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub number: String,
    #[serde(flatten)]
    pub status: LineStatus,
}

/// One switchboard in a network report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchboardReport {
    pub area_code: String,
    pub trunks: Vec<String>,
    pub lines: Vec<LineReport>,
}

/// Snapshot of every switchboard, in area-code order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkReport {
    pub switchboards: Vec<SwitchboardReport>,
}

impl NetworkReport {
    /// Build a report from the current network state; pure read
    pub fn of(network: &Network) -> Self {
        let switchboards = network
            .boards()
            .map(|board| SwitchboardReport {
                area_code: board.code.to_string(),
                trunks: board.trunks.iter().map(|t| t.to_string()).collect(),
                lines: board
                    .lines
                    .values()
                    .map(|line| LineReport {
                        number: line.number.to_string(),
                        status: match &line.state {
                            LineState::Idle => LineStatus::Idle,
                            LineState::Connected { peer } => LineStatus::Connected {
                                peer: peer.clone(),
                            },
                        },
                    })
                    .collect(),
            })
            .collect();
        Self { switchboards }
    }
}

impl fmt::Display for NetworkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for board in &self.switchboards {
            writeln!(f, "Switchboard with area code: {}", board.area_code)?;
            writeln!(f, "\tTrunk lines:")?;
            for trunk in &board.trunks {
                writeln!(f, "\t\tTrunk line connection to: {}", trunk)?;
            }
            writeln!(f, "\tLocal phone numbers:")?;
            for line in &board.lines {
                match &line.status {
                    LineStatus::Idle => {
                        writeln!(f, "\t\tPhone with number {} is not in use", line.number)?
                    }
                    LineStatus::Connected { peer } => writeln!(
                        f,
                        "\t\tPhone with number {} is connected to {}",
                        line.number, peer
                    )?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::start_call;
    use crate::types::LineNumber;

    fn sample_net() -> Network {
        let mut net = Network::new();
        let a = net.add_switchboard("301").unwrap();
        let b = net.add_switchboard("240").unwrap();
        net.link_switchboards(&a, &b).unwrap();
        net.add_line(&a, LineNumber::parse("6457671").unwrap())
            .unwrap();
        net.add_line(&b, LineNumber::parse("6534180").unwrap())
            .unwrap();
        net
    }

    #[test]
    fn test_report_lists_boards_in_code_order() {
        let report = NetworkReport::of(&sample_net());
        let codes: Vec<_> = report
            .switchboards
            .iter()
            .map(|b| b.area_code.as_str())
            .collect();
        assert_eq!(codes, vec!["240", "301"]);
    }

    #[test]
    fn test_report_reflects_call_state() {
        let mut net = sample_net();
        let src: Endpoint = "301-6457671".parse().unwrap();
        let dst: Endpoint = "240-6534180".parse().unwrap();
        start_call(&mut net, &src, &dst).unwrap();

        let report = NetworkReport::of(&net);
        let board301 = report
            .switchboards
            .iter()
            .find(|b| b.area_code == "301")
            .unwrap();
        assert_eq!(
            board301.lines[0].status,
            LineStatus::Connected { peer: dst.clone() }
        );

        let text = report.to_string();
        assert!(text.contains("Phone with number 6457671 is connected to 240-6534180"));
        assert!(text.contains("Phone with number 6534180 is connected to 301-6457671"));
    }

    #[test]
    fn test_report_serializes() {
        let report = NetworkReport::of(&sample_net());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["switchboards"][1]["area_code"], "301");
        assert_eq!(json["switchboards"][1]["trunks"][0], "240");
        assert_eq!(json["switchboards"][1]["lines"][0]["status"], "idle");
    }
}
