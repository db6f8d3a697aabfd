//! # trunkline-switch-store
//!
//! CSV persistence for a [`Network`]: one record per switchboard with its
//! area code, trunk neighbors, and local phone numbers. Line call state is
//! deliberately not persisted — every line loads idle, so active calls do
//! not survive a save/load cycle.
//!
//! Format: header `area_code,trunk_lines,phones`; the two list fields are
//! `;`-joined and empty when the board has no trunks or no lines.
//!
//! ```csv
//! area_code,trunk_lines,phones
//! 240,301,6534180
//! 301,240,6457671;5550000
//! ```

pub mod error;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use trunkline_switch_core::{AreaCodePolicy, LineNumber, Network};

pub use error::{StoreError, StoreResult};

/// Separator for the list-valued fields within a record
const LIST_SEPARATOR: char = ';';

/// On-disk shape of one switchboard
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SwitchboardRecord {
    area_code: String,
    trunk_lines: String,
    phones: String,
}

fn join_list<I: IntoIterator<Item = String>>(items: I) -> String {
    items
        .into_iter()
        .collect::<Vec<_>>()
        .join(&LIST_SEPARATOR.to_string())
}

fn split_list(field: &str) -> impl Iterator<Item = &str> {
    field.split(LIST_SEPARATOR).filter(|s| !s.is_empty())
}

/// Write a network as CSV to any sink
pub fn write_network<W: Write>(network: &Network, sink: W) -> StoreResult<()> {
    let mut writer = csv::Writer::from_writer(sink);
    for board in network.boards() {
        writer.serialize(SwitchboardRecord {
            area_code: board.code.to_string(),
            trunk_lines: join_list(board.trunks.iter().map(|t| t.to_string())),
            phones: join_list(board.lines.keys().map(|n| n.to_string())),
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Save a network to a CSV file
pub fn save_network<P: AsRef<Path>>(network: &Network, path: P) -> StoreResult<()> {
    debug!(path = %path.as_ref().display(), boards = network.len(), "saving network");
    let file = File::create(path)?;
    write_network(network, file)
}

/// Read a network from CSV, validating area codes against `policy`
///
/// Two passes over the records: every switchboard and its lines are created
/// first, then trunk links are applied, so a record may reference a
/// neighbor that appears later in the file. Any malformed record (bad area
/// code for the policy, non-digit phone number, unknown or self trunk
/// neighbor, duplicate board) fails the whole load.
pub fn read_network<R: Read>(source: R, policy: AreaCodePolicy) -> StoreResult<Network> {
    let mut reader = csv::Reader::from_reader(source);
    let records: Vec<SwitchboardRecord> =
        reader.deserialize().collect::<Result<_, csv::Error>>()?;

    let mut network = Network::with_policy(policy);

    for (idx, record) in records.iter().enumerate() {
        let record_no = idx as u64 + 1;
        let code = network
            .add_switchboard(&record.area_code)
            .map_err(|e| StoreError::malformed(record_no, e.to_string()))?;
        for raw in split_list(&record.phones) {
            let number = LineNumber::parse(raw)
                .map_err(|e| StoreError::malformed(record_no, e.to_string()))?;
            network
                .add_line(&code, number)
                .map_err(|e| StoreError::malformed(record_no, e.to_string()))?;
        }
    }

    for (idx, record) in records.iter().enumerate() {
        let record_no = idx as u64 + 1;
        let code = policy
            .parse(&record.area_code)
            .map_err(|e| StoreError::malformed(record_no, e.to_string()))?;
        for raw in split_list(&record.trunk_lines) {
            let neighbor = policy
                .parse(raw)
                .map_err(|e| StoreError::malformed(record_no, e.to_string()))?;
            network
                .link_switchboards(&code, &neighbor)
                .map_err(|e| StoreError::malformed(record_no, e.to_string()))?;
        }
    }

    Ok(network)
}

/// Load a network from a CSV file
pub fn load_network<P: AsRef<Path>>(path: P, policy: AreaCodePolicy) -> StoreResult<Network> {
    debug!(path = %path.as_ref().display(), "loading network");
    let file = File::open(path)?;
    read_network(file, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trunkline_switch_core::prelude::*;

    fn sample_net() -> Network {
        let mut net = Network::new();
        let a = net.add_switchboard("301").unwrap();
        let b = net.add_switchboard("240").unwrap();
        net.link_switchboards(&a, &b).unwrap();
        net.add_line(&a, LineNumber::parse("6457671").unwrap())
            .unwrap();
        net.add_line(&a, LineNumber::parse("5550000").unwrap())
            .unwrap();
        net.add_line(&b, LineNumber::parse("6534180").unwrap())
            .unwrap();
        net
    }

    #[test]
    fn test_written_layout() {
        let mut out = Vec::new();
        write_network(&sample_net(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("area_code,trunk_lines,phones"));
        assert_eq!(lines.next(), Some("240,301,6534180"));
        assert_eq!(lines.next(), Some("301,240,5550000;6457671"));
    }

    #[test]
    fn test_round_trip_preserves_topology() {
        let net = sample_net();
        let mut buf = Vec::new();
        write_network(&net, &mut buf).unwrap();
        let loaded = read_network(buf.as_slice(), net.policy()).unwrap();
        assert_eq!(loaded, net);
    }

    #[test]
    fn test_loaded_lines_are_idle_even_if_saved_mid_call() {
        let mut net = sample_net();
        let src: Endpoint = "301-6457671".parse().unwrap();
        let dst: Endpoint = "240-6534180".parse().unwrap();
        start_call(&mut net, &src, &dst).unwrap();

        let mut buf = Vec::new();
        write_network(&net, &mut buf).unwrap();
        let loaded = read_network(buf.as_slice(), net.policy()).unwrap();

        assert!(!loaded.line(&src).unwrap().state.is_busy());
        assert!(!loaded.line(&dst).unwrap().state.is_busy());
    }

    #[test]
    fn test_trunks_may_reference_later_records() {
        let csv = "area_code,trunk_lines,phones\n111,222,\n222,,5550000\n";
        let net = read_network(csv.as_bytes(), AreaCodePolicy::default()).unwrap();
        let a = net.policy().parse("111").unwrap();
        let b = net.policy().parse("222").unwrap();
        assert!(net.board(&a).unwrap().has_trunk_to(&b));
        assert!(net.board(&b).unwrap().has_trunk_to(&a));
    }

    #[test]
    fn test_rejects_bad_area_code() {
        let csv = "area_code,trunk_lines,phones\n30,,\n";
        let err = read_network(csv.as_bytes(), AreaCodePolicy::default()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRecord { record: 1, .. }));
    }

    #[test]
    fn test_rejects_unknown_trunk_neighbor() {
        let csv = "area_code,trunk_lines,phones\n301,999,6457671\n";
        let err = read_network(csv.as_bytes(), AreaCodePolicy::default()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRecord { record: 1, .. }));
    }

    #[test]
    fn test_rejects_bad_phone_number() {
        let csv = "area_code,trunk_lines,phones\n301,,64x7671\n";
        let err = read_network(csv.as_bytes(), AreaCodePolicy::default()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRecord { record: 1, .. }));
    }

    #[test]
    fn test_rejects_duplicate_board_record() {
        let csv = "area_code,trunk_lines,phones\n301,,\n301,,\n";
        let err = read_network(csv.as_bytes(), AreaCodePolicy::default()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRecord { record: 2, .. }));
    }

    #[test]
    fn test_respects_policy_width() {
        let csv = "area_code,trunk_lines,phones\n0301,,\n";
        assert!(read_network(csv.as_bytes(), AreaCodePolicy::default()).is_err());
        assert!(read_network(csv.as_bytes(), AreaCodePolicy::new(4)).is_ok());
    }
}
