//! Operator command grammar
//!
//! One command per input line, whitespace-separated, matching the classic
//! switchboard console surface: `switch-add 301`, `switch-connect 301 240`,
//! `phone-add 301-6457671`, `start-call 301-6457671 240-6534180`,
//! `end-call 301-6457671`, `network-save net.csv`, `network-load net.csv`,
//! `display [--json]`, `quit`.

use std::path::PathBuf;

use trunkline_switch_core::{AreaCodePolicy, Endpoint, SwitchResult};

/// A parsed operator command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SwitchAdd { code: String },
    SwitchConnect { a: String, b: String },
    PhoneAdd { at: Endpoint },
    StartCall { src: Endpoint, dst: Endpoint },
    EndCall { at: Endpoint },
    NetworkSave { path: PathBuf },
    NetworkLoad { path: PathBuf },
    Display { json: bool },
    Help,
    Quit,
}

/// Why an input line did not parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    UnknownCommand(String),
    Usage(&'static str),
    BadEndpoint(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownCommand(cmd) => {
                write!(f, "unknown command '{}' (try 'help')", cmd)
            }
            Self::Usage(usage) => write!(f, "usage: {}", usage),
            Self::BadEndpoint(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ParseError {}

fn endpoint(raw: &str, policy: AreaCodePolicy) -> Result<Endpoint, ParseError> {
    let parsed: SwitchResult<Endpoint> = Endpoint::parse(raw, policy);
    parsed.map_err(|e| ParseError::BadEndpoint(e.to_string()))
}

impl Command {
    /// Parse one input line against the network's area code policy
    pub fn parse(line: &str, policy: AreaCodePolicy) -> Result<Self, ParseError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let (&head, args) = parts.split_first().ok_or(ParseError::Empty)?;

        match (head.to_ascii_lowercase().as_str(), args) {
            ("switch-add", [code]) => Ok(Self::SwitchAdd {
                code: code.to_string(),
            }),
            ("switch-add", _) => Err(ParseError::Usage("switch-add <area-code>")),

            ("switch-connect", [a, b]) => Ok(Self::SwitchConnect {
                a: a.to_string(),
                b: b.to_string(),
            }),
            ("switch-connect", _) => Err(ParseError::Usage("switch-connect <area-1> <area-2>")),

            ("phone-add", [number]) => Ok(Self::PhoneAdd {
                at: endpoint(number, policy)?,
            }),
            ("phone-add", _) => Err(ParseError::Usage("phone-add <area>-<number>")),

            ("start-call", [src, dst]) => Ok(Self::StartCall {
                src: endpoint(src, policy)?,
                dst: endpoint(dst, policy)?,
            }),
            ("start-call", _) => {
                Err(ParseError::Usage("start-call <area>-<number> <area>-<number>"))
            }

            ("end-call", [at]) => Ok(Self::EndCall {
                at: endpoint(at, policy)?,
            }),
            ("end-call", _) => Err(ParseError::Usage("end-call <area>-<number>")),

            ("network-save", [path]) => Ok(Self::NetworkSave {
                path: PathBuf::from(path),
            }),
            ("network-save", _) => Err(ParseError::Usage("network-save <file>")),

            ("network-load", [path]) => Ok(Self::NetworkLoad {
                path: PathBuf::from(path),
            }),
            ("network-load", _) => Err(ParseError::Usage("network-load <file>")),

            ("display", []) => Ok(Self::Display { json: false }),
            ("display", ["--json"]) => Ok(Self::Display { json: true }),
            ("display", _) => Err(ParseError::Usage("display [--json]")),

            ("help", _) => Ok(Self::Help),
            ("quit" | "exit", _) => Ok(Self::Quit),

            (other, _) => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  switch-add <area-code>                      register a new switchboard
  switch-connect <area-1> <area-2>            create a trunk link between two switchboards
  phone-add <area>-<number>                   add a phone line to a switchboard
  start-call <area>-<number> <area>-<number>  connect two lines
  end-call <area>-<number>                    hang up the call on a line
  network-save <file>                         save the network as CSV
  network-load <file>                         replace the network from CSV
  display [--json]                            show switchboards, trunks, and line status
  help                                        show this text
  quit                                        leave the console";
