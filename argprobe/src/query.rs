use std::str::FromStr;

use getarg::ArgMap;

use crate::error::{ProbeError, Result};

/// One lookup against the parsed arguments, written `KIND:NAME[:DEFAULT]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Bool { name: String, default: bool },
    String { name: String, default: String },
    Int { name: String, default: i64 },
    All { name: String },
    Set { name: String },
    Negated { name: String },
}

fn parse_bool_default(s: &str) -> Option<bool> {
    match s {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

impl FromStr for Query {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, ':');
        let kind = parts.next().unwrap_or("");
        let name = match parts.next() {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => return Err(ProbeError::query(s, "missing option name")),
        };
        let default = parts.next();

        let no_default = |q: Query| match default {
            Some(_) => Err(ProbeError::query(s, format!("{} takes no default", kind))),
            None => Ok(q),
        };

        match kind {
            "bool" => {
                let default = match default {
                    Some(d) => parse_bool_default(d)
                        .ok_or_else(|| ProbeError::query(s, format!("not a boolean: {}", d)))?,
                    None => false,
                };
                Ok(Query::Bool { name, default })
            }
            "string" => Ok(Query::String {
                name,
                default: default.unwrap_or("").to_string(),
            }),
            "int" => {
                let default: i64 = match default {
                    Some(d) => d
                        .parse()
                        .map_err(|_| ProbeError::query(s, format!("not an integer: {}", d)))?,
                    None => 0,
                };
                Ok(Query::Int { name, default })
            }
            "all" => no_default(Query::All { name }),
            "set" => no_default(Query::Set { name }),
            "negated" => no_default(Query::Negated { name }),
            _ => Err(ProbeError::query(s, format!("unknown kind '{}'", kind))),
        }
    }
}

impl Query {
    pub fn answer(&self, args: &ArgMap) -> String {
        match self {
            Query::Bool { name, default } => args.get_bool(name, *default).to_string(),
            Query::String { name, default } => args.get_string(name, default),
            Query::Int { name, default } => args.get_int(name, *default).to_string(),
            Query::All { name } => args.get_all(name).join(","),
            Query::Set { name } => args.is_set(name).to_string(),
            Query::Negated { name } => args.is_negated(name).to_string(),
        }
    }
}
