use std::ffi::OsString;

use tracing::{debug, trace};

use crate::args::ArgMap;
use crate::error::{Error, Result};

/// One option token after dash stripping and `=` splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Positive { name: &'a str, value: &'a str },
    /// `-noX[=v]`, keyed by `X`.
    Negative { name: &'a str, value: &'a str },
}

/// Strip one or two leading dashes. `None` if `arg` has no leading dash.
pub(crate) fn strip_dashes(arg: &str) -> Option<&str> {
    let body = arg.strip_prefix('-')?;
    Some(body.strip_prefix('-').unwrap_or(body))
}

/// Canonical lookup form of an option name: `-X`, `--X` and `X` all map to `X`.
pub(crate) fn normalize_name(name: &str) -> &str {
    strip_dashes(name).unwrap_or(name)
}

/// Classify a raw argument. Arguments without a leading dash yield `None`.
///
/// `-`, `--` and `-=v` carry the empty name and are kept like any other
/// option.
pub(crate) fn classify(arg: &str) -> Option<Token<'_>> {
    let body = strip_dashes(arg)?;
    let (name, value) = body.split_once('=').unwrap_or((body, ""));

    // Every `no` prefix is a negation, even `nostalgia` and a bare `no`.
    match name.strip_prefix("no") {
        Some(base) => Some(Token::Negative { name: base, value }),
        None => Some(Token::Positive { name, value }),
    }
}

impl ArgMap {
    /// Build a fresh map from an argument vector (program name excluded).
    pub fn parse<I, S>(args: I) -> ArgMap
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = ArgMap::default();
        let mut ignored = 0usize;

        for arg in args {
            let arg = arg.as_ref();
            match classify(arg) {
                Some(Token::Positive { name, value }) => {
                    trace!(name, value, "option");
                    map.push_positive(name, value);
                }
                Some(Token::Negative { name, value }) => {
                    trace!(name, value, "negated option");
                    map.push_negative(name, value);
                }
                None => {
                    trace!(arg, "skipping non-option argument");
                    ignored += 1;
                }
            }
        }

        debug!(
            options = map.options().count(),
            negated = map.negations().count(),
            ignored,
            "parsed argument vector"
        );
        map
    }

    /// Like [`ArgMap::parse`], for arguments straight from the OS.
    pub fn parse_os<I>(args: I) -> Result<ArgMap>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .map(|arg| arg.into_string().map_err(Error::NonUnicode))
            .collect::<Result<Vec<String>>>()?;
        Ok(Self::parse(args))
    }

    /// Parse this process's arguments, skipping the program name.
    pub fn from_env() -> Result<ArgMap> {
        Self::parse_os(std::env::args_os().skip(1))
    }
}
