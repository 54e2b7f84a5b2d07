use indexmap::IndexMap;
use tracing::debug;

use crate::tokenize::normalize_name;

/// Options and negations from one argument vector.
///
/// Names are kept dash-stripped and case-sensitive, in order of first
/// appearance. Every occurrence appends to the name's value list; the
/// typed getters only ever consult the first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgMap {
    positive: IndexMap<String, Vec<String>>,
    negative: IndexMap<String, Vec<String>>,
}

/// Boolean reading of an option value. Bare flags are true, numeric zero is
/// false, anything else (including non-numeric text) is true.
fn interpret_bool(value: &str) -> bool {
    value.is_empty() || value.parse::<i64>().map_or(true, |n| n != 0)
}

impl ArgMap {
    pub(crate) fn push_positive(&mut self, name: &str, value: &str) {
        self.positive
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }

    pub(crate) fn push_negative(&mut self, name: &str, value: &str) {
        self.negative
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// Boolean value of `name`.
    ///
    /// A non-negated occurrence always wins; `-noX` only applies when `X`
    /// was never given directly. `-noX` and `-noX=1` read as false, `-noX=0`
    /// reads as true.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        let name = normalize_name(name);
        if let Some(value) = self.first_positive(name) {
            return interpret_bool(value);
        }
        match self.first_negative(name) {
            Some(value) => !interpret_bool(value),
            None => default,
        }
    }

    /// String value of `name`, or `default` when it was not given.
    ///
    /// Bare flags yield the empty string, not the default. Negations are
    /// ignored.
    pub fn get_string(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or(default).to_string()
    }

    /// Integer value of `name`, or `default` when it was not given.
    ///
    /// A present value that is not a base-10 integer (bare flags included)
    /// reads as `0`, never as `default`.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        match self.get(name) {
            Some(value) => value.parse().unwrap_or(0),
            None => default,
        }
    }

    /// First value given for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.first_positive(normalize_name(name))
    }

    /// Every value given for `name`, in command-line order.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.positive
            .get(normalize_name(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.positive.contains_key(normalize_name(name))
    }

    pub fn is_negated(&self, name: &str) -> bool {
        self.negative.contains_key(normalize_name(name))
    }

    /// Options and their values, in order of first appearance.
    pub fn options(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.positive.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Negated options keyed without the `no` prefix.
    pub fn negations(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.negative.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Values given through `-noX[=v]` for `name`.
    pub fn get_negated_all(&self, name: &str) -> &[String] {
        self.negative
            .get(normalize_name(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct names, negated or not.
    pub fn len(&self) -> usize {
        self.positive.len()
            + self
                .negative
                .keys()
                .filter(|k| !self.positive.contains_key(*k))
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Set `name` to `value` unless it was given in any form.
    ///
    /// Returns whether the value was applied. A negated option counts as
    /// given, so a default never overrides `-noX`.
    pub fn soft_set(&mut self, name: &str, value: &str) -> bool {
        let name = normalize_name(name);
        if self.positive.contains_key(name) || self.negative.contains_key(name) {
            debug!(name, "soft set skipped, option already given");
            return false;
        }
        debug!(name, value, "soft set");
        self.push_positive(name, value);
        true
    }

    /// [`ArgMap::soft_set`] with `"1"` or `"0"`.
    pub fn soft_set_bool(&mut self, name: &str, value: bool) -> bool {
        self.soft_set(name, if value { "1" } else { "0" })
    }

    fn first_positive(&self, name: &str) -> Option<&str> {
        self.positive
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    fn first_negative(&self, name: &str) -> Option<&str> {
        self.negative
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }
}
