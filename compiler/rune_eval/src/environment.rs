//! Binding table for a single spell run.
//!
//! One flat scope: RuneScribe has no blocks that execute, so there is no
//! scope stack. Each binding remembers the realm it belongs to and the order
//! it was first created in, which the status report uses.

use rustc_hash::FxHashMap;

use rune_ir::Realm;

use crate::coerce;
use crate::errors::{unbound_variable, EvalError, EvalResult};
use crate::value::Value;

/// A variable binding.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub value: Value,
    pub realm: Realm,
    /// Realm-specific label for summoned values (`int`, `double`, `binary`);
    /// the runtime type name for computed ones.
    pub type_label: String,
    /// Creation order. Rebinding a name keeps its original position.
    seq: usize,
}

/// One line of the status report.
#[derive(Clone, Debug, PartialEq)]
pub struct BindingStatus {
    pub name: String,
    pub value: Value,
    pub type_label: String,
    pub realm: Realm,
}

/// Name-to-binding map.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Binding>,
    next_seq: usize,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coerce `raw` according to `realm` and bind the result to `name`.
    ///
    /// Returns the stored value. Coercion never fails; text with no valid
    /// interpretation in the realm is stored unchanged.
    pub fn summon(&mut self, name: &str, raw: &str, realm: Realm) -> Value {
        let value = coerce::coerce(raw, realm);
        let label = coerce::type_label(raw, realm);
        tracing::debug!(name, %realm, label, %value, "summoned");
        self.insert(name, value.clone(), realm, label.to_string());
        value
    }

    /// Bind a computed value. Overwrites any existing binding of `name`.
    pub fn bind(&mut self, name: &str, value: Value, realm: Realm) {
        let label = value.type_name().to_string();
        self.insert(name, value, realm, label);
    }

    fn insert(&mut self, name: &str, value: Value, realm: Realm, type_label: String) {
        if let Some(existing) = self.bindings.get_mut(name) {
            existing.value = value;
            existing.realm = realm;
            existing.type_label = type_label;
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.bindings.insert(
            name.to_string(),
            Binding {
                value,
                realm,
                type_label,
                seq,
            },
        );
    }

    /// Current value of `name`.
    pub fn get(&self, name: &str) -> EvalResult {
        self.bindings
            .get(name)
            .map(|b| b.value.clone())
            .ok_or_else(|| unbound_variable(name))
    }

    /// Realm of `name`.
    pub fn get_realm(&self, name: &str) -> Result<Realm, EvalError> {
        self.bindings
            .get(name)
            .map(|b| b.realm)
            .ok_or_else(|| unbound_variable(name))
    }

    #[inline]
    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Every binding, in the order names were first bound.
    pub fn status(&self) -> Vec<BindingStatus> {
        let mut entries: Vec<(&String, &Binding)> = self.bindings.iter().collect();
        entries.sort_by_key(|(_, b)| b.seq);
        entries
            .into_iter()
            .map(|(name, b)| BindingStatus {
                name: name.clone(),
                value: b.value.clone(),
                type_label: b.type_label.clone(),
                realm: b.realm,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
