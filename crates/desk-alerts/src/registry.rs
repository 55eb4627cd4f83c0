//! Alert rule storage and evaluation.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::warn;

use desk_core::types::{AlertDirection, AlertRule, TriggerEvent};

/// Registry of price alerts, one rule per symbol.
///
/// Iteration and evaluation follow insertion order. Replacing a
/// symbol's rule keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertRegistry {
    rules: Vec<AlertRule>,
}

impl AlertRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the rule for a symbol.
    ///
    /// A replacement keeps the symbol's insertion position and arrives
    /// with a fresh `hit` flag, so it can trigger again.
    pub fn set(&mut self, rule: AlertRule) {
        match self.rules.iter_mut().find(|r| r.symbol == rule.symbol) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Remove the rule for a symbol.
    pub fn remove(&mut self, symbol: &str) -> Option<AlertRule> {
        let index = self.rules.iter().position(|r| r.symbol == symbol)?;
        Some(self.rules.remove(index))
    }

    /// Re-arm a triggered rule. Returns false for unknown symbols.
    pub fn reset(&mut self, symbol: &str) -> bool {
        match self.rules.iter_mut().find(|r| r.symbol == symbol) {
            Some(rule) => {
                rule.hit = false;
                true
            }
            None => false,
        }
    }

    /// Get the rule for a symbol.
    pub fn get(&self, symbol: &str) -> Option<&AlertRule> {
        self.rules.iter().find(|r| r.symbol == symbol)
    }

    /// Iterate over rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AlertRule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every armed rule against current prices.
    ///
    /// Rules whose price lookup yields nothing (or a non-positive
    /// value, which quote feeds use for "no data") are skipped
    /// untouched and retried on the next pass. Malformed rules from
    /// persisted state are skipped with a warning. Each trigger flips
    /// the rule's `hit` flag in place, so repeating the call with
    /// unchanged inputs emits no further events.
    pub fn evaluate<F>(&mut self, mut lookup: F) -> Vec<TriggerEvent>
    where
        F: FnMut(&str) -> Option<f64>,
    {
        let mut events = Vec::new();

        for rule in &mut self.rules {
            if rule.hit {
                continue;
            }
            if !rule.is_well_formed() {
                warn!(symbol = %rule.symbol, target = rule.target, "skipping malformed alert rule");
                continue;
            }
            let price = match lookup(&rule.symbol) {
                Some(price) if price > 0.0 => price,
                _ => continue,
            };
            if rule.is_satisfied_by(price) {
                rule.hit = true;
                events.push(TriggerEvent {
                    symbol: rule.symbol.clone(),
                    price,
                    target: rule.target,
                    direction: rule.direction,
                });
            }
        }

        events
    }
}

/// Wire shape of a rule: the symbol is the map key.
#[derive(Serialize, Deserialize)]
struct RuleBody {
    target: f64,
    #[serde(default)]
    direction: AlertDirection,
    #[serde(default)]
    hit: bool,
}

impl Serialize for AlertRegistry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for rule in &self.rules {
            map.serialize_entry(
                &rule.symbol,
                &RuleBody {
                    target: rule.target,
                    direction: rule.direction,
                    hit: rule.hit,
                },
            )?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AlertRegistry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RegistryVisitor;

        impl<'de> Visitor<'de> for RegistryVisitor {
            type Value = AlertRegistry;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of symbol to alert rule")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                // Document order becomes insertion order.
                let mut registry = AlertRegistry::new();
                while let Some((symbol, body)) = access.next_entry::<String, RuleBody>()? {
                    registry.set(AlertRule {
                        symbol: symbol.trim().to_uppercase(),
                        target: body.target,
                        direction: body.direction,
                        hit: body.hit,
                    });
                }
                Ok(registry)
            }
        }

        deserializer.deserialize_map(RegistryVisitor)
    }
}
