//! The six-field character stat vector and partial synergy bonuses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Stat
// ---------------------------------------------------------------------------

/// One of the six character stat fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Serve,
    Spike,
    Set,
    Receive,
    Block,
    Save,
}

impl Stat {
    /// All stats in display order.
    pub const ALL: [Stat; 6] = [
        Stat::Serve,
        Stat::Spike,
        Stat::Set,
        Stat::Receive,
        Stat::Block,
        Stat::Save,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Serve => "serve",
            Self::Spike => "spike",
            Self::Set => "set",
            Self::Receive => "receive",
            Self::Block => "block",
            Self::Save => "save",
        }
    }
}

// ---------------------------------------------------------------------------
// CharacterStats
// ---------------------------------------------------------------------------

/// A full stat vector. Also used for aggregated synergy bonus totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub serve: u32,
    pub spike: u32,
    pub set: u32,
    pub receive: u32,
    pub block: u32,
    pub save: u32,
}

impl CharacterStats {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Serve => self.serve,
            Stat::Spike => self.spike,
            Stat::Set => self.set,
            Stat::Receive => self.receive,
            Stat::Block => self.block,
            Stat::Save => self.save,
        }
    }

    fn get_mut(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::Serve => &mut self.serve,
            Stat::Spike => &mut self.spike,
            Stat::Set => &mut self.set,
            Stat::Receive => &mut self.receive,
            Stat::Block => &mut self.block,
            Stat::Save => &mut self.save,
        }
    }

    /// Sum of all six fields.
    pub fn total(&self) -> u64 {
        Stat::ALL.iter().map(|s| u64::from(self.get(*s))).sum()
    }

    /// Add every field present in `bonus`. Absent fields contribute nothing.
    pub fn add_bonus(&mut self, bonus: &StatBonus) {
        for (stat, value) in bonus.iter() {
            let slot = self.get_mut(stat);
            *slot = slot.saturating_add(value);
        }
    }
}

// ---------------------------------------------------------------------------
// StatBonus
// ---------------------------------------------------------------------------

/// A partial stat vector: the subset of fields a synergy boosts.
///
/// Serializes as a JSON object keyed by stat name, e.g.
/// `{"spike": 150, "set": 100}`. Unknown stat names fail to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatBonus(BTreeMap<Stat, u32>);

impl StatBonus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and seed fixtures.
    pub fn with(mut self, stat: Stat, value: u32) -> Self {
        self.0.insert(stat, value);
        self
    }

    pub fn get(&self, stat: Stat) -> u32 {
        self.0.get(&stat).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        self.0.iter().map(|(stat, value)| (*stat, *value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every present bonus must be a positive integer.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self.0.iter().find(|(_, value)| **value == 0) {
            Some((stat, _)) => Err(CoreError::Validation(format!(
                "stat bonus for '{}' must be positive",
                stat.as_str()
            ))),
            None => Ok(()),
        }
    }
}

impl FromIterator<(Stat, u32)> for StatBonus {
    fn from_iter<I: IntoIterator<Item = (Stat, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> CharacterStats {
        CharacterStats {
            serve: 1783,
            spike: 1680,
            set: 1869,
            receive: 1508,
            block: 1682,
            save: 1415,
        }
    }

    #[test]
    fn total_sums_all_six_fields() {
        assert_eq!(sample_stats().total(), 9937);
    }

    #[test]
    fn add_bonus_touches_only_present_fields() {
        let mut totals = CharacterStats::default();
        totals.add_bonus(&StatBonus::new().with(Stat::Spike, 150).with(Stat::Set, 100));
        totals.add_bonus(&StatBonus::new().with(Stat::Spike, 50));

        assert_eq!(totals.spike, 200);
        assert_eq!(totals.set, 100);
        assert_eq!(totals.serve, 0);
        assert_eq!(totals.save, 0);
    }

    #[test]
    fn bonus_serializes_as_stat_keyed_object() {
        let bonus = StatBonus::new().with(Stat::Block, 200);
        let json = serde_json::to_value(&bonus).unwrap();
        assert_eq!(json, serde_json::json!({"block": 200}));
    }

    #[test]
    fn bonus_rejects_unknown_stat_name() {
        let parsed: Result<StatBonus, _> = serde_json::from_str(r#"{"power": 10}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn zero_bonus_fails_validation() {
        let bonus = StatBonus::new().with(Stat::Save, 0);
        let err = bonus.validate().unwrap_err();
        assert!(err.to_string().contains("save"));
    }

    #[test]
    fn absent_bonus_field_reads_as_zero() {
        let bonus = StatBonus::new().with(Stat::Receive, 80);
        assert_eq!(bonus.get(Stat::Receive), 80);
        assert_eq!(bonus.get(Stat::Serve), 0);
    }
}
