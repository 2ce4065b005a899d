use crate::{FightRecord, FighterDirectory, FighterId, GridError, GridResult};
use std::collections::{BTreeMap, BTreeSet};

/// Read-only opponent graph over a fight record.
///
/// Edges are directional: `fought(a, b)` only consults `a`'s own record, since
/// real logs sometimes omit a bout on one side. Sets are ordered so every
/// query yields a deterministic iteration order.
#[derive(Debug, Clone, Default)]
pub struct FightGraph {
    /// Raw opponent count per fighter, rematches included
    degrees: BTreeMap<FighterId, usize>,
    /// Deduplicated opponents per fighter
    opponents: BTreeMap<FighterId, BTreeSet<FighterId>>,
    /// Every id named anywhere: record owners, their opponents, directory entries
    known: BTreeSet<FighterId>,
}

impl FightGraph {
    pub fn new(record: &FightRecord) -> Self {
        let mut degrees = BTreeMap::new();
        let mut opponents = BTreeMap::new();
        let mut known = BTreeSet::new();
        for (id, opps) in record.iter() {
            degrees.insert(id.clone(), opps.len());
            opponents.insert(id.clone(), opps.iter().cloned().collect());
            known.insert(id.clone());
            known.extend(opps.iter().cloned());
        }
        Self {
            degrees,
            opponents,
            known,
        }
    }

    /// Count the directory's fighters as known even if no bout names them
    pub fn with_directory(mut self, directory: &FighterDirectory) -> Self {
        self.known.extend(directory.ids().cloned());
        self
    }

    pub fn from_json(json: &str) -> GridResult<Self> {
        Ok(Self::new(&FightRecord::from_json(json)?))
    }

    /// Whether `id` has a record of its own
    pub fn contains(&self, id: &str) -> bool {
        self.opponents.contains_key(id)
    }

    /// Whether `id` is named anywhere, even only in someone else's record
    pub fn is_known(&self, id: &str) -> bool {
        self.known.contains(id)
    }

    pub fn len(&self) -> usize {
        self.opponents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opponents.is_empty()
    }

    /// Fighters with a record, in id order
    pub fn fighters(&self) -> impl Iterator<Item = &FighterId> {
        self.opponents.keys()
    }

    /// Deduplicated opponents of `id`
    pub fn opponents_of(&self, id: &str) -> GridResult<&BTreeSet<FighterId>> {
        self.opponents.get(id).ok_or_else(|| GridError::unknown(id))
    }

    /// Length of the raw opponent list; 0 for fighters without a record
    pub fn degree_of(&self, id: &str) -> usize {
        self.degrees.get(id).copied().unwrap_or(0)
    }

    /// Everyone an opponent of `id` has fought.
    ///
    /// May contain `id` itself. Opponents without a record add nothing.
    pub fn opponents_of_opponents(&self, id: &str) -> GridResult<BTreeSet<FighterId>> {
        let mut frontier: Vec<&FighterId> = self.opponents_of(id)?.iter().collect();
        let mut reached = BTreeSet::new();
        // second hop
        while let Some(opponent) = frontier.pop() {
            if let Some(next) = self.opponents.get(opponent) {
                reached.extend(next.iter().cloned());
            }
        }
        Ok(reached)
    }

    /// Opponents shared by `a` and `b`; a fighter without a record shares none
    pub fn intersection(&self, a: &str, b: &str) -> BTreeSet<FighterId> {
        match (self.opponents.get(a), self.opponents.get(b)) {
            (Some(x), Some(y)) => x.intersection(y).cloned().collect(),
            _ => BTreeSet::new(),
        }
    }

    /// Size of `intersection(a, b)` without materializing it
    pub fn intersection_size(&self, a: &str, b: &str) -> usize {
        match (self.opponents.get(a), self.opponents.get(b)) {
            (Some(x), Some(y)) => x.intersection(y).count(),
            _ => 0,
        }
    }

    /// Whether `b` appears in `a`'s record. Not symmetric.
    pub fn fought(&self, a: &str, b: &str) -> bool {
        self.opponents.get(a).is_some_and(|opps| opps.contains(b))
    }

    /// Whether `a` and `b` have at least one opponent in common
    pub fn share_opponent(&self, a: &str, b: &str) -> bool {
        match (self.opponents.get(a), self.opponents.get(b)) {
            (Some(x), Some(y)) => !x.is_disjoint(y),
            _ => false,
        }
    }

    /// Fighters with at least `min_degree` logged fights, in id order
    pub fn eligible(&self, min_degree: usize) -> Vec<FighterId> {
        self.degrees
            .iter()
            .filter(|(_, &degree)| degree >= min_degree)
            .map(|(id, _)| id.clone())
            .collect()
    }
}

impl From<&FightRecord> for FightGraph {
    fn from(record: &FightRecord) -> Self {
        Self::new(record)
    }
}
