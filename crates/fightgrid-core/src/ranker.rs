use crate::{FightGraph, FighterId};
use std::cmp::Reverse;

/// Candidate orderings used while picking anchors.
///
/// Every ordering is a stable sort: equal scores keep their input order, and
/// the generator always takes the first unselected entry.
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'g> {
    graph: &'g FightGraph,
}

impl<'g> Ranker<'g> {
    pub fn new(graph: &'g FightGraph) -> Self {
        Self { graph }
    }

    /// Most recorded fights first
    pub fn order_by_degree(&self, candidates: &[FighterId]) -> Vec<FighterId> {
        Self::order_by(candidates, |c| self.graph.degree_of(c))
    }

    /// Most opponents shared with `anchor` first
    pub fn order_by_intersection_size(&self, anchor: &str, candidates: &[FighterId]) -> Vec<FighterId> {
        Self::order_by(candidates, |c| self.graph.intersection_size(anchor, c))
    }

    /// The `n` candidates with the most recorded fights
    pub fn top_by_degree(&self, candidates: &[FighterId], n: usize) -> Vec<FighterId> {
        let mut ranked = self.order_by_degree(candidates);
        ranked.truncate(n);
        ranked
    }

    fn order_by<F>(candidates: &[FighterId], score: F) -> Vec<FighterId>
    where
        F: Fn(&str) -> usize,
    {
        let mut scored: Vec<(usize, &FighterId)> =
            candidates.iter().map(|c| (score(c.as_str()), c)).collect();
        // slice::sort_by_key is stable
        scored.sort_by_key(|&(s, _)| Reverse(s));
        scored.into_iter().map(|(_, c)| c.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FightRecord;

    fn ids(v: &[&str]) -> Vec<FighterId> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn graph() -> FightGraph {
        let record: FightRecord = [
            ("hub", vec!["p", "q", "r", "s"]),
            ("p", vec!["hub", "q"]),
            ("q", vec!["hub", "p"]),
            ("r", vec!["hub", "s"]),
            ("s", vec!["hub", "r"]),
            ("t", vec!["p", "q", "r"]),
            ("u", vec!["x"]),
        ]
        .into_iter()
        .collect();
        FightGraph::new(&record)
    }

    #[test]
    fn test_order_by_degree_is_stable() {
        let graph = graph();
        let ranker = Ranker::new(&graph);
        let ranked = ranker.order_by_degree(&ids(&["s", "p", "hub", "r", "t", "q"]));
        assert_eq!(ranked, ids(&["hub", "t", "s", "p", "r", "q"]));

        let reversed = ranker.order_by_degree(&ids(&["q", "r", "p", "s"]));
        assert_eq!(reversed, ids(&["q", "r", "p", "s"]));
    }

    #[test]
    fn test_unknown_candidates_rank_last_but_stay() {
        let graph = graph();
        let ranker = Ranker::new(&graph);
        let ranked = ranker.order_by_degree(&ids(&["nobody", "u", "hub"]));
        assert_eq!(ranked, ids(&["hub", "u", "nobody"]));
    }

    #[test]
    fn test_order_by_intersection_size() {
        let graph = graph();
        let ranker = Ranker::new(&graph);
        // shared with t = {p, q, r}: hub -> 3, s -> {r} 1, p -> {q} 1, q -> {p} 1, r -> 0
        let ranked = ranker.order_by_intersection_size("t", &ids(&["r", "q", "hub", "p", "s"]));
        assert_eq!(ranked, ids(&["hub", "q", "p", "s", "r"]));
    }

    #[test]
    fn test_top_by_degree() {
        let graph = graph();
        let ranker = Ranker::new(&graph);
        assert_eq!(ranker.top_by_degree(&ids(&["p", "t", "hub"]), 2), ids(&["hub", "t"]));
        assert_eq!(ranker.top_by_degree(&ids(&["p"]), 2), ids(&["p"]));
        assert!(ranker.top_by_degree(&[], 2).is_empty());
    }
}
