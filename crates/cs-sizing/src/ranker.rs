//! Ordering and capping of feasible candidates.

use crate::optimizer::Candidate;

/// Candidates ready for display, cheapest first.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidates {
    /// At most `max_alternatives` entries; the first is flagged recommended
    pub alternatives: Vec<Candidate>,
    /// Next-cheapest total minus the cheapest, or 0 with fewer than two
    pub cost_savings: f64,
}

impl RankedCandidates {
    pub fn recommended(&self) -> Option<&Candidate> {
        self.alternatives.first()
    }
}

/// Dedup on (size, run count), sort by total cost, flag the cheapest, and cap.
///
/// Equal costs go to the configuration with fewer runs, then the smaller size.
pub fn rank(mut candidates: Vec<Candidate>, max_alternatives: usize) -> RankedCandidates {
    candidates.sort_by(|a, b| {
        a.total_cost
            .total_cmp(&b.total_cost)
            .then(a.cables_in_parallel.cmp(&b.cables_in_parallel))
            .then(a.size_mm2.total_cmp(&b.size_mm2))
    });
    candidates.dedup_by(|a, b| {
        a.cables_in_parallel == b.cables_in_parallel && a.size_mm2 == b.size_mm2
    });

    for candidate in candidates.iter_mut() {
        candidate.is_recommended = false;
    }
    if let Some(first) = candidates.first_mut() {
        first.is_recommended = true;
    }

    let cost_savings = match candidates.as_slice() {
        [best, next, ..] => next.total_cost - best.total_cost,
        _ => 0.0,
    };

    candidates.truncate(max_alternatives);

    RankedCandidates {
        alternatives: candidates,
        cost_savings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(size_mm2: f64, n: usize, total_cost: f64) -> Candidate {
        Candidate {
            size: format!("{size_mm2}mm²"),
            size_mm2,
            cables_in_parallel: n,
            load_per_cable_a: 100.0 / n as f64,
            ampacity_a: 120.0,
            ohm_per_km: 0.5,
            volt_drop_percent: 1.0,
            supply_cost: total_cost * 0.8,
            install_cost: total_cost * 0.2,
            total_cost,
            is_recommended: false,
        }
    }

    #[test]
    fn sorts_by_cost_and_flags_first() {
        let ranked = rank(
            vec![
                candidate(35.0, 1, 300.0),
                candidate(16.0, 2, 200.0),
                candidate(6.0, 3, 250.0),
            ],
            5,
        );
        let costs: Vec<f64> = ranked.alternatives.iter().map(|c| c.total_cost).collect();
        assert_eq!(costs, vec![200.0, 250.0, 300.0]);
        assert!(ranked.alternatives[0].is_recommended);
        assert!(ranked.alternatives[1..].iter().all(|c| !c.is_recommended));
        assert_eq!(ranked.cost_savings, 50.0);
        assert_eq!(ranked.recommended().unwrap().cables_in_parallel, 2);
    }

    #[test]
    fn ties_prefer_fewer_runs() {
        let ranked = rank(
            vec![candidate(16.0, 3, 100.0), candidate(35.0, 1, 100.0)],
            5,
        );
        assert_eq!(ranked.alternatives[0].cables_in_parallel, 1);
        assert_eq!(ranked.cost_savings, 0.0);
    }

    #[test]
    fn duplicates_are_removed() {
        let ranked = rank(
            vec![
                candidate(16.0, 2, 200.0),
                candidate(16.0, 2, 200.0),
                candidate(35.0, 1, 300.0),
            ],
            5,
        );
        assert_eq!(ranked.alternatives.len(), 2);
        assert_eq!(ranked.cost_savings, 100.0);
    }

    #[test]
    fn list_is_capped() {
        let candidates = (1..=6)
            .map(|n| candidate(10.0 * n as f64, n, 100.0 * n as f64))
            .collect();
        let ranked = rank(candidates, 5);
        assert_eq!(ranked.alternatives.len(), 5);
        assert_eq!(ranked.alternatives[4].cables_in_parallel, 5);
    }

    #[test]
    fn single_candidate_has_no_savings() {
        let ranked = rank(vec![candidate(35.0, 1, 300.0)], 5);
        assert_eq!(ranked.cost_savings, 0.0);
        assert!(ranked.alternatives[0].is_recommended);
    }

    #[test]
    fn empty_input_stays_empty() {
        let ranked = rank(Vec::new(), 5);
        assert!(ranked.alternatives.is_empty());
        assert!(ranked.recommended().is_none());
    }
}
