use anyhow::*;
use std::borrow::Borrow;

use crate::chemistry::model::{MatchResult, PeptideCandidate};
use crate::search::query::check_tolerance;

/// Decimal places kept on candidate masses before they are compared to the target.
pub const CANDIDATE_MASS_DECIMALS: usize = 1;

/// Rounds the exact binary value of `mass` to `decimals` places.
///
/// Scaling by a power of ten first would turn a value stored just below a
/// half (e.g. 418.15 held as 418.1499...) into an exact tie and round it up.
pub fn round_mass(mass: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, mass).parse().unwrap_or(mass)
}

/// Closed mass window `[target - tolerance, target + tolerance]`, in Daltons.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MassWindow {
    pub lower: f64,
    pub upper: f64,
}

impl MassWindow {
    pub fn new(target_mass: f64, tolerance: f64) -> Result<MassWindow> {
        check_tolerance(tolerance)?;

        Ok(MassWindow {
            lower: target_mass - tolerance,
            upper: target_mass + tolerance,
        })
    }

    /// The candidate mass is rounded to one decimal, the window bounds are used at full precision.
    pub fn matches(&self, candidate_mass: f64) -> bool {
        let rounded = round_mass(candidate_mass, CANDIDATE_MASS_DECIMALS);
        rounded >= self.lower && rounded <= self.upper
    }
}

/// Keeps the candidates whose rounded mass falls within `tolerance` of `target_mass`.
///
/// Every result is taken from a single candidate, so a sequence is always reported
/// with its own mass even when several candidates round to the same value.
/// Results keep the relative order of `candidates`.
pub fn filter_matches<I, C>(candidates: I, target_mass: f64, tolerance: f64) -> Result<Vec<MatchResult>>
where
    I: IntoIterator<Item = C>,
    C: Borrow<PeptideCandidate>,
{
    let window = MassWindow::new(target_mass, tolerance)?;

    let matches = candidates
        .into_iter()
        .filter_map(|candidate| {
            let candidate: &PeptideCandidate = candidate.borrow();
            window.matches(candidate.mono_mass).then(|| MatchResult::from(candidate))
        })
        .collect();

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::mass_calc::calc_aa_seq_mass;
    use crate::chemistry::model::PeptideTopology;
    use crate::chemistry::table::NATURAL_AMINO_ACID_TABLE;
    use crate::search::combination::peptide_candidates;

    fn candidate(sequence: &str, mono_mass: f64) -> PeptideCandidate {
        PeptideCandidate { sequence: sequence.to_string(), mono_mass }
    }

    #[test]
    fn rounding() {
        assert_eq!(round_mass(96.03232, 1), 96.0);
        assert_eq!(round_mass(113.08406, 1), 113.1);
        assert_eq!(round_mass(-3.26, 1), -3.3);
    }

    #[test]
    fn values_stored_below_a_half_round_down() {
        // 418.15 is held as 418.14999..., 418.15 * 10 would round to exactly 4181.5
        let table = &*NATURAL_AMINO_ACID_TABLE;
        let ggqeh = calc_aa_seq_mass("GGQEH", table, PeptideTopology::Macrocycle).unwrap();
        assert_eq!(ggqeh * 10.0, 4181.5);
        assert_eq!(round_mass(ggqeh, CANDIDATE_MASS_DECIMALS), 418.1);

        let candidates = peptide_candidates(table, 5, true, false).unwrap();
        let matches = filter_matches(&candidates, 418.1, 0.0).unwrap();
        assert!(matches.iter().any(|m| m.sequence == "GGQEH"));
        assert!(filter_matches(&candidates, 418.2, 0.0).unwrap().iter().all(|m| m.sequence != "GGQEH"));
    }

    #[test]
    fn candidate_mass_is_rounded_but_target_is_not() {
        let candidates = vec![candidate("GG", 96.03232)];

        // 96.03232 rounds to 96.0, which lies outside [96.02, 96.04]
        assert!(filter_matches(&candidates, 96.03, 0.01).unwrap().is_empty());
        // ... and inside [95.99, 96.01]
        assert_eq!(filter_matches(&candidates, 96.0, 0.01).unwrap().len(), 1);
    }

    #[test]
    fn colliding_masses_keep_their_own_sequences() {
        let candidates = vec![
            candidate("AAA", 195.04), // rounds to 195.0
            candidate("GGN", 194.96), // rounds to 195.0 as well
            candidate("WWW", 500.0),
        ];

        let matches = filter_matches(&candidates, 195.0, 0.0).unwrap();
        assert_eq!(
            matches,
            vec![
                MatchResult { sequence: "AAA".to_string(), mono_mass: 195.04 },
                MatchResult { sequence: "GGN".to_string(), mono_mass: 194.96 },
            ]
        );
    }

    #[test]
    fn isobaric_residues_are_both_reported() {
        let candidates = peptide_candidates(&NATURAL_AMINO_ACID_TABLE, 1, false, false).unwrap();
        let matches = filter_matches(&candidates, 113.1, 0.0).unwrap();

        let sequences: Vec<&str> = matches.iter().map(|m| m.sequence.as_str()).collect();
        assert_eq!(sequences, vec!["L", "I"]);
    }

    #[test]
    fn wider_tolerance_never_loses_matches() {
        let candidates = peptide_candidates(&NATURAL_AMINO_ACID_TABLE, 2, false, false).unwrap();
        let target = 210.3;

        let mut previous: Vec<MatchResult> = vec![];
        for tolerance in [0.0, 0.05, 0.1, 0.5, 1.0, 5.0, 50.0] {
            let matches = filter_matches(&candidates, target, tolerance).unwrap();
            assert!(previous.iter().all(|m| matches.contains(m)));
            assert!(matches.len() >= previous.len());
            previous = matches;
        }
        assert!(!previous.is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let candidates = peptide_candidates(&NATURAL_AMINO_ACID_TABLE, 2, false, false).unwrap();
        let matches = filter_matches(candidates.iter(), 200.0, 20.0).unwrap();

        let positions: Vec<usize> = matches
            .iter()
            .map(|m| candidates.iter().position(|c| c.sequence == m.sequence).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn accepts_owned_candidates() {
        let matches = filter_matches(vec![candidate("GG", 96.03232)], 96.0, 0.5).unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        assert!(filter_matches(Vec::<PeptideCandidate>::new(), 96.0, -0.5).is_err());
        assert!(filter_matches(Vec::<PeptideCandidate>::new(), 96.0, f64::NAN).is_err());
    }
}
