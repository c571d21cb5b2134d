//! Team balance search
//!
//! This module finds every way to split a roster into two equal teams
//! whose rank sums are as close as possible. It brute-forces the split:
//! every half-size subset of the roster is a candidate first team, the
//! complement is the second, and candidates survive only when they reach
//! the minimal rank difference, keep every party on one side, and are
//! not the side-swapped duplicate of an earlier survivor.
//!
//! The enumeration cost is C(n, n/2) candidates, which is the point: for
//! the small fixed rosters of a matchmaking session this is instant and
//! provably exhaustive, and no smarter search is intended. Callers that
//! need to bound latency must cap the roster size before asking (see
//! [`crate::constants::roster::MAX_SEARCH_SIZE`]).

use std::collections::HashSet;

use itertools::{Either, Itertools};
use serde::Serialize;

use crate::tags::Player;

/// An unordered pair of disjoint, equal-size teams covering the roster
///
/// Both sides list their players in roster order. `difference` is the
/// absolute gap between the two sides' rank sums; every combination the
/// search returns shares the minimal gap.
#[derive(Debug, Clone, Serialize)]
pub struct TeamCombination {
    /// Players on the first side, in roster order
    pub team_a: Vec<Player>,
    /// Players on the second side, in roster order
    pub team_b: Vec<Player>,
    /// Absolute difference between the two sides' rank sums
    pub difference: u64,
}

/// Sums a team's rank tiers, treating a missing rank as zero
///
/// The suggestion formatter reuses this exact computation for its column
/// headers, so displayed sums always agree with the search's filter.
pub fn rank_sum(team: &[Player]) -> u64 {
    team.iter().map(|p| u64::from(p.rank.unwrap_or(0))).sum()
}

/// Finds every minimal-difference, party-cohesive split of the roster
///
/// Candidates are enumerated over roster indices in lexicographic order,
/// which fixes the stable output order and keeps players with identical
/// nicknames distinct. Each unordered partition appears twice in the
/// enumeration (once per side labeling); deduplication keeps the first
/// representative and drops any later candidate whose canonical key
/// matches a kept candidate's key in either orientation.
///
/// The search itself is total. An empty roster yields no combinations,
/// and so does an odd roster: the complement of a half-size subset is
/// then larger than the subset and every candidate fails the size check.
/// Screening those cases into caller-facing errors is the caller's job
/// (see [`crate::matchmaker`]).
pub fn best_combinations(players: &[Player]) -> Vec<TeamCombination> {
    if players.is_empty() {
        return Vec::new();
    }

    let team_size = players.len() / 2;

    let candidates = (0..players.len())
        .combinations(team_size)
        .map(|picked| split(players, &picked))
        .collect_vec();

    let best = candidates
        .iter()
        .map(|candidate| candidate.difference)
        .min()
        .expect("a non-empty roster always yields candidates");

    let mut seen: HashSet<String> = HashSet::new();

    candidates
        .into_iter()
        .filter(|candidate| candidate.difference == best)
        .filter(|candidate| {
            candidate.team_a.len() == team_size && candidate.team_b.len() == team_size
        })
        .filter(parties_stay_together)
        .filter(|candidate| {
            let (regular, flipped) = canonical_keys(candidate);
            if seen.contains(&regular) {
                false
            } else {
                seen.insert(regular);
                seen.insert(flipped);
                true
            }
        })
        .collect()
}

/// Materializes one candidate: the picked indices form team A, the rest
/// team B, both in roster order.
fn split(players: &[Player], picked: &[usize]) -> TeamCombination {
    let mut in_a = vec![false; players.len()];
    for &index in picked {
        in_a[index] = true;
    }

    let (team_a, team_b): (Vec<Player>, Vec<Player>) =
        players.iter().enumerate().partition_map(|(index, player)| {
            if in_a[index] {
                Either::Left(player.clone())
            } else {
                Either::Right(player.clone())
            }
        });

    let difference = rank_sum(&team_a).abs_diff(rank_sum(&team_b));

    TeamCombination {
        team_a,
        team_b,
        difference,
    }
}

/// A party id held by players on both sides disqualifies the candidate.
/// A party with a single member constrains nothing.
fn parties_stay_together(candidate: &TeamCombination) -> bool {
    let parties = |team: &[Player]| -> HashSet<u32> {
        team.iter().filter_map(|player| player.party).collect()
    };

    parties(&candidate.team_a).is_disjoint(&parties(&candidate.team_b))
}

/// Canonical keys of the split in both orientations: each side's
/// nicknames sorted and comma-joined, the sides joined with ` VS `.
fn canonical_keys(candidate: &TeamCombination) -> (String, String) {
    let side = |team: &[Player]| {
        team.iter()
            .map(|player| player.nickname.as_str())
            .sorted()
            .join(",")
    };

    let (a, b) = (side(&candidate.team_a), side(&candidate.team_b));
    (format!("{a} VS {b}"), format!("{b} VS {a}"))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::tags::Toxicity;

    fn player(nickname: &str, rank: Option<u32>, party: Option<u32>) -> Player {
        Player {
            nickname: nickname.to_owned(),
            rank,
            party,
            toxicity: Toxicity::new("🟡", "🟡"),
        }
    }

    fn roster(ranks: &[u32]) -> Vec<Player> {
        ranks
            .iter()
            .enumerate()
            .map(|(index, &rank)| player(&format!("p{index}"), Some(rank), None))
            .collect()
    }

    /// Independent oracle: bitmask sweep over every size-matched
    /// bipartition, written without the engine's enumeration machinery.
    fn oracle_min_difference(ranks: &[u32]) -> u64 {
        let n = ranks.len();
        let mut best = u64::MAX;
        for mask in 0u32..(1 << n) {
            if mask.count_ones() as usize != n / 2 {
                continue;
            }
            let mut a = 0u64;
            let mut b = 0u64;
            for (index, &rank) in ranks.iter().enumerate() {
                if mask & (1 << index) != 0 {
                    a += u64::from(rank);
                } else {
                    b += u64::from(rank);
                }
            }
            best = best.min(a.abs_diff(b));
        }
        best
    }

    #[test]
    fn test_difference_matches_oracle_minimum() {
        let rosters: [&[u32]; 4] = [
            &[5, 3, 3, 2, 2, 1],
            &[7, 7, 7, 6, 5, 4, 2, 2, 1, 1],
            &[1, 1, 1, 9],
            &[4, 4, 4, 4, 4, 4, 4, 4],
        ];

        for ranks in rosters {
            let combinations = best_combinations(&roster(ranks));
            let expected = oracle_min_difference(ranks);
            assert!(!combinations.is_empty(), "roster {ranks:?} has no splits");
            for combination in &combinations {
                assert_eq!(combination.difference, expected, "roster {ranks:?}");
            }
        }
    }

    #[test]
    fn test_team_sizes_and_disjoint_cover() {
        let players = roster(&[7, 7, 7, 6, 5, 4, 2, 2, 1, 1]);
        for combination in best_combinations(&players) {
            assert_eq!(combination.team_a.len(), 5);
            assert_eq!(combination.team_b.len(), 5);

            let mut all: Vec<&str> = combination
                .team_a
                .iter()
                .chain(&combination.team_b)
                .map(|player| player.nickname.as_str())
                .collect();
            all.sort_unstable();
            let expected: Vec<String> = (0..10).map(|index| format!("p{index}")).collect();
            let mut expected: Vec<&str> = expected.iter().map(String::as_str).collect();
            expected.sort_unstable();
            assert_eq!(all, expected);
        }
    }

    #[test]
    fn test_parties_never_split() {
        let players = vec![
            player("a", Some(4), None),
            player("b", Some(4), None),
            player("c", Some(3), Some(1)),
            player("d", Some(1), Some(1)),
            player("e", Some(2), Some(2)),
            player("f", Some(2), Some(2)),
        ];

        let combinations = best_combinations(&players);
        assert!(!combinations.is_empty());
        for combination in combinations {
            let side_of = |name: &str| {
                combination
                    .team_a
                    .iter()
                    .any(|player| player.nickname == name)
            };
            assert_eq!(side_of("c"), side_of("d"), "party 1 was split");
            assert_eq!(side_of("e"), side_of("f"), "party 2 was split");
        }
    }

    #[test]
    fn test_cohesion_can_empty_the_result() {
        // The only zero-difference splits separate the two rank-4
        // partners; cohesion discards them and nothing survives at the
        // best difference.
        let players = vec![
            player("a", Some(4), Some(1)),
            player("b", Some(4), Some(1)),
            player("c", Some(1), None),
            player("d", Some(1), None),
        ];
        assert!(best_combinations(&players).is_empty());
    }

    #[test]
    fn test_no_symmetric_duplicates() {
        let players = roster(&[7, 7, 7, 6, 5, 4, 2, 2, 1, 1]);
        let combinations = best_combinations(&players);

        for (index, first) in combinations.iter().enumerate() {
            for second in &combinations[index + 1..] {
                let swapped = first.team_a == second.team_b && first.team_b == second.team_a;
                assert!(!swapped, "side-swapped duplicate in the result");
            }
        }
    }

    #[test]
    fn test_ten_player_session_yields_three_even_splits() {
        let players = vec![
            player("brenosoft", Some(7), None),
            player("spd", Some(7), None),
            player("mib", Some(7), None),
            player("oRN", Some(6), None),
            player("sauru", Some(5), None),
            player("plinyo", Some(4), None),
            player("coin", Some(2), Some(1)),
            player("NextageKL", Some(2), Some(1)),
            player("amigo", Some(1), Some(2)),
            player("do amigo", Some(1), Some(2)),
        ];

        let combinations = best_combinations(&players);
        assert_eq!(combinations.len(), 3);

        for combination in &combinations {
            assert_eq!(combination.difference, 0);
            assert_eq!(rank_sum(&combination.team_a), 21);
            assert_eq!(rank_sum(&combination.team_b), 21);
        }

        let sides: Vec<Vec<&str>> = combinations
            .iter()
            .map(|combination| {
                combination
                    .team_a
                    .iter()
                    .map(|player| player.nickname.as_str())
                    .collect()
            })
            .collect();
        assert_eq!(
            sides,
            vec![
                vec!["brenosoft", "spd", "sauru", "amigo", "do amigo"],
                vec!["brenosoft", "mib", "sauru", "amigo", "do amigo"],
                vec!["brenosoft", "oRN", "plinyo", "coin", "NextageKL"],
            ]
        );
    }

    #[test]
    fn test_missing_rank_counts_as_zero() {
        let players = vec![
            player("two", Some(2), None),
            player("none", None, None),
            player("one-a", Some(1), None),
            player("one-b", Some(1), None),
        ];

        let combinations = best_combinations(&players);
        assert!(!combinations.is_empty());
        for combination in combinations {
            assert_eq!(combination.difference, 0);
        }
    }

    #[test]
    fn test_duplicate_nicknames_collapse_to_one_report() {
        let players = vec![
            player("X", Some(1), None),
            player("X", Some(1), None),
            player("Y", Some(2), None),
            player("Y", Some(2), None),
        ];

        // Every zero-difference split pairs one X with one Y per side;
        // all of them read identically, so one representative survives.
        let combinations = best_combinations(&players);
        assert_eq!(combinations.len(), 1);
        assert_eq!(combinations[0].difference, 0);
    }

    #[test]
    fn test_two_player_roster() {
        let players = vec![player("a", Some(3), None), player("b", Some(1), None)];
        let combinations = best_combinations(&players);
        assert_eq!(combinations.len(), 1);
        assert_eq!(combinations[0].difference, 2);
    }

    #[test]
    fn test_odd_roster_yields_nothing() {
        assert!(best_combinations(&roster(&[3, 2, 1])).is_empty());
    }

    #[test]
    fn test_empty_roster_yields_nothing() {
        assert!(best_combinations(&[]).is_empty());
    }
}
