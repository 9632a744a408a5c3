//! Round-robin fixture generation.
//!
//! Produces a complete double round-robin schedule: per round-trip cycle,
//! every team meets every other team once in the first-leg half and once more
//! in the mirrored second-leg half with the venue reversed. Odd team counts
//! are padded with a synthetic bye slot; pairings against the bye are dropped,
//! giving one team an implicit rest each date.

use crate::error::{ChampionshipError, Result};
use crate::models::{Leg, Match};

/// Number of dates needed for every team to play every other team once.
pub fn dates_per_cycle(team_count: usize) -> u32 {
    match team_count {
        0 | 1 => 0,
        n if n % 2 == 0 => (n - 1) as u32,
        n => n as u32,
    }
}

/// One leg of one cycle: `dates_per_cycle` consecutive rounds starting at
/// `start_round`, using the standard fixed-first rotation.
fn round_robin_leg(teams: &[String], start_round: u32, leg: Leg) -> Vec<Match> {
    if teams.len() < 2 {
        return Vec::new();
    }

    // `None` is the bye slot; it pads odd counts to an even pairing length.
    let mut order: Vec<Option<&str>> = teams.iter().map(|t| Some(t.as_str())).collect();
    if order.len() % 2 == 1 {
        order.push(None);
    }

    let padded = order.len();
    let dates = (padded - 1) as u32;
    let mut matches = Vec::new();

    for date_idx in 0..dates {
        let round = start_round + date_idx;

        for j in 0..padded / 2 {
            let (Some(home), Some(away)) = (order[j], order[padded - 1 - j]) else {
                continue;
            };

            // Alternate the venue by date parity to balance home/away counts
            // across the cycle.
            let entry = if date_idx % 2 == 0 {
                Match::new(home, away, round, leg)
            } else {
                Match::new(away, home, round, leg)
            };
            matches.push(entry);
        }

        // Rotate: index 0 stays fixed, the last entry moves to index 1.
        if date_idx < dates - 1 {
            if let Some(last) = order.pop() {
                order.insert(1, last);
            }
        }
    }

    matches
}

/// Generate the full fixture for `round_trips` cycles.
///
/// Round numbers are contiguous and strictly increasing: cycle 1's first leg
/// occupies rounds `1..=dates_per_cycle`, its second leg the next block, and
/// so on for each further cycle.
pub fn generate_fixture(teams: &[String], round_trips: u32) -> Result<Vec<Match>> {
    if teams.len() < 2 {
        return Err(ChampionshipError::InsufficientTeams { found: teams.len() });
    }

    let dates = dates_per_cycle(teams.len());
    let mut all_matches = Vec::new();
    let mut next_round = 1;

    for _ in 0..round_trips {
        all_matches.extend(round_robin_leg(teams, next_round, Leg::FirstLeg));
        next_round += dates;

        let mut second_leg = round_robin_leg(teams, next_round, Leg::SecondLeg);
        for entry in &mut second_leg {
            entry.swap_venue();
        }
        all_matches.extend(second_leg);
        next_round += dates;
    }

    Ok(all_matches)
}

/// Matches scheduled for a specific round. Pure filter over the generated
/// sequence, preserving fixture order.
pub fn matches_in_round(matches: &[Match], round: u32) -> Vec<&Match> {
    matches.iter().filter(|m| m.round == round).collect()
}

/// Matches involving a specific team, in fixture order.
pub fn matches_for_team<'a>(matches: &'a [Match], team: &str) -> Vec<&'a Match> {
    matches.iter().filter(|m| m.involves(team)).collect()
}
