//! End-to-end walkthrough of the championship core: categories, fixtures,
//! results, penalties, standings, and the JSON export.

use bc_core::models::Championship;

fn print_standings(championship: &mut Championship, category_name: &str) {
    let standings = match championship.standings(category_name) {
        Ok(standings) => standings,
        Err(err) => {
            println!("  {}", err);
            return;
        }
    };

    println!("\n{}", "=".repeat(78));
    println!("STANDINGS - {}", category_name);
    println!("{}", "=".repeat(78));
    println!(
        "{:<4} {:<22} {:>3} {:>3} {:>3} {:>3} {:>5} {:>5} {:>5} {:>5}",
        "Pos", "Team", "P", "W", "L", "T", "PF", "PA", "Diff", "Pts"
    );
    println!("{}", "-".repeat(78));
    for (pos, team) in standings.iter().enumerate() {
        println!(
            "{:<4} {:<22} {:>3} {:>3} {:>3} {:>3} {:>5} {:>5} {:>5} {:>5}",
            pos + 1,
            team.name,
            team.played,
            team.won,
            team.lost,
            team.tied,
            team.points_for,
            team.points_against,
            team.point_differential(),
            team.league_points
        );
    }
}

fn print_fixture(championship: &Championship, category_name: &str) {
    let Some(category) = championship.category(category_name) else {
        println!("  category '{}' not found", category_name);
        return;
    };

    println!("\n{}", "=".repeat(78));
    println!("FIXTURE - {}", category_name);
    println!("{}", "=".repeat(78));

    let max_round = category.matches().iter().map(|m| m.round).max().unwrap_or(0);
    for round in 1..=max_round {
        println!("\nRound {}:", round);
        for entry in category.matches_in_round(round) {
            match (entry.score_a, entry.score_b) {
                (Some(a), Some(b)) => {
                    println!("  {:<20} {:>3} - {:<3} {:<20} ({:?})", entry.team_a, a, b, entry.team_b, entry.leg)
                }
                _ => println!("  {:<20}   -     {:<20} ({:?})", entry.team_a, entry.team_b, entry.leg),
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Basketball championship management demo");

    let mut championship = Championship::new("Regional Championship 2026", 1, 2, 0);

    // One auto-named category, one with explicit teams and its own weights.
    championship.add_category("TC", 4, None, None)?;
    let seniors: Vec<String> =
        ["Veterans A", "Veterans B", "Veterans C"].iter().map(|s| s.to_string()).collect();
    championship.add_category_with_teams("Senior", &seniors, Some(3), None)?;

    print_fixture(&championship, "TC");

    // Register every round 1 result, then one from round 2.
    let round_one: Vec<(String, String)> = championship
        .category("TC")
        .ok_or("TC category missing")?
        .matches_in_round(1)
        .iter()
        .map(|m| (m.team_a.clone(), m.team_b.clone()))
        .collect();

    println!("\nRegistering results...");
    for (i, (team_a, team_b)) in round_one.iter().enumerate() {
        let score_a = 80 + (i as u32) * 5;
        let score_b = 70 + (i as u32) * 3;
        championship.register_match_result("TC", team_a, team_b, 1, score_a, score_b, None)?;
        println!("  {} {} - {} {}", team_a, score_a, score_b, team_b);
    }
    championship.register_match_result("TC", "TC Team 3", "TC Team 1", 2, 85, 78, None)?;
    println!("  TC Team 3 85 - 78 TC Team 1");

    print_standings(&mut championship, "TC");

    println!("\nApplying a 2 point penalty to 'TC Team 1'...");
    championship.apply_penalty("TC", "TC Team 1", 2)?;
    print_standings(&mut championship, "TC");

    println!("\nChampionship JSON export:");
    println!("{}", serde_json::to_string_pretty(&championship.export())?);

    Ok(())
}
