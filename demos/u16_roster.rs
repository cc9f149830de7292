use chrono::{Days, Local};
use tracing_subscriber::EnvFilter;

use club_rota::{directory, group_by_team, planner, Degrade, CURRENT_SEASON};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!(
        "Directory connected: {}, planner connected: {}",
        directory::is_connected().await,
        planner::is_connected().await
    );

    let (players, error) = directory::list_u16_players(CURRENT_SEASON).await.degrade();
    if let Some(error) = error {
        eprintln!("Player list not available right now: {error}");
    }
    for (team, players) in group_by_team(players) {
        println!("{team}");
        for player in players {
            println!("  {}", player.full_name);
        }
    }

    let today = Local::now().date_naive();
    let horizon = today.checked_add_days(Days::new(28)).unwrap_or(today);
    let (matches, error) = planner::list_home_matches(today, horizon).await.degrade();
    if let Some(error) = error {
        eprintln!("Match list not available right now: {error}");
    }
    for m in matches {
        println!(
            "{} {} {} - {}",
            m.date,
            m.start_time.format("%H:%M"),
            m.home_team,
            m.away_team
        );
    }
}
