use league_registry::{League, LeagueData, Player, Position, Team};
use trade_analyzer::{AnalyzerConfig, TradeAnalyzer, TradeProposal};
use tracing::{info, Level};
use valuation_engine::{ValuationConfig, ValueSource};

fn demo_league() -> League {
    League::new(vec![
        Team::new(
            "team-1",
            "Gridiron Gurus",
            vec![
                Player::new("p1", "Lamar Jackson", Position::QB),
                Player::new("p2", "Bijan Robinson", Position::RB),
                Player::new("p3", "Kyren Williams", Position::RB),
                Player::new("p4", "Ja'Marr Chase", Position::WR),
                Player::new("p5", "Drake London", Position::WR),
                Player::new("p6", "Chris Godwin", Position::WR),
                Player::new("p7", "Trey McBride", Position::TE),
                Player::new("p8", "Steelers D/ST", Position::DST),
                Player::new("p9", "Justin Tucker", Position::K),
            ],
        ),
        Team::new(
            "team-2",
            "End Zone Elite",
            vec![
                Player::new("p10", "Jayden Daniels", Position::QB),
                Player::new("p11", "Saquon Barkley", Position::RB),
                Player::new("p12", "Christian McCaffrey", Position::RB),
                Player::new("p13", "Justin Jefferson", Position::WR),
                Player::new("p14", "Ladd McConkey", Position::WR),
                Player::new("p15", "Cooper Kupp", Position::WR),
                Player::new("p16", "T.J. Hockenson", Position::TE),
                Player::new("p17", "Bills D/ST", Position::DST),
                Player::new("p18", "Brandon Aubrey", Position::K),
            ],
        ),
    ])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Testing TradeAnalyzer...");

    // Load a league file when given one, otherwise use the built-in demo league
    let league = match std::env::args().nth(1) {
        Some(path) => LeagueData::load_from_file(&path).await?.league,
        None => demo_league(),
    };

    let source = ValueSource::new(ValuationConfig::from_env()?).with_cache();
    let analyzer = TradeAnalyzer::new(AnalyzerConfig::from_env()?, source);

    // Roster insight for each team
    for team in league.teams() {
        let insight = analyzer.roster_insight(&league, &team.team_id).await?;
        println!("\n{} (total value {})", team.name, insight.total_value);
        println!("Pos  Starters  Depth  Count");
        println!("---------------------------");
        for (position, score) in &insight.scores {
            println!(
                "{:4} {:8} {:6} {:6}",
                position.code(),
                score.starter_score,
                score.depth_score,
                score.count
            );
        }
        if !insight.strengths.is_empty() {
            println!("Strengths:  {:?}", insight.strengths);
        }
        if !insight.weaknesses.is_empty() {
            println!("Weaknesses: {:?}", insight.weaknesses);
        }
    }

    // Analyze a sample 2-for-1 trade
    let proposal = TradeProposal {
        from_team_id: "team-1".to_string(),
        to_team_id: "team-2".to_string(),
        offer_from_ids: vec!["p2".to_string(), "p6".to_string()],
        offer_to_ids: vec!["p11".to_string()],
    };

    let result = analyzer.analyze(&league, &proposal).await?;

    println!("\nTrade: {} -> {}", result.from_team.team_name, result.to_team.team_name);
    println!(
        "Sending {} ({}), receiving {} ({})",
        result.sent.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", "),
        result.offer_from_value,
        result.received.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", "),
        result.offer_to_value
    );
    println!("Verdict: {:?} (delta {})", result.verdict, result.value_delta);
    for line in &result.rationale {
        println!("  - {line}");
    }

    println!("\nFull result as JSON:");
    println!("{}", serde_json::to_string_pretty(&result)?);

    info!("TradeAnalyzer test completed successfully!");
    Ok(())
}
