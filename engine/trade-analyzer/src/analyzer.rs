use crate::config::AnalyzerConfig;
use crate::diff;
use crate::error::{Result, TradeAnalyzerError};
use crate::roster::RosterEvaluator;
use crate::types::{RosterEvaluation, TeamTradeView, TradeProposal, TradeResult, Verdict};
use chrono::Utc;
use league_registry::{League, Player};
use tracing::{debug, info};
use valuation_engine::{ValueSource, ValuedPlayer};

/// Analyzes proposed trades between two teams in a league.
///
/// The league is read-only input; analysis derives fresh roster snapshots
/// for the after state and never mutates team data.
pub struct TradeAnalyzer {
    config: AnalyzerConfig,
    evaluator: RosterEvaluator,
    source: ValueSource,
}

impl TradeAnalyzer {
    /// Create a new trade analyzer
    pub fn new(config: AnalyzerConfig, source: ValueSource) -> Self {
        let evaluator = RosterEvaluator::new(config.clone(), source.clone());
        Self { config, evaluator, source }
    }

    /// Analyze a proposed trade from the proposing team's perspective.
    ///
    /// Fails only when a referenced team is missing or both sides name the
    /// same team. Offered player IDs that match nothing in the league are
    /// dropped from the traded set.
    pub async fn analyze(&self, league: &League, proposal: &TradeProposal) -> Result<TradeResult> {
        let from_team = league
            .team(&proposal.from_team_id)
            .map_err(|_| TradeAnalyzerError::TeamNotFound(proposal.from_team_id.clone()))?;
        let to_team = league
            .team(&proposal.to_team_id)
            .map_err(|_| TradeAnalyzerError::TeamNotFound(proposal.to_team_id.clone()))?;

        if from_team.team_id == to_team.team_id {
            return Err(TradeAnalyzerError::SameTeam(from_team.team_id.clone()));
        }

        info!(
            "Analyzing trade: {} sends {} player(s), {} sends {} player(s)",
            from_team.name,
            proposal.offer_from_ids.len(),
            to_team.name,
            proposal.offer_to_ids.len()
        );

        let outgoing = resolve_offer(league, &proposal.offer_from_ids);
        let incoming = resolve_offer(league, &proposal.offer_to_ids);

        let from_before = self.evaluator.evaluate(&from_team.roster).await;
        let to_before = self.evaluator.evaluate(&to_team.roster).await;

        let from_after_roster = apply_swap(&from_team.roster, &outgoing, &incoming);
        let to_after_roster = apply_swap(&to_team.roster, &incoming, &outgoing);

        let from_after = self.evaluator.evaluate(&from_after_roster).await;
        let to_after = self.evaluator.evaluate(&to_after_roster).await;

        // Offered players are revalued independently rather than read back
        // from the roster evaluations.
        let sent = self.resolve_all(&outgoing).await;
        let received = self.resolve_all(&incoming).await;

        let offer_from_value: i64 = sent.iter().map(|p| p.value).sum();
        let offer_to_value: i64 = received.iter().map(|p| p.value).sum();
        let value_delta = offer_to_value - offer_from_value;
        let scale = self.fairness_scale(offer_from_value, offer_to_value);

        let verdict = if value_delta >= scale {
            Verdict::UserGainsValue
        } else if value_delta <= -scale {
            Verdict::UserLosesValue
        } else {
            Verdict::Fair
        };

        let rationale = self.build_rationale(value_delta, scale, &from_before, &from_after);

        info!(
            "Trade verdict for {}: {:?} (delta {}, scale {})",
            from_team.name, verdict, value_delta, scale
        );

        Ok(TradeResult {
            offer_from_value,
            offer_to_value,
            value_delta,
            verdict,
            rationale,
            from_team: TeamTradeView {
                team_id: from_team.team_id.clone(),
                team_name: from_team.name.clone(),
                before: from_before,
                after: from_after,
            },
            to_team: TeamTradeView {
                team_id: to_team.team_id.clone(),
                team_name: to_team.name.clone(),
                before: to_before,
                after: to_after,
            },
            sent,
            received,
            generated_at: Utc::now(),
        })
    }

    /// Evaluate a single team's roster
    pub async fn roster_insight(&self, league: &League, team_id: &str) -> Result<RosterEvaluation> {
        let team = league
            .team(team_id)
            .map_err(|_| TradeAnalyzerError::TeamNotFound(team_id.to_string()))?;

        Ok(self.evaluator.evaluate(&team.roster).await)
    }

    async fn resolve_all(&self, players: &[Player]) -> Vec<ValuedPlayer> {
        let mut valued = Vec::with_capacity(players.len());
        for player in players {
            valued.push(self.source.resolve(player).await);
        }
        valued
    }

    /// Adaptive fairness threshold: a fraction of the bigger side of the
    /// deal, floored for small trades
    fn fairness_scale(&self, offer_from_value: i64, offer_to_value: i64) -> i64 {
        let largest = offer_from_value.max(offer_to_value).max(1);
        let scaled = (self.config.fairness_ratio * largest as f64).round() as i64;
        scaled.max(self.config.fairness_floor)
    }

    /// Ordered rationale: the value-delta sentence first, then positional
    /// shifts on the proposing team's side.
    ///
    /// The delta sentence branches on the same inclusive comparisons as the
    /// verdict, so wording and verdict always agree at the boundary.
    fn build_rationale(
        &self,
        value_delta: i64,
        scale: i64,
        from_before: &RosterEvaluation,
        from_after: &RosterEvaluation,
    ) -> Vec<String> {
        let mut rationale = Vec::new();

        if value_delta >= scale {
            rationale.push(format!("You gain about {value_delta} points of value in this deal."));
        } else if value_delta <= -scale {
            rationale
                .push(format!("You give up about {} points of value in this deal.", -value_delta));
        } else {
            rationale.push("The deal is close to even in raw value.".to_string());
        }

        let shifts = diff::shift_notes(&self.config, from_before, from_after);
        if shifts.is_empty() {
            rationale.push("No major positional shifts on your side.".to_string());
        } else {
            rationale.extend(shifts);
        }

        rationale
    }
}

/// Resolve offered player IDs against the whole league pool; unknown IDs
/// are dropped, not errors
fn resolve_offer(league: &League, player_ids: &[String]) -> Vec<Player> {
    let mut players = Vec::with_capacity(player_ids.len());
    for player_id in player_ids {
        match league.find_player(player_id) {
            Ok(player) => players.push(player.clone()),
            Err(_) => debug!("Dropping unknown offered player ID: {}", player_id),
        }
    }
    players
}

/// New roster snapshot: outgoing players removed, incoming appended
fn apply_swap(roster: &[Player], outgoing: &[Player], incoming: &[Player]) -> Vec<Player> {
    roster
        .iter()
        .filter(|p| !outgoing.iter().any(|out| out.player_id == p.player_id))
        .chain(incoming.iter())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_registry::{Position, Team};
    use valuation_engine::ValuationConfig;

    /// Two one-player teams with controlled base values: the proposer sends
    /// an RB, the other side sends a WR.
    fn league_and_analyzer(rb_base: i64, wr_base: i64) -> (League, TradeAnalyzer) {
        let mut valuation = ValuationConfig::default();
        valuation.base_values.insert(Position::RB, rb_base);
        valuation.base_values.insert(Position::WR, wr_base);

        let league = League::new(vec![
            Team::new("team-a", "Alpha", vec![Player::new("a1", "Runner A", Position::RB)]),
            Team::new("team-b", "Bravo", vec![Player::new("b1", "Catcher B", Position::WR)]),
        ]);
        let analyzer = TradeAnalyzer::new(AnalyzerConfig::default(), ValueSource::new(valuation));

        (league, analyzer)
    }

    fn one_for_one() -> TradeProposal {
        TradeProposal {
            from_team_id: "team-a".to_string(),
            to_team_id: "team-b".to_string(),
            offer_from_ids: vec!["a1".to_string()],
            offer_to_ids: vec!["b1".to_string()],
        }
    }

    #[tokio::test]
    async fn test_near_even_swap_is_fair() {
        let (league, analyzer) = league_and_analyzer(80, 82);

        let result = analyzer.analyze(&league, &one_for_one()).await.unwrap();

        assert_eq!(result.offer_from_value, 80);
        assert_eq!(result.offer_to_value, 82);
        assert_eq!(result.value_delta, 2);
        assert_eq!(result.verdict, Verdict::Fair);
        assert_eq!(result.rationale[0], "The deal is close to even in raw value.");
    }

    #[tokio::test]
    async fn test_lopsided_trade_loses_value() {
        let (league, analyzer) = league_and_analyzer(90, 40);

        let result = analyzer.analyze(&league, &one_for_one()).await.unwrap();

        // scale = max(20, round(0.12 * 90)) = 20; -50 <= -20
        assert_eq!(result.value_delta, -50);
        assert_eq!(result.verdict, Verdict::UserLosesValue);
        assert_eq!(result.rationale[0], "You give up about 50 points of value in this deal.");
    }

    #[tokio::test]
    async fn test_delta_exactly_at_scale_is_a_gain() {
        // delta = 20, scale = max(20, round(0.12 * 120) = 14) = 20
        let (league, analyzer) = league_and_analyzer(100, 120);

        let result = analyzer.analyze(&league, &one_for_one()).await.unwrap();

        assert_eq!(result.value_delta, 20);
        assert_eq!(result.verdict, Verdict::UserGainsValue);
        assert_eq!(result.rationale[0], "You gain about 20 points of value in this deal.");
    }

    #[tokio::test]
    async fn test_missing_team_aborts_with_no_result() {
        let (league, analyzer) = league_and_analyzer(80, 82);
        let mut proposal = one_for_one();
        proposal.to_team_id = "team-z".to_string();

        let err = analyzer.analyze(&league, &proposal).await.unwrap_err();
        assert!(matches!(err, TradeAnalyzerError::TeamNotFound(id) if id == "team-z"));
    }

    #[tokio::test]
    async fn test_same_team_on_both_sides_rejected() {
        let (league, analyzer) = league_and_analyzer(80, 82);
        let mut proposal = one_for_one();
        proposal.to_team_id = "team-a".to_string();

        let err = analyzer.analyze(&league, &proposal).await.unwrap_err();
        assert!(matches!(err, TradeAnalyzerError::SameTeam(id) if id == "team-a"));
    }

    #[tokio::test]
    async fn test_unknown_offered_ids_are_dropped() {
        let (league, analyzer) = league_and_analyzer(80, 82);
        let mut proposal = one_for_one();
        proposal.offer_from_ids.push("ghost".to_string());

        let result = analyzer.analyze(&league, &proposal).await.unwrap();

        assert_eq!(result.sent.len(), 1);
        assert_eq!(result.offer_from_value, 80);
    }

    #[tokio::test]
    async fn test_swapping_perspective_negates_delta() {
        let (league, analyzer) = league_and_analyzer(90, 40);

        let forward = analyzer.analyze(&league, &one_for_one()).await.unwrap();
        let reversed = TradeProposal {
            from_team_id: "team-b".to_string(),
            to_team_id: "team-a".to_string(),
            offer_from_ids: vec!["b1".to_string()],
            offer_to_ids: vec!["a1".to_string()],
        };
        let backward = analyzer.analyze(&league, &reversed).await.unwrap();

        assert_eq!(forward.value_delta, -backward.value_delta);
        assert_eq!(forward.from_team.team_id, backward.to_team.team_id);
        assert_eq!(forward.verdict, Verdict::UserLosesValue);
        assert_eq!(backward.verdict, Verdict::UserGainsValue);
    }

    #[tokio::test]
    async fn test_after_rosters_swap_players_without_mutating_league() {
        let (league, analyzer) = league_and_analyzer(80, 82);

        let result = analyzer.analyze(&league, &one_for_one()).await.unwrap();

        let from_after_ids: Vec<&str> =
            result.from_team.after.players.iter().map(|p| p.player_id.as_str()).collect();
        assert_eq!(from_after_ids, vec!["b1"]);

        let to_after_ids: Vec<&str> =
            result.to_team.after.players.iter().map(|p| p.player_id.as_str()).collect();
        assert_eq!(to_after_ids, vec!["a1"]);

        // Original league untouched
        assert_eq!(league.team("team-a").unwrap().roster[0].player_id, "a1");
        assert_eq!(league.team("team-b").unwrap().roster[0].player_id, "b1");
    }

    #[tokio::test]
    async fn test_rationale_reports_positional_shifts() {
        // Sending the only RB (90) for a WR empties the RB column.
        let (league, analyzer) = league_and_analyzer(90, 85);

        let result = analyzer.analyze(&league, &one_for_one()).await.unwrap();

        assert!(result
            .rationale
            .iter()
            .any(|line| line == "RB starter strength drops by 90."));
        assert!(!result.rationale.iter().any(|line| line.contains("No major positional shifts")));
    }

    #[tokio::test]
    async fn test_rationale_defaults_when_nothing_shifts() {
        // Equal-value same-position swap: scores do not move.
        let league = League::new(vec![
            Team::new("team-a", "Alpha", vec![Player::new("a1", "Runner A", Position::RB)]),
            Team::new("team-b", "Bravo", vec![Player::new("b1", "Runner B", Position::RB)]),
        ]);
        let analyzer = TradeAnalyzer::new(
            AnalyzerConfig::default(),
            ValueSource::new(ValuationConfig::default()),
        );
        let result = analyzer.analyze(&league, &one_for_one()).await.unwrap();

        assert_eq!(result.value_delta, 0);
        assert_eq!(
            result.rationale,
            vec![
                "The deal is close to even in raw value.".to_string(),
                "No major positional shifts on your side.".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_roster_insight() {
        let (league, analyzer) = league_and_analyzer(80, 82);

        let insight = analyzer.roster_insight(&league, "team-a").await.unwrap();
        assert_eq!(insight.total_value, 80);
        assert!(insight.scores.contains_key(&Position::RB));

        let err = analyzer.roster_insight(&league, "team-z").await.unwrap_err();
        assert!(matches!(err, TradeAnalyzerError::TeamNotFound(_)));
    }

    #[tokio::test]
    async fn test_trade_result_round_trips_through_json() {
        let (league, analyzer) = league_and_analyzer(90, 40);

        let result = analyzer.analyze(&league, &one_for_one()).await.unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: TradeResult = serde_json::from_str(&json).unwrap();

        assert_eq!(back.value_delta, result.value_delta);
        assert_eq!(back.verdict, result.verdict);
        assert_eq!(back.rationale, result.rationale);
        assert_eq!(back.from_team.before.total_value, result.from_team.before.total_value);
        assert_eq!(back.sent.len(), 1);
    }
}
