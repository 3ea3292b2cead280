use crate::config::AnalyzerConfig;
use crate::types::RosterEvaluation;

/// Compare two evaluations of the same team and describe the meaningful
/// positional swings.
///
/// Positions are visited in the before-snapshot's reporting order; a
/// position missing from the after-snapshot reads as zero. A position can
/// produce both a starter note and a depth note.
pub fn shift_notes(
    config: &AnalyzerConfig,
    before: &RosterEvaluation,
    after: &RosterEvaluation,
) -> Vec<String> {
    let mut notes = Vec::new();

    for (position, before_score) in &before.scores {
        let after_score = after.scores.get(position).copied().unwrap_or_default();

        let starter_diff = after_score.starter_score - before_score.starter_score;
        let depth_diff = after_score.depth_score - before_score.depth_score;

        if starter_diff >= config.starter_shift_min {
            notes.push(format!("{position} starter strength improves by {starter_diff}."));
        } else if starter_diff <= -config.starter_shift_min {
            notes.push(format!("{position} starter strength drops by {}.", -starter_diff));
        }

        if depth_diff >= config.depth_shift_min {
            notes.push(format!("{position} depth improves by {depth_diff}."));
        } else if depth_diff <= -config.depth_shift_min {
            notes.push(format!("{position} depth thins by {}.", -depth_diff));
        }
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PositionScore;
    use league_registry::Position;
    use std::collections::BTreeMap;

    fn eval_with(scores: Vec<(Position, i64, i64)>) -> RosterEvaluation {
        let mut map = BTreeMap::new();
        for (position, starter_score, depth_score) in scores {
            map.insert(position, PositionScore { starter_score, depth_score, count: 3 });
        }
        RosterEvaluation {
            players: Vec::new(),
            total_value: 0,
            scores: map,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
        }
    }

    #[test]
    fn test_small_swings_stay_quiet() {
        let before = eval_with(vec![(Position::RB, 80, 60)]);
        let after = eval_with(vec![(Position::RB, 87, 69)]);

        // +7 starters and +9 depth are both under the reporting minimums.
        assert!(shift_notes(&AnalyzerConfig::default(), &before, &after).is_empty());
    }

    #[test]
    fn test_threshold_swings_are_reported() {
        let before = eval_with(vec![(Position::RB, 80, 60)]);
        let after = eval_with(vec![(Position::RB, 88, 50)]);

        let notes = shift_notes(&AnalyzerConfig::default(), &before, &after);
        assert_eq!(
            notes,
            vec![
                "RB starter strength improves by 8.".to_string(),
                "RB depth thins by 10.".to_string(),
            ]
        );
    }

    #[test]
    fn test_notes_follow_reporting_order() {
        let before = eval_with(vec![
            (Position::K, 10, 0),
            (Position::QB, 60, 0),
            (Position::WR, 75, 40),
        ]);
        let after = eval_with(vec![
            (Position::K, 30, 0),
            (Position::QB, 40, 0),
            (Position::WR, 90, 40),
        ]);

        let notes = shift_notes(&AnalyzerConfig::default(), &before, &after);
        assert_eq!(
            notes,
            vec![
                "QB starter strength drops by 20.".to_string(),
                "WR starter strength improves by 15.".to_string(),
                "K starter strength improves by 20.".to_string(),
            ]
        );
    }

    #[test]
    fn test_position_missing_after_reads_as_zero() {
        let before = eval_with(vec![(Position::QB, 60, 0)]);
        let after = eval_with(vec![]);

        let notes = shift_notes(&AnalyzerConfig::default(), &before, &after);
        assert_eq!(notes, vec!["QB starter strength drops by 60.".to_string()]);
    }
}
