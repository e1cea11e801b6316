//! Unit tests for ranking emission

use super::*;
use crate::{
    matching::{NameIndex, PlayerMatcher},
    sleeper::types::PlayerRecord,
    PlayerId,
};
use std::cell::RefCell;
use std::collections::HashMap;

/// Resolver backed by a fixed name -> id table that records every query.
struct RecordingResolver {
    records: HashMap<String, PlayerRecord>,
    queries: RefCell<Vec<String>>,
}

impl RecordingResolver {
    fn new(known: &[(&str, &str)]) -> Self {
        let records = known
            .iter()
            .map(|(name, id)| {
                (
                    name.to_string(),
                    PlayerRecord {
                        id: PlayerId::new(*id),
                        full_name: Some(name.to_string()),
                        ..Default::default()
                    },
                )
            })
            .collect();
        Self {
            records,
            queries: RefCell::new(Vec::new()),
        }
    }

    fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl PlayerResolver for RecordingResolver {
    fn resolve_player(&self, name: &str) -> Option<&PlayerRecord> {
        self.queries.borrow_mut().push(name.to_string());
        self.records.get(name)
    }
}

fn config(toml: &str) -> RankingsConfig {
    RankingsConfig::from_toml_str(toml).unwrap()
}

#[test]
fn test_truncation_happens_before_matching() {
    let cfg = config(
        r#"
        [limits]
        RB = 2

        [rankings]
        RB = ["One", "Two", "Three", "Four", "Five"]
        "#,
    );
    let resolver = RecordingResolver::new(&[("One", "1")]);

    let report = emit_rankings(&cfg, &resolver);

    assert_eq!(resolver.queries(), vec!["One", "Two"]);
    assert_eq!(report.statement_count(), 1);
    assert_eq!(
        report.unmatched,
        vec![Unmatched {
            position: Position::RB,
            name: "Two".to_string()
        }]
    );
    assert!(!report.to_sql().contains("Three"));
}

#[test]
fn test_rank_is_index_within_truncated_list() {
    let cfg = config(
        r#"
        [limits]
        WR = 3

        [rankings]
        WR = ["Missing", "Second", "Third", "Fourth"]
        "#,
    );
    let resolver = RecordingResolver::new(&[("Second", "2"), ("Third", "3"), ("Fourth", "4")]);

    let report = emit_rankings(&cfg, &resolver);
    let ranks: Vec<(String, usize)> = report
        .statements()
        .map(|s| (s.player_id.to_string(), s.rank))
        .collect();

    assert_eq!(ranks, vec![("2".to_string(), 2), ("3".to_string(), 3)]);
}

#[test]
fn test_positions_emitted_in_fixed_order() {
    let cfg = config(
        r#"
        [rankings]
        TE = ["T"]
        QB = ["Q"]
        WR = ["W"]
        RB = ["R"]
        "#,
    );
    let resolver = RecordingResolver::new(&[]);

    let report = emit_rankings(&cfg, &resolver);
    let order: Vec<Position> = report.sections.iter().map(|s| s.position).collect();

    assert_eq!(order, Position::EMIT_ORDER.to_vec());
    assert_eq!(resolver.queries(), vec!["R", "W", "Q", "T"]);
    assert_eq!(report.unmatched.len(), 4);
}

#[test]
fn test_unmatched_name_recorded_once_with_original_spelling() {
    let cfg = config(
        r#"
        [rankings]
        QB = ["  Nobody McNoname "]
        "#,
    );
    let resolver = RecordingResolver::new(&[]);

    let report = emit_rankings(&cfg, &resolver);

    assert_eq!(report.unmatched.len(), 1);
    assert_eq!(report.unmatched[0].position, Position::QB);
    assert_eq!(report.unmatched[0].name, "  Nobody McNoname ");
    assert_eq!(report.statement_count(), 0);
    assert!(!report.is_fully_matched());
}

#[test]
fn test_zero_matches_still_wrapped_in_transaction() {
    let report = emit_rankings(&RankingsConfig::default(), &RecordingResolver::new(&[]));

    let sql = report.to_sql();
    assert_eq!(
        sql,
        "-- SQL to add new rankings as contribution to existing average rankings for 2025 preseason\n\
         BEGIN;\n\
         \n\
         -- RB average rankings (adding new contribution)\n\
         \n\
         -- WR average rankings (adding new contribution)\n\
         \n\
         -- QB average rankings (adding new contribution)\n\
         \n\
         -- TE average rankings (adding new contribution)\n\
         \n\
         COMMIT;"
    );
    assert!(report.is_fully_matched());
}

#[test]
fn test_sql_layout_with_statements() {
    let cfg = config(
        r#"
        season = 2024
        ranking_type = "weekly"

        [rankings]
        QB = ["Alpha", "Beta"]
        "#,
    );
    let resolver = RecordingResolver::new(&[("Alpha", "11"), ("Beta", "12")]);

    let sql = emit_rankings(&cfg, &resolver).to_sql();
    let lines: Vec<&str> = sql.lines().collect();

    assert_eq!(
        lines[0],
        "-- SQL to add new rankings as contribution to existing average rankings for 2024 weekly"
    );
    assert_eq!(lines[1], "BEGIN;");
    let qb_header = lines
        .iter()
        .position(|l| *l == "-- QB average rankings (adding new contribution)")
        .unwrap();
    assert!(lines[qb_header + 1].contains("(average_rank + 1) / 2.0"));
    assert!(lines[qb_header + 1].contains("player_id = '11'"));
    assert!(lines[qb_header + 2].contains("(average_rank + 2) / 2.0"));
    assert!(lines[qb_header + 2].contains("type = 'weekly'"));
    assert_eq!(lines[qb_header + 3], "");
    assert_eq!(*lines.last().unwrap(), "COMMIT;");
    assert!(!sql.ends_with('\n'));
}

#[test]
fn test_end_to_end_with_real_matcher() {
    let index = NameIndex::build(vec![PlayerRecord {
        id: PlayerId::new("999"),
        full_name: Some("Alice Example".to_string()),
        first_name: Some("Alice".to_string()),
        last_name: Some("Example".to_string()),
        status: Some("Active".to_string()),
        team: Some("SEA".to_string()),
        position: Some("QB".to_string()),
    }]);
    let matcher = PlayerMatcher::new(index);
    let cfg = config(
        r#"
        [rankings]
        QB = ["Alice Example"]
        "#,
    );

    let report = emit_rankings(&cfg, &matcher);
    let statements: Vec<String> = report.statements().map(ToString::to_string).collect();

    assert_eq!(
        statements,
        vec![
            "UPDATE player_average_rankings SET average_rank = (average_rank + 1) / 2.0, \
             total_rankings = total_rankings + 1, last_updated = NOW() \
             WHERE player_id = '999' AND position = 'QB' AND season = 2025 \
             AND type = 'preseason' AND week IS NULL;"
                .to_string()
        ]
    );
    assert!(report.is_fully_matched());
}
