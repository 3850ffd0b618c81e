#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use bingo_core::catalogue::{Boss, Category, Metric, Skill, Subcategory};
use bingo_core::logging_facility::test_capture::init_test_capture;
use bingo_core::model::{Roster, Team};
use bingo_core::mvp::{collect_deltas, get_all_mvps, get_specific_mvps, RankingMetrics, Standing};
use bingo_core::schema::{EVENT_END, EVENT_START, FIELD_RUN_ID};
use bingo_core::store::MemorySnapshotStore;
use common::{boss_kills, skill_xp};

const ZULRAH: Subcategory = Subcategory::Boss(Boss::Zulrah);

fn team(name: &str, members: &[&str]) -> Team {
    Team::new(name, members.iter().map(|m| m.to_string()).collect())
}

fn roster(teams: Vec<Team>) -> Roster {
    Roster::new(teams).unwrap()
}

fn zulrah_store(entries: &[(&str, &str, i64, i64)]) -> MemorySnapshotStore {
    let mut store = MemorySnapshotStore::new();
    for (team, participant, before, after) in entries {
        store.insert_pair(
            *team,
            *participant,
            boss_kills(&[(Boss::Zulrah, *before)]),
            boss_kills(&[(Boss::Zulrah, *after)]),
        );
    }
    store
}

#[test]
fn test_best_of_each_team_ranked_across_teams() {
    let roster = roster(vec![team("Team A", &["P1", "P2"]), team("Team B", &["P3"])]);
    let store = zulrah_store(&[
        ("Team A", "P1", 0, 50),
        ("Team A", "P2", 0, 80),
        ("Team B", "P3", 0, 30),
    ]);

    let report = get_all_mvps(&roster, &RankingMetrics::default(), &store);

    assert_eq!(report.names(ZULRAH), vec!["P2", "P3"]);
    assert_eq!(report.event_mvp(ZULRAH).unwrap().difference, 80);
    assert_eq!(report.standing("Team A", "P2", ZULRAH), Some(Standing::EventMvp));
    assert_eq!(report.standing("Team B", "P3", ZULRAH), Some(Standing::TeamMvp));
    assert_eq!(report.standing("Team A", "P1", ZULRAH), None);
}

#[test]
fn test_untracked_before_does_not_inflate_ranking() {
    // P1 would win with 21 if the sentinel were subtracted
    let roster = roster(vec![team("Team A", &["P1"]), team("Team B", &["P2"])]);
    let store = zulrah_store(&[("Team A", "P1", -1, 20), ("Team B", "P2", 0, 20)]);

    let report = get_all_mvps(&roster, &RankingMetrics::default(), &store);

    let entries = report.entries(ZULRAH);
    assert_eq!(entries[0].difference, 20);
    assert_eq!(entries[1].difference, 20);
    assert_eq!(entries[0].team, "Team A");
}

#[test]
fn test_every_catalogue_subcategory_has_a_list() {
    let roster = roster(vec![team("Team A", &["P1"])]);
    let store = zulrah_store(&[("Team A", "P1", 0, 1)]);

    let report = get_all_mvps(&roster, &RankingMetrics::default(), &store);

    assert_eq!(report.skills.len(), Skill::ALL.len());
    assert_eq!(report.bosses.len(), Boss::ALL.len());
    assert!(report.entries(Subcategory::Boss(Boss::Obor)).is_empty());
    assert_eq!(report.leaders().len(), 1);
}

#[test]
fn test_nobody_progressed_gives_empty_lists() {
    let roster = roster(vec![team("Team A", &["P1"]), team("Team B", &["P2"])]);
    let store = zulrah_store(&[("Team A", "P1", 10, 10), ("Team B", "P2", 10, 9)]);

    let report = get_all_mvps(&roster, &RankingMetrics::default(), &store);

    assert!(report.entries(ZULRAH).is_empty());
    assert!(report.leaders().is_empty());
}

#[test]
fn test_team_without_members_has_no_representative() {
    let roster = roster(vec![team("Team A", &[]), team("Team B", &["P2"])]);
    let store = zulrah_store(&[("Team B", "P2", 0, 3)]);

    let report = get_all_mvps(&roster, &RankingMetrics::default(), &store);

    assert_eq!(report.names(ZULRAH), vec!["P2"]);
}

#[test]
fn test_missing_snapshots_skip_participant_and_continue() {
    let roster = roster(vec![team("Team A", &["P1", "Ghost"]), team("Team B", &["P3"])]);
    let store = zulrah_store(&[("Team A", "P1", 0, 5), ("Team B", "P3", 0, 9)]);

    let report = get_all_mvps(&roster, &RankingMetrics::default(), &store);

    assert_eq!(report.names(ZULRAH), vec!["P3", "P1"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].participant, "Ghost");
    assert_eq!(report.skipped[0].code, "ERR_NOT_FOUND");
}

#[test]
fn test_same_participant_id_in_two_teams() {
    let roster = roster(vec![team("Team A", &["P1"]), team("Team B", &["P1"])]);
    let store = zulrah_store(&[("Team A", "P1", 0, 4), ("Team B", "P1", 0, 6)]);

    let report = get_all_mvps(&roster, &RankingMetrics::default(), &store);

    let teams: Vec<_> = report.entries(ZULRAH).iter().map(|e| e.team.as_str()).collect();
    assert_eq!(teams, vec!["Team B", "Team A"]);
    assert_eq!(report.standing("Team A", "P1", ZULRAH), Some(Standing::TeamMvp));
}

#[test]
fn test_ranking_metric_override_is_used() {
    let roster = roster(vec![team("Team A", &["P1"]), team("Team B", &["P2"])]);
    let mut store = MemorySnapshotStore::new();
    store.insert_pair(
        "Team A",
        "P1",
        skill_xp(&[(Skill::Mining, 100)]),
        skill_xp(&[(Skill::Mining, 900)]),
    );
    store.insert_pair(
        "Team B",
        "P2",
        skill_xp(&[(Skill::Mining, 100)]),
        skill_xp(&[(Skill::Mining, 200)]),
    );
    let mining = Subcategory::Skill(Skill::Mining);

    let by_xp = get_all_mvps(&roster, &RankingMetrics::default(), &store);
    assert_eq!(by_xp.names(mining), vec!["P1", "P2"]);

    // common::skill_xp keeps level constant, so nobody gains a level
    let by_level = RankingMetrics::default()
        .with_override(Category::Skills, Metric::Level)
        .unwrap();
    let report = get_all_mvps(&roster, &by_level, &store);
    assert!(report.entries(mining).is_empty());
}

#[test]
fn test_specific_mvps_reuse_precomputed_deltas() {
    let roster = roster(vec![team("Team A", &["P1", "P2"]), team("Team B", &["P3"])]);
    let store = zulrah_store(&[
        ("Team A", "P1", 0, 50),
        ("Team A", "P2", 0, 80),
        ("Team B", "P3", 0, 30),
    ]);

    let deltas = collect_deltas(&roster, &store);
    let mvps = get_specific_mvps(&deltas, ZULRAH, Metric::Kills);

    assert_eq!(mvps.len(), 2);
    assert_eq!((mvps[0].participant.as_str(), mvps[0].difference), ("P2", 80));
    assert_eq!((mvps[1].participant.as_str(), mvps[1].difference), ("P3", 30));
}

#[test]
fn test_ranking_pass_owns_op_boundary() {
    let capture = init_test_capture();
    let roster = roster(vec![team("Boundary Team", &["P1"])]);
    let store = zulrah_store(&[("Boundary Team", "P1", 0, 1)]);

    let report = get_all_mvps(&roster, &RankingMetrics::default(), &store);

    let run_id = report.run_id.as_str().to_string();
    let ours = |event: &str| {
        capture.count_events(|e| {
            e.is("get_all_mvps", event) && e.field(FIELD_RUN_ID) == Some(run_id.as_str())
        })
    };
    assert_eq!(ours(EVENT_START), 1);
    assert_eq!(ours(EVENT_END), 1);
}
