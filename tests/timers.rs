use track_pace::timer::{GroupId, Phase, TimerGroup, TimerMode};
use track_pace::TimerGroupCollection;

#[test]
fn start_lap_lap_stop_produces_three_segments() {
    let mut group = TimerGroup::new(GroupId(7), "Intervals");
    group.start(0);
    group.lap(90_000);
    group.lap(150_000);
    group.stop(240_000);

    let phases: Vec<Phase> = group.history().iter().map(|s| s.phase).collect();
    assert_eq!(phases, vec![Phase::Run, Phase::Rest, Phase::Run]);

    let rows = group.history_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].run.map(|s| s.duration_ms), Some(90_000));
    assert_eq!(rows[0].rest.map(|s| s.duration_ms), Some(60_000));
    assert_eq!(rows[1].run.map(|s| s.duration_ms), Some(90_000));
    assert_eq!(rows[1].rest, None);
}

#[test]
fn idle_group_ignores_lap_stop_and_empty_reset() {
    let mut group = TimerGroup::new(GroupId(1), "Solo");
    assert!(group.lap(10).is_none());
    assert!(group.stop(10).is_none());
    assert!(!group.reset());
    assert_eq!(group.mode(), TimerMode::Idle);
}

#[test]
fn start_all_leaves_running_groups_alone() {
    let mut groups = TimerGroupCollection::with_groups(2);
    groups.get_mut(GroupId(1)).unwrap().start(0);

    assert_eq!(groups.start_all_idle(5_000), 1);

    let first = groups.get_mut(GroupId(1)).unwrap();
    assert_eq!(first.stop(6_000).unwrap().duration_ms, 6_000);
    let second = groups.get_mut(GroupId(2)).unwrap();
    assert_eq!(second.stop(6_000).unwrap().duration_ms, 1_000);
}
