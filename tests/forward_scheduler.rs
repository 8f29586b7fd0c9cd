use std::error::Error;

use plandag::calendar::{duration_from_hours, working_hours_between};
use plandag::dag::{Scheduler, schedule};
use plandag_test_utils::builders::{PlanBuilder, TaskBuilder};
use plandag_test_utils::{at, init_tracing, monday_morning};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn chain_with_cross_author_wait() -> TestResult {
    init_tracing();

    let graph = PlanBuilder::new()
        .with_chain("sk", &[("A", 5.0), ("B", 10.0)])
        .with_task(TaskBuilder::new("C", "yh").hours(3.0).wait("A").build())
        .with_task(TaskBuilder::new("D", "yh").hours(2.0).build())
        .graph();

    let s = Scheduler::new(monday_morning()).schedule(graph);

    assert!(s.is_complete());
    assert_eq!(s.tasks.len(), 4);

    let a = s.get("A").ok_or("A")?;
    assert_eq!((a.start_date, a.end_date), (at(2026, 10, 19, 9, 0), at(2026, 10, 19, 16, 0)));

    let b = s.get("B").ok_or("B")?;
    assert_eq!((b.start_date, b.end_date), (at(2026, 10, 19, 16, 0), at(2026, 10, 21, 10, 0)));

    let c = s.get("C").ok_or("C")?;
    assert_eq!((c.start_date, c.end_date), (at(2026, 10, 19, 16, 0), at(2026, 10, 20, 10, 0)));

    let d = s.get("D").ok_or("D")?;
    assert_eq!((d.start_date, d.end_date), (at(2026, 10, 20, 10, 0), at(2026, 10, 20, 12, 0)));

    assert_eq!(s.project_end(), Some(at(2026, 10, 21, 10, 0)));

    Ok(())
}

#[test]
fn independent_chains_both_start_now() -> TestResult {
    let now = at(2026, 10, 21, 10, 15);
    let graph = PlanBuilder::new()
        .with_chain("sk", &[("a1", 2.0), ("a2", 2.0)])
        .with_chain("yh", &[("b1", 4.0)])
        .graph();

    let s = schedule(graph, now);

    assert_eq!(s.get("a1").ok_or("a1")?.start_date, now);
    assert_eq!(s.get("b1").ok_or("b1")?.start_date, now);
    assert_eq!(s.get("a2").ok_or("a2")?.start_date, s.get("a1").ok_or("a1")?.end_date);
    assert_eq!(s.wavefronts, 2);

    Ok(())
}

#[test]
fn explicit_wait_sets_start_to_predecessor_end() -> TestResult {
    // B is first in its own author's list but must wait for A.
    let graph = PlanBuilder::new()
        .with_task(TaskBuilder::new("A", "X").hours(6.5).build())
        .with_task(TaskBuilder::new("B", "Y").hours(1.0).wait("A").build())
        .graph();

    let s = schedule(graph, monday_morning());

    let a = s.get("A").ok_or("A")?;
    let b = s.get("B").ok_or("B")?;
    assert_eq!(b.start_date, a.end_date);
    assert_eq!(a.end_date, at(2026, 10, 19, 17, 30));

    Ok(())
}

#[test]
fn start_waits_for_the_latest_predecessor() -> TestResult {
    // Diamond: short and long branches join at `join`.
    let graph = PlanBuilder::new()
        .with_chain("p", &[("root", 1.0), ("short", 1.0)])
        .with_task(TaskBuilder::new("long", "q").hours(9.0).wait("root").build())
        .with_task(TaskBuilder::new("join", "r").hours(1.0).wait("short").wait("long").build())
        .graph();

    let s = schedule(graph, monday_morning());

    let long = s.get("long").ok_or("long")?;
    let join = s.get("join").ok_or("join")?;
    assert_eq!(join.start_date, long.end_date);
    assert!(join.start_date >= s.get("short").ok_or("short")?.end_date);

    Ok(())
}

#[test]
fn zero_duration_task_ends_when_it_starts() -> TestResult {
    let graph = PlanBuilder::new()
        .with_chain("sk", &[("a", 3.0), ("milestone", 0.0), ("b", 1.0)])
        .with_task(TaskBuilder::new("bad", "yh").hours(-4.0).wait("a").build())
        .graph();

    let s = schedule(graph, monday_morning());

    let a = s.get("a").ok_or("a")?;
    let m = s.get("milestone").ok_or("milestone")?;
    assert_eq!(m.start_date, a.end_date);
    assert_eq!(m.end_date, m.start_date);

    let bad = s.get("bad").ok_or("bad")?;
    assert_eq!(bad.start_date, a.end_date);
    assert_eq!(bad.end_date, bad.start_date);

    Ok(())
}

#[test]
fn cycles_are_reported_and_the_rest_still_resolves() -> TestResult {
    init_tracing();

    // c1 <-> c2 form a cycle; after_cycle only hangs off it.
    let graph = PlanBuilder::new()
        .with_chain("ok", &[("a", 2.0), ("b", 2.0)])
        .with_task(TaskBuilder::new("c1", "loop").hours(1.0).wait("c2").build())
        .with_task(TaskBuilder::new("c2", "loop").hours(1.0).build())
        .with_task(TaskBuilder::new("after_cycle", "tail").hours(1.0).wait("c2").build())
        .graph();

    let s = schedule(graph, monday_morning());

    assert!(!s.is_complete());
    assert_eq!(s.unresolved, vec!["c1", "c2", "after_cycle"]);
    assert_eq!(s.tasks.len(), 2);
    assert!(s.get("b").is_some());
    assert!(s.export_text.contains("// unresolved: c1"));

    Ok(())
}

#[test]
fn by_author_keeps_input_order() -> TestResult {
    let graph = PlanBuilder::new()
        .with_chain("yh", &[("y1", 1.0), ("y2", 1.0)])
        .with_task(TaskBuilder::new("s1", "sk").hours(1.0).build())
        .with_task(TaskBuilder::new("y3", "yh").hours(1.0).wait("s1").build())
        .graph();

    let s = schedule(graph, monday_morning());

    assert_eq!(s.by_author.authors().collect::<Vec<_>>(), vec!["yh", "sk"]);
    let yh: Vec<&str> = s
        .by_author
        .get("yh")
        .ok_or("yh")?
        .iter()
        .map(|t| t.id())
        .collect();
    assert_eq!(yh, vec!["y1", "y2", "y3"]);

    Ok(())
}

#[test]
fn scheduled_span_matches_duration_in_working_hours() -> TestResult {
    let graph = PlanBuilder::new()
        .with_chain("sk", &[("a", 5.0), ("b", 16.0), ("c", 12.5)])
        .with_chain("yh", &[("x", 0.25), ("y", 40.0)])
        .graph();

    let s = schedule(graph, at(2026, 10, 23, 17, 45));

    for t in s.tasks.values() {
        assert_eq!(
            working_hours_between(t.start_date, t.end_date),
            duration_from_hours(t.task.duration_in_hour),
            "task {}",
            t.id()
        );
    }

    Ok(())
}
