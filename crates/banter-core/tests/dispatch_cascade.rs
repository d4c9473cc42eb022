//! End-to-end properties of the classification cascade over the builtin
//! content tables.

use std::time::Duration;

use banter_core::capability::{FixedClock, SeededRandom};
use banter_core::content::ContentStore;
use banter_core::dispatch::Dispatcher;
use banter_core::session::{HISTORY_VIEW_CAP, SessionState};
use banter_types::dispatch::Outcome;
use chrono::{Local, TimeZone};

fn fixed_clock() -> FixedClock {
    FixedClock::new(Local.with_ymd_and_hms(2026, 8, 23, 10, 30, 0).unwrap())
}

fn say_lines(outcome: Outcome) -> Vec<String> {
    match outcome {
        Outcome::Say(lines) => lines,
        other => panic!("expected Say, got {other:?}"),
    }
}

#[test]
fn every_response_key_round_trips_unless_an_earlier_rule_claims_it() {
    let store = ContentStore::builtin().unwrap();
    let clock = fixed_clock();
    let mut rng = SeededRandom::from_seed(11);
    let dispatcher = Dispatcher::new(&store);

    let keys: Vec<String> = store.response_keys().map(str::to_string).collect();
    for key in keys {
        let mut session = SessionState::new(&clock);
        let outcome = dispatcher.dispatch(&key, &mut session, &mut rng, &clock);
        // None of the builtin keys collide with an earlier rule, so every
        // one must come back as its own reply.
        let lines = say_lines(outcome);
        assert_eq!(lines, [store.reply(&key).unwrap().to_string()], "key '{key}'");
    }
}

#[test]
fn every_alias_matches_its_canonical_reply() {
    let store = ContentStore::builtin().unwrap();
    let clock = fixed_clock();
    let mut rng = SeededRandom::from_seed(11);
    let dispatcher = Dispatcher::new(&store);

    let aliases: Vec<String> = store.alias_keys().map(str::to_string).collect();
    assert!(!aliases.is_empty());
    for alias in aliases {
        let canonical = store.resolve_alias(&alias).unwrap().to_string();
        let mut session = SessionState::new(&clock);
        let via_alias = dispatcher.dispatch(&alias, &mut session, &mut rng, &clock);
        let direct = dispatcher.dispatch(&canonical, &mut session, &mut rng, &clock);
        assert_eq!(via_alias, direct, "alias '{alias}' -> '{canonical}'");
    }
}

#[test]
fn embedded_key_avoids_the_default_reply() {
    let store = ContentStore::builtin().unwrap();
    let clock = fixed_clock();
    let mut rng = SeededRandom::from_seed(11);
    let dispatcher = Dispatcher::new(&store);
    let mut session = SessionState::new(&clock);

    let lines = say_lines(dispatcher.dispatch(
        "hey can you tell me hi there",
        &mut session,
        &mut rng,
        &clock,
    ));
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].contains("don't quite understand"));
}

#[test]
fn repeated_dispatch_is_idempotent_and_appends_twice() {
    let store = ContentStore::builtin().unwrap();
    let clock = fixed_clock();
    let mut rng = SeededRandom::from_seed(11);
    let dispatcher = Dispatcher::new(&store);
    let mut session = SessionState::new(&clock);

    let first = dispatcher.dispatch("hello", &mut session, &mut rng, &clock);
    let second = dispatcher.dispatch("hello", &mut session, &mut rng, &clock);
    assert_eq!(first, second);
    assert_eq!(session.history(), ["hello", "hello"]);
}

#[test]
fn history_grows_once_per_dispatched_line_and_windows_at_twenty() {
    let store = ContentStore::builtin().unwrap();
    let clock = fixed_clock();
    let mut rng = SeededRandom::from_seed(11);
    let dispatcher = Dispatcher::new(&store);
    let mut session = SessionState::new(&clock);

    for i in 1..=25 {
        dispatcher.dispatch(&format!("count word {i}"), &mut session, &mut rng, &clock);
    }
    assert_eq!(session.history().len(), 25);

    let (start, window) = session.history_window(HISTORY_VIEW_CAP);
    assert_eq!(window.len(), 20);
    assert_eq!(start + 1, 6); // first rendered 1-based index
    assert_eq!(window[0], "count word 6");
    assert_eq!(window[19], "count word 25");
}

#[test]
fn uptime_is_monotonic_and_non_negative() {
    let store = ContentStore::builtin().unwrap();
    let clock = fixed_clock();
    let mut rng = SeededRandom::from_seed(11);
    let dispatcher = Dispatcher::new(&store);
    let mut session = SessionState::new(&clock);

    let mut last = Duration::ZERO;
    for step in [0u64, 1, 10, 600] {
        clock.advance(Duration::from_secs(step));
        let lines = say_lines(dispatcher.dispatch("uptime", &mut session, &mut rng, &clock));
        assert!(lines[0].starts_with("⏱️  Session uptime: "));
        let now = session.uptime(&clock);
        assert!(now >= last);
        last = now;
    }
}

#[test]
fn random_commands_stay_in_their_closed_sets() {
    let store = ContentStore::builtin().unwrap();
    let clock = fixed_clock();
    let dispatcher = Dispatcher::new(&store);

    for seed in 0..20 {
        let mut rng = SeededRandom::from_seed(seed);
        let mut session = SessionState::new(&clock);

        let flip = say_lines(dispatcher.dispatch("flip", &mut session, &mut rng, &clock));
        assert!(flip[0] == "Heads! 🪙" || flip[0] == "Tails! 🪙");

        let roll = say_lines(dispatcher.dispatch("roll", &mut session, &mut rng, &clock));
        let n: u32 = roll[0]
            .strip_prefix("🎲 You rolled a ")
            .and_then(|s| s.strip_suffix('!'))
            .unwrap()
            .parse()
            .unwrap();
        assert!((1..=6).contains(&n));

        let joke = say_lines(dispatcher.dispatch("joke", &mut session, &mut rng, &clock));
        assert!(store.jokes().contains(&joke[0]));

        let fact = say_lines(dispatcher.dispatch("fact", &mut session, &mut rng, &clock));
        assert!(store.facts().contains(&fact[0]));
    }
}
