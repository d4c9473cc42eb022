//! The input-classification cascade.
//!
//! Dispatch is an ordered rule list evaluated first-match-wins. The order is
//! load-bearing: "calc" must reach the calculator entry rule before any
//! table lookup could claim it, and exact lookups must beat the substring
//! fallback. Reordering `CASCADE` changes user-visible behavior.

pub mod phrases;

use banter_types::dispatch::Outcome;
use tracing::debug;

use crate::capability::{Clock, RandomSource};
use crate::content::ContentStore;
use crate::session::{SessionState, format_duration};

/// Wall-clock format for the time/date reply.
const DATETIME_FORMAT: &str = "%A, %B %d, %Y  %I:%M:%S %p";

/// One classification rule. Listed here in cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Exact match against the exit set.
    Exit,
    /// Exact match against the help set.
    Help,
    /// Exact match against a canned-command phrase set (joke, fact, time,
    /// flip, roll, uptime, history, clear).
    Canned,
    /// "reverse <text>" / "count <text>" prefix commands.
    Prefixed,
    /// Exact match against a calculator entry phrase.
    CalculatorEntry,
    /// Alias table hit, resolved through the response table.
    Alias,
    /// Exact response table hit.
    Exact,
    /// First table key (length >= 3) embedded anywhere in the line.
    Substring,
}

/// First matching rule wins; no rule matching falls through to the default
/// "don't understand" reply.
const CASCADE: [Rule; 8] = [
    Rule::Exit,
    Rule::Help,
    Rule::Canned,
    Rule::Prefixed,
    Rule::CalculatorEntry,
    Rule::Alias,
    Rule::Exact,
    Rule::Substring,
];

/// The classification/response engine.
///
/// Holds only a reference to the read-only content store; per-session state
/// and the random/clock capabilities are passed per dispatch.
pub struct Dispatcher<'a> {
    store: &'a ContentStore,
}

impl<'a> Dispatcher<'a> {
    pub fn new(store: &'a ContentStore) -> Self {
        Self { store }
    }

    /// Classify one normalized, non-empty line and produce an outcome.
    ///
    /// The line is appended to the session history unconditionally, before
    /// classification -- the transcript records commands too.
    pub fn dispatch(
        &self,
        line: &str,
        session: &mut SessionState,
        rng: &mut dyn RandomSource,
        clock: &dyn Clock,
    ) -> Outcome {
        session.record(line);

        for rule in CASCADE {
            if let Some(outcome) = self.try_rule(rule, line, session, rng, clock) {
                debug!(?rule, input = line, "cascade rule matched");
                return outcome;
            }
        }

        debug!(input = line, "no cascade rule matched");
        Outcome::Say(vec![
            "Hmm, I don't quite understand that. 🤔".to_string(),
            "Try 'help' to see what I can do, or just say hi!".to_string(),
        ])
    }

    fn try_rule(
        &self,
        rule: Rule,
        line: &str,
        session: &mut SessionState,
        rng: &mut dyn RandomSource,
        clock: &dyn Clock,
    ) -> Option<Outcome> {
        match rule {
            Rule::Exit => phrases::EXIT.contains(&line).then(|| {
                session.stop();
                Outcome::Exit
            }),
            Rule::Help => phrases::HELP.contains(&line).then_some(Outcome::ShowHelp),
            Rule::Canned => self.try_canned(line, session, rng, clock),
            Rule::Prefixed => try_prefixed(line),
            Rule::CalculatorEntry => phrases::CALCULATOR
                .contains(&line)
                .then_some(Outcome::EnterCalculator),
            Rule::Alias => self
                .store
                .resolve_alias(line)
                .and_then(|canonical| self.store.reply(canonical))
                .map(Outcome::say),
            Rule::Exact => self.store.reply(line).map(Outcome::say),
            Rule::Substring => self.store.substring_reply(line).map(Outcome::say),
        }
    }

    /// Stateless canned commands: each is a pure function of the store, the
    /// session, and the injected capabilities.
    fn try_canned(
        &self,
        line: &str,
        session: &SessionState,
        rng: &mut dyn RandomSource,
        clock: &dyn Clock,
    ) -> Option<Outcome> {
        if phrases::JOKE.contains(&line) {
            return Some(Outcome::say(self.store.random_joke(rng)));
        }
        if phrases::FACT.contains(&line) {
            return Some(Outcome::say(self.store.random_fact(rng)));
        }
        if phrases::TIME.contains(&line) {
            return Some(Outcome::say(format!(
                "🕐 {}",
                clock.now_local().format(DATETIME_FORMAT)
            )));
        }
        if phrases::FLIP.contains(&line) {
            let face = if rng.int_in(0, 1) == 1 { "Heads" } else { "Tails" };
            return Some(Outcome::say(format!("{face}! 🪙")));
        }
        if phrases::ROLL.contains(&line) {
            return Some(Outcome::say(format!(
                "🎲 You rolled a {}!",
                rng.int_in(1, 6)
            )));
        }
        if phrases::UPTIME.contains(&line) {
            return Some(Outcome::say(format!(
                "⏱️  Session uptime: {} | Messages: {}",
                format_duration(session.uptime(clock)),
                session.history().len()
            )));
        }
        if phrases::HISTORY.contains(&line) {
            return Some(Outcome::ShowHistory);
        }
        if phrases::CLEAR.contains(&line) {
            return Some(Outcome::ClearScreen);
        }
        None
    }
}

/// Prefix commands: a literal prefix, one space, and at least one further
/// character of argument.
fn try_prefixed(line: &str) -> Option<Outcome> {
    if let Some(text) = line.strip_prefix(phrases::REVERSE_PREFIX) {
        if !text.is_empty() {
            let reversed: String = text.chars().rev().collect();
            return Some(Outcome::say(format!("🔄 \"{reversed}\"")));
        }
    }
    if let Some(text) = line.strip_prefix(phrases::COUNT_PREFIX) {
        if !text.is_empty() {
            let count = text.split_whitespace().count();
            return Some(Outcome::say(format!("📝 Word count: {count}")));
        }
    }
    None
}
