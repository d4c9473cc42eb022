//! Main chat loop orchestration.
//!
//! Builds the content store and session, runs the welcome sequence, then
//! feeds normalized lines through the dispatcher until an exit phrase or end
//! of input, rendering each outcome. The calculator sub-mode gets its own
//! nested loop with a swapped prompt.

use console::style;
use tracing::{debug, info};

use banter_core::calculator::{CalcOutcome, CalcState, CalculatorSession};
use banter_core::capability::{SystemClock, ThreadRandom};
use banter_core::content::ContentStore;
use banter_core::dispatch::Dispatcher;
use banter_core::normalize::normalize;
use banter_core::session::SessionState;
use banter_types::dispatch::Outcome;

use super::banner::print_banner;
use super::help::print_help;
use super::input::{ChatInput, InputEvent};
use super::render;

/// Run the interactive session to completion.
///
/// Returns `Ok(())` on every graceful path: exit phrase, welcome-sequence
/// decline, or end of input. The only error path is content-store
/// construction, which fails before any interaction.
pub async fn run_chat_loop(show_banner: bool) -> anyhow::Result<()> {
    let store = ContentStore::builtin()?;
    let clock = SystemClock::new();
    let mut rng = ThreadRandom::new();
    let mut session = SessionState::new(&clock);
    let dispatcher = Dispatcher::new(&store);

    if show_banner {
        print_banner();
    }

    let chat_prompt = format!("\n  {} ", style("You ▸").green().bold());
    let calc_prompt = format!("  {} ", style("Calc ▸").magenta().bold());
    let (mut input, _writer) = ChatInput::new(chat_prompt.clone())
        .map_err(|e| anyhow::anyhow!("failed to initialize terminal input: {e}"))?;

    if !welcome_sequence(&mut input).await {
        return Ok(());
    }

    info!("chat session started");

    while session.is_running() {
        match input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D or type 'bye' to exit, or keep chatting.").dim()
                );
            }
            InputEvent::Line(raw) => {
                let line = normalize(&raw);
                if line.is_empty() {
                    continue;
                }

                match dispatcher.dispatch(&line, &mut session, &mut rng, &clock) {
                    Outcome::Exit => {}
                    Outcome::ShowHelp => print_help(),
                    Outcome::Say(lines) => render::bot_say_lines(&lines),
                    Outcome::ShowHistory => render::render_history(&session),
                    Outcome::ClearScreen => {
                        input.clear();
                        if show_banner {
                            print_banner();
                        }
                        render::bot_say("Screen cleared! ✨");
                    }
                    Outcome::EnterCalculator => {
                        run_calculator(&mut input, &calc_prompt, &chat_prompt).await;
                    }
                }
            }
        }
    }

    render::goodbye(session.uptime(&clock), session.history().len());
    Ok(())
}

/// The startup confirmation flow.
///
/// Returns false when the user declines to chat or the input ends; both are
/// graceful exits that skip the session itself.
async fn welcome_sequence(input: &mut ChatInput) -> bool {
    render::bot_say("Welcome! Would you like to start chatting? (y/n)");
    let Some(answer) = read_answer(input).await else {
        return false;
    };
    if answer != "y" && answer != "yes" {
        render::bot_say("No worries -- see you next time! 👋");
        return false;
    }

    render::bot_say("Would you like to see what I can do? (y/n)");
    let Some(answer) = read_answer(input).await else {
        return false;
    };
    if answer == "y" || answer == "yes" {
        print_help();
    }

    println!();
    render::separator();
    render::bot_say("Let's chat! Type anything or 'help' for commands. Type 'bye' to exit.");
    render::separator();
    true
}

/// Read one normalized answer line; `None` on EOF or interrupt.
async fn read_answer(input: &mut ChatInput) -> Option<String> {
    match input.read_line().await {
        InputEvent::Line(raw) => Some(normalize(&raw)),
        InputEvent::Eof | InputEvent::Interrupted => None,
    }
}

/// The calculator sub-loop: owns line handling until the sub-mode
/// terminates, then restores the chat prompt.
async fn run_calculator(input: &mut ChatInput, calc_prompt: &str, chat_prompt: &str) {
    println!();
    render::separator();
    render::bot_say_lines(&[
        "🧮 Calculator Mode!",
        "Enter an expression like: 42 + 18",
        "Supported operators: + - * x /",
        "Type 'done' to exit calculator.",
    ]);
    render::separator();

    input.set_prompt(calc_prompt);
    let mut calc = CalculatorSession::new();

    while calc.state() == CalcState::Active {
        match input.read_line().await {
            InputEvent::Eof => calc.end_input(),
            InputEvent::Interrupted => continue,
            InputEvent::Line(raw) => match calc.feed_line(&raw) {
                CalcOutcome::Reply(msg) => render::bot_say(&msg),
                CalcOutcome::Exited => {
                    render::bot_say("Exiting calculator. Back to chat! 💬");
                }
            },
        }
    }

    debug!("calculator sub-mode ended");
    input.set_prompt(chat_prompt);
}
