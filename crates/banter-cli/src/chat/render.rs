//! Reply rendering: bot speech lines, separators, history view, goodbye.
//!
//! All presentation lives here; the engine hands over plain strings.

use std::time::Duration;

use banter_core::session::{HISTORY_VIEW_CAP, SessionState, format_duration};
use console::style;

/// Print one bot reply line with the speaker prefix.
pub fn bot_say(msg: &str) {
    println!(
        "  {} {}",
        style("Bot ◂").cyan().bold(),
        style(msg).white()
    );
}

/// Print a multi-line reply: prefix on the first line, hanging indent after.
pub fn bot_say_lines<S: AsRef<str>>(lines: &[S]) {
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            bot_say(line.as_ref());
        } else {
            println!("        {}", style(line.as_ref()).white());
        }
    }
}

/// Print a dim horizontal rule.
pub fn separator() {
    println!("  {}", style("─".repeat(58)).dim());
}

/// Render the conversation history view: boxed header, the most recent 20
/// entries labeled with their absolute 1-based positions, and a caption.
pub fn render_history(session: &SessionState) {
    if session.history().is_empty() {
        bot_say("No conversation history yet!");
        return;
    }

    let width = 53;
    println!();
    println!("  {}", style(format!("┌{}┐", "─".repeat(width))).yellow().bold());
    println!(
        "  {}{}{}",
        style("│").yellow().bold(),
        style(format!("{:^width$}", "📜  CONVERSATION HISTORY")).bold(),
        style("│").yellow().bold()
    );
    println!("  {}", style(format!("└{}┘", "─".repeat(width))).yellow().bold());

    let (start, window) = session.history_window(HISTORY_VIEW_CAP);
    for (offset, entry) in window.iter().enumerate() {
        println!("  {} {}", style(format!("{:>3}.", start + offset + 1)).dim(), entry);
    }

    println!();
    println!(
        "  {}",
        style(format!(
            "Showing last {} of {} messages.",
            window.len(),
            session.history().len()
        ))
        .dim()
    );
}

/// Print the shutdown summary: farewell plus session duration and message
/// count.
pub fn goodbye(uptime: Duration, messages: usize) {
    println!();
    separator();
    bot_say("Goodbye! Thanks for chatting. 👋");
    println!(
        "  {}",
        style(format!(
            "Session lasted: {} | Messages: {}",
            format_duration(uptime),
            messages
        ))
        .dim()
    );
    separator();
    println!();
}
