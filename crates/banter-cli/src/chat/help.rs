//! The command listing shown for "help" and during the welcome sequence.

use console::style;

/// One row of the command table: phrase column, description column.
const COMMANDS: &[(&str, &str)] = &[
    ("help / manual", "Show this command list"),
    ("calc / calculate", "Math calculator (+ - * /)"),
    ("joke", "Tell a random joke"),
    ("fact", "Share a random fun fact"),
    ("time / date", "Show current date & time"),
    ("flip", "Flip a coin"),
    ("roll", "Roll a dice (1-6)"),
    ("reverse <text>", "Reverse a string"),
    ("count <text>", "Count words in text"),
    ("history", "Show conversation history"),
    ("uptime", "Show session duration"),
    ("clear", "Clear the screen"),
    ("bye / exit / quit", "End the conversation"),
];

// Interior widths of the two columns, including their padding spaces.
const COL1: usize = 21;
const COL2: usize = 31;

/// Print the full command listing as a box-drawn table.
pub fn print_help() {
    let full = COL1 + 1 + COL2;
    let top = format!("┌{}┐", "─".repeat(full));
    let split = format!("├{}┬{}┤", "─".repeat(COL1), "─".repeat(COL2));
    let merge = format!("├{}┴{}┤", "─".repeat(COL1), "─".repeat(COL2));
    let bottom = format!("└{}┘", "─".repeat(full));

    println!();
    println!("  {}", style(&top).yellow().bold());
    println!(
        "  {}{}{}",
        style("│").yellow().bold(),
        style(format!("{:^width$}", "📋  AVAILABLE COMMANDS", width = full)).bold(),
        style("│").yellow().bold()
    );
    println!("  {}", style(&split).yellow().bold());
    for (phrase, what) in COMMANDS {
        println!(
            "  {} {} {} {} {}",
            style("│").yellow().bold(),
            style(format!("{phrase:<width$}", width = COL1 - 2)).white(),
            style("│").yellow().bold(),
            format!("{what:<width$}", width = COL2 - 2),
            style("│").yellow().bold()
        );
    }
    println!("  {}", style(&merge).yellow().bold());
    for note in [
        "You can also just chat naturally -- try greetings,",
        "questions about me, or ask about Rust and more!",
    ] {
        println!(
            "  {} {} {}",
            style("│").yellow().bold(),
            style(format!("{note:<width$}", width = full - 2)).dim(),
            style("│").yellow().bold()
        );
    }
    println!("  {}", style(&bottom).yellow().bold());
}
