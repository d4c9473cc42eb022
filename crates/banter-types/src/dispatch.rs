/// What the dispatcher decided to do with one normalized input line.
///
/// The engine never prints; it hands one of these back to the loop runner,
/// which owns all presentation and side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// End the session. The farewell belongs to the shutdown routine,
    /// so this carries no output.
    Exit,
    /// Show the full command listing (rendering is presentation-side).
    ShowHelp,
    /// Print one or more reply lines.
    Say(Vec<String>),
    /// Render the conversation history view.
    ShowHistory,
    /// Clear the terminal, reprint the banner, confirm.
    ClearScreen,
    /// Hand line handling to the calculator sub-mode until it terminates.
    EnterCalculator,
}

impl Outcome {
    /// Convenience constructor for a single reply line.
    pub fn say(line: impl Into<String>) -> Self {
        Outcome::Say(vec![line.into()])
    }
}
