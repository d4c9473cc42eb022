//! Startup banner display.

use console::style;

/// Print the styled startup banner.
pub fn print_banner() {
    let top = "╔══════════════════════════════════════════════════╗";
    let bottom = "╚══════════════════════════════════════════════════╝";
    let art = [
        "██████╗  █████╗ ███╗   ██╗████████╗███████╗██████╗ ",
        "██╔══██╗██╔══██╗████╗  ██║╚══██╔══╝██╔════╝██╔══██╗",
        "██████╔╝███████║██╔██╗ ██║   ██║   █████╗  ██████╔╝",
        "██╔══██╗██╔══██║██║╚██╗██║   ██║   ██╔══╝  ██╔══██╗",
        "██████╔╝██║  ██║██║ ╚████║   ██║   ███████╗██║  ██║",
        "╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═══╝   ╚═╝   ╚══════╝╚═╝  ╚═╝",
    ];

    println!();
    println!("  {}", style(top).cyan().bold());
    for line in art {
        println!("  {}", style(line).cyan().bold());
    }
    println!(
        "  {}  {}",
        style("A pattern-matching terminal chatbot").white(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim()
    );
    println!("  {}", style(bottom).cyan().bold());
    println!();
}
