use crate::cli::ColorChoice;
use std::io::IsTerminal;

/// Decide whether to colorize and apply it to `colored`.
///
/// Returns the decision so log output can follow it.
pub fn init(choice: ColorChoice) -> bool {
    let should_color = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        // Respect NO_COLOR (https://no-color.org/), otherwise only on a terminal
        ColorChoice::Auto => std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal(),
    };

    colored::control::set_override(should_color);
    should_color
}
