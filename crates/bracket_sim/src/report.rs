//! Console report formatting.

use bracket_core::{Contest, Entrant};

/// The two report lines for one contest.
pub fn format_contest(contest: &Contest) -> String {
    format!(
        "{} vs {}\nWinner: {}",
        contest.left, contest.right, contest.winner
    )
}

/// Print a contest to stdout.
pub fn print_contest(contest: &Contest) {
    println!("{}", format_contest(contest));
}

/// Final line announcing the overall champion.
pub fn format_champion(champion: &Entrant) -> String {
    format!("Championship winner: {}", champion)
}

/// Print the champion line to stdout.
pub fn print_champion(champion: &Entrant) {
    println!("{}", format_champion(champion));
}
