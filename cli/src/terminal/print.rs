use colored::*;

use paybff_core::adapters::inbound::query::NAMES;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    eprintln!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black()
    );
}

pub fn operations() {
    header("operations");
    for (idx, name) in NAMES.iter().enumerate() {
        println!("{} {}", format!("{:>2}.", idx + 1).bright_black(), name.bold());
    }
}

/// Results go to stdout uncolored so they can be piped.
pub fn success(rendered: &str) {
    println!("{rendered}");
}

pub fn failure(rendered: &str) {
    eprintln!("{}", "operation failed".red().bold());
    println!("{rendered}");
}
