use colored::Colorize;

const LABEL_WIDTH: usize = 12;

pub fn print_banner(title: &str) {
    println!();
    println!("  {} {}", "Σ".bright_cyan().bold(), title.bold());
    println!("  {}", "═".repeat(title.chars().count() + 2).cyan());
}

pub fn print_section(title: &str) {
    println!();
    println!("  {} {}", "▸".bright_cyan(), title.bold());
}

pub fn print_kv(label: &str, value: &str) {
    println!(
        "    {} {}",
        format!("{label:<LABEL_WIDTH$}").dimmed(),
        value.bright_white()
    );
}

pub fn print_hint(msg: &str) {
    println!("  {}", msg.italic().dimmed());
}
