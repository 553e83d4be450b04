use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;

use ux_blueprint::intake::{IntakeField, IntakeRecord, IntakeState, PROJECT_TYPE_OPTIONS};
use ux_blueprint::session::{RequestState, Session};

/// Ask for every field in form order. Enter keeps the current value.
pub fn collect_intake(state: &mut IntakeState) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    println!("\n{}", "Phase 0: Intake – Project Basics".bold());
    for field in IntakeField::ALL {
        match field {
            IntakeField::PrimaryTargetAudience => println!("\n{}", "User & Goal".bold()),
            IntakeField::MustInclude => println!("\n{}", "Constraints & Tone".bold()),
            _ => {}
        }
        if let Some(v) = prompt_field(&mut input, field, state.get(field))? {
            state.update(field, v);
        }
    }
    Ok(())
}

fn prompt_field(input: &mut impl BufRead, field: IntakeField, current: &str) -> io::Result<Option<String>> {
    if field == IntakeField::ProjectType {
        println!("  {}", PROJECT_TYPE_OPTIONS.join(" | ").dimmed());
    }
    let hint = if current.is_empty() { field.placeholder().to_string() } else { current.to_string() };
    print!("{}: [{}] ", field.label(), hint.dimmed());
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_answer(&line))
}

fn parse_answer(line: &str) -> Option<String> {
    let v = line.trim_end_matches(['\r', '\n']);
    if v.is_empty() { None } else { Some(v.to_string()) }
}

pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    let _ = io::stdout().flush();
    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        let ans = s.trim().to_lowercase();
        ans == "y" || ans == "yes"
    } else {
        false
    }
}

pub fn show_intake(rec: &IntakeRecord) {
    println!("\n=== INTAKE ===");
    for field in IntakeField::ALL {
        let v = rec.get(field);
        let shown = if v.is_empty() { "(empty)".dimmed().to_string() } else { v.to_string() };
        println!("  {}: {}", field.label().bold(), shown);
    }
}

pub fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()));
    pb.set_message("Generating Blueprint… running UX research phases and composing the wireframe");
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Empty state (with any failure) or each non-empty section in phase order.
pub fn render(session: &Session) {
    if !session.has_results() {
        println!("\n{}", "No Blueprint Generated Yet".bold());
        match session.state() {
            RequestState::Failed(msg) => println!("{}", msg.red().bold()),
            RequestState::Succeeded => println!("{}", "The webhook returned nothing to display.".dimmed()),
            _ => println!(
                "{}",
                "Fill in the project details and run again to get UX research and a structured layout.".dimmed()
            ),
        }
        return;
    }

    let res = session.result();
    section("Phase 1–2: UX Research & Summary", &res.research_summary);
    section("Phase 3: Research Summary for Prompts", &res.prompt_seeds);
    section("Phase 4: Wireframe Blueprint (JSON)", &res.wireframe_raw);
    if !res.research_summary.is_empty() {
        println!("\n{}", "Phase 5: Export".cyan().bold());
    }
}

fn section(title: &str, body: &str) {
    if body.is_empty() {
        return;
    }
    println!("\n{}", title.cyan().bold());
    println!("{}", indent(body, 2));
}

fn indent(s: &str, n: usize) -> String {
    let pad = " ".repeat(n);
    s.lines()
        .map(|l| format!("{}{}", pad, l))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn blank_answer_keeps_current_value() {
        assert_eq!(parse_answer("\n"), None);
        assert_eq!(parse_answer(""), None);
        assert_eq!(parse_answer("Acme\r\n"), Some("Acme".to_string()));
        assert_eq!(parse_answer("  padded  \n"), Some("  padded  ".to_string()));
    }

    #[test]
    fn prompt_reads_one_line() {
        let mut input = Cursor::new("Mobile App\nnext\n");
        let v = prompt_field(&mut input, IntakeField::ProjectType, "Landing Page").unwrap();
        assert_eq!(v.as_deref(), Some("Mobile App"));
    }

    #[test]
    fn indents_every_line() {
        assert_eq!(indent("a\nb", 2), "  a\n  b");
    }
}
