use crate::infra::load_draft;
use clap::Args;
use job_application::error::AppError;
use job_application::form::{
    ControlKind, EventOutcome, FixedCountryAdapter, FormController, PhoneInputAdapter, Position,
    SummaryView, ValidationErrors,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Position to apply for (Developer, Designer or Manager)
    #[arg(long, default_value = "Developer", value_parser = parse_position)]
    pub(crate) position: Position,
    /// Dial code the phone widget reports for the demo applicant
    #[arg(long, default_value = "1")]
    pub(crate) dial_code: String,
    /// Print the summary as HTML markup instead of plain text
    #[arg(long)]
    pub(crate) html: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// JSON draft keyed by control names (fullName, email, phoneNumber, ...)
    #[arg(long)]
    pub(crate) draft: PathBuf,
    /// Print the summary as HTML markup instead of plain text
    #[arg(long)]
    pub(crate) html: bool,
}

fn parse_position(raw: &str) -> Result<Position, String> {
    raw.trim().parse::<Position>().map_err(|err| err.to_string())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        position,
        dial_code,
        html,
    } = args;

    let phone = FixedCountryAdapter::with_dial_code(dial_code);
    let mut controller = FormController::new();

    println!("Job application demo ({position})");

    // First pass leaves a malformed email and no skills so the rejection path is visible.
    let mut entries = vec![
        ("fullName", "Jane Doe"),
        ("email", "jane@example"),
        ("position", position.label()),
        ("interviewTime", "2024-01-01T10:00"),
    ];
    entries.extend(position_entries(position));
    for (name, value) in entries {
        controller.handle_field_change(name, value, ControlKind::Input)?;
    }
    let keystroke = phone.detect("(555) 123-4567");
    controller.handle_phone_change(&keystroke.raw, &keystroke.country);

    if let EventOutcome::Rejected { errors } = controller.handle_submit() {
        println!("\nFirst submit rejected ({errors} error(s))");
        print_errors(controller.errors());
    }

    println!("\nApplying fixes");
    controller.handle_field_change("email", "jane@example.com", ControlKind::Input)?;
    controller.handle_field_change(skill_for(position), "true", ControlKind::Checkbox)?;

    match controller.handle_submit() {
        EventOutcome::Accepted => {
            let summary = SummaryView::from_draft(controller.draft());
            println!();
            print_summary(&summary, html);
            Ok(())
        }
        EventOutcome::Rejected { errors } => {
            print_errors(controller.errors());
            Err(AppError::DraftRejected { errors })
        }
        EventOutcome::Updated | EventOutcome::Ignored => Ok(()),
    }
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let draft = load_draft(&args.draft)?;
    let mut controller = FormController::from_draft(draft);

    match controller.handle_submit() {
        EventOutcome::Accepted => {
            if let Some(summary) = controller.summary() {
                print_summary(&summary, args.html);
            }
            Ok(())
        }
        EventOutcome::Rejected { errors } => {
            println!("Draft {} is not ready to submit", args.draft.display());
            print_errors(controller.errors());
            Err(AppError::DraftRejected { errors })
        }
        EventOutcome::Updated | EventOutcome::Ignored => Ok(()),
    }
}

fn position_entries(position: Position) -> Vec<(&'static str, &'static str)> {
    match position {
        Position::Developer => vec![("relevantExperience", "5")],
        Position::Designer => vec![
            ("relevantExperience", "4"),
            ("portfolioURL", "https://portfolio.example.com"),
        ],
        Position::Manager => vec![(
            "managementExperience",
            "Managed a cross-functional team of eight for three years.",
        )],
    }
}

fn skill_for(position: Position) -> &'static str {
    match position {
        Position::Developer => "javascript",
        Position::Designer => "css",
        Position::Manager => "python",
    }
}

fn print_errors(errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        println!("- {}: {}", field.label(), message);
    }
}

fn print_summary(summary: &SummaryView, html: bool) {
    if html {
        print!("{}", summary.to_html());
    } else {
        print!("{}", summary.to_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_draft(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("temp file");
        file.write_all(contents.as_bytes()).expect("draft written");
        path
    }

    #[test]
    fn demo_reaches_summary_for_every_position() {
        for position in Position::ALL {
            run_demo(DemoArgs {
                position,
                dial_code: "1".to_string(),
                html: false,
            })
            .expect("demo completes");
        }
    }

    #[test]
    fn check_accepts_complete_draft() {
        let path = write_draft(
            "check-valid",
            r#"{
                "fullName": "Jane",
                "email": "j@x.com",
                "phoneNumber": "5551234567",
                "countryCode": "1",
                "position": "Developer",
                "relevantExperience": "3",
                "additionalSkills": { "javascript": true },
                "interviewTime": "2024-01-01T10:00"
            }"#,
        );
        let result = run_check(CheckArgs {
            draft: path.clone(),
            html: true,
        });
        std::fs::remove_file(&path).ok();
        result.expect("draft accepted");
    }

    #[test]
    fn check_rejects_incomplete_draft() {
        let path = write_draft("check-invalid", r#"{ "fullName": "Jane" }"#);
        let result = run_check(CheckArgs {
            draft: path.clone(),
            html: false,
        });
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AppError::DraftRejected { errors: 5 })));
    }

    #[test]
    fn position_argument_is_exact() {
        assert_eq!(parse_position(" Manager "), Ok(Position::Manager));
        assert!(parse_position("ceo").is_err());
    }
}
