use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use vidquiz_core::{
    LearningPackage, OptionMark, QuizController, ServiceClient, SessionState, SubmitError,
    feedback, format_package_readable, parse_video_id, review_plan,
};

const DEFAULT_SERVER: &str = "http://localhost:5000";

#[derive(Parser)]
#[command(name = "vidquiz")]
#[command(
    about = "Turn a YouTube video into a summary, key points, and an interactive self-check quiz"
)]
struct Cli {
    /// Video URL or bare 11-character video id
    url: String,

    /// Processing service base URL (falls back to $VIDQUIZ_SERVER)
    #[arg(short, long)]
    server: Option<String>,

    /// Print the learning package and skip the interactive quiz
    #[arg(long)]
    no_quiz: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn server_url(cli_server: Option<String>) -> String {
    cli_server
        .or_else(|| std::env::var("VIDQUIZ_SERVER").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Reject unrecognizable references before any network traffic.
    let video_id = match parse_video_id(&cli.url) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    let client = ServiceClient::new(server_url(cli.server));

    println!(
        "\n{}  {}\n",
        style("vidquiz").cyan().bold(),
        style("Smart Video Learning").dim()
    );

    if !client.health().await {
        eprintln!(
            "{} service not reachable at {}; trying anyway",
            style("warning:").yellow().bold(),
            client.base_url()
        );
    }

    let spinner = create_spinner("Processing video (transcript, summary, quiz)...");
    let package = match client.process_video(&cli.url).await {
        Ok(package) => {
            spinner.finish_with_message(format!(
                "{} Learning package ready for {}",
                style("✓").green().bold(),
                style(&video_id).dim()
            ));
            package
        }
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    println!("{}", style("─".repeat(60)).dim());
    println!("{}", format_package_readable(&package));

    if cli.no_quiz {
        return Ok(());
    }

    run_quiz(&package)
}

/// Drive the interactive quiz: collect answers, pass the completion gate,
/// then show the scored review. Skipped questions come back around until
/// every one is answered.
fn run_quiz(package: &LearningPackage) -> Result<()> {
    let term = Term::stdout();
    let mut controller = QuizController::new();
    controller.load(package.questions.clone());

    println!(
        "{} Answer with the option letter. Press Enter to skip a question for now.\n",
        style("Quiz:").cyan().bold()
    );

    while controller.state() == SessionState::Loaded {
        ask_unanswered(&term, &mut controller)?;

        match controller.submit().context("no quiz loaded")? {
            Ok(_) => {}
            Err(SubmitError::IncompleteSubmission { answered, total }) => {
                println!(
                    "\n{} {answered} of {total} questions answered; the rest are coming up again.\n",
                    style("!").yellow().bold()
                );
            }
        }
    }

    print_review(&controller)
}

/// Prompt for every question that has no recorded answer yet. Input is
/// matched against the question's own option keys; anything else re-prompts.
fn ask_unanswered(term: &Term, controller: &mut QuizController) -> Result<()> {
    let count = controller
        .session()
        .map(|s| s.question_count())
        .unwrap_or(0);

    for index in 0..count {
        let session = controller.session().context("no quiz loaded")?;
        if session.answer(index).is_some() {
            continue;
        }

        let question = &session.questions()[index];
        println!(
            "{} {}",
            style(format!("Question {}:", index + 1)).bold(),
            question.prompt()
        );
        for option in question.options() {
            println!("  {} {}", style(format!("{})", option.key)).bold(), option.text);
        }

        loop {
            term.write_str(&format!("{} ", style("Your answer:").cyan()))?;
            let input = term.read_line()?.trim().to_uppercase();

            if input.is_empty() {
                println!("  {}", style("skipped").dim());
                break;
            }

            let session = controller.session().context("no quiz loaded")?;
            if session.questions()[index].has_option(&input) {
                controller.record_answer(index, &input);
                break;
            }
            println!("  {}", style("not one of the options, try again").yellow());
        }
        println!();
    }

    Ok(())
}

/// Print the per-option review and the score line for a locked session.
fn print_review(controller: &QuizController) -> Result<()> {
    let session = controller.session().context("no quiz loaded")?;
    let Some(plan) = review_plan(session) else {
        bail!("quiz was not submitted");
    };
    let result = session.result().context("quiz was not scored")?;

    println!("{}", style("─".repeat(60)).dim());
    for question in &plan.questions {
        println!(
            "{} {}",
            style(format!("Question {}:", question.number)).bold(),
            question.prompt
        );
        for option in &question.options {
            let line = format!("{}) {}", option.key, option.text);
            let rendered = match option.mark {
                OptionMark::CorrectKey => format!("  {} {}", style("✓").green().bold(), style(line).green()),
                OptionMark::IncorrectSelected => {
                    format!("  {} {}", style("✗").red().bold(), style(line).red())
                }
                OptionMark::Neutral => format!("    {}", style(line).dim()),
            };
            if option.selected {
                println!("{} {}", rendered, style("(your answer)").dim());
            } else {
                println!("{rendered}");
            }
        }
        println!();
    }

    let fb = feedback(result.correct_count, result.total);
    println!(
        "{} {}/{} ({:.0}%) {}",
        style("Score:").cyan().bold(),
        result.correct_count,
        result.total,
        fb.percentage,
        style(fb.tier.label()).bold()
    );
    println!("{}", fb.tier.message());

    Ok(())
}
