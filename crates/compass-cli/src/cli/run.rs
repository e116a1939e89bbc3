use crate::cli::report;
use crate::opt::Run;
use anyhow::Result;
use compass::wizard::{Advance, Wizard};
use compass::{Config, PublicClient, SimpleClient};
use compass_config::catalog::default_catalog;
use reedline::{Reedline, Signal};

pub(crate) mod prompt;

pub(crate) async fn run(opt: Run) -> Result<()> {
    if opt.debug {
        crate::logging::setup()?;
    }

    let client = SimpleClient::new(Config::new(opt.server_url.clone()));
    match client.status().await {
        Ok(status) => tracing::debug!(status.version, "assessment relay reachable"),
        Err(error) => println!("Warning: assessment relay at {} is not reachable ({error})\n", opt.server_url),
    }

    let catalog = default_catalog();
    let mut wizard = Wizard::new(catalog);

    let mut line_editor = Reedline::create();
    let prompt = prompt::QuestionPrompt;
    let command_regex = regex::Regex::new(r"^/(\w+)\s*$")?;

    println!("Platform Maturity Assessment");
    println!("Answer each question on a scale of 1-5.");
    println!("Commands: /back, /restart, /share, /export, /quit\n");

    print_question(&wizard);

    loop {
        let signal = line_editor.read_line(&prompt)?;
        let input = match signal {
            Signal::Success(input) => input,
            Signal::CtrlC | Signal::CtrlD => break,
        };
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(captures) = command_regex.captures(input) {
            let command = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
            match command {
                "quit" | "exit" => break,
                "restart" => {
                    wizard.restart();
                    println!("Starting over.\n");
                    print_question(&wizard);
                }
                "back" => match wizard.retreat() {
                    Ok(()) => print_question(&wizard),
                    Err(error) => println!("{error}"),
                },
                "share" => match wizard.assessment() {
                    Some(assessment) => println!("{}\n", report::share_text(assessment)),
                    None => println!("No assessment to share yet."),
                },
                "export" => match wizard.assessment() {
                    Some(assessment) => match report::export(assessment) {
                        Ok(path) => println!("Report written to {}", path.display()),
                        Err(error) => println!("Failed to write report: {error}"),
                    },
                    None => println!("No assessment to export yet."),
                },
                other => println!("Unknown command /{other}"),
            }
            continue;
        }

        if wizard.current_question().is_none() {
            println!("The questionnaire is finished. /restart begins a new one, /quit leaves.");
            continue;
        }

        let Ok(value) = input.parse::<u8>() else {
            println!("Please answer with a number from 1 to 5.");
            continue;
        };
        if let Err(error) = wizard.answer(value) {
            println!("{error}");
            continue;
        }

        match wizard.advance() {
            Ok(Advance::Next) => print_question(&wizard),
            Ok(Advance::ReadyToSubmit) => {
                println!("\nAnalyzing...");
                match wizard.submit(&client).await {
                    Ok(assessment) => {
                        println!("{}", report::render(assessment));
                        println!(
                            "/share prints a summary, /export writes {}, /restart starts over.",
                            report::EXPORT_FILENAME
                        );
                    }
                    Err(error) => {
                        tracing::debug!(error = &error as &dyn std::error::Error, "submission failed");
                        println!("Failed to generate assessment. Please try again.");
                        wizard.acknowledge_failure();
                        print_question(&wizard);
                    }
                }
            }
            Err(error) => println!("{error}"),
        }
    }

    Ok(())
}

fn print_question(wizard: &Wizard) {
    let Some(question) = wizard.current_question() else {
        return;
    };
    let Some(index) = wizard.position() else {
        return;
    };
    println!("[{}/{}] {}", index + 1, wizard.catalog().len(), question.layer.label());
    println!("{}", question.prompt);
    println!(
        "  {} = {}  ...  {} = {}",
        question.scale.min, question.scale.hint_min, question.scale.max, question.scale.hint_max
    );
    if let Some(current) = wizard.current_answer() {
        println!("  (current answer: {current})");
    }
}
