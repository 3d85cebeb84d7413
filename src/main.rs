//! Interactive terminal walkthrough of the decision questionnaire.
//!
//! Thin presentation layer: reads stdin, drives the wizard session, and
//! renders the view after each event. No decision logic lives here.

use std::io::{self, Write};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use decision_compass::adapters::{ThreadRngSource, TokioDelay};
use decision_compass::application::{SessionError, WizardSession, WizardView};
use decision_compass::config::AppConfig;
use decision_compass::domain::decision::{CoreValue, FieldChange, OptionSlot, WizardStep};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {}", err);
            std::process::exit(1);
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {}", err);
        std::process::exit(1);
    }

    let mut session = WizardSession::from_config(
        &config,
        Box::new(ThreadRngSource::new()),
        Arc::new(TokioDelay::new()),
    );

    println!("Decision Compass");
    println!("Type /back to go a step back, /reset to start over, /quit to leave.\n");

    loop {
        let view = session.view();
        if let Some(message) = &view.validation_message {
            println!("! {}", message);
        }
        if let Some(concern) = &view.safety_concern {
            println!("\n== {}", concern.message);
            println!("== Support is available: {}\n", concern.resource_url);
        }

        match view.step {
            WizardStep::Question => {
                let input = prompt("What decision are you facing?");
                match command(&input) {
                    Some(Command::Quit) => break,
                    Some(Command::Reset) => session.reset(),
                    Some(Command::Back) => {
                        session.back();
                    }
                    None => {
                        if !input.is_empty() {
                            session.apply_field_change(FieldChange::Question(input));
                        }
                        try_advance(&mut session).await;
                    }
                }
            }
            WizardStep::Intuition => {
                let input = prompt("Before any analysis: what does your gut say?");
                match command(&input) {
                    Some(Command::Quit) => break,
                    Some(Command::Reset) => session.reset(),
                    Some(Command::Back) => {
                        session.back();
                    }
                    None => {
                        if !input.is_empty() {
                            session.apply_field_change(FieldChange::Intuition(input));
                        }
                        try_advance(&mut session).await;
                    }
                }
            }
            WizardStep::Context => {
                if let Some(cmd) = gather_context(&mut session) {
                    match cmd {
                        Command::Quit => break,
                        Command::Reset => session.reset(),
                        Command::Back => {
                            session.back();
                        }
                    }
                    continue;
                }
                println!("\nTaking a moment with your answers...");
                try_advance(&mut session).await;
            }
            WizardStep::Analysis => {
                render_analysis(&session.view());
                if analysis_menu(&mut session) {
                    break;
                }
            }
            WizardStep::Confidence => {
                // Reserved step; nothing routes here.
                session.reset();
            }
        }
    }

    println!("Goodbye.");
}

/// Advances, printing non-validation failures; validation messages are
/// rendered from the view on the next pass.
async fn try_advance(session: &mut WizardSession) {
    if let Err(err) = session.advance().await {
        if !matches!(err, SessionError::Validation(_)) {
            println!("! {}", err);
        }
    }
}

enum Command {
    Back,
    Reset,
    Quit,
}

fn command(input: &str) -> Option<Command> {
    match input {
        "/back" => Some(Command::Back),
        "/reset" => Some(Command::Reset),
        "/quit" => Some(Command::Quit),
        _ => None,
    }
}

fn prompt(label: &str) -> String {
    print!("{} ", label);
    io::stdout().flush().ok();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return "/quit".to_string();
    }
    line.trim().to_string()
}

fn prompt_slider(label: &str, current: u8) -> Option<i64> {
    let input = prompt(&format!("{} [0-100, enter keeps {}]:", label, current));
    input.parse::<i64>().ok()
}

/// Walks the context inputs. Returns a command if the user issued one.
fn gather_context(session: &mut WizardSession) -> Option<Command> {
    let first = prompt("Option A (leave blank to skip):");
    if let Some(cmd) = command(&first) {
        return Some(cmd);
    }
    session.apply_field_change(FieldChange::Option {
        slot: OptionSlot::First,
        text: first,
    });

    let second = prompt("Option B (leave blank to skip):");
    if let Some(cmd) = command(&second) {
        return Some(cmd);
    }
    session.apply_field_change(FieldChange::Option {
        slot: OptionSlot::Second,
        text: second,
    });

    let stakes = prompt("What is at stake? (optional):");
    if let Some(cmd) = command(&stakes) {
        return Some(cmd);
    }
    session.apply_field_change(FieldChange::Stakes(stakes));

    let view = session.view();
    if let Some(value) = prompt_slider("How logical vs emotional is your thinking?", view.balance_score) {
        session.apply_field_change(FieldChange::BalanceScore(value));
    }
    if let Some(value) = prompt_slider("Short-term vs long-term focus?", view.time_horizon) {
        session.apply_field_change(FieldChange::TimeHorizon(value));
    }

    println!("Which values matter most here? (up to 3, space-separated numbers)");
    for (i, value) in CoreValue::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, value.label());
    }
    let picks = prompt("Values:");
    if let Some(cmd) = command(&picks) {
        return Some(cmd);
    }
    for token in picks.split_whitespace() {
        if let Ok(n) = token.parse::<usize>() {
            if (1..=CoreValue::ALL.len()).contains(&n) {
                session.apply_field_change(FieldChange::ToggleValue(CoreValue::ALL[n - 1]));
            }
        }
    }

    None
}

fn render_analysis(view: &WizardView) {
    let Some(analysis) = &view.analysis else {
        return;
    };

    println!("\n=== Your analysis ===\n");
    println!("{}\n", analysis.recommendation);

    println!("Factors:");
    for factor in &analysis.factors {
        let filled = (factor.score.value() as usize) / 5;
        println!(
            "  {:<28} {:>3}%  {}",
            factor.name,
            factor.score.value(),
            "#".repeat(filled)
        );
    }

    println!(
        "\nTone: {} (positive {:.2}, negative {:.2}, neutral {:.2})",
        analysis.sentiment.tone.label(),
        analysis.sentiment.positive,
        analysis.sentiment.negative,
        analysis.sentiment.neutral
    );

    if !analysis.detected_biases.is_empty() {
        println!("\nPossible thinking traps:");
        for (i, bias) in analysis.detected_biases.iter().enumerate() {
            println!("  {}. {}", i + 1, bias.bias_type.label());
        }
    }

    for conflict in &analysis.value_conflicts {
        println!("\nValue tension: {}", conflict);
    }

    if !analysis.option_positions.is_empty() {
        println!("\nDecision compass (emotional 0 .. 100 logical / short 0 .. 100 long):");
        for (option, pos) in &analysis.option_positions {
            println!("  {:<24} ({}, {})", option, pos.x.value(), pos.y.value());
        }
    }
}

/// Post-analysis affordances. Returns true when the user quits.
fn analysis_menu(session: &mut WizardSession) -> bool {
    loop {
        let input = prompt(
            "\n[c]onfidence, [b]ias detail, [t]hird option, [j]ournal, \
             time capsule [s]chedule, /back, /reset, /quit >",
        );
        match command(&input) {
            Some(Command::Quit) => return true,
            Some(Command::Reset) => {
                session.reset();
                return false;
            }
            Some(Command::Back) => {
                session.back();
                return false;
            }
            None => {}
        }

        match input.as_str() {
            "c" => {
                let current = session.view().confidence_score;
                if let Some(value) = prompt_slider("How confident do you feel now?", current) {
                    session.apply_field_change(FieldChange::ConfidenceScore(value));
                }
            }
            "b" => {
                let view = session.view();
                let biases = view
                    .analysis
                    .as_ref()
                    .map(|a| a.detected_biases.clone())
                    .unwrap_or_default();
                if biases.is_empty() {
                    println!("No thinking traps were flagged.");
                    continue;
                }
                let pick = prompt("Which one? (number):");
                if let Ok(n) = pick.parse::<usize>() {
                    if let Some(bias) = n.checked_sub(1).and_then(|i| biases.get(i)) {
                        session.toggle_bias_detail(bias.bias_type);
                        println!("\n{}", bias.description);
                        println!("Try this: {}", bias.suggestion);
                    }
                }
            }
            "t" => {
                session.reveal_third_option();
                let view = session.view();
                match view.analysis.as_ref().and_then(|a| a.third_option.clone()) {
                    Some(third) => println!("\n{}", third),
                    None => println!("No third path suggested itself this time."),
                }
            }
            "j" => {
                session.open_journal_dialog();
                session.save_journal();
                println!("Saved to your journal for this session.");
            }
            "s" => {
                session.open_time_capsule_dialog();
                session.schedule_time_capsule();
                println!("A future check-in is marked. (Nothing leaves this session.)");
            }
            _ => {}
        }
    }
}
