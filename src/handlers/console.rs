use std::fmt::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::{
    app_state::AppState,
    errors::AppResult,
    handlers::quiz_controller::{Notice, QuizController, ScreenView},
    models::{domain::QuizMode, dto::ChoiceStatus},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectMode(QuizMode),
    SelectChapter(usize),
    Start,
    Choose(String),
    Next,
    Dismiss,
    Restart,
    Help,
    Quit,
    Unknown(String),
}

/// Which command set applies to the line being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    ModeSelect,
    Quiz,
    Other,
}

impl InputContext {
    pub fn of(view: &ScreenView) -> Self {
        match view {
            ScreenView::ModeSelect { .. } => InputContext::ModeSelect,
            ScreenView::Quiz { .. } => InputContext::Quiz,
            _ => InputContext::Other,
        }
    }
}

pub fn parse_command(input: &str, context: InputContext) -> Command {
    let raw = input.trim();
    let lc_cmd = raw.to_lowercase();

    match lc_cmd.as_str() {
        "quit" | "exit" => return Command::Quit,
        "help" | "?" => return Command::Help,
        "restart" => return Command::Restart,
        _ => {}
    }

    match context {
        InputContext::ModeSelect => match lc_cmd.as_str() {
            "random" | "r" => Command::SelectMode(QuizMode::RandomN),
            "chapter" | "c" => Command::SelectMode(QuizMode::SingleChapter),
            "start" | "s" => Command::Start,
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => Command::SelectChapter(n),
                _ => Command::Unknown(raw.to_string()),
            },
        },
        InputContext::Quiz => match lc_cmd.as_str() {
            "next" => Command::Next,
            "close" => Command::Dismiss,
            other if other.chars().count() == 1 => Command::Choose(raw.to_string()),
            _ => Command::Unknown(raw.to_string()),
        },
        InputContext::Other => Command::Unknown(raw.to_string()),
    }
}

pub fn help_text(context: InputContext) -> &'static str {
    match context {
        InputContext::ModeSelect => {
            "Commands:\n  random  -> random questions from all chapters\n  chapter -> one chapter at a time\n  <n>     -> pick chapter number n\n  start   -> begin the quiz\n  quit    -> exit"
        }
        InputContext::Quiz => {
            "Commands:\n  <letter> -> answer with that choice\n  close    -> hide the explanation\n  next     -> next question / results\n  restart  -> back to mode selection\n  quit     -> exit"
        }
        InputContext::Other => "Commands:\n  restart -> back to mode selection\n  quit    -> exit",
    }
}

pub fn render(view: &ScreenView) -> String {
    let mut out = String::new();

    match view {
        ScreenView::Unavailable => {
            out.push_str("Quiz data could not be loaded. Check the question files and start again.\n");
        }
        ScreenView::ModeSelect {
            mode,
            chapter,
            chapters,
            can_start,
            random_limit,
        } => {
            out.push_str("=== Choose a quiz mode ===\n");
            let marker = |selected: bool| if selected { "*" } else { " " };
            let _ = writeln!(
                out,
                " [{}] random  : {} random questions from all chapters",
                marker(*mode == Some(QuizMode::RandomN)),
                random_limit
            );
            let _ = writeln!(
                out,
                " [{}] chapter : one chapter at a time",
                marker(*mode == Some(QuizMode::SingleChapter))
            );

            if *mode == Some(QuizMode::SingleChapter) {
                out.push_str("\nChapters:\n");
                for (i, name) in chapters.iter().enumerate() {
                    let _ = writeln!(
                        out,
                        " {} {:>2}. {}",
                        marker(chapter.as_deref() == Some(name.as_str())),
                        i + 1,
                        name
                    );
                }
            }

            if *can_start {
                out.push_str("\nType 'start' to begin.\n");
            }
        }
        ScreenView::Quiz {
            label,
            question,
            progress,
            explanation,
        } => {
            let _ = writeln!(out, "=== {} ===", label);
            let _ = writeln!(out, "Question {}: {}", question.number, question.text);
            for choice in &question.choices {
                let mark = match choice.status {
                    ChoiceStatus::Selectable | ChoiceStatus::Inactive => " ",
                    ChoiceStatus::Correct => "+",
                    ChoiceStatus::WrongSelection => "x",
                };
                let _ = writeln!(out, " {} {}: {}", mark, choice.label, choice.text);
            }

            if let Some(explanation) = explanation {
                let verdict = if explanation.was_correct { "Correct!" } else { "Incorrect." };
                let _ = writeln!(out, "\n{} The correct answer is: {}", verdict, explanation.correct_text);
                if !explanation.explanation.is_empty() {
                    let _ = writeln!(out, "Explanation: {}", explanation.explanation);
                }
            }

            if question.answered {
                let next = if question.is_last { "see your results" } else { "go on" };
                let _ = writeln!(out, "\nType 'next' to {}.", next);
            }
            let _ = writeln!(
                out,
                "Progress: {} / {} ({:.0}%)",
                progress.position, progress.total, progress.percent
            );
        }
        ScreenView::Result {
            label,
            summary,
            review,
            elapsed_seconds,
        } => {
            out.push_str("=== Quiz summary ===\n");
            let _ = writeln!(out, "Chapter: {}", label);
            let _ = writeln!(out, "Score: {} / {}", summary.correct, summary.total);
            let _ = writeln!(out, "Percentage: {}", summary.percentage_display());
            let _ = writeln!(out, "Correct: {}", summary.correct);
            let _ = writeln!(out, "Incorrect: {}", summary.incorrect);
            if let Some(seconds) = elapsed_seconds {
                let _ = writeln!(out, "Time: {}m {:02}s", seconds / 60, seconds % 60);
            }

            out.push_str("\nReview:\n");
            for item in review {
                let mark = if item.is_correct { "+" } else { "x" };
                let _ = writeln!(out, " {} {}. {}", mark, item.number, item.question);
                if !item.is_correct {
                    let _ = writeln!(
                        out,
                        "      yours: {} | correct: {}",
                        item.selected_text.as_deref().unwrap_or("-"),
                        item.correct_text.as_deref().unwrap_or("-")
                    );
                }
            }
            out.push_str("\nType 'restart' to choose a new mode.\n");
        }
    }

    out
}

/// Applies one command. Returns false when the user asked to quit.
pub fn apply(controller: &mut QuizController, command: Command) -> (bool, Option<String>) {
    let notice: Option<Notice> = match command {
        Command::Quit => return (false, None),
        Command::Help => {
            let context = InputContext::of(&controller.view());
            return (true, Some(help_text(context).to_string()));
        }
        Command::Unknown(raw) => {
            return (true, Some(format!("Unknown command: '{}'. Type 'help' for commands.", raw)))
        }
        Command::SelectMode(mode) => controller.select_mode(mode),
        Command::SelectChapter(n) => {
            let name = match controller.view() {
                ScreenView::ModeSelect { chapters, .. } => {
                    n.checked_sub(1).and_then(|i| chapters.get(i)).cloned()
                }
                _ => None,
            };
            match name {
                Some(name) => controller.select_chapter(&name),
                None => Some(Notice::UnknownChapter(n.to_string())),
            }
        }
        Command::Start => controller.start_quiz(),
        Command::Choose(label) => controller.select_choice_label(&label),
        Command::Next => {
            controller.next_question();
            None
        }
        Command::Dismiss => {
            controller.dismiss_explanation();
            None
        }
        Command::Restart => controller.restart(),
    };

    (true, notice.map(|n| n.to_string()))
}

pub async fn run(state: AppState) -> AppResult<()> {
    let (popup_tx, mut popup_rx) = mpsc::unbounded_channel();
    let mut controller = QuizController::new(state, popup_tx);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", render(&controller.view()));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                let context = InputContext::of(&controller.view());
                let (keep_going, message) = apply(&mut controller, parse_command(&line, context));
                if !keep_going {
                    break;
                }
                if let Some(message) = message {
                    println!("{}\n", message);
                }
                println!("{}", render(&controller.view()));
            }
            Some(event) = popup_rx.recv() => {
                if controller.on_popup_expired(event) {
                    println!("{}", render(&controller.view()));
                }
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
