use kanal::{AsyncReceiver, AsyncSender};
use lexa_dictionary::{EntrySummary, Pronunciation};
use lexa_types::{AppEvent, Language, LookupOutcome, OptionMark, QuizQuestion};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

const DEFINITIONS_PER_MEANING: usize = 2;

const HELP: &str = "\
Type to get suggestions, or use a command:
  /s <word>          look up a word
  /open <word>       open a favorite
  /fav [word]        add a favorite (defaults to the current word)
  /unfav [word]      remove a favorite
  /t <text>          translate text
  /lang <src> <tgt>  set languages (en es fr de it pt ru hi ta te)
  /swap              swap languages
  /quiz              start a new quiz
  /a <n|word>        answer the current question
  /q                 quit";

/// Line-based frontend on stdin/stdout
pub async fn console_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut question: Option<QuizQuestion> = None;

    println!("{HELP}");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            event = app_to_ui_rx.recv() => {
                let event = event?;
                match &event {
                    AppEvent::ShowQuestion { question: q, .. } => question = Some(q.clone()),
                    AppEvent::ShowQuizComplete { .. } => question = None,
                    _ => {}
                }
                if let Some(text) = render(&event) {
                    println!("{text}");
                }
            }
            line = lines.next_line() => {
                // EOF behaves like /q
                let event = match line? {
                    Some(line) => match parse_line(&line, question.as_ref()) {
                        Ok(event) => event,
                        Err(usage) => {
                            println!("{usage}");
                            continue;
                        }
                    },
                    None => AppEvent::Quit,
                };

                let quit = matches!(event, AppEvent::Quit);
                ui_to_app_tx.send(event).await?;
                if quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Turn one input line into an event. `Err` carries a message for the user.
pub fn parse_line(line: &str, question: Option<&QuizQuestion>) -> Result<AppEvent, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.strip_prefix('/') else {
        return Ok(AppEvent::InputChanged(line.to_string()));
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    let required = |usage: &str| {
        if rest.is_empty() {
            Err(format!("Usage: {usage}"))
        } else {
            Ok(rest.to_string())
        }
    };

    match name {
        "s" => required("/s <word>").map(AppEvent::Search),
        "open" => required("/open <word>").map(AppEvent::SelectFavorite),
        "fav" => Ok(AppEvent::AddFavorite(rest.to_string())),
        "unfav" => Ok(AppEvent::RemoveFavorite(rest.to_string())),
        "t" => required("/t <text>").map(AppEvent::Translate),
        "lang" => parse_languages(rest),
        "swap" => Ok(AppEvent::SwapLanguages),
        "quiz" => Ok(AppEvent::StartQuiz),
        "a" => parse_answer(rest, question),
        "q" | "quit" => Ok(AppEvent::Quit),
        "help" => Err(HELP.to_string()),
        _ => Err(format!("Unknown command '/{name}'\n{HELP}")),
    }
}

fn parse_languages(rest: &str) -> Result<AppEvent, String> {
    let codes: Vec<&str> = rest.split_whitespace().collect();
    let [source, target] = codes.as_slice() else {
        return Err("Usage: /lang <src> <tgt>".to_string());
    };

    let language = |code: &str| {
        Language::from_code(code).ok_or_else(|| {
            let known: Vec<_> = Language::ALL.iter().map(Language::code).collect();
            format!("Unknown language '{code}', use one of {}", known.join(" "))
        })
    };

    Ok(AppEvent::SetLanguages {
        source: language(*source)?,
        target: language(*target)?,
    })
}

/// Accepts a 1-based option number or the option text itself
fn parse_answer(rest: &str, question: Option<&QuizQuestion>) -> Result<AppEvent, String> {
    let Some(question) = question else {
        return Err("No quiz running, start one with /quiz".to_string());
    };
    if rest.is_empty() {
        return Err("Usage: /a <n|word>".to_string());
    }

    match rest.parse::<usize>() {
        Ok(n) => question
            .options
            .get(n.wrapping_sub(1))
            .cloned()
            .map(AppEvent::AnswerQuiz)
            .ok_or_else(|| format!("Pick a number between 1 and {}", question.options.len())),
        Err(_) => Ok(AppEvent::AnswerQuiz(rest.to_string())),
    }
}

/// Text shown for an app event, if any
pub fn render(event: &AppEvent) -> Option<String> {
    let text = match event {
        AppEvent::ShowSuggestions(suggestions) if suggestions.is_empty() => return None,
        AppEvent::ShowSuggestions(suggestions) => {
            let words: Vec<_> = suggestions.iter().map(|s| s.word.as_str()).collect();
            format!("  > {}", words.join(", "))
        }
        AppEvent::ShowLoading(term) => format!("Looking up '{term}'..."),
        AppEvent::ShowLookup { term, outcome } => match outcome {
            LookupOutcome::Found(entry) => {
                render_entry(&EntrySummary::from_entry(entry, DEFINITIONS_PER_MEANING))
            }
            LookupOutcome::NotFound => format!("No definition found for '{term}'"),
            LookupOutcome::TransientError(_) => {
                format!("Could not look up '{term}' right now. Please try again.")
            }
        },
        AppEvent::ShowLanguages {
            source,
            target,
            text,
        } => {
            let mut line = format!("Translating {} -> {}", source.label(), target.label());
            if !text.is_empty() {
                line.push_str(&format!("\n  input: {text}"));
            }
            line
        }
        AppEvent::ShowTranslation { text, provider } => format!("{text}  [{provider}]"),
        AppEvent::ShowTranslationError(message) | AppEvent::Status(message) => message.clone(),
        AppEvent::ShowFavorites(words) if words.is_empty() => "No favorites yet".to_string(),
        AppEvent::ShowFavorites(words) => format!("Favorites: {}", words.join(", ")),
        AppEvent::ShowQuestion {
            index,
            total,
            question,
        } => {
            let mut text = format!("Question {}/{}: {}", index + 1, total, question.prompt());
            for (i, option) in question.options.iter().enumerate() {
                text.push_str(&format!("\n  {}) {}", i + 1, option));
            }
            text
        }
        AppEvent::ShowAnswer {
            marks,
            correct,
            score,
        } => {
            let mut text = if *correct {
                format!("Correct! Score: {score}")
            } else {
                format!("Wrong. Score: {score}")
            };
            for (option, mark) in marks {
                let symbol = match mark {
                    OptionMark::Correct => "+",
                    OptionMark::Wrong => "x",
                    OptionMark::Neutral => " ",
                };
                text.push_str(&format!("\n  [{symbol}] {option}"));
            }
            text
        }
        AppEvent::ShowQuizComplete { score, total } => format!("Quiz complete: {score}/{total}"),
        _ => return None,
    };

    Some(text)
}

fn render_entry(summary: &EntrySummary) -> String {
    let mut text = summary.word.clone();
    if let Some(phonetic) = &summary.phonetic {
        text.push_str(&format!("  {phonetic}"));
    }
    // Speech synthesis is left to whoever plays it back
    if let Pronunciation::Audio(url) = &summary.pronunciation {
        text.push_str(&format!("\n  audio: {url}"));
    }

    for meaning in &summary.meanings {
        text.push_str(&format!("\n  {}", meaning.part_of_speech));
        for (i, definition) in meaning.definitions.iter().enumerate() {
            text.push_str(&format!("\n    {}. {}", i + 1, definition));
        }
    }
    text
}
