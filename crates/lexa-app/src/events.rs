use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexa_config::Config;
use lexa_core::state::AppState;
use lexa_core::{Favorites, JsonFileStore, ProviderClient};
use lexa_dictionary::{
    DatamuseClient, FreeDictionaryClient, LookupCoordinator, SuggestionSource, SuggestionStream,
    WordSource,
};
use lexa_quiz::WordBank;
use lexa_translator::{TranslationResolver, TranslatorPanel};
use lexa_types::AppEvent;

pub mod favorites;
pub mod quiz;
pub mod search;
pub mod suggest;
pub mod translate;

use favorites::{handle_add_favorite, handle_remove_favorite};
use quiz::{QuizState, handle_answer, handle_quiz_advance, handle_start_quiz};
use search::{handle_lookup_finished, handle_search};
use suggest::{handle_input_changed, handle_suggestions_ready};
use translate::{
    handle_set_languages, handle_swap, handle_translate, handle_translation_finished,
};

/// External collaborators the event loop talks to
pub struct Providers {
    pub words: Arc<dyn WordSource>,
    pub suggestions: Arc<dyn SuggestionSource>,
    pub resolver: Arc<TranslationResolver>,
}

impl Providers {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = ProviderClient::new(&config.network)?;

        Ok(Self {
            words: Arc::new(FreeDictionaryClient::new(
                client.clone(),
                config.dictionary.lookup_url.clone(),
            )),
            suggestions: Arc::new(DatamuseClient::new(
                client.clone(),
                config.dictionary.suggest_url.clone(),
            )),
            resolver: Arc::new(TranslationResolver::from_config(&client, &config.translator)),
        })
    }
}

/// Everything the event loop owns. Only the loop mutates it.
pub struct AppContext {
    pub suggestions: SuggestionStream,
    pub lookup: LookupCoordinator,
    pub panel: TranslatorPanel,
    pub resolver: Arc<TranslationResolver>,
    pub favorites: Favorites,
    pub quiz: QuizState,
    /// Where spawned tasks report back to
    pub completions: AsyncSender<AppEvent>,
}

impl AppContext {
    pub fn new(
        config: &Config,
        providers: Providers,
        favorites: Favorites,
        bank: WordBank,
        completions: AsyncSender<AppEvent>,
    ) -> Self {
        Self {
            suggestions: SuggestionStream::new(
                providers.suggestions,
                config.dictionary.max_suggestions,
                completions.clone(),
            ),
            lookup: LookupCoordinator::new(providers.words, completions.clone()),
            panel: TranslatorPanel::new(config.translator.source_lang, config.translator.target_lang),
            resolver: providers.resolver,
            favorites,
            quiz: QuizState::new(bank, &config.quiz),
            completions,
        }
    }

    pub fn from_config(config: &Config, completions: AsyncSender<AppEvent>) -> anyhow::Result<Self> {
        let providers = Providers::from_config(config)?;
        let store = JsonFileStore::open(&config.favorites.path)?;
        let favorites = Favorites::load(Arc::new(store));
        let bank = load_word_bank(config.quiz.word_bank_path.as_deref())?;

        Ok(Self::new(config, providers, favorites, bank, completions))
    }
}

fn load_word_bank(path: Option<&str>) -> anyhow::Result<WordBank> {
    if let Some(path) = path {
        match WordBank::load_from_file(path) {
            Ok(bank) => return Ok(bank),
            Err(e) => tracing::warn!("Custom word bank unusable, using embedded one: {}", e),
        }
    }
    Ok(WordBank::embedded()?)
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let context = AppContext::from_config(&state.config, ui_to_app_tx)?;

    run(context, ui_to_app_rx, app_to_ui_tx).await
}

/// Drive `context` until the frontend quits or hangs up
pub async fn run(
    mut context: AppContext,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::ShowLanguages {
            source: context.panel.source,
            target: context.panel.target,
            text: context.panel.input.clone(),
        })
        .await?;
    app_to_ui_tx
        .send(AppEvent::ShowFavorites(context.favorites.words().to_vec()))
        .await?;

    tracing::info!("Event loop started");
    loop {
        let event = ui_to_app_rx.recv().await?;
        if matches!(event, AppEvent::Quit) {
            tracing::info!("Quit requested");
            return Ok(());
        }

        handle_events(&mut context, &app_to_ui_tx, event).await?;
    }
}

async fn handle_events(
    context: &mut AppContext,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::InputChanged(text) => {
            handle_input_changed(context, text, app_to_ui_tx).await?;
        }
        AppEvent::SuggestionsReady(update) => {
            handle_suggestions_ready(context, update, app_to_ui_tx).await?;
        }
        AppEvent::Search(raw) | AppEvent::SelectFavorite(raw) => {
            handle_search(context, raw, app_to_ui_tx).await?;
        }
        AppEvent::LookupFinished(update) => {
            handle_lookup_finished(context, update, app_to_ui_tx).await?;
        }
        AppEvent::AddFavorite(word) => {
            handle_add_favorite(context, word, app_to_ui_tx).await?;
        }
        AppEvent::RemoveFavorite(word) => {
            handle_remove_favorite(context, word, app_to_ui_tx).await?;
        }
        AppEvent::Translate(text) => {
            handle_translate(context, text, app_to_ui_tx).await?;
        }
        AppEvent::TranslationFinished { generation, outcome } => {
            handle_translation_finished(context, generation, outcome, app_to_ui_tx).await?;
        }
        AppEvent::SetLanguages { source, target } => {
            handle_set_languages(context, source, target, app_to_ui_tx).await?;
        }
        AppEvent::SwapLanguages => {
            handle_swap(context, app_to_ui_tx).await?;
        }
        AppEvent::StartQuiz => {
            handle_start_quiz(context, app_to_ui_tx).await?;
        }
        AppEvent::AnswerQuiz(choice) => {
            handle_answer(context, choice, app_to_ui_tx).await?;
        }
        AppEvent::QuizAdvance { session_id, index } => {
            handle_quiz_advance(context, session_id, index, app_to_ui_tx).await?;
        }
        AppEvent::Quit => {}
        // Frontend-only events
        AppEvent::ShowSuggestions(_)
        | AppEvent::ShowLoading(_)
        | AppEvent::ShowLookup { .. }
        | AppEvent::ShowLanguages { .. }
        | AppEvent::ShowTranslation { .. }
        | AppEvent::ShowTranslationError(_)
        | AppEvent::ShowFavorites(_)
        | AppEvent::ShowQuestion { .. }
        | AppEvent::ShowAnswer { .. }
        | AppEvent::ShowQuizComplete { .. }
        | AppEvent::Status(_) => {
            tracing::debug!("Ignoring frontend event in backend");
        }
    }

    Ok(())
}
