//! Telegram handlers and dispatcher wiring
//!
//! Два обработчика: команда /start с инлайн-клавиатурой и колбэки выбора
//! случайного героя или факта. Все обработчики stateless, общие данные
//! доступны только на чтение через `AppState`.

use std::sync::Arc;

use anyhow::Result;
use reqwest::Url;
use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode};
use tracing::warn;

use crate::data::Catalog;
use crate::error::Error;

/// Callback data for the random hero button.
pub const CALLBACK_RANDOM_HERO: &str = "random_hero";

/// Callback data for the random fact button.
pub const CALLBACK_RANDOM_FACT: &str = "random_fact";

/// Greeting sent in reply to /start.
pub const GREETING: &str = "🇧🇾 Привет! Это проект *Героі Беларусі*\n\nВыбери действие:";

const EMPTY_DATASET_REPLY: &str = "📭 Данные пока не загружены. Попробуйте позже.";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub miniapp_url: Url,
}

/// Build the fixed main keyboard.
///
/// Always the same three actions, regardless of dataset contents.
pub fn main_keyboard(miniapp_url: &Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::url(
            "🌐 Открыть мини-приложение",
            miniapp_url.clone(),
        )],
        vec![InlineKeyboardButton::callback(
            "🎖️ Случайный герой",
            CALLBACK_RANDOM_HERO,
        )],
        vec![InlineKeyboardButton::callback(
            "💡 Интересный факт",
            CALLBACK_RANDOM_FACT,
        )],
    ])
}

/// Handle the /start command.
pub async fn handle_start(bot: Bot, msg: Message, state: AppState) -> Result<()> {
    bot.send_message(msg.chat.id, GREETING)
        .parse_mode(ParseMode::Markdown)
        .reply_markup(main_keyboard(&state.miniapp_url))
        .await?;

    Ok(())
}

/// Handle callback queries from the inline keyboard.
///
/// Draws one random entry and edits the triggering message in place. An
/// empty dataset answers the callback with an alert and leaves the message
/// untouched.
pub async fn handle_callback(bot: Bot, q: CallbackQuery, state: AppState) -> Result<()> {
    let data = q.data.as_deref().unwrap_or("");

    let selection = match data {
        CALLBACK_RANDOM_HERO => state.catalog.random_hero().map(|h| h.as_markdown()),
        CALLBACK_RANDOM_FACT => state.catalog.random_fact().map(|f| f.as_markdown()),
        _ => {
            bot.answer_callback_query(&q.id)
                .text("Неизвестная команда")
                .await?;
            return Ok(());
        }
    };

    let text = match selection {
        Ok(text) => text,
        Err(Error::EmptyDataset(name)) => {
            warn!(dataset = name, "Selection against an empty dataset");
            bot.answer_callback_query(&q.id)
                .text(EMPTY_DATASET_REPLY)
                .show_alert(true)
                .await?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    bot.answer_callback_query(&q.id).await?;

    if let Some(msg) = &q.message {
        bot.edit_message_text(msg.chat.id, msg.id, text)
            .parse_mode(ParseMode::Markdown)
            .await?;
    }

    Ok(())
}

/// Run the long-polling dispatcher until interrupted.
pub async fn run(bot: Bot, state: AppState) {
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter(|msg: Message| msg.text() == Some("/start"))
                .endpoint({
                    let state = state.clone();
                    move |bot, msg| handle_start(bot, msg, state.clone())
                }),
        )
        .branch(Update::filter_callback_query().endpoint({
            let state = state.clone();
            move |bot, q| handle_callback(bot, q, state.clone())
        }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn test_url() -> Url {
        Url::parse("https://example.com/app").unwrap()
    }

    #[test]
    fn main_keyboard_offers_exactly_three_actions() {
        let markup = main_keyboard(&test_url());

        assert_eq!(markup.inline_keyboard.len(), 3);
        for row in &markup.inline_keyboard {
            assert_eq!(row.len(), 1);
        }
    }

    #[test]
    fn first_button_opens_miniapp_url() {
        let markup = main_keyboard(&test_url());

        match &markup.inline_keyboard[0][0].kind {
            InlineKeyboardButtonKind::Url(url) => {
                assert_eq!(url.as_str(), "https://example.com/app")
            }
            other => panic!("Expected URL button, got {:?}", other),
        }
    }

    #[test]
    fn selection_buttons_carry_expected_callback_data() {
        let markup = main_keyboard(&test_url());

        match &markup.inline_keyboard[1][0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => {
                assert_eq!(data, CALLBACK_RANDOM_HERO)
            }
            other => panic!("Expected callback button, got {:?}", other),
        }
        match &markup.inline_keyboard[2][0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => {
                assert_eq!(data, CALLBACK_RANDOM_FACT)
            }
            other => panic!("Expected callback button, got {:?}", other),
        }
    }

    #[test]
    fn keyboard_labels_are_not_empty() {
        let markup = main_keyboard(&test_url());

        for row in &markup.inline_keyboard {
            assert!(!row[0].text.is_empty());
        }
    }

    #[test]
    fn greeting_mentions_project_name() {
        assert!(GREETING.contains("Героі Беларусі"));
    }

    #[test]
    fn app_state_clone_shares_catalog() {
        let state = AppState {
            catalog: Arc::new(Catalog::new(vec![], vec![])),
            miniapp_url: test_url(),
        };

        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.catalog, &cloned.catalog));
        assert_eq!(state.miniapp_url, cloned.miniapp_url);
    }
}
