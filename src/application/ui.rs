use std::io;
use std::io::BufRead;
use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::UIMessageType;
use crate::domain::services::actions::ActionProvider;
use crate::domain::services::actions::STORAGE_KEY_OPENAPI;
use crate::domain::services::MessageAdapter;
use crate::domain::services::SessionState;
use crate::domain::services::SessionStore;
use crate::infrastructure::backends::genai::GenAi;
use crate::infrastructure::storage::FileStorage;
use crate::infrastructure::storage::StorageBox;

fn print_messages_from(store: &SessionStore, from_idx: usize) {
    let messages = &store.state().messages[from_idx..];

    for ui_message in MessageAdapter::to_ui(messages) {
        match ui_message.mtype {
            UIMessageType::Bot => println!("{} {}", "bot>".green(), ui_message.message),
            UIMessageType::User => println!("{} {}", "you>".dimmed(), ui_message.message),
        }
    }
}

/// Minimal line-oriented conversation surface. Input handling and
/// rendering run on one cooperative thread; the only suspension points
/// are the backend calls inside `dispatch`, and an in-flight call is
/// never cancelled.
pub async fn start() -> Result<()> {
    let storage: StorageBox = Arc::new(FileStorage::default());
    let access_token = Config::get(ConfigKey::AccessToken);

    let seed = SessionState {
        openapi_key: storage.get(STORAGE_KEY_OPENAPI),
        initializing: false,
        initialization_required: false,
        access_token: access_token.to_string(),
        is_logged_in: !access_token.is_empty(),
        role: Config::get(ConfigKey::Role),
        messages: vec![],
    };

    let mut store = SessionStore::new(seed);
    let provider = ActionProvider::new(Box::<GenAi>::default(), storage);

    if store.state().is_logged_in {
        provider.bootstrap(&mut store).await;
    }
    print_messages_from(&store, 0);

    let username = Config::get(ConfigKey::Username);
    let stdin = io::stdin();

    loop {
        print!("{} ", format!("{username}>").dimmed());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim_end_matches(['\n', '\r']).to_string();
        if input.trim().is_empty() && !store.state().initializing {
            continue;
        }

        let before = store.state().messages.len();
        provider.dispatch(&mut store, &input).await;
        print_messages_from(&store, before);
    }

    return Ok(());
}
