//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use futures::channel::mpsc::UnboundedSender;
use leptos::prelude::*;
use skill_core::Message;

use crate::api::HttpSkillApi;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Channel into the dispatch loop
    sender: StoredValue<UnboundedSender<Message>, LocalStorage>,
    /// Direct API access for the new skill form
    api: StoredValue<HttpSkillApi, LocalStorage>,
}

impl AppContext {
    pub fn new(sender: UnboundedSender<Message>, api: HttpSkillApi) -> Self {
        Self {
            sender: StoredValue::new_local(sender),
            api: StoredValue::new_local(api),
        }
    }

    /// Send a message to the skill store
    pub fn send(&self, message: Message) {
        self.sender.with_value(|tx| {
            if let Err(e) = tx.unbounded_send(message) {
                web_sys::console::error_1(&format!("[APP] dispatch loop gone: {}", e).into());
            }
        });
    }

    pub fn api(&self) -> HttpSkillApi {
        self.api.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
