//! Dispatch Loop
//!
//! The only owner of the `SkillStore`. Components send messages over the
//! channel; effects run in their own tasks and post their completion back
//! into the same channel.

use futures::channel::mpsc::{self, UnboundedSender};
use futures::StreamExt;
use leptos::task::spawn_local;
use skill_core::{run_effect, Message, SkillApi, SkillStore};

use crate::store::{store_publish, AppStore};

/// Start the loop and return the sending half of its channel
pub fn spawn_dispatcher<A>(api: A, store: AppStore) -> UnboundedSender<Message>
where
    A: SkillApi + Clone + 'static,
{
    let (tx, mut rx) = mpsc::unbounded::<Message>();
    let completions = tx.clone();

    spawn_local(async move {
        let mut skills = SkillStore::new();
        while let Some(message) = rx.next().await {
            if let Message::Failed { operation, reason } = &message {
                web_sys::console::warn_1(&format!("[SKILLS] {} failed: {}", operation, reason).into());
            }

            if let Some(effect) = skills.dispatch(message) {
                let api = api.clone();
                let completions = completions.clone();
                spawn_local(async move {
                    let completion = run_effect(&api, effect).await;
                    let _ = completions.unbounded_send(completion);
                });
            }

            store_publish(&store, &skills);
        }
    });

    tx
}
