//! Skill Board App
//!
//! Root component: wires the store, dispatch loop and API together.

use leptos::prelude::*;
use reactive_stores::Store;
use skill_core::Message;

use crate::api::HttpSkillApi;
use crate::components::{NewSkillForm, SkillList};
use crate::context::AppContext;
use crate::dispatch::spawn_dispatcher;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let api = HttpSkillApi::from_window();
    let sender = spawn_dispatcher(api.clone(), store);
    let ctx = AppContext::new(sender, api);
    provide_context(ctx);

    // Load skills on mount
    ctx.send(Message::Load);

    view! {
        <main class="skill-board">
            <h1>"Skills"</h1>

            <NewSkillForm />

            <SkillList />

            <p class="skill-count">{move || skill_count(store.rows().read().len())}</p>
        </main>
    }
}

fn skill_count(n: usize) -> String {
    match n {
        1 => "1 skill".to_string(),
        n => format!("{} skills", n),
    }
}
