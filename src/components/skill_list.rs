//! Skill List Component
//!
//! Renders every skill in the store, keyed by id.

use leptos::prelude::*;

use crate::components::SkillItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SkillList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="skill-list">
            <For
                each=move || store.rows().get()
                key=|row| row.id()
                children=move |row| view! { <SkillItem id=row.id() /> }
            />

            <Show when=move || store.rows().read().is_empty()>
                <div class="no-skills-message">"No skills yet"</div>
            </Show>
        </div>
    }
}
