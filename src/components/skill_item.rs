//! Skill Item Component
//!
//! One skill: name/details in view or edit mode, level control, delete.
//! The edit mode and unsaved field values live in the store row.

use leptos::prelude::*;
use skill_core::{EditorMode, Level, Message, SkillId, SkillRow};

use crate::components::LevelControl;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// A single skill card
#[component]
pub fn SkillItem(id: SkillId) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let row: Memo<Option<SkillRow>> =
        Memo::new(move |_| store.rows().read().iter().find(|r| r.id() == id).cloned());
    let is_editing = Memo::new(move |_| row.with(|r| r.as_ref().is_some_and(SkillRow::is_editing)));

    let name = move || row.with(|r| r.as_ref().map(|r| r.skill.name.clone()).unwrap_or_default());
    let details = move || row.with(|r| r.as_ref().map(|r| r.skill.details.clone()).unwrap_or_default());
    let level = Signal::derive(move || row.with(|r| r.as_ref().map(|r| r.skill.level).unwrap_or(Level::Bad)));

    // Unsaved field contents while editing
    let draft_name = move || {
        row.with(|r| match r.as_ref().map(|r| &r.mode) {
            Some(EditorMode::Editing { name, .. }) => name.clone(),
            _ => String::new(),
        })
    };
    let draft_details = move || {
        row.with(|r| match r.as_ref().map(|r| &r.mode) {
            Some(EditorMode::Editing { details, .. }) => details.clone(),
            _ => String::new(),
        })
    };

    view! {
        <div class="skill">
            <Show
                when=move || is_editing.get()
                fallback=move || view! { <h3 class="skill-name">{name}</h3> }
            >
                <input
                    type="text"
                    class="skill-name-input"
                    prop:value=draft_name
                    on:input=move |ev| ctx.send(Message::EditName(id, event_target_value(&ev)))
                />
            </Show>

            <LevelControl id=id level=level />

            <Show
                when=move || is_editing.get()
                fallback=move || view! { <p class="skill-details">{details}</p> }
            >
                <textarea
                    class="skill-details-input"
                    prop:value=draft_details
                    on:input=move |ev| ctx.send(Message::EditDetails(id, event_target_value(&ev)))
                ></textarea>
            </Show>

            <button class="delete-btn" on:click=move |_| ctx.send(Message::RequestDelete(id))>
                "Delete"
            </button>

            <button class="edit-btn" on:click=move |_| ctx.send(Message::ToggleEdit(id))>
                {move || if is_editing.get() { "Submit" } else { "Edit" }}
            </button>
        </div>
    }
}
