//! New Skill Form Component
//!
//! Creates a skill straight against the API, then hands the server's record
//! to the store. A rejected submit leaves the fields as typed, and only one
//! create is in flight at a time.

use leptos::prelude::*;
use leptos::task::spawn_local;
use skill_core::{Message, NewSkillForm as FormFields};

use crate::context::use_app_context;

#[component]
pub fn NewSkillForm() -> impl IntoView {
    let ctx = use_app_context();
    let fields = RwSignal::new(FormFields::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);

        let api = ctx.api();
        let mut form = fields.get_untracked();
        let sent = form.draft();

        spawn_local(async move {
            match form.submit(&api).await {
                Ok(skill) => {
                    fields.update(|f| {
                        f.clear_if_unchanged(&sent);
                    });
                    ctx.send(Message::Created(skill));
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("[NEW SKILL] not created: {}", e).into());
                }
            }
            pending.set(false);
        });
    };

    view! {
        <form class="new-skill-form" on:submit=submit>
            <input
                type="text"
                placeholder="Enter name of skill"
                prop:value=move || fields.with(|f| f.name.clone())
                on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Details"
                prop:value=move || fields.with(|f| f.details.clone())
                on:input=move |ev| fields.update(|f| f.details = event_target_value(&ev))
            />
            <button type="submit" disabled=move || pending.get()>"Submit"</button>
        </form>
    }
}
