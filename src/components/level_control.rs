//! Level Control Component
//!
//! Shows the level with -/+ buttons. Out-of-range presses are dropped by the
//! store, so the buttons never need disabling.

use leptos::prelude::*;
use skill_core::{Level, Message, SkillId};

use crate::context::use_app_context;

#[component]
pub fn LevelControl(id: SkillId, #[prop(into)] level: Signal<Level>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <p class="skill-level">
            <button class="level-btn" on:click=move |_| ctx.send(Message::Decrease(id))>"-"</button>
            <strong>"Level: "</strong>
            <span class=move || format!("level level-{}", level.get())>{move || level.get().as_str()}</span>
            <button class="level-btn" on:click=move |_| ctx.send(Message::Increase(id))>"+"</button>
        </p>
    }
}
