use crate::db::PlayerSettings;
use crate::signup::{revert_when_due, SignupStub};
use dioxus::prelude::*;

const IDLE_LABEL: &str = "Notify me";

/// Email signup - confirms on the button for a moment, then reverts.
#[component]
pub fn SignupForm(settings: PlayerSettings) -> Element {
    let mut signup = use_signal(|| SignupStub::new(IDLE_LABEL, &settings));

    let (email, label, style) = {
        let form = signup.read();
        let style = form
            .button_background()
            .map(|color| format!("background: {color};"))
            .unwrap_or_default();
        (
            form.email_input().to_string(),
            form.button_label().to_string(),
            style,
        )
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let receipt = signup.write().submit();
        spawn(async move {
            revert_when_due(&receipt, move |ticket| signup.write().revert(ticket)).await;
        });
    };

    rsx! {
        form { id: "signupForm", class: "signup-form", onsubmit: on_submit,
            p { class: "signup-blurb", "Get notified when new chapters drop." }
            input {
                r#type: "email",
                name: "email",
                placeholder: "you@example.com",
                value: "{email}",
                oninput: move |evt: FormEvent| signup.write().set_email_input(evt.value()),
            }
            button { r#type: "submit", style: "{style}", "{label}" }
        }
    }
}
