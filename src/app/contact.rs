use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::{
    animations::{ConfettiEffect, ShimmerEffect},
    reveal::{Motion, Reveal},
};
use crate::{
    contact::{ContactForm, ContactMessage, Field, CONFIRMATION_MS},
    content::{CONTACT_METHODS, HIRE_REASONS, SOCIAL_LINKS},
};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-gray-800/50 border border-purple-500/30 rounded-lg text-white placeholder-gray-500 focus:outline-none focus:border-purple-500 focus:shadow-[0_0_20px_rgba(168,85,247,0.3)] transition";

#[server]
pub async fn send_message(message: ContactMessage) -> Result<(), ServerFnError> {
    use crate::relay::RelayClient;

    let relay = RelayClient::from_context()?;
    relay.send(&message).await.map_err(|e| {
        tracing::error!("Email send error: {e}");
        e.to_server_error()
    })
}

#[component]
fn FormField(field: Field, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.fields.get(field).to_string());
    let on_input = move |ev: Event| form.update(|f| f.set(field, event_target_value(&ev)));

    let control = if field.is_multiline() {
        Either::Left(view! {
            <textarea
                name=field.label().to_lowercase()
                rows="5"
                required
                placeholder=field.placeholder()
                class=format!("{INPUT_CLASS} resize-none")
                prop:value=value
                on:input=on_input
            ></textarea>
        })
    } else {
        Either::Right(view! {
            <input
                type=field.input_type()
                name=field.label().to_lowercase()
                required
                placeholder=field.placeholder()
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            />
        })
    };

    view! {
        <label class="block">
            <span class="block text-white font-semibold mb-2">{field.label()}</span>
            {control}
        </label>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let send = ServerAction::<SendMessage>::new();
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| form.update(ContactForm::clear_confirmation),
        CONFIRMATION_MS,
    );

    Effect::new(move |_| {
        let Some(outcome) = send.value().get() else {
            return;
        };
        if let Err(e) = &outcome {
            log::error!("Email send error: {e}");
        }
        if form.try_update(|f| f.finish(&outcome)).unwrap_or(false) {
            start(());
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(message) = form.try_update(ContactForm::begin_submit) {
            send.dispatch(SendMessage { message });
        }
    };

    let submitting = move || form.with(|f| f.submitting);

    view! {
        <section
            id="contact"
            class="relative min-h-screen w-full bg-gradient-to-b from-[#0f0f2e] via-[#1a0a3e] to-[#0f0f2e] py-32 px-6 overflow-hidden"
        >
            <div class="absolute top-20 right-10 w-80 h-80 bg-gradient-to-br from-purple-500 to-pink-500 rounded-full blur-3xl opacity-10"></div>
            <div class="absolute bottom-20 left-10 w-96 h-96 bg-gradient-to-tr from-blue-500 to-purple-500 rounded-full blur-3xl opacity-10"></div>

            <Show when=move || form.with(|f| f.submitted)>
                <ConfettiEffect />
            </Show>

            <div class="relative z-10 max-w-6xl mx-auto">
                <Reveal class="space-y-4 mb-16 text-center">
                    <p class="text-purple-400 font-semibold text-lg">"📬 GET IN TOUCH"</p>
                    <h2 class="text-5xl md:text-6xl font-bold text-white">"Let's Work Together"</h2>
                    <p class="text-gray-400 text-xl max-w-2xl mx-auto">
                        "Have a project in mind? Let's create something amazing together. Feel free to reach out!"
                    </p>
                </Reveal>

                <div class="grid lg:grid-cols-2 gap-12">
                    <Reveal motion=Motion::Left class="space-y-8">
                        <div class="space-y-6">
                            {CONTACT_METHODS
                                .into_iter()
                                .map(|method| {
                                    view! {
                                        <div class="flex items-center gap-4 p-6 rounded-xl bg-gradient-to-br from-purple-900/30 to-pink-900/30 border border-purple-500/30 hover:border-purple-500/60 hover:translate-x-2 transition">
                                            <div class=format!(
                                                "w-14 h-14 rounded-lg bg-gradient-to-br {} flex items-center justify-center text-2xl",
                                                method.color,
                                            )>{method.icon}</div>
                                            <div>
                                                <p class="text-gray-400 text-sm">{method.title}</p>
                                                <p class="text-white font-semibold">{method.value}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div>
                            <p class="text-white font-semibold mb-4">"Connect with me"</p>
                            <div class="flex gap-4">
                                {SOCIAL_LINKS
                                    .into_iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=link.label
                                                class=format!(
                                                    "w-12 h-12 rounded-lg bg-gradient-to-br {} flex items-center justify-center text-xl hover:scale-110 hover:-translate-y-1 active:scale-95 transition",
                                                    link.color,
                                                )
                                            >
                                                {link.icon}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="p-6 rounded-xl bg-gradient-to-br from-purple-900/40 to-pink-900/40 border border-purple-500/30">
                            <p class="text-white font-semibold mb-4">"Why work with me?"</p>
                            <ul class="space-y-3">
                                {HIRE_REASONS
                                    .into_iter()
                                    .map(|reason| {
                                        view! {
                                            <li class="flex items-center gap-3 text-gray-300">
                                                <span class="text-green-400">"✓"</span>
                                                {reason}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </Reveal>

                    <Reveal motion=Motion::Scale delay_ms=100>
                        <form
                            on:submit=on_submit
                            class="space-y-6 p-8 rounded-2xl bg-gradient-to-br from-gray-900/50 to-gray-800/50 border border-purple-500/30"
                        >
                            {Field::ALL
                                .into_iter()
                                .map(|field| view! { <FormField field form /> })
                                .collect_view()}

                            {move || {
                                form.with(|f| f.error)
                                    .map(|error| {
                                        view! {
                                            <div
                                                role="alert"
                                                class="p-4 rounded-lg bg-red-500/20 border border-red-500/40 text-red-300 text-sm"
                                            >
                                                {error}
                                            </div>
                                        }
                                    })
                            }}

                            <button
                                type="submit"
                                disabled=submitting
                                class="w-full px-8 py-4 bg-gradient-to-r from-purple-500 to-pink-500 rounded-lg font-semibold text-white relative overflow-hidden group hover:scale-[1.02] active:scale-95 disabled:opacity-70 disabled:cursor-not-allowed transition"
                            >
                                <Show when=submitting>
                                    <span class="absolute inset-0 opacity-50">
                                        <ShimmerEffect height="100%" />
                                    </span>
                                </Show>
                                <span class="relative z-10">
                                    {move || form.with(ContactForm::button_label)}
                                </span>
                            </button>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
