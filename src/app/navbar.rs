use leptos::{ev::MouseEvent, prelude::*};

use crate::{
    content::OWNER_FIRST_NAME,
    nav::{MenuState, NAV_LINKS},
};

fn stagger(index: usize, step_ms: usize) -> String {
    format!("animation-delay: {}ms", index * step_ms)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let is_open = move || menu.with(|m| m.open);
    let close = move |_: MouseEvent| menu.update(MenuState::close);

    view! {
        <nav class="drop-in fixed top-0 left-0 w-full bg-gradient-to-r from-[#0f0f2e]/95 to-[#1a0a3e]/95 backdrop-blur-xl z-50 border-b border-purple-500/20">
            <div class="w-full px-6 py-5">
                <div class="flex justify-between items-center">
                    <a href="#home" on:click=close class="drop-in flex items-center gap-2 group">
                        <div class="w-10 h-10 bg-gradient-to-br from-purple-500 to-pink-500 rounded-lg flex items-center justify-center transition-transform duration-300 group-hover:rotate-180 group-hover:scale-110">
                            <span class="text-white font-bold text-lg">"S"</span>
                        </div>
                        <span class="text-xl font-bold bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                            {OWNER_FIRST_NAME}
                        </span>
                    </a>

                    <div class="hidden md:flex items-center gap-8">
                        {NAV_LINKS
                            .iter()
                            .enumerate()
                            .map(|(i, link)| {
                                view! {
                                    <a
                                        href=link.href()
                                        style=stagger(i + 1, 100)
                                        class="drop-in text-gray-300 font-medium relative group hover:text-pink-500 hover:scale-110 transition"
                                    >
                                        {link.label}
                                        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-gradient-to-r from-purple-500 to-pink-500 transition-all duration-300 group-hover:w-full"></span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <a
                        href="#contact"
                        style=stagger(NAV_LINKS.len() + 1, 100)
                        class="drop-in hidden md:block px-8 py-2.5 bg-gradient-to-r from-purple-500 to-pink-500 rounded-lg font-semibold text-white relative overflow-hidden group hover:scale-105 active:scale-95 transition-transform"
                    >
                        <span class="absolute inset-0 bg-gradient-to-r from-pink-500 to-purple-500 translate-x-full group-hover:translate-x-0 transition-transform duration-300"></span>
                        <span class="relative z-10">"Hire Me"</span>
                    </a>

                    <button
                        type="button"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || is_open().to_string()
                        on:click=move |_| menu.update(MenuState::toggle)
                        class="md:hidden p-2 rounded-lg bg-purple-500/10 border border-purple-500/30 hover:scale-110 active:scale-95 transition-transform"
                    >
                        <svg
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            class=move || {
                                if is_open() {
                                    "rotate-90 transition-transform duration-300"
                                } else {
                                    "transition-transform duration-300"
                                }
                            }
                        >
                            <path d="M3 12h18M3 6h18M3 18h18" />
                        </svg>
                    </button>
                </div>

                <div class=move || {
                    if is_open() {
                        "md:hidden overflow-hidden mt-4 max-h-96 opacity-100 transition-all duration-300"
                    } else {
                        "md:hidden overflow-hidden max-h-0 opacity-0 transition-all duration-300"
                    }
                }>
                    <div class="flex flex-col gap-3">
                        {NAV_LINKS
                            .iter()
                            .enumerate()
                            .map(|(i, link)| {
                                view! {
                                    <a
                                        href=link.href()
                                        on:click=close
                                        style=format!("transition-delay: {}ms", i * 50)
                                        class=move || {
                                            let shift = if is_open() {
                                                "translate-x-0 opacity-100"
                                            } else {
                                                "-translate-x-5 opacity-0"
                                            };
                                            format!(
                                                "px-4 py-2 rounded-lg bg-purple-500/10 border border-purple-500/30 text-gray-300 font-medium w-full text-left transition duration-300 {shift}",
                                            )
                                        }
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}
