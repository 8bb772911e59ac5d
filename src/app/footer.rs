use leptos::{ev::SubmitEvent, prelude::*};

use super::reveal::{Motion, Reveal};
use crate::{
    content::{build_year, OWNER_FIRST_NAME},
    effects::scatter,
    nav::NAV_LINKS,
};

const FOOTER_ICONS: [&str; 3] = ["🐙", "💼", "🐦"];
const PARTICLES: usize = 3;

#[component]
pub fn Footer() -> impl IntoView {
    let year = build_year();

    view! {
        <footer class="relative bg-gradient-to-t from-[#0a0a20] to-[#0f0f2e] border-t border-purple-500/20 overflow-hidden">
            <div class="absolute top-0 left-20 w-64 h-64 bg-gradient-to-br from-purple-500 to-blue-500 rounded-full blur-3xl opacity-5"></div>
            <div class="absolute bottom-0 right-20 w-64 h-64 bg-gradient-to-tl from-pink-500 to-purple-500 rounded-full blur-3xl opacity-5"></div>

            <div class="relative z-10 w-full px-6 py-20">
                <div class="grid md:grid-cols-3 gap-12 mb-12">
                    <Reveal delay_ms=200 class="space-y-4">
                        <div class="flex items-center gap-2 group hover:scale-105 transition-transform">
                            <div class="w-10 h-10 bg-gradient-to-br from-purple-500 to-pink-500 rounded-lg flex items-center justify-center group-hover:rotate-180 transition-transform duration-500">
                                <span class="text-white font-bold text-lg">"S"</span>
                            </div>
                            <span class="text-xl font-bold bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                                {OWNER_FIRST_NAME}
                            </span>
                        </div>
                        <p class="text-gray-400 text-sm leading-relaxed">
                            "Building beautiful, animated web experiences with modern frontend tooling."
                        </p>
                        <div class="flex gap-3 pt-2">
                            {FOOTER_ICONS
                                .into_iter()
                                .map(|icon| {
                                    view! {
                                        <button
                                            type="button"
                                            class="text-2xl hover:scale-110 hover:rotate-12 active:scale-90 transition"
                                        >
                                            {icon}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal delay_ms=300 class="space-y-4">
                        <h4 class="font-semibold text-white text-lg">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {NAV_LINKS
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <li class="hover:translate-x-1 transition-transform">
                                            <a
                                                href=link.href()
                                                class="text-gray-400 hover:text-purple-400 transition text-sm"
                                            >
                                                {link.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Reveal>

                    <Reveal delay_ms=400 class="space-y-4">
                        <h4 class="font-semibold text-white text-lg">"Newsletter"</h4>
                        <p class="text-gray-400 text-sm">
                            "Subscribe to get notified about my latest projects."
                        </p>
                        // no subscription backend; the form only swallows the submit
                        <form class="flex gap-2" on:submit=|ev: SubmitEvent| ev.prevent_default()>
                            <input
                                type="email"
                                placeholder="Your email"
                                class="flex-1 px-4 py-2 rounded-lg bg-gray-800/50 border border-gray-700 text-white text-sm focus:outline-none focus:border-purple-500 focus:scale-[1.02] transition"
                            />
                            <button
                                type="submit"
                                class="px-4 py-2 bg-gradient-to-r from-purple-500 to-pink-500 rounded-lg text-white font-semibold text-sm hover:scale-105 active:scale-95 transition-transform"
                            >
                                "Subscribe"
                            </button>
                        </form>
                    </Reveal>
                </div>

                <Reveal motion=Motion::Fade>
                    <div class="h-px bg-gradient-to-r from-transparent via-purple-500 to-transparent mb-8"></div>
                </Reveal>

                <Reveal class="flex flex-col md:flex-row justify-between items-center gap-4">
                    <p class="text-gray-400 text-sm text-center md:text-left">
                        {format!("© {year} {OWNER_FIRST_NAME}. All rights reserved. | Built with ")}
                        <span class="text-pink-500">"❤️"</span>
                        " using Rust & Leptos"
                    </p>
                    <a
                        href="#home"
                        class="px-6 py-2 rounded-full bg-purple-500/20 border border-purple-500/40 text-purple-300 hover:border-purple-500/60 hover:scale-110 hover:shadow-[0_0_20px_rgba(168,85,247,0.3)] active:scale-95 transition text-sm font-medium"
                    >
                        "Back to Top ↑"
                    </a>
                </Reveal>
            </div>

            {(0..PARTICLES)
                .map(|i| {
                    let left = scatter(i, 1) * 100.0;
                    let top = scatter(i, 2) * 100.0;
                    let duration = 8.0 + scatter(i, 3) * 4.0;
                    view! {
                        <div
                            class="absolute w-2 h-2 rounded-full bg-gradient-to-r from-purple-500 to-pink-500 opacity-20 animate-float"
                            style=format!(
                                "left: {left:.1}%; top: {top:.1}%; animation-duration: {duration:.1}s",
                            )
                        ></div>
                    }
                })
                .collect_view()}
        </footer>
    }
}
