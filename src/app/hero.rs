use leptos::prelude::*;
use leptos_use::{use_mouse, use_window_size, UseMouseReturn, UseWindowSizeReturn};

use super::animations::{AnimatedCounter, TypeWriter};
use crate::content::{HERO_HEADING, HERO_STATS, HERO_TAGLINE};

struct Blob {
    size: u32,
    position: &'static str,
    color: &'static str,
    delay_ms: u32,
}

const BLOBS: [Blob; 3] = [
    Blob {
        size: 300,
        position: "top: 10%; left: 5%",
        color: "from-purple-500 to-blue-500",
        delay_ms: 0,
    },
    Blob {
        size: 200,
        position: "top: 60%; right: 5%",
        color: "from-pink-500 to-purple-500",
        delay_ms: 200,
    },
    Blob {
        size: 250,
        position: "bottom: 10%; left: 50%",
        color: "from-cyan-500 to-blue-500",
        delay_ms: 400,
    },
];

/// Maximum parallax shift of the background blobs, in pixels.
const PARALLAX_PX: f64 = 20.0;

#[component]
pub fn Hero() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();
    let UseWindowSizeReturn { width, height } = use_window_size();
    let parallax = move || {
        let (w, h) = (width.get(), height.get());
        if w <= 0.0 || h <= 0.0 {
            return (0.0, 0.0);
        }
        (x.get() / w * PARALLAX_PX, y.get() / h * PARALLAX_PX)
    };

    view! {
        <section
            id="home"
            class="relative min-h-screen w-full overflow-hidden bg-gradient-to-b from-[#0f0f2e] via-[#1a0a3e] to-[#0f0f2e] pt-20"
        >
            <div class="absolute inset-0 overflow-hidden">
                {BLOBS
                    .iter()
                    .map(|blob| {
                        let base = format!(
                            "width: {0}px; height: {0}px; {1}; animation-delay: {2}ms",
                            blob.size,
                            blob.position,
                            blob.delay_ms,
                        );
                        view! {
                            <div
                                class=format!(
                                    "absolute rounded-full blur-3xl opacity-20 bg-gradient-to-r animate-drift {}",
                                    blob.color,
                                )
                                style=move || {
                                    let (px, py) = parallax();
                                    format!("{base}; translate: {px:.1}px {py:.1}px")
                                }
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="absolute inset-0 bg-[linear-gradient(rgba(139,92,246,0.05)_1px,transparent_1px),linear-gradient(90deg,rgba(139,92,246,0.05)_1px,transparent_1px)] bg-[size:50px_50px]"></div>

            <div class="relative z-10 w-full px-6 h-screen flex items-center justify-between gap-12">
                <div class="flex-1 space-y-8 ml-10">
                    <div class="rise-in flex items-center gap-3">
                        <span class="px-4 py-2 rounded-full bg-purple-500/20 border border-purple-500/40 text-purple-300 text-sm font-medium animate-pulse-soft">
                            "👋 Welcome to my portfolio"
                        </span>
                    </div>

                    <div class="text-4xl md:text-5xl font-bold leading-tight">
                        {HERO_HEADING
                            .iter()
                            .enumerate()
                            .map(|(i, word)| {
                                let color = if i == 1 {
                                    "bg-gradient-to-r from-purple-400 via-pink-400 to-purple-400 bg-clip-text text-transparent"
                                } else {
                                    "text-white"
                                };
                                view! {
                                    <span
                                        class=format!("pop-in inline-block mr-[0.3em] {color}")
                                        style=format!("animation-delay: {}ms", i * 100)
                                    >
                                        {*word}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    <p class="rise-in text-xl md:text-2xl text-gray-400 max-w-3xl leading-relaxed [animation-delay:200ms]">
                        "Frontend Developer specializing in "
                        <span class="text-transparent bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text font-semibold">
                            "React applications"
                        </span> " and interactive UI. " <TypeWriter text=HERO_TAGLINE speed=30 />
                    </p>

                    <div class="rise-in flex flex-wrap gap-4 pt-4 [animation-delay:400ms]">
                        <a
                            href="#projects"
                            class="px-8 py-4 bg-gradient-to-r from-purple-500 to-pink-500 rounded-lg font-semibold text-white relative overflow-hidden group hover:scale-105 hover:shadow-[0_20px_40px_rgba(168,85,247,0.3)] active:scale-95 transition"
                        >
                            <span class="absolute inset-0 bg-gradient-to-r from-pink-500 to-purple-500 translate-x-full group-hover:translate-x-0 transition-transform duration-300"></span>
                            <span class="relative z-10">"View My Work"</span>
                        </a>
                        <button
                            type="button"
                            class="px-8 py-4 border-2 border-purple-500/40 rounded-lg font-semibold text-purple-300 hover:bg-purple-500/10 hover:border-purple-500/80 hover:scale-105 active:scale-95 transition"
                        >
                            "Download Resume"
                        </button>
                    </div>

                    <div class="rise-in flex gap-8 pt-8 [animation-delay:600ms]">
                        {HERO_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="space-y-1 hover:scale-110 transition-transform">
                                        <p class="text-2xl md:text-3xl font-bold text-transparent bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text">
                                            <AnimatedCounter
                                                to=stat.target
                                                decimals=stat.decimals
                                                suffix=stat.suffix
                                            />
                                        </p>
                                        <p class="text-sm text-gray-400">{stat.label}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="hidden lg:flex flex-1 items-center justify-center animate-drift">
                    <div class="relative w-96 h-96">
                        {(0..3)
                            .map(|i| {
                                let alpha = 0.8 - i as f64 * 0.2;
                                let direction = if i % 2 == 0 { "normal" } else { "reverse" };
                                view! {
                                    <div
                                        class="absolute inset-0 rounded-full border-2 border-transparent animate-spin"
                                        style=format!(
                                            "border-top: 2px solid rgba(168, 85, 247, {alpha:.1}); border-right: 2px solid rgba(236, 72, 153, {alpha:.1}); animation-duration: {}s; animation-timing-function: linear; animation-direction: {direction}",
                                            8 + i * 2,
                                        )
                                    ></div>
                                }
                            })
                            .collect_view()}
                        <div class="absolute inset-0 flex items-center justify-center animate-pulse-soft">
                            <div class="w-48 h-48 rounded-2xl bg-gradient-to-br from-purple-500/30 to-pink-500/30 backdrop-blur-xl border border-purple-500/40 flex items-center justify-center">
                                <div class="text-6xl animate-wiggle">"💻"</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <a href="#about" class="absolute bottom-8 left-1/2 -translate-x-1/2 z-10 animate-bob">
                <p class="text-gray-400 text-sm mb-2">"Scroll to explore"</p>
                <div class="w-6 h-10 mx-auto border-2 border-gray-500 rounded-full flex justify-center">
                    <div class="w-1 h-2 bg-gray-500 rounded-full mt-2 animate-bob"></div>
                </div>
            </a>
        </section>
    }
}
