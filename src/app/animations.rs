use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use crate::effects::{confetti, Counter, Ring, Typewriter, FRAME_MS};

/// Counts up to `to` at about 60 fps, then stops its timer.
#[component]
pub fn AnimatedCounter(
    #[prop(optional)] from: f64,
    to: f64,
    #[prop(default = 2.0)] duration: f64,
    #[prop(optional)] decimals: u8,
    #[prop(optional)] suffix: &'static str,
) -> impl IntoView {
    let counter = RwSignal::new(Counter::new(from, to, duration, decimals));
    let Pausable { pause, .. } = use_interval_fn(
        move || {
            counter.update(|c| {
                c.tick();
            })
        },
        FRAME_MS,
    );

    Effect::new(move |_| {
        if counter.with(Counter::is_done) {
            pause();
        }
    });

    view! {
        <span>{move || counter.with(Counter::display)} {suffix}</span>
    }
}

#[component]
pub fn TypeWriter(
    #[prop(into)] text: String,
    /// Milliseconds per character.
    #[prop(default = 50)]
    speed: u64,
) -> impl IntoView {
    let writer = RwSignal::new(Typewriter::new(text));
    let Pausable { pause, .. } = use_interval_fn(
        move || {
            writer.update(|w| {
                w.tick();
            })
        },
        speed,
    );

    Effect::new(move |_| {
        if writer.with(Typewriter::is_done) {
            pause();
        }
    });

    view! {
        <span>
            {move || writer.with(|w| w.visible().to_string())}
            <span class="inline-block w-0.5 h-6 ml-1 bg-purple-500 align-middle animate-blink"></span>
        </span>
    }
}

/// Per-letter staggered entrance.
#[component]
pub fn AnimatedLetters(
    #[prop(into)] text: String,
    #[prop(default = 50)] stagger_ms: u32,
) -> impl IntoView {
    view! {
        <span class="inline-flex gap-0.5 flex-wrap">
            {text
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    let c = if c == ' ' { '\u{a0}' } else { c };
                    view! {
                        <span
                            class="letter-in inline-block cursor-default hover:scale-125 hover:text-pink-500 transition-transform"
                            style=format!("animation-delay: {}ms", i as u32 * stagger_ms)
                        >
                            {c.to_string()}
                        </span>
                    }
                })
                .collect_view()}
        </span>
    }
}

#[component]
pub fn ShimmerEffect(
    #[prop(default = "100%")] width: &'static str,
    #[prop(default = "20px")] height: &'static str,
) -> impl IntoView {
    view! {
        <span
            class="block rounded bg-gradient-to-r from-gray-800 via-gray-700 to-gray-800 relative overflow-hidden"
            style=format!("width: {width}; height: {height}")
        >
            <span class="absolute inset-0 bg-gradient-to-r from-transparent via-white/40 to-transparent animate-shimmer"></span>
        </span>
    }
}

#[component]
pub fn ProgressRing(
    #[prop(into)] percentage: Signal<f64>,
    #[prop(default = 120.0)] size: f64,
    #[prop(default = 8.0)] stroke: f64,
) -> impl IntoView {
    let ring = Ring { size, stroke };
    let c = ring.center();
    let circumference = ring.circumference();

    view! {
        <svg width=size height=size viewBox=format!("0 0 {size} {size}") class="-rotate-90">
            <defs>
                <linearGradient id="ring-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color="#a855f7" />
                    <stop offset="100%" stop-color="#ec4899" />
                </linearGradient>
            </defs>
            <circle
                cx=c
                cy=c
                r={ring.radius()}
                stroke="rgba(168, 85, 247, 0.1)"
                stroke-width=stroke
                fill="none"
            />
            <circle
                cx=c
                cy=c
                r={ring.radius()}
                stroke="url(#ring-gradient)"
                stroke-width=stroke
                fill="none"
                stroke-linecap="round"
                stroke-dasharray=circumference
                class="transition-[stroke-dashoffset] duration-1000 ease-out"
                style=move || format!("stroke-dashoffset: {}", ring.dash_offset(percentage.get()))
            />
            <text
                x=c
                y={c + 5.0}
                text-anchor="middle"
                fill="#a78bfa"
                font-size={size * 0.3}
                font-weight="bold"
                transform=format!("rotate(90 {c} {c})")
            >
                {move || format!("{:.0}%", percentage.get())}
            </text>
        </svg>
    }
}

const CONFETTI_PIECES: usize = 30;

#[component]
pub fn ConfettiEffect() -> impl IntoView {
    view! {
        <div class="fixed inset-0 pointer-events-none z-50" aria-hidden="true">
            {confetti(CONFETTI_PIECES)
                .into_iter()
                .map(|p| {
                    view! {
                        <div
                            class="absolute w-2 h-2 rounded-full bg-gradient-to-r from-purple-500 to-pink-500 animate-confetti"
                            style=format!(
                                "--dx: {:.2}%; --rot: {:.0}deg; animation-delay: {:.2}s",
                                p.dx,
                                p.rotate_deg,
                                p.delay_secs,
                            )
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn FloatingButton(
    children: Children,
    href: &'static str,
    label: &'static str,
    #[prop(default = "from-purple-500 to-pink-500")] gradient: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            aria-label=label
            class=format!(
                "fixed bottom-8 right-8 p-4 rounded-full bg-gradient-to-r {gradient} text-white shadow-2xl z-40 animate-float hover:scale-110 active:scale-90 transition-transform",
            )
        >
            {children()}
        </a>
    }
}
