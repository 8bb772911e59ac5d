use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::{
    animations::{AnimatedLetters, ProgressRing},
    reveal::{Motion, Reveal},
};
use crate::content::{Skill, SkillCategory, COMPETENCIES, SKILL_STATS};

const TAB_ACTIVE: &str = "bg-gradient-to-r from-purple-500 to-pink-500 text-white shadow-lg shadow-purple-500/50";
const TAB_IDLE: &str =
    "bg-gray-800/50 text-gray-300 border border-purple-500/20 hover:border-purple-500/50";

#[component]
fn SkillBar(skill: Skill, index: usize) -> impl IntoView {
    view! {
        <div class="rise-in" style=format!("animation-delay: {}ms", index * 100)>
            <div class="flex justify-between items-center mb-3">
                <p class="text-white font-semibold text-lg">{skill.name}</p>
                <span class="text-purple-400 font-bold">{format!("{}%", skill.level)}</span>
            </div>
            <div class="w-full h-3 bg-gray-800 rounded-full overflow-hidden border border-purple-500/20">
                <div
                    class="skill-bar h-full rounded-full bg-gradient-to-r from-purple-500 via-pink-500 to-purple-500 relative overflow-hidden"
                    style=format!("--level: {}%; animation-delay: {}ms", skill.level, index * 100)
                >
                    <span class="absolute inset-0 bg-gradient-to-r from-transparent via-white/30 to-transparent animate-shimmer"></span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    // `?skills=<id>` preselects a tab
    let requested = use_query_map().with_untracked(|q| q.get("skills"));
    let initial = SkillCategory::from_query(requested.as_deref()).unwrap_or_else(|e| {
        log::warn!("{e}");
        SkillCategory::default()
    });
    let (active, set_active) = signal(initial);
    let average = Signal::derive(move || active.get().average_level());

    view! {
        <section
            id="skills"
            class="relative min-h-screen w-full bg-gradient-to-b from-[#0f0f2e] via-[#1a0a3e] to-[#0f0f2e] py-32 px-6 overflow-hidden"
        >
            <div class="absolute top-1/2 left-1/4 w-96 h-96 bg-gradient-to-br from-purple-500 to-pink-500 rounded-full blur-3xl opacity-10"></div>

            <div class="relative z-10 max-w-6xl mx-auto">
                <Reveal class="space-y-4 mb-16 text-center">
                    <p class="text-purple-400 font-semibold text-lg">"⚡ EXPERTISE"</p>
                    <h2 class="text-5xl md:text-6xl font-bold text-white">
                        <AnimatedLetters text="Skills & Technologies" stagger_ms=40 />
                    </h2>
                    <p class="text-gray-400 text-xl max-w-2xl mx-auto">
                        "A comprehensive overview of my technical skills and proficiency levels"
                    </p>
                </Reveal>

                <Reveal class="flex flex-wrap justify-center gap-4 mb-16">
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        let state = if active.get() == category {
                                            TAB_ACTIVE
                                        } else {
                                            TAB_IDLE
                                        };
                                        format!(
                                            "px-6 py-3 rounded-lg font-semibold hover:scale-105 active:scale-95 transition {state}",
                                        )
                                    }
                                    data-category=category.to_string()
                                    aria-pressed=move || (active.get() == category).to_string()
                                    on:click=move |_| set_active.set(category)
                                >
                                    <span class="mr-2">{category.icon()}</span>
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </Reveal>

                <div class="grid lg:grid-cols-[1fr_auto] gap-12 items-center mb-20">
                    <div class="grid md:grid-cols-2 gap-8">
                        {move || {
                            active
                                .get()
                                .skills()
                                .iter()
                                .enumerate()
                                .map(|(index, skill)| view! { <SkillBar skill=*skill index /> })
                                .collect_view()
                        }}
                    </div>
                    <Reveal motion=Motion::Scale class="flex flex-col items-center gap-3">
                        <ProgressRing percentage=average size=160.0 stroke=10.0 />
                        <p class="text-gray-400 text-sm">"Average proficiency"</p>
                    </Reveal>
                </div>

                <div class="space-y-8">
                    <Reveal>
                        <h3 class="text-3xl font-bold text-white text-center mb-12">"Core Competencies"</h3>
                    </Reveal>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {COMPETENCIES
                            .into_iter()
                            .enumerate()
                            .map(|(i, competency)| {
                                view! {
                                    <Reveal motion=Motion::Scale delay_ms={i as u32 * 100}>
                                        <div class="h-full p-6 rounded-2xl bg-gradient-to-br from-purple-900/30 to-pink-900/30 border border-purple-500/30 hover:border-purple-500/60 hover:scale-105 hover:-translate-y-2.5 transition">
                                            <p class="text-4xl mb-4 animate-sway">{competency.icon}</p>
                                            <h4 class="text-lg font-bold text-white mb-4">{competency.title}</h4>
                                            <ul class="space-y-2">
                                                {competency
                                                    .items
                                                    .into_iter()
                                                    .map(|item| {
                                                        view! {
                                                            <li class="text-gray-400 text-sm flex items-center gap-2 hover:translate-x-1 transition-transform">
                                                                <span class="w-1.5 h-1.5 rounded-full bg-purple-400"></span>
                                                                {item}
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Reveal class="mt-20 grid grid-cols-2 md:grid-cols-4 gap-6">
                    {SKILL_STATS
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class="p-6 rounded-xl bg-gradient-to-br from-purple-900/40 to-pink-900/40 border border-purple-500/30 text-center hover:scale-110 transition-transform">
                                    <p class="text-3xl font-bold text-transparent bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text mb-2">
                                        {stat.value}
                                    </p>
                                    <p class="text-gray-400 text-sm">{stat.label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}
