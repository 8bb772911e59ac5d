use leptos::prelude::*;

use super::reveal::{Motion, Reveal};
use crate::content::{ABOUT_STATS, ABOUT_TAGS, EXPERTISE_AREAS};

const PARAGRAPH: &str = "text-gray-300 text-lg leading-relaxed";

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section
            id="about"
            class="relative min-h-screen w-full bg-gradient-to-b from-[#0f0f2e] via-[#1a0a3e] to-[#0f0f2e] py-32 px-6 overflow-hidden"
        >
            <div class="absolute top-0 right-0 w-96 h-96 bg-gradient-to-br from-purple-500 to-pink-500 rounded-full blur-3xl opacity-10"></div>
            <div class="absolute bottom-0 left-0 w-96 h-96 bg-gradient-to-tr from-blue-500 to-purple-500 rounded-full blur-3xl opacity-10"></div>

            <div class="relative z-10 w-full px-6">
                <Reveal motion=Motion::Left class="space-y-4 mb-16">
                    <p class="text-purple-400 font-semibold text-lg">"🚀 ABOUT ME"</p>
                    <h2 class="text-5xl md:text-6xl font-bold text-white">"Who I Am & What I Do"</h2>
                </Reveal>

                <div class="grid lg:grid-cols-2 gap-16 items-center mb-16">
                    <Reveal motion=Motion::Left delay_ms=100 class="space-y-6">
                        <p class=PARAGRAPH>
                            "I'm a passionate "
                            <span class="text-transparent bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text font-semibold">
                                "Frontend Developer"
                            </span>
                            " specializing in React. I create beautiful, responsive, and performant web applications with a focus on exceptional user experiences. With 1.3 years of experience, I'm dedicated to building interactive interfaces that engage users and solve real problems."
                        </p>
                        <p class=PARAGRAPH>
                            "I have a strong passion for clean, maintainable code and elegant UI design. Whether working with React components, animations, or responsive layouts, I bring creativity and technical precision to every project. I continuously learn new technologies and best practices to stay at the forefront of frontend development."
                        </p>
                        <p class=PARAGRAPH>
                            "Every project is an opportunity to create something meaningful. I'm committed to delivering high-quality solutions with a strong focus on performance optimization, accessibility, and exceptional user experience. Let's build something amazing together!"
                        </p>
                        <div class="flex flex-wrap gap-3 pt-4">
                            {ABOUT_TAGS
                                .into_iter()
                                .map(|tag| {
                                    view! {
                                        <span class="px-4 py-2 rounded-full bg-purple-500/20 border border-purple-500/40 text-purple-300 text-sm font-medium cursor-pointer hover:scale-110 hover:-translate-y-1 transition">
                                            {tag}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <div class="grid grid-cols-2 gap-6">
                        {ABOUT_STATS
                            .into_iter()
                            .enumerate()
                            .map(|(i, stat)| {
                                view! {
                                    <Reveal motion=Motion::Scale delay_ms={i as u32 * 100}>
                                        <div class="p-6 rounded-2xl bg-gradient-to-br from-purple-900/40 to-pink-900/40 border border-purple-500/30 hover:border-purple-500/60 hover:scale-105 hover:shadow-[0_20px_40px_rgba(168,85,247,0.3)] transition text-center">
                                            <p
                                                class="text-4xl mb-2 animate-pulse-soft"
                                                style=format!("animation-delay: {}ms", i * 200)
                                            >
                                                {stat.icon}
                                            </p>
                                            <p class="text-3xl font-bold text-transparent bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text mb-2">
                                                {stat.value}
                                            </p>
                                            <p class="text-gray-400 text-sm">{stat.label}</p>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="space-y-8">
                    <Reveal>
                        <h3 class="text-3xl font-bold text-white text-center mb-12">"Expertise Areas"</h3>
                    </Reveal>
                    <div class="grid md:grid-cols-3 gap-8">
                        {EXPERTISE_AREAS
                            .into_iter()
                            .enumerate()
                            .map(|(i, area)| {
                                view! {
                                    <Reveal motion=Motion::Left delay_ms={i as u32 * 100}>
                                        <div class="h-full p-8 rounded-2xl bg-gradient-to-br from-purple-900/30 to-pink-900/30 border border-purple-500/30 hover:border-purple-500/60 hover:scale-105 hover:-translate-y-2.5 hover:shadow-[0_30px_60px_rgba(168,85,247,0.2)] transition">
                                            <p class="text-5xl mb-4 animate-sway">{area.icon}</p>
                                            <h4 class="text-xl font-bold text-white mb-3">{area.title}</h4>
                                            <p class="text-gray-400 leading-relaxed">{area.description}</p>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
