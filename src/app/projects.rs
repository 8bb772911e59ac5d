use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{Project, PROJECTS};

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <div class="group cursor-pointer h-full hover:scale-105 hover:-translate-y-5 active:scale-95 transition duration-300">
            <div class="relative h-full overflow-hidden rounded-2xl bg-gradient-to-br from-gray-900/50 to-gray-800/50 border border-purple-500/20 p-8 hover:border-purple-500/50 group-hover:shadow-[0_30px_60px_rgba(168,85,247,0.3)] transition">
                <div class=format!(
                    "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-10 transition duration-300",
                    project.gradient,
                )></div>

                <p
                    class="text-6xl mb-4 relative z-10 animate-pulse-soft hover:rotate-12 hover:scale-125 transition-transform"
                    style=format!("animation-delay: {}ms", index * 200)
                >
                    {project.icon}
                </p>

                <div class="relative z-10 space-y-4 h-full flex flex-col">
                    <div>
                        <h3 class="text-2xl font-bold text-white mb-2 group-hover:text-transparent group-hover:bg-gradient-to-r group-hover:from-purple-400 group-hover:to-pink-400 group-hover:bg-clip-text transition">
                            {project.title}
                        </h3>
                        <p class="text-gray-400 leading-relaxed text-sm">{project.description}</p>
                    </div>

                    <div class="flex flex-wrap gap-2 mt-auto pt-4">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-3 py-1 rounded-full bg-purple-500/20 border border-purple-500/40 text-purple-300 text-xs font-medium hover:scale-110 transition-transform">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        type="button"
                        class="mt-6 w-full px-4 py-2 rounded-lg bg-gradient-to-r from-purple-500 to-pink-500 text-white font-semibold group-hover:shadow-lg group-hover:shadow-purple-500/50 transition opacity-0 group-hover:opacity-100 hover:scale-105 active:scale-95"
                    >
                        "View Project"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section
            id="projects"
            class="relative min-h-screen w-full bg-gradient-to-b from-[#0f0f2e] via-[#1a0a3e] to-[#0f0f2e] py-32 px-6 overflow-hidden"
        >
            <div class="absolute top-20 left-10 w-80 h-80 bg-gradient-to-br from-purple-500 to-blue-500 rounded-full blur-3xl opacity-10"></div>
            <div class="absolute bottom-20 right-10 w-96 h-96 bg-gradient-to-tl from-pink-500 to-purple-500 rounded-full blur-3xl opacity-10"></div>

            <div class="relative z-10 max-w-7xl mx-auto">
                <Reveal class="space-y-4 mb-20 text-center">
                    <p class="text-purple-400 font-semibold text-lg">"💼 PORTFOLIO"</p>
                    <h2 class="text-5xl md:text-6xl font-bold text-white">"Featured Projects"</h2>
                    <p class="text-gray-400 text-xl max-w-2xl mx-auto">
                        "Explore some of my recent work showcasing creative design and technical excellence"
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <Reveal delay_ms={index as u32 * 200}>
                                    <ProjectCard project index />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal class="mt-20 text-center space-y-6">
                    <p class="text-gray-400 text-lg">"Want to see more of my work?"</p>
                    <button
                        type="button"
                        class="inline-block px-10 py-4 bg-gradient-to-r from-purple-500 to-pink-500 rounded-lg font-semibold text-white relative overflow-hidden group hover:scale-105 active:scale-95 transition-transform"
                    >
                        <span class="absolute inset-0 bg-gradient-to-r from-pink-500 to-purple-500 translate-x-full group-hover:translate-x-0 transition-transform duration-300"></span>
                        <span class="relative z-10">"View All Projects"</span>
                    </button>
                </Reveal>
            </div>
        </section>
    }
}
