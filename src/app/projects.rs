use leptos::prelude::*;

use super::decor::{GridBackdrop, IconView, Reveal};
use crate::content::{Icon, Project, SiteContent};

#[component]
pub fn Projects() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();

    view! {
        <section
            id="work"
            class="py-20 bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950 relative overflow-hidden scroll-mt-20"
        >
            <div class="absolute top-20 right-20 w-96 h-96 bg-amber-500/5 rounded-full blur-3xl animate-pulse"></div>
            <div class="absolute bottom-20 left-20 w-96 h-96 bg-yellow-500/5 rounded-full blur-3xl animate-pulse animation-delay-1000"></div>
            <GridBackdrop opacity="opacity-10" />

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center mb-16">
                    <div class="inline-flex items-center px-4 py-2 rounded-full bg-gradient-to-r from-amber-500/20 to-yellow-500/20 border border-amber-500/30 backdrop-blur-sm mb-6">
                        <IconView icon=Icon::Code class="text-amber-400 mr-2" />
                        <span class="text-amber-300 text-sm font-medium tracking-wide">
                            "Featured Work"
                        </span>
                        <IconView icon=Icon::Zap class="text-amber-400 ml-2" />
                    </div>

                    <h2 class="text-5xl md:text-6xl lg:text-7xl font-bold mb-6">
                        <span class="text-white">"My Recent "</span>
                        <span class="bg-gradient-to-r from-amber-400 via-yellow-400 to-amber-500 bg-clip-text text-transparent">
                            "Projects"
                        </span>
                    </h2>

                    <p class="text-xl text-gray-400 max-w-3xl mx-auto leading-relaxed">
                        "Explore my portfolio of professional applications spanning "
                        <span class="text-amber-400 font-semibold">"full-stack solutions"</span>
                        ", "
                        <span class="text-amber-400 font-semibold">"research hubs"</span>
                        " and "
                        <span class="text-amber-400 font-semibold">"modern web platforms"</span>
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {content
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>

                <div class="text-center mt-16">
                    <a
                        href=content.profile.github_profile.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-8 py-4 bg-gradient-to-r from-amber-500 to-yellow-500 text-slate-900 font-semibold rounded-xl transition-all duration-300 hover:scale-105 hover:shadow-2xl hover:shadow-amber-500/50"
                    >
                        <IconView icon=Icon::Github class="text-xl" />
                        "View All Projects on GitHub"
                        <span aria-hidden="true">"↗"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);

    let links = move || {
        let code = project.code_link.as_ref().map(|href| {
            view! {
                <a
                    href=href.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex-1 bg-slate-800/80 backdrop-blur-sm border border-amber-500/30 text-amber-400 py-2 px-4 rounded-lg font-semibold hover:bg-amber-500 hover:text-slate-900 transition-all duration-300 flex items-center justify-center gap-2"
                >
                    <IconView icon=Icon::Github />
                    "Code"
                </a>
            }
        });
        let live = project.live_link.as_ref().map(|href| {
            view! {
                <a
                    href=href.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex-1 bg-gradient-to-r from-amber-500 to-yellow-500 text-slate-900 py-2 px-4 rounded-lg font-semibold hover:shadow-lg hover:shadow-amber-500/50 transition-all duration-300 flex items-center justify-center gap-2"
                >
                    <span aria-hidden="true">"↗"</span>
                    "Live"
                </a>
            }
        });
        (code, live)
    };

    view! {
        <Reveal delay_ms=(index as u32) * 100>
            <article
                class="group relative bg-slate-800/50 backdrop-blur-sm rounded-2xl overflow-hidden border border-amber-500/20 hover:border-amber-500/50 transition-all duration-500 hover:scale-105 hover:shadow-2xl hover:shadow-amber-500/20"
                on:mouseenter=move |_| set_hovered(true)
                on:mouseleave=move |_| set_hovered(false)
            >
                <div class="relative h-48 overflow-hidden bg-gradient-to-br from-amber-500/10 to-yellow-500/10">
                    <img
                        src=project.image_src().to_string()
                        alt=project.title.clone()
                        loading="lazy"
                        class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                    />

                    <div class=move || {
                        if hovered.get() {
                            "absolute inset-0 bg-gradient-to-t from-slate-900 via-slate-900/50 to-transparent transition-opacity duration-500 opacity-100"
                        } else {
                            "absolute inset-0 bg-gradient-to-t from-slate-900 via-slate-900/50 to-transparent transition-opacity duration-500 opacity-0 focus-within:opacity-100"
                        }
                    }>
                        <div class="absolute bottom-4 left-4 right-4 flex gap-3">{links()}</div>
                    </div>

                    {project
                        .category
                        .as_ref()
                        .map(|category| {
                            view! {
                                <div class="absolute top-4 left-4">
                                    <span class="bg-amber-500/20 backdrop-blur-sm border border-amber-500/30 text-amber-300 px-3 py-1 rounded-full text-xs font-semibold">
                                        {category.clone()}
                                    </span>
                                </div>
                            }
                        })}
                </div>

                <div class="p-6">
                    <h3 class="text-2xl font-bold text-white mb-3 group-hover:text-amber-400 transition-colors duration-300">
                        {project.title.clone()}
                    </h3>
                    <p class="text-gray-400 mb-4 leading-relaxed line-clamp-3">
                        {project.description.clone()}
                    </p>

                    <div class="flex flex-wrap gap-2 mb-4">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="bg-slate-700/50 text-amber-400 px-3 py-1 rounded-lg text-xs font-medium border border-slate-600">
                                        {tech.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    {(!project.stats.is_empty())
                        .then(|| {
                            view! {
                                <div class="grid grid-cols-2 gap-4 pt-4 border-t border-slate-700">
                                    {project
                                        .stats
                                        .iter()
                                        .map(|stat| {
                                            view! {
                                                <div class="text-center">
                                                    <div class="text-xl font-bold bg-gradient-to-r from-amber-400 to-yellow-400 bg-clip-text text-transparent">
                                                        {stat.value.clone()}
                                                    </div>
                                                    <div class="text-xs text-gray-500 font-medium">
                                                        {stat.label.clone()}
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })}
                </div>
            </article>
        </Reveal>
    }
}
