use leptos::prelude::*;

use super::decor::IconView;
use crate::config::build_year;
use crate::content::{Icon, SiteContent};

#[component]
pub fn Footer() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let profile = &content.profile;
    let year = build_year().map(|y| format!("{y} ")).unwrap_or_default();

    view! {
        <footer class="bg-acid-card/80 backdrop-blur-lg border-t border-golden/20 py-12 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-t from-golden/5 to-transparent"></div>
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-32 h-1 bg-gradient-to-r from-transparent via-golden to-transparent"></div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="flex flex-col lg:flex-row justify-between items-center gap-8">
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 bg-gradient-to-r from-golden to-acid-green rounded-xl flex items-center justify-center">
                            <IconView icon=Icon::Zap class="text-acid-bg" />
                        </div>
                        <div class="text-left">
                            <span class="text-golden font-black text-2xl tracking-tight block uppercase">
                                {profile.name.clone()}
                            </span>
                            <span class="text-acid-green text-sm font-mono tracking-widest uppercase">
                                {profile.title.clone()}
                            </span>
                        </div>
                    </div>

                    <div class="text-center lg:text-left flex flex-col items-center lg:items-start gap-2">
                        <p class="text-gray-400 flex items-center gap-2">
                            "Crafted with"
                            <span class="text-electric-pink animate-pulse" aria-label="love">
                                "♥"
                            </span>
                            "and"
                            <IconView icon=Icon::Zap class="text-golden" />
                        </p>
                        <p class="text-gray-500 text-sm">
                            {format!("© {year}{}. All rights reserved.", profile.name)}
                        </p>
                    </div>

                    <div class="flex gap-6">
                        {profile
                            .social
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.url.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.platform.clone()
                                        class="group relative p-3 bg-acid-bg/50 rounded-xl border border-golden/20 text-gray-400 hover:text-white transition-all duration-300 hover:scale-110 hover:border-golden/40 hover:shadow-lg hover:shadow-golden/20"
                                    >
                                        <IconView icon=link.icon class="text-xl" />
                                        <div class="absolute -top-8 left-1/2 -translate-x-1/2 px-2 py-1 bg-acid-card text-xs text-white rounded opacity-0 group-hover:opacity-100 transition-opacity duration-300 pointer-events-none whitespace-nowrap">
                                            {link.platform.clone()}
                                        </div>
                                        <div class="absolute inset-0 rounded-xl bg-gradient-to-r from-golden/10 to-acid-green/10 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="mt-8 pt-8 border-t border-golden/10 text-center">
                    <div class="flex flex-col sm:flex-row justify-center items-center gap-4 text-sm text-gray-500">
                        <span class="flex items-center gap-2">
                            <span class="w-2 h-2 bg-acid-green rounded-full animate-pulse"></span>
                            "Available for new projects"
                        </span>
                        <span class="hidden sm:block">"•"</span>
                        <span class="flex items-center gap-2">
                            <span class="w-2 h-2 bg-golden rounded-full animate-pulse"></span>
                            "Open to full-time opportunities"
                        </span>
                        <span class="hidden sm:block">"•"</span>
                        <span>{format!("Based in {} 🌍", profile.location)}</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
