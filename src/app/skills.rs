use leptos::{either::Either, ev::MouseEvent, prelude::*};

use super::decor::{IconView, ParticleField, Reveal};
use crate::content::{Icon, Skill, SiteContent};
use crate::state::motion::{orbit, scatter};
use crate::state::RevealGate;

const BACKGROUND_SEED: u64 = 0x5EED_5C11;

#[component]
pub fn Skills() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let skills = &content.skills;
    let (gate, set_gate) = signal(RevealGate::default());

    let reveal = move |_: MouseEvent| {
        let mut g = gate.get_untracked();
        if g.reveal() {
            log::debug!("skill grid revealed");
            set_gate(g);
        }
    };

    view! {
        <section id="skills" class="min-h-screen bg-acid-bg relative overflow-hidden scroll-mt-20">
            <div class="absolute inset-0">
                <div class="absolute top-20 left-10 w-20 h-20 border-2 border-golden/30 animate-spin-slow"></div>
                <div class="absolute bottom-32 right-20 w-16 h-16 border-2 border-acid-green/30 rounded-full animate-float"></div>
                <ParticleField
                    particles=scatter(25, BACKGROUND_SEED)
                    dot_class="w-1 h-1 bg-golden"
                    animation="animate-particle-rise"
                />
            </div>

            <div class="container mx-auto px-6 py-20 relative z-10">
                <Reveal class="text-center mb-16">
                    <div class="inline-flex items-center gap-3 mb-6 px-6 py-3 rounded-full bg-acid-card/50 backdrop-blur-sm border border-acid-green/20">
                        <IconView icon=Icon::Sparkles class="text-acid-green" />
                        <span class="text-acid-green font-mono text-sm uppercase tracking-widest">
                            "Technical Arsenal"
                        </span>
                        <IconView icon=Icon::Sparkles class="text-acid-green" />
                    </div>

                    <h2 class="text-5xl lg:text-7xl font-black text-white mb-6">
                        <span class="text-transparent bg-gradient-to-r from-golden via-acid-green to-electric-blue bg-clip-text">
                            "TECH"
                        </span>
                        <br />
                        <span class="text-white">"STACK"</span>
                    </h2>

                    <p class="text-lg text-gray-300 max-w-2xl mx-auto leading-relaxed">
                        "Full-stack development expertise from modern frontend to scalable backend systems, with specialized knowledge in "
                        <span class="text-golden font-bold">"Web3"</span>
                        " and "
                        <span class="text-acid-green font-bold">"mobile technologies"</span>
                        "."
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-12">
                    {skills
                        .categories
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="bg-acid-card/30 backdrop-blur-sm border border-acid-green/20 rounded-xl p-6 hover:scale-105 hover:-translate-y-1 transition-transform duration-300">
                                    <h3 class=format!(
                                        "text-xl font-bold mb-4 flex items-center gap-2 {}",
                                        category.color.text_class(),
                                    )>
                                        <IconView icon=category.icon />
                                        {category.title.clone()}
                                    </h3>
                                    <div class="flex flex-wrap gap-2">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-3 py-1 bg-acid-card/50 rounded-full text-white text-sm border border-acid-green/20">
                                                        {skill.clone()}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                {move || {
                    if gate.get().is_revealed() {
                        Either::Left(view! {
                            <div
                                id="skill-grid"
                                class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-6 lg:gap-8 mb-16 animate-fade-in-up">
                                {skills
                                    .skills
                                    .iter()
                                    .enumerate()
                                    .map(|(index, skill)| view! { <SkillOrb skill index /> })
                                    .collect_view()}
                            </div>
                        })
                    } else {
                        Either::Right(view! {
                            <div class="flex justify-center mb-16">
                                <button
                                    class="group px-8 py-4 bg-acid-card/50 backdrop-blur-sm border-2 border-golden/40 rounded-xl text-golden font-mono uppercase tracking-widest hover:border-golden hover:bg-acid-card transition-all duration-300 hover:scale-105 animate-pulse-gold"
                                    aria-controls="skill-grid"
                                    on:click=reveal
                                >
                                    <span class="flex items-center gap-3">
                                        <IconView icon=Icon::Zap />
                                        "Reveal Skill Matrix"
                                    </span>
                                </button>
                            </div>
                        })
                    }
                }}

                <Reveal class="text-center">
                    <h4 class="text-white text-lg font-semibold mb-6 flex items-center justify-center gap-2">
                        <IconView icon=Icon::Zap class="text-golden" />
                        "Technologies & Tools"
                    </h4>
                    <div class="inline-flex flex-wrap gap-3 justify-center max-w-4xl">
                        {skills
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-4 py-2 bg-acid-card/50 backdrop-blur-sm border border-golden/20 rounded-full text-golden text-sm font-mono hover:scale-110 hover:bg-golden/10 hover:border-golden/50 transition-all duration-300">
                                        {tech.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

/// Gradient sphere with a proficiency bar underneath.
#[component]
fn SkillOrb(skill: &'static Skill, index: usize) -> impl IntoView {
    let gradient = skill.color.gradient();
    let delay = index as f64 * 0.1;

    view! {
        <div
            class="relative group cursor-pointer animate-fade-in-up hover:scale-110 transition-transform duration-300"
            style=format!("animation-delay: {delay:.1}s")
        >
            <div class="relative w-28 h-28 mx-auto">
                <div
                    class="absolute inset-0 rounded-full transform-gpu transition-all duration-700 group-hover:rotate-180 group-hover:scale-110"
                    style=format!(
                        "background: {gradient}; box-shadow: inset 0 6px 24px rgba(255, 255, 255, 0.3), inset -6px -6px 24px rgba(0, 0, 0, 0.5)",
                    )
                ></div>
                <div class="absolute inset-0 flex items-center justify-center">
                    <IconView icon=skill.icon class="text-3xl drop-shadow-lg" />
                </div>
                <div
                    class="absolute inset-0 rounded-full border-2 opacity-0 group-hover:opacity-100 transition-all duration-500 animate-hologram-spin"
                    style=format!("border-image: {gradient} 1")
                ></div>
                {orbit(4, 40.0)
                    .into_iter()
                    .enumerate()
                    .map(|(i, (dx, dy))| {
                        view! {
                            <div
                                class="absolute left-1/2 top-1/2 w-1.5 h-1.5 rounded-full bg-white animate-particle-burst"
                                style=format!(
                                    "--dx: {dx:.1}px; --dy: {dy:.1}px; animation-delay: {:.1}s",
                                    i as f64 * 0.3,
                                )
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="text-center mt-4">
                <h3 class="text-white font-bold text-sm mb-2 leading-tight">{skill.name.clone()}</h3>
                <div
                    class="relative bg-acid-card rounded-full h-2 overflow-hidden mx-auto max-w-[80px]"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=skill.level.to_string()
                    aria-label=skill.name.clone()
                >
                    <div
                        class="h-full rounded-full"
                        style=format!("background: {gradient}; width: {}%", skill.level)
                    ></div>
                    <div class="absolute top-0 left-0 w-full h-0.5 bg-white blur-sm animate-scan"></div>
                </div>
                <span class=format!(
                    "text-xs font-bold mt-1 inline-block {}",
                    skill.color.text_class(),
                )>{format!("{}%", skill.level)}</span>
            </div>
        </div>
    }
}
