use std::time::Duration;

use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{
    use_mouse_with_options, use_window_size, UseMouseCoordType, UseMouseOptions, UseMouseReturn,
    UseWindowSizeReturn,
};

use super::decor::{GridBackdrop, IconView, ParticleField, Reveal};
use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::state::motion::{parallax_offset, trail, translate, Rect, Tilt};
use crate::state::TypingEffect;

/// Schedules the next typing step. Only one timeout is pending at a time and
/// its handle is kept in `timer` so unmounting can cancel it.
fn schedule_tick(
    typing: StoredValue<TypingEffect>,
    set_typed: WriteSignal<String>,
    timer: StoredValue<Option<TimeoutHandle>>,
    delay: Duration,
) {
    let handle = set_timeout_with_handle(
        move || {
            let next = typing.try_update_value(|t| {
                let next = t.tick();
                set_typed(t.text().to_string());
                next
            });
            // None once the hero is gone
            if let Some(next) = next {
                schedule_tick(typing, set_typed, timer, next);
            }
        },
        delay,
    );
    match handle {
        Ok(h) => {
            timer.try_update_value(|t| *t = Some(h));
        }
        Err(e) => log::error!("couldn't schedule typing effect: {e:?}"),
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let config = expect_context::<SiteConfig>();
    let profile = &content.profile;

    let typing = StoredValue::new(TypingEffect::new(profile.roles.clone(), config.timings));
    let timer = StoredValue::new(None::<TimeoutHandle>);
    let (typed, set_typed) = signal(String::new());

    Effect::new(move |_| {
        let delay = typing.with_value(|t| t.initial_delay());
        schedule_tick(typing, set_typed, timer, delay);
    });
    on_cleanup(move || {
        timer.try_with_value(|t| {
            if let Some(h) = t {
                h.clear();
            }
        });
    });

    // viewport coords; page coords drift with scroll
    let UseMouseReturn { x, y, .. } =
        use_mouse_with_options(UseMouseOptions::default().coord_type(UseMouseCoordType::<std::convert::Infallible>::Client));
    let UseWindowSizeReturn { width, height } = use_window_size();
    let offset = Memo::new(move |_| parallax_offset((x.get(), y.get()), (width.get(), height.get())));

    view! {
        <section
            id="home"
            class="min-h-screen pt-16 flex items-center bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950 relative overflow-hidden scroll-mt-20"
        >
            <GridBackdrop opacity="opacity-20" />

            <div
                class="absolute top-20 left-10 w-96 h-96 bg-amber-500/10 rounded-full blur-3xl animate-pulse"
                style=move || translate(offset.get(), 1.0)
            ></div>
            <div
                class="absolute bottom-20 right-10 w-[500px] h-[500px] bg-yellow-500/10 rounded-full blur-3xl animate-pulse animation-delay-1000"
                style=move || translate(offset.get(), -1.0)
            ></div>
            <div
                class="absolute top-1/2 left-1/3 w-80 h-80 bg-orange-500/5 rounded-full blur-3xl animate-pulse animation-delay-2000"
                style=move || translate(offset.get(), 0.5)
            ></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 relative z-10">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="text-center lg:text-left space-y-8">
                        <div class="inline-flex items-center px-5 py-2.5 rounded-full bg-gradient-to-r from-amber-500/20 to-yellow-500/20 border border-amber-500/30 backdrop-blur-sm animate-fade-in-up">
                            <div class="w-2.5 h-2.5 bg-amber-500 rounded-full animate-pulse mr-3"></div>
                            <span class="text-amber-300 text-sm font-medium tracking-wide">
                                {profile.availability.clone()}
                            </span>
                        </div>

                        <div class="space-y-4 animate-fade-in-up animation-delay-200">
                            <h1 class="text-5xl md:text-6xl lg:text-7xl font-bold leading-tight">
                                <span class="text-white block mb-2">"Hi, I'm"</span>
                                <span class="bg-gradient-to-r from-amber-400 via-yellow-400 to-amber-500 bg-clip-text text-transparent block mb-2">
                                    {profile.name.clone()}
                                </span>
                            </h1>
                            <div class="h-12 flex items-center justify-center lg:justify-start">
                                <span class="text-2xl md:text-3xl text-gray-300 font-light">
                                    {typed}
                                    <span class="inline-block w-0.5 h-8 bg-amber-500 ml-1 align-middle animate-pulse"></span>
                                </span>
                            </div>
                        </div>

                        <p class="text-lg md:text-xl text-gray-400 leading-relaxed max-w-2xl animate-fade-in-up animation-delay-400">
                            "I build websites, web apps and cross-platform mobile apps while integrating"
                            <span class="text-amber-400 font-semibold">" Artificial Intelligence"</span>
                            " and "
                            <span class="text-amber-400 font-semibold">"Blockchain technology"</span>
                            ". Based in "
                            <span class="text-amber-400 font-semibold">{profile.location.clone()}</span>
                            ", and currently working with beta tech labs."
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start pt-4 animate-fade-in-up animation-delay-600">
                            <a
                                href="#work"
                                class="group relative px-8 py-4 bg-gradient-to-r from-amber-500 to-yellow-500 text-slate-900 font-semibold rounded-xl overflow-hidden transition-all duration-300 hover:scale-105 hover:shadow-2xl hover:shadow-amber-500/50"
                            >
                                <span class="relative z-10 flex items-center justify-center gap-2">
                                    <span class="group-hover:rotate-12 transition-transform duration-300">
                                        "💼"
                                    </span>
                                    "View My Work"
                                </span>
                                <div class="absolute inset-0 bg-gradient-to-r from-yellow-500 to-amber-500 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                            </a>
                            <a
                                href="#contact"
                                class="group px-8 py-4 bg-slate-800/50 backdrop-blur-sm text-amber-400 font-semibold rounded-xl border-2 border-amber-500/30 hover:border-amber-500 hover:bg-slate-800 transition-all duration-300 hover:scale-105 relative overflow-hidden"
                            >
                                <span class="flex items-center justify-center gap-2 relative z-10">
                                    <span class="group-hover:scale-110 transition-transform duration-300">
                                        "✉️"
                                    </span>
                                    "Get In Touch"
                                </span>
                                <div class="absolute inset-0 bg-amber-500/10 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                            </a>
                        </div>

                        <div class="flex gap-4 justify-center lg:justify-start pt-8 animate-fade-in-up animation-delay-800">
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
                                            class="w-12 h-12 bg-slate-800/50 backdrop-blur-sm border border-amber-500/30 rounded-xl flex items-center justify-center hover:border-amber-500 hover:bg-slate-800 transition-all duration-300 hover:scale-110 group"
                                        >
                                            <IconView
                                                icon=link.icon
                                                class="text-xl text-gray-400 group-hover:text-amber-400 transition-colors"
                                            />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <Reveal class="relative">
                        <Portrait src=profile.portrait.clone() alt=profile.name.clone() />
                    </Reveal>
                </div>
            </div>

            <a
                href="#work"
                aria-label="Scroll to projects"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce-slow"
            >
                <div class="w-6 h-10 border-2 border-amber-500 rounded-full flex justify-center p-2">
                    <div class="w-1 h-3 bg-amber-500 rounded-full animate-blink"></div>
                </div>
            </a>
        </section>
    }
}

/// Floating portrait card that tilts toward the pointer.
#[component]
fn Portrait(src: String, alt: String) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let (tilt, set_tilt) = signal(Tilt::NEUTRAL);

    let on_move = move |ev: MouseEvent| {
        let Some(el) = card.get_untracked() else {
            return;
        };
        let r = el.get_bounding_client_rect();
        let rect = Rect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        };
        set_tilt(Tilt::from_pointer(
            (ev.client_x() as f64, ev.client_y() as f64),
            rect,
        ));
    };

    view! {
        <div class="relative mx-auto lg:mx-0 w-80 h-80 lg:w-96 lg:h-96 group">
            <div class="absolute inset-0 animate-float">
                <div class="absolute inset-0 bg-gradient-to-r from-amber-500 via-yellow-500 to-amber-500 rounded-3xl blur-xl opacity-50 animate-pulse"></div>
                <div class="absolute -inset-4 rounded-3xl border-2 border-amber-400/30 opacity-0 group-hover:opacity-100 transition-all duration-1000 animate-spin-slow"></div>
                <div class="absolute -inset-6 rounded-3xl border-2 border-yellow-400/20 opacity-0 group-hover:opacity-100 transition-all duration-1000 animate-spin-slow animation-delay-1000"></div>

                <div
                    node_ref=card
                    class="relative w-full h-full rounded-3xl overflow-hidden border-4 border-amber-500/30 bg-slate-800/50 backdrop-blur-sm transition-all duration-500 ease-out cursor-pointer"
                    style=move || tilt.get().style()
                    on:mousemove=on_move
                    on:mouseleave=move |_| set_tilt(Tilt::NEUTRAL)
                >
                    <img
                        src=src
                        alt=alt
                        class="w-full h-full object-cover transition-transform duration-500"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-slate-900/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
                    <div class="absolute inset-0 bg-gradient-to-b from-transparent via-amber-500/10 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500 animate-scan"></div>
                </div>

                <ParticleField
                    particles=trail(8)
                    dot_class="w-2 h-2 bg-amber-400 opacity-0 group-hover:opacity-100"
                    animation="animate-particle-rise"
                />
            </div>

            <div class="absolute -top-4 -right-4 w-24 h-24 bg-amber-500/20 rounded-full blur-2xl group-hover:scale-150 transition-transform duration-1000"></div>
            <div class="absolute -bottom-4 -left-4 w-32 h-32 bg-yellow-500/20 rounded-full blur-2xl group-hover:scale-150 transition-transform duration-1000"></div>
        </div>
    }
}
