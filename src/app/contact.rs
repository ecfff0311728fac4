use std::time::Duration;

use leptos::{
    either::{Either, EitherOf3},
    ev::{Event, SubmitEvent},
    prelude::*,
};

use super::decor::{GridBackdrop, IconView, ParticleField, Reveal};
use crate::config::SiteConfig;
use crate::content::{ContactCard, FloatingIcon, Icon, LinkTarget, SiteContent};
use crate::state::motion::Particle;
use crate::state::{
    ContactError, ContactForm, Field, MessageSender, SimulatedSender, SubmissionStatus,
};

/// Arms the section's single pending timer, cancelling whatever it held before.
fn arm(
    timer: StoredValue<Option<TimeoutHandle>>,
    delay: Duration,
    cb: impl FnOnce() + 'static,
) {
    match set_timeout_with_handle(cb, delay) {
        Ok(handle) => {
            timer.try_update_value(|t| {
                if let Some(old) = t.replace(handle) {
                    old.clear();
                }
            });
        }
        Err(e) => log::error!("couldn't schedule contact form timer: {e:?}"),
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let timings = expect_context::<SiteConfig>().timings;

    let form = RwSignal::new(ContactForm::default());
    let (invalid, set_invalid) = signal(None::<ContactError>);
    let timer = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        timer.try_with_value(|t| {
            if let Some(h) = t {
                h.clear();
            }
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.begin_submit()) {
            Some(Ok((ticket, message))) => {
                set_invalid(None);
                arm(timer, timings.submit_delay(), move || {
                    let result = SimulatedSender.send(&message);
                    let recorded = form
                        .try_update(|f| f.complete(ticket, result))
                        .unwrap_or(false);
                    if recorded {
                        arm(timer, timings.status_display(), move || {
                            form.try_update(|f| f.dismiss(ticket));
                        });
                    }
                });
            }
            Some(Err(e)) => {
                log::debug!("contact form rejected: {e}");
                set_invalid(Some(e));
            }
            None => {}
        }
    };

    let submitting = move || form.with(|f| f.is_submitting());

    view! {
        <section id="contact" class="min-h-screen py-20 bg-acid-bg relative overflow-hidden scroll-mt-20">
            <div class="absolute inset-0">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-golden/10 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-acid-green/10 rounded-full blur-3xl animate-pulse animation-delay-1000"></div>
                <GridBackdrop opacity="opacity-5" />
            </div>

            {content.contact.floating.iter().map(|f| view! { <Floating item=f /> }).collect_view()}

            <div class="container mx-auto px-6 relative z-10">
                <div class="max-w-6xl mx-auto">
                    <Reveal class="text-center mb-20">
                        <div class="inline-flex items-center gap-4 mb-6 px-8 py-4 rounded-2xl bg-acid-card/50 backdrop-blur-lg border border-golden/30">
                            <div class="w-3 h-3 bg-golden rounded-full animate-pulse"></div>
                            <span class="text-acid-green font-mono text-lg uppercase tracking-widest font-bold">
                                "Let's Build Something Amazing"
                            </span>
                            <div class="w-3 h-3 bg-golden rounded-full animate-pulse"></div>
                        </div>

                        <h2 class="text-6xl lg:text-8xl font-black text-white mb-8">
                            <span class="text-transparent bg-gradient-to-r from-golden via-acid-green to-electric-pink bg-clip-text">
                                "LET'S"
                            </span>
                            <br />
                            <span class="text-white">"CONNECT"</span>
                        </h2>

                        <p class="text-2xl text-gray-300 max-w-3xl mx-auto leading-relaxed">
                            "Ready to bring your vision to life? Let's create something extraordinary together."
                            <span class="text-golden font-bold">" Your next project starts here."</span>
                        </p>
                    </Reveal>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-start">
                        <Reveal class="relative">
                            <div class="bg-acid-card/60 backdrop-blur-xl rounded-3xl p-10 border-2 border-golden/30 shadow-2xl shadow-golden/20">
                                <form on:submit=on_submit class="space-y-8">
                                    <ContactField form field=Field::Name label="Your Name" icon=Icon::User />
                                    <ContactField form field=Field::Email label="Your Email" icon=Icon::Mail />
                                    <ContactField
                                        form
                                        field=Field::Message
                                        label="Your Message"
                                        icon=Icon::MessageSquare
                                    />

                                    {move || {
                                        invalid
                                            .get()
                                            .map(|e| {
                                                view! {
                                                    <p role="alert" class="text-electric-pink font-semibold">
                                                        {e.to_string()}
                                                    </p>
                                                }
                                            })
                                    }}

                                    <button
                                        type="submit"
                                        disabled=submitting
                                        class="w-full bg-gradient-to-r from-golden to-acid-green text-acid-bg py-6 rounded-2xl font-black text-xl uppercase tracking-widest relative overflow-hidden group flex items-center justify-center gap-3 hover:scale-[1.02] active:scale-[0.98] transition-transform duration-300 disabled:opacity-70 disabled:cursor-wait"
                                    >
                                        <span class="relative z-10" aria-hidden="true">
                                            "➤"
                                        </span>
                                        <span class="relative z-10">
                                            {move || if submitting() { "SENDING..." } else { "SEND MESSAGE" }}
                                        </span>
                                        <div class="absolute inset-0 bg-gradient-to-r from-acid-green to-golden -translate-x-full group-hover:translate-x-0 transition-transform duration-500"></div>
                                    </button>
                                </form>

                                {move || match form.with(|f| f.status()) {
                                    SubmissionStatus::Success => EitherOf3::A(view! {
                                        <div
                                            role="status"
                                            class="mt-6 p-4 rounded-2xl text-center font-bold flex items-center justify-center gap-3 animate-fade-in-up bg-acid-green/20 text-acid-green border border-acid-green/30"
                                        >
                                            <span aria-hidden="true">"✔"</span>
                                            <span>"Message sent successfully! I'll get back to you soon."</span>
                                        </div>
                                    }),
                                    SubmissionStatus::Error => EitherOf3::B(view! {
                                        <div
                                            role="alert"
                                            class="mt-6 p-4 rounded-2xl text-center font-bold flex items-center justify-center gap-3 animate-fade-in-up bg-electric-pink/20 text-electric-pink border border-electric-pink/30"
                                        >
                                            <span aria-hidden="true">"✖"</span>
                                            <span>"Failed to send message. Please try again."</span>
                                        </div>
                                    }),
                                    SubmissionStatus::Idle | SubmissionStatus::Submitting => {
                                        EitherOf3::C(())
                                    }
                                }}
                            </div>
                        </Reveal>

                        <div class="space-y-8">
                            <div class="grid grid-cols-1 gap-6">
                                {content
                                    .contact
                                    .cards
                                    .iter()
                                    .enumerate()
                                    .map(|(index, card)| view! { <InfoCard card index /> })
                                    .collect_view()}
                            </div>

                            <Reveal class="bg-acid-card/40 backdrop-blur-lg rounded-2xl p-8 border border-golden/20" delay_ms=400>
                                <h3 class="text-golden font-bold text-xl mb-4 flex items-center gap-3">
                                    <IconView icon=Icon::MessageCircle />
                                    "Quick Response Guaranteed"
                                </h3>
                                <p class="text-gray-300 mb-4">
                                    "I typically respond within a few hours. For urgent matters,"
                                    <span class="text-acid-green font-semibold">
                                        " WhatsApp is the fastest way"
                                    </span>
                                    " to reach me."
                                </p>
                                <div class="flex items-center gap-4 text-sm text-gray-400">
                                    <div class="w-2 h-2 bg-acid-green rounded-full animate-pulse"></div>
                                    <span>"Available for new projects"</span>
                                    <div class="w-2 h-2 bg-golden rounded-full animate-pulse"></div>
                                    <span>"Open to full-time roles"</span>
                                </div>
                            </Reveal>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

const FIELD_CLASS: &str = "w-full bg-acid-bg/80 backdrop-blur-lg border-2 border-golden/40 rounded-2xl px-6 py-4 text-white focus:outline-none focus:border-golden focus:shadow-2xl focus:shadow-golden/30 focus:scale-[1.02] transition-all duration-500";

#[component]
fn ContactField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    icon: Icon,
) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: Event| form.update(|f| f.set(field, event_target_value(&ev)));
    let disabled = move || form.with(|f| f.is_submitting());

    let control = match field {
        Field::Message => Either::Left(view! {
            <textarea
                id=field.key()
                name=field.key()
                rows="6"
                required=true
                class=format!("{FIELD_CLASS} resize-none")
                prop:value=value
                prop:disabled=disabled
                on:input=on_input
            ></textarea>
        }),
        Field::Name | Field::Email => Either::Right(view! {
            <input
                id=field.key()
                name=field.key()
                type=if field == Field::Email { "email" } else { "text" }
                required=true
                class=FIELD_CLASS
                prop:value=value
                prop:disabled=disabled
                on:input=on_input
            />
        }),
    };

    view! {
        <div class="relative">
            <label for=field.key() class="block text-golden font-bold mb-3 text-lg flex items-center gap-2">
                <IconView icon />
                {label}
            </label>
            {control}
        </div>
    }
}

#[component]
fn InfoCard(card: &'static ContactCard, index: usize) -> impl IntoView {
    let sparks = (0..3)
        .map(|i| Particle {
            left_pct: 20.0 + i as f64 * 30.0,
            top_pct: 10.0,
            duration_s: 2.0,
            delay_s: i as f64 * 0.5,
        })
        .collect::<Vec<_>>();

    let body = view! {
        <div class="absolute inset-0 bg-gradient-to-br from-golden/10 to-acid-green/10 opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
        <div class="flex justify-center mb-4 relative z-10 group-hover:scale-125 transition-transform duration-500">
            <IconView icon=card.icon class="text-4xl text-golden" />
        </div>
        <h3 class="text-golden font-bold text-lg mb-2 relative z-10">{card.title.clone()}</h3>
        <p class="text-gray-200 relative z-10 text-sm">{card.value.clone()}</p>
        <div class="absolute inset-0 overflow-hidden rounded-2xl">
            <ParticleField particles=sparks dot_class="w-2 h-2 bg-golden" animation="animate-particle-rise" />
        </div>
    };

    let class = "block bg-acid-card/60 backdrop-blur-lg rounded-2xl p-8 border-2 border-golden/20 text-center group relative overflow-hidden hover:scale-105 hover:-translate-y-2 hover:border-golden/50 hover:shadow-2xl hover:shadow-golden/20 transition-all duration-300";

    view! {
        <Reveal delay_ms=200 + (index as u32) * 200>
            {match card.target() {
                Some(LinkTarget::NewTab(href)) => EitherOf3::A(view! {
                    <a href=href target="_blank" rel="noopener noreferrer" class=class>
                        {body}
                    </a>
                }),
                Some(LinkTarget::SameWindow(href)) => EitherOf3::B(view! {
                    <a href=href class=class>
                        {body}
                    </a>
                }),
                None => EitherOf3::C(view! { <div class=class>{body}</div> }),
            }}
        </Reveal>
    }
}

#[component]
fn Floating(item: &'static FloatingIcon) -> impl IntoView {
    view! {
        <div
            class="absolute text-golden/20 text-3xl animate-float hover:scale-150 hover:opacity-80 transition-transform duration-500"
            style=format!(
                "left: {}%; top: {}%; animation-delay: {}s",
                item.x,
                item.y,
                item.delay,
            )
            aria-hidden="true"
        >
            <IconView icon=item.icon />
        </div>
    }
}
