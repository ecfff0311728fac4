use leptos::{ev, prelude::*};

use crate::config::SiteConfig;
use crate::content::{NavItem, SiteContent};
use crate::state::{MobileMenu, ScrollSpy, SectionBounds};

fn measure(anchor: &str) -> Option<SectionBounds> {
    let rect = document().get_element_by_id(anchor)?.get_bounding_client_rect();
    Some(SectionBounds::new(rect.top(), rect.bottom()))
}

#[component]
pub fn Navigation() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let config = expect_context::<SiteConfig>();
    let nav = &content.profile.nav;

    let spy = StoredValue::new(ScrollSpy::new(
        nav.iter().map(|n| n.anchor.clone()),
        config.scroll_threshold_px,
    ));
    let (active, set_active) = signal(None::<String>);
    let (menu, set_menu) = signal(MobileMenu::default());

    let on_scroll = move || {
        let changed = spy.try_update_value(|s| s.observe(measure)).unwrap_or(false);
        if changed {
            set_active(spy.with_value(|s| s.active().map(str::to_string)));
        }
    };

    // browser only; the listener lives as long as the nav bar
    Effect::new(move |_| {
        on_scroll();
        let handle = window_event_listener(ev::scroll, move |_| on_scroll());
        on_cleanup(move || handle.remove());
    });

    let follow_mobile = move || set_menu.update(|m| m.link_activated());

    view! {
        <nav class="fixed top-0 w-full z-50 bg-acid-bg/80 backdrop-blur-lg border-b border-golden/20">
            <div class="container mx-auto px-6">
                <div class="flex justify-between items-center py-4">
                    <a href="#home" class="flex items-center gap-3">
                        <div class="w-8 h-8 bg-gradient-to-r from-golden to-acid-green rounded-lg"></div>
                        <span class="text-golden font-black text-xl tracking-tight">
                            {content.profile.brand.clone()}
                        </span>
                    </a>

                    <div class="hidden md:flex items-center gap-8">
                        {nav
                            .iter()
                            .map(|item| view! { <DesktopLink item active /> })
                            .collect_view()}
                        <a
                            href="#contact"
                            class="bg-golden text-acid-bg px-6 py-2 rounded-lg font-black hover:scale-105 transition-transform duration-300"
                        >
                            "HIRE ME"
                        </a>
                    </div>

                    <button
                        class="md:hidden text-golden"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| set_menu.update(|m| m.toggle())
                    >
                        <div class="w-6 h-0.5 bg-golden mb-1.5"></div>
                        <div class="w-6 h-0.5 bg-golden mb-1.5"></div>
                        <div class="w-6 h-0.5 bg-golden"></div>
                    </button>
                </div>

                {move || {
                    menu.get()
                        .is_open()
                        .then(|| {
                            view! {
                                <div class="md:hidden bg-acid-card border border-golden/20 rounded-lg p-4 mt-2 mb-4 animate-slide-in">
                                    {nav
                                        .iter()
                                        .map(|item| {
                                            let anchor = item.anchor.clone();
                                            view! {
                                                <a
                                                    href=item.href()
                                                    class=move || {
                                                        if active.get().as_deref() == Some(anchor.as_str()) {
                                                            "block py-2 font-semibold text-golden"
                                                        } else {
                                                            "block py-2 font-semibold text-gray-300 hover:text-golden"
                                                        }
                                                    }
                                                    on:click=move |_| follow_mobile()
                                                >
                                                    {item.label.clone()}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </div>
        </nav>
    }
}

#[component]
fn DesktopLink(item: &'static NavItem, active: ReadSignal<Option<String>>) -> impl IntoView {
    let is_active = move || active.get().as_deref() == Some(item.anchor.as_str());
    view! {
        <a
            href=item.href()
            class=move || {
                if is_active() {
                    "font-semibold text-golden transition-colors duration-300 relative group"
                } else {
                    "font-semibold text-gray-300 hover:text-golden transition-colors duration-300 relative group"
                }
            }
            aria-current=move || is_active().then_some("location")
        >
            {item.label.clone()}
            <span class=move || {
                if is_active() {
                    "absolute -bottom-1 left-0 h-0.5 w-full bg-golden transition-all duration-300"
                } else {
                    "absolute -bottom-1 left-0 h-0.5 w-0 bg-golden group-hover:w-full transition-all duration-300"
                }
            }></span>
        </a>
    }
}
