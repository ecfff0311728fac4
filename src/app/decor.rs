use leptos::{either::Either, html, prelude::*};
use leptos_use::use_element_visibility;

use crate::content::Icon;
use crate::state::motion::Particle;

#[component]
pub fn IconView(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    match icon.devicon() {
        Some(dev) => Either::Left(view! { <i class=format!("{dev} {class}") aria-hidden="true"></i> }),
        None => Either::Right(view! {
            <span class=class aria-hidden="true">
                {icon.glyph()}
            </span>
        }),
    }
}

/// Keeps `Reveal` content visible when scripts never run.
pub const REVEAL_FALLBACK_CSS: &str = ".reveal { opacity: 1; transform: none; transition: none; }";

/// Plays its entrance transition the first time it scrolls into view.
/// Without scripts, [`REVEAL_FALLBACK_CSS`] in the shell shows it immediately.
#[component]
pub fn Reveal(
    #[prop(optional)] class: &'static str,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node);
    let (seen, set_seen) = signal(false);
    Effect::new(move |_| {
        if visible.get() {
            set_seen(true);
        }
    });

    view! {
        <div
            node_ref=node
            class=format!("reveal {class}")
            class:reveal-in=move || seen.get()
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}

/// Absolutely positioned dots looping through `animation`.
#[component]
pub fn ParticleField(
    particles: Vec<Particle>,
    dot_class: &'static str,
    animation: &'static str,
) -> impl IntoView {
    particles
        .into_iter()
        .map(|p| {
            view! {
                <div
                    class=format!("absolute rounded-full pointer-events-none {dot_class} {animation}")
                    style=p.style()
                ></div>
            }
        })
        .collect_view()
}

/// Faint golden grid behind a section.
#[component]
pub fn GridBackdrop(opacity: &'static str) -> impl IntoView {
    view! {
        <div class=format!("absolute inset-0 {opacity}")>
            <div class="absolute inset-0 bg-golden-grid"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fallback_overrides_hidden_state() {
        assert!(REVEAL_FALLBACK_CSS.starts_with(".reveal {"));
        assert!(REVEAL_FALLBACK_CSS.contains("opacity: 1"));
        assert!(REVEAL_FALLBACK_CSS.contains("transform: none"));
    }
}
