use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Direction an element travels from while it fades in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Up,
    Left,
    Scale,
    Fade,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Self::Up => "reveal-up",
            Self::Left => "reveal-left",
            Self::Scale => "reveal-scale",
            Self::Fade => "reveal-fade",
        }
    }
}

/// Animates its children in the first time they scroll into view, then
/// leaves them alone.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(into, optional)] class: String,
    #[prop(optional)] motion: Motion,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let (seen, set_seen) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_seen.set(true);
        }
    });

    view! {
        <div
            node_ref=el
            class=move || {
                let state = if seen.get() { "is-visible" } else { "" };
                format!("reveal {} {state} {class}", motion.class())
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
