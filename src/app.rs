mod about;
mod animations;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_window_scroll;

use about::About;
use animations::FloatingButton;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

/// Scroll depth after which the floating back-to-top button appears.
const SHOW_TOP_BUTTON_AT: f64 = 600.0;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-[#0a0a20]">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Sandeep Kotakondla - {title}") />
        <Meta
            name="description"
            content="Frontend developer portfolio: animated, responsive web experiences."
        />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site: every section in page order.
#[component]
fn HomePage() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();

    view! {
        <Title text="Portfolio" />
        <div class="w-full overflow-x-hidden bg-[#0a0a20] text-white">
            <Navbar />
            <Hero />
            <About />
            <Projects />
            <Skills />
            <Contact />
            <Footer />
        </div>
        <Show when=move || { scroll_y.get() > SHOW_TOP_BUTTON_AT }>
            <FloatingButton href="#home" label="Back to top">
                "↑"
            </FloatingButton>
        </Show>
    }
}
