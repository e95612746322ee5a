use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use portfolio::Site;
use wasm_bindgen::prelude::*;

pub mod browser;
mod components;

use components::*;

/// Whole page. Content is provided to every section through context.
#[component]
pub fn App(site: Site) -> impl IntoView {
    provide_meta_context();

    let title = format!("{} - {}", site.profile.full_name(), site.profile.title);
    let description = site.profile.bio.clone();
    provide_context(Rc::new(site));

    view! {
        <Html lang="en" />
        <Meta charset="utf-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />
        <Meta name="description" content=description />
        <Title text=title />
        <Stylesheet href="/style.css" />

        <div class="dark min-h-screen bg-background text-foreground">
            <div class="grain relative">
                <Header />
                <Hero />
                <About />
                <Experience />
                <Projects />
                <Footer />
            </div>
        </div>
    }
}

/// Shown instead of the page when the content document fails to load.
#[component]
fn ContentUnavailable(reason: String) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-6">
            <div class="max-w-lg text-center">
                <h1 class="text-2xl font-semibold mb-4">"This page could not be loaded"</h1>
                <p class="text-sm text-muted-foreground">{reason}</p>
            </div>
        </div>
    }
}

/// Initialize the app
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    match Site::embedded() {
        Ok(site) => mount_to_body(move || view! { <App site=site /> }),
        Err(e) => {
            log::error!("site content invalid: {}", e);
            let reason = e.to_string();
            mount_to_body(move || view! { <ContentUnavailable reason=reason /> });
        }
    }
}
