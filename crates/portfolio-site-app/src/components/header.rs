use std::rc::Rc;

use leptos::*;
use portfolio::{navigate_to_section, Polarity, ScrollThreshold, SectionId, Site};

use crate::browser::{use_scroll_threshold, DocumentSections};

const HEADER_BASE: &str = "fixed top-0 left-0 right-0 z-50 transition-all duration-300";

/// Header classes for the transparent (top of page) and scrolled states.
pub fn header_class(scrolled: bool) -> String {
    if scrolled {
        format!("{HEADER_BASE} bg-gray-400/10 backdrop-blur-md border-border shadow-sm")
    } else {
        format!("{HEADER_BASE} bg-transparent")
    }
}

/// Fixed navigation bar; turns opaque once the page is scrolled.
#[component]
pub fn Header() -> impl IntoView {
    let site = expect_context::<Rc<Site>>();
    let scrolled = use_scroll_threshold(ScrollThreshold::new(
        site.page.nav_threshold,
        Polarity::ActiveWhenPast,
    ));

    let nav_button = |section: SectionId| {
        view! {
            <button
                type="button"
                class="text-sm text-muted-foreground hover:text-foreground transition-colors"
                on:click=move |_| {
                    navigate_to_section(&DocumentSections, section);
                }
            >
                {section.label()}
            </button>
        }
    };

    view! {
        <header class=move || header_class(scrolled.get())>
            <div class="max-w-5xl mx-auto px-6 py-4 flex items-center justify-end">
                <nav class="hidden md:flex items-center gap-8">
                    {SectionId::ALL.into_iter().map(nav_button).collect::<Vec<_>>()}
                </nav>
            </div>
        </header>
    }
}
