use std::rc::Rc;

use leptos::*;
use portfolio::{copyright_line, Site};

use super::Icon;
use crate::browser::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let site = expect_context::<Rc<Site>>();
    let copyright = copyright_line(&site.profile, current_year());

    let socials = site
        .socials
        .iter()
        .map(|social| {
            view! {
                <a
                    href=social.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="p-3 text-muted-foreground hover:text-primary hover:bg-primary/10 rounded-full transition-all duration-300 hover:scale-110"
                    aria-label=social.name.clone()
                >
                    <Icon kind=social.icon size=22/>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="py-16 px-6 border-t border-border relative">
            <div class="max-w-3xl mx-auto text-center">
                <div class="flex items-center justify-center gap-4 mb-8">{socials}</div>

                <p class="text-muted-foreground text-sm">{copyright}</p>

                <p class="text-muted-foreground/40 text-xs mt-4 flex items-center justify-center gap-2">
                    <span class="w-4 h-px bg-muted-foreground/20"></span>
                    "Built with Leptos & Tailwind CSS"
                    <span class="w-4 h-px bg-muted-foreground/20"></span>
                </p>
            </div>
        </footer>
    }
}
