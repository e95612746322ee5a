use std::rc::Rc;

use leptos::*;
use portfolio::{IconKind, Polarity, ScrollThreshold, Site};

use super::Icon;
use crate::browser::use_scroll_threshold;

const INDICATOR_BASE: &str =
    "absolute bottom-8 left-1/2 -translate-x-1/2 transition-opacity duration-300";

/// Scroll indicator classes; hidden indicators also stop taking pointer events.
pub fn indicator_class(visible: bool) -> String {
    if visible {
        format!("{INDICATOR_BASE} opacity-100")
    } else {
        format!("{INDICATOR_BASE} opacity-0 pointer-events-none")
    }
}

/// Full-height intro with avatar, name, location and social links.
#[component]
pub fn Hero() -> impl IntoView {
    let site = expect_context::<Rc<Site>>();
    let show_indicator = use_scroll_threshold(ScrollThreshold::new(
        site.page.hero_threshold,
        Polarity::ActiveUntilPast,
    ));
    let profile = site.profile.clone();

    let socials = site
        .socials
        .iter()
        .map(|social| {
            let style = social
                .hover_color
                .as_ref()
                .map(|color| format!("--hover-color: {color}"));
            view! {
                <a
                    href=social.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    style=style
                    class="group flex items-center gap-2 px-4 py-2.5 sm:px-5 sm:py-3 bg-card/80 backdrop-blur-sm hover:bg-primary text-foreground hover:text-primary-foreground rounded-full border border-border hover:border-primary transition-all duration-300 hover:scale-105 hover:shadow-lg hover:shadow-primary/20"
                >
                    <Icon
                        kind=social.icon
                        size=18
                        class="sm:w-5 sm:h-5 transition-transform duration-300 group-hover:rotate-12"
                    />
                    <span class="font-medium text-sm sm:text-base">{social.name.clone()}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="relative min-h-[90vh] flex items-center justify-center px-6 py-20 overflow-hidden">
            <div class="absolute inset-0 bg-linear-to-br from-background via-background to-primary/5"></div>
            <div
                class="absolute top-20 right-10 w-72 h-72 bg-primary/15 rounded-full blur-3xl animate-pulse"
                style="animation-duration: 4s"
            ></div>
            <div
                class="absolute bottom-20 left-10 w-96 h-96 bg-accent/10 rounded-full blur-3xl animate-pulse"
                style="animation-duration: 6s"
            ></div>
            <div
                class="absolute top-1/2 left-1/3 w-64 h-64 bg-primary/5 rounded-full blur-3xl animate-pulse"
                style="animation-duration: 5s"
            ></div>

            <div class="relative z-10 max-w-4xl mx-auto text-center">
                <div class="mb-8 animate-fade-in">
                    <div class="relative w-36 h-36 mx-auto group">
                        <div
                            class="absolute inset-0 rounded-full bg-gradient-to-tr from-primary via-primary/50 to-accent animate-spin"
                            style="animation-duration: 8s"
                        ></div>
                        <div class="absolute inset-[3px] rounded-full bg-background"></div>
                        <div class="absolute inset-[6px] rounded-full overflow-hidden">
                            <img
                                src=profile.avatar.clone()
                                alt=profile.name.clone()
                                class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                            />
                        </div>
                    </div>
                </div>

                <h1 class="text-5xl md:text-7xl font-bold tracking-tight mb-4 animate-fade-in animate-delay-100">
                    <span class="text-foreground">{profile.name.clone()}</span>
                    " "
                    <span class="bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                        {profile.surname.clone()}
                    </span>
                </h1>

                <p class="text-xl md:text-2xl text-muted-foreground mb-2 animate-fade-in animate-delay-200 font-light">
                    {profile.title.clone()}
                </p>

                <div class="inline-flex items-center gap-2 text-muted-foreground mb-10 animate-fade-in animate-delay-400 px-4 py-2 rounded-full bg-card/50 backdrop-blur-sm border border-border/50">
                    <Icon kind=IconKind::MapPin size=16 class="text-primary"/>
                    <span class="text-sm">{profile.location.clone()}</span>
                </div>

                <div class="flex flex-wrap items-center justify-center gap-3 sm:gap-4 animate-fade-in animate-delay-500">
                    {socials}
                </div>
            </div>

            <div class=move || indicator_class(show_indicator.get())>
                <div class="w-6 h-10 rounded-full border-2 border-primary/30 flex items-start justify-center p-2 animate-bounce">
                    <div class="w-1.5 h-3 bg-primary/50 rounded-full"></div>
                </div>
            </div>
        </section>
    }
}
