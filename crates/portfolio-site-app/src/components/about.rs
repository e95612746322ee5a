use std::rc::Rc;

use leptos::*;
use portfolio::{SectionId, Site};

#[component]
pub fn About() -> impl IntoView {
    let site = expect_context::<Rc<Site>>();

    view! {
        <section
            data-section=SectionId::About.as_str()
            class="py-24 px-6 bg-card/50 relative overflow-hidden"
        >
            <div class="absolute -right-32 top-1/2 -translate-y-1/2 w-96 h-96 bg-primary/5 rounded-full blur-3xl"></div>

            <div class="max-w-3xl mx-auto relative">
                <h2 class="text-sm uppercase tracking-[0.3em] text-primary mb-6 font-medium flex items-center gap-3">
                    <span class="w-8 h-px bg-primary"></span>
                    {SectionId::About.label()}
                </h2>
                <div class="space-y-6">
                    <p class="text-2xl md:text-3xl font-light leading-relaxed text-foreground/90">
                        {site.profile.bio.clone()}
                    </p>
                </div>
            </div>
        </section>
    }
}
