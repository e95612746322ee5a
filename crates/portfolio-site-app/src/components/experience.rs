use std::rc::Rc;

use leptos::*;
use portfolio::{ExperienceEntry, IconKind, SectionId, Site};

use super::Icon;

/// Work history as a vertical timeline, newest first as authored.
#[component]
pub fn Experience() -> impl IntoView {
    let site = expect_context::<Rc<Site>>();
    let jobs = site.experience.iter().map(job_card).collect::<Vec<_>>();

    view! {
        <section data-section=SectionId::Experience.as_str() class="py-24 px-6 relative">
            <div class="max-w-3xl mx-auto">
                <h2 class="text-sm uppercase tracking-[0.3em] text-primary mb-12 font-medium flex items-center gap-3">
                    <span class="w-8 h-px bg-primary"></span>
                    {SectionId::Experience.label()}
                </h2>
                <div class="space-y-12">{jobs}</div>
            </div>
        </section>
    }
}

fn job_card(job: &ExperienceEntry) -> impl IntoView {
    let highlights = job
        .highlights
        .iter()
        .map(|highlight| {
            view! {
                <span class="px-3 py-1.5 text-sm bg-secondary/80 text-secondary-foreground rounded-full border border-border/50 hover:border-primary/30 hover:bg-secondary transition-all duration-200">
                    {highlight.clone()}
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div
            data-key=job.key()
            class="group relative pl-8 border-l-2 border-border hover:border-primary/50 transition-all duration-500"
        >
            <div class="absolute -left-[9px] top-0 w-4 h-4 rounded-full bg-background border-2 border-border group-hover:border-primary group-hover:bg-primary group-hover:shadow-lg group-hover:shadow-primary/30 transition-all duration-300"></div>
            <div class="absolute -inset-4 -left-2 rounded-xl bg-card/0 group-hover:bg-card/50 transition-all duration-500 -z-10"></div>

            <div class="flex items-start justify-between flex-wrap gap-2 mb-3">
                <div>
                    <h3 class="text-xl font-semibold text-foreground group-hover:text-primary transition-colors duration-300">
                        {job.title.clone()}
                    </h3>
                    <p class="text-primary/80 font-medium">{job.company.clone()}</p>
                </div>
                <div class="flex items-center gap-2 text-muted-foreground text-sm px-3 py-1 rounded-full bg-card/50 border border-border/50">
                    <Icon kind=IconKind::Calendar size=14/>
                    <span>{job.period.clone()}</span>
                </div>
            </div>

            <p class="text-muted-foreground mb-4 leading-relaxed">{job.description.clone()}</p>

            <div class="flex flex-wrap gap-2">{highlights}</div>
        </div>
    }
}
