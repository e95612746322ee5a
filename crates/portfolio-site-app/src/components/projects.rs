use std::rc::Rc;

use leptos::*;
use portfolio::{partition_projects, preview, IconKind, Project, SectionId, Site};

use super::Icon;

const BADGE: &str = "inline-flex items-center gap-1 px-2 py-0.5 text-xs font-medium bg-amber-500/15 text-amber-400 border border-amber-500/25 rounded-full";
const BADGE_COMPACT: &str = "inline-flex items-center gap-1 px-1.5 py-0.5 text-[10px] font-medium bg-amber-500/15 text-amber-400 border border-amber-500/25 rounded-full";

#[component]
fn ArchivedBadge(#[prop(default = false)] compact: bool) -> impl IntoView {
    let (class, size) = if compact {
        (BADGE_COMPACT, 10)
    } else {
        (BADGE, 12)
    };
    view! {
        <span class=class>
            <Icon kind=IconKind::Archive size=size/>
            "Archived"
        </span>
    }
}

fn featured_card(project: &Project) -> impl IntoView {
    let tech = project
        .tech
        .iter()
        .map(|tag| {
            view! {
                <span class="px-2.5 py-1 text-xs font-medium bg-primary/10 text-primary rounded-md border border-primary/20">
                    {tag.clone()}
                </span>
            }
        })
        .collect::<Vec<_>>();
    let archived = project.archived;

    view! {
        <a
            href=project.url.clone()
            target="_blank"
            rel="noopener noreferrer"
            class="group block p-8 bg-background rounded-2xl border border-border hover:border-primary hover:shadow-2xl hover:shadow-primary/10 transition-all duration-300 hover:-translate-y-1"
        >
            <div class="flex items-start justify-between mb-4">
                <div class="flex items-center gap-2">
                    <h3 class="text-xl font-semibold text-foreground group-hover:text-primary transition-colors">
                        {project.title.clone()}
                    </h3>
                    <Show when=move || archived fallback=|| ()>
                        <ArchivedBadge/>
                    </Show>
                </div>
                <Icon
                    kind=IconKind::ExternalLink
                    size=18
                    class="text-muted-foreground group-hover:text-primary group-hover:translate-x-0.5 group-hover:-translate-y-0.5 transition-all shrink-0"
                />
            </div>

            <p class="text-muted-foreground mb-6 leading-relaxed">{project.description.clone()}</p>

            <div class="flex flex-wrap gap-2">{tech}</div>
        </a>
    }
}

fn compact_card(project: &Project, preview_chars: usize) -> impl IntoView {
    let archived = project.archived;
    let summary = preview(&project.description, preview_chars).into_owned();

    view! {
        <a
            href=project.url.clone()
            target="_blank"
            rel="noopener noreferrer"
            class="group flex items-center justify-between p-5 bg-background/50 rounded-xl border border-border hover:border-primary/50 hover:bg-background transition-all duration-300"
        >
            <div>
                <div class="flex items-center gap-2">
                    <h3 class="font-medium text-foreground group-hover:text-primary transition-colors">
                        {project.title.clone()}
                    </h3>
                    <Show when=move || archived fallback=|| ()>
                        <ArchivedBadge compact=true/>
                    </Show>
                </div>
                <p class="text-sm text-muted-foreground">{summary}</p>
            </div>
            <Icon
                kind=IconKind::ExternalLink
                size=16
                class="text-muted-foreground group-hover:text-primary group-hover:translate-x-0.5 transition-all shrink-0 ml-4"
            />
        </a>
    }
}

/// Featured projects as large cards, the rest as a compact grid below.
#[component]
pub fn Projects() -> impl IntoView {
    let site = expect_context::<Rc<Site>>();
    let groups = partition_projects(&site.projects);
    let preview_chars = site.page.preview_chars;

    let featured = groups
        .featured
        .iter()
        .map(|project| featured_card(project))
        .collect::<Vec<_>>();
    let other = (!groups.other.is_empty()).then(|| {
        let cards = groups
            .other
            .iter()
            .map(|project| compact_card(project, preview_chars))
            .collect::<Vec<_>>();
        view! { <div class="grid md:grid-cols-2 gap-4">{cards}</div> }
    });

    view! {
        <section
            data-section=SectionId::Projects.as_str()
            class="py-24 px-6 bg-card/50 relative overflow-hidden"
        >
            <div class="absolute -left-32 top-1/3 w-96 h-96 bg-primary/5 rounded-full blur-3xl"></div>

            <div class="max-w-5xl mx-auto relative">
                <h2 class="text-sm uppercase tracking-[0.3em] text-primary mb-12 font-medium flex items-center gap-3">
                    <span class="w-8 h-px bg-primary"></span>
                    {SectionId::Projects.label()}
                </h2>

                <div class="grid md:grid-cols-2 gap-6 mb-12">{featured}</div>

                {other}
            </div>
        </section>
    }
}
