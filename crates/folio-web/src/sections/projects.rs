//! Projects section

use crate::scroll::SectionAnchor;
use folio_core::content::Project;
use folio_core::{Portfolio, SectionId};
use leptos::prelude::*;

#[component]
pub fn Projects(anchor: SectionAnchor) -> impl IntoView {
    let projects = Portfolio::embedded().projects.clone();

    view! {
        <section
            id=SectionId::Projects.dom_id()
            class="section section-projects"
            node_ref=anchor.node_ref()
        >
            <h2 class="section-title">{SectionId::Projects.label()}</h2>
            <div class="project-grid">
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let title = project.name.clone();

    view! {
        <article class="card project-card">
            <h3 class="card-title">
                {match project.url {
                    Some(url) => {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer">
                                {title}
                            </a>
                        }
                            .into_any()
                    }
                    None => title.into_any(),
                }}
            </h3>
            <p class="card-body">{project.summary}</p>
            <ul class="chips">
                {project
                    .tech
                    .into_iter()
                    .map(|tech| view! { <li class="chip">{tech}</li> })
                    .collect_view()}
            </ul>
        </article>
    }
}
