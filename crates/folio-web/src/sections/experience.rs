//! Experience section

use crate::scroll::SectionAnchor;
use folio_core::content::ExperienceEntry;
use folio_core::{Portfolio, SectionId};
use leptos::prelude::*;

#[component]
pub fn Experience(anchor: SectionAnchor) -> impl IntoView {
    let entries = Portfolio::embedded().experience.clone();

    view! {
        <section
            id=SectionId::Experience.dom_id()
            class="section section-experience"
            node_ref=anchor.node_ref()
        >
            <h2 class="section-title">{SectionId::Experience.label()}</h2>
            <ol class="timeline">
                {entries
                    .into_iter()
                    .map(|entry| view! { <ExperienceCard entry /> })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn ExperienceCard(entry: ExperienceEntry) -> impl IntoView {
    view! {
        <li class="card experience-card">
            <div class="card-header">
                <h3 class="card-title">{entry.role}</h3>
                <span class="card-meta">{entry.period}</span>
            </div>
            <p class="card-subtitle">{entry.organization}</p>
            <ul class="card-list">
                {entry
                    .highlights
                    .into_iter()
                    .map(|highlight| view! { <li>{highlight}</li> })
                    .collect_view()}
            </ul>
        </li>
    }
}
