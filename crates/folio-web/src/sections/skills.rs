//! Skills section

use crate::scroll::SectionAnchor;
use folio_core::{Portfolio, SectionId};
use leptos::prelude::*;

#[component]
pub fn Skills(anchor: SectionAnchor) -> impl IntoView {
    let groups = Portfolio::embedded().skills.clone();

    view! {
        <section
            id=SectionId::Skills.dom_id()
            class="section section-skills"
            node_ref=anchor.node_ref()
        >
            <h2 class="section-title">{SectionId::Skills.label()}</h2>
            <div class="skill-groups">
                {groups
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="card skill-group">
                                <h3 class="card-title">{group.category}</h3>
                                <ul class="chips">
                                    {group
                                        .items
                                        .into_iter()
                                        .map(|item| view! { <li class="chip">{item}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
