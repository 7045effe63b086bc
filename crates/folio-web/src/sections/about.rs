//! About section

use crate::scroll::SectionAnchor;
use folio_core::{Portfolio, SectionId};
use leptos::prelude::*;

#[component]
pub fn About(anchor: SectionAnchor) -> impl IntoView {
    let portfolio = Portfolio::embedded();
    let headline = portfolio.profile.headline.clone();
    let paragraphs = portfolio.about.clone();

    view! {
        <section
            id=SectionId::About.dom_id()
            class="section section-about"
            node_ref=anchor.node_ref()
        >
            <h2 class="section-title">{SectionId::About.label()}</h2>
            <h3 class="about-headline">{headline}</h3>
            {paragraphs
                .into_iter()
                .map(|paragraph| view! { <p class="about-paragraph">{paragraph}</p> })
                .collect_view()}
        </section>
    }
}
