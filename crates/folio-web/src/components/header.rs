//! Header component

use super::NavigationMenu;
use crate::scroll::SectionAnchors;
use folio_core::{Portfolio, SiteConfig};
use leptos::prelude::*;

/// Fixed header: navigation on one side, portrait and name on the other
#[component]
pub fn Header(config: RwSignal<SiteConfig>, anchors: StoredValue<SectionAnchors>) -> impl IntoView {
    let profile = &Portfolio::embedded().profile;
    let name = profile.name.clone();
    let portrait = (!profile.portrait.is_empty()).then(|| profile.portrait.clone());

    // The signature is the second of the header's two children
    let signature_style =
        move || config.with(|c| c.motion.header_child_style(&c.motion.signature, 1, 2));

    view! {
        <header class="header">
            <NavigationMenu config anchors />
            <div class="signature">
                {portrait.map(|src| {
                    view! {
                        <img
                            src=src
                            alt="portrait"
                            class="icon motion"
                            data-motion="animate"
                            style=signature_style
                        />
                    }
                })}
                <h4 class="motion" data-motion="animate" style=signature_style>
                    {name}
                </h4>
            </div>
        </header>
    }
}
