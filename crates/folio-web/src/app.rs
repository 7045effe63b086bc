//! Root component: creates the section anchors and lays out the page

use leptos::prelude::*;

use crate::api::fetch_config;
use crate::components::{Footer, Header};
use crate::scroll::{SectionAnchor, SectionAnchors};
use crate::sections::{About, Experience, Projects, Skills};
use folio_core::{SectionId, SiteConfig};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    // Compiled-in defaults until (and unless) the server provides a config
    let config = RwSignal::new(SiteConfig::default());

    let remote_config = LocalResource::new(move || async move { fetch_config().await });
    Effect::new(move |_| {
        if let Some(result) = remote_config.get() {
            match result.as_ref() {
                Ok(remote) => config.set(remote.clone()),
                Err(e) => leptos::logging::log!("Using default site config: {}", e),
            }
        }
    });

    let registry = SectionAnchors::for_sections(|_| SectionAnchor::new());
    let anchor = |section| registry.get(section).copied().unwrap_or_default();
    let (about, experience, skills, projects) = (
        anchor(SectionId::About),
        anchor(SectionId::Experience),
        anchor(SectionId::Skills),
        anchor(SectionId::Projects),
    );
    let anchors = StoredValue::new(registry);

    view! {
        <div id="folio-app">
            <Header config anchors />
            <main class="body">
                <About anchor=about />
                <Experience anchor=experience />
                <Skills anchor=skills />
                <Projects anchor=projects />
            </main>
            <Footer />
        </div>
    }
}
