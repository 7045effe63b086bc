//! Footer component

use folio_core::Portfolio;
use leptos::prelude::*;

/// Footer with contact links and the owner's name
#[component]
pub fn Footer() -> impl IntoView {
    let portfolio = Portfolio::embedded();
    let name = portfolio.profile.name.clone();
    let links = portfolio.links.clone();

    view! {
        <footer class="footer">
            <ul class="footer-links">
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.url target="_blank" rel="noopener noreferrer">
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="footer-note">"© " {name}</p>
        </footer>
    }
}
