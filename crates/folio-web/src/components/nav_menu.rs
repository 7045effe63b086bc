//! Responsive navigation menu
//!
//! Wide viewports get a horizontal bar; narrow ones get a menu icon with a
//! dropdown that staggers its entries in and, on close, back out in reverse.

use crate::hooks::{root_font_size, use_presence, use_window_width};
use crate::scroll::{BrowserScroll, SectionAnchors};
use folio_core::menu::nav_entries;
use folio_core::{
    LayoutMode, MenuEvent, MenuState, MenuView, MotionPhase, NavEntry, NavMenu, Presence,
    SectionId, SiteConfig,
};
use leptos::prelude::*;

/// Header navigation wired to the section anchors
#[component]
pub fn NavigationMenu(
    config: RwSignal<SiteConfig>,
    anchors: StoredValue<SectionAnchors>,
) -> impl IntoView {
    let width = use_window_width();
    let (state, set_state) = signal(MenuState::Closed);

    let menu = Memo::new(move |_| {
        config.with(|c| c.nav_menu(root_font_size(c.root_font_size())))
    });
    let menu_view = Memo::new(move |_| menu.get().view(width.get(), state.get()));
    let layout = Memo::new(move |_| menu_view.get().layout());
    let dropdown_open = Memo::new(move |_| match menu_view.get() {
        MenuView::Bar { .. } => false,
        MenuView::Dropdown { open, .. } => open,
    });
    let exit_secs = Signal::derive(move || {
        menu.get()
            .motion()
            .dropdown_exit_duration(nav_entries().len())
    });
    let presence = use_presence(dropdown_open, exit_secs);

    let dispatch = move |event: MenuEvent| {
        let host = BrowserScroll {
            fallback_root: config.with_untracked(|c| c.root_font_size()),
        };
        let current = state.get_untracked();
        let next = anchors
            .with_value(|anchors| menu.get_untracked().dispatch(current, event, &host, anchors));
        set_state.set(next);
    };
    let on_select =
        Callback::new(move |section: SectionId| dispatch(MenuEvent::EntrySelected(section)));

    view! {
        <nav class="nav" aria-label="Sections">
            {move || match layout.get() {
                LayoutMode::Bar => {
                    let entries = menu_view.get_untracked().entries().to_vec();
                    let count = entries.len();
                    view! {
                        <div class="nav-items nav-items-bar">
                            {entries
                                .into_iter()
                                .map(|entry| {
                                    let style = Signal::derive(move || {
                                        menu.get().motion().bar_item_style(entry.index, count)
                                    });
                                    let phase = Signal::derive(|| MotionPhase::Animate);
                                    view! { <NavItem entry style phase on_select /> }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
                LayoutMode::Dropdown => {
                    view! {
                        <button
                            class="menu-icon motion"
                            data-motion="animate"
                            style=move || {
                                let motion = *menu.get().motion();
                                motion.header_child_style(&motion.bar_item, 0, 2)
                            }
                            on:click=move |_| dispatch(MenuEvent::IconClicked)
                            aria-label="Toggle menu"
                            aria-expanded=move || state.get().is_open().to_string()
                        >
                            <svg xmlns="http://www.w3.org/2000/svg" width="28" height="28" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <line x1="4" x2="20" y1="6" y2="6"/>
                                <line x1="4" x2="20" y1="12" y2="12"/>
                                <line x1="4" x2="20" y1="18" y2="18"/>
                            </svg>
                        </button>
                        <Show when=move || presence.get().is_mounted()>
                            <DropdownList presence menu on_select />
                        </Show>
                    }
                        .into_any()
                }
            }}
        </nav>
    }
}

/// Column of entries shown while the dropdown is open or exiting
#[component]
fn DropdownList(
    presence: ReadSignal<Presence>,
    menu: Memo<NavMenu>,
    on_select: Callback<SectionId>,
) -> impl IntoView {
    let entries = nav_entries();
    let count = entries.len();

    view! {
        <div class="nav-items nav-items-dropdown" role="menu">
            {entries
                .into_iter()
                .map(|entry| {
                    let phase = Signal::derive(move || presence.get().phase());
                    let style = Signal::derive(move || {
                        menu.get().motion().dropdown_item_style(entry.index, count, phase.get())
                    });
                    view! { <NavItem entry style phase on_select /> }
                })
                .collect_view()}
        </div>
    }
}

/// Single clickable entry
#[component]
fn NavItem(
    entry: NavEntry,
    style: Signal<String>,
    phase: Signal<MotionPhase>,
    on_select: Callback<SectionId>,
) -> impl IntoView {
    let section = entry.section;

    view! {
        <button
            class="nav-item motion"
            role="menuitem"
            style=move || style.get()
            data-motion=move || phase.get().as_str()
            on:click=move |_| on_select.run(section)
        >
            {entry.label()}
        </button>
    }
}
