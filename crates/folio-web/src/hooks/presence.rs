//! Mount/unmount tracking for lists with exit animations

use folio_core::Presence;
use leptos::prelude::*;
use std::time::Duration;

/// Follows `open`, keeping the list mounted in `Presence::Exiting` for
/// `exit_secs` after it closes so the exit animation can play.
pub fn use_presence(open: Memo<bool>, exit_secs: Signal<f64>) -> ReadSignal<Presence> {
    let (presence, set_presence) = signal(Presence::Hidden);
    // Bumped on every close so an older timer cannot cut a newer exit short
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let next = presence.get_untracked().follow(open.get());
        set_presence.set(next);

        if next == Presence::Exiting {
            let current = generation.try_update_value(|g| {
                *g += 1;
                *g
            });
            let delay = Duration::try_from_secs_f64(exit_secs.get_untracked())
                .unwrap_or(Duration::ZERO);
            set_timeout(
                move || {
                    if generation.try_get_value() == current {
                        set_presence.update(|p| *p = p.exit_finished());
                    }
                },
                delay,
            );
        }
    });

    presence
}
