//! Terminal typing demo
//!
//! Binds a [`Timeline`](crate::core::Timeline) to a fake terminal window.
//! Two browser timers drive it: an interval firing the character tick, and
//! a one-shot timeout armed whenever a line runs out, which completes the
//! line pause. Both are dropped on unmount.
//!
//! On the server the component renders an empty terminal with its cursor;
//! typing starts once the page is hydrated.

use leptos::html::Pre;
use leptos::prelude::*;

use crate::core::TypewriterConfig;

/// Animated terminal window replaying the Lingo CLI transcript
#[component]
#[cfg_attr(feature = "ssr", allow(unused_variables))]
pub fn TerminalDemo(
    /// Typing speed, line pause and retention window
    config: TypewriterConfig,
) -> impl IntoView {
    let rendered = RwSignal::new(String::new());
    let viewport = NodeRef::<Pre>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::{Script, TickOutcome, Timeline, Typewriter};
        use gloo_timers::callback::{Interval, Timeout};

        let script = Script::default();
        leptos::logging::log!(
            "terminal demo: {} lines, tick {:?}, pause {:?}",
            script.len(),
            config.tick_period,
            config.line_pause
        );

        let tick_ms = u32::try_from(config.tick_period.as_millis()).unwrap_or(u32::MAX);
        let pause_ms = u32::try_from(config.line_pause.as_millis()).unwrap_or(u32::MAX);

        let timeline = StoredValue::new(Timeline::new(Typewriter::new(script, config)));
        let interval = StoredValue::new_local(None::<Interval>);
        let pending_pause = StoredValue::new_local(None::<Timeout>);

        interval.set_value(Some(Interval::new(tick_ms, move || {
            let outcome = timeline
                .try_update_value(|tl| tl.tick(&mut |text: &str| rendered.set(text.to_owned())));

            if outcome == Some(TickOutcome::PauseArmed) {
                let timeout = Timeout::new(pause_ms, move || {
                    timeline.try_update_value(|tl| {
                        tl.finish_pause(&mut |text: &str| rendered.set(text.to_owned()))
                    });
                });
                pending_pause.try_update_value(|slot| *slot = Some(timeout));
            }
        })));

        // Scroll after the DOM has the new text
        Effect::new(move |_| {
            rendered.track();
            if let Some(el) = viewport.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        });

        on_cleanup(move || {
            timeline.try_update_value(Timeline::stop);
            interval.try_update_value(|handle| handle.take());
            pending_pause.try_update_value(|handle| handle.take());
            leptos::logging::log!("terminal demo: stopped");
        });
    }

    view! {
        <div class="w-full max-w-3xl rounded-xl border border-white/10 bg-neutral-900/60 shadow-2xl backdrop-blur-sm">
            // Window chrome
            <div class="flex items-center gap-2 border-b border-white/10 px-4 py-2">
                <div class="flex gap-2" aria-hidden="true">
                    <span class="h-3 w-3 rounded-full bg-red-500/80"></span>
                    <span class="h-3 w-3 rounded-full bg-yellow-500/80"></span>
                    <span class="h-3 w-3 rounded-full bg-green-500/80"></span>
                </div>
                <div class="ml-3 text-xs text-neutral-400">"bash • lingo-i18n"</div>
            </div>
            <pre
                node_ref=viewport
                class="h-56 overflow-hidden whitespace-pre-wrap px-4 py-3 font-mono text-sm leading-relaxed text-neutral-200"
                aria-live="off"
            >
                {move || rendered.get()}
                <span
                    class="ml-0.5 inline-block h-4 w-2 animate-pulse rounded-sm bg-purple-400/80 align-middle"
                    aria-hidden="true"
                ></span>
            </pre>
        </div>
    }
}
