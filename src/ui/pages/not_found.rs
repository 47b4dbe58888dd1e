//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-neutral-950 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-neutral-900 rounded-full flex items-center justify-center ring-1 ring-white/10">
                    <Icon name=icons::FILE_QUESTION class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-semibold text-white mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-white mb-2">"Page Not Found"</h2>
                <p class="text-neutral-400 mb-8 max-w-md mx-auto">
                    "This page hasn't been translated into any language yet."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 rounded-lg bg-purple-500 hover:bg-purple-400 text-white text-sm font-medium transition-colors"
                >
                    "Back to Home"
                </A>
            </div>
        </div>
    }
}
