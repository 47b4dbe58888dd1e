//! Landing page component
//!
//! Marketing page for Lingo i18n Translator featuring:
//! - SEO meta tags
//! - Hero section with the install button and the terminal typing demo
//! - "How it works" steps
//! - Key features grid
//! - Call-to-action and footer sections
//!
//! Typing speed can be tuned from the URL, e.g. `/?tickPeriod=5&linePause=100`.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_query_map;

use crate::core::TypewriterConfig;
use crate::ui::icon::{Icon, icons};
use crate::ui::terminal_demo::TerminalDemo;

/// Target of the "Install GitHub App" buttons (not wired up yet)
const INSTALL_APP_HREF: &str = "#";

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let query = use_query_map();
    let demo_config =
        query.with_untracked(|q| TypewriterConfig::default().with_overrides(|key| q.get(key)));

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-neutral-950 text-neutral-200">
            // Hero Section
            <section class="relative isolate px-6 pt-20 pb-16 sm:pt-28 sm:pb-20">
                <div
                    class="pointer-events-none absolute inset-0 -z-10 bg-[radial-gradient(600px_200px_at_50%_-20%,rgba(168,85,247,0.25),transparent)]"
                    aria-hidden="true"
                ></div>
                <div class="mx-auto max-w-6xl">
                    <div class="mx-auto max-w-3xl text-center">
                        <div class="mb-4 inline-flex items-center gap-2 rounded-full border border-white/10 bg-neutral-900/60 px-3 py-1 text-xs text-neutral-300">
                            <Icon name=icons::SPARKLES class="h-3.5 w-3.5" />
                            "Lingo i18n Translator"
                        </div>
                        <h1 class="text-4xl font-semibold tracking-tight text-white sm:text-5xl">
                            "Translate Your GitHub Repo in 60 Seconds"
                        </h1>
                        <p class="mx-auto mt-4 max-w-2xl text-base leading-relaxed text-neutral-400">
                            "AI-powered i18n translation that syncs automatically"
                        </p>
                        <div class="mt-6 flex items-center justify-center gap-3">
                            <InstallButton with_arrow=true />
                        </div>
                    </div>

                    <div class="mt-10 flex justify-center">
                        <TerminalDemo config=demo_config />
                    </div>
                </div>
            </section>

            // How it works
            <section class="px-6 py-10">
                <div class="mx-auto grid max-w-5xl grid-cols-1 gap-4 sm:grid-cols-3">
                    <Step
                        icon=icons::GITHUB
                        title="Connect GitHub"
                        description="Install the app and grant access to your repo."
                    />
                    <Step
                        icon=icons::LANGUAGES
                        title="Select Languages"
                        description="Pick targets like es, fr, de, ja — we handle the rest."
                    />
                    <Step
                        icon=icons::REFRESH_CW
                        title="Auto-Syncs"
                        description="Changes are translated and committed automatically."
                    />
                </div>
            </section>

            // Key features
            <section class="px-6 py-6">
                <div class="mx-auto grid max-w-5xl grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                    <FeatureCard
                        title="Translation Memory"
                        description="Learns from your repo and improves over time."
                    />
                    <FeatureCard
                        title="Context-Aware"
                        description="Understands keys and usage for accurate strings."
                    />
                    <FeatureCard
                        title="Auto-Sync"
                        description="Keeps locales up to date with every commit."
                    />
                    <FeatureCard
                        title="Free & Open Source"
                        description="Transparent, extensible, and community-driven."
                    />
                </div>
            </section>

            // CTA Section
            <section class="px-6 py-14">
                <div class="mx-auto max-w-3xl rounded-2xl border border-white/10 bg-gradient-to-br from-neutral-900/70 to-neutral-900/30 p-8 text-center">
                    <h3 class="text-2xl font-semibold text-white">"Ready to go global?"</h3>
                    <p class="mt-2 text-neutral-400">
                        "Install the app and start translating in under a minute."
                    </p>
                    <div class="mt-5">
                        <InstallButton with_arrow=false />
                    </div>
                </div>
            </section>

            <Footer />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Lingo i18n Translator - Translate Your GitHub Repo in 60 Seconds" />
        <Meta name="description" content="AI-powered i18n translation that syncs automatically with your GitHub repository." />
        <Meta name="keywords" content="i18n, translation, localization, GitHub App, translation memory" />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Lingo i18n Translator" />
        <Meta property="og:description" content="AI-powered i18n translation that syncs automatically." />
    }
}

/// Primary "Install GitHub App" call to action
#[component]
fn InstallButton(with_arrow: bool) -> impl IntoView {
    view! {
        <a
            href=INSTALL_APP_HREF
            class="group inline-flex items-center gap-2 rounded-lg bg-purple-500 px-4 py-2.5 text-sm font-medium text-white shadow-lg shadow-purple-500/25 transition hover:bg-purple-400 focus:outline-none focus:ring-2 focus:ring-purple-400/60"
        >
            <Icon name=icons::GITHUB class="h-4 w-4" />
            "Install GitHub App"
            {with_arrow.then(|| view! {
                <Icon
                    name=icons::ARROW_RIGHT
                    class="h-4 w-4 transition-transform group-hover:translate-x-0.5"
                />
            })}
        </a>
    }
}

/// One step of the "how it works" panel
#[component]
fn Step(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="group rounded-xl border border-white/10 bg-neutral-900/50 p-5 transition-all duration-200 hover:border-white/20">
            <div class="mb-3 inline-flex rounded-lg bg-purple-500/10 p-2 ring-1 ring-inset ring-purple-500/20">
                <Icon name=icon class="h-5 w-5" />
            </div>
            <h3 class="mb-1 text-base font-semibold text-white">{title}</h3>
            <p class="text-sm text-neutral-400">{description}</p>
        </div>
    }
}

/// Feature card component
#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-white/10 bg-neutral-900/40 p-5 transition-colors hover:border-white/20">
            <h4 class="mb-1.5 text-sm font-semibold text-white">{title}</h4>
            <p class="text-sm text-neutral-400">{description}</p>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    // Resolved on the server and shipped with the page, so hydration reuses
    // the same year
    let year = Resource::new(|| (), |_| async { current_year() });

    view! {
        <footer class="px-6 pb-12 text-center text-xs text-neutral-500">
            <Suspense fallback=|| ()>
                {move || Suspend::new(async move { copyright_line(year.await) })}
            </Suspense>
        </footer>
    }
}

fn copyright_line(year: i32) -> String {
    format!("© {year} Lingo i18n Translator • MIT Licensed")
}

/// Current calendar year in UTC
fn current_year() -> i32 {
    #[cfg(feature = "ssr")]
    {
        use chrono::Datelike;
        chrono::Utc::now().year()
    }

    #[cfg(not(feature = "ssr"))]
    {
        js_sys::Date::new_0().get_utc_full_year() as i32
    }
}
