use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and layout
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const GITHUB: &str = "github";
    pub const LANGUAGES: &str = "languages";
    pub const REFRESH_CW: &str = "refresh-cw";
    pub const SPARKLES: &str = "sparkles";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const FILE_QUESTION: &str = "file-question";
}
