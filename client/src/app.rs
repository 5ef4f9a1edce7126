//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::editor::EditorPage;
use crate::state::editor::EditorState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the editor state and, once hydrated, swaps in a browser-seeded
/// random source and restores the saved layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let editor = RwSignal::new(EditorState::default());
    provide_context(editor);

    #[cfg(feature = "hydrate")]
    {
        use crate::state::editor::{browser_seed, dispatch};
        use crate::util::layout_store;

        Effect::new(move || {
            editor.update_untracked(|s| s.reseed(browser_seed()));
            if let Some(snapshot) = layout_store::load() {
                dispatch(editor, |state| state.core.restore(snapshot));
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/polyzone.css"/>
        <Title text="Polygon zones"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=EditorPage/>
            </Routes>
        </Router>
    }
}
