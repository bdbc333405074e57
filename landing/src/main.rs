// Velocity Bikes landing page, browser host

mod viewer;

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use velocity_devid::Registry;
use velocity_storefront::components::LandingPage;
use velocity_storefront::styles::LANDING_CSS;
use velocity_storefront::{LandingContent, MountState};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{LANDING_CSS}</style>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Landing/>
            </Routes>
        </Router>
    }
}

/// Binds content once, then hands the page its session and mount state.
#[component]
fn Landing() -> impl IntoView {
    let (mount, set_mount) = signal(MountState::Initial);

    // First paint has happened once the effect runs; the next frame starts
    // the hero transition from its hidden state.
    Effect::new(move |_| {
        request_animation_frame(move || set_mount.update(|m| *m = m.after_paint()));
    });

    let session = viewer::load_session();

    match LandingContent::default().bind(Registry::builtin()) {
        Ok(content) => view! {
            <LandingPage content=content session=session mount=mount />
        }
        .into_any(),
        Err(err) => {
            web_sys::console::error_1(&format!("[velocity] {err}").into());
            view! { <p class="content-error">"Landing content is misconfigured."</p> }.into_any()
        }
    }
}
