use leptos::prelude::*;
use velocity_devid::{DevId, landmarks};

use crate::components::{Div, Footer};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <Footer dev=landmarks::MAIN_FOOTER class="container site-footer">
            <Div dev=DevId::UNTRACKED class="footer-row">
                <Div dev=DevId::UNTRACKED class="footer-copyright">
                    "© 2024 Velocity Bikes. Pedaling towards excellence since 2009."
                </Div>
                <Div dev=DevId::UNTRACKED class="footer-links">
                    <a href="#services" class="footer-link">"Services"</a>
                    <a href="#" class="footer-link">"About"</a>
                    <a href="#contact" class="footer-link">"Contact"</a>
                </Div>
            </Div>
        </Footer>
    }
}
