//! Site header: brand, in-page links and the viewer-dependent controls.

use leptos::prelude::*;
use velocity_devid::{DevId, landmarks};

use crate::components::{Button, ButtonVariant, Div, Header, ICON_BIKE, ICON_USER, Icon, Nav, Span};
use crate::routes::Route;
use crate::session::ViewerSession;

#[component]
pub fn SiteHeader(session: ViewerSession) -> impl IntoView {
    view! {
        <Header dev=landmarks::MAIN_HEADER class="container site-header">
            <Nav dev=landmarks::MAIN_NAV class="nav-bar">
                <Div dev=landmarks::LOGO_SECTION class="logo">
                    <Div dev=DevId::UNTRACKED class="logo-mark">
                        <Icon path=ICON_BIKE size="20" class="icon-on-accent" />
                    </Div>
                    <Span dev=landmarks::BRAND_NAME class="brand-name">
                        "Velocity Bikes"
                    </Span>
                </Div>
                <Div dev=landmarks::NAV_ACTIONS class="nav-actions">
                    <a href="#services">
                        <Button dev=landmarks::SERVICES_BUTTON variant=ButtonVariant::Ghost>
                            "Services"
                        </Button>
                    </a>
                    <a href="#contact">
                        <Button dev=landmarks::CONTACT_BUTTON variant=ButtonVariant::Ghost>
                            "Contact"
                        </Button>
                    </a>
                    <ViewerControls session=session />
                </Div>
            </Nav>
        </Header>
    }
}

/// Login/register for guests, greeting and dashboard for recognized viewers.
#[component]
fn ViewerControls(session: ViewerSession) -> impl IntoView {
    match session.welcome_message() {
        Some(welcome) => view! {
            <Div dev=landmarks::USER_SECTION class="nav-group">
                <Span dev=landmarks::WELCOME_MESSAGE class="welcome">{welcome}</Span>
                <a href=Route::Dashboard.path()>
                    <Button dev=landmarks::NAV_DASHBOARD_BUTTON>
                        <Icon path=ICON_USER size="16" class="icon-inline" />
                        "Dashboard"
                    </Button>
                </a>
            </Div>
        }
        .into_any(),
        None => view! {
            <Div dev=landmarks::AUTH_BUTTONS class="nav-group">
                <a href=Route::Login.path()>
                    <Button dev=landmarks::NAV_LOGIN_BUTTON variant=ButtonVariant::Ghost>
                        "Login"
                    </Button>
                </a>
                <a href=Route::Register.path()>
                    <Button dev=landmarks::NAV_REGISTER_BUTTON>"Get Started"</Button>
                </a>
            </Div>
        }
        .into_any(),
    }
}
