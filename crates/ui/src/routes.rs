use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_route};

use services::ScreenId;

use crate::context::AppContext;
use crate::views::{AlertDialog, AlertSlot, DashboardView, InicioView, RedacaoView, SimuladoView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", InicioView)] Inicio {},
        #[route("/simulado", SimuladoView)] Simulado {},
        #[route("/redacao", RedacaoView)] Redacao {},
        #[route("/dashboard", DashboardView)] Dashboard {},
}

impl Route {
    #[must_use]
    pub fn screen(&self) -> ScreenId {
        match self {
            Route::Inicio {} => ScreenId::Inicio,
            Route::Simulado {} => ScreenId::Simulado,
            Route::Redacao {} => ScreenId::Redacao,
            Route::Dashboard {} => ScreenId::Dashboard,
        }
    }

    #[must_use]
    pub fn for_screen(screen: ScreenId) -> Self {
        match screen {
            ScreenId::Inicio => Route::Inicio {},
            ScreenId::Simulado => Route::Simulado {},
            ScreenId::Redacao => Route::Redacao {},
            ScreenId::Dashboard => Route::Dashboard {},
        }
    }
}

#[component]
fn Layout() -> Element {
    let alert = use_context_provider(|| AlertSlot(Signal::new(None)));

    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
            AlertDialog { message: alert.0 }
        }
    }
}

#[component]
fn Header() -> Element {
    let ctx = use_context::<AppContext>();
    let route = use_route::<Route>();
    let tabs = ctx.navigator().go_to(route.screen()).tabs;

    rsx! {
        header { class: "app-header",
            h1 { class: "brand", "🎓 ConcursoIA" }
            nav { class: "nav-tabs",
                for tab in tabs {
                    Link {
                        key: "{tab.screen}",
                        class: if tab.active { "nav-tab active" } else { "nav-tab" },
                        to: Route::for_screen(tab.screen),
                        "{tab.screen.label()}"
                    }
                }
            }
        }
    }
}
