use dioxus::prelude::*;
use dioxus_router::Link;

use services::ScreenId;

use crate::routes::Route;

#[component]
pub fn InicioView() -> Element {
    rsx! {
        section { id: ScreenId::Inicio.as_str(), class: "tela active",
            div { class: "hero",
                h2 { "Bem-vindo ao ConcursoIA" }
                p { "Simulados, redação corrigida por IA e acompanhamento do seu progresso." }
            }
            div { class: "features-grid",
                Link { class: "feature-card", to: Route::Simulado {},
                    span { class: "feature-icon", "📝" }
                    h3 { "Simulados" }
                    p { "Monte simulados por matéria e banca, com feedback a cada questão." }
                }
                Link { class: "feature-card", to: Route::Redacao {},
                    span { class: "feature-icon", "✍️" }
                    h3 { "Redação" }
                    p { "Escreva sobre temas reais e receba a nota por competência do ENEM." }
                }
                Link { class: "feature-card", to: Route::Dashboard {},
                    span { class: "feature-icon", "📊" }
                    h3 { "Dashboard" }
                    p { "Veja suas métricas, metas e faça revisão espaçada dos erros." }
                }
            }
        }
    }
}
