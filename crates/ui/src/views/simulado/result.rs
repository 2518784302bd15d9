use dioxus::prelude::*;

use crate::vm::ReportVm;

#[component]
pub fn ResultPanel(report: ReportVm, on_new: EventHandler<()>) -> Element {
    rsx! {
        div { class: "resultado-simulado", id: "resultado-simulado",
            h2 { "📊 Resultado do Simulado" }
            div { class: "resultado-grid",
                div { class: "resultado-item",
                    span { class: "resultado-valor", "{report.score}" }
                    span { class: "resultado-label", "Acertos" }
                }
                div { class: "resultado-item {report.class}",
                    span { class: "resultado-valor", "{report.percent}" }
                    span { class: "resultado-label", "Aproveitamento" }
                }
                div { class: "resultado-item",
                    span { class: "resultado-valor", "{report.grade}" }
                    span { class: "resultado-label", "Nota Final" }
                }
            }
            p { class: "resultado-mensagem", "{report.message}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_new.call(()),
                "Novo Simulado"
            }
        }
    }
}
