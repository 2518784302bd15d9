use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use concurso_core::model::GoalKind;
use services::{ApiError, DashboardError, QuizError, ScreenEffect, ScreenId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, use_alert, view_state_from_resource};
use crate::vm::{DashboardVm, goal_options, map_dashboard};

fn review_notice(total: usize) -> String {
    format!(
        "🎯 Revisão espaçada iniciada!\n\nEncontramos {total} questões que você precisa revisar.\n\nVamos fortalecer seus pontos fracos! 🚀"
    )
}

fn review_failure(err: &QuizError) -> String {
    match err {
        QuizError::Api(ApiError::Rejected(message)) => format!("❌ {message}"),
        _ => format!("Erro ao iniciar revisão: {err}"),
    }
}

fn goal_failure(err: &DashboardError) -> String {
    match err {
        DashboardError::Goal(_) => err.to_string(),
        _ => format!("Erro: {err}"),
    }
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let transition = use_hook({
        let screens = ctx.navigator();
        move || screens.go_to(ScreenId::Dashboard)
    });
    let load_dashboard = transition.has(ScreenEffect::LoadDashboard);

    let mut alert = use_alert();
    let mut reviewing = use_signal(|| false);
    let mut modal_open = use_signal(|| false);
    let mut goal_kind = use_signal(|| GoalKind::PercentualAcerto.as_str().to_string());
    let mut goal_value = use_signal(String::new);

    let load_ctx = ctx.clone();
    let mut dashboard = use_resource(move || {
        let service = load_ctx.dashboard();
        async move {
            if !load_dashboard {
                return Ok(None);
            }
            service
                .load()
                .await
                .map(|data| Some(map_dashboard(&data)))
                .map_err(|err| ViewError::with_context("Erro ao carregar progresso", &err))
        }
    });

    let review_ctx = ctx.clone();
    let start_review = move |_| {
        let quiz = review_ctx.quiz();
        reviewing.set(true);
        spawn(async move {
            let outcome = {
                let mut session = quiz.lock().await;
                session.start_spaced_review().await.map(|first| first.total)
            };
            reviewing.set(false);
            match outcome {
                Ok(total) => {
                    alert.set(Some(review_notice(total)));
                    navigator.push(Route::Simulado {});
                }
                Err(err) => {
                    alert.set(Some(review_failure(&err)));
                    dashboard.restart();
                }
            }
        });
    };

    let goal_ctx = ctx.clone();
    let create_goal = move |_| {
        let service = goal_ctx.dashboard();
        let kind = GoalKind::from_key(&goal_kind.read()).unwrap_or(GoalKind::PercentualAcerto);
        let raw = goal_value.read().clone();
        spawn(async move {
            match service.create_goal(kind, &raw).await {
                Ok(_) => {
                    modal_open.set(false);
                    goal_value.set(String::new());
                    dashboard.restart();
                    alert.set(Some("Meta criada com sucesso!".to_string()));
                }
                Err(err) => alert.set(Some(goal_failure(&err))),
            }
        });
    };

    let content = if reviewing() {
        rsx! {
            div { class: "loading",
                div { class: "spinner" }
                p { "Buscando suas questões erradas para revisão..." }
            }
        }
    } else {
        match view_state_from_resource(&dashboard) {
            ViewState::Idle | ViewState::Loading => rsx! {
                div { class: "loading",
                    div { class: "spinner" }
                    p { "Carregando seu progresso..." }
                }
            },
            ViewState::Error(err) => rsx! {
                p { class: "error", "{err}" }
            },
            ViewState::Ready(vm) => rsx! {
                DashboardBody { vm, on_new_goal: move |()| modal_open.set(true), on_review: start_review }
            },
        }
    };

    rsx! {
        section { id: ScreenId::Dashboard.as_str(), class: "tela active",
            h2 { "📊 Meu Progresso" }
            div { id: "dashboard-content", {content} }

            if modal_open() {
                div { class: "modal", id: "modal-meta",
                    div { class: "modal-content",
                        div { class: "modal-header",
                            h3 { "🎯 Nova Meta" }
                            button { class: "btn-close", onclick: move |_| modal_open.set(false), "×" }
                        }
                        div { class: "modal-body",
                            div { class: "form-group",
                                label { r#for: "tipo-meta", "Tipo de Meta:" }
                                select {
                                    id: "tipo-meta",
                                    class: "form-control",
                                    value: "{goal_kind}",
                                    onchange: move |evt| goal_kind.set(evt.value()),
                                    for choice in goal_options() {
                                        option { key: "{choice.value}", value: choice.value, "{choice.label}" }
                                    }
                                }
                            }
                            div { class: "form-group",
                                label { r#for: "valor-meta", "Valor da Meta:" }
                                input {
                                    id: "valor-meta",
                                    class: "form-control",
                                    r#type: "number",
                                    placeholder: "Ex: 80 (para % ou simulados)",
                                    value: "{goal_value}",
                                    oninput: move |evt| goal_value.set(evt.value()),
                                }
                            }
                        }
                        div { class: "modal-footer",
                            button { class: "btn", onclick: move |_| modal_open.set(false), "Cancelar" }
                            button { class: "btn btn-primary", onclick: create_goal, "Criar Meta" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DashboardBody(vm: DashboardVm, on_new_goal: EventHandler<()>, on_review: EventHandler<()>) -> Element {
    rsx! {
        div { class: "dashboard-simplificado",
            div { class: "metricas-principais",
                for metric in vm.metrics.iter() {
                    div { key: "{metric.label}", class: "metrica-card",
                        div { class: "metrica-icon", "{metric.icon}" }
                        div { class: "metrica-info",
                            h3 { "{metric.value}" }
                            p { "{metric.label}" }
                        }
                    }
                }
            }

            div { class: "card",
                h3 { "🚀 Progresso Rumo à Aprovação" }
                div { class: "progresso-container-grande",
                    div { class: "progresso-bar-grande", style: "width: {vm.overall_width};",
                        if let Some(label) = vm.overall_label.clone() {
                            "{label}"
                        }
                    }
                }
                div { class: "progresso-info",
                    span { "Início" }
                    span { "Meta: 100%" }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h3 { "🎯 Metas Ativas" }
                    button { class: "btn btn-primary", onclick: move |_| on_new_goal.call(()), "+ Nova Meta" }
                }
                if vm.goals.is_empty() {
                    p { class: "text-center empty-state",
                        "Nenhuma meta ativa. Crie sua primeira meta clicando no botão acima!"
                    }
                } else {
                    div { class: "metas-lista",
                        for (index, goal) in vm.goals.iter().enumerate() {
                            div { key: "{index}", class: "meta-item",
                                div { class: "meta-info",
                                    strong { "{goal.label}" }
                                    span { "{goal.ratio}" }
                                }
                                div { class: "progresso-meta",
                                    div { class: "progresso-bar-meta", style: "width: {goal.bar_width};" }
                                }
                                span { class: "meta-percentual", "{goal.percent}" }
                            }
                        }
                    }
                }
            }

            if !vm.highlights.is_empty() {
                div { class: "card",
                    h3 { "⭐ Áreas em Destaque (Melhor Desempenho)" }
                    div { class: "areas-destaque-lista",
                        for highlight in vm.highlights.iter() {
                            div { key: "{highlight.area}", class: "area-destaque-item",
                                span { class: "area-nome", "{highlight.area}" }
                                span { class: "area-percentual {highlight.class}", "{highlight.percent}" }
                            }
                        }
                    }
                }
            }

            div { class: "card",
                h3 { "⚡ Ações Rápidas" }
                div { class: "acoes-rapidas",
                    button { class: "btn-acao", onclick: move |_| on_review.call(()),
                        span { class: "acao-icon", "🔄" }
                        "Revisão Espaçada (Erros)"
                    }
                    Link { class: "btn-acao", to: Route::Simulado {},
                        span { class: "acao-icon", "📝" }
                        "Novo Simulado"
                    }
                    Link { class: "btn-acao", to: Route::Redacao {},
                        span { class: "acao-icon", "✍️" }
                        "Praticar Redação"
                    }
                }
            }
        }
    }
}
