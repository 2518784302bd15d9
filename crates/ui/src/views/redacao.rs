use dioxus::prelude::*;

use concurso_core::model::EssayTopic;
use services::{EssayServiceError, ScreenEffect, ScreenId};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, use_alert, view_state_from_resource};
use crate::vm::{GradingVm, char_counter, map_grading, map_prompt};

fn grading_failure(err: &EssayServiceError) -> String {
    match err {
        EssayServiceError::Essay(_) => err.to_string(),
        _ => format!("Erro ao corrigir redação: {err}"),
    }
}

#[component]
pub fn RedacaoView() -> Element {
    let ctx = use_context::<AppContext>();
    let transition = use_hook({
        let navigator = ctx.navigator();
        move || navigator.go_to(ScreenId::Redacao)
    });
    let load_topics = transition.has(ScreenEffect::LoadEssayTopics);
    let show_tips = transition.has(ScreenEffect::ShowEssayTips);

    let mut chosen = use_signal(|| None::<usize>);
    let mut text = use_signal(String::new);
    let mut grading = use_signal(|| None::<GradingVm>);
    let mut grading_busy = use_signal(|| false);
    let mut alert = use_alert();

    let topics_ctx = ctx.clone();
    let topics = use_resource(move || {
        let service = topics_ctx.essays();
        async move {
            if !load_topics {
                return Ok(None);
            }
            service
                .topics()
                .await
                .map(Some)
                .map_err(|err| ViewError::with_context("Erro ao carregar temas", &err))
        }
    });
    let topics_state = view_state_from_resource(&topics);
    let topic_list: Vec<EssayTopic> = match &topics_state {
        ViewState::Ready(list) => list.clone(),
        _ => Vec::new(),
    };
    let selected_topic = chosen().and_then(|index| topic_list.get(index).cloned());
    let prompt = map_prompt(selected_topic.as_ref());
    let counter = char_counter(&text.read());

    let grade_ctx = ctx.clone();
    let submit = move |_| {
        let service = grade_ctx.essays();
        let topic = selected_topic.clone();
        let essay = text.read().clone();
        grading_busy.set(true);
        spawn(async move {
            match service.grade(topic.as_ref(), &essay).await {
                Ok(result) => grading.set(Some(map_grading(&result))),
                Err(err) => alert.set(Some(grading_failure(&err))),
            }
            grading_busy.set(false);
        });
    };

    let topic_picker = match topics_state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "loading", "Carregando temas..." }
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err}" }
        },
        ViewState::Ready(_) => rsx! {
            select {
                id: "tema-redacao",
                onchange: move |evt| {
                    chosen.set(evt.value().parse::<usize>().ok());
                    grading.set(None);
                },
                option { value: "", "Selecione um tema" }
                for (index, topic) in topic_list.iter().enumerate() {
                    option { key: "{index}", value: "{index}", "{topic.titulo}" }
                }
            }
        },
    };

    rsx! {
        section { id: ScreenId::Redacao.as_str(), class: "tela active",
            div { class: "redacao-layout",
                div { class: "redacao-principal",
                    h2 { "✍️ Praticar Redação" }
                    div { class: "form-group",
                        label { r#for: "tema-redacao", "Tema:" }
                        {topic_picker}
                    }

                    if let Some(prompt) = prompt {
                        div { class: "card proposta-redacao",
                            h4 { "📋 Enunciado da Proposta" }
                            div { class: "enunciado-proposta", dangerous_inner_html: "{prompt.statement_html}" }
                            if !prompt.support_texts.is_empty() {
                                h5 { "📚 Textos de Apoio:" }
                                for (index, support) in prompt.support_texts.iter().enumerate() {
                                    div { key: "{index}", class: "texto-apoio", dangerous_inner_html: "{support}" }
                                }
                            }
                        }
                    }

                    textarea {
                        id: "texto-redacao",
                        rows: "18",
                        placeholder: "Escreva sua redação aqui...",
                        value: "{text}",
                        oninput: move |evt| text.set(evt.value()),
                    }
                    div { class: "contador-caracteres", id: "contador-caracteres", "{counter}" }

                    button {
                        class: "btn btn-primary",
                        id: "btn-corrigir",
                        disabled: grading_busy(),
                        onclick: submit,
                        if grading_busy() { "Corrigindo com IA..." } else { "🔍 Corrigir com IA" }
                    }

                    if let Some(result) = grading.read().clone() {
                        GradingPanel { grading: result }
                    }
                }
                if show_tips {
                    EssayTips {}
                }
            }
        }
    }
}

#[component]
fn GradingPanel(grading: GradingVm) -> Element {
    rsx! {
        div { class: "resultado-correcao", id: "resultado-correcao",
            div { class: "card resultado-header",
                div { class: "nota-container",
                    h3 { "📊 Resultado da Correção - ENEM" }
                    div { class: "nota-final", "{grading.score}" }
                    div { class: "nota-descricao", "{grading.band}" }
                }
            }
            div { class: "card",
                h4 { "📈 Análise por Competências ENEM:" }
                for (index, competency) in grading.competencies.iter().enumerate() {
                    div { key: "{index}", class: "competencia-item",
                        div { class: "competencia-header",
                            h5 { "{competency.name}" }
                            span { class: "nota-competencia", "{competency.score}" }
                        }
                        div { class: "progress-bar-competencia",
                            div { class: "progress-fill", style: "width: {competency.bar_width};" }
                        }
                        p { class: "comentario-competencia", "{competency.comment}" }
                    }
                }
            }
            div { class: "analise-grid",
                PointList { title: "✅ Pontos Fortes:", items: grading.strengths.clone() }
                PointList { title: "📝 Pontos a Melhorar:", items: grading.weaknesses.clone() }
            }
            PointList { title: "💡 Sugestões de Melhoria:", items: grading.suggestions.clone() }
        }
    }
}

#[component]
fn PointList(title: &'static str, items: Vec<String>) -> Element {
    rsx! {
        div { class: "card",
            h4 { "{title}" }
            ul { class: "lista-pontos",
                for (index, item) in items.iter().enumerate() {
                    li { key: "{index}", "{item}" }
                }
            }
        }
    }
}

struct TipCard {
    icon: &'static str,
    title: &'static str,
    intro: Option<&'static str>,
    sections: &'static [(&'static str, &'static [&'static str])],
}

const TIPS: [TipCard; 3] = [
    TipCard {
        icon: "📝",
        title: "Como Estruturar sua Redação",
        intro: None,
        sections: &[
            (
                "Introdução (1 parágrafo):",
                &["Apresente o tema", "Contextualize o problema", "Apresente sua tese"],
            ),
            (
                "Desenvolvimento (2-3 parágrafos):",
                &[
                    "Argumento 1 + repertório",
                    "Argumento 2 + repertório",
                    "Analise crítica dos argumentos",
                ],
            ),
            (
                "Conclusão (1 parágrafo):",
                &["Retome a tese", "Proposta de intervenção completa (5 elementos)"],
            ),
        ],
    },
    TipCard {
        icon: "🎯",
        title: "Intervenção (Competência 5)",
        intro: Some("Sua proposta deve ter 5 elementos:"),
        sections: &[(
            "",
            &[
                "Agente: Quem vai fazer? (Ex: Governo Federal)",
                "Ação: O que será feito? (Ex: Criar campanhas)",
                "Modo/Meio: Como será feito? (Ex: Por meio de mídias)",
                "Efeito: Para que será feito? (Ex: A fim de conscientizar)",
                "Detalhamento: (Explicar um dos elementos acima)",
            ],
        )],
    },
    TipCard {
        icon: "⚠️",
        title: "O que Evitar (Nota Zero)",
        intro: None,
        sections: &[(
            "",
            &[
                "Fugir totalmente do tema",
                "Texto com menos de 7 linhas",
                "Cópia integral dos textos de apoio",
                "Desenhos ou xingamentos",
                "Desrespeitar os direitos humanos",
            ],
        )],
    },
];

#[component]
fn EssayTips() -> Element {
    rsx! {
        aside { class: "dicas-redacao-lateral", id: "dicas-redacao",
            for card in TIPS.iter() {
                div { key: "{card.title}", class: "dica-card-redacao",
                    div { class: "dica-header-redacao",
                        span { class: "dica-icon", "{card.icon}" }
                        h4 { "{card.title}" }
                    }
                    div { class: "dica-content-redacao",
                        if let Some(intro) = card.intro {
                            p { "{intro}" }
                        }
                        for (heading, items) in card.sections.iter() {
                            if !heading.is_empty() {
                                p { strong { "{heading}" } }
                            }
                            ul {
                                for item in items.iter() {
                                    li { "{item}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
