use dioxus::prelude::*;

use concurso_core::model::Letter;

use crate::vm::{QuestionVm, ReadingVm};

/// User actions raised by the active quiz card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Pick(Letter),
    Answer,
    Previous,
    Next,
    Finish,
    Abandon,
    FontSmaller,
    FontLarger,
    FontReset,
    ToggleFocus,
}

fn emit<E: 'static>(
    handler: EventHandler<QuizIntent>,
    intent: QuizIntent,
) -> impl FnMut(Event<E>) + 'static {
    move |_| handler.call(intent)
}

#[component]
pub fn ActiveQuiz(
    question: QuestionVm,
    reading: ReadingVm,
    clock: String,
    busy: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        div { class: "simulado-ativo {reading.root_class}", id: "simulado-ativo",
            div { class: "simulado-header",
                div { class: "contador-questoes", id: "contador-questoes", "{question.counter_label}" }
                div { class: "cronometro", id: "cronometro", "⏱ {clock}" }
                div { class: "leitura-controles",
                    button {
                        class: "btn btn-small",
                        title: "Diminuir fonte",
                        disabled: !reading.can_decrease,
                        onclick: emit(on_intent, QuizIntent::FontSmaller),
                        "A-"
                    }
                    button {
                        class: "btn btn-small font-scale",
                        title: "Tamanho padrão",
                        onclick: emit(on_intent, QuizIntent::FontReset),
                        "{reading.scale_label}"
                    }
                    button {
                        class: "btn btn-small",
                        title: "Aumentar fonte",
                        disabled: !reading.can_increase,
                        onclick: emit(on_intent, QuizIntent::FontLarger),
                        "A+"
                    }
                    button {
                        class: "btn btn-small",
                        onclick: emit(on_intent, QuizIntent::ToggleFocus),
                        "{reading.focus_label}"
                    }
                }
            }

            div { class: "progress-bar",
                div { class: "progress-fill", style: "width: {question.progress_width};" }
            }

            div { class: "questao-card", style: "{reading.style}",
                div { class: "questao-meta",
                    span { class: "badge badge-disciplina", "{question.disciplina}" }
                    span { class: "badge badge-materia", "{question.materia}" }
                    span { class: "badge badge-dificuldade", "{question.difficulty}" }
                }
                div { class: "enunciado", dangerous_inner_html: "{question.statement_html}" }

                div { class: "informacoes-auxiliares",
                    if question.aux_cards.is_empty() {
                        p { class: "sem-auxiliar", "Nenhuma informação auxiliar para esta questão." }
                    }
                    for card in question.aux_cards.iter() {
                        div { key: "{card.kind.title()}", class: "{card.kind.class()}",
                            h4 { "{card.kind.icon()} {card.kind.title()}" }
                            div { dangerous_inner_html: "{card.html}" }
                        }
                    }
                }

                div { class: "alternativas",
                    for option in question.options.iter() {
                        label {
                            key: "{option.input_id}",
                            class: if option.selected { "alternativa selecionada" } else { "alternativa" },
                            r#for: "{option.input_id}",
                            input {
                                r#type: "radio",
                                name: "alternativa",
                                id: "{option.input_id}",
                                value: "{option.letter}",
                                checked: option.selected,
                                disabled: option.disabled,
                                onchange: emit(on_intent, QuizIntent::Pick(option.letter)),
                            }
                            span { class: "letra", "{option.letter_label}" }
                            span { class: "texto", dangerous_inner_html: "{option.text_html}" }
                        }
                    }
                }

                if let Some(feedback) = question.feedback.clone() {
                    div { class: "{feedback.class}", id: "feedback",
                        h4 { "{feedback.title}" }
                        p {
                            strong { "Resposta correta: " }
                            "{feedback.correct_letter}"
                        }
                        if let Some(explanation) = feedback.explanation_html {
                            div { class: "explicacao",
                                strong { "Explicação: " }
                                span { dangerous_inner_html: "{explanation}" }
                            }
                        }
                    }
                }
            }

            div { class: "simulado-nav",
                button {
                    class: "btn",
                    id: "btn-anterior",
                    disabled: question.prev_disabled || busy,
                    onclick: emit(on_intent, QuizIntent::Previous),
                    "⬅ Anterior"
                }
                button {
                    class: "btn btn-primary",
                    id: "btn-responder",
                    disabled: question.answer_disabled || busy,
                    onclick: emit(on_intent, QuizIntent::Answer),
                    "Responder"
                }
                if question.next_visible {
                    button {
                        class: "btn",
                        id: "btn-proxima",
                        disabled: busy,
                        onclick: emit(on_intent, QuizIntent::Next),
                        "Próxima ➡"
                    }
                }
                button {
                    class: "btn btn-danger",
                    id: "btn-finalizar",
                    disabled: busy,
                    onclick: emit(on_intent, QuizIntent::Finish),
                    "🏁 Finalizar Simulado"
                }
                button {
                    class: "btn btn-link",
                    disabled: busy,
                    onclick: emit(on_intent, QuizIntent::Abandon),
                    "Abandonar"
                }
            }
        }
    }
}
