use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use tokio::runtime::Handle;

use concurso_core::model::{
    AnswerFeedback, Alternatives, Area, Board, Dashboard, DashboardMetrics, EssayGrading,
    EssaySubmission, EssayTopic, FinalReport, GoalDraft, GoalKind, GoalMetric, HighlightArea,
    Question,
};
use concurso_core::time::fixed_clock;
use services::{
    AnswerRequest, ApiError, AppServices, ConcursoApi, QuestionPage, StartRequest,
};
use storage::SessionStore;

use crate::context::{UiApp, build_app_context};
use crate::views::{
    AlertDialog, AlertSlot, DashboardView, InicioView, RedacaoView, SimuladoView, use_alert,
};

pub const BANK_SIZE: usize = 3;

fn question(index: usize) -> Question {
    Question {
        id: i64::try_from(index).unwrap() + 1,
        enunciado: format!("Enunciado da questão {}", index + 1),
        disciplina: "Matemática".into(),
        materia: "Aritmética".into(),
        dificuldade: None,
        alternativas: Alternatives {
            a: Some("3".into()),
            b: Some("4".into()),
            c: Some("5".into()),
            d: Some("6".into()),
            e: None,
        },
        dica: None,
        formula: None,
        resposta_correta: "b".into(),
        justificativa: Some("Soma simples.".into()),
    }
}

fn page(index: usize) -> QuestionPage {
    QuestionPage {
        questao: Some(question(index)),
        indice_atual: Some(index),
        total_questoes: BANK_SIZE,
        resposta_anterior: None,
    }
}

/// Canned backend for rendering views.
#[derive(Default)]
struct StaticApi {
    reject_start: bool,
}

#[async_trait]
impl ConcursoApi for StaticApi {
    async fn areas(&self) -> Result<Vec<Area>, ApiError> {
        Ok(vec![
            Area {
                area_principal: "Matemática".into(),
                sub_materias: vec!["Matemática".into()],
                total_questoes: 40,
            },
            Area {
                area_principal: "Conhecimentos Jurídicos".into(),
                sub_materias: vec![
                    "Direito Administrativo".into(),
                    "Direito Constitucional".into(),
                ],
                total_questoes: 75,
            },
        ])
    }

    async fn boards(&self) -> Result<Vec<Board>, ApiError> {
        Ok(vec![Board {
            banca: "CESPE".into(),
            total_questoes: 120,
        }])
    }

    async fn start_quiz(&self, _request: &StartRequest) -> Result<QuestionPage, ApiError> {
        if self.reject_start {
            return Err(ApiError::Rejected("Nenhuma questão disponível".into()));
        }
        Ok(page(0))
    }

    async fn question(&self, index: usize) -> Result<QuestionPage, ApiError> {
        if index < BANK_SIZE {
            Ok(page(index))
        } else {
            Err(ApiError::Rejected("Índice inválido".into()))
        }
    }

    async fn answer(&self, request: &AnswerRequest) -> Result<AnswerFeedback, ApiError> {
        Ok(AnswerFeedback {
            acertou: request.alternativa.as_str() == "b",
            resposta_correta: "B".into(),
            justificativa: Some("Soma simples.".into()),
        })
    }

    async fn finish_quiz(&self) -> Result<FinalReport, ApiError> {
        Ok(FinalReport {
            total_acertos: 2,
            total_questoes: 3,
            percentual_acerto: 66.7,
            nota_final: 6.7,
        })
    }

    async fn spaced_review(&self) -> Result<QuestionPage, ApiError> {
        Ok(page(0))
    }

    async fn dashboard(&self) -> Result<Dashboard, ApiError> {
        Ok(Dashboard {
            metricas: DashboardMetrics {
                total_simulados: 12,
                media_geral: 64.5,
                total_acertos: 210.0,
                progresso_geral: 42.0,
            },
            metas: vec![GoalMetric {
                tipo: GoalKind::PercentualAcerto.into(),
                valor_meta: 80.0,
                valor_atual: 64.5,
                progresso: 80.6,
            }],
            areas_destaque: vec![HighlightArea {
                area: "Língua Portuguesa".into(),
                percentual: 78.0,
            }],
        })
    }

    async fn create_goal(&self, _draft: &GoalDraft) -> Result<(), ApiError> {
        Ok(())
    }

    async fn essay_topics(&self) -> Result<Vec<EssayTopic>, ApiError> {
        Ok(vec![EssayTopic {
            titulo: "Mobilidade urbana".into(),
            enunciado: Some("Discorra sobre os desafios da mobilidade urbana.".into()),
            textos_base: vec![],
        }])
    }

    async fn grade_essay(&self, _submission: &EssaySubmission) -> Result<EssayGrading, ApiError> {
        Ok(EssayGrading {
            nota_final: 720.0,
            competencias: vec![],
            pontos_fortes: vec![],
            pontos_fracos: vec![],
            sugestoes_melhoria: vec![],
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Inicio,
    Simulado,
    Redacao,
    Dashboard,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| AlertSlot(Signal::new(None)));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let alert = use_alert();
    let screen = match view {
        ViewKind::Inicio => rsx! { InicioView {} },
        ViewKind::Simulado => rsx! { SimuladoView {} },
        ViewKind::Redacao => rsx! { RedacaoView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
    };
    rsx! {
        {screen}
        AlertDialog { message: alert }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: Arc<AppServices>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let spawned tasks and resources settle; each round waits briefly for
    /// pending work.
    pub async fn drive_async(&mut self) {
        for _ in 0..5 {
            let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn services_with(api: StaticApi) -> Arc<AppServices> {
    Arc::new(AppServices::with_api(
        Arc::new(api),
        SessionStore::in_memory(),
        fixed_clock(),
        Handle::current(),
    ))
}

pub fn test_services() -> Arc<AppServices> {
    services_with(StaticApi::default())
}

/// Same backend, but every quiz start is rejected.
pub fn rejecting_start_services() -> Arc<AppServices> {
    services_with(StaticApi { reject_start: true })
}

pub fn setup_view_harness(view: ViewKind, services: Arc<AppServices>) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::clone(&services),
            view,
        },
    );
    let mut harness = ViewHarness { dom, services };
    harness.rebuild();
    harness
}
