#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use concurso_core::model::{
    AnswerFeedback, Alternatives, Area, Board, Dashboard, EssayGrading, EssaySubmission,
    EssayTopic, FinalReport, GoalDraft, PriorAnswer, Question,
};
use services::{
    AnswerRequest, ApiError, ConcursoApi, ElapsedDisplay, QuestionPage, StartRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Areas,
    Boards,
    Start,
    Question,
    Answer,
    Finish,
    SpacedReview,
    Dashboard,
    CreateGoal,
    EssayTopics,
    GradeEssay,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Areas,
    Boards,
    Start(StartRequest),
    Question(usize),
    Answer(AnswerRequest),
    Finish,
    SpacedReview,
    Dashboard,
    CreateGoal(GoalDraft),
    EssayTopics,
    GradeEssay(EssaySubmission),
}

#[derive(Default)]
struct FakeState {
    calls: Vec<Call>,
    failing: HashSet<Endpoint>,
    active: Option<usize>,
    answers: HashMap<i64, PriorAnswer>,
    report: Option<FinalReport>,
}

/// In-memory backend that behaves like the quiz server for a fixed bank.
pub struct FakeApi {
    bank: Vec<Question>,
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn with_questions(count: usize) -> Self {
        let bank = (0..count)
            .map(|index| question(i64::try_from(index).unwrap() + 1, "b"))
            .collect();
        Self {
            bank,
            state: Mutex::new(FakeState::default()),
        }
    }

    pub fn with_report(self, report: FinalReport) -> Self {
        self.state.lock().unwrap().report = Some(report);
        self
    }

    pub fn fail(&self, endpoint: Endpoint) {
        self.state.lock().unwrap().failing.insert(endpoint);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.state.lock().unwrap().failing.remove(&endpoint);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    fn record(&self, call: Call, endpoint: Endpoint) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.failing.contains(&endpoint) {
            return Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Erro interno do servidor".into(),
            });
        }
        Ok(())
    }

    fn page(&self, index: usize, total: usize) -> QuestionPage {
        let question = self.bank[index].clone();
        let prior = self.state.lock().unwrap().answers.get(&question.id).copied();
        QuestionPage {
            questao: Some(question),
            indice_atual: Some(index),
            total_questoes: total,
            resposta_anterior: prior,
        }
    }
}

#[async_trait]
impl ConcursoApi for FakeApi {
    async fn areas(&self) -> Result<Vec<Area>, ApiError> {
        self.record(Call::Areas, Endpoint::Areas)?;
        Ok(vec![Area {
            area_principal: "Matemática".into(),
            sub_materias: vec!["Matemática".into()],
            total_questoes: 120,
        }])
    }

    async fn boards(&self) -> Result<Vec<Board>, ApiError> {
        self.record(Call::Boards, Endpoint::Boards)?;
        Ok(vec![Board {
            banca: "CESPE".into(),
            total_questoes: 80,
        }])
    }

    async fn start_quiz(&self, request: &StartRequest) -> Result<QuestionPage, ApiError> {
        self.record(Call::Start(request.clone()), Endpoint::Start)?;
        let total = self
            .bank
            .len()
            .min(usize::try_from(request.quantidade).unwrap());
        if total == 0 {
            return Err(ApiError::Rejected(
                "Nenhuma questão encontrada para os filtros selecionados.".into(),
            ));
        }
        {
            let mut state = self.state.lock().unwrap();
            state.active = Some(total);
            state.answers.clear();
        }
        Ok(self.page(0, total))
    }

    async fn question(&self, index: usize) -> Result<QuestionPage, ApiError> {
        self.record(Call::Question(index), Endpoint::Question)?;
        let total = self.state.lock().unwrap().active;
        match total {
            Some(total) if index < total => Ok(self.page(index, total)),
            _ => Err(ApiError::Status {
                status: StatusCode::NOT_FOUND,
                message: "Questão não encontrada".into(),
            }),
        }
    }

    async fn answer(&self, request: &AnswerRequest) -> Result<AnswerFeedback, ApiError> {
        self.record(Call::Answer(*request), Endpoint::Answer)?;
        let question = self
            .bank
            .iter()
            .find(|question| question.id == request.questao_id)
            .ok_or_else(|| ApiError::Rejected("Questão não encontrada".into()))?;
        let acertou = question.resposta_correta == request.alternativa.as_str();
        self.state.lock().unwrap().answers.insert(
            question.id,
            PriorAnswer {
                alternativa_escolhida: request.alternativa,
                acertou,
            },
        );
        Ok(AnswerFeedback {
            acertou,
            resposta_correta: question.resposta_correta.to_uppercase(),
            justificativa: question.justificativa.clone(),
        })
    }

    async fn finish_quiz(&self) -> Result<FinalReport, ApiError> {
        self.record(Call::Finish, Endpoint::Finish)?;
        let mut state = self.state.lock().unwrap();
        let total = state.active.take().unwrap_or(0);
        if let Some(report) = state.report.clone() {
            return Ok(report);
        }
        let correct = state.answers.values().filter(|answer| answer.acertou).count();
        let percent = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64 * 100.0
        };
        Ok(FinalReport {
            total_acertos: u32::try_from(correct).unwrap(),
            total_questoes: u32::try_from(total).unwrap(),
            percentual_acerto: percent,
            nota_final: percent / 10.0,
        })
    }

    async fn spaced_review(&self) -> Result<QuestionPage, ApiError> {
        self.record(Call::SpacedReview, Endpoint::SpacedReview)?;
        let total = self.bank.len().min(3);
        self.state.lock().unwrap().active = Some(total);
        Ok(self.page(0, total))
    }

    async fn dashboard(&self) -> Result<Dashboard, ApiError> {
        self.record(Call::Dashboard, Endpoint::Dashboard)?;
        Ok(Dashboard::default())
    }

    async fn create_goal(&self, draft: &GoalDraft) -> Result<(), ApiError> {
        self.record(Call::CreateGoal(*draft), Endpoint::CreateGoal)
    }

    async fn essay_topics(&self) -> Result<Vec<EssayTopic>, ApiError> {
        self.record(Call::EssayTopics, Endpoint::EssayTopics)?;
        Ok(vec![essay_topic()])
    }

    async fn grade_essay(&self, submission: &EssaySubmission) -> Result<EssayGrading, ApiError> {
        self.record(Call::GradeEssay(submission.clone()), Endpoint::GradeEssay)?;
        Ok(EssayGrading {
            nota_final: 720.0,
            competencias: Vec::new(),
            pontos_fortes: vec!["Boa estrutura".into()],
            pontos_fracos: Vec::new(),
            sugestoes_melhoria: Vec::new(),
        })
    }
}

pub fn question(id: i64, correct: &str) -> Question {
    Question {
        id,
        enunciado: format!("Enunciado da questão {id}"),
        disciplina: "Matemática".into(),
        materia: "Aritmética".into(),
        dificuldade: None,
        alternativas: Alternatives {
            a: Some("1".into()),
            b: Some("2".into()),
            c: Some("3".into()),
            d: Some("4".into()),
            e: None,
        },
        dica: None,
        formula: None,
        resposta_correta: correct.into(),
        justificativa: Some("Porque sim.".into()),
    }
}

pub fn essay_topic() -> EssayTopic {
    EssayTopic {
        titulo: "Desafios da mobilidade urbana".into(),
        enunciado: Some("Redija um texto dissertativo-argumentativo.".into()),
        textos_base: Vec::new(),
    }
}

/// Display that accepts every frame.
#[derive(Default)]
pub struct NullDisplay;

impl ElapsedDisplay for NullDisplay {
    fn show(&self, _text: &str) -> bool {
        true
    }
}
