mod support;

use std::sync::Arc;

use concurso_core::model::{EssayError, GoalKind};
use services::{DashboardError, DashboardService, EssayService, EssayServiceError};

use support::{Call, Endpoint, FakeApi, essay_topic};

#[tokio::test]
async fn invalid_goal_target_issues_no_request() {
    let api = Arc::new(FakeApi::with_questions(0));
    let service = DashboardService::new(api.clone());

    let err = service
        .create_goal(GoalKind::QuestoesResolvidas, "abc")
        .await
        .unwrap_err();

    assert!(matches!(err, DashboardError::Goal(_)));
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn valid_goal_is_posted() {
    let api = Arc::new(FakeApi::with_questions(0));
    let service = DashboardService::new(api.clone());

    let draft = service
        .create_goal(GoalKind::PercentualAcerto, "80")
        .await
        .unwrap();

    assert_eq!(api.calls(), vec![Call::CreateGoal(draft)]);
}

#[tokio::test]
async fn dashboard_failure_carries_server_message() {
    let api = Arc::new(FakeApi::with_questions(0));
    api.fail(Endpoint::Dashboard);
    let err = DashboardService::new(api).load().await.unwrap_err();
    assert_eq!(err.to_string(), "Erro interno do servidor");
}

#[tokio::test]
async fn short_essay_is_rejected_locally() {
    let api = Arc::new(FakeApi::with_questions(0));
    let service = EssayService::new(api.clone());
    let topic = essay_topic();

    let err = service.grade(Some(&topic), "curto").await.unwrap_err();
    assert!(matches!(
        err,
        EssayServiceError::Essay(EssayError::TooShort { chars: 5 })
    ));

    let err = service.grade(None, &"a".repeat(200)).await.unwrap_err();
    assert!(matches!(err, EssayServiceError::Essay(EssayError::MissingTopic)));
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn essay_is_graded_with_topic_details() {
    let api = Arc::new(FakeApi::with_questions(0));
    let service = EssayService::new(api.clone());
    let topic = essay_topic();
    let text = "Texto de redação. ".repeat(10);

    let grading = service.grade(Some(&topic), &text).await.unwrap();
    assert!((grading.nota_final - 720.0).abs() < f64::EPSILON);

    let Some(Call::GradeEssay(submission)) = api.calls().pop() else {
        panic!("expected a grading call");
    };
    assert_eq!(submission.tema, topic.titulo);
    assert_eq!(submission.enunciado, topic.enunciado);
}
