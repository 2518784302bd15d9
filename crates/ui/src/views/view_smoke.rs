use crate::views::test_harness::{BANK_SIZE, ViewKind, setup_view_harness, test_services};

#[tokio::test]
async fn inicio_links_every_feature() {
    let harness = setup_view_harness(ViewKind::Inicio, test_services());
    let html = harness.render();
    assert!(html.contains("Bem-vindo ao ConcursoIA"));
    assert!(html.contains("tela-inicio"));
    assert!(html.contains("Simulados"));
    assert!(html.contains("Redação"));
    assert!(html.contains("Dashboard"));
}

#[tokio::test]
async fn simulado_without_attempt_shows_topic_setup() {
    let mut harness = setup_view_harness(ViewKind::Simulado, test_services());
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Configurar Simulado"), "{html}");
    assert!(html.contains("Conhecimentos Jurídicos"));
    assert!(html.contains("75 questões"));
    assert!(html.contains("CESPE (120 Q)"));
    assert!(html.contains("0 selecionada(s)"));
}

#[tokio::test]
async fn simulado_resumes_running_attempt() {
    let services = test_services();
    services
        .quiz()
        .lock()
        .await
        .start(vec!["Matemática".into()], "CESPE", 3)
        .await
        .unwrap();

    let mut harness = setup_view_harness(ViewKind::Simulado, services);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains(&format!("Questão 1 de {BANK_SIZE}")), "{html}");
    assert!(html.contains("Nenhuma informação auxiliar para esta questão."));
    assert!(html.contains("A)"));
    assert!(html.contains("Média"));
    assert!(html.contains("00:00:00"));
    assert!(!html.contains("Configurar Simulado"));
    assert!(harness.services.quiz().lock().await.timer().is_running());
}

#[tokio::test]
async fn redacao_lists_topics_and_tips() {
    let mut harness = setup_view_harness(ViewKind::Redacao, test_services());
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Selecione um tema"), "{html}");
    assert!(html.contains("Mobilidade urbana"));
    assert!(html.contains("Como Estruturar sua Redação"));
    assert!(html.contains("O que Evitar (Nota Zero)"));
    assert!(html.contains("0 caracteres (mínimo 100)"));
}

#[tokio::test]
async fn dashboard_renders_metrics_goals_and_highlights() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, test_services());
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Simulados Realizados"), "{html}");
    assert!(html.contains("64.5%"));
    assert!(html.contains("Média de Acerto"));
    assert!(html.contains("64.5/80"));
    assert!(html.contains("Língua Portuguesa"));
    assert!(html.contains("desempenho-alto"));
    assert!(html.contains("Revisão Espaçada (Erros)"));
    assert!(!html.contains("modal-meta"));
}
