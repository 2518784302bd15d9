use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::AppServices;

use crate::context::{UiApp, build_app_context};
use crate::views::AlertSlot;
use crate::views::test_harness::{ViewHarness, rejecting_start_services, test_services};

use super::controller::{QuizController, QuizPhase, use_quiz_controller};

#[derive(Clone, Default)]
struct HarnessHandles {
    controller: Rc<RefCell<Option<QuizController>>>,
    alert: Rc<RefCell<Option<Signal<Option<String>>>>>,
}

impl HarnessHandles {
    fn controller(&self) -> QuizController {
        (*self.controller.borrow()).expect("controller registered")
    }

    fn alert(&self) -> Option<String> {
        let alert = (*self.alert.borrow()).expect("alert registered");
        alert.peek().clone()
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<AppServices>,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizControllerHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let alert = use_context_provider(|| AlertSlot(Signal::new(None))).0;
    use_context_provider(|| props.handles.clone());
    *props.handles.alert.borrow_mut() = Some(alert);
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
    let handles = use_context::<HarnessHandles>();
    let controller = use_quiz_controller();
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.controller.borrow_mut() = Some(controller);
    }
    rsx! { div {} }
}

fn setup(app: Arc<AppServices>, handles: &HarnessHandles) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        QuizControllerHarness,
        HarnessProps {
            app: Arc::clone(&app),
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness { dom, services: app };
    harness.rebuild();
    harness
}

fn pick_choices(harness: &ViewHarness, controller: QuizController) {
    let mut form = controller.form;
    harness.dom.in_runtime(|| {
        form.selection
            .write()
            .toggle("Conhecimentos Jurídicos", "Direito Administrativo");
        form.count.set("7".into());
    });
}

#[tokio::test]
async fn rejected_start_keeps_setup_choices() {
    let handles = HarnessHandles::default();
    let mut harness = setup(rejecting_start_services(), &handles);
    harness.drive_async().await;

    let controller = handles.controller();
    let form = controller.form;
    harness.dom.in_runtime(|| {
        assert_eq!(form.selection.peek().areas().len(), 2);
        assert_eq!(*form.board.peek(), "CESPE");
    });

    pick_choices(&harness, controller);
    harness.dom.in_runtime(|| controller.start.call(()));
    harness.drive_async().await;

    harness.dom.in_runtime(|| {
        assert_eq!(*controller.phase.peek(), QuizPhase::Setup);
        assert_eq!(
            form.selection.peek().selected_topics(),
            vec!["Direito Administrativo".to_string()]
        );
        assert_eq!(*form.board.peek(), "CESPE");
        assert_eq!(*form.count.peek(), "7");
    });
    let alert = harness
        .dom
        .in_runtime(|| handles.alert())
        .expect("failure is reported");
    assert!(alert.starts_with("Erro ao iniciar simulado"), "{alert}");
    assert!(harness.services.quiz().lock().await.attempt().is_none());
}

#[tokio::test]
async fn new_attempt_reloads_catalog_and_clears_form() {
    let handles = HarnessHandles::default();
    let mut harness = setup(test_services(), &handles);
    harness.drive_async().await;

    let controller = handles.controller();
    let form = controller.form;
    pick_choices(&harness, controller);
    harness.dom.in_runtime(|| controller.new_attempt.call(()));
    harness.drive_async().await;

    harness.dom.in_runtime(|| {
        assert_eq!(*controller.phase.peek(), QuizPhase::Setup);
        assert!(form.selection.peek().is_empty());
        assert_eq!(form.selection.peek().areas().len(), 2);
        assert_eq!(*form.count.peek(), "10");
    });
}

#[tokio::test]
async fn empty_selection_is_rejected_before_any_request() {
    let handles = HarnessHandles::default();
    let mut harness = setup(test_services(), &handles);
    harness.drive_async().await;

    let controller = handles.controller();
    harness.dom.in_runtime(|| controller.start.call(()));
    harness.drive_async().await;

    harness.dom.in_runtime(|| {
        assert_eq!(*controller.phase.peek(), QuizPhase::Setup);
    });
    assert_eq!(
        harness.dom.in_runtime(|| handles.alert()).as_deref(),
        Some("Selecione pelo menos uma Matéria ou Área de Estudo!")
    );
    assert!(harness.services.quiz().lock().await.attempt().is_none());
}
