use httpmock::prelude::*;
use kpi_calc_client::adapters::{
    MemoryDocument, RecordingNavigator, RecordingNotifier, ReqwestTransport,
};
use kpi_calc_client::core::{CalculatorPage, Document, FormData, Notification, SubmitEvent, SubmitOutcome};
use kpi_calc_client::pages::{
    FuelCompositionPage, FuelOilPage, OutageLossesPage, ReliabilityPage, SolarProfitPage,
    APP_CONTAINER_ID, RESULT_SECTION_ID,
};
use kpi_calc_client::{CalcError, CalculatorController, PageContext};
use std::sync::Arc;
use std::time::Duration;

struct Harness {
    document: MemoryDocument,
    notifier: RecordingNotifier,
    navigator: RecordingNavigator,
}

impl Harness {
    fn new(fields: &[(&str, &str)]) -> Self {
        let form: FormData = fields.iter().copied().collect();
        Self {
            document: MemoryDocument::calculator_page(form, true),
            notifier: RecordingNotifier::new(),
            navigator: RecordingNavigator::new(),
        }
    }

    fn controller<P: CalculatorPage>(
        &self,
        page: P,
        base_url: &str,
    ) -> CalculatorController<P, ReqwestTransport> {
        let context = PageContext::new(
            Arc::new(self.document.clone()),
            Arc::new(self.notifier.clone()),
            Arc::new(self.navigator.clone()),
        );
        CalculatorController::on_ready(page, ReqwestTransport::new(base_url).unwrap(), context)
            .unwrap()
    }

    fn results(&self) -> Option<String> {
        self.document.inner_html(RESULT_SECTION_ID)
    }
}

#[tokio::test]
async fn test_fuel_composition_success_creates_results_container() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/evaluate1")
            .body_contains("name=\"hydrogen\"")
            .body_contains("name=\"ash\"");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "coefs": {"dry": 1.0204081632653061, "combustible": 1.1135857461024499},
                "compositionDry": {
                    "hydrogen": 1.938775510204082, "carbon": 62.14285714285714,
                    "sulfur": 2.4897959183673466, "nitrogen": 1.2244897959183674,
                    "oxygen": 7.1428571428571423, "ash": 25.102040816326532
                },
                "compositionCombustible": {
                    "hydrogen": 2.1158129175946545, "carbon": 67.81737193763921,
                    "sulfur": 2.7171492204899777, "nitrogen": 1.3363028953229399,
                    "oxygen": 7.7951002227171485
                },
                "lowHeatingValues": {"raw": 21.6138, "dry": 22.10, "combustible": 24.117}
            }));
    });

    let harness = Harness::new(&[
        ("hydrogen", "1.9"),
        ("carbon", "60.9"),
        ("sulfur", "2.44"),
        ("nitrogen", "1.2"),
        ("oxygen", "7"),
        ("moisture", "2"),
        ("ash", "24.6"),
    ]);
    assert!(harness.results().is_none());

    let controller = harness.controller(FuelCompositionPage, &server.base_url());
    let mut event = SubmitEvent::new();
    let outcome = controller.submit(&mut event).await.unwrap();

    api_mock.assert();
    assert!(event.default_prevented());
    assert!(matches!(outcome, SubmitOutcome::Rendered(_)));

    let html = harness.results().unwrap();
    assert_eq!(
        harness.document.parent_of(RESULT_SECTION_ID).as_deref(),
        Some(APP_CONTAINER_ID)
    );
    assert!(html.contains("  - сухої маси: <b>1.02</b>"));
    assert!(html.contains("  - горючої маси: <b>1.11</b>"));
    assert!(html.contains("  - Вуглець (C): <b>62.14 %</b>"));
    assert!(html.contains("  - Зола (A): <b>25.10 %</b>"));
    assert!(html.contains("  - Кисень (O): <b>7.80 %</b>"));
    assert!(html.contains("  - робочої маси: <b>21.61 МДж/кг.</b>"));
    assert!(html.contains("  - горючої маси: <b>24.12 МДж/кг.</b>"));
    assert!(harness.notifier.messages().is_empty());
}

#[tokio::test]
async fn test_fuel_oil_success() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/evaluate2");
        then.status(200).json_body(serde_json::json!({
            "rawComposition": {
                "carbon": 84.67, "sulfur": 2.87, "hydrogen": 11.66, "oxygen": 0.3,
                "moisture": 2.0, "ash": 0.147, "vanadium": 218.54
            },
            "rawLHV": 39.448
        }));
    });

    let harness = Harness::new(&[("carbon", "85.5"), ("rawMoisture", "2")]);
    let controller = harness.controller(FuelOilPage, &server.base_url());
    controller.submit(&mut SubmitEvent::new()).await.unwrap();

    let html = harness.results().unwrap();
    assert!(html.contains("  - Вуглець (C): <b>84.67 %</b>"));
    assert!(html.contains("  - Волога (W): <b>2.00 %</b>"));
    assert!(html.contains("  - Ванадій (V): <b>218.54 мг/кг.</b>"));
    assert!(html.contains("<b>39.45 МДж/кг.</b>"));
}

#[tokio::test]
async fn test_solar_profit_loss_branch() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/evaluate");
        then.status(200).json_body(serde_json::json!({
            "Profit": 1000.04,
            "ElectricityNoImbalance": 200.0,
            "Penalty": 1250.0,
            "ElectricityImbalance": 250.0,
            "NetProfit": -249.96
        }));
    });

    let harness = Harness::new(&[("average_daily_capacity", "5")]);
    let controller = harness.controller(SolarProfitPage, &server.base_url());
    controller.submit(&mut SubmitEvent::new()).await.unwrap();

    let html = harness.results().unwrap();
    assert!(html.contains("<b>1000.0 тис. грн.</b>"));
    assert!(html.contains("<b>(200.0 МВт⋅год)</b>"));
    assert!(html.contains("Збитки: <b>250 тис. грн.</b>"));
}

#[tokio::test]
async fn test_reliability_success_uses_exponential_notation() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/evaluate1").body_contains("name=\"pl110Q\"");
        then.status(200).json_body(serde_json::json!({
            "failureRateSCS": 0.295,
            "averageRecoveryTime": 10.7,
            "coefEmergencyDowntimeSCS": 0.00036015981735159816,
            "coefScheduledDowntimeSCS": 0.005890410958904109,
            "failureRateTCS": 0.0036878470256829424,
            "failureRateWithSectionalizerTCS": 0.023687847025682942
        }));
    });

    let harness = Harness::new(&[("pl110Q", "1"), ("t110Q", "1")]);
    let controller = harness.controller(ReliabilityPage, &server.base_url());
    controller.submit(&mut SubmitEvent::new()).await.unwrap();

    let html = harness.results().unwrap();
    assert!(html.contains("<b>0.295 рік⁻¹</b>"));
    assert!(html.contains("<b>3.6016e-4</b>"));
    assert!(html.contains("<b>2.37e-2 рік⁻¹</b>"));
}

#[tokio::test]
async fn test_second_success_replaces_previous_result() {
    let server = MockServer::start();
    let mut first = server.mock(|when, then| {
        when.method(POST).path("/evaluate2");
        then.status(200).json_body(serde_json::json!({
            "expectedOutagesScheduled": 1,
            "expectedOutagesEmergency": 2,
            "expectedLosses": 3
        }));
    });

    let harness = Harness::new(&[("pm", "5.12")]);
    let controller = harness.controller(OutageLossesPage, &server.base_url());
    controller.submit(&mut SubmitEvent::new()).await.unwrap();
    assert!(harness.results().unwrap().contains("<b>3 грн.</b>"));

    first.delete();
    server.mock(|when, then| {
        when.method(POST).path("/evaluate2");
        then.status(200).json_body(serde_json::json!({
            "expectedOutagesScheduled": 52120,
            "expectedOutagesEmergency": 14900,
            "expectedLosses": 2296980
        }));
    });

    controller.submit(&mut SubmitEvent::new()).await.unwrap();
    let html = harness.results().unwrap();
    assert!(html.contains("<b>2296980 грн.</b>"));
    assert!(!html.contains("<b>3 грн.</b>"));
    assert_eq!(html.matches("<h2>Результат</h2>").count(), 1);
}

async fn rejected_with(status: u16) -> (Harness, SubmitOutcome, bool) {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/evaluate2");
        then.status(status).body("Invalid value for pm");
    });

    let harness = Harness::new(&[("pm", "abc")]);
    let controller = harness.controller(OutageLossesPage, &server.base_url());
    let mut event = SubmitEvent::new();
    let outcome = controller.submit(&mut event).await.unwrap();
    api_mock.assert();

    (harness, outcome, event.default_prevented())
}

#[tokio::test]
async fn test_400_shows_input_error_and_leaves_no_container() {
    let (harness, outcome, prevented) = rejected_with(400).await;

    assert!(prevented);
    assert_eq!(outcome, SubmitOutcome::Rejected(Notification::InvalidInput));
    assert_eq!(harness.notifier.messages(), vec!["Помилка у введених даних..."]);
    assert!(!harness.document.contains(RESULT_SECTION_ID));
}

#[tokio::test]
async fn test_500_shows_server_error() {
    let (harness, outcome, _) = rejected_with(500).await;

    assert_eq!(outcome, SubmitOutcome::Rejected(Notification::ServerError));
    assert_eq!(harness.notifier.messages(), vec!["Помилка сервера..."]);
    assert!(harness.results().is_none());
}

#[tokio::test]
async fn test_other_statuses_show_unknown_error() {
    for status in [404, 405, 503] {
        let (harness, outcome, _) = rejected_with(status).await;
        assert_eq!(outcome, SubmitOutcome::Rejected(Notification::UnknownError));
        assert_eq!(harness.notifier.messages(), vec!["Невідома помилка..."]);
    }
}

#[tokio::test]
async fn test_error_after_success_keeps_previous_result() {
    let server = MockServer::start();
    let mut ok = server.mock(|when, then| {
        when.method(POST).path("/evaluate2");
        then.status(200).json_body(serde_json::json!({
            "expectedOutagesScheduled": 10,
            "expectedOutagesEmergency": 20,
            "expectedLosses": 30
        }));
    });

    let harness = Harness::new(&[("pm", "5.12")]);
    let controller = harness.controller(OutageLossesPage, &server.base_url());
    controller.submit(&mut SubmitEvent::new()).await.unwrap();
    let before = harness.results().unwrap();

    ok.delete();
    server.mock(|when, then| {
        when.method(POST).path("/evaluate2");
        then.status(500);
    });
    controller.submit(&mut SubmitEvent::new()).await.unwrap();

    assert_eq!(harness.results().unwrap(), before);
    assert_eq!(harness.notifier.messages(), vec!["Помилка сервера..."]);
}

#[tokio::test]
async fn test_malformed_payload_is_reported() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/evaluate1");
        then.status(200).json_body(serde_json::json!({
            "failureRateSCS": 0.295,
            "averageRecoveryTime": 10.7
        }));
    });

    let harness = Harness::new(&[("pl110Q", "1")]);
    let controller = harness.controller(ReliabilityPage, &server.base_url());
    let result = controller.submit(&mut SubmitEvent::new()).await;

    assert!(matches!(result, Err(CalcError::SerializationError(_))));
    assert_eq!(harness.notifier.messages(), vec!["Некоректна відповідь сервера..."]);
    assert!(!harness.document.contains(RESULT_SECTION_ID));
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_non_json_body_is_reported() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/evaluate");
        then.status(200).body("<html>not json</html>");
    });

    let harness = Harness::new(&[]);
    let controller = harness.controller(SolarProfitPage, &server.base_url());
    let result = controller.submit(&mut SubmitEvent::new()).await;

    assert!(result.is_err());
    assert_eq!(harness.notifier.messages(), vec!["Некоректна відповідь сервера..."]);
}

#[tokio::test]
async fn test_connection_failure_is_reported() {
    let harness = Harness::new(&[("pm", "5.12")]);
    // Nothing listens on port 1.
    let controller = harness.controller(OutageLossesPage, "http://127.0.0.1:1");
    let mut event = SubmitEvent::new();
    let result = controller.submit(&mut event).await;

    assert!(event.default_prevented());
    assert!(matches!(result, Err(CalcError::HttpError(_))));
    assert_eq!(harness.notifier.messages(), vec!["Помилка з'єднання з сервером..."]);
    assert!(!harness.document.contains(RESULT_SECTION_ID));
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_overlapping_submissions_send_one_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/evaluate2");
        then.status(200)
            .delay(Duration::from_millis(300))
            .json_body(serde_json::json!({
                "expectedOutagesScheduled": 1,
                "expectedOutagesEmergency": 2,
                "expectedLosses": 3
            }));
    });

    let harness = Harness::new(&[("pm", "5.12")]);
    let controller = harness.controller(OutageLossesPage, &server.base_url());

    let mut first_event = SubmitEvent::new();
    let mut second_event = SubmitEvent::new();
    let second = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(controller.is_submitting());
        controller.submit(&mut second_event).await
    };
    let (first, second) = tokio::join!(controller.submit(&mut first_event), second);

    assert!(matches!(first.unwrap(), SubmitOutcome::Rendered(_)));
    assert_eq!(second.unwrap(), SubmitOutcome::Ignored);
    assert!(first_event.default_prevented());
    assert!(second_event.default_prevented());
    api_mock.assert_hits(1);
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_form_edits_are_sent_on_next_submit() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/evaluate2").body_contains("6451");
        then.status(200).json_body(serde_json::json!({
            "expectedOutagesScheduled": 1,
            "expectedOutagesEmergency": 2,
            "expectedLosses": 3
        }));
    });

    let harness = Harness::new(&[("tm", "1")]);
    let controller = harness.controller(OutageLossesPage, &server.base_url());
    harness
        .document
        .fill_form("calculator-form", [("tm", "6451")].into_iter().collect())
        .unwrap();

    controller.submit(&mut SubmitEvent::new()).await.unwrap();
    api_mock.assert();
}

#[test]
fn test_page_without_form_fails_to_initialize() {
    let context = PageContext::new(
        Arc::new(MemoryDocument::new()),
        Arc::new(RecordingNotifier::new()),
        Arc::new(RecordingNavigator::new()),
    );
    let transport = ReqwestTransport::new("http://localhost:8080").unwrap();

    let result = CalculatorController::on_ready(FuelOilPage, transport, context);
    assert!(matches!(result, Err(CalcError::MissingElementError { .. })));
}
