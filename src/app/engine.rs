use crate::adapters::{MemoryDocument, ReqwestTransport, TerminalNavigator};
use crate::core::page::{CalculatorController, PageContext};
use crate::domain::model::{FormData, SubmitEvent, SubmitOutcome};
use crate::domain::ports::{CalculatorPage, ConfigProvider, Notifier, Storage};
use crate::pages::{
    CalculatorKind, FuelCompositionPage, FuelOilPage, OutageLossesPage, ReliabilityPage,
    SolarProfitPage,
};
use crate::utils::error::Result;
use std::sync::Arc;

/// Drives one calculator page headlessly: loads it with the given inputs,
/// submits once and keeps the rendered panel.
pub struct CalcEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    notifier: Arc<dyn Notifier>,
}

impl<S: Storage, C: ConfigProvider> CalcEngine<S, C> {
    pub fn new(storage: S, config: C, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            storage,
            config,
            notifier,
        }
    }

    pub async fn run(&self, kind: CalculatorKind, form: FormData) -> Result<SubmitOutcome> {
        match kind {
            CalculatorKind::FuelComposition => self.run_page(FuelCompositionPage, form).await,
            CalculatorKind::FuelOil => self.run_page(FuelOilPage, form).await,
            CalculatorKind::SolarProfit => self.run_page(SolarProfitPage, form).await,
            CalculatorKind::Reliability => self.run_page(ReliabilityPage, form).await,
            CalculatorKind::OutageLosses => self.run_page(OutageLossesPage, form).await,
        }
    }

    pub async fn run_page<P: CalculatorPage>(&self, page: P, form: FormData) -> Result<SubmitOutcome> {
        let document = MemoryDocument::calculator_page(form, false);
        let context = PageContext::new(
            Arc::new(document),
            self.notifier.clone(),
            Arc::new(TerminalNavigator),
        );
        let transport = ReqwestTransport::new(self.config.base_url())?;
        let controller = CalculatorController::on_ready(page, transport, context)?;

        let outcome = controller.submit(&mut SubmitEvent::new()).await?;

        if let (SubmitOutcome::Rendered(html), Some(path)) = (&outcome, self.config.output_path()) {
            tracing::debug!("Writing results panel ({} bytes) to {}", html.len(), path);
            self.storage.write_file(path, html.as_bytes()).await?;
            tracing::info!("📁 Results panel saved to: {}", path);
        }

        Ok(outcome)
    }
}
