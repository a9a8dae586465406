//! Power supply reliability: single vs. double circuit comparison, and the
//! expected losses from undersupplied energy.

use super::ResultTemplate;
use crate::core::format::{to_exponential, to_fixed};
use crate::domain::ports::CalculatorPage;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReliabilityResult {
    #[serde(rename = "failureRateSCS")]
    pub failure_rate_scs: f64,
    #[serde(rename = "averageRecoveryTime")]
    pub average_recovery_time: f64,
    #[serde(rename = "coefEmergencyDowntimeSCS")]
    pub coef_emergency_downtime_scs: f64,
    #[serde(rename = "coefScheduledDowntimeSCS")]
    pub coef_scheduled_downtime_scs: f64,
    #[serde(rename = "failureRateTCS")]
    pub failure_rate_tcs: f64,
    #[serde(rename = "failureRateWithSectionalizerTCS")]
    pub failure_rate_with_sectionalizer_tcs: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReliabilityPage;

impl CalculatorPage for ReliabilityPage {
    type Response = ReliabilityResult;

    fn title(&self) -> &'static str {
        "Порівняння надійності одноколової та двоколової систем"
    }

    fn endpoint(&self) -> &'static str {
        "/evaluate1"
    }

    /// Equipment counts, one input per equipment type.
    fn required_fields(&self) -> &'static [&'static str] {
        &[
            "pl110Q",
            "pl35Q",
            "pl10Q",
            "kl10TrenchQ",
            "kl10CableQ",
            "t110Q",
            "t35Q",
            "t10CableNetworkQ",
            "t10AirQ",
            "v110Q",
            "v10LowOilQ",
            "v10VacuumQ",
            "busBar10Q",
            "av038Q",
            "ed610Q",
            "ed038Q",
        ]
    }

    fn render(&self, r: &ReliabilityResult) -> String {
        ResultTemplate::new()
            .value(
                "Частота відмов одноколової системи:",
                &format!("{} рік⁻¹", to_fixed(r.failure_rate_scs, 3)),
            )
            .value(
                "Середня тривалість відновлення одноколової<br>системи:",
                &format!("{} год.", to_fixed(r.average_recovery_time, 3)),
            )
            .value(
                "Коефіцієнт аварійного простою одноколової<br>системи:",
                &to_exponential(r.coef_emergency_downtime_scs, 4),
            )
            .value(
                "Коефіцієнт планового простою одноколової<br>системи:",
                &to_exponential(r.coef_scheduled_downtime_scs, 3),
            )
            .value(
                "Частота відмов двоколової системи (не враховуючи секційний вимикач):",
                &format!("{} рік⁻¹", to_exponential(r.failure_rate_tcs, 3)),
            )
            .value(
                "Частота відмов двоколової системи (враховуючи секційний вимикач):",
                &format!(
                    "{} рік⁻¹",
                    to_exponential(r.failure_rate_with_sectionalizer_tcs, 2)
                ),
            )
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutageLossesResult {
    pub expected_outages_scheduled: i64,
    pub expected_outages_emergency: i64,
    pub expected_losses: i64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OutageLossesPage;

impl CalculatorPage for OutageLossesPage {
    type Response = OutageLossesResult;

    fn title(&self) -> &'static str {
        "Розрахунок збитків від перерв електропостачання"
    }

    fn endpoint(&self) -> &'static str {
        "/evaluate2"
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &[
            "lossesEmergency",
            "lossesScheduled",
            "pm",
            "tm",
            "failureRate",
            "averageRecoveryTime",
            "averagePlannedDowntime",
        ]
    }

    fn render(&self, r: &OutageLossesResult) -> String {
        ResultTemplate::new()
            .value(
                "Очікується, що планове недовідпущення<br>електроенергії складе:",
                &format!("{} кВт⋅год.", r.expected_outages_scheduled),
            )
            .value(
                "Очікується, що аварійне недовідпущення<br>електроенергії складе:",
                &format!("{} кВт⋅год.", r.expected_outages_emergency),
            )
            .value(
                "Коефіцієнт аварійного простою одноколової<br>системи:",
                &format!("{} грн.", r.expected_losses),
            )
            .finish()
    }
}
