use super::ResultTemplate;
use crate::core::format::{to_fixed, to_js_string};
use crate::domain::ports::CalculatorPage;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SolarProfitResult {
    pub profit: f64,
    pub electricity_no_imbalance: f64,
    pub penalty: f64,
    pub electricity_imbalance: f64,
    pub net_profit: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SolarProfitPage;

impl CalculatorPage for SolarProfitPage {
    type Response = SolarProfitResult;

    fn title(&self) -> &'static str {
        "Калькулятор прибутку сонячної електростанції"
    }

    fn endpoint(&self) -> &'static str {
        "/evaluate"
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["average_daily_capacity", "electricity_cost", "standard_deviation"]
    }

    fn render(&self, r: &SolarProfitResult) -> String {
        let verdict = if r.net_profit >= 0.0 {
            "Прибуток"
        } else {
            "Збитки"
        };
        // The amount is the one-decimal string read back as a number, so a
        // trailing ".0" disappears.
        let rounded = to_fixed(r.net_profit, 1);
        let amount = rounded
            .parse::<f64>()
            .map(|v| to_js_string(v.abs()))
            .unwrap_or_else(|_| rounded.trim_start_matches('-').to_string());

        ResultTemplate::new()
            .paragraph(&format!(
                "<b>{} тис. грн.</b> - дохід від генерації енергії без небалансів <b>({} МВт⋅год)</b>",
                to_fixed(r.profit, 1),
                to_fixed(r.electricity_no_imbalance, 1)
            ))
            .paragraph(&format!(
                "<b>{} тис. грн.</b> - штраф за генерацію енергії з небалансами <b>({} МВт⋅год)</b>",
                to_fixed(r.penalty, 1),
                to_fixed(r.electricity_imbalance, 1)
            ))
            .value(&format!("{}:", verdict), &format!("{} тис. грн.", amount))
            .finish()
    }
}
