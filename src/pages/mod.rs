pub mod fuel;
pub mod reliability;
pub mod solar;

use crate::domain::ports::CalculatorPage;
use serde::{Deserialize, Serialize};

pub use fuel::{FuelCompositionPage, FuelOilPage};
pub use reliability::{OutageLossesPage, ReliabilityPage};
pub use solar::SolarProfitPage;

pub const FORM_ID: &str = "calculator-form";
pub const BACK_BUTTON_ID: &str = "back-button";
pub const APP_CONTAINER_ID: &str = "app-container";
pub const RESULT_SECTION_ID: &str = "result-section";
pub const LINK_BUTTON_CLASS: &str = "calc-link-button";
pub const LINK_TARGET_ATTRIBUTE: &str = "data-href";

/// Every calculator page the labs ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    FuelComposition,
    FuelOil,
    SolarProfit,
    Reliability,
    OutageLosses,
}

impl CalculatorKind {
    pub fn title(&self) -> &'static str {
        match self {
            CalculatorKind::FuelComposition => FuelCompositionPage.title(),
            CalculatorKind::FuelOil => FuelOilPage.title(),
            CalculatorKind::SolarProfit => SolarProfitPage.title(),
            CalculatorKind::Reliability => ReliabilityPage.title(),
            CalculatorKind::OutageLosses => OutageLossesPage.title(),
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            CalculatorKind::FuelComposition => FuelCompositionPage.endpoint(),
            CalculatorKind::FuelOil => FuelOilPage.endpoint(),
            CalculatorKind::SolarProfit => SolarProfitPage.endpoint(),
            CalculatorKind::Reliability => ReliabilityPage.endpoint(),
            CalculatorKind::OutageLosses => OutageLossesPage.endpoint(),
        }
    }

    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            CalculatorKind::FuelComposition => FuelCompositionPage.required_fields(),
            CalculatorKind::FuelOil => FuelOilPage.required_fields(),
            CalculatorKind::SolarProfit => SolarProfitPage.required_fields(),
            CalculatorKind::Reliability => ReliabilityPage.required_fields(),
            CalculatorKind::OutageLosses => OutageLossesPage.required_fields(),
        }
    }
}

/// Builds the markup of a results panel.
pub(crate) struct ResultTemplate {
    html: String,
}

impl ResultTemplate {
    pub(crate) fn new() -> Self {
        Self {
            html: String::from("<h2>Результат</h2>\n"),
        }
    }

    /// A paragraph with free-form inner markup.
    pub(crate) fn paragraph(mut self, inner: &str) -> Self {
        self.html.push_str("<p class=\"result-paragraph\">");
        self.html.push_str(inner);
        self.html.push_str("</p>\n");
        self
    }

    /// `label <b>value</b>`
    pub(crate) fn value(self, label: &str, value: &str) -> Self {
        let inner = format!("{} <b>{}</b>", label, value);
        self.paragraph(&inner)
    }

    pub(crate) fn finish(self) -> String {
        self.html
    }
}
