//! Fuel calculators: working-to-dry/combustible mass conversion and fuel oil
//! raw composition.

use super::ResultTemplate;
use crate::core::format::to_fixed;
use crate::domain::ports::CalculatorPage;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MassCoefficients {
    pub dry: f64,
    pub combustible: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DryComposition {
    pub hydrogen: f64,
    pub carbon: f64,
    pub sulfur: f64,
    pub nitrogen: f64,
    pub oxygen: f64,
    pub ash: f64,
}

/// Combustible mass carries no ash or moisture.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CombustibleComposition {
    pub hydrogen: f64,
    pub carbon: f64,
    pub sulfur: f64,
    pub nitrogen: f64,
    pub oxygen: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeatingValues {
    pub raw: f64,
    pub dry: f64,
    pub combustible: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelCompositionResult {
    pub coefs: MassCoefficients,
    pub composition_dry: DryComposition,
    pub composition_combustible: CombustibleComposition,
    pub low_heating_values: HeatingValues,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FuelCompositionPage;

impl CalculatorPage for FuelCompositionPage {
    type Response = FuelCompositionResult;

    fn title(&self) -> &'static str {
        "Калькулятор складу палива"
    }

    fn endpoint(&self) -> &'static str {
        "/evaluate1"
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &[
            "hydrogen", "carbon", "sulfur", "nitrogen", "oxygen", "moisture", "ash",
        ]
    }

    fn render(&self, r: &FuelCompositionResult) -> String {
        let percent = |v: f64| format!("{} %", to_fixed(v, 2));
        let heat = |v: f64| format!("{} МДж/кг.", to_fixed(v, 2));
        let dry = &r.composition_dry;
        let comb = &r.composition_combustible;
        let lhv = &r.low_heating_values;

        ResultTemplate::new()
            .paragraph("Коефіцієнт переходу від робочої до:")
            .value("  - сухої маси:", &to_fixed(r.coefs.dry, 2))
            .value("  - горючої маси:", &to_fixed(r.coefs.combustible, 2))
            .paragraph("Склад сухої маси палива:")
            .value("  - Водень (H):", &percent(dry.hydrogen))
            .value("  - Вуглець (C):", &percent(dry.carbon))
            .value("  - Сірка (S):", &percent(dry.sulfur))
            .value("  - Азот (N):", &percent(dry.nitrogen))
            .value("  - Кисень (O):", &percent(dry.oxygen))
            .value("  - Зола (A):", &percent(dry.ash))
            .paragraph("Склад горючої маси палива:")
            .value("  - Водень (H):", &percent(comb.hydrogen))
            .value("  - Вуглець (C):", &percent(comb.carbon))
            .value("  - Сірка (S):", &percent(comb.sulfur))
            .value("  - Азот (N):", &percent(comb.nitrogen))
            .value("  - Кисень (O):", &percent(comb.oxygen))
            .paragraph("Нижча теплота згоряння для:")
            .value("  - робочої маси:", &heat(lhv.raw))
            .value("  - сухої маси:", &heat(lhv.dry))
            .value("  - горючої маси:", &heat(lhv.combustible))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawComposition {
    pub carbon: f64,
    pub sulfur: f64,
    pub hydrogen: f64,
    pub oxygen: f64,
    pub moisture: f64,
    pub ash: f64,
    pub vanadium: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FuelOilResult {
    #[serde(rename = "rawComposition")]
    pub raw_composition: RawComposition,
    #[serde(rename = "rawLHV")]
    pub raw_lhv: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FuelOilPage;

impl CalculatorPage for FuelOilPage {
    type Response = FuelOilResult;

    fn title(&self) -> &'static str {
        "Калькулятор складу мазуту"
    }

    fn endpoint(&self) -> &'static str {
        "/evaluate2"
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &[
            "carbon",
            "hydrogen",
            "oxygen",
            "sulfur",
            "combustibleLHV",
            "rawMoisture",
            "dryAsh",
            "combustibleVanadium",
        ]
    }

    fn render(&self, r: &FuelOilResult) -> String {
        let percent = |v: f64| format!("{} %", to_fixed(v, 2));
        let raw = &r.raw_composition;

        ResultTemplate::new()
            .paragraph("Склад сухої маси палива:")
            .value("  - Вуглець (C):", &percent(raw.carbon))
            .value("  - Сірка (S):", &percent(raw.sulfur))
            .value("  - Водень (H):", &percent(raw.hydrogen))
            .value("  - Кисень (O):", &percent(raw.oxygen))
            .value("  - Волога (W):", &percent(raw.moisture))
            .value("  - Зола (A):", &percent(raw.ash))
            .value("  - Ванадій (V):", &format!("{} мг/кг.", to_fixed(raw.vanadium, 2)))
            .value(
                "Нижча теплота згоряння робочої маси<br>мазуту:",
                &format!("{} МДж/кг.", to_fixed(r.raw_lhv, 2)),
            )
            .finish()
    }
}
