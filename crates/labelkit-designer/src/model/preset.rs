//! Product presets used to fill label data and drive live preview.

use super::label_data::{DataBindingKey, LabelData};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A saved product: partial label data plus its shelf life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetProduct {
    pub id: String,
    pub name: String,
    /// Fields this preset sets; dates are never carried by a preset.
    #[serde(default)]
    pub data: BTreeMap<DataBindingKey, String>,
    pub shelf_life_days: i64,
}

impl PresetProduct {
    pub fn new(id: impl Into<String>, name: impl Into<String>, shelf_life_days: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data: BTreeMap::new(),
            shelf_life_days,
        }
    }

    /// Builder-style field setter.
    pub fn with(mut self, key: DataBindingKey, value: impl Into<String>) -> Self {
        self.data.insert(key, value.into());
        self
    }

    /// Overlay this preset onto `data` and recompute the expiry date.
    pub fn apply_to(&self, data: &mut LabelData) {
        for (key, value) in &self.data {
            if matches!(
                key,
                DataBindingKey::ProductionDate | DataBindingKey::ExpiryDate
            ) {
                continue;
            }
            data.set(*key, value.clone());
        }
        data.expiry_date = expiry_date(&data.production_date, self.shelf_life_days);
        tracing::debug!(preset = %self.name, expiry = %data.expiry_date, "Applied preset");
    }

    /// Label data as it would look with this preset applied.
    pub fn preview_data(&self, base: &LabelData) -> LabelData {
        let mut data = base.clone();
        self.apply_to(&mut data);
        data
    }
}

/// `production_date` (YYYY-MM-DD) plus `days`, as YYYY-MM-DD.
///
/// Calendar-day arithmetic with no time zone involved. An empty or invalid
/// date, or a result outside the representable range, yields "".
pub fn expiry_date(production_date: &str, days: i64) -> String {
    let Ok(start) = NaiveDate::parse_from_str(production_date.trim(), DATE_FORMAT) else {
        return String::new();
    };
    Duration::try_days(days)
        .and_then(|d| start.checked_add_signed(d))
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Set the production date and, when a preset is active, recompute expiry.
pub fn set_production_date(
    data: &mut LabelData,
    production_date: impl Into<String>,
    active_preset: Option<&PresetProduct>,
) {
    data.production_date = production_date.into();
    if let Some(preset) = active_preset {
        data.expiry_date = expiry_date(&data.production_date, preset.shelf_life_days);
    }
}

/// Presets shipped with a fresh installation.
pub fn seed_presets() -> Vec<PresetProduct> {
    use DataBindingKey as K;
    vec![
        PresetProduct::new("preset-1", "Chocolate Chip Cookies", 7)
            .with(K::ProductName, "CHOCOLATE CHIP COOKIES")
            .with(K::Size, "6-Pack")
            .with(
                K::Ingredients,
                "Enriched Wheat Flour (Wheat Flour, Niacin, Reduced Iron, Thiamine \
                 Mononitrate, Riboflavin, Folic Acid), Sugar, Brown Sugar, Butter (Cream, \
                 Salt), Eggs, Vanilla Extract, Baking Soda, Salt, Chocolate Chips (Sugar, \
                 Chocolate Liquor, Cocoa Butter, Soy Lecithin, Vanilla Extract).",
            )
            .with(K::Allergens, "CONTAINS: WHEAT, MILK, EGGS, SOY.")
            .with(K::QuantityValue, "6")
            .with(K::QuantityUnit, "Pieces")
            .with(K::UnitWeightValue, "33.3")
            .with(K::UnitWeightUnit, "g")
            .with(K::Tagline, "Freshly baked happiness.")
            .with(K::Sku, "CK-006"),
        PresetProduct::new("preset-2", "Sourdough Bread", 5)
            .with(K::ProductName, "ARTISAN SOURDOUGH BREAD")
            .with(K::Size, "Large Loaf")
            .with(
                K::Ingredients,
                "Organic Wheat Flour, Water, Sourdough Starter (Flour, Water), Sea Salt.",
            )
            .with(K::Allergens, "CONTAINS: WHEAT.")
            .with(K::QuantityValue, "1")
            .with(K::QuantityUnit, "Loaf")
            .with(K::UnitWeightValue, "680")
            .with(K::UnitWeightUnit, "g")
            .with(K::Tagline, "Naturally leavened, handcrafted.")
            .with(K::Sku, "SD-680"),
        PresetProduct::new("preset-3", "Strawberry Jam", 365)
            .with(K::ProductName, "HOMEMADE STRAWBERRY JAM")
            .with(K::Size, "8oz Jar")
            .with(K::Ingredients, "Strawberries, Sugar, Lemon Juice, Pectin.")
            .with(K::Allergens, "")
            .with(K::QuantityValue, "1")
            .with(K::QuantityUnit, "Jar")
            .with(K::UnitWeightValue, "227")
            .with(K::UnitWeightUnit, "g")
            .with(K::Tagline, "Sunshine in a jar.")
            .with(K::Sku, "SJ-227"),
    ]
}
