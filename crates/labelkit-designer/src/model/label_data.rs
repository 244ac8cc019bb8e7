//! Product data that templates bind to.

use labelkit_core::units::{WeightUnit, GRAMS_PER_OUNCE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Writing system a field's text is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    #[default]
    Latin,
    Arabic,
}

impl Script {
    /// Natural flow direction for the script.
    pub fn direction(self) -> TextDirection {
        match self {
            Self::Latin => TextDirection::Ltr,
            Self::Arabic => TextDirection::Rtl,
        }
    }

    /// Whether the secondary-script style override applies.
    pub fn is_secondary(self) -> bool {
        matches!(self, Self::Arabic)
    }
}

/// Text flow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Flat record of product fields.
///
/// Every field is a printable string; an empty string means "not set".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelData {
    pub brand_name: String,
    pub product_name: String,
    #[serde(rename = "productName_ar")]
    pub product_name_ar: String,
    pub tagline: String,
    #[serde(rename = "tagline_ar")]
    pub tagline_ar: String,
    pub size: String,
    pub ingredients: String,
    #[serde(rename = "ingredients_ar")]
    pub ingredients_ar: String,
    pub allergens: String,
    #[serde(rename = "allergens_ar")]
    pub allergens_ar: String,
    pub mfg_and_dist: String,
    #[serde(rename = "mfgAndDist_ar")]
    pub mfg_and_dist_ar: String,
    pub quantity_value: String,
    pub quantity_unit: String,
    pub unit_weight_value: String,
    pub unit_weight_unit: String,
    pub net_weight: String,
    pub disclaimer: String,
    #[serde(rename = "disclaimer_ar")]
    pub disclaimer_ar: String,
    pub production_date: String,
    pub expiry_date: String,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl LabelData {
    /// Value of a bindable field.
    pub fn get(&self, key: DataBindingKey) -> &str {
        use DataBindingKey as K;
        match key {
            K::BrandName => &self.brand_name,
            K::ProductName => &self.product_name,
            K::ProductNameAr => &self.product_name_ar,
            K::Tagline => &self.tagline,
            K::TaglineAr => &self.tagline_ar,
            K::Size => &self.size,
            K::Ingredients => &self.ingredients,
            K::IngredientsAr => &self.ingredients_ar,
            K::Allergens => &self.allergens,
            K::AllergensAr => &self.allergens_ar,
            K::MfgAndDist => &self.mfg_and_dist,
            K::MfgAndDistAr => &self.mfg_and_dist_ar,
            K::QuantityValue => &self.quantity_value,
            K::QuantityUnit => &self.quantity_unit,
            K::UnitWeightValue => &self.unit_weight_value,
            K::UnitWeightUnit => &self.unit_weight_unit,
            K::NetWeight => &self.net_weight,
            K::Disclaimer => &self.disclaimer,
            K::DisclaimerAr => &self.disclaimer_ar,
            K::ProductionDate => &self.production_date,
            K::ExpiryDate => &self.expiry_date,
            K::Sku => &self.sku,
        }
    }

    fn field_mut(&mut self, key: DataBindingKey) -> &mut String {
        use DataBindingKey as K;
        match key {
            K::BrandName => &mut self.brand_name,
            K::ProductName => &mut self.product_name,
            K::ProductNameAr => &mut self.product_name_ar,
            K::Tagline => &mut self.tagline,
            K::TaglineAr => &mut self.tagline_ar,
            K::Size => &mut self.size,
            K::Ingredients => &mut self.ingredients,
            K::IngredientsAr => &mut self.ingredients_ar,
            K::Allergens => &mut self.allergens,
            K::AllergensAr => &mut self.allergens_ar,
            K::MfgAndDist => &mut self.mfg_and_dist,
            K::MfgAndDistAr => &mut self.mfg_and_dist_ar,
            K::QuantityValue => &mut self.quantity_value,
            K::QuantityUnit => &mut self.quantity_unit,
            K::UnitWeightValue => &mut self.unit_weight_value,
            K::UnitWeightUnit => &mut self.unit_weight_unit,
            K::NetWeight => &mut self.net_weight,
            K::Disclaimer => &mut self.disclaimer,
            K::DisclaimerAr => &mut self.disclaimer_ar,
            K::ProductionDate => &mut self.production_date,
            K::ExpiryDate => &mut self.expiry_date,
            K::Sku => &mut self.sku,
        }
    }

    /// Set a bindable field.
    ///
    /// Changing a quantity or unit weight field re-derives the net weight.
    pub fn set(&mut self, key: DataBindingKey, value: impl Into<String>) {
        *self.field_mut(key) = value.into();
        if key.affects_net_weight() {
            self.refresh_net_weight();
        }
    }

    /// Logo image reference (data URL or path), if any.
    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref().filter(|l| !l.trim().is_empty())
    }

    /// Recompute `net_weight` from quantity and unit weight.
    pub fn refresh_net_weight(&mut self) {
        self.net_weight = net_weight(
            &self.quantity_value,
            &self.unit_weight_value,
            &self.unit_weight_unit,
        );
    }

    /// Starting data for a fresh print session.
    pub fn seed(production_date: &str) -> Self {
        Self {
            brand_name: "Hot Bake".to_string(),
            tagline: "Quality You Can Taste".to_string(),
            size: "Regular".to_string(),
            mfg_and_dist: "Your Company Name\nYour City, Country".to_string(),
            quantity_value: "0".to_string(),
            unit_weight_value: "0".to_string(),
            unit_weight_unit: "g".to_string(),
            disclaimer: "MADE IN COTTAGE FOOD OPERATION THAT IS NOT SUBJECT TO ROUTINE \
                         GOVERNMENT FOOD SAFETY INSPECTIONS."
                .to_string(),
            production_date: production_date.to_string(),
            ..Self::default()
        }
    }
}

/// Net weight string for a quantity of items of a given unit weight.
///
/// Returns `"{oz:.1} oz | {g}g"` with grams rounded, or an empty string when
/// either number is missing, unparsable or not positive.
pub fn net_weight(quantity: &str, unit_weight: &str, unit: &str) -> String {
    let quantity = quantity.trim().parse::<f64>().unwrap_or(0.0);
    let unit_weight = unit_weight.trim().parse::<f64>().unwrap_or(0.0);
    if !(quantity > 0.0 && unit_weight > 0.0) {
        return String::new();
    }
    let Ok(unit) = unit.parse::<WeightUnit>() else {
        return String::new();
    };

    let grams = unit.to_grams(quantity * unit_weight);
    let ounces = grams / GRAMS_PER_OUNCE;
    format!("{:.1} oz | {}g", ounces, grams.round())
}

/// Closed set of bindable product fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataBindingKey {
    BrandName,
    ProductName,
    #[serde(rename = "productName_ar")]
    ProductNameAr,
    Tagline,
    #[serde(rename = "tagline_ar")]
    TaglineAr,
    Size,
    Ingredients,
    #[serde(rename = "ingredients_ar")]
    IngredientsAr,
    Allergens,
    #[serde(rename = "allergens_ar")]
    AllergensAr,
    MfgAndDist,
    #[serde(rename = "mfgAndDist_ar")]
    MfgAndDistAr,
    QuantityValue,
    QuantityUnit,
    UnitWeightValue,
    UnitWeightUnit,
    NetWeight,
    Disclaimer,
    #[serde(rename = "disclaimer_ar")]
    DisclaimerAr,
    ProductionDate,
    ExpiryDate,
    Sku,
}

impl DataBindingKey {
    /// Every key, in properties-panel order.
    pub const ALL: [DataBindingKey; 22] = [
        Self::BrandName,
        Self::ProductName,
        Self::ProductNameAr,
        Self::Tagline,
        Self::TaglineAr,
        Self::Size,
        Self::Ingredients,
        Self::IngredientsAr,
        Self::Allergens,
        Self::AllergensAr,
        Self::MfgAndDist,
        Self::MfgAndDistAr,
        Self::QuantityValue,
        Self::QuantityUnit,
        Self::UnitWeightValue,
        Self::UnitWeightUnit,
        Self::NetWeight,
        Self::Disclaimer,
        Self::DisclaimerAr,
        Self::ProductionDate,
        Self::ExpiryDate,
        Self::Sku,
    ];

    /// Field name as it appears in serialized product data.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BrandName => "brandName",
            Self::ProductName => "productName",
            Self::ProductNameAr => "productName_ar",
            Self::Tagline => "tagline",
            Self::TaglineAr => "tagline_ar",
            Self::Size => "size",
            Self::Ingredients => "ingredients",
            Self::IngredientsAr => "ingredients_ar",
            Self::Allergens => "allergens",
            Self::AllergensAr => "allergens_ar",
            Self::MfgAndDist => "mfgAndDist",
            Self::MfgAndDistAr => "mfgAndDist_ar",
            Self::QuantityValue => "quantityValue",
            Self::QuantityUnit => "quantityUnit",
            Self::UnitWeightValue => "unitWeightValue",
            Self::UnitWeightUnit => "unitWeightUnit",
            Self::NetWeight => "netWeight",
            Self::Disclaimer => "disclaimer",
            Self::DisclaimerAr => "disclaimer_ar",
            Self::ProductionDate => "productionDate",
            Self::ExpiryDate => "expiryDate",
            Self::Sku => "sku",
        }
    }

    /// Human label for the binding dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Self::BrandName => "Brand Name",
            Self::ProductName => "Product Name (EN)",
            Self::ProductNameAr => "Product Name (AR)",
            Self::Tagline => "Tagline (EN)",
            Self::TaglineAr => "Tagline (AR)",
            Self::Size => "Size",
            Self::Ingredients => "Ingredients (EN)",
            Self::IngredientsAr => "Ingredients (AR)",
            Self::Allergens => "Allergens (EN)",
            Self::AllergensAr => "Allergens (AR)",
            Self::MfgAndDist => "Mfg & Dist (EN)",
            Self::MfgAndDistAr => "Mfg & Dist (AR)",
            Self::QuantityValue => "Quantity Value",
            Self::QuantityUnit => "Quantity Unit",
            Self::UnitWeightValue => "Unit Weight Value",
            Self::UnitWeightUnit => "Unit Weight Unit",
            Self::NetWeight => "Net Weight",
            Self::Disclaimer => "Disclaimer (EN)",
            Self::DisclaimerAr => "Disclaimer (AR)",
            Self::ProductionDate => "Production Date",
            Self::ExpiryDate => "Expiry Date",
            Self::Sku => "SKU",
        }
    }

    /// Declared script of the field's content.
    pub fn script(self) -> Script {
        match self {
            Self::ProductNameAr
            | Self::TaglineAr
            | Self::IngredientsAr
            | Self::AllergensAr
            | Self::MfgAndDistAr
            | Self::DisclaimerAr => Script::Arabic,
            _ => Script::Latin,
        }
    }

    fn affects_net_weight(self) -> bool {
        matches!(
            self,
            Self::QuantityValue | Self::UnitWeightValue | Self::UnitWeightUnit
        )
    }
}

impl fmt::Display for DataBindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataBindingKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("Unknown data binding: {}", s))
    }
}
