//! # Label Template Library
//!
//! Keeps the user's label templates alongside the built-in ones.
//!
//! Features:
//! - Built-in templates that can be cloned but not deleted or renamed
//! - Upsert-by-id saving that stamps the modification time
//! - Clone to a new, editable copy
//! - A [`TemplateStore`] seam so the designer can save without knowing
//!   where templates live

use crate::model::{
    DataBindingKey, ElementKind, FontWeight, LabelTemplate, LayoutElement, TextAlign, TextProps,
};
use labelkit_core::{Result, TemplateError};

/// Suffix appended to the name of a cloned template.
pub const COPY_SUFFIX: &str = " (Copy)";

/// Somewhere templates can be saved to and loaded from.
pub trait TemplateStore {
    /// Insert or replace a template by id.
    fn save_template(&mut self, template: &LabelTemplate) -> Result<()>;

    /// Fetch a template by id.
    fn load_template(&self, id: &str) -> Result<LabelTemplate>;
}

/// In-memory template collection in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateLibrary {
    templates: Vec<LabelTemplate>,
}

impl TemplateLibrary {
    /// A library with no templates at all.
    pub fn empty() -> Self {
        Self {
            templates: Vec::new(),
        }
    }

    /// A library holding the built-in templates.
    pub fn new() -> Self {
        Self {
            templates: builtin_templates(),
        }
    }

    /// A library from previously saved templates. Missing built-ins are
    /// added back in front.
    pub fn from_templates(templates: Vec<LabelTemplate>) -> Self {
        let mut library = Self { templates };
        for builtin in builtin_templates().into_iter().rev() {
            if library.get(&builtin.id).is_none() {
                library.templates.insert(0, builtin);
            }
        }
        library
    }

    pub fn list(&self) -> &[LabelTemplate] {
        &self.templates
    }

    pub fn count(&self) -> usize {
        self.templates.len()
    }

    pub fn get(&self, id: &str) -> Option<&LabelTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// First template whose name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&LabelTemplate> {
        self.templates
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Templates whose name contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&LabelTemplate> {
        let q = query.to_lowercase();
        self.templates
            .iter()
            .filter(|t| t.name.to_lowercase().contains(&q))
            .collect()
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.templates
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TemplateError::NotFound { id: id.to_string() }.into())
    }

    fn ensure_editable(&self, index: usize, action: &'static str) -> Result<()> {
        let template = &self.templates[index];
        if template.is_default {
            return Err(TemplateError::BuiltIn {
                name: template.name.clone(),
                action,
            }
            .into());
        }
        Ok(())
    }

    /// Insert or replace by id and stamp `last_modified`.
    ///
    /// Saved templates are never built-ins; overwriting a built-in is refused.
    pub fn save(&mut self, mut template: LabelTemplate) -> Result<()> {
        if !(template.width_mm > 0.0 && template.height_mm > 0.0) {
            return Err(TemplateError::InvalidSize {
                width_mm: template.width_mm,
                height_mm: template.height_mm,
            }
            .into());
        }
        template.is_default = false;
        template.touch();

        match self.templates.iter().position(|t| t.id == template.id) {
            Some(index) => {
                self.ensure_editable(index, "overwritten")?;
                tracing::info!("Updated template '{}'", template.name);
                self.templates[index] = template;
            }
            None => {
                tracing::info!("Added template '{}'", template.name);
                self.templates.push(template);
            }
        }
        Ok(())
    }

    /// Remove a user template.
    pub fn delete(&mut self, id: &str) -> Result<LabelTemplate> {
        let index = self.position(id)?;
        self.ensure_editable(index, "deleted")?;
        let removed = self.templates.remove(index);
        tracing::info!("Deleted template '{}'", removed.name);
        Ok(removed)
    }

    /// Rename a user template. Blank names are ignored.
    pub fn rename(&mut self, id: &str, name: &str) -> Result<()> {
        let index = self.position(id)?;
        self.ensure_editable(index, "renamed")?;
        let name = name.trim();
        if !name.is_empty() {
            let template = &mut self.templates[index];
            template.name = name.to_string();
            template.touch();
        }
        Ok(())
    }

    /// Copy any template, built-ins included, as a new user template.
    /// Returns the new id.
    pub fn clone_template(&mut self, id: &str) -> Result<String> {
        let index = self.position(id)?;
        let source = &self.templates[index];
        let mut copy = source.clone_as(format!("{}{}", source.name, COPY_SUFFIX));
        copy.touch();
        let new_id = copy.id.clone();
        tracing::info!("Cloned template '{}' as '{}'", source.name, copy.name);
        self.templates.push(copy);
        Ok(new_id)
    }

    /// User templates only, for persistence.
    pub fn user_templates(&self) -> impl Iterator<Item = &LabelTemplate> {
        self.templates.iter().filter(|t| !t.is_default)
    }
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for TemplateLibrary {
    fn save_template(&mut self, template: &LabelTemplate) -> Result<()> {
        self.save(template.clone())
    }

    fn load_template(&self, id: &str) -> Result<LabelTemplate> {
        self.get(id)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound { id: id.to_string() }.into())
    }
}

fn bound_text(key: DataBindingKey, size: f64, weight: FontWeight, align: TextAlign) -> TextProps {
    let mut props = TextProps::bound(key);
    let style = &mut props.style_by_script.default;
    style.font_size = size;
    style.font_weight = weight;
    style.text_align = align;
    props
}

fn text_element(props: TextProps, x: f64, y: f64, w: f64, h: f64) -> LayoutElement {
    LayoutElement::new(ElementKind::Text)
        .with_text(props)
        .at(x, y, w, h)
}

/// Templates shipped with the application.
pub fn builtin_templates() -> Vec<LabelTemplate> {
    use DataBindingKey as K;

    let mut title = bound_text(K::ProductName, 14.0, FontWeight::Bold, TextAlign::Left);
    title.style_by_script.default.is_uppercase = true;
    let title_ar = bound_text(K::ProductNameAr, 12.0, FontWeight::Bold, TextAlign::Right);

    let mut standard = LabelTemplate::new("Standard Product Label", 100.0, 50.0)
        .with_element(LayoutElement::new(ElementKind::Logo).at(3.0, 5.0, 18.0, 30.0))
        .with_element(text_element(title, 24.0, 4.0, 48.0, 14.0))
        .with_element(text_element(title_ar, 73.0, 4.0, 24.0, 14.0))
        .with_element(LayoutElement::new(ElementKind::Line).at(24.0, 20.0, 73.0, 1.0))
        .with_element(text_element(
            bound_text(K::Ingredients, 5.0, FontWeight::Regular, TextAlign::Left),
            24.0,
            23.0,
            48.0,
            30.0,
        ))
        .with_element(text_element(
            bound_text(K::IngredientsAr, 5.0, FontWeight::Regular, TextAlign::Right),
            73.0,
            23.0,
            24.0,
            30.0,
        ))
        .with_element(text_element(
            bound_text(K::NetWeight, 6.0, FontWeight::SemiBold, TextAlign::Left),
            3.0,
            40.0,
            30.0,
            8.0,
        ))
        .with_element(text_element(
            bound_text(K::ExpiryDate, 6.0, FontWeight::SemiBold, TextAlign::Left),
            3.0,
            50.0,
            30.0,
            8.0,
        ))
        .with_element(LayoutElement::new(ElementKind::Barcode).at(62.0, 62.0, 35.0, 22.0))
        .with_element(text_element(
            bound_text(K::Disclaimer, 4.0, FontWeight::Regular, TextAlign::Center),
            3.0,
            88.0,
            94.0,
            10.0,
        ));
    standard.id = "builtin-standard".to_string();
    standard.is_default = true;

    let mut jar = LabelTemplate::new("Round Jar Lid", 60.0, 60.0)
        .with_element(text_element(
            bound_text(K::BrandName, 9.0, FontWeight::Bold, TextAlign::Center),
            10.0,
            8.0,
            80.0,
            12.0,
        ))
        .with_element(text_element(
            bound_text(K::ProductName, 12.0, FontWeight::Black, TextAlign::Center),
            10.0,
            24.0,
            80.0,
            18.0,
        ))
        .with_element(text_element(
            bound_text(K::ProductNameAr, 10.0, FontWeight::Bold, TextAlign::Center),
            10.0,
            42.0,
            80.0,
            14.0,
        ))
        .with_element(LayoutElement::new(ElementKind::Qrcode).at(38.0, 60.0, 24.0, 24.0))
        .with_element(text_element(
            bound_text(K::ExpiryDate, 6.0, FontWeight::Medium, TextAlign::Center),
            20.0,
            86.0,
            60.0,
            8.0,
        ));
    jar.id = "builtin-jar-lid".to_string();
    jar.is_default = true;

    vec![standard, jar]
}
