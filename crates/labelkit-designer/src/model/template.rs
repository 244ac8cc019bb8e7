//! Label templates: a named canvas and its ordered elements.

use super::element::{ElementId, ElementKind, LayoutElement};
use chrono::{DateTime, Utc};
use labelkit_core::constants::{
    DEFAULT_LABEL_HEIGHT_MM, DEFAULT_LABEL_WIDTH_MM, DEFAULT_TEMPLATE_NAME,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Paint-order change for a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderDirection {
    /// Above every other element
    Front,
    /// Below every other element
    Back,
    /// Swap with the element directly above
    Forward,
    /// Swap with the element directly below
    Backward,
}

/// A named, reusable label layout.
///
/// `elements` is kept in paint order (first is painted first, so the last
/// element is on top). The serialized form carries a derived integer
/// `zIndex` per element; loading sorts by it, with ties keeping file order.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTemplate {
    pub id: String,
    pub name: String,
    pub width_mm: f64,
    pub height_mm: f64,
    elements: Vec<LayoutElement>,
    pub is_default: bool,
    pub last_modified: Option<DateTime<Utc>>,
}

impl Default for LabelTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_NAME, DEFAULT_LABEL_WIDTH_MM, DEFAULT_LABEL_HEIGHT_MM)
    }
}

impl LabelTemplate {
    /// An empty user template with a fresh id.
    pub fn new(name: impl Into<String>, width_mm: f64, height_mm: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            width_mm,
            height_mm,
            elements: Vec::new(),
            is_default: false,
            last_modified: None,
        }
    }

    /// Builder-style element append.
    pub fn with_element(mut self, element: LayoutElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Elements in paint order, bottom first.
    pub fn elements(&self) -> &[LayoutElement] {
        &self.elements
    }

    /// Elements from the top of the paint order down.
    pub fn elements_top_down(&self) -> impl Iterator<Item = &LayoutElement> {
        self.elements.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, id: &ElementId) -> Option<&LayoutElement> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| &e.id == id)
    }

    /// Derived paint index (0 = bottom).
    pub fn z_index_of(&self, id: &ElementId) -> Option<usize> {
        self.position(id)
    }

    /// Whether `a` is painted above `b`.
    pub fn is_above(&self, a: &ElementId, b: &ElementId) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(pa), Some(pb)) => pa > pb,
            _ => false,
        }
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height_mm > 0.0 {
            self.width_mm / self.height_mm
        } else {
            1.0
        }
    }

    /// Add a new element of `kind` on top and return its id.
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        self.push_element(LayoutElement::new(kind))
    }

    /// Put `element` on top. A clashing id is replaced by a fresh one.
    pub fn push_element(&mut self, mut element: LayoutElement) -> ElementId {
        if self.contains(&element.id) {
            element.id = ElementId::generate();
        }
        let id = element.id.clone();
        self.elements.push(element);
        id
    }

    /// Remove an element. Returns whether anything was removed.
    pub fn delete_element(&mut self, id: &ElementId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    /// Copy an element on top of the stack, offset by `offset` percent.
    pub fn duplicate_element(&mut self, id: &ElementId, offset: f64) -> Option<ElementId> {
        let copy = self.element(id)?.duplicate(offset);
        Some(self.push_element(copy))
    }

    /// Change an element's paint order. Unknown ids and moves past the
    /// ends are no-ops; returns whether the order changed.
    pub fn reorder(&mut self, id: &ElementId, direction: ReorderDirection) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let last = self.elements.len() - 1;
        match direction {
            ReorderDirection::Front if index < last => {
                let element = self.elements.remove(index);
                self.elements.push(element);
                true
            }
            ReorderDirection::Back if index > 0 => {
                let element = self.elements.remove(index);
                self.elements.insert(0, element);
                true
            }
            ReorderDirection::Forward if index < last => {
                self.elements.swap(index, index + 1);
                true
            }
            ReorderDirection::Backward if index > 0 => {
                self.elements.swap(index, index - 1);
                true
            }
            _ => false,
        }
    }

    /// Apply `f` to an element. The element's id and kind cannot change.
    pub fn update_element<F>(&mut self, id: &ElementId, f: F) -> bool
    where
        F: FnOnce(&mut LayoutElement),
    {
        let Some(index) = self.position(id) else {
            return false;
        };
        let element = &mut self.elements[index];
        let original_id = element.id.clone();
        let original_kind = element.kind();
        let before = element.body.clone();

        f(element);

        element.id = original_id;
        if element.kind() != original_kind {
            tracing::warn!(
                "Ignoring attempt to change element {} from {} to {}",
                element.id,
                original_kind,
                element.kind()
            );
            element.body = before;
        }
        true
    }

    pub(crate) fn element_mut(&mut self, id: &ElementId) -> Option<&mut LayoutElement> {
        self.elements.iter_mut().find(|e| &e.id == id)
    }

    /// Copy under a new id and name; never a built-in.
    pub fn clone_as(&self, name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            is_default: false,
            last_modified: None,
            ..self.clone()
        }
    }

    /// Stamp the modification time.
    pub fn touch(&mut self) {
        self.last_modified = Some(Utc::now());
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateOut<'a> {
    id: &'a str,
    name: &'a str,
    width_mm: f64,
    height_mm: f64,
    elements: Vec<ElementOut<'a>>,
    is_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_modified: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ElementOut<'a> {
    #[serde(flatten)]
    element: &'a LayoutElement,
    z_index: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateIn {
    #[serde(default = "new_template_id")]
    id: String,
    #[serde(default = "default_template_name")]
    name: String,
    #[serde(default = "default_width")]
    width_mm: f64,
    #[serde(default = "default_height")]
    height_mm: f64,
    #[serde(default)]
    elements: Vec<ElementIn>,
    #[serde(default)]
    is_default: bool,
    #[serde(default)]
    last_modified: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ElementIn {
    #[serde(flatten)]
    element: LayoutElement,
    #[serde(default)]
    z_index: Option<f64>,
}

fn new_template_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn default_template_name() -> String {
    DEFAULT_TEMPLATE_NAME.to_string()
}

fn default_width() -> f64 {
    DEFAULT_LABEL_WIDTH_MM
}

fn default_height() -> f64 {
    DEFAULT_LABEL_HEIGHT_MM
}

impl Serialize for LabelTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TemplateOut {
            id: &self.id,
            name: &self.name,
            width_mm: self.width_mm,
            height_mm: self.height_mm,
            elements: self
                .elements
                .iter()
                .enumerate()
                .map(|(z_index, element)| ElementOut { element, z_index })
                .collect(),
            is_default: self.is_default,
            last_modified: self.last_modified,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LabelTemplate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = TemplateIn::deserialize(deserializer)?;

        // Elements without a zIndex keep their file position relative to each other.
        let mut indexed: Vec<(f64, LayoutElement)> = raw
            .elements
            .into_iter()
            .enumerate()
            .map(|(i, e)| (e.z_index.unwrap_or(i as f64), e.element))
            .collect();
        indexed.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut template = LabelTemplate {
            id: raw.id,
            name: raw.name,
            width_mm: raw.width_mm,
            height_mm: raw.height_mm,
            elements: Vec::with_capacity(indexed.len()),
            is_default: raw.is_default,
            last_modified: raw.last_modified,
        };
        for (_, element) in indexed {
            template.push_element(element);
        }
        Ok(template)
    }
}
