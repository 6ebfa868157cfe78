// Typed result objects, one per endpoint. Each owns the parsed document
// root and exposes read-only views over it; nothing is copied out of the
// tree. Only `User` validates anything — every other accessor falls back
// to `None`/default when an attribute is missing.
//
// `/thing` has no wrapper here: the API returns the raw parsed
// structure for it and callers index the generic `Element` directly.

use crate::error::{BggError, Result};
use crate::xml::Element;

fn attr_u64(element: &Element, name: &str) -> Option<u64> {
    element.attr(name).and_then(|value| value.parse().ok())
}

// --- /search -------------------------------------------------------------

/// Result of a `/search` call: `<items>` with `<item>` children.
#[derive(Debug, Clone)]
pub struct Search {
    doc: Element,
}

impl Search {
    pub fn from_document(doc: Element) -> Self {
        Self { doc }
    }

    /// The `total` attribute on the root, 0 when absent.
    pub fn total(&self) -> u64 {
        attr_u64(&self.doc, "total").unwrap_or(0)
    }

    pub fn items(&self) -> impl Iterator<Item = SearchItem<'_>> {
        self.doc.children_named("item").map(|element| SearchItem { element })
    }

    pub fn first(&self) -> Option<SearchItem<'_>> {
        self.items().next()
    }

    pub fn len(&self) -> usize {
        self.items().count()
    }

    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }

    pub fn document(&self) -> &Element {
        &self.doc
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchItem<'a> {
    element: &'a Element,
}

impl<'a> SearchItem<'a> {
    pub fn id(&self) -> Option<u64> {
        attr_u64(self.element, "id")
    }

    pub fn item_type(&self) -> Option<&'a str> {
        self.element.attr("type")
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.attr(name)
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }
}

// --- /collection ---------------------------------------------------------

/// Result of a `/collection` call. Collection items carry their game id
/// in the `objectid` attribute, unlike search and hot items.
#[derive(Debug, Clone)]
pub struct Collection {
    doc: Element,
}

impl Collection {
    pub fn from_document(doc: Element) -> Self {
        Self { doc }
    }

    pub fn total_items(&self) -> u64 {
        attr_u64(&self.doc, "totalitems").unwrap_or(0)
    }

    pub fn items(&self) -> impl Iterator<Item = CollectionItem<'_>> {
        self.doc
            .children_named("item")
            .map(|element| CollectionItem { element })
    }

    pub fn first(&self) -> Option<CollectionItem<'_>> {
        self.items().next()
    }

    pub fn len(&self) -> usize {
        self.items().count()
    }

    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }

    pub fn document(&self) -> &Element {
        &self.doc
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CollectionItem<'a> {
    element: &'a Element,
}

impl<'a> CollectionItem<'a> {
    pub fn id(&self) -> Option<u64> {
        attr_u64(self.element, "objectid")
    }

    pub fn subtype(&self) -> Option<&'a str> {
        self.element.attr("subtype")
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.attr(name)
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }
}

// --- /family -------------------------------------------------------------

/// Result of a `/family` call: `<items>` holding a single typed item.
#[derive(Debug, Clone)]
pub struct Family {
    doc: Element,
}

impl Family {
    pub fn from_document(doc: Element) -> Self {
        Self { doc }
    }

    /// The `type` attribute of the family item, e.g. `boardgamefamily`.
    pub fn family_type(&self) -> Option<&str> {
        self.doc.first_child("item").and_then(|item| item.attr("type"))
    }

    pub fn id(&self) -> Option<u64> {
        self.doc.first_child("item").and_then(|item| attr_u64(item, "id"))
    }

    pub fn document(&self) -> &Element {
        &self.doc
    }
}

// --- /guild --------------------------------------------------------------

/// Result of a `/guild` call: attributes on the `<guild>` root itself.
#[derive(Debug, Clone)]
pub struct Guild {
    doc: Element,
}

impl Guild {
    pub fn from_document(doc: Element) -> Self {
        Self { doc }
    }

    pub fn name(&self) -> Option<&str> {
        self.doc.attr("name")
    }

    pub fn id(&self) -> Option<u64> {
        attr_u64(&self.doc, "id")
    }

    pub fn document(&self) -> &Element {
        &self.doc
    }
}

// --- /hot ----------------------------------------------------------------

/// Result of a `/hot` call: the ranked hotness list.
#[derive(Debug, Clone)]
pub struct Hot {
    doc: Element,
}

impl Hot {
    pub fn from_document(doc: Element) -> Self {
        Self { doc }
    }

    pub fn items(&self) -> impl Iterator<Item = HotItem<'_>> {
        self.doc.children_named("item").map(|element| HotItem { element })
    }

    pub fn first(&self) -> Option<HotItem<'_>> {
        self.items().next()
    }

    pub fn len(&self) -> usize {
        self.items().count()
    }

    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }

    pub fn document(&self) -> &Element {
        &self.doc
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HotItem<'a> {
    element: &'a Element,
}

impl<'a> HotItem<'a> {
    pub fn id(&self) -> Option<u64> {
        attr_u64(self.element, "id")
    }

    pub fn rank(&self) -> Option<u64> {
        attr_u64(self.element, "rank")
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.attr(name)
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }
}

// --- /plays --------------------------------------------------------------

/// Result of a `/plays` call: `<plays total=...>` with `<play>` children.
#[derive(Debug, Clone)]
pub struct Plays {
    doc: Element,
}

impl Plays {
    pub fn from_document(doc: Element) -> Self {
        Self { doc }
    }

    /// The `total` attribute on the root as an integer, 0 when absent or
    /// not numeric.
    pub fn total_count(&self) -> u64 {
        attr_u64(&self.doc, "total").unwrap_or(0)
    }

    pub fn username(&self) -> Option<&str> {
        self.doc.attr("username")
    }

    pub fn plays(&self) -> impl Iterator<Item = PlayItem<'_>> {
        self.doc.children_named("play").map(|element| PlayItem { element })
    }

    pub fn document(&self) -> &Element {
        &self.doc
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlayItem<'a> {
    element: &'a Element,
}

impl<'a> PlayItem<'a> {
    pub fn id(&self) -> Option<u64> {
        attr_u64(self.element, "id")
    }

    pub fn date(&self) -> Option<&'a str> {
        self.element.attr("date")
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.attr(name)
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }
}

// --- /user ---------------------------------------------------------------

/// Result of a `/user` call.
///
/// The API answers 200 with `<user id="">` for names it does not know, so
/// a non-empty `id` attribute is the existence check: construction fails
/// with `UserNotFound` instead of handing back an empty shell.
#[derive(Debug, Clone)]
pub struct User {
    doc: Element,
}

impl User {
    pub fn from_document(doc: Element) -> Result<Self> {
        let exists = matches!(doc.attr("id"), Some(id) if !id.is_empty());
        if !exists {
            let name = doc.attr("name").unwrap_or_default().to_string();
            return Err(BggError::UserNotFound(name));
        }
        Ok(Self { doc })
    }

    pub fn id(&self) -> u64 {
        attr_u64(&self.doc, "id").unwrap_or(0)
    }

    pub fn name(&self) -> Option<&str> {
        self.doc.attr("name")
    }

    pub fn document(&self) -> &Element {
        &self.doc
    }
}
