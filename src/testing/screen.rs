// src/testing/screen.rs
// Queries over one rendered document

use super::failure::AssertionFailure;
use super::matcher::{TextMatch, normalize};
use crate::ui::aria;
use crate::ui::dom::{Document, ElementRef, NodeId};

/// Elements whose text is never matched by text queries
const TEXT_QUERY_IGNORE: &[&str] = &["script", "style"];

/// Role query: role name plus optional name, level and visibility filters
#[derive(Debug, Clone)]
pub struct ByRole {
    role: String,
    name: Option<TextMatch>,
    level: Option<u8>,
    hidden: bool,
}

impl ByRole {
    pub fn new(role: &str) -> Self {
        Self {
            role: role.trim().to_ascii_lowercase(),
            name: None,
            level: None,
            hidden: false,
        }
    }

    /// Require an accessible name matching `name`
    pub fn name(mut self, name: impl Into<TextMatch>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Require a heading level
    pub fn level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    /// Also consider elements hidden from the accessibility tree
    pub fn hidden(mut self, include_hidden: bool) -> Self {
        self.hidden = include_hidden;
        self
    }

    fn matches(&self, doc: &Document, id: NodeId) -> bool {
        if aria::role(doc, id).as_deref() != Some(self.role.as_str()) {
            return false;
        }
        if !self.hidden && aria::is_inaccessible(doc, id) {
            return false;
        }
        if let Some(level) = self.level {
            if aria::heading_level(doc, id) != Some(level) {
                return false;
            }
        }
        match &self.name {
            Some(name) => name.matches(&aria::accessible_name(doc, id)),
            None => true,
        }
    }

    fn describe(&self) -> String {
        let mut out = format!("with the role \"{}\"", self.role);
        if let Some(name) = &self.name {
            out.push_str(&format!(" and name {}", name));
        }
        if let Some(level) = self.level {
            out.push_str(&format!(" and level {}", level));
        }
        out
    }
}

impl From<&str> for ByRole {
    fn from(role: &str) -> Self {
        ByRole::new(role)
    }
}

/// Query handle over a freshly rendered document
///
/// Owns its document; dropping the screen discards it.
#[derive(Debug, Clone)]
pub struct Screen {
    document: Document,
}

impl Screen {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The element everything was mounted into
    pub fn container(&self) -> ElementRef<'_> {
        self.document.element(self.document.container())
    }

    /// Pretty-printed body, as shown in failure messages
    pub fn debug(&self) -> String {
        self.document.pretty(self.document.body())
    }

    // ===== text queries =====

    pub fn query_all_by_text(&self, text: impl Into<TextMatch>) -> Vec<ElementRef<'_>> {
        let matcher = text.into();
        self.find_text(&matcher)
    }

    pub fn get_all_by_text(
        &self,
        text: impl Into<TextMatch>,
    ) -> Result<Vec<ElementRef<'_>>, AssertionFailure> {
        let matcher = text.into();
        let found = self.find_text(&matcher);
        if found.is_empty() {
            return Err(AssertionFailure::not_found(describe_text(&matcher), self.debug()));
        }
        Ok(found)
    }

    pub fn get_by_text(
        &self,
        text: impl Into<TextMatch>,
    ) -> Result<ElementRef<'_>, AssertionFailure> {
        let matcher = text.into();
        let found = self.find_text(&matcher);
        self.exactly_one(found, describe_text(&matcher))
    }

    /// `Ok(None)` when nothing matches; still an error on several matches
    pub fn query_by_text(
        &self,
        text: impl Into<TextMatch>,
    ) -> Result<Option<ElementRef<'_>>, AssertionFailure> {
        let matcher = text.into();
        let found = self.find_text(&matcher);
        self.at_most_one(found, describe_text(&matcher))
    }

    fn find_text(&self, matcher: &TextMatch) -> Vec<ElementRef<'_>> {
        let doc = &self.document;
        doc.elements_under(doc.body())
            .filter(|id| {
                doc.tag(*id)
                    .is_some_and(|tag| !TEXT_QUERY_IGNORE.contains(&tag))
            })
            .filter(|id| matcher.matches(&normalize(&doc.own_text(*id))))
            .map(|id| doc.element(id))
            .collect()
    }

    // ===== role queries =====

    pub fn query_all_by_role(&self, query: impl Into<ByRole>) -> Vec<ElementRef<'_>> {
        self.find_role(&query.into())
    }

    pub fn get_all_by_role(
        &self,
        query: impl Into<ByRole>,
    ) -> Result<Vec<ElementRef<'_>>, AssertionFailure> {
        let query = query.into();
        let found = self.find_role(&query);
        if found.is_empty() {
            return Err(AssertionFailure::not_found(query.describe(), self.debug()));
        }
        Ok(found)
    }

    pub fn get_by_role(
        &self,
        query: impl Into<ByRole>,
    ) -> Result<ElementRef<'_>, AssertionFailure> {
        let query = query.into();
        let found = self.find_role(&query);
        self.exactly_one(found, query.describe())
    }

    pub fn query_by_role(
        &self,
        query: impl Into<ByRole>,
    ) -> Result<Option<ElementRef<'_>>, AssertionFailure> {
        let query = query.into();
        let found = self.find_role(&query);
        self.at_most_one(found, query.describe())
    }

    fn find_role(&self, query: &ByRole) -> Vec<ElementRef<'_>> {
        let doc = &self.document;
        doc.elements_under(doc.body())
            .filter(|id| query.matches(doc, *id))
            .map(|id| doc.element(id))
            .collect()
    }

    // ===== cardinality =====

    fn exactly_one<'a>(
        &self,
        mut found: Vec<ElementRef<'a>>,
        query: String,
    ) -> Result<ElementRef<'a>, AssertionFailure> {
        match found.len() {
            0 => Err(AssertionFailure::not_found(query, self.debug())),
            1 => Ok(found.remove(0)),
            n => Err(AssertionFailure::multiple(n, query, self.debug())),
        }
    }

    fn at_most_one<'a>(
        &self,
        mut found: Vec<ElementRef<'a>>,
        query: String,
    ) -> Result<Option<ElementRef<'a>>, AssertionFailure> {
        match found.len() {
            0 => Ok(None),
            1 => Ok(Some(found.remove(0))),
            n => Err(AssertionFailure::multiple(n, query, self.debug())),
        }
    }
}

fn describe_text(matcher: &TextMatch) -> String {
    format!("with the text: {}", matcher)
}
