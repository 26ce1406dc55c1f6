use std::fmt;

use crate::attribute::AttributeList;

/// A parsed YUML node: namespace-qualified tag, attributes, children, and raw
/// character data. Not yet bound to any component type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Namespace URI; `None` for elements outside any namespace.
    pub namespace: Option<String>,
    /// Local tag name.
    pub name: String,
    pub attributes: AttributeList,
    /// Child elements in document order.
    pub children: Vec<Element>,
    /// Character data found directly inside this element, concatenated.
    pub content: String,
}

impl Element {
    pub fn new(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Namespace lookup key; elements without a namespace use `""`.
    pub fn namespace_or_default(&self) -> &str {
        self.namespace.as_deref().unwrap_or("")
    }

    /// `namespace:name`, or just `name` outside any namespace.
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}:{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Trimmed content, `None` if it is only whitespace.
    pub fn text(&self) -> Option<&str> {
        let t = self.content.trim();
        (!t.is_empty()).then_some(t)
    }

    /// Number of elements in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self
            .attributes
            .iter()
            .map(|a| format!("{}={}", a.name(), a.as_str()))
            .collect();
        let mut out = format!("{} ({})\n", self.qualified_name(), args.join(", "));
        for (i, child) in self.children.iter().enumerate() {
            let symbol = if i == self.children.len() - 1 { '˪' } else { '˫' };
            let nested = child.to_string().replace('\n', "\n  ");
            out.push_str(&format!("  {symbol} {nested}\n"));
        }
        f.write_str(out.trim_end())
    }
}
