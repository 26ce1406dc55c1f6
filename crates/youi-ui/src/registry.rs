use std::collections::HashMap;
use std::fmt;

use youi_yuml::AttributeList;

use crate::component::Component;
use crate::error::{BuildError, FactoryError};

/// Builds a component from the attributes of its YUML element.
///
/// Any `Fn(&AttributeList) -> Result<Box<dyn Component>, FactoryError>` is a factory.
pub trait ComponentFactory {
    fn create(&self, attrs: &AttributeList) -> Result<Box<dyn Component>, FactoryError>;
}

impl<F> ComponentFactory for F
where
    F: Fn(&AttributeList) -> Result<Box<dyn Component>, FactoryError>,
{
    fn create(&self, attrs: &AttributeList) -> Result<Box<dyn Component>, FactoryError> {
        self(attrs)
    }
}

/// Maps namespace-qualified tag names to component factories.
///
/// Elements without a namespace resolve against the empty namespace `""`.
#[derive(Default)]
pub struct Registry {
    namespaces: HashMap<String, HashMap<String, Box<dyn ComponentFactory>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` in `namespace` to `factory`. A later registration of the
    /// same name replaces the earlier one.
    pub fn register(
        &mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        factory: impl ComponentFactory + 'static,
    ) {
        let namespace = namespace.into();
        let name = name.into();
        let components = self.namespaces.entry(namespace.clone()).or_default();
        if components.insert(name.clone(), Box::new(factory)).is_some() {
            log::debug!("registry: replaced factory for {namespace}:{name}");
        } else {
            log::debug!("registry: registered {namespace}:{name}");
        }
    }

    /// Construct the component bound to `namespace:name`.
    pub fn resolve(
        &self,
        namespace: &str,
        name: &str,
        attrs: &AttributeList,
    ) -> Result<Box<dyn Component>, BuildError> {
        let components = self
            .namespaces
            .get(namespace)
            .ok_or_else(|| BuildError::UnknownNamespace { namespace: namespace.to_string() })?;
        let factory = components.get(name).ok_or_else(|| BuildError::UnknownComponent {
            namespace: namespace.to_string(),
            name: name.to_string(),
        })?;
        factory
            .create(attrs)
            .map_err(|source| BuildError::Factory { tag: name.to_string(), source })
    }

    pub fn contains(&self, namespace: &str, name: &str) -> bool {
        self.namespaces
            .get(namespace)
            .is_some_and(|components| components.contains_key(name))
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Registered tag names in `namespace`, sorted.
    pub fn components(&self, namespace: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .namespaces
            .get(namespace)
            .map(|components| components.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (namespace, components) in &self.namespaces {
            let mut names: Vec<&String> = components.keys().collect();
            names.sort_unstable();
            map.entry(namespace, &names);
        }
        map.finish()
    }
}
