use youi_yuml::Element;

use crate::error::BuildError;
use crate::registry::Registry;
use crate::tree::{ComponentId, Tree};

/// Turns parsed YUML elements into components.
#[derive(Debug, Clone, Copy)]
pub struct Builder<'r> {
    registry: &'r Registry,
}

impl<'r> Builder<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Build a fresh tree rooted at `root`'s component.
    pub fn build(&self, root: &Element) -> Result<Tree, BuildError> {
        let mut tree = Tree::new();
        let id = self.build_into(&mut tree, root)?;
        tree.set_root(id)?;
        log::debug!("builder: built tree of {} components", tree.len());
        Ok(tree)
    }

    /// Build `element` into `tree` as a detached subtree.
    ///
    /// On failure nothing built by this call remains in `tree`.
    pub fn build_into(&self, tree: &mut Tree, element: &Element) -> Result<ComponentId, BuildError> {
        let component = self.registry.resolve(
            element.namespace_or_default(),
            &element.name,
            &element.attributes,
        )?;
        let id = tree.insert(component);
        log::trace!("builder: <{}> constructed", element.qualified_name());

        for child in &element.children {
            if let Err(err) = self.attach_child(tree, id, child) {
                tree.dispose(id)?;
                return Err(BuildError::Build { parent: element.name.clone(), source: Box::new(err) });
            }
        }
        Ok(id)
    }

    fn attach_child(&self, tree: &mut Tree, parent: ComponentId, child: &Element) -> Result<(), BuildError> {
        let id = self.build_into(tree, child)?;
        if let Err(err) = tree.append_child(parent, id) {
            tree.dispose(id)?;
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::error::{FactoryError, TreeError};
    use youi_yuml::AttributeList;

    #[derive(Debug)]
    struct Node(&'static str, bool);

    impl Component for Node {
        fn tag(&self) -> &str {
            self.0
        }
        fn is_container(&self) -> bool {
            self.1
        }
    }

    fn box_node(tag: &'static str, container: bool) -> impl Fn(&AttributeList) -> Result<Box<dyn Component>, FactoryError> {
        move |_: &AttributeList| -> Result<Box<dyn Component>, FactoryError> { Ok(Box::new(Node(tag, container))) }
    }

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.register("", "Box", box_node("Box", true));
        registry.register("", "Dot", box_node("Dot", false));
        registry.register("", "Broken", |_: &AttributeList| -> Result<Box<dyn Component>, FactoryError> {
            Err(FactoryError::Invalid("always fails".into()))
        });
        registry
    }

    fn el(name: &str) -> Element {
        Element::new(None, name)
    }

    #[test]
    fn mirrors_element_order() {
        let registry = registry();
        let doc = el("Box").with_child(el("Dot")).with_child(el("Box").with_child(el("Dot"))).with_child(el("Dot"));
        let tree = Builder::new(&registry).build(&doc).unwrap();
        let root = tree.root().unwrap();
        let tags: Vec<&str> = tree
            .children(root)
            .iter()
            .map(|&id| tree.component(id).unwrap().tag())
            .collect();
        assert_eq!(tags, vec!["Dot", "Box", "Dot"]);
        assert_eq!(tree.children(tree.children(root)[1]).len(), 1);
        assert_eq!(tree.len(), doc.count());
    }

    #[test]
    fn failing_child_leaves_nothing_behind() {
        let registry = registry();
        let mut tree = Tree::new();
        let doc = el("Box").with_child(el("Dot")).with_child(el("Box").with_child(el("Broken")));
        let err = Builder::new(&registry).build_into(&mut tree, &doc).unwrap_err();
        assert_eq!(err.path(), vec!["Box", "Box"]);
        assert!(matches!(err.root_cause(), BuildError::Factory { tag, .. } if tag == "Broken"));
        assert!(tree.is_empty());
    }

    #[test]
    fn children_of_leaves_are_rejected() {
        let registry = registry();
        let doc = el("Box").with_child(el("Dot").with_child(el("Dot")));
        let err = Builder::new(&registry).build(&doc).unwrap_err();
        assert_eq!(err.path(), vec!["Box", "Dot"]);
        assert!(matches!(
            err.root_cause(),
            BuildError::Tree(TreeError::NotAContainer { tag }) if tag == "Dot"
        ));
    }

    #[test]
    fn build_into_keeps_existing_nodes() {
        let registry = registry();
        let mut tree = Tree::new();
        let first = Builder::new(&registry).build_into(&mut tree, &el("Dot")).unwrap();
        let _ = Builder::new(&registry).build_into(&mut tree, &el("Box").with_child(el("Broken")));
        assert_eq!(tree.len(), 1);
        assert!(tree.contains(first));
    }
}
