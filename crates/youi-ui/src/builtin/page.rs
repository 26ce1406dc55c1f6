use youi_engine::coords::{Bounds, Size};
use youi_yuml::AttributeList;

use crate::component::{Component, Layout};
use crate::error::FactoryError;

/// Document root.
///
/// Its pixel rectangle is the root bounds of the tree, set through
/// [`Tree::set_root_rect`](crate::tree::Tree::set_root_rect). Every child
/// covers the whole page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Page;

impl Component for Page {
    fn tag(&self) -> &str {
        "Page"
    }

    fn is_container(&self) -> bool {
        true
    }

    fn layout(&self) -> Option<&dyn Layout> {
        Some(self)
    }
}

impl Layout for Page {
    fn child_bounds(&self, _own: Bounds, _root_size: Size) -> Bounds {
        Bounds::UNIT
    }
}

pub(super) fn make_page(_attrs: &AttributeList) -> Result<Box<dyn Component>, FactoryError> {
    Ok(Box::new(Page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;
    use youi_engine::coords::{PixelRect, PixelSize};

    #[test]
    fn children_cover_the_page() {
        let mut tree = Tree::new();
        let page = tree.insert_component(Page);
        tree.set_root(page).unwrap();
        let inner = tree.insert_component(Page);
        tree.append_child(page, inner).unwrap();

        tree.set_root_rect(PixelRect::new(5, 5, 300, 200)).unwrap();
        assert_eq!(tree.bounds(page), Some(Bounds::new(5.0, 5.0, 300.0, 200.0)));
        assert_eq!(tree.bounds(inner), Some(Bounds::UNIT));

        tree.set_root_size(PixelSize::new(100, 100)).unwrap();
        assert_eq!(tree.bounds(page), Some(Bounds::new(5.0, 5.0, 100.0, 100.0)));
    }
}
