// Mon Jan 19 2026 - Alex

use crate::config::GraphConfig;
use crate::reflect::{resolve, Reflect, Shape};
use crate::structure::{MemberEnumerator, ReflectError, TypeDesc, VisitError, VisitedSet};
use std::convert::Infallible;

/// Depth-first walk over every distinct node reachable from a root.
///
/// Each node is entered at most once per walk; the callback runs before the
/// node's members or elements are explored. Members whose getter fails are
/// skipped.
pub struct GraphVisitor<'c> {
    config: &'c GraphConfig,
    visited: VisitedSet,
    depth: usize,
}

impl<'c> GraphVisitor<'c> {
    pub fn new(config: &'c GraphConfig) -> Self {
        Self {
            config,
            visited: VisitedSet::new(),
            depth: 0,
        }
    }

    pub fn visited(&self) -> usize {
        self.visited.len()
    }

    pub fn walk<E, F>(&mut self, value: &dyn Reflect, on_node: &mut F) -> Result<(), VisitError<E>>
    where
        F: FnMut(&dyn Reflect) -> Result<(), E>,
    {
        match resolve(value, |node| match node {
            Some(node) => self.enter(node, on_node),
            None => Ok(()),
        }) {
            Ok(result) => result,
            Err(e) => {
                log::debug!("Skipping unreadable {}: {}", value.type_desc(), e);
                Ok(())
            }
        }
    }

    fn enter<E, F>(&mut self, node: &dyn Reflect, on_node: &mut F) -> Result<(), VisitError<E>>
    where
        F: FnMut(&dyn Reflect) -> Result<(), E>,
    {
        if !self.visited.insert(node) {
            log::trace!("Already visited {}", node.type_desc());
            return Ok(());
        }

        log::trace!("Visiting {}", node.type_desc());
        on_node(node).map_err(VisitError::Callback)?;

        match node.shape() {
            Shape::Composite(source) => {
                self.descend()?;
                let members =
                    MemberEnumerator::members(&node.type_desc(), source, self.config.cache_members);
                for member in members.iter() {
                    match member.read(node) {
                        Ok(value) => self.walk(value, on_node)?,
                        Err(e) => log::debug!("Skipping member {}: {}", member.name(), e),
                    }
                }
                self.depth -= 1;
            }
            Shape::Sequence(elements) => {
                self.descend()?;
                for element in elements {
                    self.walk(element, on_node)?;
                }
                self.depth -= 1;
            }
            Shape::Leaf(_) | Shape::Null | Shape::Indirect(_) => {}
        }

        Ok(())
    }

    fn descend(&mut self) -> Result<(), ReflectError> {
        self.depth += 1;
        if !self.config.allows_depth(self.depth) {
            let max = self.config.max_depth.unwrap_or(self.depth);
            self.depth -= 1;
            return Err(ReflectError::DepthExceeded(max));
        }
        Ok(())
    }
}

/// Invoke `on_node` once for every distinct node reachable from `root`.
pub fn visit<E, F>(root: &dyn Reflect, on_node: F) -> Result<(), VisitError<E>>
where
    F: FnMut(&dyn Reflect) -> Result<(), E>,
{
    visit_with(&GraphConfig::default(), root, on_node)
}

pub fn visit_with<E, F>(
    config: &GraphConfig,
    root: &dyn Reflect,
    mut on_node: F,
) -> Result<(), VisitError<E>>
where
    F: FnMut(&dyn Reflect) -> Result<(), E>,
{
    GraphVisitor::new(config).walk(root, &mut on_node)
}

/// Like [`visit`], but only nodes whose runtime type is `T` reach the callback.
pub fn visit_typed<T, E, F>(root: &dyn Reflect, mut on_node: F) -> Result<(), VisitError<E>>
where
    T: Reflect,
    F: FnMut(&T) -> Result<(), E>,
{
    visit(root, |node| match node.as_any().downcast_ref::<T>() {
        Some(node) => on_node(node),
        None => Ok(()),
    })
}

/// Infallible visit.
pub fn visit_all<F>(root: &dyn Reflect, mut on_node: F)
where
    F: FnMut(&dyn Reflect),
{
    let result = visit::<Infallible, _>(root, |node| {
        on_node(node);
        Ok(())
    });
    if let Err(e) = result {
        log::warn!("Visit ended early: {}", e);
    }
}

/// Runtime types of every visited node, in visitation order.
pub fn collect_nodes(root: &dyn Reflect) -> Vec<TypeDesc> {
    let mut nodes = Vec::new();
    visit_all(root, |node| nodes.push(node.type_desc()));
    nodes
}

pub fn count_nodes(root: &dyn Reflect) -> usize {
    let mut count = 0;
    visit_all(root, |_| count += 1);
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::LoggingUtils;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Node {
        label: String,
        next: RefCell<Option<Rc<Node>>>,
    }

    crate::impl_composite!(Node { label, next });

    struct Team {
        name: String,
        lead: Rc<Node>,
        members: Vec<Rc<Node>>,
    }

    crate::impl_composite!(Team { name, lead, members });

    fn node(label: &str) -> Rc<Node> {
        Rc::new(Node {
            label: label.to_string(),
            next: RefCell::new(None),
        })
    }

    #[test]
    fn test_null_root_is_noop() {
        let root: Option<Rc<Node>> = None;
        assert_eq!(count_nodes(&root), 0);
    }

    #[test]
    fn test_self_cycle_visits_once() {
        LoggingUtils::init_test_logger();
        let a = node("a");
        *a.next.borrow_mut() = Some(a.clone());

        let mut hits = 0;
        visit_typed::<Node, Infallible, _>(&a, |_| {
            hits += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(hits, 1);

        a.next.borrow_mut().take();
    }

    #[test]
    fn test_shared_node_visited_once() {
        let shared = node("shared");
        let team = Team {
            name: "core".to_string(),
            lead: shared.clone(),
            members: vec![shared.clone(), node("other"), shared.clone()],
        };

        let mut labels = Vec::new();
        visit_typed::<Node, Infallible, _>(&team, |n| {
            labels.push(n.label.clone());
            Ok(())
        })
        .unwrap();
        assert_eq!(labels, vec!["shared", "other"]);
    }

    #[test]
    fn test_visit_order_is_preorder() {
        let team = Team {
            name: "t".to_string(),
            lead: node("lead"),
            members: Vec::new(),
        };
        let nodes = collect_nodes(&team);
        let names: Vec<_> = nodes.iter().map(|d| d.name()).collect();

        assert_eq!(names[0], TypeDesc::of::<Team>().name());
        assert_eq!(names[1], TypeDesc::of::<String>().name());
        assert_eq!(names[2], TypeDesc::of::<Node>().name());
        // lead.label, lead.next is null, then the empty members vector
        assert_eq!(names[3], TypeDesc::of::<String>().name());
        assert_eq!(names[4], TypeDesc::of::<Vec<Rc<Node>>>().name());
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_callback_error_aborts() {
        let team = Team {
            name: "t".to_string(),
            lead: node("a"),
            members: vec![node("b"), node("c")],
        };

        let mut seen = 0;
        let result = visit_typed::<Node, String, _>(&team, |n| {
            seen += 1;
            if n.label == "b" {
                Err(format!("stop at {}", n.label))
            } else {
                Ok(())
            }
        });

        assert_eq!(result.unwrap_err().into_callback(), Some("stop at b".to_string()));
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_unreadable_member_is_skipped() {
        let a = node("a");
        let b = node("b");
        *a.next.borrow_mut() = Some(b.clone());

        let _busy = a.next.borrow_mut();
        let mut labels = Vec::new();
        visit_typed::<Node, Infallible, _>(&a, |n| {
            labels.push(n.label.clone());
            Ok(())
        })
        .unwrap();
        assert_eq!(labels, vec!["a"]);
    }

    #[test]
    fn test_depth_limit() {
        let a = node("a");
        let b = node("b");
        *a.next.borrow_mut() = Some(b);

        let config = GraphConfig::new().with_max_depth(1);
        let result = visit_with::<Infallible, _>(&config, &a, |_| Ok(()));
        assert!(matches!(result, Err(VisitError::Graph(ReflectError::DepthExceeded(1)))));

        let relaxed = GraphConfig::new().with_max_depth(2);
        assert!(visit_with::<Infallible, _>(&relaxed, &a, |_| Ok(())).is_ok());
    }
}
