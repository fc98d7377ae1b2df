//! Sidebar navigation tree.
//!
//! A sidebar is a list of titled sections, each holding a tree of nodes. A
//! node is either a leaf (a link) or a group with children; groups nest to
//! any depth.

use serde::{Deserialize, Serialize};

/// Menu icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    LayoutDashboard,
    ShoppingBag,
    PartyPopper,
    User,
}

impl Icon {
    /// Short name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "layout_dashboard",
            Icon::ShoppingBag => "shopping_bag",
            Icon::PartyPopper => "party_popper",
            Icon::User => "user",
        }
    }
}

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavNode {
    /// An entry with a submenu.
    Group {
        title: String,
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<Icon>,
        children: Vec<NavNode>,
    },
    /// A plain link.
    Leaf {
        title: String,
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<Icon>,
    },
}

impl NavNode {
    pub fn leaf(title: impl Into<String>, path: impl Into<String>) -> Self {
        NavNode::Leaf {
            title: title.into(),
            path: path.into(),
            icon: None,
        }
    }

    pub fn group(
        title: impl Into<String>,
        path: impl Into<String>,
        children: impl IntoIterator<Item = NavNode>,
    ) -> Self {
        NavNode::Group {
            title: title.into(),
            path: path.into(),
            icon: None,
            children: children.into_iter().collect(),
        }
    }

    /// Set the icon.
    pub fn with_icon(mut self, new_icon: Icon) -> Self {
        match &mut self {
            NavNode::Leaf { icon, .. } | NavNode::Group { icon, .. } => *icon = Some(new_icon),
        }
        self
    }

    pub fn title(&self) -> &str {
        match self {
            NavNode::Leaf { title, .. } | NavNode::Group { title, .. } => title,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            NavNode::Leaf { path, .. } | NavNode::Group { path, .. } => path,
        }
    }

    pub fn icon(&self) -> Option<Icon> {
        match self {
            NavNode::Leaf { icon, .. } | NavNode::Group { icon, .. } => *icon,
        }
    }

    /// Child nodes; empty for leaves.
    pub fn children(&self) -> &[NavNode] {
        match self {
            NavNode::Leaf { .. } => &[],
            NavNode::Group { children, .. } => children,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, NavNode::Group { .. })
    }

    /// Returns `true` if this node or any descendant links to `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        self.path() == path || self.children().iter().any(|c| c.contains_path(path))
    }

    /// Titles from this node down to the node linking to `path`.
    pub fn breadcrumbs(&self, path: &str) -> Option<Vec<&str>> {
        if self.path() == path {
            return Some(vec![self.title()]);
        }
        self.children().iter().find_map(|child| {
            let mut trail = child.breadcrumbs(path)?;
            trail.insert(0, self.title());
            Some(trail)
        })
    }

    fn walk_into<'a>(&'a self, section: &'a str, depth: usize, out: &mut Vec<FlatNode<'a>>) {
        out.push(FlatNode {
            node: self,
            section,
            depth,
        });
        for child in self.children() {
            child.walk_into(section, depth + 1, out);
        }
    }
}

/// A titled group of top-level nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    pub title: String,
    pub items: Vec<NavNode>,
}

impl NavSection {
    pub fn new(title: impl Into<String>, items: impl IntoIterator<Item = NavNode>) -> Self {
        Self {
            title: title.into(),
            items: items.into_iter().collect(),
        }
    }
}

/// A node in the flattened tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatNode<'a> {
    /// The node itself.
    pub node: &'a NavNode,
    /// Title of the section the node belongs to.
    pub section: &'a str,
    /// Depth in the tree (0 = top-level item).
    pub depth: usize,
}

/// The whole sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebar {
    pub sections: Vec<NavSection>,
}

impl Sidebar {
    pub fn new(sections: impl IntoIterator<Item = NavSection>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
        }
    }

    /// Parse a sidebar from a JSON array of sections.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Every node, pre-order, section by section.
    pub fn walk(&self) -> Vec<FlatNode<'_>> {
        let mut out = Vec::new();
        for section in &self.sections {
            for item in &section.items {
                item.walk_into(&section.title, 0, &mut out);
            }
        }
        out
    }

    /// Every leaf, in pre-order.
    pub fn leaves(&self) -> Vec<&NavNode> {
        self.walk()
            .into_iter()
            .map(|flat| flat.node)
            .filter(|node| !node.is_group())
            .collect()
    }

    /// First node linking to `path`.
    pub fn find_by_path(&self, path: &str) -> Option<&NavNode> {
        self.walk()
            .into_iter()
            .map(|flat| flat.node)
            .find(|node| node.path() == path)
    }

    /// Titles from the top-level item down to the node linking to `path`.
    pub fn breadcrumbs(&self, path: &str) -> Option<Vec<&str>> {
        self.sections
            .iter()
            .flat_map(|section| &section.items)
            .find_map(|item| item.breadcrumbs(path))
    }

    /// Returns `true` if any node links to `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        self.sections
            .iter()
            .flat_map(|section| &section.items)
            .any(|item| item.contains_path(path))
    }
}

/// The built-in back-office sidebar.
pub fn default_sidebar() -> Sidebar {
    Sidebar::new([
        NavSection::new(
            "Dashboard",
            [
                NavNode::leaf("Dashboard", "/").with_icon(Icon::LayoutDashboard),
                NavNode::group(
                    "Products",
                    "/products",
                    [
                        NavNode::leaf("All", "/products/all"),
                        NavNode::leaf("New", "/products/new"),
                    ],
                )
                .with_icon(Icon::ShoppingBag),
                NavNode::leaf("Orders", "/orders").with_icon(Icon::PartyPopper),
            ],
        ),
        NavSection::new(
            "User",
            [NavNode::group(
                "UserManagement",
                "/user-management",
                [
                    NavNode::leaf("User", "/user-management/user"),
                    NavNode::leaf("Role", "/user-management/role"),
                ],
            )
            .with_icon(Icon::User)],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_breadcrumbs_nested() {
        let tree = NavNode::group(
            "A",
            "/a",
            [NavNode::group("B", "/a/b", [NavNode::leaf("C", "/a/b/c")])],
        );
        assert_eq!(tree.breadcrumbs("/a/b/c"), Some(vec!["A", "B", "C"]));
        assert_eq!(tree.breadcrumbs("/x"), None);
        assert!(tree.contains_path("/a/b"));
    }

    #[test]
    fn test_with_icon() {
        let node = NavNode::leaf("Orders", "/orders").with_icon(Icon::PartyPopper);
        assert_eq!(node.icon(), Some(Icon::PartyPopper));
        assert_eq!(Icon::PartyPopper.name(), "party_popper");
    }
}
