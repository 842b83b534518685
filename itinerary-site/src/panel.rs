//! Named mount points on the page and the content rendered into them.

use crate::html::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mount {
    Map,
    AreaMap,
    StayList,
    RouteChain,
    RouteToggle,
    ExploreTitle,
    AreaMeta,
    PoiList,
    LightBox,
    Gallery,
    BudgetTotals,
    BudgetTable,
}

impl Mount {
    /// Element id on the page.
    pub fn id(&self) -> &'static str {
        match self {
            Mount::Map => "map",
            Mount::AreaMap => "areaMap",
            Mount::StayList => "stayList",
            Mount::RouteChain => "routeChain",
            Mount::RouteToggle => "routeToggle",
            Mount::ExploreTitle => "exploreTitle",
            Mount::AreaMeta => "areaMeta",
            Mount::PoiList => "poiList",
            Mount::LightBox => "lightBox",
            Mount::Gallery => "gallery",
            Mount::BudgetTotals => "budgetTotals",
            Mount::BudgetTable => "budgetTable",
        }
    }
}

/// Content for one mount point. Replaces whatever was there before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub mount: Mount,
    pub nodes: Vec<Node>,
}

impl Panel {
    pub fn new(mount: Mount, nodes: Vec<Node>) -> Self {
        Self { mount, nodes }
    }

    pub fn text(mount: Mount, text: impl Into<String>) -> Self {
        Self::new(mount, vec![Node::text(text)])
    }

    pub fn html(&self) -> String {
        self.nodes.iter().map(Node::to_html).collect()
    }

    pub fn text_content(&self) -> String {
        self.nodes.iter().map(Node::text_content).collect()
    }
}

/// Panels keyed by mount, later writes replacing earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panels {
    panels: Vec<Panel>,
}

impl Panels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, panel: Panel) {
        match self.panels.iter_mut().find(|p| p.mount == panel.mount) {
            Some(existing) => *existing = panel,
            None => self.panels.push(panel),
        }
    }

    pub fn extend(&mut self, panels: impl IntoIterator<Item = Panel>) {
        for p in panels {
            self.set(p);
        }
    }

    pub fn get(&self, mount: Mount) -> Option<&Panel> {
        self.panels.iter().find(|p| p.mount == mount)
    }

    /// Serialized content for a mount; empty when nothing was rendered there.
    pub fn html(&self, mount: Mount) -> String {
        self.get(mount).map(Panel::html).unwrap_or_default()
    }

    pub fn text(&self, mount: Mount) -> String {
        self.get(mount).map(Panel::text_content).unwrap_or_default()
    }
}
