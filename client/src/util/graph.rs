//! Layout engine for the service dependency diagram.
//!
//! DESIGN
//! ======
//! Services are placed in columns by longest dependency path, so every
//! service sits to the right of everything it depends on. Rows within a column
//! follow catalog order. Cycles are broken by ignoring the edge that closes
//! them (found by depth-first search in catalog order); such edges are still
//! drawn but flagged as back edges. Dependencies that name no known service
//! become placeholder nodes in the first column.
//!
//! The result is plain geometry; [`render_svg`] turns it into inline SVG.

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;

use crate::net::types::catalog::ServiceInfo;

// Layout constants (in SVG user units).
const NODE_W: f64 = 160.0;
const NODE_H: f64 = 44.0;
const LAYER_GAP: f64 = 80.0;
const ROW_GAP: f64 = 20.0;
const PADDING: f64 = 16.0;

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
    pub name: String,
    pub layer: usize,
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Named as a dependency but missing from the catalog.
    pub placeholder: bool,
    pub status: Option<String>,
}

/// An edge from a service to one of its dependencies.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub points: Vec<(f64, f64)>,
    pub back_edge: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphLayout {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub width: f64,
    pub height: f64,
}

impl GraphLayout {
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.name == name)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Fresh,
    Active,
    Done,
}

struct Builder {
    names: Vec<String>,
    deps: Vec<Vec<usize>>,
    index: HashMap<String, usize>,
    placeholder: Vec<bool>,
    status: Vec<Option<String>>,
}

impl Builder {
    fn new(services: &[ServiceInfo]) -> Self {
        let mut builder =
            Self { names: Vec::new(), deps: Vec::new(), index: HashMap::new(), placeholder: Vec::new(), status: Vec::new() };
        for service in services {
            if !builder.index.contains_key(&service.name) {
                builder.add(&service.name, false, service.status.clone());
            }
        }
        let mut seen = HashSet::new();
        for service in services {
            if !seen.insert(service.name.as_str()) {
                continue;
            }
            let Some(&from) = builder.index.get(&service.name) else {
                continue;
            };
            let mut deps = Vec::new();
            for dep in &service.depends_on {
                let dep = dep.trim();
                if dep.is_empty() {
                    continue;
                }
                let to = match builder.index.get(dep) {
                    Some(&i) => i,
                    None => builder.add(dep, true, None),
                };
                if !deps.contains(&to) {
                    deps.push(to);
                }
            }
            builder.deps[from] = deps;
        }
        builder
    }

    fn add(&mut self, name: &str, placeholder: bool, status: Option<String>) -> usize {
        let i = self.names.len();
        self.names.push(name.to_owned());
        self.deps.push(Vec::new());
        self.index.insert(name.to_owned(), i);
        self.placeholder.push(placeholder);
        self.status.push(status);
        i
    }

    /// Longest-path layer per node plus the set of back edges `(from, to)`.
    fn layers(&self) -> (Vec<usize>, Vec<(usize, usize)>) {
        let n = self.names.len();
        let mut visit = vec![Visit::Fresh; n];
        let mut layer = vec![0; n];
        let mut back = Vec::new();
        for start in 0..n {
            self.visit(start, &mut visit, &mut layer, &mut back);
        }
        (layer, back)
    }

    fn visit(&self, node: usize, visit: &mut [Visit], layer: &mut [usize], back: &mut Vec<(usize, usize)>) {
        if visit[node] != Visit::Fresh {
            return;
        }
        visit[node] = Visit::Active;
        let mut depth = 0;
        for &dep in &self.deps[node] {
            match visit[dep] {
                Visit::Active => back.push((node, dep)),
                Visit::Fresh | Visit::Done => {
                    self.visit(dep, visit, layer, back);
                    depth = depth.max(layer[dep] + 1);
                }
            }
        }
        layer[node] = depth;
        visit[node] = Visit::Done;
    }
}

/// Lay out the dependency graph of `services`.
#[must_use]
pub fn layout_graph(services: &[ServiceInfo]) -> GraphLayout {
    let builder = Builder::new(services);
    if builder.names.is_empty() {
        return GraphLayout::default();
    }
    let (layers, back) = builder.layers();

    let layer_count = layers.iter().max().map_or(0, |m| m + 1);
    let mut rows_in_layer = vec![0usize; layer_count];
    let mut nodes = Vec::with_capacity(builder.names.len());
    for (i, name) in builder.names.iter().enumerate() {
        let layer = layers[i];
        let row = rows_in_layer[layer];
        rows_in_layer[layer] += 1;
        #[allow(clippy::cast_precision_loss)]
        let (x, y) = (
            PADDING + layer as f64 * (NODE_W + LAYER_GAP),
            PADDING + row as f64 * (NODE_H + ROW_GAP),
        );
        nodes.push(GraphNode {
            name: name.clone(),
            layer,
            row,
            x,
            y,
            width: NODE_W,
            height: NODE_H,
            placeholder: builder.placeholder[i],
            status: builder.status[i].clone(),
        });
    }

    let mut edges = Vec::new();
    for (from, deps) in builder.deps.iter().enumerate() {
        for &to in deps {
            let back_edge = back.contains(&(from, to));
            edges.push(GraphEdge {
                from: nodes[from].name.clone(),
                to: nodes[to].name.clone(),
                points: route(&nodes[from], &nodes[to], back_edge),
                back_edge,
            });
        }
    }

    let max_rows = rows_in_layer.iter().copied().max().unwrap_or(0);
    #[allow(clippy::cast_precision_loss)]
    let (width, height) = (
        PADDING * 2.0 + layer_count as f64 * NODE_W + layer_count.saturating_sub(1) as f64 * LAYER_GAP,
        PADDING * 2.0 + max_rows as f64 * NODE_H + max_rows.saturating_sub(1) as f64 * ROW_GAP,
    );

    GraphLayout { nodes, edges, width, height }
}

/// Elbow from the dependent's left side to the dependency's right side.
fn route(from: &GraphNode, to: &GraphNode, back_edge: bool) -> Vec<(f64, f64)> {
    let start = (from.x, from.y + from.height / 2.0);
    let end = (to.x + to.width, to.y + to.height / 2.0);
    if back_edge || end.0 >= start.0 {
        return vec![start, end];
    }
    let mid = (start.0 + end.0) / 2.0;
    vec![start, (mid, start.1), (mid, end.1), end]
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

/// Render a layout as a standalone `<svg>` element.
#[must_use]
pub fn render_svg(layout: &GraphLayout) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="dependency-graph" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = layout.width,
        h = layout.height,
    );
    svg.push_str(
        r#"<defs><marker id="dep-arrow" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="6" markerHeight="6" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 z"/></marker></defs>"#,
    );
    for edge in &layout.edges {
        let points: Vec<String> = edge.points.iter().map(|(x, y)| format!("{x},{y}")).collect();
        let class = if edge.back_edge { "edge back-edge" } else { "edge" };
        let _ = write!(
            svg,
            r#"<polyline class="{class}" points="{}" fill="none" marker-end="url(#dep-arrow)"><title>{} → {}</title></polyline>"#,
            points.join(" "),
            escape(&edge.from),
            escape(&edge.to),
        );
    }
    for node in &layout.nodes {
        let mut class = String::from("node");
        if node.placeholder {
            class.push_str(" placeholder");
        }
        if let Some(status) = &node.status {
            let _ = write!(class, " status-{}", escape(&status.to_lowercase().replace(' ', "-")));
        }
        let _ = write!(
            svg,
            r#"<g class="{class}"><rect x="{x}" y="{y}" width="{w}" height="{h}" rx="6"/><text x="{tx}" y="{ty}" text-anchor="middle" dominant-baseline="middle">{name}</text></g>"#,
            x = node.x,
            y = node.y,
            w = node.width,
            h = node.height,
            tx = node.x + node.width / 2.0,
            ty = node.y + node.height / 2.0,
            name = escape(&super::format::truncate(&node.name, 22)),
        );
    }
    svg.push_str("</svg>");
    svg
}
