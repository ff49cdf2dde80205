//! Hierarchical charts: sunburst and treemap.

use std::collections::HashSet;

use super::common::{Encoded, Theme, base_layout};
use crate::core::{BranchValues, Hierarchy, HierarchyKind};
use crate::{ChartError, Result};
use error_stack::Report;
use serde_json::json;

pub fn encode_hierarchy(hierarchy: &Hierarchy, theme: &Theme) -> Result<Encoded> {
    let labels: HashSet<&str> = hierarchy.nodes.iter().map(|n| n.label.as_str()).collect();
    if let Some(orphan) = hierarchy
        .nodes
        .iter()
        .find(|n| !n.parent.is_empty() && !labels.contains(n.parent.as_str()))
    {
        return Err(Report::new(ChartError::UnknownParent {
            label: orphan.label.clone(),
            parent: orphan.parent.clone(),
        }));
    }

    let trace_type = match hierarchy.kind {
        HierarchyKind::Sunburst => "sunburst",
        HierarchyKind::Treemap => "treemap",
    };
    let branch_values = match hierarchy.branch_values {
        BranchValues::Remainder => "remainder",
        BranchValues::Total => "total",
    };

    let trace = json!({
        "type": trace_type,
        "labels": hierarchy.nodes.iter().map(|n| &n.label).collect::<Vec<_>>(),
        "parents": hierarchy.nodes.iter().map(|n| &n.parent).collect::<Vec<_>>(),
        "values": hierarchy.nodes.iter().map(|n| n.value).collect::<Vec<_>>(),
        "branchvalues": branch_values,
    });

    Ok(Encoded {
        data: vec![trace],
        layout: base_layout(&hierarchy.meta, theme),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HierarchyNode, PlotMeta};
    use crate::render::PlotId;

    fn node(label: &str, parent: &str, value: f64) -> HierarchyNode {
        HierarchyNode {
            label: label.into(),
            parent: parent.into(),
            value,
        }
    }

    fn tree(kind: HierarchyKind, nodes: Vec<HierarchyNode>) -> Hierarchy {
        Hierarchy {
            id: PlotId::new(),
            meta: PlotMeta::default(),
            kind,
            nodes,
            branch_values: BranchValues::default(),
        }
    }

    #[test]
    fn parents_stay_aligned_with_labels() {
        let h = tree(
            HierarchyKind::Sunburst,
            vec![node("A", "", 10.0), node("B", "A", 20.0), node("C", "A", 30.0)],
        );
        let encoded = encode_hierarchy(&h, &Theme::default()).unwrap();
        let trace = &encoded.data[0];
        assert_eq!(trace["type"], "sunburst");
        assert_eq!(trace["labels"], json!(["A", "B", "C"]));
        assert_eq!(trace["parents"], json!(["", "A", "A"]));
        assert_eq!(trace["branchvalues"], "remainder");
    }

    #[test]
    fn treemap_total_branches() {
        let mut h = tree(HierarchyKind::Treemap, vec![node("root", "", 3.0)]);
        h.branch_values = BranchValues::Total;
        let trace = &encode_hierarchy(&h, &Theme::default()).unwrap().data[0];
        assert_eq!(trace["type"], "treemap");
        assert_eq!(trace["branchvalues"], "total");
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let h = tree(
            HierarchyKind::Treemap,
            vec![node("A", "", 1.0), node("B", "Z", 1.0)],
        );
        let err = encode_hierarchy(&h, &Theme::default()).unwrap_err();
        match err.current_context() {
            ChartError::UnknownParent { label, parent } => {
                assert_eq!(label, "B");
                assert_eq!(parent, "Z");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
