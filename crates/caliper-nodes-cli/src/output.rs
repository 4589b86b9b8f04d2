//! Messages printed on success.

use std::path::Path;

use caliper_nodes_rewrite::RewriteReport;

/// One-line success message, e.g. `Updated caliper.yaml to 4 nodes`.
#[must_use]
pub fn summary(path: &Path, report: &RewriteReport) -> String {
    format!("Updated {} to {} nodes", path.display(), report.nodes)
}

#[cfg(test)]
mod tests {
    use caliper_nodes_common::types::NodeCount;

    use super::*;

    #[test]
    fn summary_names_file_and_count() {
        let report = RewriteReport {
            blocks: 1,
            nodes: NodeCount::new(4).expect("positive count"),
            changed: true,
        };
        assert_eq!(
            summary(Path::new("networks/besu.yaml"), &report),
            "Updated networks/besu.yaml to 4 nodes"
        );
    }
}
