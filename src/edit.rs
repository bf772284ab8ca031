//! Deletion of accepted regions from the content document.

use std::collections::HashSet;

use crate::model::{DocumentXml, EmptyRegion, XmlNode};

/// Remove the body elements at the given indices.
///
/// Indices refer to the body's element sequence (the same sequence the
/// scanners were handed), so any interleaved non-element nodes are mapped
/// over. Removal proceeds from the highest position down so earlier
/// removals cannot invalidate later ones. Indices not present in the
/// current tree are skipped, making removal idempotent. Returns the
/// number of elements actually removed.
pub fn remove_body_elements(doc: &mut DocumentXml, indices: &HashSet<usize>) -> usize {
    let Some(body) = doc.body_mut() else {
        return 0;
    };

    // element ordinal -> position in the child node list
    let element_positions: Vec<usize> = body
        .children
        .iter()
        .enumerate()
        .filter_map(|(position, node)| match node {
            XmlNode::Element(_) => Some(position),
            _ => None,
        })
        .collect();

    let mut positions: Vec<usize> = indices
        .iter()
        .filter_map(|&index| element_positions.get(index).copied())
        .collect();
    positions.sort_unstable_by(|a, b| b.cmp(a));

    let removed = positions.len();
    for position in positions {
        body.children.remove(position);
    }

    if removed > 0 {
        log::info!("removed {removed} body element(s)");
    }
    removed
}

/// Remove every element belonging to the given regions.
pub fn remove_regions(doc: &mut DocumentXml, regions: &[&EmptyRegion]) -> usize {
    let indices: HashSet<usize> = regions
        .iter()
        .flat_map(|region| region.indices.iter().copied())
        .collect();
    remove_body_elements(doc, &indices)
}
