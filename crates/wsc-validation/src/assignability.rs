//! Interface-hierarchy reachability

use crate::{Error, Result};
use std::collections::HashSet;
use wsc_model::TypeHierarchy;

/// Whether `source` is `target` or transitively extends it
///
/// Walks the superinterface graph depth-first. Types the hierarchy does not
/// know about have no superinterfaces.
///
/// # Errors
///
/// Returns [`Error::CyclicHierarchy`] when the walk revisits a type on its
/// current path.
pub fn is_assignable<H>(hierarchy: &H, source: &str, target: &str) -> Result<bool>
where
    H: TypeHierarchy + ?Sized,
{
    let mut path = Vec::new();
    let mut exhausted = HashSet::new();
    walk(hierarchy, source, target, &mut path, &mut exhausted)
}

fn walk<'h, H>(
    hierarchy: &'h H,
    current: &'h str,
    target: &str,
    path: &mut Vec<&'h str>,
    exhausted: &mut HashSet<&'h str>,
) -> Result<bool>
where
    H: TypeHierarchy + ?Sized,
{
    if current == target {
        return Ok(true);
    }
    if path.contains(&current) {
        return Err(Error::cyclic_hierarchy(current));
    }
    if exhausted.contains(current) {
        return Ok(false);
    }

    let Some(superinterfaces) = hierarchy.superinterfaces(current) else {
        return Ok(false);
    };

    path.push(current);
    for superinterface in superinterfaces {
        if walk(hierarchy, superinterface, target, path, exhausted)? {
            path.pop();
            return Ok(true);
        }
    }
    path.pop();
    exhausted.insert(current);

    Ok(false)
}
