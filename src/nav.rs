//! Active navigation link highlighting.
//!
//! Matching is a plain string prefix test against the current path. It is not
//! segment-aware, so `/bill` matches `/billing`, and `/` matches every path.
//! Every matching anchor is marked; when several ancestors of the current
//! page are linked (`/`, `/users`, `/users/42`) all of them light up.

use crate::config::NavConfig;
use crate::consts;
use crate::error::Result;

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A navigation anchor.
pub trait NavLink {
    /// Attribute value, `None` when the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Add a marker class to the anchor.
    fn add_class(&mut self, class: &str) -> Result<()>;
}

/// Resolve the logical path for an anchor: the path attribute when non-empty,
/// else `href` when non-empty.
pub fn link_path<L: NavLink>(link: &L, path_attr: &str) -> Option<String> {
    link.attribute(path_attr)
        .filter(|p| !p.is_empty())
        .or_else(|| link.attribute(consts::NAV_HREF_ATTR))
        .filter(|p| !p.is_empty())
}

#[must_use]
pub fn is_active(current_path: &str, link_path: &str) -> bool {
    current_path.starts_with(link_path)
}

/// Mark every anchor whose path prefixes `current_path`. Returns the number
/// of anchors marked.
pub fn highlight<L: NavLink>(current_path: &str, links: &mut [L], config: &NavConfig) -> Result<usize> {
    let mut marked = 0;
    for link in links.iter_mut() {
        let Some(path) = link_path(&*link, &config.path_attr) else {
            continue;
        };
        if is_active(current_path, &path) {
            link.add_class(&config.active_class)?;
            marked += 1;
        }
    }
    log::debug!("marked {marked} of {} nav links active for {current_path}", links.len());
    Ok(marked)
}
