//! Reading order of fragments within a page.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::fragment::Fragment;

type CustomOrdering<F> = Box<dyn Fn(Vec<&F>) -> Vec<&F>>;

/// How fragments of a single page are arranged into document order.
///
/// Each page is ordered independently; pages are then concatenated in
/// increasing page number.
pub enum ElementOrdering<F> {
    /// Rows top to bottom, each row left to right. Sort key `(-y1, x0)`.
    LeftToRightTopToBottom,
    /// Rows top to bottom, each row right to left. Sort key `(-y1, -x0)`.
    RightToLeftTopToBottom,
    /// Columns left to right, each column top to bottom. Sort key `(x0, -y1)`.
    TopToBottomLeftToRight,
    /// Columns right to left, each column top to bottom. Sort key `(-x0, -y1)`.
    TopToBottomRightToLeft,
    /// Caller-supplied ordering. Receives one page's fragments and must return
    /// a permutation of them.
    Custom(CustomOrdering<F>),
}

impl<F> ElementOrdering<F> {
    /// Wrap a custom ordering function.
    pub fn custom<G>(f: G) -> Self
    where
        G: Fn(Vec<&F>) -> Vec<&F> + 'static,
    {
        ElementOrdering::Custom(Box::new(f))
    }
}

impl<F> Default for ElementOrdering<F> {
    fn default() -> Self {
        ElementOrdering::LeftToRightTopToBottom
    }
}

impl<F> fmt::Debug for ElementOrdering<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementOrdering::LeftToRightTopToBottom => "LeftToRightTopToBottom",
            ElementOrdering::RightToLeftTopToBottom => "RightToLeftTopToBottom",
            ElementOrdering::TopToBottomLeftToRight => "TopToBottomLeftToRight",
            ElementOrdering::TopToBottomRightToLeft => "TopToBottomRightToLeft",
            ElementOrdering::Custom(_) => "Custom(..)",
        };
        f.write_str(name)
    }
}

fn compare_keys(a: (f64, f64), b: (f64, f64)) -> Ordering {
    a.0.total_cmp(&b.0).then_with(|| a.1.total_cmp(&b.1))
}

impl<F: Fragment> ElementOrdering<F> {
    fn sort_key(&self, fragment: &F) -> (f64, f64) {
        let bbox = fragment.bbox();
        match self {
            ElementOrdering::RightToLeftTopToBottom => (-bbox.y1, -bbox.x0),
            ElementOrdering::TopToBottomLeftToRight => (bbox.x0, -bbox.y1),
            ElementOrdering::TopToBottomRightToLeft => (-bbox.x0, -bbox.y1),
            _ => (-bbox.y1, bbox.x0),
        }
    }

    /// Order one page's fragments, returning positions into `fragments`.
    ///
    /// Preset orderings use a stable sort, so fragments with equal keys keep
    /// their extractor order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidElementOrdering`] if a custom ordering adds,
    /// drops or repeats fragments.
    pub fn order(&self, fragments: &[F]) -> Result<Vec<usize>> {
        if let ElementOrdering::Custom(f) = self {
            return order_custom(f, fragments);
        }
        let keys: Vec<(f64, f64)> = fragments.iter().map(|frag| self.sort_key(frag)).collect();
        let mut positions: Vec<usize> = (0..fragments.len()).collect();
        positions.sort_by(|&a, &b| compare_keys(keys[a], keys[b]));
        Ok(positions)
    }
}

fn order_custom<F>(f: &CustomOrdering<F>, fragments: &[F]) -> Result<Vec<usize>> {
    let lookup: HashMap<*const F, usize> = fragments
        .iter()
        .enumerate()
        .map(|(i, frag)| (frag as *const F, i))
        .collect();
    let ordered = f(fragments.iter().collect());
    if ordered.len() != fragments.len() {
        return Err(Error::InvalidElementOrdering(format!(
            "custom ordering returned {} elements, expected {}",
            ordered.len(),
            fragments.len()
        )));
    }
    let mut seen = vec![false; fragments.len()];
    let mut positions = Vec::with_capacity(ordered.len());
    for frag in ordered {
        let position = lookup
            .get(&(frag as *const F))
            .copied()
            .ok_or_else(|| {
                Error::InvalidElementOrdering(
                    "custom ordering returned an element not on this page".to_string(),
                )
            })?;
        if std::mem::replace(&mut seen[position], true) {
            return Err(Error::InvalidElementOrdering(
                "custom ordering returned an element twice".to_string(),
            ));
        }
        positions.push(position);
    }
    Ok(positions)
}
