//! Per-render package bookkeeping.

use std::collections::BTreeSet;

/// Optional LaTeX packages that rendered features may depend on.
///
/// The declaration order is the order in which `\usepackage` lines are
/// emitted, independent of where the features appear in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Package {
    /// `lstlisting` environments for fenced code
    Listings,
    /// `\includegraphics` for images
    Graphicx,
    /// `displayquote` environments for block quotes
    Csquotes,
}

impl Package {
    /// The package name as written in `\usepackage{...}`.
    pub fn name(self) -> &'static str {
        match self {
            Package::Listings => "listings",
            Package::Graphicx => "graphicx",
            Package::Csquotes => "csquotes",
        }
    }
}

/// State threaded through one render call.
///
/// Created empty at the start of a render, filled in as features are
/// rendered, and consulted once when the preamble is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    packages: BTreeSet<Package>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the output needs `package`.
    pub fn require(&mut self, package: Package) {
        self.packages.insert(package);
    }

    pub fn requires(&self, package: Package) -> bool {
        self.packages.contains(&package)
    }

    /// Required packages in emission order.
    pub fn packages(&self) -> impl Iterator<Item = Package> + '_ {
        self.packages.iter().copied()
    }
}
