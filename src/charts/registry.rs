//! Process-wide registration of drawable chart elements.
//!
//! The renderer supports a fixed set of scales and elements. They are
//! registered once, on first use, and every [`ChartSpec`](super::ChartSpec)
//! checks its requirements against the registry when it is built.

use dioxus::logger::tracing::debug;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::collections::HashSet;

use super::{ChartError, ChartKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    CategoryScale,
    LinearScale,
    RadialLinearScale,
    PointElement,
    LineElement,
    BarElement,
    ArcElement,
    Filler,
    Tooltip,
    Legend,
    Title,
}

impl ElementKind {
    pub const ALL: [ElementKind; 11] = [
        ElementKind::CategoryScale,
        ElementKind::LinearScale,
        ElementKind::RadialLinearScale,
        ElementKind::PointElement,
        ElementKind::LineElement,
        ElementKind::BarElement,
        ElementKind::ArcElement,
        ElementKind::Filler,
        ElementKind::Tooltip,
        ElementKind::Legend,
        ElementKind::Title,
    ];
}

/// Elements a chart kind draws with.
pub fn requirements(kind: ChartKind) -> &'static [ElementKind] {
    use ElementKind::*;
    match kind {
        ChartKind::Line => &[CategoryScale, LinearScale, PointElement, LineElement, Filler],
        ChartKind::Area => &[CategoryScale, LinearScale, LineElement, Filler, Legend],
        ChartKind::Bar | ChartKind::HorizontalBar => &[CategoryScale, LinearScale, BarElement],
        ChartKind::Doughnut | ChartKind::Pie => &[ArcElement, Legend],
        ChartKind::Radar => &[RadialLinearScale, PointElement, LineElement, Filler, Legend],
    }
}

#[derive(Debug)]
pub struct Registry {
    registered: HashSet<ElementKind>,
}

impl Registry {
    fn with(elements: &[ElementKind]) -> Self {
        Self {
            registered: elements.iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn contains(&self, element: ElementKind) -> bool {
        self.registered.contains(&element)
    }

    pub fn check(&self, kind: ChartKind) -> Result<(), ChartError> {
        match requirements(kind).iter().find(|e| !self.contains(**e)) {
            Some(&element) => Err(ChartError::Unregistered { kind, element }),
            None => Ok(()),
        }
    }
}

static REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Returns the global registry, registering every element on first call.
pub fn elements() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        debug!(count = ElementKind::ALL.len(), "[charts] registering elements");
        Registry::with(&ElementKind::ALL)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_once() {
        let a = elements();
        let b = elements();
        assert!(std::ptr::eq(a, b));
        for e in ElementKind::ALL {
            assert!(a.contains(e));
        }
    }

    #[test]
    fn missing_element_is_reported() {
        let partial = Registry::with(&[ElementKind::ArcElement]);
        assert_eq!(
            partial.check(ChartKind::Pie),
            Err(ChartError::Unregistered {
                kind: ChartKind::Pie,
                element: ElementKind::Legend
            })
        );
        assert!(partial.check(ChartKind::Bar).is_err());
    }
}
