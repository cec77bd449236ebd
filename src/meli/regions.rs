//! Search regions recognized by the Mercado Libre listings API.

use serde::Serialize;
use std::fmt;

/// A geographic search-scoping key, passed as the `state` query parameter.
///
/// Region ids are opaque provider identifiers; the set is fixed at startup
/// and never changes during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Region {
    /// Opaque provider identifier.
    pub id: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
}

/// The Buenos Aires area regions, in scan order.
const REGIONS: &[Region] = &[
    Region { id: "TUxBUENPU2ExMmFkMw", name: "Bs.As. Costa Atlántica" },
    Region { id: "TUxBUEdSQWU4ZDkz", name: "Bs.As. G.B.A. Norte" },
    Region { id: "TUxBUEdSQWVmNTVm", name: "Bs.As. G.B.A. Oeste" },
    Region { id: "TUxBUEdSQXJlMDNm", name: "Bs.As. G.B.A. Sur" },
    Region { id: "TUxBUFpPTmFpbnRl", name: "Buenos Aires Interior" },
    Region { id: "TUxBUENBUGw3M2E1", name: "Capital Federal" },
];

impl Region {
    /// Returns every configured region, in the order scans walk them.
    pub fn all() -> &'static [Region] {
        REGIONS
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
