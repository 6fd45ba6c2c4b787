/// Region registry for the FloodGuard assessor.
///
/// Lists the flood-prone regions offered by the front end. The region label
/// is shown next to a result for context only: scoring never reads it, and
/// any non-empty label is accepted by validation. This registry exists so the
/// CLI can list the supported choices and normalise their spelling.

// ---------------------------------------------------------------------------
// Region metadata
// ---------------------------------------------------------------------------

/// A selectable region.
pub struct Region {
    /// Display name, as shown in the region picker.
    pub name: &'static str,
    /// State the region belongs to.
    pub state: &'static str,
}

/// Supported regions, in picker order.
pub static REGION_REGISTRY: &[Region] = &[
    Region {
        name: "Mumbai, Maharashtra",
        state: "Maharashtra",
    },
    Region {
        name: "Chennai, Tamil Nadu",
        state: "Tamil Nadu",
    },
    Region {
        name: "Kolkata, West Bengal",
        state: "West Bengal",
    },
    Region {
        name: "Assam",
        state: "Assam",
    },
    Region {
        name: "Bihar",
        state: "Bihar",
    },
    Region {
        name: "Kerala",
        state: "Kerala",
    },
    Region {
        name: "Odisha",
        state: "Odisha",
    },
    Region {
        name: "Uttarakhand",
        state: "Uttarakhand",
    },
    Region {
        name: "Gujarat",
        state: "Gujarat",
    },
    Region {
        name: "Andhra Pradesh",
        state: "Andhra Pradesh",
    },
];

/// Display names of every registered region, in picker order.
pub fn all_region_names() -> Vec<&'static str> {
    REGION_REGISTRY.iter().map(|r| r.name).collect()
}

/// Looks up a region by name, ignoring case and surrounding whitespace.
/// Returns `None` if not found.
pub fn find_region(name: &str) -> Option<&'static Region> {
    let wanted = name.trim();
    REGION_REGISTRY
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(wanted))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
