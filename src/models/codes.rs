/// A code triple with a human readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownCode {
    pub ian: &'static str,
    pub activity: &'static str,
    pub object: &'static str,
    pub description: &'static str,
}

pub const UNKNOWN: &str = "Unknown";

pub static KNOWN_CODES: [KnownCode; 5] = [
    KnownCode {
        ian: "16-041",
        activity: "7901",
        object: "0001",
        description: "DOP",
    },
    KnownCode {
        ian: "04-001",
        activity: "9007",
        object: "0007",
        description: "Annual Leave",
    },
    KnownCode {
        ian: "04-001",
        activity: "9008",
        object: "0008",
        description: "Sick Leave",
    },
    KnownCode {
        ian: "04-001",
        activity: "9010",
        object: "0010",
        description: "Bank Holiday",
    },
    KnownCode {
        ian: "04-001",
        activity: "9011",
        object: "0011",
        description: "Paid Leave of Absence",
    },
];

/// Description of a code triple, or "Unknown".
pub fn describe(ian: &str, activity: &str, object: &str) -> &'static str {
    KNOWN_CODES
        .iter()
        .find(|c| c.ian == ian && c.activity == activity && c.object == object)
        .map(|c| c.description)
        .unwrap_or(UNKNOWN)
}

/// Look a known code up by its label (case-insensitive).
pub fn find_by_description(name: &str) -> Option<&'static KnownCode> {
    let wanted = name.trim().to_lowercase();
    KNOWN_CODES
        .iter()
        .find(|c| c.description.to_lowercase() == wanted)
}
