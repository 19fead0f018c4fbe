//! User segmentation by recency and engagement.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub last_seen_days: u32,
    pub sessions_last_30d: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Power,
    ChurnRisk,
    Casual,
    /// Engaged users that match none of the named buckets.
    Regular,
}

impl Segment {
    pub const ALL: [Self; 4] = [Self::Power, Self::Casual, Self::ChurnRisk, Self::Regular];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::ChurnRisk => "churn-risk",
            Self::Casual => "casual",
            Self::Regular => "regular",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Power => "Power users",
            Self::ChurnRisk => "Churn risk",
            Self::Casual => "Casual users",
            Self::Regular => "Regular users",
        }
    }
}

/// Selection in the segment dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentFilter {
    #[default]
    All,
    Only(Segment),
}

impl SegmentFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(segment) => segment.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All users",
            Self::Only(segment) => segment.label(),
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        if raw == "all" {
            return Some(Self::All);
        }
        Segment::ALL
            .into_iter()
            .find(|s| s.as_str() == raw)
            .map(Self::Only)
    }

    pub fn options() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(Segment::ALL.into_iter().map(Self::Only))
    }

    pub fn matches(self, segment: Segment) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == segment,
        }
    }
}

/// Rules are checked in order; the first match wins.
pub fn classify(user: &UserRow) -> Segment {
    if user.sessions_last_30d >= 25 && user.last_seen_days <= 3 {
        Segment::Power
    } else if user.sessions_last_30d <= 5 || user.last_seen_days >= 21 {
        Segment::ChurnRisk
    } else if user.sessions_last_30d <= 12 {
        Segment::Casual
    } else {
        Segment::Regular
    }
}

pub fn segment_users(users: &[UserRow], filter: SegmentFilter) -> Vec<(UserRow, Segment)> {
    users
        .iter()
        .map(|user| (user.clone(), classify(user)))
        .filter(|(_, segment)| filter.matches(*segment))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentCounts {
    pub power: usize,
    pub casual: usize,
    pub churn_risk: usize,
    pub regular: usize,
}

pub fn count_segments(users: &[UserRow]) -> SegmentCounts {
    users
        .iter()
        .fold(SegmentCounts::default(), |mut counts, user| {
            match classify(user) {
                Segment::Power => counts.power += 1,
                Segment::Casual => counts.casual += 1,
                Segment::ChurnRisk => counts.churn_risk += 1,
                Segment::Regular => counts.regular += 1,
            }
            counts
        })
}

pub fn sample_users() -> Vec<UserRow> {
    [
        (1, "Alice Brown", "alice@example.com", 1, 38),
        (2, "Michael Green", "michael@example.com", 3, 29),
        (3, "John Doe", "john@example.com", 12, 9),
        (4, "Sarah Lee", "sarah@example.com", 25, 3),
        (5, "Daniel Kim", "daniel@example.com", 5, 21),
        (6, "Emma Wilson", "emma@example.com", 18, 7),
        (7, "Oliver Jones", "oliver@example.com", 2, 33),
        (8, "Sophia Davis", "sophia@example.com", 9, 14),
    ]
    .into_iter()
    .map(|(id, name, email, last_seen_days, sessions_last_30d)| UserRow {
        id,
        name: name.to_string(),
        email: email.to_string(),
        last_seen_days,
        sessions_last_30d,
    })
    .collect()
}
