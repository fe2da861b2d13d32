use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub role: String,
    pub tasks: u32,
    pub rating: f64,
    pub reviews: u32,
    pub avatar: String,
    pub followed: bool,
}

/// Fixed placeholder records. There is no mentor collection in the store,
/// so the dashboard ships this configuration value instead of a query.
pub fn default_mentors() -> Vec<Mentor> {
    vec![
        Mentor {
            id: "1".to_string(),
            name: "Curious George".to_string(),
            role: "UI UX Design".to_string(),
            tasks: 40,
            rating: 4.7,
            reviews: 750,
            avatar: String::new(),
            followed: false,
        },
        Mentor {
            id: "2".to_string(),
            name: "Abraham Lincoln".to_string(),
            role: "3D Design".to_string(),
            tasks: 32,
            rating: 4.9,
            reviews: 910,
            avatar: String::new(),
            followed: true,
        },
    ]
}
