use crate::model::{NewCircle, Priority};

/// The circles a fresh session starts with when no seed file is configured.
pub fn sample_circles() -> Vec<NewCircle> {
    vec![
        NewCircle::new("A-11a", "関本健治郎", "11", "East", Priority::High),
        NewCircle::new("B-12b", "キルパクン", "12", "South", Priority::Medium),
        NewCircle::new("C-32ab", "かみみみ", "23", "West", Priority::Low),
    ]
}
