use crate::domain::model::{Activity, Directory};

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// 內建的初始活動資料，沒有設定檔時使用
pub fn default_activities() -> Directory {
    let mut directory = Directory::new();
    directory.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    directory.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    directory.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    directory
}
