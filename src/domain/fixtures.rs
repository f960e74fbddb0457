use chrono::{Duration, NaiveDate};

use super::{Category, Entry};

pub fn entry(id: &str, title: &str, date: &str, category: Category) -> Entry {
    Entry {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("About {}", title),
        content: format!("<p>{}</p>", title),
        date: date.parse().expect("fixture date"),
        author: "AgTech Lab".to_string(),
        category,
        thumbnail: format!("images/{}.jpg", id),
        images: vec![format!("images/{}.jpg", id), format!("images/{}-2.jpg", id)],
        tags: vec!["fixture".to_string()],
        published: true,
    }
}

/// `count` published lab entries with distinct dates, oldest first.
pub fn numbered(count: usize) -> Vec<Entry> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("fixture date");
    (0..count)
        .map(|i| {
            let mut e = entry(
                &format!("entry-{:02}", i),
                &format!("Entry {:02}", i),
                "2024-01-01",
                Category::Lab,
            );
            e.date = start + Duration::days(i as i64);
            e
        })
        .collect()
}
