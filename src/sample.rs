use crate::events::{Category, Event};
use time::macros::date;

/// The built-in demo agenda, shown when no events file is given.
pub(crate) fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            title: "Project Kickoff Meeting".into(),
            description: "Initial meeting to discuss project goals and timeline".into(),
            date: date!(2024 - 03 - 15),
            time: "10:00 AM - 11:30 AM".into(),
            location: "Conference Room A".into(),
            category: Category::Meeting,
            attendees: vec![
                "Sarah Wilson".into(),
                "Michael Chen".into(),
                "Emily Rodriguez".into(),
            ],
            project: Some("Website Redesign".into()),
        },
        Event {
            id: 2,
            title: "Design Review".into(),
            description: "Review of new website design concepts".into(),
            date: date!(2024 - 03 - 15),
            time: "2:00 PM - 3:00 PM".into(),
            location: "Design Studio".into(),
            category: Category::Meeting,
            attendees: vec!["Sarah Wilson".into(), "David Kim".into()],
            project: Some("Website Redesign".into()),
        },
        Event {
            id: 3,
            title: "API Documentation Deadline".into(),
            description: "Final documentation for API integration".into(),
            date: date!(2024 - 03 - 16),
            time: "5:00 PM".into(),
            location: "Remote".into(),
            category: Category::Deadline,
            attendees: vec!["Michael Chen".into()],
            project: Some("API Integration".into()),
        },
        Event {
            id: 4,
            title: "User Research Milestone".into(),
            description: "Completion of initial user research phase".into(),
            date: date!(2024 - 03 - 17),
            time: "3:00 PM - 4:00 PM".into(),
            location: "Research Lab".into(),
            category: Category::Milestone,
            attendees: vec!["Emily Rodriguez".into(), "David Kim".into()],
            project: Some("User Research Study".into()),
        },
    ]
}
