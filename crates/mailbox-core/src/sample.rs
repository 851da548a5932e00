//! Demonstration mailbox contents.

use chrono::{DateTime, NaiveDate, Utc};

use crate::email::{Attachment, Email, EmailId, Folder};

/// Address the demonstration mailbox belongs to.
pub const OWNER_ADDRESS: &str = "me@example.com";

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn attachments() -> [Attachment; 6] {
    [
        Attachment::new("project-proposal.pdf", 2_500_000, "application/pdf")
            .with_url("https://example.com/files/project-proposal.pdf"),
        Attachment::new(
            "meeting-notes.docx",
            1_500_000,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        )
        .with_url("https://example.com/files/meeting-notes.docx"),
        Attachment::new(
            "presentation.pptx",
            3_500_000,
            "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        )
        .with_url("https://example.com/files/presentation.pptx"),
        Attachment::new("team-photo.jpg", 1_200_000, "image/jpeg")
            .with_url("https://images.unsplash.com/photo-1522071820081-009f0129c71c"),
        Attachment::new("design-mockups.fig", 4_500_000, "application/figma")
            .with_url("https://example.com/files/design-mockups.fig"),
        Attachment::new(
            "budget-2024.xlsx",
            1_800_000,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        )
        .with_url("https://example.com/files/budget-2024.xlsx"),
    ]
}

struct Seed {
    id: &'static str,
    from: &'static str,
    to: &'static str,
    subject: &'static str,
    body: &'static str,
    read: bool,
    starred: bool,
    date: DateTime<Utc>,
    folder: Folder,
    labels: &'static [&'static str],
    attachments: &'static [usize],
    important: bool,
}

impl Seed {
    fn into_email(self, files: &[Attachment]) -> Email {
        Email {
            id: EmailId::new(self.id),
            from: self.from.to_string(),
            to: self.to.to_string(),
            subject: self.subject.to_string(),
            body: self.body.to_string(),
            read: self.read,
            starred: self.starred,
            important: self.important.then_some(true),
            date: self.date,
            folder: self.folder,
            labels: (!self.labels.is_empty())
                .then(|| self.labels.iter().map(ToString::to_string).collect()),
            attachments: (!self.attachments.is_empty()).then(|| {
                self.attachments
                    .iter()
                    .filter_map(|&i| files.get(i).cloned())
                    .collect()
            }),
        }
    }
}

/// The demonstration mailbox: 22 emails spread over every list view.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn sample_emails() -> Vec<Email> {
    let files = attachments();
    let seeds = [
        // Inbox
        Seed {
            id: "1",
            from: "alice.johnson@example.com",
            to: OWNER_ADDRESS,
            subject: "Q1 2024 Project Roadmap and Milestones",
            body: "<h2>Q1 2024 Project Roadmap</h2><p>Hi team,</p>\
                   <p>I'm excited to share our comprehensive Q1 2024 project roadmap.</p>\
                   <h3>Key Milestones:</h3><ul><li>January: Core feature implementation</li>\
                   <li>February: Performance optimization phase</li>\
                   <li>March: User testing and feedback integration</li></ul>\
                   <p>Best regards,<br>Alice Johnson<br>Project Manager</p>",
            read: false,
            starred: true,
            date: at(2024, 3, 10, 10, 0),
            folder: Folder::Inbox,
            labels: &["Project", "Important"],
            attachments: &[0, 2],
            important: true,
        },
        Seed {
            id: "2",
            from: "bob.smith@example.com",
            to: OWNER_ADDRESS,
            subject: "Team Building Event - Next Friday",
            body: "<p>Hello everyone!</p><p>I'm thrilled to announce our upcoming team building event next Friday.</p>\
                   <ul><li>Morning: Escape Room Challenge</li><li>Lunch: Gourmet Catering</li>\
                   <li>Afternoon: Innovation Workshop</li></ul><p>Best,<br>Bob</p>",
            read: true,
            starred: false,
            date: at(2024, 3, 9, 15, 30),
            folder: Folder::Inbox,
            labels: &["Team Events"],
            attachments: &[3],
            important: false,
        },
        Seed {
            id: "3",
            from: "tech.digest@newsletter.com",
            to: OWNER_ADDRESS,
            subject: "Weekly Tech Digest: AI Breakthroughs & Industry Updates",
            body: "<h2>This Week in Tech</h2><h3>Top Stories:</h3>\
                   <ul><li>Revolutionary AI Model Achieves Human-Level Understanding</li>\
                   <li>New Framework Promises 50% Performance Boost</li></ul>",
            read: false,
            starred: false,
            date: at(2024, 3, 8, 8, 0),
            folder: Folder::Inbox,
            labels: &["Newsletter", "Tech"],
            attachments: &[1],
            important: false,
        },
        Seed {
            id: "12",
            from: "sarah.designer@example.com",
            to: OWNER_ADDRESS,
            subject: "Updated Design System Components",
            body: "<h2>Design System Updates</h2><p>Hi there,</p>\
                   <ul><li>New color palette implementation</li><li>Updated typography scale</li>\
                   <li>Added dark mode variations</li></ul><p>Best,<br>Sarah</p>",
            read: false,
            starred: true,
            date: at(2024, 3, 10, 9, 15),
            folder: Folder::Inbox,
            labels: &["Design", "Important"],
            attachments: &[4],
            important: true,
        },
        Seed {
            id: "13",
            from: "finance@example.com",
            to: OWNER_ADDRESS,
            subject: "2024 Budget Review Meeting",
            body: "<h2>Budget Review Meeting</h2><p>Dear team,</p>\
                   <p>Our quarterly budget review meeting is scheduled for next week.</p>\
                   <p>Meeting Details:<br>Date: March 15, 2024<br>Time: 2:00 PM EST</p>",
            read: false,
            starred: false,
            date: at(2024, 3, 10, 8, 30),
            folder: Folder::Inbox,
            labels: &["Work", "Important"],
            attachments: &[5],
            important: true,
        },
        Seed {
            id: "14",
            from: "recruitment@example.com",
            to: OWNER_ADDRESS,
            subject: "Interview Schedule: Senior Developer Position",
            body: "<h2>Interview Schedule Update</h2>\
                   <ul><li>9:00 AM - John Smith (Technical)</li>\
                   <li>10:30 AM - Maria Garcia (System Design)</li>\
                   <li>2:00 PM - David Chen (Culture Fit)</li></ul>",
            read: false,
            starred: false,
            date: at(2024, 3, 10, 7, 45),
            folder: Folder::Inbox,
            labels: &["Work", "Important"],
            attachments: &[0],
            important: true,
        },
        // Sent
        Seed {
            id: "4",
            from: OWNER_ADDRESS,
            to: "charlie.brown@example.com",
            subject: "Re: Design System Implementation Feedback",
            body: "<p>Charlie,</p><p>Thanks for the comprehensive design review.</p>\
                   <h3>Strengths:</h3><ul><li>Excellent color system hierarchy</li></ul>",
            read: true,
            starred: false,
            date: at(2024, 3, 7, 14, 20),
            folder: Folder::Sent,
            labels: &["Design", "Feedback"],
            attachments: &[0],
            important: false,
        },
        Seed {
            id: "5",
            from: OWNER_ADDRESS,
            to: "team@example.com",
            subject: "Sprint Planning and Resource Allocation",
            body: "<p>Team,</p><p>Following our planning session, here's the sprint breakdown:</p>\
                   <ul><li>Feature A: Authentication System Upgrade</li></ul>",
            read: true,
            starred: true,
            date: at(2024, 3, 6, 11, 45),
            folder: Folder::Sent,
            labels: &["Sprint", "Planning"],
            attachments: &[1, 2],
            important: false,
        },
        Seed {
            id: "15",
            from: OWNER_ADDRESS,
            to: "product@example.com",
            subject: "Product Roadmap Feedback",
            body: "<h2>Product Roadmap Feedback</h2><p>Hi Product Team,</p>\
                   <ul><li>Consider prioritizing the analytics dashboard</li></ul>",
            read: true,
            starred: false,
            date: at(2024, 3, 9, 16, 20),
            folder: Folder::Sent,
            labels: &["Product", "Important"],
            attachments: &[],
            important: false,
        },
        Seed {
            id: "16",
            from: OWNER_ADDRESS,
            to: "design.team@example.com",
            subject: "Design Review Meeting Notes",
            body: "<h2>Design Review Summary</h2><ul><li>New component library approved</li></ul>\
                   <p>Great work everyone!</p>",
            read: true,
            starred: true,
            date: at(2024, 3, 9, 15, 0),
            folder: Folder::Sent,
            labels: &["Design", "Team Events"],
            attachments: &[4],
            important: false,
        },
        // Drafts
        Seed {
            id: "6",
            from: OWNER_ADDRESS,
            to: "client@example.com",
            subject: "[Draft] Project Proposal: E-commerce Platform Redesign",
            body: "<p>Dear Client,</p><p>Thank you for considering us for your e-commerce platform redesign.</p>\
                   <p>[Draft - Add pricing details and timeline]</p>",
            read: true,
            starred: false,
            date: at(2024, 3, 5, 16, 30),
            folder: Folder::Drafts,
            labels: &["Client", "Proposal"],
            attachments: &[],
            important: false,
        },
        Seed {
            id: "7",
            from: OWNER_ADDRESS,
            to: "",
            subject: "[Draft] Quarterly Team Performance Review",
            body: "<h2>Q1 2024 Team Performance Review</h2><p>[Add introduction and overview]</p>",
            read: true,
            starred: false,
            date: at(2024, 3, 4, 9, 15),
            folder: Folder::Drafts,
            labels: &[],
            attachments: &[],
            important: false,
        },
        Seed {
            id: "17",
            from: OWNER_ADDRESS,
            to: "board@example.com",
            subject: "[Draft] Q1 2024 Technical Architecture Overview",
            body: "<h2>Technical Architecture Overview</h2><ul><li>Microservices Architecture</li></ul>",
            read: true,
            starred: false,
            date: at(2024, 3, 8, 11, 30),
            folder: Folder::Drafts,
            labels: &["Technical", "Important"],
            attachments: &[],
            important: false,
        },
        Seed {
            id: "18",
            from: OWNER_ADDRESS,
            to: "investors@example.com",
            subject: "[Draft] Investment Proposal: AI Integration Project",
            body: "<h2>AI Integration Project Proposal</h2><ul><li>ROI Projections</li></ul>",
            read: true,
            starred: true,
            date: at(2024, 3, 7, 14, 45),
            folder: Folder::Drafts,
            labels: &["Project", "Important"],
            attachments: &[],
            important: false,
        },
        // Trash
        Seed {
            id: "8",
            from: "marketing@example.com",
            to: OWNER_ADDRESS,
            subject: "Last Chance: Special Promotion Ends Today!",
            body: "<h2>Don't Miss Out!</h2><p>Use code SPECIAL50 for 50% off all products.</p>",
            read: true,
            starred: false,
            date: at(2024, 3, 3, 7, 30),
            folder: Folder::Trash,
            labels: &[],
            attachments: &[],
            important: false,
        },
        Seed {
            id: "9",
            from: "newsletter@example.com",
            to: OWNER_ADDRESS,
            subject: "Your February Newsletter Digest",
            body: "<h2>February Highlights</h2><ul><li>Industry trends and analysis</li></ul>",
            read: true,
            starred: false,
            date: at(2024, 3, 2, 13, 20),
            folder: Folder::Trash,
            labels: &[],
            attachments: &[],
            important: false,
        },
        Seed {
            id: "19",
            from: "old-vendor@example.com",
            to: OWNER_ADDRESS,
            subject: "Previous Contract Information",
            body: "<h2>Contract Details</h2><p>Archived contract information from 2023.</p>",
            read: true,
            starred: false,
            date: at(2024, 3, 1, 10, 15),
            folder: Folder::Trash,
            labels: &[],
            attachments: &[],
            important: false,
        },
        Seed {
            id: "20",
            from: "events@example.com",
            to: OWNER_ADDRESS,
            subject: "Past Event: Tech Conference 2023",
            body: "<h2>Tech Conference 2023</h2><p>Thank you for attending!</p>",
            read: true,
            starred: false,
            date: at(2024, 2, 28, 16, 45),
            folder: Folder::Trash,
            labels: &[],
            attachments: &[],
            important: false,
        },
        // Spam
        Seed {
            id: "10",
            from: "noreply@suspicious.com",
            to: OWNER_ADDRESS,
            subject: "Congratulations! You've Won a Prize!",
            body: "<p>Dear Lucky Winner,</p><p>Click here to claim your prize now!</p>",
            read: false,
            starred: false,
            date: at(2024, 3, 1, 5, 45),
            folder: Folder::Spam,
            labels: &[],
            attachments: &[],
            important: false,
        },
        Seed {
            id: "11",
            from: "security@fake-bank.com",
            to: OWNER_ADDRESS,
            subject: "Urgent: Your Account Needs Verification",
            body: "<p>Dear Valued Customer,</p><p>Your account has been temporarily suspended.</p>",
            read: false,
            starred: false,
            date: at(2024, 2, 29, 20, 10),
            folder: Folder::Spam,
            labels: &[],
            attachments: &[],
            important: false,
        },
        Seed {
            id: "21",
            from: "lottery@scam-example.com",
            to: OWNER_ADDRESS,
            subject: "You're Our Lucky Winner!",
            body: "<h2>Congratulations!</h2><p>You've been randomly selected to receive $5,000,000!</p>",
            read: false,
            starred: false,
            date: at(2024, 3, 9, 8, 20),
            folder: Folder::Spam,
            labels: &[],
            attachments: &[],
            important: false,
        },
        Seed {
            id: "22",
            from: "prince@foreign-example.com",
            to: OWNER_ADDRESS,
            subject: "Urgent Business Proposal",
            body: "<h2>Confidential Business Proposal</h2><p>Please respond urgently with your bank details.</p>",
            read: false,
            starred: false,
            date: at(2024, 3, 8, 12, 30),
            folder: Folder::Spam,
            labels: &[],
            attachments: &[],
            important: false,
        },
    ];

    seeds.into_iter().map(|seed| seed.into_email(&files)).collect()
}
